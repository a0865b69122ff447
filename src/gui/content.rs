//! Static reference text shown under the comparison.

pub const FORMULA: &str = "outer_radius = inner_radius + padding";

pub const WHY_IT_MATTERS: &str = "Proper radius calculations ensure visual harmony between nested elements. Without this adjustment, designs look inconsistent and unprofessional.";

pub const USE_CASES: [&str; 5] = [
    "Card layouts",
    "Button corners",
    "Form input styling",
    "Modal dialogs",
    "Navigation bars",
];

pub const AUTHOR_URL: &str = "https://x.com/arayyye";
pub const SOURCE_URL: &str = "https://github.com/ahmadrafidev/rim";

/// One `• item` per line.
pub fn bullet_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pango markup for the footer label.
pub fn footer_markup() -> String {
    format!(
        "Built by <a href=\"{}\">arayyye</a>. The source code is available on <a href=\"{}\">GitHub</a>.",
        AUTHOR_URL, SOURCE_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_list() {
        assert_eq!(bullet_list(&["a", "b"]), "• a\n• b");
        assert_eq!(bullet_list(&[]), "");
        assert_eq!(bullet_list(&USE_CASES).lines().count(), USE_CASES.len());
    }

    #[test]
    fn test_footer_links() {
        let markup = footer_markup();
        assert!(markup.starts_with("Built by <a href=\"https://x.com/arayyye\">arayyye</a>."));
        assert!(markup.contains("<a href=\"https://github.com/ahmadrafidev/rim\">GitHub</a>"));
    }
}
