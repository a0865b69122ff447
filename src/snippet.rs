use crate::params::Params;
use derive_more::Display;
use std::fmt;

/// The `i + p = o` line shown under the live calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{inner_radius} + {padding} = {outer_radius}")]
pub struct Formula {
    pub inner_radius: u32,
    pub padding: u32,
    pub outer_radius: u32,
}

impl From<&Params> for Formula {
    fn from(params: &Params) -> Self {
        Self {
            inner_radius: params.inner_radius(),
            padding: params.padding(),
            outer_radius: params.outer_radius(),
        }
    }
}

/// CSS for an outer container and its inner content, ready to paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSnippet {
    pub dimension: u32,
    pub outer_radius: u32,
    pub inner_radius: u32,
    pub padding: u32,
}

impl From<&Params> for StyleSnippet {
    fn from(params: &Params) -> Self {
        Self {
            dimension: params.dimension(),
            outer_radius: params.outer_radius(),
            inner_radius: params.inner_radius(),
            padding: params.padding(),
        }
    }
}

impl fmt::Display for StyleSnippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            dimension,
            outer_radius,
            inner_radius,
            padding,
        } = self;

        writeln!(f, ".outer-container {{")?;
        writeln!(f, "  width: {dimension}px;")?;
        writeln!(f, "  height: {dimension}px;")?;
        writeln!(
            f,
            "  border-radius: {outer_radius}px; /* {inner_radius}px + {padding}px */"
        )?;
        writeln!(f, "  padding: {padding}px;")?;
        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(f, ".inner-content {{")?;
        writeln!(f, "  border-radius: {inner_radius}px;")?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snippet_is_byte_exact() {
        let snippet = StyleSnippet::from(&Params::default());
        let expected = "\
.outer-container {
  width: 200px;
  height: 200px;
  border-radius: 36px; /* 20px + 16px */
  padding: 16px;
}

.inner-content {
  border-radius: 20px;
}";
        assert_eq!(snippet.to_string(), expected);
    }

    #[test]
    fn test_snippet_follows_params() {
        let mut params = Params::new(50, 0, 320);
        params.set_padding(24);
        let text = StyleSnippet::from(&params).to_string();

        assert!(text.contains("  width: 320px;\n  height: 320px;\n"));
        assert!(text.contains("  border-radius: 74px; /* 50px + 24px */\n"));
        assert!(text.contains("  padding: 24px;\n"));
        assert!(text.ends_with(".inner-content {\n  border-radius: 50px;\n}"));
    }

    #[test]
    fn test_formula_line() {
        let formula = Formula::from(&Params::default());
        assert_eq!(formula.to_string(), "20 + 16 = 36");

        let formula = Formula::from(&Params::new(0, 0, 100));
        assert_eq!(formula.to_string(), "0 + 0 = 0");
    }
}
