use crate::config::ThemePreference;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub outer: Srgba<f64>,
    pub outer_fill: Srgba<f64>,
    pub inner: Srgba<f64>,
    pub inner_fill: Srgba<f64>,
    pub mismatch: Srgba<f64>,
    pub mismatch_fill: Srgba<f64>,
    pub guide: Srgba<f64>,
    pub text: Srgba<f64>,
}

impl Default for ThemeColors {
    /// Light palette, used when no style context is around (PNG export).
    fn default() -> Self {
        Self {
            outer: Srgba::new(0.133, 0.773, 0.369, 1.0),
            outer_fill: Srgba::new(0.133, 0.773, 0.369, 0.1),
            inner: Srgba::new(0.231, 0.510, 0.965, 1.0),
            inner_fill: Srgba::new(0.231, 0.510, 0.965, 0.25),
            mismatch: Srgba::new(0.937, 0.267, 0.267, 1.0),
            mismatch_fill: Srgba::new(0.937, 0.267, 0.267, 0.1),
            guide: Srgba::new(0.612, 0.639, 0.686, 1.0),
            text: Srgba::new(0.2, 0.2, 0.2, 1.0),
        }
    }
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        let fallback = Self::default();
        Self {
            outer: Self::lookup_color(context, "success_color", fallback.outer, None),
            outer_fill: Self::lookup_color(
                context,
                "success_color",
                fallback.outer_fill,
                Some(0.1),
            ),
            inner: Self::lookup_color(context, "accent_color", fallback.inner, None),
            inner_fill: Self::lookup_color(
                context,
                "accent_bg_color",
                fallback.inner_fill,
                Some(0.25),
            ),
            mismatch: Self::lookup_color(context, "error_color", fallback.mismatch, None),
            mismatch_fill: Self::lookup_color(
                context,
                "error_color",
                fallback.mismatch_fill,
                Some(0.1),
            ),
            guide: Self::lookup_color(
                context,
                "borders",
                fallback.guide,
                Some(1.0),
            ),
            text: Self::lookup_color(context, "theme_fg_color", fallback.text, None),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

/// GTK's application dark preference, as set by `settings.ini` or
/// `GTK_THEME` before we touch it. This is read once at start-up and is not
/// the live desktop colour scheme: a desktop switching between light and dark
/// while rim runs is not followed.
pub fn platform_prefers_dark() -> bool {
    gtk::Settings::default()
        .map(|s| s.property::<bool>("gtk-application-prefer-dark-theme"))
        .unwrap_or(false)
}

/// Applies `preference`; `System` falls back to `platform_dark`, the value
/// seen at start-up.
pub fn apply_preference(preference: ThemePreference, platform_dark: bool) {
    let dark = preference.prefers_dark().unwrap_or(platform_dark);
    match gtk::Settings::default() {
        Some(settings) => {
            settings.set_gtk_application_prefer_dark_theme(dark);
            log::debug!("Theme set to {} (dark: {})", preference, dark);
        }
        None => log::warn!("No GTK settings available, ignoring theme {}", preference),
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.rim-panel {
    border-radius: 12px;
    padding: 4px;
}

.rim-summary {
    border-radius: 8px;
    padding: 8px;
    background-color: alpha(@theme_fg_color, 0.05);
}

.rim-code {
    font-family: monospace;
    font-size: 0.85em;
    border-radius: 8px;
    padding: 8px;
    color: #4ade80;
    background-color: #111827;
}

.rim-note {
    font-size: 0.8em;
    color: #d97706;
}

.rim-max {
    color: @error_color;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
