use crate::config::{PanelConfig, PanelPosition};
use crate::params::{Control, Params};
use crate::snippet::Formula;
use gtk4 as gtk;

/// Where the floating calculator sits and whether its body is shown.
/// Purely cosmetic, never touches the parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    pub position: PanelPosition,
    pub collapsed: bool,
}

impl From<&PanelConfig> for PanelState {
    fn from(cfg: &PanelConfig) -> Self {
        Self {
            position: cfg.position,
            collapsed: cfg.collapsed,
        }
    }
}

impl PanelState {
    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn halign(&self) -> gtk::Align {
        if self.position.is_left() {
            gtk::Align::Start
        } else {
            gtk::Align::End
        }
    }

    pub fn valign(&self) -> gtk::Align {
        if self.position.is_top() {
            gtk::Align::Start
        } else {
            gtk::Align::End
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.collapsed {
            "pan-down-symbolic"
        } else {
            "pan-up-symbolic"
        }
    }
}

/// Read-only "Live Calculations" block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub inner_radius: String,
    pub padding: String,
    pub outer_radius: String,
    pub formula: String,
    pub inner_at_max: bool,
    pub padding_at_max: bool,
}

impl From<&Params> for Summary {
    fn from(params: &Params) -> Self {
        let inner_at_max = params.is_at_max(Control::InnerRadius);
        let padding_at_max = params.is_at_max(Control::Padding);
        Self {
            inner_radius: with_max_marker(format!("{}px", params.inner_radius()), inner_at_max),
            padding: with_max_marker(format!("+ {}px", params.padding()), padding_at_max),
            outer_radius: format!("{}px", params.outer_radius()),
            formula: format!("Formula: {}", Formula::from(params)),
            inner_at_max,
            padding_at_max,
        }
    }
}

fn with_max_marker(text: String, at_max: bool) -> String {
    if at_max { format!("{} (max)", text) } else { text }
}

/// Value shown next to a slider's label, e.g. `16px`.
pub fn slider_value_label(params: &Params, control: Control) -> String {
    format!("{}px", params.value(control))
}

pub fn slider_note(control: Control) -> &'static str {
    match control {
        Control::InnerRadius => "Set your desired inner content radius first",
        Control::Padding => "The spacing between outer and inner elements",
        Control::Dimension => {
            "Only sizes the preview container, it does not influence the radius calculation"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_for_defaults() {
        let summary = Summary::from(&Params::default());

        assert_eq!(summary.inner_radius, "20px");
        assert_eq!(summary.padding, "+ 16px");
        assert_eq!(summary.outer_radius, "36px");
        assert_eq!(summary.formula, "Formula: 20 + 16 = 36");
        assert!(!summary.inner_at_max);
    }

    #[test]
    fn test_summary_marks_inner_radius_at_maximum() {
        let summary = Summary::from(&Params::new(50, 0, 200));

        assert!(summary.inner_at_max);
        assert_eq!(summary.inner_radius, "50px (max)");
        assert_eq!(summary.outer_radius, "50px");
        assert!(!summary.padding_at_max);
    }

    #[test]
    fn test_summary_marks_padding_at_cap() {
        let summary = Summary::from(&Params::new(10, 90, 200));
        assert!(summary.padding_at_max);
        assert_eq!(summary.padding, "+ 90px (max)");
    }

    #[test]
    fn test_panel_alignment() {
        let mut panel = PanelState::default();
        assert_eq!(panel.position, PanelPosition::BottomRight);
        assert_eq!(panel.halign(), gtk::Align::End);
        assert_eq!(panel.valign(), gtk::Align::End);

        panel.position = PanelPosition::TopLeft;
        assert_eq!(panel.halign(), gtk::Align::Start);
        assert_eq!(panel.valign(), gtk::Align::Start);

        panel.position = PanelPosition::BottomLeft;
        assert_eq!(panel.halign(), gtk::Align::Start);
        assert_eq!(panel.valign(), gtk::Align::End);
    }

    #[test]
    fn test_collapse_does_not_touch_position() {
        let mut panel = PanelState {
            position: PanelPosition::TopRight,
            collapsed: false,
        };
        panel.toggle_collapsed();
        assert!(panel.collapsed);
        assert_eq!(panel.toggle_icon(), "pan-down-symbolic");
        assert_eq!(panel.position, PanelPosition::TopRight);
        panel.toggle_collapsed();
        assert!(!panel.collapsed);
    }
}
