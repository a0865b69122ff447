use crate::config::ParameterConfig;
use crate::radius;
use std::ops::RangeInclusive;
use strum::{Display as StrumDisplay, EnumIter};

pub const INNER_RADIUS_RANGE: RangeInclusive<u32> = 0..=50;
pub const DIMENSION_RANGE: RangeInclusive<u32> = 100..=400;
/// Room kept free on each side of the inner box at maximum padding.
pub const PADDING_MARGIN: u32 = 10;

pub const DEFAULT_INNER_RADIUS: u32 = 20;
pub const DEFAULT_PADDING: u32 = 16;
pub const DEFAULT_DIMENSION: u32 = 200;

/// Largest padding allowed for a container of side `dimension`.
///
/// `floor(dimension / 2) - 10`, saturating at zero, so that twice the padding
/// always leaves a positive margin for the inner box.
pub fn max_padding_for(dimension: u32) -> u32 {
    (dimension / 2).saturating_sub(PADDING_MARGIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
pub enum Control {
    #[strum(serialize = "Inner Radius")]
    InnerRadius,
    #[strum(serialize = "Padding")]
    Padding,
    #[strum(serialize = "Dimension")]
    Dimension,
}

/// The three slider values. The outer radius and padding cap are derived on
/// demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    inner_radius: u32,
    padding: u32,
    dimension: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            inner_radius: DEFAULT_INNER_RADIUS,
            padding: DEFAULT_PADDING,
            dimension: DEFAULT_DIMENSION,
        }
    }
}

impl Params {
    /// Builds a state from untrusted start values (config file, command line),
    /// clamping each one into its slider range.
    pub fn new(inner_radius: u32, padding: u32, dimension: u32) -> Self {
        let mut params = Self::default();
        // dimension first, the padding cap depends on it
        params.set_dimension(clamp_to(dimension, &DIMENSION_RANGE));
        params.set_inner_radius(clamp_to(inner_radius, &INNER_RADIUS_RANGE));
        params.set_padding(padding);
        params
    }

    pub fn from_config(cfg: &ParameterConfig) -> Self {
        Self::new(cfg.inner_radius, cfg.padding, cfg.dimension)
    }

    pub fn inner_radius(&self) -> u32 {
        self.inner_radius
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    pub fn outer_radius(&self) -> u32 {
        radius::outer_radius(self.inner_radius, self.padding)
    }

    pub fn max_padding(&self) -> u32 {
        max_padding_for(self.dimension)
    }

    /// The slider keeps `value` inside [`INNER_RADIUS_RANGE`].
    pub fn set_inner_radius(&mut self, value: u32) {
        self.inner_radius = value;
    }

    pub fn set_padding(&mut self, value: u32) {
        let max = self.max_padding();
        if value > max {
            log::debug!("Padding {} exceeds cap {}, clamping", value, max);
        }
        self.padding = value.min(max);
    }

    /// Updates the container side, then pulls padding back under the new cap.
    /// The slider keeps `value` inside [`DIMENSION_RANGE`].
    pub fn set_dimension(&mut self, value: u32) {
        self.dimension = value;

        let max = self.max_padding();
        if self.padding > max {
            log::debug!(
                "Dimension {} lowers padding cap to {}, clamping padding {}",
                self.dimension,
                max,
                self.padding
            );
            self.padding = max;
        }
    }

    pub fn set(&mut self, control: Control, value: u32) {
        match control {
            Control::InnerRadius => self.set_inner_radius(value),
            Control::Padding => self.set_padding(value),
            Control::Dimension => self.set_dimension(value),
        }
    }

    pub fn value(&self, control: Control) -> u32 {
        match control {
            Control::InnerRadius => self.inner_radius,
            Control::Padding => self.padding,
            Control::Dimension => self.dimension,
        }
    }

    /// Inclusive slider bounds for `control` in the current state.
    pub fn bounds(&self, control: Control) -> (u32, u32) {
        match control {
            Control::InnerRadius => (*INNER_RADIUS_RANGE.start(), *INNER_RADIUS_RANGE.end()),
            Control::Padding => (0, self.max_padding()),
            Control::Dimension => (*DIMENSION_RANGE.start(), *DIMENSION_RANGE.end()),
        }
    }

    pub fn is_at_max(&self, control: Control) -> bool {
        self.value(control) >= self.bounds(control).1
    }
}

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn assert_invariants(p: &Params) {
        assert_eq!(p.outer_radius(), p.inner_radius() + p.padding());
        assert!(p.padding() <= p.max_padding());
    }

    #[test]
    fn test_defaults() {
        let p = Params::default();
        assert_eq!(p.inner_radius(), 20);
        assert_eq!(p.padding(), 16);
        assert_eq!(p.dimension(), 200);
        assert_eq!(p.outer_radius(), 36);
    }

    #[test]
    fn test_zero_radius_and_padding() {
        let p = Params::new(0, 0, 200);
        assert_eq!(p.outer_radius(), 0);
    }

    #[test]
    fn test_padding_request_above_cap_is_clamped() {
        let mut p = Params::new(20, 16, 200);
        assert_eq!(p.max_padding(), 90);
        p.set_padding(95);
        assert_eq!(p.padding(), 90);
        assert_eq!(p.outer_radius(), 110);
    }

    #[test]
    fn test_shrinking_dimension_clamps_padding() {
        let mut p = Params::new(20, 40, 250);
        assert_eq!(p.padding(), 40);

        p.set_dimension(100);
        assert_eq!(p.max_padding(), 40);
        assert_eq!(p.padding(), 40);

        p.set_dimension(90);
        assert_eq!(p.max_padding(), 35);
        assert_eq!(p.padding(), 35);
        assert_eq!(p.outer_radius(), 20 + 35);
    }

    #[test]
    fn test_cap_below_current_padding() {
        let mut p = Params::new(12, 80, 400);
        p.set_dimension(180);
        assert_eq!(p.max_padding(), 80);
        assert_eq!(p.padding(), 80);

        p.set_dimension(170);
        assert_eq!(p.padding(), 75);
        assert_eq!(p.outer_radius(), 12 + 75);
    }

    #[test]
    fn test_growing_dimension_keeps_padding() {
        let mut p = Params::new(20, 40, 100);
        p.set_dimension(400);
        assert_eq!(p.padding(), 40);
        assert_eq!(p.max_padding(), 190);
    }

    #[test]
    fn test_max_padding_is_monotonic_and_leaves_margin() {
        let mut prev = 0;
        for d in 0..=400 {
            let max = max_padding_for(d);
            assert!(max >= prev, "cap decreased at dimension {}", d);
            prev = max;
        }
        for d in DIMENSION_RANGE {
            let max = max_padding_for(d);
            assert!(d - 2 * max >= 2 * PADDING_MARGIN);
            assert_eq!(max, d.saturating_sub(20) / 2);
        }
        assert_eq!(max_padding_for(90), 35);
        assert_eq!(max_padding_for(0), 0);
        assert_eq!(max_padding_for(15), 0);
    }

    #[test]
    fn test_inner_radius_at_maximum() {
        let p = Params::new(50, 0, 200);
        assert_eq!(p.outer_radius(), 50);
        assert!(p.is_at_max(Control::InnerRadius));
        assert!(!p.is_at_max(Control::Padding));
    }

    #[test]
    fn test_out_of_range_start_values_are_clamped() {
        let p = Params::new(80, 500, 1000);
        assert_eq!(p.inner_radius(), 50);
        assert_eq!(p.dimension(), 400);
        assert_eq!(p.padding(), 190);
    }

    #[test]
    fn test_invariants_hold_after_every_setter() {
        let mut p = Params::default();
        let steps = [
            (Control::Dimension, 400),
            (Control::Padding, 190),
            (Control::InnerRadius, 50),
            (Control::Dimension, 123),
            (Control::Padding, 7),
            (Control::Dimension, 100),
            (Control::InnerRadius, 0),
            (Control::Padding, 1000),
        ];
        for (control, value) in steps {
            p.set(control, value);
            assert_invariants(&p);
        }
    }

    #[test]
    fn test_bounds_contain_value() {
        let p = Params::new(33, 60, 321);
        for control in Control::iter() {
            let (min, max) = p.bounds(control);
            let v = p.value(control);
            assert!(min <= v && v <= max, "{} out of bounds", control);
        }
    }
}
