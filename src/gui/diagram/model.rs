use crate::gui::diagram::{
    COMPARISON_BOX_ORIGIN, COMPARISON_BOX_SIZE, COMPARISON_LABEL_ORIGIN, COMPARISON_PADDING,
    COMPARISON_RADIUS, DIAGRAM_MARGIN, LABEL_OFFSET,
};
use crate::params::Params;
use crate::radius;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A square box with uniformly rounded corners, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedBox {
    pub origin: Point,
    pub size: f64,
    pub radius: f64,
}

impl RoundedBox {
    pub fn new(origin: Point, size: f64, radius: f64) -> Self {
        Self {
            origin,
            size: size.max(0.0),
            radius,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size / 2.0,
            self.origin.y + self.size / 2.0,
        )
    }

    /// Radius actually drawn. Like CSS, corners never overlap.
    pub fn effective_radius(&self) -> f64 {
        self.radius.clamp(0.0, self.size / 2.0)
    }

    /// Box shrunk by `inset` on every side, keeping the same center.
    pub fn inset(&self, inset: f64, radius: f64) -> Self {
        Self::new(
            Point::new(self.origin.x + inset, self.origin.y + inset),
            self.size - 2.0 * inset,
            radius,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: Point,
}

impl Label {
    fn px(value: u32, anchor: Point) -> Self {
        Self {
            text: format!("{}px", value),
            anchor,
        }
    }
}

/// Geometry of the live diagram for one parameter snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    pub canvas_size: f64,
    pub outer: RoundedBox,
    pub inner: RoundedBox,
    /// Above the outer box's top-left corner.
    pub outer_label: Label,
    /// Below the outer box's bottom-right corner, right aligned.
    pub padding_label: Label,
    /// Centered in the inner box.
    pub inner_label: Label,
}

impl DiagramLayout {
    pub fn new(outer_radius: u32, inner_radius: u32, padding: u32, dimension: u32) -> Self {
        let size = dimension as f64;
        let outer = RoundedBox::new(
            Point::new(DIAGRAM_MARGIN, DIAGRAM_MARGIN),
            size,
            outer_radius as f64,
        );
        let inner = outer.inset(padding as f64, inner_radius as f64);

        let far_edge = DIAGRAM_MARGIN + size;
        Self {
            canvas_size: size + 2.0 * DIAGRAM_MARGIN,
            outer,
            inner,
            outer_label: Label::px(
                outer_radius,
                Point::new(DIAGRAM_MARGIN, DIAGRAM_MARGIN - LABEL_OFFSET),
            ),
            padding_label: Label::px(padding, Point::new(far_edge, far_edge + LABEL_OFFSET)),
            inner_label: Label::px(inner_radius, inner.center()),
        }
    }
}

impl From<&Params> for DiagramLayout {
    fn from(params: &Params) -> Self {
        Self::new(
            params.outer_radius(),
            params.inner_radius(),
            params.padding(),
            params.dimension(),
        )
    }
}

/// One of the two fixed "wrong vs right" illustrations.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonScene {
    pub heading: &'static str,
    pub outer: RoundedBox,
    pub inner: RoundedBox,
    pub outer_label: Label,
    pub inner_label: Label,
    pub concentric: bool,
}

impl ComparisonScene {
    fn inner_box() -> RoundedBox {
        RoundedBox::new(
            COMPARISON_BOX_ORIGIN,
            COMPARISON_BOX_SIZE,
            COMPARISON_RADIUS as f64,
        )
    }

    /// Outer radius equal to the inner radius: corners visibly drift apart.
    pub fn equal_radii() -> Self {
        let inner = Self::inner_box();
        Self {
            heading: "outer r = inner r",
            outer: inner,
            inner,
            outer_label: Label::px(COMPARISON_RADIUS, COMPARISON_LABEL_ORIGIN),
            inner_label: Label::px(COMPARISON_RADIUS, inner.center()),
            concentric: false,
        }
    }

    /// Outer radius grown by the padding: corners stay concentric.
    pub fn concentric() -> Self {
        let inner = Self::inner_box();
        let padding = COMPARISON_PADDING as f64;
        let outer_radius = radius::outer_radius(COMPARISON_RADIUS, COMPARISON_PADDING);
        let outer = RoundedBox::new(
            Point::new(inner.origin.x - padding, inner.origin.y - padding),
            inner.size + 2.0 * padding,
            outer_radius as f64,
        );
        Self {
            heading: "outer r = inner r + padding",
            outer,
            inner,
            outer_label: Label::px(outer_radius, COMPARISON_LABEL_ORIGIN),
            inner_label: Label::px(COMPARISON_RADIUS, inner.center()),
            concentric: true,
        }
    }

    pub fn both() -> [Self; 2] {
        [Self::equal_radii(), Self::concentric()]
    }
}
