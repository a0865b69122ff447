pub mod model;
pub mod view;

pub use model::{ComparisonScene, DiagramLayout, Label, Point, RoundedBox};
pub use view::{comparison_size, draw_comparison, draw_diagram};

/// Space around the outer box for the radius and padding labels.
pub const DIAGRAM_MARGIN: f64 = 50.0;
pub const LABEL_OFFSET: f64 = 8.0;

pub const COMPARISON_WIDTH: f64 = 250.0;
pub const COMPARISON_HEIGHT: f64 = 160.0;
pub const COMPARISON_RADIUS: u32 = 20;
pub const COMPARISON_PADDING: u32 = 8;
pub const COMPARISON_BOX_SIZE: f64 = 100.0;
pub const COMPARISON_BOX_ORIGIN: Point = Point::new(75.0, 30.0);
pub const COMPARISON_LABEL_ORIGIN: Point = Point::new(80.0, 8.0);
pub const COMPARISON_GAP: f64 = 24.0;

pub const OUTER_LINE_WIDTH: f64 = 4.0;
pub const INNER_LINE_WIDTH: f64 = 2.0;
pub const GUIDE_DASH: [f64; 2] = [6.0, 4.0];
pub const LABEL_FONT_SIZE: f64 = 12.0;
pub const CENTER_FONT_SIZE: f64 = 14.0;
