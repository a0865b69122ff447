use super::model::{ComparisonScene, DiagramLayout, Label, Point, RoundedBox};
use super::{
    CENTER_FONT_SIZE, COMPARISON_GAP, COMPARISON_HEIGHT, COMPARISON_WIDTH, GUIDE_DASH,
    INNER_LINE_WIDTH, LABEL_FONT_SIZE, OUTER_LINE_WIDTH,
};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

/// Height reserved above each comparison scene for its heading.
pub const HEADING_HEIGHT: f64 = 28.0;

#[derive(Debug, Clone, Copy)]
enum Align {
    Start,
    Center,
    End,
}

struct BoxPainter<'a> {
    rect: &'a RoundedBox,
    stroke: Srgba<f64>,
    fill: Option<Srgba<f64>>,
    line_width: f64,
    dash: Option<&'a [f64]>,
}

impl<'a> BoxPainter<'a> {
    fn new(rect: &'a RoundedBox, stroke: Srgba<f64>, line_width: f64) -> Self {
        Self {
            rect,
            stroke,
            fill: None,
            line_width,
            dash: None,
        }
    }

    fn fill(mut self, fill: Srgba<f64>) -> Self {
        self.fill = Some(fill);
        self
    }

    fn dashed(mut self, dash: &'a [f64]) -> Self {
        self.dash = Some(dash);
        self
    }

    fn paint(&self, cr: &Context) -> Result<(), cairo::Error> {
        cr.save()?;
        self.path(cr);

        if let Some(fill) = self.fill {
            set_color(cr, fill);
            cr.fill_preserve()?;
        }

        set_color(cr, self.stroke);
        cr.set_line_width(self.line_width);
        if let Some(dash) = self.dash {
            cr.set_dash(dash, 0.0);
        }
        cr.stroke()?;
        cr.restore()
    }

    fn path(&self, cr: &Context) {
        let r = self.rect.effective_radius();
        let (x, y, s) = (self.rect.origin.x, self.rect.origin.y, self.rect.size);

        cr.new_sub_path();
        cr.arc(x + s - r, y + r, r, -PI / 2.0, 0.0);
        cr.arc(x + s - r, y + s - r, r, 0.0, PI / 2.0);
        cr.arc(x + r, y + s - r, r, PI / 2.0, PI);
        cr.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
        cr.close_path();
    }
}

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn set_font(cr: &Context, size: f64) {
    cr.select_font_face(
        "Monospace",
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );
    cr.set_font_size(size);
}

/// Draws `label` with its anchor at the text baseline, aligned horizontally.
fn draw_label(
    cr: &Context,
    label: &Label,
    align: Align,
    size: f64,
    color: Srgba<f64>,
) -> Result<(), cairo::Error> {
    set_color(cr, color);
    set_font(cr, size);

    let ext = cr.text_extents(&label.text)?;
    let x = match align {
        Align::Start => label.anchor.x,
        Align::Center => label.anchor.x - ext.width() / 2.0 - ext.x_bearing(),
        Align::End => label.anchor.x - ext.width() - ext.x_bearing(),
    };
    cr.move_to(x, label.anchor.y);
    cr.show_text(&label.text)
}

fn draw_centered(
    cr: &Context,
    label: &Label,
    size: f64,
    color: Srgba<f64>,
) -> Result<(), cairo::Error> {
    set_font(cr, size);
    let ext = cr.text_extents(&label.text)?;
    let baseline = Label {
        text: label.text.clone(),
        anchor: Point::new(label.anchor.x, label.anchor.y + ext.height() / 2.0),
    };
    draw_label(cr, &baseline, Align::Center, size, color)
}

pub fn draw_diagram(
    cr: &Context,
    layout: &DiagramLayout,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    BoxPainter::new(&layout.outer, colors.outer, OUTER_LINE_WIDTH)
        .fill(colors.outer_fill)
        .paint(cr)?;

    BoxPainter::new(&layout.inner, colors.guide, INNER_LINE_WIDTH)
        .dashed(&GUIDE_DASH)
        .paint(cr)?;

    BoxPainter::new(&layout.inner, colors.inner, INNER_LINE_WIDTH)
        .fill(colors.inner_fill)
        .paint(cr)?;

    draw_centered(cr, &layout.inner_label, CENTER_FONT_SIZE, colors.inner)?;
    draw_label(
        cr,
        &layout.outer_label,
        Align::Start,
        LABEL_FONT_SIZE,
        colors.outer,
    )?;

    // padding label hangs below the box, move the baseline down by one line
    let padding_label = Label {
        text: layout.padding_label.text.clone(),
        anchor: Point::new(
            layout.padding_label.anchor.x,
            layout.padding_label.anchor.y + LABEL_FONT_SIZE,
        ),
    };
    draw_label(
        cr,
        &padding_label,
        Align::End,
        LABEL_FONT_SIZE,
        colors.text,
    )
}

fn draw_scene(
    cr: &Context,
    scene: &ComparisonScene,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let (accent, accent_fill) = if scene.concentric {
        (colors.outer, colors.outer_fill)
    } else {
        (colors.mismatch, colors.mismatch_fill)
    };

    let heading = Label {
        text: scene.heading.to_string(),
        anchor: Point::new(COMPARISON_WIDTH / 2.0, HEADING_HEIGHT - 10.0),
    };
    draw_label(cr, &heading, Align::Center, CENTER_FONT_SIZE, colors.text)?;

    cr.save()?;
    cr.translate(0.0, HEADING_HEIGHT);

    BoxPainter::new(&scene.outer, accent, OUTER_LINE_WIDTH - 1.0)
        .fill(accent_fill)
        .paint(cr)?;
    BoxPainter::new(&scene.inner, colors.inner, INNER_LINE_WIDTH)
        .fill(colors.inner_fill)
        .paint(cr)?;

    draw_centered(cr, &scene.inner_label, LABEL_FONT_SIZE, colors.inner)?;

    let outer_label = Label {
        text: scene.outer_label.text.clone(),
        anchor: Point::new(
            scene.outer_label.anchor.x,
            scene.outer_label.anchor.y + LABEL_FONT_SIZE,
        ),
    };
    draw_label(cr, &outer_label, Align::Start, LABEL_FONT_SIZE, accent)?;

    cr.restore()
}

/// Size of the canvas `draw_comparison` needs.
pub fn comparison_size() -> (f64, f64) {
    (
        2.0 * COMPARISON_WIDTH + COMPARISON_GAP,
        COMPARISON_HEIGHT + HEADING_HEIGHT,
    )
}

/// Draws both scenes side by side, horizontally centered in `width`.
pub fn draw_comparison(
    cr: &Context,
    width: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let (needed, _) = comparison_size();
    let left = ((width - needed) / 2.0).max(0.0);

    for (i, scene) in ComparisonScene::both().iter().enumerate() {
        cr.save()?;
        cr.translate(left + i as f64 * (COMPARISON_WIDTH + COMPARISON_GAP), 0.0);
        draw_scene(cr, scene, colors)?;
        cr.restore()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;

    #[test]
    fn test_draw_diagram_onto_image_surface() {
        let layout = DiagramLayout::from(&Params::default());
        let size = layout.canvas_size as i32;
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, size, size).unwrap();
        let cr = Context::new(&surface).unwrap();

        draw_diagram(&cr, &layout, &ThemeColors::default()).unwrap();
    }

    #[test]
    fn test_draw_comparison_onto_image_surface() {
        let (w, h) = comparison_size();
        let surface =
            cairo::ImageSurface::create(cairo::Format::ARgb32, w as i32, h as i32).unwrap();
        let cr = Context::new(&surface).unwrap();

        draw_comparison(&cr, w, &ThemeColors::default()).unwrap();
    }
}
