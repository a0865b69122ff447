use crate::gui::diagram::{self, DiagramLayout};
use crate::gui::theme::ThemeColors;
use crate::params::Params;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("Failed to write PNG: {0}")]
    Png(#[from] cairo::IoError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the live diagram for `params` into a PNG at `path`, using the
/// light fallback palette on a white background.
pub fn export_png(params: &Params, path: &Path) -> Result<(), ExportError> {
    let layout = DiagramLayout::from(params);
    let size = layout.canvas_size.ceil() as i32;

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, size, size)?;
    {
        let cr = cairo::Context::new(&surface)?;
        cr.set_source_rgb(1.0, 1.0, 1.0);
        cr.paint()?;
        diagram::draw_diagram(&cr, &layout, &ThemeColors::default())?;
    }

    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::info!("Exported {}x{} diagram to {}", size, size, path.display());
    Ok(())
}
