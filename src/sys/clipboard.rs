use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;

/// Puts `text` on the default display's clipboard. Failures are only logged.
pub fn copy_text(text: &str) {
    match gdk::Display::default() {
        Some(display) => {
            display.clipboard().set_text(text);
            log::debug!("Copied {} bytes to clipboard", text.len());
        }
        None => log::error!("Failed to copy to clipboard: no display"),
    }
}
