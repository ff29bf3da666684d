//! Console panel driver
//!
//! Stand-in for the hardware matrix driver: logs each frame instead of
//! writing pixels. Used for development and headless runs.

use super::{Frame, Panel, PANEL_HEIGHT, PANEL_WIDTH};

pub struct ConsolePanel;

impl ConsolePanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ConsolePanel {
    fn write_frame(&self, frame: &Frame) {
        tracing::info!(
            ticker = %frame.ticker,
            class = ?frame.class,
            price = %frame.price_text,
            change = frame.change_text.as_deref().unwrap_or("n/a"),
            panel = format!("{}x{}", PANEL_WIDTH, PANEL_HEIGHT),
            "Frame"
        );
    }
}
