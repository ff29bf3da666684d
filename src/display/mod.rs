//! Display boundary
//!
//! Composes (symbol, cached observation) into a frame and hands it to the
//! panel driver. The physical matrix driver is an external collaborator;
//! anything implementing [`Panel`] can sit on the other side.

mod console;
mod frame;

pub use console::ConsolePanel;
pub use frame::{compose_frame, format_change, format_price, Frame, PLACEHOLDER};

/// Panel resolution in pixels
pub const PANEL_WIDTH: u32 = 64;
pub const PANEL_HEIGHT: u32 = 32;

/// Trait for panel driver implementations
///
/// Frame writes are synchronous and assumed to always succeed once handed
/// valid content.
pub trait Panel: Send + Sync {
    fn write_frame(&self, frame: &Frame);
}
