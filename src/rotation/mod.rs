//! Rotation driver
//!
//! Advances a cursor through the symbol registry on its own period, reading
//! the cached price for the current symbol and writing a frame to the panel.
//! Never calls the fetcher; a mid-sweep or entirely failed refresh loop
//! never delays a rotation tick.

use crate::cache::PriceCache;
use crate::display::{compose_frame, Panel};
use crate::registry::SymbolRegistry;
use std::sync::Arc;
use std::time::Duration;

/// Rotates the panel through the registry, one symbol per tick
pub struct RotationDriver {
    registry: SymbolRegistry,
    cache: Arc<PriceCache>,
    panel: Arc<dyn Panel>,
    cursor: usize,
}

impl RotationDriver {
    pub fn new(registry: SymbolRegistry, cache: Arc<PriceCache>, panel: Arc<dyn Panel>) -> Self {
        Self {
            registry,
            cache,
            panel,
            cursor: 0,
        }
    }

    /// Render the symbol under the cursor, then advance (wrapping)
    ///
    /// A never-fetched symbol still gets a frame; the placeholder is the
    /// display layer's concern.
    pub async fn tick(&mut self) {
        let Some(entry) = self.registry.get(self.cursor) else {
            return;
        };

        let observation = self.cache.get(&entry.ticker).await;
        let frame = compose_frame(entry, &observation);
        self.panel.write_frame(&frame);

        self.cursor = (self.cursor + 1) % self.registry.len();
    }

    /// Run the rotation loop forever
    pub async fn run(mut self, rotation_interval: Duration) {
        let mut interval = tokio::time::interval(rotation_interval);
        loop {
            interval.tick().await;
            self.tick().await;
        }
    }
}
