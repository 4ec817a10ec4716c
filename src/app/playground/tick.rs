use std::time::Instant;

use super::{Playground, MAX_KERNEL_DRAIN_PER_TICK};
use crate::kernel::services::ports::{EditorWidget, PreviewSurface};

impl<E: EditorWidget, P: PreviewSurface> Playground<E, P> {
    /// Called by the main loop. Returns whether anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.poll_kernel_bus();
        changed |= self.poll_refresh_deadline(now);
        changed
    }

    /// Feeds queued editor changes to the store in the order they were emitted.
    pub fn poll_kernel_bus(&mut self) -> bool {
        let mut changed = false;
        for _ in 0..MAX_KERNEL_DRAIN_PER_TICK {
            let Some(msg) = self.kernel_rx.try_next() else {
                break;
            };
            changed |= self.dispatch(msg.into_action());
        }
        changed
    }

    fn poll_refresh_deadline(&mut self, now: Instant) -> bool {
        match self.refresh_deadline {
            Some(deadline) if now >= deadline => {
                self.refresh_deadline = None;
                for editor in self.editors.iter_mut() {
                    editor.refresh_layout();
                }
                tracing::debug!("editors refreshed after layout change");
                true
            }
            _ => false,
        }
    }
}
