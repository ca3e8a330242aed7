//! Viewport control used after stage transitions.

use std::{cell::Cell, rc::Rc};

/// Host service for viewport scrolling.
pub trait ViewportService {
    /// Scrolls the page back to the top.
    fn scroll_to_top(&self);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op viewport for hosts without a scrollable surface.
pub struct NoopViewportService;

impl ViewportService for NoopViewportService {
    fn scroll_to_top(&self) {}
}

#[derive(Debug, Clone, Default)]
/// In-memory viewport that counts scroll requests.
pub struct MemoryViewportService {
    scrolls: Rc<Cell<usize>>,
}

impl MemoryViewportService {
    /// Number of scroll-to-top requests received.
    pub fn scroll_count(&self) -> usize {
        self.scrolls.get()
    }
}

impl ViewportService for MemoryViewportService {
    fn scroll_to_top(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}
