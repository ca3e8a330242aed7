//! Host service bundle injected into the wizard runtimes.

use std::rc::Rc;

use crate::{
    ImmediateTimerService, NoopNotificationService, NoopViewportService, NotificationService,
    TimerService, ViewportService,
};

/// Host strategy selected for the current build/runtime composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition.
    Browser,
    /// Headless composition (tests, native tooling).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// Environment-specific adapter selection happens before the bundle reaches a runtime, which
/// keeps the runtimes free of browser/native branching.
#[derive(Clone)]
pub struct HostServices {
    /// Notice delivery.
    pub notifications: Rc<dyn NotificationService>,
    /// Viewport scrolling.
    pub viewport: Rc<dyn ViewportService>,
    /// Delays for scheduled actions.
    pub timers: Rc<dyn TimerService>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Headless bundle that drops notices, ignores scrolling and never waits.
    pub fn headless() -> Self {
        Self {
            notifications: Rc::new(NoopNotificationService),
            viewport: Rc::new(NoopViewportService),
            timers: Rc::new(ImmediateTimerService),
            host_strategy: HostStrategy::Headless,
        }
    }

    /// Replaces the notification service.
    pub fn with_notifications(mut self, notifications: Rc<dyn NotificationService>) -> Self {
        self.notifications = notifications;
        self
    }

    /// Replaces the viewport service.
    pub fn with_viewport(mut self, viewport: Rc<dyn ViewportService>) -> Self {
        self.viewport = viewport;
        self
    }

    /// Replaces the timer service.
    pub fn with_timers(mut self, timers: Rc<dyn TimerService>) -> Self {
        self.timers = timers;
        self
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::headless()
    }
}
