//! Host service contracts used by the shipping wizard runtimes.
//!
//! The reducer in `shipping_core` only emits intents. This crate defines the object-safe services
//! a runtime needs to execute them (notices, viewport scrolling, delays), the [`HostServices`]
//! bundle that carries them, and no-op plus in-memory adapters for headless use and tests.
//! Browser adapters live in `shipping_runtime`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod notifications;
pub mod timers;
pub mod viewport;

pub use host::{HostServices, HostStrategy};
pub use notifications::{
    MemoryNotificationService, NoopNotificationService, NotificationFuture, NotificationService,
};
pub use timers::{ImmediateTimerService, MemoryTimerService, TimerFuture, TimerService};
pub use viewport::{MemoryViewportService, NoopViewportService, ViewportService};
