//! Notification service contracts plus no-op and in-memory adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use shipping_core::Notice;

/// Object-safe boxed future used by [`NotificationService`].
pub type NotificationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for user-visible notices.
pub trait NotificationService {
    /// Delivers one notice.
    fn notify<'a>(&'a self, notice: &'a Notice) -> NotificationFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op notification service for hosts without a notice surface.
pub struct NoopNotificationService;

impl NotificationService for NoopNotificationService {
    fn notify<'a>(&'a self, _notice: &'a Notice) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory notification service that records every delivered notice.
pub struct MemoryNotificationService {
    delivered: Rc<RefCell<Vec<Notice>>>,
}

impl MemoryNotificationService {
    /// Returns the notices delivered so far, oldest first.
    pub fn delivered(&self) -> Vec<Notice> {
        self.delivered.borrow().clone()
    }

    /// Drops all recorded notices.
    pub fn clear(&self) {
        self.delivered.borrow_mut().clear();
    }
}

impl NotificationService for MemoryNotificationService {
    fn notify<'a>(&'a self, notice: &'a Notice) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.delivered.borrow_mut().push(notice.clone());
            Ok(())
        })
    }
}
