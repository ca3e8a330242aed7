//! Executes reducer effects against the injected host services inside the reactive runtime.

use std::time::Duration;

use leptos::{logging, set_timeout, spawn_local};
use shipping_core::{Notice, WizardEffect};
use shipping_host::{HostServices, HostStrategy};

use crate::runtime_context::ShippingRuntimeContext;

#[derive(Clone)]
/// Host service bundle used by [`crate::ShippingProvider`] to run wizard effects.
pub struct ShippingHostContext {
    services: HostServices,
}

impl ShippingHostContext {
    /// Wraps an injected service bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Strategy of the wrapped bundle.
    pub fn host_strategy(&self) -> HostStrategy {
        self.services.host_strategy
    }

    /// Executes a single [`WizardEffect`].
    ///
    /// Scheduled actions go through the reactive runtime's timeout queue rather than the
    /// bundle's timer service, so they fire on the browser event loop.
    pub fn run_effect(&self, runtime: ShippingRuntimeContext, effect: WizardEffect) {
        match effect {
            WizardEffect::Notify(notice) => self.notify(runtime, notice),
            WizardEffect::ScrollToTop => self.services.viewport.scroll_to_top(),
            WizardEffect::Schedule { delay_ms, action } => set_timeout(
                move || runtime.dispatch_action(action),
                Duration::from_millis(delay_ms),
            ),
        }
    }

    fn notify(&self, runtime: ShippingRuntimeContext, notice: Notice) {
        runtime.push_toast(notice.clone());
        let notifications = self.services.notifications.clone();
        spawn_local(async move {
            if let Err(err) = notifications.notify(&notice).await {
                logging::warn!("notice delivery failed: {err}");
            }
        });
    }
}
