//! Browser adapters for the wizard host services.

use std::rc::Rc;

use shipping_host::{HostServices, HostStrategy, ViewportService};

#[derive(Debug, Clone, Copy, Default)]
/// Viewport adapter that smooth-scrolls `window` back to the top.
pub struct BrowserViewportService;

impl ViewportService for BrowserViewportService {
    fn scroll_to_top(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Service bundle for the browser entry layer.
///
/// Notices are rendered from the runtime's toast signal, so the bundle keeps the no-op
/// notification adapter.
pub fn browser_host_services() -> HostServices {
    let mut services = HostServices::headless().with_viewport(Rc::new(BrowserViewportService));
    services.host_strategy = HostStrategy::Browser;
    services
}
