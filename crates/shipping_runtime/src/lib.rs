//! Runtimes that execute the shipping wizard's reducer effects.
//!
//! [`ShippingProvider`] wires the reducer into a Leptos reactive context for the browser UI, and
//! [`WizardSession`] drives the same reducer headlessly through injected [`HostServices`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod browser;
mod effect_executor;
pub mod host;
pub mod runtime_context;
pub mod session;

pub use browser::{browser_host_services, BrowserViewportService};
pub use host::ShippingHostContext;
pub use runtime_context::{
    use_shipping_runtime, ShippingProvider, ShippingRuntimeContext, ToastEntry,
};
pub use session::WizardSession;
pub use shipping_host::HostServices;
