//! Runtime provider and context wiring for the shipping wizard.
//!
//! This module owns the long-lived reducer container, the effect queue, and the transient toast
//! list. Rendering stays with the consuming UI crate.
#![allow(clippy::clone_on_copy)]

use leptos::*;
use shipping_core::{
    reduce_wizard, Notice, WizardAction, WizardConfig, WizardEffect, WizardState,
};
use shipping_host::HostServices;

use crate::{effect_executor, host::ShippingHostContext};

#[derive(Debug, Clone, PartialEq)]
/// One notice currently on screen.
pub struct ToastEntry {
    /// Monotonic id used to dismiss the toast.
    pub id: u64,
    /// Displayed notice.
    pub notice: Notice,
}

#[derive(Clone, Copy)]
/// Leptos context for reading wizard state and dispatching [`WizardAction`] values.
pub struct ShippingRuntimeContext {
    /// Host service bundle executing reducer effects.
    pub host: StoredValue<ShippingHostContext>,
    /// Configuration the reducer runs with.
    pub config: StoredValue<WizardConfig>,
    /// Reactive wizard state signal.
    pub state: RwSignal<WizardState>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<WizardEffect>>,
    /// Toasts on screen, oldest first.
    pub toasts: RwSignal<Vec<ToastEntry>>,
    next_toast_id: StoredValue<u64>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<WizardAction>,
}

impl ShippingRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: WizardAction) {
        self.dispatch.call(action);
    }

    /// Reactive total price of the current carrier selection.
    pub fn total_price(&self) -> f64 {
        self.state.with(WizardState::total_price)
    }

    /// Reactive submitting flag.
    pub fn is_submitting(&self) -> bool {
        self.state.with(WizardState::is_submitting)
    }

    /// Shows `notice` and removes it once the configured toast lifetime elapses.
    pub fn push_toast(&self, notice: Notice) {
        let id = self.insert_toast(notice);
        let runtime = *self;
        set_timeout(
            move || runtime.dismiss_toast(id),
            self.config.with_value(WizardConfig::toast_lifetime),
        );
    }

    /// Appends `notice` to the toast list and returns its id.
    pub fn insert_toast(&self, notice: Notice) -> u64 {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(ToastEntry { id, notice }));
        id
    }

    /// Removes a toast; unknown ids are ignored.
    pub fn dismiss_toast(&self, id: u64) {
        let present = self
            .toasts
            .with_untracked(|toasts| toasts.iter().any(|toast| toast.id == id));
        if present {
            self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        }
    }
}

fn build_runtime(host_services: HostServices, config: WizardConfig) -> ShippingRuntimeContext {
    let host = store_value(ShippingHostContext::new(host_services));
    let state = create_rw_signal(WizardState::new(&config));
    let config = store_value(config);
    let effects = create_rw_signal(Vec::<WizardEffect>::new());
    let toasts = create_rw_signal(Vec::<ToastEntry>::new());
    let next_toast_id = store_value(0_u64);

    let dispatch = Callback::new(move |action: WizardAction| {
        let mut wizard = state.get_untracked();
        let previous = wizard.clone();

        let result = config.with_value(|config| reduce_wizard(&mut wizard, config, action));
        match result {
            Ok(new_effects) => {
                if wizard != previous {
                    state.set(wizard);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("wizard reducer error: {err}"),
        }
    });

    ShippingRuntimeContext {
        host,
        config,
        state,
        effects,
        toasts,
        next_toast_id,
        dispatch,
    }
}

#[component]
/// Provides [`ShippingRuntimeContext`] to descendant components.
pub fn ShippingProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Overrides the compiled-in configuration.
    #[prop(optional)]
    config: Option<WizardConfig>,
    children: Children,
) -> impl IntoView {
    let runtime = build_runtime(host_services, config.unwrap_or_default());

    provide_context(runtime.clone());
    logging::log!(
        "shipping runtime started on {} host",
        runtime
            .host
            .with_value(|host| host.host_strategy().as_str())
    );

    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`ShippingRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShippingProvider`].
pub fn use_shipping_runtime() -> ShippingRuntimeContext {
    use_context::<ShippingRuntimeContext>().expect("ShippingRuntimeContext not provided")
}
