//! Drains the reducer's effect queue inside the reactive runtime.

use leptos::*;

use crate::runtime_context::ShippingRuntimeContext;

/// Runs queued [`shipping_core::WizardEffect`] values as soon as the queue signal changes.
pub(crate) fn install(runtime: ShippingRuntimeContext) {
    create_effect(move |_| {
        let batch = runtime.effects.get();
        if batch.is_empty() {
            return;
        }

        // Scheduled follow-ups dispatched while this batch runs must queue behind it.
        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        batch
            .into_iter()
            .for_each(|effect| host.run_effect(runtime, effect));
    });
}
