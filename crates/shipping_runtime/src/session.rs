//! Headless wizard session that executes reducer effects through [`HostServices`].
//!
//! Used outside a reactive UI (native tooling, tests). Scheduled actions are awaited on the
//! host timer service and dispatched in order once their delay resolves.

use std::{collections::VecDeque, time::Duration};

use leptos::logging;
use shipping_core::{reduce_wizard, WizardAction, WizardConfig, WizardEffect, WizardError, WizardState};
use shipping_host::HostServices;

type StateObserver = Box<dyn FnMut(&WizardAction, &WizardState)>;

/// Owns one wizard state and drives it through host services.
pub struct WizardSession {
    state: WizardState,
    config: WizardConfig,
    host: HostServices,
    observers: Vec<StateObserver>,
}

impl WizardSession {
    /// Creates a session in the initial state for `config`.
    pub fn new(config: WizardConfig, host: HostServices) -> Self {
        Self {
            state: WizardState::new(&config),
            config,
            host,
            observers: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Registers a callback invoked after every successfully reduced action.
    pub fn observe(&mut self, observer: impl FnMut(&WizardAction, &WizardState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Reduces one action without executing its effects.
    ///
    /// # Errors
    ///
    /// Propagates the reducer's [`WizardError`]; the state is unchanged in that case.
    pub fn dispatch(&mut self, action: WizardAction) -> Result<Vec<WizardEffect>, WizardError> {
        let effects = reduce_wizard(&mut self.state, &self.config, action.clone())?;
        for observer in &mut self.observers {
            observer(&action, &self.state);
        }
        Ok(effects)
    }

    /// Reduces `action` and executes every resulting effect, including scheduled follow-ups.
    ///
    /// Resolves once the effect queue is drained. Notice delivery failures are logged and do
    /// not stop the run.
    ///
    /// # Errors
    ///
    /// Returns the first [`WizardError`] raised by `action` or by a scheduled follow-up.
    pub async fn run(&mut self, action: WizardAction) -> Result<(), WizardError> {
        let mut pending = VecDeque::from([action]);
        while let Some(action) = pending.pop_front() {
            let effects = self.dispatch(action)?;
            for effect in effects {
                if let Some(follow_up) = self.execute(effect).await {
                    pending.push_back(follow_up);
                }
            }
        }
        Ok(())
    }

    async fn execute(&self, effect: WizardEffect) -> Option<WizardAction> {
        match effect {
            WizardEffect::Notify(notice) => {
                if let Err(err) = self.host.notifications.notify(&notice).await {
                    logging::warn!("notice delivery failed: {err}");
                }
                None
            }
            WizardEffect::ScrollToTop => {
                self.host.viewport.scroll_to_top();
                None
            }
            WizardEffect::Schedule { delay_ms, action } => {
                self.host
                    .timers
                    .sleep(Duration::from_millis(delay_ms))
                    .await;
                Some(action)
            }
        }
    }
}
