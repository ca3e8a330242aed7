//! Reducer actions, side-effect intents, and transition logic for the order wizard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    carriers::{delivery_code, DeliveryMode},
    config::WizardConfig,
    input::normalize_field_input,
    model::{OrderDraft, OrderField, Page},
    notice::Notice,
    shipments::{shipment_by_id, ShipmentRecord},
    stage::WizardStage,
    validation::{validate_payment, validate_stage},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Progress of the simulated payment.
pub enum SubmissionPhase {
    /// Nothing submitted.
    #[default]
    Idle,
    /// Payment accepted, waiting out the processing delay.
    Processing,
    /// Success shown, waiting out the redirect delay.
    Redirecting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Whole-app state owned by the wizard controller.
pub struct WizardState {
    /// Active top-level page.
    pub page: Page,
    /// Whether the welcome screen still covers the wizard.
    pub show_welcome: bool,
    /// Active wizard stage.
    pub stage: WizardStage,
    /// Order being collected.
    pub draft: OrderDraft,
    /// Simulated payment progress.
    pub submission: SubmissionPhase,
    /// History record opened in the details view.
    pub open_shipment: Option<String>,
}

impl WizardState {
    /// Fresh state for a new session.
    pub fn new(config: &WizardConfig) -> Self {
        Self {
            page: Page::Create,
            show_welcome: config.show_welcome,
            stage: WizardStage::FIRST,
            draft: OrderDraft::default(),
            submission: SubmissionPhase::Idle,
            open_shipment: None,
        }
    }

    /// Whether the payment is being processed (the "submitting" flag).
    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionPhase::Processing
    }

    /// Total price of the draft's carrier selection.
    pub fn total_price(&self) -> f64 {
        self.draft.total_price()
    }

    /// History record currently opened in the details view.
    pub fn opened_shipment(&self) -> Option<&'static ShipmentRecord> {
        self.open_shipment.as_deref().and_then(shipment_by_id)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(&WizardConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Actions accepted by [`reduce_wizard`] to mutate [`WizardState`].
pub enum WizardAction {
    /// Dismiss the welcome screen and start at the first stage.
    StartWizard,
    /// Replace one draft field with user input.
    UpdateField {
        /// Field being edited.
        field: OrderField,
        /// Raw input; card fields are masked before storing.
        value: String,
    },
    /// Select a carrier's delivery option.
    SelectDelivery {
        /// Carrier id from the catalog.
        carrier_id: String,
        /// Pickup or home delivery.
        mode: DeliveryMode,
    },
    /// Advance one stage if the current stage validates.
    NextStage,
    /// Go back one stage without validation.
    PreviousStage,
    /// Jump from the summary to an earlier stage for editing.
    EditStage {
        /// Target stage.
        stage: WizardStage,
    },
    /// Start the simulated payment.
    SubmitPayment,
    /// Processing delay elapsed.
    PaymentProcessed,
    /// Redirect delay elapsed; reset and show the history.
    FinishSubmission,
    /// Switch the top-level page.
    SwitchPage {
        /// Page to show.
        page: Page,
    },
    /// Open one history record in the details view.
    OpenShipment {
        /// Fixture id.
        shipment_id: String,
    },
    /// Return from the details view to the history list.
    CloseShipment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Side-effect intents emitted by [`reduce_wizard`] for the runtime to execute.
pub enum WizardEffect {
    /// Show a transient notice.
    Notify(Notice),
    /// Scroll the viewport back to the top after a stage change.
    ScrollToTop,
    /// Dispatch `action` once `delay_ms` has elapsed.
    Schedule {
        /// Delay before dispatching.
        delay_ms: u64,
        /// Action to dispatch.
        action: WizardAction,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that make no sense in the current state.
///
/// The state is left untouched whenever one is returned.
pub enum WizardError {
    /// Already on the last stage.
    #[error("no stage after {0}")]
    NoNextStage(WizardStage),
    /// Already on the first stage.
    #[error("no stage before {0}")]
    NoPreviousStage(WizardStage),
    /// The action belongs to another stage.
    #[error("action requires stage {expected}, wizard is at {actual}")]
    UnexpectedStage {
        /// Stage the action needs.
        expected: WizardStage,
        /// Current stage.
        actual: WizardStage,
    },
    /// The summary cannot jump to this stage.
    #[error("stage {0} cannot be edited from the summary")]
    NotEditable(WizardStage),
    /// A payment is already being simulated.
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    /// A submission timer fired out of order.
    #[error("no submission in phase {0:?}")]
    NoSubmissionInFlight(SubmissionPhase),
    /// No history record with that id.
    #[error("shipment `{0}` not found")]
    ShipmentNotFound(String),
    /// No carrier with that id.
    #[error("unknown carrier `{0}`")]
    UnknownCarrier(String),
}

fn require_stage(state: &WizardState, expected: WizardStage) -> Result<(), WizardError> {
    if state.stage == expected {
        Ok(())
    } else {
        Err(WizardError::UnexpectedStage {
            expected,
            actual: state.stage,
        })
    }
}

fn require_phase(state: &WizardState, expected: SubmissionPhase) -> Result<(), WizardError> {
    if state.submission == expected {
        Ok(())
    } else {
        Err(WizardError::NoSubmissionInFlight(state.submission))
    }
}

/// Applies a [`WizardAction`] to the wizard state and collects resulting side effects.
///
/// Validation failures are not errors: they leave the state unchanged and yield a single
/// [`WizardEffect::Notify`] with a destructive notice.
///
/// # Errors
///
/// Returns a [`WizardError`] when the action is not applicable in the current state.
pub fn reduce_wizard(
    state: &mut WizardState,
    config: &WizardConfig,
    action: WizardAction,
) -> Result<Vec<WizardEffect>, WizardError> {
    let mut effects = Vec::new();
    match action {
        WizardAction::StartWizard => {
            state.show_welcome = false;
            state.stage = WizardStage::FIRST;
            effects.push(WizardEffect::ScrollToTop);
        }
        WizardAction::UpdateField { field, value } => {
            state.draft.set(field, normalize_field_input(field, value));
        }
        WizardAction::SelectDelivery { carrier_id, mode } => {
            let code = delivery_code(&carrier_id, mode)
                .ok_or(WizardError::UnknownCarrier(carrier_id))?;
            state.draft.carrier = code.to_string();
        }
        WizardAction::NextStage => {
            let next = state
                .stage
                .next()
                .ok_or(WizardError::NoNextStage(state.stage))?;
            match validate_stage(state.stage, &state.draft) {
                Ok(()) => {
                    state.stage = next;
                    effects.push(WizardEffect::ScrollToTop);
                }
                Err(failure) => effects.push(WizardEffect::Notify(failure.notice())),
            }
        }
        WizardAction::PreviousStage => {
            state.stage = state
                .stage
                .previous()
                .ok_or(WizardError::NoPreviousStage(state.stage))?;
            effects.push(WizardEffect::ScrollToTop);
        }
        WizardAction::EditStage { stage } => {
            require_stage(state, WizardStage::Summary)?;
            if !stage.is_editable_from_summary() {
                return Err(WizardError::NotEditable(stage));
            }
            state.stage = stage;
            effects.push(WizardEffect::ScrollToTop);
        }
        WizardAction::SubmitPayment => {
            require_stage(state, WizardStage::Payment)?;
            if state.submission != SubmissionPhase::Idle {
                return Err(WizardError::SubmissionInFlight);
            }
            match validate_payment(&state.draft) {
                Ok(()) => {
                    state.submission = SubmissionPhase::Processing;
                    effects.push(WizardEffect::Schedule {
                        delay_ms: config.processing_delay_ms,
                        action: WizardAction::PaymentProcessed,
                    });
                }
                Err(failure) => effects.push(WizardEffect::Notify(failure.notice())),
            }
        }
        WizardAction::PaymentProcessed => {
            require_phase(state, SubmissionPhase::Processing)?;
            state.submission = SubmissionPhase::Redirecting;
            effects.push(WizardEffect::Notify(Notice::shipment_created()));
            effects.push(WizardEffect::Schedule {
                delay_ms: config.redirect_delay_ms,
                action: WizardAction::FinishSubmission,
            });
        }
        WizardAction::FinishSubmission => {
            require_phase(state, SubmissionPhase::Redirecting)?;
            state.submission = SubmissionPhase::Idle;
            state.draft = OrderDraft::default();
            state.stage = WizardStage::FIRST;
            state.page = Page::Shipments;
            state.open_shipment = None;
        }
        WizardAction::SwitchPage { page } => {
            state.page = page;
            state.open_shipment = None;
        }
        WizardAction::OpenShipment { shipment_id } => {
            if shipment_by_id(&shipment_id).is_none() {
                return Err(WizardError::ShipmentNotFound(shipment_id));
            }
            state.page = Page::Shipments;
            state.open_shipment = Some(shipment_id);
            effects.push(WizardEffect::ScrollToTop);
        }
        WizardAction::CloseShipment => {
            state.open_shipment = None;
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{notice::NoticeVariant, validation::ValidationFailure};

    fn reduce(state: &mut WizardState, action: WizardAction) -> Vec<WizardEffect> {
        reduce_wizard(state, &WizardConfig::default(), action).expect("reduce")
    }

    fn started() -> WizardState {
        let mut state = WizardState::default();
        reduce(&mut state, WizardAction::StartWizard);
        state
    }

    fn set(state: &mut WizardState, field: OrderField, value: &str) {
        reduce(
            state,
            WizardAction::UpdateField {
                field,
                value: value.to_string(),
            },
        );
    }

    fn at_stage(stage: WizardStage) -> WizardState {
        let mut state = started();
        set(&mut state, OrderField::Carrier, "7");
        while state.stage < stage {
            let effects = reduce(&mut state, WizardAction::NextStage);
            assert_eq!(effects, vec![WizardEffect::ScrollToTop]);
        }
        assert_eq!(state.stage, stage);
        state
    }

    fn notice_of(effects: &[WizardEffect]) -> &Notice {
        match effects {
            [WizardEffect::Notify(notice)] => notice,
            other => panic!("expected a single notice, got {other:?}"),
        }
    }

    #[test]
    fn new_state_opens_on_welcome_screen() {
        let state = WizardState::default();
        assert!(state.show_welcome);
        assert_eq!(state.page, Page::Create);
        assert_eq!(state.stage, WizardStage::Sender);
        assert!(!state.is_submitting());

        let state = started();
        assert!(!state.show_welcome);
    }

    #[test]
    fn blank_required_fields_block_advancing() {
        let cases = [
            (WizardStage::Sender, OrderField::SenderDistrict),
            (WizardStage::Receiver, OrderField::ReceiverName),
            (WizardStage::Package, OrderField::ShipmentWeight),
            (WizardStage::Carrier, OrderField::Carrier),
        ];
        for (stage, field) in cases {
            let mut state = at_stage(stage);
            set(&mut state, field, "  ");
            if field == OrderField::Carrier {
                set(&mut state, field, "");
            }
            let before = state.clone();

            let effects = reduce(&mut state, WizardAction::NextStage);
            let notice = notice_of(&effects);
            assert_eq!(notice.variant, NoticeVariant::Destructive);
            assert_eq!(state, before, "{stage}");
        }
    }

    #[test]
    fn invalid_phone_blocks_sender_and_receiver() {
        let mut state = started();
        set(&mut state, OrderField::SenderPhone, "123456789");
        let effects = reduce(&mut state, WizardAction::NextStage);
        assert_eq!(notice_of(&effects), &ValidationFailure::SenderPhoneInvalid.notice());
        assert_eq!(state.stage, WizardStage::Sender);

        set(&mut state, OrderField::SenderPhone, "0512345678");
        reduce(&mut state, WizardAction::NextStage);
        assert_eq!(state.stage, WizardStage::Receiver);

        set(&mut state, OrderField::ReceiverPhone, "0912345678");
        let effects = reduce(&mut state, WizardAction::NextStage);
        assert_eq!(
            notice_of(&effects),
            &ValidationFailure::ReceiverPhoneInvalid.notice()
        );
        assert_eq!(state.stage, WizardStage::Receiver);
    }

    #[test]
    fn selecting_delivery_sets_fixed_total() {
        let mut state = at_stage(WizardStage::Carrier);
        reduce(
            &mut state,
            WizardAction::SelectDelivery {
                carrier_id: "smsa".to_string(),
                mode: DeliveryMode::Delivery,
            },
        );
        assert_eq!(state.draft.carrier, "7");
        assert_eq!(state.total_price(), 25.0);

        reduce(
            &mut state,
            WizardAction::SelectDelivery {
                carrier_id: "smsa".to_string(),
                mode: DeliveryMode::Pickup,
            },
        );
        assert_eq!(state.draft.carrier, "16");
        assert_eq!(state.total_price(), 24.0);

        let err = reduce_wizard(
            &mut state,
            &WizardConfig::default(),
            WizardAction::SelectDelivery {
                carrier_id: "dhl".to_string(),
                mode: DeliveryMode::Pickup,
            },
        )
        .expect_err("unknown carrier");
        assert_eq!(err, WizardError::UnknownCarrier("dhl".to_string()));
        assert_eq!(state.draft.carrier, "16");
    }

    #[test]
    fn previous_stage_ignores_validation() {
        for stage in WizardStage::ORDER.into_iter().skip(1) {
            let mut state = at_stage(stage);
            state.draft = OrderDraft::blank();
            let effects = reduce(&mut state, WizardAction::PreviousStage);
            assert_eq!(effects, vec![WizardEffect::ScrollToTop]);
            assert_eq!(state.stage.next(), Some(stage));
        }
    }

    #[test]
    fn boundary_moves_are_rejected_without_change() {
        let config = WizardConfig::default();
        let mut state = started();
        let before = state.clone();
        assert_eq!(
            reduce_wizard(&mut state, &config, WizardAction::PreviousStage),
            Err(WizardError::NoPreviousStage(WizardStage::Sender))
        );
        assert_eq!(state, before);

        let mut state = at_stage(WizardStage::Payment);
        assert_eq!(
            reduce_wizard(&mut state, &config, WizardAction::NextStage),
            Err(WizardError::NoNextStage(WizardStage::Payment))
        );
        assert_eq!(state.stage, WizardStage::Payment);
    }

    #[test]
    fn summary_edit_round_trip_preserves_draft() {
        for target in [
            WizardStage::Sender,
            WizardStage::Receiver,
            WizardStage::Package,
            WizardStage::Carrier,
        ] {
            let mut state = at_stage(WizardStage::Summary);
            let draft = state.draft.clone();

            let effects = reduce(&mut state, WizardAction::EditStage { stage: target });
            assert_eq!(effects, vec![WizardEffect::ScrollToTop]);
            assert_eq!(state.stage, target);

            while state.stage < WizardStage::Summary {
                reduce(&mut state, WizardAction::NextStage);
            }
            assert_eq!(state.stage, WizardStage::Summary);
            assert_eq!(state.draft, draft);
        }
    }

    #[test]
    fn edit_jump_bypasses_validation_until_moving_forward() {
        let mut state = at_stage(WizardStage::Summary);
        state.draft.receiver_city.clear();

        reduce(
            &mut state,
            WizardAction::EditStage {
                stage: WizardStage::Sender,
            },
        );
        assert_eq!(state.stage, WizardStage::Sender);
        reduce(&mut state, WizardAction::NextStage);
        assert_eq!(state.stage, WizardStage::Receiver);
        let effects = reduce(&mut state, WizardAction::NextStage);
        assert_eq!(
            notice_of(&effects),
            &ValidationFailure::ReceiverIncomplete.notice()
        );
        assert_eq!(state.stage, WizardStage::Receiver);
    }

    #[test]
    fn edit_is_only_offered_from_summary_to_earlier_stages() {
        let config = WizardConfig::default();
        let mut state = at_stage(WizardStage::Package);
        assert_eq!(
            reduce_wizard(
                &mut state,
                &config,
                WizardAction::EditStage {
                    stage: WizardStage::Sender
                }
            ),
            Err(WizardError::UnexpectedStage {
                expected: WizardStage::Summary,
                actual: WizardStage::Package,
            })
        );

        let mut state = at_stage(WizardStage::Summary);
        assert_eq!(
            reduce_wizard(
                &mut state,
                &config,
                WizardAction::EditStage {
                    stage: WizardStage::Payment
                }
            ),
            Err(WizardError::NotEditable(WizardStage::Payment))
        );
        assert_eq!(state.stage, WizardStage::Summary);
    }

    #[test]
    fn submission_runs_processing_then_redirect() {
        let config = WizardConfig::default();
        let mut state = at_stage(WizardStage::Payment);
        set(&mut state, OrderField::SenderName, "Edited sender");

        let effects = reduce(&mut state, WizardAction::SubmitPayment);
        assert!(state.is_submitting());
        assert_eq!(
            effects,
            vec![WizardEffect::Schedule {
                delay_ms: config.processing_delay_ms,
                action: WizardAction::PaymentProcessed,
            }]
        );

        let effects = reduce(&mut state, WizardAction::PaymentProcessed);
        assert!(!state.is_submitting());
        assert_eq!(state.submission, SubmissionPhase::Redirecting);
        assert_eq!(
            effects,
            vec![
                WizardEffect::Notify(Notice::shipment_created()),
                WizardEffect::Schedule {
                    delay_ms: config.redirect_delay_ms,
                    action: WizardAction::FinishSubmission,
                },
            ]
        );
        assert_eq!(state.draft.sender_name, "Edited sender");
        assert_eq!(state.page, Page::Create);

        let effects = reduce(&mut state, WizardAction::FinishSubmission);
        assert!(effects.is_empty());
        assert_eq!(state.draft, OrderDraft::default());
        assert_eq!(state.stage, WizardStage::Sender);
        assert_eq!(state.page, Page::Shipments);
        assert_eq!(state.submission, SubmissionPhase::Idle);
    }

    #[test]
    fn submission_with_blank_card_only_notifies() {
        let mut state = at_stage(WizardStage::Payment);
        set(&mut state, OrderField::CardExpiry, "");
        let before = state.clone();

        let effects = reduce(&mut state, WizardAction::SubmitPayment);
        assert_eq!(notice_of(&effects), &ValidationFailure::CardIncomplete.notice());
        assert_eq!(state, before);
    }

    #[test]
    fn duplicate_or_out_of_order_submission_steps_are_rejected() {
        let config = WizardConfig::default();
        let mut state = at_stage(WizardStage::Summary);
        assert_eq!(
            reduce_wizard(&mut state, &config, WizardAction::SubmitPayment),
            Err(WizardError::UnexpectedStage {
                expected: WizardStage::Payment,
                actual: WizardStage::Summary,
            })
        );

        let mut state = at_stage(WizardStage::Payment);
        assert_eq!(
            reduce_wizard(&mut state, &config, WizardAction::FinishSubmission),
            Err(WizardError::NoSubmissionInFlight(SubmissionPhase::Idle))
        );
        reduce(&mut state, WizardAction::SubmitPayment);
        assert_eq!(
            reduce_wizard(&mut state, &config, WizardAction::SubmitPayment),
            Err(WizardError::SubmissionInFlight)
        );
        assert_eq!(
            reduce_wizard(&mut state, &config, WizardAction::FinishSubmission),
            Err(WizardError::NoSubmissionInFlight(SubmissionPhase::Processing))
        );
        assert!(state.is_submitting());
    }

    #[test]
    fn card_edits_are_masked() {
        let mut state = at_stage(WizardStage::Payment);
        set(&mut state, OrderField::CardNumber, "4111111111111111");
        set(&mut state, OrderField::CardExpiry, "0727");
        set(&mut state, OrderField::CardCvv, "98765");
        assert_eq!(state.draft.card_number, "4111 1111 1111 1111");
        assert_eq!(state.draft.card_expiry, "07/27");
        assert_eq!(state.draft.card_cvv, "9876");
    }

    #[test]
    fn history_page_navigation() {
        let config = WizardConfig::default();
        let mut state = started();
        reduce(
            &mut state,
            WizardAction::SwitchPage {
                page: Page::Shipments,
            },
        );
        assert_eq!(state.page, Page::Shipments);

        reduce(
            &mut state,
            WizardAction::OpenShipment {
                shipment_id: "3".to_string(),
            },
        );
        let record = state.opened_shipment().expect("opened record");
        assert_eq!(record.tracking_number, "SH456789123");

        assert_eq!(
            reduce_wizard(
                &mut state,
                &config,
                WizardAction::OpenShipment {
                    shipment_id: "9".to_string()
                }
            ),
            Err(WizardError::ShipmentNotFound("9".to_string()))
        );
        assert_eq!(state.open_shipment.as_deref(), Some("3"));

        reduce(&mut state, WizardAction::CloseShipment);
        assert!(state.open_shipment.is_none());

        reduce(
            &mut state,
            WizardAction::OpenShipment {
                shipment_id: "1".to_string(),
            },
        );
        reduce(&mut state, WizardAction::SwitchPage { page: Page::Create });
        assert_eq!(state.page, Page::Create);
        assert!(state.open_shipment.is_none());
        assert_eq!(state.draft, OrderDraft::default());
    }
}
