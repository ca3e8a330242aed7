//! Headless state core for the shipping order wizard.
//!
//! The crate owns the order draft, the ordered wizard stages and their validation rules, the
//! built-in carrier catalog and pricing table, the static shipment history, and the reducer
//! ([`reduce_wizard`]) that turns user actions into state changes plus side-effect intents.
//! Nothing here renders, sleeps, or performs I/O; runtimes execute the emitted
//! [`WizardEffect`] values.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod carriers;
pub mod config;
pub mod input;
pub mod model;
pub mod notice;
pub mod reducer;
pub mod shipments;
pub mod stage;
pub mod validation;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/shipping_catalog_generated.rs"));
}

pub use carriers::{
    carrier_catalog, carrier_label, carrier_price, delivery_code, format_price,
    selected_delivery, Carrier, DeliveryMode, DeliveryOption, SelectedDelivery,
};
pub use config::{ConfigError, WizardConfig};
pub use model::{FieldGroup, OrderDraft, OrderField, Page, ORDER_FIELD_COUNT};
pub use notice::{Notice, NoticeVariant};
pub use reducer::{
    reduce_wizard, SubmissionPhase, WizardAction, WizardEffect, WizardError, WizardState,
};
pub use shipments::{
    shipment_by_id, shipment_history, PartyDetails, ShipmentRecord, ShipmentStatus,
};
pub use stage::{progress_markers, StageMarker, WizardStage, STAGE_COUNT};
pub use validation::{
    is_valid_mobile_number, validate_payment, validate_stage, ValidationFailure,
};
