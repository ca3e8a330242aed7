//! Static shipment history shown on the shipments page.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::generated::SHIPMENT_FIXTURES_JSON;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Delivery status of a past shipment.
pub enum ShipmentStatus {
    /// Order received, not yet handed to the carrier.
    Pending,
    /// Parcel is with the carrier.
    InTransit,
    /// Parcel reached the receiver.
    Delivered,
}

impl ShipmentStatus {
    /// Short status badge label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Processing",
            Self::InTransit => "In transit",
            Self::Delivered => "Delivered",
        }
    }

    /// Longer description used by the details view.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Pending => "Your order is being processed",
            Self::InTransit => "The shipment is on its way",
            Self::Delivered => "The shipment was delivered successfully",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Contact and address details of one shipment party.
pub struct PartyDetails {
    /// Full name.
    pub name: String,
    /// Mobile number.
    pub phone: String,
    /// City.
    pub city: String,
    /// District.
    pub district: String,
    /// Address line or national address code.
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One past shipment; read-only fixture data.
pub struct ShipmentRecord {
    /// Fixture id.
    pub id: String,
    /// Carrier tracking number.
    pub tracking_number: String,
    /// Sending party.
    pub sender: PartyDetails,
    /// Receiving party.
    pub receiver: PartyDetails,
    /// Parcel content.
    pub content: String,
    /// Declared value.
    pub value: String,
    /// Weight.
    pub weight: String,
    /// Carrier display label as recorded at creation.
    pub carrier_label: String,
    /// Carrier option code.
    pub carrier_code: String,
    /// Current status.
    pub status: ShipmentStatus,
    /// Creation date (`YYYY-MM-DD`).
    pub created_at: String,
    /// Estimated delivery date (`YYYY-MM-DD`).
    pub estimated_delivery: String,
    /// Delivery date, once delivered.
    #[serde(default)]
    pub delivered_at: Option<String>,
    /// Price paid.
    pub price: f64,
}

/// Returns the fixed shipment history in display order.
pub fn shipment_history() -> &'static [ShipmentRecord] {
    static HISTORY: OnceLock<Vec<ShipmentRecord>> = OnceLock::new();
    HISTORY.get_or_init(|| {
        serde_json::from_str(SHIPMENT_FIXTURES_JSON)
            .expect("generated shipment fixtures should parse")
    })
}

/// Looks up one history record by fixture id.
pub fn shipment_by_id(id: &str) -> Option<&'static ShipmentRecord> {
    shipment_history().iter().find(|record| record.id == id)
}
