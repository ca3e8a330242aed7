//! Order draft record, its addressable fields, and page-level navigation state.

use serde::{Deserialize, Serialize};

use crate::carriers;

/// Number of named fields carried by an [`OrderDraft`].
pub const ORDER_FIELD_COUNT: usize = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Logical group a draft field belongs to.
pub enum FieldGroup {
    /// Sender contact and address fields.
    Sender,
    /// Receiver contact and address fields.
    Receiver,
    /// Parcel content, declared value and weight.
    Package,
    /// Selected carrier option code.
    Carrier,
    /// Card fields collected on the payment stage.
    Payment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One named field of an [`OrderDraft`].
pub enum OrderField {
    /// Sender full name.
    SenderName,
    /// Sender mobile number.
    SenderPhone,
    /// Sender city.
    SenderCity,
    /// Sender district.
    SenderDistrict,
    /// Sender national address code.
    SenderAddress,
    /// Receiver full name.
    ReceiverName,
    /// Receiver mobile number.
    ReceiverPhone,
    /// Receiver city.
    ReceiverCity,
    /// Receiver district.
    ReceiverDistrict,
    /// Receiver detailed address.
    ReceiverAddress,
    /// Free-text description of the parcel content.
    ShipmentContent,
    /// Declared parcel value.
    ShipmentValue,
    /// Parcel weight in kilograms.
    ShipmentWeight,
    /// Selected carrier option code.
    Carrier,
    /// Card number, grouped in blocks of four.
    CardNumber,
    /// Card expiry in `MM/YY` form.
    CardExpiry,
    /// Card verification value.
    #[serde(rename = "cardCVV")]
    CardCvv,
}

impl OrderField {
    /// All draft fields in declaration order.
    pub const ALL: [Self; ORDER_FIELD_COUNT] = [
        Self::SenderName,
        Self::SenderPhone,
        Self::SenderCity,
        Self::SenderDistrict,
        Self::SenderAddress,
        Self::ReceiverName,
        Self::ReceiverPhone,
        Self::ReceiverCity,
        Self::ReceiverDistrict,
        Self::ReceiverAddress,
        Self::ShipmentContent,
        Self::ShipmentValue,
        Self::ShipmentWeight,
        Self::Carrier,
        Self::CardNumber,
        Self::CardExpiry,
        Self::CardCvv,
    ];

    /// Sender fields that must all be filled before leaving the sender stage.
    pub const SENDER: [Self; 5] = [
        Self::SenderName,
        Self::SenderPhone,
        Self::SenderCity,
        Self::SenderDistrict,
        Self::SenderAddress,
    ];

    /// Receiver fields that must all be filled before leaving the receiver stage.
    pub const RECEIVER: [Self; 5] = [
        Self::ReceiverName,
        Self::ReceiverPhone,
        Self::ReceiverCity,
        Self::ReceiverDistrict,
        Self::ReceiverAddress,
    ];

    /// Package fields that must all be filled before leaving the package stage.
    pub const PACKAGE: [Self; 3] = [
        Self::ShipmentContent,
        Self::ShipmentValue,
        Self::ShipmentWeight,
    ];

    /// Card fields checked by the payment stage before submission.
    pub const CARD: [Self; 3] = [Self::CardNumber, Self::CardExpiry, Self::CardCvv];

    /// Returns the stable camelCase key used by the serialized draft.
    pub const fn key(self) -> &'static str {
        match self {
            Self::SenderName => "senderName",
            Self::SenderPhone => "senderPhone",
            Self::SenderCity => "senderCity",
            Self::SenderDistrict => "senderDistrict",
            Self::SenderAddress => "senderAddress",
            Self::ReceiverName => "receiverName",
            Self::ReceiverPhone => "receiverPhone",
            Self::ReceiverCity => "receiverCity",
            Self::ReceiverDistrict => "receiverDistrict",
            Self::ReceiverAddress => "receiverAddress",
            Self::ShipmentContent => "shipmentContent",
            Self::ShipmentValue => "shipmentValue",
            Self::ShipmentWeight => "shipmentWeight",
            Self::Carrier => "carrier",
            Self::CardNumber => "cardNumber",
            Self::CardExpiry => "cardExpiry",
            Self::CardCvv => "cardCVV",
        }
    }

    /// Resolves a serialized field key back to its field.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Returns the group this field belongs to.
    pub const fn group(self) -> FieldGroup {
        match self {
            Self::SenderName
            | Self::SenderPhone
            | Self::SenderCity
            | Self::SenderDistrict
            | Self::SenderAddress => FieldGroup::Sender,
            Self::ReceiverName
            | Self::ReceiverPhone
            | Self::ReceiverCity
            | Self::ReceiverDistrict
            | Self::ReceiverAddress => FieldGroup::Receiver,
            Self::ShipmentContent | Self::ShipmentValue | Self::ShipmentWeight => {
                FieldGroup::Package
            }
            Self::Carrier => FieldGroup::Carrier,
            Self::CardNumber | Self::CardExpiry | Self::CardCvv => FieldGroup::Payment,
        }
    }
}

impl std::fmt::Display for OrderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// In-progress shipment order collected by the wizard.
///
/// Every value is kept as entered text, numeric ones included. [`OrderDraft::default`] is the
/// pre-filled sample the wizard starts from and returns to after a submission.
pub struct OrderDraft {
    /// Sender full name.
    pub sender_name: String,
    /// Sender mobile number.
    pub sender_phone: String,
    /// Sender city.
    pub sender_city: String,
    /// Sender district.
    pub sender_district: String,
    /// Sender national address code.
    pub sender_address: String,
    /// Receiver full name.
    pub receiver_name: String,
    /// Receiver mobile number.
    pub receiver_phone: String,
    /// Receiver city.
    pub receiver_city: String,
    /// Receiver district.
    pub receiver_district: String,
    /// Receiver detailed address.
    pub receiver_address: String,
    /// Parcel content description.
    pub shipment_content: String,
    /// Declared parcel value.
    pub shipment_value: String,
    /// Parcel weight.
    pub shipment_weight: String,
    /// Selected carrier option code, empty until chosen.
    pub carrier: String,
    /// Card number.
    pub card_number: String,
    /// Card expiry.
    pub card_expiry: String,
    /// Card verification value.
    #[serde(rename = "cardCVV")]
    pub card_cvv: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            sender_name: "أحمد محمد العلي".to_string(),
            sender_phone: "0501234567".to_string(),
            sender_city: "الرياض".to_string(),
            sender_district: "العليا".to_string(),
            sender_address: "AAAA1234".to_string(),
            receiver_name: "فاطمة علي السالم".to_string(),
            receiver_phone: "0509876543".to_string(),
            receiver_city: "جدة".to_string(),
            receiver_district: "البحيرة".to_string(),
            receiver_address: "شارع الكورنيش، بجانب المطعم الإيطالي، مبنى رقم 45، شقة 302"
                .to_string(),
            shipment_content: "ملابس وإلكترونيات".to_string(),
            shipment_value: "500".to_string(),
            shipment_weight: "2.5".to_string(),
            carrier: String::new(),
            card_number: "4532 1234 5678 9010".to_string(),
            card_expiry: "12/25".to_string(),
            card_cvv: "123".to_string(),
        }
    }
}

impl OrderDraft {
    /// Returns a draft with every field empty.
    pub fn blank() -> Self {
        Self {
            sender_name: String::new(),
            sender_phone: String::new(),
            sender_city: String::new(),
            sender_district: String::new(),
            sender_address: String::new(),
            receiver_name: String::new(),
            receiver_phone: String::new(),
            receiver_city: String::new(),
            receiver_district: String::new(),
            receiver_address: String::new(),
            shipment_content: String::new(),
            shipment_value: String::new(),
            shipment_weight: String::new(),
            carrier: String::new(),
            card_number: String::new(),
            card_expiry: String::new(),
            card_cvv: String::new(),
        }
    }

    /// Returns the current text of `field`.
    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::SenderName => &self.sender_name,
            OrderField::SenderPhone => &self.sender_phone,
            OrderField::SenderCity => &self.sender_city,
            OrderField::SenderDistrict => &self.sender_district,
            OrderField::SenderAddress => &self.sender_address,
            OrderField::ReceiverName => &self.receiver_name,
            OrderField::ReceiverPhone => &self.receiver_phone,
            OrderField::ReceiverCity => &self.receiver_city,
            OrderField::ReceiverDistrict => &self.receiver_district,
            OrderField::ReceiverAddress => &self.receiver_address,
            OrderField::ShipmentContent => &self.shipment_content,
            OrderField::ShipmentValue => &self.shipment_value,
            OrderField::ShipmentWeight => &self.shipment_weight,
            OrderField::Carrier => &self.carrier,
            OrderField::CardNumber => &self.card_number,
            OrderField::CardExpiry => &self.card_expiry,
            OrderField::CardCvv => &self.card_cvv,
        }
    }

    /// Replaces the text of `field`.
    pub fn set(&mut self, field: OrderField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    fn slot_mut(&mut self, field: OrderField) -> &mut String {
        match field {
            OrderField::SenderName => &mut self.sender_name,
            OrderField::SenderPhone => &mut self.sender_phone,
            OrderField::SenderCity => &mut self.sender_city,
            OrderField::SenderDistrict => &mut self.sender_district,
            OrderField::SenderAddress => &mut self.sender_address,
            OrderField::ReceiverName => &mut self.receiver_name,
            OrderField::ReceiverPhone => &mut self.receiver_phone,
            OrderField::ReceiverCity => &mut self.receiver_city,
            OrderField::ReceiverDistrict => &mut self.receiver_district,
            OrderField::ReceiverAddress => &mut self.receiver_address,
            OrderField::ShipmentContent => &mut self.shipment_content,
            OrderField::ShipmentValue => &mut self.shipment_value,
            OrderField::ShipmentWeight => &mut self.shipment_weight,
            OrderField::Carrier => &mut self.carrier,
            OrderField::CardNumber => &mut self.card_number,
            OrderField::CardExpiry => &mut self.card_expiry,
            OrderField::CardCvv => &mut self.card_cvv,
        }
    }

    /// Returns whether `field` holds only whitespace (or nothing).
    pub fn is_blank(&self, field: OrderField) -> bool {
        self.get(field).trim().is_empty()
    }

    /// Price of the selected carrier option, or `0.0` when none (or an unknown code) is set.
    pub fn total_price(&self) -> f64 {
        if self.carrier.is_empty() {
            0.0
        } else {
            carriers::carrier_price(&self.carrier)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Top-level page shown by the app.
pub enum Page {
    /// The order wizard.
    #[default]
    Create,
    /// Static shipment history.
    Shipments,
}

impl Page {
    /// Returns a stable token for routing and diagnostics.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Shipments => "shipments",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn field_keys_round_trip_and_are_unique() {
        let mut keys: Vec<&str> = OrderField::ALL.iter().map(|field| field.key()).collect();
        for field in OrderField::ALL {
            assert_eq!(OrderField::from_key(field.key()), Some(field));
        }
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ORDER_FIELD_COUNT);
        assert_eq!(OrderField::from_key("cardCvv"), None);
    }

    #[test]
    fn serialized_draft_uses_field_keys() {
        let draft = OrderDraft::default();
        let value = serde_json::to_value(&draft).expect("serialize draft");
        let object = value.as_object().expect("draft object");

        assert_eq!(object.len(), ORDER_FIELD_COUNT);
        for field in OrderField::ALL {
            assert_eq!(
                object.get(field.key()).and_then(|v| v.as_str()),
                Some(draft.get(field)),
                "field {field}"
            );
        }
    }

    #[test]
    fn set_and_get_address_the_same_slot() {
        let mut draft = OrderDraft::blank();
        for (idx, field) in OrderField::ALL.into_iter().enumerate() {
            draft.set(field, format!("value-{idx}"));
        }
        for (idx, field) in OrderField::ALL.into_iter().enumerate() {
            assert_eq!(draft.get(field), format!("value-{idx}"));
        }
    }

    #[test]
    fn sample_draft_is_prefilled_except_carrier() {
        let draft = OrderDraft::default();
        for field in OrderField::ALL {
            assert_eq!(draft.is_blank(field), field == OrderField::Carrier, "{field}");
        }
        assert_eq!(draft.total_price(), 0.0);
    }

    #[test]
    fn field_groups_cover_stage_field_sets() {
        assert!(OrderField::SENDER
            .iter()
            .all(|field| field.group() == FieldGroup::Sender));
        assert!(OrderField::RECEIVER
            .iter()
            .all(|field| field.group() == FieldGroup::Receiver));
        assert!(OrderField::PACKAGE
            .iter()
            .all(|field| field.group() == FieldGroup::Package));
        assert!(OrderField::CARD
            .iter()
            .all(|field| field.group() == FieldGroup::Payment));
        assert_eq!(OrderField::Carrier.group(), FieldGroup::Carrier);
    }
}
