//! Built-in carrier catalog and the fixed per-option pricing table.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::generated::CARRIER_CATALOG_JSON;

/// Label used when no (or an unknown) carrier option is selected.
pub const UNSELECTED_CARRIER_LABEL: &str = "Not selected";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// How the receiver gets the parcel.
pub enum DeliveryMode {
    /// Receiver collects the parcel from a carrier branch.
    Pickup,
    /// Carrier delivers to the receiver's address.
    Delivery,
}

impl DeliveryMode {
    /// Both modes in display order.
    pub const ALL: [Self; 2] = [Self::Pickup, Self::Delivery];

    /// Human-readable mode label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pickup => "Branch pickup",
            Self::Delivery => "Home delivery",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// One selectable (carrier, delivery mode) option.
pub struct DeliveryOption {
    /// Opaque option code stored in the draft's carrier field.
    pub code: String,
    /// Fixed price of the option.
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// A shipping company and its two delivery options.
pub struct Carrier {
    /// Stable carrier id (`smsa`, `aramex`).
    pub carrier_id: String,
    /// Display name.
    pub display_name: String,
    /// Estimated delivery time label.
    pub delivery_time: String,
    /// Branch pickup option.
    pub pickup: DeliveryOption,
    /// Home delivery option.
    pub delivery: DeliveryOption,
}

impl Carrier {
    /// Returns the option for `mode`.
    pub fn option(&self, mode: DeliveryMode) -> &DeliveryOption {
        match mode {
            DeliveryMode::Pickup => &self.pickup,
            DeliveryMode::Delivery => &self.delivery,
        }
    }

    /// Returns the mode whose option owns `code`, if this carrier has one.
    pub fn mode_for_code(&self, code: &str) -> Option<DeliveryMode> {
        DeliveryMode::ALL
            .into_iter()
            .find(|mode| self.option(*mode).code == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A carrier option resolved from its code.
pub struct SelectedDelivery<'a> {
    /// Owning carrier.
    pub carrier: &'a Carrier,
    /// Selected delivery mode.
    pub mode: DeliveryMode,
}

impl SelectedDelivery<'_> {
    /// Fixed price of the selection.
    pub fn price(&self) -> f64 {
        self.carrier.option(self.mode).price
    }

    /// "Carrier - Mode" label used by the summary.
    pub fn label(&self) -> String {
        format!("{} - {}", self.carrier.display_name, self.mode.label())
    }
}

/// Returns the built-in carrier catalog.
pub fn carrier_catalog() -> &'static [Carrier] {
    static CATALOG: OnceLock<Vec<Carrier>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(CARRIER_CATALOG_JSON)
            .expect("generated carrier catalog should parse")
    })
}

/// Looks up a carrier by id.
pub fn carrier_by_id(carrier_id: &str) -> Option<&'static Carrier> {
    carrier_catalog()
        .iter()
        .find(|carrier| carrier.carrier_id == carrier_id)
}

/// Resolves an option code to its carrier and delivery mode.
pub fn selected_delivery(code: &str) -> Option<SelectedDelivery<'static>> {
    carrier_catalog().iter().find_map(|carrier| {
        carrier
            .mode_for_code(code)
            .map(|mode| SelectedDelivery { carrier, mode })
    })
}

/// Returns the option code for `carrier_id` and `mode`.
pub fn delivery_code(carrier_id: &str, mode: DeliveryMode) -> Option<&'static str> {
    carrier_by_id(carrier_id).map(|carrier| carrier.option(mode).code.as_str())
}

/// Fixed price for an option code; unknown codes price at `0.0`.
pub fn carrier_price(code: &str) -> f64 {
    selected_delivery(code)
        .map(|selection| selection.price())
        .unwrap_or(0.0)
}

/// Summary label for an option code, or [`UNSELECTED_CARRIER_LABEL`].
pub fn carrier_label(code: &str) -> String {
    selected_delivery(code)
        .map(|selection| selection.label())
        .unwrap_or_else(|| UNSELECTED_CARRIER_LABEL.to_string())
}

/// Formats a price with two decimals.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_exposes_two_carriers_with_four_codes() {
        let catalog = carrier_catalog();
        assert_eq!(catalog.len(), 2);

        let mut codes: Vec<&str> = catalog
            .iter()
            .flat_map(|carrier| [carrier.pickup.code.as_str(), carrier.delivery.code.as_str()])
            .collect();
        codes.sort_unstable();
        assert_eq!(codes, vec!["16", "2", "24", "7"]);
    }

    #[test]
    fn prices_match_fixed_table() {
        assert_eq!(carrier_price("16"), 24.0);
        assert_eq!(carrier_price("24"), 24.0);
        assert_eq!(carrier_price("7"), 25.0);
        assert_eq!(carrier_price("2"), 25.0);
    }

    #[test]
    fn unknown_codes_price_at_zero() {
        assert_eq!(carrier_price(""), 0.0);
        assert_eq!(carrier_price("99"), 0.0);
        assert_eq!(carrier_label("99"), UNSELECTED_CARRIER_LABEL);
    }

    #[test]
    fn codes_resolve_to_carrier_and_mode() {
        let smsa_home = selected_delivery("7").expect("code 7");
        assert_eq!(smsa_home.carrier.carrier_id, "smsa");
        assert_eq!(smsa_home.mode, DeliveryMode::Delivery);
        assert_eq!(carrier_label("24"), "Aramex - Branch pickup");

        assert_eq!(delivery_code("smsa", DeliveryMode::Pickup), Some("16"));
        assert_eq!(delivery_code("aramex", DeliveryMode::Delivery), Some("2"));
        assert_eq!(delivery_code("dhl", DeliveryMode::Pickup), None);
    }

    #[test]
    fn prices_format_with_two_decimals() {
        assert_eq!(format_price(carrier_price("7")), "25.00");
        assert_eq!(format_price(0.0), "0.00");
    }
}
