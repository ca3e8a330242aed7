use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeliveryOptionManifest {
    code: String,
    price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CarrierManifest {
    carrier_id: String,
    display_name: String,
    delivery_time: String,
    pickup: DeliveryOptionManifest,
    delivery: DeliveryOptionManifest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CarrierCatalogFile {
    schema_version: u32,
    carriers: Vec<CarrierManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PartyManifest {
    name: String,
    phone: String,
    city: String,
    district: String,
    address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShipmentManifest {
    id: String,
    tracking_number: String,
    sender: PartyManifest,
    receiver: PartyManifest,
    content: String,
    value: String,
    weight: String,
    carrier_label: String,
    carrier_code: String,
    status: String,
    created_at: String,
    estimated_delivery: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    delivered_at: Option<String>,
    price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShipmentFixtureFile {
    schema_version: u32,
    shipments: Vec<ShipmentManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WizardManifest {
    schema_version: u32,
    processing_delay_ms: u64,
    redirect_delay_ms: u64,
    show_welcome: bool,
    toast_lifetime_ms: u64,
}

const SHIPMENT_STATUSES: [&str; 3] = ["pending", "in_transit", "delivered"];

fn read_manifest<T: for<'de> Deserialize<'de>>(path: &Path) -> T {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    toml::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

fn check_schema(path: &Path, found: u32) {
    if found != 1 {
        panic!(
            "catalog schema mismatch in {}: expected 1 found {found}",
            path.display()
        );
    }
}

fn validate_carriers(path: &Path, catalog: &CarrierCatalogFile) -> BTreeSet<String> {
    let mut codes = BTreeSet::new();
    let mut carrier_ids = BTreeSet::new();
    for carrier in &catalog.carriers {
        if !carrier_ids.insert(carrier.carrier_id.clone()) {
            panic!(
                "duplicate carrier `{}` in {}",
                carrier.carrier_id,
                path.display()
            );
        }
        for option in [&carrier.pickup, &carrier.delivery] {
            if option.code.trim().is_empty() {
                panic!(
                    "carrier `{}` has an empty option code in {}",
                    carrier.carrier_id,
                    path.display()
                );
            }
            if option.price.is_nan() || option.price <= 0.0 {
                panic!(
                    "carrier option `{}` must have a positive price in {}",
                    option.code,
                    path.display()
                );
            }
            if !codes.insert(option.code.clone()) {
                panic!(
                    "duplicate carrier option code `{}` in {}",
                    option.code,
                    path.display()
                );
            }
        }
    }
    codes
}

fn validate_shipments(path: &Path, fixtures: &ShipmentFixtureFile, codes: &BTreeSet<String>) {
    let mut ids = BTreeSet::new();
    for shipment in &fixtures.shipments {
        if !ids.insert(shipment.id.clone()) {
            panic!("duplicate shipment id `{}` in {}", shipment.id, path.display());
        }
        if !SHIPMENT_STATUSES.contains(&shipment.status.as_str()) {
            panic!(
                "shipment `{}` has unknown status `{}` in {}",
                shipment.id,
                shipment.status,
                path.display()
            );
        }
        if !codes.contains(&shipment.carrier_code) {
            panic!(
                "shipment `{}` references unknown carrier code `{}` in {}",
                shipment.id,
                shipment.carrier_code,
                path.display()
            );
        }
        if shipment.status == "delivered" && shipment.delivered_at.is_none() {
            panic!(
                "delivered shipment `{}` is missing `delivered_at` in {}",
                shipment.id,
                path.display()
            );
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let catalog_dir = crate_root.join("catalog");

    let carriers_path = catalog_dir.join("carriers.toml");
    let carriers: CarrierCatalogFile = read_manifest(&carriers_path);
    check_schema(&carriers_path, carriers.schema_version);
    let codes = validate_carriers(&carriers_path, &carriers);

    let shipments_path = catalog_dir.join("shipments.toml");
    let shipments: ShipmentFixtureFile = read_manifest(&shipments_path);
    check_schema(&shipments_path, shipments.schema_version);
    validate_shipments(&shipments_path, &shipments, &codes);

    let wizard_path = catalog_dir.join("wizard.toml");
    let wizard: WizardManifest = read_manifest(&wizard_path);
    check_schema(&wizard_path, wizard.schema_version);

    let carriers_json =
        serde_json::to_string_pretty(&carriers.carriers).expect("serialize carrier catalog");
    let shipments_json =
        serde_json::to_string_pretty(&shipments.shipments).expect("serialize shipment fixtures");
    let wizard_json = serde_json::to_string_pretty(&wizard).expect("serialize wizard config");

    let generated = format!(
        "/// Build-time generated carrier catalog JSON.\n\
pub(crate) const CARRIER_CATALOG_JSON: &str = r##\"{carriers_json}\"##;\n\
/// Build-time generated shipment history fixtures JSON.\n\
pub(crate) const SHIPMENT_FIXTURES_JSON: &str = r##\"{shipments_json}\"##;\n\
/// Build-time generated default wizard configuration JSON.\n\
pub(crate) const WIZARD_CONFIG_JSON: &str = r##\"{wizard_json}\"##;\n"
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("shipping_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
