//! Input masks applied to field edits before they reach the draft.

use crate::model::OrderField;

const CARD_NUMBER_MAX_LEN: usize = 19;
const CARD_EXPIRY_MAX_LEN: usize = 5;
const CARD_CVV_MAX_LEN: usize = 4;

/// Groups a card number in blocks of four after dropping whitespace.
pub fn format_card_number(raw: &str) -> String {
    let compact: Vec<char> = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
    compact
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps digits only and inserts the `MM/YY` slash once two digits are present.
pub fn format_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();
    if digits.len() >= 2 {
        let year: String = digits.chars().skip(2).take(2).collect();
        format!("{}/{year}", &digits[..2])
    } else {
        digits
    }
}

fn truncate_chars(value: String, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((cut, _)) => value[..cut].to_string(),
        None => value,
    }
}

/// Applies the input mask for `field` to a raw edit.
///
/// Card fields are formatted and length-capped; every other field is stored as typed.
pub fn normalize_field_input(field: OrderField, raw: String) -> String {
    match field {
        OrderField::CardNumber => truncate_chars(format_card_number(&raw), CARD_NUMBER_MAX_LEN),
        OrderField::CardExpiry => truncate_chars(format_expiry(&raw), CARD_EXPIRY_MAX_LEN),
        OrderField::CardCvv => {
            let digits: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();
            truncate_chars(digits, CARD_CVV_MAX_LEN)
        }
        _ => raw,
    }
}
