//! UPI deep-link construction for the checkout payment panel.
//!
//! DESIGN
//! ======
//! A `upi://pay` link carries the payee address (`pa`), payee name (`pn`),
//! currency (`cu`) and optionally merchant code (`mc`), amount (`am`),
//! transaction note (`tn`) and reference (`tr`). The OS hands the link off
//! to whatever UPI app is installed; nothing here talks to a payment rail.

#[cfg(test)]
#[path = "upi_test.rs"]
mod upi_test;

/// Merchant virtual payment address shown and encoded at checkout.
pub const MERCHANT_UPI_ID: &str = "aurum@upi";

/// Merchant display name carried in the deep link.
pub const MERCHANT_NAME: &str = "Aurum Boutique";

/// Merchant category code (general retail).
pub const MERCHANT_CODE: &str = "5411";

/// Build a `upi://pay` deep link.
///
/// `amount` is in whole rupees and omitted when zero so the payer can enter
/// the amount in their UPI app.
pub fn build_deep_link(amount: u64, note: Option<&str>, reference: Option<&str>) -> String {
    let mut params = vec![
        ("pa", MERCHANT_UPI_ID.to_owned()),
        ("pn", MERCHANT_NAME.to_owned()),
        ("cu", "INR".to_owned()),
        ("mc", MERCHANT_CODE.to_owned()),
    ];
    if amount > 0 {
        params.push(("am", format!("{amount}.00")));
    }
    if let Some(note) = note {
        params.push(("tn", note.to_owned()));
    }
    if let Some(reference) = reference {
        params.push(("tr", reference.to_owned()));
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", form_encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("upi://pay?{query}")
}

/// Encode a query value the way `application/x-www-form-urlencoded` does:
/// spaces become `+`, unreserved characters pass through, the rest is
/// percent-encoded byte-wise.
fn form_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                encoded.push(byte as char);
            }
            b' ' => encoded.push('+'),
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{byte:02X}"));
            }
        }
    }
    encoded
}
