//! Frame composition and price formatting

use crate::cache::Observation;
use crate::registry::{AssetClass, SymbolEntry};
use rust_decimal::Decimal;

/// Price text shown before the first successful fetch
pub const PLACEHOLDER: &str = "----";

/// Composed content for one panel frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub ticker: String,
    pub class: AssetClass,
    /// Formatted price (e.g., "$42,500.50") or the placeholder
    pub price_text: String,
    /// Formatted 24h change (e.g., "+1.2%"), when known
    pub change_text: Option<String>,
}

/// Compose the frame for one symbol from its cached observation
///
/// An invalid observation still produces a frame; the placeholder stands in
/// for the price.
pub fn compose_frame(entry: &SymbolEntry, observation: &Observation) -> Frame {
    if !observation.valid {
        return Frame {
            ticker: entry.ticker.clone(),
            class: entry.class,
            price_text: PLACEHOLDER.to_string(),
            change_text: None,
        };
    }

    Frame {
        ticker: entry.ticker.clone(),
        class: entry.class,
        price_text: format_price(observation.price),
        change_text: observation.change_24h.map(format_change),
    }
}

/// Format a price as `$1,234.56`
pub fn format_price(price: Decimal) -> String {
    let text = format!("{:.2}", price.round_dp(2));
    let (number, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::new();
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", sign, grouped, fraction)
}

/// Format a 24h change percentage as `+1.2%` / `-0.5%`
pub fn format_change(change: Decimal) -> String {
    let rounded = change.round_dp(1);
    let sign = if rounded.is_sign_negative() { "" } else { "+" };
    format!("{}{:.1}%", sign, rounded)
}
