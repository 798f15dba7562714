//! Monetary types for balances, stakes and payouts.

use rust_decimal::Decimal;

/// Amount of virtual balance, represented as a Decimal for precision.
pub type Amount = Decimal;

/// Number of decimal places shown to players.
pub const DISPLAY_SCALE: u32 = 2;

/// Format an amount as a dollar string with two decimal places.
#[must_use]
pub fn format_amount(amount: Amount) -> String {
    let rounded = amount.round_dp(DISPLAY_SCALE);
    format!("${rounded:.2}")
}

/// Format a signed balance change, e.g. `+$2.00` or `-$1.00`.
#[must_use]
pub fn format_delta(delta: Amount) -> String {
    let sign = if delta.is_sign_negative() && !delta.is_zero() {
        "-"
    } else {
        "+"
    };
    format!("{sign}{}", format_amount(delta.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn format_amount_pads_to_cents() {
        assert_eq!(format_amount(dec!(5)), "$5.00");
        assert_eq!(format_amount(dec!(1.5)), "$1.50");
    }

    #[test]
    fn format_amount_rounds_fractional_cents() {
        assert_eq!(format_amount(dec!(2.345)), "$2.34");
        assert_eq!(format_amount(dec!(0.125)), "$0.12");
    }

    #[test]
    fn format_delta_signs_changes() {
        assert_eq!(format_delta(dec!(-1)), "-$1.00");
        assert_eq!(format_delta(dec!(2.5)), "+$2.50");
    }
}
