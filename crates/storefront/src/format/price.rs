/// Formats a price as `$` followed by exactly two decimals.
///
/// The exact binary value is rounded to cents, with a half cent rounded away from zero.
/// So `1.005` (stored just below the half cent) gives `$1.00` and `0.125` gives `$0.13`.
/// No thousands separators and no locale. Negative prices are not rejected, they keep
/// their sign after the currency symbol.
pub fn format_price(price: f64) -> String {
    let text = if is_half_cent(price) {
        // Exact here: a half-cent price is a multiple of 1/8.
        let cents = (price * 100.0).round();
        format!("{:.2}", cents / 100.0)
    } else {
        format!("{:.2}", price)
    };
    match text.as_str() {
        "-0.00" => "$0.00".to_string(),
        _ => format!("${text}"),
    }
}

/// Whether `price` sits exactly on a half cent.
///
/// Only odd multiples of 1/8 (`.125`, `.375`, `.625`, `.875`) are both a half cent and
/// representable. `{:.2}` breaks those ties to even.
fn is_half_cent(price: f64) -> bool {
    let eighths = price * 8.0;
    eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number_gets_two_decimals() {
        assert_eq!(format_price(9.0), "$9.00");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_rounds_to_cents() {
        assert_eq!(format_price(9.999), "$10.00");
        assert_eq!(format_price(109.95), "$109.95");
        assert_eq!(format_price(22.3), "$22.30");
    }

    #[test]
    fn test_rounds_the_stored_value_not_the_literal() {
        // Both are stored slightly below the half cent.
        assert_eq!(format_price(0.015), "$0.01");
        assert_eq!(format_price(1.005), "$1.00");
        assert_eq!(format_price(0.045), "$0.04");
    }

    #[test]
    fn test_exact_half_cent_rounds_up() {
        assert_eq!(format_price(0.125), "$0.13");
        assert_eq!(format_price(0.375), "$0.38");
        assert_eq!(format_price(2.625), "$2.63");
        assert_eq!(format_price(-0.125), "$-0.13");
    }

    #[test]
    fn test_no_thousands_separator() {
        assert_eq!(format_price(1234567.5), "$1234567.50");
    }

    #[test]
    fn test_negative_is_formatted_as_is() {
        assert_eq!(format_price(-5.0), "$-5.00");
        assert_eq!(format_price(-0.001), "$0.00");
    }
}
