//! Display formatting for sample values
//!
//! Tooltip and header labels show Turkish lira amounts with comma-grouped
//! thousands and at most two fractional digits, trailing zeros trimmed.
//! Amounts are rounded to the nearest kuruş before formatting so float
//! dust never leaks into a label.

/// Format a sample value as a lira label, e.g. `8700.0` → `"₺8,700"`.
pub fn currency_label(value: f64) -> String {
    format!("₺{}", group_thousands(value))
}

/// Comma-group a number's integer digits and trim its fraction to at most
/// two significant digits: `1234.5` → `"1,234.5"`, `-950.0` → `"-950"`.
pub fn group_thousands(value: f64) -> String {
    // Work in kuruş so 0.1 + 0.2 style residue rounds away up front.
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if value.is_sign_negative() && cents > 0 {
        out.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    if frac > 0 {
        if frac % 10 == 0 {
            out.push_str(&format!(".{}", frac / 10));
        } else {
            out.push_str(&format!(".{frac:02}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(currency_label(850.0), "₺850");
        assert_eq!(currency_label(0.0), "₺0");
    }

    #[test]
    fn thousands_are_comma_grouped() {
        assert_eq!(currency_label(8700.0), "₺8,700");
        assert_eq!(currency_label(12450.0), "₺12,450");
        assert_eq!(currency_label(1234567.0), "₺1,234,567");
    }

    #[test]
    fn fraction_keeps_at_most_two_digits() {
        assert_eq!(group_thousands(9450.23), "9,450.23");
        assert_eq!(group_thousands(950.5), "950.5");
        assert_eq!(group_thousands(950.50), "950.5");
    }

    #[test]
    fn whole_amounts_drop_the_fraction_entirely() {
        assert_eq!(group_thousands(8700.0), "8,700");
        assert_eq!(group_thousands(1000.00), "1,000");
    }

    #[test]
    fn sub_kurus_residue_rounds_away() {
        assert_eq!(group_thousands(0.1 + 0.2), "0.3");
        assert_eq!(group_thousands(8699.999999), "8,700");
    }

    #[test]
    fn negative_amounts_keep_the_sign_in_front() {
        assert_eq!(group_thousands(-8700.0), "-8,700");
        assert_eq!(currency_label(-12.5), "₺-12.5");
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        assert_eq!(group_thousands(-0.0), "0");
    }
}
