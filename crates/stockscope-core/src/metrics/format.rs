const TRILLION: f64 = 1e12;
const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;

/// Human-readable dollar amount: `$2.30T`, `$1.50B`, `$4.20M`, or `$12,345` below a million.
///
/// Thresholds apply to the magnitude, so losses render as `-$1.20B`.
/// Non-finite input renders as `$0`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return String::from("$0");
    }

    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if magnitude >= TRILLION {
        format!("{sign}${:.2}T", magnitude / TRILLION)
    } else if magnitude >= BILLION {
        format!("{sign}${:.2}B", magnitude / BILLION)
    } else if magnitude >= MILLION {
        format!("{sign}${:.2}M", magnitude / MILLION)
    } else {
        let whole = magnitude.round() as u64;
        let sign = if whole == 0 { "" } else { sign };
        format!("{sign}${}", group_thousands(whole))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_magnitude_suffixes() {
        assert_eq!(format_currency(2_300_000_000_000.0), "$2.30T");
        assert_eq!(format_currency(1_500_000_000.0), "$1.50B");
        assert_eq!(format_currency(4_200_000.0), "$4.20M");
        assert_eq!(format_currency(1e12), "$1.00T");
        assert_eq!(format_currency(999_999_999.0), "$1000.00M");
    }

    #[test]
    fn groups_small_amounts() {
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(12_345.4), "$12,345");
        assert_eq!(format_currency(999_999.0), "$999,999");
        assert_eq!(format_currency(1_000.0), "$1,000");
    }

    #[test]
    fn negative_values_keep_suffixes() {
        assert_eq!(format_currency(-1_200_000_000.0), "-$1.20B");
        assert_eq!(format_currency(-2_500.0), "-$2,500");
        assert_eq!(format_currency(-0.2), "$0");
    }

    #[test]
    fn non_finite_values_render_as_zero() {
        assert_eq!(format_currency(f64::NAN), "$0");
        assert_eq!(format_currency(f64::INFINITY), "$0");
    }
}
