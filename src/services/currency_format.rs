//! Display helpers for currency amounts. Values are only rounded here.

/// `1234567.8` -> `$1,234,568`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", value.abs());
    format!("{sign}${}", group_thousands(&digits))
}

/// Compact form with a truncated `K`/`M` suffix: `1_580_000` -> `$1.5M`.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        let millions = (abs / 100_000.0).trunc() / 10.0;
        format!("{sign}${millions}M")
    } else if abs >= 1_000.0 {
        format!("{sign}${}K", (abs / 1_000.0).trunc())
    } else {
        format!("{sign}${}", abs.trunc())
    }
}

/// Axis tick in whole millions: `2_400_000` -> `$2M`.
pub fn format_axis_millions(value: f64) -> String {
    format!("${:.0}M", value / 1_000_000.0)
}

fn group_thousands(digits: &str) -> String {
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
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1234567.8), "$1,234,568");
        assert_eq!(format_currency(-25000.0), "-$25,000");
        assert_eq!(format_currency(f64::NAN), "n/a");
    }

    #[test]
    fn format_compact_truncates_suffixes() {
        assert_eq!(format_compact(1_580_000.0), "$1.5M");
        assert_eq!(format_compact(2_000_000.0), "$2M");
        assert_eq!(format_compact(250_999.0), "$250K");
        assert_eq!(format_compact(812.9), "$812");
        assert_eq!(format_compact(-4_200.0), "-$4K");
    }

    #[test]
    fn format_axis_millions_rounds_to_whole_millions() {
        assert_eq!(format_axis_millions(2_400_000.0), "$2M");
        assert_eq!(format_axis_millions(0.0), "$0M");
    }
}
