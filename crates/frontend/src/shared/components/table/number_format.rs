//! Number formatting for table cells

/// Groups the integer part in threes with `,` and keeps `decimals` digits.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `$1,234.50`
pub fn format_money(value: f64) -> String {
    let amount = format_number_with_decimals(value.abs(), 2);
    if value < 0.0 && amount != "0.00" {
        format!("-${amount}")
    } else {
        format!("${amount}")
    }
}

pub fn format_number_int(value: i64) -> String {
    format_number_with_decimals(value as f64, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(3.5), "$3.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(-12.0), "-$12.00");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(0), "0");
        assert_eq!(format_number_int(999), "999");
        assert_eq!(format_number_int(1000), "1,000");
        assert_eq!(format_number_int(-25000), "-25,000");
    }
}
