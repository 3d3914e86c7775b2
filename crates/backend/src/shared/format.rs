/// Форматирует число с разделителями тысяч (точками)
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Денежная сумма без копеек: `R$ 1.234.567`, `R$ -12.300`
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("R$ {}{}", sign, format_number(rounded.abs() as usize))
}

/// `12.3%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Rounds to `decimals` places, half away from zero
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "R$ 0");
        assert_eq!(format_currency(1234567.89), "R$ 1.234.568");
        assert_eq!(format_currency(-12300.2), "R$ -12.300");
        assert_eq!(format_currency(-0.2), "R$ 0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(104.26), "104.3%");
    }

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(1.23456, 2), 1.23);
        assert_eq!(round_dp(0.0876, 3), 0.088);
        assert_eq!(round_dp(-2.5, 0), -3.0);
        assert_eq!(round_dp(10.0, 2), 10.0);
    }
}
