use crate::domain::Currency;

/// Insert `,` every three digits of an unsigned integer string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Thousands separators, at most `max_frac` fraction digits, trailing zeros dropped.
fn format_grouped(value: f64, max_frac: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", max_frac, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// General figures (market cap, volume, supply): up to two decimals.
pub fn format_number(value: f64) -> String {
    format_grouped(value, 2)
}

/// Prices keep enough precision for sub-cent assets to stay readable.
pub fn format_price(price: f64) -> String {
    let abs = price.abs();
    if abs >= 1.0 || abs == 0.0 {
        format_grouped(price, 2)
    } else if abs >= 0.01 {
        format_grouped(price, 4)
    } else {
        format_grouped(price, 8)
    }
}

pub fn format_money(currency: Currency, value: f64) -> String {
    match currency {
        Currency::Usd => {
            let s = format_price(value);
            match s.strip_prefix('-') {
                Some(rest) => format!("-${}", rest),
                None => format!("${}", s),
            }
        }
        Currency::Vnd => format!("{} {}", format_price(value), currency.label()),
    }
}

pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("123456"), "123,456");
    }

    #[test]
    fn numbers_keep_at_most_two_decimals() {
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(1234.567), "1,234.57");
        assert_eq!(format_number(1_000_000.0), "1,000,000");
        assert_eq!(format_number(-2500.004), "-2,500");
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn small_prices_keep_precision() {
        assert_eq!(format_price(67250.12), "67,250.12");
        assert_eq!(format_price(0.5231), "0.5231");
        assert_eq!(format_price(0.00002415), "0.00002415");
        assert_eq!(format_price(0.0), "0");
    }

    #[test]
    fn money_uses_the_currency() {
        assert_eq!(format_money(Currency::Usd, 3480.55), "$3,480.55");
        assert_eq!(format_money(Currency::Usd, -12.0), "-$12");
        assert_eq!(format_money(Currency::Vnd, 1_708_153_000.0), "1,708,153,000 VND");
    }

    #[test]
    fn percentages_have_two_decimals() {
        assert_eq!(format_pct(1.0), "1.00%");
        assert_eq!(format_pct(-7.494), "-7.49%");
    }
}
