// 数值与货币格式化工具，所有函数对有限数值都不会失败

/// `-0.0` 归一为 `0.0`，避免输出 `-0.00`
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// 按千分位分组整数部分
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// 美元金额，保留两位小数：`1234.5` -> `$1,234.50`
pub fn format_currency(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    let sign = if amount < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// 百分比，正数带 `+` 号：`0.68` -> `+0.68%`
pub fn format_percentage(value: f64) -> String {
    let value = normalize_zero(value);
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}

/// 大数缩写：`45678900` -> `45.7M`，小于 1000 原样输出
pub fn format_compact(num: u64) -> String {
    let value = num as f64;
    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        num.to_string()
    }
}

/// 千分位整数：`45678900` -> `45,678,900`
pub fn format_grouped(num: u64) -> String {
    group_thousands(&num.to_string())
}

/// 卡片上的涨跌行：`+1.24 (0.68%)`
pub fn format_change(change: f64, change_percent: f64) -> String {
    let change = normalize_zero(change);
    let change_percent = normalize_zero(change_percent);
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{}{:.2} ({:.2}%)", sign, change, change_percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_examples() {
        assert_eq!(format_compact(45_678_900), "45.7M");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(1_234_567_890), "1.2B");
        assert_eq!(format_compact(1_500), "1.5K");
        assert_eq!(format_compact(0), "0");
    }

    #[test]
    fn compact_picks_largest_unit() {
        assert_eq!(format_compact(1_000), "1.0K");
        assert_eq!(format_compact(1_000_000), "1.0M");
        assert_eq!(format_compact(1_000_000_000), "1.0B");
    }

    #[test]
    fn currency_has_symbol_grouping_and_two_decimals() {
        assert_eq!(format_currency(182.63), "$182.63");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-2.34), "-$2.34");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn percentage_sign_only_for_positive() {
        assert_eq!(format_percentage(0.68), "+0.68%");
        assert_eq!(format_percentage(-2.23), "-2.23%");
        assert_eq!(format_percentage(0.0), "0.00%");
    }

    #[test]
    fn change_line_matches_card() {
        assert_eq!(format_change(1.24, 0.68), "+1.24 (0.68%)");
        assert_eq!(format_change(-5.67, -2.23), "-5.67 (-2.23%)");
        assert_eq!(format_change(0.0, 0.0), "+0.00 (0.00%)");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_change(-0.0, -0.0), "+0.00 (0.00%)");
        assert_eq!(format_percentage(-0.0), "0.00%");
    }

    #[test]
    fn negative_zero_from_feed_json() {
        let json = r#"{"change": -0.0, "changePercent": -0.0}"#;
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        let change = value["change"].as_f64().unwrap();
        let change_percent = value["changePercent"].as_f64().unwrap();
        assert!(change.is_sign_negative());

        assert_eq!(format_change(change, change_percent), "+0.00 (0.00%)");
        assert_eq!(format_percentage(change_percent), "0.00%");
    }

    #[test]
    fn grouped_integers() {
        assert_eq!(format_grouped(45_678_900), "45,678,900");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1_000), "1,000");
    }
}
