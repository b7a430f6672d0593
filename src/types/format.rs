//! 展示用的格式化工具

/// 按价格量级选择精度
pub fn format_price(price: f64) -> String {
    if price < 0.00001 {
        format!("{:.2e}", price)
    } else if price < 0.001 {
        format!("{:.6}", price)
    } else if price < 0.1 {
        format!("{:.4}", price)
    } else {
        format!("{:.2}", price)
    }
}

/// 金额缩写：$2.1M / $890.0K / $12.50
pub fn format_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${:.2}", value)
    }
}

pub fn format_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{:.1}%", change)
    } else {
        format!("{:.1}%", change)
    }
}

/// 0x1234...5678
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
