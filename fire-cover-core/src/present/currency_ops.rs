//! number formatting for monetary values shown on the dashboard.

pub const CURRENCY_SYMBOL: &str = "£";

const THOUSANDS_SEPARATOR: char = ',';

/// inserts a separator between each group of three digits, `7465071` -> `7,465,071`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// formats an amount with grouped thousands and a fixed number of decimal places.
/// halves round away from zero, so `3393214.5` at 0 places is `3,393,215`.
pub fn format_grouped(amount: f64, decimals: u32) -> String {
    let scale = 10_u64.pow(decimals);
    let scaled = (amount.abs() * scale as f64).round() as u64;
    let sign = if amount < 0.0 && scaled != 0 { "-" } else { "" };
    let whole = group_thousands(scaled / scale);
    if decimals == 0 {
        format!("{sign}{whole}")
    } else {
        let width = decimals as usize;
        format!("{sign}{whole}.{:0width$}", scaled % scale)
    }
}

/// `£678,642.90`
pub fn format_currency(amount: f64, decimals: u32) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_grouped(amount, decimals))
}

/// an amount already expressed in millions, `8.079082143` -> `£8.08m`
pub fn format_millions(amount_million: f64) -> String {
    format!("{}m", format_currency(amount_million, 2))
}
