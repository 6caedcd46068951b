//! Money formatting for headline figures and tables

/// Dollars as billions with two decimals, e.g. `$5.70B`
///
/// The sign goes after the currency symbol (`$-1.25B`), as the dashboard printed it.
pub fn format_billions(amount: f64) -> String {
    format!("${:.2}B", amount / 1e9)
}

/// Dollars as whole millions with thousands separators, e.g. `1,450`
pub fn format_millions(amount: f64) -> String {
    let rounded = format!("{:.0}", amount / 1e6);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    format!("{}{}", sign, group_thousands(digits))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
