use anyhow::{Context, Result};
use regex::Regex;

/// Capitalize the first letter of every space-separated word.
pub fn capitalize(arg: &str) -> String {
    arg.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Pretty-print a byte count using decimal units, at most three digits.
///
/// 1_512 => "1.51 KB", 112_341_234 => "112 MB", 2_000_000_000 => "2 GB"
pub fn bytes_to_str(bytes: u64) -> String {
    let bytes = bytes as f64;
    if bytes >= 1_000_000_000.0 {
        format!("{} GB", three_digits(bytes / 1_000_000_000.0))
    } else if bytes >= 1_000_000.0 {
        format!("{} MB", three_digits(bytes / 1_000_000.0))
    } else {
        format!("{} KB", three_digits(bytes / 1_000.0))
    }
}

/// Trim a magnitude to at most three digits, keeping the decimal point
/// only when a digit follows it.
fn three_digits(size: f64) -> String {
    let head: String = size.to_string().chars().take(4).collect();
    if head.contains('.') && !head.ends_with('.') {
        head
    } else {
        head.chars().take(3).collect()
    }
}

/// Replace every match of a regex pattern.
pub fn replace_all(parent: &str, to_find: &str, replace_with: &str) -> Result<String> {
    let rgx = Regex::new(to_find)
        .with_context(|| format!("Invalid replacement pattern: {}", to_find))?;
    Ok(rgx.replace_all(parent, replace_with).into_owned())
}

/// Format an amount as US dollars: 1234.1234 => "$1,234.12"
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

/// The display string for a boolean
pub fn format_bool(arg: bool) -> &'static str {
    if arg {
        "True"
    } else {
        "False"
    }
}

/// Compare two strings ignoring case and surrounding whitespace.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
