//! Shared formatting utilities for UI components.

/// Format a count with thousand separators.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a tour length for display.
pub fn format_length(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    if val.abs() >= 1e7 {
        format!("{:.3e}", val)
    } else {
        format!("{:.2}", val)
    }
}
