//! Readout and label formatting shared by the panels.

/// Fixed-precision readout, the terminal stand-in for a chart tooltip.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Pie segment label, `"{name}: {value}%"`.
pub fn share_label(name: &str, value: f64) -> String {
    format!("{}: {}%", name, value)
}

/// Integer with comma thousands separators.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Upper bound rounded up to the next tenth, for loss axes.
pub fn ceil_tenth(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}
