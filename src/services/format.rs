//! Human-readable number, volume and currency formatting

/// Round to an integer and group thousands with commas: `1234567.8` -> `1,234,568`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[must_use]
pub fn format_gb(gb: f64) -> String {
    format!("{gb:.2} GB")
}

#[must_use]
pub fn format_tb(tb: f64) -> String {
    format!("{tb:.2} TB")
}

/// Pick GB or TB depending on magnitude.
#[must_use]
pub fn format_size_gb(gb: f64) -> String {
    if gb.abs() >= 1000.0 {
        format_tb(gb / 1000.0)
    } else {
        format_gb(gb)
    }
}

/// Whole dollars with thousands separators.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    format!("${}", format_number(amount))
}
