/// Parses a money amount written with either `,` or `.` as decimal separator.
///
/// Returns `None` for a missing, empty or non-numeric value, never zero.
pub fn normalize_amount(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}
