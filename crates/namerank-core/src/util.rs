/// Canonical lookup form of a name: trimmed, with the first letter of each
/// space-separated token upper-cased and the rest lower-cased. Hyphens and
/// apostrophes do not start a new capital. Interior runs of spaces survive
/// so the structural length matches what the caller typed.
pub fn normalize_name(raw: &str) -> String {
    raw.trim()
        .split(' ')
        .map(title_case_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_token(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.extend(chars.flat_map(|c| c.to_lowercase()));
            out
        }
        None => String::new(),
    }
}

/// Round to one decimal place, the precision used for reported scores.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
