use chrono::Local;

/// Audit date stamp in `MM/DD/YYYY` form, local wall-clock time.
pub fn current_date_stamp() -> String {
    Local::now().format("%m/%d/%Y").to_string()
}

/// Whether `s` looks like an `MM/DD/YYYY` stamp. Format check only, no
/// calendar validation.
pub fn is_date_stamp(s: &str) -> bool {
    let parts: Vec<&str> = s.split('/').collect();
    parts.len() == 3
        && parts[0].len() == 2
        && parts[1].len() == 2
        && parts[2].len() == 4
        && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
}
