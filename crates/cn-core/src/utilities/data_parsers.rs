//! Data parsing helpers.
//!
//! Schedule data is authored with ISO dates (`YYYY-MM-DD`), zero-padded
//! 24-hour times (`HH:mm`), and override instants (`YYYY-MM-DDTHH:mm`).
//! These helpers split the text into numeric components; range checking is
//! left to the typed constructors in `cn-time`.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if parts.next().is_some() || year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    if !s.bytes().all(|b| b == b'-' || b.is_ascii_digit()) {
        return None;
    }
    Some((year.parse().ok()?, month.parse().ok()?, day.parse().ok()?))
}

/// Parse a wall-clock time in `HH:mm` format.
///
/// A single-digit hour (`9:30`) is accepted; minutes must have two digits.
/// Returns `(hour, minute)` on success.
pub fn parse_hhmm(s: &str) -> Option<(u8, u8)> {
    let (h, m) = s.trim().split_once(':')?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return None;
    }
    if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((h.parse().ok()?, m.parse().ok()?))
}

/// Parse a local date-time in `YYYY-MM-DDTHH:mm` format (a space is also
/// accepted as the separator).
///
/// Returns `((year, month, day), (hour, minute))` on success.
pub fn parse_local_datetime(s: &str) -> Option<((u16, u8, u8), (u8, u8))> {
    let s = s.trim();
    let (date, time) = s.split_once('T').or_else(|| s.split_once(' '))?;
    // Tolerate a trailing seconds component.
    let time = match time.len() {
        8 => time.get(..5)?,
        _ => time,
    };
    Some((parse_iso_date(date)?, parse_hhmm(time)?))
}
