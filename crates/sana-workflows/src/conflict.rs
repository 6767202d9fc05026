use jiff::Timestamp;

use sana_core::models::appointment::Appointment;

/// Half-open interval overlap: [s1, e1) and [s2, e2) clash iff
/// `s1 < e2 && s2 < e1`. Full containment satisfies the same test.
/// Back-to-back intervals (one ends exactly where the other starts) do
/// not overlap.
pub fn overlaps(s1: Timestamp, e1: Timestamp, s2: Timestamp, e2: Timestamp) -> bool {
    s1 < e2 && s2 < e1
}

/// First calendar-blocking appointment that clashes with [start, end).
/// Cancelled and no-show appointments never conflict.
pub fn find_conflict(
    existing: &[Appointment],
    start: Timestamp,
    end: Timestamp,
) -> Option<&Appointment> {
    existing
        .iter()
        .filter(|a| a.blocks_calendar())
        .find(|a| overlaps(a.start, a.end(), start, end))
}
