//! Canonical textual form for datetime-valued properties and fields.
//!
//! Timestamps travel in documents as RFC 3339 strings normalized to UTC.
//! The subsecond part is printed only when nonzero, and then in the
//! shortest of three, six, or nine digits, so `12:30:00.120` stays
//! `.120` rather than growing trailing zeros.

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

/// Format a timestamp in the canonical UTC form.
pub fn format(timestamp: OffsetDateTime) -> String {
    let utc = timestamp.to_offset(UtcOffset::UTC);
    let mut out = format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        utc.year(),
        utc.month() as u8,
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second()
    );
    let nanos = utc.nanosecond();
    if nanos != 0 {
        if nanos % 1_000_000 == 0 {
            out.push_str(&format!(".{:03}", nanos / 1_000_000));
        } else if nanos % 1_000 == 0 {
            out.push_str(&format!(".{:06}", nanos / 1_000));
        } else {
            out.push_str(&format!(".{:09}", nanos));
        }
    }
    out.push('Z');
    out
}

/// Parse an RFC 3339 timestamp, keeping its original offset.
pub fn parse(text: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(text, &Rfc3339)
}
