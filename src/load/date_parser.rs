use chrono::{NaiveDate, NaiveDateTime};

/// Fast parse of `"YYYY-MM-DD HH:MM:SS[.frac]"` → nanos since epoch.
///
/// Cleaned files carry zone-naive timestamps, so no offset is applied.
/// Falls back to the slash-separated form (`"YYYY/MM/DD HH:MM:SS"`) that raw
/// TLC exports occasionally use.
pub fn parse_timestamp_nanos(s: &str) -> Option<i64> {
    let s = s.trim();
    let b = s.as_bytes();

    // minimal length + separators check
    if b.len() >= 19
        && b[4] == b'-'
        && b[7] == b'-'
        && (b[10] == b' ' || b[10] == b'T')
        && b[13] == b':'
        && b[16] == b':'
    {
        let year: i32 = s.get(0..4)?.parse().ok()?;
        let month: u32 = s.get(5..7)?.parse().ok()?;
        let day: u32 = s.get(8..10)?.parse().ok()?;
        let hour: u32 = s.get(11..13)?.parse().ok()?;
        let min: u32 = s.get(14..16)?.parse().ok()?;
        let sec: u32 = s.get(17..19)?.parse().ok()?;

        let nanos: u32 = if b.len() > 19 {
            if b[19] != b'.' {
                return None;
            }
            let frac = s.get(20..)?;
            if frac.is_empty() || frac.len() > 9 || !frac.bytes().all(|c| c.is_ascii_digit()) {
                return None;
            }
            frac.parse::<u32>().ok()? * 10u32.pow(9 - frac.len() as u32)
        } else {
            0
        };

        let naive = NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_nano_opt(hour, min, sec, nanos)?;
        return naive.and_utc().timestamp_nanos_opt();
    }

    NaiveDateTime::parse_from_str(s, "%Y/%m/%d %H:%M:%S")
        .ok()?
        .and_utc()
        .timestamp_nanos_opt()
}
