//! 注册商日期格式处理
//!
//! The registrar reports dates in US locale order (`MM/DD/YYYY`, month and
//! day possibly unpadded). Downstream consumers expect ISO calendar dates.

use chrono::NaiveDate;

/// Parse a `MM/DD/YYYY` date.
///
/// Returns `None` for empty input, a wrong number of components, non-numeric
/// components, or an impossible calendar date.
pub fn parse_us_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let mut parts = raw.split('/');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
