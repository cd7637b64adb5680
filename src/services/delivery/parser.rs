//! Delivery description parsing.
//!
//! Shipping quotes label each option with text such as
//! `"Monday 25 December, 2024"`. The leading weekday is optional; what
//! remains must read `<day> <Month>, <year>`. Anything else simply has no
//! delivery date.

use chrono::NaiveDate;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a shipping option description into its delivery date.
///
/// Returns `None` for any text outside the grammar, including dates that do
/// not exist on the calendar.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use delivery_date_picker::services::delivery::parse_delivery_date;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 12, 25);
/// assert_eq!(parse_delivery_date("Wednesday 25 December, 2024"), expected);
/// assert_eq!(parse_delivery_date("25 December, 2024"), expected);
/// assert_eq!(parse_delivery_date("Tomorrow"), None);
/// ```
pub fn parse_delivery_date(description: &str) -> Option<NaiveDate> {
    let date_text = match description.split_once(' ') {
        Some((first, rest)) if WEEKDAYS.contains(&first) => rest,
        _ => description,
    };

    parse_day_month_year(date_text)
}

fn parse_day_month_year(text: &str) -> Option<NaiveDate> {
    let text = text.trim_end();
    let (day_str, rest) = text.split_once(' ')?;
    let (month_str, year_str) = rest.split_once(", ")?;

    let day = parse_digits(day_str, 2)?;
    let month = month_from_name(month_str)?;
    let year = parse_digits(year_str, 4)?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Unsigned decimal of 1..=`max_len` ASCII digits.
fn parse_digits(s: &str, max_len: usize) -> Option<u32> {
    if s.is_empty() || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn month_from_name(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name))
        .map(|idx| idx as u32 + 1)
}
