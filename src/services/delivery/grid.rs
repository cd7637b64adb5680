//! Month grid for the picker: weeks of day cells with availability and
//! price badge data.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::availability::AvailabilityIndex;
use crate::models::settings::CalendarSettings;
use crate::utils::date::{days_in_month, first_day_of_month, is_same_month};

const FIXED_WEEK_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_displayed_month: bool,
    pub available: bool,
    pub selected: bool,
    /// Cost of the option deliverable on this day
    pub price: Option<f64>,
}

impl DayCell {
    pub fn is_disabled(&self) -> bool {
        !self.available
    }
}

/// One displayed month. Hidden outside days are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub month: NaiveDate,
    pub week_start: Weekday,
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

impl MonthGrid {
    pub fn build(
        month: NaiveDate,
        index: &AvailabilityIndex,
        selected: Option<NaiveDate>,
        settings: &CalendarSettings,
    ) -> Self {
        let first = first_day_of_month(month);
        let week_start = settings.week_starts_on.weekday();
        let lead = days_between(week_start, first.weekday());

        let week_count = if settings.fixed_weeks {
            FIXED_WEEK_COUNT
        } else {
            (lead + days_in_month(first.year(), first.month()) as usize).div_ceil(7)
        };

        let weeks = (0..week_count)
            .map(|week| {
                std::array::from_fn(|weekday| {
                    // Slots past chrono's supported range stay empty.
                    let offset = (week * 7 + weekday) as i64 - lead as i64;
                    let date = first.checked_add_signed(Duration::days(offset))?;
                    let in_displayed_month = is_same_month(date, first);
                    if !in_displayed_month && !settings.show_outside_days {
                        return None;
                    }

                    let option = index.option_for(&date);
                    Some(DayCell {
                        date,
                        in_displayed_month,
                        available: option.is_some(),
                        selected: selected == Some(date),
                        price: option.map(|o| o.cost),
                    })
                })
            })
            .collect();

        Self {
            month: first,
            week_start,
            weeks,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().flatten()
    }

    /// Column headers in grid order, e.g. "Su" .. "Sa".
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        std::array::from_fn(|offset| {
            let mut day = self.week_start;
            for _ in 0..offset {
                day = day.succ();
            }
            short_weekday_name(day)
        })
    }
}

/// Days from `from` forward to `to`, 0..=6.
fn days_between(from: Weekday, to: Weekday) -> usize {
    ((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7) as usize
}

fn short_weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Su",
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
    }
}
