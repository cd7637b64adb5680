//! Date → shipping option index.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use super::parser::parse_delivery_date;
use crate::models::shipping_option::ShippingOption;

/// Day-granularity identity of a point in time.
///
/// Two values on the same calendar day produce the same key regardless of
/// time of day. Zoned values use their own offset's calendar day.
pub trait DateKey {
    fn date_key(&self) -> NaiveDate;
}

impl DateKey for NaiveDate {
    fn date_key(&self) -> NaiveDate {
        *self
    }
}

impl DateKey for NaiveDateTime {
    fn date_key(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> DateKey for DateTime<Tz> {
    fn date_key(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Shipping options keyed by the delivery date their description names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityIndex {
    by_date: BTreeMap<NaiveDate, ShippingOption>,
}

impl AvailabilityIndex {
    /// Index every option whose description parses. When several options
    /// name the same day the later one replaces the earlier.
    pub fn build(options: &[ShippingOption]) -> Self {
        let by_date = options
            .iter()
            .fold(BTreeMap::new(), |mut map, option| {
                match parse_delivery_date(&option.description) {
                    Some(date) => {
                        if let Some(replaced) = map.insert(date, option.clone()) {
                            log::debug!(
                                "Shipping option '{}' replaces '{}' on {}",
                                option.id,
                                replaced.id,
                                date
                            );
                        }
                    }
                    None => log::trace!(
                        "No delivery date in description of option '{}': {:?}",
                        option.id,
                        option.description
                    ),
                }
                map
            });

        log::debug!(
            "Built availability index: {} dated of {} options",
            by_date.len(),
            options.len()
        );

        Self { by_date }
    }

    pub fn is_available(&self, date: &impl DateKey) -> bool {
        self.by_date.contains_key(&date.date_key())
    }

    pub fn option_for(&self, date: &impl DateKey) -> Option<&ShippingOption> {
        self.by_date.get(&date.date_key())
    }

    /// Available dates in ascending order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }

    pub fn earliest(&self) -> Option<NaiveDate> {
        self.by_date.keys().next().copied()
    }

    pub fn latest(&self) -> Option<NaiveDate> {
        self.by_date.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
