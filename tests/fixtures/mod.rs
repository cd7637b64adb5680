// Test fixtures - reusable test data
// Provides consistent shipping options across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use delivery_date_picker::models::shipping_option::ShippingOption;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Christmas Day 2024 (a Wednesday)
    pub fn christmas_2024() -> NaiveDate {
        ymd(2024, 12, 25)
    }

    /// The day a host would report as "today" in these tests
    pub fn today() -> NaiveDate {
        ymd(2024, 10, 19)
    }
}

/// Sample shipping option lists
pub mod options {
    use super::*;

    /// Options all delivering in December 2024, plus one undated option
    pub fn december_quote() -> Vec<ShippingOption> {
        vec![
            ShippingOption::new("express", "Monday 23 December, 2024", 15.0),
            ShippingOption::new("standard", "Friday 27 December, 2024", 5.0),
            ShippingOption::new("economy", "Monday 30 December, 2024", 2.5),
            ShippingOption::new("pickup", "Collect from store", 0.0),
        ]
    }

    /// Options spanning November 2024 to January 2025
    pub fn holiday_quote() -> Vec<ShippingOption> {
        vec![
            ShippingOption::new("early", "Friday 29 November, 2024", 20.0),
            ShippingOption::new("mid", "25 December, 2024", 12.0),
            ShippingOption::new("late", "Thursday 9 January, 2025", 3.0)
                .with_additional_description("Ships after the holiday break"),
        ]
    }

    /// Two options naming the same day
    pub fn duplicate_quote() -> Vec<ShippingOption> {
        vec![
            ShippingOption::new("a", "25 December, 2024", 10.0),
            ShippingOption::new("b", "25 December, 2024", 20.0),
        ]
    }
}
