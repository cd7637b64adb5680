//! Month navigation clamped to the months that hold delivery dates.

use chrono::NaiveDate;

use super::availability::AvailabilityIndex;
use crate::utils::date::{first_day_of_month, shift_month};

/// Inclusive month range, each end stored as the first day of its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationBounds {
    pub start_month: NaiveDate,
    pub end_month: NaiveDate,
}

impl NavigationBounds {
    /// `None` when nothing in the index is deliverable.
    pub fn from_index(index: &AvailabilityIndex) -> Option<Self> {
        let earliest = index.earliest()?;
        let latest = index.latest()?;
        Some(Self {
            start_month: first_day_of_month(earliest),
            end_month: first_day_of_month(latest),
        })
    }

    pub fn contains(&self, month: NaiveDate) -> bool {
        let month = first_day_of_month(month);
        self.start_month <= month && month <= self.end_month
    }
}

/// Tracks the displayed month and refuses moves outside the bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthNavigator {
    bounds: Option<NavigationBounds>,
    displayed_month: NaiveDate,
}

impl MonthNavigator {
    /// Start at the first bounded month, or at `fallback`'s month when
    /// navigation is unconstrained.
    pub fn new(bounds: Option<NavigationBounds>, fallback: NaiveDate) -> Self {
        let displayed_month = bounds
            .map(|b| b.start_month)
            .unwrap_or_else(|| first_day_of_month(fallback));
        Self {
            bounds,
            displayed_month,
        }
    }

    pub fn bounds(&self) -> Option<NavigationBounds> {
        self.bounds
    }

    pub fn displayed_month(&self) -> NaiveDate {
        self.displayed_month
    }

    pub fn can_navigate_to(&self, target: NaiveDate) -> bool {
        self.bounds.map_or(true, |bounds| bounds.contains(target))
    }

    /// Move to `target`'s month if allowed. Returns whether the month changed.
    pub fn request_month_change(&mut self, target: NaiveDate) -> bool {
        if !self.can_navigate_to(target) {
            log::debug!("Month change to {} rejected by bounds {:?}", target, self.bounds);
            return false;
        }

        let month = first_day_of_month(target);
        let changed = month != self.displayed_month;
        self.displayed_month = month;
        changed
    }

    pub fn can_go_previous(&self) -> bool {
        self.adjacent(-1)
            .map_or(false, |month| self.can_navigate_to(month))
    }

    pub fn can_go_next(&self) -> bool {
        self.adjacent(1)
            .map_or(false, |month| self.can_navigate_to(month))
    }

    pub fn go_previous(&mut self) -> bool {
        match self.adjacent(-1) {
            Some(month) => self.request_month_change(month),
            None => false,
        }
    }

    pub fn go_next(&mut self) -> bool {
        match self.adjacent(1) {
            Some(month) => self.request_month_change(month),
            None => false,
        }
    }

    fn adjacent(&self, delta: i32) -> Option<NaiveDate> {
        shift_month(self.displayed_month, delta)
    }
}
