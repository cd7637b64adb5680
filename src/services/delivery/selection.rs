//! Selected delivery date and the option behind it.

use chrono::NaiveDate;

use super::availability::{AvailabilityIndex, DateKey};
use super::parser::parse_delivery_date;
use crate::models::shipping_option::ShippingOption;

/// Receives the shopper's choice so the host can update the consignment.
///
/// Notification is one-way: the picker neither waits for nor inspects the
/// outcome.
#[cfg_attr(test, mockall::automock)]
pub trait ShippingOptionSelector {
    fn on_selected_option(&mut self, consignment_id: &str, shipping_option_id: &str);
}

impl<F> ShippingOptionSelector for F
where
    F: FnMut(&str, &str),
{
    fn on_selected_option(&mut self, consignment_id: &str, shipping_option_id: &str) {
        self(consignment_id, shipping_option_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected { date: NaiveDate, option_id: String },
}

#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        match &self.state {
            SelectionState::Selected { date, .. } => Some(*date),
            SelectionState::Unselected => None,
        }
    }

    pub fn selected_option_id(&self) -> Option<&str> {
        match &self.state {
            SelectionState::Selected { option_id, .. } => Some(option_id.as_str()),
            SelectionState::Unselected => None,
        }
    }

    /// Handle a click on a calendar day.
    ///
    /// Unavailable days are ignored. An available day becomes the selection
    /// and `selector` is told about it exactly once per click. Returns the
    /// chosen option id.
    pub fn click_day(
        &mut self,
        date: &impl DateKey,
        index: &AvailabilityIndex,
        consignment_id: &str,
        selector: &mut dyn ShippingOptionSelector,
    ) -> Option<String> {
        let day = date.date_key();
        let Some(option) = index.option_for(&day) else {
            log::debug!("Ignoring click on unavailable day {}", day);
            return None;
        };

        log::info!(
            "Selected delivery on {} via option '{}' for consignment '{}'",
            day,
            option.id,
            consignment_id
        );

        // Re-clicking the current selection notifies again.
        self.state = SelectionState::Selected {
            date: day,
            option_id: option.id.clone(),
        };
        selector.on_selected_option(consignment_id, &option.id);
        Some(option.id.clone())
    }

    /// Adopt a selection the host already confirmed, if nothing has been
    /// chosen locally yet. Never notifies the host.
    pub fn reconcile(&mut self, external_id: Option<&str>, options: &[ShippingOption]) -> bool {
        if self.state != SelectionState::Unselected || options.is_empty() {
            return false;
        }
        let Some(external_id) = external_id else {
            return false;
        };

        let found = options
            .iter()
            .find(|option| option.id == external_id)
            .and_then(|option| {
                parse_delivery_date(&option.description).map(|date| (date, option))
            });

        match found {
            Some((date, option)) => {
                log::debug!("Restored confirmed option '{}' on {}", option.id, date);
                self.state = SelectionState::Selected {
                    date,
                    option_id: option.id.clone(),
                };
                true
            }
            None => false,
        }
    }

    /// Date to highlight. Hidden while the host's confirmed option differs
    /// from the local one, e.g. while a choice is still in flight.
    pub fn displayed_date(&self, external_id: Option<&str>) -> Option<NaiveDate> {
        match &self.state {
            SelectionState::Selected { date, option_id }
                if external_id == Some(option_id.as_str()) =>
            {
                Some(*date)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn options() -> Vec<ShippingOption> {
        vec![
            ShippingOption::new("std", "Friday 27 December, 2024", 5.0),
            ShippingOption::new("exp", "Monday 23 December, 2024", 15.0),
            ShippingOption::new("flex", "Any day this week", 2.0),
        ]
    }

    #[test]
    fn test_click_on_unavailable_day_is_ignored() {
        let index = AvailabilityIndex::build(&options());
        let mut controller = SelectionController::new();
        let mut selector = MockShippingOptionSelector::new();
        selector.expect_on_selected_option().never();

        let chosen = controller.click_day(&ymd(2024, 12, 24), &index, "c1", &mut selector);

        assert_eq!(chosen, None);
        assert_eq!(controller.state(), &SelectionState::Unselected);
    }

    #[test]
    fn test_click_on_available_day_selects_and_notifies_once() {
        let index = AvailabilityIndex::build(&options());
        let mut controller = SelectionController::new();
        let mut selector = MockShippingOptionSelector::new();
        selector
            .expect_on_selected_option()
            .withf(|consignment, option| consignment == "c1" && option == "exp")
            .times(1)
            .return_const(());

        let chosen = controller.click_day(&ymd(2024, 12, 23), &index, "c1", &mut selector);

        assert_eq!(chosen.as_deref(), Some("exp"));
        assert_eq!(
            controller.state(),
            &SelectionState::Selected {
                date: ymd(2024, 12, 23),
                option_id: "exp".to_string()
            }
        );
    }

    #[test]
    fn test_reclicking_selected_day_notifies_again() {
        let index = AvailabilityIndex::build(&options());
        let mut controller = SelectionController::new();
        let mut selector = MockShippingOptionSelector::new();
        selector
            .expect_on_selected_option()
            .withf(|consignment, option| consignment == "c1" && option == "std")
            .times(2)
            .return_const(());

        controller.click_day(&ymd(2024, 12, 27), &index, "c1", &mut selector);
        let chosen = controller.click_day(&ymd(2024, 12, 27), &index, "c1", &mut selector);

        assert_eq!(chosen.as_deref(), Some("std"));
        assert_eq!(controller.selected_date(), Some(ymd(2024, 12, 27)));
    }

    #[test]
    fn test_unavailable_click_keeps_existing_selection() {
        let index = AvailabilityIndex::build(&options());
        let mut controller = SelectionController::new();
        let mut calls = Vec::new();
        let mut record = |c: &str, o: &str| calls.push((c.to_string(), o.to_string()));

        controller.click_day(&ymd(2024, 12, 27), &index, "c1", &mut record);
        controller.click_day(&ymd(2024, 12, 28), &index, "c1", &mut record);

        assert_eq!(controller.selected_option_id(), Some("std"));
        assert_eq!(calls, vec![("c1".to_string(), "std".to_string())]);
    }

    #[test]
    fn test_reconcile_adopts_confirmed_option_without_callback() {
        let mut controller = SelectionController::new();
        assert!(controller.reconcile(Some("std"), &options()));
        assert_eq!(controller.selected_date(), Some(ymd(2024, 12, 27)));
        assert_eq!(controller.selected_option_id(), Some("std"));
    }

    #[test]
    fn test_reconcile_only_applies_while_unselected() {
        let index = AvailabilityIndex::build(&options());
        let mut controller = SelectionController::new();
        controller.click_day(&ymd(2024, 12, 23), &index, "c1", &mut |_: &str, _: &str| {});

        assert!(!controller.reconcile(Some("std"), &options()));
        assert_eq!(controller.selected_option_id(), Some("exp"));
    }

    #[test]
    fn test_reconcile_ignores_unknown_or_undated_options() {
        let mut controller = SelectionController::new();
        assert!(!controller.reconcile(None, &options()));
        assert!(!controller.reconcile(Some("missing"), &options()));
        assert!(!controller.reconcile(Some("flex"), &options()));
        assert!(!controller.reconcile(Some("std"), &[]));
        assert_eq!(controller.state(), &SelectionState::Unselected);
    }

    #[test]
    fn test_displayed_date_requires_matching_external_id() {
        let index = AvailabilityIndex::build(&options());
        let mut controller = SelectionController::new();
        controller.click_day(&ymd(2024, 12, 23), &index, "c1", &mut |_: &str, _: &str| {});

        assert_eq!(controller.displayed_date(None), None);
        assert_eq!(controller.displayed_date(Some("std")), None);
        assert_eq!(controller.displayed_date(Some("exp")), Some(ymd(2024, 12, 23)));
    }

    #[test]
    fn test_displayed_date_none_while_unselected() {
        let controller = SelectionController::new();
        assert_eq!(controller.displayed_date(None), None);
        assert_eq!(controller.displayed_date(Some("std")), None);
    }
}
