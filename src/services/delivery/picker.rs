//! Delivery date picker component state.
//!
//! Owns the host props and everything derived from them. The availability
//! index and navigation bounds are rebuilt only when the option list itself
//! is replaced, so hosts that re-send the same `Arc` pay nothing.

use std::sync::Arc;

use chrono::NaiveDate;

use super::availability::{AvailabilityIndex, DateKey};
use super::grid::MonthGrid;
use super::navigation::{MonthNavigator, NavigationBounds};
use super::selection::{SelectionController, SelectionState, ShippingOptionSelector};
use crate::models::picker_props::PickerProps;
use crate::models::settings::CalendarSettings;
use crate::services::currency::CurrencyFormatter;

/// Text under the calendar.
#[derive(Debug, Clone, PartialEq)]
pub enum Footer {
    Selected { date: NaiveDate, cost: f64 },
    Prompt,
}

impl Footer {
    pub fn text(&self, currency: &dyn CurrencyFormatter) -> String {
        match self {
            Footer::Selected { date, cost } => format!(
                "Selected Delivery Date: {} — {}",
                date.format("%A, %-d %B, %Y"),
                currency.format_amount(*cost)
            ),
            Footer::Prompt => "Please select a delivery date.".to_string(),
        }
    }
}

pub struct DeliveryDatePicker {
    props: PickerProps,
    settings: CalendarSettings,
    /// Month shown when there is nothing to bound navigation
    today: NaiveDate,
    index: AvailabilityIndex,
    navigator: MonthNavigator,
    selection: SelectionController,
}

impl DeliveryDatePicker {
    pub fn new(props: PickerProps, settings: CalendarSettings, today: NaiveDate) -> Self {
        let index = AvailabilityIndex::build(&props.shipping_options);
        let navigator = MonthNavigator::new(NavigationBounds::from_index(&index), today);
        let mut selection = SelectionController::new();
        selection.reconcile(
            props.selected_shipping_option_id.as_deref(),
            &props.shipping_options,
        );

        Self {
            props,
            settings,
            today,
            index,
            navigator,
            selection,
        }
    }

    /// Apply new props from the host.
    pub fn update_props(&mut self, props: PickerProps) {
        let options_changed = !Arc::ptr_eq(&self.props.shipping_options, &props.shipping_options);
        let selection_changed =
            self.props.selected_shipping_option_id != props.selected_shipping_option_id;
        self.props = props;

        if options_changed {
            self.rebuild();
        }

        if options_changed || selection_changed {
            self.selection.reconcile(
                self.props.selected_shipping_option_id.as_deref(),
                &self.props.shipping_options,
            );
        }
    }

    fn rebuild(&mut self) {
        self.index = AvailabilityIndex::build(&self.props.shipping_options);
        let bounds = NavigationBounds::from_index(&self.index);
        if bounds.is_none() {
            log::warn!(
                "No dated shipping options for consignment '{}'; navigation unconstrained",
                self.props.consignment_id
            );
        }
        self.navigator = MonthNavigator::new(bounds, self.today);
    }

    pub fn props(&self) -> &PickerProps {
        &self.props
    }

    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    pub fn is_loading(&self) -> bool {
        self.props.is_loading
    }

    pub fn index(&self) -> &AvailabilityIndex {
        &self.index
    }

    pub fn is_available(&self, date: &impl DateKey) -> bool {
        self.index.is_available(date)
    }

    pub fn bounds(&self) -> Option<NavigationBounds> {
        self.navigator.bounds()
    }

    pub fn displayed_month(&self) -> NaiveDate {
        self.navigator.displayed_month()
    }

    pub fn can_navigate_to(&self, target: NaiveDate) -> bool {
        self.navigator.can_navigate_to(target)
    }

    pub fn request_month_change(&mut self, target: NaiveDate) -> bool {
        self.navigator.request_month_change(target)
    }

    pub fn can_go_previous(&self) -> bool {
        self.navigator.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.navigator.can_go_next()
    }

    pub fn go_previous(&mut self) -> bool {
        self.navigator.go_previous()
    }

    pub fn go_next(&mut self) -> bool {
        self.navigator.go_next()
    }

    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    /// Handle a day click, notifying `selector` when an option is chosen.
    pub fn click_day(
        &mut self,
        date: &impl DateKey,
        selector: &mut dyn ShippingOptionSelector,
    ) -> Option<String> {
        self.selection
            .click_day(date, &self.index, &self.props.consignment_id, selector)
    }

    /// Highlighted day, hidden while the host's confirmation disagrees.
    pub fn displayed_selection(&self) -> Option<NaiveDate> {
        self.selection
            .displayed_date(self.props.selected_shipping_option_id.as_deref())
    }

    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::build(
            self.navigator.displayed_month(),
            &self.index,
            self.displayed_selection(),
            &self.settings,
        )
    }

    /// Footer for the local selection. Unlike the highlight this does not
    /// wait for the host to confirm.
    pub fn footer(&self) -> Footer {
        self.selection
            .selected_date()
            .and_then(|date| {
                self.index
                    .option_for(&date)
                    .map(|option| Footer::Selected {
                        date,
                        cost: option.cost,
                    })
            })
            .unwrap_or(Footer::Prompt)
    }
}
