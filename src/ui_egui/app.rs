use std::collections::HashMap;

use chrono::{Local, NaiveDate};

use super::additional_description::render_additional_description;
use super::delivery_picker::render_delivery_picker;
use super::theme::PickerTheme;
use crate::models::picker_props::PickerProps;
use crate::models::settings::PickerSettings;
use crate::models::shipping_option::ShippingOption;
use crate::services::currency::ShopperCurrency;
use crate::services::delivery::{DeliveryDatePicker, SelectionState};
use crate::services::toggle::AdditionalDescription;

/// Stand-in checkout host: feeds options to the picker and confirms each
/// choice on the following frame, the way a consignment update would.
pub struct PickerApp {
    picker: DeliveryDatePicker,
    currency: ShopperCurrency,
    /// Additional descriptions keyed by shipping option id
    descriptions: HashMap<String, AdditionalDescription>,
    /// Choice sent to the host but not yet confirmed
    pending_confirmation: Option<String>,
}

impl PickerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: PickerSettings,
        options: Vec<ShippingOption>,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_today(settings, options, Local::now().date_naive())
    }

    fn with_today(
        settings: PickerSettings,
        options: Vec<ShippingOption>,
        today: NaiveDate,
    ) -> Self {
        let descriptions = options
            .iter()
            .filter_map(|option| {
                option.additional_description.as_ref().map(|text| {
                    (
                        option.id.clone(),
                        AdditionalDescription::new(
                            text.clone(),
                            settings.additional_description_open_by_default,
                        ),
                    )
                })
            })
            .collect();

        let props = PickerProps::new(settings.consignment_id.clone())
            .with_options(options)
            .with_selected_option(settings.selected_shipping_option_id.clone());

        Self {
            picker: DeliveryDatePicker::new(props, settings.calendar.clone(), today),
            currency: ShopperCurrency::from(&settings.currency),
            descriptions,
            pending_confirmation: None,
        }
    }

    /// Mark the pending choice as confirmed by the host.
    fn confirm_pending(&mut self) {
        if let Some(option_id) = self.pending_confirmation.take() {
            log::debug!("Host confirmed shipping option '{}'", option_id);
            let props = self
                .picker
                .props()
                .clone()
                .with_selected_option(Some(option_id));
            self.picker.update_props(props);
        }
    }

    fn selected_option_id(&self) -> Option<&str> {
        match self.picker.selection() {
            SelectionState::Selected { option_id, .. } => Some(option_id.as_str()),
            SelectionState::Unselected => None,
        }
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.confirm_pending();
        let theme = PickerTheme::for_visuals(&ctx.style().visuals);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Choose a delivery date");
            ui.add_space(8.0);

            let mut notified = None;
            let mut selector = |consignment_id: &str, option_id: &str| {
                log::info!(
                    "Updating consignment '{}' with shipping option '{}'",
                    consignment_id,
                    option_id
                );
                notified = Some(option_id.to_string());
            };
            render_delivery_picker(ui, &mut self.picker, &theme, &self.currency, &mut selector);

            if let Some(option_id) = notified {
                self.pending_confirmation = Some(option_id);
                ctx.request_repaint();
            }

            let selected = self.selected_option_id().map(str::to_string);
            if let Some(extra) = selected.and_then(|id| self.descriptions.get_mut(&id)) {
                ui.add_space(8.0);
                render_additional_description(ui, extra);
            }
        });
    }
}
