//! Delivery date picker widget.
//!
//! Month header with clamped navigation arrows, a 7-column grid of day
//! buttons carrying price badges, and the selection footer.

use egui::{Button, RichText};

use super::theme::PickerTheme;
use crate::services::currency::CurrencyFormatter;
use crate::services::delivery::{DayCell, DeliveryDatePicker, ShippingOptionSelector};

const DAY_CELL_SIZE: [f32; 2] = [44.0, 40.0];

/// Render the picker. Returns the option id chosen this frame, if any.
pub fn render_delivery_picker(
    ui: &mut egui::Ui,
    picker: &mut DeliveryDatePicker,
    theme: &PickerTheme,
    currency: &dyn CurrencyFormatter,
    selector: &mut dyn ShippingOptionSelector,
) -> Option<String> {
    if picker.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading delivery dates…");
        });
    }

    let enabled = !picker.is_loading();
    let chosen = ui
        .add_enabled_ui(enabled, |ui| {
            render_header(ui, picker);
            ui.separator();
            let chosen = render_grid(ui, picker, theme, currency, selector);
            ui.separator();
            chosen
        })
        .inner;

    ui.label(RichText::new(picker.footer().text(currency)).color(theme.footer_text));
    chosen
}

fn render_header(ui: &mut egui::Ui, picker: &mut DeliveryDatePicker) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(picker.can_go_previous(), Button::new("◀").small())
            .on_hover_text("Previous month")
            .clicked()
        {
            picker.go_previous();
        }

        ui.label(
            RichText::new(picker.displayed_month().format("%B %Y").to_string()).strong(),
        );

        if ui
            .add_enabled(picker.can_go_next(), Button::new("▶").small())
            .on_hover_text("Next month")
            .clicked()
        {
            picker.go_next();
        }
    });
}

fn render_grid(
    ui: &mut egui::Ui,
    picker: &mut DeliveryDatePicker,
    theme: &PickerTheme,
    currency: &dyn CurrencyFormatter,
    selector: &mut dyn ShippingOptionSelector,
) -> Option<String> {
    let grid = picker.month_grid();
    let mut clicked = None;

    egui::Grid::new("delivery_picker_grid")
        .num_columns(7)
        .spacing([4.0, 4.0])
        .min_col_width(DAY_CELL_SIZE[0])
        .show(ui, |ui| {
            for name in grid.weekday_labels() {
                ui.label(RichText::new(name).small().strong());
            }
            ui.end_row();

            for week in &grid.weeks {
                for slot in week {
                    match slot {
                        Some(cell) => {
                            if render_day(ui, cell, theme, currency).clicked() {
                                clicked = Some(cell.date);
                            }
                        }
                        None => {
                            ui.label("");
                        }
                    }
                }
                ui.end_row();
            }
        });

    clicked.and_then(|date| picker.click_day(&date, selector))
}

fn render_day(
    ui: &mut egui::Ui,
    cell: &DayCell,
    theme: &PickerTheme,
    currency: &dyn CurrencyFormatter,
) -> egui::Response {
    let mut text = cell.date.format("%-d").to_string();
    if let Some(price) = cell.price {
        text.push('\n');
        text.push_str(&currency.format_amount(price));
    }

    let mut label = RichText::new(text).small();
    if !cell.in_displayed_month {
        label = label.color(theme.outside_text);
    } else if cell.available {
        label = label.color(theme.price_text);
    }

    let mut button = Button::new(label)
        .selected(cell.selected)
        .min_size(DAY_CELL_SIZE.into());
    if cell.selected {
        button = button.fill(theme.selected_background);
    } else if cell.available {
        button = button.fill(theme.available_background);
    }

    ui.add_enabled(!cell.is_disabled(), button)
}
