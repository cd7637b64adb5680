//! Colors used by the delivery picker widget.

use egui::Color32;

#[derive(Debug, Clone, PartialEq)]
pub struct PickerTheme {
    /// Background of a selectable day
    pub available_background: Color32,

    /// Background of the highlighted day
    pub selected_background: Color32,

    /// Price badge text under the day number
    pub price_text: Color32,

    /// Day numbers outside the displayed month
    pub outside_text: Color32,

    pub footer_text: Color32,
}

impl PickerTheme {
    pub fn light() -> Self {
        Self {
            available_background: Color32::from_rgb(230, 240, 255),
            selected_background: Color32::from_rgb(100, 150, 255),
            price_text: Color32::from_rgb(40, 110, 60),
            outside_text: Color32::from_rgb(160, 160, 160),
            footer_text: Color32::from_rgb(40, 40, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            available_background: Color32::from_rgb(50, 60, 80),
            selected_background: Color32::from_rgb(100, 150, 255),
            price_text: Color32::from_rgb(130, 210, 150),
            outside_text: Color32::from_rgb(110, 110, 110),
            footer_text: Color32::from_rgb(240, 240, 240),
        }
    }

    /// Pick the variant matching the context's current visuals
    pub fn for_visuals(visuals: &egui::Visuals) -> Self {
        if visuals.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
