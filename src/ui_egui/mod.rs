mod additional_description;
mod app;
mod delivery_picker;
pub mod theme;

pub use additional_description::render_additional_description;
pub use app::PickerApp;
pub use delivery_picker::render_delivery_picker;
