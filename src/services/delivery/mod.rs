// Delivery date picker core
// Description parsing, availability, navigation and selection

pub mod availability;
pub mod grid;
pub mod navigation;
pub mod parser;
pub mod picker;
pub mod selection;

pub use availability::{AvailabilityIndex, DateKey};
pub use grid::{DayCell, MonthGrid};
pub use navigation::{MonthNavigator, NavigationBounds};
pub use parser::parse_delivery_date;
pub use picker::{DeliveryDatePicker, Footer};
pub use selection::{SelectionController, SelectionState, ShippingOptionSelector};
