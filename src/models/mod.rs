// Module exports for models

pub mod picker_props;
pub mod settings;
pub mod shipping_option;
