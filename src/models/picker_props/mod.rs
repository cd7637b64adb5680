// Picker props
// Inputs supplied to the picker by the checkout host

use std::sync::Arc;

use crate::models::shipping_option::ShippingOption;

/// Everything the host hands the picker on each update.
///
/// `shipping_options` is reference counted so the picker can tell a new
/// option list from the one it already indexed by pointer identity.
#[derive(Debug, Clone)]
pub struct PickerProps {
    pub shipping_options: Arc<[ShippingOption]>,
    pub is_loading: bool,
    pub consignment_id: String,
    /// Externally confirmed selection, if any
    pub selected_shipping_option_id: Option<String>,
}

impl PickerProps {
    /// Props with no options and no confirmed selection
    pub fn new(consignment_id: impl Into<String>) -> Self {
        Self {
            shipping_options: Arc::from(Vec::new()),
            is_loading: false,
            consignment_id: consignment_id.into(),
            selected_shipping_option_id: None,
        }
    }

    /// Replace the option list with a freshly allocated one
    pub fn with_options(mut self, options: Vec<ShippingOption>) -> Self {
        self.shipping_options = Arc::from(options);
        self
    }

    pub fn with_selected_option(mut self, option_id: Option<String>) -> Self {
        self.selected_shipping_option_id = option_id;
        self
    }

    pub fn with_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }
}

impl Default for PickerProps {
    fn default() -> Self {
        Self::new(String::new())
    }
}
