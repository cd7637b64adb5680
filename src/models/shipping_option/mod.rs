// Shipping option model
// Delivery choice as received from the shipping-quote feed

use serde::{Deserialize, Serialize};

/// A named delivery choice whose description encodes its delivery date.
///
/// Options are immutable once received; the picker only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    pub id: String,
    /// Natural-language delivery label, e.g. "Monday 25 December, 2024"
    pub description: String,
    /// Currency-agnostic amount
    pub cost: f64,
    /// Extra shopper-facing text shown in a collapsible block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_description: Option<String>,
}

impl ShippingOption {
    /// Create a new shipping option
    ///
    /// # Examples
    /// ```
    /// use delivery_date_picker::models::shipping_option::ShippingOption;
    ///
    /// let option = ShippingOption::new("express", "Monday 25 December, 2024", 12.5);
    /// assert_eq!(option.id, "express");
    /// ```
    pub fn new(id: impl Into<String>, description: impl Into<String>, cost: f64) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            cost,
            additional_description: None,
        }
    }

    /// Attach an additional description
    pub fn with_additional_description(mut self, text: impl Into<String>) -> Self {
        self.additional_description = Some(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_option_new() {
        let option = ShippingOption::new("a", "25 December, 2024", 10.0);
        assert_eq!(option.id, "a");
        assert_eq!(option.description, "25 December, 2024");
        assert_eq!(option.cost, 10.0);
        assert!(option.additional_description.is_none());
    }

    #[test]
    fn test_deserializes_feed_entry_without_additional_description() {
        let json = r#"{"id":"b","description":"Tuesday 3 June, 2025","cost":4.95}"#;
        let option: ShippingOption = serde_json::from_str(json).unwrap();
        assert_eq!(option, ShippingOption::new("b", "Tuesday 3 June, 2025", 4.95));
    }

    #[test]
    fn test_deserializes_additional_description() {
        let json = r#"{
            "id": "c",
            "description": "3 June, 2025",
            "cost": 0,
            "additionalDescription": "Leave at door"
        }"#;
        let option: ShippingOption = serde_json::from_str(json).unwrap();
        assert_eq!(option.additional_description.as_deref(), Some("Leave at door"));
    }
}
