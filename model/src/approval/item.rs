use serde::{Deserialize, Serialize};

use common::deserializers::float_from_string::from_float_or_string;

/// One line item of an approval document.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: String,
    pub description: String,
    #[serde(deserialize_with = "from_float_or_string")]
    pub price: f64,
    #[serde(deserialize_with = "from_float_or_string")]
    pub price_unit: f64,
    #[serde(deserialize_with = "from_float_or_string")]
    pub net_value: f64,
    #[serde(deserialize_with = "from_float_or_string")]
    pub quantity: f64,
    pub unit: String,
    pub currency: String,
    /// Delivery address; some records carry the empty object `{}` here.
    #[serde(default)]
    pub ship_to_address: ShipToAddress,
    pub vendor_id: String,
    pub vendor_name: String,
    pub category_id: String,
    pub cost_objects: Vec<CostObject>,
}

impl Item {
    /// Sum of the accounting distribution percentages. The feed does not
    /// validate this; a known stress record distributes more than 100%.
    pub fn distribution_total(&self) -> f64 {
        self.cost_objects
            .iter()
            .map(|cost_object| cost_object.distribution_percentage)
            .sum()
    }
}

/// Postal delivery address. Every field is optional so that the empty
/// `{}` form round-trips unchanged.
#[derive(Deserialize, Debug, Default, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipToAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl ShipToAddress {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.street.is_none()
            && self.house_number.is_none()
            && self.city.is_none()
            && self.postal_code.is_none()
            && self.country.is_none()
    }
}

/// An accounting distribution line attached to an order item (cost center,
/// GL account, percentage split).
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostObject {
    /// Accounting object category, e.g. `ZCC` for a cost center.
    pub accounting_object: String,
    /// Key of the accounting object, e.g. the cost center number.
    pub accounting_value: String,
    pub gl_account: String,
    pub description: String,
    #[serde(deserialize_with = "from_float_or_string")]
    pub distribution_percentage: f64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_ship_to_address_round_trips_as_empty_object() {
        let address: ShipToAddress = serde_json::from_value(json!({})).unwrap();
        assert!(address.is_empty());
        assert_eq!(json!({}), serde_json::to_value(&address).unwrap());
    }

    #[test]
    fn test_item_accepts_string_amounts() {
        let item: Item = serde_json::from_value(json!({
            "itemId": "00010",
            "description": "Ergonomic office chair",
            "price": "329.99",
            "priceUnit": 1,
            "netValue": "1649.95",
            "quantity": "5.0",
            "unit": "EA",
            "currency": "EUR",
            "shipToAddress": {},
            "vendorId": "0000300251",
            "vendorName": "Becker Office GmbH",
            "categoryId": "56101500",
            "costObjects": [{
                "accountingObject": "ZCC",
                "accountingValue": "0000100533",
                "glAccount": "0000400000",
                "description": "Facility Management",
                "distributionPercentage": 100
            }]
        }))
        .unwrap();

        assert_eq!(329.99, item.price);
        assert_eq!(5.0, item.quantity);
        assert_eq!(100.0, item.distribution_total());
    }

    #[test]
    fn test_distribution_total_sums_all_cost_objects() {
        let cost_object = |percentage: f64| CostObject {
            accounting_object: "ZCC".to_string(),
            accounting_value: "0000100533".to_string(),
            gl_account: "0000400000".to_string(),
            description: "Facility Management".to_string(),
            distribution_percentage: percentage,
        };

        let mut item: Item = serde_json::from_value(json!({
            "itemId": "00010",
            "description": "Desk lamp",
            "price": 39.29,
            "priceUnit": 1,
            "netValue": 196.45,
            "quantity": 5,
            "unit": "EA",
            "currency": "EUR",
            "vendorId": "0000300251",
            "vendorName": "Becker Office GmbH",
            "categoryId": "39111500",
            "costObjects": []
        }))
        .unwrap();
        assert_eq!(0.0, item.distribution_total());

        item.cost_objects = vec![cost_object(60.0), cost_object(60.0)];
        assert_eq!(120.0, item.distribution_total());
    }
}
