use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use common::deserializers::float_from_string::from_float_or_string;

#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    #[serde(rename = "PO")]
    PurchaseOrder,
    #[serde(rename = "SC")]
    ShoppingCart,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::PurchaseOrder => "PO",
            ObjectType::ShoppingCart => "SC",
        }
    }
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let printable = self.as_str();
        write!(f, "{}", printable)
    }
}

impl FromStr for ObjectType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_uppercase();
        match s.as_str() {
            "PO" => Ok(ObjectType::PurchaseOrder),
            "SC" => Ok(ObjectType::ShoppingCart),
            other => Err(anyhow!("Not supported ObjectType variant: {other}")),
        }
    }
}

/// Document metadata. `total` is the author-supplied header total; nothing
/// reconciles it against the item net values, and at least one stress
/// record deliberately carries a total in the billions.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub object_id: String,
    pub object_name: String,
    pub created_by_name: String,
    pub company_code: String,
    pub object_type: ObjectType,
    pub source_system: String,
    #[serde(deserialize_with = "from_float_or_string")]
    pub total: f64,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_object_type_wire_strings() {
        assert_eq!("PO", ObjectType::PurchaseOrder.to_string());
        assert_eq!(ObjectType::ShoppingCart, ObjectType::from_str("sc").unwrap());
        assert!(ObjectType::from_str("INVOICE").is_err());
    }

    #[test]
    fn test_header_total_accepts_string_amount() {
        let header: Header = serde_json::from_value(json!({
            "objectId": "4500019071",
            "objectName": "Office chairs and desks",
            "createdByName": "Maria Fuentes",
            "companyCode": "0001",
            "objectType": "PO",
            "sourceSystem": "DEMO",
            "total": "1846.40",
            "currency": "EUR"
        }))
        .unwrap();

        assert_eq!(1846.40, header.total);
        assert_eq!(ObjectType::PurchaseOrder, header.object_type);
    }
}
