//! Constructors shared by the fixture modules, to keep the record literals
//! readable.

use chrono::{DateTime, Utc};

use model::approval::{ApproverStep, CostObject, Requester, ShipToAddress, StepStatus};

pub(crate) fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("livedata timestamp literal")
        .with_timezone(&Utc)
}

pub(crate) fn step(
    name: &str,
    id: &str,
    step_type: &str,
    status: Option<StepStatus>,
    received_date: &str,
    processed_date: Option<&str>,
) -> ApproverStep {
    ApproverStep {
        name: name.to_string(),
        id: id.to_string(),
        step_type: step_type.to_string(),
        status,
        received_date: ts(received_date),
        processed_date: processed_date.map(ts),
    }
}

pub(crate) fn requester(name: &str, id: &str, phone: &str, email: &str) -> Requester {
    Requester {
        name: name.to_string(),
        id: id.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
    }
}

pub(crate) fn address(
    name: &str,
    street: &str,
    house_number: &str,
    city: &str,
    postal_code: &str,
    country: &str,
) -> ShipToAddress {
    ShipToAddress {
        name: Some(name.to_string()),
        street: Some(street.to_string()),
        house_number: Some(house_number.to_string()),
        city: Some(city.to_string()),
        postal_code: Some(postal_code.to_string()),
        country: Some(country.to_string()),
    }
}

pub(crate) fn cost_object(
    accounting_object: &str,
    accounting_value: &str,
    gl_account: &str,
    description: &str,
    distribution_percentage: f64,
) -> CostObject {
    CostObject {
        accounting_object: accounting_object.to_string(),
        accounting_value: accounting_value.to_string(),
        gl_account: gl_account.to_string(),
        description: description.to_string(),
        distribution_percentage,
    }
}
