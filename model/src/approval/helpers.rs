use chrono::{DateTime, Utc};
use uuid::Uuid;

use common::test_tools::constants::{
    COMPANY_CODE_FOR_MOCK_DATA, COST_CENTER_FOR_MOCK_DATA, GL_ACCOUNT_FOR_MOCK_DATA,
    PROCESSED_DATE_FOR_MOCK_DATA, RECEIVED_DATE_FOR_MOCK_DATA, REQUESTER_EMAIL_FOR_MOCK_DATA,
    REQUESTER_ID_FOR_MOCK_DATA,
};

use crate::approval::{
    Approval, ApprovalState, ApproverStep, CostObject, Header, Item, ObjectType, Provider,
    Requester, ShipToAddress, StepStatus,
};

/// This file contains methods used ONLY in unit and integration testing.
pub fn build_sample_approval(state: ApprovalState, steps: usize, current: usize) -> Approval {
    let document_id = Uuid::new_v4();
    Approval {
        internal_id: format!("sample-T-{document_id}"),
        id: document_id.to_string(),
        state,
        provider: Provider::Sample,
        current,
        requester: Requester {
            name: "Maria Fuentes".to_string(),
            id: REQUESTER_ID_FOR_MOCK_DATA.to_string(),
            phone: "+34 911 234 567".to_string(),
            email: REQUESTER_EMAIL_FOR_MOCK_DATA.to_string(),
        },
        approver: (0..steps)
            .map(|step_index| build_step(step_index, current))
            .collect(),
        header: Header {
            object_id: "4500019071".to_string(),
            object_name: "Office chairs and desks".to_string(),
            created_by_name: "Maria Fuentes".to_string(),
            company_code: COMPANY_CODE_FOR_MOCK_DATA.to_string(),
            object_type: ObjectType::PurchaseOrder,
            source_system: "DEMO".to_string(),
            total: 1846.40,
            currency: "EUR".to_string(),
        },
        items: vec![build_item()],
    }
}

pub fn build_step(step_index: usize, current: usize) -> ApproverStep {
    let (status, processed_date) = if step_index < current {
        (Some(StepStatus::Approved), Some(mock_processed_date()))
    } else if step_index == current {
        (Some(StepStatus::AwaitingApproval), None)
    } else {
        (Some(StepStatus::Open), None)
    };

    ApproverStep {
        name: format!("Approver {step_index}"),
        id: format!("APPROVER{step_index}"),
        step_type: "Cost Center Manager".to_string(),
        status,
        received_date: mock_received_date(),
        processed_date,
    }
}

pub fn build_item() -> Item {
    Item {
        item_id: "00010".to_string(),
        description: "Ergonomic office chair".to_string(),
        price: 329.99,
        price_unit: 1.0,
        net_value: 1649.95,
        quantity: 5.0,
        unit: "EA".to_string(),
        currency: "EUR".to_string(),
        ship_to_address: ShipToAddress::default(),
        vendor_id: "0000300251".to_string(),
        vendor_name: "Becker Office GmbH".to_string(),
        category_id: "56101500".to_string(),
        cost_objects: vec![CostObject {
            accounting_object: "ZCC".to_string(),
            accounting_value: COST_CENTER_FOR_MOCK_DATA.to_string(),
            gl_account: GL_ACCOUNT_FOR_MOCK_DATA.to_string(),
            description: "Facility Management".to_string(),
            distribution_percentage: 100.0,
        }],
    }
}

fn mock_received_date() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(RECEIVED_DATE_FOR_MOCK_DATA)
        .unwrap()
        .with_timezone(&Utc)
}

fn mock_processed_date() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(PROCESSED_DATE_FOR_MOCK_DATA)
        .unwrap()
        .with_timezone(&Utc)
}
