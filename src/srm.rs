//! Records read from the SRM backend. Ids are SAP document numbers; the
//! feed keys them as `srm-<document number>`.

use model::approval::{
    Approval, ApprovalState, Header, Item, ObjectType, Provider, ShipToAddress, StepStatus,
};

use crate::support::{address, cost_object, requester, step};

pub fn approvals() -> Vec<Approval> {
    vec![
        spare_parts_cart(),
        keyboards_cart(),
        workshop_tooling_order(),
        safety_boots_cart(),
        // The SRM feed delivers document 1000000571 twice; the duplicate is
        // kept so list rendering gets exercised against it.
        spare_parts_cart(),
    ]
}

fn spare_parts_cart() -> Approval {
    Approval {
        internal_id: "srm-1000000571".to_string(),
        id: "1000000571".to_string(),
        state: ApprovalState::Open,
        provider: Provider::Srm,
        current: 0,
        requester: requester(
            "Jurgen Weiss",
            "WEISSJ",
            "+49 621 555 0233",
            "juergen.weiss@example.com",
        ),
        approver: vec![
            step(
                "Karl Siebert",
                "SIEBERTK",
                "Cost Center Manager",
                Some(StepStatus::AwaitingApproval),
                "2017-03-14T08:12:44.000Z",
                None,
            ),
            step(
                "Monika Ernst",
                "ERNSTM",
                "Financial Approver",
                Some(StepStatus::Open),
                "2017-03-14T08:12:44.000Z",
                None,
            ),
        ],
        header: Header {
            object_id: "1000000571".to_string(),
            object_name: "Spare parts for line 4".to_string(),
            created_by_name: "Jurgen Weiss".to_string(),
            company_code: "1010".to_string(),
            object_type: ObjectType::ShoppingCart,
            source_system: "SRM".to_string(),
            total: 5423.10,
            currency: "EUR".to_string(),
        },
        items: vec![Item {
            item_id: "0000000001".to_string(),
            description: "Conveyor belt 600mm".to_string(),
            price: 1807.70,
            price_unit: 1.0,
            net_value: 5423.10,
            quantity: 3.0,
            unit: "EA".to_string(),
            currency: "EUR".to_string(),
            ship_to_address: address(
                "Plant Mannheim",
                "Industriestrasse",
                "44",
                "Mannheim",
                "68199",
                "DE",
            ),
            vendor_id: "0000402213".to_string(),
            vendor_name: "Rheintech GmbH".to_string(),
            category_id: "23153000".to_string(),
            cost_objects: vec![cost_object(
                "ZCC",
                "0000200144",
                "0000400300",
                "Production Line 4",
                100.0,
            )],
        }],
    }
}

/// Workflow row created before an assignee was determined; SRM sends the
/// step with every column empty and the epoch sentinel in both dates.
fn keyboards_cart() -> Approval {
    Approval {
        internal_id: "srm-1000000612".to_string(),
        id: "1000000612".to_string(),
        state: ApprovalState::Open,
        provider: Provider::Srm,
        current: 0,
        requester: requester(
            "Petra Held",
            "HELDP",
            "+49 621 555 0307",
            "petra.held@example.com",
        ),
        approver: vec![step("", "", "", None, "1970-01-01T00:00:00.000Z", None)],
        header: Header {
            object_id: "1000000612".to_string(),
            object_name: "Ergonomic keyboards".to_string(),
            created_by_name: "Petra Held".to_string(),
            company_code: "1010".to_string(),
            object_type: ObjectType::ShoppingCart,
            source_system: "SRM".to_string(),
            total: 411.60,
            currency: "EUR".to_string(),
        },
        items: vec![Item {
            item_id: "0000000001".to_string(),
            description: "Split keyboard".to_string(),
            price: 68.60,
            price_unit: 1.0,
            net_value: 411.60,
            quantity: 6.0,
            unit: "EA".to_string(),
            currency: "EUR".to_string(),
            ship_to_address: ShipToAddress::default(),
            vendor_id: "0000402501".to_string(),
            vendor_name: "Buroplus KG".to_string(),
            category_id: "43211706".to_string(),
            cost_objects: vec![cost_object(
                "ZCC",
                "0000200150",
                "0000400000",
                "Office IT",
                100.0,
            )],
        }],
    }
}

fn workshop_tooling_order() -> Approval {
    Approval {
        internal_id: "srm-0010401562".to_string(),
        id: "0010401562".to_string(),
        state: ApprovalState::Approved,
        provider: Provider::Srm,
        current: 1,
        requester: requester(
            "Lena Brandt",
            "BRANDTL",
            "+49 6227 747474",
            "lena.brandt@example.com",
        ),
        approver: vec![step(
            "Karl Siebert",
            "SIEBERTK",
            "Cost Center Manager",
            Some(StepStatus::Approved),
            "2017-02-27T14:23:07.000Z",
            Some("2017-03-06T11:08:12.000Z"),
        )],
        header: Header {
            object_id: "0010401562".to_string(),
            object_name: "Workshop tooling".to_string(),
            created_by_name: "Lena Brandt".to_string(),
            company_code: "1010".to_string(),
            object_type: ObjectType::PurchaseOrder,
            source_system: "SRM".to_string(),
            total: 1268.50,
            currency: "EUR".to_string(),
        },
        items: vec![Item {
            item_id: "0000000001".to_string(),
            description: "Torque wrench set".to_string(),
            price: 253.70,
            price_unit: 1.0,
            net_value: 1268.50,
            quantity: 5.0,
            unit: "EA".to_string(),
            currency: "EUR".to_string(),
            ship_to_address: address(
                "Plant Mannheim",
                "Industriestrasse",
                "44",
                "Mannheim",
                "68199",
                "DE",
            ),
            vendor_id: "0000402118".to_string(),
            vendor_name: "Werkzeughaus AG".to_string(),
            category_id: "27111701".to_string(),
            cost_objects: vec![cost_object(
                "ZCC",
                "0000200144",
                "0000400400",
                "Maintenance",
                100.0,
            )],
        }],
    }
}

fn safety_boots_cart() -> Approval {
    Approval {
        internal_id: "srm-1000000644".to_string(),
        id: "1000000644".to_string(),
        state: ApprovalState::Open,
        provider: Provider::Srm,
        current: 1,
        requester: requester(
            "Tomasz Kowalski",
            "KOWALSKIT",
            "+48 61 555 0199",
            "tomasz.kowalski@example.com",
        ),
        approver: vec![
            step(
                "Ewa Majewska",
                "MAJEWSKAE",
                "Cost Center Manager",
                Some(StepStatus::Approved),
                "2017-06-01T06:47:20.000Z",
                Some("2017-06-02T10:15:38.000Z"),
            ),
            step(
                "Marek Zielinski",
                "ZIELINSKIM",
                "Financial Approver",
                Some(StepStatus::AwaitingApproval),
                "2017-06-02T10:15:38.000Z",
                None,
            ),
        ],
        header: Header {
            object_id: "1000000644".to_string(),
            object_name: "Safety boots for warehouse".to_string(),
            created_by_name: "Tomasz Kowalski".to_string(),
            company_code: "1020".to_string(),
            object_type: ObjectType::ShoppingCart,
            source_system: "SRM".to_string(),
            total: 2052.00,
            currency: "PLN".to_string(),
        },
        items: vec![Item {
            item_id: "0000000001".to_string(),
            description: "Safety boots S3".to_string(),
            price: 228.00,
            price_unit: 1.0,
            net_value: 2052.00,
            quantity: 9.0,
            unit: "PR".to_string(),
            currency: "PLN".to_string(),
            ship_to_address: address(
                "Warehouse Poznan",
                "Magazynowa",
                "7",
                "Poznan",
                "61-001",
                "PL",
            ),
            vendor_id: "0000403307".to_string(),
            vendor_name: "BHP Serwis Sp. z o.o.".to_string(),
            category_id: "46181605".to_string(),
            cost_objects: vec![
                cost_object("ZCC", "0000200201", "0000400500", "Warehouse Inbound", 50.0),
                cost_object("ZCC", "0000200202", "0000400500", "Warehouse Outbound", 50.0),
            ],
        }],
    }
}
