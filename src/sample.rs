//! Records of the built-in `sample` provider. Ids follow the
//! `sample-<tag>-<uuid>` scheme the demo backend uses.

use model::approval::{
    Approval, ApprovalState, Header, Item, ObjectType, Provider, ShipToAddress, StepStatus,
};

use crate::support::{address, cost_object, requester, step};

pub fn approvals() -> Vec<Approval> {
    vec![
        office_furniture_order(),
        developer_notebooks_cart(),
        lab_consumables_cart(),
        bridge_steel_order(),
    ]
}

/// Two-item purchase order in the middle of a three-step chain.
fn office_furniture_order() -> Approval {
    Approval {
        internal_id: "sample-A-ac5b1e69-63af-4945-9744-9b3f7c078caf".to_string(),
        id: "ac5b1e69-63af-4945-9744-9b3f7c078caf".to_string(),
        state: ApprovalState::Open,
        provider: Provider::Sample,
        current: 1,
        requester: requester(
            "Maria Fuentes",
            "FUENTESM",
            "+34 911 234 567",
            "maria.fuentes@example.com",
        ),
        approver: vec![
            step(
                "Walter Mundt",
                "MUNDTW",
                "Line Manager",
                Some(StepStatus::Approved),
                "2017-02-27T14:23:07.000Z",
                Some("2017-03-06T11:08:12.000Z"),
            ),
            step(
                "Sabine Ott",
                "OTTS",
                "Cost Center Responsible",
                Some(StepStatus::AwaitingApproval),
                "2017-03-06T11:08:12.000Z",
                None,
            ),
            step(
                "Henry Drake",
                "DRAKEH",
                "Financial Approver",
                Some(StepStatus::Open),
                "2017-03-06T11:08:12.000Z",
                None,
            ),
        ],
        header: Header {
            object_id: "4500019071".to_string(),
            object_name: "Office chairs and desks".to_string(),
            created_by_name: "Maria Fuentes".to_string(),
            company_code: "0001".to_string(),
            object_type: ObjectType::PurchaseOrder,
            source_system: "DEMO".to_string(),
            total: 1846.40,
            currency: "EUR".to_string(),
        },
        items: vec![
            Item {
                item_id: "00010".to_string(),
                description: "Ergonomic office chair".to_string(),
                price: 329.99,
                price_unit: 1.0,
                net_value: 1649.95,
                quantity: 5.0,
                unit: "EA".to_string(),
                currency: "EUR".to_string(),
                ship_to_address: address(
                    "Main Plant",
                    "Dietmar-Hopp-Allee",
                    "16",
                    "Walldorf",
                    "69190",
                    "DE",
                ),
                vendor_id: "0000300251".to_string(),
                vendor_name: "Becker Office GmbH".to_string(),
                category_id: "56101500".to_string(),
                cost_objects: vec![cost_object(
                    "ZCC",
                    "0000100533",
                    "0000400000",
                    "Facility Management",
                    100.0,
                )],
            },
            Item {
                item_id: "00020".to_string(),
                description: "Desk lamp".to_string(),
                price: 39.29,
                price_unit: 1.0,
                net_value: 196.45,
                quantity: 5.0,
                unit: "EA".to_string(),
                currency: "EUR".to_string(),
                ship_to_address: ShipToAddress::default(),
                vendor_id: "0000300251".to_string(),
                vendor_name: "Becker Office GmbH".to_string(),
                category_id: "39111500".to_string(),
                cost_objects: vec![
                    cost_object("ZCC", "0000100533", "0000400000", "Facility Management", 50.0),
                    cost_object("ZCC", "0000100534", "0000400000", "Reception Area", 50.0),
                ],
            },
        ],
    }
}

/// Fully approved shopping cart; `current` already points past the chain.
fn developer_notebooks_cart() -> Approval {
    Approval {
        internal_id: "sample-B-7d1abacf-2a33-4a94-9c58-4a09f2f0d26c".to_string(),
        id: "7d1abacf-2a33-4a94-9c58-4a09f2f0d26c".to_string(),
        state: ApprovalState::Approved,
        provider: Provider::Sample,
        current: 2,
        requester: requester(
            "Daniel Reyes",
            "REYESD",
            "+1 650 555 0164",
            "daniel.reyes@example.com",
        ),
        approver: vec![
            step(
                "Janet Coleman",
                "COLEMANJ",
                "Line Manager",
                Some(StepStatus::Approved),
                "2017-01-12T09:14:55.000Z",
                Some("2017-01-13T16:40:02.000Z"),
            ),
            step(
                "Victor Huang",
                "HUANGV",
                "Financial Approver",
                Some(StepStatus::Approved),
                "2017-01-13T16:40:02.000Z",
                Some("2017-01-16T08:02:47.000Z"),
            ),
        ],
        header: Header {
            object_id: "2000000451".to_string(),
            object_name: "Developer notebooks".to_string(),
            created_by_name: "Daniel Reyes".to_string(),
            company_code: "0002".to_string(),
            object_type: ObjectType::ShoppingCart,
            source_system: "DEMO".to_string(),
            total: 2198.00,
            currency: "USD".to_string(),
        },
        items: vec![Item {
            item_id: "00010".to_string(),
            description: "Notebook 13-inch, 16 GB RAM".to_string(),
            price: 1099.00,
            price_unit: 1.0,
            net_value: 2198.00,
            quantity: 2.0,
            unit: "EA".to_string(),
            currency: "USD".to_string(),
            ship_to_address: address(
                "Palo Alto Office",
                "Hillview Avenue",
                "3410",
                "Palo Alto",
                "94304",
                "US",
            ),
            vendor_id: "0000301220".to_string(),
            vendor_name: "Compustore Inc.".to_string(),
            category_id: "43211503".to_string(),
            cost_objects: vec![cost_object(
                "ZOR",
                "0000700042",
                "0000410000",
                "IT Projects",
                100.0,
            )],
        }],
    }
}

/// Chain stalled on an inquiry back to the requester.
fn lab_consumables_cart() -> Approval {
    Approval {
        internal_id: "sample-C-0c42f33f-9f1e-4934-9f23-8cf06d1d84b1".to_string(),
        id: "0c42f33f-9f1e-4934-9f23-8cf06d1d84b1".to_string(),
        state: ApprovalState::Open,
        provider: Provider::Sample,
        current: 0,
        requester: requester(
            "Priya Nair",
            "NAIRP",
            "+49 6221 555 0172",
            "priya.nair@example.com",
        ),
        approver: vec![
            step(
                "Heinz Vogel",
                "VOGELH",
                "Line Manager",
                Some(StepStatus::Inquired),
                "2017-04-03T07:55:31.000Z",
                None,
            ),
            step(
                "Ute Kramer",
                "KRAMERU",
                "Financial Approver",
                Some(StepStatus::Open),
                "2017-04-03T07:55:31.000Z",
                None,
            ),
        ],
        header: Header {
            object_id: "2000000467".to_string(),
            object_name: "Lab consumables".to_string(),
            created_by_name: "Priya Nair".to_string(),
            company_code: "0001".to_string(),
            object_type: ObjectType::ShoppingCart,
            source_system: "DEMO".to_string(),
            total: 1790.00,
            currency: "EUR".to_string(),
        },
        items: vec![Item {
            item_id: "00010".to_string(),
            description: "Nitrile gloves, size M".to_string(),
            price: 8.95,
            price_unit: 1.0,
            net_value: 1790.00,
            quantity: 200.0,
            unit: "BOX".to_string(),
            currency: "EUR".to_string(),
            ship_to_address: address(
                "Research Campus",
                "Robert-Koch-Strasse",
                "11",
                "Heidelberg",
                "69120",
                "DE",
            ),
            vendor_id: "0000300418".to_string(),
            vendor_name: "Labortechnik Krause GmbH".to_string(),
            category_id: "42132203".to_string(),
            cost_objects: vec![
                cost_object("ZCC", "0000100610", "0000400100", "Biology Lab", 30.0),
                cost_object("ZCC", "0000100611", "0000400100", "Chemistry Lab", 30.0),
                cost_object("ZOR", "0000700099", "0000410000", "Grant 7741", 40.0),
            ],
        }],
    }
}

/// UI stress record: a billions-of-SEK total and an accounting split that
/// distributes 120%. Kept wrong on purpose.
fn bridge_steel_order() -> Approval {
    Approval {
        internal_id: "sample-D-e5d7b0f1-5b52-4dcb-8f4e-2f8f5c9f0a77".to_string(),
        id: "e5d7b0f1-5b52-4dcb-8f4e-2f8f5c9f0a77".to_string(),
        state: ApprovalState::Open,
        provider: Provider::Sample,
        current: 0,
        requester: requester(
            "Gustav Lindqvist",
            "LINDQVISTG",
            "+46 920 555 014",
            "gustav.lindqvist@example.com",
        ),
        approver: vec![
            step(
                "Asa Berg",
                "BERGA",
                "Financial Approver",
                Some(StepStatus::AwaitingApproval),
                "2017-05-18T12:30:09.000Z",
                None,
            ),
            step(
                "Nils Holm",
                "HOLMN",
                "Board Approval",
                Some(StepStatus::Open),
                "2017-05-18T12:30:09.000Z",
                None,
            ),
        ],
        header: Header {
            object_id: "4500022148".to_string(),
            object_name: "Murjek bridge steel frames".to_string(),
            created_by_name: "Gustav Lindqvist".to_string(),
            company_code: "0003".to_string(),
            object_type: ObjectType::PurchaseOrder,
            source_system: "DEMO".to_string(),
            total: 2_460_000_000.00,
            currency: "SEK".to_string(),
        },
        items: vec![Item {
            item_id: "00010".to_string(),
            description: "Steel frame segment".to_string(),
            price: 205_000.00,
            price_unit: 1.0,
            net_value: 2_460_000_000.00,
            quantity: 12_000.0,
            unit: "EA".to_string(),
            currency: "SEK".to_string(),
            ship_to_address: address(
                "Site Office Murjek",
                "Stationsvagen",
                "2",
                "Murjek",
                "96024",
                "SE",
            ),
            vendor_id: "0000309912".to_string(),
            vendor_name: "Norrland Stal AB".to_string(),
            category_id: "30102306".to_string(),
            cost_objects: vec![
                cost_object("ZCC", "0000100710", "0000400200", "Infrastructure North", 60.0),
                cost_object("ZCC", "0000100711", "0000400200", "Infrastructure South", 60.0),
            ],
        }],
    }
}
