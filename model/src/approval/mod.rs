use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use self::header::{Header, ObjectType};
pub use self::item::{CostObject, Item, ShipToAddress};
pub use self::step::{ApproverStep, StepStatus};

pub mod header;
pub mod helpers;
mod item;
mod step;

#[derive(Debug, Error)]
pub enum ApprovalError {
    #[error("approver step {0} requested but the chain has {1} steps")]
    StepOutOfBounds(usize, usize),

    #[error("Unable to deserialize approval payload")]
    PayloadDeserialization(#[from] serde_json::Error),
}

/// Overall state of the approval document, as opposed to the per-step
/// [`StepStatus`]. The feed only ever delivers open or fully approved
/// documents; rejected ones are filtered out upstream.
#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalState {
    Open,
    Approved,
}

/// Source system the document was read from.
#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Built-in demo data set.
    Sample,
    /// SAP Supplier Relationship Management backend.
    Srm,
}

impl ApprovalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalState::Open => "open",
            ApprovalState::Approved => "approved",
        }
    }
}

impl Display for ApprovalState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let printable = self.as_str();
        write!(f, "{}", printable)
    }
}

impl FromStr for ApprovalState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase(); // Convert the input to lowercase for case-insensitive comparison
        match s.as_str() {
            "open" => Ok(ApprovalState::Open),
            "approved" => Ok(ApprovalState::Approved),
            other => Err(anyhow!("Not supported ApprovalState variant: {other}")),
        }
    }
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Sample => "sample",
            Provider::Srm => "srm",
        }
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let printable = self.as_str();
        write!(f, "{}", printable)
    }
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        match s.as_str() {
            "sample" => Ok(Provider::Sample),
            "srm" => Ok(Provider::Srm),
            other => Err(anyhow!("Not supported Provider variant: {other}")),
        }
    }
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct Requester {
    pub name: String,
    pub id: String,
    pub phone: String,
    pub email: String,
}

/// A business document (purchase order or shopping cart) awaiting sign-off
/// through a chain of approvers.
///
/// `_id` is the feed-wide record key; `id` is the provider-specific document
/// number (an SAP document number for SRM, a UUID-ish id for sample data).
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct Approval {
    #[serde(rename = "_id")]
    pub internal_id: String,
    pub id: String,
    pub state: ApprovalState,
    pub provider: Provider,
    /// Index of the active step in `approver`; equal to `approver.len()`
    /// once the chain is concluded.
    pub current: usize,
    pub requester: Requester,
    pub approver: Vec<ApproverStep>,
    pub header: Header,
    pub items: Vec<Item>,
}

impl Approval {
    pub fn is_concluded(&self) -> bool {
        self.current >= self.approver.len()
    }

    /// The step the document is currently waiting on, or `None` once the
    /// chain is concluded. Never panics, even on malformed feed records
    /// whose `current` points past the chain.
    pub fn current_step(&self) -> Option<&ApproverStep> {
        self.approver.get(self.current)
    }

    pub fn step(&self, index: usize) -> Result<&ApproverStep, ApprovalError> {
        self.approver
            .get(index)
            .ok_or(ApprovalError::StepOutOfBounds(index, self.approver.len()))
    }

    pub fn from_value(value: Value) -> Result<Self, ApprovalError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_value(&self) -> Result<Value, ApprovalError> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::helpers::build_sample_approval;
    use super::*;

    #[rstest]
    #[case::open("open", ApprovalState::Open)]
    #[case::approved("APPROVED", ApprovalState::Approved)]
    fn test_approval_state_from_str(#[case] input: &str, #[case] expected: ApprovalState) {
        assert_eq!(expected, ApprovalState::from_str(input).unwrap());
    }

    #[test]
    fn test_approval_state_from_str_unknown() {
        assert!(ApprovalState::from_str("rejected").is_err());
    }

    #[rstest]
    #[case::sample("sample", Provider::Sample)]
    #[case::srm("SRM", Provider::Srm)]
    fn test_provider_from_str(#[case] input: &str, #[case] expected: Provider) {
        assert_eq!(expected, Provider::from_str(input).unwrap());
    }

    #[test]
    fn test_current_step_on_active_chain() {
        let approval = build_sample_approval(ApprovalState::Open, 3, 1);
        assert!(!approval.is_concluded());
        let step = approval.current_step().unwrap();
        assert_eq!(Some(StepStatus::AwaitingApproval), step.status);
    }

    #[test]
    fn test_current_step_on_concluded_chain() {
        let approval = build_sample_approval(ApprovalState::Approved, 2, 2);
        assert!(approval.is_concluded());
        assert!(approval.current_step().is_none());
    }

    #[test]
    fn test_step_out_of_bounds() {
        let approval = build_sample_approval(ApprovalState::Open, 2, 0);
        let err = approval.step(5).unwrap_err();
        assert!(matches!(err, ApprovalError::StepOutOfBounds(5, 2)));
    }

    #[test]
    fn test_from_value_uses_wire_names() {
        let approval = Approval::from_value(json!({
            "_id": "srm-0010401562",
            "id": "0010401562",
            "state": "approved",
            "provider": "srm",
            "current": 1,
            "requester": {
                "name": "Lena Brandt",
                "id": "BRANDTL",
                "phone": "+49 6227 747474",
                "email": "lena.brandt@example.com"
            },
            "approver": [{
                "name": "Karl Siebert",
                "id": "SIEBERTK",
                "type": "Cost Center Manager",
                "status": "APPROVED",
                "receivedDate": "2017-02-27T14:23:07.000Z",
                "processedDate": "2017-03-06T11:08:12.000Z"
            }],
            "header": {
                "objectId": "0010401562",
                "objectName": "Workshop tooling",
                "createdByName": "Lena Brandt",
                "companyCode": "1010",
                "objectType": "PO",
                "sourceSystem": "SRM",
                "total": "1268.50",
                "currency": "EUR"
            },
            "items": []
        }))
        .unwrap();

        assert_eq!("srm-0010401562", approval.internal_id);
        assert_eq!(Provider::Srm, approval.provider);
        assert_eq!(ObjectType::PurchaseOrder, approval.header.object_type);
        assert_eq!(1268.50, approval.header.total);
        assert!(approval.is_concluded());
        assert!(approval.approver[0].is_processed());
    }

    #[test]
    fn test_value_round_trip() {
        let approval = build_sample_approval(ApprovalState::Open, 3, 1);
        let restored = Approval::from_value(approval.to_value().unwrap()).unwrap();
        assert_eq!(approval, restored);
    }
}
