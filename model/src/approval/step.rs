use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a single step in an approval chain.
#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    #[serde(rename = "OPEN")]
    Open,
    #[serde(rename = "AWAITING APPROVAL")]
    AwaitingApproval,
    #[serde(rename = "APPROVED")]
    Approved,
    /// The approver sent an inquiry back to the requester.
    #[serde(rename = "INQUIRED")]
    Inquired,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Open => "OPEN",
            StepStatus::AwaitingApproval => "AWAITING APPROVAL",
            StepStatus::Approved => "APPROVED",
            StepStatus::Inquired => "INQUIRED",
        }
    }
}

impl Display for StepStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let printable = self.as_str();
        write!(f, "{}", printable)
    }
}

impl FromStr for StepStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_uppercase();
        match s.as_str() {
            "OPEN" => Ok(StepStatus::Open),
            "AWAITING APPROVAL" => Ok(StepStatus::AwaitingApproval),
            "APPROVED" => Ok(StepStatus::Approved),
            "INQUIRED" => Ok(StepStatus::Inquired),
            other => Err(anyhow!("Not supported StepStatus variant: {other}")),
        }
    }
}

/// One stage in an approval chain.
///
/// SRM fills every column of a step row even before an assignee exists, so
/// `name`, `id` and `type` may be empty strings and `status` arrives as
/// `""`. An unprocessed step carries the epoch sentinel in `processedDate`.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApproverStep {
    pub name: String,
    pub id: String,
    #[serde(rename = "type")]
    pub step_type: String,
    #[serde(with = "common::deserializers::empty_string_as_none")]
    pub status: Option<StepStatus>,
    #[serde(with = "common::date::iso_millis")]
    pub received_date: DateTime<Utc>,
    #[serde(with = "common::date::epoch_sentinel")]
    pub processed_date: Option<DateTime<Utc>>,
}

impl ApproverStep {
    pub fn is_processed(&self) -> bool {
        self.processed_date.is_some()
    }
}
