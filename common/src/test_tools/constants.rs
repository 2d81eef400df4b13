//! Shared constants for unit and integration tests.

pub const APPROVAL_ID_FOR_MOCK_DATA: &str = "sample-A-ac5b1e69-63af-4945-9744-9b3f7c078caf";
pub const REQUESTER_ID_FOR_MOCK_DATA: &str = "FUENTESM";
pub const REQUESTER_EMAIL_FOR_MOCK_DATA: &str = "maria.fuentes@example.com";
pub const COMPANY_CODE_FOR_MOCK_DATA: &str = "0001";
pub const GL_ACCOUNT_FOR_MOCK_DATA: &str = "0000400000";
pub const COST_CENTER_FOR_MOCK_DATA: &str = "0000100533";
pub const RECEIVED_DATE_FOR_MOCK_DATA: &str = "2017-02-27T14:23:07.000Z";
pub const PROCESSED_DATE_FOR_MOCK_DATA: &str = "2017-03-06T11:08:12.000Z";
