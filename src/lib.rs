//! Hardcoded demo and test data for the approvals SDK.
//!
//! [`make_approvals`] rebuilds the whole mock feed from literals on every
//! call. The records intentionally contain the same noise a live feed
//! delivers: unassigned approver rows with empty columns, a header total
//! in the billions of SEK, an empty `{}` ship-to address, and one document
//! that appears twice. Nothing here validates or de-duplicates; consumers
//! that need clean data have to clean it themselves, exactly as they would
//! in production.

pub mod sample;
pub mod srm;
mod support;

use model::approval::Approval;

/// Returns the full mock approval feed, sample records first, then SRM.
pub fn make_approvals() -> Vec<Approval> {
    let mut approvals = sample::approvals();
    approvals.extend(srm::approvals());
    approvals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_is_sample_then_srm() {
        use model::approval::Provider;

        let approvals = make_approvals();
        let first_srm = approvals
            .iter()
            .position(|approval| approval.provider == Provider::Srm)
            .unwrap();
        assert!(approvals[..first_srm]
            .iter()
            .all(|approval| approval.provider == Provider::Sample));
        assert!(approvals[first_srm..]
            .iter()
            .all(|approval| approval.provider == Provider::Srm));
    }
}
