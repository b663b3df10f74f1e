use super::domain::{SubmissionAction, SubmissionStatus};

/// The status transition table.
///
/// Every (status, action) pair not listed is illegal, so legality and the
/// resulting status come from one total lookup instead of scattered branches.
/// `APPROVED` and `REJECTED` appear in no source position: they are absorbing.
pub const fn transition(
    status: SubmissionStatus,
    action: SubmissionAction,
) -> Option<SubmissionStatus> {
    use SubmissionAction::*;
    use SubmissionStatus::*;

    match (status, action) {
        (Submitted | RevisionRequired, SetInReview) => Some(InReview),
        (InReview, Approve) => Some(Approved),
        (InReview, Reject) => Some(Rejected),
        (InReview, RequestRevision) => Some(RevisionRequired),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SubmissionAction::*;
    use SubmissionStatus::*;

    #[test]
    fn table_matches_the_documented_edges() {
        let legal = [
            (Submitted, SetInReview, InReview),
            (RevisionRequired, SetInReview, InReview),
            (InReview, Approve, Approved),
            (InReview, Reject, Rejected),
            (InReview, RequestRevision, RevisionRequired),
        ];

        for status in SubmissionStatus::ALL {
            for action in SubmissionAction::ALL {
                let expected = legal
                    .iter()
                    .find(|(from, via, _)| *from == status && *via == action)
                    .map(|(_, _, to)| *to);
                assert_eq!(
                    transition(status, action),
                    expected,
                    "unexpected result for ({status}, {action})"
                );
            }
        }
    }

    #[test]
    fn terminal_statuses_accept_no_action() {
        for status in [Approved, Rejected] {
            for action in SubmissionAction::ALL {
                assert_eq!(transition(status, action), None);
            }
        }
    }

    #[test]
    fn revision_loop_returns_to_review() {
        let status = transition(InReview, RequestRevision).expect("revision is legal");
        assert_eq!(transition(status, SetInReview), Some(InReview));
    }
}
