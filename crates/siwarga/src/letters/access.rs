use super::domain::{Principal, Submission};

/// Role and ownership checks consulted before any submission is touched.
///
/// A failed check always surfaces as `Forbidden`, never as a silent empty
/// result, so callers cannot probe for the existence of other residents'
/// submissions through differing error shapes.
pub struct AccessGate;

impl AccessGate {
    /// Admins read everything; citizens read only their own submissions.
    pub fn can_read(principal: &Principal, submission: &Submission) -> bool {
        principal.is_admin() || principal.id == submission.owner_id
    }

    /// Lifecycle actions are staff-only. Citizens create and attach, nothing
    /// more.
    pub fn can_act(principal: &Principal, _submission: &Submission) -> bool {
        principal.is_admin()
    }

    /// File uploads are allowed for the owner and for staff completing a
    /// dossier on a resident's behalf.
    pub fn can_attach(principal: &Principal, submission: &Submission) -> bool {
        principal.is_admin() || principal.id == submission.owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::domain::{LetterType, Role, SubmissionId, SubmissionStatus, UserId};
    use chrono::Utc;

    fn submission_owned_by(owner: u64) -> Submission {
        let now = Utc::now();
        Submission {
            id: SubmissionId(1),
            owner_id: UserId(owner),
            letter_type: LetterType::PengantarKtp,
            payload: serde_json::json!({}),
            status: SubmissionStatus::Submitted,
            created_at: now,
            updated_at: now,
        }
    }

    fn principal(id: u64, role: Role) -> Principal {
        Principal {
            id: UserId(id),
            role,
        }
    }

    #[test]
    fn owner_reads_and_attaches_but_never_acts() {
        let submission = submission_owned_by(7);
        let owner = principal(7, Role::Citizen);

        assert!(AccessGate::can_read(&owner, &submission));
        assert!(AccessGate::can_attach(&owner, &submission));
        assert!(!AccessGate::can_act(&owner, &submission));
    }

    #[test]
    fn other_citizens_are_shut_out_entirely() {
        let submission = submission_owned_by(7);
        let stranger = principal(8, Role::Citizen);

        assert!(!AccessGate::can_read(&stranger, &submission));
        assert!(!AccessGate::can_attach(&stranger, &submission));
        assert!(!AccessGate::can_act(&stranger, &submission));
    }

    #[test]
    fn admins_may_do_everything() {
        let submission = submission_owned_by(7);
        let staff = principal(99, Role::Admin);

        assert!(AccessGate::can_read(&staff, &submission));
        assert!(AccessGate::can_attach(&staff, &submission));
        assert!(AccessGate::can_act(&staff, &submission));
    }
}
