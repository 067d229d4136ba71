use soroban_sdk::{contracttype, Address};

// ---------------------------------------------------------------------------
// UsageRight
// ---------------------------------------------------------------------------

/// Per-asset record of the time-bounded usage right, independent of title.
///
/// At most one record exists per asset; `set_user` overwrites it in place and
/// "clearing" resets the fields rather than deleting the record. Expiry is
/// lazy: the record is never touched when the clock passes `expires`, activity
/// is recomputed on every read via [`UsageRight::is_active`].
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UsageRight {
    /// Current holder of the usage right, `None` when cleared.
    pub user: Option<Address>,
    /// Absolute ledger timestamp after which the right is no longer active.
    pub expires: u64,
    /// A locked right survives ownership transfers and cannot be overwritten
    /// until released through mutual-consent termination.
    pub is_borrowed: bool,
    /// Owner-side consent to early termination. Meaningful only while
    /// `is_borrowed` is set; reset on every grant and every clear.
    pub owner_termination_approved: bool,
    /// User-side consent to early termination.
    pub user_termination_approved: bool,
}

impl UsageRight {
    /// An empty record: no user, no lock, no pending approvals.
    pub fn cleared() -> Self {
        Self {
            user: None,
            expires: 0,
            is_borrowed: false,
            owner_termination_approved: false,
            user_termination_approved: false,
        }
    }

    /// A right is active when a holder is set and `now` is strictly before
    /// `expires`.
    pub fn is_active(&self, now: u64) -> bool {
        self.user.is_some() && now < self.expires
    }

    /// The holder, but only while the right is active.
    pub fn active_user(&self, now: u64) -> Option<Address> {
        if now < self.expires {
            self.user.clone()
        } else {
            None
        }
    }

    /// Both parties have consented to early termination.
    pub fn termination_ready(&self) -> bool {
        self.owner_termination_approved && self.user_termination_approved
    }
}
