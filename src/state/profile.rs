#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::TotpSetup;

/// Profile-page state: in-flight flags for the edit forms and the
/// pending TOTP enrollment.
///
/// `totp_pending` holds the secret between the setup call and the
/// verify-enable call; it never outlives the enrollment flow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub saving: bool,
    pub totp_pending: Option<TotpSetup>,
}

impl ProfileState {
    /// A setup call succeeded: hold the secret until the user verifies
    /// a code or abandons enrollment.
    pub fn start_totp_enrollment(&mut self, setup: TotpSetup) {
        self.totp_pending = Some(setup);
    }

    /// Enrollment finished (enabled, abandoned, or the user logged
    /// out): the secret must not linger.
    pub fn clear_totp_enrollment(&mut self) {
        self.totp_pending = None;
    }
}
