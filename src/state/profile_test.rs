use super::*;

#[test]
fn enrollment_holds_the_secret_until_cleared() {
    let mut state = ProfileState::default();
    assert!(state.totp_pending.is_none());

    state.start_totp_enrollment(TotpSetup {
        secret: "JBSWY3DP".to_owned(),
        otpauth_url: "otpauth://totp/shop:a@b.c?secret=JBSWY3DP".to_owned(),
    });
    assert_eq!(state.totp_pending.as_ref().map(|t| t.secret.as_str()), Some("JBSWY3DP"));

    state.clear_totp_enrollment();
    assert!(state.totp_pending.is_none());
}
