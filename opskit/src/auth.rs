use rand::Rng;
use serde::{Deserialize, Serialize};

/// Demo operator account accepted by the credential form.
pub const OPERATOR_USERNAME: &str = "demo";
pub const OPERATOR_PASSWORD: &str = "password";

/// How long the fingerprint scan animation runs before an outcome is drawn.
pub const SCAN_DURATION_MS: u32 = 2_000;

/// Pause between a successful scan and the console redirect.
pub const REDIRECT_DELAY_MS: u32 = 1_000;

/// Simulated round trip for the credential check.
pub const CREDENTIAL_CHECK_DELAY_MS: u32 = 1_000;

/// Message shown while the credential check is in flight.
pub const CREDENTIAL_PENDING_MESSAGE: &str = "Authenticating...";

/// Lifecycle of one biometric scan attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanPhase {
    Idle,
    Scanning,
    Success,
    Failed,
}

impl Default for ScanPhase {
    fn default() -> Self {
        Self::Idle
    }
}

impl ScanPhase {
    /// Status line shown under the scanner for this phase.
    pub fn status_message(&self) -> &'static str {
        match self {
            ScanPhase::Idle => "Place your finger on the scanner or enter your credentials",
            ScanPhase::Scanning => "Scanning...",
            ScanPhase::Success => "Authentication successful",
            ScanPhase::Failed => "Authentication failed. Please try again.",
        }
    }
}

/// Exact match against the demo account.
pub fn verify_credentials(username: &str, password: &str) -> bool {
    username == OPERATOR_USERNAME && password == OPERATOR_PASSWORD
}

/// Coin-flip scan outcome, terminal phases only.
pub fn draw_scan_outcome<R: Rng>(rng: &mut R) -> ScanPhase {
    if rng.gen_bool(0.5) {
        ScanPhase::Success
    } else {
        ScanPhase::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_demo_credentials_pass() {
        assert!(verify_credentials("demo", "password"));
    }

    #[test]
    fn test_wrong_credentials_fail() {
        assert!(!verify_credentials("demo", "passw0rd"));
        assert!(!verify_credentials("admin", "password"));
        assert!(!verify_credentials("", ""));
    }

    #[test]
    fn test_credentials_are_case_sensitive() {
        assert!(!verify_credentials("Demo", "password"));
        assert!(!verify_credentials("demo", "Password"));
    }

    #[test]
    fn test_scan_outcome_is_terminal() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let outcome = draw_scan_outcome(&mut rng);
            assert!(matches!(outcome, ScanPhase::Success | ScanPhase::Failed));
        }
    }

    #[test]
    fn test_scan_outcome_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(draw_scan_outcome(&mut a), draw_scan_outcome(&mut b));
        }
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            ScanPhase::Idle.status_message(),
            "Place your finger on the scanner or enter your credentials"
        );
        assert_eq!(ScanPhase::Scanning.status_message(), "Scanning...");
        assert_eq!(ScanPhase::Success.status_message(), "Authentication successful");
        assert_eq!(
            ScanPhase::Failed.status_message(),
            "Authentication failed. Please try again."
        );
    }
}
