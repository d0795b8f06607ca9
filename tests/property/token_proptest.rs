//! Property-based tests for session tokens
//!
//! Any identity id survives issue/verify, and any single-character change
//! to a token makes it unverifiable.

use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;
use show_auth::backend::auth::{Clock, TokenIssuer, TokenVerifier};

const SECRET: &[u8] = b"proptest-secret";
const NOW: u64 = 1_700_000_000;
const BASE64URL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

fn pair() -> (TokenIssuer, TokenVerifier) {
    let clock: Arc<dyn Clock> = Arc::new(|| NOW);
    (
        TokenIssuer::new(SECRET, Duration::from_secs(3600), clock.clone()),
        TokenVerifier::new(SECRET, clock),
    )
}

proptest! {
    #[test]
    fn test_issue_verify_roundtrip(id in any::<i64>()) {
        let (issuer, verifier) = pair();
        let token = issuer.issue(id).unwrap();
        prop_assert_eq!(verifier.verify(&token), Ok(id));
    }

    #[test]
    fn test_tampered_token_rejected(
        id in any::<i64>(),
        position in any::<prop::sample::Index>(),
        replacement in any::<prop::sample::Index>(),
    ) {
        let (issuer, verifier) = pair();
        let token = issuer.issue(id).unwrap();

        let mut bytes = token.into_bytes();
        let at = position.index(bytes.len());
        prop_assume!(bytes[at] != b'.');

        let mut new_char = BASE64URL[replacement.index(BASE64URL.len())];
        if new_char == bytes[at] {
            new_char = if new_char == b'A' { b'B' } else { b'A' };
        }
        bytes[at] = new_char;

        let tampered = String::from_utf8(bytes).unwrap();
        prop_assert!(verifier.verify(&tampered).is_err());
    }
}
