use sprofcli::types::Token;

// Helper function to create a test token
fn create_test_token(obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: "BQC_test_access_token".to_string(),
        scope: "user-read-private user-read-email user-library-read".to_string(),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_expiration_time() {
    let token = create_test_token(1_700_000_000, 3600);
    assert_eq!(token.expiration_time(), 1_700_003_600);
}

#[test]
fn test_fresh_token_is_valid() {
    let token = create_test_token(1_700_000_000, 3600);

    // Well within the lifetime
    assert!(!token.is_expired_at(1_700_000_001));
    assert!(!token.is_expired_at(1_700_003_599));
}

#[test]
fn test_expired_token_is_never_valid() {
    let token = create_test_token(1_700_000_000, 3600);

    // Any instant past the expiration time is invalid
    assert!(token.is_expired_at(1_700_003_601));
    assert!(token.is_expired_at(1_800_000_000));
}

#[test]
fn test_expiration_boundary() {
    let token = create_test_token(1_700_000_000, 3600);

    // The expiration instant itself counts as expired
    assert!(token.is_expired_at(1_700_003_600));
}

#[test]
fn test_zero_lifetime_token() {
    let token = create_test_token(1_700_000_000, 0);
    assert!(token.is_expired_at(1_700_000_000));
}

#[test]
fn test_token_round_trips_through_json() {
    let token = create_test_token(1_700_000_000, 3600);

    let json = serde_json::to_string_pretty(&token).unwrap();
    let loaded: Token = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded.access_token, token.access_token);
    assert_eq!(loaded.scope, token.scope);
    assert_eq!(loaded.expiration_time(), token.expiration_time());
}
