use super::*;

fn create_test_service() -> JwtService {
    JwtService::new(JwtConfig {
        secret: "test-secret-key-for-testing".to_string(),
        access_token_expires_minutes: 15,
    })
}

#[test]
fn test_claims_new_sets_correct_fields() {
    let expires_at = Utc::now() + Duration::hours(1);
    let claims = Claims::new(UserId::new(3), "alice", expires_at);

    assert_eq!(claims.sub, 3);
    assert_eq!(claims.user_id(), UserId::new(3));
    assert_eq!(claims.username, "alice");
    assert!(claims.iat <= Utc::now().timestamp());
    assert_eq!(claims.exp, expires_at.timestamp());
}

#[test]
fn test_generate_and_validate_token() {
    let service = create_test_service();

    let token = service
        .generate_access_token(UserId::new(11), "bob_99")
        .unwrap();
    assert!(!token.is_empty());

    let claims = service.validate_token(&token).unwrap();
    assert_eq!(claims.user_id(), UserId::new(11));
    assert_eq!(claims.username, "bob_99");
}

#[test]
fn test_invalid_token() {
    let service = create_test_service();
    let result = service.validate_token("invalid.token.here");
    assert!(matches!(result, Err(JwtError::DecodingError(_))));
}

#[test]
fn test_token_signed_with_other_secret_is_rejected() {
    let other = JwtService::new(JwtConfig {
        secret: "another-secret".to_string(),
        access_token_expires_minutes: 15,
    });
    let token = other.generate_access_token(UserId::new(1), "carol").unwrap();

    assert!(create_test_service().validate_token(&token).is_err());
}

#[test]
fn test_expired_token() {
    let service = JwtService::new(JwtConfig {
        secret: "test-secret-key-for-testing".to_string(),
        access_token_expires_minutes: -10,
    });
    let token = service.generate_access_token(UserId::new(1), "dave").unwrap();

    assert!(matches!(service.validate_token(&token), Err(JwtError::Expired)));
}

#[test]
fn test_expires_in_seconds() {
    assert_eq!(create_test_service().access_token_expires_in(), 900);
}

#[test]
fn test_debug_hides_secret() {
    let debug = format!("{:?}", create_test_service());
    assert!(!debug.contains("test-secret-key-for-testing"));
}
