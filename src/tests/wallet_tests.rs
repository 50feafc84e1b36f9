use crate::constants::GENESIS_TOKEN_MINT;
use crate::core::errors::SolsplitError;
use crate::tests::{FailingTokenGate, StaticTokenGate, create_test_service};

#[tokio::test]
async fn test_connect_wallet_new_user() {
    let service = create_test_service(StaticTokenGate(false));

    let (user, pricing) = service.connect_wallet("wallet1", None).await.unwrap();
    assert_eq!(user.wallet_address, "wallet1");
    assert!(!user.has_genesis_token);
    assert!(!user.subscription_active);
    assert!(user.subscription_expiry.is_none());
    assert_eq!(pricing.monthly_price, 9.99);
    assert_eq!(pricing.savings, 0.0);
}

#[tokio::test]
async fn test_connect_wallet_genesis_holder() {
    let service = create_test_service(StaticTokenGate(true));

    let (user, pricing) = service.connect_wallet("wallet1", None).await.unwrap();
    assert!(user.has_genesis_token);
    assert!(user.subscription_active);
    assert!(pricing.has_genesis_discount);
    assert!((pricing.monthly_price - 4.995).abs() < 1e-9);
    assert_eq!(pricing.savings, 5.0);
}

#[tokio::test]
async fn test_connect_wallet_missing_address() {
    let service = create_test_service(StaticTokenGate(false));

    let result = service.connect_wallet("", None).await;
    assert!(matches!(result, Err(SolsplitError::MissingField("walletAddress"))));
}

#[tokio::test]
async fn test_reconnect_keeps_paid_access() {
    let service = create_test_service(StaticTokenGate(false));

    service.connect_wallet("wallet1", None).await.unwrap();
    service
        .confirm_platform_subscription("wallet1", "payment_sig")
        .await
        .unwrap();

    let (user, _) = service.connect_wallet("wallet1", None).await.unwrap();
    assert!(!user.has_genesis_token);
    assert!(user.subscription_active);
    assert!(user.subscription_expiry.is_some());
    assert_eq!(user.last_payment_signature.as_deref(), Some("payment_sig"));
}

#[tokio::test]
async fn test_gate_failure_degrades_to_no_discount() {
    let service = create_test_service(FailingTokenGate);

    let (user, pricing) = service.connect_wallet("wallet1", None).await.unwrap();
    assert!(!user.has_genesis_token);
    assert!(!user.subscription_active);
    assert_eq!(pricing.monthly_price, 9.99);
}

#[tokio::test]
async fn test_check_genesis() {
    let service = create_test_service(StaticTokenGate(true));

    let has_genesis = service.check_genesis("wallet1", GENESIS_TOKEN_MINT).await.unwrap();
    assert!(has_genesis);

    let result = service.check_genesis("", GENESIS_TOKEN_MINT).await;
    assert!(matches!(result, Err(SolsplitError::MissingField("walletAddress"))));

    let result = service.check_genesis("wallet1", "  ").await;
    assert!(matches!(result, Err(SolsplitError::MissingField("genesisMint"))));
}

#[tokio::test]
async fn test_check_genesis_surfaces_gate_result() {
    let service = create_test_service(StaticTokenGate(false));

    let has_genesis = service.check_genesis("wallet1", GENESIS_TOKEN_MINT).await.unwrap();
    assert!(!has_genesis);
}

#[tokio::test]
async fn test_check_genesis_never_errors_on_gate_failure() {
    let service = create_test_service(FailingTokenGate);

    let has_genesis = service.check_genesis("wallet1", GENESIS_TOKEN_MINT).await.unwrap();
    assert!(!has_genesis);
}
