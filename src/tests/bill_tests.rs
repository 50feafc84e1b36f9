use crate::constants::GENESIS_TOKEN_MINT;
use crate::core::errors::SolsplitError;
use crate::core::models::bill::{BillStatus, Participant};
use crate::core::pricing::Pricing;
use crate::core::services::SolsplitService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::tests::{StaticTokenGate, TEST_TREASURY, create_test_service};

fn split_50_50() -> Vec<Participant> {
    vec![
        Participant {
            address: "wallet2".to_string(),
            amount: 50.0,
        },
        Participant {
            address: "wallet3".to_string(),
            amount: 50.0,
        },
    ]
}

#[tokio::test]
async fn test_create_bill_and_fetch() {
    let service = create_test_service(StaticTokenGate(false));
    service.connect_wallet("wallet1", None).await.unwrap();

    let bill = service
        .create_bill("wallet1", "Dinner".to_string(), 100.0, split_50_50())
        .await
        .unwrap();
    assert_eq!(bill.id, "bill_1");
    assert_eq!(bill.created_by, "wallet1");
    assert_eq!(bill.total_amount, 100.0);
    assert_eq!(bill.participants.len(), 2);
    assert_eq!(bill.status, BillStatus::Pending);
    assert_eq!(bill.share_link.len(), 36);

    // 1% of the 100 SOL split, no discount
    assert_eq!(bill.fee_breakdown.base_fee, 1.0);
    assert_eq!(bill.fee_breakdown.discount, 0.0);
    assert_eq!(bill.fee_breakdown.final_fee, 1.0);

    let fetched = service.bill("bill_1").await.unwrap();
    assert_eq!(fetched.id, bill.id);
    assert_eq!(fetched.title, "Dinner");
}

#[tokio::test]
async fn test_create_bill_with_genesis_discount() {
    let service = create_test_service(StaticTokenGate(true));
    service.connect_wallet("wallet1", None).await.unwrap();

    let bill = service
        .create_bill("wallet1", "Dinner".to_string(), 100.0, split_50_50())
        .await
        .unwrap();
    assert!(bill.fee_breakdown.has_genesis_discount);
    assert_eq!(bill.fee_breakdown.final_fee, 0.5);
}

#[tokio::test]
async fn test_create_bill_requires_connected_wallet() {
    let service = create_test_service(StaticTokenGate(false));

    let result = service
        .create_bill("wallet1", "Dinner".to_string(), 100.0, split_50_50())
        .await;
    assert!(matches!(result, Err(SolsplitError::UserNotFound(_))));
}

#[tokio::test]
async fn test_create_bill_validation() {
    let service = create_test_service(StaticTokenGate(false));
    service.connect_wallet("wallet1", None).await.unwrap();

    let result = service.create_bill("wallet1", "".to_string(), 100.0, split_50_50()).await;
    assert!(matches!(result, Err(SolsplitError::MissingField("title"))));

    let result = service
        .create_bill("wallet1", "Dinner".to_string(), 0.0, split_50_50())
        .await;
    assert!(matches!(result, Err(SolsplitError::InvalidInput { .. })));

    let result = service
        .create_bill("wallet1", "Dinner".to_string(), 100.0, Vec::new())
        .await;
    assert!(matches!(result, Err(SolsplitError::EmptyParticipants)));
}

#[tokio::test]
async fn test_wallet_bills_include_participant_bills() {
    let service = create_test_service(StaticTokenGate(false));
    service.connect_wallet("wallet1", None).await.unwrap();
    service
        .create_bill("wallet1", "Dinner".to_string(), 100.0, split_50_50())
        .await
        .unwrap();

    let creator_bills = service.bills_for_wallet("wallet1").await.unwrap();
    assert_eq!(creator_bills.len(), 1);

    // wallet2 never connected but is a participant
    let participant_bills = service.bills_for_wallet("wallet2").await.unwrap();
    assert_eq!(participant_bills.len(), 1);
    assert_eq!(participant_bills[0].id, "bill_1");

    let stranger_bills = service.bills_for_wallet("wallet9").await.unwrap();
    assert!(stranger_bills.is_empty());
}

#[tokio::test]
async fn test_pay_and_confirm_bill() {
    let service = create_test_service(StaticTokenGate(false));
    service.connect_wallet("wallet1", None).await.unwrap();
    service
        .create_bill("wallet1", "Dinner".to_string(), 100.0, split_50_50())
        .await
        .unwrap();

    let (plan, bill) = service.pay_bill("bill_1", "wallet1").await.unwrap();
    assert_eq!(bill.id, "bill_1");
    assert_eq!(plan.fee_payer, "wallet1");
    // two participant transfers plus the fee to the treasury
    assert_eq!(plan.transfers.len(), 3);
    assert_eq!(plan.transfers[2].to, TEST_TREASURY);
    assert_eq!(plan.total_lamports, 101_000_000_000);

    let confirmed = service.confirm_bill("bill_1", "tx_sig_1").await.unwrap();
    assert_eq!(confirmed.status, BillStatus::Paid);
    assert!(confirmed.paid_at.is_some());
    assert_eq!(confirmed.transaction_signature.as_deref(), Some("tx_sig_1"));
}

#[tokio::test]
async fn test_confirm_bill_requires_signature() {
    let service = create_test_service(StaticTokenGate(false));
    service.connect_wallet("wallet1", None).await.unwrap();
    service
        .create_bill("wallet1", "Dinner".to_string(), 100.0, split_50_50())
        .await
        .unwrap();

    let result = service.confirm_bill("bill_1", "").await;
    assert!(matches!(result, Err(SolsplitError::MissingField("signature"))));
}

#[tokio::test]
async fn test_pay_bill_not_found() {
    let service = create_test_service(StaticTokenGate(false));

    let result = service.pay_bill("bill_42", "wallet1").await;
    assert!(matches!(result, Err(SolsplitError::BillNotFound(_))));
}

#[tokio::test]
async fn test_pay_bill_skips_zero_fee_transfer() {
    let service = SolsplitService::new(
        InMemoryStorage::new(),
        StaticTokenGate(false),
        Pricing::new(0.0, 50.0, 9.99),
        TEST_TREASURY.to_string(),
        GENESIS_TOKEN_MINT.to_string(),
    );
    service.connect_wallet("wallet1", None).await.unwrap();
    service
        .create_bill("wallet1", "Dinner".to_string(), 100.0, split_50_50())
        .await
        .unwrap();

    let (plan, _) = service.pay_bill("bill_1", "wallet1").await.unwrap();
    assert_eq!(plan.transfers.len(), 2);
    assert_eq!(plan.total_lamports, 100_000_000_000);
}
