use crate::core::errors::SolsplitError;
use crate::core::models::expense::{ExpenseFilter, ExpensePatch};
use crate::tests::{StaticTokenGate, create_test_service};
use chrono::{NaiveDate, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_create_expense_defaults() {
    let service = create_test_service(StaticTokenGate(false));
    service.connect_wallet("wallet1", None).await.unwrap();

    let expense = service
        .create_expense("wallet1", 0.5, "Food & Dining".to_string(), None, None, None)
        .await
        .unwrap();
    assert_eq!(expense.id, "exp_1");
    assert_eq!(expense.description, "");
    assert_eq!(expense.date, Utc::now().date_naive());
    assert!(expense.transaction_hash.is_none());
}

#[tokio::test]
async fn test_create_expense_validation() {
    let service = create_test_service(StaticTokenGate(false));

    let result = service
        .create_expense("wallet1", 0.5, "Food & Dining".to_string(), None, None, None)
        .await;
    assert!(matches!(result, Err(SolsplitError::UserNotFound(_))));

    service.connect_wallet("wallet1", None).await.unwrap();

    let result = service
        .create_expense("wallet1", 0.0, "Food & Dining".to_string(), None, None, None)
        .await;
    assert!(matches!(result, Err(SolsplitError::InvalidInput { .. })));

    let result = service.create_expense("wallet1", 0.5, "".to_string(), None, None, None).await;
    assert!(matches!(result, Err(SolsplitError::MissingField("category"))));
}

#[tokio::test]
async fn test_list_expenses_filtered_and_sorted() {
    let service = create_test_service(StaticTokenGate(false));
    service.connect_wallet("wallet1", None).await.unwrap();

    service
        .create_expense("wallet1", 1.0, "Travel".to_string(), None, Some(date(2025, 3, 10)), None)
        .await
        .unwrap();
    service
        .create_expense("wallet1", 0.5, "Food & Dining".to_string(), None, Some(date(2025, 1, 5)), None)
        .await
        .unwrap();
    service
        .create_expense("wallet1", 0.25, "Travel".to_string(), None, Some(date(2025, 6, 1)), None)
        .await
        .unwrap();

    let all = service
        .expenses_for_wallet("wallet1", ExpenseFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].date, date(2025, 1, 5));
    assert_eq!(all[2].date, date(2025, 6, 1));

    let travel = service
        .expenses_for_wallet(
            "wallet1",
            ExpenseFilter {
                category: Some("Travel".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(travel.len(), 2);

    let early = service
        .expenses_for_wallet(
            "wallet1",
            ExpenseFilter {
                start_date: Some(date(2025, 1, 1)),
                end_date: Some(date(2025, 3, 31)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(early.len(), 2);
}

#[tokio::test]
async fn test_update_expense() {
    let service = create_test_service(StaticTokenGate(false));
    service.connect_wallet("wallet1", None).await.unwrap();
    service
        .create_expense(
            "wallet1",
            0.5,
            "Food & Dining".to_string(),
            Some("Lunch".to_string()),
            None,
            None,
        )
        .await
        .unwrap();

    let updated = service
        .update_expense(
            "exp_1",
            ExpensePatch {
                amount: Some(0.75),
                category: Some("Travel".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.amount, 0.75);
    assert_eq!(updated.category, "Travel");
    // Fields absent from the patch keep their values
    assert_eq!(updated.description, "Lunch");

    let result = service
        .update_expense(
            "exp_1",
            ExpensePatch {
                amount: Some(-1.0),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(SolsplitError::InvalidInput { .. })));

    let result = service.update_expense("exp_42", ExpensePatch::default()).await;
    assert!(matches!(result, Err(SolsplitError::ExpenseNotFound(_))));
}

#[tokio::test]
async fn test_delete_expense() {
    let service = create_test_service(StaticTokenGate(false));
    service.connect_wallet("wallet1", None).await.unwrap();
    service
        .create_expense("wallet1", 0.5, "Food & Dining".to_string(), None, None, None)
        .await
        .unwrap();

    service.delete_expense("exp_1").await.unwrap();

    let result = service.delete_expense("exp_1").await;
    assert!(matches!(result, Err(SolsplitError::ExpenseNotFound(_))));

    let remaining = service
        .expenses_for_wallet("wallet1", ExpenseFilter::default())
        .await
        .unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_expense_analytics() {
    let service = create_test_service(StaticTokenGate(false));
    service.connect_wallet("wallet1", None).await.unwrap();

    service
        .create_expense(
            "wallet1",
            0.5,
            "Food & Dining".to_string(),
            None,
            Some(date(2025, 1, 15)),
            None,
        )
        .await
        .unwrap();
    service
        .create_expense(
            "wallet1",
            0.25,
            "Food & Dining".to_string(),
            None,
            Some(date(2025, 1, 20)),
            None,
        )
        .await
        .unwrap();
    service
        .create_expense("wallet1", 1.0, "Travel".to_string(), None, Some(date(2025, 2, 1)), None)
        .await
        .unwrap();

    let analytics = service.expense_analytics("wallet1", None, None).await.unwrap();
    assert_eq!(analytics.total_expenses, 3);
    assert_eq!(analytics.total_spent, 1.75);
    assert_eq!(analytics.by_category["Food & Dining"], 0.75);
    assert_eq!(analytics.by_category["Travel"], 1.0);
    assert_eq!(analytics.monthly_breakdown["2025-01"], 0.75);
    assert_eq!(analytics.monthly_breakdown["2025-02"], 1.0);

    let february = service
        .expense_analytics("wallet1", Some(date(2025, 2, 1)), Some(date(2025, 2, 28)))
        .await
        .unwrap();
    assert_eq!(february.total_expenses, 1);
    assert_eq!(february.total_spent, 1.0);
}

#[tokio::test]
async fn test_tax_export() {
    let service = create_test_service(StaticTokenGate(false));
    service.connect_wallet("wallet1", None).await.unwrap();

    service
        .create_expense(
            "wallet1",
            1.0,
            "Business".to_string(),
            Some("Client dinner, downtown".to_string()),
            Some(date(2025, 3, 10)),
            Some("sig1".to_string()),
        )
        .await
        .unwrap();
    service
        .create_expense(
            "wallet1",
            0.5,
            "Food & Dining".to_string(),
            Some("say \"hi\"".to_string()),
            Some(date(2025, 4, 1)),
            None,
        )
        .await
        .unwrap();
    // A different tax year, must not appear in the export
    service
        .create_expense("wallet1", 2.0, "Travel".to_string(), None, Some(date(2024, 7, 1)), None)
        .await
        .unwrap();

    let export = service.tax_export("wallet1", Some(2025)).await.unwrap();
    assert_eq!(export.tax_year, 2025);
    assert_eq!(export.summary.total_expenses, 2);
    assert_eq!(export.summary.total_amount, 1.5);
    assert_eq!(export.summary.deductible_expenses, 1);
    assert_eq!(export.summary.total_deductible, 1.0);

    assert!(
        export
            .csv
            .starts_with("Date,Category,Description,Amount (SOL),Transaction Hash,Tax Deductible\n")
    );
    assert_eq!(export.csv.lines().count(), 3);
    // Commas stay inside the quoted description, inner quotes are doubled
    assert!(export.csv.contains("2025-03-10,Business,\"Client dinner, downtown\",1,sig1,Yes"));
    assert!(export.csv.contains("2025-04-01,Food & Dining,\"say \"\"hi\"\"\",0.5,N/A,No"));
}

#[tokio::test]
async fn test_tax_export_empty_year() {
    let service = create_test_service(StaticTokenGate(false));
    service.connect_wallet("wallet1", None).await.unwrap();

    let export = service.tax_export("wallet1", Some(2019)).await.unwrap();
    assert_eq!(
        export.csv,
        "Date,Category,Description,Amount (SOL),Transaction Hash,Tax Deductible\n"
    );
    assert_eq!(export.summary.total_expenses, 0);
    assert_eq!(export.summary.total_deductible, 0.0);
}

#[tokio::test]
async fn test_deductible_categories() {
    let service = create_test_service(StaticTokenGate(false));
    service.connect_wallet("wallet1", None).await.unwrap();

    let business = service
        .create_expense("wallet1", 1.0, "Business".to_string(), None, None, None)
        .await
        .unwrap();
    assert!(business.is_tax_deductible());

    let personal = service
        .create_expense("wallet1", 1.0, "Entertainment".to_string(), None, None, None)
        .await
        .unwrap();
    assert!(!personal.is_tax_deductible());
}
