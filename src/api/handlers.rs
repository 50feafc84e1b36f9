use crate::{
    api::models::*,
    constants::EXPENSE_CATEGORIES,
    core::{
        models::expense::{ExpenseFilter, ExpensePatch},
        services::SolsplitService,
    },
    infrastructure::{storage::in_memory::InMemoryStorage, token_gate::rpc::RpcTokenGate},
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
};
use chrono::Utc;

use std::sync::Arc;

// Define API routes
pub fn api_routes(service: Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health))
        .route("/auth/connect", axum::routing::post(connect_wallet))
        .route("/genesis/check", axum::routing::post(check_genesis))
        .route("/bills/create", axum::routing::post(create_bill))
        .route("/bills/pay", axum::routing::post(pay_bill))
        .route("/bills/confirm", axum::routing::post(confirm_bill))
        .route("/bills/user/{wallet_address}", axum::routing::get(get_wallet_bills))
        .route("/bills/{bill_id}", axum::routing::get(get_bill))
        .route("/subscriptions/create", axum::routing::post(create_subscription))
        .route(
            "/subscriptions/platform/subscribe",
            axum::routing::post(platform_subscribe),
        )
        .route(
            "/subscriptions/platform/confirm",
            axum::routing::post(confirm_platform_subscription),
        )
        .route(
            "/subscriptions/user/{wallet_address}",
            axum::routing::get(get_wallet_subscriptions),
        )
        .route(
            "/subscriptions/{subscription_id}/cancel",
            axum::routing::put(cancel_subscription),
        )
        .route(
            "/subscriptions/{subscription_id}",
            axum::routing::delete(delete_subscription),
        )
        .route("/expenses/create", axum::routing::post(create_expense))
        .route("/expenses/user/{wallet_address}", axum::routing::get(get_wallet_expenses))
        .route(
            "/expenses/analytics/{wallet_address}",
            axum::routing::get(get_expense_analytics),
        )
        .route(
            "/expenses/tax-export/{wallet_address}",
            axum::routing::get(tax_export),
        )
        .route("/expenses/categories", axum::routing::get(get_categories))
        .route(
            "/expenses/{expense_id}",
            axum::routing::put(update_expense).delete(delete_expense),
        )
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "solsplit API is running".to_string(),
        timestamp: Utc::now(),
    })
}

#[utoipa::path(
    post,
    path = "/api/auth/connect",
    request_body = ConnectRequest,
    responses(
        (status = 200, description = "Wallet connected, Genesis status refreshed", body = ConnectResponse),
        (status = 400, description = "Missing wallet address", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn connect_wallet(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Json(req): Json<ConnectRequest>,
) -> Result<Json<ConnectResponse>, ApiError> {
    let (user, pricing) = service
        .connect_wallet(&req.wallet_address, req.genesis_mint.as_deref())
        .await?;
    Ok(Json(ConnectResponse {
        success: true,
        user,
        pricing,
    }))
}

#[utoipa::path(
    post,
    path = "/api/genesis/check",
    request_body = GenesisCheckRequest,
    responses(
        (status = 200, description = "Ownership checked", body = GenesisCheckResponse),
        (status = 400, description = "Missing wallet address or mint", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn check_genesis(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Json(req): Json<GenesisCheckRequest>,
) -> Result<Json<GenesisCheckResponse>, ApiError> {
    let has_genesis = service.check_genesis(&req.wallet_address, &req.genesis_mint).await?;
    Ok(Json(GenesisCheckResponse {
        success: true,
        has_genesis,
        wallet_address: req.wallet_address,
        genesis_mint: req.genesis_mint,
        checked_at: Utc::now(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/bills/create",
    request_body = CreateBillRequest,
    responses(
        (status = 200, description = "Bill created", body = BillResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 404, description = "Wallet not connected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_bill(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Json(req): Json<CreateBillRequest>,
) -> Result<Json<BillResponse>, ApiError> {
    let bill = service
        .create_bill(&req.wallet_address, req.title, req.total_amount, req.participants)
        .await?;
    Ok(Json(BillResponse { success: true, bill }))
}

#[utoipa::path(
    post,
    path = "/api/bills/pay",
    request_body = PayBillRequest,
    responses(
        (status = 200, description = "Transfer plan for the payer's wallet", body = PayBillResponse),
        (status = 400, description = "Missing payer address", body = ErrorResponse),
        (status = 404, description = "Bill not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn pay_bill(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Json(req): Json<PayBillRequest>,
) -> Result<Json<PayBillResponse>, ApiError> {
    let (payment, bill) = service.pay_bill(&req.bill_id, &req.payer_address).await?;
    Ok(Json(PayBillResponse {
        success: true,
        payment,
        bill,
    }))
}

#[utoipa::path(
    post,
    path = "/api/bills/confirm",
    request_body = ConfirmBillRequest,
    responses(
        (status = 200, description = "Bill marked paid", body = ConfirmBillResponse),
        (status = 400, description = "Missing signature", body = ErrorResponse),
        (status = 404, description = "Bill not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn confirm_bill(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Json(req): Json<ConfirmBillRequest>,
) -> Result<Json<ConfirmBillResponse>, ApiError> {
    service.confirm_bill(&req.bill_id, &req.signature).await?;
    Ok(Json(ConfirmBillResponse {
        success: true,
        message: "Bill payment confirmed".to_string(),
        signature: req.signature,
    }))
}

#[utoipa::path(
    get,
    path = "/api/bills/user/{wallet_address}",
    params(
        ("wallet_address" = String, Path, description = "Wallet whose bills to list")
    ),
    responses(
        (status = 200, description = "Bills created by or split with the wallet", body = BillListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_wallet_bills(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Path(wallet_address): Path<String>,
) -> Result<Json<BillListResponse>, ApiError> {
    let bills = service.bills_for_wallet(&wallet_address).await?;
    Ok(Json(BillListResponse { success: true, bills }))
}

#[utoipa::path(
    get,
    path = "/api/bills/{bill_id}",
    params(
        ("bill_id" = String, Path, description = "ID of the bill to retrieve")
    ),
    responses(
        (status = 200, description = "Bill details", body = BillResponse),
        (status = 404, description = "Bill not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_bill(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Path(bill_id): Path<String>,
) -> Result<Json<BillResponse>, ApiError> {
    let bill = service.bill(&bill_id).await?;
    Ok(Json(BillResponse { success: true, bill }))
}

#[utoipa::path(
    post,
    path = "/api/subscriptions/create",
    request_body = CreateSubscriptionRequest,
    responses(
        (status = 200, description = "Subscription tracked", body = SubscriptionResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 404, description = "Wallet not connected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_subscription(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Json(req): Json<CreateSubscriptionRequest>,
) -> Result<Json<SubscriptionResponse>, ApiError> {
    let subscription = service
        .create_subscription(
            &req.wallet_address,
            req.name,
            req.amount,
            req.billing_cycle,
            req.category,
            req.next_billing_date,
        )
        .await?;
    Ok(Json(SubscriptionResponse {
        success: true,
        subscription,
    }))
}

#[utoipa::path(
    get,
    path = "/api/subscriptions/user/{wallet_address}",
    params(
        ("wallet_address" = String, Path, description = "Wallet whose subscriptions to list")
    ),
    responses(
        (status = 200, description = "Subscriptions with spend analytics", body = SubscriptionListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_wallet_subscriptions(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Path(wallet_address): Path<String>,
) -> Result<Json<SubscriptionListResponse>, ApiError> {
    let (subscriptions, analytics) = service.subscriptions_for_wallet(&wallet_address).await?;
    Ok(Json(SubscriptionListResponse {
        success: true,
        subscriptions,
        analytics,
    }))
}

#[utoipa::path(
    put,
    path = "/api/subscriptions/{subscription_id}/cancel",
    params(
        ("subscription_id" = String, Path, description = "ID of the subscription to cancel")
    ),
    responses(
        (status = 200, description = "Subscription cancelled", body = CancelSubscriptionResponse),
        (status = 404, description = "Subscription not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn cancel_subscription(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Path(subscription_id): Path<String>,
) -> Result<Json<CancelSubscriptionResponse>, ApiError> {
    let subscription = service.cancel_subscription(&subscription_id).await?;
    Ok(Json(CancelSubscriptionResponse {
        success: true,
        message: "Subscription cancelled".to_string(),
        subscription,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/subscriptions/{subscription_id}",
    params(
        ("subscription_id" = String, Path, description = "ID of the subscription to delete")
    ),
    responses(
        (status = 200, description = "Subscription deleted", body = MessageResponse),
        (status = 404, description = "Subscription not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn delete_subscription(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Path(subscription_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    service.delete_subscription(&subscription_id).await?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Subscription deleted".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/subscriptions/platform/subscribe",
    request_body = PlatformSubscribeRequest,
    responses(
        (status = 200, description = "Payment plan at the quoted monthly price", body = PlatformSubscribeResponse),
        (status = 400, description = "Missing wallet address", body = ErrorResponse),
        (status = 404, description = "Wallet not connected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn platform_subscribe(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Json(req): Json<PlatformSubscribeRequest>,
) -> Result<Json<PlatformSubscribeResponse>, ApiError> {
    let (payment, pricing) = service.platform_subscribe(&req.wallet_address).await?;
    Ok(Json(PlatformSubscribeResponse {
        success: true,
        payment,
        pricing,
    }))
}

#[utoipa::path(
    post,
    path = "/api/subscriptions/platform/confirm",
    request_body = PlatformConfirmRequest,
    responses(
        (status = 200, description = "Platform access activated for 30 days", body = PlatformConfirmResponse),
        (status = 400, description = "Missing wallet address or signature", body = ErrorResponse),
        (status = 404, description = "Wallet not connected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn confirm_platform_subscription(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Json(req): Json<PlatformConfirmRequest>,
) -> Result<Json<PlatformConfirmResponse>, ApiError> {
    let user = service
        .confirm_platform_subscription(&req.wallet_address, &req.signature)
        .await?;
    Ok(Json(PlatformConfirmResponse {
        success: true,
        message: "Subscription activated".to_string(),
        expiry_date: user.subscription_expiry,
        signature: req.signature,
    }))
}

#[utoipa::path(
    post,
    path = "/api/expenses/create",
    request_body = CreateExpenseRequest,
    responses(
        (status = 200, description = "Expense recorded", body = ExpenseResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 404, description = "Wallet not connected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_expense(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Json(req): Json<CreateExpenseRequest>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let expense = service
        .create_expense(
            &req.wallet_address,
            req.amount,
            req.category,
            req.description,
            req.date,
            req.transaction_hash,
        )
        .await?;
    Ok(Json(ExpenseResponse {
        success: true,
        expense,
    }))
}

#[utoipa::path(
    get,
    path = "/api/expenses/user/{wallet_address}",
    params(
        ("wallet_address" = String, Path, description = "Wallet whose expenses to list"),
        ExpenseListQuery
    ),
    responses(
        (status = 200, description = "Expenses matching the filters", body = ExpenseListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_wallet_expenses(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Path(wallet_address): Path<String>,
    Query(query): Query<ExpenseListQuery>,
) -> Result<Json<ExpenseListResponse>, ApiError> {
    let filter = ExpenseFilter {
        category: query.category,
        start_date: query.start_date,
        end_date: query.end_date,
    };
    let expenses = service.expenses_for_wallet(&wallet_address, filter).await?;
    Ok(Json(ExpenseListResponse {
        success: true,
        count: expenses.len(),
        expenses,
    }))
}

#[utoipa::path(
    get,
    path = "/api/expenses/analytics/{wallet_address}",
    params(
        ("wallet_address" = String, Path, description = "Wallet to analyze"),
        AnalyticsQuery
    ),
    responses(
        (status = 200, description = "Totals, category and monthly breakdowns", body = ExpenseAnalyticsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_expense_analytics(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Path(wallet_address): Path<String>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<ExpenseAnalyticsResponse>, ApiError> {
    let analytics = service
        .expense_analytics(&wallet_address, query.start_date, query.end_date)
        .await?;
    Ok(Json(ExpenseAnalyticsResponse {
        success: true,
        analytics,
    }))
}

#[utoipa::path(
    get,
    path = "/api/expenses/tax-export/{wallet_address}",
    params(
        ("wallet_address" = String, Path, description = "Wallet to export"),
        TaxExportQuery
    ),
    responses(
        (status = 200, description = "CSV export with deductibility summary", body = TaxExportResponse),
        (status = 400, description = "Invalid year", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn tax_export(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Path(wallet_address): Path<String>,
    Query(query): Query<TaxExportQuery>,
) -> Result<Json<TaxExportResponse>, ApiError> {
    let export = service.tax_export(&wallet_address, query.year).await?;
    Ok(Json(TaxExportResponse {
        success: true,
        tax_year: export.tax_year,
        csv: export.csv,
        summary: export.summary,
    }))
}

#[utoipa::path(
    get,
    path = "/api/expenses/categories",
    responses(
        (status = 200, description = "Available expense categories", body = CategoriesResponse)
    )
)]
pub(crate) async fn get_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        success: true,
        categories: EXPENSE_CATEGORIES.iter().map(|c| c.to_string()).collect(),
    })
}

#[utoipa::path(
    put,
    path = "/api/expenses/{expense_id}",
    request_body = ExpensePatch,
    params(
        ("expense_id" = String, Path, description = "ID of the expense to update")
    ),
    responses(
        (status = 200, description = "Expense updated", body = ExpenseResponse),
        (status = 400, description = "Invalid field values", body = ErrorResponse),
        (status = 404, description = "Expense not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn update_expense(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Path(expense_id): Path<String>,
    Json(patch): Json<ExpensePatch>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let expense = service.update_expense(&expense_id, patch).await?;
    Ok(Json(ExpenseResponse {
        success: true,
        expense,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/expenses/{expense_id}",
    params(
        ("expense_id" = String, Path, description = "ID of the expense to delete")
    ),
    responses(
        (status = 200, description = "Expense deleted", body = MessageResponse),
        (status = 404, description = "Expense not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn delete_expense(
    State(service): State<Arc<SolsplitService<InMemoryStorage, RpcTokenGate>>>,
    Path(expense_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    service.delete_expense(&expense_id).await?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Expense deleted".to_string(),
    }))
}
