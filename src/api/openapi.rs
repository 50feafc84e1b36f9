use utoipa::OpenApi;

use crate::{
    api::models::{
        BillListResponse, BillResponse, CancelSubscriptionResponse, CategoriesResponse, ConfirmBillRequest,
        ConfirmBillResponse, ConnectRequest, ConnectResponse, CreateBillRequest, CreateExpenseRequest,
        CreateSubscriptionRequest, ErrorResponse, ExpenseAnalyticsResponse, ExpenseListResponse, ExpenseResponse,
        GenesisCheckRequest, GenesisCheckResponse, HealthResponse, MessageResponse, PayBillRequest, PayBillResponse,
        PlatformConfirmRequest, PlatformConfirmResponse, PlatformSubscribeRequest, PlatformSubscribeResponse,
        SubscriptionListResponse, SubscriptionResponse, TaxExportResponse,
    },
    core::{
        models::{
            bill::{Bill, BillStatus, Participant},
            expense::{Expense, ExpensePatch},
            subscription::{BillingCycle, Subscription, SubscriptionStatus},
            user::User,
        },
        payments::{Transfer, TransferPlan},
        pricing::{FeeBreakdown, SubscriptionPricing},
        services::{ExpenseAnalytics, SubscriptionAnalytics, TaxSummary},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::health,
        super::handlers::connect_wallet,
        super::handlers::check_genesis,
        super::handlers::create_bill,
        super::handlers::pay_bill,
        super::handlers::confirm_bill,
        super::handlers::get_wallet_bills,
        super::handlers::get_bill,
        super::handlers::create_subscription,
        super::handlers::get_wallet_subscriptions,
        super::handlers::cancel_subscription,
        super::handlers::delete_subscription,
        super::handlers::platform_subscribe,
        super::handlers::confirm_platform_subscription,
        super::handlers::create_expense,
        super::handlers::get_wallet_expenses,
        super::handlers::get_expense_analytics,
        super::handlers::tax_export,
        super::handlers::get_categories,
        super::handlers::update_expense,
        super::handlers::delete_expense
    ),
    components(schemas(
        ConnectRequest,
        GenesisCheckRequest,
        CreateBillRequest,
        PayBillRequest,
        ConfirmBillRequest,
        CreateSubscriptionRequest,
        PlatformSubscribeRequest,
        PlatformConfirmRequest,
        CreateExpenseRequest,
        ExpensePatch,
        HealthResponse,
        ConnectResponse,
        GenesisCheckResponse,
        BillResponse,
        BillListResponse,
        PayBillResponse,
        ConfirmBillResponse,
        SubscriptionResponse,
        SubscriptionListResponse,
        CancelSubscriptionResponse,
        MessageResponse,
        PlatformSubscribeResponse,
        PlatformConfirmResponse,
        ExpenseResponse,
        ExpenseListResponse,
        ExpenseAnalyticsResponse,
        TaxExportResponse,
        CategoriesResponse,
        ErrorResponse,
        User,
        Bill,
        BillStatus,
        Participant,
        Subscription,
        BillingCycle,
        SubscriptionStatus,
        Expense,
        Transfer,
        TransferPlan,
        FeeBreakdown,
        SubscriptionPricing,
        SubscriptionAnalytics,
        ExpenseAnalytics,
        TaxSummary
    )),
    info(
        title = "solsplit API",
        description = "API for splitting bills, tracking subscriptions and expenses with Solana wallets",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
