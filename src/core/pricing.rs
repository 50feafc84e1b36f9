use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-transaction fee breakdown returned with every bill.
///
/// Invariant: `discount > 0.0` only when `has_genesis_discount` is true,
/// and `discount_percent` is zeroed for non-holders so the two never disagree.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub base_amount: f64,
    pub base_fee: f64,
    pub discount: f64,
    pub final_fee: f64,
    pub total: f64,
    pub has_genesis_discount: bool,
    pub discount_percent: f64,
}

/// Monthly platform price quote, with the Genesis discount applied when held.
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPricing {
    pub monthly_price: f64,
    pub has_genesis_discount: bool,
    pub discount_percent: f64,
    pub savings: f64,
}

/// Fee and discount arithmetic. Pure; percentages are whole numbers (1.0 == 1%).
#[derive(Clone, Debug)]
pub struct Pricing {
    pub fee_percent: f64,
    pub discount_percent: f64,
    pub base_subscription_price: f64,
}

impl Pricing {
    pub fn new(fee_percent: f64, discount_percent: f64, base_subscription_price: f64) -> Self {
        Pricing {
            fee_percent,
            discount_percent,
            base_subscription_price,
        }
    }

    pub fn fee_breakdown(&self, amount: f64, is_discounted: bool) -> FeeBreakdown {
        let base_fee = amount * self.fee_percent / 100.0;
        let discount_percent = if is_discounted { self.discount_percent } else { 0.0 };
        let discount = base_fee * discount_percent / 100.0;
        let final_fee = base_fee - discount;

        FeeBreakdown {
            base_amount: amount,
            base_fee,
            discount,
            final_fee,
            total: amount + final_fee,
            has_genesis_discount: is_discounted,
            discount_percent,
        }
    }

    pub fn subscription_price(&self, is_discounted: bool) -> f64 {
        if is_discounted {
            self.base_subscription_price * (1.0 - self.discount_percent / 100.0)
        } else {
            self.base_subscription_price
        }
    }

    pub fn subscription_quote(&self, is_discounted: bool) -> SubscriptionPricing {
        let monthly_price = self.subscription_price(is_discounted);
        SubscriptionPricing {
            monthly_price,
            has_genesis_discount: is_discounted,
            discount_percent: if is_discounted { self.discount_percent } else { 0.0 },
            savings: round_cents(self.base_subscription_price - monthly_price),
        }
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
