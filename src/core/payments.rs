use serde::Serialize;
use utoipa::ToSchema;

use crate::constants::LAMPORTS_PER_SOL;
use crate::core::models::bill::Participant;

/// One native-SOL transfer the payer's wallet should sign.
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub to: String,
    pub lamports: u64,
}

/// The transfer set for a payment. The connected wallet assembles and signs
/// the actual transaction client-side; the server never touches keys.
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferPlan {
    pub fee_payer: String,
    pub transfers: Vec<Transfer>,
    pub total_lamports: u64,
}

pub fn sol_to_lamports(sol: f64) -> u64 {
    (sol * LAMPORTS_PER_SOL as f64).floor() as u64
}

/// One transfer per participant, plus the platform fee to the treasury
/// when a fee is due.
pub fn bill_split_plan(payer: &str, participants: &[Participant], fee_amount: f64, treasury: &str) -> TransferPlan {
    let mut transfers: Vec<Transfer> = participants
        .iter()
        .map(|p| Transfer {
            to: p.address.clone(),
            lamports: sol_to_lamports(p.amount),
        })
        .collect();

    if fee_amount > 0.0 {
        transfers.push(Transfer {
            to: treasury.to_string(),
            lamports: sol_to_lamports(fee_amount),
        });
    }

    let total_lamports = transfers.iter().map(|t| t.lamports).sum();
    TransferPlan {
        fee_payer: payer.to_string(),
        transfers,
        total_lamports,
    }
}

/// Single transfer of the monthly price to the treasury.
pub fn subscription_plan(subscriber: &str, amount: f64, treasury: &str) -> TransferPlan {
    let transfer = Transfer {
        to: treasury.to_string(),
        lamports: sol_to_lamports(amount),
    };
    TransferPlan {
        fee_payer: subscriber.to_string(),
        total_lamports: transfer.lamports,
        transfers: vec![transfer],
    }
}
