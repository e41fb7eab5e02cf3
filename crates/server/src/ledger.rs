//! Savings ledger API endpoints

use api_types::savings::{
    BalanceResponse, SavingMethod as ApiMethod, SavingsAdded, SavingsNew, TransactionView,
    TransactionsResponse,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use engine::{AddTransactionCmd, AmountInput, RECENT_LIMIT};
use serde_json::Value;

use crate::{ServerError, server::ServerState};

fn map_method(method: engine::SavingMethod) -> ApiMethod {
    match method {
        engine::SavingMethod::MutualFund => ApiMethod::MutualFund,
        engine::SavingMethod::Stock => ApiMethod::Stock,
        engine::SavingMethod::SavingAccount => ApiMethod::SavingAccount,
        engine::SavingMethod::Cash => ApiMethod::Cash,
    }
}

fn map_transaction(tx: engine::Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        amount: tx.amount.to_major(),
        method: map_method(tx.method),
        description: tx.description,
        date: tx.date,
    }
}

/// `null` counts as missing; anything else goes to the engine for validation.
fn map_amount(value: Value) -> Option<AmountInput> {
    match value {
        Value::Null => None,
        Value::Number(n) => Some(match n.as_f64() {
            Some(v) => AmountInput::Number(v),
            None => AmountInput::Text(n.to_string()),
        }),
        Value::String(s) => Some(AmountInput::Text(s)),
        other => Some(AmountInput::Text(other.to_string())),
    }
}

/// Handle requests for the ledger balance
pub async fn balance(State(state): State<ServerState>) -> Result<Json<BalanceResponse>, ServerError> {
    let balance = state
        .engine
        .balance()
        .await
        .map_err(|err| ServerError::engine(err, "Unable to fetch balance"))?;

    Ok(Json(BalanceResponse {
        balance: balance.to_major(),
    }))
}

/// Handle requests for the most recent transactions
pub async fn transactions(
    State(state): State<ServerState>,
) -> Result<Json<TransactionsResponse>, ServerError> {
    let txs = state
        .engine
        .list_recent(RECENT_LIMIT)
        .await
        .map_err(|err| ServerError::engine(err, "Unable to fetch transactions"))?;

    Ok(Json(TransactionsResponse {
        transactions: txs.into_iter().map(map_transaction).collect(),
    }))
}

/// Handle requests for adding a saving
pub async fn add_savings(
    State(state): State<ServerState>,
    payload: Result<Json<SavingsNew>, JsonRejection>,
) -> Result<Json<SavingsAdded>, ServerError> {
    let Json(payload) = payload.map_err(|rejection| ServerError::Generic(rejection.body_text()))?;

    let snapshot = state
        .engine
        .add_transaction(AddTransactionCmd {
            amount: payload.amount.and_then(map_amount),
            method: payload.method,
            description: payload.description,
        })
        .await
        .map_err(|err| ServerError::engine(err, "Unable to add savings"))?;

    Ok(Json(SavingsAdded {
        balance: snapshot.balance.to_major(),
        transactions: snapshot.transactions.into_iter().map(map_transaction).collect(),
    }))
}

/// Fallback for every unmatched route
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
