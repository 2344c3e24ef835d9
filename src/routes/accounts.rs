use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::bank::{
    generate_accounts, generate_transactions, AccountType, BankAccount, Transaction,
    ACCOUNT_UNIVERSE_SIZE, MAX_TRANSACTIONS_PER_ACCOUNT,
};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct AccountsQuery {
    pub limit: Option<usize>,
    pub account_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccountsResponse {
    pub accounts: Vec<BankAccount>,
    pub total_count: usize,
}

// list accounts from a freshly generated universe, with optional type filtering
async fn get_accounts(Query(params): Query<AccountsQuery>) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(ACCOUNT_UNIVERSE_SIZE).min(ACCOUNT_UNIVERSE_SIZE);

    // Unrecognized filter values fall through to "no filter".
    let filter = params.account_type.as_deref().and_then(AccountType::parse);

    tracing::info!("Listing accounts (limit: {limit}, type filter: {filter:?})");

    let mut accounts = generate_accounts(ACCOUNT_UNIVERSE_SIZE);
    if let Some(account_type) = filter {
        accounts.retain(|account| account.account_type == account_type);
    }
    accounts.truncate(limit);

    let total_count = accounts.len();
    Json(AccountsResponse {
        accounts,
        total_count,
    })
}

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub account_id: i64,
    pub transactions: Vec<Transaction>,
    pub total_count: usize,
}

// return recent transactions for a single account after checking it exists in
// the regenerated universe
async fn get_account_transactions(
    Path(account_id): Path<i64>,
    Query(params): Query<TransactionsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = params
        .limit
        .unwrap_or(MAX_TRANSACTIONS_PER_ACCOUNT)
        .min(MAX_TRANSACTIONS_PER_ACCOUNT);

    tracing::info!("Fetching transactions for account {account_id} (limit: {limit})");

    let universe = generate_accounts(ACCOUNT_UNIVERSE_SIZE);
    if !universe.iter().any(|account| account.id == account_id) {
        tracing::warn!("Account not found: {account_id}");
        return Err(ApiError::NotFound(format!(
            "Account with ID {account_id} not found"
        )));
    }

    let transactions = generate_transactions(account_id, limit);
    let total_count = transactions.len();

    Ok(Json(TransactionsResponse {
        account_id,
        transactions,
        total_count,
    }))
}

pub fn accounts_routes() -> Router {
    Router::new()
        .route("/accounts", get(get_accounts))
        .route("/accounts/:account_id/transactions", get(get_account_transactions))
}
