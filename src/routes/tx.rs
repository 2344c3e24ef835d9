use std::collections::BTreeMap;

use axum::{extract::Query, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::bank::{
    generate_accounts, generate_transactions, Transaction, ACCOUNT_UNIVERSE_SIZE,
    MAX_TRANSACTIONS_PER_ACCOUNT,
};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct MultiAccountQuery {
    pub account_ids: Option<String>,
    pub transactions_per_account: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MultiAccountTransactionsResponse {
    pub accounts: BTreeMap<String, Vec<Transaction>>,
    pub total_transactions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<String>,
}

/// Parse a comma-separated id list. Empty tokens are skipped; a non-integer
/// token or an empty result is a client error.
fn parse_account_ids(raw: &str) -> Result<Vec<i64>, ApiError> {
    let mut ids = Vec::new();

    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let id = token.parse::<i64>().map_err(|_| {
            ApiError::BadRequest(
                "Invalid account ID format. Use comma-separated integers.".to_string(),
            )
        })?;
        ids.push(id);
    }

    if ids.is_empty() {
        return Err(ApiError::BadRequest("No valid account IDs provided".to_string()));
    }

    Ok(ids)
}

// batch transaction lookup across several accounts, with per-id validation
// against the regenerated universe
async fn get_multi_account_transactions(
    Query(params): Query<MultiAccountQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let requested_ids = match params.account_ids.as_deref() {
        Some(raw) => parse_account_ids(raw)?,
        None => {
            return Err(ApiError::BadRequest("No valid account IDs provided".to_string()));
        }
    };

    let per_account = params
        .transactions_per_account
        .unwrap_or(MAX_TRANSACTIONS_PER_ACCOUNT)
        .min(MAX_TRANSACTIONS_PER_ACCOUNT);

    tracing::info!(
        "Fetching transactions for {} account(s) ({per_account} per account)",
        requested_ids.len()
    );

    let universe = generate_accounts(ACCOUNT_UNIVERSE_SIZE);
    let (valid_ids, invalid_ids): (Vec<i64>, Vec<i64>) = requested_ids
        .into_iter()
        .partition(|id| universe.iter().any(|account| account.id == *id));

    if valid_ids.is_empty() {
        tracing::warn!("None of the requested account ids exist: {invalid_ids:?}");
        return Err(ApiError::NotFound(
            "None of the provided account IDs were found".to_string(),
        ));
    }

    let mut accounts = BTreeMap::new();
    let mut total_transactions = 0;

    for account_id in valid_ids {
        let transactions = generate_transactions(account_id, per_account);
        total_transactions += transactions.len();
        accounts.insert(account_id.to_string(), transactions);
    }

    let warnings = if invalid_ids.is_empty() {
        None
    } else {
        let listed: Vec<String> = invalid_ids.iter().map(ToString::to_string).collect();
        Some(format!("Account IDs not found: {}", listed.join(", ")))
    };

    Ok(Json(MultiAccountTransactionsResponse {
        accounts,
        total_transactions,
        warnings,
    }))
}

pub fn tx_routes() -> Router {
    Router::new().route("/transactions", get(get_multi_account_transactions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_ids() {
        let ids = parse_account_ids("1,3,5").expect("valid list");
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn skips_empty_tokens_and_whitespace() {
        let ids = parse_account_ids(" 1, ,2 ,").expect("valid list");
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn rejects_non_integer_tokens() {
        assert!(matches!(
            parse_account_ids("1,abc,3"),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_empty_lists() {
        assert!(matches!(parse_account_ids(""), Err(ApiError::BadRequest(_))));
        assert!(matches!(parse_account_ids(",,"), Err(ApiError::BadRequest(_))));
    }
}
