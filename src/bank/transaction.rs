use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Upper bound on transactions generated per account per request.
pub const MAX_TRANSACTIONS_PER_ACCOUNT: usize = 5;

// Transaction dates fall within the last two weeks.
const TRANSACTION_WINDOW_DAYS: i64 = 14;

const DEBIT_REFERENCES: [&str; 10] = [
    "PAYMENT: Online Purchase",
    "ATM WITHDRAWAL",
    "POS PURCHASE: Grocery Store",
    "BILL PAYMENT: Utility",
    "TRANSFER TO: Savings Account",
    "SUBSCRIPTION: Streaming Service",
    "RESTAURANT PAYMENT",
    "MOBILE PAYMENT",
    "INSURANCE PREMIUM",
    "LOAN REPAYMENT",
];

const CREDIT_REFERENCES: [&str; 10] = [
    "SALARY DEPOSIT",
    "TRANSFER FROM: Checking Account",
    "REFUND: Online Store",
    "INTEREST PAYMENT",
    "TAX REFUND",
    "DIVIDEND PAYMENT",
    "CASH DEPOSIT",
    "PAYMENT RECEIVED",
    "REIMBURSEMENT",
    "GOVERNMENT PAYMENT",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Debit,
    Credit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub transaction_reference: String,
    pub transaction_amount: Decimal,
    pub transaction_type: TransactionType,
    pub transaction_date: NaiveDate,
}

/// Generate `count` transactions (clamped to the per-account maximum) for the
/// given account id, dated within the last 14 days and sorted most-recent-first.
///
/// Transaction ids are `account_id * 100 + sequence`, unique within the batch.
/// The account id is not validated here; membership checks belong to the HTTP
/// layer.
pub fn generate_transactions(account_id: i64, count: usize) -> Vec<Transaction> {
    let count = count.min(MAX_TRANSACTIONS_PER_ACCOUNT);
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();
    let mut transactions = Vec::with_capacity(count);

    for sequence in 1..=count as i64 {
        let days_ago = rng.gen_range(0..=TRANSACTION_WINDOW_DAYS);
        let transaction_date = today - Duration::days(days_ago);

        let is_debit = rng.gen_bool(0.5);
        let references = if is_debit {
            &DEBIT_REFERENCES
        } else {
            &CREDIT_REFERENCES
        };
        let reference = references[rng.gen_range(0..references.len())];

        transactions.push(Transaction {
            id: account_id * 100 + sequence,
            transaction_reference: reference.to_string(),
            transaction_amount: Decimal::new(rng.gen_range(500..=100_000), 2),
            transaction_type: if is_debit {
                TransactionType::Debit
            } else {
                TransactionType::Credit
            },
            transaction_date,
        });
    }

    // Dates have day granularity; the stable sort keeps generation order on ties.
    transactions.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
    transactions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count() {
        assert_eq!(generate_transactions(1, 3).len(), 3);
        assert!(generate_transactions(1, 0).is_empty());
    }

    #[test]
    fn count_is_clamped_to_maximum() {
        let transactions = generate_transactions(4, 50);
        assert_eq!(transactions.len(), MAX_TRANSACTIONS_PER_ACCOUNT);
    }

    #[test]
    fn ids_derive_from_account_id_and_sequence() {
        let transactions = generate_transactions(7, 5);
        let mut ids: Vec<i64> = transactions.iter().map(|tx| tx.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![701, 702, 703, 704, 705]);
    }

    #[test]
    fn batches_are_sorted_by_date_descending() {
        for _ in 0..20 {
            let transactions = generate_transactions(2, 5);
            for pair in transactions.windows(2) {
                assert!(pair[0].transaction_date >= pair[1].transaction_date);
            }
        }
    }

    #[test]
    fn dates_fall_within_the_window() {
        let today = Utc::now().date_naive();
        let oldest = today - Duration::days(TRANSACTION_WINDOW_DAYS);
        for tx in generate_transactions(3, 5) {
            assert!(tx.transaction_date <= today);
            assert!(tx.transaction_date >= oldest);
        }
    }

    #[test]
    fn amounts_are_positive_and_bounded() {
        for tx in generate_transactions(9, 5) {
            assert!(tx.transaction_amount >= Decimal::new(500, 2));
            assert!(tx.transaction_amount <= Decimal::new(100_000, 2));
        }
    }

    #[test]
    fn references_match_transaction_direction() {
        for _ in 0..20 {
            for tx in generate_transactions(5, 5) {
                let reference = tx.transaction_reference.as_str();
                match tx.transaction_type {
                    TransactionType::Debit => assert!(DEBIT_REFERENCES.contains(&reference)),
                    TransactionType::Credit => assert!(CREDIT_REFERENCES.contains(&reference)),
                }
            }
        }
    }

    #[test]
    fn transaction_type_serializes_lowercase() {
        let json = serde_json::to_value(TransactionType::Debit).expect("serialize");
        assert_eq!(json, "debit");
        let json = serde_json::to_value(TransactionType::Credit).expect("serialize");
        assert_eq!(json, "credit");
    }
}
