use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of accounts in the universe regenerated on each request.
pub const ACCOUNT_UNIVERSE_SIZE: usize = 20;

const NAME_PREFIXES: [&str; 12] = [
    "Main",
    "Joint",
    "Personal",
    "Business",
    "Savings",
    "Holiday",
    "Emergency",
    "Investment",
    "Everyday",
    "Bonus",
    "Mortgage",
    "Auto",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Transactional,
    #[serde(rename = "Credit Card")]
    CreditCard,
    Loan,
}

impl AccountType {
    /// Exact-match parse against the three known type names. Anything else is
    /// treated as "no filter" by callers.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Transactional" => Some(Self::Transactional),
            "Credit Card" => Some(Self::CreditCard),
            "Loan" => Some(Self::Loan),
            _ => None,
        }
    }

    fn name_suffix(self) -> &'static str {
        match self {
            Self::Transactional => "Account",
            Self::CreditCard => "Card",
            Self::Loan => "Loan",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: i64,
    pub account_name: String,
    pub account_type: AccountType,
    pub available_balance: Decimal,
    pub total_balance: Decimal,
}

/// Generate `count` accounts (clamped to the universe size) with sequential ids
/// starting at 1 and type-consistent randomized balances.
///
/// Balances are drawn in whole cents so the two-decimal invariant holds exactly:
/// - Transactional: total in [1_000, 50_000], available = total minus a pending
///   amount of up to 500.
/// - Credit Card: limit in [1_000, 20_000], up to 80% used; total is the negative
///   used amount, available is the remaining limit.
/// - Loan: principal in [5_000, 500_000], up to half repaid; total is the negative
///   outstanding amount, available is always zero.
pub fn generate_accounts(count: usize) -> Vec<BankAccount> {
    let count = count.min(ACCOUNT_UNIVERSE_SIZE);
    let mut rng = rand::thread_rng();
    let mut accounts = Vec::with_capacity(count);

    for id in 1..=count as i64 {
        let account_type = match rng.gen_range(0..3) {
            0 => AccountType::Transactional,
            1 => AccountType::CreditCard,
            _ => AccountType::Loan,
        };

        let (available_balance, total_balance) = match account_type {
            AccountType::Transactional => {
                let total: i64 = rng.gen_range(100_000..=5_000_000);
                let pending: i64 = rng.gen_range(0..=50_000);
                (Decimal::new(total - pending, 2), Decimal::new(total, 2))
            }
            AccountType::CreditCard => {
                let limit: i64 = rng.gen_range(100_000..=2_000_000);
                let used: i64 = rng.gen_range(100..=limit * 8 / 10);
                (Decimal::new(limit - used, 2), Decimal::new(-used, 2))
            }
            AccountType::Loan => {
                let principal: i64 = rng.gen_range(500_000..=50_000_000);
                let repaid: i64 = rng.gen_range(0..=principal / 2);
                (Decimal::ZERO, Decimal::new(repaid - principal, 2))
            }
        };

        let prefix = NAME_PREFIXES[rng.gen_range(0..NAME_PREFIXES.len())];
        let account_name = format!("{} {}", prefix, account_type.name_suffix());

        accounts.push(BankAccount {
            id,
            account_name,
            account_type,
            available_balance,
            total_balance,
        });
    }

    accounts
}
