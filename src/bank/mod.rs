pub mod account;
pub mod transaction;

pub use account::{generate_accounts, AccountType, BankAccount, ACCOUNT_UNIVERSE_SIZE};
pub use transaction::{
    generate_transactions, Transaction, TransactionType, MAX_TRANSACTIONS_PER_ACCOUNT,
};
