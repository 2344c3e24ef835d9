pub mod accounts;
pub mod tx;
