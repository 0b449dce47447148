//! Ledger module (personal accounts, double-entry-style movements).
//!
//! Pure domain logic only: no IO, no persistence, no concurrency concerns.

pub mod account;
pub mod operation;
pub mod transaction;

pub use account::{Account, AccountRef, Company};
pub use operation::{
    EconomicOperation, Investment, InvestmentTerms, Saving, add_investment, add_saving,
};
pub use transaction::{Transaction, TransactionKind};
