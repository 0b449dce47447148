use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use investments_core::{DomainError, DomainResult, ValueObject};

use crate::account::AccountRef;

/// Which side of the movement a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Funds arriving at the destination account (amount > 0).
    Debit,
    /// Funds leaving the source account (amount < 0).
    Credit,
}

/// A single monetary movement (immutable, compared and hashed by value).
///
/// Construction is the only place the sign invariants are checked, and the
/// fields are private, so every live `Transaction` satisfies its kind's
/// constraint: debits are strictly positive, credits strictly negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
    date: DateTime<Utc>,
    destination_account: AccountRef,
    source_account: Option<AccountRef>,
}

impl Transaction {
    /// Build a debit: funds arriving at `destination_account`.
    ///
    /// Fails validation unless `amount > 0`.
    pub fn debit(
        amount: Decimal,
        date: DateTime<Utc>,
        destination_account: AccountRef,
        source_account: Option<AccountRef>,
    ) -> DomainResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::validation(
                "amount for a debit transaction has to be positive and different than zero",
            ));
        }
        Ok(Self {
            kind: TransactionKind::Debit,
            amount,
            date,
            destination_account,
            source_account,
        })
    }

    /// Build a credit: funds leaving `source_account`, encoded as a negative
    /// amount.
    ///
    /// Fails validation unless `amount < 0`.
    pub fn credit(
        amount: Decimal,
        date: DateTime<Utc>,
        destination_account: AccountRef,
        source_account: Option<AccountRef>,
    ) -> DomainResult<Self> {
        if amount >= Decimal::ZERO {
            return Err(DomainError::validation(
                "amount for a credit transaction has to be negative and different than zero",
            ));
        }
        Ok(Self {
            kind: TransactionKind::Credit,
            amount,
            date,
            destination_account,
            source_account,
        })
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn is_debit(&self) -> bool {
        matches!(self.kind, TransactionKind::Debit)
    }

    pub fn is_credit(&self) -> bool {
        matches!(self.kind, TransactionKind::Credit)
    }

    /// Signed amount: positive for debits, negative for credits.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn destination_account(&self) -> &AccountRef {
        &self.destination_account
    }

    pub fn source_account(&self) -> Option<&AccountRef> {
        self.source_account.as_ref()
    }
}

impl ValueObject for Transaction {}
