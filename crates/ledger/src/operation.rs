use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use investments_core::{DomainResult, OperationId};

use crate::account::{Account, AccountRef};
use crate::transaction::Transaction;

/// Common read surface of a recorded economic event.
///
/// An economic operation bundles the transaction(s) that realized a single
/// event: one debit for a saving, a credit/debit pair for an investment.
pub trait EconomicOperation {
    fn id(&self) -> OperationId;

    /// Headline amount of the event (always positive).
    fn amount(&self) -> Decimal;

    fn date(&self) -> DateTime<Utc>;

    /// The transactions that realized the event, in application order.
    fn transactions(&self) -> &[Transaction];

    /// The account the event is recorded against.
    fn account(&self) -> &AccountRef;
}

/// Funds entering an account from an external, untracked source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Saving {
    id: OperationId,
    source_of_funds: String,
    amount: Decimal,
    date: DateTime<Utc>,
    transaction: Transaction,
    account: AccountRef,
}

impl Saving {
    /// Free-text provenance label ("Company salary", "Gift", ...).
    pub fn source_of_funds(&self) -> &str {
        &self.source_of_funds
    }
}

impl EconomicOperation for Saving {
    fn id(&self) -> OperationId {
        self.id
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }

    fn transactions(&self) -> &[Transaction] {
        core::slice::from_ref(&self.transaction)
    }

    fn account(&self) -> &AccountRef {
        &self.account
    }
}

/// Terms of an investment, as quoted by the institution.
///
/// The final-amount figures are opaque pass-through values; this core does
/// not compute interest or taxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentTerms {
    pub rate: Decimal,
    pub days: u32,
    pub initial_amount: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub final_amount_before_taxes: Decimal,
    pub final_amount_after_taxes: Decimal,
}

/// A transfer of funds from one tracked account to another, plus yield/tax
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investment {
    id: OperationId,
    rate: Decimal,
    days: u32,
    amount: Decimal,
    date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    final_amount_before_taxes: Decimal,
    final_amount_after_taxes: Decimal,
    transactions: [Transaction; 2],
    account: AccountRef,
}

impl Investment {
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Start of the investment period (same as [`EconomicOperation::date`]).
    pub fn start_date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn final_amount_before_taxes(&self) -> Decimal {
        self.final_amount_before_taxes
    }

    pub fn final_amount_after_taxes(&self) -> Decimal {
        self.final_amount_after_taxes
    }

    /// The withdrawal from the source account.
    pub fn credit(&self) -> &Transaction {
        &self.transactions[0]
    }

    /// The deposit into the destination account.
    pub fn debit(&self) -> &Transaction {
        &self.transactions[1]
    }
}

impl EconomicOperation for Investment {
    fn id(&self) -> OperationId {
        self.id
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }

    fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn account(&self) -> &AccountRef {
        &self.account
    }
}

/// Record a deposit from an external source into `account`.
///
/// Builds one debit transaction (no source account), applies it, and wraps
/// it in a [`Saving`]. Fails validation when `amount <= 0`; on failure the
/// balance is untouched.
pub fn add_saving(
    source_of_funds: impl Into<String>,
    amount: Decimal,
    date: DateTime<Utc>,
    account: &mut Account,
) -> DomainResult<Saving> {
    let debit = Transaction::debit(amount, date, account.to_ref(), None)?;
    account.add_funds(&debit)?;

    Ok(Saving {
        id: OperationId::new(),
        source_of_funds: source_of_funds.into(),
        amount,
        date,
        account: account.to_ref(),
        transaction: debit,
    })
}

/// Record a transfer of `terms.initial_amount` from `source_account` into
/// `destination_account`, plus the quoted yield/tax metadata.
///
/// Fails with `InsufficientFunds` when the source cannot cover the amount,
/// and with a validation error when the amount is not strictly positive; in
/// both cases neither balance has changed.
pub fn add_investment(
    destination_account: &mut Account,
    source_account: &mut Account,
    terms: InvestmentTerms,
) -> DomainResult<Investment> {
    let (credit, debit) = transfer_funds(
        terms.initial_amount,
        terms.start_date,
        source_account,
        destination_account,
    )?;

    Ok(Investment {
        id: OperationId::new(),
        rate: terms.rate,
        days: terms.days,
        amount: terms.initial_amount,
        date: terms.start_date,
        end_date: terms.end_date,
        final_amount_before_taxes: terms.final_amount_before_taxes,
        final_amount_after_taxes: terms.final_amount_after_taxes,
        account: destination_account.to_ref(),
        transactions: [credit, debit],
    })
}

/// Move `amount` between two accounts, returning the `(credit, debit)` pair
/// in application order.
///
/// Both transactions are built before either balance moves, and the
/// withdrawal — the only fallible application — runs before the deposit, so
/// a refused transfer leaves both accounts exactly as they were.
fn transfer_funds(
    amount: Decimal,
    date: DateTime<Utc>,
    source_account: &mut Account,
    destination_account: &mut Account,
) -> DomainResult<(Transaction, Transaction)> {
    let credit = Transaction::credit(
        -amount,
        date,
        destination_account.to_ref(),
        Some(source_account.to_ref()),
    )?;
    let debit = Transaction::debit(
        amount,
        date,
        destination_account.to_ref(),
        Some(source_account.to_ref()),
    )?;

    source_account.withdraw_funds(&credit)?;
    destination_account.add_funds(&debit)?;

    Ok((credit, debit))
}
