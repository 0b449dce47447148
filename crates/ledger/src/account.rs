use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use investments_core::{DomainError, DomainResult, Entity, ValueObject};

use crate::transaction::Transaction;

/// Institution holding an account (a bank, a broker). No behavior.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ValueObject for Company {}

/// Immutable identity snapshot of an account.
///
/// Transactions store this instead of aliasing the live (mutable) `Account`,
/// so they stay hashable value objects: two transactions pointing at accounts
/// with the same name and company compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountRef {
    pub name: String,
    pub company: Company,
}

impl ValueObject for AccountRef {}

/// Personal account: a balance plus the institution that holds it.
///
/// The balance is private and moves only through [`Account::add_funds`] and
/// [`Account::withdraw_funds`]; there is no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    name: String,
    company: Company,
    balance: Decimal,
}

impl Account {
    /// Open an account with a zero balance.
    pub fn new(name: impl Into<String>, company: Company) -> Self {
        Self::with_balance(name, company, Decimal::ZERO)
    }

    /// Open an account with a caller-supplied opening balance.
    pub fn with_balance(name: impl Into<String>, company: Company, balance: Decimal) -> Self {
        Self {
            name: name.into(),
            company,
            balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Identity snapshot for embedding in transactions.
    pub fn to_ref(&self) -> AccountRef {
        AccountRef {
            name: self.name.clone(),
            company: self.company.clone(),
        }
    }

    /// Apply a debit transaction: funds arrive, the balance grows.
    ///
    /// Debit amounts are strictly positive by construction, so this cannot
    /// fail for a genuine debit; handing it a credit is a validation error.
    pub fn add_funds(&mut self, debit: &Transaction) -> DomainResult<()> {
        if !debit.is_debit() {
            return Err(DomainError::validation(
                "add_funds takes a debit transaction",
            ));
        }
        self.balance += debit.amount();
        Ok(())
    }

    /// Apply a credit transaction: funds leave, the balance shrinks.
    ///
    /// Credit amounts carry their sign (negative), so the balance update is
    /// an addition. A credit whose magnitude exceeds the balance is refused
    /// with [`DomainError::InsufficientFunds`] and leaves the balance
    /// untouched.
    pub fn withdraw_funds(&mut self, credit: &Transaction) -> DomainResult<()> {
        if !credit.is_credit() {
            return Err(DomainError::validation(
                "withdraw_funds takes a credit transaction",
            ));
        }
        // The amount is negative; the credit may not drive the balance below
        // zero.
        if self.balance + credit.amount() < Decimal::ZERO {
            return Err(DomainError::insufficient_funds(
                credit.amount(),
                self.balance,
            ));
        }
        self.balance += credit.amount();
        Ok(())
    }
}

impl Entity for Account {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl From<&Account> for AccountRef {
    fn from(account: &Account) -> Self {
        account.to_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use crate::transaction::Transaction;

    fn test_account(balance: Decimal) -> Account {
        Account::with_balance("Debit account", Company::new("Santander"), balance)
    }

    #[test]
    fn add_funds_grows_balance_by_debit_amount() {
        let mut account = test_account(dec!(0));
        let debit =
            Transaction::debit(dec!(100), Utc::now(), account.to_ref(), None).unwrap();

        account.add_funds(&debit).unwrap();

        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn withdraw_funds_shrinks_balance_by_credit_magnitude() {
        let mut account = test_account(dec!(100));
        let credit =
            Transaction::credit(dec!(-40), Utc::now(), account.to_ref(), None).unwrap();

        account.withdraw_funds(&credit).unwrap();

        assert_eq!(account.balance(), dec!(60));
    }

    #[test]
    fn overdraw_is_refused_and_balance_is_untouched() {
        let mut account = test_account(dec!(50));
        let credit =
            Transaction::credit(dec!(-80), Utc::now(), account.to_ref(), None).unwrap();

        let err = account.withdraw_funds(&credit).unwrap_err();

        match err {
            DomainError::InsufficientFunds {
                requested,
                available,
            } => {
                assert_eq!(requested, dec!(-80));
                assert_eq!(available, dec!(50));
            }
            other => panic!("expected InsufficientFunds, got {other:?}"),
        }
        assert_eq!(account.balance(), dec!(50));
    }

    #[test]
    fn account_identity_is_its_name_and_survives_balance_changes() {
        let mut account = test_account(dec!(0));
        let id_before = Entity::id(&account).clone();

        let debit =
            Transaction::debit(dec!(100), Utc::now(), account.to_ref(), None).unwrap();
        account.add_funds(&debit).unwrap();

        assert_eq!(Entity::id(&account), "Debit account");
        assert_eq!(Entity::id(&account), &id_before);
    }

    #[test]
    fn add_funds_rejects_a_credit() {
        let mut account = test_account(dec!(100));
        let credit =
            Transaction::credit(dec!(-10), Utc::now(), account.to_ref(), None).unwrap();

        let err = account.add_funds(&credit).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn withdraw_funds_rejects_a_debit() {
        let mut account = test_account(dec!(100));
        let debit =
            Transaction::debit(dec!(10), Utc::now(), account.to_ref(), None).unwrap();

        let err = account.withdraw_funds(&debit).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(account.balance(), dec!(100));
    }
}
