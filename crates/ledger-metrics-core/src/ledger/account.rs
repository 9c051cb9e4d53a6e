use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{types::Money, LedgerMetricsError, LedgerMetricsResult};

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Top-level classification of a ledger line.
///
/// Exports carry more categories than the metrics use (equity, etc.); those
/// are kept verbatim in `Other` and excluded from every sum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountCategory {
    Revenue,
    Expense,
    Assets,
    Liability,
    Other(String),
}

impl AccountCategory {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Revenue => "revenue",
            Self::Expense => "expense",
            Self::Assets => "assets",
            Self::Liability => "liability",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for AccountCategory {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "revenue" => Self::Revenue,
            "expense" => Self::Expense,
            "assets" => Self::Assets,
            "liability" => Self::Liability,
            _ => Self::Other(tag),
        }
    }
}

impl From<AccountCategory> for String {
    fn from(category: AccountCategory) -> Self {
        match category {
            AccountCategory::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-classification of a ledger line. Open-ended: only the tags the
/// metrics test against get their own variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountType {
    Sales,
    Current,
    Bank,
    CurrentAccountsReceivable,
    CurrentAccountsPayable,
    Other(String),
}

impl AccountType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sales => "sales",
            Self::Current => "current",
            Self::Bank => "bank",
            Self::CurrentAccountsReceivable => "current_accounts_receivable",
            Self::CurrentAccountsPayable => "current_accounts_payable",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for AccountType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "sales" => Self::Sales,
            "current" => Self::Current,
            "bank" => Self::Bank,
            "current_accounts_receivable" => Self::CurrentAccountsReceivable,
            "current_accounts_payable" => Self::CurrentAccountsPayable,
            _ => Self::Other(tag),
        }
    }
}

impl From<AccountType> for String {
    fn from(account_type: AccountType) -> Self {
        match account_type {
            AccountType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of the ledger a value is booked on. Closed: anything other than
/// `debit` or `credit` is rejected when the document is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ValueType {
    Debit,
    Credit,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

impl FromStr for ValueType {
    type Err = LedgerMetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            other => Err(LedgerMetricsError::InvalidTag {
                field: "value_type",
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ValueType {
    type Error = LedgerMetricsError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<ValueType> for String {
    fn from(value_type: ValueType) -> Self {
        value_type.as_str().to_string()
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One ledger line item. Extra fields in the export (codes, names, status,
/// currency) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub account_category: AccountCategory,
    pub account_type: AccountType,
    pub value_type: ValueType,
    pub total_value: Money,
}

impl AccountRecord {
    pub fn new(
        account_category: AccountCategory,
        account_type: AccountType,
        value_type: ValueType,
        total_value: Money,
    ) -> Self {
        Self {
            account_category,
            account_type,
            value_type,
            total_value,
        }
    }
}

/// Ledger export document: `{"data": [ ...records ]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerInput {
    pub data: Vec<AccountRecord>,
}

impl LedgerInput {
    /// Parse a ledger export held in memory.
    pub fn from_json_str(json: &str) -> LedgerMetricsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
