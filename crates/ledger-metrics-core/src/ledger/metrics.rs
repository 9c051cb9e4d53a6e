use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io;
use std::time::Instant;
use tracing::debug;

use super::account::{AccountCategory, AccountRecord, AccountType, LedgerInput, ValueType};
use super::report;
use crate::{types::*, LedgerMetricsError, LedgerMetricsResult};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Gross and net working-capital components behind the WCR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingCapital {
    pub debit_assets: Money,
    pub credit_assets: Money,
    pub credit_liabilities: Money,
    pub debit_liabilities: Money,
    /// debit_assets - credit_assets
    pub net_assets: Money,
    /// credit_liabilities - debit_liabilities
    pub net_liabilities: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerMetricsOutput {
    pub revenue: Money,
    pub expense: Money,
    /// `None` when revenue is zero or the quotient is out of range.
    pub gross_profit_margin: Option<Rate>,
    /// `None` when revenue is zero or the quotient is out of range.
    pub net_profit_margin: Option<Rate>,
    /// `None` when net liabilities are zero or the quotient is out of range.
    pub working_capital_ratio: Option<Rate>,
    pub working_capital: WorkingCapital,
    pub account_count: usize,
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// Revenue, expense, margin and working-capital metrics over one ledger.
///
/// The account collection is fixed at construction. Ratios that depend on
/// revenue or expense take them as arguments, so callers cannot divide by a
/// sum that was never computed.
#[derive(Debug, Clone)]
pub struct MetricCalculator {
    accounts: Vec<AccountRecord>,
}

impl MetricCalculator {
    pub fn new(accounts: Vec<AccountRecord>) -> Self {
        Self { accounts }
    }

    pub fn from_input(input: LedgerInput) -> Self {
        Self::new(input.data)
    }

    /// Sum of `total_value` over every record in the `revenue` category.
    pub fn calculate_revenue(&self) -> LedgerMetricsResult<Money> {
        let revenue = self.sum_where("revenue", |a| {
            a.account_category == AccountCategory::Revenue
        })?;
        debug!(%revenue, "revenue aggregated");
        Ok(revenue)
    }

    /// Sum of `total_value` over every record in the `expense` category.
    pub fn calculate_expense(&self) -> LedgerMetricsResult<Money> {
        let expense = self.sum_where("expense", |a| {
            a.account_category == AccountCategory::Expense
        })?;
        debug!(%expense, "expense aggregated");
        Ok(expense)
    }

    /// Sum of debit-side `sales` lines, in any category.
    pub fn sales_debit_total(&self) -> LedgerMetricsResult<Money> {
        self.sum_where("sales debit", |a| {
            a.account_type == AccountType::Sales && a.value_type == ValueType::Debit
        })
    }

    /// Gross profit margin: debit-side sales over revenue.
    pub fn calculate_gpm(&self, revenue: Money) -> LedgerMetricsResult<Rate> {
        let sales = self.sales_debit_total()?;
        debug!(%sales, %revenue, "gross profit margin inputs");
        safe_divide(sales, revenue, "gross profit margin (sales debit / revenue)")
    }

    /// Net profit margin: (revenue - expense) / revenue.
    pub fn calculate_npm(revenue: Money, expense: Money) -> LedgerMetricsResult<Rate> {
        let net = checked_sub(revenue, expense, "net profit (revenue - expense)")?;
        safe_divide(
            net,
            revenue,
            "net profit margin ((revenue - expense) / revenue)",
        )
    }

    /// The four working-capital sums and their nets.
    pub fn working_capital(&self) -> LedgerMetricsResult<WorkingCapital> {
        let mut wc = WorkingCapital {
            debit_assets: Decimal::ZERO,
            credit_assets: Decimal::ZERO,
            credit_liabilities: Decimal::ZERO,
            debit_liabilities: Decimal::ZERO,
            net_assets: Decimal::ZERO,
            net_liabilities: Decimal::ZERO,
        };

        for account in &self.accounts {
            let value = account.total_value;
            match (&account.account_category, account.value_type) {
                (AccountCategory::Assets, ValueType::Debit)
                    if is_current_asset(&account.account_type) =>
                {
                    wc.debit_assets = checked_add(wc.debit_assets, value, "debit assets")?
                }
                (AccountCategory::Assets, ValueType::Credit)
                    if is_current_asset(&account.account_type) =>
                {
                    wc.credit_assets = checked_add(wc.credit_assets, value, "credit assets")?
                }
                (AccountCategory::Liability, ValueType::Credit)
                    if is_current_liability(&account.account_type) =>
                {
                    wc.credit_liabilities =
                        checked_add(wc.credit_liabilities, value, "credit liabilities")?
                }
                (AccountCategory::Liability, ValueType::Debit)
                    if is_current_liability(&account.account_type) =>
                {
                    wc.debit_liabilities =
                        checked_add(wc.debit_liabilities, value, "debit liabilities")?
                }
                _ => {}
            }
        }

        wc.net_assets = checked_sub(wc.debit_assets, wc.credit_assets, "net assets")?;
        wc.net_liabilities = checked_sub(
            wc.credit_liabilities,
            wc.debit_liabilities,
            "net liabilities",
        )?;

        debug!(
            net_assets = %wc.net_assets,
            net_liabilities = %wc.net_liabilities,
            "working capital aggregated"
        );
        Ok(wc)
    }

    /// Working capital ratio: net current assets over net current liabilities.
    pub fn calculate_wcr(&self) -> LedgerMetricsResult<Rate> {
        let wc = self.working_capital()?;
        working_capital_ratio(&wc)
    }

    /// Run all five metrics once, in report order.
    ///
    /// A zero denominator or a quotient too large for a decimal is not fatal
    /// here: the ratio is left empty and a warning explains why. Revenue,
    /// expense or working-capital sums that overflow are.
    pub fn metrics(&self) -> LedgerMetricsResult<ComputationOutput<LedgerMetricsOutput>> {
        let start = Instant::now();
        let mut warnings: Vec<String> = Vec::new();

        if self.accounts.is_empty() {
            warnings.push("Ledger contains no account records.".into());
        }

        let revenue = self.calculate_revenue()?;
        let expense = self.calculate_expense()?;

        if revenue.is_zero() {
            warnings.push("Revenue is zero; margins are undefined.".into());
        }

        let gross_profit_margin = optional_ratio(self.calculate_gpm(revenue), &mut warnings)?;
        let net_profit_margin =
            optional_ratio(Self::calculate_npm(revenue, expense), &mut warnings)?;

        let working_capital = self.working_capital()?;
        if working_capital.net_liabilities.is_zero() {
            warnings.push("Net current liabilities are zero; WCR is undefined.".into());
        }
        let working_capital_ratio =
            optional_ratio(working_capital_ratio(&working_capital), &mut warnings)?;

        let output = LedgerMetricsOutput {
            revenue,
            expense,
            gross_profit_margin,
            net_profit_margin,
            working_capital_ratio,
            working_capital,
            account_count: self.accounts.len(),
        };

        let elapsed = start.elapsed().as_micros() as u64;
        let assumptions = serde_json::json!({
            "gpm_numerator": "account_type = sales, value_type = debit",
            "wcr_asset_types": ["current", "bank", "current_accounts_receivable"],
            "wcr_liability_types": ["current", "current_accounts_payable"],
            "unrecognised_tags": "excluded from every sum"
        });

        Ok(with_metadata(
            "Ledger aggregation (revenue, expense, GPM, NPM, WCR)",
            &assumptions,
            warnings,
            self.accounts.len(),
            elapsed,
            output,
        ))
    }

    /// Compute every metric and print the five report lines to stdout.
    pub fn calculate_metric(&self) -> LedgerMetricsResult<()> {
        let output = self.metrics()?;
        let stdout = io::stdout();
        report::write_report(&mut stdout.lock(), &output.result)?;
        Ok(())
    }

    fn sum_where<F>(&self, context: &str, predicate: F) -> LedgerMetricsResult<Money>
    where
        F: Fn(&AccountRecord) -> bool,
    {
        self.accounts
            .iter()
            .filter(|a| predicate(a))
            .try_fold(Decimal::ZERO, |total, a| {
                checked_add(total, a.total_value, context)
            })
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute revenue, expense, GPM, NPM and WCR for a parsed ledger export.
pub fn calculate_ledger_metrics(
    input: &LedgerInput,
) -> LedgerMetricsResult<ComputationOutput<LedgerMetricsOutput>> {
    MetricCalculator::new(input.data.clone()).metrics()
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn is_current_asset(account_type: &AccountType) -> bool {
    matches!(
        account_type,
        AccountType::Current | AccountType::Bank | AccountType::CurrentAccountsReceivable
    )
}

fn is_current_liability(account_type: &AccountType) -> bool {
    matches!(
        account_type,
        AccountType::Current | AccountType::CurrentAccountsPayable
    )
}

fn working_capital_ratio(wc: &WorkingCapital) -> LedgerMetricsResult<Rate> {
    safe_divide(
        wc.net_assets,
        wc.net_liabilities,
        "working capital ratio (net assets / net liabilities)",
    )
}

fn safe_divide(
    numerator: Decimal,
    denominator: Decimal,
    context: &str,
) -> LedgerMetricsResult<Decimal> {
    if denominator.is_zero() {
        return Err(LedgerMetricsError::DivisionByZero {
            context: context.to_string(),
        });
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| LedgerMetricsError::Overflow {
            context: context.to_string(),
        })
}

fn checked_add(lhs: Money, rhs: Money, context: &str) -> LedgerMetricsResult<Money> {
    lhs.checked_add(rhs)
        .ok_or_else(|| LedgerMetricsError::Overflow {
            context: context.to_string(),
        })
}

fn checked_sub(lhs: Money, rhs: Money, context: &str) -> LedgerMetricsResult<Money> {
    lhs.checked_sub(rhs)
        .ok_or_else(|| LedgerMetricsError::Overflow {
            context: context.to_string(),
        })
}

fn optional_ratio(
    ratio: LedgerMetricsResult<Rate>,
    warnings: &mut Vec<String>,
) -> LedgerMetricsResult<Option<Rate>> {
    match ratio {
        Ok(value) => Ok(Some(value)),
        Err(LedgerMetricsError::DivisionByZero { context }) => {
            debug!(%context, "ratio left undefined");
            warnings.push(format!("Division by zero in {context}; reported as n/a."));
            Ok(None)
        }
        Err(LedgerMetricsError::Overflow { context }) => {
            debug!(%context, "ratio out of decimal range");
            warnings.push(format!(
                "Result of {context} exceeds decimal range; reported as n/a."
            ));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
