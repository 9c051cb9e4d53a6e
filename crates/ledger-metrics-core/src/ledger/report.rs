use std::io::Write;

use super::format::{format_currency, format_optional_percentage};
use super::metrics::LedgerMetricsOutput;

/// The five report lines, in fixed order.
pub fn render_lines(metrics: &LedgerMetricsOutput) -> Vec<String> {
    vec![
        format!("Revenue: {}", format_currency(metrics.revenue)),
        format!("Expense: {}", format_currency(metrics.expense)),
        format!(
            "Gross Profit Margin: {}",
            format_optional_percentage(metrics.gross_profit_margin)
        ),
        format!(
            "Net Profit Margin: {}",
            format_optional_percentage(metrics.net_profit_margin)
        ),
        format!(
            "Working Capital Ratio: {}",
            format_optional_percentage(metrics.working_capital_ratio)
        ),
    ]
}

/// Write the report lines, newline-terminated, to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    metrics: &LedgerMetricsOutput,
) -> std::io::Result<()> {
    for line in render_lines(metrics) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::metrics::WorkingCapital;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn output(gpm: Option<Decimal>) -> LedgerMetricsOutput {
        LedgerMetricsOutput {
            revenue: dec!(1234567.8),
            expense: dec!(-250),
            gross_profit_margin: gpm,
            net_profit_margin: Some(dec!(0.5)),
            working_capital_ratio: Some(dec!(1.25)),
            working_capital: WorkingCapital {
                debit_assets: dec!(500),
                credit_assets: Decimal::ZERO,
                credit_liabilities: dec!(400),
                debit_liabilities: Decimal::ZERO,
                net_assets: dec!(500),
                net_liabilities: dec!(400),
            },
            account_count: 3,
        }
    }

    #[test]
    fn test_render_lines() {
        let lines = render_lines(&output(Some(dec!(0.1))));
        assert_eq!(
            lines,
            vec![
                "Revenue: $1,234,568",
                "Expense: $-250",
                "Gross Profit Margin: 10.0%",
                "Net Profit Margin: 50.0%",
                "Working Capital Ratio: 125.0%",
            ]
        );
    }

    #[test]
    fn test_write_report_undefined_ratio() {
        let mut buf: Vec<u8> = Vec::new();
        write_report(&mut buf, &output(None)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().nth(2), Some("Gross Profit Margin: n/a"));
    }
}
