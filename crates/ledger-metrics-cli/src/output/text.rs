use serde_json::Value;
use std::io;

use ledger_metrics_core::ledger::metrics::LedgerMetricsOutput;
use ledger_metrics_core::ledger::report;

use super::result_of;

/// Print the five-line metrics report to stdout.
pub fn print_text(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = metrics_from_value(value)?;
    let stdout = io::stdout();
    report::write_report(&mut stdout.lock(), &metrics)?;
    Ok(())
}

fn metrics_from_value(
    value: &Value,
) -> Result<LedgerMetricsOutput, Box<dyn std::error::Error>> {
    let metrics = serde_json::from_value(result_of(value).clone())
        .map_err(|e| format!("Output is not a ledger metrics result: {}", e))?;
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_metrics_core::ledger::account::LedgerInput;
    use ledger_metrics_core::ledger::metrics::calculate_ledger_metrics;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_envelope_round_trips_into_report() {
        let input = LedgerInput::from_json_str(include_str!(
            "../../../ledger-metrics-core/tests/fixtures/ledger.json"
        ))
        .unwrap();
        let output = calculate_ledger_metrics(&input).unwrap();
        let envelope = serde_json::to_value(output).unwrap();

        let metrics = metrics_from_value(&envelope).unwrap();
        assert_eq!(
            report::render_lines(&metrics),
            vec![
                "Revenue: $30,000",
                "Expense: $2,000",
                "Gross Profit Margin: 66.7%",
                "Net Profit Margin: 93.3%",
                "Working Capital Ratio: -2071.4%",
            ]
        );
    }

    #[test]
    fn test_foreign_value_rejected() {
        let foreign = serde_json::json!({"result": {"wacc": "0.08"}});
        let err = metrics_from_value(&foreign).unwrap_err();
        assert!(err.to_string().starts_with("Output is not a ledger metrics result"));
    }
}
