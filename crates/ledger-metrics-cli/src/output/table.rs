use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{flatten_fields, format_scalar, result_of};

/// Print the result as a field/value table, then warnings and methodology.
pub fn print_table(value: &Value) {
    println!("{}", result_table(result_of(value)));

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn result_table(result: &Value) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in flatten_fields(result) {
        builder.push_record([key, format_scalar(&val)]);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_lists_nested_fields() {
        let rendered = result_table(&json!({
            "revenue": "30000",
            "working_capital": {"net_liabilities": "7000"},
            "working_capital_ratio": null
        }))
        .to_string();

        assert!(rendered.contains("working_capital.net_liabilities"));
        assert!(rendered.contains("7000"));
        assert!(rendered.contains("n/a"));
    }
}
