pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;
pub mod text;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(
    format: &OutputFormat,
    value: &Value,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => text::print_text(value)?,
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
    Ok(())
}

/// The `result` object of a computation envelope, or the value itself.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Flatten nested objects into dotted `field` / value pairs, in key order.
///
/// `{"working_capital": {"net_assets": "1"}}` -> `("working_capital.net_assets", "1")`
pub(crate) fn flatten_fields(value: &Value) -> Vec<(String, Value)> {
    let mut fields = Vec::new();
    if let Value::Object(map) = value {
        for (key, val) in map {
            push_field(&mut fields, key.clone(), val);
        }
    }
    fields
}

fn push_field(fields: &mut Vec<(String, Value)>, key: String, value: &Value) {
    match value {
        Value::Object(nested) => {
            for (child, val) in nested {
                push_field(fields, format!("{}.{}", key, child), val);
            }
        }
        _ => fields.push((key, value.clone())),
    }
}

/// Render a scalar for a table cell or CSV field.
pub(crate) fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "n/a".to_string(),
        Value::Array(arr) => arr.iter().map(format_scalar).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_result() {
        let value = json!({
            "revenue": "30000",
            "working_capital": {"net_assets": "-145000", "net_liabilities": "7000"},
            "working_capital_ratio": null
        });
        let fields = flatten_fields(&value);
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "revenue",
                "working_capital.net_assets",
                "working_capital.net_liabilities",
                "working_capital_ratio"
            ]
        );
        assert_eq!(format_scalar(&fields[3].1), "n/a");
    }

    #[test]
    fn test_result_of_envelope() {
        let envelope = json!({"result": {"revenue": "1"}, "warnings": []});
        assert_eq!(result_of(&envelope), &json!({"revenue": "1"}));
        let bare = json!({"revenue": "1"});
        assert_eq!(result_of(&bare), &bare);
    }
}
