use serde_json::Value;

use super::{format_scalar, result_of};

/// Key result fields, most telling first.
const PRIORITY_KEYS: [&str; 5] = [
    "working_capital_ratio",
    "net_profit_margin",
    "gross_profit_margin",
    "revenue",
    "expense",
];

/// Print just the headline value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_value(value));
}

fn minimal_value(value: &Value) -> String {
    let result = result_of(value);

    if let Value::Object(map) = result {
        for key in &PRIORITY_KEYS {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    return format_scalar(val);
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_scalar(val));
        }
    }

    format_scalar(result)
}
