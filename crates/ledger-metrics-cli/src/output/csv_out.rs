use serde_json::Value;
use std::io::{self, Write};

use super::{flatten_fields, format_scalar, result_of};

/// Write the result as `field,value` CSV rows to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        eprintln!("CSV write error: {}", e);
    }
}

fn write_csv<W: Write>(out: W, value: &Value) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["field", "value"])?;
    for (key, val) in flatten_fields(result_of(value)) {
        wtr.write_record([key, format_scalar(&val)])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_csv_rows() {
        let mut buf: Vec<u8> = Vec::new();
        let envelope = json!({
            "result": {
                "expense": "2000",
                "revenue": "30000",
                "working_capital": {"net_assets": "-145000"}
            },
            "warnings": []
        });
        write_csv(&mut buf, &envelope).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "field,value\nexpense,2000\nrevenue,30000\nworking_capital.net_assets,-145000\n"
        );
    }
}
