use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read a JSON file and deserialise into a typed struct.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    debug!(path = %canonical.display(), "reading input file");
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let value: T = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
    Ok(value)
}

/// Resolve against the working directory and require an existing file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_metrics_core::ledger::account::LedgerInput;

    fn fixture_path() -> String {
        format!(
            "{}/../ledger-metrics-core/tests/fixtures/ledger.json",
            env!("CARGO_MANIFEST_DIR")
        )
    }

    #[test]
    fn test_read_fixture() {
        let input: LedgerInput = read_json(&fixture_path()).unwrap();
        assert_eq!(input.data.len(), 13);
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = read_json::<LedgerInput>("/nonexistent/ledger.json").unwrap_err();
        assert_eq!(err.to_string(), "File not found: /nonexistent/ledger.json");
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let err = read_json::<LedgerInput>(env!("CARGO_MANIFEST_DIR")).unwrap_err();
        assert!(err.to_string().starts_with("Not a file:"));
    }
}
