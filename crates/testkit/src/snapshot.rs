//! Golden-file fixtures for derived seeds.
//!
//! Fixtures are canonical pretty JSON (object keys sorted) so diffs stay
//! stable. Tests compare against the file on disk; rerun with
//! `SEEDGEN_UPDATE_SNAPSHOTS=1` to rewrite a fixture after an intentional
//! algorithm change.

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Environment variable that enables fixture rewrites.
pub const UPDATE_SNAPSHOTS_ENV: &str = "SEEDGEN_UPDATE_SNAPSHOTS";

/// Assert that `value` matches the JSON fixture stored at `path`.
pub fn assert_json_snapshot<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let actual = canonical_json(value)?;

    if should_update_snapshots() {
        tracing::info!(path = %path.display(), "updating snapshot");
        return write_snapshot(path, &actual);
    }

    let expected = load_snapshot_text(path)?;
    if normalize_newlines(&expected) != actual {
        bail!(
            "snapshot mismatch at {} (run with {}=1 to update)",
            path.display(),
            UPDATE_SNAPSHOTS_ENV
        );
    }
    Ok(())
}

/// Deserialize a fixture, e.g. to drive table tests from it.
pub fn load_json_snapshot<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T> {
    let path = path.as_ref();
    let text = load_snapshot_text(path)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn load_snapshot_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| {
        format!(
            "snapshot missing at {} (run with {}=1 to create it)",
            path.display(),
            UPDATE_SNAPSHOTS_ENV
        )
    })
}

fn should_update_snapshots() -> bool {
    matches!(
        std::env::var(UPDATE_SNAPSHOTS_ENV).as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}

fn write_snapshot(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

fn canonical_json<T: Serialize>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value).context("failed to serialize snapshot value")?;
    let mut text = serde_json::to_string_pretty(&sort_keys(value))?;
    text.push('\n');
    Ok(text)
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(values) => Value::Array(values.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_json_sorts_nested_keys() {
        let text = canonical_json(&json!({"b": 1, "a": {"z": 2, "y": [ {"d": 0, "c": 1} ]}}))
            .expect("json");
        let a = text.find("\"a\"").expect("a");
        let b = text.find("\"b\"").expect("b");
        let y = text.find("\"y\"").expect("y");
        let z = text.find("\"z\"").expect("z");
        let c = text.find("\"c\"").expect("c");
        let d = text.find("\"d\"").expect("d");
        assert!(a < b && y < z && c < d);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn missing_snapshot_reports_update_hint() {
        let err = load_snapshot_text(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains(UPDATE_SNAPSHOTS_ENV));
    }
}
