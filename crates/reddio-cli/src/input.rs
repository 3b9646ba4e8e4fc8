//! # Item File Loading
//!
//! Reads batch transfer items from a file or stdin. A file holds either a
//! single item object or an array of items, as JSON or YAML. The format is
//! picked from the file extension; stdin is always JSON.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use reddio_core::BatchTransferItem;
use serde::Serialize;
use serde_json::Value;

/// Source text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// `.yaml` and `.yml` are YAML, anything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Items as they appeared in the input: one object or a list.
///
/// Serializes back to the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Batch {
    Single(BatchTransferItem),
    Many(Vec<BatchTransferItem>),
}

impl Batch {
    pub fn items(&self) -> &[BatchTransferItem] {
        match self {
            Self::Single(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Read the raw text at `path`, or stdin when `path` is `-`.
pub fn read_source(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read items from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Decode a batch from source text.
pub fn parse_batch(text: &str, format: InputFormat) -> anyhow::Result<Batch> {
    let value: Value = match format {
        InputFormat::Json => serde_json::from_str(text).context("input is not valid JSON")?,
        InputFormat::Yaml => serde_yaml::from_str(text).context("input is not valid YAML")?,
    };
    let batch = match value {
        Value::Array(entries) => {
            let mut items = Vec::with_capacity(entries.len());
            for (index, entry) in entries.into_iter().enumerate() {
                let item: BatchTransferItem = serde_json::from_value(entry)
                    .with_context(|| format!("item {index} is malformed"))?;
                items.push(item);
            }
            Batch::Many(items)
        }
        value @ Value::Object(_) => {
            Batch::Single(serde_json::from_value(value).context("item is malformed")?)
        }
        other => anyhow::bail!(
            "expected an item object or an array of items, got {}",
            json_kind(&other)
        ),
    };
    tracing::debug!(count = batch.len(), ?format, "parsed batch transfer items");
    Ok(batch)
}

/// Read and decode the batch at `path`.
pub fn load_batch(path: &Path) -> anyhow::Result<Batch> {
    let format = if path == Path::new("-") {
        InputFormat::Json
    } else {
        InputFormat::from_path(path)
    };
    let text = read_source(path)?;
    parse_batch(&text, format).with_context(|| format!("failed to load {}", path.display()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
