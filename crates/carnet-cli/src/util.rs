use anyhow::{Context as _, Result};
use carnet_core::domain::{ContactDraft, ContactRecord};
use carnet_core::CoreError;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A contact file holds either one contact object or an array of them.
pub fn read_entries(path: &Path) -> Result<Vec<Value>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse {}", path.display()))?;
    let entries = match value {
        Value::Array(items) => items,
        other => vec![other],
    };
    debug!(path = %path.display(), entries = entries.len(), "contact file read");
    Ok(entries)
}

#[derive(Debug)]
pub enum EntryError {
    Shape(serde_json::Error),
    Invalid(CoreError),
}

impl EntryError {
    pub fn message(&self) -> String {
        match self {
            EntryError::Shape(err) => err.to_string(),
            EntryError::Invalid(err) => err.to_string(),
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            EntryError::Shape(_) => None,
            EntryError::Invalid(err) => err.field().map(|field| field.to_string()),
        }
    }
}

pub fn parse_entry(entry: Value) -> std::result::Result<ContactRecord, EntryError> {
    let draft: ContactDraft = serde_json::from_value(entry).map_err(EntryError::Shape)?;
    ContactRecord::from_draft(draft).map_err(EntryError::Invalid)
}

pub fn read_records(path: &Path) -> Result<Vec<ContactRecord>> {
    let mut records = Vec::new();
    for (index, entry) in read_entries(path)?.into_iter().enumerate() {
        let draft: ContactDraft = serde_json::from_value(entry)
            .with_context(|| format!("{}[{}]", path.display(), index))?;
        let record = ContactRecord::from_draft(draft)
            .with_context(|| format!("{}[{}]", path.display(), index))?;
        records.push(record);
    }
    Ok(records)
}
