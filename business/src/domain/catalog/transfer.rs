//! JSON import and export of the working set.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::product::draft::ProductDraft;
use crate::domain::product::value_objects::{Category, PLACEHOLDER_IMAGE};

use super::entry::{CatalogEntry, LocalKey};
use super::errors::TransferError;

/// One exported product, in wire field naming.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub key: LocalKey,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub image: String,
    pub location: String,
    pub directions: String,
    pub description: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<&CatalogEntry> for ProductSnapshot {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.identity.server(),
            key: entry.key(),
            name: entry.details.name.clone(),
            sku: entry.details.sku.clone(),
            category: entry.details.category.to_string(),
            price: entry.details.price,
            stock: entry.details.stock,
            image: entry.details.image.clone(),
            location: entry.details.location.clone(),
            directions: entry.details.directions.clone(),
            description: entry.details.description.clone().unwrap_or_default(),
            created_at: entry.created_at.timestamp_millis(),
            updated_at: entry.updated_at.timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub contents: String,
}

pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("products-{}.json", now.format("%Y-%m-%d"))
}

/// Point-in-time snapshot of `entries` as a pretty-printed JSON array.
pub fn export_snapshot(
    entries: &[CatalogEntry],
    now: DateTime<Utc>,
) -> Result<ExportFile, TransferError> {
    let snapshots: Vec<ProductSnapshot> = entries.iter().map(ProductSnapshot::from).collect();
    let contents =
        serde_json::to_string_pretty(&snapshots).map_err(|_| TransferError::SerializationFailed)?;

    Ok(ExportFile {
        filename: export_filename(now),
        contents,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportRecord {
    /// Position in the imported array.
    pub index: usize,
    pub draft: ProductDraft,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportBatch {
    pub records: Vec<ImportRecord>,
    /// Entries with neither a name nor a sku.
    pub discarded: usize,
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn coerce_text(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Numeric coercion to text; an empty result fails draft validation.
fn coerce_number(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "0".to_string(),
        Some(Value::Bool(b)) => u8::from(*b).to_string(),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                (f as i64).to_string()
            }
            (None, Some(f)) => f.to_string(),
            (None, None) => String::new(),
        },
        Some(Value::String(s)) if s.trim().is_empty() => "0".to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => String::new(),
    }
}

fn coerce_timestamp(value: Option<&Value>, now: DateTime<Utc>) -> DateTime<Utc> {
    let millis = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    millis
        .and_then(DateTime::from_timestamp_millis)
        .unwrap_or(now)
}

fn coerce_record(index: usize, value: &Value, now: DateTime<Utc>) -> Option<ImportRecord> {
    let object = value.as_object()?;
    if !is_truthy(object.get("name")) && !is_truthy(object.get("sku")) {
        return None;
    }

    let draft = ProductDraft {
        name: coerce_text(object.get("name"), "").trim().to_string(),
        sku: coerce_text(object.get("sku"), "").trim().to_string(),
        category: Category::parse_lenient(&coerce_text(object.get("category"), "Other")).to_string(),
        price: coerce_number(object.get("price")),
        stock: coerce_number(object.get("stock")),
        image: coerce_text(object.get("image"), PLACEHOLDER_IMAGE),
        location: coerce_text(object.get("location"), ""),
        directions: coerce_text(object.get("directions"), ""),
        description: coerce_text(object.get("description"), ""),
    };

    Some(ImportRecord {
        index,
        draft,
        created_at: coerce_timestamp(object.get("createdAt"), now),
    })
}

/// Parses an import file: a JSON array of partial product objects.
///
/// Fields are coerced and defaulted; nothing is validated here beyond the
/// name-or-sku presence check.
pub fn parse_import(raw: &str, now: DateTime<Utc>) -> Result<ImportBatch, TransferError> {
    let value: Value = serde_json::from_str(raw).map_err(|_| TransferError::InvalidJson)?;
    let Value::Array(items) = value else {
        return Err(TransferError::NotAnArray);
    };

    let records: Vec<ImportRecord> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| coerce_record(index, item, now))
        .collect();
    let discarded = items.len() - records.len();

    Ok(ImportBatch { records, discarded })
}
