//! Catalog core - the raw layout table normalized into typed records
//! and precomputed display entries.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::error;

use crate::cells::{self, RenderCell, RowArity};
use crate::goods::{GoodId, GoodMap};
use crate::production;

/// Errors surfaced while turning the raw table into display entries.
/// None are retried - the table and asset set are fixed for a run; the
/// loading state decides what to do with a bad catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("required column `{column}` is missing")]
    MissingRequiredField { column: &'static str },

    #[error("bad `{column}` token `{token}`: {reason}")]
    MalformedProductionField {
        column: &'static str,
        token: String,
        reason: &'static str,
    },

    #[error("no icon registered for good `{0}`")]
    UnknownGoodId(GoodId),

    #[error("cannot read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One row of the layout table as materialized on disk. JSON `null` and
/// an absent key are both the missing marker (the scraper's NaN).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Image", default)]
    pub image: Option<String>,
    #[serde(rename = "Cost", default)]
    pub cost: Option<String>,
    #[serde(rename = "Size", default)]
    pub size: Option<String>,
    #[serde(rename = "Tiles", default)]
    pub tiles: Option<f64>,
    #[serde(rename = "Space Efficiency", default)]
    pub space_efficiency: Option<f64>,
    #[serde(rename = "Production", default)]
    pub production: Option<String>,
}

/// A normalized field: the typed value, or the explicit "absent in
/// source data" marker. The marker is a valid value that renders as a
/// placeholder - it is never an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Field<T> {
    Value(T),
    Unavailable,
}

impl<T> Field<T> {
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            Field::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Field::Unavailable)
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Field::Value(v),
            None => Field::Unavailable,
        }
    }
}

/// Placeholder shown wherever an unavailable field is displayed.
pub const UNAVAILABLE_LABEL: &str = "N/A";

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Value(v) => v.fmt(f),
            Field::Unavailable => f.write_str(UNAVAILABLE_LABEL),
        }
    }
}

/// One catalog item, fully typed. Built once per row at list
/// construction and never mutated after.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRecord {
    pub title: String,
    pub image_ref: String,
    pub cost: Field<GoodMap>,
    pub size: Field<String>,
    pub tiles: Field<f64>,
    pub space_efficiency: Field<f64>,
    pub production: Field<GoodMap>,
}

/// A record plus everything its list row needs precomputed: cell runs
/// for cost and production, and the production region's width hint.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    pub record: LayoutRecord,
    pub cost_cells: Vec<RenderCell>,
    pub production_cells: Vec<RenderCell>,
    pub arity: RowArity,
}

/// Convert one raw row into a typed record.
///
/// Title and image are mandatory - their absence means the catalog
/// itself is malformed. The five data fields become `Unavailable` when
/// the source has no value; cost and production otherwise go through
/// the production parser, the numeric/text fields pass through as-is.
pub fn normalize(row: &RawRow) -> Result<LayoutRecord, CatalogError> {
    let title = required(&row.name, "Name")?;
    let image_ref = required(&row.image, "Image")?;

    let cost = match &row.cost {
        Some(raw) => Field::Value(production::parse_goods("Cost", raw)?),
        None => Field::Unavailable,
    };
    let production = match &row.production {
        Some(raw) => Field::Value(production::parse_goods("Production", raw)?),
        None => Field::Unavailable,
    };

    Ok(LayoutRecord {
        title,
        image_ref,
        cost,
        size: row.size.clone().into(),
        tiles: row.tiles.into(),
        space_efficiency: row.space_efficiency.into(),
        production,
    })
}

/// Mandatory string column: present and non-blank.
fn required(value: &Option<String>, column: &'static str) -> Result<String, CatalogError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(CatalogError::MissingRequiredField { column }),
    }
}

/// Read the materialized layout table from disk.
pub fn load_rows(path: &Path) -> Result<Vec<RawRow>, CatalogError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&json)?)
}

/// Build display entries for the whole table, one per row, in table
/// order - no reordering, no dedup.
///
/// The first bad row aborts construction; the row index and name go to
/// the log so catalog drift shows up loudly instead of as a blank row.
pub fn build_entries(rows: &[RawRow]) -> Result<Vec<CatalogEntry>, CatalogError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            build_entry(row).map_err(|e| {
                error!(
                    "catalog row {} ({}): {}",
                    index,
                    row.name.as_deref().unwrap_or("unnamed"),
                    e
                );
                e
            })
        })
        .collect()
}

fn build_entry(row: &RawRow) -> Result<CatalogEntry, CatalogError> {
    let record = normalize(row)?;
    let cost_cells = cells::layout(&record.cost)?;
    let production_cells = cells::layout(&record.production)?;
    let arity = cells::row_arity(&record.production);
    Ok(CatalogEntry {
        record,
        cost_cells,
        production_cells,
        arity,
    })
}
