//! Load catalog exports from disk.
//!
//! Files ending in `.yaml` or `.yml` are parsed as YAML, anything else as
//! JSON. Each file holds an array of stored records.

use std::path::Path;

use hornero_costing::{
    Ingredient, IngredientRecord, NormalizeError, Product, ProductRecord, normalize_ingredients,
    normalize_products,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading an export.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("Invalid YAML in {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("Invalid record in {path}: {source}")]
    Record {
        path: String,
        source: NormalizeError,
    },
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Parse an export's contents according to the file extension of `path`.
///
/// # Errors
///
/// Returns `LoadError::Json` or `LoadError::Yaml` on malformed input.
pub fn parse_records<T: DeserializeOwned>(path: &Path, content: &str) -> Result<Vec<T>, LoadError> {
    let display = path.display().to_string();
    if is_yaml(path) {
        serde_yaml::from_str(content).map_err(|source| LoadError::Yaml {
            path: display,
            source,
        })
    } else {
        serde_json::from_str(content).map_err(|source| LoadError::Json {
            path: display,
            source,
        })
    }
}

async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
    parse_records(path, &content)
}

/// Load and normalize an ingredient export.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or a record has no id.
pub async fn ingredients(path: &Path) -> Result<Vec<Ingredient>, LoadError> {
    let records: Vec<IngredientRecord> = read_records(path).await?;
    let ingredients = normalize_ingredients(records).map_err(|source| LoadError::Record {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), count = ingredients.len(), "Loaded ingredients");
    Ok(ingredients)
}

/// Load and normalize a product export.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or a record has no id.
pub async fn products(path: &Path) -> Result<Vec<Product>, LoadError> {
    let records: Vec<ProductRecord> = read_records(path).await?;
    let products = normalize_products(records).map_err(|source| LoadError::Record {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), count = products.len(), "Loaded products");
    Ok(products)
}
