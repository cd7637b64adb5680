//! Shipping option feed.
//!
//! The checkout host normally supplies quotes; the demo reads them from a
//! JSON array on disk instead.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Error as SerdeError;

use crate::models::shipping_option::ShippingOption;

/// Load shipping options from a JSON file. A missing file is an empty feed.
pub fn load_shipping_options(path: &Path) -> Result<Vec<ShippingOption>> {
    if !path.exists() {
        log::warn!("Shipping option feed {} not found", path.display());
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read shipping options from {}", path.display()))?;
    let options: Vec<ShippingOption> =
        serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;

    log::info!(
        "Loaded {} shipping options from {}",
        options.len(),
        path.display()
    );
    Ok(options)
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize shipping options from {}",
        path.display()
    ))
}
