// src/io/mod.rs
pub mod beta_decay;
pub mod source;
pub mod strength;

pub use source::{DataSource, FsSource};

use crate::error::{DataError, Result};
use crate::model::catalog;
use crate::model::{ChainSelection, Dataset, NuclideRecord, StrengthQuery, StrengthSpectrum};

pub const BETA_DECAY_DIR: &str = "beta_decay";
pub const STRENGTH_DIR: &str = "strength_functions";

pub fn beta_decay_resource(interaction: &str) -> String {
  format!("{}/data_{}.txt", BETA_DECAY_DIR, interaction)
}

pub fn strength_resource(query: &StrengthQuery) -> String {
  format!("{}/{}", STRENGTH_DIR, query.file_name())
}

/// Loads and parses the full table for one interaction.
pub fn load_dataset(source: &dyn DataSource, interaction: &str) -> Result<Dataset> {
  let resource = beta_decay_resource(interaction);
  let text = source.fetch(&resource)?;
  let outcome = beta_decay::parse(&text);

  if outcome.skipped.is_empty() && outcome.duplicates == 0 {
    log::info!("Loaded {} nuclides from {}", outcome.dataset.len(), resource);
  } else {
    log::warn!(
      "Loaded {} nuclides from {} ({} malformed rows skipped, {} duplicates ignored)",
      outcome.dataset.len(),
      resource,
      outcome.skipped.len(),
      outcome.duplicates
    );
  }
  Ok(outcome.dataset)
}

/// Chain members of `dataset`, sorted along the chain's x axis.
pub fn chain_members(dataset: &Dataset, selection: ChainSelection) -> Vec<NuclideRecord> {
  let mut members: Vec<NuclideRecord> = dataset.filter(selection).into_iter().cloned().collect();
  members.sort_by_key(|r| selection.x_value(r));
  members
}

/// Loads a dataset and keeps one chain of it. An empty chain is an error
/// naming the chain and the interaction.
pub fn load_chain(
  source: &dyn DataSource,
  interaction: &str,
  selection: ChainSelection,
) -> Result<(Dataset, Vec<NuclideRecord>)> {
  let dataset = load_dataset(source, interaction)?;
  let members = chain_members(&dataset, selection);
  if members.is_empty() {
    return Err(DataError::empty(format!(
      "{} with {}",
      selection.short_label(),
      interaction
    )));
  }
  Ok((dataset, members))
}

/// Interaction ids found as `data_<id>.txt`, or `fallback` when the
/// directory cannot be listed or holds none.
pub fn list_interactions(source: &dyn DataSource, fallback: &[String]) -> Vec<String> {
  let found: Vec<String> = source
    .list(BETA_DECAY_DIR)
    .unwrap_or_default()
    .iter()
    .filter_map(|name| {
      name
        .strip_prefix("data_")
        .and_then(|rest| rest.strip_suffix(".txt"))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
    })
    .collect();

  if found.is_empty() {
    fallback.to_vec()
  } else {
    found
  }
}

/// Nuclei with strength-function files, falling back to the static catalog.
pub fn list_nuclei(source: &dyn DataSource) -> Vec<String> {
  let listed = source
    .list(STRENGTH_DIR)
    .map(|names| catalog::nuclei_from_listing(&names))
    .unwrap_or_default();

  if listed.is_empty() {
    log::debug!("Using static nucleus list");
    catalog::static_catalog()
  } else {
    listed
  }
}

pub fn load_strength(source: &dyn DataSource, query: &StrengthQuery) -> Result<StrengthSpectrum> {
  let resource = strength_resource(query);
  let text = source.fetch(&resource)?;
  let points = strength::parse(&text);
  if points.is_empty() {
    return Err(DataError::empty(format!("{} (no data in file)", query.file_name())));
  }
  log::info!("Loaded {} strength samples from {}", points.len(), resource);
  Ok(StrengthSpectrum {
    query: query.clone(),
    points,
  })
}
