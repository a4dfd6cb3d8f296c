//! Whitespace-separated list parsing shared by the ingestion stages.

use crate::error::{BnError, Result};
use crate::types::Position;

/// Splits a whitespace-separated id list. `None` or blank text yields no ids.
pub(crate) fn split_ids(text: Option<&str>) -> Vec<String> {
  text
    .map(|t| t.split_whitespace().map(str::to_string).collect())
    .unwrap_or_default()
}

/// Parses a whitespace-separated list of floats for `node`.
pub(crate) fn parse_values(node: &str, field: &'static str, text: &str) -> Result<Vec<f64>> {
  text
    .split_whitespace()
    .map(|tok| {
      tok.parse::<f64>().map_err(|_| BnError::MalformedList {
        node: node.to_string(),
        field,
        token: tok.to_string(),
      })
    })
    .collect()
}

/// Parses exactly four integers `left top right bottom`.
pub(crate) fn parse_position(node: &str, text: &str) -> Result<Position> {
  let malformed = |token: &str| BnError::MalformedList {
    node: node.to_string(),
    field: "position",
    token: token.to_string(),
  };
  let coords = text
    .split_whitespace()
    .map(|tok| tok.parse::<i32>().map_err(|_| malformed(tok)))
    .collect::<Result<Vec<_>>>()?;
  let coords: [i32; 4] = coords.try_into().map_err(|_| malformed(text.trim()))?;
  Ok(Position(coords))
}
