//! Potential: a dense probability or utility table whose axes are named by node ids.
//!
//! Axis 0 is the node itself, axes 1..k are its parents in declaration order.
//! Values are laid out row-major over that axis order, so the last parent varies
//! fastest.

use indexmap::IndexMap;
use ndarray::{ArrayD, ArrayViewD, IxDyn};
use serde::{Deserialize, Serialize};

use crate::error::{BnError, Result};

/// Labeled multi-dimensional table of probabilities or utilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PotentialRepr", into = "PotentialRepr")]
pub struct Potential {
  p: ArrayD<f64>,
  shape: IndexMap<String, usize>,
}

/// Number of cells spanned by `axis_lengths`, or `usize::MAX` if that overflows.
///
/// No value list can reach `usize::MAX` entries, so an overflowing shape always
/// reports a count mismatch.
pub(crate) fn table_size(axis_lengths: &[usize]) -> usize {
  axis_lengths
    .iter()
    .try_fold(1usize, |acc, len| acc.checked_mul(*len))
    .unwrap_or(usize::MAX)
}

impl Potential {
  /// Reshapes `values` (row-major) into a tensor with one axis per name.
  pub fn build(values: Vec<f64>, axis_lengths: &[usize], axis_names: &[String]) -> Result<Self> {
    if axis_lengths.len() != axis_names.len() {
      return Err(BnError::AxisCountMismatch {
        names: axis_names.len(),
        lengths: axis_lengths.len(),
      });
    }
    let mut shape = IndexMap::with_capacity(axis_names.len());
    for (name, len) in axis_names.iter().zip(axis_lengths) {
      if shape.insert(name.clone(), *len).is_some() {
        return Err(BnError::DuplicateAxis { name: name.clone() });
      }
    }
    let expected = table_size(axis_lengths);
    let actual = values.len();
    let mismatch = || BnError::ShapeMismatch {
      node: axis_names.first().cloned().unwrap_or_default(),
      expected,
      actual,
      axes: axis_names.to_vec(),
    };
    if expected != actual {
      return Err(mismatch());
    }
    let p = ArrayD::from_shape_vec(IxDyn(axis_lengths), values).map_err(|_| mismatch())?;
    Ok(Self { p, shape })
  }

  /// Length of the axis named `name`, if the potential has one.
  pub fn axis_length(&self, name: &str) -> Option<usize> {
    self.shape.get(name).copied()
  }

  pub fn axis_order(&self) -> Vec<&str> {
    self.shape.keys().map(String::as_str).collect()
  }

  pub fn shape(&self) -> &IndexMap<String, usize> {
    &self.shape
  }

  pub fn ndim(&self) -> usize {
    self.p.ndim()
  }

  /// Number of table entries.
  pub fn len(&self) -> usize {
    self.p.len()
  }

  pub fn is_empty(&self) -> bool {
    self.p.is_empty()
  }

  pub fn values(&self) -> ArrayViewD<'_, f64> {
    self.p.view()
  }

  /// Entry at `index`, one coordinate per axis in axis order.
  pub fn get(&self, index: &[usize]) -> Option<f64> {
    if index.len() != self.p.ndim() {
      return None;
    }
    self.p.get(index).copied()
  }

  /// Flattens back to row-major order over the declared axis order.
  pub fn to_flat_vec(&self) -> Vec<f64> {
    self.p.iter().copied().collect()
  }

  /// True when every axis name shared with `other` has the same length.
  pub fn is_compatible(&self, other: &Potential) -> bool {
    self
      .shape
      .iter()
      .all(|(name, len)| other.axis_length(name).is_none_or(|l| l == *len))
  }
}

/// Wire form of a potential: ordered `(axis, length)` pairs plus flat values.
#[derive(Serialize, Deserialize)]
struct PotentialRepr {
  axes: Vec<(String, usize)>,
  values: Vec<f64>,
}

impl TryFrom<PotentialRepr> for Potential {
  type Error = BnError;

  fn try_from(repr: PotentialRepr) -> Result<Self> {
    let (names, lengths): (Vec<String>, Vec<usize>) = repr.axes.into_iter().unzip();
    Potential::build(repr.values, &lengths, &names)
  }
}

impl From<Potential> for PotentialRepr {
  fn from(potential: Potential) -> Self {
    Self {
      values: potential.to_flat_vec(),
      axes: potential.shape.into_iter().collect(),
    }
  }
}
