//! The shared parameter record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::AgeBins;
use crate::error::{TransformError, TransformResult};

/// One named parameter value.
///
/// Deserializes untagged from JSON: a number, a flat list of numbers, or a
/// list of `[start, end]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(f64),
    Vector(Vec<f64>),
    Bins(Vec<[f64; 2]>),
}

impl ParamValue {
    /// Scalar view; a length-1 vector counts as a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            ParamValue::Scalar(v) => Some(*v),
            ParamValue::Vector(v) if v.len() == 1 => Some(v[0]),
            _ => None,
        }
    }

    /// Vector view; a scalar becomes a one-element vector.
    pub fn to_vector(&self) -> Option<Vec<f64>> {
        match self {
            ParamValue::Scalar(v) => Some(vec![*v]),
            ParamValue::Vector(v) => Some(v.clone()),
            ParamValue::Bins(_) => None,
        }
    }

    /// Age-bin view; an empty list is an empty set of bins.
    pub fn to_age_bins(&self) -> Option<AgeBins> {
        match self {
            ParamValue::Bins(edges) => Some(AgeBins::new(edges.clone())),
            ParamValue::Vector(v) if v.is_empty() => Some(AgeBins::new(Vec::new())),
            _ => None,
        }
    }

    fn shape(&self) -> &'static str {
        match self {
            ParamValue::Scalar(_) => "a scalar",
            ParamValue::Vector(_) => "a vector",
            ParamValue::Bins(_) => "a list of bin edges",
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<Vec<f64>> for ParamValue {
    fn from(value: Vec<f64>) -> Self {
        ParamValue::Vector(value)
    }
}

impl From<&[f64]> for ParamValue {
    fn from(value: &[f64]) -> Self {
        ParamValue::Vector(value.to_vec())
    }
}

impl From<Vec<[f64; 2]>> for ParamValue {
    fn from(value: Vec<[f64; 2]>) -> Self {
        ParamValue::Bins(value)
    }
}

impl From<AgeBins> for ParamValue {
    fn from(value: AgeBins) -> Self {
        ParamValue::Bins(value.into_inner())
    }
}

/// Named parameters shared by every transform of a model.
///
/// Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSet(BTreeMap<String, ParamValue>);

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Required scalar.
    pub fn scalar(&self, name: &str) -> TransformResult<f64> {
        let value = self.require(name)?;
        value.as_scalar().ok_or_else(|| invalid(name, "a scalar", value))
    }

    /// Optional scalar with a default for absent fields.
    pub fn scalar_or(&self, name: &str, default: f64) -> TransformResult<f64> {
        match self.get(name) {
            Some(value) => value.as_scalar().ok_or_else(|| invalid(name, "a scalar", value)),
            None => Ok(default),
        }
    }

    /// Required vector.
    pub fn vector(&self, name: &str) -> TransformResult<Vec<f64>> {
        let value = self.require(name)?;
        value.to_vector().ok_or_else(|| invalid(name, "a vector", value))
    }

    /// Required age bins.
    pub fn age_bins(&self, name: &str) -> TransformResult<AgeBins> {
        let value = self.require(name)?;
        value
            .to_age_bins()
            .ok_or_else(|| invalid(name, "a list of [start, end] pairs", value))
    }

    fn require(&self, name: &str) -> TransformResult<&ParamValue> {
        self.get(name).ok_or_else(|| TransformError::MissingParam {
            name: name.to_string(),
        })
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn invalid(name: &str, expected: &str, got: &ParamValue) -> TransformError {
    TransformError::InvalidParam {
        name: name.to_string(),
        reason: format!("expected {expected}, got {}", got.shape()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_values_pick_their_shape() {
        let params: ParamSet = serde_json::from_str(
            r#"{"total_mass": 1e10, "z_fraction": [0.5, 0.5], "agebins": [[6, 7], [7, 8], [8, 9]], "logzsol": [-0.5]}"#,
        )
        .unwrap();

        assert_eq!(params.get("total_mass"), Some(&ParamValue::Scalar(1e10)));
        assert_eq!(params.vector("z_fraction").unwrap(), vec![0.5, 0.5]);
        assert_eq!(params.age_bins("agebins").unwrap().len(), 3);
        assert_eq!(params.scalar("logzsol").unwrap(), -0.5);
    }

    #[test]
    fn scalar_promotes_to_vector() {
        let params = ParamSet::new().with("z_fraction", 0.3);
        assert_eq!(params.vector("z_fraction").unwrap(), vec![0.3]);
    }

    #[test]
    fn missing_and_misshapen_fields() {
        let params = ParamSet::new().with("z_fraction", vec![0.1, 0.2]);
        assert_eq!(
            params.scalar("total_mass"),
            Err(TransformError::MissingParam {
                name: "total_mass".to_string()
            })
        );
        assert!(matches!(
            params.scalar("z_fraction"),
            Err(TransformError::InvalidParam { .. })
        ));
        assert!(matches!(
            params.age_bins("z_fraction"),
            Err(TransformError::InvalidParam { .. })
        ));
        assert_eq!(params.scalar_or("tage_tuniv", 1.0).unwrap(), 1.0);
    }

    #[test]
    fn round_trips_as_plain_object() {
        let params = ParamSet::new()
            .with("zred", 1.0)
            .with("agebins", vec![[0.0, 8.0], [8.0, 9.0]]);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"agebins":[[0.0,8.0],[8.0,9.0]],"zred":1.0}"#);
        let back: ParamSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
