use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::FaultFuseResult;

/// A single raw reading. Units and meaning are owned by the expert that reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SensorValue {
    Number(f64),
    Series(Vec<f64>),
    Flag(bool),
    Text(String),
}

impl From<f64> for SensorValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Vec<f64>> for SensorValue {
    fn from(v: Vec<f64>) -> Self {
        Self::Series(v)
    }
}

impl From<bool> for SensorValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<&str> for SensorValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// One input snapshot for a single `diagnose` call.
///
/// Readings are kept in a `BTreeMap` so the serialized form, and therefore
/// the fingerprint, does not depend on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    pub readings: BTreeMap<String, SensorValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

impl SensorSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a reading map with no device context.
    pub fn from_readings(readings: BTreeMap<String, SensorValue>) -> Self {
        Self {
            readings,
            ..Self::default()
        }
    }

    /// Builder-style insert.
    pub fn with_reading(mut self, key: impl Into<String>, value: impl Into<SensorValue>) -> Self {
        self.readings.insert(key.into(), value.into());
        self
    }

    pub fn with_device(mut self, device_code: impl Into<String>) -> Self {
        self.device_code = Some(device_code.into());
        self
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SensorValue>) {
        self.readings.insert(key.into(), value.into());
    }

    /// A finite numeric reading. Non-numeric or non-finite values read as absent.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.readings.get(key) {
            Some(SensorValue::Number(v)) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// A non-empty series reading.
    pub fn series(&self, key: &str) -> Option<&[f64]> {
        match self.readings.get(key) {
            Some(SensorValue::Series(v)) if !v.is_empty() => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.readings.get(key) {
            Some(SensorValue::Flag(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.readings.get(key) {
            Some(SensorValue::Text(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// BLAKE3 hash of the canonical JSON encoding of the snapshot.
    pub fn compute_fingerprint(&self) -> FaultFuseResult<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }
}
