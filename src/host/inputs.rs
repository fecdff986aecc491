//! Task input sources
//!
//! Inputs arrive from the command line (or `INPUT_*` variables, through clap)
//! and optionally from a YAML inputs file. [`LayeredInputs`] lets earlier
//! layers override later ones.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::InputSource;
use crate::error::{Result, config};

/// Inputs held in memory, keyed by input name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapInputs {
    values: BTreeMap<String, String>,
}

impl MapInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input, builder style
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Add an input only when a value is present
    pub fn insert_opt(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.insert(name, value);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Load an inputs file: a YAML mapping of input names to scalars or string lists
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| config::read_failed(&display, e))?;
        Self::from_yaml_str(&content).map_err(|e| config::parse_failed(&display, e))
    }

    /// Parse YAML inputs. Lists are joined with newlines, the delimiter of multi-line inputs.
    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        let raw: BTreeMap<String, Option<YamlValue>> = serde_yaml::from_str(content)?;
        let values = raw
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v.into_input())))
            .collect();
        Ok(Self { values })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YamlValue {
    Flag(bool),
    Number(serde_yaml::Number),
    Text(String),
    List(Vec<String>),
}

impl YamlValue {
    fn into_input(self) -> String {
        match self {
            Self::Flag(flag) => flag.to_string(),
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text,
            Self::List(items) => items.join("\n"),
        }
    }
}

impl InputSource for MapInputs {
    fn raw_input(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Several sources consulted in order; the first one with a non-blank value wins
#[derive(Default)]
pub struct LayeredInputs {
    layers: Vec<Box<dyn InputSource>>,
}

impl LayeredInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer with lower precedence than the existing ones
    #[must_use]
    pub fn layer(mut self, source: impl InputSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }
}

impl InputSource for LayeredInputs {
    fn raw_input(&self, name: &str) -> Option<String> {
        self.layers
            .iter()
            .find_map(|layer| layer.raw_input(name).filter(|v| !v.trim().is_empty()))
    }
}
