//! Dotted-key property store
//!
//! Configuration sources are flattened into `a.b.c = value` string
//! properties. Sub-tree extraction returns every property below a prefix
//! with the prefix removed, optionally layered over existing properties.

use crate::constants::PROPERTY_KEY_SEPARATOR;
use crate::error_ext::ErrorContext;
use dbpool_domain::error::Result;
use figment::Figment;
use figment::providers::{Format, Toml};
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Ordered string-to-string property map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Create an empty property map
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value stored under `key`, or `default` when absent
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Store `value` under `key`, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no properties
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate properties in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every property below `prefix` into `target`, stripping the prefix
    ///
    /// Existing entries in `target` with the same stripped key are replaced.
    pub fn extract_into(&self, prefix: &str, target: &mut Properties) {
        let lead = format!("{prefix}{PROPERTY_KEY_SEPARATOR}");
        for (key, value) in self.entries.range(lead.clone()..) {
            let Some(suffix) = key.strip_prefix(&lead) else {
                break;
            };
            if !suffix.is_empty() {
                target.insert(suffix, value.as_str());
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Read-only configuration store keyed by dotted paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyStore {
    properties: Properties,
}

impl PropertyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from literal `key = value` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            properties: pairs.into_iter().collect(),
        }
    }

    /// Flatten every value a figment resolves into dotted properties
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let value: Value = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        let mut properties = Properties::new();
        flatten_into(&mut properties, None, &value);
        Ok(Self { properties })
    }

    /// Parse a TOML document into a store
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::from_figment(&Figment::from(Toml::string(source)))
    }

    /// Insert `pairs` verbatim, replacing entries with equal keys
    pub fn extend<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.properties.insert(key, value);
        }
    }

    /// Value stored under the full dotted `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    /// All properties held by the store
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Properties below `prefix`, with the prefix stripped
    pub fn sub_properties(&self, prefix: &str) -> Properties {
        let mut properties = Properties::new();
        self.sub_properties_into(prefix, &mut properties);
        properties
    }

    /// Layer the properties below `prefix` over `base`
    pub fn sub_properties_into(&self, prefix: &str, base: &mut Properties) {
        self.properties.extract_into(prefix, base);
    }
}

fn flatten_into(properties: &mut Properties, path: Option<&str>, value: &Value) {
    let join = |segment: &str| match path {
        Some(parent) => format!("{parent}{PROPERTY_KEY_SEPARATOR}{segment}"),
        None => segment.to_string(),
    };

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(properties, Some(&join(key)), child);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(properties, Some(&join(&index.to_string())), child);
            }
        }
        Value::Null => {}
        Value::String(s) => {
            if let Some(key) = path {
                properties.insert(key, s.as_str());
            }
        }
        Value::Bool(_) | Value::Number(_) => {
            if let Some(key) = path {
                properties.insert(key, value.to_string());
            }
        }
    }
}
