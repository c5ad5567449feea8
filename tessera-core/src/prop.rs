//! Property values attached to nodes and edges.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Property map of a single entity, ordered by key.
pub type Properties = BTreeMap<String, Prop>;

/// A single property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prop {
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
}

impl Prop {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::I64(n) => write!(f, "{n}"),
            Self::F64(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Prop {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Prop {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Prop {
    fn from(n: i64) -> Self {
        Self::I64(n)
    }
}

impl From<f64> for Prop {
    fn from(n: f64) -> Self {
        Self::F64(n)
    }
}

impl From<bool> for Prop {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
