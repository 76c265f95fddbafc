//! Request parameter marshalling.
//!
//! # Design
//! Every operation collects its arguments into a `Params` map of
//! `name -> Option<ParamValue>`. `None` marks a parameter the caller left
//! unset; such entries are dropped when the map is rendered, so an absent
//! filter never reaches the wire as `name=` or `"name": null`. NaN and
//! infinite floats have no JSON form and are dropped the same way.
//!
//! Keys are kept in a `BTreeMap` so the rendered query string and JSON body
//! are deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// A single scalar parameter value.
///
/// Serializes untagged, so a body built from `Params` keeps JSON types
/// (`"status": 1`, `"enabled": true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ParamValue {
    /// Rendering used in query strings. Booleans become `1`/`0`, which the
    /// Cachet API accepts for every boolean filter.
    pub fn to_query_value(&self) -> String {
        match self {
            ParamValue::Bool(true) => "1".to_string(),
            ParamValue::Bool(false) => "0".to_string(),
            ParamValue::Int(n) => n.to_string(),
            ParamValue::Float(x) => x.to_string(),
            ParamValue::Str(s) => s.clone(),
        }
    }

    /// False for NaN and infinite floats.
    pub fn is_sendable(&self) -> bool {
        match self {
            ParamValue::Float(x) => x.is_finite(),
            _ => true,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

macro_rules! int_param {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_param!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Float(f64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

/// Sort direction for search operations. Cachet defaults to ascending; this
/// client sends `desc` whenever the caller does not choose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl From<SortOrder> for ParamValue {
    fn from(value: SortOrder) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

/// Named request parameters, possibly absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: BTreeMap<String, Option<ParamValue>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter that is always sent.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.entries.insert(key.into(), Some(value.into()));
        self
    }

    /// Record a parameter that is sent only when `value` is `Some`.
    pub fn set_opt<V: Into<ParamValue>>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        self.entries.insert(key.into(), value.map(Into::into));
        self
    }

    /// Owned-builder form of [`Params::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Owned-builder form of [`Params::set_opt`].
    pub fn with_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.set_opt(key, value);
        self
    }

    /// Merge caller-supplied fields. Later values win, so extras override
    /// known fields of the same name.
    pub fn extend<I>(&mut self, extra: I) -> &mut Self
    where
        I: IntoIterator<Item = (String, ParamValue)>,
    {
        for (key, value) in extra {
            self.entries.insert(key, Some(value));
        }
        self
    }

    /// Merge another set of parameters. Present values in `other` win;
    /// absent ones never clear a value already set here.
    pub fn merge(&mut self, other: Params) -> &mut Self {
        for (key, value) in other.entries {
            match value {
                Some(value) => {
                    self.entries.insert(key, Some(value));
                }
                None => {
                    self.entries.entry(key).or_insert(None);
                }
            }
        }
        self
    }

    /// The value that will be sent for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .get(key)
            .and_then(Option::as_ref)
            .filter(|value| value.is_sendable())
    }

    /// Parameters that will actually be sent, in key order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key.as_str(), v)))
            .filter(|(_, value)| value.is_sendable())
    }

    /// True when nothing would be sent.
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }

    /// `application/x-www-form-urlencoded` query string, or `None` when no
    /// parameter is present.
    pub fn to_query(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.present() {
            serializer.append_pair(key, &value.to_query_value());
        }
        Some(serializer.finish())
    }

    /// JSON object of the present parameters.
    pub fn to_json(&self) -> serde_json::Value {
        let object = self
            .present()
            .filter_map(|(key, value)| Some((key.to_string(), json_value(value)?)))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(object)
    }
}

fn json_value(value: &ParamValue) -> Option<serde_json::Value> {
    let value = match value {
        ParamValue::Bool(b) => serde_json::Value::Bool(*b),
        ParamValue::Int(n) => serde_json::Value::from(*n),
        ParamValue::Float(x) => serde_json::Value::Number(serde_json::Number::from_f64(*x)?),
        ParamValue::Str(s) => serde_json::Value::String(s.clone()),
    };
    Some(value)
}
