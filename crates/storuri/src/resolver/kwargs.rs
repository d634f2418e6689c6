//! Keyword interpretation shared by all backend resolvers.
//!
//! Each resolver owns a static [`KwargManifest`] declaring which
//! parameter names it claims and as which type. [`KwargManifest::interpret`]
//! splits a raw parameter mapping into typed backend arguments and the
//! untouched leftovers destined for the connection layer.

use std::collections::{BTreeMap, HashMap};

use crate::datatypes::{convert_bytesize, convert_float, convert_int, convert_tuple};
use crate::error::Result;

/// A raw backend or connection parameter value.
///
/// URI query strings surface text; the declarative-config path surfaces
/// native integers. Both travel through the same leftover mapping and the
/// downstream layers accept either representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
}

impl ParamValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(value) => Some(value),
            ParamValue::Int(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

/// Ordered string-keyed mapping of raw parameters.
pub type RawParams = BTreeMap<String, ParamValue>;

/// A typed keyword argument produced by interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum Kwarg {
    Int(i64),
    Str(String),
    Bytes(i64),
    Float(f64),
    Tuple(Vec<String>),
}

impl Kwarg {
    /// Integer view; byte sizes are integers in the fundamental unit.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Kwarg::Int(value) | Kwarg::Bytes(value) => Some(*value),
            _ => None,
        }
    }

    /// Boolean view of an integer argument (any non-zero value is true).
    pub fn as_bool(&self) -> Option<bool> {
        self.as_int().map(|value| value != 0)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Kwarg::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Kwarg::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn into_str(self) -> Option<String> {
        match self {
            Kwarg::Str(value) => Some(value),
            _ => None,
        }
    }
}

/// Declarative manifest of the parameter names a backend claims, by type.
///
/// The five sets are disjoint by construction, defined per resolver as a
/// `const`, and never mutated at runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct KwargManifest {
    pub int_args: &'static [&'static str],
    pub string_args: &'static [&'static str],
    pub bytesize_args: &'static [&'static str],
    pub float_args: &'static [&'static str],
    pub tuple_args: &'static [&'static str],
}

impl KwargManifest {
    /// Manifest claiming no parameters at all.
    pub const EMPTY: KwargManifest = KwargManifest {
        int_args: &[],
        string_args: &[],
        bytesize_args: &[],
        float_args: &[],
        tuple_args: &[],
    };

    /// Split `params` into manifest-claimed typed kwargs and untouched
    /// leftovers.
    ///
    /// A private copy of the input is consumed; the caller's mapping is
    /// not mutated. Keys absent from the input are simply absent from the
    /// converted output, and keys claimed by no set always appear in the
    /// leftovers.
    pub fn interpret(&self, params: &RawParams) -> Result<(HashMap<String, Kwarg>, RawParams)> {
        let mut unused = params.clone();
        let mut converted = HashMap::new();

        for &name in self.int_args {
            if let Some(value) = unused.remove(name) {
                converted.insert(name.to_string(), Kwarg::Int(coerce_int(&value)?));
            }
        }
        for &name in self.string_args {
            if let Some(value) = unused.remove(name) {
                converted.insert(name.to_string(), Kwarg::Str(coerce_text(value)));
            }
        }
        for &name in self.bytesize_args {
            if let Some(value) = unused.remove(name) {
                converted.insert(name.to_string(), Kwarg::Bytes(coerce_bytesize(&value)?));
            }
        }
        for &name in self.float_args {
            if let Some(value) = unused.remove(name) {
                converted.insert(name.to_string(), Kwarg::Float(coerce_float(&value)?));
            }
        }
        for &name in self.tuple_args {
            if let Some(value) = unused.remove(name) {
                converted.insert(name.to_string(), Kwarg::Tuple(coerce_tuple(value)));
            }
        }

        Ok((converted, unused))
    }
}

fn coerce_int(value: &ParamValue) -> Result<i64> {
    match value {
        ParamValue::Int(value) => Ok(*value),
        ParamValue::Text(text) => Ok(convert_int(text)?),
    }
}

fn coerce_bytesize(value: &ParamValue) -> Result<i64> {
    match value {
        ParamValue::Int(value) => Ok(*value),
        ParamValue::Text(text) => Ok(convert_bytesize(text)?),
    }
}

fn coerce_float(value: &ParamValue) -> Result<f64> {
    match value {
        ParamValue::Int(value) => Ok(*value as f64),
        ParamValue::Text(text) => Ok(convert_float(text)?),
    }
}

fn coerce_text(value: ParamValue) -> String {
    match value {
        ParamValue::Text(text) => text,
        ParamValue::Int(value) => value.to_string(),
    }
}

fn coerce_tuple(value: ParamValue) -> Vec<String> {
    match value {
        ParamValue::Text(text) => convert_tuple(&text),
        ParamValue::Int(value) => vec![value.to_string()],
    }
}
