//! Encodable value types.

use std::collections::HashMap;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::time::SystemTime;

/// A value that can be encoded onto the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
    /// An instant; encoded at millisecond resolution.
    Timestamp(SystemTime),
    Binary(Vec<u8>),
    Text(String),
    List(Vec<Value>),
    Map(ValueMap),
    /// Class instance. Recognized but not encodable.
    Object(ObjectValue),
}

impl Value {
    /// Picks the narrowest integer variant: `Int32` when the value fits in
    /// 32 bits, `Int64` otherwise.
    pub fn integer(i: i64) -> Self {
        match i32::try_from(i) {
            Ok(n) => Self::Int32(n),
            Err(_) => Self::Int64(i),
        }
    }

    /// Short name of the variant, used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::Double(_) => "double",
            Self::Timestamp(_) => "timestamp",
            Self::Binary(_) => "binary",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Object(_) => "object",
        }
    }

    /// Returns the value as a string reference, if it is a `Text` variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value widened to i64, if it is an integer variant.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int32(i) => Some(i64::from(*i)),
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }
}

/// Key/value mapping that preserves insertion order.
///
/// Keys are arbitrary values, so floating-point and composite keys are
/// allowed. Keys are matched structurally with doubles compared bit-wise:
/// a NaN key finds itself, while `0.0` and `-0.0` are distinct keys.
/// Inserting a key equal to an existing one replaces the value in place and
/// keeps the original position.
#[derive(Clone, Default)]
pub struct ValueMap {
    entries: Vec<(Value, Value)>,
    // key hash -> positions in `entries`
    index: HashMap<u64, Vec<usize>>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a pair, returning the previous value for an equal key.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        let slots = self.index.entry(key_hash(&key)).or_default();
        match slots.iter().copied().find(|&i| key_eq(&self.entries[i].0, &key)) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                slots.push(self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.index
            .get(&key_hash(key))?
            .iter()
            .map(|&i| &self.entries[i])
            .find(|(k, _)| key_eq(k, key))
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl fmt::Debug for ValueMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Order-insensitive: two maps are equal when they hold the same pairs.
impl PartialEq for ValueMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

// -- Key identity --

fn key_hash(key: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    hash_key(key, &mut hasher);
    hasher.finish()
}

/// Hashes a value consistently with `key_eq`.
fn hash_key(key: &Value, state: &mut impl Hasher) {
    std::mem::discriminant(key).hash(state);
    match key {
        Value::Null => {}
        Value::Boolean(b) => b.hash(state),
        Value::Int32(i) => i.hash(state),
        Value::Int64(i) => i.hash(state),
        Value::Double(f) => f.to_bits().hash(state),
        Value::Timestamp(t) => t.hash(state),
        Value::Binary(b) => b.hash(state),
        Value::Text(s) => s.hash(state),
        Value::List(items) => {
            items.len().hash(state);
            for item in items {
                hash_key(item, state);
            }
        }
        Value::Map(map) => map_hash(map).hash(state),
        Value::Object(o) => {
            o.class.hash(state);
            map_hash(&o.fields).hash(state);
        }
    }
}

// Sum of per-pair hashes, so the result ignores insertion order.
fn map_hash(map: &ValueMap) -> u64 {
    map.iter().fold(map.len() as u64, |acc, (k, v)| {
        let mut hasher = DefaultHasher::new();
        hash_key(k, &mut hasher);
        hash_key(v, &mut hasher);
        acc.wrapping_add(hasher.finish())
    })
}

/// Structural key equality with doubles compared bit-wise.
fn key_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Double(x), Value::Double(y)) => x.to_bits() == y.to_bits(),
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| key_eq(a, b))
        }
        (Value::Map(x), Value::Map(y)) => map_key_eq(x, y),
        (Value::Object(x), Value::Object(y)) => {
            x.class == y.class && map_key_eq(&x.fields, &y.fields)
        }
        _ => a == b,
    }
}

fn map_key_eq(x: &ValueMap, y: &ValueMap) -> bool {
    x.len() == y.len() && x.iter().all(|(k, v)| y.get(k).is_some_and(|w| key_eq(v, w)))
}

/// A class instance: a named type with named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectValue {
    pub class: String,
    pub fields: ValueMap,
}

// -- Convenience conversions --

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int32(i)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int64(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Double(f)
    }
}

impl From<SystemTime> for Value {
    fn from(t: SystemTime) -> Self {
        Self::Timestamp(t)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Binary(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Self::Binary(b.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

impl From<ValueMap> for Value {
    fn from(m: ValueMap) -> Self {
        Self::Map(m)
    }
}

impl From<ObjectValue> for Value {
    fn from(o: ObjectValue) -> Self {
        Self::Object(o)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(o: Option<T>) -> Self {
        o.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Int32(i) => write!(f, "{i}"),
            Self::Int64(i) => write!(f, "{i}L"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Timestamp(t) => write!(f, "timestamp({t:?})"),
            Self::Binary(b) => write!(f, "<{} bytes>", b.len()),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Self::Object(o) => write!(f, "{}<{} fields>", o.class, o.fields.len()),
        }
    }
}
