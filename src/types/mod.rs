//! Encodable value types.

mod value;

pub use value::{ObjectValue, Value, ValueMap};
