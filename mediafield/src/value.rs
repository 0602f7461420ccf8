//! The semantic values exchanged between fields and storage styles

use crate::picture::Image;

/// A deserialized value, before it is coerced to a field's type
///
/// Storage styles produce these from [`RawValue`](crate::store::RawValue)s, and accept them when
/// writing.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	/// Text
	Text(String),
	/// An integer
	Integer(i64),
	/// A floating point number
	Float(f64),
	/// A boolean
	Bool(bool),
	/// Opaque bytes
	Binary(Vec<u8>),
	/// An image
	Image(Image),
}

impl Value {
	/// Whether the value counts as present
	///
	/// Empty text, empty bytes, zero and `false` do not.
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::value::Value;
	///
	/// assert!(Value::from("foo").is_truthy());
	/// assert!(!Value::from("").is_truthy());
	/// assert!(!Value::Integer(0).is_truthy());
	/// ```
	pub fn is_truthy(&self) -> bool {
		match self {
			Value::Text(text) => !text.is_empty(),
			Value::Integer(i) => *i != 0,
			Value::Float(f) => *f != 0.0,
			Value::Bool(b) => *b,
			Value::Binary(data) => !data.is_empty(),
			Value::Image(_) => true,
		}
	}
}

impl From<&str> for Value {
	fn from(input: &str) -> Self {
		Value::Text(input.to_owned())
	}
}

impl From<String> for Value {
	fn from(input: String) -> Self {
		Value::Text(input)
	}
}

impl From<i64> for Value {
	fn from(input: i64) -> Self {
		Value::Integer(input)
	}
}

impl From<f64> for Value {
	fn from(input: f64) -> Self {
		Value::Float(input)
	}
}

impl From<bool> for Value {
	fn from(input: bool) -> Self {
		Value::Bool(input)
	}
}

impl From<Vec<u8>> for Value {
	fn from(input: Vec<u8>) -> Self {
		Value::Binary(input)
	}
}

impl From<Image> for Value {
	fn from(input: Image) -> Self {
		Value::Image(input)
	}
}
