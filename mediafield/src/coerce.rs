//! Best-effort conversion of deserialized values to a field's type
//!
//! Coercion never fails. A value that cannot be understood becomes the target type's zero.

use crate::picture::Image;
use crate::util::text::utf8_decode_ignore;
use crate::value::Value;

/// A type a field can produce
pub trait FieldValue: Sized {
	/// Coerce a deserialized value, falling back to the type's zero
	fn from_value(value: Value) -> Self;

	/// Convert back into a value for the storage styles
	fn into_value(self) -> Value;

	/// What setting the field to `None` writes, if anything
	///
	/// Types without a zero return `None`, which clears the field instead.
	fn none_value() -> Option<Self>;

	/// Whether the value counts as present
	fn is_truthy(&self) -> bool;
}

/// Coerce `value` to `T`
///
/// An absent value stays absent.
///
/// # Examples
///
/// ```rust
/// use mediafield::coerce::safe_cast;
/// use mediafield::value::Value;
///
/// assert_eq!(safe_cast::<i64>(Some(Value::from(" 20 "))), Some(20));
/// assert_eq!(safe_cast::<i64>(Some(Value::from("something"))), Some(0));
/// assert_eq!(safe_cast::<i64>(None), None);
/// ```
pub fn safe_cast<T: FieldValue>(value: Option<Value>) -> Option<T> {
	value.map(T::from_value)
}

/// Coerce every element of `values` to `T`, dropping those that coerce to a falsy value
pub fn safe_cast_list<T: FieldValue>(values: Option<Vec<Value>>) -> Option<Vec<T>> {
	values.map(|values| {
		values
			.into_iter()
			.map(T::from_value)
			.filter(FieldValue::is_truthy)
			.collect()
	})
}

impl FieldValue for String {
	fn from_value(value: Value) -> Self {
		match value {
			Value::Text(text) => text,
			Value::Binary(data) => utf8_decode_ignore(&data),
			Value::Integer(i) => i.to_string(),
			Value::Float(f) => f.to_string(),
			Value::Bool(b) => b.to_string(),
			Value::Image(_) => String::new(),
		}
	}

	fn into_value(self) -> Value {
		Value::Text(self)
	}

	fn none_value() -> Option<Self> {
		Some(String::new())
	}

	fn is_truthy(&self) -> bool {
		!self.is_empty()
	}
}

impl FieldValue for i64 {
	fn from_value(value: Value) -> Self {
		match value {
			Value::Integer(i) => i,
			Value::Float(f) => f as i64,
			Value::Bool(b) => i64::from(b),
			Value::Text(text) => scan_int(&text),
			Value::Binary(data) => scan_int(&utf8_decode_ignore(&data)),
			Value::Image(_) => 0,
		}
	}

	fn into_value(self) -> Value {
		Value::Integer(self)
	}

	fn none_value() -> Option<Self> {
		Some(0)
	}

	fn is_truthy(&self) -> bool {
		*self != 0
	}
}

impl FieldValue for f64 {
	fn from_value(value: Value) -> Self {
		match value {
			Value::Float(f) => f,
			Value::Integer(i) => i as f64,
			Value::Bool(b) => f64::from(u8::from(b)),
			Value::Text(text) => scan_float(&text),
			Value::Binary(data) => scan_float(&utf8_decode_ignore(&data)),
			Value::Image(_) => 0.0,
		}
	}

	fn into_value(self) -> Value {
		Value::Float(self)
	}

	fn none_value() -> Option<Self> {
		Some(0.0)
	}

	fn is_truthy(&self) -> bool {
		*self != 0.0
	}
}

impl FieldValue for bool {
	fn from_value(value: Value) -> Self {
		match value {
			Value::Bool(b) => b,
			Value::Integer(i) => i != 0,
			Value::Float(f) => f.abs() >= 1.0,
			Value::Text(text) => parse_int_truthy(&text),
			Value::Binary(data) => parse_int_truthy(&utf8_decode_ignore(&data)),
			Value::Image(_) => false,
		}
	}

	fn into_value(self) -> Value {
		Value::Bool(self)
	}

	fn none_value() -> Option<Self> {
		Some(false)
	}

	fn is_truthy(&self) -> bool {
		*self
	}
}

impl FieldValue for Image {
	fn from_value(value: Value) -> Self {
		match value {
			Value::Image(image) => image,
			Value::Binary(data) => Image::new(data),
			_ => Image::default(),
		}
	}

	fn into_value(self) -> Value {
		Value::Image(self)
	}

	fn none_value() -> Option<Self> {
		None
	}

	fn is_truthy(&self) -> bool {
		true
	}
}

// Length of the `[+-]?` prefix
fn sign_len(text: &str) -> usize {
	usize::from(text.starts_with(['+', '-']))
}

fn digits_len(text: &str) -> usize {
	text.bytes().take_while(u8::is_ascii_digit).count()
}

// Parses the leading `[+-]?[0-9]+` of the trimmed text, 0 without a match
fn scan_int(text: &str) -> i64 {
	let text = text.trim();

	let sign = sign_len(text);
	let digits = digits_len(&text[sign..]);
	if digits == 0 {
		return 0;
	}

	let matched = &text[..sign + digits];
	let saturated = if matched.starts_with('-') {
		i64::MIN
	} else {
		i64::MAX
	};

	matched.parse::<i64>().unwrap_or(saturated)
}

// Parses the leading `[+-]?([0-9]+\.?[0-9]*|[0-9]*\.[0-9]+)` of the trimmed text, 0.0 without a
// match
//
// Only the first decimal point counts, so "1.0.0" is 1.0.
fn scan_float(text: &str) -> f64 {
	let text = text.trim();

	let sign = sign_len(text);
	let rest = &text[sign..];

	let int_digits = digits_len(rest);
	let mut end = int_digits;

	if rest[end..].starts_with('.') {
		let frac_digits = digits_len(&rest[end + 1..]);
		if int_digits > 0 || frac_digits > 0 {
			end += 1 + frac_digits;
		}
	}

	if end == 0 {
		return 0.0;
	}

	text[..sign + end].parse::<f64>().unwrap_or(0.0)
}

// Integer parse of the whole trimmed text, non-zero is true
fn parse_int_truthy(text: &str) -> bool {
	let text = text.trim();
	let digits = &text[sign_len(text)..];

	!digits.is_empty()
		&& digits.bytes().all(|b| b.is_ascii_digit())
		&& digits.bytes().any(|b| b != b'0')
}
