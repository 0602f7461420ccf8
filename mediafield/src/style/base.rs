use super::{StorageStyle, StoredAs};
use crate::coerce::FieldValue;
use crate::error::Result;
use crate::macros::err;
use crate::store::{FileFormat, RawValue, TagStore};
use crate::util::text::utf8_decode_ignore;
use crate::value::Value;

impl StorageStyle {
	/// Convert a value to the representation this style stores
	///
	/// Text is formatted the same way for every format: floats to a fixed number of places,
	/// bools as `1`/`0`, and bytes decoded as UTF-8, followed by the suffix. MP4 freeform atoms
	/// hold the resulting text as UTF-8 bytes.
	pub fn serialize(&self, value: Value) -> Result<RawValue> {
		if let Value::Image(_) = value {
			err!(UnsupportedOperation(
				"images can only be written through image storage styles"
			));
		}

		let raw = match self.as_type {
			StoredAs::Text => {
				let mut text = match value {
					Value::Text(text) => text,
					Value::Float(f) => format!("{:.*}", self.float_places, f),
					Value::Bool(b) => String::from(if b { "1" } else { "0" }),
					Value::Integer(i) => i.to_string(),
					Value::Binary(data) => utf8_decode_ignore(&data),
					Value::Image(_) => String::new(),
				};

				if let Some(suffix) = &self.suffix {
					text.push_str(suffix);
				}

				RawValue::Text(text)
			},
			StoredAs::Integer => RawValue::Integer(i64::from_value(value)),
			StoredAs::Boolean => RawValue::Bool(bool::from_value(value)),
			StoredAs::Binary => match value {
				Value::Binary(data) => RawValue::Binary(data),
				other => RawValue::Binary(String::from_value(other).into_bytes()),
			},
		};

		if self.applies_to(FileFormat::Mp4) && self.key.starts_with("----:") {
			if let RawValue::Text(text) = raw {
				return Ok(RawValue::Binary(text.into_bytes()));
			}
		}

		Ok(raw)
	}

	/// Convert a stored value back into a [`Value`]
	///
	/// The suffix is stripped from text. Values that hold nothing a field could use, such as
	/// frames without text, produce `None`.
	pub fn deserialize(&self, raw: &RawValue) -> Option<Value> {
		match raw {
			RawValue::Text(text) => Some(self.deserialize_text(text)),
			RawValue::Binary(data) => Some(Value::Binary(data.clone())),
			RawValue::Integer(i) => Some(Value::Integer(*i)),
			RawValue::Bool(b) => Some(Value::Bool(*b)),
			RawValue::Pair(number, _) => Some(Value::Integer(*number)),
			RawValue::Cover(cover) => Some(Value::Image(cover.to_image())),
			RawValue::Frame(frame) => frame
				.text()
				.and_then(<[String]>::first)
				.map(|text| self.deserialize_text(text)),
		}
	}

	pub(super) fn deserialize_text(&self, text: &str) -> Value {
		let text = match &self.suffix {
			Some(suffix) => text.strip_suffix(&**suffix).unwrap_or(text),
			None => text,
		};

		Value::Text(text.to_owned())
	}

	// Serialize for a frame, which only holds text
	pub(super) fn serialize_text(&self, value: Value) -> Result<String> {
		match self.serialize(value)? {
			RawValue::Text(text) => Ok(text),
			RawValue::Binary(data) => Ok(utf8_decode_ignore(&data)),
			RawValue::Integer(i) => Ok(i.to_string()),
			RawValue::Bool(b) => Ok(String::from(if b { "1" } else { "0" })),
			_ => err!(UnsupportedOperation(
				"value cannot be stored in an ID3v2 text frame"
			)),
		}
	}

	pub(super) fn get_plain_list(&self, store: &dyn TagStore) -> Option<Vec<Value>> {
		let values = store.get(&self.key)?;
		Some(
			values
				.iter()
				.filter_map(|raw| self.deserialize(raw))
				.collect(),
		)
	}
}

// The text of a value written without going through `serialize`, as used by packed frames
pub(super) fn plain_text(value: Value) -> Result<String> {
	if let Value::Image(_) = value {
		err!(UnsupportedOperation(
			"images can only be written through image storage styles"
		));
	}

	Ok(String::from_value(value))
}
