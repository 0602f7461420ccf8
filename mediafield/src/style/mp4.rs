use super::StorageStyle;
use crate::coerce::FieldValue;
use crate::error::Result;
use crate::macros::err;
use crate::store::{RawValue, TagStore};
use crate::value::Value;

impl StorageStyle {
	// A missing atom reads as (0, 0)
	fn fetch_tuple(&self, store: &dyn TagStore) -> [i64; 2] {
		match store.get_first(&self.key) {
			Some(RawValue::Pair(number, total)) => [*number, *total],
			Some(RawValue::Integer(number)) => [*number, 0],
			_ => [0, 0],
		}
	}

	pub(super) fn get_tuple(&self, store: &dyn TagStore, index: usize) -> Option<Value> {
		let value = self.fetch_tuple(store).get(index).copied()?;

		// Zero is unset
		if value == 0 {
			return None;
		}

		Some(Value::Integer(value))
	}

	pub(super) fn set_tuple(
		&self,
		store: &mut dyn TagStore,
		index: usize,
		value: Option<Value>,
	) -> Result<()> {
		let mut items = self.fetch_tuple(store);
		let value = value.map_or(0, i64::from_value);

		match items.get_mut(index) {
			Some(item) => *item = value,
			None => err!(UnsupportedOperation(
				"MP4 integer pairs only have two slots"
			)),
		}

		store.insert_one(&self.key, RawValue::Pair(items[0], items[1]))
	}
}
