use super::Field;
use crate::coerce::{FieldValue, safe_cast};
use crate::error::Result;
use crate::store::TagStore;
use crate::style::StorageStyle;

use std::marker::PhantomData;

/// A field holding a single value
///
/// Reading returns the first value that is present (non-empty, non-zero), coerced to `T`. When
/// no style holds such a value, the last style's value is coerced instead, so a field that was
/// set to `None` reads back as the zero of `T`.
///
/// Setting `None` writes the zero of `T` (`""`, `0`, `0.0`, `false`). Types without a zero are
/// deleted instead.
pub struct MediaField<T> {
	styles: Vec<StorageStyle>,
	_marker: PhantomData<fn() -> T>,
}

impl<T> Clone for MediaField<T> {
	fn clone(&self) -> Self {
		Self::new(self.styles.clone())
	}
}

impl<T> std::fmt::Debug for MediaField<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MediaField")
			.field("styles", &self.styles)
			.finish()
	}
}

impl<T> MediaField<T> {
	/// Create a field over `styles`
	pub fn new(styles: Vec<StorageStyle>) -> Self {
		Self {
			styles,
			_marker: PhantomData,
		}
	}
}

impl<T: FieldValue> Field for MediaField<T> {
	type Value = T;

	fn styles(&self) -> &[StorageStyle] {
		&self.styles
	}

	fn get(&self, store: &dyn TagStore) -> Result<Option<T>> {
		let mut out = None;
		for style in self.styles_for(store.format()) {
			out = style.get(store)?;
			if out.as_ref().is_some_and(crate::value::Value::is_truthy) {
				break;
			}
		}

		Ok(safe_cast(out))
	}

	fn set(&self, store: &mut dyn TagStore, value: Option<T>) -> Result<()> {
		let Some(value) = value.or_else(T::none_value) else {
			return self.delete(store);
		};

		let value = value.into_value();
		for style in self.styles_for(store.format()) {
			if style.is_read_only() {
				log::trace!("Skipping read-only style for `{}`", style.key());
				continue;
			}

			style.set(store, value.clone())?;
		}

		Ok(())
	}

	fn delete(&self, store: &mut dyn TagStore) -> Result<()> {
		for style in self.styles_for(store.format()) {
			style.delete(store)?;
		}

		Ok(())
	}
}
