use super::{Field, MediaField};
use crate::coerce::{FieldValue, safe_cast_list};
use crate::error::Result;
use crate::picture::Image;
use crate::store::TagStore;
use crate::style::StorageStyle;
use crate::value::Value;

use std::marker::PhantomData;

/// A field holding a list of values
///
/// Reading returns the list of the first style holding a non-empty one. Elements that coerce to
/// an empty or zero value are dropped.
///
/// Setting `None` deletes.
pub struct ListMediaField<T> {
	styles: Vec<StorageStyle>,
	_marker: PhantomData<fn() -> T>,
}

impl<T> Clone for ListMediaField<T> {
	fn clone(&self) -> Self {
		Self::new(self.styles.clone())
	}
}

impl<T> std::fmt::Debug for ListMediaField<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ListMediaField")
			.field("styles", &self.styles)
			.finish()
	}
}

impl<T> ListMediaField<T> {
	/// Create a field over `styles`
	///
	/// Every style must support lists, see [`StyleKind::is_list`](crate::style::StyleKind::is_list).
	pub fn new(styles: Vec<StorageStyle>) -> Self {
		Self {
			styles,
			_marker: PhantomData,
		}
	}

	/// A scalar field accessing the first element through the same styles
	pub fn single_field(&self) -> MediaField<T> {
		MediaField::new(self.styles.clone())
	}
}

impl<T: FieldValue> Field for ListMediaField<T> {
	type Value = Vec<T>;

	fn styles(&self) -> &[StorageStyle] {
		&self.styles
	}

	fn get(&self, store: &dyn TagStore) -> Result<Option<Vec<T>>> {
		for style in self.styles_for(store.format()) {
			match style.get_list(store)? {
				// Only the first style with values counts, even when none of them survive coercion
				Some(values) if !values.is_empty() => {
					return Ok(safe_cast_list(Some(values)).filter(|values| !values.is_empty()));
				},
				_ => {},
			}
		}

		Ok(None)
	}

	fn set(&self, store: &mut dyn TagStore, values: Option<Vec<T>>) -> Result<()> {
		let values = values.map(|values| {
			values
				.into_iter()
				.map(FieldValue::into_value)
				.collect::<Vec<Value>>()
		});

		for style in self.styles_for(store.format()) {
			if style.is_read_only() {
				log::trace!("Skipping read-only style for `{}`", style.key());
				continue;
			}

			style.set_list(store, values.clone())?;
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

/// The list of images embedded in a file, for every format
pub fn image_list_field() -> ListMediaField<Image> {
	ListMediaField::new(vec![
		StorageStyle::id3_image(),
		StorageStyle::mp4_image(),
		StorageStyle::asf_image(),
		StorageStyle::vorbis_image(),
		StorageStyle::flac_image(),
		StorageStyle::ape_image(),
	])
}
