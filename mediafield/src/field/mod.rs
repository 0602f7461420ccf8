//! Fields: one logical metadata value, mapped onto every supported format
//!
//! A field owns an ordered list of [`StorageStyle`]s. When it is accessed, the styles that apply
//! to the store's [`FileFormat`] are used, in order:
//!
//! * Reading stops at the first style producing a value.
//! * Writing goes through every applicable style, except read-only ones.
//! * Deleting goes through every applicable style.
//!
//! The predefined fields live in [`catalog`](crate::catalog).

mod cover;
mod date;
mod list;
mod qnumber;
mod scalar;

pub use cover::{CoverArtField, guess_cover_image};
pub use date::{Date, DateField, DateItemField, DatePart};
pub use list::{ListMediaField, image_list_field};
pub use qnumber::QNumberField;
pub use scalar::MediaField;

use crate::error::Result;
use crate::store::{FileFormat, TagStore};
use crate::style::StorageStyle;

/// Access to one logical value in a [`TagStore`]
///
/// # Examples
///
/// ```rust
/// use mediafield::field::{Field, MediaField};
/// use mediafield::store::{FileFormat, MemoryStore};
/// use mediafield::style::StorageStyle;
///
/// # fn main() -> mediafield::error::Result<()> {
/// let title = MediaField::<String>::new(vec![
/// 	StorageStyle::id3("TIT2"),
/// 	StorageStyle::plain("TITLE"),
/// ]);
///
/// let mut store = MemoryStore::new(FileFormat::Flac);
/// title.set(&mut store, Some(String::from("Foo title")))?;
///
/// assert_eq!(title.get(&store)?.as_deref(), Some("Foo title"));
/// # Ok(()) }
/// ```
pub trait Field {
	/// The type produced and accepted by the field
	type Value;

	/// Every style of the field, for all formats
	fn styles(&self) -> &[StorageStyle];

	/// The styles that apply to `format`, in order
	fn styles_for(&self, format: FileFormat) -> Vec<&StorageStyle> {
		self.styles()
			.iter()
			.filter(|style| style.applies_to(format))
			.collect()
	}

	/// Read the value
	///
	/// Absent or unusable data is `Ok(None)`, never an error.
	fn get(&self, store: &dyn TagStore) -> Result<Option<Self::Value>>;

	/// Write the value, `None` has a field specific meaning
	fn set(&self, store: &mut dyn TagStore, value: Option<Self::Value>) -> Result<()>;

	/// Remove the value
	///
	/// Deleting an absent value succeeds.
	fn delete(&self, store: &mut dyn TagStore) -> Result<()>;
}
