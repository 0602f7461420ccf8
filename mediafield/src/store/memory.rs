use super::{FileFormat, RawValue, TagStore};
use crate::error::{MediaFieldError, Result};
use crate::id3::Id3v2Version;
use crate::picture::PictureBlock;

use std::io;

/// An in-memory [`TagStore`]
///
/// Keys keep their insertion order. For Vorbis comment and APEv2 formats keys compare
/// case-insensitively, everywhere else they must match exactly.
///
/// # Examples
///
/// ```rust
/// use mediafield::store::{FileFormat, MemoryStore, RawValue, TagStore};
///
/// # fn main() -> mediafield::error::Result<()> {
/// let mut store = MemoryStore::new(FileFormat::OggVorbis);
/// store.insert_one("TITLE", RawValue::from("Foo title"))?;
///
/// assert_eq!(store.get_first("title"), Some(&RawValue::from("Foo title")));
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryStore {
	format: FileFormat,
	items: Vec<(String, Vec<RawValue>)>,
	pictures: Vec<PictureBlock>,
	id3_version: Option<Id3v2Version>,
	read_only: bool,
}

impl MemoryStore {
	/// Create an empty store for `format`
	///
	/// ID3v2 formats start out as ID3v2.4.
	#[must_use]
	pub fn new(format: FileFormat) -> Self {
		Self {
			format,
			items: Vec::new(),
			pictures: Vec::new(),
			id3_version: format.is_id3().then_some(Id3v2Version::V4),
			read_only: false,
		}
	}

	/// Change the reported ID3v2 version
	#[must_use]
	pub fn with_id3_version(mut self, version: Id3v2Version) -> Self {
		self.id3_version = Some(version);
		self
	}

	/// Reject every future modification
	///
	/// Useful to verify what a field does when the underlying file cannot be written.
	#[must_use]
	pub fn read_only(mut self) -> Self {
		self.read_only = true;
		self
	}

	/// The stored keys, in insertion order
	pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
		self.items.iter().map(|(key, _)| key.as_str())
	}

	/// The number of stored keys
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the store holds no keys and no pictures
	pub fn is_empty(&self) -> bool {
		self.items.is_empty() && self.pictures.is_empty()
	}

	fn position(&self, key: &str) -> Option<usize> {
		let case_insensitive = self.format.case_insensitive_keys();
		self.items.iter().position(|(k, _)| {
			if case_insensitive {
				k.eq_ignore_ascii_case(key)
			} else {
				k == key
			}
		})
	}

	fn check_writable(&self) -> Result<()> {
		if self.read_only {
			return Err(MediaFieldError::store(io::Error::new(
				io::ErrorKind::PermissionDenied,
				"tag store is read-only",
			)));
		}

		Ok(())
	}
}

impl TagStore for MemoryStore {
	fn format(&self) -> FileFormat {
		self.format
	}

	fn get(&self, key: &str) -> Option<&[RawValue]> {
		self.position(key)
			.map(|position| self.items[position].1.as_slice())
	}

	fn insert(&mut self, key: &str, values: Vec<RawValue>) -> Result<()> {
		self.check_writable()?;

		match self.position(key) {
			Some(position) => self.items[position].1 = values,
			None => self.items.push((key.to_owned(), values)),
		}

		Ok(())
	}

	fn remove(&mut self, key: &str) -> Result<()> {
		self.check_writable()?;

		if let Some(position) = self.position(key) {
			self.items.remove(position);
		}

		Ok(())
	}

	fn id3_version(&self) -> Option<Id3v2Version> {
		self.id3_version
	}

	fn pictures(&self) -> &[PictureBlock] {
		&self.pictures
	}

	fn set_pictures(&mut self, pictures: Vec<PictureBlock>) -> Result<()> {
		self.check_writable()?;
		self.pictures = pictures;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use crate::error::ErrorKind;
	use crate::store::{FileFormat, MemoryStore, RawValue, TagStore};

	#[test_log::test]
	fn vorbis_keys_ignore_case() {
		let mut store = MemoryStore::new(FileFormat::Flac);
		store.insert_one("ARTIST", "Foo artist".into()).unwrap();
		store.insert_one("artist", "Bar artist".into()).unwrap();

		assert_eq!(store.len(), 1);
		assert_eq!(store.get_first("Artist"), Some(&RawValue::from("Bar artist")));
	}

	#[test_log::test]
	fn mp4_keys_are_exact() {
		let mut store = MemoryStore::new(FileFormat::Mp4);
		store.insert_one("\u{a9}nam", "Foo".into()).unwrap();

		assert!(store.contains_key("\u{a9}nam"));
		assert!(!store.contains_key("\u{a9}NAM"));
	}

	#[test_log::test]
	fn remove_absent_key() {
		let mut store = MemoryStore::new(FileFormat::Asf);
		store.remove("Title").unwrap();
		assert!(store.is_empty());
	}

	#[test_log::test]
	fn read_only_rejects_writes() {
		let mut store = MemoryStore::new(FileFormat::OggVorbis).read_only();
		let err = store.insert_one("TITLE", "Foo".into()).unwrap_err();

		assert!(matches!(err.kind(), ErrorKind::Store(_)));
		assert!(store.get("TITLE").is_none());
	}
}
