//! Storage styles: how one field is mapped onto one family of tag formats
//!
//! A [`StorageStyle`] pairs a key with a [`StyleKind`], the strategy used to reach that key.
//! The kind decides which [`FileFormat`]s the style applies to, so a field can list styles for
//! every format and let the store's format pick among them.
//!
//! Every style supports scalar access ([`StorageStyle::get`], [`StorageStyle::set`]). Styles
//! over natively repeated values also support list access ([`StorageStyle::get_list`],
//! [`StorageStyle::set_list`]), the others report
//! [`ErrorKind::UnsupportedOperation`](crate::error::ErrorKind::UnsupportedOperation).

mod base;
mod id3;
mod image;
mod mp4;
mod soundcheck;

use crate::coerce::FieldValue;
use crate::error::Result;
use crate::macros::err;
use crate::store::{FileFormat, RawValue, TagStore};
use crate::value::Value;

use std::borrow::Cow;

/// The native encoding a value is serialized to
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum StoredAs {
	/// Text, with floats formatted to a fixed number of places and bools as `1`/`0`
	#[default]
	Text,
	/// A native integer
	Integer,
	/// A native boolean
	Boolean,
	/// Raw bytes
	Binary,
}

/// The strategy a [`StorageStyle`] uses to reach its key
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum StyleKind {
	/// A free-form Vorbis comment or APEv2 item
	Plain,
	/// An ASF attribute
	Asf,
	/// The text of an ID3v2 text frame
	Id3,
	/// One person in an ID3v2 involved people frame (`TIPL`/`TMCL`)
	Id3People {
		/// The role, matched case-insensitively
		involvement: Cow<'static, str>,
	},
	/// The first text value of an ID3v2 frame selected by description (`TXXX`, `COMM`, ...)
	Id3Desc {
		/// The description, matched case-insensitively
		description: Cow<'static, str>,
		/// The language of new `COMM`/`USLT` frames
		language: Option<[u8; 3]>,
	},
	/// All text values of an ID3v2 frame selected by description
	Id3ListDesc {
		/// The description, matched case-insensitively
		description: Cow<'static, str>,
		/// The language of new `COMM`/`USLT` frames
		language: Option<[u8; 3]>,
		/// Split values on `/` when the tag is ID3v2.3
		split_v23: bool,
	},
	/// One half of a slash separated pair, ex. `TRCK` = `"3/12"`
	Id3SlashPack {
		/// 0 for the number, 1 for the total
		pack_pos: usize,
	},
	/// The identifier of a `UFID` frame, stored as UTF-8
	Id3Ufid {
		/// The frame owner
		owner: Cow<'static, str>,
	},
	/// One half of an iTunes SoundCheck `COMM` frame
	Id3SoundCheck {
		/// The comment description
		description: Cow<'static, str>,
		/// The language of new frames
		language: Option<[u8; 3]>,
		/// 0 for the gain, 1 for the peak
		index: usize,
	},
	/// `APIC` frames
	Id3Image,
	/// An MP4 atom, freeform (`----:`) atoms hold UTF-8 bytes
	Mp4,
	/// One half of an MP4 integer pair atom (`trkn`/`disk`)
	Mp4Tuple {
		/// 0 for the number, 1 for the total
		index: usize,
	},
	/// A native MP4 boolean atom
	Mp4Bool,
	/// One half of an iTunes SoundCheck freeform atom
	Mp4SoundCheck {
		/// 0 for the gain, 1 for the peak
		index: usize,
	},
	/// `covr` atoms
	Mp4Image,
	/// Packed `WM/Picture` attributes
	AsfImage,
	/// Base64 FLAC picture blocks in Vorbis comments, with legacy `COVERART` fallback
	VorbisImage,
	/// Native FLAC picture blocks
	FlacImage,
	/// `Cover Art (...)` APEv2 binary items
	ApeImage,
}

impl StyleKind {
	/// The formats a style of this kind applies to
	pub fn formats(&self) -> &'static [FileFormat] {
		match self {
			StyleKind::Plain => &FileFormat::PLAIN,
			StyleKind::Asf | StyleKind::AsfImage => &[FileFormat::Asf],
			StyleKind::Id3
			| StyleKind::Id3People { .. }
			| StyleKind::Id3Desc { .. }
			| StyleKind::Id3ListDesc { .. }
			| StyleKind::Id3SlashPack { .. }
			| StyleKind::Id3Ufid { .. }
			| StyleKind::Id3SoundCheck { .. }
			| StyleKind::Id3Image => &FileFormat::ID3,
			StyleKind::Mp4
			| StyleKind::Mp4Tuple { .. }
			| StyleKind::Mp4Bool
			| StyleKind::Mp4SoundCheck { .. }
			| StyleKind::Mp4Image => &[FileFormat::Mp4],
			StyleKind::VorbisImage => &FileFormat::VORBIS_PICTURES,
			StyleKind::FlacImage => &[FileFormat::Flac],
			StyleKind::ApeImage => &FileFormat::APE_PICTURES,
		}
	}

	/// Whether the kind stores natively repeated values
	pub fn is_list(&self) -> bool {
		matches!(
			self,
			StyleKind::Plain
				| StyleKind::Asf
				| StyleKind::Id3
				| StyleKind::Id3ListDesc { .. }
				| StyleKind::Id3Image
				| StyleKind::Mp4
				| StyleKind::Mp4Image
				| StyleKind::AsfImage
				| StyleKind::VorbisImage
				| StyleKind::FlacImage
				| StyleKind::ApeImage
		)
	}
}

/// A strategy for storing one field in one family of tag formats
///
/// # Examples
///
/// ```rust
/// use mediafield::store::{FileFormat, MemoryStore, RawValue, TagStore};
/// use mediafield::style::StorageStyle;
/// use mediafield::value::Value;
///
/// # fn main() -> mediafield::error::Result<()> {
/// let style = StorageStyle::plain("REPLAYGAIN_TRACK_GAIN").suffix(" dB");
///
/// let mut store = MemoryStore::new(FileFormat::Flac);
/// style.set(&mut store, Value::Float(-6.5))?;
///
/// assert_eq!(store.get_first("REPLAYGAIN_TRACK_GAIN"), Some(&RawValue::from("-6.50 dB")));
/// assert_eq!(style.get(&store)?, Some(Value::from("-6.50")));
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StorageStyle {
	key: Cow<'static, str>,
	as_type: StoredAs,
	suffix: Option<Cow<'static, str>>,
	float_places: usize,
	read_only: bool,
	kind: StyleKind,
}

impl StorageStyle {
	/// Default number of decimal places for floats stored as text
	pub const DEFAULT_FLOAT_PLACES: usize = 2;

	/// Frame and atom used by iTunes for SoundCheck
	pub const SOUNDCHECK_DESCRIPTION: &'static str = "iTunNORM";
	/// The MP4 freeform atom holding SoundCheck data
	pub const SOUNDCHECK_MP4_KEY: &'static str = "----:com.apple.iTunes:iTunNORM";

	/// Create a style of any kind
	pub fn new(key: impl Into<Cow<'static, str>>, kind: StyleKind) -> Self {
		Self {
			key: key.into(),
			as_type: StoredAs::Text,
			suffix: None,
			float_places: Self::DEFAULT_FLOAT_PLACES,
			read_only: false,
			kind,
		}
	}

	/// A Vorbis comment or APEv2 item
	pub fn plain(key: impl Into<Cow<'static, str>>) -> Self {
		Self::new(key, StyleKind::Plain)
	}

	/// An ASF attribute
	pub fn asf(key: impl Into<Cow<'static, str>>) -> Self {
		Self::new(key, StyleKind::Asf)
	}

	/// An ID3v2 text frame
	pub fn id3(frame_id: impl Into<Cow<'static, str>>) -> Self {
		Self::new(frame_id, StyleKind::Id3)
	}

	/// A `TXXX` frame selected by description
	pub fn id3_desc(description: impl Into<Cow<'static, str>>) -> Self {
		Self::id3_desc_frame("TXXX", description)
	}

	/// A frame with ID `frame_id` (`COMM`, `USLT`, `WXXX`, ...) selected by description
	pub fn id3_desc_frame(
		frame_id: impl Into<Cow<'static, str>>,
		description: impl Into<Cow<'static, str>>,
	) -> Self {
		Self::new(
			frame_id,
			StyleKind::Id3Desc {
				description: description.into(),
				language: None,
			},
		)
	}

	/// All values of a `TXXX` frame selected by description
	pub fn id3_list_desc(description: impl Into<Cow<'static, str>>) -> Self {
		Self::new(
			"TXXX",
			StyleKind::Id3ListDesc {
				description: description.into(),
				language: None,
				split_v23: false,
			},
		)
	}

	/// One person in an involved people frame
	pub fn id3_people(
		frame_id: impl Into<Cow<'static, str>>,
		involvement: impl Into<Cow<'static, str>>,
	) -> Self {
		Self::new(
			frame_id,
			StyleKind::Id3People {
				involvement: involvement.into(),
			},
		)
	}

	/// One half of a slash separated pair frame
	pub fn id3_slash_pack(frame_id: impl Into<Cow<'static, str>>, pack_pos: usize) -> Self {
		Self::new(frame_id, StyleKind::Id3SlashPack { pack_pos })
	}

	/// The identifier of the `UFID` frame owned by `owner`
	pub fn id3_ufid(owner: impl Into<Cow<'static, str>>) -> Self {
		Self::new(
			"UFID",
			StyleKind::Id3Ufid {
				owner: owner.into(),
			},
		)
	}

	/// One half of the iTunes SoundCheck comment
	pub fn id3_soundcheck(index: usize) -> Self {
		Self::new(
			"COMM",
			StyleKind::Id3SoundCheck {
				description: Cow::Borrowed(Self::SOUNDCHECK_DESCRIPTION),
				language: Some(*b"eng"),
				index,
			},
		)
	}

	/// `APIC` frames
	pub fn id3_image() -> Self {
		Self::new("APIC", StyleKind::Id3Image).as_type(StoredAs::Binary)
	}

	/// An MP4 atom
	pub fn mp4(key: impl Into<Cow<'static, str>>) -> Self {
		Self::new(key, StyleKind::Mp4)
	}

	/// One half of an MP4 integer pair atom
	pub fn mp4_tuple(key: impl Into<Cow<'static, str>>, index: usize) -> Self {
		Self::new(key, StyleKind::Mp4Tuple { index })
	}

	/// A native MP4 boolean atom
	pub fn mp4_bool(key: impl Into<Cow<'static, str>>) -> Self {
		Self::new(key, StyleKind::Mp4Bool)
	}

	/// One half of the iTunes SoundCheck freeform atom
	pub fn mp4_soundcheck(index: usize) -> Self {
		Self::new(Self::SOUNDCHECK_MP4_KEY, StyleKind::Mp4SoundCheck { index })
	}

	/// `covr` atoms
	pub fn mp4_image() -> Self {
		Self::new("covr", StyleKind::Mp4Image)
	}

	/// Packed `WM/Picture` attributes
	pub fn asf_image() -> Self {
		Self::new("WM/Picture", StyleKind::AsfImage)
	}

	/// Base64 FLAC picture blocks in Vorbis comments
	pub fn vorbis_image() -> Self {
		Self::new(image::VORBIS_PICTURE_KEY, StyleKind::VorbisImage).as_type(StoredAs::Binary)
	}

	/// Native FLAC picture blocks
	pub fn flac_image() -> Self {
		Self::new("", StyleKind::FlacImage)
	}

	/// APEv2 `Cover Art (...)` items
	pub fn ape_image() -> Self {
		Self::new("", StyleKind::ApeImage)
	}

	/// Change the stored encoding
	#[must_use]
	pub fn as_type(mut self, as_type: StoredAs) -> Self {
		self.as_type = as_type;
		self
	}

	/// Append `suffix` to text values, and strip it when reading
	#[must_use]
	pub fn suffix(mut self, suffix: impl Into<Cow<'static, str>>) -> Self {
		self.suffix = Some(suffix.into());
		self
	}

	/// The number of decimal places for floats stored as text
	#[must_use]
	pub fn float_places(mut self, float_places: usize) -> Self {
		self.float_places = float_places;
		self
	}

	/// Never write through this style
	///
	/// Deleting is still allowed, so misnamed keys can be cleaned up.
	#[must_use]
	pub fn read_only(mut self) -> Self {
		self.read_only = true;
		self
	}

	/// The language of newly created `COMM`/`USLT` frames
	///
	/// This does nothing for kinds that do not select frames by description.
	#[must_use]
	pub fn id3_lang(mut self, lang: [u8; 3]) -> Self {
		match &mut self.kind {
			StyleKind::Id3Desc { language, .. }
			| StyleKind::Id3ListDesc { language, .. }
			| StyleKind::Id3SoundCheck { language, .. } => *language = Some(lang),
			_ => {},
		}

		self
	}

	/// Split values on `/` when reading an ID3v2.3 tag
	///
	/// This does nothing for kinds other than [`StyleKind::Id3ListDesc`].
	#[must_use]
	pub fn split_v23(mut self) -> Self {
		if let StyleKind::Id3ListDesc { split_v23, .. } = &mut self.kind {
			*split_v23 = true;
		}

		self
	}

	/// The key, frame ID, or attribute name
	pub fn key(&self) -> &str {
		&self.key
	}

	/// The strategy of this style
	pub fn kind(&self) -> &StyleKind {
		&self.kind
	}

	/// The stored encoding
	pub fn stored_as(&self) -> StoredAs {
		self.as_type
	}

	/// Whether writes through this style are suppressed
	pub fn is_read_only(&self) -> bool {
		self.read_only
	}

	/// The formats this style applies to
	pub fn formats(&self) -> &'static [FileFormat] {
		self.kind.formats()
	}

	/// Whether this style applies to `format`
	pub fn applies_to(&self, format: FileFormat) -> bool {
		self.formats().contains(&format)
	}

	/// Read the first value
	pub fn get(&self, store: &dyn TagStore) -> Result<Option<Value>> {
		match &self.kind {
			StyleKind::Id3People { involvement } => Ok(self.get_people(store, involvement)),
			StyleKind::Id3Desc { description, .. } => {
				Ok(self.fetch_desc(store, description).map(|text| self.deserialize_text(text)))
			},
			StyleKind::Id3SlashPack { pack_pos } => Ok(self.get_slash_packed(store, *pack_pos)),
			StyleKind::Id3Ufid { owner } => Ok(self.get_ufid(store, owner)),
			StyleKind::Id3SoundCheck { description, index, .. } => Ok(soundcheck::get(
				self.fetch_desc(store, description).map(str::as_bytes),
				*index,
			)),
			StyleKind::Mp4Tuple { index } => Ok(self.get_tuple(store, *index)),
			StyleKind::Mp4Bool => Ok(store.get_first(&self.key).and_then(|raw| self.deserialize(raw))),
			StyleKind::Mp4SoundCheck { index } => Ok(soundcheck::get(
				store.get_first(&self.key).and_then(raw_bytes),
				*index,
			)),
			_ => Ok(self
				.get_list(store)?
				.and_then(|values| values.into_iter().next())),
		}
	}

	/// Read all values
	pub fn get_list(&self, store: &dyn TagStore) -> Result<Option<Vec<Value>>> {
		match &self.kind {
			StyleKind::Plain | StyleKind::Asf | StyleKind::Mp4 => Ok(self.get_plain_list(store)),
			StyleKind::Id3 => Ok(Some(self.get_id3_list(store))),
			StyleKind::Id3ListDesc {
				description,
				split_v23,
				..
			} => Ok(Some(self.get_id3_desc_list(store, description, *split_v23))),
			StyleKind::Id3Image => Ok(Some(image::get_id3(store))),
			StyleKind::Mp4Image => Ok(image::get_mp4(store, &self.key)),
			StyleKind::AsfImage => image::get_asf(store, &self.key),
			StyleKind::VorbisImage => image::get_vorbis(store).map(Some),
			StyleKind::FlacImage => Ok(Some(image::get_flac(store))),
			StyleKind::ApeImage => image::get_ape(store).map(Some),
			_ => self.list_unsupported(),
		}
	}

	fn list_unsupported<T>(&self) -> Result<T> {
		if self.kind == StyleKind::Mp4Bool {
			err!(UnsupportedOperation(
				"MP4 bool storage does not support lists"
			));
		}

		err!(UnsupportedOperation(
			"this storage style does not support lists"
		))
	}

	/// Write `value` as the only value
	pub fn set(&self, store: &mut dyn TagStore, value: Value) -> Result<()> {
		log::trace!("Writing `{}` through {:?}", self.key, self.kind);

		match &self.kind {
			StyleKind::Id3People { involvement } => self.set_people(store, involvement, value),
			StyleKind::Id3Desc {
				description,
				language,
			} => {
				let text = self.serialize_text(value)?;
				self.store_desc(store, description, *language, text)
			},
			StyleKind::Id3SlashPack { pack_pos } => {
				self.set_slash_packed(store, *pack_pos, Some(base::plain_text(value)?))
			},
			StyleKind::Id3Ufid { owner } => self.set_ufid(store, owner, value),
			StyleKind::Id3SoundCheck {
				description,
				language,
				index,
			} => {
				let current = self.fetch_desc(store, description).map(str::as_bytes);
				let soundcheck = soundcheck::updated(current, *index, value);
				let text = self.serialize_text(Value::Text(soundcheck))?;
				self.store_desc(store, description, *language, text)
			},
			StyleKind::Mp4Tuple { index } => self.set_tuple(store, *index, Some(value)),
			StyleKind::Mp4Bool => {
				let value = bool::from_value(value);
				store.insert_one(&self.key, RawValue::Bool(value))
			},
			StyleKind::Mp4SoundCheck { index } => {
				let current = store.get_first(&self.key).and_then(raw_bytes);
				let soundcheck = soundcheck::updated(current, *index, value);
				let raw = self.serialize(Value::Text(soundcheck))?;
				store.insert_one(&self.key, raw)
			},
			_ => self.set_list(store, Some(vec![value])),
		}
	}

	/// Write `values`, replacing everything stored before
	///
	/// `None` deletes.
	pub fn set_list(&self, store: &mut dyn TagStore, values: Option<Vec<Value>>) -> Result<()> {
		if !self.kind.is_list() {
			return self.list_unsupported();
		}

		let Some(values) = values else {
			return self.delete(store);
		};

		log::trace!(
			"Writing {} values to `{}` through {:?}",
			values.len(),
			self.key,
			self.kind
		);

		match &self.kind {
			StyleKind::Plain | StyleKind::Asf | StyleKind::Mp4 => {
				let raw = values
					.into_iter()
					.map(|value| self.serialize(value))
					.collect::<Result<Vec<_>>>()?;
				store.insert(&self.key, raw)
			},
			StyleKind::Id3 => {
				let text = values
					.into_iter()
					.map(|value| self.serialize_text(value))
					.collect::<Result<Vec<_>>>()?;
				self.store_id3_text(store, text)
			},
			StyleKind::Id3ListDesc {
				description,
				language,
				..
			} => {
				let text = values
					.into_iter()
					.map(|value| self.serialize_text(value))
					.collect::<Result<Vec<_>>>()?;
				self.store_desc_list(store, description, *language, text)
			},
			StyleKind::Id3Image => image::set_id3(store, values),
			StyleKind::Mp4Image => image::set_mp4(store, &self.key, values),
			StyleKind::AsfImage => image::set_asf(store, &self.key, values),
			StyleKind::VorbisImage => image::set_vorbis(store, values),
			StyleKind::FlacImage => image::set_flac(store, values),
			StyleKind::ApeImage => image::set_ape(store, values),
			_ => self.list_unsupported(),
		}
	}

	/// Remove the value from the store
	///
	/// Removing an absent value succeeds.
	pub fn delete(&self, store: &mut dyn TagStore) -> Result<()> {
		log::trace!("Deleting `{}` through {:?}", self.key, self.kind);

		match &self.kind {
			StyleKind::Id3Desc { description, .. }
			| StyleKind::Id3ListDesc { description, .. }
			| StyleKind::Id3SoundCheck { description, .. } => self.delete_desc(store, description),
			// Removing the second half keeps the first, removing the first removes both
			StyleKind::Id3SlashPack { pack_pos } if *pack_pos > 0 && store.contains_key(&self.key) => {
				self.set_slash_packed(store, *pack_pos, None)
			},
			StyleKind::Id3Ufid { owner } => self.delete_ufid(store, owner),
			StyleKind::Mp4Tuple { index } if *index > 0 && store.contains_key(&self.key) => {
				self.set_tuple(store, *index, None)
			},
			StyleKind::FlacImage => image::delete_flac(store),
			StyleKind::ApeImage => image::delete_ape(store),
			_ => store.remove(&self.key),
		}
	}
}

// The bytes of a text or binary value
fn raw_bytes(raw: &RawValue) -> Option<&[u8]> {
	match raw {
		RawValue::Text(text) => Some(text.as_bytes()),
		RawValue::Binary(data) => Some(data),
		_ => None,
	}
}
