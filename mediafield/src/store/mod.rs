//! The boundary between fields and the tag library that owns the parsed tags
//!
//! Fields never touch container bytes. Everything they read or write goes through the
//! [`TagStore`] trait, which models a tag as an ordered map of keys to lists of [`RawValue`]s.
//! ID3v2 frames are stored under their four character frame ID, and FLAC picture blocks live
//! beside the map.
//!
//! [`MemoryStore`] is a complete in-memory implementation, useful for callers that already hold
//! decoded tags.

mod format;
mod memory;

pub use format::FileFormat;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::id3::{Frame, Id3v2Version};
use crate::macros::err;
use crate::picture::{Mp4Cover, PictureBlock};

/// A single value as held by the tag library
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
	/// A text value
	Text(String),
	/// Opaque binary data, ex. an MP4 freeform atom or an APEv2 binary item
	Binary(Vec<u8>),
	/// A native integer, ex. the MP4 `tmpo` atom
	Integer(i64),
	/// A native boolean, ex. the MP4 `cpil` atom
	Bool(bool),
	/// A pair of integers, used by the MP4 `trkn` and `disk` atoms
	Pair(i64, i64),
	/// An MP4 `covr` image
	Cover(Mp4Cover),
	/// An ID3v2 frame
	Frame(Frame),
}

impl RawValue {
	/// Returns the text, if this is a [`RawValue::Text`]
	pub fn as_text(&self) -> Option<&str> {
		match self {
			RawValue::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the bytes, if this is a [`RawValue::Binary`]
	pub fn as_binary(&self) -> Option<&[u8]> {
		match self {
			RawValue::Binary(data) => Some(data),
			_ => None,
		}
	}

	/// Returns the frame, if this is a [`RawValue::Frame`]
	pub fn as_frame(&self) -> Option<&Frame> {
		match self {
			RawValue::Frame(frame) => Some(frame),
			_ => None,
		}
	}
}

impl From<&str> for RawValue {
	fn from(input: &str) -> Self {
		RawValue::Text(input.to_owned())
	}
}

impl From<String> for RawValue {
	fn from(input: String) -> Self {
		RawValue::Text(input)
	}
}

impl From<Vec<u8>> for RawValue {
	fn from(input: Vec<u8>) -> Self {
		RawValue::Binary(input)
	}
}

impl From<Frame> for RawValue {
	fn from(input: Frame) -> Self {
		RawValue::Frame(input)
	}
}

/// Key-value access to the tags of one open file
///
/// Implementations report faults (ex. a read-only file) as
/// [`ErrorKind::Store`](crate::error::ErrorKind::Store), see [`MediaFieldError::store`].
///
/// Removing a key that is not present must succeed.
///
/// [`MediaFieldError::store`]: crate::error::MediaFieldError::store
pub trait TagStore {
	/// The container format of the file
	fn format(&self) -> FileFormat;

	/// All values stored under `key`, or `None` if the key is absent
	fn get(&self, key: &str) -> Option<&[RawValue]>;

	/// Replace everything stored under `key`
	fn insert(&mut self, key: &str, values: Vec<RawValue>) -> Result<()>;

	/// Remove `key` and all of its values
	fn remove(&mut self, key: &str) -> Result<()>;

	/// The first value stored under `key`
	fn get_first(&self, key: &str) -> Option<&RawValue> {
		self.get(key).and_then(<[RawValue]>::first)
	}

	/// Replace everything stored under `key` with a single value
	fn insert_one(&mut self, key: &str, value: RawValue) -> Result<()> {
		self.insert(key, vec![value])
	}

	/// Whether `key` is present
	fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// All ID3v2 frames with the frame ID `id`, in tag order
	fn frames(&self, id: &str) -> Vec<&Frame> {
		self.get(id)
			.map(|values| values.iter().filter_map(RawValue::as_frame).collect())
			.unwrap_or_default()
	}

	/// Replace all ID3v2 frames with the frame ID `id`
	///
	/// An empty list removes the frames.
	fn set_frames(&mut self, id: &str, frames: Vec<Frame>) -> Result<()> {
		if frames.is_empty() {
			return self.remove(id);
		}

		self.insert(id, frames.into_iter().map(RawValue::Frame).collect())
	}

	/// Append an ID3v2 frame after any existing frames with the same ID
	fn add_frame(&mut self, frame: Frame) -> Result<()> {
		let id = frame.id().to_owned();

		let mut frames = self
			.frames(&id)
			.into_iter()
			.cloned()
			.collect::<Vec<_>>();
		frames.push(frame);

		self.set_frames(&id, frames)
	}

	/// The version of the ID3v2 tag, if the file has one
	fn id3_version(&self) -> Option<Id3v2Version> {
		None
	}

	/// The native FLAC picture blocks of the file
	fn pictures(&self) -> &[PictureBlock] {
		&[]
	}

	/// Replace the native FLAC picture blocks of the file
	fn set_pictures(&mut self, _pictures: Vec<PictureBlock>) -> Result<()> {
		err!(UnsupportedOperation(
			"this store does not hold FLAC picture blocks"
		))
	}
}
