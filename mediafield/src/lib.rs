//! Typed, format-independent metadata fields over audio tag stores.
//!
//! A tag library hands over a parsed tag as a [`TagStore`](store::TagStore). The fields in
//! [`catalog`] read and write it through a list of [`StorageStyle`](style::StorageStyle)s, one
//! or more per tag family, so a caller can write `TRACK.set(&mut store, Some(3))` without
//! knowing whether the track number lives in an ID3v2 `TRCK` frame, an MP4 `trkn` atom, or a
//! Vorbis `TRACKNUMBER` comment.
//!
//! # Supported tag families
//!
//! | Family        | Formats                                                  |
//! |---------------|----------------------------------------------------------|
//! | ID3v2         | MP3, AIFF, DSF, WAV                                      |
//! | MP4 atoms     | MP4                                                      |
//! | Vorbis        | FLAC, Ogg Vorbis, Ogg Opus, Ogg FLAC, Ogg Speex, Theora  |
//! | APEv2         | APE, WavPack, Musepack, Monkey's Audio                   |
//! | ASF           | WMA                                                      |
//!
//! OptimFROG files only carry images.
//!
//! # Examples
//!
//! ## Reading and writing fields
//!
//! ```rust
//! # fn main() -> mediafield::error::Result<()> {
//! use mediafield::catalog::{ARTIST, TITLE, TRACK};
//! use mediafield::field::Field;
//! use mediafield::store::{FileFormat, MemoryStore, RawValue, TagStore};
//!
//! let mut store = MemoryStore::new(FileFormat::Flac);
//! store.insert_one("TITLE", RawValue::from("Foo title"))?;
//!
//! assert_eq!(TITLE.get(&store)?, Some(String::from("Foo title")));
//! assert_eq!(ARTIST.get(&store)?, None);
//!
//! TRACK.set(&mut store, Some(7))?;
//! assert_eq!(store.get_first("TRACKNUMBER"), Some(&RawValue::from("7")));
//! # Ok(())
//! # }
//! ```
//!
//! ## Defining a custom field
//!
//! ```rust
//! # fn main() -> mediafield::error::Result<()> {
//! use mediafield::field::{Field, MediaField};
//! use mediafield::store::{FileFormat, MemoryStore};
//! use mediafield::style::StorageStyle;
//!
//! let mood = MediaField::<String>::new(vec![
//! 	StorageStyle::id3_desc("MOOD"),
//! 	StorageStyle::mp4("----:com.apple.iTunes:MOOD"),
//! 	StorageStyle::plain("MOOD"),
//! 	StorageStyle::asf("WM/Mood"),
//! ]);
//!
//! let mut store = MemoryStore::new(FileFormat::Mp3);
//! mood.set(&mut store, Some(String::from("Calm")))?;
//! assert_eq!(mood.get(&store)?, Some(String::from("Calm")));
//! # Ok(())
//! # }
//! ```
//!
//! # Important notes
//!
//! Reading is lenient. Malformed values are coerced (`"7/12"` reads as track 7, garbage reads as
//! 0) and malformed pictures are skipped according to the
//! [`ParsingMode`](config::ParsingMode) in the [`GlobalOptions`](config::GlobalOptions).
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub(crate) mod macros;

pub mod catalog;
pub mod coerce;
pub mod config;
pub mod error;
pub mod field;
pub mod id3;
pub mod loudness;
pub mod picture;
pub mod store;
pub mod style;
pub mod value;
mod util;

pub use util::text::TextEncoding;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use mediafield::prelude::*;
	//! ```

	pub use crate::field::Field;
	pub use crate::store::TagStore;
}
