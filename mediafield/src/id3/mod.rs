//! A model of the ID3v2 frames that fields read and write
//!
//! Only the frame kinds that carry field data are modelled. The tag library is expected to
//! convert between these and its own frame types at the [`TagStore`](crate::store::TagStore)
//! boundary.

mod frame;
mod items;

pub use frame::Frame;
pub use items::{
	AttachedPictureFrame, CommentFrame, ExtendedTextFrame, ExtendedUrlFrame, KeyValueFrame,
	TextInformationFrame, UniqueFileIdentifierFrame,
};

/// The owner used by MusicBrainz in `UFID` frames
pub const MUSICBRAINZ_UFID_OWNER: &str = "http://musicbrainz.org";

/// The ID3v2 version of a tag
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Id3v2Version {
	/// ID3v2.2
	V2,
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}
