use crate::util::text::TextEncoding;

/// An `ID3v2` text information frame (`T***`, except `TXXX`)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextInformationFrame {
	pub(crate) id: String,
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// The text values, in order
	pub values: Vec<String>,
}

impl TextInformationFrame {
	/// Create a new [`TextInformationFrame`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::id3::TextInformationFrame;
	/// use mediafield::TextEncoding;
	///
	/// let frame = TextInformationFrame::new("TIT2", TextEncoding::UTF8, vec![String::from("Foo")]);
	/// assert_eq!(frame.id(), "TIT2");
	/// ```
	pub fn new(id: impl Into<String>, encoding: TextEncoding, values: Vec<String>) -> Self {
		Self {
			id: id.into(),
			encoding,
			values,
		}
	}

	/// Get the ID for the frame
	pub fn id(&self) -> &str {
		&self.id
	}
}

/// An extended `ID3v2` text frame (`TXXX`)
///
/// These are told apart by their descriptions rather than their frame IDs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtendedTextFrame {
	/// The encoding of the description and text
	pub encoding: TextEncoding,
	/// Content description
	pub description: String,
	/// The text values, in order
	pub values: Vec<String>,
}

impl ExtendedTextFrame {
	/// Create a new [`ExtendedTextFrame`]
	pub fn new(encoding: TextEncoding, description: impl Into<String>, values: Vec<String>) -> Self {
		Self {
			encoding,
			description: description.into(),
			values,
		}
	}
}

/// An `ID3v2` comment or unsynchronized lyrics frame (`COMM`/`USLT`)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommentFrame {
	pub(crate) id: String,
	/// The encoding of the description and text
	pub encoding: TextEncoding,
	/// ISO-639-2 language code (3 bytes)
	pub language: [u8; 3],
	/// Content description
	pub description: String,
	/// The text values, in order
	pub values: Vec<String>,
}

impl CommentFrame {
	/// Language used when none is specified
	pub const UNKNOWN_LANGUAGE: [u8; 3] = *b"XXX";

	/// Create a new `COMM` frame
	pub fn comment(
		encoding: TextEncoding,
		language: [u8; 3],
		description: impl Into<String>,
		values: Vec<String>,
	) -> Self {
		Self {
			id: String::from("COMM"),
			encoding,
			language,
			description: description.into(),
			values,
		}
	}

	/// Create a new `USLT` frame
	pub fn lyrics(
		encoding: TextEncoding,
		language: [u8; 3],
		description: impl Into<String>,
		content: impl Into<String>,
	) -> Self {
		Self {
			id: String::from("USLT"),
			encoding,
			language,
			description: description.into(),
			values: vec![content.into()],
		}
	}

	/// Get the ID for the frame, either `COMM` or `USLT`
	pub fn id(&self) -> &str {
		&self.id
	}
}

/// An extended `ID3v2` URL frame (`WXXX`)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtendedUrlFrame {
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// Content description
	pub description: String,
	/// The URL
	pub url: String,
}

impl ExtendedUrlFrame {
	/// Create a new [`ExtendedUrlFrame`]
	pub fn new(
		encoding: TextEncoding,
		description: impl Into<String>,
		url: impl Into<String>,
	) -> Self {
		Self {
			encoding,
			description: description.into(),
			url: url.into(),
		}
	}
}

/// An `ID3v2` key-value frame (`TIPL`/`TMCL`/`IPLS`)
///
/// In this crate the pairs are `(involvement, person)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyValueFrame {
	pub(crate) id: String,
	/// The encoding of the text
	pub encoding: TextEncoding,
	/// The key value pairs. Keys can be specified multiple times
	pub key_value_pairs: Vec<(String, String)>,
}

impl KeyValueFrame {
	/// Create a new [`KeyValueFrame`]
	pub fn new(
		id: impl Into<String>,
		encoding: TextEncoding,
		key_value_pairs: Vec<(String, String)>,
	) -> Self {
		Self {
			id: id.into(),
			encoding,
			key_value_pairs,
		}
	}

	/// Get the ID for the frame
	pub fn id(&self) -> &str {
		&self.id
	}
}

/// An `ID3v2` unique file identifier frame (`UFID`)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UniqueFileIdentifierFrame {
	/// The non-empty owner of the identifier
	pub owner: String,
	/// The binary payload, up to 64 bytes
	pub identifier: Vec<u8>,
}

impl UniqueFileIdentifierFrame {
	/// Create a new [`UniqueFileIdentifierFrame`]
	pub fn new(owner: impl Into<String>, identifier: Vec<u8>) -> Self {
		Self {
			owner: owner.into(),
			identifier,
		}
	}
}

/// An `ID3v2` attached picture frame (`APIC`)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AttachedPictureFrame {
	/// The encoding of the description
	pub encoding: TextEncoding,
	/// The MIME type of the picture, possibly empty
	pub mime_type: String,
	/// The APIC picture type byte
	pub pic_type: u8,
	/// Content description
	pub description: String,
	/// The picture data
	pub data: Vec<u8>,
}

impl std::fmt::Debug for AttachedPictureFrame {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AttachedPictureFrame")
			.field("encoding", &self.encoding)
			.field("mime_type", &self.mime_type)
			.field("pic_type", &self.pic_type)
			.field("description", &self.description)
			.field("data", &format!("<{} bytes>", self.data.len()))
			.finish()
	}
}
