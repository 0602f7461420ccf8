use super::items::{
	AttachedPictureFrame, CommentFrame, ExtendedTextFrame, ExtendedUrlFrame, KeyValueFrame,
	TextInformationFrame, UniqueFileIdentifierFrame,
};
use crate::util::text::TextEncoding;

macro_rules! define_frames {
	(
		$(#[$meta:meta])*
		pub enum Frame {
			$(
				$(#[$field_meta:meta])+
				$variant:ident($type:ty),
			)*
		}
	) => {
		$(#[$meta])*
		pub enum Frame {
			$(
				$(#[$field_meta])+
				$variant($type),
			)*
		}

		$(
			impl From<$type> for Frame {
				fn from(value: $type) -> Self {
					Frame::$variant(value)
				}
			}
		)*
	};
}

define_frames! {
	/// Represents an `ID3v2` frame
	#[non_exhaustive]
	#[derive(Clone, Debug, PartialEq, Eq, Hash)]
	pub enum Frame {
		/// Represents a `T***` frame, except `TXXX`
		Text(TextInformationFrame),
		/// Represents a `TXXX` frame
		UserText(ExtendedTextFrame),
		/// Represents a `COMM` or `USLT` frame
		Comment(CommentFrame),
		/// Represents a `WXXX` frame
		UserUrl(ExtendedUrlFrame),
		/// Represents a `TIPL`, `TMCL` or `IPLS` frame
		KeyValue(KeyValueFrame),
		/// Represents a `UFID` frame
		UniqueFileIdentifier(UniqueFileIdentifierFrame),
		/// Represents an `APIC` frame
		Picture(AttachedPictureFrame),
	}
}

impl Frame {
	/// Get the ID of the frame
	pub fn id(&self) -> &str {
		match self {
			Frame::Text(frame) => frame.id(),
			Frame::UserText(_) => "TXXX",
			Frame::Comment(frame) => frame.id(),
			Frame::UserUrl(_) => "WXXX",
			Frame::KeyValue(frame) => frame.id(),
			Frame::UniqueFileIdentifier(_) => "UFID",
			Frame::Picture(_) => "APIC",
		}
	}

	/// The text encoding of the frame, `UFID` frames have none
	pub fn encoding(&self) -> Option<TextEncoding> {
		match self {
			Frame::Text(frame) => Some(frame.encoding),
			Frame::UserText(frame) => Some(frame.encoding),
			Frame::Comment(frame) => Some(frame.encoding),
			Frame::UserUrl(frame) => Some(frame.encoding),
			Frame::KeyValue(frame) => Some(frame.encoding),
			Frame::Picture(frame) => Some(frame.encoding),
			Frame::UniqueFileIdentifier(_) => None,
		}
	}

	/// Change the text encoding of the frame
	///
	/// This does nothing for frames without an encoding.
	pub fn set_encoding(&mut self, encoding: TextEncoding) {
		match self {
			Frame::Text(frame) => frame.encoding = encoding,
			Frame::UserText(frame) => frame.encoding = encoding,
			Frame::Comment(frame) => frame.encoding = encoding,
			Frame::UserUrl(frame) => frame.encoding = encoding,
			Frame::KeyValue(frame) => frame.encoding = encoding,
			Frame::Picture(frame) => frame.encoding = encoding,
			Frame::UniqueFileIdentifier(_) => {},
		}
	}

	/// The content description of frames keyed by description
	pub fn description(&self) -> Option<&str> {
		match self {
			Frame::UserText(frame) => Some(&frame.description),
			Frame::Comment(frame) => Some(&frame.description),
			Frame::UserUrl(frame) => Some(&frame.description),
			Frame::Picture(frame) => Some(&frame.description),
			_ => None,
		}
	}

	/// Whether the frame's description matches `description`, ignoring case
	pub fn matches_description(&self, description: &str) -> bool {
		self.description()
			.is_some_and(|desc| desc.to_lowercase() == description.to_lowercase())
	}

	/// The text values of the frame
	///
	/// A `WXXX` frame has its URL as its single value.
	pub fn text(&self) -> Option<&[String]> {
		match self {
			Frame::Text(frame) => Some(&frame.values),
			Frame::UserText(frame) => Some(&frame.values),
			Frame::Comment(frame) => Some(&frame.values),
			Frame::UserUrl(frame) => Some(std::slice::from_ref(&frame.url)),
			_ => None,
		}
	}

	/// Replace the text values of the frame
	///
	/// A `WXXX` frame keeps the first value as its URL. This does nothing for frames without text.
	pub fn set_text(&mut self, values: Vec<String>) {
		match self {
			Frame::Text(frame) => frame.values = values,
			Frame::UserText(frame) => frame.values = values,
			Frame::Comment(frame) => frame.values = values,
			Frame::UserUrl(frame) => frame.url = values.into_iter().next().unwrap_or_default(),
			_ => {},
		}
	}

	/// Create a frame holding `values` for the given frame ID and description
	///
	/// This picks the frame type the ID calls for, and returns `None` for IDs that cannot hold
	/// text.
	pub(crate) fn with_text(
		id: &str,
		description: &str,
		language: Option<[u8; 3]>,
		values: Vec<String>,
	) -> Option<Self> {
		let encoding = TextEncoding::UTF8;
		let language = language.unwrap_or(CommentFrame::UNKNOWN_LANGUAGE);

		let frame = match id {
			"TXXX" => Frame::UserText(ExtendedTextFrame::new(encoding, description, values)),
			"COMM" => Frame::Comment(CommentFrame::comment(
				encoding,
				language,
				description,
				values,
			)),
			"USLT" => {
				let mut frame = CommentFrame::lyrics(encoding, language, description, "");
				frame.values = values;
				Frame::Comment(frame)
			},
			"WXXX" => Frame::UserUrl(ExtendedUrlFrame::new(
				encoding,
				description,
				values.into_iter().next().unwrap_or_default(),
			)),
			_ if id.starts_with('T') => {
				Frame::Text(TextInformationFrame::new(id, encoding, values))
			},
			_ => return None,
		};

		Some(frame)
	}
}

#[cfg(test)]
mod tests {
	use crate::id3::{CommentFrame, ExtendedUrlFrame, Frame};
	use crate::util::text::TextEncoding;

	#[test_log::test]
	fn description_match_ignores_case() {
		let frame = Frame::Comment(CommentFrame::comment(
			TextEncoding::UTF8,
			*b"eng",
			"iTunNORM",
			vec![String::from(" 00000000")],
		));

		assert!(frame.matches_description("itunnorm"));
		assert!(!frame.matches_description("iTunSMPB"));
	}

	#[test_log::test]
	fn url_frame_text() {
		let mut frame = Frame::UserUrl(ExtendedUrlFrame::new(
			TextEncoding::Latin1,
			"",
			"https://example.com",
		));
		assert_eq!(frame.text(), Some(&[String::from("https://example.com")][..]));

		frame.set_text(vec![String::from("https://example.org"), String::from("ignored")]);
		assert_eq!(frame.text(), Some(&[String::from("https://example.org")][..]));
	}

	#[test_log::test]
	fn text_frame_for_id() {
		let frame = Frame::with_text("TIT2", "", None, vec![String::from("Foo")]).unwrap();
		assert_eq!(frame.id(), "TIT2");
		assert_eq!(frame.encoding(), Some(TextEncoding::UTF8));

		let frame = Frame::with_text("COMM", "iTunNORM", Some(*b"eng"), Vec::new()).unwrap();
		let Frame::Comment(comment) = frame else {
			unreachable!()
		};
		assert_eq!(&comment.language, b"eng");

		assert!(Frame::with_text("APIC", "", None, Vec::new()).is_none());
	}
}
