//! Contains the errors that can arise within mediafield
//!
//! The primary error is [`MediaFieldError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.
//!
//! Reading a field almost never fails, absent or malformed data degrades to "no value" or a
//! zero. The errors here are reserved for configuration mistakes, payloads a container cannot
//! represent, and failures reported by the underlying [`TagStore`](crate::store::TagStore).

use crate::store::FileFormat;

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, MediaFieldError>`
pub type Result<T> = std::result::Result<T, MediaFieldError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Data related errors
	/// Attempting to read/write an abnormally large amount of data
	TooMuchData,
	/// Expected the data to be a different size than provided
	///
	/// This occurs when the size of an item is written as one value, but that size is either too
	/// big or small to be valid within the bounds of that item.
	SizeMismatch,
	/// Errors that occur while decoding a stored payload
	FileDecoding(FileDecodingError),
	/// Errors that occur while encoding a value for a format
	FileEncoding(FileEncodingError),

	// Picture related errors
	/// Provided an invalid picture
	NotAPicture,

	// Field related errors
	/// A storage style was asked to do something it cannot do
	///
	/// This signals a mistake in a field definition, not bad data.
	UnsupportedOperation(&'static str),
	/// Errors that arise while decoding text
	TextDecode(&'static str),

	// Conversions for external errors
	/// The tag store rejected an operation
	Store(Box<dyn std::error::Error + Send + Sync + 'static>),
	/// Unable to convert bytes to a String
	StringFromUtf8(std::string::FromUtf8Error),
	/// Unable to convert bytes to a str
	StrFromUtf8(std::str::Utf8Error),
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

/// An error that arises while decoding a stored payload
pub struct FileDecodingError {
	format: Option<FileFormat>,
	description: &'static str,
}

impl FileDecodingError {
	/// Create a `FileDecodingError` from a [`FileFormat`] and description
	#[must_use]
	pub const fn new(format: FileFormat, description: &'static str) -> Self {
		Self {
			format: Some(format),
			description,
		}
	}

	/// Create a `FileDecodingError` without binding it to a [`FileFormat`]
	pub fn from_description(description: &'static str) -> Self {
		Self {
			format: None,
			description,
		}
	}

	/// Returns the associated [`FileFormat`], if one exists
	pub fn format(&self) -> Option<FileFormat> {
		self.format
	}

	/// Returns the error description
	pub fn description(&self) -> &str {
		self.description
	}
}

impl Debug for FileDecodingError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if let Some(format) = self.format {
			write!(f, "{:?}: {:?}", format, self.description)
		} else {
			write!(f, "{:?}", self.description)
		}
	}
}

impl Display for FileDecodingError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if let Some(format) = self.format {
			write!(f, "{:?}: {}", format, self.description)
		} else {
			write!(f, "{}", self.description)
		}
	}
}

/// An error that arises while encoding a value for a format
pub struct FileEncodingError {
	format: Option<FileFormat>,
	description: &'static str,
}

impl FileEncodingError {
	/// Create a `FileEncodingError` from a [`FileFormat`] and description
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::error::FileEncodingError;
	/// use mediafield::store::FileFormat;
	///
	/// // This error is bound to `FileFormat::Mp4`, which will be displayed when the error is formatted
	/// let mp4_error = FileEncodingError::new(FileFormat::Mp4, "Something went wrong in the MP4 tag!");
	/// ```
	#[must_use]
	pub const fn new(format: FileFormat, description: &'static str) -> Self {
		Self {
			format: Some(format),
			description,
		}
	}

	/// Create a `FileEncodingError` without binding it to a [`FileFormat`]
	pub fn from_description(description: &'static str) -> Self {
		Self {
			format: None,
			description,
		}
	}

	/// Returns the associated [`FileFormat`], if one exists
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::error::FileEncodingError;
	/// use mediafield::store::FileFormat;
	///
	/// let mp4_error = FileEncodingError::new(FileFormat::Mp4, "Something went wrong in the MP4 tag!");
	///
	/// assert_eq!(mp4_error.format(), Some(FileFormat::Mp4));
	/// ```
	pub fn format(&self) -> Option<FileFormat> {
		self.format
	}

	/// Returns the error description
	pub fn description(&self) -> &str {
		self.description
	}
}

impl Debug for FileEncodingError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if let Some(format) = self.format {
			write!(f, "{:?}: {:?}", format, self.description)
		} else {
			write!(f, "{:?}", self.description)
		}
	}
}

impl Display for FileEncodingError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if let Some(format) = self.format {
			write!(f, "{:?}: {}", format, self.description)
		} else {
			write!(f, "{}", self.description)
		}
	}
}

/// Errors that could occur within mediafield
pub struct MediaFieldError {
	pub(crate) kind: ErrorKind,
}

impl MediaFieldError {
	/// Create a `MediaFieldError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::error::{ErrorKind, MediaFieldError};
	///
	/// let not_a_picture = MediaFieldError::new(ErrorKind::NotAPicture);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Wrap an error reported by a [`TagStore`](crate::store::TagStore) implementation
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::error::{ErrorKind, MediaFieldError};
	///
	/// let io_error = std::io::Error::other("tag is locked");
	/// let err = MediaFieldError::store(io_error);
	/// assert!(matches!(err.kind(), ErrorKind::Store(_)));
	/// ```
	pub fn store<E>(error: E) -> Self
	where
		E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
	{
		Self {
			kind: ErrorKind::Store(error.into()),
		}
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::error::{ErrorKind, MediaFieldError};
	///
	/// let not_a_picture = MediaFieldError::new(ErrorKind::NotAPicture);
	/// if let ErrorKind::NotAPicture = not_a_picture.kind() {
	/// 	println!("That wasn't an image");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for MediaFieldError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Store(ref err) => Some(&**err),
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for MediaFieldError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<FileDecodingError> for MediaFieldError {
	fn from(input: FileDecodingError) -> Self {
		Self {
			kind: ErrorKind::FileDecoding(input),
		}
	}
}

impl From<FileEncodingError> for MediaFieldError {
	fn from(input: FileEncodingError) -> Self {
		Self {
			kind: ErrorKind::FileEncoding(input),
		}
	}
}

impl From<std::io::Error> for MediaFieldError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<std::string::FromUtf8Error> for MediaFieldError {
	fn from(input: std::string::FromUtf8Error) -> Self {
		Self {
			kind: ErrorKind::StringFromUtf8(input),
		}
	}
}

impl From<std::str::Utf8Error> for MediaFieldError {
	fn from(input: std::str::Utf8Error) -> Self {
		Self {
			kind: ErrorKind::StrFromUtf8(input),
		}
	}
}

impl From<TryReserveError> for MediaFieldError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl Display for MediaFieldError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Store(ref err) => write!(f, "Tag store: {err}"),
			ErrorKind::StringFromUtf8(ref err) => write!(f, "{err}"),
			ErrorKind::StrFromUtf8(ref err) => write!(f, "{err}"),
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),

			ErrorKind::NotAPicture => write!(f, "Picture: Encountered invalid data"),
			ErrorKind::UnsupportedOperation(message) => {
				write!(f, "Unsupported operation: {message}")
			},
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),

			// Payloads
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read/write an abnormally large amount of data"
			),
			ErrorKind::SizeMismatch => write!(
				f,
				"Encountered an invalid item size, either too big or too small to be valid"
			),
			ErrorKind::FileDecoding(ref file_decode_err) => write!(f, "{file_decode_err}"),
			ErrorKind::FileEncoding(ref file_encode_err) => write!(f, "{file_encode_err}"),
		}
	}
}
