use crate::error::{ErrorKind, MediaFieldError, Result};

/// The text encoding of an ID3v2 frame
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Whether every character of `text` fits in ISO-8859-1
	pub fn verify_latin1(text: &str) -> bool {
		text.chars().all(|c| c as u32 <= 255)
	}
}

/// Decode UTF-8, dropping any invalid sequences
pub(crate) fn utf8_decode_ignore(bytes: &[u8]) -> String {
	let mut text = String::with_capacity(bytes.len());
	for chunk in bytes.utf8_chunks() {
		text.push_str(chunk.valid());
	}

	text
}

pub(crate) fn utf16_decode(words: &[u16]) -> Result<String> {
	String::from_utf16(words)
		.map(|mut text| {
			trim_end_nulls(&mut text);
			text
		})
		.map_err(|_| MediaFieldError::new(ErrorKind::TextDecode("Given an invalid UTF-16 string")))
}

pub(crate) fn utf16_decode_bytes(bytes: &[u8], endianness: fn([u8; 2]) -> u16) -> Result<String> {
	if bytes.is_empty() {
		return Ok(String::new());
	}

	if bytes.len() % 2 != 0 {
		return Err(MediaFieldError::new(ErrorKind::TextDecode(
			"UTF-16 string has an odd length",
		)));
	}

	let unverified: Vec<u16> = bytes
		.chunks_exact(2)
		.map(|c| endianness([c[0], c[1]]))
		.collect();

	utf16_decode(&unverified)
}

/// Encode `text` as UTF-16 without a byte order mark
pub(crate) fn utf16_encode(text: &str, endianness: fn(u16) -> [u8; 2], terminated: bool) -> Vec<u8> {
	let mut encoded = Vec::<u8>::with_capacity(text.len() * 2 + 2);

	for ch in text.encode_utf16() {
		encoded.extend_from_slice(&endianness(ch));
	}

	if terminated {
		encoded.extend_from_slice(&[0, 0]);
	}

	encoded
}

pub(crate) fn trim_end_nulls(text: &mut String) {
	if text.ends_with('\0') {
		let new_len = text.trim_end_matches('\0').len();
		text.truncate(new_len);
	}
}
