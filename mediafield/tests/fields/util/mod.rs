use mediafield::store::{FileFormat, MemoryStore};

/// One format per tag family
pub const FAMILIES: [FileFormat; 5] = [
	FileFormat::Mp3,
	FileFormat::Mp4,
	FileFormat::Flac,
	FileFormat::ApeV2,
	FileFormat::Asf,
];

pub const PNG: &[u8] = &[
	0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
];
pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];
pub const GIF: &[u8] = b"GIF89a\x01\x00\x01\x00\x00\x00";

/// An empty store for every tag family
pub fn family_stores() -> impl Iterator<Item = MemoryStore> {
	FAMILIES.into_iter().map(MemoryStore::new)
}

/// Compare floats to `places` decimal places
pub fn assert_close(actual: f64, expected: f64, places: i32) {
	let tolerance = 10_f64.powi(-places) / 2.0;
	assert!(
		(actual - expected).abs() <= tolerance,
		"{actual} is not within {tolerance} of {expected}"
	);
}
