//! Images and the binary codecs that embed them in each tag format

use crate::error::{ErrorKind, MediaFieldError, Result};
use crate::macros::{decode_err, encode_err, err};
use crate::util::alloc::fallible_copy;
use crate::util::text::{utf16_decode_bytes, utf16_encode};

use std::fmt::{Debug, Display, Formatter};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt as _};
use data_encoding::BASE64;

/// MIME types for pictures.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum MimeType {
	/// PNG image
	Png,
	/// JPEG image
	Jpeg,
	/// TIFF image
	Tiff,
	/// BMP image
	Bmp,
	/// GIF image
	Gif,
	/// Some unknown MIME type
	Unknown(String),
}

impl MimeType {
	/// Get a `MimeType` from a string
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::picture::MimeType;
	///
	/// let jpeg_mimetype_str = "image/jpeg";
	/// assert_eq!(MimeType::from_str(jpeg_mimetype_str), MimeType::Jpeg);
	/// ```
	#[must_use]
	#[allow(clippy::should_implement_trait)] // Infallible in contrast to FromStr
	pub fn from_str(mime_type: &str) -> Self {
		match &*mime_type.to_lowercase() {
			"image/jpeg" | "image/jpg" => Self::Jpeg,
			"image/png" => Self::Png,
			"image/tiff" => Self::Tiff,
			"image/bmp" => Self::Bmp,
			"image/gif" => Self::Gif,
			_ => Self::Unknown(mime_type.to_owned()),
		}
	}

	/// Get a &str from a `MimeType`
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::picture::MimeType;
	///
	/// let jpeg_mimetype = MimeType::Jpeg;
	/// assert_eq!(jpeg_mimetype.as_str(), "image/jpeg")
	/// ```
	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			MimeType::Jpeg => "image/jpeg",
			MimeType::Png => "image/png",
			MimeType::Tiff => "image/tiff",
			MimeType::Bmp => "image/bmp",
			MimeType::Gif => "image/gif",
			MimeType::Unknown(unknown) => unknown,
		}
	}

	/// Returns the extension for the `MimeType` if it is known
	///
	/// TIFF images use `tiff` rather than `tif`.
	pub fn ext(&self) -> Option<&str> {
		match self {
			MimeType::Jpeg => Some("jpg"),
			MimeType::Png => Some("png"),
			MimeType::Tiff => Some("tiff"),
			MimeType::Bmp => Some("bmp"),
			MimeType::Gif => Some("gif"),
			MimeType::Unknown(_) => None,
		}
	}

	/// Sniff the `MimeType` of image data from its magic bytes
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::picture::MimeType;
	///
	/// let png_header = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
	/// assert_eq!(MimeType::sniff(&png_header), Some(MimeType::Png));
	/// assert_eq!(MimeType::sniff(b"not an image"), None);
	/// ```
	pub fn sniff(data: &[u8]) -> Option<Self> {
		match data {
			[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some(MimeType::Png),
			[0xFF, 0xD8, 0xFF, ..] => Some(MimeType::Jpeg),
			[b'G', b'I', b'F', 0x38, 0x37 | 0x39, b'a', ..] => Some(MimeType::Gif),
			[b'B', b'M', ..] => Some(MimeType::Bmp),
			[b'I', b'I', b'*', 0x00, ..] | [b'M', b'M', 0x00, b'*', ..] => Some(MimeType::Tiff),
			_ => None,
		}
	}
}

impl Display for MimeType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The kind of an [`Image`], according to ID3v2 APIC
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ImageType {
	Other,
	Icon,
	OtherIcon,
	CoverFront,
	CoverBack,
	Leaflet,
	Media,
	LeadArtist,
	Artist,
	Conductor,
	Band,
	Composer,
	Lyricist,
	RecordingLocation,
	DuringRecording,
	DuringPerformance,
	ScreenCapture,
	BrightFish,
	Illustration,
	BandLogo,
	PublisherLogo,
}

impl ImageType {
	/// Every `ImageType`, ordered by index
	pub const ALL: [ImageType; 21] = [
		Self::Other,
		Self::Icon,
		Self::OtherIcon,
		Self::CoverFront,
		Self::CoverBack,
		Self::Leaflet,
		Self::Media,
		Self::LeadArtist,
		Self::Artist,
		Self::Conductor,
		Self::Band,
		Self::Composer,
		Self::Lyricist,
		Self::RecordingLocation,
		Self::DuringRecording,
		Self::DuringPerformance,
		Self::ScreenCapture,
		Self::BrightFish,
		Self::Illustration,
		Self::BandLogo,
		Self::PublisherLogo,
	];

	/// Get a `u8` from an `ImageType` according to ID3v2 APIC
	pub fn as_u8(self) -> u8 {
		self as u8
	}

	/// Get an `ImageType` from an index according to ID3v2 APIC
	///
	/// Unknown indices map to [`ImageType::Other`].
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::picture::ImageType;
	///
	/// assert_eq!(ImageType::from_index(3), ImageType::CoverFront);
	/// assert_eq!(ImageType::from_index(200), ImageType::Other);
	/// ```
	pub fn from_index(index: i64) -> Self {
		match usize::try_from(index)
			.ok()
			.and_then(|index| Self::ALL.get(index))
		{
			Some(ty) => *ty,
			None => {
				log::debug!("Ignoring unknown image type index {index}");
				Self::Other
			},
		}
	}

	// APE specific methods

	/// The APEv2 item key holding images of this type
	pub fn as_ape_key(self) -> &'static str {
		APE_PICTURE_KEYS[self as usize]
	}
}

/// APEv2 item keys for pictures, ordered by [`ImageType`] index
pub const APE_PICTURE_KEYS: [&str; 21] = [
	"Cover Art (other)",
	"Cover Art (icon)",
	"Cover Art (other icon)",
	"Cover Art (front)",
	"Cover Art (back)",
	"Cover Art (leaflet)",
	"Cover Art (media)",
	"Cover Art (lead)",
	"Cover Art (artist)",
	"Cover Art (conductor)",
	"Cover Art (band)",
	"Cover Art (composer)",
	"Cover Art (lyricist)",
	"Cover Art (studio)",
	"Cover Art (recording)",
	"Cover Art (performance)",
	"Cover Art (movie scene)",
	"Cover Art (colored fish)",
	"Cover Art (illustration)",
	"Cover Art (band logo)",
	"Cover Art (publisher logo)",
];

/// An image stored in a tag
///
/// The MIME type is never stored, it is sniffed from the data when needed.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct Image {
	/// The image data
	pub data: Vec<u8>,
	/// An optional description
	pub desc: Option<String>,
	/// The kind of image, if known
	pub pic_type: Option<ImageType>,
}

impl Debug for Image {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Image")
			.field("pic_type", &self.pic_type)
			.field("desc", &self.desc)
			.field("data", &format!("<{} bytes>", self.data.len()))
			.finish()
	}
}

impl Image {
	/// Create an untyped `Image` with no description
	pub fn new(data: Vec<u8>) -> Self {
		Self {
			data,
			desc: None,
			pic_type: None,
		}
	}

	/// Set the description
	#[must_use]
	pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
		self.desc = Some(desc.into());
		self
	}

	/// Set the image type
	#[must_use]
	pub fn with_type(mut self, pic_type: ImageType) -> Self {
		self.pic_type = Some(pic_type);
		self
	}

	/// The MIME type sniffed from the data
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::picture::{Image, MimeType};
	///
	/// let image = Image::new(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]);
	/// assert_eq!(image.mime_type(), Some(MimeType::Jpeg));
	/// ```
	pub fn mime_type(&self) -> Option<MimeType> {
		MimeType::sniff(&self.data)
	}

	/// The image type index, [`ImageType::Other`] when unset
	pub fn type_index(&self) -> u8 {
		self.pic_type.map_or(0, ImageType::as_u8)
	}

	pub(crate) fn mime_str(&self) -> String {
		self.mime_type()
			.map(|mime| mime.as_str().to_owned())
			.unwrap_or_default()
	}

	// APE specific methods

	/// Convert the image to an APEv2 binary item
	///
	/// The item is the UTF-8 description, a NUL, and the image data.
	pub fn as_ape_bytes(&self) -> Vec<u8> {
		let desc = self.desc.as_deref().unwrap_or_default();

		let mut data = Vec::with_capacity(desc.len() + 1 + self.data.len());
		data.extend(desc.as_bytes());
		data.push(0);
		data.extend(self.data.iter());

		data
	}

	/// Get an `Image` from an APEv2 binary item
	///
	/// Without a NUL the whole value is image data. An empty description is treated as no
	/// description, and invalid UTF-8 is replaced.
	pub fn from_ape_bytes(pic_type: ImageType, bytes: &[u8]) -> Result<Self> {
		let (desc, data) = match bytes.iter().position(|b| *b == 0) {
			Some(0) => (None, &bytes[1..]),
			Some(idx) => (
				Some(String::from_utf8_lossy(&bytes[..idx]).into_owned()),
				&bytes[idx + 1..],
			),
			None => (None, bytes),
		};

		Ok(Self {
			data: fallible_copy(data)?,
			desc,
			pic_type: Some(pic_type),
		})
	}
}

// Every length in a picture block is a u32
fn flac_length(len: usize) -> Result<[u8; 4]> {
	let Ok(len) = u32::try_from(len) else {
		err!(TooMuchData);
	};

	Ok(len.to_be_bytes())
}

/// A FLAC `METADATA_BLOCK_PICTURE`
///
/// This is used natively by FLAC, and base64 encoded in Vorbis comments.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct PictureBlock {
	/// The picture type, according to ID3v2 APIC
	pub pic_type: u32,
	/// The MIME type, possibly empty
	pub mime_type: String,
	/// The description, possibly empty
	pub description: String,
	/// The picture width in pixels
	pub width: u32,
	/// The picture height in pixels
	pub height: u32,
	/// The color depth in bits per pixel
	pub color_depth: u32,
	/// The number of colors for indexed pictures, 0 otherwise
	pub num_colors: u32,
	/// The picture data
	pub data: Vec<u8>,
}

impl Debug for PictureBlock {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PictureBlock")
			.field("pic_type", &self.pic_type)
			.field("mime_type", &self.mime_type)
			.field("description", &self.description)
			.field("width", &self.width)
			.field("height", &self.height)
			.field("color_depth", &self.color_depth)
			.field("num_colors", &self.num_colors)
			.field("data", &format!("<{} bytes>", self.data.len()))
			.finish()
	}
}

impl PictureBlock {
	/// Build a block from an [`Image`]
	///
	/// The dimensions are left zeroed.
	pub fn from_image(image: &Image) -> Self {
		Self {
			pic_type: u32::from(image.type_index()),
			mime_type: image.mime_str(),
			description: image.desc.clone().unwrap_or_default(),
			data: image.data.clone(),
			..Self::default()
		}
	}

	/// Convert the block to an [`Image`]
	pub fn to_image(&self) -> Image {
		Image {
			data: self.data.clone(),
			desc: Some(self.description.clone()),
			pic_type: Some(ImageType::from_index(i64::from(self.pic_type))),
		}
	}

	/// Convert the block to its FLAC byte representation
	///
	/// With `encode`, the bytes are base64 encoded for use in a Vorbis comment.
	///
	/// # Errors
	///
	/// * The MIME type, description, or data is longer than [`u32::MAX`]
	pub fn as_flac_bytes(&self, encode: bool) -> Result<Vec<u8>> {
		let mut data = Vec::<u8>::with_capacity(32 + self.data.len());

		data.extend(self.pic_type.to_be_bytes());

		data.extend(flac_length(self.mime_type.len())?);
		data.extend(self.mime_type.as_bytes());

		data.extend(flac_length(self.description.len())?);
		data.extend(self.description.as_bytes());

		data.extend(self.width.to_be_bytes());
		data.extend(self.height.to_be_bytes());
		data.extend(self.color_depth.to_be_bytes());
		data.extend(self.num_colors.to_be_bytes());

		data.extend(flac_length(self.data.len())?);
		data.extend(self.data.iter());

		if encode {
			Ok(BASE64.encode(&data).into_bytes())
		} else {
			Ok(data)
		}
	}

	/// Get a `PictureBlock` from FLAC bytes
	///
	/// With `encoded`, `bytes` are expected to be base64 encoded.
	///
	/// # Errors
	///
	/// * The base64 is invalid
	/// * The block is too short, or its lengths overrun the block
	/// * The MIME type or description are not valid UTF-8
	pub fn from_flac_bytes(bytes: &[u8], encoded: bool) -> Result<Self> {
		if encoded {
			let data = BASE64
				.decode(bytes)
				.map_err(|_| MediaFieldError::new(ErrorKind::NotAPicture))?;
			Self::from_flac_bytes_inner(&data)
		} else {
			Self::from_flac_bytes_inner(bytes)
		}
	}

	fn from_flac_bytes_inner(content: &[u8]) -> Result<Self> {
		if content.len() < 32 {
			err!(NotAPicture);
		}

		let reader = &mut &*content;

		let pic_type = reader.read_u32::<BigEndian>()?;
		let mime_type = read_sized_str(reader)?;
		let description = read_sized_str(reader)?;

		let width = reader.read_u32::<BigEndian>()?;
		let height = reader.read_u32::<BigEndian>()?;
		let color_depth = reader.read_u32::<BigEndian>()?;
		let num_colors = reader.read_u32::<BigEndian>()?;

		let data_len = reader.read_u32::<BigEndian>()? as usize;
		if data_len > reader.len() {
			err!(SizeMismatch);
		}

		Ok(Self {
			pic_type,
			mime_type,
			description,
			width,
			height,
			color_depth,
			num_colors,
			data: fallible_copy(&reader[..data_len])?,
		})
	}
}

fn read_sized_str(reader: &mut &[u8]) -> Result<String> {
	let len = reader.read_u32::<BigEndian>()? as usize;
	if len > reader.len() {
		err!(SizeMismatch);
	}

	let (text, rest) = reader.split_at(len);
	*reader = rest;

	Ok(std::str::from_utf8(text)?.to_owned())
}

/// The decoded fields of an ASF `WM/Picture` attribute
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AsfPicture {
	/// The MIME type
	pub mime_type: String,
	/// The picture type, according to ID3v2 APIC
	pub pic_type: i8,
	/// The description
	pub description: String,
	/// The picture data
	pub data: Vec<u8>,
}

impl AsfPicture {
	/// Convert the record to an [`Image`]
	pub fn into_image(self) -> Image {
		Image {
			data: self.data,
			desc: Some(self.description),
			pic_type: Some(ImageType::from_index(i64::from(self.pic_type))),
		}
	}
}

/// Pack an image into an ASF `WM/Picture` attribute
///
/// The layout is the picture type (i8), the data length (i32 LE), the UTF-16LE MIME type and
/// description each followed by `00 00`, then the data.
///
/// # Errors
///
/// * The picture type does not fit in an i8
/// * The data is larger than `i32::MAX` bytes
pub fn pack_asf_image(mime_type: &str, data: &[u8], pic_type: u8, description: &str) -> Result<Vec<u8>> {
	let Ok(pic_type) = i8::try_from(pic_type) else {
		encode_err!(@BAIL Asf, "Picture type does not fit in a byte");
	};

	let Ok(size) = i32::try_from(data.len()) else {
		err!(TooMuchData);
	};

	let mime = utf16_encode(mime_type, u16::to_le_bytes, true);
	let desc = utf16_encode(description, u16::to_le_bytes, true);

	let mut packed = Vec::with_capacity(5 + mime.len() + desc.len() + data.len());
	packed.extend(pic_type.to_le_bytes());
	packed.extend(size.to_le_bytes());
	packed.extend(mime);
	packed.extend(desc);
	packed.extend(data.iter());

	Ok(packed)
}

/// Unpack an ASF `WM/Picture` attribute
///
/// # Errors
///
/// * The header is truncated
/// * A string is missing its terminator, or is not valid UTF-16
/// * The declared size is negative or overruns the attribute
pub fn unpack_asf_image(bytes: &[u8]) -> Result<AsfPicture> {
	let reader = &mut &*bytes;

	let (Ok(pic_type), Ok(size)) = (reader.read_i8(), reader.read_i32::<LittleEndian>()) else {
		decode_err!(@BAIL Asf, "WM/Picture header is truncated");
	};

	let mime_type = read_utf16_terminated(reader)?;
	let description = read_utf16_terminated(reader)?;

	let Ok(size) = usize::try_from(size) else {
		decode_err!(@BAIL Asf, "WM/Picture has a negative data size");
	};

	if size > reader.len() {
		decode_err!(@BAIL Asf, "WM/Picture data is shorter than its declared size");
	}

	Ok(AsfPicture {
		mime_type,
		pic_type,
		description,
		data: fallible_copy(&reader[..size])?,
	})
}

// Scans 2-byte units for a `00 00` terminator
fn read_utf16_terminated(reader: &mut &[u8]) -> Result<String> {
	let Some(end) = reader
		.chunks_exact(2)
		.position(|unit| unit == [0, 0])
		.map(|units| units * 2)
	else {
		decode_err!(@BAIL Asf, "WM/Picture string is missing its terminator");
	};

	let text = utf16_decode_bytes(&reader[..end], u16::from_le_bytes)?;
	*reader = &reader[end + 2..];

	Ok(text)
}

/// The image format of an MP4 `covr` atom
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Mp4CoverFormat {
	/// JPEG data
	Jpeg,
	/// PNG data
	Png,
}

/// An MP4 `covr` image
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Mp4Cover {
	/// The data format
	pub format: Mp4CoverFormat,
	/// The image data
	pub data: Vec<u8>,
}

impl Debug for Mp4Cover {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Mp4Cover")
			.field("format", &self.format)
			.field("data", &format!("<{} bytes>", self.data.len()))
			.finish()
	}
}

impl Mp4Cover {
	/// Build a `covr` image from an [`Image`]
	///
	/// # Errors
	///
	/// The image is not a PNG or JPEG
	pub fn from_image(image: &Image) -> Result<Self> {
		let format = match image.mime_type() {
			Some(MimeType::Png) => Mp4CoverFormat::Png,
			Some(MimeType::Jpeg) => Mp4CoverFormat::Jpeg,
			_ => encode_err!(@BAIL Mp4, "MP4 files only support PNG and JPEG images"),
		};

		Ok(Self {
			format,
			data: image.data.clone(),
		})
	}

	/// Convert the atom to an untyped [`Image`]
	pub fn to_image(&self) -> Image {
		Image::new(self.data.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const PNG: &[u8] = &[
		0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
	];
	const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
	const GIF: &[u8] = b"GIF89a\x01\x00\x01\x00";
	const GIF_NO_NUL: &[u8] = b"GIF89a\x01\x02\x01\x02";

	#[test_log::test]
	fn unknown_type_index_is_other() {
		assert_eq!(ImageType::from_index(-1), ImageType::Other);
		assert_eq!(ImageType::from_index(21), ImageType::Other);
		assert_eq!(ImageType::from_index(20), ImageType::PublisherLogo);
		assert_eq!(Image::new(Vec::new()).type_index(), 0);
	}

	#[test_log::test]
	fn ape_keys() {
		assert_eq!(ImageType::CoverFront.as_ape_key(), "Cover Art (front)");
		assert_eq!(ImageType::BrightFish.as_ape_key(), "Cover Art (colored fish)");
		assert_eq!(ImageType::PublisherLogo.as_ape_key(), "Cover Art (publisher logo)");
	}

	#[test_log::test]
	fn ape_item_without_nul() {
		let image = Image::from_ape_bytes(ImageType::CoverBack, GIF_NO_NUL).unwrap();
		assert_eq!(image.desc, None);
		assert_eq!(image.data, GIF_NO_NUL);
		assert_eq!(image.pic_type, Some(ImageType::CoverBack));
	}

	#[test_log::test]
	fn ape_item_with_description() {
		let image = Image::new(PNG.to_vec()).with_desc("caf\u{e9}");
		let bytes = image.as_ape_bytes();
		assert_eq!(&bytes[..6], b"caf\xC3\xA9\0");

		let read = Image::from_ape_bytes(ImageType::Other, &bytes).unwrap();
		assert_eq!(read.desc.as_deref(), Some("caf\u{e9}"));
		assert_eq!(read.data, PNG);

		// Leading NUL, no description
		let read = Image::from_ape_bytes(ImageType::Other, b"\0abc").unwrap();
		assert_eq!(read.desc, None);
		assert_eq!(read.data, b"abc");
	}

	#[test_log::test]
	fn flac_block_zeroes_dimensions() {
		let image = Image::new(PNG.to_vec())
			.with_desc("front")
			.with_type(ImageType::CoverFront);
		let block = PictureBlock::from_image(&image);

		assert_eq!(block.pic_type, 3);
		assert_eq!(block.mime_type, "image/png");
		assert_eq!((block.width, block.height, block.color_depth, block.num_colors), (0, 0, 0, 0));

		let encoded = block.as_flac_bytes(true).unwrap();
		let decoded = PictureBlock::from_flac_bytes(&encoded, true).unwrap();
		assert_eq!(decoded, block);
		assert_eq!(decoded.to_image(), image);
	}

	#[test_log::test]
	fn flac_block_overrun() {
		let mut bytes = PictureBlock::from_image(&Image::new(JPEG.to_vec()))
			.as_flac_bytes(false)
			.unwrap();
		bytes.truncate(bytes.len() - 1);

		assert!(PictureBlock::from_flac_bytes(&bytes, false).is_err());
		assert!(PictureBlock::from_flac_bytes(b"!!not base64!!", true).is_err());
	}

	#[test_log::test]
	#[cfg(target_pointer_width = "64")]
	fn flac_length_over_u32() {
		assert_eq!(flac_length(0x0102).unwrap(), [0, 0, 1, 2]);
		assert_eq!(flac_length(u32::MAX as usize).unwrap(), [0xFF; 4]);

		let err = flac_length(u32::MAX as usize + 1).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::TooMuchData));
	}

	#[test_log::test]
	fn asf_layout() {
		let packed = pack_asf_image("image/gif", GIF, 3, "d").unwrap();

		assert_eq!(packed[0], 3);
		assert_eq!(&packed[1..5], &(GIF.len() as i32).to_le_bytes());
		// "image/gif" in UTF-16LE is 18 bytes, then the terminator
		assert_eq!(&packed[5 + 18..5 + 20], &[0, 0]);
		assert_eq!(&packed[25..29], &[b'd', 0, 0, 0]);
		assert_eq!(&packed[29..], GIF);

		let unpacked = unpack_asf_image(&packed).unwrap();
		assert_eq!(unpacked, AsfPicture {
			mime_type: String::from("image/gif"),
			pic_type: 3,
			description: String::from("d"),
			data: GIF.to_vec(),
		});
	}

	#[test_log::test]
	fn asf_truncated() {
		let packed = pack_asf_image("image/png", PNG, 0, "").unwrap();

		for len in [0, 4, 10, packed.len() - 1] {
			let err = unpack_asf_image(&packed[..len]).unwrap_err();
			assert!(matches!(err.kind(), ErrorKind::FileDecoding(_)), "len {len}: {err}");
		}

		let mut negative = packed.clone();
		negative[1..5].copy_from_slice(&(-1_i32).to_le_bytes());
		assert!(unpack_asf_image(&negative).is_err());
	}

	#[test_log::test]
	fn mp4_cover_formats() {
		let png = Mp4Cover::from_image(&Image::new(PNG.to_vec())).unwrap();
		assert_eq!(png.format, Mp4CoverFormat::Png);

		let jpeg = Mp4Cover::from_image(&Image::new(JPEG.to_vec())).unwrap();
		assert_eq!(jpeg.format, Mp4CoverFormat::Jpeg);

		let err = Mp4Cover::from_image(&Image::new(GIF.to_vec())).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::FileEncoding(_)));
	}
}
