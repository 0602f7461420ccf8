//! Image storage for every format family
//!
//! Each format embeds pictures differently, but all of them are exposed as lists of
//! [`Image`]s. Pictures that fail to decode are skipped with a warning, unless the
//! [`ParsingMode`](crate::config::ParsingMode) is `Strict`.

use super::raw_bytes;
use crate::config::global_options;
use crate::error::{ErrorKind, MediaFieldError, Result};
use crate::id3::{AttachedPictureFrame, Frame};
use crate::macros::{err, parse_mode_choice};
use crate::picture::{
	APE_PICTURE_KEYS, Image, ImageType, Mp4Cover, PictureBlock, pack_asf_image, unpack_asf_image,
};
use crate::store::{RawValue, TagStore};
use crate::util::text::TextEncoding;
use crate::value::Value;

use data_encoding::BASE64;

pub(super) const VORBIS_PICTURE_KEY: &str = "metadata_block_picture";
const VORBIS_LEGACY_COVER_KEY: &str = "coverart";
const VORBIS_LEGACY_MIME_KEY: &str = "coverartmime";

fn into_image(value: Value) -> Result<Image> {
	match value {
		Value::Image(image) => Ok(image),
		Value::Binary(data) => Ok(Image::new(data)),
		_ => err!(UnsupportedOperation(
			"image storage styles can only hold images"
		)),
	}
}

fn into_images(values: Vec<Value>) -> Result<Vec<Image>> {
	values.into_iter().map(into_image).collect()
}

// `Ok(None)` means the picture should be skipped
fn skip_malformed<T>(result: Result<T>, what: &str) -> Result<Option<T>> {
	match result {
		Ok(value) => Ok(Some(value)),
		Err(e) => {
			let parsing_mode = global_options().parsing_mode;
			parse_mode_choice!(
				parsing_mode,
				STRICT: Err(e),
				RELAXED: Ok(None),
				DEFAULT: {
					log::warn!("Skipping malformed {what}: {e}");
					Ok(None)
				}
			)
		},
	}
}

// ID3v2

pub(super) fn get_id3(store: &dyn TagStore) -> Vec<Value> {
	store
		.frames("APIC")
		.into_iter()
		.filter_map(|frame| match frame {
			Frame::Picture(picture) => Some(Value::Image(Image {
				data: picture.data.clone(),
				desc: Some(picture.description.clone()),
				pic_type: Some(ImageType::from_index(i64::from(picture.pic_type))),
			})),
			_ => None,
		})
		.collect()
}

pub(super) fn set_id3(store: &mut dyn TagStore, values: Vec<Value>) -> Result<()> {
	let frames = into_images(values)?
		.into_iter()
		.map(|image| {
			let description = image.desc.clone().unwrap_or_default();

			// iTunes only understands Latin-1 descriptions
			let encoding = if TextEncoding::verify_latin1(&description) {
				TextEncoding::Latin1
			} else {
				TextEncoding::UTF16
			};

			Frame::Picture(AttachedPictureFrame {
				encoding,
				mime_type: image.mime_str(),
				pic_type: image.type_index(),
				description,
				data: image.data,
			})
		})
		.collect();

	store.set_frames("APIC", frames)
}

// MP4

pub(super) fn get_mp4(store: &dyn TagStore, key: &str) -> Option<Vec<Value>> {
	let values = store.get(key)?;
	Some(
		values
			.iter()
			.filter_map(|raw| match raw {
				RawValue::Cover(cover) => Some(Value::Image(cover.to_image())),
				RawValue::Binary(data) => Some(Value::Image(Image::new(data.clone()))),
				_ => None,
			})
			.collect(),
	)
}

pub(super) fn set_mp4(store: &mut dyn TagStore, key: &str, values: Vec<Value>) -> Result<()> {
	let covers = into_images(values)?
		.iter()
		.map(|image| Mp4Cover::from_image(image).map(RawValue::Cover))
		.collect::<Result<Vec<_>>>()?;

	store.insert(key, covers)
}

// ASF

pub(super) fn get_asf(store: &dyn TagStore, key: &str) -> Result<Option<Vec<Value>>> {
	let Some(values) = store.get(key) else {
		return Ok(None);
	};

	let mut images = Vec::with_capacity(values.len());
	for raw in values {
		let Some(data) = raw_bytes(raw) else {
			continue;
		};

		if let Some(picture) = skip_malformed(unpack_asf_image(data), "WM/Picture")? {
			images.push(Value::Image(picture.into_image()));
		}
	}

	Ok(Some(images))
}

pub(super) fn set_asf(store: &mut dyn TagStore, key: &str, values: Vec<Value>) -> Result<()> {
	let packed = into_images(values)?
		.iter()
		.map(|image| {
			pack_asf_image(
				&image.mime_str(),
				&image.data,
				image.type_index(),
				image.desc.as_deref().unwrap_or_default(),
			)
			.map(RawValue::Binary)
		})
		.collect::<Result<Vec<_>>>()?;

	store.insert(key, packed)
}

// Vorbis comments

pub(super) fn get_vorbis(store: &dyn TagStore) -> Result<Vec<Value>> {
	let Some(blocks) = store.get(VORBIS_PICTURE_KEY) else {
		return get_vorbis_legacy(store);
	};

	let mut images = Vec::with_capacity(blocks.len());
	for raw in blocks {
		let Some(data) = raw_bytes(raw) else {
			continue;
		};

		let block = PictureBlock::from_flac_bytes(data, true);
		if let Some(block) = skip_malformed(block, "METADATA_BLOCK_PICTURE")? {
			images.push(Value::Image(block.to_image()));
		}
	}

	Ok(images)
}

fn get_vorbis_legacy(store: &dyn TagStore) -> Result<Vec<Value>> {
	let Some(covers) = store.get(VORBIS_LEGACY_COVER_KEY) else {
		return Ok(Vec::new());
	};

	log::debug!("No METADATA_BLOCK_PICTURE, reading {} legacy COVERART images", covers.len());

	let mut images = Vec::with_capacity(covers.len());
	for raw in covers {
		let Some(data) = raw_bytes(raw) else {
			continue;
		};

		let decoded = BASE64
			.decode(data)
			.map_err(|_| MediaFieldError::new(ErrorKind::NotAPicture));
		if let Some(decoded) = skip_malformed(decoded, "COVERART")? {
			images.push(Value::Image(Image::new(decoded)));
		}
	}

	Ok(images)
}

pub(super) fn set_vorbis(store: &mut dyn TagStore, values: Vec<Value>) -> Result<()> {
	let blocks = into_images(values)?
		.iter()
		.map(|image| {
			let encoded = PictureBlock::from_image(image).as_flac_bytes(true)?;
			Ok(RawValue::Text(String::from_utf8_lossy(&encoded).into_owned()))
		})
		.collect::<Result<Vec<_>>>()?;

	// Writing always drops the legacy fields
	store.remove(VORBIS_LEGACY_COVER_KEY)?;
	store.remove(VORBIS_LEGACY_MIME_KEY)?;

	store.insert(VORBIS_PICTURE_KEY, blocks)
}

// FLAC

pub(super) fn get_flac(store: &dyn TagStore) -> Vec<Value> {
	store
		.pictures()
		.iter()
		.map(|block| Value::Image(block.to_image()))
		.collect()
}

pub(super) fn set_flac(store: &mut dyn TagStore, values: Vec<Value>) -> Result<()> {
	let blocks = into_images(values)?
		.iter()
		.map(PictureBlock::from_image)
		.collect();

	store.set_pictures(blocks)
}

pub(super) fn delete_flac(store: &mut dyn TagStore) -> Result<()> {
	store.set_pictures(Vec::new())
}

// APEv2

pub(super) fn get_ape(store: &dyn TagStore) -> Result<Vec<Value>> {
	let mut images = Vec::new();
	for (pic_type, key) in ImageType::ALL.into_iter().zip(APE_PICTURE_KEYS) {
		let Some(data) = store.get_first(key).and_then(raw_bytes) else {
			continue;
		};

		let image = Image::from_ape_bytes(pic_type, data);
		if let Some(image) = skip_malformed(image, key)? {
			images.push(Value::Image(image));
		}
	}

	Ok(images)
}

// Only one image of each type survives
pub(super) fn set_ape(store: &mut dyn TagStore, values: Vec<Value>) -> Result<()> {
	let images = into_images(values)?;

	delete_ape(store)?;

	for image in images {
		let key = image.pic_type.unwrap_or(ImageType::Other).as_ape_key();
		store.insert_one(key, RawValue::Binary(image.as_ape_bytes()))?;
	}

	Ok(())
}

pub(super) fn delete_ape(store: &mut dyn TagStore) -> Result<()> {
	for key in APE_PICTURE_KEYS {
		store.remove(key)?;
	}

	Ok(())
}
