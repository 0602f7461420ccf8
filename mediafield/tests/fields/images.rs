use crate::util::{GIF, JPEG, PNG, family_stores};

use mediafield::catalog::{ART, IMAGES};
use mediafield::config::{GlobalOptions, ParsingMode, apply_global_options};
use mediafield::error::ErrorKind;
use mediafield::picture::{Image, ImageType, pack_asf_image};
use mediafield::prelude::*;
use mediafield::store::{FileFormat, MemoryStore, RawValue};

use data_encoding::BASE64;

fn images() -> Vec<Image> {
	vec![
		Image::new(PNG.to_vec())
			.with_desc("Front cover")
			.with_type(ImageType::CoverFront),
		Image::new(JPEG.to_vec())
			.with_desc("Back cover")
			.with_type(ImageType::CoverBack),
	]
}

#[test_log::test]
fn image_list_every_family() {
	for format in [
		FileFormat::Mp3,
		FileFormat::Asf,
		FileFormat::Flac,
		FileFormat::OggVorbis,
		FileFormat::WavPack,
		FileFormat::OptimFrog,
	] {
		let mut store = MemoryStore::new(format);

		IMAGES.set(&mut store, Some(images())).unwrap();
		assert_eq!(IMAGES.get(&store).unwrap(), Some(images()), "{format}");

		IMAGES.delete(&mut store).unwrap();
		assert_eq!(IMAGES.get(&store).unwrap(), None, "{format}");
		assert!(store.is_empty(), "{format}");
	}
}

#[test_log::test]
fn mp4_covers_are_untyped() {
	let mut store = MemoryStore::new(FileFormat::Mp4);
	IMAGES.set(&mut store, Some(images())).unwrap();

	assert_eq!(
		IMAGES.get(&store).unwrap(),
		Some(vec![Image::new(PNG.to_vec()), Image::new(JPEG.to_vec())])
	);
}

#[test_log::test]
fn mp4_rejects_gif() {
	let mut store = MemoryStore::new(FileFormat::Mp4);

	let err = ART.set(&mut store, Some(GIF.to_vec())).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::FileEncoding(_)));
	assert!(store.is_empty());

	// Other containers take anything
	let mut store = MemoryStore::new(FileFormat::Mp3);
	ART.set(&mut store, Some(GIF.to_vec())).unwrap();
	assert_eq!(ART.get(&store).unwrap().as_deref(), Some(GIF));
}

#[test_log::test]
fn art_prefers_front_cover() {
	let mut store = MemoryStore::new(FileFormat::Flac);

	let mut images = images();
	images.reverse();
	IMAGES.set(&mut store, Some(images)).unwrap();

	assert_eq!(ART.get(&store).unwrap().as_deref(), Some(PNG));
}

#[test_log::test]
fn art_replaces_every_image() {
	for mut store in family_stores() {
		IMAGES.set(&mut store, Some(images())).unwrap();
		ART.set(&mut store, Some(JPEG.to_vec())).unwrap();

		let images = IMAGES.get(&store).unwrap().unwrap();
		assert_eq!(images.len(), 1, "{}", store.format());
		assert_eq!(images[0].data, JPEG);

		ART.set(&mut store, None).unwrap();
		assert_eq!(ART.get(&store).unwrap(), None);
	}
}

#[test_log::test]
fn vorbis_legacy_cover() {
	let mut store = MemoryStore::new(FileFormat::OggVorbis);
	store
		.insert_one("COVERART", RawValue::from(BASE64.encode(JPEG)))
		.unwrap();
	store
		.insert_one("COVERARTMIME", RawValue::from("image/jpeg"))
		.unwrap();

	assert_eq!(IMAGES.get(&store).unwrap(), Some(vec![Image::new(JPEG.to_vec())]));

	// Writing drops the legacy comments
	IMAGES.set(&mut store, Some(images())).unwrap();
	assert!(!store.contains_key("coverart"));
	assert!(!store.contains_key("coverartmime"));
	assert!(store.contains_key("METADATA_BLOCK_PICTURE"));
}

#[test_log::test]
fn malformed_asf_pictures_follow_parsing_mode() {
	let mut store = MemoryStore::new(FileFormat::Asf);
	let valid = pack_asf_image("image/png", PNG, 3, "Front cover").unwrap();
	store
		.insert(
			"WM/Picture",
			vec![RawValue::Binary(vec![3, 0xFF, 0xFF]), RawValue::Binary(valid)],
		)
		.unwrap();

	// The default skips the broken picture
	let images = IMAGES.get(&store).unwrap().unwrap();
	assert_eq!(images.len(), 1);
	assert_eq!(images[0].pic_type, Some(ImageType::CoverFront));

	apply_global_options(GlobalOptions::new().parsing_mode(ParsingMode::Strict));
	let err = IMAGES.get(&store).unwrap_err();
	apply_global_options(GlobalOptions::new());

	assert!(matches!(err.kind(), ErrorKind::FileDecoding(_)));
}
