use crate::util::family_stores;

use mediafield::catalog::{
	ARRANGER, BARCODE, COMMENTS, COMP, FIELD_NAMES, LYRICS, MB_TRACKID, RG_TRACK_GAIN, TITLE,
	TRACK, field_styles,
};
use mediafield::id3::{Frame, MUSICBRAINZ_UFID_OWNER};
use mediafield::prelude::*;
use mediafield::store::{FileFormat, MemoryStore, RawValue};

#[test_log::test]
fn title_every_family() {
	for mut store in family_stores() {
		assert_eq!(TITLE.get(&store).unwrap(), None);

		TITLE.set(&mut store, Some(String::from("Foo title"))).unwrap();
		assert_eq!(
			TITLE.get(&store).unwrap().as_deref(),
			Some("Foo title"),
			"{}",
			store.format()
		);

		TITLE.delete(&mut store).unwrap();
		assert_eq!(TITLE.get(&store).unwrap(), None);
		assert!(store.is_empty());
	}
}

#[test_log::test]
fn none_writes_zero() {
	for format in [FileFormat::Flac, FileFormat::Asf] {
		let mut store = MemoryStore::new(format);

		TITLE.set(&mut store, None).unwrap();
		TRACK.set(&mut store, None).unwrap();
		COMP.set(&mut store, None).unwrap();
		RG_TRACK_GAIN.set(&mut store, None).unwrap();

		assert_eq!(TITLE.get(&store).unwrap(), Some(String::new()));
		assert_eq!(TRACK.get(&store).unwrap(), Some(0));
		assert_eq!(COMP.get(&store).unwrap(), Some(false));
		assert_eq!(
			RG_TRACK_GAIN.get(&store).unwrap().map(f64::to_bits),
			Some(0.0_f64.to_bits())
		);
	}
}

#[test_log::test]
fn deleting_absent_values() {
	for mut store in family_stores() {
		for name in FIELD_NAMES {
			for style in field_styles(name).unwrap() {
				if style.applies_to(store.format()) {
					style.delete(&mut store).unwrap();
				}
			}
		}

		assert!(store.is_empty());
	}
}

#[test_log::test]
fn read_only_aliases() {
	let mut store = MemoryStore::new(FileFormat::Flac);
	store.insert_one("UPC", RawValue::from("0123456789")).unwrap();

	assert_eq!(BARCODE.get(&store).unwrap().as_deref(), Some("0123456789"));

	BARCODE.set(&mut store, Some(String::from("9876543210"))).unwrap();
	assert_eq!(store.get_first("BARCODE"), Some(&RawValue::from("9876543210")));
	assert_eq!(store.get_first("UPC"), Some(&RawValue::from("0123456789")));
	assert_eq!(BARCODE.get(&store).unwrap().as_deref(), Some("9876543210"));
}

#[test_log::test]
fn every_redundant_style_is_written() {
	let mut store = MemoryStore::new(FileFormat::Asf);
	COMMENTS.set(&mut store, Some(String::from("Foo comment"))).unwrap();

	assert_eq!(store.get_first("WM/Comments"), Some(&RawValue::from("Foo comment")));
	assert_eq!(store.get_first("Description"), Some(&RawValue::from("Foo comment")));
}

#[test_log::test]
fn id3_comments_and_lyrics() {
	let mut store = MemoryStore::new(FileFormat::Mp3);
	COMMENTS.set(&mut store, Some(String::from("Foo comment"))).unwrap();
	LYRICS.set(&mut store, Some(String::from("Foo lyrics"))).unwrap();

	assert_eq!(store.frames("COMM").len(), 1);
	assert_eq!(store.frames("USLT").len(), 1);
	assert_eq!(COMMENTS.get(&store).unwrap().as_deref(), Some("Foo comment"));
	assert_eq!(LYRICS.get(&store).unwrap().as_deref(), Some("Foo lyrics"));

	// Rewriting updates the existing frame
	COMMENTS.set(&mut store, Some(String::from("Bar comment"))).unwrap();
	assert_eq!(store.frames("COMM").len(), 1);
	assert_eq!(COMMENTS.get(&store).unwrap().as_deref(), Some("Bar comment"));
}

#[test_log::test]
fn arranger_in_involved_people() {
	let mut store = MemoryStore::new(FileFormat::Mp3);
	ARRANGER.set(&mut store, Some(String::from("Foo arranger"))).unwrap();

	let frames = store.frames("TIPL");
	assert_eq!(frames.len(), 1);

	let Frame::KeyValue(people) = frames[0] else {
		panic!("expected a key value frame")
	};
	assert_eq!(
		people.key_value_pairs,
		vec![(String::from("arranger"), String::from("Foo arranger"))]
	);

	assert_eq!(ARRANGER.get(&store).unwrap().as_deref(), Some("Foo arranger"));
}

#[test_log::test]
fn musicbrainz_track_id_in_ufid() {
	let id = "f3c7e6c4-9f14-4c8a-8d4b-3f1e6a3c0b5e";

	let mut store = MemoryStore::new(FileFormat::Mp3);
	MB_TRACKID.set(&mut store, Some(String::from(id))).unwrap();

	let frames = store.frames("UFID");
	assert_eq!(frames.len(), 1);

	let Frame::UniqueFileIdentifier(ufid) = frames[0] else {
		panic!("expected a UFID frame")
	};
	assert_eq!(ufid.owner, MUSICBRAINZ_UFID_OWNER);
	assert_eq!(ufid.identifier, id.as_bytes());

	assert_eq!(MB_TRACKID.get(&store).unwrap().as_deref(), Some(id));
}
