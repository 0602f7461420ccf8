use crate::util::family_stores;

use mediafield::TextEncoding;
use mediafield::catalog::{ALBUMARTISTS, ALBUMTYPES, ARTISTS, CATALOGNUMS, GENRE, GENRES};
use mediafield::id3::{ExtendedTextFrame, Frame, Id3v2Version};
use mediafield::prelude::*;
use mediafield::store::{FileFormat, MemoryStore, RawValue};

fn strings(values: &[&str]) -> Vec<String> {
	values.iter().map(|value| (*value).to_owned()).collect()
}

#[test_log::test]
fn artists_every_family() {
	for mut store in family_stores() {
		let artists = strings(&["Foo artist", "Bar artist"]);

		ARTISTS.set(&mut store, Some(artists.clone())).unwrap();
		assert_eq!(ARTISTS.get(&store).unwrap(), Some(artists), "{}", store.format());

		ARTISTS.set(&mut store, None).unwrap();
		assert_eq!(ARTISTS.get(&store).unwrap(), None);
		assert!(store.is_empty());
	}
}

#[test_log::test]
fn single_field_uses_first_element() {
	for mut store in family_stores() {
		GENRES.set(&mut store, Some(strings(&["Rock", "Jazz"]))).unwrap();
		assert_eq!(GENRE.get(&store).unwrap().as_deref(), Some("Rock"));

		GENRE.set(&mut store, Some(String::from("Blues"))).unwrap();
		assert_eq!(GENRES.get(&store).unwrap(), Some(strings(&["Blues"])));
	}
}

#[test_log::test]
fn first_style_wins() {
	let mut store = MemoryStore::new(FileFormat::Flac);
	store
		.insert("ALBUM ARTISTS", vec![RawValue::from("Baz")])
		.unwrap();
	store
		.insert("ALBUMARTISTS", vec![RawValue::from("Foo"), RawValue::from("Bar")])
		.unwrap();

	assert_eq!(ALBUMARTISTS.get(&store).unwrap(), Some(strings(&["Foo", "Bar"])));
}

#[test_log::test]
fn writes_skip_read_only_styles() {
	let mut store = MemoryStore::new(FileFormat::Flac);
	store
		.insert("ALBUM ARTISTS", vec![RawValue::from("Baz")])
		.unwrap();

	assert_eq!(ALBUMARTISTS.get(&store).unwrap(), Some(strings(&["Baz"])));

	ALBUMARTISTS.set(&mut store, Some(strings(&["Foo"]))).unwrap();
	assert_eq!(store.get("ALBUMARTISTS"), Some(&[RawValue::from("Foo")][..]));
	assert_eq!(store.get("ALBUM_ARTISTS"), Some(&[RawValue::from("Foo")][..]));
	assert_eq!(store.get("ALBUM ARTISTS"), Some(&[RawValue::from("Baz")][..]));
}

#[test_log::test]
fn empty_elements_are_dropped() {
	let mut store = MemoryStore::new(FileFormat::ApeV2);
	store
		.insert(
			"CATALOGNUMBER",
			vec![RawValue::from("ABC-1"), RawValue::from(""), RawValue::from("ABC-2")],
		)
		.unwrap();

	assert_eq!(CATALOGNUMS.get(&store).unwrap(), Some(strings(&["ABC-1", "ABC-2"])));
}

fn album_type_frame(text: &str) -> Frame {
	Frame::UserText(ExtendedTextFrame::new(
		TextEncoding::UTF16,
		"MusicBrainz Album Type",
		vec![text.to_owned()],
	))
}

#[test_log::test]
fn id3v23_slash_separated() {
	let mut store = MemoryStore::new(FileFormat::Mp3).with_id3_version(Id3v2Version::V3);
	store.add_frame(album_type_frame("album/live")).unwrap();
	assert_eq!(ALBUMTYPES.get(&store).unwrap(), Some(strings(&["album", "live"])));

	let mut store = MemoryStore::new(FileFormat::Mp3);
	store.add_frame(album_type_frame("album/live")).unwrap();
	assert_eq!(ALBUMTYPES.get(&store).unwrap(), Some(strings(&["album/live"])));
}

#[test_log::test]
fn id3_multi_value_frames() {
	let mut store = MemoryStore::new(FileFormat::Mp3);
	ARTISTS
		.set(&mut store, Some(strings(&["Foo artist", "Bar artist"])))
		.unwrap();

	let frames = store.frames("TXXX");
	assert_eq!(frames.len(), 1);
	assert_eq!(frames[0].description(), Some("ARTISTS"));
	assert_eq!(frames[0].encoding(), Some(TextEncoding::UTF8));
	assert_eq!(
		frames[0].text(),
		Some(&strings(&["Foo artist", "Bar artist"])[..])
	);
}
