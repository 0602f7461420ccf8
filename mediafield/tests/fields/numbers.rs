use mediafield::catalog::{BPM, COMP, DISC, DISCTOTAL, TRACK, TRACKTOTAL};
use mediafield::error::ErrorKind;
use mediafield::field::ListMediaField;
use mediafield::prelude::*;
use mediafield::store::{FileFormat, MemoryStore, RawValue};
use mediafield::style::StorageStyle;

fn trck(store: &MemoryStore) -> Option<String> {
	let frames = store.frames("TRCK");
	frames.first()?.text()?.first().cloned()
}

#[test_log::test]
fn id3_slash_packed_track() {
	let mut store = MemoryStore::new(FileFormat::Mp3);

	TRACK.set(&mut store, Some(3)).unwrap();
	assert_eq!(trck(&store).as_deref(), Some("3"));

	TRACKTOTAL.set(&mut store, Some(12)).unwrap();
	assert_eq!(trck(&store).as_deref(), Some("3/12"));

	assert_eq!(TRACK.get(&store).unwrap(), Some(3));
	assert_eq!(TRACKTOTAL.get(&store).unwrap(), Some(12));

	// Deleting the total keeps the number
	TRACKTOTAL.delete(&mut store).unwrap();
	assert_eq!(trck(&store).as_deref(), Some("3"));
	assert_eq!(TRACKTOTAL.get(&store).unwrap(), None);

	// Deleting the number removes the frame
	TRACKTOTAL.set(&mut store, Some(12)).unwrap();
	TRACK.delete(&mut store).unwrap();
	assert!(store.frames("TRCK").is_empty());
}

#[test_log::test]
fn id3_total_without_number() {
	let mut store = MemoryStore::new(FileFormat::Mp3);

	DISCTOTAL.set(&mut store, Some(2)).unwrap();
	assert_eq!(DISC.get(&store).unwrap(), Some(0));
	assert_eq!(DISCTOTAL.get(&store).unwrap(), Some(2));
}

#[test_log::test]
fn mp4_tuple_track() {
	let mut store = MemoryStore::new(FileFormat::Mp4);

	TRACK.set(&mut store, Some(3)).unwrap();
	TRACKTOTAL.set(&mut store, Some(12)).unwrap();
	assert_eq!(store.get_first("trkn"), Some(&RawValue::Pair(3, 12)));

	TRACKTOTAL.delete(&mut store).unwrap();
	assert_eq!(store.get_first("trkn"), Some(&RawValue::Pair(3, 0)));
	assert_eq!(TRACKTOTAL.get(&store).unwrap(), None);

	TRACK.delete(&mut store).unwrap();
	assert!(store.get("trkn").is_none());
}

#[test_log::test]
fn lenient_number_parsing() {
	let mut store = MemoryStore::new(FileFormat::Flac);
	store.insert_one("TRACKNUMBER", RawValue::from("7/12")).unwrap();
	store.insert_one("BPM", RawValue::from("128.5")).unwrap();
	store.insert_one("DISC", RawValue::from("one")).unwrap();

	assert_eq!(TRACK.get(&store).unwrap(), Some(7));
	assert_eq!(BPM.get(&store).unwrap(), Some(128));
	assert_eq!(DISC.get(&store).unwrap(), Some(0));
}

#[test_log::test]
fn mp4_native_atoms() {
	let mut store = MemoryStore::new(FileFormat::Mp4);

	BPM.set(&mut store, Some(120)).unwrap();
	COMP.set(&mut store, Some(true)).unwrap();

	assert_eq!(store.get_first("tmpo"), Some(&RawValue::Integer(120)));
	assert_eq!(store.get_first("cpil"), Some(&RawValue::Bool(true)));
	assert_eq!(BPM.get(&store).unwrap(), Some(120));
	assert_eq!(COMP.get(&store).unwrap(), Some(true));
}

#[test_log::test]
fn mp4_bool_rejects_lists() {
	let field = ListMediaField::<bool>::new(vec![StorageStyle::mp4_bool("cpil")]);
	let mut store = MemoryStore::new(FileFormat::Mp4);

	let err = field.get(&store).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnsupportedOperation(_)));

	let err = field.set(&mut store, Some(vec![true])).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnsupportedOperation(_)));
	assert!(store.is_empty());
}

#[test_log::test]
fn asf_compilation_is_boolean() {
	let mut store = MemoryStore::new(FileFormat::Asf);
	COMP.set(&mut store, Some(true)).unwrap();

	assert_eq!(store.get_first("WM/IsCompilation"), Some(&RawValue::Bool(true)));
	assert_eq!(COMP.get(&store).unwrap(), Some(true));
}
