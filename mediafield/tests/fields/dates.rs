use mediafield::catalog::{DATE, DAY, MONTH, ORIGINAL_DATE, ORIGINAL_YEAR, YEAR};
use mediafield::field::Date;
use mediafield::prelude::*;
use mediafield::store::{FileFormat, MemoryStore, RawValue};

fn tuple(store: &MemoryStore) -> [Option<i64>; 3] {
	[
		YEAR.get(store).unwrap(),
		MONTH.get(store).unwrap(),
		DAY.get(store).unwrap(),
	]
}

#[test_log::test]
fn year_only() {
	for mut store in crate::util::family_stores() {
		YEAR.set(&mut store, Some(2013)).unwrap();
		assert_eq!(tuple(&store), [Some(2013), None, None], "{}", store.format());
	}
}

#[test_log::test]
fn full_date() {
	for mut store in crate::util::family_stores() {
		YEAR.set(&mut store, Some(2013)).unwrap();
		MONTH.set(&mut store, Some(9)).unwrap();
		DAY.set(&mut store, Some(4)).unwrap();

		assert_eq!(tuple(&store), [Some(2013), Some(9), Some(4)]);
		assert_eq!(DATE.get(&store).unwrap(), Date::new(2013, 9, 4));
	}
}

#[test_log::test]
fn clearing_the_date() {
	for mut store in crate::util::family_stores() {
		DATE.set(&mut store, Date::new(2013, 9, 4)).unwrap();
		DATE.set(&mut store, None).unwrap();

		assert_eq!(tuple(&store), [None, None, None]);
		assert_eq!(DATE.get(&store).unwrap(), None);
		assert!(store.is_empty());
	}
}

#[test_log::test]
fn vorbis_year_mirror() {
	let mut store = MemoryStore::new(FileFormat::Flac);
	DATE.set(&mut store, Date::new(1999, 12, 31)).unwrap();

	assert_eq!(store.get_first("DATE"), Some(&RawValue::from("1999-12-31")));
	assert_eq!(store.get_first("YEAR"), Some(&RawValue::from("1999")));

	// The date is preferred over the mirror
	store.insert_one("YEAR", RawValue::from("2001")).unwrap();
	assert_eq!(YEAR.get(&store).unwrap(), Some(1999));

	// Without a date, the mirror is used
	store.remove("DATE").unwrap();
	assert_eq!(YEAR.get(&store).unwrap(), Some(2001));
	assert_eq!(MONTH.get(&store).unwrap(), None);
}

#[test_log::test]
fn lenient_date_parsing() {
	let mut store = MemoryStore::new(FileFormat::OggVorbis);

	store.insert_one("DATE", RawValue::from("2013-09-04T12:34:56")).unwrap();
	assert_eq!(tuple(&store), [Some(2013), Some(9), Some(4)]);

	store.insert_one("DATE", RawValue::from("2013/09")).unwrap();
	assert_eq!(tuple(&store), [Some(2013), Some(9), None]);

	store.insert_one("DATE", RawValue::from("2013-xx-04")).unwrap();
	assert_eq!(tuple(&store), [Some(2013), None, Some(4)]);
	assert_eq!(DATE.get(&store).unwrap(), Date::new(2013, 1, 4));
}

#[test_log::test]
fn impossible_dates_are_absent() {
	let mut store = MemoryStore::new(FileFormat::Flac);

	store.insert_one("DATE", RawValue::from("2013-13-01")).unwrap();
	assert_eq!(DATE.get(&store).unwrap(), None);
	assert_eq!(MONTH.get(&store).unwrap(), Some(13));

	store.insert_one("DATE", RawValue::from("2023-02-29")).unwrap();
	assert_eq!(DATE.get(&store).unwrap(), None);

	store.insert_one("DATE", RawValue::from("2024-02-29")).unwrap();
	assert_eq!(DATE.get(&store).unwrap(), Date::new(2024, 2, 29));
}

#[test_log::test]
fn day_needs_month() {
	let mut store = MemoryStore::new(FileFormat::Asf);

	YEAR.set(&mut store, Some(2013)).unwrap();
	DAY.set(&mut store, Some(4)).unwrap();

	assert_eq!(store.get_first("WM/Year"), Some(&RawValue::from("2013")));
	assert_eq!(tuple(&store), [Some(2013), None, None]);
}

#[test_log::test]
fn original_date_is_separate() {
	let mut store = MemoryStore::new(FileFormat::Mp3);

	DATE.set(&mut store, Date::new(2013, 9, 4)).unwrap();
	ORIGINAL_YEAR.set(&mut store, Some(1971)).unwrap();

	assert_eq!(store.frames("TDRC").len(), 1);
	assert_eq!(store.frames("TDOR").len(), 1);
	assert_eq!(ORIGINAL_DATE.get(&store).unwrap(), Date::new(1971, 1, 1));
	assert_eq!(YEAR.get(&store).unwrap(), Some(2013));
}
