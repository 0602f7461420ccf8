use crate::util::assert_close;

use mediafield::TextEncoding;
use mediafield::catalog::{R128_TRACK_GAIN, RG_ALBUM_GAIN, RG_TRACK_GAIN, RG_TRACK_PEAK};
use mediafield::id3::{CommentFrame, Frame};
use mediafield::loudness::{sc_decode, sc_encode};
use mediafield::prelude::*;
use mediafield::store::{FileFormat, MemoryStore, RawValue};

fn soundcheck_comment(store: &MemoryStore) -> Option<String> {
	store
		.frames("COMM")
		.into_iter()
		.find(|frame| frame.description() == Some("iTunNORM"))
		.and_then(Frame::text)
		.and_then(<[String]>::first)
		.cloned()
}

#[test_log::test]
fn id3_soundcheck_fallback() {
	let mut store = MemoryStore::new(FileFormat::Mp3);
	store
		.add_frame(Frame::Comment(CommentFrame::comment(
			TextEncoding::UTF8,
			*b"eng",
			"iTunNORM",
			vec![sc_encode(-6.2, 0.5)],
		)))
		.unwrap();

	assert_close(RG_TRACK_GAIN.get(&store).unwrap().unwrap(), -6.2, 2);
	assert_close(RG_TRACK_PEAK.get(&store).unwrap().unwrap(), 0.5, 6);

	// Album gain has no SoundCheck mapping
	assert_eq!(RG_ALBUM_GAIN.get(&store).unwrap(), None);
}

#[test_log::test]
fn id3_replaygain_preferred() {
	let mut store = MemoryStore::new(FileFormat::Mp3);

	RG_TRACK_GAIN.set(&mut store, Some(-6.2)).unwrap();
	RG_TRACK_PEAK.set(&mut store, Some(0.25)).unwrap();

	let txxx = store.frames("TXXX");
	assert_eq!(txxx.len(), 2);
	assert_eq!(txxx[0].description(), Some("REPLAYGAIN_TRACK_GAIN"));
	assert_eq!(txxx[0].text(), Some(&[String::from("-6.20 dB")][..]));
	assert_eq!(txxx[1].text(), Some(&[String::from("0.250000")][..]));

	// Both halves share one comment
	let (gain, peak) = sc_decode(soundcheck_comment(&store).unwrap().as_bytes());
	assert_close(gain, -6.2, 2);
	assert_close(peak, 0.25, 6);

	assert_close(RG_TRACK_GAIN.get(&store).unwrap().unwrap(), -6.2, 2);
	assert_close(RG_TRACK_PEAK.get(&store).unwrap().unwrap(), 0.25, 6);
}

#[test_log::test]
fn mp4_soundcheck() {
	let mut store = MemoryStore::new(FileFormat::Mp4);
	store
		.insert_one(
			"----:com.apple.iTunes:iTunNORM",
			RawValue::Binary(sc_encode(-3.5, 0.75).into_bytes()),
		)
		.unwrap();

	assert_close(RG_TRACK_GAIN.get(&store).unwrap().unwrap(), -3.5, 2);
	assert_close(RG_TRACK_PEAK.get(&store).unwrap().unwrap(), 0.75, 6);

	RG_TRACK_GAIN.set(&mut store, Some(1.25)).unwrap();
	assert_eq!(
		store.get_first("----:com.apple.iTunes:replaygain_track_gain"),
		Some(&RawValue::Binary(b"1.25 dB".to_vec()))
	);

	let Some(RawValue::Binary(soundcheck)) = store.get_first("----:com.apple.iTunes:iTunNORM")
	else {
		panic!("expected a binary SoundCheck atom")
	};
	let (gain, peak) = sc_decode(soundcheck);
	assert_close(gain, 1.25, 2);
	assert_close(peak, 0.75, 6);
}

#[test_log::test]
fn malformed_soundcheck_reads_zero() {
	let mut store = MemoryStore::new(FileFormat::Mp4);
	store
		.insert_one("----:com.apple.iTunes:iTunNORM", RawValue::from("foo"))
		.unwrap();

	assert_eq!(
		RG_TRACK_GAIN.get(&store).unwrap().map(f64::to_bits),
		Some(0.0_f64.to_bits())
	);
}

#[test_log::test]
fn vorbis_gain_suffix() {
	let mut store = MemoryStore::new(FileFormat::OggVorbis);
	store
		.insert_one("REPLAYGAIN_TRACK_GAIN", RawValue::from("-7.89 dB"))
		.unwrap();

	assert_close(RG_TRACK_GAIN.get(&store).unwrap().unwrap(), -7.89, 2);

	RG_TRACK_GAIN.set(&mut store, Some(2.0)).unwrap();
	assert_eq!(
		store.get_first("REPLAYGAIN_TRACK_GAIN"),
		Some(&RawValue::from("2.00 dB"))
	);
}

#[test_log::test]
fn r128_q_numbers() {
	let mut store = MemoryStore::new(FileFormat::OggOpus);

	R128_TRACK_GAIN.set(&mut store, Some(-7.25)).unwrap();
	assert_eq!(store.get_first("R128_TRACK_GAIN"), Some(&RawValue::from("-1856")));
	assert_eq!(
		R128_TRACK_GAIN.get(&store).unwrap().map(f64::to_bits),
		Some((-7.25_f64).to_bits())
	);

	let mut store = MemoryStore::new(FileFormat::Mp4);
	R128_TRACK_GAIN.set(&mut store, Some(3.5)).unwrap();
	assert_eq!(
		R128_TRACK_GAIN.get(&store).unwrap().map(f64::to_bits),
		Some(3.5_f64.to_bits())
	);
}
