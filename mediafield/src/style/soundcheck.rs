// The halves of an iTunes SoundCheck value, shared by the ID3v2 and MP4 styles

use crate::coerce::FieldValue;
use crate::loudness::{sc_decode, sc_encode};
use crate::value::Value;

pub(super) fn get(data: Option<&[u8]>, index: usize) -> Option<Value> {
	let (gain, peak) = sc_decode(data?);
	match index {
		0 => Some(Value::Float(gain)),
		_ => Some(Value::Float(peak)),
	}
}

// Re-encodes `data` with the half at `index` replaced
pub(super) fn updated(data: Option<&[u8]>, index: usize, value: Value) -> String {
	let (mut gain, mut peak) = data.map_or((0.0, 0.0), sc_decode);

	let value = f64::from_value(value);
	match index {
		0 => gain = value,
		_ => peak = value,
	}

	sc_encode(gain, peak)
}

#[cfg(test)]
mod tests {
	use crate::id3::Frame;
	use crate::store::{FileFormat, MemoryStore, RawValue, TagStore};
	use crate::style::StorageStyle;
	use crate::value::Value;

	#[test_log::test]
	fn id3_soundcheck() {
		let mut store = MemoryStore::new(FileFormat::Mp3);
		let gain = StorageStyle::id3_soundcheck(0);
		let peak = StorageStyle::id3_soundcheck(1);

		assert_eq!(gain.get(&store).unwrap(), None);

		gain.set(&mut store, Value::Float(-6.5)).unwrap();
		peak.set(&mut store, Value::Float(0.5)).unwrap();

		let frames = store.frames("COMM");
		assert_eq!(frames.len(), 1);
		let Frame::Comment(comment) = frames[0] else {
			panic!("expected a comment frame")
		};
		assert_eq!(comment.description, "iTunNORM");
		assert_eq!(&comment.language, b"eng");

		assert_eq!(gain.get(&store).unwrap(), Some(Value::Float(-6.5)));
		assert_eq!(peak.get(&store).unwrap(), Some(Value::Float(0.5)));
	}

	#[test_log::test]
	fn mp4_soundcheck() {
		let mut store = MemoryStore::new(FileFormat::Mp4);
		let gain = StorageStyle::mp4_soundcheck(0);

		gain.set(&mut store, Value::Float(1.0)).unwrap();

		let Some(RawValue::Binary(data)) = store.get_first(StorageStyle::SOUNDCHECK_MP4_KEY) else {
			panic!("expected a binary atom")
		};
		assert!(data.starts_with(b" 0000031A 0000031A"));

		assert_eq!(gain.get(&store).unwrap(), Some(Value::Float(1.0)));
		assert_eq!(
			StorageStyle::mp4_soundcheck(1).get(&store).unwrap(),
			Some(Value::Float(0.0))
		);
	}

	#[test_log::test]
	fn malformed_soundcheck_is_zero() {
		let mut store = MemoryStore::new(FileFormat::Mp4);
		store
			.insert_one(StorageStyle::SOUNDCHECK_MP4_KEY, RawValue::from("garbage"))
			.unwrap();

		let gain = StorageStyle::mp4_soundcheck(0);
		assert_eq!(gain.get(&store).unwrap(), Some(Value::Float(0.0)));
	}
}
