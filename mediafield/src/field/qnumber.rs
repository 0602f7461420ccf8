use super::{Field, MediaField};
use crate::error::Result;
use crate::loudness::{q_decode, q_encode};
use crate::store::TagStore;
use crate::style::StorageStyle;

/// A fixed point number stored as an integer
///
/// The value is scaled by `2^fraction_bits` and rounded before it is stored, as done for the
/// R128 gain tags of Opus files.
///
/// # Examples
///
/// ```rust
/// use mediafield::field::{Field, QNumberField};
/// use mediafield::store::{FileFormat, MemoryStore, RawValue, TagStore};
/// use mediafield::style::StorageStyle;
///
/// # fn main() -> mediafield::error::Result<()> {
/// let gain = QNumberField::new(8, vec![StorageStyle::plain("R128_TRACK_GAIN")]);
///
/// let mut store = MemoryStore::new(FileFormat::OggOpus);
/// gain.set(&mut store, Some(-7.25))?;
///
/// assert_eq!(store.get_first("R128_TRACK_GAIN"), Some(&RawValue::from("-1856")));
/// assert_eq!(gain.get(&store)?, Some(-7.25));
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct QNumberField {
	field: MediaField<i64>,
	fraction_bits: u32,
}

impl QNumberField {
	/// Create a field over `styles`
	pub fn new(fraction_bits: u32, styles: Vec<StorageStyle>) -> Self {
		Self {
			field: MediaField::new(styles),
			fraction_bits,
		}
	}

	/// The number of fractional bits
	pub fn fraction_bits(&self) -> u32 {
		self.fraction_bits
	}
}

impl Field for QNumberField {
	type Value = f64;

	fn styles(&self) -> &[StorageStyle] {
		self.field.styles()
	}

	fn get(&self, store: &dyn TagStore) -> Result<Option<f64>> {
		let q_num = self.field.get(store)?;
		Ok(q_num.map(|q_num| q_decode(q_num, self.fraction_bits)))
	}

	/// Write the value, `None` writes zero
	fn set(&self, store: &mut dyn TagStore, value: Option<f64>) -> Result<()> {
		let q_num = value.map(|value| q_encode(value, self.fraction_bits));
		self.field.set(store, q_num)
	}

	fn delete(&self, store: &mut dyn TagStore) -> Result<()> {
		self.field.delete(store)
	}
}
