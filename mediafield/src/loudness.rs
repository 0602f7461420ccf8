//! Loudness encodings: iTunes SoundCheck and fixed-point Q-numbers
//!
//! SoundCheck (the `iTunNORM` comment) stores ten 32-bit integers as space separated hex words.
//! Only four of them are understood: the RMS levels relative to 1000 and 2500 units (slots
//! 0-3) and the peak sample values (slots 6-7).

use data_encoding::HEXLOWER_PERMISSIVE;

// Rounds half to even at `places` decimal places
fn round_places(value: f64, places: i32) -> f64 {
	let scale = 10_f64.powi(places);
	(value * scale).round_ties_even() / scale
}

/// Decode a SoundCheck value to a ReplayGain style `(gain, peak)` pair
///
/// The gain is in dB, rounded to 2 places, and the peak is a ratio of full scale rounded to 6
/// places. Anything that is not exactly ten hex encoded words decodes to `(0.0, 0.0)`.
///
/// # Examples
///
/// ```rust
/// use mediafield::loudness::sc_decode;
///
/// assert_eq!(sc_decode(b"not soundcheck"), (0.0, 0.0));
/// ```
pub fn sc_decode(soundcheck: &[u8]) -> (f64, f64) {
	let hex = soundcheck
		.iter()
		.copied()
		.filter(|b| *b != b' ')
		.collect::<Vec<u8>>();

	let Ok(bytes) = HEXLOWER_PERMISSIVE.decode(&hex) else {
		log::debug!("SoundCheck value is not valid hex, ignoring");
		return (0.0, 0.0);
	};

	if bytes.len() != 40 {
		log::debug!("SoundCheck value has {} bytes, expected 40", bytes.len());
		return (0.0, 0.0);
	}

	let words = bytes
		.chunks_exact(4)
		.map(|word| i32::from_be_bytes([word[0], word[1], word[2], word[3]]))
		.collect::<Vec<i32>>();

	// The larger of the two levels is the most attenuation
	let max_gain = words[0].max(words[1]);
	let gain = if max_gain > 0 {
		(f64::from(max_gain) / 1000.0).log10() * -10.0
	} else {
		0.0
	};

	// Peaks are stored as 16 bit sample values
	let peak = f64::from(words[6].max(words[7])) / 32768.0;

	(round_places(gain, 2), round_places(peak, 6))
}

/// Encode a ReplayGain style `(gain, peak)` pair as a SoundCheck value
///
/// The levels saturate at roughly -18.2 dB and 30 dB.
///
/// # Examples
///
/// ```rust
/// use mediafield::loudness::{sc_decode, sc_encode};
///
/// let soundcheck = sc_encode(1.0, 1.0);
/// assert_eq!(sc_decode(soundcheck.as_bytes()), (1.0, 1.0));
/// ```
pub fn sc_encode(gain: f64, peak: f64) -> String {
	let level = |reference: f64| -> i64 {
		let level = (10_f64.powf(gain / -10.0) * reference)
			.round_ties_even()
			.min(65534.0) as i64;

		if level == 0 { 1 } else { level }
	};

	let g1 = level(1000.0);
	let g2 = level(2500.0);
	// Every word is eight hex digits
	let peak = ((peak * 32768.0) as i64).clamp(0, i64::from(i32::MAX));

	[g1, g1, g2, g2, 0, 0, peak, peak, 0, 0]
		.iter()
		.map(|word| format!(" {word:08X}"))
		.collect()
}

/// Encode a float as a Q-number with `fraction_bits` fractional bits
///
/// # Examples
///
/// ```rust
/// use mediafield::loudness::q_encode;
///
/// assert_eq!(q_encode(-2.5, 8), -640);
/// ```
pub fn q_encode(value: f64, fraction_bits: u32) -> i64 {
	(value * q_scale(fraction_bits)).round_ties_even() as i64
}

/// Decode a Q-number with `fraction_bits` fractional bits
pub fn q_decode(q_num: i64, fraction_bits: u32) -> f64 {
	q_num as f64 / q_scale(fraction_bits)
}

fn q_scale(fraction_bits: u32) -> f64 {
	2_f64.powi(fraction_bits as i32)
}
