/// The parsing strictness mode
///
/// This decides what happens when a storage style meets a binary payload it cannot decode, such
/// as a corrupt FLAC picture block or a truncated ASF picture record.
///
/// # Examples
///
/// ```rust
/// use mediafield::config::{GlobalOptions, ParsingMode, apply_global_options};
///
/// // Surface every malformed picture as an error
/// let global_options = GlobalOptions::new().parsing_mode(ParsingMode::Strict);
/// apply_global_options(global_options);
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * Undecodable picture payload - The read fails with the decoding error
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// ## Examples of behavior
	///
	/// * Undecodable picture payload - The picture is skipped and a warning is logged
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// ## Examples of behavior
	///
	/// * Undecodable picture payload - The picture is skipped silently
	Relaxed,
}
