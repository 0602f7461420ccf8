use super::ParsingMode;

use std::cell::Cell;

thread_local! {
	static GLOBAL_OPTIONS: Cell<GlobalOptions> = const { Cell::new(GlobalOptions::new()) };
}

pub(crate) fn global_options() -> GlobalOptions {
	GLOBAL_OPTIONS.with(Cell::get)
}

/// Options that control all interactions with mediafield for the current thread
///
/// # Examples
///
/// ```rust
/// use mediafield::config::{GlobalOptions, apply_global_options};
///
/// // I want to double the allocation limit
/// let global_options =
/// 	GlobalOptions::new().allocation_limit(GlobalOptions::DEFAULT_ALLOCATION_LIMIT * 2);
/// apply_global_options(global_options);
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
#[non_exhaustive]
pub struct GlobalOptions {
	pub(crate) allocation_limit: usize,
	pub(crate) parsing_mode: ParsingMode,
}

impl GlobalOptions {
	/// Default allocation limit for any single picture payload
	pub const DEFAULT_ALLOCATION_LIMIT: usize = 16 * 1024 * 1024;

	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `GlobalOptions`, alias for `Default` implementation
	///
	/// See also: [`GlobalOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::config::GlobalOptions;
	///
	/// let global_options = GlobalOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			allocation_limit: Self::DEFAULT_ALLOCATION_LIMIT,
			parsing_mode: Self::DEFAULT_PARSING_MODE,
		}
	}

	/// The maximum number of bytes to allocate for any single decoded picture
	///
	/// If a payload claims to exceed this limit, decoding will return
	/// [`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData).
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::config::{GlobalOptions, apply_global_options};
	///
	/// // I have files with gigantic images, I'll double the allocation limit!
	/// let global_options =
	/// 	GlobalOptions::new().allocation_limit(GlobalOptions::DEFAULT_ALLOCATION_LIMIT * 2);
	/// apply_global_options(global_options);
	/// ```
	pub fn allocation_limit(&mut self, allocation_limit: usize) -> Self {
		self.allocation_limit = allocation_limit;
		*self
	}

	/// The parsing mode to use when decoding picture payloads
	///
	/// See [`ParsingMode`] for a description of the modes.
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::config::{GlobalOptions, ParsingMode, apply_global_options};
	///
	/// let global_options = GlobalOptions::new().parsing_mode(ParsingMode::Relaxed);
	/// apply_global_options(global_options);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}
}

impl Default for GlobalOptions {
	/// The default implementation for `GlobalOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// GlobalOptions {
	/// 	allocation_limit: Self::DEFAULT_ALLOCATION_LIMIT,
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

/// Applies the given `GlobalOptions` to the current thread
///
/// # Examples
///
/// ```rust
/// use mediafield::config::{GlobalOptions, apply_global_options};
///
/// let global_options = GlobalOptions::new().allocation_limit(1024 * 1024);
/// apply_global_options(global_options);
/// ```
pub fn apply_global_options(options: GlobalOptions) {
	GLOBAL_OPTIONS.with(|global_options| global_options.set(options));
}
