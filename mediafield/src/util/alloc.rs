use crate::config::global_options;
use crate::error::Result;
use crate::macros::err;

/// Provides the `try_with_capacity` method on `Vec`
///
/// This can be used directly.
pub(crate) trait VecFallibleCapacity<T>: Sized {
	/// Same as `Vec::with_capacity`, but takes `GlobalOptions::allocation_limit` into account.
	///
	/// Named `try_with_capacity_stable` to avoid conflicts with the nightly `Vec::try_with_capacity`.
	fn try_with_capacity_stable(capacity: usize) -> Result<Self>;
}

impl<T> VecFallibleCapacity<T> for Vec<T> {
	fn try_with_capacity_stable(capacity: usize) -> Result<Self> {
		if capacity > global_options().allocation_limit {
			err!(TooMuchData);
		}

		let mut v = Vec::new();
		v.try_reserve(capacity)?;

		Ok(v)
	}
}

/// Copy a borrowed payload into an owned buffer, respecting the allocation limit
pub(crate) fn fallible_copy(bytes: &[u8]) -> Result<Vec<u8>> {
	let mut out = Vec::try_with_capacity_stable(bytes.len())?;
	out.extend_from_slice(bytes);
	Ok(out)
}
