#![allow(missing_docs)]

mod catalog;
mod dates;
mod images;
mod lists;
mod loudness;
mod numbers;
mod scalars;
pub(crate) mod util;
