use super::{Field, ListMediaField, image_list_field};
use crate::error::Result;
use crate::picture::{Image, ImageType};
use crate::store::TagStore;
use crate::style::StorageStyle;

/// Pick the image most likely to be the front cover
///
/// A lone image is always picked. Otherwise the first [`ImageType::CoverFront`] wins, falling back
/// to the first image.
///
/// # Examples
///
/// ```rust
/// use mediafield::field::guess_cover_image;
/// use mediafield::picture::{Image, ImageType};
///
/// let images = [
/// 	Image::new(vec![1]).with_type(ImageType::CoverBack),
/// 	Image::new(vec![2]).with_type(ImageType::CoverFront),
/// ];
///
/// assert_eq!(guess_cover_image(&images), Some(&images[1]));
/// ```
pub fn guess_cover_image(candidates: &[Image]) -> Option<&Image> {
	match candidates {
		[] => None,
		[only] => Some(only),
		_ => candidates
			.iter()
			.find(|image| image.pic_type == Some(ImageType::CoverFront))
			.or(candidates.first()),
	}
}

/// The raw data of the cover image
///
/// Writing replaces every image with a single untyped one, and writing `None` or empty data
/// removes them all.
#[derive(Clone, Debug)]
pub struct CoverArtField {
	images: ListMediaField<Image>,
}

impl CoverArtField {
	/// Create a field over every image style
	pub fn new() -> Self {
		Self {
			images: image_list_field(),
		}
	}
}

impl Default for CoverArtField {
	fn default() -> Self {
		Self::new()
	}
}

impl Field for CoverArtField {
	type Value = Vec<u8>;

	fn styles(&self) -> &[StorageStyle] {
		self.images.styles()
	}

	fn get(&self, store: &dyn TagStore) -> Result<Option<Vec<u8>>> {
		let images = self.images.get(store)?.unwrap_or_default();
		Ok(guess_cover_image(&images).map(|image| image.data.clone()))
	}

	fn set(&self, store: &mut dyn TagStore, value: Option<Vec<u8>>) -> Result<()> {
		let images = match value {
			Some(data) if !data.is_empty() => vec![Image::new(data)],
			_ => Vec::new(),
		};

		self.images.set(store, Some(images))
	}

	fn delete(&self, store: &mut dyn TagStore) -> Result<()> {
		self.images.delete(store)
	}
}
