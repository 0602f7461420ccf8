use super::StorageStyle;
use crate::error::Result;
use crate::id3::{Frame, Id3v2Version, KeyValueFrame, UniqueFileIdentifierFrame};
use crate::macros::err;
use crate::store::TagStore;
use crate::util::text::TextEncoding;
use crate::value::Value;

impl StorageStyle {
	fn cloned_frames(&self, store: &dyn TagStore) -> Vec<Frame> {
		store.frames(&self.key).into_iter().cloned().collect()
	}

	// T*** frames

	pub(super) fn get_id3_list(&self, store: &dyn TagStore) -> Vec<Value> {
		let frames = store.frames(&self.key);
		let Some(text) = frames.first().and_then(|frame| frame.text()) else {
			return Vec::new();
		};

		text.iter().map(|text| self.deserialize_text(text)).collect()
	}

	pub(super) fn store_id3_text(&self, store: &mut dyn TagStore, text: Vec<String>) -> Result<()> {
		let Some(frame) = Frame::with_text(&self.key, "", None, text) else {
			err!(UnsupportedOperation("frame ID cannot hold text"));
		};

		store.set_frames(&self.key, vec![frame])
	}

	// Frames selected by description

	pub(super) fn fetch_desc<'a>(
		&self,
		store: &'a dyn TagStore,
		description: &str,
	) -> Option<&'a str> {
		store
			.frames(&self.key)
			.into_iter()
			.find(|frame| frame.matches_description(description))
			.and_then(Frame::text)
			.and_then(<[String]>::first)
			.map(String::as_str)
	}

	pub(super) fn store_desc(
		&self,
		store: &mut dyn TagStore,
		description: &str,
		language: Option<[u8; 3]>,
		text: String,
	) -> Result<()> {
		let mut frames = self.cloned_frames(store);

		let mut found = false;
		for frame in frames
			.iter_mut()
			.filter(|frame| frame.matches_description(description))
		{
			frame.set_text(vec![text.clone()]);
			frame.set_encoding(TextEncoding::UTF8);
			found = true;
		}

		if found {
			return store.set_frames(&self.key, frames);
		}

		let Some(frame) = Frame::with_text(&self.key, description, language, vec![text]) else {
			err!(UnsupportedOperation("frame ID cannot hold text"));
		};

		store.add_frame(frame)
	}

	// Only the first matching frame goes
	pub(super) fn delete_desc(&self, store: &mut dyn TagStore, description: &str) -> Result<()> {
		let mut frames = self.cloned_frames(store);

		let Some(pos) = frames
			.iter()
			.position(|frame| frame.matches_description(description))
		else {
			return Ok(());
		};

		frames.remove(pos);
		store.set_frames(&self.key, frames)
	}

	pub(super) fn get_id3_desc_list(
		&self,
		store: &dyn TagStore,
		description: &str,
		split_v23: bool,
	) -> Vec<Value> {
		let frames = store.frames(&self.key);
		let Some(text) = frames
			.into_iter()
			.find(|frame| frame.matches_description(description))
			.and_then(Frame::text)
		else {
			return Vec::new();
		};

		if split_v23 && store.id3_version() == Some(Id3v2Version::V3) {
			return text
				.iter()
				.flat_map(|text| text.split('/'))
				.map(|text| self.deserialize_text(text))
				.collect();
		}

		text.iter().map(|text| self.deserialize_text(text)).collect()
	}

	pub(super) fn store_desc_list(
		&self,
		store: &mut dyn TagStore,
		description: &str,
		language: Option<[u8; 3]>,
		text: Vec<String>,
	) -> Result<()> {
		self.delete_desc(store, description)?;

		let Some(frame) = Frame::with_text(&self.key, description, language, text) else {
			err!(UnsupportedOperation("frame ID cannot hold text"));
		};

		store.add_frame(frame)
	}

	// Involved people

	pub(super) fn get_people(&self, store: &dyn TagStore, involvement: &str) -> Option<Value> {
		let involvement = involvement.to_lowercase();

		store.frames(&self.key).into_iter().find_map(|frame| {
			let Frame::KeyValue(frame) = frame else {
				return None;
			};

			frame
				.key_value_pairs
				.iter()
				.find(|(role, _)| role.to_lowercase() == involvement)
				.map(|(_, person)| self.deserialize_text(person))
		})
	}

	pub(super) fn set_people(
		&self,
		store: &mut dyn TagStore,
		involvement: &str,
		value: Value,
	) -> Result<()> {
		let person = self.serialize_text(value)?;
		let role = involvement.to_lowercase();

		let mut frames = self.cloned_frames(store);

		// Frames in other encodings are left untouched
		let mut found = false;
		for frame in &mut frames {
			let Frame::KeyValue(frame) = frame else {
				continue;
			};

			if frame.encoding != TextEncoding::UTF8 {
				continue;
			}

			for (_, existing) in frame
				.key_value_pairs
				.iter_mut()
				.filter(|(key, _)| key.to_lowercase() == role)
			{
				existing.clone_from(&person);
				found = true;
			}
		}

		if found {
			return store.set_frames(&self.key, frames);
		}

		store.add_frame(Frame::KeyValue(KeyValueFrame::new(
			&*self.key,
			TextEncoding::UTF8,
			vec![(involvement.to_owned(), person)],
		)))
	}

	// Slash packed pairs, ex. "3/12"

	fn fetch_slash_packed(&self, store: &dyn TagStore) -> Vec<Option<String>> {
		let frames = store.frames(&self.key);
		let text = frames
			.first()
			.and_then(|frame| frame.text())
			.and_then(<[String]>::first);

		let mut items = match text {
			Some(text) if !text.is_empty() => {
				text.split('/').map(|item| Some(item.to_owned())).collect()
			},
			_ => Vec::new(),
		};

		if items.len() < 2 {
			items.resize(2, None);
		}

		items
	}

	pub(super) fn get_slash_packed(&self, store: &dyn TagStore, pack_pos: usize) -> Option<Value> {
		self.fetch_slash_packed(store)
			.into_iter()
			.nth(pack_pos)
			.flatten()
			.map(Value::Text)
	}

	pub(super) fn set_slash_packed(
		&self,
		store: &mut dyn TagStore,
		pack_pos: usize,
		value: Option<String>,
	) -> Result<()> {
		let mut items = self.fetch_slash_packed(store);
		if items.len() <= pack_pos {
			items.resize(pack_pos + 1, None);
		}

		items[pack_pos] = value;

		if items[0].is_none() {
			items[0] = Some(String::new());
		}

		// No total, no slash
		if items[1].is_none() {
			items.pop();
		}

		let packed = items
			.into_iter()
			.map(Option::unwrap_or_default)
			.collect::<Vec<_>>()
			.join("/");

		self.store_id3_text(store, vec![packed])
	}

	// UFID

	pub(super) fn get_ufid(&self, store: &dyn TagStore, owner: &str) -> Option<Value> {
		store.frames(&self.key).into_iter().find_map(|frame| match frame {
			Frame::UniqueFileIdentifier(ufid) if ufid.owner == owner => {
				Some(Value::Binary(ufid.identifier.clone()))
			},
			_ => None,
		})
	}

	pub(super) fn set_ufid(&self, store: &mut dyn TagStore, owner: &str, value: Value) -> Result<()> {
		let identifier = self.serialize_text(value)?.into_bytes();

		let mut frames = self.cloned_frames(store);
		frames.retain(|frame| !is_owned_by(frame, owner));
		frames.push(Frame::UniqueFileIdentifier(UniqueFileIdentifierFrame::new(
			owner, identifier,
		)));

		store.set_frames(&self.key, frames)
	}

	pub(super) fn delete_ufid(&self, store: &mut dyn TagStore, owner: &str) -> Result<()> {
		let mut frames = self.cloned_frames(store);

		let before = frames.len();
		frames.retain(|frame| !is_owned_by(frame, owner));
		if frames.len() == before {
			return Ok(());
		}

		store.set_frames(&self.key, frames)
	}
}

fn is_owned_by(frame: &Frame, owner: &str) -> bool {
	matches!(frame, Frame::UniqueFileIdentifier(ufid) if ufid.owner == owner)
}
