use std::fmt::{Display, Formatter};

/// The container format of the file backing a [`TagStore`](super::TagStore)
///
/// Storage styles declare which formats they apply to, and a field only consults the styles
/// matching the store's format.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum FileFormat {
	/// MPEG audio with ID3v2 tags
	Mp3,
	/// AIFF with an ID3v2 chunk
	Aiff,
	/// DSD stream file with ID3v2 tags
	Dsf,
	/// RIFF WAVE with an ID3v2 chunk
	Wave,
	/// MPEG-4 audio with iTunes-style atoms
	Mp4,
	/// Windows Media / ASF
	Asf,
	/// Native FLAC with Vorbis comments and picture blocks
	Flac,
	/// Opus in Ogg
	OggOpus,
	/// Theora in Ogg
	OggTheora,
	/// Speex in Ogg
	OggSpeex,
	/// Vorbis in Ogg
	OggVorbis,
	/// FLAC in Ogg
	OggFlac,
	/// Any file carrying a bare APEv2 tag
	ApeV2,
	/// WavPack with APEv2 tags
	WavPack,
	/// Musepack with APEv2 tags
	Musepack,
	/// Monkey's Audio with APEv2 tags
	MonkeysAudio,
	/// OptimFROG with APEv2 tags
	OptimFrog,
}

impl FileFormat {
	/// Every known format
	pub const ALL: [FileFormat; 17] = [
		FileFormat::Mp3,
		FileFormat::Aiff,
		FileFormat::Dsf,
		FileFormat::Wave,
		FileFormat::Mp4,
		FileFormat::Asf,
		FileFormat::Flac,
		FileFormat::OggOpus,
		FileFormat::OggTheora,
		FileFormat::OggSpeex,
		FileFormat::OggVorbis,
		FileFormat::OggFlac,
		FileFormat::ApeV2,
		FileFormat::WavPack,
		FileFormat::Musepack,
		FileFormat::MonkeysAudio,
		FileFormat::OptimFrog,
	];

	/// Formats tagged with ID3v2
	pub const ID3: [FileFormat; 4] = [
		FileFormat::Mp3,
		FileFormat::Aiff,
		FileFormat::Dsf,
		FileFormat::Wave,
	];

	/// Formats tagged with free-form Vorbis comments or APEv2 items
	///
	/// NOTE: OptimFROG only participates in image storage, it has no plain text mapping.
	pub const PLAIN: [FileFormat; 10] = [
		FileFormat::Flac,
		FileFormat::OggOpus,
		FileFormat::OggTheora,
		FileFormat::OggSpeex,
		FileFormat::OggVorbis,
		FileFormat::OggFlac,
		FileFormat::ApeV2,
		FileFormat::WavPack,
		FileFormat::Musepack,
		FileFormat::MonkeysAudio,
	];

	/// Ogg formats storing pictures as base64 `METADATA_BLOCK_PICTURE` comments
	pub const VORBIS_PICTURES: [FileFormat; 5] = [
		FileFormat::OggOpus,
		FileFormat::OggTheora,
		FileFormat::OggSpeex,
		FileFormat::OggVorbis,
		FileFormat::OggFlac,
	];

	/// Formats storing pictures as APEv2 binary items
	pub const APE_PICTURES: [FileFormat; 5] = [
		FileFormat::ApeV2,
		FileFormat::WavPack,
		FileFormat::Musepack,
		FileFormat::MonkeysAudio,
		FileFormat::OptimFrog,
	];

	/// Get a `FileFormat` from the tag library's type name
	///
	/// The names match the file classes of the common tagging libraries, ex. `"MP3"`,
	/// `"OggVorbis"`, or `"APEv2File"`.
	///
	/// # Examples
	///
	/// ```rust
	/// use mediafield::store::FileFormat;
	///
	/// assert_eq!(FileFormat::from_type_name("OggVorbis"), Some(FileFormat::OggVorbis));
	/// assert_eq!(FileFormat::from_type_name("APEv2File"), Some(FileFormat::ApeV2));
	/// assert_eq!(FileFormat::from_type_name("Xyz"), None);
	/// ```
	pub fn from_type_name(name: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|format| format.type_name() == name)
	}

	/// The tag library's type name for this format
	pub fn type_name(self) -> &'static str {
		match self {
			FileFormat::Mp3 => "MP3",
			FileFormat::Aiff => "AIFF",
			FileFormat::Dsf => "DSF",
			FileFormat::Wave => "WAVE",
			FileFormat::Mp4 => "MP4",
			FileFormat::Asf => "ASF",
			FileFormat::Flac => "FLAC",
			FileFormat::OggOpus => "OggOpus",
			FileFormat::OggTheora => "OggTheora",
			FileFormat::OggSpeex => "OggSpeex",
			FileFormat::OggVorbis => "OggVorbis",
			FileFormat::OggFlac => "OggFlac",
			FileFormat::ApeV2 => "APEv2File",
			FileFormat::WavPack => "WavPack",
			FileFormat::Musepack => "Musepack",
			FileFormat::MonkeysAudio => "MonkeysAudio",
			FileFormat::OptimFrog => "OptimFROG",
		}
	}

	/// Whether the format is tagged with ID3v2
	pub fn is_id3(self) -> bool {
		Self::ID3.contains(&self)
	}

	/// Whether item keys compare case-insensitively
	///
	/// This is the case for Vorbis comments and APEv2 items.
	pub fn case_insensitive_keys(self) -> bool {
		Self::PLAIN.contains(&self) || self == FileFormat::OptimFrog
	}
}

impl Display for FileFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.type_name())
	}
}
