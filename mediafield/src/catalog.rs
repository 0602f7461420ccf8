//! The standard fields
//!
//! Every field here is a lazily built static, shared by all stores. The keys follow the
//! conventions of MusicBrainz Picard and iTunes, with a few read-only aliases for tags written
//! under other names by other software.
//!
//! # Examples
//!
//! ```rust
//! use mediafield::catalog::{TRACK, TRACKTOTAL};
//! use mediafield::field::Field;
//! use mediafield::store::{FileFormat, MemoryStore, TagStore};
//!
//! # fn main() -> mediafield::error::Result<()> {
//! let mut store = MemoryStore::new(FileFormat::Mp3);
//! TRACK.set(&mut store, Some(3))?;
//! TRACKTOTAL.set(&mut store, Some(12))?;
//!
//! assert_eq!(store.frames("TRCK")[0].text(), Some(&[String::from("3/12")][..]));
//! # Ok(()) }
//! ```

use crate::field::{
	CoverArtField, DateField, DateItemField, Field, ListMediaField, MediaField, QNumberField,
	image_list_field,
};
use crate::id3::MUSICBRAINZ_UFID_OWNER;
use crate::picture::Image;
use crate::style::{StorageStyle, StoredAs};

use std::sync::LazyLock;

// Defines the catalog statics
//
// Usage:
//
// field_catalog! {
//     /// Docs
//     name: FieldType = initializer;
// }
//
// * `name` is the lowercase field name, the static is its uppercase form.
// * `initializer` is evaluated on first access.
//
// This also generates `FIELD_NAMES` and `field_styles()`.
macro_rules! field_catalog {
	($(
		$(#[$meta:meta])*
		$name:ident: $ty:ty = $init:expr;
	)+) => {
		paste::paste! {
			$(
				$(#[$meta])*
				pub static [<$name:upper>]: LazyLock<$ty> = LazyLock::new(|| $init);
			)+

			/// The name of every field in the catalog
			pub const FIELD_NAMES: &[&str] = &[$(stringify!($name)),+];

			/// The styles of the catalog field named `name`
			///
			/// Fields derived from another field (ex. `year`) report the styles of their parent.
			///
			/// # Examples
			///
			/// ```rust
			/// use mediafield::catalog::field_styles;
			/// use mediafield::store::FileFormat;
			///
			/// let styles = field_styles("title").unwrap();
			/// assert!(styles.iter().any(|style| style.applies_to(FileFormat::Mp4)));
			///
			/// assert!(field_styles("not a field").is_none());
			/// ```
			pub fn field_styles(name: &str) -> Option<&'static [StorageStyle]> {
				match name {
					$(stringify!($name) => Some([<$name:upper>].styles()),)+
					_ => None,
				}
			}
		}
	};
}

// MP4 freeform atoms
macro_rules! itunes {
	($name:literal) => {
		concat!("----:com.apple.iTunes:", $name)
	};
}

// Gains are stored as text, ex. "-6.20 dB"
fn gain_style(style: StorageStyle) -> StorageStyle {
	style.float_places(2).suffix(" dB")
}

fn peak_style(style: StorageStyle) -> StorageStyle {
	style.float_places(6)
}

field_catalog! {
	/// The track title
	title: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TIT2"),
		StorageStyle::mp4("\u{a9}nam"),
		StorageStyle::plain("TITLE"),
		StorageStyle::asf("Title"),
	]);

	/// The track artist
	artist: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TPE1"),
		StorageStyle::mp4("\u{a9}ART"),
		StorageStyle::plain("ARTIST"),
		StorageStyle::asf("Author"),
	]);

	/// Every track artist
	artists: ListMediaField<String> = ListMediaField::new(vec![
		StorageStyle::id3_list_desc("ARTISTS"),
		StorageStyle::mp4(itunes!("ARTISTS")),
		StorageStyle::plain("ARTISTS"),
		StorageStyle::asf("WM/ARTISTS"),
	]);

	/// The album title
	album: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TALB"),
		StorageStyle::mp4("\u{a9}alb"),
		StorageStyle::plain("ALBUM"),
		StorageStyle::asf("WM/AlbumTitle"),
	]);

	/// Every genre
	genres: ListMediaField<String> = ListMediaField::new(vec![
		StorageStyle::id3("TCON"),
		StorageStyle::mp4("\u{a9}gen"),
		StorageStyle::plain("GENRE"),
		StorageStyle::asf("WM/Genre"),
	]);

	/// The first genre
	genre: MediaField<String> = GENRES.single_field();

	/// The lyricist
	lyricist: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TEXT"),
		StorageStyle::mp4(itunes!("LYRICIST")),
		StorageStyle::plain("LYRICIST"),
		StorageStyle::asf("WM/Writer"),
	]);

	/// The composer
	composer: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TCOM"),
		StorageStyle::mp4("\u{a9}wrt"),
		StorageStyle::plain("COMPOSER"),
		StorageStyle::asf("WM/Composer"),
	]);

	/// The composer, for sorting
	composer_sort: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TSOC"),
		StorageStyle::mp4("soco"),
		StorageStyle::plain("COMPOSERSORT"),
		StorageStyle::asf("WM/Composersortorder"),
	]);

	/// The arranger
	arranger: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_people("TIPL", "arranger"),
		StorageStyle::mp4(itunes!("Arranger")),
		StorageStyle::plain("ARRANGER"),
		StorageStyle::asf("beets/Arranger"),
	]);

	/// The content group
	grouping: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TIT1"),
		StorageStyle::mp4("\u{a9}grp"),
		StorageStyle::plain("GROUPING"),
		StorageStyle::asf("WM/ContentGroupDescription"),
	]);

	/// The track number
	track: MediaField<i64> = MediaField::new(vec![
		StorageStyle::id3_slash_pack("TRCK", 0),
		StorageStyle::mp4_tuple("trkn", 0),
		StorageStyle::plain("TRACK"),
		StorageStyle::plain("TRACKNUMBER"),
		StorageStyle::asf("WM/TrackNumber"),
	]);

	/// The number of tracks on the disc
	tracktotal: MediaField<i64> = MediaField::new(vec![
		StorageStyle::id3_slash_pack("TRCK", 1),
		StorageStyle::mp4_tuple("trkn", 1),
		StorageStyle::plain("TRACKTOTAL"),
		StorageStyle::plain("TRACKC"),
		StorageStyle::plain("TOTALTRACKS"),
		StorageStyle::asf("TotalTracks"),
	]);

	/// The disc number
	disc: MediaField<i64> = MediaField::new(vec![
		StorageStyle::id3_slash_pack("TPOS", 0),
		StorageStyle::mp4_tuple("disk", 0),
		StorageStyle::plain("DISC"),
		StorageStyle::plain("DISCNUMBER"),
		StorageStyle::asf("WM/PartOfSet"),
	]);

	/// The number of discs in the release
	disctotal: MediaField<i64> = MediaField::new(vec![
		StorageStyle::id3_slash_pack("TPOS", 1),
		StorageStyle::mp4_tuple("disk", 1),
		StorageStyle::plain("DISCTOTAL"),
		StorageStyle::plain("DISCC"),
		StorageStyle::plain("TOTALDISCS"),
		StorageStyle::asf("TotalDiscs"),
	]);

	/// A URL
	url: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc_frame("WXXX", ""),
		StorageStyle::mp4("\u{a9}url"),
		StorageStyle::plain("URL"),
		StorageStyle::asf("WM/URL"),
	]);

	/// The unsynchronized lyrics
	lyrics: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc_frame("USLT", ""),
		StorageStyle::mp4("\u{a9}lyr"),
		StorageStyle::plain("LYRICS"),
		StorageStyle::asf("WM/Lyrics"),
	]);

	/// A comment
	comments: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc_frame("COMM", ""),
		StorageStyle::mp4("\u{a9}cmt"),
		StorageStyle::plain("DESCRIPTION"),
		StorageStyle::plain("COMMENT"),
		StorageStyle::asf("WM/Comments"),
		StorageStyle::asf("Description"),
	]);

	/// The copyright message
	copyright: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TCOP"),
		StorageStyle::mp4("cprt"),
		StorageStyle::plain("COPYRIGHT"),
		StorageStyle::asf("Copyright"),
	]);

	/// Beats per minute
	bpm: MediaField<i64> = MediaField::new(vec![
		StorageStyle::id3("TBPM"),
		StorageStyle::mp4("tmpo").as_type(StoredAs::Integer),
		StorageStyle::plain("BPM"),
		StorageStyle::asf("WM/BeatsPerMinute"),
	]);

	/// Whether the track is part of a compilation
	comp: MediaField<bool> = MediaField::new(vec![
		StorageStyle::id3("TCMP"),
		StorageStyle::mp4_bool("cpil"),
		StorageStyle::plain("COMPILATION"),
		StorageStyle::asf("WM/IsCompilation").as_type(StoredAs::Boolean),
	]);

	/// The album artist
	albumartist: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TPE2"),
		StorageStyle::mp4("aART"),
		StorageStyle::plain("ALBUM ARTIST"),
		StorageStyle::plain("ALBUM_ARTIST"),
		StorageStyle::plain("ALBUMARTIST"),
		StorageStyle::asf("WM/AlbumArtist"),
	]);

	/// Every album artist
	albumartists: ListMediaField<String> = ListMediaField::new(vec![
		StorageStyle::id3_list_desc("ALBUMARTISTS"),
		StorageStyle::id3_list_desc("ALBUM_ARTISTS"),
		StorageStyle::id3_list_desc("ALBUM ARTISTS").read_only(),
		StorageStyle::mp4(itunes!("ALBUMARTISTS")),
		StorageStyle::mp4(itunes!("ALBUM_ARTISTS")),
		StorageStyle::mp4(itunes!("ALBUM ARTISTS")).read_only(),
		StorageStyle::plain("ALBUMARTISTS"),
		StorageStyle::plain("ALBUM_ARTISTS"),
		StorageStyle::plain("ALBUM ARTISTS").read_only(),
		StorageStyle::asf("WM/AlbumArtists"),
	]);

	/// Every MusicBrainz release type
	albumtypes: ListMediaField<String> = ListMediaField::new(vec![
		StorageStyle::id3_list_desc("MusicBrainz Album Type").split_v23(),
		StorageStyle::mp4(itunes!("MusicBrainz Album Type")),
		StorageStyle::plain("RELEASETYPE"),
		StorageStyle::plain("MUSICBRAINZ_ALBUMTYPE"),
		StorageStyle::asf("MusicBrainz/Album Type"),
	]);

	/// The primary MusicBrainz release type
	albumtype: MediaField<String> = ALBUMTYPES.single_field();

	/// The record label
	label: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TPUB"),
		StorageStyle::mp4(itunes!("LABEL")),
		StorageStyle::mp4(itunes!("publisher")),
		StorageStyle::mp4(itunes!("Label")).read_only(),
		StorageStyle::plain("LABEL"),
		StorageStyle::plain("PUBLISHER"),
		StorageStyle::asf("WM/Publisher"),
	]);

	/// The artist, for sorting
	artist_sort: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TSOP"),
		StorageStyle::mp4("soar"),
		StorageStyle::plain("ARTISTSORT"),
		StorageStyle::asf("WM/ArtistSortOrder"),
	]);

	/// Every track artist, for sorting
	artists_sort: ListMediaField<String> = ListMediaField::new(vec![
		StorageStyle::id3_list_desc("ARTISTS_SORT"),
		StorageStyle::mp4(itunes!("ARTISTS_SORT")),
		StorageStyle::plain("ARTISTS_SORT"),
		StorageStyle::asf("beets/ArtistsSort"),
	]);

	/// The album artist, for sorting
	albumartist_sort: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("ALBUMARTISTSORT"),
		StorageStyle::mp4("soaa"),
		StorageStyle::plain("ALBUMARTISTSORT"),
		StorageStyle::asf("WM/AlbumArtistSortOrder"),
	]);

	/// Every album artist, for sorting
	albumartists_sort: ListMediaField<String> = ListMediaField::new(vec![
		StorageStyle::id3_list_desc("ALBUMARTISTS_SORT"),
		StorageStyle::mp4(itunes!("ALBUMARTISTS_SORT")),
		StorageStyle::plain("ALBUMARTISTS_SORT"),
		StorageStyle::asf("beets/AlbumArtistsSort"),
	]);

	/// The Amazon Standard Identification Number
	asin: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("ASIN"),
		StorageStyle::mp4(itunes!("ASIN")),
		StorageStyle::plain("ASIN"),
		StorageStyle::asf("MusicBrainz/ASIN"),
	]);

	/// Every catalog number of the release
	catalognums: ListMediaField<String> = ListMediaField::new(vec![
		StorageStyle::id3_list_desc("CATALOGNUMBER").split_v23(),
		StorageStyle::id3_list_desc("CATALOGID").read_only(),
		StorageStyle::id3_list_desc("DISCOGS_CATALOG").read_only(),
		StorageStyle::mp4(itunes!("CATALOGNUMBER")),
		StorageStyle::mp4(itunes!("CATALOGID")).read_only(),
		StorageStyle::mp4(itunes!("DISCOGS_CATALOG")).read_only(),
		StorageStyle::plain("CATALOGNUMBER"),
		StorageStyle::plain("CATALOGID").read_only(),
		StorageStyle::plain("DISCOGS_CATALOG").read_only(),
		StorageStyle::asf("WM/CatalogNo"),
		StorageStyle::asf("CATALOGID").read_only(),
		StorageStyle::asf("DISCOGS_CATALOG").read_only(),
	]);

	/// The first catalog number of the release
	catalognum: MediaField<String> = CATALOGNUMS.single_field();

	/// The release barcode
	barcode: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("BARCODE"),
		StorageStyle::mp4(itunes!("BARCODE")),
		StorageStyle::plain("BARCODE"),
		StorageStyle::plain("UPC").read_only(),
		StorageStyle::plain("EAN/UPN").read_only(),
		StorageStyle::plain("EAN").read_only(),
		StorageStyle::plain("UPN").read_only(),
		StorageStyle::asf("WM/Barcode"),
	]);

	/// The International Standard Recording Code
	isrc: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TSRC"),
		StorageStyle::mp4(itunes!("ISRC")),
		StorageStyle::plain("ISRC"),
		StorageStyle::asf("WM/ISRC"),
	]);

	/// The disc subtitle
	disctitle: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TSST"),
		StorageStyle::mp4(itunes!("DISCSUBTITLE")),
		StorageStyle::plain("DISCSUBTITLE"),
		StorageStyle::asf("WM/SetSubTitle"),
	]);

	/// The encoder, or the person who encoded the file
	encoder: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TENC"),
		StorageStyle::mp4("\u{a9}too"),
		StorageStyle::plain("ENCODEDBY"),
		StorageStyle::plain("ENCODER"),
		StorageStyle::asf("WM/EncodedBy"),
	]);

	/// The script of the text, as an ISO 15924 code
	script: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("Script"),
		StorageStyle::mp4(itunes!("SCRIPT")),
		StorageStyle::plain("SCRIPT"),
		StorageStyle::asf("WM/Script"),
	]);

	/// Every language of the lyrics, as ISO 639-2 codes
	languages: ListMediaField<String> = ListMediaField::new(vec![
		StorageStyle::id3("TLAN"),
		StorageStyle::mp4(itunes!("LANGUAGE")),
		StorageStyle::plain("LANGUAGE"),
		StorageStyle::asf("WM/Language"),
	]);

	/// The first language of the lyrics
	language: MediaField<String> = LANGUAGES.single_field();

	/// The release country
	country: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("MusicBrainz Album Release Country"),
		StorageStyle::mp4(itunes!("MusicBrainz Album Release Country")),
		StorageStyle::plain("RELEASECOUNTRY"),
		StorageStyle::asf("MusicBrainz/Album Release Country"),
	]);

	/// The MusicBrainz release status
	albumstatus: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("MusicBrainz Album Status"),
		StorageStyle::mp4(itunes!("MusicBrainz Album Status")),
		StorageStyle::plain("RELEASESTATUS"),
		StorageStyle::plain("MUSICBRAINZ_ALBUMSTATUS"),
		StorageStyle::asf("MusicBrainz/Album Status"),
	]);

	/// The release medium, ex. "CD"
	media: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TMED"),
		StorageStyle::mp4(itunes!("MEDIA")),
		StorageStyle::plain("MEDIA"),
		StorageStyle::asf("WM/Media"),
	]);

	/// The MusicBrainz release disambiguation comment
	albumdisambig: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("MusicBrainz Album Comment"),
		StorageStyle::mp4(itunes!("MusicBrainz Album Comment")),
		StorageStyle::plain("MUSICBRAINZ_ALBUMCOMMENT"),
		StorageStyle::asf("MusicBrainz/Album Comment"),
	]);

	/// The release date
	date: DateField = DateField::new(vec![
		StorageStyle::id3("TDRC"),
		StorageStyle::mp4("\u{a9}day"),
		StorageStyle::plain("DATE"),
		StorageStyle::asf("WM/Year"),
	])
	.with_year_styles(vec![StorageStyle::plain("YEAR")]);

	/// The release year
	year: DateItemField<'static> = DATE.year_field();

	/// The release month
	month: DateItemField<'static> = DATE.month_field();

	/// The release day
	day: DateItemField<'static> = DATE.day_field();

	/// The original release date
	original_date: DateField = DateField::new(vec![
		StorageStyle::id3("TDOR"),
		StorageStyle::mp4(itunes!("ORIGINAL YEAR")),
		StorageStyle::mp4(itunes!("ORIGINALDATE")),
		StorageStyle::plain("ORIGINALDATE"),
		StorageStyle::asf("WM/OriginalReleaseYear"),
	]);

	/// The original release year
	original_year: DateItemField<'static> = ORIGINAL_DATE.year_field();

	/// The original release month
	original_month: DateItemField<'static> = ORIGINAL_DATE.month_field();

	/// The original release day
	original_day: DateItemField<'static> = ORIGINAL_DATE.day_field();

	/// The track artist, as credited
	artist_credit: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("Artist Credit"),
		StorageStyle::mp4(itunes!("Artist Credit")),
		StorageStyle::plain("ARTIST_CREDIT"),
		StorageStyle::asf("beets/Artist Credit"),
	]);

	/// Every track artist, as credited
	artists_credit: ListMediaField<String> = ListMediaField::new(vec![
		StorageStyle::id3_list_desc("ARTISTS_CREDIT"),
		StorageStyle::mp4(itunes!("ARTISTS_CREDIT")),
		StorageStyle::plain("ARTISTS_CREDIT"),
		StorageStyle::asf("beets/ArtistsCredit"),
	]);

	/// The album artist, as credited
	albumartist_credit: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("Album Artist Credit"),
		StorageStyle::mp4(itunes!("Album Artist Credit")),
		StorageStyle::plain("ALBUMARTIST_CREDIT"),
		StorageStyle::asf("beets/Album Artist Credit"),
	]);

	/// Every album artist, as credited
	albumartists_credit: ListMediaField<String> = ListMediaField::new(vec![
		StorageStyle::id3_list_desc("ALBUMARTISTS_CREDIT"),
		StorageStyle::mp4(itunes!("ALBUMARTISTS_CREDIT")),
		StorageStyle::plain("ALBUMARTISTS_CREDIT"),
		StorageStyle::asf("beets/AlbumArtistsCredit"),
	]);

	/// The raw data of the front cover
	art: CoverArtField = CoverArtField::new();

	/// Every embedded image
	images: ListMediaField<Image> = image_list_field();

	/// The MusicBrainz recording ID
	mb_trackid: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_ufid(MUSICBRAINZ_UFID_OWNER),
		StorageStyle::mp4(itunes!("MusicBrainz Track Id")),
		StorageStyle::plain("MUSICBRAINZ_TRACKID"),
		StorageStyle::asf("MusicBrainz/Track Id"),
	]);

	/// The MusicBrainz track ID
	mb_releasetrackid: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("MusicBrainz Release Track Id"),
		StorageStyle::mp4(itunes!("MusicBrainz Release Track Id")),
		StorageStyle::plain("MUSICBRAINZ_RELEASETRACKID"),
		StorageStyle::asf("MusicBrainz/Release Track Id"),
	]);

	/// The MusicBrainz work ID
	mb_workid: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("MusicBrainz Work Id"),
		StorageStyle::mp4(itunes!("MusicBrainz Work Id")),
		StorageStyle::plain("MUSICBRAINZ_WORKID"),
		StorageStyle::asf("MusicBrainz/Work Id"),
	]);

	/// The MusicBrainz release ID
	mb_albumid: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("MusicBrainz Album Id"),
		StorageStyle::mp4(itunes!("MusicBrainz Album Id")),
		StorageStyle::plain("MUSICBRAINZ_ALBUMID"),
		StorageStyle::asf("MusicBrainz/Album Id"),
	]);

	/// Every MusicBrainz track artist ID
	mb_artistids: ListMediaField<String> = ListMediaField::new(vec![
		StorageStyle::id3_list_desc("MusicBrainz Artist Id").split_v23(),
		StorageStyle::mp4(itunes!("MusicBrainz Artist Id")),
		StorageStyle::plain("MUSICBRAINZ_ARTISTID"),
		StorageStyle::asf("MusicBrainz/Artist Id"),
	]);

	/// The first MusicBrainz track artist ID
	mb_artistid: MediaField<String> = MB_ARTISTIDS.single_field();

	/// Every MusicBrainz album artist ID
	mb_albumartistids: ListMediaField<String> = ListMediaField::new(vec![
		StorageStyle::id3_list_desc("MusicBrainz Album Artist Id").split_v23(),
		StorageStyle::mp4(itunes!("MusicBrainz Album Artist Id")),
		StorageStyle::plain("MUSICBRAINZ_ALBUMARTISTID"),
		StorageStyle::asf("MusicBrainz/Album Artist Id"),
	]);

	/// The first MusicBrainz album artist ID
	mb_albumartistid: MediaField<String> = MB_ALBUMARTISTIDS.single_field();

	/// The MusicBrainz release group ID
	mb_releasegroupid: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("MusicBrainz Release Group Id"),
		StorageStyle::mp4(itunes!("MusicBrainz Release Group Id")),
		StorageStyle::plain("MUSICBRAINZ_RELEASEGROUPID"),
		StorageStyle::asf("MusicBrainz/Release Group Id"),
	]);

	/// The AcoustID fingerprint
	acoustid_fingerprint: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("Acoustid Fingerprint"),
		StorageStyle::mp4(itunes!("Acoustid Fingerprint")),
		StorageStyle::plain("ACOUSTID_FINGERPRINT"),
		StorageStyle::asf("Acoustid/Fingerprint"),
	]);

	/// The AcoustID
	acoustid_id: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3_desc("Acoustid Id"),
		StorageStyle::mp4(itunes!("Acoustid Id")),
		StorageStyle::plain("ACOUSTID_ID"),
		StorageStyle::asf("Acoustid/Id"),
	]);

	/// The ReplayGain track gain, in dB
	///
	/// iTunes SoundCheck data is used as a fallback.
	rg_track_gain: MediaField<f64> = MediaField::new(vec![
		gain_style(StorageStyle::id3_desc("REPLAYGAIN_TRACK_GAIN")),
		gain_style(StorageStyle::id3_desc("replaygain_track_gain")),
		StorageStyle::id3_soundcheck(0),
		gain_style(StorageStyle::mp4(itunes!("replaygain_track_gain"))),
		StorageStyle::mp4_soundcheck(0),
		gain_style(StorageStyle::plain("REPLAYGAIN_TRACK_GAIN")),
		gain_style(StorageStyle::asf("replaygain_track_gain")),
	]);

	/// The ReplayGain album gain, in dB
	rg_album_gain: MediaField<f64> = MediaField::new(vec![
		gain_style(StorageStyle::id3_desc("REPLAYGAIN_ALBUM_GAIN")),
		gain_style(StorageStyle::id3_desc("replaygain_album_gain")),
		gain_style(StorageStyle::mp4(itunes!("replaygain_album_gain"))),
		gain_style(StorageStyle::plain("REPLAYGAIN_ALBUM_GAIN")),
		gain_style(StorageStyle::asf("replaygain_album_gain")),
	]);

	/// The ReplayGain track peak
	///
	/// iTunes SoundCheck data is used as a fallback.
	rg_track_peak: MediaField<f64> = MediaField::new(vec![
		peak_style(StorageStyle::id3_desc("REPLAYGAIN_TRACK_PEAK")),
		peak_style(StorageStyle::id3_desc("replaygain_track_peak")),
		StorageStyle::id3_soundcheck(1),
		peak_style(StorageStyle::mp4(itunes!("replaygain_track_peak"))),
		StorageStyle::mp4_soundcheck(1),
		peak_style(StorageStyle::plain("REPLAYGAIN_TRACK_PEAK")),
		peak_style(StorageStyle::asf("replaygain_track_peak")),
	]);

	/// The ReplayGain album peak
	rg_album_peak: MediaField<f64> = MediaField::new(vec![
		peak_style(StorageStyle::id3_desc("REPLAYGAIN_ALBUM_PEAK")),
		peak_style(StorageStyle::id3_desc("replaygain_album_peak")),
		peak_style(StorageStyle::mp4(itunes!("replaygain_album_peak"))),
		peak_style(StorageStyle::plain("REPLAYGAIN_ALBUM_PEAK")),
		peak_style(StorageStyle::asf("replaygain_album_peak")),
	]);

	/// The EBU R128 track gain, in dB relative to the Opus output gain
	r128_track_gain: QNumberField = QNumberField::new(8, vec![
		StorageStyle::id3_desc("R128_TRACK_GAIN"),
		StorageStyle::mp4(itunes!("R128_TRACK_GAIN")),
		StorageStyle::plain("R128_TRACK_GAIN"),
		StorageStyle::asf("R128_TRACK_GAIN"),
	]);

	/// The EBU R128 album gain, in dB relative to the Opus output gain
	r128_album_gain: QNumberField = QNumberField::new(8, vec![
		StorageStyle::id3_desc("R128_ALBUM_GAIN"),
		StorageStyle::mp4(itunes!("R128_ALBUM_GAIN")),
		StorageStyle::plain("R128_ALBUM_GAIN"),
		StorageStyle::asf("R128_ALBUM_GAIN"),
	]);

	/// The initial musical key
	initial_key: MediaField<String> = MediaField::new(vec![
		StorageStyle::id3("TKEY"),
		StorageStyle::mp4(itunes!("initialkey")),
		StorageStyle::plain("INITIALKEY"),
		StorageStyle::asf("INITIALKEY"),
	]);
}
