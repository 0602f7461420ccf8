use mediafield::catalog::{FIELD_NAMES, field_styles};
use mediafield::store::FileFormat;

#[test_log::test]
fn every_field_covers_every_format() {
	for name in FIELD_NAMES {
		let styles = field_styles(name).unwrap();

		for format in FileFormat::ALL {
			if format == FileFormat::OptimFrog {
				continue;
			}

			assert!(
				styles.iter().any(|style| style.applies_to(format)),
				"`{name}` has no style for {format}"
			);
		}
	}
}

#[test_log::test]
fn optimfrog_only_has_images() {
	for name in FIELD_NAMES {
		let covered = field_styles(name)
			.unwrap()
			.iter()
			.any(|style| style.applies_to(FileFormat::OptimFrog));

		assert_eq!(covered, matches!(*name, "art" | "images"), "{name}");
	}
}

#[test_log::test]
fn derived_fields_share_styles() {
	assert_eq!(field_styles("genre"), field_styles("genres"));
	assert_eq!(field_styles("year"), field_styles("date"));
	assert_eq!(field_styles("original_day"), field_styles("original_date"));
	assert_eq!(field_styles("art"), field_styles("images"));
}
