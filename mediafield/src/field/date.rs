use super::{Field, MediaField};
use crate::error::Result;
use crate::store::TagStore;
use crate::style::StorageStyle;

use std::fmt::{Display, Formatter};

/// A validated calendar date
///
/// # Examples
///
/// ```rust
/// use mediafield::field::Date;
///
/// let date = Date::new(2024, 2, 29).unwrap();
/// assert_eq!(date.to_string(), "2024-02-29");
///
/// assert!(Date::new(2023, 2, 29).is_none());
/// assert!(Date::new(0, 1, 1).is_none());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
	year: u16,
	month: u8,
	day: u8,
}

impl Date {
	/// Create a date, returning `None` when it does not exist
	///
	/// Years range from 1 to 9999.
	pub fn new(year: u16, month: u8, day: u8) -> Option<Self> {
		if !(1..=9999).contains(&year) || !(1..=12).contains(&month) {
			return None;
		}

		if day == 0 || day > days_in_month(year, month) {
			return None;
		}

		Some(Self { year, month, day })
	}

	fn from_parts(year: i64, month: i64, day: i64) -> Option<Self> {
		Self::new(
			u16::try_from(year).ok()?,
			u8::try_from(month).ok()?,
			u8::try_from(day).ok()?,
		)
	}

	/// The year
	pub fn year(self) -> u16 {
		self.year
	}

	/// The month, 1 to 12
	pub fn month(self) -> u8 {
		self.month
	}

	/// The day of the month, starting at 1
	pub fn day(self) -> u8 {
		self.day
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}
}

fn days_in_month(year: u16, month: u8) -> u8 {
	match month {
		2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
		2 => 28,
		4 | 6 | 9 | 11 => 30,
		_ => 31,
	}
}

/// One component of a date
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DatePart {
	/// The year
	Year = 0,
	/// The month
	Month = 1,
	/// The day
	Day = 2,
}

/// A field holding a date as `YYYY[-MM[-DD]]` text
///
/// Readers are lenient: anything after a `T`, `t` or space is ignored, `/` also separates
/// components, and components that are not numbers are unset. When the date holds no year,
/// the optional year styles are consulted.
///
/// Writers always write the year, and mirror it into the year styles.
#[derive(Clone, Debug)]
pub struct DateField {
	date: MediaField<String>,
	year: Option<MediaField<String>>,
}

impl DateField {
	/// Create a field over `styles`
	pub fn new(styles: Vec<StorageStyle>) -> Self {
		Self {
			date: MediaField::new(styles),
			year: None,
		}
	}

	/// Add fallback styles holding only the year
	#[must_use]
	pub fn with_year_styles(mut self, styles: Vec<StorageStyle>) -> Self {
		self.year = Some(MediaField::new(styles));
		self
	}

	/// Read the year, month and day, each of which may be unset
	pub fn get_date_tuple(&self, store: &dyn TagStore) -> Result<[Option<i64>; 3]> {
		let mut items = Vec::with_capacity(3);
		if let Some(date) = self.date.get(store)? {
			let date = match date.find(['T', 't', ' ']) {
				Some(end) => &date[..end],
				None => date.as_str(),
			};

			items.extend(date.split(['-', '/']).take(3).map(str::to_owned));
		}

		let year = match items.first() {
			Some(year) if !year.is_empty() => parse_component(year),
			_ => match &self.year {
				Some(year_field) => year_field
					.get(store)?
					.and_then(|year| parse_component(&year)),
				None => None,
			},
		};

		let month = items.get(1).and_then(|month| parse_component(month));
		let day = items.get(2).and_then(|day| parse_component(day));

		Ok([year, month, day])
	}

	/// Write the year, month and day
	///
	/// Without a year, the field is deleted. The day is only written along with a month, and
	/// zero counts as unset.
	pub fn set_date_tuple(&self, store: &mut dyn TagStore, parts: [Option<i64>; 3]) -> Result<()> {
		let [year, month, day] = parts;
		let Some(year) = year else {
			return self.delete(store);
		};

		let mut date = format!("{year:04}");
		if let Some(month) = month.filter(|month| *month != 0) {
			date.push_str(&format!("-{month:02}"));

			if let Some(day) = day.filter(|day| *day != 0) {
				date.push_str(&format!("-{day:02}"));
			}
		}

		self.date.set(store, Some(date))?;

		if let Some(year_field) = &self.year {
			year_field.set(store, Some(year.to_string()))?;
		}

		Ok(())
	}

	/// A field over the year of this date
	pub fn year_field(&self) -> DateItemField<'_> {
		DateItemField::new(self, DatePart::Year)
	}

	/// A field over the month of this date
	pub fn month_field(&self) -> DateItemField<'_> {
		DateItemField::new(self, DatePart::Month)
	}

	/// A field over the day of this date
	pub fn day_field(&self) -> DateItemField<'_> {
		DateItemField::new(self, DatePart::Day)
	}
}

// Integers only, surrounding whitespace allowed
fn parse_component(component: &str) -> Option<i64> {
	component.trim().parse().ok()
}

impl Field for DateField {
	type Value = Date;

	fn styles(&self) -> &[StorageStyle] {
		self.date.styles()
	}

	/// Read the date
	///
	/// A missing month or day reads as 1. Dates that do not exist are `None`.
	fn get(&self, store: &dyn TagStore) -> Result<Option<Date>> {
		let [year, month, day] = self.get_date_tuple(store)?;

		let Some(year) = year.filter(|year| *year != 0) else {
			return Ok(None);
		};

		let month = month.filter(|month| *month != 0).unwrap_or(1);
		let day = day.filter(|day| *day != 0).unwrap_or(1);

		let date = Date::from_parts(year, month, day);
		if date.is_none() {
			log::debug!("Ignoring out of range date {year}-{month}-{day}");
		}

		Ok(date)
	}

	fn set(&self, store: &mut dyn TagStore, value: Option<Date>) -> Result<()> {
		match value {
			Some(date) => self.set_date_tuple(store, [
				Some(i64::from(date.year)),
				Some(i64::from(date.month)),
				Some(i64::from(date.day)),
			]),
			None => self.delete(store),
		}
	}

	fn delete(&self, store: &mut dyn TagStore) -> Result<()> {
		self.date.delete(store)?;

		if let Some(year_field) = &self.year {
			year_field.delete(store)?;
		}

		Ok(())
	}
}

/// A field over one component of a [`DateField`]
///
/// Writing rewrites the whole date, and deleting unsets the component. Unsetting the year
/// deletes the date.
#[derive(Clone, Debug)]
pub struct DateItemField<'a> {
	date: &'a DateField,
	part: DatePart,
}

impl<'a> DateItemField<'a> {
	/// Create a field over `part` of `date`
	pub fn new(date: &'a DateField, part: DatePart) -> Self {
		Self { date, part }
	}

	/// The component this field accesses
	pub fn part(&self) -> DatePart {
		self.part
	}
}

impl Field for DateItemField<'_> {
	type Value = i64;

	fn styles(&self) -> &[StorageStyle] {
		self.date.styles()
	}

	fn get(&self, store: &dyn TagStore) -> Result<Option<i64>> {
		let parts = self.date.get_date_tuple(store)?;
		Ok(parts[self.part as usize])
	}

	fn set(&self, store: &mut dyn TagStore, value: Option<i64>) -> Result<()> {
		let mut parts = self.date.get_date_tuple(store)?;
		parts[self.part as usize] = value;
		self.date.set_date_tuple(store, parts)
	}

	fn delete(&self, store: &mut dyn TagStore) -> Result<()> {
		self.set(store, None)
	}
}
