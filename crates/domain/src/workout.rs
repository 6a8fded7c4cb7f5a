use std::rc::Rc;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use derive_more::{AsRef, Display};
use log::debug;
use uuid::Uuid;

use crate::{
    Bucket, DailySummary, Name, ReadError, Totals, UpdateError, ValidationError,
    all_time_totals, daily_summary, longest_workout, month_weeks, trailing_week,
};

pub trait WorkoutService {
    fn list(&self) -> &[Workout];
    fn add(&mut self, input: WorkoutInput) -> Workout;
    fn update(&mut self, id: &WorkoutID, update: WorkoutUpdate);
    fn delete(&mut self, id: &WorkoutID);
    fn reset(&mut self);

    fn validate_workout_name(&self, name: &str) -> Result<Name, ValidationError> {
        Name::new(name).map_err(|err| ValidationError::Other(err.into()))
    }

    fn validate_workout_duration(&self, duration: &str) -> Result<u32, ValidationError> {
        validate_amount(duration, "Duration")
    }

    fn validate_workout_calories(&self, calories: &str) -> Result<u32, ValidationError> {
        validate_amount(calories, "Calories")
    }

    /// Accepts only zero-padded `YYYY-MM-DD`.
    fn validate_workout_date(&self, date: &str) -> Result<NaiveDate, ValidationError> {
        let date = date.trim();
        if date.is_empty() {
            return Err(ValidationError::Missing("Date".to_string()));
        }
        let padded = date.len() == 10
            && date.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !padded {
            return Err(ValidationError::Other("Invalid date".into()));
        }
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ValidationError::Other("Invalid date".into()))
    }

    /// Validate a submitted form and convert it into an input for [`WorkoutService::add`].
    fn validate_workout(&self, form: &WorkoutForm) -> Result<WorkoutInput, ValidationError> {
        let name = self.validate_workout_name(&form.name)?;
        let duration = self.validate_workout_duration(&form.duration)?;
        let calories = self.validate_workout_calories(&form.calories)?;
        let date = self.validate_workout_date(&form.date)?;
        Ok(WorkoutInput {
            name: name.into(),
            duration: f64::from(duration),
            calories: f64::from(calories),
            date: date.into(),
        })
    }

    #[must_use]
    fn sorted(&self) -> Vec<Workout> {
        sort_for_display(self.list())
    }

    #[must_use]
    fn daily_summary(&self, date: NaiveDate) -> DailySummary {
        daily_summary(self.list(), date)
    }

    #[must_use]
    fn trailing_week(&self, today: NaiveDate) -> Vec<Bucket> {
        trailing_week(self.list(), today)
    }

    #[must_use]
    fn month_weeks(&self, today: NaiveDate) -> Vec<Bucket> {
        month_weeks(self.list(), today)
    }

    #[must_use]
    fn all_time_totals(&self) -> Totals {
        all_time_totals(self.list())
    }

    #[must_use]
    fn longest_workout(&self) -> Option<&Workout> {
        longest_workout(self.list())
    }
}

fn validate_amount(value: &str, field: &str) -> Result<u32, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Missing(field.to_string()));
    }
    match value.replace(',', ".").parse::<f64>() {
        Ok(parsed) if !parsed.is_finite() => Err(ValidationError::Other(
            format!("{field} must be a number").into(),
        )),
        Ok(parsed) if parsed <= 0.0 => Err(ValidationError::Other(
            format!("{field} must be positive").into(),
        )),
        Ok(parsed) => Ok(normalize_amount(parsed)),
        Err(_) => Err(ValidationError::Other(
            format!("{field} must be a number").into(),
        )),
    }
}

/// Persistence seam of the workout store.
///
/// The repository always receives and returns the whole collection.
pub trait WorkoutRepository {
    fn load_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn save_workouts(&self, workouts: &[Workout]) -> Result<(), UpdateError>;
}

impl<R: WorkoutRepository + ?Sized> WorkoutRepository for &R {
    fn load_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        (**self).load_workouts()
    }

    fn save_workouts(&self, workouts: &[Workout]) -> Result<(), UpdateError> {
        (**self).save_workouts(workouts)
    }
}

impl<R: WorkoutRepository + ?Sized> WorkoutRepository for Rc<R> {
    fn load_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        (**self).load_workouts()
    }

    fn save_workouts(&self, workouts: &[Workout]) -> Result<(), UpdateError> {
        (**self).save_workouts(workouts)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: String,
    pub duration: u32,
    pub calories: u32,
    pub date: NaiveDate,
}

impl Workout {
    #[must_use]
    pub fn new(id: WorkoutID, input: WorkoutInput) -> Self {
        Self {
            id,
            name: input.name,
            duration: normalize_amount(input.duration),
            calories: normalize_amount(input.calories),
            date: normalize_date(&input.date),
        }
    }

    /// Merge the supplied fields. An empty text date keeps the current date.
    pub fn apply(&mut self, update: WorkoutUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(duration) = update.duration {
            self.duration = normalize_amount(duration);
        }
        if let Some(calories) = update.calories {
            self.calories = normalize_amount(calories);
        }
        match update.date {
            Some(DateInput::Text(ref text)) if text.is_empty() => {}
            Some(ref date) => self.date = normalize_date(date),
            None => {}
        }
    }

    #[must_use]
    pub fn duration_category(&self) -> DurationCategory {
        DurationCategory::from(self.duration)
    }
}

#[derive(AsRef, Display, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkoutID(String);

impl WorkoutID {
    /// Creates a time-based id with a random suffix.
    #[must_use]
    pub fn generate() -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("{}-{}", Utc::now().timestamp_millis(), &suffix[..6]))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WorkoutID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for WorkoutID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutInput {
    pub name: String,
    pub duration: f64,
    pub calories: f64,
    pub date: DateInput,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutUpdate {
    pub name: Option<String>,
    pub duration: Option<f64>,
    pub calories: Option<f64>,
    pub date: Option<DateInput>,
}

/// Raw field values of the workout form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutForm {
    pub name: String,
    pub duration: String,
    pub calories: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Text(String),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Local>> for DateInput {
    fn from(value: DateTime<Local>) -> Self {
        Self::DateTime(value.with_timezone(&Utc))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationCategory {
    Short,
    Medium,
    Long,
}

impl From<u32> for DurationCategory {
    fn from(duration: u32) -> Self {
        match duration {
            0..30 => Self::Short,
            30..60 => Self::Medium,
            _ => Self::Long,
        }
    }
}

/// Coerce a date-like value into a calendar date.
///
/// Unparsable text silently falls back to today.
#[must_use]
pub fn normalize_date(input: &DateInput) -> NaiveDate {
    match input {
        DateInput::Date(date) => *date,
        DateInput::DateTime(date_time) => date_time.date_naive(),
        DateInput::Text(text) => parse_date(text).unwrap_or_else(|| {
            debug!("falling back to today for invalid date {text:?}");
            Local::now().date_naive()
        }),
    }
}

/// Parse `YYYY-MM-DD`, RFC 3339 date-times (as UTC date) and naive ISO date-times.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|date_time| date_time.with_timezone(&Utc).date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|date_time| date_time.date())
        })
}

/// Round to the nearest integer and floor at 1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn normalize_amount(value: f64) -> u32 {
    if value.is_finite() {
        value.round().clamp(1.0, f64::from(u32::MAX)) as u32
    } else {
        1
    }
}

/// Order for the workout list: newest date first, higher calories first on the same day.
#[must_use]
pub fn sort_for_display(workouts: &[Workout]) -> Vec<Workout> {
    let mut sorted = workouts.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.calories.cmp(&a.calories)));
    sorted
}
