use fitlog_domain::{Bucket, Span, calorie_series, duration_series};

use crate::{
    Language,
    format::{compact_week_label, day_label, month_label, week_label},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelStyle {
    /// Weekday names and week ranges with month, as on the statistics page.
    Full,
    /// Upper-case weekday names and week ranges without month, as on the dashboard.
    Compact,
}

/// Labels and the aligned calorie and duration series of a chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chart {
    pub labels: Vec<String>,
    pub calories: Vec<u32>,
    pub duration: Vec<u32>,
}

impl Chart {
    #[must_use]
    pub fn new(buckets: &[Bucket], language: Language, style: LabelStyle) -> Self {
        Self {
            labels: buckets
                .iter()
                .map(|b| span_label(&b.span, language, style))
                .collect(),
            calories: calorie_series(buckets),
            duration: duration_series(buckets),
        }
    }

    /// True when every bucket of the window is zero.
    ///
    /// This says nothing about workouts outside the window. Whether the log as a whole is empty is
    /// answered by the workout collection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calories.iter().chain(&self.duration).all(|v| *v == 0)
    }
}

#[must_use]
pub fn span_label(span: &Span, language: Language, style: LabelStyle) -> String {
    match (span, style) {
        (Span::Day(date), LabelStyle::Full) => day_label(*date, language),
        (Span::Day(date), LabelStyle::Compact) => day_label(*date, language).to_uppercase(),
        (Span::Week(interval), LabelStyle::Full) => week_label(interval, language),
        (Span::Week(interval), LabelStyle::Compact) => compact_week_label(interval, language),
        (Span::Month(date), _) => month_label(*date, language),
    }
}
