use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::Workout;

/// Steps shown per active minute in the daily summary.
pub const STEPS_PER_MINUTE: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl Interval {
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }
}

impl From<std::ops::RangeInclusive<NaiveDate>> for Interval {
    fn from(value: std::ops::RangeInclusive<NaiveDate>) -> Self {
        Interval {
            first: *value.start(),
            last: *value.end(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub calories: u32,
    pub duration: u32,
}

impl<'a> FromIterator<&'a Workout> for Totals {
    fn from_iter<I: IntoIterator<Item = &'a Workout>>(iter: I) -> Self {
        iter.into_iter().fold(Totals::default(), |totals, workout| Totals {
            calories: totals.calories.saturating_add(workout.calories),
            duration: totals.duration.saturating_add(workout.duration),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub calories: u32,
    pub active_minutes: u32,
    pub steps: u32,
}

/// Time window a bucket covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Day(NaiveDate),
    Week(Interval),
    /// Month given by its first day.
    Month(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub span: Span,
    pub totals: Totals,
}

#[must_use]
pub fn daily_summary(workouts: &[Workout], date: NaiveDate) -> DailySummary {
    let totals = workouts
        .iter()
        .filter(|w| w.date == date)
        .collect::<Totals>();
    DailySummary {
        date,
        calories: totals.calories,
        active_minutes: totals.duration,
        steps: totals.duration.saturating_mul(STEPS_PER_MINUTE),
    }
}

/// Per-day totals of the seven days ending with `today`, oldest first.
///
/// Days before [`NaiveDate::MIN`] are clamped to it.
#[must_use]
pub fn trailing_week(workouts: &[Workout], today: NaiveDate) -> Vec<Bucket> {
    (0..7)
        .rev()
        .map(|offset| {
            let day = today
                .checked_sub_days(Days::new(offset))
                .unwrap_or(NaiveDate::MIN);
            Bucket {
                span: Span::Day(day),
                totals: workouts.iter().filter(|w| w.date == day).collect(),
            }
        })
        .collect()
}

/// Per-week totals of the current month up to `today`.
///
/// Weeks start on Monday. The first bucket starts on the Monday on or before the first day of
/// the month and may therefore include days of the previous month.
#[must_use]
pub fn month_weeks(workouts: &[Workout], today: NaiveDate) -> Vec<Bucket> {
    let month_start = today.with_day(1).unwrap_or(today);
    let first_monday = month_start
        .week(Weekday::Mon)
        .checked_first_day()
        .unwrap_or(month_start);

    let buckets = first_monday
        .iter_weeks()
        .take_while(|first| *first <= today)
        .map(|first| {
            let interval = Interval {
                first,
                last: first
                    .checked_add_days(Days::new(6))
                    .unwrap_or(NaiveDate::MAX),
            };
            Bucket {
                span: Span::Week(interval),
                totals: workouts
                    .iter()
                    .filter(|w| interval.contains(w.date))
                    .collect(),
            }
        })
        .collect::<Vec<_>>();

    if buckets.is_empty() {
        return vec![Bucket {
            span: Span::Month(month_start),
            totals: Totals::default(),
        }];
    }

    buckets
}

#[must_use]
pub fn all_time_totals(workouts: &[Workout]) -> Totals {
    workouts.iter().collect()
}

/// The workout with the longest duration. The earliest in collection order wins ties.
#[must_use]
pub fn longest_workout(workouts: &[Workout]) -> Option<&Workout> {
    workouts.iter().fold(None, |longest, workout| match longest {
        Some(longest) if longest.duration >= workout.duration => Some(longest),
        _ => Some(workout),
    })
}

#[must_use]
pub fn calorie_series(buckets: &[Bucket]) -> Vec<u32> {
    buckets.iter().map(|b| b.totals.calories).collect()
}

#[must_use]
pub fn duration_series(buckets: &[Bucket]) -> Vec<u32> {
    buckets.iter().map(|b| b.totals.duration).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(date(2024, 3, 1), date(2024, 3, 7))]
    fn test_interval_from_range_inclusive(#[case] first: NaiveDate, #[case] last: NaiveDate) {
        let interval: Interval = (first..=last).into();
        assert_eq!(interval, Interval { first, last });
        assert!(interval.contains(first));
        assert!(interval.contains(last));
        assert!(!interval.contains(date(2024, 3, 8)));
    }

    #[test]
    fn test_daily_summary() {
        let workouts = vec![
            workout("1", date(2024, 3, 1), 200, 30),
            workout("2", date(2024, 3, 1), 100, 20),
            workout("3", date(2024, 2, 29), 400, 60),
        ];
        assert_eq!(
            daily_summary(&workouts, date(2024, 3, 1)),
            DailySummary {
                date: date(2024, 3, 1),
                calories: 300,
                active_minutes: 50,
                steps: 6000,
            }
        );
    }

    #[rstest]
    #[case::no_workouts(vec![])]
    #[case::other_days(vec![workout("1", date(2024, 2, 1), 200, 30)])]
    fn test_daily_summary_without_workouts(#[case] workouts: Vec<Workout>) {
        assert_eq!(
            daily_summary(&workouts, date(2024, 3, 1)),
            DailySummary {
                date: date(2024, 3, 1),
                calories: 0,
                active_minutes: 0,
                steps: 0,
            }
        );
    }

    #[rstest]
    #[case::no_workouts(vec![])]
    #[case::single_workout(vec![workout("1", date(2024, 3, 1), 200, 30)])]
    #[case::workouts_outside_week(vec![
        workout("1", date(2023, 3, 1), 200, 30),
        workout("2", date(2024, 4, 1), 200, 30),
    ])]
    fn test_trailing_week_length(#[case] workouts: Vec<Workout>) {
        assert_eq!(trailing_week(&workouts, date(2024, 3, 1)).len(), 7);
    }

    #[test]
    fn test_trailing_week() {
        let workouts = vec![
            workout("1", date(2024, 3, 1), 200, 30),
            workout("2", date(2024, 3, 1), 100, 20),
            workout("3", date(2024, 2, 24), 50, 10),
            workout("4", date(2024, 2, 23), 70, 15),
            workout("5", date(2024, 3, 2), 90, 5),
        ];
        let buckets = trailing_week(&workouts, date(2024, 3, 1));
        assert_eq!(
            buckets.iter().map(|b| b.span).collect::<Vec<_>>(),
            (24..=29)
                .map(|d| Span::Day(date(2024, 2, d)))
                .chain([Span::Day(date(2024, 3, 1))])
                .collect::<Vec<_>>()
        );
        assert_eq!(calorie_series(&buckets), vec![50, 0, 0, 0, 0, 0, 300]);
        assert_eq!(duration_series(&buckets), vec![10, 0, 0, 0, 0, 0, 50]);
    }

    #[test]
    fn test_month_weeks() {
        // March 2024 starts on a Friday.
        let workouts = vec![
            workout("1", date(2024, 2, 26), 100, 10),
            workout("2", date(2024, 3, 3), 200, 20),
            workout("3", date(2024, 3, 4), 300, 30),
            workout("4", date(2024, 3, 12), 400, 40),
            workout("5", date(2024, 2, 25), 999, 99),
        ];
        let buckets = month_weeks(&workouts, date(2024, 3, 12));
        assert_eq!(
            buckets,
            vec![
                Bucket {
                    span: Span::Week((date(2024, 2, 26)..=date(2024, 3, 3)).into()),
                    totals: Totals {
                        calories: 300,
                        duration: 30,
                    },
                },
                Bucket {
                    span: Span::Week((date(2024, 3, 4)..=date(2024, 3, 10)).into()),
                    totals: Totals {
                        calories: 300,
                        duration: 30,
                    },
                },
                Bucket {
                    span: Span::Week((date(2024, 3, 11)..=date(2024, 3, 17)).into()),
                    totals: Totals {
                        calories: 400,
                        duration: 40,
                    },
                },
            ]
        );
    }

    #[rstest]
    #[case::month_starts_on_monday(date(2024, 4, 1), date(2024, 4, 1), 1)]
    #[case::first_partial_week(date(2024, 3, 2), date(2024, 2, 26), 1)]
    #[case::end_of_month(date(2024, 3, 31), date(2024, 2, 26), 5)]
    fn test_month_weeks_buckets(
        #[case] today: NaiveDate,
        #[case] first: NaiveDate,
        #[case] count: usize,
    ) {
        let buckets = month_weeks(&[], today);
        assert_eq!(buckets.len(), count);
        assert_eq!(
            buckets[0].span,
            Span::Week((first..=first + Days::new(6)).into())
        );
        assert!(buckets.iter().all(|b| b.totals == Totals::default()));
    }

    #[test]
    fn test_buckets_at_calendar_limits() {
        let buckets = trailing_week(&[], NaiveDate::MIN);
        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[0].span, Span::Day(NaiveDate::MIN));
        assert_eq!(buckets[6].span, Span::Day(NaiveDate::MIN));

        let buckets = month_weeks(&[], NaiveDate::MAX);
        assert!(!buckets.is_empty());
        assert!(buckets.iter().all(|b| match b.span {
            Span::Week(interval) => interval.first <= interval.last,
            _ => false,
        }));
        assert!(!month_weeks(&[], NaiveDate::MIN).is_empty());
    }

    #[test]
    fn test_all_time_totals() {
        assert_eq!(all_time_totals(&[]), Totals::default());
        assert_eq!(
            all_time_totals(&[
                workout("1", date(2024, 3, 1), 200, 30),
                workout("2", date(2020, 1, 1), 100, 20),
            ]),
            Totals {
                calories: 300,
                duration: 50,
            }
        );
        assert_eq!(
            all_time_totals(&[
                workout("1", date(2024, 3, 1), u32::MAX, 30),
                workout("2", date(2024, 3, 1), 1, 20),
            ])
            .calories,
            u32::MAX
        );
    }

    #[test]
    fn test_longest_workout() {
        assert_eq!(longest_workout(&[]), None);

        let workouts = vec![
            workout("1", date(2024, 3, 1), 100, 10),
            workout("2", date(2024, 3, 1), 100, 30),
            workout("3", date(2024, 3, 1), 100, 30),
        ];
        assert_eq!(
            longest_workout(&workouts).map(|w| w.id.as_str()),
            Some("2")
        );
    }

    fn workout(id: &str, date: NaiveDate, calories: u32, duration: u32) -> Workout {
        Workout {
            id: id.into(),
            name: "Run".to_string(),
            duration,
            calories,
            date,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}
