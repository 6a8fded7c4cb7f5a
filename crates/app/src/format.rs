//! Locale-aware display formatting.
//!
//! The language only affects how values are presented, never which values are computed.

use chrono::{NaiveDate, NaiveTime};
use fitlog_domain::Interval;

use crate::Language;

fn localized(date: NaiveDate, fmt: &str, language: Language) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(fmt, language.locale())
        .to_string()
}

fn month_day_format(language: Language) -> &'static str {
    match language {
        Language::En => "%b %-d",
        Language::Ar | Language::Ru => "%-d %b",
    }
}

/// Medium date as shown on workout cards, e.g. `Mar 1, 2024`.
#[must_use]
pub fn format_date(date: NaiveDate, language: Language) -> String {
    match language {
        Language::En => localized(date, "%b %-d, %Y", language),
        Language::Ar | Language::Ru => localized(date, "%-d %b %Y", language),
    }
}

/// Abbreviated weekday.
#[must_use]
pub fn day_label(date: NaiveDate, language: Language) -> String {
    localized(date, "%a", language)
}

/// Abbreviated month.
#[must_use]
pub fn month_label(date: NaiveDate, language: Language) -> String {
    localized(date, "%b", language)
}

/// Week range such as `Mar 4 - 10`.
#[must_use]
pub fn week_label(interval: &Interval, language: Language) -> String {
    format!(
        "{} - {}",
        localized(interval.first, month_day_format(language), language),
        localized(interval.last, "%-d", language)
    )
}

/// Week range without month such as `4-10`.
#[must_use]
pub fn compact_week_label(interval: &Interval, language: Language) -> String {
    format!(
        "{}-{}",
        localized(interval.first, "%-d", language),
        localized(interval.last, "%-d", language)
    )
}

/// Integer with digit grouping, e.g. `12,345`, `12 345` or `١٢٬٣٤٥`.
#[must_use]
pub fn format_number(value: u32, language: Language) -> String {
    let digits = value.to_string();
    let separator = match language {
        Language::En => ',',
        Language::Ar => '\u{066c}',
        Language::Ru => '\u{00a0}',
    };
    let mut result = String::with_capacity(digits.len() * 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(match language {
            Language::Ar => digit
                .to_digit(10)
                .and_then(|d| char::from_u32(0x0660 + d))
                .unwrap_or(digit),
            Language::En | Language::Ru => digit,
        });
    }
    result
}
