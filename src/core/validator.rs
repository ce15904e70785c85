//! Field validation
//!
//! Pure checks over a candidate record. Validation short-circuits: only the
//! first violated rule (in a fixed priority order) is reported, so the View
//! can focus the offending input.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use thiserror::Error;

use crate::core::models::{Student, StudentInput};

/// Accepted email shape: local part of at least three characters from the
/// usual set, domain one of the three accepted providers.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]{3,}@(yandex\.ru|gmail\.com|mail\.ru)$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Earliest accepted birth date.
fn min_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1992, 1, 1).expect("valid date")
}

/// The first violated rule, in check order.
///
/// Display strings are the user-facing messages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Some required text field is empty or whitespace-only.
    #[error("Все поля обязательны для заполнения")]
    RequiredFieldMissing,
    /// Nothing picked in the course selector.
    #[error("Выберите курс")]
    CourseNotSelected,
    #[error("Некорректный формат email. Используйте домены: yandex.ru, gmail.com, mail.ru")]
    InvalidEmailFormat,
    #[error("Дата рождения должна быть не ранее 01.01.1992 и не позднее текущей даты")]
    BirthDateOutOfRange,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Check `input` against the business rules and build the record.
///
/// Checks run in priority order and stop at the first failure:
/// required fields, course, email format, birth date range.
pub fn validate(input: StudentInput) -> Result<Student, ValidationError> {
    validate_at(input, Local::now().date_naive())
}

/// Like [`validate`], with an explicit "today" as the upper birth date bound.
pub fn validate_at(input: StudentInput, today: NaiveDate) -> Result<Student, ValidationError> {
    if is_blank(&input.last_name)
        || is_blank(&input.first_name)
        || is_blank(&input.middle_name)
        || is_blank(&input.group)
        || is_blank(&input.email)
    {
        return Err(ValidationError::RequiredFieldMissing);
    }

    let course = match input.course {
        Some(c) if (1..=4).contains(&c) => c,
        _ => return Err(ValidationError::CourseNotSelected),
    };

    if !EMAIL_RE.is_match(&input.email) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    // Both bounds inclusive.
    if input.birth_date < min_birth_date() || input.birth_date > today {
        return Err(ValidationError::BirthDateOutOfRange);
    }

    Ok(Student {
        last_name: input.last_name,
        first_name: input.first_name,
        middle_name: input.middle_name,
        course,
        group: input.group,
        birth_date: input.birth_date,
        email: input.email,
    })
}
