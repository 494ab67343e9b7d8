/// 상품 필드 검증
/// 1. 텍스트 필드: 필수, 빈 문자열 불가
/// 2. 입찰가 필드: 필수, 유한한 수, 0 이상
// region:    --- Imports
use super::model::NewItem;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Validation Error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationReason {
    Required,
    Empty,
    NotFinite,
    Negative,
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Required => "is required",
            Self::Empty => "must not be empty",
            Self::NotFinite => "must be a finite number",
            Self::Negative => "must be greater than or equal to 0",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: ViolationReason,
}

/// 실패한 제약 목록
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}", describe(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn single(field: &'static str, reason: ViolationReason) -> Self {
        Self {
            violations: vec![FieldViolation { field, reason }],
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.violations.iter().map(|v| v.field)
    }
}

fn describe(violations: &[FieldViolation]) -> String {
    let parts: Vec<String> = violations
        .iter()
        .map(|v| format!("`{}` {}", v.field, v.reason))
        .collect();
    format!("Item validation failed: {}", parts.join(", "))
}

// endregion: --- Validation Error

// region:    --- Rules
/// 검증을 통과한 필드 값
#[derive(Debug, Clone, PartialEq)]
pub struct ValidItem<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub starting_bid: f64,
    pub current_bid: f64,
}

/// 후보 검증. 실패한 필드를 모두 모아 반환
pub fn validate(candidate: &NewItem) -> Result<ValidItem<'_>, ValidationError> {
    let mut violations = Vec::new();

    let name = check_text("name", candidate.name.as_deref(), &mut violations);
    let description = check_text(
        "description",
        candidate.description.as_deref(),
        &mut violations,
    );
    let starting_bid = check_bid("startingBid", candidate.starting_bid, &mut violations);
    let current_bid = check_bid("currentBid", candidate.current_bid, &mut violations);

    match (name, description, starting_bid, current_bid) {
        (Some(name), Some(description), Some(starting_bid), Some(current_bid))
            if violations.is_empty() =>
        {
            Ok(ValidItem {
                name,
                description,
                starting_bid,
                current_bid,
            })
        }
        _ => Err(ValidationError { violations }),
    }
}

fn check_text<'a>(
    field: &'static str,
    value: Option<&'a str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a str> {
    let reason = match value {
        None => ViolationReason::Required,
        Some("") => ViolationReason::Empty,
        Some(text) => return Some(text),
    };
    violations.push(FieldViolation { field, reason });
    None
}

fn check_bid(
    field: &'static str,
    value: Option<f64>,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    let reason = match value {
        None => ViolationReason::Required,
        Some(bid) if !bid.is_finite() => ViolationReason::NotFinite,
        Some(bid) if bid < 0.0 => ViolationReason::Negative,
        Some(bid) => return Some(bid),
    };
    violations.push(FieldViolation { field, reason });
    None
}

// endregion: --- Rules
