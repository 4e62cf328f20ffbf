//! Response Validator — turns untrusted model output into typed evaluations.
//!
//! Three stages, in order:
//! 1. strict JSON parse (no fence stripping, no partial recovery)
//! 2. typed decode into the flavor's model, reporting the offending field path
//! 3. flavor-specific checks (score bounds, role score gating, impact ranking)
//!
//! Pure and deterministic. Unknown extra fields are ignored.

use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::evaluation::models::{AtsAnalysis, BasicAnalysis, JdMatchAnalysis, RewriteResponse};

const SCORE_MAX: u32 = 100;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViolationKind {
    #[error("required field is missing")]
    Missing,

    /// Wrong type, null, or a value the field type cannot hold.
    #[error("{0}")]
    Invalid(String),

    #[error("value {value} is outside 0..=100")]
    OutOfRange { value: u32 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// `raw` is kept for server-side diagnostics only.
    #[error("model output is not valid JSON: {reason}")]
    MalformedJson { raw: String, reason: String },

    #[error("schema violation at `{path}`: {kind}")]
    SchemaViolation { path: String, kind: ViolationKind },
}

impl ValidationError {
    fn at(path: impl Into<String>, kind: ViolationKind) -> Self {
        ValidationError::SchemaViolation {
            path: path.into(),
            kind,
        }
    }
}

pub fn validate_basic(raw: &str) -> Result<BasicAnalysis, ValidationError> {
    decode(parse_object(raw)?)
}

/// `target_role_supplied` gates `role_match_score`: without a role the score is
/// dropped whatever the model sent; with one it is required.
pub fn validate_ats(raw: &str, target_role_supplied: bool) -> Result<AtsAnalysis, ValidationError> {
    let mut fields = parse_object(raw)?;
    if !target_role_supplied {
        fields.remove("role_match_score");
    }
    let analysis: AtsAnalysis = decode(fields)?;

    check_score("ats_score", analysis.ats_score)?;
    match analysis.role_match_score {
        Some(score) => check_score("role_match_score", score)?,
        None if target_role_supplied => {
            return Err(ValidationError::at("role_match_score", ViolationKind::Missing))
        }
        None => {}
    }
    for (i, section) in analysis.section_feedback.iter().enumerate() {
        check_score(format!("section_feedback[{i}].score"), section.score)?;
    }

    Ok(analysis)
}

pub fn validate_jd_match(raw: &str) -> Result<JdMatchAnalysis, ValidationError> {
    let analysis: JdMatchAnalysis = decode(parse_object(raw)?)?;
    check_score("match_score", analysis.match_score)?;
    check_score(
        "keyword_coverage_percentage",
        analysis.keyword_coverage_percentage,
    )?;
    Ok(analysis)
}

/// Bullets come back ranked by `impact_score`, highest first. Ties keep the
/// order the model produced them in.
pub fn validate_rewrite(raw: &str) -> Result<RewriteResponse, ValidationError> {
    let mut response: RewriteResponse = decode(parse_object(raw)?)?;
    for (i, bullet) in response.rewritten_bullets.iter().enumerate() {
        check_score(format!("rewritten_bullets[{i}].impact_score"), bullet.impact_score)?;
    }

    // sort_by is stable
    response
        .rewritten_bullets
        .sort_by(|a, b| b.impact_score.cmp(&a.impact_score));

    Ok(response)
}

/// Strict parse into a top-level object. Syntax and EOF errors are malformed
/// output; a well-formed non-object root is a schema violation at `$`.
fn parse_object(raw: &str) -> Result<Map<String, Value>, ValidationError> {
    serde_json::from_str(raw).map_err(|e| match e.classify() {
        Category::Data => {
            ValidationError::at("$", ViolationKind::Invalid(redact(&e.to_string())))
        }
        Category::Io | Category::Syntax | Category::Eof => ValidationError::MalformedJson {
            raw: raw.to_string(),
            reason: e.to_string(),
        },
    })
}

fn decode<T: DeserializeOwned>(fields: Map<String, Value>) -> Result<T, ValidationError> {
    serde_path_to_error::deserialize(Value::Object(fields)).map_err(|err| {
        let path = err.path().to_string();
        violation(path, err.into_inner().to_string())
    })
}

/// serde reports a missing field against the enclosing object, so the field
/// name is folded back into the path.
fn violation(path: String, message: String) -> ValidationError {
    let parent = (path != ".").then_some(path);
    let missing = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'));

    match (missing, parent) {
        (Some(field), Some(parent)) => {
            ValidationError::at(format!("{parent}.{field}"), ViolationKind::Missing)
        }
        (Some(field), None) => ValidationError::at(field, ViolationKind::Missing),
        (None, parent) => ValidationError::at(
            parent.unwrap_or_else(|| "$".to_string()),
            ViolationKind::Invalid(redact(&message)),
        ),
    }
}

/// serde quotes the offending value in its messages. Keep only its type so
/// model text stays out of logs.
fn redact(message: &str) -> String {
    let Some((head, _)) = message.split_once(['"', '`']) else {
        return message.to_string();
    };
    match message.rsplit_once(", expected ") {
        Some((_, expected)) => format!("{}, expected {expected}", head.trim_end()),
        None => head.trim_end().to_string(),
    }
}

fn check_score(path: impl Into<String>, value: u32) -> Result<(), ValidationError> {
    if value > SCORE_MAX {
        return Err(ValidationError::at(path, ViolationKind::OutOfRange { value }));
    }
    Ok(())
}
