//! Turns the model's free-text reply into a [`SermonResponse`].
//!
//! The reply is untrusted: it may wrap the JSON in prose or Markdown fences,
//! use snake_case keys, or number its list items. Anything beyond those
//! cosmetic differences is rejected with `MalformedResponse`.

use crate::error::{Result, SermonError};
use crate::sermon::{KeyVerse, MainMessage, SermonRequest, SermonResponse};
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawKeyVerse {
    text: Option<String>,
    reference: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawMainMessage {
    title: Option<String>,
    points: Option<Vec<String>>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawReply {
    introduction: Option<String>,
    #[serde(alias = "keyVerse")]
    key_verse: Option<RawKeyVerse>,
    #[serde(alias = "mainMessage")]
    main_message: Option<RawMainMessage>,
    #[serde(alias = "practicalApplications")]
    practical_applications: Option<Vec<String>>,
    conclusion: Option<String>,
    #[serde(alias = "memorablePoints")]
    memorable_points: Option<Vec<String>>,
    illustrations: Option<Vec<String>>,
}

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```[A-Za-z]*\s*(.*?)```").expect("valid regex"))
}

fn list_marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(?:\d+[.)]|[-•*])\s+").expect("valid regex"))
}

/// Parses and validates a model reply.
///
/// A blank key verse reference is filled from the request; every other
/// field must come from the reply.
pub fn parse_sermon_reply(reply: &str, request: &SermonRequest) -> Result<SermonResponse> {
    let raw = extract_reply(reply)?;

    let key_verse = raw.key_verse.unwrap_or_default();
    let main_message = raw.main_message.unwrap_or_default();

    let reference = text(key_verse.reference);
    let response = SermonResponse {
        introduction: required("introduction", raw.introduction)?,
        key_verse: KeyVerse {
            text: required("keyVerse.text", key_verse.text)?,
            reference: if reference.is_empty() {
                request.reference()
            } else {
                reference
            },
        },
        main_message: MainMessage {
            title: required("mainMessage.title", main_message.title)?,
            points: list("mainMessage.points", main_message.points)?,
        },
        practical_applications: list("practicalApplications", raw.practical_applications)?,
        conclusion: required("conclusion", raw.conclusion)?,
        memorable_points: list("memorablePoints", raw.memorable_points)?,
        illustrations: list("illustrations", raw.illustrations)?,
    };

    response.validate()?;
    Ok(response)
}

impl RawReply {
    fn has_any_section(&self) -> bool {
        self.introduction.is_some()
            || self.key_verse.is_some()
            || self.main_message.is_some()
            || self.practical_applications.is_some()
            || self.conclusion.is_some()
            || self.memorable_points.is_some()
            || self.illustrations.is_some()
    }
}

/// Deserializes the first sermon-shaped object in the reply, looking inside a
/// code fence first.
///
/// Each `{` is tried in turn and only one complete value is read from it, so
/// braces in the surrounding prose are skipped. Objects with none of the
/// sermon keys (a nested `keyVerse`, say) are skipped too.
fn extract_reply(reply: &str) -> Result<RawReply> {
    let body = fence_regex()
        .captures(reply)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|s| s.contains('{'))
        .unwrap_or(reply);

    let mut first_error = None;
    for (start, _) in body.match_indices('{') {
        let mut values = serde_json::Deserializer::from_str(&body[start..]).into_iter::<RawReply>();
        match values.next() {
            Some(Ok(raw)) if raw.has_any_section() => return Ok(raw),
            Some(Err(e)) => {
                first_error.get_or_insert(e);
            }
            _ => {}
        }
    }

    Err(match first_error {
        Some(e) => SermonError::MalformedResponse(format!("invalid JSON: {e}")),
        None => SermonError::MalformedResponse("no JSON object in reply".to_string()),
    })
}

fn text(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        Some(_) => Err(SermonError::MalformedResponse(format!("{field} is empty"))),
        None => Err(SermonError::MalformedResponse(format!("{field} is missing"))),
    }
}

fn list(field: &str, value: Option<Vec<String>>) -> Result<Vec<String>> {
    let items = value
        .ok_or_else(|| SermonError::MalformedResponse(format!("{field} is missing")))?;
    Ok(items
        .iter()
        .map(|item| list_marker_regex().replace(item, "").trim().to_string())
        .collect())
}
