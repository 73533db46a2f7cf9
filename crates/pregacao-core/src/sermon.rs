use crate::error::{Result, SermonError};
use crate::locale::Locale;
use crate::state::SermonRecord;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const MESSAGE_POINTS: usize = 3;
pub const PRACTICAL_APPLICATIONS: usize = 4;
pub const MEMORABLE_POINTS: usize = 3;
pub const ILLUSTRATIONS: usize = 3;

/// What the user asked for: a passage and an optional theme.
///
/// `chapter` and `verses` are kept as free text; nothing here parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SermonRequest {
    pub book: String,
    pub chapter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl SermonRequest {
    pub fn new(book: impl Into<String>, chapter: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter: chapter.into(),
            verses: None,
            theme: None,
        }
    }

    /// Blank input clears the field, as an empty form box does.
    pub fn with_verses(mut self, verses: impl Into<String>) -> Self {
        self.verses = non_blank(verses.into());
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = non_blank(theme.into());
        self
    }

    /// Book and chapter are required; everything else is optional.
    pub fn validate(&self, locale: Locale) -> Result<()> {
        if self.book.trim().is_empty() || self.chapter.trim().is_empty() {
            return Err(SermonError::Validation(
                locale.bundle().missing_fields.to_string(),
            ));
        }
        Ok(())
    }

    /// `"{book} {chapter}"`, or `"{book} {chapter}:{verses}"` when verses are given.
    pub fn reference(&self) -> String {
        match &self.verses {
            Some(verses) => format!("{} {}:{}", self.book, self.chapter, verses),
            None => format!("{} {}", self.book, self.chapter),
        }
    }
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyVerse {
    pub text: String,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainMessage {
    pub title: String,
    pub points: Vec<String>,
}

/// A complete seven-section sermon outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SermonResponse {
    pub introduction: String,
    pub key_verse: KeyVerse,
    pub main_message: MainMessage,
    pub practical_applications: Vec<String>,
    pub conclusion: String,
    pub memorable_points: Vec<String>,
    pub illustrations: Vec<String>,
}

impl SermonResponse {
    /// Checks that every section is present and the lists have their
    /// documented lengths. A response failing this is never handed out.
    pub fn validate(&self) -> Result<()> {
        require_text("introduction", &self.introduction)?;
        require_text("keyVerse.text", &self.key_verse.text)?;
        require_text("keyVerse.reference", &self.key_verse.reference)?;
        require_text("mainMessage.title", &self.main_message.title)?;
        require_list("mainMessage.points", &self.main_message.points, MESSAGE_POINTS)?;
        require_list(
            "practicalApplications",
            &self.practical_applications,
            PRACTICAL_APPLICATIONS,
        )?;
        require_text("conclusion", &self.conclusion)?;
        require_list("memorablePoints", &self.memorable_points, MEMORABLE_POINTS)?;
        require_list("illustrations", &self.illustrations, ILLUSTRATIONS)?;
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SermonError::MalformedResponse(format!("{field} is empty")));
    }
    Ok(())
}

fn require_list(field: &str, items: &[String], expected: usize) -> Result<()> {
    if items.len() != expected {
        return Err(SermonError::MalformedResponse(format!(
            "{field} has {} items, expected {expected}",
            items.len()
        )));
    }
    if let Some(pos) = items.iter().position(|item| item.trim().is_empty()) {
        return Err(SermonError::MalformedResponse(format!(
            "{field}[{pos}] is empty"
        )));
    }
    Ok(())
}

/// Renders a sermon as the plain text used for clipboard copy.
///
/// Section order: title, reference, theme, introduction, key verse, numbered
/// development points, bulleted applications, conclusion, numbered memorable
/// points, numbered illustrations. The output depends only on the inputs.
pub fn export_plain_text(record: &SermonRecord, locale: Locale) -> String {
    let h = &locale.bundle().headings;
    let sermon = &record.sermon;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}: {}", h.sermon, sermon.main_message.title);
    let _ = writeln!(out, "{}: {}", h.based_on, sermon.key_verse.reference);
    if let Some(theme) = &record.request.theme {
        let _ = writeln!(out, "{}: {}", h.theme, theme);
    }

    let _ = write!(out, "\n{}:\n{}\n", h.introduction, sermon.introduction);

    let _ = write!(
        out,
        "\n{}:\n{}\n{}\n",
        h.key_verse,
        quoted(&sermon.key_verse.text),
        sermon.key_verse.reference
    );

    let _ = write!(out, "\n{}:\n", h.development);
    write_numbered(&mut out, &sermon.main_message.points);

    let _ = write!(out, "\n{}:\n", h.applications);
    for app in &sermon.practical_applications {
        let _ = writeln!(out, "• {app}");
    }

    let _ = write!(out, "\n{}:\n{}\n", h.conclusion, sermon.conclusion);

    let _ = write!(out, "\n{}:\n", h.memorable_points);
    write_numbered(&mut out, &sermon.memorable_points);

    let _ = write!(out, "\n{}:\n", h.illustrations);
    write_numbered(&mut out, &sermon.illustrations);

    out.trim().to_string()
}

fn write_numbered(out: &mut String, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, item);
    }
}

fn quoted(text: &str) -> String {
    let text = text.trim();
    if text.starts_with('"') || text.starts_with('“') {
        text.to_string()
    } else {
        format!("\"{text}\"")
    }
}
