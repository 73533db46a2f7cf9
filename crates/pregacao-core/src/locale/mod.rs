//! Locales and their string bundles.
//!
//! Every piece of user-facing text the core produces (sermon templates, model
//! prompts, export headings, error notices) lives in a [`LocaleBundle`]. The
//! generation and session logic is written once and parameterized by locale.

mod en;
mod es;
mod pt;

use crate::bible::{BookReference, Testament};
use crate::error::Result;
use minijinja::{context, Environment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Portuguese => "pt",
            Locale::English => "en",
            Locale::Spanish => "es",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pt" | "pt-br" | "pt_br" => Some(Locale::Portuguese),
            "en" | "en-us" | "en_us" => Some(Locale::English),
            "es" => Some(Locale::Spanish),
            _ => None,
        }
    }

    pub fn all() -> Vec<Locale> {
        vec![Locale::Portuguese, Locale::English, Locale::Spanish]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::Portuguese => "Português",
            Locale::English => "English",
            Locale::Spanish => "Español",
        }
    }

    pub fn bundle(&self) -> &'static LocaleBundle {
        match self {
            Locale::Portuguese => &pt::BUNDLE,
            Locale::English => &en::BUNDLE,
            Locale::Spanish => &es::BUNDLE,
        }
    }
}

/// Section headings used by the plain-text export.
#[derive(Debug)]
pub struct ExportHeadings {
    pub sermon: &'static str,
    pub based_on: &'static str,
    pub theme: &'static str,
    pub introduction: &'static str,
    pub key_verse: &'static str,
    pub development: &'static str,
    pub applications: &'static str,
    pub conclusion: &'static str,
    pub memorable_points: &'static str,
    pub illustrations: &'static str,
}

/// All locale-dependent text.
///
/// Template fields are minijinja sources rendered with `book`, `chapter`,
/// `verses` and `theme` in scope (`verses`/`theme` are `none` when absent).
#[derive(Debug)]
pub struct LocaleBundle {
    pub introduction: &'static str,
    pub key_verse_text: &'static str,
    pub title: &'static str,
    pub points: [&'static str; 3],
    pub applications: [&'static str; 4],
    pub conclusion: &'static str,
    pub memorable_points: [&'static str; 3],
    pub illustrations: [&'static str; 3],

    /// System message for the external model.
    pub system_instruction: &'static str,
    /// User message template for the external model.
    pub user_prompt: &'static str,

    pub headings: ExportHeadings,

    pub missing_fields: &'static str,
    pub generation_failed: &'static str,

    pub old_testament: &'static str,
    pub new_testament: &'static str,
    pub generating: &'static str,
    /// Rendered with `book`.
    pub unknown_book: &'static str,
    /// Rendered with `book` and `chapters`.
    pub chapter_limit: &'static str,
}

impl LocaleBundle {
    pub fn testament_name(&self, testament: Testament) -> &'static str {
        match testament {
            Testament::Old => self.old_testament,
            Testament::New => self.new_testament,
        }
    }

    pub fn unknown_book_notice(&self, book: &str) -> Result<String> {
        Ok(Environment::new().render_str(self.unknown_book, context! { book })?)
    }

    pub fn chapter_limit_notice(&self, book: &BookReference) -> Result<String> {
        Ok(Environment::new().render_str(
            self.chapter_limit,
            context! { book => book.name, chapters => book.chapters },
        )?)
    }
}
