use super::{render, SermonGenerator};
use crate::config::DEFAULT_TEMPLATE_DELAY_MS;
use crate::error::Result;
use crate::locale::Locale;
use crate::sermon::{KeyVerse, MainMessage, SermonRequest, SermonResponse};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Deterministic demo generator: fills the locale's fixed templates with the
/// request fields after a simulated network delay.
#[derive(Debug, Clone)]
pub struct TemplateGenerator {
    locale: Locale,
    delay: Duration,
}

impl TemplateGenerator {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            delay: Duration::from_millis(DEFAULT_TEMPLATE_DELAY_MS),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The sermon without the simulated delay.
    pub fn render_sermon(&self, request: &SermonRequest) -> Result<SermonResponse> {
        let t = self.locale.bundle();
        let all = |sources: &[&str]| -> Result<Vec<String>> {
            sources.iter().map(|s| render(s, request)).collect()
        };

        Ok(SermonResponse {
            introduction: render(t.introduction, request)?,
            key_verse: KeyVerse {
                text: render(t.key_verse_text, request)?,
                reference: request.reference(),
            },
            main_message: MainMessage {
                title: render(t.title, request)?,
                points: all(&t.points[..])?,
            },
            practical_applications: all(&t.applications[..])?,
            conclusion: render(t.conclusion, request)?,
            memorable_points: all(&t.memorable_points[..])?,
            illustrations: all(&t.illustrations[..])?,
        })
    }
}

#[async_trait]
impl SermonGenerator for TemplateGenerator {
    async fn generate(&self, request: &SermonRequest) -> Result<SermonResponse> {
        debug!(
            book = %request.book,
            chapter = %request.chapter,
            locale = self.locale.as_str(),
            "rendering templated sermon"
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.render_sermon(request)
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sermon::{ILLUSTRATIONS, MEMORABLE_POINTS, MESSAGE_POINTS, PRACTICAL_APPLICATIONS};

    fn generator(locale: Locale) -> TemplateGenerator {
        TemplateGenerator::new(locale).with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_every_locale_produces_complete_sermon() {
        let request = SermonRequest::new("Salmos", "23");
        for locale in Locale::all() {
            let sermon = generator(locale).generate(&request).await.unwrap();
            sermon.validate().unwrap();
            assert_eq!(sermon.main_message.points.len(), MESSAGE_POINTS);
            assert_eq!(sermon.practical_applications.len(), PRACTICAL_APPLICATIONS);
            assert_eq!(sermon.memorable_points.len(), MEMORABLE_POINTS);
            assert_eq!(sermon.illustrations.len(), ILLUSTRATIONS);
        }
    }

    #[tokio::test]
    async fn test_key_verse_reference() {
        let gen = generator(Locale::English);
        let sermon = gen
            .generate(&SermonRequest::new("John", "3").with_verses("16"))
            .await
            .unwrap();
        assert_eq!(sermon.key_verse.reference, "John 3:16");

        let sermon = gen.generate(&SermonRequest::new("John", "3")).await.unwrap();
        assert_eq!(sermon.key_verse.reference, "John 3");
    }

    #[test]
    fn test_theme_flows_into_title_and_conclusion() {
        let gen = generator(Locale::English);
        let sermon = gen
            .render_sermon(&SermonRequest::new("Romans", "8").with_theme("Hope and Perseverance"))
            .unwrap();
        assert_eq!(sermon.main_message.title, "Hope and Perseverance in Romans");
        assert!(sermon
            .conclusion
            .contains("Through the theme of hope and perseverance, we are called"));
        assert!(sermon.introduction.contains("reflect on Hope and Perseverance."));
    }

    #[test]
    fn test_defaults_without_theme() {
        let sermon = generator(Locale::English)
            .render_sermon(&SermonRequest::new("Romans", "8"))
            .unwrap();
        assert_eq!(sermon.main_message.title, "God's Faithfulness in Romans");
        assert!(sermon.introduction.contains("In chapter 8, we find a passage"));
        assert!(sermon.introduction.contains("reflect on our spiritual journey."));
        assert!(sermon.conclusion.contains("purposes. We are called"));
        assert!(sermon.main_message.points[0].contains("in Romans shows us"));
    }

    #[test]
    fn test_portuguese_and_spanish_defaults() {
        let pt = generator(Locale::Portuguese)
            .render_sermon(&SermonRequest::new("João", "3"))
            .unwrap();
        assert_eq!(pt.main_message.title, "A Fidelidade de Deus em João");
        assert!(pt.introduction.contains("No capítulo 3, encontramos"));

        let es = generator(Locale::Spanish)
            .render_sermon(&SermonRequest::new("Juan", "3").with_theme("Fe y Confianza"))
            .unwrap();
        assert_eq!(es.main_message.title, "Fe y Confianza en Juan");
        assert!(es.conclusion.contains("A través del tema de fe y confianza, somos"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let gen = generator(Locale::Spanish);
        let request = SermonRequest::new("Juan", "1").with_verses("1-5");
        assert_eq!(
            gen.render_sermon(&request).unwrap(),
            gen.render_sermon(&request).unwrap()
        );
    }

    #[test]
    fn test_render_escapes_nothing() {
        let sermon = generator(Locale::English)
            .render_sermon(&SermonRequest::new("Song of Songs", "2").with_theme("Love & <Joy>"))
            .unwrap();
        assert_eq!(sermon.main_message.title, "Love & <Joy> in Song of Songs");
    }
}
