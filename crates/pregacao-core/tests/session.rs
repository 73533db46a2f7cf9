use async_trait::async_trait;
use pregacao_core::{
    Locale, SermonError, SermonGenerator, SermonRequest, SermonResponse, SessionController,
    TemplateGenerator, HISTORY_CAPACITY,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Wraps the templated generator with switchable failure, delay and a call counter.
struct ScriptedGenerator {
    inner: TemplateGenerator,
    fail: AtomicBool,
    incomplete: AtomicBool,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    fn new() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    fn with_delay(delay: Duration) -> Self {
        Self {
            inner: TemplateGenerator::new(Locale::English).with_delay(Duration::ZERO),
            fail: AtomicBool::new(false),
            incomplete: AtomicBool::new(false),
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SermonGenerator for ScriptedGenerator {
    async fn generate(&self, request: &SermonRequest) -> pregacao_core::Result<SermonResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(SermonError::RemoteService {
                status: Some(500),
                message: "boom".to_string(),
            });
        }
        let mut sermon = self.inner.generate(request).await?;
        if self.incomplete.load(Ordering::SeqCst) {
            sermon.illustrations.truncate(1);
        }
        Ok(sermon)
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

fn session_with(generator: Arc<ScriptedGenerator>) -> SessionController {
    SessionController::new(generator, Locale::English)
}

fn chapter_request(chapter: usize) -> SermonRequest {
    SermonRequest::new("Psalms", chapter.to_string())
}

fn chapters(session: &SessionController) -> Vec<String> {
    session
        .history()
        .iter()
        .map(|e| e.record.request.chapter.clone())
        .collect()
}

#[tokio::test]
async fn history_is_bounded_and_newest_first() {
    let session = session_with(Arc::new(ScriptedGenerator::new()));

    for chapter in 1..=HISTORY_CAPACITY + 1 {
        session.submit(chapter_request(chapter)).await.unwrap();
        assert!(session.history_len() <= HISTORY_CAPACITY);
    }

    let history = chapters(&session);
    assert_eq!(history.len(), 10);
    assert_eq!(history[0], "11");
    assert_eq!(history[9], "2");
    assert!(!history.contains(&"1".to_string()));

    let timestamps: Vec<i64> = session.history().iter().map(|e| e.timestamp).collect();
    assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn delete_removes_one_and_keeps_order() {
    let session = session_with(Arc::new(ScriptedGenerator::new()));
    for chapter in 1..=5 {
        session.submit(chapter_request(chapter)).await.unwrap();
    }
    assert_eq!(chapters(&session), vec!["5", "4", "3", "2", "1"]);

    let removed = session.delete_from_history(2).unwrap();
    assert_eq!(removed.record.request.chapter, "3");
    assert_eq!(chapters(&session), vec!["5", "4", "2", "1"]);

    assert!(matches!(
        session.delete_from_history(4),
        Err(SermonError::HistoryIndexOutOfRange { index: 4, len: 4 })
    ));
    assert_eq!(session.history_len(), 4);
}

#[tokio::test]
async fn select_sets_current_without_touching_history() {
    let session = session_with(Arc::new(ScriptedGenerator::new()));
    for chapter in 1..=3 {
        session.submit(chapter_request(chapter)).await.unwrap();
    }
    let before = session.history();

    for index in 0..before.len() {
        let record = session.select_from_history(index).unwrap();
        assert_eq!(record, before[index].record);
        assert_eq!(session.current(), Some(record));
        assert_eq!(session.history(), before);
    }

    assert!(session.select_from_history(3).is_err());
    assert_eq!(session.current(), Some(before[2].record.clone()));
}

#[tokio::test]
async fn failed_generation_is_non_destructive() {
    let generator = Arc::new(ScriptedGenerator::new());
    let session = session_with(generator.clone());

    let first = session.submit(chapter_request(23)).await.unwrap();
    generator.fail.store(true, Ordering::SeqCst);

    let err = session.submit(chapter_request(91)).await.unwrap_err();
    assert!(matches!(err, SermonError::RemoteService { status: Some(500), .. }));
    assert!(err.is_retryable());
    assert_eq!(session.history_len(), 1);
    assert_eq!(session.current(), Some(first));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn incomplete_sermon_is_rejected() {
    let generator = Arc::new(ScriptedGenerator::new());
    generator.incomplete.store(true, Ordering::SeqCst);
    let session = session_with(generator);

    let err = session.submit(chapter_request(1)).await.unwrap_err();
    assert!(matches!(err, SermonError::MalformedResponse(_)));
    assert!(session.current().is_none());
    assert_eq!(session.history_len(), 0);
}

#[tokio::test]
async fn validation_happens_before_generation() {
    let generator = Arc::new(ScriptedGenerator::new());
    let session = session_with(generator.clone());

    let err = session
        .submit(SermonRequest::new("Psalms", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, SermonError::Validation(_)));
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn overlapping_submission_is_rejected() {
    let generator = Arc::new(ScriptedGenerator::with_delay(Duration::from_millis(100)));
    let session = session_with(generator.clone());

    let (first, second) = tokio::join!(
        session.submit(chapter_request(1)),
        session.submit(chapter_request(2)),
    );

    assert!(first.is_ok());
    assert!(matches!(second, Err(SermonError::Busy)));
    assert_eq!(generator.calls(), 1);
    assert_eq!(chapters(&session), vec!["1"]);
    assert!(!session.is_loading());

    // The session accepts work again once the first submission is done.
    session.submit(chapter_request(3)).await.unwrap();
    assert_eq!(chapters(&session), vec!["3", "1"]);
}

#[tokio::test]
async fn slow_generation_times_out() {
    let generator = Arc::new(ScriptedGenerator::with_delay(Duration::from_secs(5)));
    let session = session_with(generator).with_timeout(Duration::from_millis(50));

    let err = session.submit(chapter_request(1)).await.unwrap_err();
    assert!(matches!(err, SermonError::Timeout(d) if d == Duration::from_millis(50)));
    assert!(session.current().is_none());
    assert_eq!(session.history_len(), 0);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn loading_flag_visible_during_generation() {
    let generator = Arc::new(ScriptedGenerator::with_delay(Duration::from_millis(50)));
    let session = session_with(generator);

    let observe = async {
        tokio::task::yield_now().await;
        session.is_loading()
    };
    let (result, seen_loading) = tokio::join!(session.submit(chapter_request(1)), observe);

    assert!(result.is_ok());
    assert!(seen_loading);
    assert!(!session.is_loading());
}
