//! The session controller: current sermon plus a bounded history.
//!
//! One controller per user session. Nothing here is persisted; dropping the
//! controller drops the history.

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::{Result, SermonError};
use crate::generator::SermonGenerator;
use crate::locale::Locale;
use crate::sermon::{export_plain_text, SermonRequest};
use crate::state::{HistoryEntry, SermonRecord};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Most sermons kept in history; older ones are evicted on insert.
pub const HISTORY_CAPACITY: usize = 10;

#[derive(Default)]
struct SessionState {
    current: Option<SermonRecord>,
    /// Newest first.
    history: Vec<HistoryEntry>,
}

pub struct SessionController {
    generator: Arc<dyn SermonGenerator>,
    locale: Locale,
    timeout: Duration,
    state: Mutex<SessionState>,
    loading: AtomicBool,
}

/// Clears the loading flag when a submission ends, including by cancellation.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SessionController {
    pub fn new(generator: Arc<dyn SermonGenerator>, locale: Locale) -> Self {
        Self {
            generator,
            locale,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            state: Mutex::new(SessionState::default()),
            loading: AtomicBool::new(false),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// True while a submission is awaiting its generator.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Generates a sermon and records it.
    ///
    /// Validation runs before the generator is touched. A second submission
    /// while one is in flight is rejected with [`SermonError::Busy`]. On any
    /// error the current sermon and history are left exactly as they were.
    pub async fn submit(&self, request: SermonRequest) -> Result<SermonRecord> {
        request.validate(self.locale)?;

        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("submission rejected, generation already in flight");
            return Err(SermonError::Busy);
        }
        let _guard = LoadingGuard(&self.loading);

        debug!(
            generator = self.generator.name(),
            reference = %request.reference(),
            "generating sermon"
        );
        let sermon = match tokio::time::timeout(self.timeout, self.generator.generate(&request)).await
        {
            Ok(Ok(sermon)) => sermon,
            Ok(Err(err)) => {
                warn!(error = %err, "sermon generation failed");
                return Err(err);
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "sermon generation timed out");
                return Err(SermonError::Timeout(self.timeout));
            }
        };
        sermon.validate()?;

        let record = SermonRecord { sermon, request };
        let entry = HistoryEntry {
            record: record.clone(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        };

        let mut state = self.lock();
        state.current = Some(record.clone());
        state.history.insert(0, entry);
        state.history.truncate(HISTORY_CAPACITY);
        info!(
            title = %record.sermon.main_message.title,
            history_len = state.history.len(),
            "sermon generated"
        );

        Ok(record)
    }

    /// Re-displays a past sermon. History is not modified.
    pub fn select_from_history(&self, index: usize) -> Result<SermonRecord> {
        let mut state = self.lock();
        let len = state.history.len();
        let record = state
            .history
            .get(index)
            .map(|entry| entry.record.clone())
            .ok_or(SermonError::HistoryIndexOutOfRange { index, len })?;
        state.current = Some(record.clone());
        Ok(record)
    }

    /// Removes one history entry; the rest keep their relative order.
    pub fn delete_from_history(&self, index: usize) -> Result<HistoryEntry> {
        let mut state = self.lock();
        let len = state.history.len();
        if index >= len {
            return Err(SermonError::HistoryIndexOutOfRange { index, len });
        }
        Ok(state.history.remove(index))
    }

    /// Returns to the input form: clears the current sermon only.
    pub fn reset(&self) {
        self.lock().current = None;
    }

    pub fn current(&self) -> Option<SermonRecord> {
        self.lock().current.clone()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.lock().history.clone()
    }

    pub fn history_len(&self) -> usize {
        self.lock().history.len()
    }

    /// Plain-text export of the current sermon, if any.
    pub fn export_current(&self) -> Option<String> {
        self.lock()
            .current
            .as_ref()
            .map(|record| export_plain_text(record, self.locale))
    }

    // Never held across an await.
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
