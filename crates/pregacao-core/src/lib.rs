pub mod bible;
pub mod config;
pub mod error;
pub mod generator;
pub mod locale;
pub mod provider;
pub mod sermon;
pub mod session;
pub mod state;

// Re-export main types for convenience
pub use bible::{find_book, list_books, list_popular_themes, BookReference, Testament};
pub use config::Config;
pub use error::{Result, SermonError};
pub use generator::{build_generator, OpenAIGenerator, SermonGenerator, TemplateGenerator};
pub use locale::{Locale, LocaleBundle};
pub use provider::Strategy;
pub use sermon::{export_plain_text, KeyVerse, MainMessage, SermonRequest, SermonResponse};
pub use session::{SessionController, HISTORY_CAPACITY};
pub use state::{HistoryEntry, SermonRecord};
