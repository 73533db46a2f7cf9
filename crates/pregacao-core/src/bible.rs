//! Static scripture reference data: the 66-book canon and suggested themes.

use crate::locale::Locale;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "old" | "ot" | "antigo" | "antiguo" => Some(Testament::Old),
            "new" | "nt" | "novo" | "nuevo" => Some(Testament::New),
            _ => None,
        }
    }
}

/// A canonical book as shown for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookReference {
    pub name: &'static str,
    pub chapters: u32,
    pub testament: Testament,
}

impl BookReference {
    /// Whether `chapter` names a chapter that exists in this book.
    pub fn has_chapter(&self, chapter: u32) -> bool {
        (1..=self.chapters).contains(&chapter)
    }
}

struct CanonBook {
    pt: &'static str,
    en: &'static str,
    es: &'static str,
    chapters: u32,
    testament: Testament,
}

impl CanonBook {
    fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Portuguese => self.pt,
            Locale::English => self.en,
            Locale::Spanish => self.es,
        }
    }

    fn reference(&self, locale: Locale) -> BookReference {
        BookReference {
            name: self.name(locale),
            chapters: self.chapters,
            testament: self.testament,
        }
    }
}

macro_rules! book {
    ($pt:literal, $en:literal, $es:literal, $chapters:literal, $testament:ident) => {
        CanonBook {
            pt: $pt,
            en: $en,
            es: $es,
            chapters: $chapters,
            testament: Testament::$testament,
        }
    };
}

static CANON: [CanonBook; 66] = [
    // Old Testament
    book!("Gênesis", "Genesis", "Génesis", 50, Old),
    book!("Êxodo", "Exodus", "Éxodo", 40, Old),
    book!("Levítico", "Leviticus", "Levítico", 27, Old),
    book!("Números", "Numbers", "Números", 36, Old),
    book!("Deuteronômio", "Deuteronomy", "Deuteronomio", 34, Old),
    book!("Josué", "Joshua", "Josué", 24, Old),
    book!("Juízes", "Judges", "Jueces", 21, Old),
    book!("Rute", "Ruth", "Rut", 4, Old),
    book!("1 Samuel", "1 Samuel", "1 Samuel", 31, Old),
    book!("2 Samuel", "2 Samuel", "2 Samuel", 24, Old),
    book!("1 Reis", "1 Kings", "1 Reyes", 22, Old),
    book!("2 Reis", "2 Kings", "2 Reyes", 25, Old),
    book!("1 Crônicas", "1 Chronicles", "1 Crónicas", 29, Old),
    book!("2 Crônicas", "2 Chronicles", "2 Crónicas", 36, Old),
    book!("Esdras", "Ezra", "Esdras", 10, Old),
    book!("Neemias", "Nehemiah", "Nehemías", 13, Old),
    book!("Ester", "Esther", "Ester", 10, Old),
    book!("Jó", "Job", "Job", 42, Old),
    book!("Salmos", "Psalms", "Salmos", 150, Old),
    book!("Provérbios", "Proverbs", "Proverbios", 31, Old),
    book!("Eclesiastes", "Ecclesiastes", "Eclesiastés", 12, Old),
    book!("Cantares", "Song of Songs", "Cantares", 8, Old),
    book!("Isaías", "Isaiah", "Isaías", 66, Old),
    book!("Jeremias", "Jeremiah", "Jeremías", 52, Old),
    book!("Lamentações", "Lamentations", "Lamentaciones", 5, Old),
    book!("Ezequiel", "Ezekiel", "Ezequiel", 48, Old),
    book!("Daniel", "Daniel", "Daniel", 12, Old),
    book!("Oséias", "Hosea", "Oseas", 14, Old),
    book!("Joel", "Joel", "Joel", 3, Old),
    book!("Amós", "Amos", "Amós", 9, Old),
    book!("Obadias", "Obadiah", "Abdías", 1, Old),
    book!("Jonas", "Jonah", "Jonás", 4, Old),
    book!("Miquéias", "Micah", "Miqueas", 7, Old),
    book!("Naum", "Nahum", "Nahúm", 3, Old),
    book!("Habacuque", "Habakkuk", "Habacuc", 3, Old),
    book!("Sofonias", "Zephaniah", "Sofonías", 3, Old),
    book!("Ageu", "Haggai", "Hageo", 2, Old),
    book!("Zacarias", "Zechariah", "Zacarías", 14, Old),
    book!("Malaquias", "Malachi", "Malaquías", 4, Old),

    // New Testament
    book!("Mateus", "Matthew", "Mateo", 28, New),
    book!("Marcos", "Mark", "Marcos", 16, New),
    book!("Lucas", "Luke", "Lucas", 24, New),
    book!("João", "John", "Juan", 21, New),
    book!("Atos", "Acts", "Hechos", 28, New),
    book!("Romanos", "Romans", "Romanos", 16, New),
    book!("1 Coríntios", "1 Corinthians", "1 Corintios", 16, New),
    book!("2 Coríntios", "2 Corinthians", "2 Corintios", 13, New),
    book!("Gálatas", "Galatians", "Gálatas", 6, New),
    book!("Efésios", "Ephesians", "Efesios", 6, New),
    book!("Filipenses", "Philippians", "Filipenses", 4, New),
    book!("Colossenses", "Colossians", "Colosenses", 4, New),
    book!("1 Tessalonicenses", "1 Thessalonians", "1 Tesalonicenses", 5, New),
    book!("2 Tessalonicenses", "2 Thessalonians", "2 Tesalonicenses", 3, New),
    book!("1 Timóteo", "1 Timothy", "1 Timoteo", 6, New),
    book!("2 Timóteo", "2 Timothy", "2 Timoteo", 4, New),
    book!("Tito", "Titus", "Tito", 3, New),
    book!("Filemom", "Philemon", "Filemón", 1, New),
    book!("Hebreus", "Hebrews", "Hebreos", 13, New),
    book!("Tiago", "James", "Santiago", 5, New),
    book!("1 Pedro", "1 Peter", "1 Pedro", 5, New),
    book!("2 Pedro", "2 Peter", "2 Pedro", 3, New),
    book!("1 João", "1 John", "1 Juan", 5, New),
    book!("2 João", "2 John", "2 Juan", 1, New),
    book!("3 João", "3 John", "3 Juan", 1, New),
    book!("Judas", "Jude", "Judas", 1, New),
    book!("Apocalipse", "Revelation", "Apocalipsis", 22, New),

];

static THEMES_PT: [&str; 15] = [
    "Fé e Confiança",
    "Amor e Compaixão",
    "Perdão e Reconciliação",
    "Esperança e Perseverança",
    "Gratidão e Louvor",
    "Arrependimento e Conversão",
    "Oração e Comunhão",
    "Família e Relacionamentos",
    "Liderança e Serviço",
    "Salvação e Graça",
    "Paz e Tranquilidade",
    "Sabedoria e Discernimento",
    "Prosperidade e Provisão",
    "Cura e Restauração",
    "Evangelização e Missões",
];

static THEMES_EN: [&str; 15] = [
    "Faith and Trust",
    "Love and Compassion",
    "Forgiveness and Reconciliation",
    "Hope and Perseverance",
    "Gratitude and Praise",
    "Repentance and Conversion",
    "Prayer and Fellowship",
    "Family and Relationships",
    "Leadership and Service",
    "Salvation and Grace",
    "Peace and Tranquility",
    "Wisdom and Discernment",
    "Prosperity and Provision",
    "Healing and Restoration",
    "Evangelism and Missions",
];

static THEMES_ES: [&str; 15] = [
    "Fe y Confianza",
    "Amor y Compasión",
    "Perdón y Reconciliación",
    "Esperanza y Perseverancia",
    "Gratitud y Alabanza",
    "Arrepentimiento y Conversión",
    "Oración y Comunión",
    "Familia y Relaciones",
    "Liderazgo y Servicio",
    "Salvación y Gracia",
    "Paz y Tranquilidad",
    "Sabiduría y Discernimiento",
    "Prosperidad y Provisión",
    "Sanidad y Restauración",
    "Evangelización y Misiones",
];

/// All books in canonical order, Old Testament first.
pub fn list_books(locale: Locale) -> Vec<BookReference> {
    CANON.iter().map(|b| b.reference(locale)).collect()
}

pub fn books_in(locale: Locale, testament: Testament) -> Vec<BookReference> {
    CANON
        .iter()
        .filter(|b| b.testament == testament)
        .map(|b| b.reference(locale))
        .collect()
}

/// Looks a book up by its localized name, ignoring case and surrounding space.
pub fn find_book(locale: Locale, name: &str) -> Option<BookReference> {
    let wanted = name.trim().to_lowercase();
    CANON
        .iter()
        .find(|b| b.name(locale).to_lowercase() == wanted)
        .map(|b| b.reference(locale))
}

pub fn list_popular_themes(locale: Locale) -> Vec<&'static str> {
    let themes: &[&str] = match locale {
        Locale::Portuguese => &THEMES_PT,
        Locale::English => &THEMES_EN,
        Locale::Spanish => &THEMES_ES,
    };
    themes.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canon_has_66_books_split_39_27() {
        for locale in Locale::all() {
            let books = list_books(locale);
            assert_eq!(books.len(), 66);
            assert_eq!(books_in(locale, Testament::Old).len(), 39);
            assert_eq!(books_in(locale, Testament::New).len(), 27);
        }
    }

    #[test]
    fn test_old_testament_precedes_new() {
        let books = list_books(Locale::English);
        let first_new = books
            .iter()
            .position(|b| b.testament == Testament::New)
            .unwrap();
        assert_eq!(books[first_new].name, "Matthew");
        assert!(books[first_new..].iter().all(|b| b.testament == Testament::New));
        assert_eq!(books[0].name, "Genesis");
        assert_eq!(books[65].name, "Revelation");
    }

    #[test]
    fn test_names_unique_within_locale() {
        for locale in Locale::all() {
            let names: HashSet<_> = list_books(locale).iter().map(|b| b.name).collect();
            assert_eq!(names.len(), 66);
        }
    }

    #[test]
    fn test_chapter_counts_shared_across_locales() {
        let pt = list_books(Locale::Portuguese);
        let es = list_books(Locale::Spanish);
        for (a, b) in pt.iter().zip(es.iter()) {
            assert_eq!(a.chapters, b.chapters);
            assert!(a.chapters > 0);
        }
        let total: u32 = pt.iter().map(|b| b.chapters).sum();
        assert_eq!(total, 1189);
    }

    #[test]
    fn test_find_book() {
        let psalms = find_book(Locale::Portuguese, "salmos").unwrap();
        assert_eq!(psalms.name, "Salmos");
        assert_eq!(psalms.chapters, 150);
        assert!(psalms.has_chapter(150));
        assert!(!psalms.has_chapter(151));
        assert!(!psalms.has_chapter(0));

        let john = find_book(Locale::Spanish, " Juan ").unwrap();
        assert_eq!(john.chapters, 21);
        assert_eq!(john.testament, Testament::New);

        assert!(find_book(Locale::English, "Hezekiah").is_none());
    }

    #[test]
    fn test_themes() {
        for locale in Locale::all() {
            assert_eq!(list_popular_themes(locale).len(), 15);
        }
        assert_eq!(list_popular_themes(Locale::Portuguese)[0], "Fé e Confiança");
        assert_eq!(list_popular_themes(Locale::English)[0], "Faith and Trust");
    }

    #[test]
    fn test_testament_from_str() {
        assert_eq!(Testament::from_str("Novo"), Some(Testament::New));
        assert_eq!(Testament::from_str("old"), Some(Testament::Old));
        assert_eq!(Testament::from_str("middle"), None);
    }
}
