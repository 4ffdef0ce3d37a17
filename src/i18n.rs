//! Static translation catalog.
//!
//! Every user-facing string of the widget is looked up here. The catalog is
//! built once on first use and is read-only afterwards. Lookups fall back
//! from the requested language to English, and from English to the raw key.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported widget languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// Spanish.
    Es,
}

impl Language {
    /// Every supported language, default first.
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    /// Canonical language code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Parse a language code, ignoring case and any region tag.
    pub fn parse(code: &str) -> Option<Self> {
        let normalized = code.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        Self::ALL.into_iter().find(|l| l.code() == lang)
    }

    /// Separator placed between groups of three integer digits.
    pub fn group_separator(self) -> char {
        match self {
            Language::En => ',',
            Language::Es => '.',
        }
    }
}

/// Catalog keys.
pub mod keys {
    /// Widget heading.
    pub const TITLE: &str = "title";
    /// Text before the group picker.
    pub const START: &str = "startText";
    /// Text between the two pickers.
    pub const GROUPS: &str = "groupsText";
    /// Singular interval unit.
    pub const MONTH: &str = "monthText";
    /// Plural interval unit.
    pub const MONTHS: &str = "monthsText";
    /// Closing question of the prompt.
    pub const HOW_MANY: &str = "howManyText";
    /// Prefix of each bar label.
    pub const YEAR: &str = "yearText";
    /// X-axis title.
    pub const YEARS: &str = "yearsText";
    /// Dataset label and y-axis title.
    pub const NUMBER_OF_GROUPS: &str = "numberOfGroupsText";
    /// Result sentence prefix.
    pub const AFTER_YEARS: &str = "afterYearsText";
    /// Result sentence unit.
    pub const GROUPS_RESULT: &str = "groupsResultText";
    /// Millions scale word.
    pub const MILLION: &str = "millionText";
    /// Thousands scale word.
    pub const THOUSAND: &str = "thousandText";
}

type Catalog = HashMap<Language, HashMap<&'static str, &'static str>>;

const EN: &[(&str, &str)] = &[
    (keys::TITLE, "The Power of Multiplication"),
    (keys::START, "If I start"),
    (keys::GROUPS, "Christian groups that each reproduce every"),
    (keys::MONTH, "month"),
    (keys::MONTHS, "months"),
    (keys::HOW_MANY, "how many total groups will there be at the end of 10 years?"),
    (keys::YEAR, "Year"),
    (keys::YEARS, "Years"),
    (keys::NUMBER_OF_GROUPS, "Number of Groups"),
    (keys::AFTER_YEARS, "After 10 years:"),
    (keys::GROUPS_RESULT, "groups"),
    (keys::MILLION, "million"),
    (keys::THOUSAND, "thousand"),
];

const ES: &[(&str, &str)] = &[
    (keys::TITLE, "El Poder de la Multiplicación"),
    (keys::START, "Si comienzo con"),
    (keys::GROUPS, "grupos cristianos que se reproducen cada"),
    (keys::MONTH, "mes"),
    (keys::MONTHS, "meses"),
    (keys::HOW_MANY, "¿cuántos grupos habrá en total al final de 10 años?"),
    (keys::YEAR, "Año"),
    (keys::YEARS, "Años"),
    (keys::NUMBER_OF_GROUPS, "Número de Grupos"),
    (keys::AFTER_YEARS, "Después de 10 años:"),
    (keys::GROUPS_RESULT, "grupos"),
    (keys::MILLION, "millones"),
    (keys::THOUSAND, "mil"),
];

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut catalog = HashMap::new();
        catalog.insert(Language::En, EN.iter().copied().collect());
        catalog.insert(Language::Es, ES.iter().copied().collect());
        catalog
    })
}

/// Translation lookup bound to one language.
#[derive(Debug, Clone, Copy)]
pub struct TranslationTable {
    language: Language,
}

impl TranslationTable {
    /// Resolve `code` to a supported language.
    ///
    /// Unsupported codes log a warning and fall back to English.
    pub fn new(code: &str) -> Self {
        let language = Language::parse(code).unwrap_or_else(|| {
            tracing::warn!(
                language = code,
                "Language '{}' not supported, falling back to English",
                code
            );
            Language::default()
        });
        Self { language }
    }

    /// Table for an already-resolved language.
    pub fn for_language(language: Language) -> Self {
        Self { language }
    }

    /// Active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up `key`: active language, then English, then the key itself.
    pub fn get<'a>(&self, key: &'a str) -> &'a str {
        let catalog = catalog();
        [self.language, Language::default()]
            .iter()
            .find_map(|lang| catalog.get(lang).and_then(|t| t.get(key)).copied())
            .unwrap_or(key)
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory sink for a scoped fmt subscriber.
    #[derive(Clone, Default)]
    pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` with logs captured at WARN and above.
    pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let out = tracing::subscriber::with_default(subscriber, f);
        (out, buffer.contents())
    }

    #[test]
    fn parse_accepts_case_and_region() {
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse("ES"), Some(Language::Es));
        assert_eq!(Language::parse("es-MX"), Some(Language::Es));
        assert_eq!(Language::parse(" en_GB "), Some(Language::En));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn lookup_uses_requested_language() {
        let es = TranslationTable::new("es");
        assert_eq!(es.language(), Language::Es);
        assert_eq!(es.get(keys::MILLION), "millones");
        assert_eq!(es.get(keys::THOUSAND), "mil");
        assert_eq!(es.get(keys::TITLE), "El Poder de la Multiplicación");
    }

    #[test]
    fn unknown_key_falls_back_to_raw_key() {
        let table = TranslationTable::default();
        assert_eq!(table.get("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn every_language_covers_every_english_key() {
        for (key, _) in EN {
            for lang in Language::ALL {
                let entries = catalog().get(&lang).unwrap();
                assert!(entries.contains_key(key), "{} missing {key}", lang.code());
            }
        }
    }

    #[test]
    fn unsupported_language_warns_once_and_uses_english() {
        let (table, logs) = capture_logs(|| TranslationTable::new("fr"));
        assert_eq!(table.language(), Language::En);
        assert_eq!(table.get(keys::TITLE), "The Power of Multiplication");
        assert_eq!(logs.matches("not supported").count(), 1, "{logs}");
        assert!(logs.contains("WARN"));
    }

    #[test]
    fn supported_language_does_not_warn() {
        let (_, logs) = capture_logs(|| TranslationTable::new("es"));
        assert!(logs.is_empty(), "{logs}");
    }
}
