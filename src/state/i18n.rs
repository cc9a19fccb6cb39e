//! UI labels in English and Spanish.
//!
//! Catalogs are JSON objects grouped by screen (`nav`, `series`, `header`,
//! `cars`, ...) and are flattened to dotted keys such as `cars.header.hp`.
//! Spanish falls back to English label by label.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use clap::ValueEnum;
use serde_json::Value;
use tracing::warn;

type Labels = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// Value accepted by `--language` and stored in the picker.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Shown in the picker untranslated, so a reader can always find their own language.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
        }
    }

    /// Parses a picker value with the same rules as the command line flag.
    pub fn from_code(code: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(code, true).ok()
    }
}

struct Catalogs {
    en: Labels,
    es: Labels,
}

impl Catalogs {
    fn labels(&self, language: Language) -> &Labels {
        match language {
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }
}

static CATALOGS: OnceLock<Catalogs> = OnceLock::new();

fn catalogs() -> &'static Catalogs {
    CATALOGS.get_or_init(|| Catalogs {
        en: load_labels(Language::En, include_str!("../../assets/i18n/en.json")),
        es: load_labels(Language::Es, include_str!("../../assets/i18n/es.json")),
    })
}

/// Label for `key`, falling back to English and then to the key itself.
pub fn tr(language: Language, key: &'static str) -> &'static str {
    let catalogs = catalogs();
    catalogs
        .labels(language)
        .get(key)
        .or_else(|| catalogs.en.get(key))
        .map(String::as_str)
        .unwrap_or(key)
}

/// English keys `language` has no label for; these render in English.
pub fn untranslated(language: Language) -> Vec<&'static str> {
    let catalogs = catalogs();
    let labels = catalogs.labels(language);
    catalogs
        .en
        .keys()
        .filter(|key| !labels.contains_key(*key))
        .map(String::as_str)
        .collect()
}

fn load_labels(language: Language, source: &str) -> Labels {
    let mut labels = Labels::new();
    match serde_json::from_str::<Value>(source) {
        Ok(root) => flatten_group("", &root, &mut labels),
        Err(err) => warn!("{} label catalog is unreadable: {err}", language.code()),
    }
    labels
}

fn flatten_group(prefix: &str, value: &Value, labels: &mut Labels) {
    match value {
        Value::Object(group) => {
            for (name, child) in group {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                flatten_group(&key, child, labels);
            }
        }
        Value::String(text) => {
            labels.insert(prefix.to_string(), text.clone());
        }
        other => warn!("label {prefix} is not text: {other}"),
    }
}
