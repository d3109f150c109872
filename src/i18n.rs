//! UI translations.
//!
//! Locale tables live in `locales/<code>.json` as nested objects and are
//! compiled in by `rust_i18n::i18n!` (see the crate root); keys are addressed
//! with dots (`settings.about.title`). English is the fallback locale.

use std::fmt;

use serde::{Deserialize, Serialize};

/// UI language
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::ZhCn]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Translator bound to one language, so views do not depend on the global
/// rust-i18n locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct I18n {
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate `key`, falling back to English. Keys missing everywhere come
    /// back in rust-i18n's untranslated form, which contains the key.
    pub fn t(&self, key: &str) -> String {
        rust_i18n::t!(key, locale = self.language.code()).into_owned()
    }
}
