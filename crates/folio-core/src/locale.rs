use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display language of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Bn,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Bn => "bn",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Locale::En => Locale::Bn,
            Locale::Bn => Locale::En,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Bn => "বাংলা",
        }
    }

    /// Rewrite ASCII digits in the locale's own numerals.
    pub fn localize_digits(&self, text: &str) -> String {
        match self {
            Locale::En => text.to_string(),
            Locale::Bn => text
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => char::from_u32('০' as u32 + d).unwrap_or(c),
                    None => c,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "bn" => Ok(Locale::Bn),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// A value available in every supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub bn: T,
}

impl<T> Localized<T> {
    pub const fn new(en: T, bn: T) -> Self {
        Self { en, bn }
    }

    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Bn => &self.bn,
        }
    }
}
