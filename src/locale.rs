//! Display language for every human-readable string the pipeline produces.

use std::fmt;
use std::str::FromStr;

/// Language used for relative-time labels, absolute dates, and placeholders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    Turkish,
}

impl Locale {
    /// Label used when a post carries no timestamp.
    pub fn recently(self) -> &'static str {
        match self {
            Locale::English => "recently",
            Locale::Turkish => "yakın zamanda",
        }
    }

    /// Caption shown when the upstream caption is absent or blank.
    pub fn caption_placeholder(self) -> &'static str {
        match self {
            Locale::English => "No caption",
            Locale::Turkish => "Açıklama yok",
        }
    }

    pub fn minutes_ago(self, n: i64) -> String {
        match self {
            Locale::English => format!("{n} minutes ago"),
            Locale::Turkish => format!("{n} dakika önce"),
        }
    }

    pub fn hours_ago(self, n: i64) -> String {
        match self {
            Locale::English => format!("{n} hours ago"),
            Locale::Turkish => format!("{n} saat önce"),
        }
    }

    pub fn days_ago(self, n: i64) -> String {
        match self {
            Locale::English => format!("{n} days ago"),
            Locale::Turkish => format!("{n} gün önce"),
        }
    }

    /// `chrono` format string for an absolute calendar date.
    pub fn date_pattern(self) -> &'static str {
        match self {
            Locale::English => "%b %-d, %Y",
            Locale::Turkish => "%d.%m.%Y",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => f.write_str("en"),
            Locale::Turkish => f.write_str("tr"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::English),
            "tr" | "tr-tr" | "turkish" => Ok(Locale::Turkish),
            other => Err(format!("unsupported locale '{other}' (expected 'en' or 'tr')")),
        }
    }
}
