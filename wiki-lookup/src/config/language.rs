//! Supported response languages.

use std::fmt;

/// Languages the service can answer in.
///
/// The language doubles as the Wikipedia subdomain for lookups, so the set
/// stays limited to editions we ship templates for. Unknown codes fall back
/// to English rather than failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Es,
    Pt,
    Fr,
}

impl Language {
    /// Parse a client-supplied language code. Anything unrecognized,
    /// including empty strings, maps to [`Language::En`].
    pub fn parse_or_default(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Language::Es,
            "pt" => Language::Pt,
            "fr" => Language::Fr,
            _ => Language::En,
        }
    }

    /// Wikipedia subdomain for this language (e.g. `es` → `es.wikipedia.org`).
    pub fn subdomain(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Pt => "pt",
            Language::Fr => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subdomain())
    }
}
