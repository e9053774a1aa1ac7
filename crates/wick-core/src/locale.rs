//! Locale identifiers used for rendering log arguments.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Locale identifier in `language[_country[_variant]]` form.
///
/// Parsing is purely structural; components are not validated against a
/// locale registry. The excluded rendering layer interprets the resolved
/// locale when formatting numbers and dates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    country: Option<String>,
    variant: Option<String>,
}

impl Locale {
    /// Creates a locale from explicit components.
    pub fn new(
        language: impl Into<String>,
        country: Option<String>,
        variant: Option<String>,
    ) -> Self {
        Self {
            language: language.into(),
            country,
            variant,
        }
    }

    /// Parses a `language[_country[_variant]]` identifier.
    ///
    /// Splits on `_` into at most three components; the variant absorbs any
    /// remaining text. Fewer components are accepted (`"de"`, `"de_DE"`).
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.trim().splitn(3, '_');
        let language = parts.next().unwrap_or_default().to_string();
        let country = parts.next().map(str::to_string);
        let variant = parts.next().map(str::to_string);
        Self {
            language,
            country,
            variant,
        }
    }

    /// Derives the process-default locale from the environment.
    ///
    /// Consults `LC_ALL`, `LC_MESSAGES`, and `LANG` in POSIX precedence
    /// order, stripping any charset (`.UTF-8`) or modifier (`@euro`)
    /// suffix. Falls back to `en` when nothing usable is set.
    pub fn system() -> Self {
        for name in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            if let Ok(value) = env::var(name) {
                let base = value
                    .split(['.', '@'])
                    .next()
                    .unwrap_or_default()
                    .to_string();
                if !base.is_empty() && base != "C" && base != "POSIX" {
                    return Self::parse(&base);
                }
            }
        }
        Self::parse("en")
    }

    /// The language component.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The country component, if present.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// The variant component, if present.
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(country) = &self.country {
            write!(f, "_{country}")?;
        }
        if let Some(variant) = &self.variant {
            write!(f, "_{variant}")?;
        }
        Ok(())
    }
}
