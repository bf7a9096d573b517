//! Locale pass-through for user-facing strings.
//!
//! A gettext-style lookup: the environment names candidate locales, the
//! catalog maps msgids per locale, and a miss returns the msgid unchanged.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Per-locale translation tables: locale name -> (msgid -> translation).
pub type Translations = BTreeMap<String, BTreeMap<String, String>>;

/// Candidate locale names in priority order, read through `lookup`.
///
/// `LANGUAGE` (colon separated) comes first, then the first non-empty of
/// `LC_ALL`, `LC_MESSAGES`, `LANG`. `de_DE.UTF-8@euro` expands to `de_DE`
/// then `de`. `C` and `POSIX` disable translation and are skipped.
pub fn detect_locales<F>(lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut raw: Vec<String> = Vec::new();
    if let Some(list) = lookup("LANGUAGE").filter(|v| !v.is_empty()) {
        raw.extend(list.split(':').map(str::to_string));
    }
    if let Some(single) = ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(&lookup)
        .find(|v| !v.is_empty())
    {
        raw.push(single);
    }

    let mut out: Vec<String> = Vec::new();
    for name in raw {
        for candidate in expand(&name) {
            if !out.contains(&candidate) {
                out.push(candidate);
            }
        }
    }
    out
}

/// `ll_CC.codeset@modifier` -> [`ll_CC`, `ll`].
fn expand(name: &str) -> Vec<String> {
    let base = name
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return Vec::new();
    }
    let mut v = vec![base.to_string()];
    if let Some((lang, _territory)) = base.split_once('_') {
        if !lang.is_empty() {
            v.push(lang.to_string());
        }
    }
    v
}

/// Translation lookup bound to a list of candidate locales.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: Vec<String>,
    tables: Translations,
}

impl Catalog {
    pub fn new(locales: Vec<String>, tables: Translations) -> Self {
        Self { locales, tables }
    }

    /// Catalog for the locales named by the process environment.
    pub fn from_env(tables: Translations) -> Self {
        let locales = detect_locales(|var| std::env::var(var).ok());
        tracing::debug!(?locales, "detected locales");
        Self::new(locales, tables)
    }

    pub fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        self.locales
            .iter()
            .filter_map(|locale| self.tables.get(locale))
            .find_map(|table| table.get(msgid))
            .map(|s| Cow::Borrowed(s.as_str()))
            .unwrap_or(Cow::Borrowed(msgid))
    }
}
