use crate::error::{InferError, Result};
use icu::collator::{Collator, CollatorOptions};
use icu::list::{ListFormatter, ListLength};
use icu::locid::Locale;
use std::cmp::Ordering;

/// Locale-aware name ordering, used to break commit-count ties.
///
/// Injected so the ranking logic can be exercised with a deterministic fake
/// instead of CLDR data.
pub trait NameCollation: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Locale-aware conjunctive list joining ("A, B, and C" in `en`).
pub trait ListJoin: Send + Sync {
    fn join(&self, items: &[String]) -> String;
}

/// Picks the first entry of `locales` that parses as a BCP-47 tag.
///
/// A stand-in for full locale negotiation: ICU's compiled data falls back
/// per-component, so a parseable tag is enough to proceed.
fn resolve(locales: &[String]) -> Result<Locale> {
    locales
        .iter()
        .find_map(|tag| tag.parse::<Locale>().ok())
        .ok_or_else(|| InferError::Locale(locales.join(", ")))
}

pub struct IcuCollation {
    inner: Collator,
}

impl IcuCollation {
    pub fn new(locales: &[String]) -> Result<Self> {
        let locale = resolve(locales)?;
        let inner = Collator::try_new(&locale.into(), CollatorOptions::new())
            .map_err(|e| InferError::Locale(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl NameCollation for IcuCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.inner.compare(a, b)
    }
}

pub struct IcuListJoin {
    inner: ListFormatter,
}

impl IcuListJoin {
    pub fn new(locales: &[String]) -> Result<Self> {
        let locale = resolve(locales)?;
        let inner = ListFormatter::try_new_and_with_length(&locale.into(), ListLength::Wide)
            .map_err(|e| InferError::Locale(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ListJoin for IcuListJoin {
    fn join(&self, items: &[String]) -> String {
        self.inner.format_to_string(items.iter().map(|s| s.as_str()))
    }
}
