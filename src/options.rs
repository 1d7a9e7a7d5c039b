use std::fmt;

/// Caller-supplied renderer for the abbreviated author list.
pub type FormatFn = dyn Fn(&[String]) -> String + Send + Sync;

/// Configuration for one plugin instance.
pub struct Options {
    /// Locales used for name collation and list joining, in preference
    /// order. The first one ICU accepts wins.
    pub locales: Vec<String>,
    /// Maximum number of authors shown before abbreviating. `-1` (or any
    /// negative value) disables abbreviation; `0` falls back to the
    /// default of 3.
    pub limit: i32,
    /// Label substituted for the authors dropped by abbreviation.
    pub author_rest: String,
    /// Custom renderer, replacing the locale-aware list join. Receives the
    /// already-abbreviated names, `author_rest` included when truncated.
    pub format: Option<Box<FormatFn>>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = locales.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = limit;
        self
    }

    pub fn author_rest(mut self, rest: impl Into<String>) -> Self {
        self.author_rest = rest.into();
        self
    }

    pub fn format<F>(mut self, format: F) -> Self
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        self.format = Some(Box::new(format));
        self
    }

    /// The limit actually applied: zero falls back to the default.
    pub(crate) fn effective_limit(&self) -> i32 {
        if self.limit == 0 {
            Self::default().limit
        } else {
            self.limit
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            locales: vec!["en".to_string()],
            limit: 3,
            author_rest: "others".to_string(),
            format: None,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("locales", &self.locales)
            .field("limit", &self.limit)
            .field("author_rest", &self.author_rest)
            .field("format", &self.format.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
