//! Infer publication metadata for a content file from its Git history.
//!
//! A pipeline step meant to run once per file: it asks `git log` for the
//! file's history, then fills `published` (first commit), `modified` (last
//! commit), and `author` (a locale-aware, abbreviated list of top
//! contributors) on the file's metadata bag. Fields already populated by
//! front-matter or an earlier stage are left alone.
//!
//! ```no_run
//! use infer_git_meta::{InferGitMeta, Options, SourceFile};
//!
//! # async fn example() -> infer_git_meta::Result<()> {
//! let plugin = InferGitMeta::new(Options::default())?;
//! let mut file = SourceFile::new("docs/intro.md", ".");
//! plugin.run(&mut file).await?;
//! println!("{:?}", file.data.meta.author);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod error;
pub mod format;
pub mod history;
pub mod locale;
pub mod merge;
pub mod model;
pub mod options;
pub mod rank;

pub use error::{InferError, Result};
pub use history::{GitLog, HistoryProvider};
pub use model::{CommitRecord, ContributorStat, FileData, Meta, SourceFile};
pub use options::Options;

use aggregate::{aggregate, HistorySummary};
use chrono::Utc;
use format::render_authors;
use locale::{IcuCollation, IcuListJoin, ListJoin, NameCollation};
use merge::merge_field;
use rank::{abbreviate, rank};
use tracing::debug;

/// The pipeline step. Construct once, then `run` per file.
pub struct InferGitMeta<P = GitLog> {
    options: Options,
    collation: Box<dyn NameCollation>,
    joiner: Box<dyn ListJoin>,
    provider: P,
}

impl InferGitMeta<GitLog> {
    /// Builds the step against the real `git` binary.
    ///
    /// Fails if none of the configured locales is usable.
    pub fn new(options: Options) -> Result<Self> {
        Self::with_provider(options, GitLog)
    }
}

impl<P: HistoryProvider> InferGitMeta<P> {
    /// Builds the step against a caller-supplied history provider. The
    /// provider must honor the newest-first ordering contract documented
    /// on [`HistoryProvider`].
    pub fn with_provider(options: Options, provider: P) -> Result<Self> {
        let collation = Box::new(IcuCollation::new(&options.locales)?);
        let joiner = Box::new(IcuListJoin::new(&options.locales)?);
        Ok(Self {
            options,
            collation,
            joiner,
            provider,
        })
    }

    /// Enriches `file.data.meta` from the file's history.
    ///
    /// Resolves even when the file has no history (both dates become the
    /// same "now" instant and no author is written). Rejects only when the
    /// history query itself fails; the caller decides whether to continue
    /// with other files.
    pub async fn run(&self, file: &mut SourceFile) -> Result<()> {
        // Captured once so an untracked file gets identical bounds.
        let now = Utc::now();

        let commits = self.provider.history(&file.path, &file.cwd).await?;
        let HistorySummary {
            contributors,
            published,
            modified,
        } = aggregate(&commits, now);

        let ranked = rank(contributors, self.collation.as_ref());
        let shown = abbreviate(
            ranked,
            self.options.effective_limit(),
            &self.options.author_rest,
        );
        let author = render_authors(&shown, self.options.format.as_deref(), self.joiner.as_ref());

        debug!(
            "inferred meta for {}: published={published}, modified={modified}, author={author:?}",
            file.path.display()
        );

        let data = &mut file.data;
        data.meta.published = merge_field(
            data.matter.published.as_ref(),
            data.meta.published.take(),
            Some(published),
        );
        data.meta.modified = merge_field(
            data.matter.modified.as_ref(),
            data.meta.modified.take(),
            Some(modified),
        );
        // Empty strings count as absent here, matching front-matter that
        // declares the key without a value.
        data.meta.author = merge_field(
            data.matter.author.as_deref().filter(|a| !a.is_empty()),
            data.meta.author.take().filter(|a| !a.is_empty()),
            author,
        );

        Ok(())
    }
}
