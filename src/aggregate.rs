use crate::model::{CommitRecord, ContributorStat};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Everything the ranking and merge stages need from a file's history.
#[derive(Debug, Clone)]
pub struct HistorySummary {
    /// One entry per distinct email, in no particular order.
    pub contributors: Vec<ContributorStat>,
    /// Timestamp of the oldest commit, or `now` for an empty history.
    pub published: DateTime<Utc>,
    /// Timestamp of the newest commit, or `now` for an empty history.
    pub modified: DateTime<Utc>,
}

/// Folds a newest-first commit sequence into per-contributor tallies and
/// the chronological bounds.
///
/// `now` is captured once by the caller so that an untracked file gets the
/// identical instant for both bounds.
pub fn aggregate(commits: &[CommitRecord], now: DateTime<Utc>) -> HistorySummary {
    let mut by_email: HashMap<String, ContributorStat> = HashMap::new();
    let mut published = now;
    let mut modified = now;

    for (index, commit) in commits.iter().enumerate() {
        if index == 0 {
            modified = commit.timestamp;
        }
        if index == commits.len() - 1 {
            published = commit.timestamp;
        }

        by_email
            .entry(commit.email.clone())
            .and_modify(|stat| stat.commit_count += 1)
            .or_insert_with(|| ContributorStat {
                email: commit.email.clone(),
                name: commit.name.clone(),
                commit_count: 1,
            });
    }

    HistorySummary {
        contributors: by_email.into_values().collect(),
        published,
        modified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn commit(name: &str, email: &str, day: u32) -> CommitRecord {
        CommitRecord {
            name: name.to_string(),
            email: email.to_string(),
            timestamp: Utc.with_ymd_and_hms(2022, 8, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn counts_commits_per_email() {
        let commits = vec![
            commit("Bravo", "bravo@example.com", 3),
            commit("Alpha", "alpha@example.com", 2),
            commit("Alpha", "alpha@example.com", 1),
        ];
        let summary = aggregate(&commits, Utc::now());

        let mut counts: Vec<(String, u32)> = summary
            .contributors
            .iter()
            .map(|c| (c.email.clone(), c.commit_count))
            .collect();
        counts.sort();
        assert_eq!(
            counts,
            vec![
                ("alpha@example.com".to_string(), 2),
                ("bravo@example.com".to_string(), 1),
            ]
        );
    }

    #[test]
    fn bounds_come_from_first_and_last_rows() {
        let commits = vec![
            commit("Bravo", "bravo@example.com", 9),
            commit("Alpha", "alpha@example.com", 1),
        ];
        let summary = aggregate(&commits, Utc::now());
        assert_eq!(summary.modified, commits[0].timestamp);
        assert_eq!(summary.published, commits[1].timestamp);
        assert!(summary.modified >= summary.published);
    }

    #[test]
    fn single_commit_is_both_bounds() {
        let commits = vec![commit("Alpha", "alpha@example.com", 5)];
        let summary = aggregate(&commits, Utc::now());
        assert_eq!(summary.published, summary.modified);
        assert_eq!(summary.published, commits[0].timestamp);
    }

    #[test]
    fn empty_history_uses_the_given_instant_for_both_bounds() {
        let now = Utc.with_ymd_and_hms(2022, 8, 24, 12, 0, 0).unwrap();
        let summary = aggregate(&[], now);
        assert!(summary.contributors.is_empty());
        assert_eq!(summary.published, now);
        assert_eq!(summary.modified, now);
    }

    #[test]
    fn first_seen_name_wins_for_a_shared_email() {
        // Newest first, so "ALPHA" is processed before "alpha".
        let commits = vec![
            commit("ALPHA", "alpha@example.com", 2),
            commit("alpha", "alpha@example.com", 1),
        ];
        let summary = aggregate(&commits, Utc::now());
        assert_eq!(summary.contributors.len(), 1);
        assert_eq!(summary.contributors[0].name, "ALPHA");
        assert_eq!(summary.contributors[0].commit_count, 2);
    }
}
