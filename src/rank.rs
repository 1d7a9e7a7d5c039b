use crate::locale::NameCollation;
use crate::model::ContributorStat;

/// Orders contributors by commit count descending, breaking ties by
/// locale-collated name and finally by email so the result is fully
/// deterministic regardless of map iteration order.
///
/// Returns names only; the tallies are not needed past this point.
pub fn rank(mut contributors: Vec<ContributorStat>, collation: &dyn NameCollation) -> Vec<String> {
    contributors.sort_by(|a, b| {
        b.commit_count
            .cmp(&a.commit_count)
            .then_with(|| collation.compare(&a.name, &b.name))
            .then_with(|| a.email.cmp(&b.email))
    });
    contributors.into_iter().map(|c| c.name).collect()
}

/// Truncates a ranked name list to at most `limit` entries.
///
/// With more names than `limit`, the final slot shows `rest` instead of a
/// name, except at `limit == 1` where the single slot goes to the top
/// name. A non-positive `limit` disables abbreviation (`-1` is the
/// documented spelling; [`crate::Options`] maps a zero limit to its
/// default before it gets here).
pub fn abbreviate(mut names: Vec<String>, limit: i32, rest: &str) -> Vec<String> {
    if limit <= 0 || names.len() <= limit as usize {
        return names;
    }
    if limit == 1 {
        names.truncate(1);
        return names;
    }
    names.truncate(limit as usize - 1);
    names.push(rest.to_string());
    names
}
