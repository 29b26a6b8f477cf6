//! Film filter vocabulary and the category bucketing helper.
//!
//! All film predicates are case-insensitive: filter values are normalized
//! (trimmed, upper-cased) here, and the data-access layer compares them
//! against upper-cased column values.

use std::collections::BTreeSet;

use crate::error::CoreError;

/// Default number of category buckets used when loading all films in
/// several category-filtered queries.
pub const DEFAULT_FILM_QUERY_BUCKETS: usize = 4;

/// Which films to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilmFilter {
    All,
    /// Normalized language name.
    Language(String),
    /// Normalized category names; a film matches if it has any of them.
    Categories(BTreeSet<String>),
    /// Normalized actor names; both must match the same actor.
    Actor { first_name: String, last_name: String },
}

impl FilmFilter {
    pub fn language(language: &str) -> Self {
        Self::Language(normalize(language))
    }

    pub fn categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Categories(
            categories
                .into_iter()
                .map(|c| normalize(c.as_ref()))
                .filter(|c| !c.is_empty())
                .collect(),
        )
    }

    pub fn actor(first_name: &str, last_name: &str) -> Self {
        Self::Actor {
            first_name: normalize(first_name),
            last_name: normalize(last_name),
        }
    }

    /// Build a filter from optional request parts.
    ///
    /// At most one kind of filter may be given. An actor filter needs both
    /// names. `categories` is a comma-separated list.
    pub fn from_parts(
        language: Option<&str>,
        categories: Option<&str>,
        actor_first_name: Option<&str>,
        actor_last_name: Option<&str>,
    ) -> Result<Self, CoreError> {
        let language = language.filter(|s| !s.trim().is_empty());
        let categories = categories.filter(|s| !s.trim().is_empty());
        let first = actor_first_name.filter(|s| !s.trim().is_empty());
        let last = actor_last_name.filter(|s| !s.trim().is_empty());

        let actor_given = first.is_some() || last.is_some();
        let kinds = [language.is_some(), categories.is_some(), actor_given]
            .iter()
            .filter(|given| **given)
            .count();
        if kinds > 1 {
            return Err(CoreError::Validation(
                "Only one of language, categories, or actor may be given".to_string(),
            ));
        }

        if let Some(language) = language {
            return Ok(Self::language(language));
        }
        if let Some(categories) = categories {
            let filter = Self::categories(categories.split(','));
            if matches!(&filter, Self::Categories(names) if names.is_empty()) {
                return Err(CoreError::Validation(
                    "categories must name at least one category".to_string(),
                ));
            }
            return Ok(filter);
        }
        match (first, last) {
            (Some(first), Some(last)) => Ok(Self::actor(first, last)),
            (None, None) => Ok(Self::All),
            _ => Err(CoreError::Validation(
                "Actor filter needs both actor_first_name and actor_last_name".to_string(),
            )),
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Stable polynomial string hash (`h = 31 * h + c` over UTF-16 units).
fn stable_hash(value: &str) -> u32 {
    value
        .encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)))
}

/// Split category names into at most `bucket_count` groups.
///
/// Membership is decided by a stable hash of the name, so the same input
/// always yields the same groups. Empty groups are not returned, and a
/// `bucket_count` of zero is treated as one.
pub fn category_buckets<I, S>(categories: I, bucket_count: usize) -> Vec<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let bucket_count = bucket_count.max(1);
    let mut buckets: Vec<BTreeSet<String>> = vec![BTreeSet::new(); bucket_count];
    for category in categories {
        let category = category.into();
        let idx = stable_hash(&category) as usize % bucket_count;
        buckets[idx].insert(category);
    }
    buckets.retain(|b| !b.is_empty());
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGILA_CATEGORIES: [&str; 16] = [
        "Action", "Animation", "Children", "Classics", "Comedy", "Documentary", "Drama",
        "Family", "Foreign", "Games", "Horror", "Music", "New", "Sci-Fi", "Sports", "Travel",
    ];

    #[test]
    fn language_is_trimmed_and_upper_cased() {
        assert_eq!(
            FilmFilter::language("  english "),
            FilmFilter::Language("ENGLISH".to_string())
        );
    }

    #[test]
    fn categories_drop_blank_entries() {
        let filter = FilmFilter::categories(["travel", " ", "Drama "]);
        assert_eq!(
            filter,
            FilmFilter::Categories(BTreeSet::from(["DRAMA".to_string(), "TRAVEL".to_string()]))
        );
    }

    #[test]
    fn from_parts_without_values_is_all() {
        assert_eq!(
            FilmFilter::from_parts(None, Some(""), None, None).unwrap(),
            FilmFilter::All
        );
    }

    #[test]
    fn from_parts_splits_categories_on_commas() {
        let filter = FilmFilter::from_parts(None, Some("travel,sci-fi"), None, None).unwrap();
        assert_eq!(
            filter,
            FilmFilter::Categories(BTreeSet::from(["SCI-FI".to_string(), "TRAVEL".to_string()]))
        );
    }

    #[test]
    fn from_parts_rejects_categories_of_only_separators() {
        for raw in [",", ", ,", " ,, "] {
            let err = FilmFilter::from_parts(None, Some(raw), None, None).unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)), "categories={raw:?}");
        }
    }

    #[test]
    fn from_parts_builds_actor_filter() {
        let filter =
            FilmFilter::from_parts(None, None, Some("Jennifer"), Some("Davis")).unwrap();
        assert_eq!(filter, FilmFilter::actor("JENNIFER", "DAVIS"));
    }

    #[test]
    fn from_parts_rejects_half_an_actor() {
        let err = FilmFilter::from_parts(None, None, Some("Jennifer"), None).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn from_parts_rejects_mixed_filters() {
        let err = FilmFilter::from_parts(Some("english"), Some("travel"), None, None).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn buckets_cover_every_category_exactly_once() {
        let buckets = category_buckets(PAGILA_CATEGORIES, 4);
        assert!(!buckets.is_empty() && buckets.len() <= 4);

        let total: usize = buckets.iter().map(BTreeSet::len).sum();
        assert_eq!(total, PAGILA_CATEGORIES.len());

        let merged: BTreeSet<String> = buckets.into_iter().flatten().collect();
        assert_eq!(merged.len(), PAGILA_CATEGORIES.len());
    }

    #[test]
    fn buckets_are_deterministic() {
        assert_eq!(
            category_buckets(PAGILA_CATEGORIES, 3),
            category_buckets(PAGILA_CATEGORIES, 3)
        );
    }

    #[test]
    fn zero_buckets_means_one() {
        let buckets = category_buckets(PAGILA_CATEGORIES, 0);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].len(), PAGILA_CATEGORIES.len());
    }

    #[test]
    fn no_categories_no_buckets() {
        assert!(category_buckets(Vec::<String>::new(), 4).is_empty());
    }

    #[test]
    fn stable_hash_matches_known_values() {
        assert_eq!(stable_hash(""), 0);
        assert_eq!(stable_hash("a"), 97);
        assert_eq!(stable_hash("ab"), 97 * 31 + 98);
    }
}
