//! Query parameter types for API handlers.

use pagila_core::error::CoreError;
use pagila_core::filter::FilmFilter;
use serde::Deserialize;

/// Film list filters (`?language=` | `?categories=a,b` |
/// `?actor_first_name=&actor_last_name=`).
#[derive(Debug, Default, Deserialize)]
pub struct FilmQueryParams {
    pub language: Option<String>,
    /// Comma-separated category names.
    pub categories: Option<String>,
    pub actor_first_name: Option<String>,
    pub actor_last_name: Option<String>,
}

impl FilmQueryParams {
    pub fn to_filter(&self) -> Result<FilmFilter, CoreError> {
        FilmFilter::from_parts(
            self.language.as_deref(),
            self.categories.as_deref(),
            self.actor_first_name.as_deref(),
            self.actor_last_name.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn no_params_load_everything() {
        assert_eq!(FilmQueryParams::default().to_filter().unwrap(), FilmFilter::All);
    }

    #[test]
    fn categories_are_split_on_commas() {
        let params = FilmQueryParams {
            categories: Some("travel, Drama".into()),
            ..Default::default()
        };
        assert_eq!(
            params.to_filter().unwrap(),
            FilmFilter::categories(["TRAVEL", "DRAMA"])
        );
    }

    #[test]
    fn half_actor_filter_is_rejected() {
        let params = FilmQueryParams {
            actor_first_name: Some("Jennifer".into()),
            ..Default::default()
        };
        assert_matches!(params.to_filter(), Err(CoreError::Validation(_)));
    }
}
