use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

/// How a match score is recorded: best-of sets or a race to a point target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ScoreType {
    #[default]
    Sets,
    Points,
    /// Unrecognized value in the score_type column.
    /// Weighted as a mid-length match rather than rejected.
    Unknown
}

impl ScoreType {
    /// Parses the raw text column. A missing or empty value means sets
    /// (the column predates point-based matches).
    pub fn from_column(raw: Option<&str>) -> ScoreType {
        match raw {
            None => ScoreType::Sets,
            Some(s) if s.is_empty() => ScoreType::Sets,
            Some(s) => ScoreType::from_str(s).unwrap_or(ScoreType::Unknown)
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use crate::model::structures::score_type::ScoreType;

    #[test]
    fn test_parse_sets() {
        assert_eq!(ScoreType::from_column(Some("sets")), ScoreType::Sets);
    }

    #[test]
    fn test_parse_points() {
        assert_eq!(ScoreType::from_column(Some("points")), ScoreType::Points);
    }

    #[test]
    fn test_missing_column_defaults_to_sets() {
        assert_eq!(ScoreType::from_column(None), ScoreType::Sets);
        assert_eq!(ScoreType::from_column(Some("")), ScoreType::Sets);
    }

    #[test]
    fn test_unrecognized_value() {
        assert_eq!(ScoreType::from_column(Some("americano")), ScoreType::Unknown);
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(ScoreType::Sets.to_string(), "sets");
        assert_eq!(ScoreType::Points.to_string(), "points");
    }

    #[test]
    fn test_enumerate() {
        let score_types = ScoreType::iter().collect::<Vec<_>>();
        assert_eq!(score_types, vec![ScoreType::Sets, ScoreType::Points, ScoreType::Unknown]);
    }
}
