//! Fixed sample records shown by the dashboard pages, plus the search and
//! classification helpers the pages apply to them.
pub mod analytics;
pub mod dashboard;
pub mod error_logs;
pub mod job_logs;
pub mod reports;
pub mod users;

/// Visual weight of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Default,
    Secondary,
    Destructive,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

/// Rows that take part in free-text search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    /// `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Rows whose search fields contain `query`, ignoring case. Empty query keeps every row.
pub fn filter_rows<'a, T: Searchable>(rows: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| row.matches_lowercase(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0, self.1]
        }
    }

    #[test]
    fn matches_any_field_ignoring_case() {
        let rows = [Row("Mud Pump", "Gulf"), Row("Casing", "Texas")];
        let hits = filter_rows(&rows, "tEX");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, "Casing");
    }

    #[test]
    fn empty_query_keeps_everything() {
        let rows = [Row("a", "b"), Row("c", "d")];
        assert_eq!(filter_rows(&rows, "").len(), 2);
    }
}
