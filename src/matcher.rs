//! Column-name matching strategies.
//!
//! Result sets rarely spell column names exactly the way the target type
//! spells its fields, so lookups go through a list of [`ColumnNameMatcher`]
//! strategies configured on [`MapperConfig`](crate::config::MapperConfig).

use std::sync::Arc;

use once_cell::sync::Lazy;

/// Strategy for deciding whether a result-set column name refers to a field.
pub trait ColumnNameMatcher: Send + Sync {
    /// Returns true if `column_name` refers to the field named `field_name`.
    fn columns_match(&self, column_name: &str, field_name: &str) -> bool;
}

/// Matches column names to field names by ASCII case-insensitive equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitiveColumnNameMatcher;

impl ColumnNameMatcher for CaseInsensitiveColumnNameMatcher {
    fn columns_match(&self, column_name: &str, field_name: &str) -> bool {
        column_name.eq_ignore_ascii_case(field_name)
    }
}

/// Matches `snake_case` column names to fields, ignoring underscores in the
/// column name so `first_name` refers to both `firstName` and `firstname`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeCaseColumnNameMatcher;

impl ColumnNameMatcher for SnakeCaseColumnNameMatcher {
    fn columns_match(&self, column_name: &str, field_name: &str) -> bool {
        let mut column = column_name.chars().filter(|c| *c != '_');
        let mut field = field_name.chars().filter(|c| *c != '_');
        loop {
            match (column.next(), field.next()) {
                (None, None) => return true,
                (Some(c), Some(f)) if c.eq_ignore_ascii_case(&f) => {}
                _ => return false,
            }
        }
    }
}

/// The stock matcher list: case-insensitive first, then snake-case.
pub(crate) static DEFAULT_MATCHERS: Lazy<Vec<Arc<dyn ColumnNameMatcher>>> = Lazy::new(|| {
    vec![
        Arc::new(CaseInsensitiveColumnNameMatcher),
        Arc::new(SnakeCaseColumnNameMatcher),
    ]
});

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let m = CaseInsensitiveColumnNameMatcher;
        assert!(m.columns_match("id", "id"));
        assert!(m.columns_match("ID", "id"));
        assert!(!m.columns_match("idx", "id"));
    }

    #[test]
    fn test_snake_case() {
        let m = SnakeCaseColumnNameMatcher;
        assert!(m.columns_match("first_name", "firstName"));
        assert!(m.columns_match("first_name", "firstname"));
        assert!(m.columns_match("FIRST_NAME", "first_name"));
        assert!(!m.columns_match("first_name", "lastName"));
    }
}
