use crate::value::Value;

/// One column of a result row: a name paired with a scalar value.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    value: Value,
}

impl Column {
    /// The column name as reported by the data source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The column value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// One record of a query result, as an ordered sequence of named columns.
///
/// Rows are immutable once built. Lookups scan columns in row order, so a
/// duplicated column name resolves to its first occurrence.
///
/// ```
/// use rowbind::{ResultRow, Value};
///
/// let row = ResultRow::new()
///     .with_column("id", 1)
///     .with_column("name", "apple");
/// assert_eq!(row.get("id"), Some(&Value::Int(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultRow {
    columns: Vec<Column>,
}

impl ResultRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        ResultRow::default()
    }

    /// Appends a named column, consuming and returning the row.
    pub fn with_column(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.columns.push(Column {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Looks up a column value by exact name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.value)
    }

    /// Iterates over the columns in row order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Number of columns in the row.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        let row = ResultRow::new().with_column("id", 1);

        assert_eq!(row.get("id"), Some(&Value::Int(1)));
        assert_eq!(row.get("ID"), None);
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn test_duplicate_names_resolve_first() {
        let row = ResultRow::new().with_column("id", 1).with_column("id", 2);

        assert_eq!(row.get("id"), Some(&Value::Int(1)));
        assert_eq!(row.len(), 2);
    }
}
