//! The row-to-object mapping operation.

use log::trace;

use crate::config::MapperConfig;
use crate::errors::*;
use crate::policy::{AccessPolicy, ConfiguredPolicy};
use crate::row::ResultRow;
use crate::shape::Shape;
use crate::value::Value;

/// Maps one result row to an instance of `T` described by `shape`.
///
/// Columns are matched to constructor parameters and fields through the
/// matchers configured on `config`; a column that matches nothing is
/// ignored unless strict matching is enabled. The operation is
/// all-or-nothing: on any error no instance is returned, and neither the
/// row, the shape nor the config is mutated. Each row is mapped
/// independently, so the config may change between calls.
///
/// Writing to a field tagged non-public is governed by
/// [`make_attributes_accessible`](MapperConfig::set_make_attributes_accessible):
/// when unset, such a write fails the whole mapping with
/// [`Error::InaccessibleMember`].
///
/// ```
/// use rowbind::{map_row, MapperConfig, ResultRow, Shape, ValueType};
///
/// #[derive(Default, PartialEq, Debug)]
/// struct Fruit {
///     id: i32,
/// }
///
/// let shape: Shape<Fruit> = Shape::builder("Fruit")
///     .param("id", ValueType::Int, None)
///     .constructor(|args| Ok(Fruit { id: args[0].i()? }))
///     .finish()
///     .unwrap();
///
/// let row = ResultRow::new().with_column("id", 1);
/// let fruit = map_row(&row, &shape, &MapperConfig::default()).unwrap();
/// assert_eq!(fruit, Fruit { id: 1 });
/// ```
pub fn map_row<T>(row: &ResultRow, shape: &Shape<T>, config: &MapperConfig) -> Result<T> {
    let policy = ConfiguredPolicy::for_config(config);

    let mut args = Vec::with_capacity(shape.params().len());
    for param in shape.params() {
        match find_column(row, config, param.name()) {
            Some(value) => args.push(value.clone().coerce(param.ty())?),
            None => match param.default() {
                Some(default) => args.push(default.clone()),
                None => {
                    return Err(Error::MissingRequiredField {
                        param: param.name().to_owned(),
                    })
                }
            },
        }
    }

    let mut instance = shape.construct(args)?;

    for field in shape.fields() {
        let Some(value) = find_column(row, config, field.name()) else {
            // Unmatched fields keep their construction-time value.
            continue;
        };
        policy.check_write(shape.name(), field)?;
        let value = value.clone().coerce(field.ty())?;
        trace!(
            "assigning column value to `{}.{}`",
            shape.name(),
            field.name()
        );
        field.set(&mut instance, value)?;
    }

    if config.strict_matching() {
        check_all_columns_consumed(row, shape, config)?;
    }

    Ok(instance)
}

/// Maps every row in order, stopping at the first failure.
pub fn map_rows<'a, T, I>(rows: I, shape: &Shape<T>, config: &MapperConfig) -> Result<Vec<T>>
where
    I: IntoIterator<Item = &'a ResultRow>,
{
    rows.into_iter()
        .map(|row| map_row(row, shape, config))
        .collect()
}

/// Resolves a name against the row through the configured matchers.
///
/// Matchers are tried in order; within a matcher, columns are scanned in
/// row order and the first hit wins, so a name resolves to at most one
/// column.
fn find_column<'r>(
    row: &'r ResultRow,
    config: &MapperConfig,
    field_name: &str,
) -> Option<&'r Value> {
    config.column_name_matchers().iter().find_map(|matcher| {
        row.columns()
            .find(|column| matcher.columns_match(column.name(), field_name))
            .map(|column| column.value())
    })
}

fn check_all_columns_consumed<T>(
    row: &ResultRow,
    shape: &Shape<T>,
    config: &MapperConfig,
) -> Result<()> {
    for column in row.columns() {
        let matches_name = |name: &str| {
            config
                .column_name_matchers()
                .iter()
                .any(|matcher| matcher.columns_match(column.name(), name))
        };
        let consumed = shape.params().iter().any(|p| matches_name(p.name()))
            || shape.fields().iter().any(|f| matches_name(f.name()));
        if !consumed {
            return Err(Error::UnmatchedColumn {
                column: column.name().to_owned(),
            });
        }
    }
    Ok(())
}
