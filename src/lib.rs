//! Row-to-object mapping with a configurable member accessibility policy.
//!
//! Given a [`ResultRow`] produced by some query-execution layer and a
//! [`Shape`] describing a target type, [`map_row`] constructs an instance
//! of that type by matching column names to constructor parameters and
//! fields. Fields assigned outside the constructor carry an
//! [`Accessibility`] tag; whether the mapper may write a non-public field
//! is controlled by
//! [`MapperConfig::set_make_attributes_accessible`], mirroring the
//! reflective visibility override found in object-mapping layers of JDBC
//! convenience libraries.
//!
//! ```
//! use rowbind::{map_row, ConfigRegistry, MapperConfig, ResultRow, Shape, ValueType};
//! use rowbind::{Accessibility, Value};
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Fruit {
//!     id: i32,
//!     name: String,
//! }
//!
//! let shape: Shape<Fruit> = Shape::builder("Fruit")
//!     .param("id", ValueType::Int, Some(Value::Int(0)))
//!     .constructor(|args| {
//!         Ok(Fruit {
//!             id: args[0].i()?,
//!             ..Fruit::default()
//!         })
//!     })
//!     .field("name", ValueType::Text, Accessibility::Public, |fruit, v| {
//!         fruit.name = v.text()?.to_owned();
//!         Ok(())
//!     })
//!     .finish()
//!     .unwrap();
//!
//! let mut registry = ConfigRegistry::new();
//! let row = ResultRow::new().with_column("id", 1).with_column("name", "apple");
//!
//! let fruit = map_row(&row, &shape, registry.get::<MapperConfig>()).unwrap();
//! assert_eq!(fruit, Fruit { id: 1, name: "apple".into() });
//! ```

// errors, all of them fatal for the row being mapped
pub mod errors;

// dynamically typed column values and their conversions
pub mod value;

// one record of a query result
pub mod row;

// column-name matching strategies
pub mod matcher;

// structural descriptions of mappable types
pub mod shape;

// session configuration and the type-keyed registry holding it
pub mod config;

// accessibility policies gating field writes
pub mod policy;

// the mapping operation itself
pub mod mapper;

pub use crate::config::{Config, ConfigRegistry, MapperConfig};
pub use crate::errors::{Error, Result};
pub use crate::mapper::{map_row, map_rows};
pub use crate::matcher::{
    CaseInsensitiveColumnNameMatcher, ColumnNameMatcher, SnakeCaseColumnNameMatcher,
};
pub use crate::policy::{AccessPolicy, PermissiveAccessPolicy, StrictAccessPolicy};
pub use crate::row::{Column, ResultRow};
pub use crate::shape::{Accessibility, FieldDesc, ParamDesc, Shape, ShapeBuilder};
pub use crate::value::{Value, ValueType};
