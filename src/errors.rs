use crate::shape::Accessibility;

/// Result type alias for mapping operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while mapping a result row to an object.
///
/// Every variant is fatal for the row being mapped: the operation is
/// all-or-nothing and no partial instance is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required constructor parameter has no matching column and no
    /// default value.
    #[error("no column matches required constructor parameter `{param}`")]
    MissingRequiredField {
        /// Name of the unmatched constructor parameter.
        param: String,
    },

    /// A column matched a non-public field while the accessibility policy
    /// forbids writing to it.
    #[error("cannot access a member `{member}` of class `{class_name}` with modifiers \"{modifiers}\"")]
    InaccessibleMember {
        /// Name of the shape whose member was rejected.
        class_name: String,
        /// Name of the rejected field.
        member: String,
        /// Java-style modifier string of the field, e.g. `private`.
        modifiers: &'static str,
    },

    /// A column value cannot be converted to the declared field type.
    #[error("Invalid value type cast: {expected}. Actual type: {actual}")]
    TypeMismatch {
        /// The declared type the value was asked to become.
        expected: &'static str,
        /// The actual runtime type of the value.
        actual: &'static str,
    },

    /// Strict matching is enabled and a column was consumed by neither a
    /// constructor parameter nor a field.
    #[error("column `{column}` matches no constructor parameter or field")]
    UnmatchedColumn {
        /// Name of the unconsumed column.
        column: String,
    },

    /// The shape describes nothing the mapper could construct or assign.
    #[error("shape `{class_name}` declares no constructor parameter or field")]
    UnmappableShape {
        /// Name of the rejected shape.
        class_name: String,
    },
}

impl Error {
    pub(crate) fn inaccessible(class_name: &str, member: &str, access: Accessibility) -> Self {
        Error::InaccessibleMember {
            class_name: class_name.to_owned(),
            member: member.to_owned(),
            modifiers: access.modifiers(),
        }
    }
}
