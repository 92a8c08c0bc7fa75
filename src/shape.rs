//! Structural descriptions of mappable target types.
//!
//! Rust has no runtime reflection, so a type opts into mapping by
//! registering a [`Shape`]: its constructor parameters, a constructor
//! function, and explicit setters for any fields assigned after
//! construction. Each setter carries an [`Accessibility`] tag that mirrors
//! the visibility of the underlying field, which is what the accessibility
//! policy inspects at mapping time.

use std::fmt;

use crate::errors::*;
use crate::value::{Value, ValueType};

/// Declared visibility of a settable field.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Accessibility {
    /// The field is part of the type's public API.
    Public,
    /// The field is visible only inside its defining module.
    Private,
}

impl Accessibility {
    /// Whether a mapper may write the field without policy involvement.
    pub fn is_public(self) -> bool {
        matches!(self, Accessibility::Public)
    }

    /// The Java-style modifier string used in access error messages.
    pub fn modifiers(self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Private => "private",
        }
    }
}

/// A constructor parameter: name, declared type and optional default.
#[derive(Debug, Clone)]
pub struct ParamDesc {
    name: String,
    ty: ValueType,
    default: Option<Value>,
}

impl ParamDesc {
    /// The parameter name columns are matched against.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared parameter type.
    pub fn ty(&self) -> ValueType {
        self.ty
    }

    /// The default value used when no column matches, if any.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

type Setter<T> = Box<dyn Fn(&mut T, Value) -> Result<()> + Send + Sync>;
type Constructor<T> = Box<dyn Fn(Vec<Value>) -> Result<T> + Send + Sync>;

/// A settable field that is not covered by the constructor.
pub struct FieldDesc<T: 'static> {
    name: String,
    ty: ValueType,
    access: Accessibility,
    set: Setter<T>,
}

impl<T: 'static> FieldDesc<T> {
    /// The field name columns are matched against.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared field type.
    pub fn ty(&self) -> ValueType {
        self.ty
    }

    /// The declared visibility of the field.
    pub fn access(&self) -> Accessibility {
        self.access
    }

    pub(crate) fn set(&self, instance: &mut T, value: Value) -> Result<()> {
        (self.set)(instance, value)
    }
}

impl<T: 'static> fmt::Debug for FieldDesc<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FieldDesc")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}

/// Structural description of a constructible type `T`.
///
/// ```
/// use rowbind::{Accessibility, Shape, ValueType, Value};
///
/// #[derive(Default)]
/// struct Fruit {
///     id: i32,
///     name: String,
/// }
///
/// let shape: Shape<Fruit> = Shape::builder("Fruit")
///     .param("id", ValueType::Int, Some(Value::Int(0)))
///     .constructor(|args| {
///         Ok(Fruit {
///             id: args[0].i()?,
///             ..Fruit::default()
///         })
///     })
///     .field("name", ValueType::Text, Accessibility::Public, |fruit, v| {
///         fruit.name = v.text()?.to_owned();
///         Ok(())
///     })
///     .finish()
///     .unwrap();
/// # let _ = shape;
/// ```
pub struct Shape<T: 'static> {
    name: String,
    params: Vec<ParamDesc>,
    construct: Constructor<T>,
    fields: Vec<FieldDesc<T>>,
}

impl<T: 'static> Shape<T> {
    /// Starts describing a type named `name` (used in error messages).
    pub fn builder(name: impl Into<String>) -> ShapeBuilder<T> {
        ShapeBuilder {
            name: name.into(),
            params: Vec::new(),
            construct: None,
            fields: Vec::new(),
        }
    }

    /// The type name, as it appears in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The constructor parameters, in declaration order.
    pub fn params(&self) -> &[ParamDesc] {
        &self.params
    }

    /// The non-constructor fields, in declaration order.
    pub fn fields(&self) -> &[FieldDesc<T>] {
        &self.fields
    }

    pub(crate) fn construct(&self, args: Vec<Value>) -> Result<T> {
        (self.construct)(args)
    }
}

impl<T: 'static> fmt::Debug for Shape<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Shape")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// Fluent builder for [`Shape`], obtained via [`Shape::builder`].
pub struct ShapeBuilder<T: 'static> {
    name: String,
    params: Vec<ParamDesc>,
    construct: Option<Constructor<T>>,
    fields: Vec<FieldDesc<T>>,
}

impl<T: 'static> ShapeBuilder<T> {
    /// Declares a constructor parameter. Parameters are positional: the
    /// constructor function receives their resolved values in declaration
    /// order, already coerced to `ty`.
    pub fn param(mut self, name: impl Into<String>, ty: ValueType, default: Option<Value>) -> Self {
        self.params.push(ParamDesc {
            name: name.into(),
            ty,
            default,
        });
        self
    }

    /// Registers the constructor function.
    pub fn constructor<F>(mut self, construct: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<T> + Send + Sync + 'static,
    {
        self.construct = Some(Box::new(construct));
        self
    }

    /// Declares a settable field outside the constructor, tagged with the
    /// visibility of the underlying member. The setter receives a value
    /// already coerced to `ty`.
    pub fn field<F>(
        mut self,
        name: impl Into<String>,
        ty: ValueType,
        access: Accessibility,
        set: F,
    ) -> Self
    where
        F: Fn(&mut T, Value) -> Result<()> + Send + Sync + 'static,
    {
        self.fields.push(FieldDesc {
            name: name.into(),
            ty,
            access,
            set: Box::new(set),
        });
        self
    }

    /// Finishes the shape.
    ///
    /// Fails with [`Error::UnmappableShape`] when nothing was declared, or
    /// when constructor parameters were declared without a constructor
    /// function.
    pub fn finish(self) -> Result<Shape<T>>
    where
        T: Default,
    {
        let construct = match self.construct {
            Some(f) => f,
            // A shape with no declared parameters can still fall back to
            // Default for the base instance.
            None if self.params.is_empty() => Box::new(|_args| Ok(T::default())) as Constructor<T>,
            None => {
                return Err(Error::UnmappableShape {
                    class_name: self.name,
                })
            }
        };
        if self.params.is_empty() && self.fields.is_empty() {
            return Err(Error::UnmappableShape {
                class_name: self.name,
            });
        }
        Ok(Shape {
            name: self.name,
            params: self.params,
            construct,
            fields: self.fields,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_empty_shape_is_rejected() {
        let result = Shape::<i32>::builder("Nothing").finish();
        assert_matches!(result, Err(Error::UnmappableShape { class_name }) if class_name == "Nothing");
    }

    #[test]
    fn test_fields_without_constructor_fall_back_to_default() {
        let shape = Shape::<i32>::builder("Counter")
            .field("value", ValueType::Int, Accessibility::Public, |n, v| {
                *n = v.i()?;
                Ok(())
            })
            .finish()
            .unwrap();

        assert_eq!(shape.construct(Vec::new()).unwrap(), 0);
    }
}
