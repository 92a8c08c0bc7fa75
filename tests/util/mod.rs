use rowbind::{Accessibility, ResultRow, Shape, Value, ValueType};

/// The canonical fixture: a constructible bean with one public constructor
/// parameter and one field that stays private to this module.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TestBean {
    pub id: i32,
    inaccessible: i32,
}

impl TestBean {
    #[allow(dead_code)]
    pub fn inaccessible(&self) -> i32 {
        self.inaccessible
    }
}

/// Shape for [`TestBean`]: `TestBean(id: Int = 0)` plus the private
/// `inaccessible: Int` field assigned after construction.
#[allow(dead_code)]
pub fn test_bean_shape() -> Shape<TestBean> {
    Shape::builder("TestBean")
        .param("id", ValueType::Int, Some(Value::Int(0)))
        .constructor(|args| {
            Ok(TestBean {
                id: args[0].i()?,
                ..TestBean::default()
            })
        })
        .field(
            "inaccessible",
            ValueType::Int,
            Accessibility::Private,
            |bean, v| {
                bean.inaccessible = v.i()?;
                Ok(())
            },
        )
        .finish()
        .expect("TestBean shape")
}

/// `select 1 as id, 2 as inaccessible`
#[allow(dead_code)]
pub fn test_bean_row() -> ResultRow {
    ResultRow::new()
        .with_column("id", 1)
        .with_column("inaccessible", 2)
}
