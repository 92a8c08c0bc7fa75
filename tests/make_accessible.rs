use assert_matches::assert_matches;

use rowbind::{map_row, Accessibility, ConfigRegistry, Error, MapperConfig, Shape, ValueType};

mod util;
use util::{test_bean_row, test_bean_shape, TestBean};

#[test]
fn test_make_fields_accessible() {
    let mut registry = ConfigRegistry::new();
    registry
        .get_mut::<MapperConfig>()
        .set_make_attributes_accessible(true);

    let shape = test_bean_shape();
    let bean = map_row(&test_bean_row(), &shape, registry.get::<MapperConfig>()).unwrap();

    assert_eq!(bean.id, 1);
    assert_eq!(bean.inaccessible(), 2);
}

#[test]
fn test_make_fields_inaccessible() {
    let mut registry = ConfigRegistry::new();
    registry
        .get_mut::<MapperConfig>()
        .set_make_attributes_accessible(false);

    let shape = test_bean_shape();
    let err = map_row(&test_bean_row(), &shape, registry.get::<MapperConfig>()).unwrap_err();

    assert_matches!(err, Error::InaccessibleMember { .. });
    let message = err.to_string();
    assert!(message.contains("cannot access a member"), "{message}");
    assert!(message.contains("with modifiers \"private\""), "{message}");
}

#[test]
fn test_fields_inaccessible_by_default() {
    let shape = test_bean_shape();
    let result = map_row(&test_bean_row(), &shape, &MapperConfig::default());

    assert_matches!(result, Err(Error::InaccessibleMember { .. }));
}

#[test]
fn test_public_fields_map_under_either_policy() {
    let shape: Shape<TestBean> = Shape::builder("TestBean")
        .param("id", ValueType::Int, None)
        .constructor(|args| {
            let mut bean = TestBean::default();
            bean.id = args[0].i()?;
            Ok(bean)
        })
        .field("id", ValueType::Int, Accessibility::Public, |bean, v| {
            bean.id = v.i()?;
            Ok(())
        })
        .finish()
        .unwrap();
    let row = test_bean_row();

    for accessible in [false, true] {
        let mut config = MapperConfig::default();
        config.set_make_attributes_accessible(accessible);

        let bean = map_row(&row, &shape, &config).unwrap();
        assert_eq!(bean.id, 1);
        assert_eq!(bean.inaccessible(), 0);
    }
}

#[test]
fn test_mapping_is_idempotent() {
    let mut config = MapperConfig::default();
    config.set_make_attributes_accessible(true);
    let shape = test_bean_shape();
    let row = test_bean_row();

    let first = map_row(&row, &shape, &config).unwrap();
    let second = map_row(&row, &shape, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_policy_may_change_between_rows() {
    let shape = test_bean_shape();
    let row = test_bean_row();
    let mut registry = ConfigRegistry::new();

    registry
        .get_mut::<MapperConfig>()
        .set_make_attributes_accessible(true);
    assert!(map_row(&row, &shape, registry.get::<MapperConfig>()).is_ok());

    registry
        .get_mut::<MapperConfig>()
        .set_make_attributes_accessible(false);
    assert!(map_row(&row, &shape, registry.get::<MapperConfig>()).is_err());
}
