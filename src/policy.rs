//! Accessibility policies for field writes.

use crate::config::MapperConfig;
use crate::errors::*;
use crate::shape::FieldDesc;

/// A policy deciding whether the mapper may write a given field.
///
/// The policy only sees the field descriptor; values never reach a setter
/// the policy has rejected.
pub trait AccessPolicy {
    /// Fails with [`Error::InaccessibleMember`] when the field must not be
    /// written.
    fn check_write<T>(&self, class_name: &str, field: &FieldDesc<T>) -> Result<()>;
}

/// Rejects writes to any non-public field.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictAccessPolicy;

impl AccessPolicy for StrictAccessPolicy {
    fn check_write<T>(&self, class_name: &str, field: &FieldDesc<T>) -> Result<()> {
        if field.access().is_public() {
            Ok(())
        } else {
            Err(Error::inaccessible(class_name, field.name(), field.access()))
        }
    }
}

/// Bypasses member visibility and allows every write.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveAccessPolicy;

impl AccessPolicy for PermissiveAccessPolicy {
    fn check_write<T>(&self, _class_name: &str, _field: &FieldDesc<T>) -> Result<()> {
        Ok(())
    }
}

/// The policy selected by `make_attributes_accessible`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ConfiguredPolicy {
    Strict(StrictAccessPolicy),
    Permissive(PermissiveAccessPolicy),
}

impl ConfiguredPolicy {
    pub(crate) fn for_config(config: &MapperConfig) -> Self {
        if config.make_attributes_accessible() {
            ConfiguredPolicy::Permissive(PermissiveAccessPolicy)
        } else {
            ConfiguredPolicy::Strict(StrictAccessPolicy)
        }
    }
}

impl AccessPolicy for ConfiguredPolicy {
    fn check_write<T>(&self, class_name: &str, field: &FieldDesc<T>) -> Result<()> {
        match self {
            ConfiguredPolicy::Strict(p) => p.check_write(class_name, field),
            ConfiguredPolicy::Permissive(p) => p.check_write(class_name, field),
        }
    }
}
