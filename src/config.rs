//! Session-scoped mapper configuration.
//!
//! Configuration objects live in a [`ConfigRegistry`], keyed by type and
//! created on first access, so a session can hand out
//! `registry.get_mut::<MapperConfig>()` without pre-registering anything.
//! Mapping operations take an immutable `&MapperConfig`; callers that share
//! a registry across threads snapshot it with [`ConfigRegistry::create_copy`]
//! or clone the config instead of mutating it mid-call.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::matcher::{ColumnNameMatcher, DEFAULT_MATCHERS};

/// A configuration object that can live in a [`ConfigRegistry`].
pub trait Config: Default + Clone + Send + Sync + 'static {}

/// Configuration for row-to-object mapping.
#[derive(Clone)]
pub struct MapperConfig {
    column_name_matchers: Vec<Arc<dyn ColumnNameMatcher>>,
    strict_matching: bool,
    make_attributes_accessible: bool,
}

impl Default for MapperConfig {
    /// Case-insensitive and snake-case matching, lenient column consumption,
    /// and no accessibility override.
    fn default() -> Self {
        MapperConfig {
            column_name_matchers: DEFAULT_MATCHERS.clone(),
            strict_matching: false,
            make_attributes_accessible: false,
        }
    }
}

impl MapperConfig {
    /// The column name matchers, applied in order.
    pub fn column_name_matchers(&self) -> &[Arc<dyn ColumnNameMatcher>] {
        &self.column_name_matchers
    }

    /// Replaces all column name matchers with the given list.
    pub fn set_column_name_matchers(
        &mut self,
        matchers: Vec<Arc<dyn ColumnNameMatcher>>,
    ) -> &mut Self {
        self.column_name_matchers = matchers;
        self
    }

    /// Whether every column of a row must be consumed by the mapping.
    pub fn strict_matching(&self) -> bool {
        self.strict_matching
    }

    /// If set, a column consumed by neither a constructor parameter nor a
    /// field fails the mapping instead of being ignored.
    pub fn set_strict_matching(&mut self, strict_matching: bool) -> &mut Self {
        self.strict_matching = strict_matching;
        self
    }

    /// Whether the mapper may write non-public fields.
    pub fn make_attributes_accessible(&self) -> bool {
        self.make_attributes_accessible
    }

    /// If set, the mapper bypasses member visibility and writes non-public
    /// fields; otherwise a column matching a non-public field fails the
    /// mapping.
    pub fn set_make_attributes_accessible(&mut self, make_accessible: bool) -> &mut Self {
        self.make_attributes_accessible = make_accessible;
        self
    }
}

impl fmt::Debug for MapperConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MapperConfig")
            .field("strict_matching", &self.strict_matching)
            .field("make_attributes_accessible", &self.make_attributes_accessible)
            .finish_non_exhaustive()
    }
}

impl Config for MapperConfig {}

trait ConfigEntry: Any + Send + Sync {
    fn clone_entry(&self) -> Box<dyn ConfigEntry>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<C: Config> ConfigEntry for C {
    fn clone_entry(&self) -> Box<dyn ConfigEntry> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Type-keyed store of configuration objects for one session.
///
/// ```
/// use rowbind::{ConfigRegistry, MapperConfig};
///
/// let mut registry = ConfigRegistry::new();
/// registry
///     .get_mut::<MapperConfig>()
///     .set_make_attributes_accessible(true);
/// assert!(registry.get::<MapperConfig>().make_attributes_accessible());
/// ```
#[derive(Default)]
pub struct ConfigRegistry {
    entries: HashMap<TypeId, Box<dyn ConfigEntry>>,
}

impl ConfigRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        ConfigRegistry::default()
    }

    /// Returns the configuration object of type `C`, creating its default
    /// instance on first access.
    pub fn get<C: Config>(&mut self) -> &C {
        match self.entry::<C>().as_any().downcast_ref() {
            Some(config) => config,
            None => unreachable!("registry entries are keyed by TypeId"),
        }
    }

    /// Returns the configuration object of type `C` for mutation, creating
    /// its default instance on first access.
    pub fn get_mut<C: Config>(&mut self) -> &mut C {
        match self.entry::<C>().as_any_mut().downcast_mut() {
            Some(config) => config,
            None => unreachable!("registry entries are keyed by TypeId"),
        }
    }

    /// Deep-copies every entry into a new registry, detaching child scopes
    /// from later changes to this one.
    pub fn create_copy(&self) -> Self {
        ConfigRegistry {
            entries: self
                .entries
                .iter()
                .map(|(id, entry)| (*id, entry.clone_entry()))
                .collect(),
        }
    }

    fn entry<C: Config>(&mut self) -> &mut Box<dyn ConfigEntry> {
        self.entries
            .entry(TypeId::of::<C>())
            .or_insert_with(|| Box::new(C::default()))
    }
}

impl fmt::Debug for ConfigRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ConfigRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_created_on_first_access() {
        let mut registry = ConfigRegistry::new();
        assert!(!registry.get::<MapperConfig>().make_attributes_accessible());
    }

    #[test]
    fn test_mutation_is_visible_to_later_reads() {
        let mut registry = ConfigRegistry::new();
        registry
            .get_mut::<MapperConfig>()
            .set_make_attributes_accessible(true)
            .set_strict_matching(true);

        let config = registry.get::<MapperConfig>();
        assert!(config.make_attributes_accessible());
        assert!(config.strict_matching());
    }

    #[test]
    fn test_copy_is_detached() {
        let mut registry = ConfigRegistry::new();
        registry
            .get_mut::<MapperConfig>()
            .set_make_attributes_accessible(true);

        let mut copy = registry.create_copy();
        assert!(copy.get::<MapperConfig>().make_attributes_accessible());

        copy.get_mut::<MapperConfig>()
            .set_make_attributes_accessible(false);
        assert!(registry.get::<MapperConfig>().make_attributes_accessible());
    }
}
