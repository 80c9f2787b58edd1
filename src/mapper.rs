//! Runtime type-identity dispatch over an ordered mapping table.

use std::any::{Any, TypeId};

/// Maps the concrete type of a value to an associated result.
///
/// Entries are probed in registration order and the first match wins;
/// [`map`](PolymorphicMapper::map) returns `None` when no entry matches.
/// Matching is by exact type identity.
///
/// # Example
/// ```
/// use std::any::Any;
/// use strided_slice::PolymorphicMapper;
///
/// trait Animal {
///     fn as_any(&self) -> &dyn Any;
/// }
///
/// struct Cat;
/// struct Dog;
///
/// impl Animal for Cat {
///     fn as_any(&self) -> &dyn Any { self }
/// }
/// impl Animal for Dog {
///     fn as_any(&self) -> &dyn Any { self }
/// }
///
/// let sounds = PolymorphicMapper::new()
///     .mapping::<Cat>("meow")
///     .mapping::<Dog>("woof");
///
/// let pet: Box<dyn Animal> = Box::new(Dog);
/// assert_eq!(sounds.map(pet.as_any()), Some("woof"));
/// ```
#[derive(Debug, Clone)]
pub struct PolymorphicMapper<V> {
    mappings: Vec<(TypeId, V)>,
}

impl<V: Clone> PolymorphicMapper<V> {
    /// Create an empty mapper; [`map`](Self::map) always returns `None`.
    pub fn new() -> Self {
        Self {
            mappings: Vec::new(),
        }
    }

    /// Append an entry mapping values of type `K` to `value`.
    pub fn mapping<K: Any>(mut self, value: V) -> Self {
        self.mappings.push((TypeId::of::<K>(), value));
        self
    }

    /// Look up the entry for the concrete type of `object`.
    pub fn map(&self, object: &dyn Any) -> Option<V> {
        let id = object.type_id();
        self.mappings
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, value)| value.clone())
    }
}

impl<V: Clone> Default for PolymorphicMapper<V> {
    fn default() -> Self {
        Self::new()
    }
}
