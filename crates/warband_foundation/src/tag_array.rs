//! Dense arrays keyed by closed tag sets.
//!
//! A [`TagArray`] stores one value per member of a small enum (skills,
//! factions, ...) in a flat array indexed by the member's position.
//! Iteration, `Display` and serialization can skip members still holding the
//! default value. That choice is a mode flag on the container, set once
//! where the array is created; [`TagArray::sparse`] turns it on.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// A closed set of tags with a dense integer mapping.
pub trait Tag: Copy + Eq + fmt::Debug + 'static {
    /// Human-readable name of the set, used in error messages.
    const KIND: &'static str;

    /// Every member, ordered by [`Tag::index`].
    const ALL: &'static [Self];

    /// Dense position of this member, in `0..ALL.len()`.
    fn index(self) -> usize;

    /// Canonical name of this member.
    fn name(self) -> &'static str;

    /// Looks up a member by dense position.
    #[must_use]
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Looks up a member by canonical name.
    #[must_use]
    fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.name() == name)
    }
}

/// One value per member of the tag set `E`.
///
/// Equality compares values only, not the iteration mode.
#[derive(Clone)]
pub struct TagArray<E, V> {
    values: Vec<V>,
    skip_default: bool,
    _tags: PhantomData<E>,
}

impl<E: Tag, V: Default + Clone> Default for TagArray<E, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Tag, V: Default + Clone> TagArray<E, V> {
    /// Creates an array with every value at its default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: vec![V::default(); E::ALL.len()],
            skip_default: false,
            _tags: PhantomData,
        }
    }

    /// Creates an empty array in skip-default mode.
    #[must_use]
    pub fn sparse() -> Self {
        Self::new().with_skip_default(true)
    }

    /// Resets every value to its default, keeping the mode.
    pub fn clear(&mut self) {
        self.values.fill(V::default());
    }
}

impl<E: Tag, V> TagArray<E, V> {
    /// Builder method to set the skip-default iteration mode.
    #[must_use]
    pub fn with_skip_default(mut self, skip: bool) -> Self {
        self.skip_default = skip;
        self
    }

    /// Sets the skip-default iteration mode.
    pub fn set_skip_default(&mut self, skip: bool) {
        self.skip_default = skip;
    }

    /// Whether iteration skips default values.
    #[must_use]
    pub fn skips_default(&self) -> bool {
        self.skip_default
    }

    /// Returns the value for `tag`.
    #[must_use]
    pub fn get(&self, tag: E) -> &V {
        &self.values[tag.index()]
    }

    /// Replaces the value for `tag`, returning the previous one.
    pub fn set(&mut self, tag: E, value: V) -> V {
        std::mem::replace(&mut self.values[tag.index()], value)
    }
}

impl<E: Tag, V: Default + PartialEq> TagArray<E, V> {
    /// Returns true if every value is the default.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let zero = V::default();
        self.values.iter().all(|v| *v == zero)
    }

    /// Iterates over `(tag, value)` pairs in tag order.
    ///
    /// In skip-default mode, pairs holding the default value are omitted.
    pub fn iter(&self) -> impl Iterator<Item = (E, &V)> + '_ {
        let zero = V::default();
        E::ALL
            .iter()
            .zip(&self.values)
            .filter(move |(_, v)| !self.skip_default || **v != zero)
            .map(|(tag, v)| (*tag, v))
    }
}

impl<E, V: PartialEq> PartialEq for TagArray<E, V> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<E, V: Eq> Eq for TagArray<E, V> {}

impl<E: Tag, V> Index<E> for TagArray<E, V> {
    type Output = V;

    fn index(&self, tag: E) -> &V {
        &self.values[tag.index()]
    }
}

impl<E: Tag, V> IndexMut<E> for TagArray<E, V> {
    fn index_mut(&mut self, tag: E) -> &mut V {
        &mut self.values[tag.index()]
    }
}

impl<E: Tag, V: fmt::Debug> fmt::Debug for TagArray<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(E::ALL.iter().map(|t| t.name()).zip(&self.values))
            .finish()
    }
}

/// Lists `"name": value` pairs as [`TagArray::iter`] yields them.
impl<E: Tag, V: fmt::Display + Default + PartialEq> fmt::Display for TagArray<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, (tag, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{}\": {value}", tag.name())?;
        }
        write!(f, " }}")
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::collections::BTreeMap;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Tag, TagArray};
    use crate::Error;

    /// A map from tag name to value, holding the pairs [`TagArray::iter`]
    /// yields.
    impl<E, V> Serialize for TagArray<E, V>
    where
        E: Tag,
        V: Serialize + Default + PartialEq,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(self.iter().map(|(tag, v)| (tag.name(), v)))
        }
    }

    /// Missing names keep the default value. The result is in skip-default
    /// mode.

    impl<'de, E, V> Deserialize<'de> for TagArray<E, V>
    where
        E: Tag,
        V: Deserialize<'de> + Default + Clone,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = BTreeMap::<String, V>::deserialize(deserializer)?;
            let mut array = TagArray::sparse();
            for (name, value) in raw {
                let Some(tag) = E::parse(&name) else {
                    return Err(D::Error::custom(Error::unknown_tag(E::KIND, name)));
                };
                array[tag] = value;
            }
            Ok(array)
        }
    }
}
