//! Person and relationship identifiers backed by string interning.
//!
//! Record ids coming from the backend are opaque strings (usually UUIDs). The
//! layout engine hashes and compares them constantly while building adjacency
//! maps, so they are interned once into the [`Id`] type, which is `Copy` and
//! compares by symbol.
//!
//! # Memory
//!
//! The interner is shared by the whole process and never shrinks. Every
//! distinct id string is stored once and stays resolvable for the life of
//! the process; laying out the same family again adds nothing, but each new
//! id adds its bytes permanently.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// Access is serialized through a `Mutex`.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        // A poisoned interner still holds valid symbols; keep using it.
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
fn interned_count() -> usize {
    interner().len()
}

/// Interned identifier of a person or relationship record.
///
/// # Examples
///
/// ```
/// use kinship_core::identifier::Id;
///
/// let alice = Id::new("7d1c2f0e-alice");
/// let again: Id = "7d1c2f0e-alice".into();
///
/// assert_eq!(alice, again);
/// assert_eq!(alice, "7d1c2f0e-alice");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a record id string.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns the original string of this identifier.
    pub fn as_string(&self) -> String {
        interner()
            .resolve(self.0)
            .map(str::to_owned)
            .unwrap_or_default()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_string())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}
