//! Family records: people and the typed relationships between them.
//!
//! These are the plain data shapes the backend stores. The layout engine
//! borrows them read-only; nothing here knows about generations or
//! coordinates.
//!
//! # Relationship Direction
//!
//! For [`RelationshipCategory::Parent`] relationships `person1` is always the
//! parent and `person2` the child. Spouse and sibling relationships are
//! symmetric and the order of the two people carries no meaning.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::identifier::Id;

pub use chrono::NaiveDate;

/// A person in the family tree.
///
/// Only `id`, `birthday` and `is_living` take part in the layout. Every other
/// field of the record (names, photo URL, biography, ...) is kept in
/// [`Person::details`] and handed to the rendering surface untouched.
///
/// # Examples
///
/// ```
/// use kinship_core::family::{NaiveDate, Person};
///
/// let json = r#"{
///     "id": "alice",
///     "birthday": "1950-04-12",
///     "is_living": false,
///     "first_name": "Alice"
/// }"#;
///
/// let alice: Person = serde_json::from_str(json).unwrap();
/// assert_eq!(alice.id(), "alice");
/// assert_eq!(alice.birthday(), NaiveDate::from_ymd_opt(1950, 4, 12).unwrap());
/// assert_eq!(alice.details()["first_name"], "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    id: Id,
    birthday: NaiveDate,
    is_living: bool,
    #[serde(flatten)]
    details: Map<String, Value>,
}

impl Person {
    /// Creates a person without descriptive details.
    pub fn new(id: Id, birthday: NaiveDate, is_living: bool) -> Self {
        Self {
            id,
            birthday,
            is_living,
            details: Map::new(),
        }
    }

    /// Adds a descriptive attribute (builder style).
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns the record id.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the date of birth.
    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    /// Returns `true` if the person is alive.
    pub fn is_living(&self) -> bool {
        self.is_living
    }

    /// Returns the descriptive attributes that are not used for layout.
    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }
}

/// A typed link between two people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    id: Id,
    person1_id: Id,
    person2_id: Id,
    relationship_type: RelationshipType,
}

impl Relationship {
    /// Creates a relationship between `person1` and `person2`.
    ///
    /// For parent relationships `person1` is the parent.
    pub fn new(id: Id, person1: Id, person2: Id, relationship_type: RelationshipType) -> Self {
        Self {
            id,
            person1_id: person1,
            person2_id: person2,
            relationship_type,
        }
    }

    /// Returns the record id.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the first person (the parent, for parent relationships).
    pub fn person1(&self) -> Id {
        self.person1_id
    }

    /// Returns the second person (the child, for parent relationships).
    pub fn person2(&self) -> Id {
        self.person2_id
    }

    /// Returns the relationship type.
    pub fn relationship_type(&self) -> RelationshipType {
        self.relationship_type
    }

    /// Returns the category of the relationship type.
    pub fn category(&self) -> RelationshipCategory {
        self.relationship_type.category()
    }
}

/// The three semantic groups of relationship types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipCategory {
    /// Directed: person1 raised person2.
    Parent,
    /// Symmetric: current or former couple.
    Spouse,
    /// Symmetric: children of shared (or joined) households.
    Sibling,
}

/// Every kind of relationship the backend can store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    BiologicalParent,
    AdoptiveParent,
    StepParent,
    FosterParent,
    Guardian,
    Spouse,
    ExSpouse,
    Partner,
    ExPartner,
    Sibling,
    HalfSibling,
    StepSibling,
    AdoptedSibling,
}

impl RelationshipType {
    /// All relationship types, grouped by category.
    pub const ALL: [RelationshipType; 13] = [
        Self::BiologicalParent,
        Self::AdoptiveParent,
        Self::StepParent,
        Self::FosterParent,
        Self::Guardian,
        Self::Spouse,
        Self::ExSpouse,
        Self::Partner,
        Self::ExPartner,
        Self::Sibling,
        Self::HalfSibling,
        Self::StepSibling,
        Self::AdoptedSibling,
    ];

    /// Returns the category this type belongs to.
    pub fn category(self) -> RelationshipCategory {
        match self {
            Self::BiologicalParent
            | Self::AdoptiveParent
            | Self::StepParent
            | Self::FosterParent
            | Self::Guardian => RelationshipCategory::Parent,
            Self::Spouse | Self::ExSpouse | Self::Partner | Self::ExPartner => {
                RelationshipCategory::Spouse
            }
            Self::Sibling | Self::HalfSibling | Self::StepSibling | Self::AdoptedSibling => {
                RelationshipCategory::Sibling
            }
        }
    }

    /// Returns `true` only for [`RelationshipType::BiologicalParent`].
    pub fn is_biological(self) -> bool {
        matches!(self, Self::BiologicalParent)
    }

    /// Returns `true` for couples that are still together.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Spouse | Self::Partner)
    }

    /// Returns the wire name, e.g. `"biological_parent"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BiologicalParent => "biological_parent",
            Self::AdoptiveParent => "adoptive_parent",
            Self::StepParent => "step_parent",
            Self::FosterParent => "foster_parent",
            Self::Guardian => "guardian",
            Self::Spouse => "spouse",
            Self::ExSpouse => "ex_spouse",
            Self::Partner => "partner",
            Self::ExPartner => "ex_partner",
            Self::Sibling => "sibling",
            Self::HalfSibling => "half_sibling",
            Self::StepSibling => "step_sibling",
            Self::AdoptedSibling => "adopted_sibling",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown relationship type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown relationship type `{0}`")]
pub struct UnknownRelationshipType(String);

impl FromStr for RelationshipType {
    type Err = UnknownRelationshipType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownRelationshipType(s.to_string()))
    }
}
