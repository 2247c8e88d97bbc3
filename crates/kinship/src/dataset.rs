//! Family datasets as delivered by the data-access layer.
//!
//! A dataset is the JSON document
//!
//! ```json
//! { "people": [ ... ], "relationships": [ ... ] }
//! ```
//!
//! with rows in the backend's snake_case shape. Either list may be omitted.

use serde::{Deserialize, Serialize};

use kinship_core::family::{Person, Relationship};

/// People and relationships of one family tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyDataset {
    #[serde(default)]
    people: Vec<Person>,

    #[serde(default)]
    relationships: Vec<Relationship>,
}

impl FamilyDataset {
    /// Creates a dataset from already loaded records.
    pub fn new(people: Vec<Person>, relationships: Vec<Relationship>) -> Self {
        Self {
            people,
            relationships,
        }
    }

    /// Returns the people.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Returns the relationships.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }
}

#[cfg(test)]
mod tests {
    use kinship_core::family::RelationshipType;

    use super::*;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let dataset: FamilyDataset = serde_json::from_str("{}").unwrap();
        assert!(dataset.people().is_empty());
        assert!(dataset.relationships().is_empty());
    }

    #[test]
    fn test_backend_rows() {
        let dataset: FamilyDataset = serde_json::from_str(
            r#"{
                "people": [
                    { "id": "p1", "birthday": "1950-01-01", "is_living": false, "first_name": "Alice" },
                    { "id": "p2", "birthday": "1975-05-20", "is_living": true, "first_name": "Bob" }
                ],
                "relationships": [
                    { "id": "r1", "person1_id": "p1", "person2_id": "p2", "relationship_type": "guardian" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(dataset.people().len(), 2);
        assert_eq!(
            dataset.relationships()[0].relationship_type(),
            RelationshipType::Guardian
        );
    }

    #[test]
    fn test_unknown_relationship_type_is_rejected() {
        let result = serde_json::from_str::<FamilyDataset>(
            r#"{ "relationships": [
                { "id": "r1", "person1_id": "a", "person2_id": "b", "relationship_type": "cousin" }
            ] }"#,
        );
        assert!(result.is_err());
    }
}
