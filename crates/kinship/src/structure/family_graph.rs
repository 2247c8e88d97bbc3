//! Id-keyed adjacency over one family dataset.
//!
//! [`FamilyGraph`] is rebuilt from scratch for every layout call. It borrows
//! people and relationships from the caller and indexes them three ways:
//!
//! - `child_to_parents` and `parent_to_children` from parent-category
//!   relationships (person1 is the parent)
//! - `spouse_of` from spouse-category relationships, in both directions
//!
//! Sibling relationships do not shape the generation grid; they are only kept
//! in the surviving relationship list so they still produce edges.
//!
//! All maps are insertion ordered, so iterating the graph always follows the
//! order of the input slices.

use indexmap::{IndexMap, IndexSet};
use log::debug;

use kinship_core::{
    family::{Person, Relationship, RelationshipCategory},
    identifier::Id,
};

/// Adjacency maps and surviving relationships of one dataset.
#[derive(Debug)]
pub(crate) struct FamilyGraph<'a> {
    people: IndexMap<Id, &'a Person>,
    relationships: Vec<&'a Relationship>,
    child_to_parents: IndexMap<Id, Vec<Id>>,
    parent_to_children: IndexMap<Id, Vec<Id>>,
    spouse_of: IndexMap<Id, Vec<Id>>,
}

impl<'a> FamilyGraph<'a> {
    /// Indexes `people` and `relationships`.
    ///
    /// Relationships with an endpoint outside `people` are dropped, as are
    /// repeated relationship ids and repeated person ids (the first
    /// occurrence wins).
    pub(crate) fn new(people: &'a [Person], relationships: &'a [Relationship]) -> Self {
        let mut graph = Self {
            people: IndexMap::with_capacity(people.len()),
            relationships: Vec::with_capacity(relationships.len()),
            child_to_parents: IndexMap::new(),
            parent_to_children: IndexMap::new(),
            spouse_of: IndexMap::new(),
        };

        for person in people {
            if graph.people.contains_key(&person.id()) {
                debug!(person_id:% = person.id(); "Ignoring repeated person id");
                continue;
            }
            graph.people.insert(person.id(), person);
        }

        let mut seen = IndexSet::with_capacity(relationships.len());
        for relationship in relationships {
            if !seen.insert(relationship.id()) {
                debug!(relationship_id:% = relationship.id(); "Ignoring repeated relationship id");
                continue;
            }
            if !graph.contains(relationship.person1()) || !graph.contains(relationship.person2()) {
                debug!(
                    relationship_id:% = relationship.id(),
                    person1_id:% = relationship.person1(),
                    person2_id:% = relationship.person2();
                    "Ignoring relationship with unknown person"
                );
                continue;
            }
            graph.add_relationship(relationship);
        }

        graph
    }

    fn add_relationship(&mut self, relationship: &'a Relationship) {
        let (first, second) = (relationship.person1(), relationship.person2());

        match relationship.category() {
            RelationshipCategory::Parent => {
                self.child_to_parents.entry(second).or_default().push(first);
                self.parent_to_children.entry(first).or_default().push(second);
            }
            RelationshipCategory::Spouse => {
                self.spouse_of.entry(first).or_default().push(second);
                self.spouse_of.entry(second).or_default().push(first);
            }
            RelationshipCategory::Sibling => {}
        }

        self.relationships.push(relationship);
    }

    /// Returns the number of distinct people.
    pub(crate) fn people_count(&self) -> usize {
        self.people.len()
    }

    /// Returns `true` if a person with this id is part of the graph.
    pub(crate) fn contains(&self, id: Id) -> bool {
        self.people.contains_key(&id)
    }

    /// Returns all people in input order.
    pub(crate) fn people(&self) -> impl Iterator<Item = &'a Person> + '_ {
        self.people.values().copied()
    }

    /// Returns the relationships whose endpoints are both known, in input order.
    pub(crate) fn relationships(&self) -> impl Iterator<Item = &'a Relationship> + '_ {
        self.relationships.iter().copied()
    }

    /// Returns the recorded parents of `id`.
    pub(crate) fn parents(&self, id: Id) -> &[Id] {
        self.child_to_parents.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Returns the recorded children of `id`.
    pub(crate) fn children(&self, id: Id) -> &[Id] {
        self.parent_to_children.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Returns the current and former spouses or partners of `id`.
    pub(crate) fn spouses(&self, id: Id) -> &[Id] {
        self.spouse_of.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Returns the people without any recorded parent, in input order.
    pub(crate) fn roots(&self) -> impl Iterator<Item = &'a Person> + '_ {
        self.people().filter(|person| self.parents(person.id()).is_empty())
    }

    /// Returns the person born first; ties go to the earlier input entry.
    pub(crate) fn earliest_born(&self) -> Option<&'a Person> {
        self.people().min_by_key(|person| person.birthday())
    }
}
