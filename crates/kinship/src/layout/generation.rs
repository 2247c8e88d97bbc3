//! Generation assignment.
//!
//! Every person receives a non-negative generation number: 0 for the oldest
//! recorded people, one more for each parent/child step downwards, and the
//! same value as their spouses and partners.
//!
//! # Algorithm
//!
//! A multi-source breadth-first traversal over [`FamilyGraph`]:
//!
//! 1. Start points are all people without a recorded parent, at generation 0.
//!    When every person has a parent (only possible with cyclic data), the
//!    earliest-born person is the single start point instead.
//! 2. A dequeued person at generation `g` offers `g + 1` to each child and
//!    `g` to each spouse. A person keeps the largest value ever offered and is
//!    queued again each time that value grows, so a child always ends below
//!    its deepest parent and spouses end on the same row.
//! 3. People never reached keep generation 0.
//!
//! Offers larger than `people - 1` cannot occur in consistent data: the
//! longest parent chain through `n` people has `n - 1` steps. Such offers are
//! dropped, which bounds the number of improvements per person and ends the
//! traversal on cyclic input. The resulting rows are still total but are not
//! meaningful for the contradictory part of the tree.

use std::collections::{BTreeMap, HashMap, VecDeque};

use indexmap::IndexMap;
use log::{trace, warn};

use kinship_core::{family::Person, identifier::Id};

use crate::structure::FamilyGraph;

/// Total mapping from person to generation, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Generations {
    by_person: IndexMap<Id, usize>,
}

impl Generations {
    /// Returns the generation of `id`, if the person was part of the graph.
    pub(crate) fn get(&self, id: Id) -> Option<usize> {
        self.by_person.get(&id).copied()
    }

    /// Returns the number of assigned people.
    pub(crate) fn len(&self) -> usize {
        self.by_person.len()
    }

    /// Groups people into rows keyed by generation, smallest first.
    ///
    /// Members of a row keep input order.
    pub(crate) fn rows(&self) -> BTreeMap<usize, Vec<Id>> {
        let mut rows: BTreeMap<usize, Vec<Id>> = BTreeMap::new();
        for (&id, &generation) in &self.by_person {
            rows.entry(generation).or_default().push(id);
        }
        rows
    }
}

/// Assigns a generation to every person of `graph`.
pub(crate) fn assign_generations(graph: &FamilyGraph<'_>) -> Generations {
    let max_generation = graph.people_count().saturating_sub(1);

    let mut start_points: Vec<Id> = graph.roots().map(Person::id).collect();
    if start_points.is_empty() {
        // Only reachable when every person has a parent.
        if let Some(person) = graph.earliest_born() {
            warn!(
                person_id:% = person.id();
                "No person without parents; starting from the earliest birthday"
            );
            start_points.push(person.id());
        }
    }
    trace!(start_points_count = start_points.len(); "Generation start points");

    let mut assigned: HashMap<Id, usize> = HashMap::with_capacity(graph.people_count());
    let mut queue: VecDeque<Id> = VecDeque::with_capacity(graph.people_count());
    for id in start_points {
        assigned.insert(id, 0);
        queue.push_back(id);
    }

    let mut cycle_reported = false;
    while let Some(id) = queue.pop_front() {
        let generation = assigned.get(&id).copied().unwrap_or_default();

        let offers = graph
            .children(id)
            .iter()
            .map(|&child| (child, generation + 1))
            .chain(graph.spouses(id).iter().map(|&spouse| (spouse, generation)));

        for (next, offered) in offers {
            if offered > max_generation {
                if !cycle_reported {
                    warn!(
                        person_id:% = next,
                        max_generation;
                        "Relationship cycle detected; generations are best effort"
                    );
                    cycle_reported = true;
                }
                continue;
            }

            if assigned.get(&next).is_none_or(|&current| offered > current) {
                assigned.insert(next, offered);
                queue.push_back(next);
            }
        }
    }

    let by_person: IndexMap<Id, usize> = graph
        .people()
        .map(|person| {
            let id = person.id();
            (id, assigned.get(&id).copied().unwrap_or_default())
        })
        .collect();

    trace!(
        people_count = by_person.len(),
        unreached_count = by_person.len() - assigned.len();
        "Generations assigned"
    );

    Generations { by_person }
}
