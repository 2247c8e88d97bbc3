//! Family-tree layout engine.
//!
//! This module turns a flat list of people and relationships into positioned
//! nodes and styled edges for a graph-rendering surface.
//!
//! # Pipeline Position
//!
//! ```text
//! People + Relationships
//!     ↓ structure
//! FamilyGraph (id-keyed adjacency)
//!     ↓ generation
//! Generations
//!     ↓ positioning + edges
//! FamilyLayout (this module's output)
//!     ↓ export
//! JSON
//! ```
//!
//! # Submodules
//!
//! - `generation` - Multi-source BFS assigning a generation to every person
//! - `positioning` - Row placement on the generation grid
//! - [`edges`] - Edge styles, anchors and routing hints
//!
//! The computation is pure: it performs no I/O, keeps no state between calls
//! and returns identical output for identical input.

pub mod edges;
mod generation;
mod positioning;

use log::{debug, trace};
use serde::Serialize;

use kinship_core::{
    family::{Person, Relationship},
    geometry::{Bounds, Point},
    identifier::Id,
};

pub use edges::{Anchor, EdgeRouting, EdgeStyleTable, StyledEdge};

use crate::{
    config::{AppConfig, DEFAULT_HORIZONTAL_SPACING, DEFAULT_VERTICAL_SPACING, LayoutConfig},
    error::KinshipError,
    structure::FamilyGraph,
};

/// A person placed on the generation grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode {
    id: Id,
    x: f32,
    y: f32,
    generation: usize,
    payload: Person,
}

impl PositionedNode {
    /// Returns the person id.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the node position in layout space.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the generation row of the person.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the original person record.
    pub fn payload(&self) -> &Person {
        &self.payload
    }
}

/// Positioned nodes and styled edges of one family.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FamilyLayout {
    nodes: Vec<PositionedNode>,
    edges: Vec<StyledEdge>,
}

impl FamilyLayout {
    /// Returns one node per distinct person, in input order.
    pub fn nodes(&self) -> &[PositionedNode] {
        &self.nodes
    }

    /// Returns one edge per surviving relationship, in input order.
    pub fn edges(&self) -> &[StyledEdge] {
        &self.edges
    }

    /// Returns `true` if the layout has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node of the person with this id.
    pub fn node(&self, id: Id) -> Option<&PositionedNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Returns the edge drawing the relationship with this id.
    pub fn edge(&self, id: Id) -> Option<&StyledEdge> {
        self.edges.iter().find(|edge| edge.id() == id)
    }

    /// Returns the box enclosing all node positions, or `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.nodes.iter().map(PositionedNode::position))
    }
}

/// Generation-layered layout engine.
///
/// # Examples
///
/// ```
/// use kinship::layout::LayoutEngine;
/// use kinship_core::{
///     family::{NaiveDate, Person, Relationship, RelationshipType},
///     identifier::Id,
/// };
///
/// let people = vec![
///     Person::new(Id::new("alice"), NaiveDate::from_ymd_opt(1950, 3, 1).unwrap(), false),
///     Person::new(Id::new("bob"), NaiveDate::from_ymd_opt(1975, 8, 9).unwrap(), true),
/// ];
/// let relationships = vec![Relationship::new(
///     Id::new("r1"),
///     Id::new("alice"),
///     Id::new("bob"),
///     RelationshipType::BiologicalParent,
/// )];
///
/// let layout = LayoutEngine::new().layout(&people, &relationships);
///
/// let bob = layout.node(Id::new("bob")).unwrap();
/// assert_eq!(bob.generation(), 1);
/// assert_eq!(bob.position().y(), -200.0);
/// assert_eq!(layout.edges().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    /// Distance between neighbours of one generation row
    horizontal_spacing: f32,

    /// Distance between generation rows
    vertical_spacing: f32,

    edge_styles: EdgeStyleTable,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    /// Create an engine with the default spacing and palette.
    pub fn new() -> Self {
        Self {
            horizontal_spacing: DEFAULT_HORIZONTAL_SPACING,
            vertical_spacing: DEFAULT_VERTICAL_SPACING,
            edge_styles: EdgeStyleTable::default(),
        }
    }

    /// Create an engine from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KinshipError::Config`] if a configured color is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, KinshipError> {
        Ok(Self::new()
            .with_layout_config(config.layout())
            .with_edge_styles(EdgeStyleTable::from_config(config.style())?))
    }

    /// Set both spacings from a [`LayoutConfig`].
    pub fn with_layout_config(self, layout: &LayoutConfig) -> Self {
        self.with_horizontal_spacing(layout.horizontal_spacing())
            .with_vertical_spacing(layout.vertical_spacing())
    }

    /// Set the distance between neighbours of one generation row.
    pub fn with_horizontal_spacing(mut self, spacing: f32) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set the distance between generation rows.
    pub fn with_vertical_spacing(mut self, spacing: f32) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Set the edge style lookup table.
    pub fn with_edge_styles(mut self, edge_styles: EdgeStyleTable) -> Self {
        self.edge_styles = edge_styles;
        self
    }

    /// Lay out `people` and `relationships`.
    ///
    /// Relationships referencing people outside `people` are ignored. An
    /// empty `people` slice yields an empty layout.
    pub fn layout(&self, people: &[Person], relationships: &[Relationship]) -> FamilyLayout {
        let graph = FamilyGraph::new(people, relationships);
        if graph.people_count() == 0 {
            debug!("No people to lay out");
            return FamilyLayout::default();
        }

        let generations = generation::assign_generations(&graph);
        let positions =
            positioning::position_rows(&generations, self.horizontal_spacing, self.vertical_spacing);

        let nodes: Vec<PositionedNode> = graph
            .people()
            .map(|person| {
                let id = person.id();
                let position = positions.get(&id).copied().unwrap_or_default();
                PositionedNode {
                    id,
                    x: position.x(),
                    y: position.y(),
                    generation: generations.get(id).unwrap_or_default(),
                    payload: person.clone(),
                }
            })
            .collect();

        let edges = edges::styled_edges(&graph, &self.edge_styles);

        debug!(
            nodes_count = nodes.len(),
            edges_count = edges.len(),
            dropped_relationships_count = relationships.len() - edges.len();
            "Family layout calculated"
        );
        trace!(nodes:?; "Positioned nodes");

        FamilyLayout { nodes, edges }
    }
}
