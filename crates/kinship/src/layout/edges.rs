//! Styled edges for relationships.
//!
//! Each surviving relationship becomes exactly one [`StyledEdge`]. The
//! visual style depends only on the relationship type and is looked up in an
//! [`EdgeStyleTable`] built once per engine:
//!
//! | Relationship types                          | Line              |
//! |---------------------------------------------|-------------------|
//! | `biological_parent`                         | solid             |
//! | other parent types                          | dashed            |
//! | `spouse`, `partner`                         | thick solid       |
//! | `ex_spouse`, `ex_partner`                   | dashed            |
//! | sibling types                               | solid, own color  |
//!
//! Spouse-category edges attach to the left and right sides of the two node
//! boxes and are drawn straight; all other edges use the renderer's default
//! anchors with smooth-step routing.

use std::collections::HashMap;

use serde::Serialize;

use kinship_core::{
    color::Color,
    family::{Relationship, RelationshipCategory, RelationshipType},
    identifier::Id,
    stroke::EdgeStyle,
};

use crate::{config::StyleConfig, error::KinshipError, structure::FamilyGraph};

const PARENT_STROKE_WIDTH: f32 = 2.0;
const ACTIVE_COUPLE_STROKE_WIDTH: f32 = 3.0;
const FORMER_COUPLE_STROKE_WIDTH: f32 = 2.0;
const SIBLING_STROKE_WIDTH: f32 = 2.0;

/// Where an edge attaches to its two node boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Let the rendering surface choose (top/bottom for vertical rows).
    #[default]
    Default,
    /// Attach to the left and right sides.
    LeftRight,
}

/// Curve-routing hint for the rendering surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeRouting {
    /// Orthogonal segments with rounded corners.
    #[default]
    SmoothStep,
    /// A single straight segment.
    Straight,
}

/// Lookup table from relationship type to edge style.
#[derive(Debug, Clone)]
pub struct EdgeStyleTable {
    styles: HashMap<RelationshipType, EdgeStyle>,
    fallback: EdgeStyle,
}

impl EdgeStyleTable {
    /// Builds the table from one color per relationship category.
    pub fn new(parent_color: Color, spouse_color: Color, sibling_color: Color) -> Self {
        let styles = RelationshipType::ALL
            .into_iter()
            .map(|ty| {
                let style = match ty.category() {
                    RelationshipCategory::Parent if ty.is_biological() => {
                        EdgeStyle::solid(parent_color, PARENT_STROKE_WIDTH)
                    }
                    RelationshipCategory::Parent => {
                        EdgeStyle::dashed_line(parent_color, PARENT_STROKE_WIDTH)
                    }
                    RelationshipCategory::Spouse if ty.is_active() => {
                        EdgeStyle::solid(spouse_color, ACTIVE_COUPLE_STROKE_WIDTH)
                    }
                    RelationshipCategory::Spouse => {
                        EdgeStyle::dashed_line(spouse_color, FORMER_COUPLE_STROKE_WIDTH)
                    }
                    RelationshipCategory::Sibling => {
                        EdgeStyle::solid(sibling_color, SIBLING_STROKE_WIDTH)
                    }
                };
                (ty, style)
            })
            .collect();

        Self {
            styles,
            fallback: EdgeStyle::solid(parent_color, PARENT_STROKE_WIDTH),
        }
    }

    /// Builds the table from the colors of a [`StyleConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`KinshipError::Config`] if a configured color is invalid.
    pub fn from_config(style: &StyleConfig) -> Result<Self, KinshipError> {
        Ok(Self::new(
            style.parent_color().map_err(KinshipError::Config)?,
            style.spouse_color().map_err(KinshipError::Config)?,
            style.sibling_color().map_err(KinshipError::Config)?,
        ))
    }

    /// Returns the style for `relationship_type`.
    ///
    /// Types missing from the table get the biological-parent style.
    pub fn style(&self, relationship_type: RelationshipType) -> &EdgeStyle {
        self.styles
            .get(&relationship_type)
            .unwrap_or(&self.fallback)
    }
}

impl Default for EdgeStyleTable {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default()).expect("built-in palette is valid")
    }
}

/// A renderable relationship line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledEdge {
    id: Id,
    source: Id,
    target: Id,
    relationship_type: RelationshipType,
    style: EdgeStyle,
    anchor: Anchor,
    routing: EdgeRouting,
}

impl StyledEdge {
    fn from_relationship(relationship: &Relationship, styles: &EdgeStyleTable) -> Self {
        let relationship_type = relationship.relationship_type();
        let (anchor, routing) = match relationship.category() {
            RelationshipCategory::Spouse => (Anchor::LeftRight, EdgeRouting::Straight),
            RelationshipCategory::Parent | RelationshipCategory::Sibling => {
                (Anchor::Default, EdgeRouting::SmoothStep)
            }
        };

        Self {
            id: relationship.id(),
            source: relationship.person1(),
            target: relationship.person2(),
            relationship_type,
            style: styles.style(relationship_type).clone(),
            anchor,
            routing,
        }
    }

    /// Returns the id of the relationship this edge draws.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the source person (the parent, for parent edges).
    pub fn source(&self) -> Id {
        self.source
    }

    /// Returns the target person (the child, for parent edges).
    pub fn target(&self) -> Id {
        self.target
    }

    /// Returns the type of the underlying relationship.
    pub fn relationship_type(&self) -> RelationshipType {
        self.relationship_type
    }

    /// Returns the visual style.
    pub fn style(&self) -> &EdgeStyle {
        &self.style
    }

    /// Returns where the edge attaches to its nodes.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Returns the curve-routing hint.
    pub fn routing(&self) -> EdgeRouting {
        self.routing
    }
}

/// Builds one edge per surviving relationship of `graph`, in input order.
pub(crate) fn styled_edges(graph: &FamilyGraph<'_>, styles: &EdgeStyleTable) -> Vec<StyledEdge> {
    graph
        .relationships()
        .map(|relationship| StyledEdge::from_relationship(relationship, styles))
        .collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use kinship_core::family::{NaiveDate, Person};

    use super::*;

    fn table() -> EdgeStyleTable {
        EdgeStyleTable::new(
            Color::new("gray").unwrap(),
            Color::new("red").unwrap(),
            Color::new("blue").unwrap(),
        )
    }

    #[test]
    fn test_default_table_uses_built_in_palette() {
        let table = EdgeStyleTable::default();
        let palette = StyleConfig::default();

        assert_eq!(
            table.style(RelationshipType::Spouse).stroke_color(),
            palette.spouse_color().unwrap()
        );
    }

    #[test]
    fn test_from_config_rejects_invalid_color() {
        let style = StyleConfig::new(None, Some("not-a-color".to_string()), None);
        let result = EdgeStyleTable::from_config(&style);
        assert!(matches!(result, Err(KinshipError::Config(_))));
    }

    #[test]
    fn test_table_covers_every_type() {
        let table = table();
        assert_eq!(table.styles.len(), RelationshipType::ALL.len());
    }

    #[test]
    fn test_parent_styles() {
        let table = table();
        let gray = Color::new("gray").unwrap();

        let biological = table.style(RelationshipType::BiologicalParent);
        assert!(!biological.dashed());
        assert_eq!(biological.stroke_color(), gray);

        for ty in [
            RelationshipType::AdoptiveParent,
            RelationshipType::StepParent,
            RelationshipType::FosterParent,
            RelationshipType::Guardian,
        ] {
            let style = table.style(ty);
            assert!(style.dashed(), "{ty} should be dashed");
            assert_eq!(style.stroke_color(), gray);
        }
    }

    #[test]
    fn test_couple_styles() {
        let table = table();

        for ty in [RelationshipType::Spouse, RelationshipType::Partner] {
            let style = table.style(ty);
            assert!(!style.dashed());
            assert!(
                style.stroke_width()
                    > table.style(RelationshipType::BiologicalParent).stroke_width()
            );
        }
        for ty in [RelationshipType::ExSpouse, RelationshipType::ExPartner] {
            assert!(table.style(ty).dashed(), "{ty} should be dashed");
        }
    }

    #[test]
    fn test_sibling_styles_use_own_color() {
        let table = table();
        let blue = Color::new("blue").unwrap();

        for ty in [
            RelationshipType::Sibling,
            RelationshipType::HalfSibling,
            RelationshipType::StepSibling,
            RelationshipType::AdoptedSibling,
        ] {
            let style = table.style(ty);
            assert!(!style.dashed());
            assert_eq!(style.stroke_color(), blue);
            assert_approx_eq!(f32, style.stroke_width(), SIBLING_STROKE_WIDTH);
        }
    }

    #[test]
    fn test_missing_entry_falls_back_to_biological_parent() {
        let mut table = table();
        table.styles.remove(&RelationshipType::Guardian);

        assert_eq!(
            table.style(RelationshipType::Guardian),
            table.style(RelationshipType::BiologicalParent)
        );
    }

    #[test]
    fn test_anchor_and_routing_by_category() {
        let people = [
            Person::new(Id::new("a"), NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(), true),
            Person::new(Id::new("b"), NaiveDate::from_ymd_opt(1951, 1, 1).unwrap(), true),
        ];
        let rels = [
            Relationship::new(
                Id::new("couple"),
                Id::new("a"),
                Id::new("b"),
                RelationshipType::ExSpouse,
            ),
            Relationship::new(
                Id::new("kin"),
                Id::new("a"),
                Id::new("b"),
                RelationshipType::StepSibling,
            ),
        ];
        let graph = FamilyGraph::new(&people, &rels);
        let edges = styled_edges(&graph, &table());

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].anchor(), Anchor::LeftRight);
        assert_eq!(edges[0].routing(), EdgeRouting::Straight);
        assert_eq!(edges[1].anchor(), Anchor::Default);
        assert_eq!(edges[1].routing(), EdgeRouting::SmoothStep);
        assert_eq!(edges[1].source(), "a");
        assert_eq!(edges[1].target(), "b");
    }

    #[test]
    fn test_anchor_serialization() {
        assert_eq!(
            serde_json::to_string(&Anchor::LeftRight).unwrap(),
            "\"left-right\""
        );
        assert_eq!(serde_json::to_string(&Anchor::Default).unwrap(), "\"default\"");
        assert_eq!(
            serde_json::to_string(&EdgeRouting::SmoothStep).unwrap(),
            "\"smooth-step\""
        );
    }
}
