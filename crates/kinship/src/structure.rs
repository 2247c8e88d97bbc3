//! Graph structure built from a family dataset.
//!
//! This module sits between the plain records of [`kinship_core::family`] and
//! the layout phases. It resolves ids, drops relationships that point outside
//! the dataset, and exposes adjacency queries used by generation assignment.

mod family_graph;

pub(crate) use family_graph::FamilyGraph;
