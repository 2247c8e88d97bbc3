//! Kinship Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Kinship layout
//! engine and its front ends:
//!
//! - **Identifiers**: String-interned record ids ([`identifier::Id`])
//! - **Family**: People and typed relationships ([`family`] module)
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Geometry**: Layout-space points and bounds ([`geometry`] module)
//! - **Strokes**: Edge style descriptors ([`stroke::EdgeStyle`])

pub mod color;
pub mod family;
pub mod geometry;
pub mod identifier;
pub mod stroke;
