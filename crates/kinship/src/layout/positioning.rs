//! Row placement of people on the generation grid.
//!
//! Each generation is one horizontal row at `y = -generation * vertical`.
//! Members of a row are spread left to right at `horizontal` intervals and
//! centered on `x = 0`. There is no collision avoidance and no crossing
//! minimization; the order inside a row is the input order.

use std::collections::HashMap;

use kinship_core::{geometry::Point, identifier::Id};

use super::generation::Generations;

/// Computes the position of every person in `generations`.
pub(crate) fn position_rows(
    generations: &Generations,
    horizontal_spacing: f32,
    vertical_spacing: f32,
) -> HashMap<Id, Point> {
    let mut positions = HashMap::with_capacity(generations.len());

    for (generation, members) in generations.rows() {
        // Subtracting from 0.0 keeps the first row and lone members at +0.0.
        let y = 0.0 - generation as f32 * vertical_spacing;
        let first_x = 0.0 - (members.len() - 1) as f32 / 2.0 * horizontal_spacing;

        for (index, id) in members.into_iter().enumerate() {
            let x = first_x + index as f32 * horizontal_spacing;
            positions.insert(id, Point::new(x, y));
        }
    }

    positions
}
