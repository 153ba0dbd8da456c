//! Upward tracing: which of a cell's candidate faces survive to an
//! ancestor's boundary, and how far up the hierarchy that survival
//! extends.

use tracing::trace;

use crate::grid::GridService;
use crate::mapping;
use crate::types::{BoundaryError, FaceSet};

/// One step of the upward trace: maps `faces` from `cell` (at `res`)
/// onto its parent's boundary.
///
/// Returns `None` when the trace dies here: the cell is a pentagon, the
/// cell is its parent's center child, or none of the candidate faces
/// has a forward-table entry. Those are the normal "not on this
/// boundary" outcomes, not errors.
fn lift_one_level<G: GridService>(grid: &G, cell: &G::Cell, faces: FaceSet, res: i32) -> Option<(G::Cell, FaceSet)> {
  // Pentagon children never carry a face upward past themselves.
  if grid.is_pentagon(cell) {
    return None;
  }

  let parity = res % 2;
  let child_pos = grid.child_position(cell, res - 1);
  let parent = grid.parent(cell, res - 1);
  let parent_is_pentagon = grid.is_pentagon(&parent);

  if child_pos == 0 {
    return None;
  }

  let mut mapped = FaceSet::EMPTY;
  for face in faces {
    if let Some(parent_face) = mapping::child_face_to_parent_face(parent_is_pentagon, parity, child_pos, face) {
      mapped.insert(parent_face);
    }
  }
  trace!(res, child_pos, parent_is_pentagon, ?faces, ?mapped, "lifted faces one level");

  if mapped.is_empty() {
    return None;
  }
  Some((parent, mapped))
}

/// Traces which of `faces` the cell lies on at the boundary of its
/// ancestor at `ancestor_res`.
///
/// The trace walks up one resolution level at a time, mapping the
/// surviving face set through the forward tables. An empty result means
/// the cell does not touch any of the tracked faces at that ancestor;
/// tracing an empty input set returns the empty set without consulting
/// the grid.
///
/// # Errors
///
/// [`BoundaryError::InvalidResolution`] if `ancestor_res` is negative or
/// not strictly coarser than the cell's resolution.
pub fn cell_to_ancestor_faces<G: GridService>(
  grid: &G,
  cell: &G::Cell,
  faces: FaceSet,
  ancestor_res: i32,
) -> Result<FaceSet, BoundaryError> {
  let cell_res = grid.resolution(cell);
  if ancestor_res >= cell_res || ancestor_res < 0 {
    return Err(BoundaryError::InvalidResolution {
      target: ancestor_res,
      cell: cell_res,
    });
  }
  if faces.is_empty() {
    return Ok(FaceSet::EMPTY);
  }

  let mut current = cell.clone();
  let mut faces = faces;
  for res in ((ancestor_res + 1)..=cell_res).rev() {
    match lift_one_level(grid, &current, faces, res) {
      Some((parent, mapped)) => {
        current = parent;
        faces = mapped;
      }
      None => return Ok(FaceSet::EMPTY),
    }
  }
  Ok(faces)
}

/// Traces which of `faces` the cell lies on at its immediate parent's
/// boundary.
///
/// # Errors
///
/// [`BoundaryError::InvalidResolution`] if the cell is at resolution 0
/// and has no parent.
pub fn cell_to_parent_faces<G: GridService>(grid: &G, cell: &G::Cell, faces: FaceSet) -> Result<FaceSet, BoundaryError> {
  let parent_res = grid.resolution(cell) - 1;
  cell_to_ancestor_faces(grid, cell, faces, parent_res)
}

/// Finds the coarsest ancestor at whose boundary the cell still lies on
/// at least one of `faces`.
///
/// Climbs one resolution level at a time as long as face overlap
/// survives, and returns the last cell for which it did. That may be the
/// input cell itself (even the first step failed) or a resolution-0 cell
/// (no parent left to climb to).
pub fn coarsest_ancestor_on_faces<G: GridService>(grid: &G, cell: &G::Cell, faces: FaceSet) -> G::Cell {
  let mut current = cell.clone();
  let mut faces = faces;
  let mut res = grid.resolution(&current);

  while res > 0 {
    match lift_one_level(grid, &current, faces, res) {
      Some((parent, mapped)) => {
        current = parent;
        faces = mapped;
        res -= 1;
      }
      None => return current,
    }
  }
  current
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::synthetic::SyntheticGrid;
  use crate::types::Face;

  const PENT_BASE: u8 = 4;
  const HEX_BASE: u8 = 0;

  #[test]
  fn test_invalid_resolutions() {
    let grid = SyntheticGrid::new();
    let cell = grid.cell(HEX_BASE, &[3, 2]);

    assert_eq!(
      cell_to_ancestor_faces(&grid, &cell, FaceSet::ALL, 2),
      Err(BoundaryError::InvalidResolution { target: 2, cell: 2 })
    );
    assert_eq!(
      cell_to_ancestor_faces(&grid, &cell, FaceSet::ALL, 5),
      Err(BoundaryError::InvalidResolution { target: 5, cell: 2 })
    );
    assert_eq!(
      cell_to_ancestor_faces(&grid, &cell, FaceSet::ALL, -1),
      Err(BoundaryError::InvalidResolution { target: -1, cell: 2 })
    );

    let root = grid.base_cell(HEX_BASE);
    assert_eq!(
      cell_to_parent_faces(&grid, &root, FaceSet::ALL),
      Err(BoundaryError::InvalidResolution { target: -1, cell: 0 })
    );
  }

  #[test]
  fn test_empty_input_short_circuits() {
    let grid = SyntheticGrid::new();
    let cell = grid.cell(HEX_BASE, &[1, 2, 3]);
    assert_eq!(cell_to_ancestor_faces(&grid, &cell, FaceSet::EMPTY, 0), Ok(FaceSet::EMPTY));
  }

  #[test]
  fn test_odd_parity_position_three() {
    let grid = SyntheticGrid::new();
    // A res-5 cell at child position 3; parity 5 % 2 = 1 selects the odd
    // table, position 3: {1->3, 2->2, 3->2}.
    let cell = grid.cell(HEX_BASE, &[0, 0, 0, 0, 3]);

    assert_eq!(
      cell_to_parent_faces(&grid, &cell, FaceSet::of(&[Face::Two, Face::Three])),
      Ok(FaceSet::of(&[Face::Two]))
    );
    // Neither 5 nor 6 appears among the mapping keys {1,2,3}.
    assert_eq!(
      cell_to_parent_faces(&grid, &cell, FaceSet::of(&[Face::Five, Face::Six])),
      Ok(FaceSet::EMPTY)
    );
  }

  #[test]
  fn test_center_child_truncates() {
    let grid = SyntheticGrid::new();
    let cell = grid.cell(HEX_BASE, &[0]);
    assert_eq!(cell_to_parent_faces(&grid, &cell, FaceSet::ALL), Ok(FaceSet::EMPTY));

    // A deeper trace dies at the center step even if later steps would map.
    let deeper = grid.cell(HEX_BASE, &[3, 0, 2]);
    assert_eq!(cell_to_ancestor_faces(&grid, &deeper, FaceSet::ALL, 0), Ok(FaceSet::EMPTY));
  }

  #[test]
  fn test_pentagon_truncates() {
    let grid = SyntheticGrid::new();
    // Center descendants of a pentagon base cell are pentagons.
    let pent = grid.cell(PENT_BASE, &[0, 0]);
    assert!(grid.is_pentagon(&pent));
    assert_eq!(cell_to_parent_faces(&grid, &pent, FaceSet::ALL), Ok(FaceSet::EMPTY));
  }

  #[test]
  fn test_pentagon_parent_uses_pentagon_table() {
    let grid = SyntheticGrid::new();
    // Res-1 child of a pentagon, position 1; parity 1, pentagon table:
    // {2->5, 3->1, 6->5}.
    let cell = grid.cell(PENT_BASE, &[1]);
    assert_eq!(
      cell_to_parent_faces(&grid, &cell, FaceSet::of(&[Face::Two, Face::Three])),
      Ok(FaceSet::of(&[Face::One, Face::Five]))
    );
    assert_eq!(
      cell_to_parent_faces(&grid, &cell, FaceSet::of(&[Face::Four])),
      Ok(FaceSet::EMPTY)
    );
  }

  #[test]
  fn test_two_level_trace_composes_single_steps() {
    let grid = SyntheticGrid::new();
    let cell = grid.cell(HEX_BASE, &[2, 3]);

    let one = cell_to_parent_faces(&grid, &cell, FaceSet::ALL).unwrap();
    let parent = grid.parent(&cell, 1);
    let composed = cell_to_parent_faces(&grid, &parent, one).unwrap();
    let direct = cell_to_ancestor_faces(&grid, &cell, FaceSet::ALL, 0).unwrap();
    assert_eq!(direct, composed);
  }

  #[test]
  fn test_coarsest_ancestor_root() {
    let grid = SyntheticGrid::new();
    let root = grid.base_cell(HEX_BASE);
    assert_eq!(coarsest_ancestor_on_faces(&grid, &root, FaceSet::ALL), root);
    assert_eq!(coarsest_ancestor_on_faces(&grid, &root, FaceSet::EMPTY), root);
  }

  #[test]
  fn test_coarsest_ancestor_stops_at_center_child() {
    let grid = SyntheticGrid::new();
    // Position 0 at the last step: the first lift fails, so the cell is
    // its own coarsest ancestor.
    let cell = grid.cell(HEX_BASE, &[3, 0]);
    assert_eq!(coarsest_ancestor_on_faces(&grid, &cell, FaceSet::ALL), cell);
  }

  #[test]
  fn test_coarsest_ancestor_climbs_boundary_path() {
    let grid = SyntheticGrid::new();
    // All-boundary path: every step keeps some face alive, so the climb
    // reaches resolution 0.
    let cell = grid.cell(HEX_BASE, &[2, 3, 1]);
    let ancestor = coarsest_ancestor_on_faces(&grid, &cell, FaceSet::ALL);
    assert_eq!(ancestor, grid.base_cell(HEX_BASE));
  }

  #[test]
  fn test_coarsest_ancestor_is_fixed_point() {
    let grid = SyntheticGrid::new();
    let cell = grid.cell(HEX_BASE, &[2, 3, 0, 1]);
    let ancestor = coarsest_ancestor_on_faces(&grid, &cell, FaceSet::ALL);

    let surviving = if ancestor == cell {
      FaceSet::ALL
    } else {
      cell_to_ancestor_faces(&grid, &cell, FaceSet::ALL, grid.resolution(&ancestor)).unwrap()
    };
    assert_eq!(coarsest_ancestor_on_faces(&grid, &ancestor, surviving), ancestor);
  }
}
