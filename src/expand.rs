//! Downward expansion: enumerating the descendants of a cell that lie on
//! a given set of its boundary faces.

use tracing::trace;

use crate::grid::GridService;
use crate::mapping;
use crate::types::{BoundaryError, FaceSet};

/// Returns all descendants of `parent` at `child_res` that lie on the
/// parent's boundary `faces`.
///
/// The walk is a depth-first descent driven by the inverse mapping
/// tables: a child whose mapped face set comes up empty cannot have
/// qualifying descendants, so its whole subtree is skipped without
/// being enumerated. Results are order-unspecified and duplicate-free
/// (each cell has exactly one path to its ancestor).
///
/// `child_res == resolution(parent)` is the degenerate single-node
/// case: the parent itself matches (for a non-empty `faces`) without
/// consulting any table. An empty `faces` yields an empty list.
///
/// # Errors
///
/// [`BoundaryError::InvalidResolution`] if `child_res` is coarser than
/// the parent's resolution.
pub fn children_on_faces<G: GridService>(
  grid: &G,
  parent: &G::Cell,
  child_res: i32,
  faces: FaceSet,
) -> Result<Vec<G::Cell>, BoundaryError> {
  let parent_res = grid.resolution(parent);
  if child_res < parent_res {
    return Err(BoundaryError::InvalidResolution {
      target: child_res,
      cell: parent_res,
    });
  }
  if faces.is_empty() {
    return Ok(Vec::new());
  }

  let mut found = Vec::new();
  descend(grid, parent, parent_res, faces, child_res, &mut found);
  trace!(?parent, child_res, ?faces, count = found.len(), "expanded boundary children");
  Ok(found)
}

/// Recursive step: `current` is at `res`, carrying a non-empty face set.
/// Depth is bounded by `child_res - res`, which is small in practice.
fn descend<G: GridService>(
  grid: &G,
  current: &G::Cell,
  res: i32,
  faces: FaceSet,
  child_res: i32,
  found: &mut Vec<G::Cell>,
) {
  if res == child_res {
    found.push(current.clone());
    return;
  }

  let parity = (res + 1) % 2;
  let current_is_pentagon = grid.is_pentagon(current);

  for child in grid.children(current) {
    let child_pos = grid.child_position(&child, res);
    let mut mapped = FaceSet::EMPTY;
    for parent_face in faces {
      mapped = mapped.union(mapping::parent_face_to_child_faces(
        current_is_pentagon,
        parity,
        child_pos,
        parent_face,
      ));
    }
    if !mapped.is_empty() {
      descend(grid, &child, res + 1, mapped, child_res, found);
    }
  }
}
