//! Face-mapping tables and lookups.
//!
//! For each (parent shape, resolution parity, child position) key the
//! grid defines a partial mapping from a child's boundary faces to its
//! parent's, and the precomputed inverse from a parent face to the set
//! of child faces it fans out to. The table content is a conformance
//! artifact reproduced from the reference grid data; the two directions
//! must agree exactly, which `tests::forward_inverse_consistency`
//! verifies over the whole key domain.

mod tables;

use crate::types::{Face, FaceSet};

/// Maps a child's face onto its parent's boundary, or `None` when the
/// child face does not lie on the parent boundary at all.
///
/// `parity` is the child's resolution mod 2. Child positions without
/// table entries (the center position 0, pentagon position 6, or
/// anything out of range) behave as the empty mapping.
pub fn child_face_to_parent_face(parent_is_pentagon: bool, parity: i32, child_pos: u8, face: Face) -> Option<Face> {
  let table = if parent_is_pentagon {
    &tables::PENT_CHILD_TO_PARENT
  } else {
    &tables::HEX_CHILD_TO_PARENT
  };
  let row = table[(parity % 2) as usize].get(child_pos as usize)?;
  Face::from_number(row[face.number() as usize])
}

/// The set of child faces a parent face fans out to at the given child
/// position; empty when no child face maps onto it.
pub fn parent_face_to_child_faces(parent_is_pentagon: bool, parity: i32, child_pos: u8, parent_face: Face) -> FaceSet {
  let table = if parent_is_pentagon {
    &tables::PENT_PARENT_TO_CHILDREN
  } else {
    &tables::HEX_PARENT_TO_CHILDREN
  };
  match table[(parity % 2) as usize].get(child_pos as usize) {
    Some(row) => FaceSet::from_bits(row[parent_face.number() as usize]),
    None => FaceSet::EMPTY,
  }
}
