//! Core data types for boundary-face tracing.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// One of the six conceptual boundary faces of a cell.
///
/// Faces are numbered 1 through 6. Pentagons effectively have one fewer
/// face but are addressed in the same namespace; combinations that never
/// occur are simply absent from the mapping tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Face {
  /// Face 1.
  One = 1,
  /// Face 2.
  Two = 2,
  /// Face 3.
  Three = 3,
  /// Face 4.
  Four = 4,
  /// Face 5.
  Five = 5,
  /// Face 6.
  Six = 6,
}

impl Face {
  /// Converts a face number in `1..=6` to a `Face`. Returns `None` for
  /// anything outside that range.
  pub const fn from_number(n: u8) -> Option<Face> {
    match n {
      1 => Some(Face::One),
      2 => Some(Face::Two),
      3 => Some(Face::Three),
      4 => Some(Face::Four),
      5 => Some(Face::Five),
      6 => Some(Face::Six),
      _ => None,
    }
  }

  /// The face number, in `1..=6`.
  pub const fn number(self) -> u8 {
    self as u8
  }
}

/// A set of [`Face`] values, stored as a bitmask (bit `f` for face `f`).
///
/// The empty set is a valid, meaningful value ("touches no tracked
/// face"), not an error. All operations are allocation-free.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceSet(u8);

/// Bits 1..=6; bit 0 and bit 7 are never set.
const ALL_FACE_BITS: u8 = 0b0111_1110;

impl FaceSet {
  /// The empty face set.
  pub const EMPTY: FaceSet = FaceSet(0);
  /// All six faces; what a caller passes to mean "any face".
  pub const ALL: FaceSet = FaceSet(ALL_FACE_BITS);

  /// Builds a set from a slice of faces.
  pub fn of(faces: &[Face]) -> FaceSet {
    let mut set = FaceSet::EMPTY;
    for &f in faces {
      set.insert(f);
    }
    set
  }

  /// Reinterprets a raw bitmask as a face set, ignoring out-of-range bits.
  pub(crate) const fn from_bits(bits: u8) -> FaceSet {
    FaceSet(bits & ALL_FACE_BITS)
  }

  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Number of faces in the set.
  pub const fn len(self) -> u32 {
    self.0.count_ones()
  }

  pub const fn contains(self, face: Face) -> bool {
    self.0 & (1 << face.number()) != 0
  }

  pub fn insert(&mut self, face: Face) {
    self.0 |= 1 << face.number();
  }

  #[must_use]
  pub const fn union(self, other: FaceSet) -> FaceSet {
    FaceSet(self.0 | other.0)
  }

  #[must_use]
  pub const fn intersection(self, other: FaceSet) -> FaceSet {
    FaceSet(self.0 & other.0)
  }

  /// Whether every face in `self` is also in `other`.
  pub const fn is_subset(self, other: FaceSet) -> bool {
    self.0 & !other.0 == 0
  }

  /// Iterates the faces in the set in ascending face-number order.
  pub fn iter(self) -> FaceSetIter {
    FaceSetIter { bits: self.0 }
  }
}

impl FromIterator<Face> for FaceSet {
  fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> FaceSet {
    let mut set = FaceSet::EMPTY;
    for f in iter {
      set.insert(f);
    }
    set
  }
}

impl IntoIterator for FaceSet {
  type Item = Face;
  type IntoIter = FaceSetIter;

  fn into_iter(self) -> FaceSetIter {
    self.iter()
  }
}

/// Iterator over the faces of a [`FaceSet`].
#[derive(Debug, Clone)]
pub struct FaceSetIter {
  bits: u8,
}

impl Iterator for FaceSetIter {
  type Item = Face;

  fn next(&mut self) -> Option<Face> {
    if self.bits == 0 {
      return None;
    }
    let n = self.bits.trailing_zeros() as u8;
    self.bits &= self.bits - 1;
    Face::from_number(n)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.bits.count_ones() as usize;
    (n, Some(n))
  }
}

impl ExactSizeIterator for FaceSetIter {}

impl fmt::Debug for FaceSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "FaceSet{{")?;
    for (i, face) in self.iter().enumerate() {
      if i > 0 {
        write!(f, ",")?;
      }
      write!(f, "{}", face.number())?;
    }
    write!(f, "}}")
  }
}

/// Errors returned by boundary-face queries.
///
/// There is exactly one error kind: a caller-supplied target resolution
/// that violates the ordering required by the operation. Every other
/// "no result" situation is a normal outcome, reported as an empty
/// [`FaceSet`] or an empty list.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryError {
  /// The target resolution is out of range for the operation: upward
  /// traces require `0 <= target < resolution(cell)`; downward
  /// expansion requires `target >= resolution(parent)`.
  #[error("invalid target resolution {target} for cell at resolution {cell}")]
  InvalidResolution {
    /// The offending caller-supplied resolution.
    target: i32,
    /// The resolution of the cell argument.
    cell: i32,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_face_from_number() {
    assert_eq!(Face::from_number(1), Some(Face::One));
    assert_eq!(Face::from_number(6), Some(Face::Six));
    assert_eq!(Face::from_number(0), None);
    assert_eq!(Face::from_number(7), None);
    assert_eq!(Face::Three.number(), 3);
  }

  #[test]
  fn test_face_set_basic_ops() {
    let mut set = FaceSet::EMPTY;
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);

    set.insert(Face::Two);
    set.insert(Face::Five);
    set.insert(Face::Two); // No duplicates.
    assert_eq!(set.len(), 2);
    assert!(set.contains(Face::Two));
    assert!(set.contains(Face::Five));
    assert!(!set.contains(Face::One));

    assert_eq!(FaceSet::ALL.len(), 6);
    assert!(set.is_subset(FaceSet::ALL));
    assert!(!FaceSet::ALL.is_subset(set));
    assert!(FaceSet::EMPTY.is_subset(set));
  }

  #[test]
  fn test_face_set_union_intersection() {
    let a = FaceSet::of(&[Face::One, Face::Three]);
    let b = FaceSet::of(&[Face::Three, Face::Six]);
    assert_eq!(a.union(b), FaceSet::of(&[Face::One, Face::Three, Face::Six]));
    assert_eq!(a.intersection(b), FaceSet::of(&[Face::Three]));
    assert_eq!(a.intersection(FaceSet::EMPTY), FaceSet::EMPTY);
  }

  #[test]
  fn test_face_set_iter_order() {
    let set = FaceSet::of(&[Face::Six, Face::One, Face::Four]);
    let faces: Vec<u8> = set.iter().map(Face::number).collect();
    assert_eq!(faces, vec![1, 4, 6]);
    assert_eq!(set.iter().len(), 3);
  }

  #[test]
  fn test_face_set_from_iterator() {
    let set: FaceSet = [Face::Two, Face::Three].into_iter().collect();
    assert_eq!(set, FaceSet::of(&[Face::Two, Face::Three]));
  }

  #[test]
  fn test_face_set_debug() {
    let set = FaceSet::of(&[Face::One, Face::Five]);
    assert_eq!(format!("{set:?}"), "FaceSet{1,5}");
    assert_eq!(format!("{:?}", FaceSet::EMPTY), "FaceSet{}");
  }

  #[test]
  fn test_boundary_error_display() {
    let err = BoundaryError::InvalidResolution { target: 9, cell: 6 };
    assert_eq!(err.to_string(), "invalid target resolution 9 for cell at resolution 6");
  }
}
