//! The external grid collaborator.
//!
//! The tracing and expansion algorithms do not address cells themselves;
//! they lean on a pre-existing hierarchical grid index for resolutions,
//! pentagon-ness, parent/child navigation and child positions. This
//! module defines the read-only interface that index has to provide.

use core::fmt;

use smallvec::SmallVec;

/// Read-only hierarchy queries required from a hierarchical hexagonal
/// grid index.
///
/// Implementations are assumed correct: the algorithms never second-guess
/// resolutions, child positions or pentagon flags reported by the grid,
/// and none of these methods has an error channel. All methods must be
/// pure functions of their arguments.
pub trait GridService {
  /// Opaque cell identifier. Equality is cell identity.
  type Cell: Clone + PartialEq + fmt::Debug;

  /// Resolution of the cell; non-negative, larger is finer.
  fn resolution(&self, cell: &Self::Cell) -> i32;

  /// Whether the cell is one of the grid's pentagons.
  fn is_pentagon(&self, cell: &Self::Cell) -> bool;

  /// The ancestor of `cell` at `parent_res`, which must satisfy
  /// `0 <= parent_res <= resolution(cell)`.
  fn parent(&self, cell: &Self::Cell, parent_res: i32) -> Self::Cell;

  /// Position of `cell` among the ordered children of its parent:
  /// 0 is the center child, 1..=6 the boundary children. `parent_res`
  /// must be exactly `resolution(cell) - 1`.
  fn child_position(&self, cell: &Self::Cell, parent_res: i32) -> u8;

  /// The immediate children of `cell`, at `resolution(cell) + 1`, in
  /// child-position order. Empty if the grid has no finer resolution.
  fn children(&self, cell: &Self::Cell) -> SmallVec<[Self::Cell; 7]>;
}
