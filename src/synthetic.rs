//! A topology-only synthetic grid.
//!
//! The tracing algorithms treat the real geodesic index as an external
//! collaborator, but tests, benches and examples still need a conforming
//! [`GridService`]. This module provides one: cells are identified by a
//! base cell number plus one child-position digit per level, with the
//! hierarchy rules of the reference geodesic layout (122 base cells, 12
//! of them pentagons; a pentagon's center child is itself a pentagon;
//! pentagons have six children at positions 0..=5, hexagons seven at
//! positions 0..=6). No geometry is modeled.

use core::fmt;

use smallvec::SmallVec;

use crate::grid::GridService;

/// Number of base cells in the reference layout.
pub const NUM_BASE_CELLS: u8 = 122;

/// Finest resolution the synthetic grid subdivides to.
pub const MAX_GRID_RES: i32 = 15;

/// Base cell numbers that are pentagons in the reference layout.
#[rustfmt::skip]
static PENTAGON_BASE_CELLS: [u8; 12] = [4, 14, 24, 38, 49, 58, 63, 72, 83, 97, 107, 117];

/// A cell of the [`SyntheticGrid`]: a base cell plus one child-position
/// digit per resolution level below 0.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridCell {
  base: u8,
  res: u8,
  digits: [u8; MAX_GRID_RES as usize],
}

impl fmt::Debug for GridCell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "GridCell({}", self.base)?;
    for d in &self.digits[..usize::from(self.res)] {
      write!(f, ".{d}")?;
    }
    write!(f, ")")
  }
}

/// In-memory hierarchical grid with the reference pentagon layout and no
/// geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticGrid;

impl SyntheticGrid {
  pub fn new() -> SyntheticGrid {
    SyntheticGrid
  }

  /// The resolution-0 cell for `base`.
  ///
  /// # Panics
  ///
  /// If `base` is not a valid base cell number.
  pub fn base_cell(&self, base: u8) -> GridCell {
    assert!(base < NUM_BASE_CELLS, "base cell {base} out of range");
    GridCell {
      base,
      res: 0,
      digits: [0; MAX_GRID_RES as usize],
    }
  }

  /// Builds the cell reached from `base` by following one child
  /// position per level.
  ///
  /// # Panics
  ///
  /// If `base` or any digit is out of range for the topology (digits
  /// are 0..=6, or 0..=5 under a pentagon), or the path is deeper than
  /// [`MAX_GRID_RES`].
  pub fn cell(&self, base: u8, path: &[u8]) -> GridCell {
    let mut cell = self.base_cell(base);
    for &digit in path {
      assert!(i32::from(cell.res) < MAX_GRID_RES, "path deeper than MAX_GRID_RES");
      let max_pos = if self.is_pentagon(&cell) { 5 } else { 6 };
      assert!(digit <= max_pos, "child position {digit} invalid at {cell:?}");
      cell.digits[usize::from(cell.res)] = digit;
      cell.res += 1;
    }
    cell
  }
}

impl GridService for SyntheticGrid {
  type Cell = GridCell;

  fn resolution(&self, cell: &GridCell) -> i32 {
    i32::from(cell.res)
  }

  fn is_pentagon(&self, cell: &GridCell) -> bool {
    PENTAGON_BASE_CELLS.contains(&cell.base) && cell.digits[..usize::from(cell.res)].iter().all(|&d| d == 0)
  }

  fn parent(&self, cell: &GridCell, parent_res: i32) -> GridCell {
    assert!(
      parent_res >= 0 && parent_res <= i32::from(cell.res),
      "parent resolution {parent_res} out of range for {cell:?}"
    );
    let mut parent = *cell;
    for d in &mut parent.digits[(parent_res as usize)..usize::from(cell.res)] {
      *d = 0;
    }
    parent.res = parent_res as u8;
    parent
  }

  fn child_position(&self, cell: &GridCell, parent_res: i32) -> u8 {
    assert!(
      parent_res == i32::from(cell.res) - 1,
      "child position only defined relative to the immediate parent"
    );
    cell.digits[parent_res as usize]
  }

  fn children(&self, cell: &GridCell) -> SmallVec<[GridCell; 7]> {
    let mut children = SmallVec::new();
    if i32::from(cell.res) >= MAX_GRID_RES {
      return children;
    }
    let count: u8 = if self.is_pentagon(cell) { 6 } else { 7 };
    for pos in 0..count {
      let mut child = *cell;
      child.digits[usize::from(cell.res)] = pos;
      child.res += 1;
      children.push(child);
    }
    children
  }
}
