//! Traces boundary faces of a cell up through its ancestors.
//!
//! Run with `cargo run --example boundary_trace`. Set `RUST_LOG=trace`
//! to watch the per-level mapping steps.

use hexbound::synthetic::SyntheticGrid;
use hexbound::*;
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let grid = SyntheticGrid::new();
  let cell = grid.cell(2, &[2, 3, 1, 4, 6]);
  println!("cell: {cell:?} (resolution {})", grid.resolution(&cell));

  let parent_faces = cell_to_parent_faces(&grid, &cell, FaceSet::ALL).expect("cell has a parent");
  println!("faces on the immediate parent boundary: {parent_faces:?}");

  for target in (0..grid.resolution(&cell)).rev() {
    let faces = cell_to_ancestor_faces(&grid, &cell, FaceSet::ALL, target).expect("target is coarser");
    println!("faces at ancestor resolution {target}: {faces:?}");
  }

  let ancestor = coarsest_ancestor_on_faces(&grid, &cell, FaceSet::ALL);
  println!(
    "coarsest ancestor still sharing a boundary face: {ancestor:?} (resolution {})",
    grid.resolution(&ancestor)
  );

  // Asking for faces the cell does not lie on is not an error, just an
  // empty answer.
  let none = cell_to_parent_faces(&grid, &cell, FaceSet::of(&[Face::Five])).expect("cell has a parent");
  println!("tracing only face 5: {none:?}");
}
