//! Enumerates the descendants of a cell that lie on chosen boundary
//! faces, without visiting non-qualifying subtrees.
//!
//! Run with `cargo run --example boundary_children`.

use hexbound::synthetic::SyntheticGrid;
use hexbound::*;

fn main() {
  let grid = SyntheticGrid::new();

  let hex_parent = grid.base_cell(2);
  let wanted = FaceSet::of(&[Face::Two, Face::Five]);

  for depth in 1..=3 {
    let cells = children_on_faces(&grid, &hex_parent, depth, wanted).expect("target is finer");
    let total = 7usize.pow(depth as u32);
    println!(
      "descendants of {hex_parent:?} at resolution {depth} on faces {wanted:?}: {} of {total}",
      cells.len()
    );
  }

  // Pentagons have five boundary children instead of six.
  let pent_parent = grid.base_cell(14);
  let cells = children_on_faces(&grid, &pent_parent, 1, FaceSet::ALL).expect("target is finer");
  println!("boundary children of pentagon {pent_parent:?}: {cells:?}");
}
