// src/mapping/tables.rs
//
// Static face-mapping data. Indexing is [parity][child position][face];
// face slot 0 is unused padding so faces index directly by number.
// Forward tables store the parent face for a child face (0 = no entry);
// inverse tables store the child-face bitmask for a parent face.
//
// Position 0 (the center child) has no entries in any table: center
// children touch no parent boundary face. Pentagon position 6 likewise
// has no entries; pentagons have six children at positions 0..=5.

/// Bitmask with bit `f` set for every face number in `faces`.
const fn fs(faces: &[u8]) -> u8 {
  let mut bits = 0u8;
  let mut i = 0;
  while i < faces.len() {
    bits |= 1 << faces[i];
    i += 1;
  }
  bits
}

/// Child face -> parent face, hexagonal parent.
#[rustfmt::skip]
pub(crate) static HEX_CHILD_TO_PARENT: [[[u8; 7]; 7]; 2] = [
  [ // Even resolutions
    [0, 0, 0, 0, 0, 0, 0], // position 0 (center child)
    [0, 1, 3, 1, 0, 0, 0], // position 1: 1->1, 2->3, 3->1
    [0, 0, 2, 0, 6, 0, 2], // position 2: 2->2, 4->6, 6->2
    [0, 0, 3, 3, 0, 0, 2], // position 3: 2->3, 3->3, 6->2
    [0, 5, 0, 0, 4, 4, 0], // position 4: 1->5, 4->4, 5->4
    [0, 5, 0, 1, 0, 5, 0], // position 5: 1->5, 3->1, 5->5
    [0, 0, 0, 0, 6, 4, 6], // position 6: 4->6, 5->4, 6->6
  ],
  [ // Odd resolutions
    [0, 0, 0, 0, 0, 0, 0], // position 0 (center child)
    [0, 3, 0, 3, 0, 1, 0], // position 1: 1->3, 3->3, 5->1
    [0, 0, 6, 2, 0, 0, 6], // position 2: 2->6, 3->2, 6->6
    [0, 3, 2, 2, 0, 0, 0], // position 3: 1->3, 2->2, 3->2
    [0, 0, 0, 0, 5, 5, 4], // position 4: 4->5, 5->5, 6->4
    [0, 1, 0, 0, 5, 1, 0], // position 5: 1->1, 4->5, 5->1
    [0, 0, 6, 0, 4, 0, 4], // position 6: 2->6, 4->4, 6->4
  ],
];

/// Parent face -> child faces, hexagonal parent.
#[rustfmt::skip]
pub(crate) static HEX_PARENT_TO_CHILDREN: [[[u8; 7]; 7]; 2] = [
  [ // Even resolutions
    [0, 0,            0,            0,            0,            0,            0           ], // position 0
    [0, fs(&[1, 3]),  0,            fs(&[2]),     0,            0,            0           ], // position 1: 1->{1,3}, 3->{2}
    [0, 0,            fs(&[2, 6]),  0,            0,            0,            fs(&[4])    ], // position 2: 2->{2,6}, 6->{4}
    [0, 0,            fs(&[6]),     fs(&[2, 3]),  0,            0,            0           ], // position 3: 2->{6}, 3->{2,3}
    [0, 0,            0,            0,            fs(&[4, 5]),  fs(&[1]),     0           ], // position 4: 4->{4,5}, 5->{1}
    [0, fs(&[3]),     0,            0,            0,            fs(&[1, 5]),  0           ], // position 5: 1->{3}, 5->{1,5}
    [0, 0,            0,            0,            fs(&[5]),     0,            fs(&[4, 6]) ], // position 6: 4->{5}, 6->{4,6}
  ],
  [ // Odd resolutions
    [0, 0,            0,            0,            0,            0,            0           ], // position 0
    [0, fs(&[5]),     0,            fs(&[1, 3]),  0,            0,            0           ], // position 1: 1->{5}, 3->{1,3}
    [0, 0,            fs(&[3]),     0,            0,            0,            fs(&[2, 6]) ], // position 2: 2->{3}, 6->{2,6}
    [0, 0,            fs(&[2, 3]),  fs(&[1]),     0,            0,            0           ], // position 3: 2->{2,3}, 3->{1}
    [0, 0,            0,            0,            fs(&[6]),     fs(&[4, 5]),  0           ], // position 4: 4->{6}, 5->{4,5}
    [0, fs(&[1, 5]),  0,            0,            0,            fs(&[4]),     0           ], // position 5: 1->{1,5}, 5->{4}
    [0, 0,            0,            0,            fs(&[4, 6]),  0,            fs(&[2])    ], // position 6: 4->{4,6}, 6->{2}
  ],
];

/// Child face -> parent face, pentagonal parent.
#[rustfmt::skip]
pub(crate) static PENT_CHILD_TO_PARENT: [[[u8; 7]; 7]; 2] = [
  [ // Even resolutions
    [0, 0, 0, 0, 0, 0, 0], // position 0 (center child)
    [0, 0, 1, 0, 5, 0, 1], // position 1: 2->1, 4->5, 6->1
    [0, 0, 2, 2, 0, 0, 1], // position 2: 2->2, 3->2, 6->1
    [0, 0, 0, 0, 2, 2, 4], // position 3: 4->2, 5->2, 6->4
    [0, 2, 0, 2, 0, 4, 0], // position 4: 1->2, 3->2, 5->4
    [0, 0, 0, 0, 5, 3, 5], // position 5: 4->5, 5->3, 6->5
    [0, 0, 0, 0, 0, 0, 0], // position 6 (never produced by a pentagon)
  ],
  [ // Odd resolutions
    [0, 0, 0, 0, 0, 0, 0], // position 0 (center child)
    [0, 0, 5, 1, 0, 0, 5], // position 1: 2->5, 3->1, 6->5
    [0, 2, 1, 1, 0, 0, 0], // position 2: 1->2, 2->1, 3->1
    [0, 4, 0, 0, 3, 3, 0], // position 3: 1->4, 4->3, 5->3
    [0, 2, 0, 0, 4, 2, 0], // position 4: 1->2, 4->4, 5->2
    [0, 0, 5, 0, 3, 0, 3], // position 5: 2->5, 4->3, 6->3
    [0, 0, 0, 0, 0, 0, 0], // position 6 (never produced by a pentagon)
  ],
];

/// Parent face -> child faces, pentagonal parent.
///
/// The position-3 rows are the exact inverses of the forward table above;
/// the reference transcription of this table carried a transposition
/// there that broke the forward/inverse round trip (caught by the
/// consistency test in `mapping`).
#[rustfmt::skip]
pub(crate) static PENT_PARENT_TO_CHILDREN: [[[u8; 7]; 7]; 2] = [
  [ // Even resolutions
    [0, 0,            0,            0,            0,            0,            0], // position 0
    [0, fs(&[2, 6]),  0,            0,            0,            fs(&[4]),     0], // position 1: 1->{2,6}, 5->{4}
    [0, fs(&[6]),     fs(&[2, 3]),  0,            0,            0,            0], // position 2: 1->{6}, 2->{2,3}
    [0, 0,            fs(&[4, 5]),  0,            fs(&[6]),     0,            0], // position 3: 2->{4,5}, 4->{6}
    [0, 0,            fs(&[1, 3]),  0,            fs(&[5]),     0,            0], // position 4: 2->{1,3}, 4->{5}
    [0, 0,            0,            fs(&[5]),     0,            fs(&[4, 6]),  0], // position 5: 3->{5}, 5->{4,6}
    [0, 0,            0,            0,            0,            0,            0], // position 6
  ],
  [ // Odd resolutions
    [0, 0,            0,            0,            0,            0,            0], // position 0
    [0, fs(&[3]),     0,            0,            0,            fs(&[2, 6]),  0], // position 1: 1->{3}, 5->{2,6}
    [0, fs(&[2, 3]),  fs(&[1]),     0,            0,            0,            0], // position 2: 1->{2,3}, 2->{1}
    [0, 0,            0,            fs(&[4, 5]),  fs(&[1]),     0,            0], // position 3: 3->{4,5}, 4->{1}
    [0, 0,            fs(&[1, 5]),  0,            fs(&[4]),     0,            0], // position 4: 2->{1,5}, 4->{4}
    [0, 0,            0,            fs(&[4, 6]),  0,            fs(&[2]),     0], // position 5: 3->{4,6}, 5->{2}
    [0, 0,            0,            0,            0,            0,            0], // position 6
  ],
];
