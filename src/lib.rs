#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)] // Errors are documented on the one error type
#![allow(clippy::cast_possible_truncation)] // Resolutions fit in u8/usize by construction
#![allow(clippy::cast_sign_loss)] // Resolutions are validated non-negative before casts
#![allow(clippy::must_use_candidate)]

//! `hexbound` traces boundary faces through the levels of a hierarchical
//! hexagonal grid.
//!
//! Each cell of such a grid conceptually has six boundary faces. When a
//! cell is subdivided, some children sit on the parent's boundary and
//! inherit (remapped) parent faces; the center child touches none of
//! them. This crate answers three questions about that inheritance:
//!
//! - which of a cell's candidate faces survive up to a chosen ancestor
//!   ([`cell_to_ancestor_faces`], [`cell_to_parent_faces`]);
//! - what is the coarsest ancestor still sharing a boundary face with
//!   the cell ([`coarsest_ancestor_on_faces`]);
//! - which descendants of a cell lie on a given set of its faces
//!   ([`children_on_faces`]), pruning non-qualifying subtrees via
//!   precomputed inverse tables.
//!
//! Cell addressing itself is delegated to an external grid index through
//! the [`GridService`] trait; [`synthetic::SyntheticGrid`] is a
//! topology-only implementation for tests and examples.

pub mod expand;
pub mod grid;
pub mod mapping;
pub mod synthetic;
pub mod trace;
pub mod types;

pub use expand::children_on_faces;
pub use grid::GridService;
pub use mapping::{child_face_to_parent_face, parent_face_to_child_faces};
pub use trace::{cell_to_ancestor_faces, cell_to_parent_faces, coarsest_ancestor_on_faces};
pub use types::{BoundaryError, Face, FaceSet, FaceSetIter};
