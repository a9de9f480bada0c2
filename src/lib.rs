//! # About project
//!
//! atomdist measures the distance between two chosen atoms of two residues in
//! a PDB file, once per model when the file holds several models.
//! Atom lines with and without a chain identifier are both understood.

pub mod cli;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod structure;
pub mod utils;

pub mod prelude {
    pub use crate::controller::io::{output_file_name, save_distances, write_distances};
    pub use crate::controller::selector::ResidueSelector;
    pub use crate::controller::Measurement;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::distance::{compute_distances, paired_frame_count};
    pub use crate::measure_time;
    pub use crate::structure::atom::{AtomRecord, ResidueAtomList};
    pub use crate::structure::coordinate::{Coordinate, CoordinateFrameSeries, DistanceSeries};
    pub use crate::structure::io::pdb::{extract_coordinate_series, parse_residue_atoms};
    pub use crate::utils::calculator::Calculate;
    pub use crate::utils::log::{log_msg, print_log_msg, DONE, FAIL, INFO, WARN};
}

pub use structure::io::pdb::Reader as PDBReader;
