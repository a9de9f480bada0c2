//! Atom records and coordinates read from structure files.

pub mod atom;
pub mod coordinate;
pub mod io;
