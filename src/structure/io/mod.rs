//! Reading of PDB atom records, plain or gzip-compressed.

pub mod parser;
pub mod pdb;

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureFileFormat {
    PDB,
    PDBGZ,
}

impl StructureFileFormat {
    pub fn get_with_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("gz") => Self::PDBGZ,
            _ => Self::PDB,
        }
    }
}

impl fmt::Display for StructureFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PDB => write!(f, "pdb"),
            Self::PDBGZ => write!(f, "pdb.gz"),
        }
    }
}
