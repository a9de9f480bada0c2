use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use rustc_hash::FxHashMap;

use super::parser::RecordLayout;
use super::StructureFileFormat;
use crate::error::{Error, Result};
use crate::structure::atom::ResidueAtomList;
use crate::structure::coordinate::CoordinateFrameSeries;

/// A PDB reader bound to a file path.
/// Every read pass opens the file again and closes it when done.
#[derive(Debug, Clone)]
pub struct Reader {
    pub path: PathBuf,
    pub input_type: StructureFileFormat,
}

impl Reader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Reader {
            path: path.as_ref().to_path_buf(),
            input_type: StructureFileFormat::get_with_path(&path),
        }
    }

    /// Read from a file path. Fails with `FileNotFound` if there is no such file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => Ok(Reader::new(path)),
            Ok(_) => Err(Error::FileNotFound { path: path.to_path_buf() }),
            Err(e) => Err(Error::from_io(e, path)),
        }
    }

    fn open(&self) -> Result<Box<dyn BufRead>> {
        let file = File::open(&self.path).map_err(|e| Error::from_io(e, &self.path))?;
        match self.input_type {
            StructureFileFormat::PDB => Ok(Box::new(BufReader::new(file))),
            StructureFileFormat::PDBGZ => Ok(Box::new(BufReader::new(GzDecoder::new(file)))),
        }
    }

    // Visit every 11- or 12-token line in file order. Other lines are skipped.
    fn for_each_record<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&RecordLayout<'_>),
    {
        let reader = self.open()?;
        for line in reader.lines() {
            let line = line.map_err(|e| Error::from_io(e, &self.path))?;
            if let Some(record) = RecordLayout::classify(&line) {
                visit(&record);
            }
        }
        Ok(())
    }

    /// Atoms whose residue number equals `res_serial`, in file order.
    /// Lines whose serial does not parse are skipped. No match gives an empty list.
    pub fn list_candidates(&self, res_serial: i64) -> Result<ResidueAtomList> {
        let mut residue = ResidueAtomList::new(res_serial);
        self.for_each_record(|record| {
            if record.is_residue(res_serial) {
                if let Some(atom) = record.to_atom() {
                    residue.push(atom);
                }
            }
        })?;
        Ok(residue)
    }

    /// One coordinate per line carrying the atom serial `serial`.
    pub fn extract_series(&self, serial: u64) -> Result<CoordinateFrameSeries> {
        let mut series = CoordinateFrameSeries::new(serial);
        self.for_each_record(|record| {
            if record.is_serial(serial) {
                if let Some(coordinate) = record.coordinate() {
                    series.push(coordinate);
                }
            }
        })?;
        Ok(series)
    }

    /// Same as `extract_series` for several serials in a single pass.
    /// Every requested serial has an entry, empty if it never occurs.
    pub fn extract_series_many(&self, serials: &[u64]) -> Result<FxHashMap<u64, CoordinateFrameSeries>> {
        let mut series_map: FxHashMap<u64, CoordinateFrameSeries> = serials
            .iter()
            .map(|&serial| (serial, CoordinateFrameSeries::new(serial)))
            .collect();
        self.for_each_record(|record| {
            if let Some(series) = record.serial().and_then(|serial| series_map.get_mut(&serial)) {
                if let Some(coordinate) = record.coordinate() {
                    series.push(coordinate);
                }
            }
        })?;
        Ok(series_map)
    }
}

pub fn parse_residue_atoms<P: AsRef<Path>>(path: P, res_serial: i64) -> Result<ResidueAtomList> {
    Reader::from_file(path)?.list_candidates(res_serial)
}

pub fn extract_coordinate_series<P: AsRef<Path>>(path: P, serial: u64) -> Result<CoordinateFrameSeries> {
    Reader::from_file(path)?.extract_series(serial)
}
