//! Two-phase measurement API.
//! First list the candidate atoms of a residue, then extract the coordinates
//! of the chosen atom serials. Choosing the atoms is left to the caller.

pub mod io;
pub mod selector;

use std::path::Path;

use crate::error::{Error, Result};
use crate::geometry::distance::compute_distances;
use crate::structure::atom::ResidueAtomList;
use crate::structure::coordinate::{CoordinateFrameSeries, DistanceSeries};
use crate::structure::io::pdb::Reader;
use crate::structure::io::StructureFileFormat;

#[derive(Debug, Clone)]
pub struct Measurement {
    reader: Reader,
}

impl Measurement {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Measurement { reader: Reader::from_file(path)? })
    }

    pub fn path(&self) -> &Path {
        &self.reader.path
    }

    pub fn input_type(&self) -> StructureFileFormat {
        self.reader.input_type
    }

    /// All atoms of the residue. Empty if the residue is absent.
    pub fn list_candidates(&self, res_serial: i64) -> Result<ResidueAtomList> {
        self.reader.list_candidates(res_serial)
    }

    /// All frames of the atom. Empty if the serial is absent.
    pub fn extract_series(&self, serial: u64) -> Result<CoordinateFrameSeries> {
        self.reader.extract_series(serial)
    }

    /// Like `list_candidates`, but an absent residue is an error.
    pub fn find_residue(&self, res_serial: i64) -> Result<ResidueAtomList> {
        let residue = self.list_candidates(res_serial)?;
        if residue.is_empty() {
            return Err(Error::ResidueNotFound {
                residue: res_serial,
                path: self.path().to_path_buf(),
            });
        }
        Ok(residue)
    }

    /// Series of both atoms read in one pass. An absent serial is an error.
    pub fn find_pair(&self, serial1: u64, serial2: u64) -> Result<(CoordinateFrameSeries, CoordinateFrameSeries)> {
        let mut series_map = self.reader.extract_series_many(&[serial1, serial2])?;
        let mut take = |serial: u64| match series_map.remove(&serial) {
            Some(series) if !series.is_empty() => Ok(series),
            _ => Err(Error::SerialNotFound { serial, path: self.path().to_path_buf() }),
        };
        let series1 = take(serial1)?;
        // Same atom chosen twice
        let series2 = if serial1 == serial2 { series1.clone() } else { take(serial2)? };
        Ok((series1, series2))
    }

    /// Distances between two atoms, one per frame.
    pub fn measure(&self, serial1: u64, serial2: u64) -> Result<DistanceSeries> {
        let (series1, series2) = self.find_pair(serial1, serial2)?;
        Ok(compute_distances(&series1, &series2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_phase_measurement() {
        let measurement = Measurement::new("data/serine_hydrolase.pdb").unwrap();
        let serine = measurement.list_candidates(51).unwrap();
        let histidine = measurement.list_candidates(87).unwrap();
        assert!(serine.contains_serial(750));
        assert!(histidine.contains_serial(1288));
        let og = measurement.extract_series(750).unwrap();
        let nd1 = measurement.extract_series(1288).unwrap();
        assert_eq!(compute_distances(&og, &nd1), vec![5.0]);
        assert_eq!(measurement.measure(750, 1288).unwrap(), vec![5.0]);
    }

    #[test]
    fn test_find_residue_not_found() {
        let measurement = Measurement::new("data/serine_hydrolase.pdb").unwrap();
        assert!(measurement.list_candidates(52).unwrap().is_empty());
        let result = measurement.find_residue(52);
        assert!(matches!(result, Err(Error::ResidueNotFound { residue: 52, .. })));
    }

    #[test]
    fn test_find_pair_serial_not_found() {
        let measurement = Measurement::new("data/serine_hydrolase.pdb").unwrap();
        assert!(measurement.extract_series(9999).unwrap().is_empty());
        let result = measurement.find_pair(750, 9999);
        assert!(matches!(result, Err(Error::SerialNotFound { serial: 9999, .. })));
        let result = measurement.find_pair(9999, 750);
        assert!(matches!(result, Err(Error::SerialNotFound { serial: 9999, .. })));
    }

    #[test]
    fn test_input_type() {
        let measurement = Measurement::new("data/serine_hydrolase.pdb").unwrap();
        assert_eq!(measurement.input_type(), StructureFileFormat::PDB);
        assert_eq!(measurement.path(), Path::new("data/serine_hydrolase.pdb"));
    }

    #[test]
    fn test_same_atom_twice() {
        let measurement = Measurement::new("data/multi_model.pdb").unwrap();
        assert_eq!(measurement.measure(2, 2).unwrap(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_multi_model_measurement() {
        let measurement = Measurement::new("data/multi_model.pdb").unwrap();
        assert_eq!(measurement.measure(2, 4).unwrap(), vec![5.0, 6.0, 2.5]);
    }
}
