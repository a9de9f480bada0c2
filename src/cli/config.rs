use crate::error::{Error, Result};

/// Run settings read from a TOML file.
/// ```toml
/// pdb = "protein.pdb"
/// residue1 = "SER51"
/// residue2 = 87
/// atom1 = 750
/// atom2 = 1288
/// output_dir = "results"
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasureConfig {
    pub pdb_path: Option<String>,
    pub residue1: Option<String>,
    pub residue2: Option<String>,
    pub atom1: Option<u64>,
    pub atom2: Option<u64>,
    pub output_dir: Option<String>,
}

impl MeasureConfig {
    pub fn from_toml(toml: &toml::Value) -> Result<Self> {
        Ok(Self {
            pdb_path: get_string(toml, "pdb")?,
            residue1: get_residue(toml, "residue1")?,
            residue2: get_residue(toml, "residue2")?,
            atom1: get_serial(toml, "atom1")?,
            atom2: get_serial(toml, "atom2")?,
            output_dir: get_string(toml, "output_dir")?,
        })
    }
    /// Fill the values missing here from `fallback`.
    pub fn or(self, fallback: MeasureConfig) -> MeasureConfig {
        MeasureConfig {
            pdb_path: self.pdb_path.or(fallback.pdb_path),
            residue1: self.residue1.or(fallback.residue1),
            residue2: self.residue2.or(fallback.residue2),
            atom1: self.atom1.or(fallback.atom1),
            atom2: self.atom2.or(fallback.atom2),
            output_dir: self.output_dir.or(fallback.output_dir),
        }
    }
}

fn get_string(toml: &toml::Value, key: &str) -> Result<Option<String>> {
    match toml.get(key) {
        None => Ok(None),
        Some(toml::Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(Error::config(format!("'{}' must be a string, got {}", key, other))),
    }
}

// Residues may be written as 51 or "SER51"
fn get_residue(toml: &toml::Value, key: &str) -> Result<Option<String>> {
    match toml.get(key) {
        None => Ok(None),
        Some(toml::Value::String(value)) => Ok(Some(value.clone())),
        Some(toml::Value::Integer(value)) => Ok(Some(value.to_string())),
        Some(other) => Err(Error::config(format!("'{}' must be a residue, got {}", key, other))),
    }
}

fn get_serial(toml: &toml::Value, key: &str) -> Result<Option<u64>> {
    match toml.get(key) {
        None => Ok(None),
        Some(toml::Value::Integer(value)) if *value >= 0 => Ok(Some(*value as u64)),
        Some(other) => Err(Error::config(format!("'{}' must be an atom serial number, got {}", key, other))),
    }
}

pub fn read_measure_config_from_file(path: &str) -> Result<MeasureConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::from_io(e, path))?;
    let table = toml::from_str::<toml::Table>(&content)
        .map_err(|e| Error::config(format!("{}: {}", path, e)))?;
    MeasureConfig::from_toml(&toml::Value::Table(table))
}
