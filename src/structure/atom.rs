use crate::structure::coordinate::Coordinate;

/// One atom line of a structure file.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub serial: u64,
    pub atom_name: String,
    pub res_name: String,
    pub res_serial: i64,
    /// None when the coordinate tokens of the line do not parse.
    pub coordinate: Option<Coordinate>,
}

impl AtomRecord {
    pub fn new(
        serial: u64, atom_name: &str, res_name: &str, res_serial: i64, coordinate: Option<Coordinate>
    ) -> AtomRecord {
        AtomRecord {
            serial,
            atom_name: atom_name.to_string(),
            res_name: res_name.to_string(),
            res_serial,
            coordinate,
        }
    }

    /// Residue code followed by residue number, e.g. `SER51`.
    pub fn residue_label(&self) -> String {
        format!("{}{}", self.res_name, self.res_serial)
    }
}

/// Atoms of one residue number in file order, duplicates kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueAtomList {
    pub res_serial: i64,
    /// Label of the last atom added. None while the list is empty.
    pub label: Option<String>,
    pub atoms: Vec<AtomRecord>,
}

impl ResidueAtomList {
    pub fn new(res_serial: i64) -> Self {
        ResidueAtomList { res_serial, label: None, atoms: Vec::new() }
    }

    pub fn push(&mut self, atom: AtomRecord) {
        self.label = Some(atom.residue_label());
        self.atoms.push(atom);
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AtomRecord> {
        self.atoms.iter()
    }

    pub fn serials(&self) -> Vec<u64> {
        self.atoms.iter().map(|atom| atom.serial).collect()
    }

    pub fn contains_serial(&self, serial: u64) -> bool {
        self.atoms.iter().any(|atom| atom.serial == serial)
    }

    /// Residue code of the last atom added.
    pub fn res_name(&self) -> Option<&str> {
        self.atoms.last().map(|atom| atom.res_name.as_str())
    }

    /// Label to show to the user, falling back to the bare residue number.
    pub fn display_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.res_serial.to_string())
    }
}
