use crate::structure::atom::AtomRecord;
use crate::structure::coordinate::Coordinate;

/// Atom lines come in two whitespace-separated layouts. The chain identifier
/// is optional and shifts every following field by one.
/// ```text
///         serial name resName      resSeq        x       y       z
/// ATOM    748  CA   SER    51      -1.164 -14.104  31.891  1.00  0.00           C
/// ATOM    635  CA   PHE A  87       2.592  -5.734  14.792  1.00 98.81           C
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLayout<'a> {
    /// record, serial, name, resName, resSeq, x, y, z, occupancy, bFactor, element
    ElevenColumn([&'a str; 11]),
    /// record, serial, name, resName, chain, resSeq, x, y, z, occupancy, bFactor, element
    TwelveColumn([&'a str; 12]),
}

impl<'a> RecordLayout<'a> {
    /// Resolve the layout of a line by its token count.
    /// Lines with any other count are not atom records.
    pub fn classify(line: &'a str) -> Option<Self> {
        let tokens: Vec<&'a str> = line.split_whitespace().collect();
        match tokens.len() {
            11 => tokens.try_into().ok().map(Self::ElevenColumn),
            12 => tokens.try_into().ok().map(Self::TwelveColumn),
            _ => None,
        }
    }

    pub fn serial_token(&self) -> &'a str {
        match self {
            Self::ElevenColumn(t) => t[1],
            Self::TwelveColumn(t) => t[1],
        }
    }

    pub fn atom_name(&self) -> &'a str {
        match self {
            Self::ElevenColumn(t) => t[2],
            Self::TwelveColumn(t) => t[2],
        }
    }

    pub fn res_name(&self) -> &'a str {
        match self {
            Self::ElevenColumn(t) => t[3],
            Self::TwelveColumn(t) => t[3],
        }
    }

    pub fn res_serial_token(&self) -> &'a str {
        match self {
            Self::ElevenColumn(t) => t[4],
            Self::TwelveColumn(t) => t[5],
        }
    }

    pub fn coordinate_tokens(&self) -> [&'a str; 3] {
        match self {
            Self::ElevenColumn(t) => [t[5], t[6], t[7]],
            Self::TwelveColumn(t) => [t[6], t[7], t[8]],
        }
    }

    pub fn serial(&self) -> Option<u64> {
        self.serial_token().parse::<u64>().ok()
    }

    pub fn res_serial(&self) -> Option<i64> {
        self.res_serial_token().parse::<i64>().ok()
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        let [x, y, z] = self.coordinate_tokens();
        match (x.parse::<f64>(), y.parse::<f64>(), z.parse::<f64>()) {
            (Ok(x), Ok(y), Ok(z)) => Some(Coordinate::new(x, y, z)),
            _ => None,
        }
    }

    /// Residue numbers are compared as text against the decimal form of the target.
    pub fn is_residue(&self, res_serial: i64) -> bool {
        self.res_serial_token() == res_serial.to_string()
    }

    pub fn is_serial(&self, serial: u64) -> bool {
        self.serial() == Some(serial)
    }

    /// Build the candidate record from the serial, name and residue tokens.
    /// None if the serial or residue number fails to parse. Coordinates are optional.
    pub fn to_atom(&self) -> Option<AtomRecord> {
        Some(AtomRecord::new(
            self.serial()?,
            self.atom_name(),
            self.res_name(),
            self.res_serial()?,
            self.coordinate(),
        ))
    }
}
