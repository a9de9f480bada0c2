use std::fmt;

use regex::Regex;

use crate::error::{Error, Result};
use crate::structure::atom::ResidueAtomList;

/// Residue given by the user, either `51` or `SER51`.
/// The optional residue code is only used to double-check the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueSelector {
    pub res_name: Option<String>,
    pub res_serial: i64,
}

impl ResidueSelector {
    pub fn new(res_serial: i64) -> Self {
        ResidueSelector { res_name: None, res_serial }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let residue_regex = Regex::new(r"^([A-Za-z]{3})?(-?\d+)$")
            .map_err(|e| Error::invalid_argument(e.to_string()))?;
        let captures = residue_regex.captures(input.trim()).ok_or_else(|| {
            Error::invalid_argument(format!(
                "residue must be a number or a residue code with number (e.g. 51 or SER51), got '{}'",
                input
            ))
        })?;
        let res_name = captures.get(1).map(|m| m.as_str().to_ascii_uppercase());
        let res_serial = captures[2]
            .parse::<i64>()
            .map_err(|e| Error::invalid_argument(format!("residue number '{}': {}", &captures[2], e)))?;
        Ok(ResidueSelector { res_name, res_serial })
    }

    /// Message describing a residue code mismatch, if any.
    pub fn check_residue(&self, residue: &ResidueAtomList) -> Option<String> {
        let expected = self.res_name.as_deref()?;
        let found = residue.res_name()?;
        if found.eq_ignore_ascii_case(expected) {
            None
        } else {
            Some(format!(
                "Residue {} was requested but the file has {}",
                self, residue.display_label()
            ))
        }
    }
}

impl fmt::Display for ResidueSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.res_name {
            Some(res_name) => write!(f, "{}{}", res_name, self.res_serial),
            None => write!(f, "{}", self.res_serial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::atom::AtomRecord;

    #[test]
    fn test_parse_selector() {
        assert_eq!(ResidueSelector::parse("51").unwrap(), ResidueSelector::new(51));
        assert_eq!(ResidueSelector::parse(" -3 ").unwrap(), ResidueSelector::new(-3));
        let selector = ResidueSelector::parse("ser51").unwrap();
        assert_eq!(selector.res_name.as_deref(), Some("SER"));
        assert_eq!(selector.res_serial, 51);
        assert_eq!(selector.to_string(), "SER51");
    }

    #[test]
    fn test_parse_selector_fail() {
        for input in ["", "SER", "S51", "SERA51", "51A", "5 1", "99999999999999999999"] {
            let result = ResidueSelector::parse(input);
            assert!(matches!(result, Err(Error::InvalidArgument(_))), "{}", input);
        }
    }

    #[test]
    fn test_check_residue() {
        let mut residue = ResidueAtomList::new(51);
        let selector = ResidueSelector::parse("HIS51").unwrap();
        assert_eq!(selector.check_residue(&residue), None);
        residue.push(AtomRecord::new(748, "CA", "SER", 51, None));
        assert_eq!(
            selector.check_residue(&residue).as_deref(),
            Some("Residue HIS51 was requested but the file has SER51")
        );
        assert_eq!(ResidueSelector::parse("SER51").unwrap().check_residue(&residue), None);
        assert_eq!(ResidueSelector::new(51).check_residue(&residue), None);
    }
}
