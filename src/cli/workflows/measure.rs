// File: measure.rs
// Created: 2026-10-13 16:05:52

//! This file contains the workflow for measuring the distance between two atoms.
//! The atoms of both residues are listed first. Atom serial numbers not given
//! on the command line or in the config file are asked for on stdin.
//! One distance is computed per model; more than one is saved to a file.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use peak_alloc::PeakAlloc;

use crate::cli::config::{read_measure_config_from_file, MeasureConfig};
use crate::cli::{print_logo, write_atom_table, AppArgs};
use crate::prelude::*;

#[global_allocator]
static PEAK_ALLOC: PeakAlloc = PeakAlloc;

pub const HELP_MEASURE: &str = "\
usage: atomdist measure -p <PDB> -a <RESIDUE1> -b <RESIDUE2> [OPTIONS]

input:
 -p, --pdb <PATH>          Path of PDB file (.pdb, .ent or .pdb.gz)
 -a, --residue1 <RESIDUE>  Residue to measure from (e.g. 51 or SER51)
 -b, --residue2 <RESIDUE>  Residue to measure to (e.g. 87 or HIS87)
 --atom1 <INT>             Atom serial number in residue1 [asked]
 --atom2 <INT>             Atom serial number in residue2 [asked]
 -c, --config <PATH>       TOML file with the values above. Command line values take precedence

output:
 -o, --output <DIR>        Directory for distances_<ATOM1>_to_<ATOM2>.txt when there are multiple models [.]

general options:
 -v, --verbose             Print verbose messages
 -h, --help                Print this help menu

examples:
# Choose atoms interactively
atomdist measure -p protein.pdb -a 100 -b 250

# Oxygen of serine to ND1 of histidine without prompts
atomdist measure -p protein.pdb -a SER51 -b HIS87 --atom1 750 --atom2 1288
";

pub fn measure_distance(env: AppArgs) {
    match env {
        AppArgs::Measure {
            pdb_path,
            residue1,
            residue2,
            atom1,
            atom2,
            output_dir,
            config,
            verbose,
            help,
        } => {
            if help {
                eprintln!("{}", HELP_MEASURE);
                return;
            }
            if verbose { print_logo(); }
            let from_args = MeasureConfig { pdb_path, residue1, residue2, atom1, atom2, output_dir };
            let settings = match config {
                Some(config_path) => match read_measure_config_from_file(&config_path) {
                    Ok(from_file) => from_args.or(from_file),
                    Err(e) => {
                        print_log_msg(FAIL, &e.to_string());
                        std::process::exit(1);
                    }
                },
                None => from_args,
            };
            if settings.pdb_path.is_none() || settings.residue1.is_none() || settings.residue2.is_none() {
                eprintln!("{}", HELP_MEASURE);
                std::process::exit(1);
            }
            if let Err(e) = run_measure(&settings, verbose) {
                print_log_msg(FAIL, &e.to_string());
                std::process::exit(1);
            }
            if verbose {
                print_log_msg(INFO, &format!("Peak memory usage: {:.3} MB", PEAK_ALLOC.peak_usage_as_mb()));
            }
        }
        _ => {
            eprintln!("{}", HELP_MEASURE);
            std::process::exit(1);
        }
    }
}

fn run_measure(settings: &MeasureConfig, verbose: bool) -> Result<()> {
    let required = |value: &Option<String>, name: &str| {
        value.clone().ok_or_else(|| Error::invalid_argument(format!("{} is required", name)))
    };
    let pdb_path = required(&settings.pdb_path, "PDB path")?;
    let selector1 = ResidueSelector::parse(&required(&settings.residue1, "residue1")?)?;
    let selector2 = ResidueSelector::parse(&required(&settings.residue2, "residue2")?)?;

    let measurement = Measurement::new(&pdb_path)?;
    if verbose {
        print_log_msg(INFO, &format!(
            "Measuring from residue {} to residue {} in {} ({})",
            selector1, selector2, pdb_path, measurement.input_type()
        ));
    }
    let candidates1 = measure_time!(measurement.find_residue(selector1.res_serial), verbose)?;
    let candidates2 = measure_time!(measurement.find_residue(selector2.res_serial), verbose)?;
    for (selector, candidates) in [(&selector1, &candidates1), (&selector2, &candidates2)] {
        if let Some(warning) = selector.check_residue(candidates) {
            print_log_msg(WARN, &warning);
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let atom1 = choose_atom(settings.atom1, &candidates1, "From", &mut input, &mut output, verbose)?;
    let atom2 = choose_atom(settings.atom2, &candidates2, "To", &mut input, &mut output, verbose)?;

    let (series1, series2) = measure_time!(measurement.find_pair(atom1, atom2), verbose)?;
    if series1.len() != series2.len() {
        print_log_msg(WARN, &format!(
            "Atom {} has {} frames but atom {} has {}. Only the first {} are paired",
            atom1, series1.len(), atom2, series2.len(), paired_frame_count(&series1, &series2)
        ));
    }
    let distances = compute_distances(&series1, &series2);

    if distances.len() > 1 {
        let output_dir = PathBuf::from(settings.output_dir.as_deref().unwrap_or("."));
        let path = save_distances(&output_dir, atom1, atom2, &distances)?;
        print_log_msg(DONE, &format!("{} distances saved to {}", distances.len(), path.display()));
    } else {
        println!("{:?}", distances);
    }
    Ok(())
}

/// Use the given serial, or print the candidates and ask for one.
/// `direction` is "From" or "To".
fn choose_atom<R: BufRead, W: Write>(
    given: Option<u64>, candidates: &ResidueAtomList, direction: &str,
    input: &mut R, output: &mut W, verbose: bool,
) -> Result<u64> {
    let serial = match given {
        Some(serial) => {
            if verbose {
                write_atom_table(&mut *output, candidates, false).map_err(|e| Error::from_io(e, "stdout"))?;
            }
            serial
        }
        None => {
            write_atom_table(&mut *output, candidates, false).map_err(|e| Error::from_io(e, "stdout"))?;
            let question = format!(
                "{} which atom (number) of {} should the distance be calculated? ",
                direction, candidates.display_label()
            );
            prompt_serial(input, output, &question)?
        }
    };
    if !candidates.contains_serial(serial) {
        print_log_msg(WARN, &format!("Atom {} is not part of {}", serial, candidates.display_label()));
    }
    Ok(serial)
}

/// Ask `question` and read one atom serial number.
pub fn prompt_serial<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<u64> {
    write!(output, "{}", question)
        .and_then(|_| output.flush())
        .map_err(|e| Error::from_io(e, "stdout"))?;
    let mut answer = String::new();
    let read = input.read_line(&mut answer).map_err(|e| Error::from_io(e, "stdin"))?;
    if read == 0 {
        return Err(Error::invalid_argument("no atom number given"));
    }
    let answer = answer.trim();
    answer
        .parse::<u64>()
        .map_err(|_| Error::invalid_argument(format!("'{}' is not an atom number", answer)))
}
