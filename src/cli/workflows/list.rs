// File: list.rs
// Created: 2026-10-13 15:40:17

//! This workflow prints the atoms of one residue so that atom serial numbers
//! can be picked for `atomdist measure`.

use crate::cli::{print_logo, write_atom_table, AppArgs};
use crate::prelude::*;

pub const HELP_LIST: &str = "\
usage: atomdist list -p <PDB> -r <RESIDUE> [OPTIONS]

input:
 -p, --pdb <PATH>          Path of PDB file (.pdb, .ent or .pdb.gz)
 -r, --residue <RESIDUE>   Residue number, optionally with residue code (e.g. 51 or SER51)

output:
 --tsv                     Print tab-separated values instead of a table

general options:
 -v, --verbose             Print verbose messages
 -h, --help                Print this help menu
";

pub fn list_atoms(env: AppArgs) {
    match env {
        AppArgs::List {
            pdb_path,
            residue,
            tsv,
            verbose,
            help,
        } => {
            if help {
                eprintln!("{}", HELP_LIST);
                return;
            }
            let (pdb_path, residue) = match (pdb_path, residue) {
                (Some(pdb_path), Some(residue)) => (pdb_path, residue),
                _ => {
                    eprintln!("{}", HELP_LIST);
                    std::process::exit(1);
                }
            };
            if verbose { print_logo(); }
            if let Err(e) = run_list(&pdb_path, &residue, tsv, verbose) {
                print_log_msg(FAIL, &e.to_string());
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("{}", HELP_LIST);
            std::process::exit(1);
        }
    }
}

fn run_list(pdb_path: &str, residue: &str, tsv: bool, verbose: bool) -> Result<()> {
    let selector = ResidueSelector::parse(residue)?;
    let measurement = Measurement::new(pdb_path)?;
    if verbose {
        print_log_msg(INFO, &format!(
            "Listing atoms of residue {} in {} ({})", selector, pdb_path, measurement.input_type()
        ));
    }
    let candidates = measure_time!(measurement.find_residue(selector.res_serial), verbose)?;
    if let Some(warning) = selector.check_residue(&candidates) {
        print_log_msg(WARN, &warning);
    }
    if !tsv {
        println!("{}", candidates.display_label());
    }
    write_atom_table(std::io::stdout().lock(), &candidates, tsv)
        .map_err(|e| Error::from_io(e, "stdout"))?;
    if verbose {
        print_log_msg(DONE, &format!("{} atoms listed", candidates.len()));
    }
    Ok(())
}
