//! Command line interface for atomdist

// File: mod.rs
// Created: 2026-10-13 15:12:09

// Arguments of CLI app are defined here

pub mod config;
pub mod workflows;

use std::io::{self, Write};

use crate::structure::atom::{AtomRecord, ResidueAtomList};
use crate::utils::formatter::{Column, TableFormatter, Value};

pub enum AppArgs {
    Global {
        help: bool,
    },
    List {
        pdb_path: Option<String>,
        residue: Option<String>,
        tsv: bool,
        verbose: bool,
        help: bool,
    },
    Measure {
        pdb_path: Option<String>,
        residue1: Option<String>,
        residue2: Option<String>,
        // Asked interactively when not given
        atom1: Option<u64>,
        atom2: Option<u64>,
        output_dir: Option<String>,
        config: Option<String>,
        verbose: bool,
        help: bool,
    },
}

pub fn print_logo() {
    let logo = [
        "",
        "\x1b[91m ▄▀█ ▀█▀ █▀█ █▀▄▀█\x1b[93m █▀▄ █ █▀ ▀█▀\x1b[0m",
        "\x1b[91m █▀█  █  █▄█ █ ▀ █\x1b[93m █▄▀ █ ▄█  █ \x1b[0m",
        "",
    ];

    for line in &logo {
        eprintln!("{}", line);
    }
}

fn atom_table() -> TableFormatter<AtomRecord> {
    TableFormatter::new(vec![
        Column::new("Atom Number", |atom: &AtomRecord| Value::from(atom.serial)),
        Column::new("Atom Type", |atom: &AtomRecord| Value::from(atom.atom_name.as_str())),
    ])
}

/// Print the atoms of a residue as a grid, or as TSV when `tsv` is set.
pub fn write_atom_table<W: Write>(mut w: W, residue: &ResidueAtomList, tsv: bool) -> io::Result<()> {
    let formatter = atom_table();
    if tsv {
        formatter.write_header(&mut w)?;
        for atom in residue.iter() {
            formatter.write_record(&mut w, atom)?;
        }
        Ok(())
    } else {
        formatter.write_grid(&mut w, &residue.atoms)
    }
}
