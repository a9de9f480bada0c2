// File: main.rs
// Created: 2026-10-13 15:12:09

use atomdist::cli::workflows::list::list_atoms;
use atomdist::cli::workflows::measure::measure_distance;
use atomdist::cli::*;

const HELP: &str = "\
usage: atomdist <COMMAND> [OPTIONS]

commands:
  list      Print the atoms of one residue
  measure   Measure the distance between an atom of one residue and an atom of another
options:
  -h, --help                 Print this help menu

Run `atomdist <COMMAND> --help` for the options of each command.
";

fn parse_arg() -> Result<AppArgs, Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();
    let parsed = match args.subcommand()?.as_deref() {
        Some("list") => AppArgs::List {
            pdb_path: args.opt_value_from_str(["-p", "--pdb"])?,
            residue: args.opt_value_from_str(["-r", "--residue"])?,
            tsv: args.contains("--tsv"),
            verbose: args.contains(["-v", "--verbose"]),
            help: args.contains(["-h", "--help"]),
        },
        Some("measure") => AppArgs::Measure {
            pdb_path: args.opt_value_from_str(["-p", "--pdb"])?,
            residue1: args.opt_value_from_str(["-a", "--residue1"])?,
            residue2: args.opt_value_from_str(["-b", "--residue2"])?,
            atom1: args.opt_value_from_str("--atom1")?,
            atom2: args.opt_value_from_str("--atom2")?,
            output_dir: args.opt_value_from_str(["-o", "--output"])?,
            config: args.opt_value_from_str(["-c", "--config"])?,
            verbose: args.contains(["-v", "--verbose"]),
            help: args.contains(["-h", "--help"]),
        },
        Some(other) => {
            return Err(format!("Invalid subcommand: {}", other).into());
        }
        None => AppArgs::Global {
            help: args.contains(["-h", "--help"]),
        },
    };
    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(format!("Unknown arguments: {:?}", remaining).into());
    }
    Ok(parsed)
}

fn main() {
    let parsed_args = parse_arg().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("{}", HELP);
        std::process::exit(1);
    });
    match parsed_args {
        AppArgs::Global { help } => {
            if help {
                println!("{}", HELP);
            } else {
                println!("No subcommand specified. Try `atomdist --help` for more information.");
            }
        }
        AppArgs::List { .. } => {
            list_atoms(parsed_args);
        }
        AppArgs::Measure { .. } => {
            measure_distance(parsed_args);
        }
    }
}
