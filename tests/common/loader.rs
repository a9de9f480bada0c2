// File: loader.rs
// Created: 2026-10-14 09:31:50

use std::path::PathBuf;

pub const SERINE_HYDROLASE: &str = "data/serine_hydrolase.pdb";
pub const SERINE_HYDROLASE_CHAIN: &str = "data/serine_hydrolase_chain.pdb";
pub const MULTI_MODEL: &str = "data/multi_model.pdb";

pub fn load_path(dir: &str) -> Vec<String> {
    // Load all pdbs in given path
    let mut pdb_paths = Vec::new();
    let paths = std::fs::read_dir(dir).expect("Unable to read pdb directory");
    for path in paths {
        let path = path.expect("Unable to read path");
        let path = path.path();
        let path = path.to_str().expect("Unable to convert path to string");
        // If the path is a pdb file, add it to the list
        if path.ends_with(".pdb") {
            pdb_paths.push(path.to_string());
        }
    }
    pdb_paths.sort();
    pdb_paths
}

/// Write `lines` to a fresh file in the temp directory and return its path.
pub fn write_temp_pdb(name: &str, lines: &[&str]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("atomdist_it_{}_{}.pdb", std::process::id(), name));
    std::fs::write(&path, lines.join("\n") + "\n").expect("Unable to write temporary pdb");
    path
}
