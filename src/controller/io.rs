// File: io.rs
// Created: 2026-10-13 10:21:44

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub fn output_file_name(serial1: u64, serial2: u64) -> String {
    format!("distances_{}_to_{}.txt", serial1, serial2)
}

/// Write one distance per line in the same form the console prints, so `5.0`
/// stays `5.0`. Never overwrites: an existing file is left
/// untouched and `OutputFileAlreadyExists` is returned.
pub fn write_distances(path: &Path, distances: &[f64]) -> Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => Error::OutputFileAlreadyExists { path: path.to_path_buf() },
            _ => Error::Io { path: path.to_path_buf(), source: e },
        })?;
    let write_error = |e: io::Error| Error::Io { path: path.to_path_buf(), source: e };
    let mut writer = BufWriter::new(file);
    for distance in distances {
        writeln!(writer, "{:?}", distance).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}

/// Save distances between two atoms into `output_dir` and return the path written.
pub fn save_distances(output_dir: &Path, serial1: u64, serial2: u64, distances: &[f64]) -> Result<PathBuf> {
    let path = output_dir.join(output_file_name(serial1, serial2));
    write_distances(&path, distances)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("atomdist_{}_{}", std::process::id(), name));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(750, 1288), "distances_750_to_1288.txt");
    }

    #[test]
    fn test_save_distances() {
        let dir = temp_dir("save");
        let path = save_distances(&dir, 2, 4, &[5.0, 6.25, 2.5]).unwrap();
        assert_eq!(path, dir.join("distances_2_to_4.txt"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "5.0\n6.25\n2.5\n");
        let rendered: Vec<String> = [5.0f64, 6.25, 2.5].iter().map(|d| format!("{:?}", d)).collect();
        assert_eq!(content.lines().collect::<Vec<_>>(), rendered);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_existing_file_untouched() {
        let dir = temp_dir("exists");
        let path = dir.join(output_file_name(2, 4));
        std::fs::write(&path, "previous run\n").unwrap();
        let result = write_distances(&path, &[1.0, 2.0]);
        assert!(matches!(result, Err(Error::OutputFileAlreadyExists { .. })));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous run\n");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_output_dir() {
        let dir = std::env::temp_dir().join(format!("atomdist_{}_missing_dir", std::process::id()));
        let result = save_distances(&dir, 2, 4, &[1.0, 2.0]);
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
