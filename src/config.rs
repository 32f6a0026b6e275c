//! Artifact and replay file locations.

use std::path::{Path, PathBuf};

/// Where a run reads its replayed inputs and writes its artifacts.
#[derive(Clone, Debug)]
pub struct Config {
    /// Replay file of `X<id>,<value>` lines. Absent file means a fresh
    /// run with randomly chosen inputs.
    pub input_file: PathBuf,
    /// Branch identifiers in execution order, one `B<id>` per line.
    pub branch_file: PathBuf,
    /// The path condition as an SMT-LIB2 benchmark.
    pub formula_file: PathBuf,
    /// Human-readable dump of inputs, memory and path condition.
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_file: PathBuf::from("input.txt"),
            branch_file: PathBuf::from("branch.txt"),
            formula_file: PathBuf::from("formula.smt2"),
            log_file: PathBuf::from("log.txt"),
        }
    }
}

impl Config {
    /// All four files under `dir`, with the default names.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Config {
            input_file: dir.join("input.txt"),
            branch_file: dir.join("branch.txt"),
            formula_file: dir.join("formula.smt2"),
            log_file: dir.join("log.txt"),
        }
    }
}
