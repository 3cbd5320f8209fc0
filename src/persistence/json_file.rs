use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use serde_json::{from_str, to_string};
use thiserror::Error;
use crate::domain::commands::Command;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse commands on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize commands: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Reads a file where every non-empty line is a JSON array of commands.
pub fn read_commands<P: AsRef<Path>>(path: P) -> Result<Vec<Command>, PersistenceError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut commands = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed: Vec<Command> = from_str(&line)
            .map_err(|source| PersistenceError::Parse { line: index + 1, source })?;

        commands.extend(parsed);
    }

    Ok(commands)
}

/// Writes `commands` as a single line, replacing any previous content.
pub fn write_commands<P: AsRef<Path>>(path: P, commands: &[Command]) -> Result<(), PersistenceError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let json = to_string(commands).map_err(PersistenceError::Serialize)?;

    writeln!(file, "{}", json)?;

    Ok(())
}
