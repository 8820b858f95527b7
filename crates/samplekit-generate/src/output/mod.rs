use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;
use crate::generators::GeneratedValue;

pub mod csv;

use self::csv::{CountingWriter, write_values_csv};

/// How a batch is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One value per line.
    #[default]
    Text,
    /// One JSON value per line.
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(GenerationError::InvalidInput(format!(
                "unknown output format '{other}' (expected text, json or csv)"
            ))),
        }
    }
}

/// Write a batch and return the number of bytes written.
pub fn write_values<W: Write>(
    writer: W,
    values: &[GeneratedValue],
    format: OutputFormat,
) -> Result<u64, GenerationError> {
    match format {
        OutputFormat::Csv => Ok(write_values_csv(writer, values)?),
        OutputFormat::Text => {
            let mut writer = CountingWriter::new(writer);
            for value in values {
                writeln!(writer, "{}", value.to_text())?;
            }
            writer.flush()?;
            Ok(writer.bytes_written())
        }
        OutputFormat::Json => {
            let mut writer = CountingWriter::new(writer);
            for value in values {
                serde_json::to_writer(&mut writer, &value.to_json())?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
            Ok(writer.bytes_written())
        }
    }
}

pub fn write_values_to_path(
    path: &Path,
    values: &[GeneratedValue],
    format: OutputFormat,
) -> Result<u64, GenerationError> {
    let writer = BufWriter::new(File::create(path)?);
    write_values(writer, values, format)
}
