//! Export collaborator: writes each generated board as a comma-separated
//! grid, one file per player.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::ExportError;
use crate::game::{exact_sqrt, BoardPair, PlayerBoard};

/// Configuration for the board exporter.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub out_dir: PathBuf,
    pub player_one_file: String,
    pub player_two_file: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            out_dir: PathBuf::from("boards"),
            player_one_file: "player_1.csv".to_string(),
            player_two_file: "player_2.csv".to_string(),
        }
    }
}

/// Writes player boards to their configured destinations.
pub struct BoardExporter {
    config: ExportConfig,
}

impl BoardExporter {
    pub fn new(config: ExportConfig) -> Self {
        BoardExporter { config }
    }

    /// Export both boards, returning the written paths.
    pub fn export_pair(&self, boards: &BoardPair) -> Result<(PathBuf, PathBuf), ExportError> {
        let one = self.export_board(&boards.player_one, &self.config.player_one_file)?;
        let two = self.export_board(&boards.player_two, &self.config.player_two_file)?;
        Ok((one, two))
    }

    /// Export a single board to `file_name` under the output directory.
    pub fn export_board(
        &self,
        board: &PlayerBoard,
        file_name: &str,
    ) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.config.out_dir)?;
        let path = self.config.out_dir.join(file_name);
        let mut writer = BufWriter::new(File::create(&path)?);
        write_grid(board, &mut writer)?;
        writer.flush()?;
        Ok(path)
    }
}

/// Write `board` as a square grid: every cell's name followed by a comma,
/// every row terminated with CRLF.
pub fn write_grid<W: Write>(board: &PlayerBoard, writer: &mut W) -> Result<(), ExportError> {
    let row_size = exact_sqrt(board.len()).ok_or(ExportError::NotSquare { size: board.len() })?;
    for row in board.rows(row_size) {
        for tile in row {
            write!(writer, "{},", tile.name())?;
        }
        write!(writer, "\r\n")?;
    }
    Ok(())
}
