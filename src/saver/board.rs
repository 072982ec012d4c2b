/*
board.rs

Copyright 2025 Hervé Quatremain

This file is part of Board Generator.

Board Generator is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Board Generator is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Board Generator. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Load and save board configurations and generation parameters.
//!
//! A board file contains a single [`BoardConfig`] object, or a list of [`BoardConfig`] objects
//! when several boards have been generated at once.
//! A parameter file contains a [`GenerationParams`] object. Missing fields take their default
//! values.

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::board::config::BoardConfig;
use crate::generator::params::GenerationParams;

/// Object to load and save a board file.
pub struct SaverBoard {
    /// Path to the file.
    save_file: PathBuf,
}

impl SaverBoard {
    /// Create a [`SaverBoard`] object for the given file.
    pub fn new(path: &Path) -> Self {
        debug!("Board file: {path:?}");
        Self {
            save_file: path.to_path_buf(),
        }
    }

    /// Path to the file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Read and deserialize the file. Return None if the file does not exist.
    fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let value: T = serde_json::from_reader(reader)?;
        Ok(Some(value))
    }

    /// Serialize the given object into the file, replacing its content.
    fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Retrieve the [`BoardConfig`] object stored in the file.
    ///
    /// Return None if the file does not exist.
    pub fn get_board(&self) -> Result<Option<BoardConfig>, Box<dyn Error>> {
        self.read()
    }

    /// Retrieve the [`GenerationParams`] object stored in the file.
    ///
    /// Return None if the file does not exist.
    pub fn get_params(&self) -> Result<Option<GenerationParams>, Box<dyn Error>> {
        self.read()
    }

    /// Save the provided [`BoardConfig`] object.
    pub fn save_board(&self, board: &BoardConfig) -> Result<(), Box<dyn Error>> {
        self.write(board)
    }

    /// Save the provided list of [`BoardConfig`] objects as a JSON array.
    pub fn save_boards(&self, boards: &[BoardConfig]) -> Result<(), Box<dyn Error>> {
        self.write(boards)
    }

    /// Delete the file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::config::DirectedPosition;
    use crate::board::position::{Direction, Position};
    use std::env;
    use std::fs;

    fn saver(name: &str) -> SaverBoard {
        let mut path: PathBuf = env::temp_dir();
        path.push(format!("board-generator-{}-{name}.json", std::process::id()));
        SaverBoard::new(&path)
    }

    fn board() -> BoardConfig {
        let mut config: BoardConfig = BoardConfig::new(
            "Rohan",
            3,
            2,
            DirectedPosition::new(Position::new(2, 1), Direction::South),
        );
        config
            .start_fields
            .push(DirectedPosition::new(Position::new(0, 0), Direction::East));
        config.check_points.push(Position::new(1, 1));
        config.walls.push([Position::new(1, 0), Position::new(2, 0)]);
        config
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let s: SaverBoard = saver("missing");
        s.delete_save();

        assert!(s.get_board().unwrap().is_none());
        assert!(s.get_params().unwrap().is_none());
    }

    #[test]
    fn board_is_saved_and_restored() {
        let s: SaverBoard = saver("board");
        let config: BoardConfig = board();

        s.save_board(&config).unwrap();
        assert_eq!(s.get_board().unwrap(), Some(config));
        s.delete_save();
    }

    #[test]
    fn several_boards_are_saved_as_an_array() {
        let s: SaverBoard = saver("boards");
        let boards: Vec<BoardConfig> = vec![board(), board()];

        s.save_boards(&boards).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(s.path()).unwrap()).unwrap();
        assert_eq!(json.as_array().map(|a| a.len()), Some(2));
        s.delete_save();
    }

    #[test]
    fn delete_save_removes_the_file() {
        let mut path: PathBuf = env::temp_dir();
        path.push(format!("board-generator-{}-deleted.json", std::process::id()));
        let s: SaverBoard = SaverBoard::new(&path);
        assert_eq!(s.path(), path.as_path());

        s.save_board(&board()).unwrap();
        assert!(path.exists());
        s.delete_save();
        assert!(!path.exists());
        assert!(s.get_board().unwrap().is_none());
    }

    #[test]
    fn params_file_can_be_partial() {
        let s: SaverBoard = saver("params");
        fs::write(s.path(), r#"{ "width": 12, "holeCount": 4, "wantWalls": true }"#).unwrap();

        let params: GenerationParams = s.get_params().unwrap().unwrap();
        assert_eq!(params.width, 12);
        assert_eq!(params.height, GenerationParams::default().height);
        assert_eq!(params.hole_count, 4);
        assert!(params.want_walls);
        s.delete_save();
    }

    #[test]
    fn invalid_json_is_an_error() {
        let s: SaverBoard = saver("invalid");
        fs::write(s.path(), "{ not json").unwrap();

        assert!(s.get_board().is_err());
        s.delete_save();
    }
}
