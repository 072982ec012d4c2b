/*
cli_options.rs

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

//! Process command-line options.
//!
//! In command-line mode, the generator creates random boards and prints them in JSON format, or
//! checks a board file.
//!
//! # Examples
//!
//! Generate a 12x8 board with three checkpoints, six holes, rivers, and walls:
//!
//! ```
//! $ board-generator -W 12 -H 8 --checkpoints 3 --holes 6 --rivers --walls
//! ```
//!
//! Generate five boards from a parameter file and save them:
//!
//! ```
//! $ board-generator --params mordor.json -n 5 -o boards.json --summary
//! ```
//!
//! Check a board file:
//!
//! ```
//! $ board-generator --check boards/shire.json
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

use board_generator::board::config::BoardConfig;
use board_generator::board::validator::{self, ConfigIssue};
use board_generator::generator::{
    BoardGenerator, GeneratedBoard, GenerationParams, RiverAlgorithm, WallAlgorithm,
};
use board_generator::oracle::{ReachabilityReport, check_board_config};
use board_generator::saver::board::SaverBoard;

/// Generate random, solvable game boards.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Board file to check instead of generating boards
    #[arg(short, long, conflicts_with = "output")]
    check: Option<PathBuf>,

    /// JSON file with the generation parameters (flags override the file)
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Name of the board
    #[arg(long)]
    name: Option<String>,

    /// Number of columns
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Number of rows
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Number of start fields
    #[arg(long)]
    start_fields: Option<usize>,

    /// Number of checkpoints
    #[arg(long)]
    checkpoints: Option<usize>,

    /// Number of lembas fields
    #[arg(long)]
    lembas_fields: Option<usize>,

    /// Maximum number of lembas on a lembas field
    #[arg(long)]
    max_lembas: Option<u32>,

    /// Put exactly the maximum number of lembas on each lembas field
    #[arg(long, default_value_t = false)]
    exact_lembas: bool,

    /// Number of holes
    #[arg(long)]
    holes: Option<usize>,

    /// Add rivers
    #[arg(long, default_value_t = false)]
    rivers: bool,

    /// River placement algorithm
    #[arg(value_enum, long)]
    river_algorithm: Option<RiverAlgorithm>,

    /// Number of river cells (one cell out of eight by default)
    #[arg(long)]
    river_count: Option<usize>,

    /// Add walls
    #[arg(long, default_value_t = false)]
    walls: bool,

    /// Wall placement algorithm
    #[arg(value_enum, long)]
    wall_algorithm: Option<WallAlgorithm>,

    /// Number of boards to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// File where to save the boards instead of printing them
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print some statistics after generating the boards
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Args {
    /// Build the generation parameters from the parameter file and the command-line flags.
    fn generation_params(&self) -> Result<GenerationParams, String> {
        let mut params: GenerationParams = match &self.params {
            Some(path) => {
                let saver: SaverBoard = SaverBoard::new(path);
                match saver.get_params() {
                    Ok(Some(p)) => p,
                    Ok(None) => return Err(format!("{}: no such file", saver.path().display())),
                    Err(e) => return Err(format!("{}: {e}", saver.path().display())),
                }
            }
            None => GenerationParams::default(),
        };

        if let Some(name) = &self.name {
            params.name = name.clone();
        }
        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(count) = self.start_fields {
            params.start_field_count = count;
        }
        if let Some(count) = self.checkpoints {
            params.checkpoint_count = count;
        }
        if let Some(count) = self.lembas_fields {
            params.lembas_field_count = count;
        }
        if let Some(amount) = self.max_lembas {
            params.max_lembas_amount = amount;
        }
        if let Some(count) = self.holes {
            params.hole_count = count;
        }
        if let Some(algorithm) = self.river_algorithm {
            params.river_algorithm = algorithm;
        }
        if let Some(wall_algorithm) = self.wall_algorithm {
            params.wall_algorithm = wall_algorithm;
        }
        if self.river_count.is_some() {
            params.river_count = self.river_count;
        }
        params.exact_lembas_amount |= self.exact_lembas;
        params.want_rivers |= self.rivers;
        params.want_walls |= self.walls;
        Ok(params)
    }
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    match &args.check {
        Some(path) => check(path),
        None => generate(&args),
    }
}

/// Check the structure and the reachability of the board in the given file.
fn check(path: &Path) -> u8 {
    let saver: SaverBoard = SaverBoard::new(path);
    let config: BoardConfig = match saver.get_board() {
        Ok(Some(c)) => c,
        Ok(None) => {
            eprintln!("{}: no such file", saver.path().display());
            return 1;
        }
        Err(e) => {
            eprintln!("{}: {e}", saver.path().display());
            return 1;
        }
    };

    let issues: Vec<ConfigIssue> = validator::validate(&config);
    for issue in &issues {
        println!("{}: {issue}", config.name);
    }

    let report: ReachabilityReport = check_board_config(&config);
    for pair in &report.failing_pairs {
        println!("{}: {pair}", config.name);
    }

    if issues.is_empty() && report.is_reachable() {
        println!("{}: OK", config.name);
        0
    } else {
        1
    }
}

/// Save the boards in the given file: a single board as an object, several boards as a list.
///
/// The file is removed if the boards cannot be written.
fn save(path: &Path, boards: &[BoardConfig]) -> Result<(), String> {
    let saver: SaverBoard = SaverBoard::new(path);
    let ret = match boards {
        [board] => saver.save_board(board),
        _ => saver.save_boards(boards),
    };
    ret.map_err(|e| {
        // Do not leave a truncated file behind
        saver.delete_save();
        format!("{}: {e}", saver.path().display())
    })
}

/// Generate the boards and print or save them.
fn generate(args: &Args) -> u8 {
    let params: GenerationParams = match args.generation_params() {
        Ok(p) => p,
        Err(msg) => {
            eprintln!("{msg}");
            return 1;
        }
    };
    debug!("Generation parameters: {params:?}");

    let mut generator: BoardGenerator = BoardGenerator::new(params);
    let mut boards: Vec<BoardConfig> = Vec::with_capacity(args.count);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut holes: usize = 0;
    let mut walls: usize = 0;
    let mut validations: usize = 0;
    let mut errors: usize = 0;

    for i in 0..args.count {
        debug!("Board {i}");

        let board: GeneratedBoard = match generator.generate() {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        };
        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        holes += generator.stats.holes_placed;
        walls += generator.stats.walls_placed;
        validations += generator.stats.validations;

        // Every generated board must be solvable
        let report: ReachabilityReport = check_board_config(&board.config);
        if !report.is_reachable() {
            errors += 1;
            for pair in &report.failing_pairs {
                eprintln!("Bug: board {i}: {pair}");
            }
        }
        boards.push(board.config);
    }

    let ret: Result<(), String> = match &args.output {
        Some(path) => save(path, &boards),
        None => {
            let json: Result<String, serde_json::Error> = match boards.as_slice() {
                [board] => serde_json::to_string_pretty(board),
                _ => serde_json::to_string_pretty(&boards),
            };
            json.map(|j| println!("{j}")).map_err(|e| e.to_string())
        }
    };
    if let Err(msg) = ret {
        eprintln!("{msg}");
        return 1;
    }

    // Print some stats on the error output. The boards might be on the standard output.
    if args.summary && args.count > 0 {
        let params: &GenerationParams = generator.params();
        eprintln!(
            "
          total time = {}s
        average time = {}s
            max time = {}s
       average holes = {} (requested {})
       average walls = {}
average oracle calls = {}
              errors = {}",
            total,
            total / args.count as f32,
            max,
            holes as f32 / args.count as f32,
            params.hole_count,
            walls as f32 / args.count as f32,
            validations as f32 / args.count as f32,
            errors
        );
    }

    if errors > 0 { 1 } else { 0 }
}
