//! Command-line interface for generating and solving sudoku puzzles.
//!
//! ```sh
//! cellwise generate --empty 50 --seed 42
//! cellwise solve puzzle.txt
//! echo "..." | cellwise solve
//! ```

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
    process,
    str::FromStr as _,
    time::Duration,
};

use cellwise_core::{DigitGrid, Position};
use cellwise_generator::{GeneratorConfig, PuzzleGenerator};
use cellwise_solver::{Deadline, solve};
use clap::{Parser, Subcommand};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a puzzle with a guaranteed unique solution.
    Generate {
        /// Number of blank cells to carve out of the solved grid.
        #[arg(long, default_value_t = 50)]
        empty: usize,
        /// Seed for reproducible generation; random when omitted.
        #[arg(long)]
        seed: Option<u64>,
        /// Time budget in milliseconds for each solver run.
        #[arg(long, default_value_t = 1300)]
        time_limit_ms: u64,
    },
    /// Solve a puzzle read from a file or standard input.
    Solve {
        /// Path to a grid file (digits 1-9; `.`, `_`, or `0` for blanks);
        /// reads standard input when omitted.
        path: Option<PathBuf>,
        /// Time budget in milliseconds for the search.
        #[arg(long, default_value_t = 1300)]
        time_limit_ms: u64,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let result = match args.command {
        Command::Generate {
            empty,
            seed,
            time_limit_ms,
        } => run_generate(empty, seed, time_limit_ms),
        Command::Solve {
            path,
            time_limit_ms,
        } => run_solve(path.as_deref(), time_limit_ms),
    };
    if let Err(message) = result {
        log::error!("{message}");
        process::exit(1);
    }
}

fn run_generate(empty: usize, seed: Option<u64>, time_limit_ms: u64) -> Result<(), String> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Pcg64Mcg::seed_from_u64(seed);

    let generator = PuzzleGenerator::with_config(GeneratorConfig {
        solve_budget: Duration::from_millis(time_limit_ms),
        ..GeneratorConfig::default()
    });
    let puzzle = generator.generate(empty, &mut rng);

    println!("seed: {seed}");
    println!();
    println!("complete grid:");
    println!("{}", render(&puzzle.solution));
    println!();
    println!("puzzle ({} blank cells):", puzzle.problem.blank_count());
    println!("{}", render(&puzzle.problem));
    if !puzzle.reached_target {
        log::warn!(
            "only {} of {empty} requested blanks were carved before the deadline",
            puzzle.problem.blank_count()
        );
    }

    // Solve the puzzle back as a self-check.
    let deadline = Deadline::after(Duration::from_millis(time_limit_ms));
    let solutions = solve(&puzzle.problem, deadline).map_err(|err| err.to_string())?;
    let answer = solutions
        .first()
        .ok_or_else(|| "generated puzzle did not solve within the time limit".to_owned())?;
    println!();
    println!("answer:");
    println!("{}", render(answer));
    Ok(())
}

fn run_solve(path: Option<&Path>, time_limit_ms: u64) -> Result<(), String> {
    let text = match path {
        Some(path) => {
            fs::read_to_string(path).map_err(|err| format!("cannot read {}: {err}", path.display()))?
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| format!("cannot read standard input: {err}"))?;
            text
        }
    };
    let grid = DigitGrid::from_str(&text).map_err(|err| err.to_string())?;

    let deadline = Deadline::after(Duration::from_millis(time_limit_ms));
    let solutions = solve(&grid, deadline).map_err(|err| err.to_string())?;

    if let Some(solution) = solutions.unique() {
        println!("unique solution:");
        println!("{}", render(solution));
        return Ok(());
    }
    if solutions.is_ambiguous() {
        println!("multiple solutions; first one found:");
        println!("{}", render(&solutions.grids()[0]));
        return Ok(());
    }
    if solutions.deadline_hit() {
        match solutions.first() {
            Some(solution) => {
                println!("found a solution, but timed out before proving uniqueness:");
                println!("{}", render(solution));
                Ok(())
            }
            None => Err(format!(
                "timed out after {time_limit_ms} ms without finding a solution (inconclusive)"
            )),
        }
    } else {
        Err("this grid has no solution".to_owned())
    }
}

/// Renders a grid with box separators, in the style of
///
/// ```text
/// 5 3 4 | 6 7 8 | 9 1 2
/// ...
/// ------+-------+------
/// ```
fn render(grid: &DigitGrid) -> String {
    let mut out = String::new();
    for y in 0..9 {
        if y == 3 || y == 6 {
            out.push_str("------+-------+------\n");
        }
        for x in 0..9 {
            if x == 3 || x == 6 {
                out.push_str("| ");
            }
            match grid.get(Position::new(x, y)) {
                Some(digit) => out.push(char::from(b'0' + digit.value())),
                None => out.push('_'),
            }
            if x < 8 {
                out.push(' ');
            }
        }
        if y < 8 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_shape() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), cellwise_core::Digit::D5);
        let text = render(&grid);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11); // 9 rows + 2 separators
        assert_eq!(lines[0], "5 _ _ | _ _ _ | _ _ _");
        assert_eq!(lines[3], "------+-------+------");
        assert_eq!(lines[7], "------+-------+------");
    }
}
