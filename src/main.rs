//! Habit Progress - Entry Point
//!
//! Command line front end over the level table: resolve XP, check for
//! level-ups, and inspect or export the level curve.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use habit_progress::data::{export_curve, load_configured, load_table};
use habit_progress::{LevelDefinition, TotalXp, UserLevel};

/// Habit Progress - resolve cumulative XP into levels
#[derive(Parser, Debug)]
#[command(name = "habit-progress", version)]
#[command(about = "Resolve cumulative habit XP into levels and titles")]
struct Args {
    /// Level curve file (RON); defaults to the one in the config directory
    #[arg(long, global = true)]
    curve: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the level for a cumulative XP value
    Level {
        #[arg(allow_negative_numbers = true)]
        xp: i64,
    },
    /// Check whether going from OLD_XP to NEW_XP gains a level
    Check {
        #[arg(allow_negative_numbers = true)]
        old_xp: i64,
        #[arg(allow_negative_numbers = true)]
        new_xp: i64,
    },
    /// Print the full level table
    Table,
    /// Show a single level definition
    Define { level: u32 },
    /// Write the active level curve to a RON file
    ExportCurve { path: PathBuf },
}

/// JSON output of the `check` command
#[derive(Serialize)]
struct LevelUpReport<'a> {
    leveled_up: bool,
    old_level: &'a UserLevel,
    new_level: &'a UserLevel,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("Starting Habit Progress v{}", env!("CARGO_PKG_VERSION"));

    let loaded = match &args.curve {
        Some(path) => load_table(path)
            .with_context(|| format!("Failed to load curve {}", path.display()))?,
        None => load_configured(),
    };
    let table = &loaded.table;

    match args.command {
        Command::Level { xp } => {
            let xp = TotalXp::from_signed(xp)?;
            let level = table.resolve(xp.get());
            if args.json {
                print_json(&level)?;
            } else {
                print_level(&level);
            }
        }
        Command::Check { old_xp, new_xp } => {
            let old_xp = TotalXp::from_signed(old_xp)?;
            let new_xp = TotalXp::from_signed(new_xp)?;
            let old_level = table.resolve(old_xp.get());
            let new_level = table.resolve(new_xp.get());
            let leveled_up = table.check_level_up(old_xp.get(), new_xp.get()).is_some();

            if args.json {
                print_json(&LevelUpReport { leveled_up, old_level: &old_level, new_level: &new_level })?;
            } else if leveled_up {
                println!(
                    "Level up! {} ({}) -> {} ({})",
                    old_level.level, old_level.title, new_level.level, new_level.title
                );
            } else {
                println!("No level up, still level {} ({})", new_level.level, new_level.title);
            }
        }
        Command::Table => {
            if args.json {
                print_json(table)?;
            } else {
                for def in table.levels() {
                    print_definition(def);
                }
            }
        }
        Command::Define { level } => {
            let def = table.definition(level);
            if args.json {
                print_json(def)?;
            } else {
                print_definition(def);
            }
        }
        Command::ExportCurve { path } => {
            export_curve(&loaded.curve, &path)
                .with_context(|| format!("Failed to export curve to {}", path.display()))?;
            println!("Level curve written to {}", path.display());
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn print_level(level: &UserLevel) {
    println!("Level {} - {}", level.level, level.title);
    if level.is_max_level() {
        println!("{} XP (max level)", level.current_xp);
    } else {
        println!(
            "{} XP, {}/{} into level ({:.1}%), {} XP to level {}",
            level.current_xp,
            level.xp_into_level(),
            level.total_xp_needed,
            level.progress_to_next_level * 100.0,
            level.xp_to_next_level(),
            level.level + 1
        );
    }
}

fn print_definition(def: &LevelDefinition) {
    println!("{:>3} {} {:<24} {:>12} XP  {}", def.level, def.emoji, def.title, def.xp_required, def.color);
}
