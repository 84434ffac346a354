#![warn(clippy::pedantic)]

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::{
    eyre::{WrapErr, eyre},
    owo_colors::OwoColorize,
};
use cube_core::{
    Cube, FaceName, Sticker, Turn,
    render::{self, Layout},
};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, debug, info};
use serde::{Deserialize, Serialize};

/// Build an NxN cube, edit some stickers, turn some layers and print the result
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The demo configuration file to use, in TOML format. Runs the built-in demo if omitted.
    #[arg(long, short = 'c', value_name = "DEMO_CONFIG")]
    config: Option<PathBuf>,

    /// Override the side length of the cube
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    size: Option<isize>,

    /// How to lay out the faces
    #[arg(long, value_enum, default_value_t = LayoutArg::List)]
    layout: LayoutArg,

    /// Colour the stickers by label
    #[arg(long)]
    color: bool,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    log_level: u8,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum LayoutArg {
    List,
    Net,
}

impl From<LayoutArg> for Layout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::List => Layout::List,
            LayoutArg::Net => Layout::Net,
        }
    }
}

/// A sticker to overwrite before any turn is made.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StickerEdit {
    face: FaceName,
    row: usize,
    col: usize,
    value: Sticker,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct DemoConfig {
    size: isize,
    stickers: Vec<StickerEdit>,
    turns: Vec<Turn>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            size: 3,
            stickers: vec![
                StickerEdit {
                    face: FaceName::Left,
                    row: 0,
                    col: 0,
                    value: 10,
                },
                StickerEdit {
                    face: FaceName::Left,
                    row: 2,
                    col: 2,
                    value: 11,
                },
            ],
            turns: vec![Turn::left_right()],
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read the demo configuration {path:?}"))?;
            toml::from_str::<DemoConfig>(&text)
                .wrap_err_with(|| format!("Failed to parse the demo configuration {path:?}"))?
        }
        None => DemoConfig::default(),
    };

    if let Some(size) = cli.size {
        config.size = size;
    }

    debug!("{config:?}");

    let mut cube = Cube::new(config.size)?;

    for edit in &config.stickers {
        cube.set(edit.face, edit.row, edit.col, edit.value)
            .map_err(|e| eyre!("Cannot edit the {} face: {e}", edit.face))?;
    }

    info!("Applying {}", config.turns.iter().join(" "));
    cube.apply_all(&config.turns)?;

    let paint = |sticker: Sticker, text: &str| {
        if !cli.color {
            return text.to_owned();
        }

        match sticker {
            0 => text.white().to_string(),
            1 => text.green().to_string(),
            2 => text.truecolor(255, 140, 0).to_string(),
            3 => text.red().to_string(),
            4 => text.blue().to_string(),
            5 => text.yellow().to_string(),
            _ => text.magenta().to_string(),
        }
    };

    println!("{}", render::render(&cube, cli.layout.into(), paint));

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn negative_size_reaches_the_cube() {
        let cli = Cli::try_parse_from(["nxn_cube", "-n", "-2"]).unwrap();
        assert_eq!(cli.size, Some(-2));

        let cli = Cli::try_parse_from(["nxn_cube", "--size", "-1", "--layout", "net"]).unwrap();
        assert_eq!(cli.size, Some(-1));
        assert!(matches!(cli.layout, super::LayoutArg::Net));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
