use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use log::info;

use chipvm_core::CLOCK_SPEED;

mod demo;
mod keymap;
mod run;

/// Run a Chip-8 program in a window.
///
/// Keys 1234/QWER/ASDF/ZXCV are the keypad. Hold Space to fast-forward and
/// Backspace to rewind; Escape quits.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// ROM file to run
    #[arg(short, long, conflicts_with = "test")]
    rom: Option<PathBuf>,

    /// Run the built-in demo program instead of a ROM
    #[arg(short, long)]
    test: bool,

    /// Run one cycle per press of Return, logging each one
    #[arg(short, long)]
    step: bool,

    /// Nanoseconds per CPU cycle
    #[arg(long, default_value_t = CLOCK_SPEED)]
    clock_speed: u64,

    /// Seed for the random number instruction
    #[arg(long)]
    seed: Option<u64>,

    /// Window pixels per Chip-8 pixel
    #[arg(long, default_value_t = 10)]
    scale: u32,
}

fn read_rom(path: &Path) -> anyhow::Result<Vec<u8>> {
    let file = File::open(path).with_context(|| format!("unable to open {}", path.display()))?;
    let mut program = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut program)
        .with_context(|| format!("unable to read {}", path.display()))?;
    Ok(program)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let program = match (&args.rom, args.test) {
        (Some(path), _) => read_rom(path)?,
        (None, true) => demo::DEMO.to_vec(),
        (None, false) => bail!("expected a ROM file (--rom <path>) or --test"),
    };
    if program.is_empty() {
        bail!("ROM is empty");
    }

    info!("starting with {} byte ROM", program.len());
    run::run(run::Settings {
        program,
        clock_speed: args.clock_speed,
        scale: args.scale,
        seed: args.seed,
        step: args.step,
    })
}
