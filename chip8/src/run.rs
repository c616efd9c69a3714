use std::time::{Duration, Instant};

use anyhow::anyhow;
use log::{error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chipvm_core::{Chip8, Config};
use chipvm_display::Display;

use crate::keymap::keymap;

pub struct Settings {
    pub program: Vec<u8>,
    /// Nanoseconds per cycle
    pub clock_speed: u64,
    pub scale: u32,
    pub seed: Option<u64>,
    /// Only cycle when asked to
    pub step: bool,
}

pub fn run(settings: Settings) -> anyhow::Result<()> {
    let mut chip8 = Chip8::with_config(Config {
        rng_seed: settings.seed,
        ..Config::default()
    });
    chip8.load_program(&settings.program)?;

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display = Display::new(&sdl, settings.scale).map_err(|e| anyhow!(e))?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    // Set initial timing
    let cycle_time = Duration::from_nanos(settings.clock_speed);
    let mut last_cycle = Instant::now();

    // Whether or not the default clock speed should be respected
    let mut fast_forward = false;
    // Whether the state should be cycled forwards or backwards
    let mut rewind = false;
    // Cycles requested while stepping
    let mut pending_steps: u32 = 0;

    'event: loop {
        // Only redraw when the frame has changed
        if let Some(frame) = chip8.take_frame() {
            display.render(&frame).map_err(|e| anyhow!(e))?;
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat,
                    ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc)?,
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Backspace, _) => rewind = true,
                    (Keycode::Return, _) if !repeat => pending_steps += 1,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc)?,
                    (Keycode::Space, _) => fast_forward = false,
                    (Keycode::Backspace, _) => rewind = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        if rewind {
            chip8.rewind();
        } else if !settings.step || pending_steps > 0 {
            pending_steps = pending_steps.saturating_sub(1);
            match chip8.cycle() {
                Ok(trace) if settings.step => info!("{}", trace),
                Ok(_) => {}
                Err(e) => {
                    error!("halted after {} cycles: {}", chip8.cycles(), e);
                    return Err(e.into());
                }
            }
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = current_time;
    }

    info!("exiting after {} cycles", chip8.cycles());
    Ok(())
}
