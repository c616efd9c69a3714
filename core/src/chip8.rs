use std::collections::VecDeque;
use std::io::Read;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::constants::KEY_COUNT;
use crate::error::Result;
use crate::frame_buffer::Frame;
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::state::State;
use crate::trace::Trace;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - `previous_states` for rewinding
///  - `keypad` with public interfaces for manipulating it
///
/// Supplies interfaces for:
/// - loading programs
/// - pressing and releasing keys
/// - advancing and reversing the CPU
/// - inspecting its frame buffer for rendering by some display
///
/// Nothing here talks to a display or keyboard. Whatever drives the Chip-8 calls
/// `cycle` as often as it likes, copying key state in and frames out in between.
pub struct Chip8 {
    state: State,
    previous_states: VecDeque<State>,
    history: usize,
    keypad: Keypad,
    rng: StdRng,
    cycles: u64,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Chip8 {
            state: State::new(),
            previous_states: VecDeque::with_capacity(config.history),
            history: config.history,
            keypad: Keypad::new(),
            rng,
            cycles: 0,
        }
    }

    /// Copy a program into memory at `PROGRAM_START`
    ///
    /// # Arguments
    /// * `program` the raw bytes of a ROM
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        self.state.memory.load_program(program)?;
        debug!("loaded {} byte program", program.len());
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut impl Read) -> Result<()> {
        let mut program = Vec::new();
        reader.read_to_end(&mut program)?;
        self.load_program(&program)
    }

    /// Returns the current frame if it changed since it was last taken
    pub fn take_frame(&mut self) -> Option<Frame> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.frame())
        } else {
            None
        }
    }

    /// Returns the current frame
    pub fn frame(&self) -> Frame {
        self.state.frame_buffer.snapshot()
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) -> Result<()> {
        self.keypad.press(key)
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) -> Result<()> {
        self.keypad.release(key)
    }

    /// Replace the pressed status of every key
    pub fn set_keys(&mut self, keys: [bool; KEY_COUNT]) {
        self.keypad.set_all(keys);
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Number of cycles run so far
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Advances the CPU by a single cycle
    /// - fetches the opcode at the pc and moves the pc past it
    /// - decodes and executes it
    /// - counts both timers down
    ///
    /// If anything fails the state is left exactly as it was before the cycle.
    pub fn cycle(&mut self) -> Result<Trace> {
        let mut state = self.state;

        let pc = state.stack.pc();
        let op = Self::get_op(&state, pc)?;
        state.stack.increment_pc();
        Instruction::decode(op).execute(&mut state, &self.keypad, &mut self.rng)?;
        state.registers.decay_timers();

        let previous = std::mem::replace(&mut self.state, state);
        self.save_state(previous);
        self.cycles += 1;

        let trace = Trace {
            cycle: self.cycles,
            pc,
            opcode: op,
            next_pc: self.state.stack.pc(),
            i: self.state.registers.i(),
            sp: self.state.stack.sp(),
        };
        trace!("{}", trace);
        Ok(trace)
    }

    /// Reverses the CPU by a single cycle if possible
    /// - if there are previous_states, pops the last one and restores it
    ///
    /// Returns whether anything was restored
    pub fn rewind(&mut self) -> bool {
        match self.previous_states.pop_front() {
            Some(state) => {
                self.state = state;
                // Whatever is on screen belongs to the future now
                self.state.draw_flag = true;
                self.cycles = self.cycles.saturating_sub(1);
                debug!("rewound to cycle {}", self.cycles);
                true
            }
            None => false,
        }
    }

    /// Puts a state in previous_states
    /// - if there are already `history` saved then the oldest is dropped
    fn save_state(&mut self, state: State) {
        if self.history == 0 {
            return;
        }
        if self.previous_states.len() == self.history {
            self.previous_states.pop_back();
        }
        self.previous_states.push_front(state);
    }

    /// Gets the opcode at `pc`.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(state: &State, pc: u16) -> Result<Opcode> {
        let high = state.memory.read(pc)?;
        let low = state.memory.read(pc.wrapping_add(1))?;
        Ok(Opcode::from_bytes(high, low))
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
