use crate::constants::FLAG_REGISTER;

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry flag
/// - (i) a 16-bit memory address register
///
/// Timers
/// - 2 8-bit timers (delay & sound)
///     - they count down to zero, once per cycle
///
/// Register indices are the 4-bit `x`/`y` fields of an opcode and so are always 0..F.
/// Arithmetic wraps at 256; deciding whether that was a carry is up to the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    v: [u8; 16],
    i: u16,
    delay_timer: u8,
    sound_timer: u8,
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, register: u8) -> u8 {
        self.v[register as usize]
    }

    pub fn set(&mut self, register: u8, value: u8) {
        self.v[register as usize] = value;
    }

    /// VF
    pub fn flag(&self) -> u8 {
        self.get(FLAG_REGISTER)
    }

    /// VF = 1 if `set` else 0
    pub fn set_flag(&mut self, set: bool) {
        self.set(FLAG_REGISTER, u8::from(set));
    }

    /// All of V0..VF
    pub fn v(&self) -> &[u8; 16] {
        &self.v
    }

    /// Vx += value
    pub fn increment_by(&mut self, register: u8, value: u8) {
        let reg = &mut self.v[register as usize];
        *reg = reg.wrapping_add(value);
    }

    /// Vx = Vy
    pub fn copy(&mut self, x: u8, y: u8) {
        self.v[x as usize] = self.v[y as usize];
    }

    /// Vx |= Vy
    pub fn or(&mut self, x: u8, y: u8) {
        self.v[x as usize] |= self.v[y as usize];
    }

    /// Vx &= Vy
    pub fn and(&mut self, x: u8, y: u8) {
        self.v[x as usize] &= self.v[y as usize];
    }

    /// Vx ^= Vy
    pub fn xor(&mut self, x: u8, y: u8) {
        self.v[x as usize] ^= self.v[y as usize];
    }

    /// Vx + Vy without truncation
    pub fn sum(&self, x: u8, y: u8) -> u16 {
        u16::from(self.v[x as usize]) + u16::from(self.v[y as usize])
    }

    /// Vx - Vy, wrapping
    pub fn difference(&self, x: u8, y: u8) -> u8 {
        self.v[x as usize].wrapping_sub(self.v[y as usize])
    }

    /// Vx >>= 1
    pub fn shift_right(&mut self, register: u8) {
        self.v[register as usize] >>= 1;
    }

    /// Vx <<= 1
    pub fn shift_left(&mut self, register: u8) {
        self.v[register as usize] <<= 1;
    }

    /// Vx > Vy
    pub fn greater_than(&self, x: u8, y: u8) -> bool {
        self.v[x as usize] > self.v[y as usize]
    }

    /// Vx == Vy
    pub fn equal(&self, x: u8, y: u8) -> bool {
        self.v[x as usize] == self.v[y as usize]
    }

    pub fn i(&self) -> u16 {
        self.i
    }

    pub fn set_i(&mut self, value: u16) {
        self.i = value;
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    pub fn set_delay_timer(&mut self, value: u8) {
        self.delay_timer = value;
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }

    pub fn set_sound_timer(&mut self, value: u8) {
        self.sound_timer = value;
    }

    /// Counts both timers down by one, stopping at zero.
    pub fn decay_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}
