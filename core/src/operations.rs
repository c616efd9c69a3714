use rand::Rng;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_START, GLYPH_SIZE};
use crate::error::Result;
use crate::frame_buffer::FrameBuffer;
use crate::keypad::Keypad;
use crate::state::State;

// Every operation runs after the program counter has already been moved past the
// instruction, so "skip" is a single further increment and a call saves the address
// of the next instruction.
//
// Where an instruction defines VF, both the result and the flag are worked out from
// the operands before either is written, and VF is written last.

/// clear
pub fn clr(state: &mut State) -> Result<()> {
    state.frame_buffer.clear();
    state.draw_flag = true;
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(state: &mut State) -> Result<()> {
    let address = state.stack.current();
    state.stack.decrement_sp()?;
    state.stack.set_pc(address);
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) -> Result<()> {
    state.stack.set_pc(addr);
    Ok(())
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<()> {
    let return_address = state.stack.pc();
    state.stack.increment_sp()?;
    state.stack.set_current(return_address);
    state.stack.set_pc(addr);
    Ok(())
}

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.stack.increment_pc();
    }
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: u8, kk: u8) -> Result<()> {
    let equal = state.registers.get(x) == kk;
    skip_if(state, equal);
    Ok(())
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: u8, kk: u8) -> Result<()> {
    let not_equal = state.registers.get(x) != kk;
    skip_if(state, not_equal);
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: u8, y: u8) -> Result<()> {
    let equal = state.registers.equal(x, y);
    skip_if(state, equal);
    Ok(())
}

/// Vx = kk
pub fn load(state: &mut State, x: u8, kk: u8) -> Result<()> {
    state.registers.set(x, kk);
    Ok(())
}

/// Vx += kk
/// Overflow wraps and VF is left alone
pub fn add(state: &mut State, x: u8, kk: u8) -> Result<()> {
    state.registers.increment_by(x, kk);
    Ok(())
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) -> Result<()> {
    state.registers.copy(x, y);
    Ok(())
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) -> Result<()> {
    state.registers.or(x, y);
    Ok(())
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) -> Result<()> {
    state.registers.and(x, y);
    Ok(())
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) -> Result<()> {
    state.registers.xor(x, y);
    Ok(())
}

/// Vx += Vy; VF = carry
pub fn addr(state: &mut State, x: u8, y: u8) -> Result<()> {
    let sum = state.registers.sum(x, y);
    state.registers.set(x, (sum & 0xFF) as u8);
    state.registers.set_flag(sum > 0xFF);
    Ok(())
}

/// Vx -= Vy; VF = Vx > Vy
pub fn sub(state: &mut State, x: u8, y: u8) -> Result<()> {
    let no_borrow = state.registers.greater_than(x, y);
    let difference = state.registers.difference(x, y);
    state.registers.set(x, difference);
    state.registers.set_flag(no_borrow);
    Ok(())
}

/// Vx >>= 1; VF = the bit shifted out
pub fn shr(state: &mut State, x: u8) -> Result<()> {
    let lsb = state.registers.get(x) & 0x1;
    state.registers.shift_right(x);
    state.registers.set_flag(lsb == 0x1);
    Ok(())
}

/// Vx = Vy - Vx; VF = Vy > Vx
pub fn subn(state: &mut State, x: u8, y: u8) -> Result<()> {
    let no_borrow = state.registers.greater_than(y, x);
    let difference = state.registers.difference(y, x);
    state.registers.set(x, difference);
    state.registers.set_flag(no_borrow);
    Ok(())
}

/// Vx <<= 1; VF = the bit shifted out
pub fn shl(state: &mut State, x: u8) -> Result<()> {
    let msb = state.registers.get(x) >> 7;
    state.registers.shift_left(x);
    state.registers.set_flag(msb == 0x1);
    Ok(())
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: u8, y: u8) -> Result<()> {
    let equal = state.registers.equal(x, y);
    skip_if(state, !equal);
    Ok(())
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) -> Result<()> {
    state.registers.set_i(addr);
    Ok(())
}

/// PC = V0 + addr
pub fn jumpi(state: &mut State, addr: u16) -> Result<()> {
    state
        .stack
        .set_pc(addr + u16::from(state.registers.get(0x0)));
    Ok(())
}

/// Vx = rand_byte & kk
pub fn rand(state: &mut State, rng: &mut impl Rng, x: u8, kk: u8) -> Result<()> {
    let rand_byte: u8 = rng.gen();
    state.registers.set(x, rand_byte & kk);
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n at position x, y on the FrameBuffer with wrapping.
/// Sets VF if any pixels were erased
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) -> Result<()> {
    let origin_x = state.registers.get(x) as usize;
    let origin_y = state.registers.get(y) as usize;
    let sprite = state.memory.slice(state.registers.i(), n as usize)?;

    let mut collision = false;
    for (row, byte) in sprite.iter().enumerate() {
        let py = (origin_y + row) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            if (byte >> (7 - bit)) & 0x1 == 0 {
                continue;
            }
            let px = (origin_x + bit) % DISPLAY_WIDTH;
            collision |= state.frame_buffer.set_pixel(FrameBuffer::index(px, py));
        }
    }

    state.registers.set_flag(collision);
    state.draw_flag = true;
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, keypad: &Keypad, x: u8) -> Result<()> {
    let pressed = keypad.is_pressed(state.registers.get(x))?;
    skip_if(state, pressed);
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, keypad: &Keypad, x: u8) -> Result<()> {
    let pressed = keypad.is_pressed(state.registers.get(x))?;
    skip_if(state, !pressed);
    Ok(())
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) -> Result<()> {
    let delay = state.registers.delay_timer();
    state.registers.set(x, delay);
    Ok(())
}

/// await keypress for Vx
/// With nothing pressed the pc is stepped back so this runs again next cycle
pub fn keyd(state: &mut State, keypad: &Keypad, x: u8) -> Result<()> {
    match keypad.first_pressed() {
        Some(key) => state.registers.set(x, key),
        None => state.stack.decrement_pc(),
    }
    Ok(())
}

/// DT = Vx
pub fn loads(state: &mut State, x: u8) -> Result<()> {
    let value = state.registers.get(x);
    state.registers.set_delay_timer(value);
    Ok(())
}

/// ST = Vx
pub fn ld(state: &mut State, x: u8) -> Result<()> {
    let value = state.registers.get(x);
    state.registers.set_sound_timer(value);
    Ok(())
}

/// I += Vx
pub fn addi(state: &mut State, x: u8) -> Result<()> {
    let i = state
        .registers
        .i()
        .wrapping_add(u16::from(state.registers.get(x)));
    state.registers.set_i(i);
    Ok(())
}

/// I = FONT_START + Vx * 5
/// Set I to the memory address of the glyph for Vx
pub fn ldspr(state: &mut State, x: u8) -> Result<()> {
    let glyph = u16::from(state.registers.get(x)) * GLYPH_SIZE;
    state.registers.set_i(FONT_START + glyph);
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(state: &mut State, x: u8) -> Result<()> {
    let value = state.registers.get(x);
    let digits = [value / 100, value / 10 % 10, value % 10];
    state
        .memory
        .slice_mut(state.registers.i(), digits.len())?
        .copy_from_slice(&digits);
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &mut State, x: u8) -> Result<()> {
    let count = x as usize + 1;
    state
        .memory
        .slice_mut(state.registers.i(), count)?
        .copy_from_slice(&state.registers.v()[..count]);
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &mut State, x: u8) -> Result<()> {
    let values = state.memory.slice(state.registers.i(), x as usize + 1)?;
    for (register, &value) in values.iter().enumerate() {
        state.registers.set(register as u8, value);
    }
    Ok(())
}
