//! Arithmetic, flag and drawing invariants checked over generated operands.

use chipvm_core::constants::PROGRAM_START;
use chipvm_core::{Chip8, Config};
use proptest::prelude::*;

const DATA: u16 = 0x300;

/// Loads `code` at the start of the program and `data` at `DATA`.
fn chip8_with(code: &[u8], data: &[u8]) -> Chip8 {
    let mut program = code.to_vec();
    program.resize((DATA - PROGRAM_START) as usize, 0);
    program.extend_from_slice(data);
    let mut chip8 = Chip8::with_config(Config {
        rng_seed: Some(0),
        history: 0,
    });
    chip8.load_program(&program).unwrap();
    chip8
}

fn run(chip8: &mut Chip8, cycles: usize) {
    for _ in 0..cycles {
        chip8.cycle().unwrap();
    }
}

proptest! {
    #[test]
    fn add_immediate_wraps_and_leaves_flag(
        x in 0u8..0xF,
        value in any::<u8>(),
        kk in any::<u8>(),
        flag in any::<u8>(),
    ) {
        let mut chip8 = chip8_with(&[0x6F, flag, 0x60 | x, value, 0x70 | x, kk], &[]);
        run(&mut chip8, 3);
        let registers = &chip8.state().registers;
        prop_assert_eq!(registers.get(x), value.wrapping_add(kk));
        prop_assert_eq!(registers.flag(), flag);
    }

    #[test]
    fn add_registers_carries_past_255(
        x in 0u8..0xF,
        y in 0u8..0xF,
        a in any::<u8>(),
        b in any::<u8>(),
    ) {
        prop_assume!(x != y);
        let mut chip8 = chip8_with(&[0x60 | x, a, 0x60 | y, b, 0x80 | x, (y << 4) | 0x4], &[]);
        run(&mut chip8, 3);
        let sum = u16::from(a) + u16::from(b);
        let registers = &chip8.state().registers;
        prop_assert_eq!(registers.get(x), (sum & 0xFF) as u8);
        prop_assert_eq!(registers.flag(), u8::from(sum > 0xFF));
    }

    #[test]
    fn sub_flags_from_operands(
        x in 0u8..0xF,
        y in 0u8..0xF,
        a in any::<u8>(),
        b in any::<u8>(),
    ) {
        prop_assume!(x != y);
        let mut chip8 = chip8_with(&[0x60 | x, a, 0x60 | y, b, 0x80 | x, (y << 4) | 0x5], &[]);
        run(&mut chip8, 3);
        prop_assert_eq!(chip8.state().registers.get(x), a.wrapping_sub(b));
        prop_assert_eq!(chip8.state().registers.flag(), u8::from(a > b));

        let mut chip8 = chip8_with(&[0x60 | x, a, 0x60 | y, b, 0x80 | x, (y << 4) | 0x7], &[]);
        run(&mut chip8, 3);
        prop_assert_eq!(chip8.state().registers.get(x), b.wrapping_sub(a));
        prop_assert_eq!(chip8.state().registers.flag(), u8::from(b > a));
    }

    #[test]
    fn shifts_flag_the_bit_shifted_out(x in 0u8..0xF, value in any::<u8>()) {
        let mut chip8 = chip8_with(&[0x60 | x, value, 0x80 | x, 0x06], &[]);
        run(&mut chip8, 2);
        prop_assert_eq!(chip8.state().registers.get(x), value >> 1);
        prop_assert_eq!(chip8.state().registers.flag(), value & 0x1);

        let mut chip8 = chip8_with(&[0x60 | x, value, 0x80 | x, 0x0E], &[]);
        run(&mut chip8, 2);
        prop_assert_eq!(chip8.state().registers.get(x), value << 1);
        prop_assert_eq!(chip8.state().registers.flag(), value >> 7);
    }

    #[test]
    fn bcd_digits_rebuild_value(value in any::<u8>()) {
        let mut chip8 = chip8_with(&[0x60, value, 0xA3, 0x00, 0xF0, 0x33], &[]);
        run(&mut chip8, 3);
        let digits = chip8.state().memory.slice(DATA, 3).unwrap();
        prop_assert!(digits.iter().all(|&d| d < 10));
        let rebuilt =
            u16::from(digits[0]) * 100 + u16::from(digits[1]) * 10 + u16::from(digits[2]);
        prop_assert_eq!(rebuilt, u16::from(value));
    }

    #[test]
    fn drawing_twice_restores_frame(
        sprite in prop::collection::vec(any::<u8>(), 1..=15),
        px in any::<u8>(),
        py in any::<u8>(),
        glyph in 0u8..0x10,
        gx in any::<u8>(),
        gy in any::<u8>(),
    ) {
        let n = sprite.len() as u8;
        let code = [
            // Something to collide with: glyph at (gx, gy)
            0x60, glyph, 0xF0, 0x29, 0x61, gx, 0x62, gy, 0xD1, 0x25,
            // The sprite at (px, py), twice
            0xA3, 0x00, 0x61, px, 0x62, py, 0xD1, 0x20 | n, 0xD1, 0x20 | n,
        ];
        let mut chip8 = chip8_with(&code, &sprite);
        run(&mut chip8, 5);
        let background = chip8.frame();
        run(&mut chip8, 5);
        prop_assert_eq!(chip8.frame(), background);
    }

    #[test]
    fn redraw_on_blank_screen_collides_iff_sprite_set(
        sprite in prop::collection::vec(any::<u8>(), 1..=15),
        px in any::<u8>(),
        py in any::<u8>(),
    ) {
        let n = sprite.len() as u8;
        let code = [0xA3, 0x00, 0x61, px, 0x62, py, 0xD1, 0x20 | n, 0xD1, 0x20 | n];
        let mut chip8 = chip8_with(&code, &sprite);
        run(&mut chip8, 4);
        prop_assert_eq!(chip8.state().registers.flag(), 0);
        run(&mut chip8, 1);
        prop_assert!(chip8.frame().iter().all(|&p| p == 0));
        let any_set = sprite.iter().any(|&row| row != 0);
        prop_assert_eq!(chip8.state().registers.flag(), u8::from(any_set));
    }
}
