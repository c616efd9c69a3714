//! Whole programs run through the public interface.

use chipvm_core::constants::{FONT_START, PROGRAM_START};
use chipvm_core::{Chip8, Config, Error};

fn chip8_running(program: &[u8], cycles: usize) -> Chip8 {
    let mut chip8 = Chip8::with_config(Config {
        rng_seed: Some(0x5EED),
        ..Config::default()
    });
    chip8.load_program(program).unwrap();
    for _ in 0..cycles {
        chip8.cycle().unwrap();
    }
    chip8
}

#[test]
fn test_glyph_address_for_loaded_digit() {
    // ld v0, 5; ld f, v0
    let chip8 = chip8_running(&[0x60, 0x05, 0xF0, 0x29], 2);
    let registers = &chip8.state().registers;
    assert_eq!(registers.get(0x0), 5);
    assert_eq!(registers.i(), FONT_START + 25);
}

#[test]
fn test_call_and_return() {
    // 0x200 call 0x206
    // 0x202 ld v1, 1
    // 0x204 jp 0x204
    // 0x206 ld v2, 2
    // 0x208 ret
    let program = [0x22, 0x06, 0x61, 0x01, 0x12, 0x04, 0x62, 0x02, 0x00, 0xEE];
    let mut chip8 = chip8_running(&program, 2);
    assert_eq!(chip8.state().stack.sp(), 1);
    assert_eq!(chip8.state().stack.pc(), 0x208);

    chip8.cycle().unwrap();
    assert_eq!(chip8.state().stack.sp(), 0);
    assert_eq!(chip8.state().stack.pc(), 0x202);

    chip8.cycle().unwrap();
    assert_eq!(chip8.state().registers.get(0x1), 1);
    assert_eq!(chip8.state().registers.get(0x2), 2);
}

#[test]
fn test_nested_calls_overflow() {
    // call 0x200, forever
    let mut chip8 = chip8_running(&[0x22, 0x00], 15);
    assert_eq!(chip8.state().stack.sp(), 15);
    assert!(matches!(chip8.cycle(), Err(Error::StackOverflow { .. })));
}

#[test]
fn test_key_wait_polls_every_cycle() {
    // ld v7, k; ld v8, 1
    let mut chip8 = chip8_running(&[0xF7, 0x0A, 0x68, 0x01], 0);
    for _ in 0..10 {
        let trace = chip8.cycle().unwrap();
        assert_eq!(trace.pc, PROGRAM_START);
        assert_eq!(trace.next_pc, PROGRAM_START);
    }
    chip8.key_press(0xC).unwrap();
    chip8.key_press(0xD).unwrap();
    chip8.cycle().unwrap();
    chip8.cycle().unwrap();
    assert_eq!(chip8.state().registers.get(0x7), 0xC);
    assert_eq!(chip8.state().registers.get(0x8), 1);
}

#[test]
fn test_skip_on_key() {
    // ld v0, 0xA; skp v0; ld v1, 1; ld v2, 2
    let program = [0x60, 0x0A, 0xE0, 0x9E, 0x61, 0x01, 0x62, 0x02];
    let mut chip8 = Chip8::new();
    chip8.load_program(&program).unwrap();
    chip8.key_press(0xA).unwrap();
    for _ in 0..3 {
        chip8.cycle().unwrap();
    }
    assert_eq!(chip8.state().registers.get(0x1), 0);
    assert_eq!(chip8.state().registers.get(0x2), 2);
}

#[test]
fn test_store_and_read_registers() {
    // ld v0..v2, 1..3; ld i, 0x300; ld [i], v2; ld v0, 0; ld v1, 0; ld v2, 0; ld v2, [i]
    let program = [
        0x60, 0x01, 0x61, 0x02, 0x62, 0x03, 0xA3, 0x00, 0xF2, 0x55, 0x60, 0x00, 0x61, 0x00,
        0x62, 0x00, 0xF2, 0x65,
    ];
    let chip8 = chip8_running(&program, 9);
    let state = chip8.state();
    assert_eq!(state.memory.slice(0x300, 3).unwrap(), &[1, 2, 3]);
    assert_eq!(state.registers.v()[0..3], [1, 2, 3]);
}

#[test]
fn test_bcd_of_register() {
    // ld v4, 156; ld i, 0x300; ld b, v4
    let chip8 = chip8_running(&[0x64, 156, 0xA3, 0x00, 0xF4, 0x33], 3);
    assert_eq!(chip8.state().memory.slice(0x300, 3).unwrap(), &[1, 5, 6]);
}

#[test]
fn test_draw_digit_then_erase() {
    // ld v0, 0xA; ld f, v0; drw v1, v1, 5; drw v1, v1, 5
    let program = [0x60, 0x0A, 0xF0, 0x29, 0xD1, 0x15, 0xD1, 0x15];
    let mut chip8 = chip8_running(&program, 3);
    let drawn = chip8.take_frame().unwrap();
    // "A" starts with a full row of 4
    assert_eq!(drawn[0..5], [1, 1, 1, 1, 0]);
    assert_eq!(chip8.state().registers.flag(), 0);

    chip8.cycle().unwrap();
    assert!(chip8.take_frame().unwrap().iter().all(|&p| p == 0));
    assert_eq!(chip8.state().registers.flag(), 1);
}

#[test]
fn test_oversized_program_rejected() {
    let mut chip8 = Chip8::new();
    let program = vec![0xFF; 4096 - PROGRAM_START as usize + 2];
    assert!(matches!(
        chip8.load_program(&program),
        Err(Error::ProgramTooLarge {
            size: 0xE02,
            capacity: 0xE00
        })
    ));
}

#[test]
fn test_undefined_opcodes_are_skipped() {
    // 0x0123 (machine code routine), 0xE1FF, 0xF1FF, then ld v1, 1
    let program = [0x01, 0x23, 0xE1, 0xFF, 0xF1, 0xFF, 0x61, 0x01];
    let chip8 = chip8_running(&program, 4);
    assert_eq!(chip8.state().registers.get(0x1), 1);
    assert_eq!(chip8.state().stack.pc(), 0x208);
}

#[test]
fn test_random_is_seeded() {
    // rnd v1, 0xFF; rnd v2, 0xFF
    let program = [0xC1, 0xFF, 0xC2, 0xFF];
    let a = chip8_running(&program, 2);
    let b = chip8_running(&program, 2);
    assert_eq!(a.state().registers.v(), b.state().registers.v());
}
