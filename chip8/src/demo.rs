/// A small program that writes the 16 font glyphs across the screen, waits for a key,
/// then starts over.
///
/// ```text
/// 0x200  ld v0, 0       digit
/// 0x202  ld v1, 0       x
/// 0x204  ld v2, 0       y
/// 0x206  ld f, v0
/// 0x208  drw v1, v2, 5
/// 0x20A  add v0, 1
/// 0x20C  add v1, 8
/// 0x20E  sne v1, 64
/// 0x210  call 0x220
/// 0x212  se v0, 16
/// 0x214  jp 0x206
/// 0x216  ld v0, k
/// 0x218  cls
/// 0x21A  jp 0x200
/// 0x21C
/// 0x220  ld v1, 0       next row
/// 0x222  add v2, 8
/// 0x224  ret
/// ```
pub const DEMO: [u8; 38] = [
    0x60, 0x00, 0x61, 0x00, 0x62, 0x00, 0xF0, 0x29, 0xD1, 0x25, 0x70, 0x01, 0x71, 0x08, 0x41,
    0x40, 0x22, 0x20, 0x30, 0x10, 0x12, 0x06, 0xF0, 0x0A, 0x00, 0xE0, 0x12, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x61, 0x00, 0x72, 0x08, 0x00, 0xEE,
];
