//! Sample data for presenter tests.

use cyberpet_types::PetRecord;

/// Smallest byte sequence that still looks like a PNG. Presenters only
/// base64 it, so it does not need to decode.
pub const TINY_PNG: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
];

/// `count` numbered battle lines, oldest first: `Turn 1: ...`, `Turn 2: ...`.
pub fn sample_logs(count: usize) -> Vec<String> {
    (1..=count)
        .map(|turn| format!("Turn {}: Hero attacks for {} damage", turn, turn * 3))
        .collect()
}

pub fn sample_player() -> PetRecord {
    PetRecord::builder("Hero")
        .hp(40)
        .mood("happy")
        .field("max_hp", 100)
        .field("gold", 25)
        .build()
}

pub fn sample_enemy() -> PetRecord {
    PetRecord::builder("Slime")
        .hp(30)
        .mood("sad")
        .field("max_hp", 60)
        .build()
}
