//! DES key schedule and single-block encryption/decryption.

use crate::block::{permute, Block};
use crate::key::{DesKey, Subkeys};
use crate::round::feistel;

/// Initial permutation IP.
#[rustfmt::skip]
const IP: [u8; 64] = [
    58, 50, 42, 34, 26, 18, 10,  2,
    60, 52, 44, 36, 28, 20, 12,  4,
    62, 54, 46, 38, 30, 22, 14,  6,
    64, 56, 48, 40, 32, 24, 16,  8,
    57, 49, 41, 33, 25, 17,  9,  1,
    59, 51, 43, 35, 27, 19, 11,  3,
    61, 53, 45, 37, 29, 21, 13,  5,
    63, 55, 47, 39, 31, 23, 15,  7,
];

/// Final permutation IP⁻¹.
#[rustfmt::skip]
const FP: [u8; 64] = [
    40,  8, 48, 16, 56, 24, 64, 32,
    39,  7, 47, 15, 55, 23, 63, 31,
    38,  6, 46, 14, 54, 22, 62, 30,
    37,  5, 45, 13, 53, 21, 61, 29,
    36,  4, 44, 12, 52, 20, 60, 28,
    35,  3, 43, 11, 51, 19, 59, 27,
    34,  2, 42, 10, 50, 18, 58, 26,
    33,  1, 41,  9, 49, 17, 57, 25,
];

/// Permuted choice 1: selects the 56 key bits, dropping parity.
#[rustfmt::skip]
const PC1: [u8; 56] = [
    57, 49, 41, 33, 25, 17,  9,
     1, 58, 50, 42, 34, 26, 18,
    10,  2, 59, 51, 43, 35, 27,
    19, 11,  3, 60, 52, 44, 36,
    63, 55, 47, 39, 31, 23, 15,
     7, 62, 54, 46, 38, 30, 22,
    14,  6, 61, 53, 45, 37, 29,
    21, 13,  5, 28, 20, 12,  4,
];

/// Permuted choice 2: selects 48 subkey bits from the rotated halves.
#[rustfmt::skip]
const PC2: [u8; 48] = [
    14, 17, 11, 24,  1,  5,
     3, 28, 15,  6, 21, 10,
    23, 19, 12,  4, 26,  8,
    16,  7, 27, 20, 13,  2,
    41, 52, 31, 37, 47, 55,
    30, 40, 51, 45, 33, 48,
    44, 49, 39, 56, 34, 53,
    46, 42, 50, 36, 29, 32,
];

/// Left-rotation amounts per round; 1 for rounds 1, 2, 9, 16, else 2.
const SHIFTS: [u32; 16] = [1, 1, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 1];

const HALF28_MASK: u64 = 0x0FFF_FFFF;

fn rotate28(half: u64, amount: u32) -> u64 {
    ((half << amount) | (half >> (28 - amount))) & HALF28_MASK
}

/// Derives the 16 round subkeys from a key.
///
/// PC-1 drops the parity bits and splits the result into two 28-bit halves;
/// each round rotates both halves left by the scheduled amount and PC-2
/// selects the 48-bit subkey from the concatenation.
pub fn derive_subkeys(key: &DesKey) -> Subkeys {
    let key56 = permute(key.0, 64, &PC1);
    let mut c = key56 >> 28;
    let mut d = key56 & HALF28_MASK;

    let mut subkeys = [0u64; 16];
    for (subkey, &shift) in subkeys.iter_mut().zip(SHIFTS.iter()) {
        c = rotate28(c, shift);
        d = rotate28(d, shift);
        *subkey = permute((c << 28) | d, 56, &PC2);
    }

    Subkeys(subkeys)
}

fn rounds(block: Block, subkeys: impl Iterator<Item = u64>) -> Block {
    let permuted = permute(block, 64, &IP);
    let mut left = (permuted >> 32) as u32;
    let mut right = permuted as u32;

    for subkey in subkeys {
        let next_right = left ^ feistel(right, subkey);
        left = right;
        right = next_right;
    }

    // Preoutput swaps the halves relative to the round pattern.
    let preoutput = (u64::from(right) << 32) | u64::from(left);
    permute(preoutput, 64, &FP)
}

/// Encrypts a single 64-bit block with pre-derived subkeys.
pub fn encrypt_block(block: Block, subkeys: &Subkeys) -> Block {
    rounds(block, subkeys.0.iter().copied())
}

/// Decrypts a single 64-bit block with pre-derived subkeys.
///
/// Identical round structure with the subkeys consumed in reverse order,
/// which exactly inverts encryption in a Feistel network.
pub fn decrypt_block(block: Block, subkeys: &Subkeys) -> Block {
    rounds(block, subkeys.0.iter().rev().copied())
}

/// DES engine holding one key's derived schedule.
///
/// The schedule is computed eagerly at construction and never mutated, so a
/// shared instance is safe to use from multiple threads without
/// coordination. Both operations are pure: fixed table lookups and bit
/// operations, no I/O, no per-call state.
#[derive(Clone, Copy, Debug)]
pub struct Des {
    subkeys: Subkeys,
}

impl Des {
    /// Builds an engine for `key`, deriving the round subkeys.
    pub fn new<K: Into<DesKey>>(key: K) -> Self {
        Self {
            subkeys: derive_subkeys(&key.into()),
        }
    }

    /// Encrypts one 64-bit block.
    #[inline]
    pub fn encrypt(&self, block: Block) -> Block {
        encrypt_block(block, &self.subkeys)
    }

    /// Decrypts one 64-bit block.
    #[inline]
    pub fn decrypt(&self, block: Block) -> Block {
        decrypt_block(block, &self.subkeys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // Classic FIPS worked example.
    const KAT_KEY: u64 = 0x1334_5779_9BBC_DFF1;
    const KAT_PLAIN: u64 = 0x0123_4567_89AB_CDEF;
    const KAT_CIPHER: u64 = 0x85E8_1354_0F0A_B405;

    #[test]
    fn encrypt_matches_known_answer() {
        let des = Des::new(KAT_KEY);
        assert_eq!(des.encrypt(KAT_PLAIN), KAT_CIPHER);
    }

    #[test]
    fn decrypt_matches_known_answer() {
        let des = Des::new(KAT_KEY);
        assert_eq!(des.decrypt(KAT_CIPHER), KAT_PLAIN);
    }

    #[test]
    fn zero_key_known_answer() {
        // NBS vector for the all-zero key (parity-adjusted 0x0101...01).
        let des = Des::new(0x0101_0101_0101_0101u64);
        assert_eq!(des.encrypt(0), 0x8CA6_4DE9_C1B1_23A7);
    }

    #[test]
    fn parity_bits_are_ignored() {
        // Keys differing only in parity bits yield the same schedule.
        let stripped = Des::new(0u64);
        let with_parity = Des::new(0x0101_0101_0101_0101u64);
        for block in [0u64, KAT_PLAIN, u64::MAX] {
            assert_eq!(stripped.encrypt(block), with_parity.encrypt(block));
        }
    }

    #[test]
    fn first_subkey_matches_walkthrough() {
        let subkeys = derive_subkeys(&DesKey(KAT_KEY));
        assert_eq!(subkeys.get(0), 0x1B02_EFFC_7072);
        assert_eq!(subkeys.get(15), 0xCB3D_8B0E_17F5);
    }

    #[test]
    fn schedule_is_deterministic() {
        let a = Des::new(KAT_KEY);
        let b = Des::new(KAT_KEY);
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let block: u64 = rng.gen();
            assert_eq!(a.encrypt(block), b.encrypt(block));
        }
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let des = Des::new(rng.gen::<u64>());
            let block: u64 = rng.gen();
            assert_eq!(des.decrypt(des.encrypt(block)), block);
            assert_eq!(des.encrypt(des.decrypt(block)), block);
        }
    }

    #[test]
    fn single_bit_flip_avalanches() {
        let des = Des::new(KAT_KEY);
        let base = des.encrypt(KAT_PLAIN);
        let flipped = des.encrypt(KAT_PLAIN ^ 1);
        let changed = (base ^ flipped).count_ones();
        // Qualitative check only: roughly half the bits should change.
        assert!((16..=48).contains(&changed), "only {changed} bits changed");
    }
}
