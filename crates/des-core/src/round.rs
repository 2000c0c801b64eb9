//! The DES Feistel round function.

use crate::block::permute;
use crate::sbox::substitute;

/// Expansion table E: spreads 32 bits to 48 by duplicating the edge bits of
/// each 4-bit group.
#[rustfmt::skip]
const E: [u8; 48] = [
    32,  1,  2,  3,  4,  5,
     4,  5,  6,  7,  8,  9,
     8,  9, 10, 11, 12, 13,
    12, 13, 14, 15, 16, 17,
    16, 17, 18, 19, 20, 21,
    20, 21, 22, 23, 24, 25,
    24, 25, 26, 27, 28, 29,
    28, 29, 30, 31, 32,  1,
];

/// Permutation P applied to the S-box output.
#[rustfmt::skip]
const P: [u8; 32] = [
    16,  7, 20, 21,
    29, 12, 28, 17,
     1, 15, 23, 26,
     5, 18, 31, 10,
     2,  8, 24, 14,
    32, 27,  3,  9,
    19, 13, 30,  6,
    22, 11,  4, 25,
];

/// The cipher function `f(R, K)`: expand the 32-bit half to 48 bits, XOR
/// with the round subkey, substitute through the S-boxes, permute.
#[inline]
pub(crate) fn feistel(half: u32, subkey: u64) -> u32 {
    let expanded = permute(u64::from(half), 32, &E);
    let substituted = substitute(expanded ^ subkey);
    permute(substituted, 32, &P) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    // Values from the round-1 walkthrough for key 0x133457799BBCDFF1 and
    // plaintext 0x0123456789ABCDEF.
    const R0: u32 = 0xF0AA_F0AA;
    const K1: u64 = 0x1B02_EFFC_7072;

    #[test]
    fn expansion_duplicates_group_edges() {
        assert_eq!(permute(u64::from(R0), 32, &E), 0x7A15_557A_1555);
    }

    #[test]
    fn feistel_matches_walkthrough() {
        assert_eq!(feistel(R0, K1), 0x234A_A9BB);
    }
}
