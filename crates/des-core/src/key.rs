//! Key types for DES.

/// DES key wrapper.
///
/// 56 of the 64 bits are key material; every eighth bit is conventionally a
/// parity bit and is ignored by the key schedule (PC-1 discards it), never
/// validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesKey(pub u64);

impl From<u64> for DesKey {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<[u8; 8]> for DesKey {
    fn from(value: [u8; 8]) -> Self {
        Self(u64::from_be_bytes(value))
    }
}

/// Derived round-key schedule: 16 subkeys of 48 bits each, right-aligned.
///
/// A pure deterministic function of the key, computed once at engine
/// construction and immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subkeys(pub [u64; 16]);

impl Subkeys {
    /// Returns the subkey for the requested round (0..=15).
    #[inline]
    pub fn get(&self, round: usize) -> u64 {
        self.0[round]
    }
}
