//! Block representation helpers.

/// DES block of 64 bits.
pub type Block = u64;

/// Reorders bits of `value` according to a FIPS 46-3 table.
///
/// Table entries are 1-based bit positions counted from the most significant
/// bit of a `width`-bit value, per the DES numbering convention. The result
/// holds `table.len()` bits, right-aligned.
#[inline]
pub(crate) fn permute(value: u64, width: u32, table: &[u8]) -> u64 {
    let mut out = 0;
    for &pos in table {
        out = (out << 1) | ((value >> (width - u32::from(pos))) & 1);
    }
    out
}
