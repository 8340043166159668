//! Shared input generation for the Stratum benchmarks.

/// A NUL-terminated ASCII string of `len` content bytes.
pub fn terminated_ascii(len: usize) -> Vec<u8> {
    let mut v: Vec<u8> = (0..len).map(|i| b'a' + (i % 26) as u8).collect();
    v.push(0);
    v
}

/// Decimal texts covering short through full-width i64 values.
pub fn decimal_corpus() -> Vec<Vec<u8>> {
    [
        "0",
        "7",
        "-42",
        "123456",
        "-9876543210",
        "9223372036854775807",
        "-9223372036854775808",
    ]
    .iter()
    .map(|s| {
        let mut v = s.as_bytes().to_vec();
        v.push(0);
        v
    })
    .collect()
}
