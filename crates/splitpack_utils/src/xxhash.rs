use xxhash_rust::xxh3::xxh3_64;

/// Hex encoded xxh3 digest, used for content-addressed file names.
pub fn xxhash_hex(input: &[u8]) -> String {
  format!("{:016x}", xxh3_64(input))
}

/// The first `len` characters of [`xxhash_hex`], `len` is clamped to the digest size.
pub fn short_hash(input: &[u8], len: usize) -> String {
  let mut hash = xxhash_hex(input);
  hash.truncate(len.min(hash.len()));
  hash
}

#[test]
fn test_short_hash() {
  let full = xxhash_hex(b"hello");
  assert_eq!(full.len(), 16);
  assert_eq!(short_hash(b"hello", 8), full[..8]);
  assert_eq!(short_hash(b"hello", 64), full);
  assert_ne!(short_hash(b"hello", 8), short_hash(b"hello!", 8));
}
