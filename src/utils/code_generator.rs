//! Short code generation and validation utilities.
//!
//! Codes are a pure function of the destination URL: the same URL always
//! maps to the same code, so a repeated create overwrites the previous record.

use sha2::{Digest, Sha256};

/// Bitcoin base-58 alphabet (no `0`, `O`, `I`, `l`).
pub const CODE_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Derives the short code for a destination URL.
///
/// # Algorithm
///
/// 1. SHA-256 of the URL bytes
/// 2. The digest read as a big-endian unsigned integer, truncated to its
///    low 64 bits
/// 3. The decimal form of that number, base-58 encoded with the Bitcoin alphabet
///
/// Distinct URLs may collide; there is no collision handling.
///
/// # Examples
///
/// ```ignore
/// let a = generate_code("https://example.com/a");
/// assert_eq!(a, generate_code("https://example.com/a"));
/// ```
pub fn generate_code(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());

    let mut low = [0u8; 8];
    low.copy_from_slice(&digest[digest.len() - 8..]);
    let number = u64::from_be_bytes(low);

    // bs58 defaults to the Bitcoin alphabet; encoding into a String cannot fail.
    bs58::encode(number.to_string().as_bytes()).into_string()
}

/// Returns `true` if `code` is non-empty and drawn only from [`CODE_ALPHABET`].
///
/// Used before building store key patterns so that glob metacharacters
/// (`*`, `?`, `[`) in a path segment cannot widen a delete.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| CODE_ALPHABET.contains(c))
}
