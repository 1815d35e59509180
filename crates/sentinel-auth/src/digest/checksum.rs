//! The device store's historical checksum digest.

use sentinel_core::result::AppResult;

use super::PasswordDigest;

/// Non-cryptographic 32-bit string checksum rendered as lowercase hex.
///
/// Folds each UTF-16 code unit of the password into a signed 32-bit
/// accumulator as `acc = ((acc << 5) - acc) + code` with two's-complement
/// wraparound, then renders the absolute value in hex without padding.
/// No salt, collision-prone, trivially searchable: treat the output as a
/// weak equality checksum, never as a password hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecksumDigest;

impl ChecksumDigest {
    /// Create the checksum backend.
    pub fn new() -> Self {
        Self
    }

    fn checksum(password: &str) -> String {
        let mut acc: i32 = 0;
        for code in password.encode_utf16() {
            acc = acc
                .wrapping_shl(5)
                .wrapping_sub(acc)
                .wrapping_add(i32::from(code));
        }
        // i64 widening keeps abs() defined for i32::MIN.
        format!("{:x}", i64::from(acc).abs())
    }
}

impl PasswordDigest for ChecksumDigest {
    fn digest(&self, password: &str) -> AppResult<String> {
        Ok(Self::checksum(password))
    }

    fn verify(&self, password: &str, stored: &str) -> AppResult<bool> {
        Ok(Self::checksum(password) == stored)
    }
}
