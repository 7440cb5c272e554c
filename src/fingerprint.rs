//! SHA-1 fingerprint used for the range lookup.
//!
//! SHA-1 is required by the breach index format, not chosen for strength.
//! The digest is hex-encoded uppercase; the index stores uppercase
//! suffixes, so any other casing would never match.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

/// Length of the hex digest.
pub const FINGERPRINT_LEN: usize = 40;

/// Number of hex characters sent to the range API.
pub const PREFIX_LEN: usize = 5;

/// Uppercase hex SHA-1 of a password.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    hex: String,
}

impl Fingerprint {
    pub fn derive(password: &SecretString) -> Self {
        let digest = Sha1::digest(password.expose_secret().as_bytes());
        Self {
            hex: hex::encode_upper(digest),
        }
    }

    /// Parses an existing 40-char hex digest, normalizing to uppercase.
    ///
    /// Returns `None` for anything that is not exactly 40 hex digits.
    pub fn from_hex(value: &str) -> Option<Self> {
        if value.len() != FINGERPRINT_LEN || !value.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self {
            hex: value.to_ascii_uppercase(),
        })
    }

    /// First 5 characters; the only password-derived value sent over the wire.
    pub fn prefix(&self) -> &str {
        &self.hex[..PREFIX_LEN]
    }

    /// Remaining 35 characters; compared locally only.
    pub fn suffix(&self) -> &str {
        &self.hex[PREFIX_LEN..]
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

// Only the public prefix is printable.
impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({}…)", self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    #[test]
    fn test_fingerprint_reference_digest() {
        let fp = Fingerprint::derive(&secret("password"));
        assert_eq!(fp.as_str(), "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8");
        assert_eq!(fp.prefix(), "5BAA6");
        assert_eq!(fp.suffix(), "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
    }

    #[test]
    fn test_fingerprint_empty_input() {
        let fp = Fingerprint::derive(&secret(""));
        assert_eq!(fp.as_str(), "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709");
    }

    #[test]
    fn test_fingerprint_shape() {
        let fp = Fingerprint::derive(&secret("StrongPass123!"));
        assert_eq!(fp.as_str().len(), FINGERPRINT_LEN);
        assert_eq!(fp.prefix().len(), PREFIX_LEN);
        assert_eq!(fp.suffix().len(), FINGERPRINT_LEN - PREFIX_LEN);
        assert!(!fp.as_str().chars().any(|c| c.is_ascii_lowercase()));
        assert_eq!(format!("{}{}", fp.prefix(), fp.suffix()), fp.as_str());
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let a = Fingerprint::derive(&secret("same input"));
        let b = Fingerprint::derive(&secret("same input"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_hex_normalizes_case() {
        let fp = Fingerprint::from_hex("5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8").unwrap();
        assert_eq!(fp, Fingerprint::derive(&secret("password")));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(Fingerprint::from_hex("").is_none());
        assert!(Fingerprint::from_hex("5BAA6").is_none());
        assert!(Fingerprint::from_hex("ZBAA61E4C9B93F3F0682250B6CF8331B7EE68FD8").is_none());
    }

    #[test]
    fn test_debug_hides_suffix() {
        let fp = Fingerprint::derive(&secret("password"));
        let printed = format!("{:?}", fp);
        assert!(printed.contains("5BAA6"));
        assert!(!printed.contains("1E4C9B93"));
    }
}
