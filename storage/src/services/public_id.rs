use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::{Result, StorageError};

/// Keyed bijective mapping between internal numeric user ids and the opaque
/// tokens the HTTP surface exchanges.
///
/// An id runs through a four-round keyed Feistel permutation of its 64 bits
/// and the result is base64-encoded, so tokens carry no trace of the
/// sequential id underneath and resolve back in O(1) without touching the
/// store. Tokens are always 11 URL-safe characters.
#[derive(Clone)]
pub struct PublicIdCodec {
    keys: [u32; 4],
}

impl PublicIdCodec {
    pub fn new(secret: &str) -> Self {
        let mut seed = fnv1a(secret.as_bytes());
        let mut keys = [0u32; 4];
        for key in &mut keys {
            seed = splitmix64(seed);
            *key = seed as u32;
        }

        Self { keys }
    }

    /// Opaque token for an internal id
    pub fn encode(&self, user_id: i64) -> String {
        let mut left = (user_id as u64 >> 32) as u32;
        let mut right = user_id as u64 as u32;

        for key in self.keys {
            let next = left ^ round(right, key);
            left = right;
            right = next;
        }

        let permuted = (u64::from(left) << 32) | u64::from(right);
        URL_SAFE_NO_PAD.encode(permuted.to_be_bytes())
    }

    /// Resolve a token back to the internal id it encodes
    pub fn decode(&self, token: &str) -> Result<i64> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| StorageError::UnknownUser)?;
        let bytes: [u8; 8] = bytes.try_into().map_err(|_| StorageError::UnknownUser)?;

        let permuted = u64::from_be_bytes(bytes);
        let mut left = (permuted >> 32) as u32;
        let mut right = permuted as u32;

        for key in self.keys.into_iter().rev() {
            let prev = right ^ round(left, key);
            right = left;
            left = prev;
        }

        let id = (u64::from(left) << 32) | u64::from(right);
        Ok(id as i64)
    }
}

fn round(half: u32, key: u32) -> u32 {
    half.wrapping_add(key)
        .wrapping_mul(0x9E37_79B9)
        .rotate_left(13)
        ^ key
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325u64;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn round_trips_every_id() {
        let codec = PublicIdCodec::new("test-secret");
        for id in [1i64, 2, 3, 42, 1_000, 7_777_777, i64::MAX] {
            let token = codec.encode(id);
            assert_eq!(codec.decode(&token).unwrap(), id);
        }
    }

    #[test]
    fn tokens_are_eleven_url_safe_chars() {
        let codec = PublicIdCodec::new("test-secret");
        let token = codec.encode(12345);
        assert_eq!(token.len(), 11);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn distinct_ids_get_distinct_tokens() {
        let codec = PublicIdCodec::new("test-secret");
        let tokens: HashSet<String> = (1..=100).map(|id| codec.encode(id)).collect();
        assert_eq!(tokens.len(), 100);
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        let codec = PublicIdCodec::new("test-secret");
        assert!(matches!(
            codec.decode("not a token!"),
            Err(StorageError::UnknownUser)
        ));
        assert!(matches!(codec.decode(""), Err(StorageError::UnknownUser)));
        // Valid base64 but not 8 bytes underneath.
        assert!(matches!(
            codec.decode("AAAA"),
            Err(StorageError::UnknownUser)
        ));
    }

    #[test]
    fn secret_changes_the_mapping() {
        let a = PublicIdCodec::new("secret-a");
        let b = PublicIdCodec::new("secret-b");
        assert_ne!(a.encode(42), b.encode(42));
    }
}
