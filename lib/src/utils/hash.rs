use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::{DEFAULT_DIGEST_BYTES, Error, Result};

use blake3::Hasher as Blake3Hasher;
use hex::encode;
use ring::digest::{Context as RingContext, Digest, SHA256, digest as ring_digest};
use serde::{Deserialize, Serialize};

/// Digest primitive used to bind each node to its predecessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Blake3,
}

impl HashAlgorithm {
    pub fn from_name(name: &str) -> Result<Self> {
        return match name.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "blake3" => Ok(Self::Blake3),
            other => Err(Error::DigestFailure(format!("unsupported digest algorithm `{}`", other))),
        };
    }

    pub fn name(&self) -> &'static str {
        return match self {
            Self::Sha256 => "SHA256",
            Self::Blake3 => "BLAKE3",
        };
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        return Self::from_name(s);
    }
}

impl Display for HashAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        return write!(f, "{}", self.name());
    }
}

#[inline]
pub fn hash(algorithm: HashAlgorithm, data: &[u8]) -> [u8; DEFAULT_DIGEST_BYTES] {
    return hash_parts(algorithm, &[data]);
}

/// Hashes the concatenation of `parts` without materialising it.
#[inline]
pub fn hash_parts(algorithm: HashAlgorithm, parts: &[&[u8]]) -> [u8; DEFAULT_DIGEST_BYTES] {
    match algorithm {
        HashAlgorithm::Blake3 => {
            let mut hasher: Blake3Hasher = Blake3Hasher::new();
            for part in parts {
                hasher.update(part);
            }
            *hasher.finalize().as_bytes()
        }
        HashAlgorithm::Sha256 => {
            // Single-part input skips the streaming context.
            let result: Digest = if let [single] = parts {
                ring_digest(&SHA256, single)
            } else {
                let mut context: RingContext = RingContext::new(&SHA256);
                for part in parts {
                    context.update(part);
                }
                context.finish()
            };
            let mut hash_bytes: [u8; DEFAULT_DIGEST_BYTES] = [0u8; DEFAULT_DIGEST_BYTES];
            hash_bytes.copy_from_slice(result.as_ref());
            hash_bytes
        }
    }
}

/// Lowercase hex digest of `data`, two characters per byte.
#[inline]
pub fn digest(algorithm: HashAlgorithm, data: &[u8]) -> String {
    return encode(hash(algorithm, data));
}

#[inline]
pub fn digest_parts(algorithm: HashAlgorithm, parts: &[&[u8]]) -> String {
    return encode(hash_parts(algorithm, parts));
}
