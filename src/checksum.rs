//! Content hashing for resource URLs.
//!
//! A hashed resource URL carries a `#<digest>` fragment where the digest is the
//! base64-encoded SHA-2 hash of the file the URL points to. Browsers ignore the fragment
//! when fetching, but it changes whenever the file content changes, which makes it usable
//! as a cache buster and as input for subresource integrity checks.
//!
//! File access goes through the [`FileReader`] trait so that callers can serve bytes from
//! somewhere other than the local file system (embedded assets, test fixtures).

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::core::ResourceError;

/// Hash algorithms accepted for resource URL hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HashAlgorithm {
    Sha256,
    #[default]
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Hash `data` and return the base64-encoded (standard alphabet, padded) digest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use webresource::checksum::HashAlgorithm;
    ///
    /// let digest = HashAlgorithm::Sha256.digest_base64(b"");
    /// assert_eq!(digest, "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=");
    /// ```
    pub fn digest_base64(&self, data: &[u8]) -> String {
        let digest = match self {
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha384 => Sha384::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
        };
        base64::engine::general_purpose::STANDARD.encode(digest)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(ResourceError::UnsupportedAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = ResourceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HashAlgorithm> for String {
    fn from(algorithm: HashAlgorithm) -> Self {
        algorithm.as_str().to_string()
    }
}

/// Source of raw resource bytes, keyed by absolute path.
pub trait FileReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads resource files from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// Read `path` through `reader` and hash its content with `algorithm`.
pub fn file_digest(
    reader: &dyn FileReader,
    path: &Path,
    algorithm: HashAlgorithm,
) -> Result<String, ResourceError> {
    let data = reader.read(path).map_err(|source| ResourceError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Hashing {} ({} bytes) with {}", path.display(), data.len(), algorithm);
    Ok(algorithm.digest_base64(&data))
}
