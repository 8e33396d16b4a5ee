//! Private key loading.

use std::path::{Path, PathBuf};

use jsonwebtoken::EncodingKey;
use secrecy::{ExposeSecret, SecretSlice};

use crate::error::{Error, Result};

/// Location of a GitHub App's PEM-encoded RSA private key.
///
/// Only the path is kept. The key bytes are read when a JWT is signed and
/// dropped as soon as the encoding key is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKeyFile {
    path: PathBuf,
}

impl PrivateKeyFile {
    /// Reference a private key file.
    ///
    /// # Errors
    /// Returns [`Error::MissingKeyFile`] if `path` is not an existing file.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(Error::MissingKeyFile(path));
        }
        Ok(Self { path })
    }

    /// Path of the key file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the PEM bytes from disk.
    ///
    /// # Errors
    /// Returns error if the file can no longer be read.
    pub fn read(&self) -> Result<SecretSlice<u8>> {
        std::fs::read(&self.path)
            .map(SecretSlice::from)
            .map_err(|source| Error::ReadKey {
                path: self.path.clone(),
                source,
            })
    }

    /// Read the file and parse it as an RSA signing key.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not a valid RSA PEM.
    pub fn encoding_key(&self) -> Result<EncodingKey> {
        let pem = self.read()?;
        EncodingKey::from_rsa_pem(pem.expose_secret()).map_err(Error::InvalidKey)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_is_rejected() {
        let err = PrivateKeyFile::new("does/not/exist/pem.txt").unwrap_err();
        assert!(matches!(err, Error::MissingKeyFile(_)));
        assert!(err.is_config());
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = PrivateKeyFile::new(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingKeyFile(_)));
    }

    #[test]
    fn test_malformed_pem_fails_on_load() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not a key").unwrap();

        let key = PrivateKeyFile::new(file.path()).unwrap();
        let err = key.encoding_key().unwrap_err();
        assert!(matches!(err, Error::InvalidKey(_)));
    }

    #[test]
    fn test_valid_pem_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/test_key.pem");
        let key = PrivateKeyFile::new(path).unwrap();
        assert_eq!(key.path(), Path::new(path));
        assert!(key.encoding_key().is_ok());
    }
}
