//! Credential bundles and key lookup.
//!
//! A [`Secret`] is handed to the generator fully resolved; nothing here
//! fetches or rotates credentials.

use std::{collections::HashMap, fmt, path::Path};

use bytes::Bytes;

use crate::{config::format, internal_events::CredentialKeyMissing};

/// An opaque mapping from credential key name to raw bytes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret {
    data: HashMap<String, Bytes>,
}

impl Secret {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Bytes> {
        self.data.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Secret
where
    K: Into<String>,
    V: Into<Bytes>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// Values stay out of logs and panic messages.
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.data.keys().collect::<Vec<_>>();
        keys.sort();
        f.debug_struct("Secret").field("keys", &keys).finish()
    }
}

/// Look up `key` in `secret`, returning its value with surrounding whitespace
/// removed.
///
/// A missing secret or key yields an empty string: the destination may well
/// authenticate through means outside of the generated configuration.
pub fn get_from_secret(secret: Option<&Secret>, key: &str) -> String {
    match secret.and_then(|secret| secret.get(key)) {
        Some(value) => String::from_utf8_lossy(value).trim().to_string(),
        None => {
            emit!(CredentialKeyMissing { key });
            String::new()
        }
    }
}

/// Load named secret bundles from a file holding a map of secret name to a
/// map of key to value.
pub fn load_from_path(
    path: &Path,
    format: Option<format::Format>,
) -> Result<HashMap<String, Secret>, Vec<String>> {
    let raw: HashMap<String, HashMap<String, String>> = format::load_from_path(path, format)?;
    Ok(raw
        .into_iter()
        .map(|(name, data)| (name, data.into_iter().collect()))
        .collect())
}
