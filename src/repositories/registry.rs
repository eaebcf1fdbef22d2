// src/repositories/registry.rs - In-memory short id allocation
use std::collections::HashMap;

use log::{debug, info};
#[cfg(test)]
use mockall::automock;
use parking_lot::Mutex;

use crate::utils::encode_base62;

#[cfg_attr(test, automock)]
pub trait RegistryTrait: Send + Sync {
    /// Returns the short id for a URL, minting a new one on first sight
    ///
    /// ### Arguments
    /// * `url` - An already validated absolute http/https URL
    ///
    /// ### Returns
    /// * `String` - The id previously assigned to `url`, or the base62
    ///   encoding of the next ordinal when `url` is new
    fn create(&self, url: &str) -> String;

    /// Looks up the URL a short id was minted for
    ///
    /// ### Arguments
    /// * `id` - An already validated alphanumeric id
    ///
    /// ### Returns
    /// * `Option<String>` - The URL exactly as it was passed to `create`,
    ///   or `None` if the id was never minted
    fn resolve(&self, id: &str) -> Option<String>;
}

#[derive(Debug, Default)]
struct RegistryState {
    /// id -> url
    forward: HashMap<String, String>,
    /// url -> id, for deduplication
    reverse: HashMap<String, String>,
    /// Last assigned ordinal, 0 before the first mint
    last_id: u64,
}

/// Process-wide bidirectional mapping between short ids and URLs.
///
/// Both maps and the counter sit behind a single lock so readers never
/// observe one direction updated without the other.
#[derive(Debug, Default)]
pub struct ShortUrlRegistry {
    state: Mutex<RegistryState>,
}

impl ShortUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistryTrait for ShortUrlRegistry {
    fn create(&self, url: &str) -> String {
        let mut state = self.state.lock();

        if let Some(id) = state.reverse.get(url) {
            debug!("Already created id {}: {}", id, url);
            return id.clone();
        }

        state.last_id += 1;
        let id = encode_base62(state.last_id);
        state.forward.insert(id.clone(), url.to_string());
        state.reverse.insert(url.to_string(), id.clone());

        info!("New URL with id {}: {}", id, url);
        id
    }

    fn resolve(&self, id: &str) -> Option<String> {
        let state = self.state.lock();

        match state.forward.get(id) {
            Some(url) => {
                debug!("Found {}: {}", id, url);
                Some(url.clone())
            }
            None => {
                debug!("Not found: {}", id);
                None
            }
        }
    }
}
