// Passive data model: read-only snapshots supplied by the caller.
//
// Nothing here is mutated after construction; every formatting operation
// borrows these values and returns a fresh string.

use std::collections::HashMap;

use url::Url;

use crate::error::ComposeError;

/// A chat user, as known to the caller's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: u64,
    pub full_name: String,
}

/// The message being quoted. Its raw content travels separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub sender_id: u64,
}

/// Mapping from user id to user. Mention formatting scans it to detect
/// full-name collisions; the scan is linear in directory size.
pub type UserDirectory = HashMap<u64, User>;

/// Mapping from stream id to display name.
pub type StreamDirectory = HashMap<u64, String>;

/// A chat deployment: its base URL and the capability level its server
/// advertises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealmContext {
    pub base_url: Url,
    pub capability_level: u32,
}

impl RealmContext {
    /// Parse a base URL and pair it with the server's capability level.
    pub fn new(base_url: &str, capability_level: u32) -> Result<Self, ComposeError> {
        Ok(Self { base_url: Url::parse(base_url)?, capability_level })
    }

    /// Build from an already-parsed URL.
    pub fn from_url(base_url: Url, capability_level: u32) -> Self {
        Self { base_url, capability_level }
    }
}
