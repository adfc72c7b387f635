use crate::http::status::Status;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static STATUSES: [Status; Status::ALL.len()] = Status::ALL;

static REGISTRY: Lazy<HashMap<u16, &'static Status>> = Lazy::new(|| {
    let registry: HashMap<u16, &'static Status> =
        STATUSES.iter().map(|s| (s.code_num, s)).collect();
    log::debug!("status registry built with {} entries", registry.len());
    registry
});

/// Read-only table of every known status code. Built once on first use and
/// shared between threads.
pub struct StatusRegistry;

impl StatusRegistry {
    pub fn get(code: i64) -> Option<&'static Status> {
        let code = u16::try_from(code).ok()?;
        REGISTRY.get(&code).copied()
    }

    /// Description for `code`, or `None` if it isn't registered. Codes that
    /// don't fit a `u16` are never registered.
    pub fn lookup(code: i64) -> Option<&'static str> {
        Self::get(code).map(|s| s.description)
    }

    /// Textual lookup. Only the canonical decimal spelling matches, so
    /// `"404"` resolves while `"0404"`, `"+404"` and `" 404"` don't.
    pub fn lookup_key(key: &str) -> Option<&'static str> {
        let code: u16 = key.parse().ok()?;
        if code.to_string() != key {
            return None;
        }
        Self::lookup(i64::from(code))
    }

    pub fn contains(code: i64) -> bool {
        Self::get(code).is_some()
    }

    pub fn len() -> usize {
        REGISTRY.len()
    }

    /// Entries in ascending code order.
    pub fn iter() -> impl Iterator<Item = &'static Status> {
        STATUSES.iter()
    }
}
