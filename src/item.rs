// src/item.rs
//! Auction item record.

use bytes::Bytes;

/// An item put up for auction.
///
/// The registry only ever looks at `name`. Whatever else the application
/// attaches to an item travels as an opaque binary `payload`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    name: String,
    payload: Bytes,
}

impl Item {
    /// Create an item with an empty payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: Bytes::new(),
        }
    }

    /// Create an item carrying an opaque payload.
    pub fn with_payload(name: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }
}
