//! Network layer: auth API client and the wire types it exchanges.

pub mod api;
pub mod types;
