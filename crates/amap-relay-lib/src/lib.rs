//! Amap relay core library.
//!
//! This crate exposes the provider settings and the upstream client used to
//! relay district, POI search, and POI detail lookups to the Amap REST API.
//! The HTTP service should only depend on the types exported here instead of
//! talking to the provider directly.

#![deny(warnings)]

pub mod client;
pub mod config;
pub mod error;

pub use client::{AmapClient, PoiSearch, SortRule};
pub use config::{Settings, AMAP_BASE_URL_ENV, AMAP_KEY_ENV, DEFAULT_BASE_URL};
pub use error::{Error, Result};
