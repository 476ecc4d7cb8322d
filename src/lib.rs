//! artfolio - A self-hostable personal art gallery
//!
//! Artists upload validated, sanitized artworks to their own gallery, served
//! under a per-user subdomain and laid out in responsive masonry columns.

pub mod auth;
pub mod cli;
pub mod file_storage;
pub mod gallery;
pub mod http_server;
pub mod layout;
pub mod observability;
pub mod store;
pub mod validation;
