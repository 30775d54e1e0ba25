//! Wire-format models for the GameHub game distribution platform.
//!
//! This crate is the contract at the client/server boundary: the [`Game`],
//! [`GameSave`] and [`User`]/[`UserRole`] entities, plus the exact JSON
//! mapping for each one. Every key name, nullability rule and default-value
//! policy here is public interface consumed by the platform clients.
//!
//! Transport, persistence and business rules are not this crate's concern;
//! the services owning those call into the codecs and handle any
//! [`DecodeError`] themselves.

pub mod domain;
pub mod wire;

pub use domain::entities::{default_avatar_path, Game, GameSave, User, UserRole};
pub use wire::DecodeError;
