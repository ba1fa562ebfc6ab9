//! `storefront-core` — shared building blocks for the validation layer.
//!
//! This crate contains **wire-facing primitives** only (no storage concerns):
//! the violation taxonomy, collected per-field validation errors, typed
//! record identifiers, and field coercion over inbound JSON payloads.

pub mod error;
pub mod fields;
pub mod id;

pub use error::{ValidationErrors, ValidationResult, Violation, ViolationKind};
pub use id::{CartEntryId, FavoriteProductId, ProductId, ProductTagId, ReviewId, UserId};
