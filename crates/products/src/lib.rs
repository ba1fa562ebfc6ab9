//! `storefront-products` — validated record serializers for the product domain.
//!
//! Each serializer maps between a persisted record and its wire
//! representation and enforces the field-level constraints that must hold
//! before a record is created or updated. Validation is all-or-nothing per
//! record: every failing field is reported in one pass, and any violation
//! blocks the operation.

pub mod cart;
pub mod context;
pub mod error;
pub mod favorite;
pub mod product;
pub mod review;
pub mod store;
pub mod tag;

pub use cart::{CartEntry, CartEntryDraft, CartEntrySerializer};
pub use context::RequestContext;
pub use error::SerializerError;
pub use favorite::{FavoriteProduct, FavoriteProductDraft, FavoriteProductSerializer};
pub use product::{Currency, Product, ProductDraft, ProductSerializer};
pub use review::{Review, ReviewDraft, ReviewSerializer};
pub use store::{NewReview, RecordStore, StoreError};
pub use tag::{ProductTag, ProductTagDraft, ProductTagSerializer};
