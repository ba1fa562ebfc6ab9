use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use storefront_core::{CartEntryId, FavoriteProductId, ProductId, ProductTagId, ReviewId};
use storefront_products::{
    CartEntry, CartEntryDraft, FavoriteProduct, FavoriteProductDraft, NewReview, Product,
    ProductDraft, ProductTag, ProductTagDraft, RecordStore, Review, StoreError,
};

#[derive(Debug, Default)]
struct Records {
    products: HashMap<i64, Product>,
    reviews: HashMap<i64, Review>,
    cart_entries: HashMap<i64, CartEntry>,
    favorites: HashMap<i64, FavoriteProduct>,
    tags: HashMap<i64, ProductTag>,
    last_id: i64,
}

impl Records {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory record store.
///
/// Intended for tests/dev. Writes are serialized behind a single lock;
/// identifiers are assigned from one sequence shared by all record kinds.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Records>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, StoreError> {
        self.records
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    /// Insert a validated product draft and return the stored record.
    pub fn create_product(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut records = self.write()?;
        let id = records.next_id();
        let product = Product {
            id: ProductId::new(id),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            currency: draft.currency,
        };
        records.products.insert(id, product.clone());
        Ok(product)
    }

    /// Insert a validated cart entry draft and return the stored record.
    pub fn create_cart_entry(&self, draft: CartEntryDraft) -> Result<CartEntry, StoreError> {
        let mut records = self.write()?;
        let id = records.next_id();
        let entry = CartEntry {
            id: CartEntryId::new(id),
            user_id: draft.user_id,
            product_id: draft.product_id,
            quantity: draft.quantity,
            total_price: draft.total_price,
            created_at: Utc::now(),
        };
        records.cart_entries.insert(id, entry.clone());
        Ok(entry)
    }

    /// Insert a validated favorite-product draft and return the stored record.
    pub fn create_favorite(&self, draft: FavoriteProductDraft) -> Result<FavoriteProduct, StoreError> {
        let mut records = self.write()?;
        let id = records.next_id();
        let favorite = FavoriteProduct {
            id: FavoriteProductId::new(id),
            user_id: draft.user_id,
            product_id: draft.product_id,
            created_at: Utc::now(),
        };
        records.favorites.insert(id, favorite.clone());
        Ok(favorite)
    }

    /// Insert a validated product-tag draft and return the stored record.
    pub fn create_tag(&self, draft: ProductTagDraft) -> Result<ProductTag, StoreError> {
        let mut records = self.write()?;
        let id = records.next_id();
        let tag = ProductTag {
            id: ProductTagId::new(id),
            name: draft.name,
        };
        records.tags.insert(id, tag.clone());
        Ok(tag)
    }

    pub fn review_by_id(&self, id: ReviewId) -> Result<Option<Review>, StoreError> {
        Ok(self.read()?.reviews.get(&id.as_i64()).cloned())
    }

    pub fn cart_entry_by_id(&self, id: CartEntryId) -> Result<Option<CartEntry>, StoreError> {
        Ok(self.read()?.cart_entries.get(&id.as_i64()).cloned())
    }

    pub fn favorite_by_id(&self, id: FavoriteProductId) -> Result<Option<FavoriteProduct>, StoreError> {
        Ok(self.read()?.favorites.get(&id.as_i64()).cloned())
    }

    pub fn tag_by_id(&self, id: ProductTagId) -> Result<Option<ProductTag>, StoreError> {
        Ok(self.read()?.tags.get(&id.as_i64()).cloned())
    }
}

impl RecordStore for InMemoryStore {
    fn product_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.read()?.products.get(&id.as_i64()).cloned())
    }

    fn insert_review(&self, review: NewReview) -> Result<Review, StoreError> {
        let mut records = self.write()?;
        let id = records.next_id();
        let review = Review {
            id: ReviewId::new(id),
            product_id: review.product_id,
            user_id: review.user_id,
            content: review.content,
            rating: review.rating,
            created_at: Utc::now(),
        };
        records.reviews.insert(id, review.clone());
        Ok(review)
    }
}
