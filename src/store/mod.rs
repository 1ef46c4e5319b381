//! # Product Store
//!
//! The authoritative in-memory product collection and its operations.
//!
//! The store owns an ordered `Vec<Product>` and is the only place products
//! are created, mutated, or removed. It enforces the catalog invariants on
//! every mutation:
//!
//! - all ids are pairwise distinct
//! - `price >= 0` and `stock >= 0` at all times
//! - `name` is never empty after trimming
//!
//! The store itself is single-threaded and never blocks; callers that share
//! it across request handlers must wrap it in a lock (the HTTP layer uses
//! `RwLock`), because the max-id+1 assignment below is racy without
//! serialization.

pub mod errors;
pub mod product;

pub use errors::{StoreError, StoreResult};
pub use product::{NewProduct, Product, ProductPatch};

use chrono::Utc;

/// The in-memory product collection.
///
/// Insertion order is preserved: `list` returns products in the order they
/// were created, and `delete` keeps the remaining elements in place.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Create a store pre-loaded with the three sample products the
    /// service ships with for development.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let seed = |id, name: &str, description: &str, price, stock, category: &str| Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            stock,
            category: category.to_string(),
            created_at: now,
            updated_at: None,
        };

        Self {
            products: vec![
                seed(
                    1,
                    "Premium Toothbrush",
                    "Soft bristles for gentle cleaning",
                    49.0,
                    100,
                    "Personal Care",
                ),
                seed(
                    2,
                    "Organic Shampoo",
                    "Natural ingredients for healthy hair",
                    120.0,
                    75,
                    "Personal Care",
                ),
                seed(3, "Hand Sanitizer", "99.9% germ protection", 35.0, 200, "Health"),
            ],
        }
    }

    /// Returns the full ordered sequence of products
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of products in the store
    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// Returns the product with the given id
    pub fn get(&self, id: u32) -> StoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)
    }

    /// Next id to assign: max existing id + 1, or 1 when empty.
    ///
    /// This is deliberately NOT a monotonic counter. Deleting the
    /// highest-id product makes its id eligible for reuse on the next
    /// create, matching the deployed behavior of the service. It is not a
    /// safe unique-id generator without the serialization noted above.
    fn next_id(&self) -> u32 {
        self.products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
    }

    /// Create a product from the supplied fields.
    ///
    /// `name`, `price`, and `stock` are required; `description` defaults to
    /// empty, `category` to `"General"`. String fields are trimmed. `stock`
    /// is truncated to an integer after validation. The new product is
    /// appended to the end of the collection.
    pub fn create(&mut self, fields: NewProduct) -> StoreResult<Product> {
        let name = fields.name.as_deref().map(str::trim).unwrap_or("");

        let (price, stock) = match (fields.price, fields.stock) {
            (Some(price), Some(stock)) if !name.is_empty() => (price, stock),
            _ => {
                return Err(StoreError::validation(
                    "Missing required fields: name, price, and stock are required",
                ))
            }
        };

        if price < 0.0 || stock < 0.0 {
            return Err(StoreError::validation(
                "Price and stock must be non-negative numbers",
            ));
        }

        let product = Product {
            id: self.next_id(),
            name: name.to_string(),
            description: fields
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or("")
                .to_string(),
            price,
            stock: stock as u32,
            category: fields
                .category
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or("General")
                .to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };

        self.products.push(product.clone());
        Ok(product)
    }

    /// Merge the supplied fields over the product with the given id.
    ///
    /// Omitted fields keep their previous value and are not validated.
    /// Supplied string fields are trimmed; a `name` or `category` that
    /// trims to empty keeps the old value, while an empty `description`
    /// clears it. Sets `updated_at` on success.
    pub fn update(&mut self, id: u32, patch: ProductPatch) -> StoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        if let Some(price) = patch.price {
            if price < 0.0 {
                return Err(StoreError::validation("Price must be non-negative"));
            }
        }
        if let Some(stock) = patch.stock {
            if stock < 0.0 {
                return Err(StoreError::validation("Stock must be non-negative"));
            }
        }

        let product = &mut self.products[index];

        if let Some(name) = patch.name {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                product.name = trimmed.to_string();
            }
        }
        if let Some(description) = patch.description {
            product.description = description.trim().to_string();
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock as u32;
        }
        if let Some(category) = patch.category {
            let trimmed = category.trim();
            if !trimmed.is_empty() {
                product.category = trimmed.to_string();
            }
        }
        product.updated_at = Some(Utc::now());

        Ok(product.clone())
    }

    /// Remove the product with the given id, returning the removed record.
    /// Order of the remaining products is preserved.
    pub fn delete(&mut self, id: u32) -> StoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        Ok(self.products.remove(index))
    }
}
