//! In-memory product store.
//!
//! # Locking
//! - Reads (`list`, `get`, `len`) take the shared lock
//! - Writes (`create`, `update`, `delete`) take the exclusive lock
//! - No operation acquires the lock twice, and guards never escape
//!
//! A poisoned lock is recovered: every mutation is a single `Vec` call that
//! either happened or did not, so a panicking holder cannot leave a torn record.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::seed::seed_products;
use crate::catalog::{CatalogError, Product};

/// Ordered product sequence behind one reader/writer lock.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
}

impl CatalogStore {
    /// Create a store holding `products` in the given order.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Create a store holding the boot-time seed records.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every product, in store order.
    pub fn list(&self) -> Vec<Product> {
        self.read().clone()
    }

    /// First product whose id equals `id`.
    pub fn get(&self, id: &str) -> Result<Product, CatalogError> {
        self.read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Append `product` unless its id is already taken.
    pub fn create(&self, product: Product) -> Result<Product, CatalogError> {
        let mut products = self.write();
        if products.iter().any(|p| p.id == product.id) {
            return Err(CatalogError::Conflict(product.id));
        }
        products.push(product.clone());
        Ok(product)
    }

    /// Replace the product stored under `id`.
    ///
    /// The id carried by `product` is ignored; the stored record always keeps `id`.
    pub fn update(&self, id: &str, mut product: Product) -> Result<Product, CatalogError> {
        let mut products = self.write();
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        product.id = id.to_string();
        *slot = product.clone();
        Ok(product)
    }

    /// Remove the product stored under `id`, keeping the order of the rest.
    pub fn delete(&self, id: &str) -> Result<(), CatalogError> {
        let mut products = self.write();
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        products.remove(index);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn sample(id: &str) -> Product {
        Product::new(id, "Sample", "Sample item", 10.0)
    }

    #[test]
    fn test_get_returns_matching_record_for_every_seed() {
        let store = CatalogStore::seeded();
        for product in store.list() {
            let found = store.get(&product.id).unwrap();
            assert_eq!(found, product);
        }
        assert_eq!(
            store.get("missing"),
            Err(CatalogError::NotFound("missing".into()))
        );
    }

    #[test]
    fn test_seeded_lolito() {
        let store = CatalogStore::seeded();
        let product = store.get("3").unwrap();
        assert_eq!(product.title, "Lolito");
        assert_eq!(product.price, 7000000.00);
        assert_eq!(product.discount.as_deref(), Some("-50%"));
    }

    #[test]
    fn test_create_then_get() {
        let store = CatalogStore::seeded();
        let created = store.create(sample("42")).unwrap();
        assert_eq!(created, sample("42"));
        assert_eq!(store.get("42").unwrap(), created);
        assert_eq!(store.list().last(), Some(&created));
        assert_eq!(store.len(), 9);
    }

    #[test]
    fn test_create_duplicate_leaves_store_unchanged() {
        let store = CatalogStore::seeded();
        let before = store.list();

        let result = store.create(sample("1"));

        assert_eq!(result, Err(CatalogError::Conflict("1".into())));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_update_forces_path_id() {
        let store = CatalogStore::seeded();
        let body = Product::new("999", "Renamed", "Other", 1.0).marked_new();

        let updated = store.update("2", body).unwrap();

        assert_eq!(updated.id, "2");
        assert_eq!(updated.title, "Renamed");
        assert!(updated.is_new);
        assert_eq!(store.get("2").unwrap(), updated);
        assert!(store.get("999").is_err());
        assert_eq!(store.len(), 8);
        // position in the sequence is kept
        assert_eq!(store.list()[1].id, "2");
    }

    #[test]
    fn test_update_missing() {
        let store = CatalogStore::seeded();
        assert_eq!(
            store.update("nope", sample("nope")),
            Err(CatalogError::NotFound("nope".into()))
        );
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn test_delete() {
        let store = CatalogStore::seeded();
        store.delete("3").unwrap();

        assert_eq!(store.len(), 7);
        assert!(matches!(store.get("3"), Err(CatalogError::NotFound(_))));
        let ids: Vec<_> = store.list().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["1", "2", "4", "5", "6", "7", "8"]);

        assert_eq!(store.delete("3"), Err(CatalogError::NotFound("3".into())));
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn test_delete_then_recreate() {
        let store = CatalogStore::seeded();
        store.delete("3").unwrap();
        assert!(store.create(sample("3")).is_ok());
        assert!(store.create(sample("1")).is_err());
    }

    #[test]
    fn test_empty_store() {
        let store = CatalogStore::default();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_concurrent_reads_never_see_torn_records() {
        let store = Arc::new(CatalogStore::new(vec![Product::new("x", "v0", "v0", 0.0)]));

        let writer = {
            let store = store.clone();
            thread::spawn(move || {
                for i in 1..=500 {
                    let tag = format!("v{i}");
                    store
                        .update("x", Product::new("x", tag.clone(), tag, i as f64))
                        .unwrap();
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..500 {
                        let p = store.get("x").unwrap();
                        assert_eq!(p.title, p.description);
                        assert_eq!(p.title, format!("v{}", p.price as u64));
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(store.get("x").unwrap().price, 500.0);
    }
}
