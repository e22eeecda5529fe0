use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Product;

/// One line of a pre-checkout basket. The product's name, price and image are
/// snapshotted at add time so the cart renders without refetching the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub product_id: i64,
    pub name: String,
    /// Unit price in minor currency units.
    pub unit_price: i64,
    pub image: Option<String>,
    /// Always >= 1; an update that would reach 0 removes the line instead.
    pub quantity: i32,
}

/// Insertion-ordered basket, unique per product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Merge `quantity` into an existing line for the same product, or append
    /// a new line. Never fails; a non-positive quantity is ignored.
    pub fn add_item(&mut self, product: &Product, quantity: i32) {
        if quantity <= 0 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity += quantity;
            return;
        }
        self.items.push(CartItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            image: product.images.clone(),
            quantity,
        });
    }

    /// No-op when the product is not in the cart.
    pub fn remove_item(&mut self, product_id: i64) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Set the line's quantity; a quantity <= 0 removes the line. No-op when
    /// the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: i64, quantity: i32) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of unit_price * quantity, in minor units. Integer throughout, so
    /// there is no rounding drift.
    pub fn total(&self) -> i64 {
        self.items
            .iter()
            .map(|i| i.unit_price * i.quantity as i64)
            .sum()
    }

    /// Summed quantities across lines, not the number of distinct products.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity as i64).sum()
    }
}

/// All carts of the process, keyed by the opaque session id each client
/// presents. Every mutation writes the full snapshot back to disk so a
/// restart reconstructs identical state.
pub struct CartStore {
    path: PathBuf,
    carts: RwLock<HashMap<Uuid, Cart>>,
}

impl CartStore {
    /// Open the store at `path`. A missing or unreadable snapshot starts the
    /// store empty; it is not an error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let carts = load_snapshot(&path);
        Self {
            path,
            carts: RwLock::new(carts),
        }
    }

    /// Current cart for the session; empty if the session has never mutated.
    pub fn cart(&self, session: Uuid) -> Cart {
        self.carts
            .read()
            .ok()
            .and_then(|map| map.get(&session).cloned())
            .unwrap_or_default()
    }

    /// Apply a mutation to the session's cart and persist the snapshot before
    /// returning. A persistence failure fails the mutation.
    pub fn mutate<F>(&self, session: Uuid, f: F) -> anyhow::Result<Cart>
    where
        F: FnOnce(&mut Cart),
    {
        let mut map = self
            .carts
            .write()
            .map_err(|_| anyhow::anyhow!("cart store lock poisoned"))?;
        let cart = map.entry(session).or_default();
        f(cart);
        let updated = cart.clone();
        if updated.is_empty() {
            map.remove(&session);
        }
        let bytes = serde_json::to_vec(&*map)?;
        fs::write(&self.path, bytes)?;
        Ok(updated)
    }
}

fn load_snapshot(path: &Path) -> HashMap<Uuid, Cart> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
        Err(err) => {
            tracing::warn!(error = %err, path = %path.display(), "cart snapshot unreadable, starting empty");
            return HashMap::new();
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(map) => map,
        Err(err) => {
            tracing::warn!(error = %err, path = %path.display(), "cart snapshot corrupt, starting empty");
            HashMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn product(id: i64, name: &str, price: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            slug: name.to_lowercase(),
            description: None,
            price,
            stock: 100,
            category_id: 1,
            is_active: true,
            images: None,
            created_at: None,
        }
    }

    #[test]
    fn add_merges_quantities_for_same_product() {
        let mut cart = Cart::default();
        let widget = product(1, "Widget", 1000);
        cart.add_item(&widget, 2);
        cart.add_item(&widget, 3);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn total_and_item_count_are_integer_sums() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, "A", 1000), 2);
        cart.add_item(&product(2, "B", 500), 1);
        assert_eq!(cart.total(), 2500);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn update_quantity_to_zero_removes_the_line() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, "A", 1000), 2);
        cart.add_item(&product(2, "B", 500), 1);
        cart.update_quantity(1, 0);
        assert!(cart.items().iter().all(|i| i.product_id != 1));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn update_quantity_sets_new_value() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, "A", 1000), 2);
        cart.update_quantity(1, 7);
        assert_eq!(cart.items()[0].quantity, 7);
        assert_eq!(cart.total(), 7000);
    }

    #[test]
    fn remove_absent_product_is_a_noop() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, "A", 1000), 1);
        cart.remove_item(99);
        cart.update_quantity(99, 5);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn add_with_non_positive_quantity_is_a_noop() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, "A", 1000), 0);
        cart.add_item(&product(1, "A", 1000), -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, "A", 1000), 4);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn snapshot_restores_identical_state_after_reopen() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("carts.json");
        let session = Uuid::new_v4();

        let store = CartStore::open(&path);
        store.mutate(session, |cart| {
            cart.add_item(&product(1, "A", 1000), 2);
            cart.add_item(&product(2, "B", 500), 1);
            cart.update_quantity(2, 3);
        })?;
        let before = store.cart(session);
        drop(store);

        let reopened = CartStore::open(&path);
        let after = reopened.cart(session);
        assert_eq!(after.total(), before.total());
        assert_eq!(after.item_count(), before.item_count());
        assert_eq!(after.items().len(), before.items().len());
        Ok(())
    }

    #[test]
    fn corrupt_snapshot_loads_as_empty() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("carts.json");
        fs::write(&path, b"{ not json")?;

        let store = CartStore::open(&path);
        assert!(store.cart(Uuid::new_v4()).is_empty());
        Ok(())
    }

    #[test]
    fn missing_snapshot_loads_as_empty() {
        let dir = tempdir().unwrap();
        let store = CartStore::open(dir.path().join("never-written.json"));
        assert!(store.cart(Uuid::new_v4()).is_empty());
    }
}
