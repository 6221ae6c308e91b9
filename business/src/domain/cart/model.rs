use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// Fixed per-line maximum, independent of stock.
pub const MAX_LINE_QUANTITY: u32 = 10;

/// One entry of the session-backed cart. The price is kept as a string so
/// the whole mapping stays JSON-safe when stored in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLine {
    pub quantity: u32,
    pub price: String,
}

impl SessionLine {
    fn price_decimal(&self) -> BigDecimal {
        self.price.parse().unwrap_or_else(|_| BigDecimal::zero())
    }
}

/// Ephemeral cart stored in the browser session, keyed by product id string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCart(BTreeMap<String, SessionLine>);

impl SessionCart {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Product ids currently in the cart. Keys that no longer parse as
    /// uuids (stale session data) are skipped.
    pub fn product_ids(&self) -> Vec<Uuid> {
        self.0.keys().filter_map(|k| k.parse().ok()).collect()
    }

    /// Product id and quantity per line, for the session-to-store merge.
    pub fn quantities(&self) -> Vec<(Uuid, u32)> {
        self.0
            .iter()
            .filter_map(|(k, line)| k.parse().ok().map(|id| (id, line.quantity)))
            .collect()
    }

    pub fn quantity_of(&self, product_id: Uuid) -> u32 {
        self.0
            .get(&product_id.to_string())
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Price times quantity for a single line, if present.
    pub fn line_total(&self, product_id: Uuid) -> Option<BigDecimal> {
        self.0
            .get(&product_id.to_string())
            .map(|line| line.price_decimal() * BigDecimal::from(line.quantity))
    }

    /// Adds or replaces a line following the three-way cap: the requested
    /// (or incremented) quantity is clamped to `MAX_LINE_QUANTITY` and the
    /// product's live stock. Returns the resulting line quantity.
    pub fn apply_add(&mut self, product: &Product, quantity: u32, override_quantity: bool) -> u32 {
        let entry = self
            .0
            .entry(product.id.to_string())
            .or_insert_with(|| SessionLine {
                quantity: 0,
                price: product.price.to_string(),
            });

        let requested = if override_quantity {
            quantity
        } else {
            entry.quantity.saturating_add(quantity)
        };

        entry.quantity = requested.min(MAX_LINE_QUANTITY).min(product.stock);
        entry.price = product.price.to_string();
        entry.quantity
    }

    /// Writes a line verbatim. Used when rebuilding the session cart from
    /// authoritative stored rows after a merge.
    pub fn set_line(&mut self, product_id: Uuid, quantity: u32, price: &BigDecimal) {
        self.0.insert(
            product_id.to_string(),
            SessionLine {
                quantity,
                price: price.to_string(),
            },
        );
    }

    /// Removes a line. No-op when the product is not in the cart.
    pub fn remove(&mut self, product_id: Uuid) -> bool {
        self.0.remove(&product_id.to_string()).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Sum of price times quantity over all lines.
    pub fn total_price(&self) -> BigDecimal {
        self.0
            .values()
            .map(|line| line.price_decimal() * BigDecimal::from(line.quantity))
            .fold(BigDecimal::zero(), |acc, total| acc + total)
    }

    /// Sum of line quantities.
    pub fn total_quantity(&self) -> u32 {
        self.0.values().map(|line| line.quantity).sum()
    }

    /// Number of distinct products.
    pub fn unique_count(&self) -> u32 {
        self.0.len() as u32
    }
}

/// Session-backed cart state: the line mapping plus the one-shot merge
/// guard. Passed by value into cart use cases and written back to the
/// session by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartState {
    pub cart: SessionCart,
    pub merged: bool,
}

/// Persisted cart row, unique per (user, product).
#[derive(Debug, Clone)]
pub struct CartItem {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn from_repository(
        user_id: UserId,
        product_id: Uuid,
        quantity: u32,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            product_id,
            quantity,
            added_at,
        }
    }
}

/// Enriched cart line produced by joining the session cart against one
/// batched product lookup.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub price: BigDecimal,
    pub total_price: BigDecimal,
}

/// Read model for the cart detail view.
#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total_price: BigDecimal,
    pub total_quantity: u32,
    pub unique_count: u32,
}

impl CartView {
    /// Joins session lines with fetched products. Session entries whose
    /// product lookup failed are skipped.
    pub fn build(cart: &SessionCart, products: Vec<Product>) -> Self {
        let lines: Vec<CartLine> = products
            .into_iter()
            .filter_map(|product| {
                let quantity = cart.quantity_of(product.id);
                if quantity == 0 {
                    return None;
                }
                let price = product.price.clone();
                let total_price = &price * BigDecimal::from(quantity);
                Some(CartLine {
                    product,
                    quantity,
                    price,
                    total_price,
                })
            })
            .collect();

        Self {
            lines,
            total_price: cart.total_price(),
            total_quantity: cart.total_quantity(),
            unique_count: cart.unique_count(),
        }
    }
}
