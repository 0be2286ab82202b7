//! Single owner of all `Order` values, keyed by id.
//!
//! Keeping orders in one arena instead of behind `Rc<RefCell<_>>` handles
//! avoids the aliasing and cleanup headaches of in-tree back-references:
//! a level's FIFO chain and the book's own bookkeeping both address orders
//! by [`OrderId`] and go through this arena to touch the data.

use std::collections::HashMap;

use super::order::{Order, OrderId};

#[derive(Debug, Default)]
pub(crate) struct OrderArena {
    orders: HashMap<OrderId, Order>,
}

impl OrderArena {
    pub(crate) fn new() -> Self {
        Self {
            orders: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, order: Order) {
        self.orders.insert(order.id, order);
    }

    /// Panics if `id` is not resident. Callers only ever address orders they
    /// already know are live (resting in a level, or the incoming order).
    pub(crate) fn get(&self, id: OrderId) -> &Order {
        self.orders.get(&id).expect("order id must be live in the arena")
    }

    pub(crate) fn get_mut(&mut self, id: OrderId) -> &mut Order {
        self.orders
            .get_mut(&id)
            .expect("order id must be live in the arena")
    }

    pub(crate) fn try_get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    pub(crate) fn remove(&mut self, id: OrderId) -> Option<Order> {
        self.orders.remove(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.orders.len()
    }
}
