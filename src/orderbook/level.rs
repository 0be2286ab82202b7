//! A single price level: an intrusive FIFO queue of resting orders, plus the
//! level's position in its side's best-first chain.

use super::arena::OrderArena;
use super::order::OrderId;

#[derive(Debug)]
pub(crate) struct PriceLevel {
    pub(crate) price: u64,
    pub(crate) total_volume: u64,
    pub(crate) size: usize,
    head: Option<OrderId>,
    tail: Option<OrderId>,
    /// Next-best and prior-best level prices on the same side. `None` at the
    /// respective end of the chain. Both directions are kept — not just
    /// `next` — so a level anywhere in the chain can be unlinked in O(1)
    /// without a scan back from the head.
    pub(crate) next: Option<u64>,
    pub(crate) prev: Option<u64>,
}

impl PriceLevel {
    pub(crate) fn new(price: u64) -> Self {
        Self {
            price,
            total_volume: 0,
            size: 0,
            head: None,
            tail: None,
            next: None,
            prev: None,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub(crate) fn head_id(&self) -> Option<OrderId> {
        self.head
    }

    /// Appends an order to the FIFO tail, preserving time priority.
    pub(crate) fn push_back(&mut self, order_id: OrderId, orders: &mut OrderArena) {
        let quantity = orders.get(order_id).open_quantity();
        match self.tail {
            Some(old_tail) => {
                orders.get_mut(old_tail).next = Some(order_id);
                orders.get_mut(order_id).prev = Some(old_tail);
            }
            None => self.head = Some(order_id),
        }
        self.tail = Some(order_id);
        self.total_volume += quantity;
        self.size += 1;
    }

    /// Unlinks an order from the FIFO and removes it from the arena. Caller
    /// is responsible for noticing when this empties the level.
    pub(crate) fn remove(&mut self, order_id: OrderId, orders: &mut OrderArena) {
        let order = orders.remove(order_id).expect("order must be resting here");
        match order.prev {
            Some(prev_id) => orders.get_mut(prev_id).next = order.next,
            None => self.head = order.next,
        }
        match order.next {
            Some(next_id) => orders.get_mut(next_id).prev = order.prev,
            None => self.tail = order.prev,
        }
        self.total_volume -= order.open_quantity();
        self.size -= 1;
    }

    /// Drops the order at the FIFO head once it is fully filled.
    pub(crate) fn pop_front(&mut self, orders: &mut OrderArena) {
        if let Some(head_id) = self.head {
            self.remove(head_id, orders);
        }
    }
}
