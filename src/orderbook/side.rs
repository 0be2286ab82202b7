//! One side of the book (bids or asks): a price-indexed map of levels
//! threaded into a best-first chain.

use std::collections::HashMap;
use std::fmt;

use super::arena::OrderArena;
use super::level::PriceLevel;
use super::order::OrderId;

/// Which side of the book an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy side.
    Bid,
    /// Sell side.
    Ask,
}

impl Side {
    /// The side that a given side's incoming orders match against.
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }

    /// `true` if price `a` is strictly better than price `b` for this side:
    /// higher for bids, lower for asks.
    ///
    /// This is carried as a method on `Side` rather than a comparator
    /// closure built per call, so splicing a level into the chain never
    /// allocates.
    pub(crate) fn is_better(self, a: u64, b: u64) -> bool {
        match self {
            Side::Bid => a > b,
            Side::Ask => a < b,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "BID"),
            Side::Ask => write!(f, "ASK"),
        }
    }
}

/// All resting orders on one side of the book: a price -> level map, plus a
/// best-first chain threaded through the levels themselves (`PriceLevel::next`
/// / `PriceLevel::prev`), so the inside of the book is always the head of
/// the chain, in O(1).
#[derive(Debug)]
pub(crate) struct BookSide {
    side: Side,
    levels: HashMap<u64, PriceLevel>,
    best: Option<u64>,
}

impl BookSide {
    pub(crate) fn new(side: Side) -> Self {
        Self {
            side,
            levels: HashMap::new(),
            best: None,
        }
    }

    pub(crate) fn best_price(&self) -> Option<u64> {
        self.best
    }

    pub(crate) fn head_of(&self, price: u64) -> Option<OrderId> {
        self.levels.get(&price).and_then(PriceLevel::head_id)
    }

    pub(crate) fn level_volume(&self, price: u64) -> u64 {
        self.levels.get(&price).map_or(0, |l| l.total_volume)
    }

    pub(crate) fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub(crate) fn order_count(&self) -> usize {
        self.levels.values().map(|l| l.size).sum()
    }

    /// Looks up (or creates and splices in) the level for `order_id`'s price,
    /// then appends the order to that level's FIFO tail.
    pub(crate) fn insert_order(&mut self, order_id: OrderId, price: u64, orders: &mut OrderArena) {
        if !self.levels.contains_key(&price) {
            self.levels.insert(price, PriceLevel::new(price));
            self.link_new_level(price);
        }
        self.levels
            .get_mut(&price)
            .expect("level just ensured to exist")
            .push_back(order_id, orders);
    }

    /// Removes an order from its level. If that empties the level, unlinks
    /// it from both the price map and the best-first chain — wherever it
    /// sits in the chain, not only at the head.
    pub(crate) fn remove_order(&mut self, order_id: OrderId, price: u64, orders: &mut OrderArena) {
        let emptied = {
            let level = self
                .levels
                .get_mut(&price)
                .expect("level must exist for a resting order");
            level.remove(order_id, orders);
            level.is_empty()
        };
        if emptied {
            self.unlink_level(price);
        }
    }

    /// Applies a fill to a resting order and keeps its level's aggregate
    /// volume consistent, whether the fill is partial or exhausts the order.
    /// Returns the resting order's open quantity after the fill.
    pub(crate) fn apply_fill(
        &mut self,
        price: u64,
        resting_id: OrderId,
        units: u64,
        cost: u128,
        orders: &mut OrderArena,
    ) -> u64 {
        orders.get_mut(resting_id).fill(units, cost);
        let level = self
            .levels
            .get_mut(&price)
            .expect("level must exist while matching against it");
        level.total_volume -= units;
        orders.get(resting_id).open_quantity()
    }

    /// Splices a freshly-created, still-empty level for `price` into the
    /// best-first chain. Called once, immediately after the level is first
    /// inserted into `levels`.
    ///
    /// 1. Empty side: the new level becomes the head.
    /// 2. Strictly better than the current head: splice before it, becomes the new head.
    /// 3. Otherwise: walk forward while the next level is still better, splice after
    ///    the predecessor. The equal-price case never arises because the caller
    ///    only reaches here when the price map lookup found no existing level.
    fn link_new_level(&mut self, price: u64) {
        let current_best = match self.best {
            None => {
                self.best = Some(price);
                return;
            }
            Some(best) => best,
        };

        if self.side.is_better(price, current_best) {
            self.levels
                .get_mut(&current_best)
                .expect("best level must exist")
                .prev = Some(price);
            self.levels
                .get_mut(&price)
                .expect("level just inserted")
                .next = Some(current_best);
            self.best = Some(price);
            return;
        }

        let mut cursor = current_best;
        loop {
            let next = self
                .levels
                .get(&cursor)
                .expect("chain level must exist")
                .next;
            match next {
                Some(next_price) if self.side.is_better(next_price, price) => cursor = next_price,
                _ => break,
            }
        }
        let successor = self.levels.get(&cursor).expect("chain level must exist").next;
        if let Some(successor_price) = successor {
            self.levels
                .get_mut(&successor_price)
                .expect("successor must exist")
                .prev = Some(price);
        }
        {
            let new_level = self.levels.get_mut(&price).expect("level just inserted");
            new_level.prev = Some(cursor);
            new_level.next = successor;
        }
        self.levels
            .get_mut(&cursor)
            .expect("chain level must exist")
            .next = Some(price);
    }

    /// Unlinks an emptied level, at any chain position, from both the
    /// best-first chain and the price map.
    fn unlink_level(&mut self, price: u64) {
        let (prev, next) = {
            let level = self.levels.get(&price).expect("level must exist to unlink");
            (level.prev, level.next)
        };
        match prev {
            Some(prev_price) => {
                self.levels
                    .get_mut(&prev_price)
                    .expect("predecessor must exist")
                    .next = next;
            }
            None => self.best = next,
        }
        if let Some(next_price) = next {
            self.levels
                .get_mut(&next_price)
                .expect("successor must exist")
                .prev = prev;
        }
        self.levels.remove(&price);
    }
}
