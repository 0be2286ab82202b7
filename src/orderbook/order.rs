//! The atomic unit of book state: an order's identity and mutable fill state.

use super::error::OrderBookError;
use super::side::Side;

/// Unique, monotonically assigned identifier for an order.
///
/// Zero is reserved for "no order" and is never handed out by a [`crate::Book`].
pub type OrderId = u64;

/// A single resting or incoming order.
///
/// Orders are plain data: they do not hold a reference back to the
/// [`super::level::PriceLevel`] they rest in. Only the code currently
/// scanning or modifying a level needs that context, which avoids the
/// back-pointer cycle an earlier design fell into (see the crate's design
/// notes on cyclic references).
#[derive(Debug, Clone)]
pub struct Order {
    /// Unique identifier, assigned by the book at creation.
    pub id: OrderId,
    /// Buy or sell.
    pub side: Side,
    /// Limit price in ticks. Immutable after creation.
    pub price: u64,
    /// Original size. Immutable after creation.
    pub quantity: u64,
    /// Cumulative filled units. Monotonically non-decreasing, bounded by `quantity`.
    pub filled_quantity: u64,
    /// Cumulative `price * filled_units` across all fills, for VWAP reporting.
    pub filled_cost: u128,
    /// Milliseconds since the Unix epoch, supplied by the book at creation.
    pub created_at: u64,
    pub(crate) next: Option<OrderId>,
    pub(crate) prev: Option<OrderId>,
}

impl Order {
    /// Constructs a resting/incoming limit order. Fails if `quantity == 0` or `price == 0`.
    pub(crate) fn new(
        id: OrderId,
        side: Side,
        quantity: u64,
        price: u64,
        created_at: u64,
    ) -> Result<Self, OrderBookError> {
        if quantity == 0 {
            return Err(OrderBookError::ZeroQuantity);
        }
        if price == 0 {
            return Err(OrderBookError::ZeroPrice);
        }
        Ok(Self::new_raw(id, side, quantity, price, created_at))
    }

    /// Constructs a marketable order whose `price` is a sentinel that
    /// crosses every resting level on the opposite side (see
    /// [`crate::Book::submit_market`]). A market order's price is never
    /// displayed or inserted into a level, so the "price must be positive"
    /// rule from [`Order::new`] does not apply here.
    pub(crate) fn new_for_market(
        id: OrderId,
        side: Side,
        quantity: u64,
        created_at: u64,
    ) -> Result<Self, OrderBookError> {
        if quantity == 0 {
            return Err(OrderBookError::ZeroQuantity);
        }
        let sentinel_price = match side {
            Side::Bid => u64::MAX,
            Side::Ask => 0,
        };
        Ok(Self::new_raw(id, side, quantity, sentinel_price, created_at))
    }

    fn new_raw(id: OrderId, side: Side, quantity: u64, price: u64, created_at: u64) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
            filled_quantity: 0,
            filled_cost: 0,
            created_at,
            next: None,
            prev: None,
        }
    }

    /// Units still unfilled: `quantity - filled_quantity`.
    #[inline]
    pub fn open_quantity(&self) -> u64 {
        self.quantity - self.filled_quantity
    }

    /// An order is complete once every unit has filled.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.open_quantity() == 0
    }

    /// Volume-weighted average fill price, or `None` if nothing has filled yet.
    pub fn average_fill_price(&self) -> Option<f64> {
        if self.filled_quantity == 0 {
            None
        } else {
            Some(self.filled_cost as f64 / self.filled_quantity as f64)
        }
    }

    /// Records a fill. Requires `units <= open_quantity`; has no observable
    /// effect outside this order.
    pub(crate) fn fill(&mut self, units: u64, cost: u128) {
        debug_assert!(
            units <= self.open_quantity(),
            "fill of {units} exceeds open quantity {} for order {}",
            self.open_quantity(),
            self.id
        );
        self.filled_quantity += units;
        self.filled_cost += cost;
    }
}
