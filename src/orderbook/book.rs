//! The public order book: construction, order submission, cancellation, and
//! inside-quote queries.

use tracing::trace;

use crate::utils::current_time_millis;

use super::arena::OrderArena;
use super::error::OrderBookError;
use super::matching::run_matcher;
use super::order::{Order, OrderId};
use super::side::{BookSide, Side};
use super::trade::{Trade, TradeListener};

/// Maximum tick size accepted by [`Book::new`]. Ten-to-the-eighth ticks per
/// unit of price is already far beyond any real instrument's quoted
/// precision; the cap exists so `10u64.pow(tick_size)` never approaches
/// `u64` overflow.
const MAX_TICK_SIZE: u8 = 8;

/// A single-instrument, price-time-priority limit order book.
///
/// `Book` is single-writer: every method takes `&mut self`, there is no
/// internal locking, and callers coordinate concurrent access themselves if
/// they need it (ownership by one thread, or an external mutex).
pub struct Book {
    bids: BookSide,
    asks: BookSide,
    orders: OrderArena,
    next_order_id: OrderId,
    next_fill_id: u64,
    tick_size: u8,
    exponent: f64,
    trade_listener: Option<TradeListener>,
}

impl Book {
    /// Creates an empty book. `tick_size` is the number of decimal digits of
    /// price precision kept as integer ticks internally (e.g. `2` means
    /// prices are tracked to the cent). Must be in `[0, 8]`.
    pub fn new(tick_size: u8) -> Result<Self, OrderBookError> {
        if tick_size > MAX_TICK_SIZE {
            return Err(OrderBookError::InvalidTickSize);
        }
        Ok(Self {
            bids: BookSide::new(Side::Bid),
            asks: BookSide::new(Side::Ask),
            orders: OrderArena::new(),
            next_order_id: 1,
            next_fill_id: 0,
            tick_size,
            exponent: 10f64.powi(tick_size as i32),
            trade_listener: None,
        })
    }

    /// Submits a limit order. Matches immediately against any crossing
    /// resting orders; any unfilled remainder rests in the book.
    pub fn submit_limit(
        &mut self,
        side: Side,
        price: f64,
        quantity: u64,
    ) -> Result<(OrderId, Vec<Trade>), OrderBookError> {
        let ticks = self.price_to_ticks(price);
        let id = self.next_order_id;
        let mut incoming = Order::new(id, side, quantity, ticks, current_time_millis())?;
        trace!(order_id = id, %side, price = ticks, quantity, "submit_limit");
        self.next_order_id += 1;

        let trades = self.match_incoming(&mut incoming);

        if incoming.open_quantity() > 0 {
            self.rest(incoming);
        }
        Ok((id, trades))
    }

    /// Submits a market order: matches immediately against whatever is
    /// resting, at the resting side's prices. Any quantity left unfilled
    /// once the opposite side is exhausted (or empty) is discarded rather
    /// than rested, since a market order carries no price at which to wait.
    pub fn submit_market(
        &mut self,
        side: Side,
        quantity: u64,
    ) -> Result<(OrderId, Vec<Trade>), OrderBookError> {
        let id = self.next_order_id;
        let mut incoming = Order::new_for_market(id, side, quantity, current_time_millis())?;
        trace!(order_id = id, %side, quantity, "submit_market");
        self.next_order_id += 1;

        let trades = self.match_incoming(&mut incoming);
        if incoming.open_quantity() > 0 {
            trace!(order_id = id, unfilled = incoming.open_quantity(), "market order remainder discarded");
        }
        Ok((id, trades))
    }

    /// Cancels a resting order. Returns `false` if `order_id` is unknown or
    /// already fully filled/cancelled — cancellation of an unknown id is not
    /// an error condition, per [`OrderBookError`]'s scope.
    pub fn cancel(&mut self, order_id: OrderId) -> bool {
        let Some(order) = self.orders.try_get(order_id) else {
            trace!(order_id, "cancel of unknown order");
            return false;
        };
        let (side, price) = (order.side, order.price);
        match side {
            Side::Bid => self.bids.remove_order(order_id, price, &mut self.orders),
            Side::Ask => self.asks.remove_order(order_id, price, &mut self.orders),
        }
        trace!(order_id, %side, price, "cancel");
        true
    }

    /// Best (highest) resting bid price, converted from ticks.
    pub fn inside_bid_price(&self) -> Option<f64> {
        self.bids.best_price().map(|t| self.ticks_to_price(t))
    }

    /// Best (lowest) resting ask price, converted from ticks.
    pub fn inside_ask_price(&self) -> Option<f64> {
        self.asks.best_price().map(|t| self.ticks_to_price(t))
    }

    /// Open quantity of the order at the front of the best bid level.
    pub fn inside_bid_quantity(&self) -> Option<u64> {
        self.head_quantity(&self.bids)
    }

    /// Open quantity of the order at the front of the best ask level.
    pub fn inside_ask_quantity(&self) -> Option<u64> {
        self.head_quantity(&self.asks)
    }

    /// Total resting volume at the best bid price across every order there.
    pub fn inside_bid_volume(&self) -> Option<u64> {
        self.bids.best_price().map(|p| self.bids.level_volume(p))
    }

    /// Total resting volume at the best ask price across every order there.
    pub fn inside_ask_volume(&self) -> Option<u64> {
        self.asks.best_price().map(|p| self.asks.level_volume(p))
    }

    /// Total number of resting orders across both sides of the book.
    pub fn size(&self) -> usize {
        self.orders.len()
    }

    /// Installs a callback invoked once per trade as matching produces it.
    /// Replaces any previously installed listener.
    pub fn set_trade_listener(&mut self, listener: TradeListener) {
        self.trade_listener = Some(listener);
    }

    /// Removes a previously installed trade listener, if any.
    pub fn remove_trade_listener(&mut self) {
        self.trade_listener = None;
    }

    /// Converts a decimal price into this book's integer tick representation.
    pub fn price_to_ticks(&self, price: f64) -> u64 {
        (price * self.exponent).round() as u64
    }

    /// Formats `ticks` back into a fixed-point decimal string at this book's
    /// configured precision.
    pub fn format_price(&self, ticks: u64) -> String {
        format!("{:.*}", self.tick_size as usize, self.ticks_to_price(ticks))
    }

    fn ticks_to_price(&self, ticks: u64) -> f64 {
        ticks as f64 / self.exponent
    }

    fn head_quantity(&self, side: &BookSide) -> Option<u64> {
        let price = side.best_price()?;
        let head_id = side.head_of(price)?;
        Some(self.orders.get(head_id).open_quantity())
    }

    fn match_incoming(&mut self, incoming: &mut Order) -> Vec<Trade> {
        let opposite = match incoming.side {
            Side::Bid => &mut self.asks,
            Side::Ask => &mut self.bids,
        };
        run_matcher(
            incoming,
            opposite,
            &mut self.orders,
            &mut self.next_fill_id,
            &mut self.trade_listener,
        )
    }

    fn rest(&mut self, order: Order) {
        let (id, side, price) = (order.id, order.side, order.price);
        self.orders.insert(order);
        match side {
            Side::Bid => self.bids.insert_order(id, price, &mut self.orders),
            Side::Ask => self.asks.insert_order(id, price, &mut self.orders),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_tick_size_above_eight() {
        assert_eq!(Book::new(9).unwrap_err(), OrderBookError::InvalidTickSize);
        assert!(Book::new(8).is_ok());
    }

    #[test]
    fn resting_then_crossing_order_matches() {
        let mut book = Book::new(2).unwrap();
        book.submit_limit(Side::Ask, 100.00, 10).unwrap();
        assert_eq!(book.inside_ask_price(), Some(100.00));

        let (_, trades) = book.submit_limit(Side::Bid, 100.00, 4).unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity, 4);
        assert_eq!(book.inside_ask_volume(), Some(6));
        assert_eq!(book.size(), 1);
    }

    #[test]
    fn cancel_removes_resting_order_and_reports_unknown_ids() {
        let mut book = Book::new(2).unwrap();
        let (id, _) = book.submit_limit(Side::Bid, 99.50, 5).unwrap();
        assert!(book.cancel(id));
        assert!(!book.cancel(id));
        assert!(!book.cancel(9999));
        assert_eq!(book.size(), 0);
        assert_eq!(book.inside_bid_price(), None);
    }

    #[test]
    fn market_order_consumes_book_and_discards_remainder() {
        let mut book = Book::new(0).unwrap();
        book.submit_limit(Side::Ask, 10.0, 5).unwrap();
        let (_, trades) = book.submit_market(Side::Bid, 8).unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity, 5);
        assert_eq!(book.size(), 0);
        assert_eq!(book.inside_ask_price(), None);
    }

    #[test]
    fn cancelling_mid_chain_level_does_not_orphan_it() {
        let mut book = Book::new(0).unwrap();
        book.submit_limit(Side::Bid, 80.0, 1).unwrap();
        let (mid_id, _) = book.submit_limit(Side::Bid, 90.0, 1).unwrap();
        book.submit_limit(Side::Bid, 100.0, 1).unwrap();

        assert!(book.cancel(mid_id));
        assert_eq!(book.size(), 2);
        assert_eq!(book.inside_bid_price(), Some(100.0));

        let (_, trades) = book.submit_limit(Side::Ask, 90.0, 1).unwrap();
        assert_eq!(trades.len(), 1, "a fresh order at 90 must be a live level, not an orphan");
    }
}
