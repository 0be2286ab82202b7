//! The matching algorithm: walks an incoming order against the resting side
//! it crosses, price level by price level, oldest order first within a level.

use tracing::debug;

use super::arena::OrderArena;
use super::order::Order;
use super::side::{BookSide, Side};
use super::trade::{Trade, TradeListener};

/// `true` if an order on `side` priced at `limit_price` crosses a resting
/// order priced at `resting_price`.
///
/// A market order's sentinel price (`u64::MAX` for bids, `0` for asks)
/// trivially satisfies this against any resting price, so market orders
/// need no separate matching path.
fn crossable(side: Side, limit_price: u64, resting_price: u64) -> bool {
    match side {
        Side::Bid => limit_price >= resting_price,
        Side::Ask => limit_price <= resting_price,
    }
}

/// Matches `incoming` against `opposite` until either the incoming order is
/// fully filled or it no longer crosses the opposite side's best price.
/// Returns every [`Trade`] produced, in execution order, and also reports
/// each one to `listener` as it is produced.
///
/// Takes its collaborators as disjoint `&mut` parameters, rather than as a
/// method on a type owning all of them, so a caller holding `&mut self.bids`
/// and `&mut self.orders` simultaneously (as [`super::book::Book`] does) need
/// not fight the borrow checker over a single `&mut self`.
pub(crate) fn run_matcher(
    incoming: &mut Order,
    opposite: &mut BookSide,
    orders: &mut OrderArena,
    next_fill_id: &mut u64,
    listener: &mut Option<TradeListener>,
) -> Vec<Trade> {
    let mut trades = Vec::new();

    while incoming.open_quantity() > 0 {
        let Some(best_price) = opposite.best_price() else {
            break;
        };
        if !crossable(incoming.side, incoming.price, best_price) {
            break;
        }
        let resting_id = opposite
            .head_of(best_price)
            .expect("a listed best price always has at least one resting order");

        let resting_open = orders.get(resting_id).open_quantity();
        let traded_qty = incoming.open_quantity().min(resting_open);
        let cost = traded_qty as u128 * best_price as u128;

        incoming.fill(traded_qty, cost);
        let remaining_on_maker = opposite.apply_fill(best_price, resting_id, traded_qty, cost, orders);

        *next_fill_id += 1;
        let trade = Trade {
            fill_id: *next_fill_id,
            taker_order_id: incoming.id,
            maker_order_id: resting_id,
            taker_side: incoming.side,
            price: best_price,
            quantity: traded_qty,
        };
        debug!(
            fill_id = trade.fill_id,
            taker = trade.taker_order_id,
            maker = trade.maker_order_id,
            price = trade.price,
            quantity = trade.quantity,
            "matched"
        );
        if let Some(cb) = listener.as_mut() {
            cb(&trade);
        }
        trades.push(trade);

        if remaining_on_maker == 0 {
            opposite.remove_order(resting_id, best_price, orders);
        }
    }

    trades
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rest(side: &mut BookSide, orders: &mut OrderArena, id: u64, price: u64, qty: u64) {
        let order = Order::new(id, Side::Ask, qty, price, 0).unwrap();
        orders.insert(order);
        side.insert_order(id, price, orders);
    }

    #[test]
    fn partial_fill_leaves_remainder_resting() {
        let mut orders = OrderArena::new();
        let mut asks = BookSide::new(Side::Ask);
        rest(&mut asks, &mut orders, 1, 100, 5);

        let mut incoming = Order::new(2, Side::Bid, 3, 100, 0).unwrap();
        let mut listener: Option<TradeListener> = None;
        let mut next_fill_id = 0;
        let trades = run_matcher(&mut incoming, &mut asks, &mut orders, &mut next_fill_id, &mut listener);

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity, 3);
        assert_eq!(incoming.open_quantity(), 0);
        assert_eq!(asks.level_volume(100), 2);
        assert_eq!(orders.get(1).open_quantity(), 2);
    }

    #[test]
    fn walks_multiple_levels_in_price_priority() {
        let mut orders = OrderArena::new();
        let mut asks = BookSide::new(Side::Ask);
        rest(&mut asks, &mut orders, 1, 100, 2);
        rest(&mut asks, &mut orders, 2, 101, 5);

        let mut incoming = Order::new(3, Side::Bid, 4, 101, 0).unwrap();
        let mut listener: Option<TradeListener> = None;
        let mut next_fill_id = 0;
        let trades = run_matcher(&mut incoming, &mut asks, &mut orders, &mut next_fill_id, &mut listener);

        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].price, 100);
        assert_eq!(trades[0].quantity, 2);
        assert_eq!(trades[1].price, 101);
        assert_eq!(trades[1].quantity, 2);
        assert_eq!(incoming.open_quantity(), 0);
        assert_eq!(asks.best_price(), Some(101));
        assert_eq!(asks.level_volume(101), 3);
    }

    #[test]
    fn non_crossing_order_produces_no_trades() {
        let mut orders = OrderArena::new();
        let mut asks = BookSide::new(Side::Ask);
        rest(&mut asks, &mut orders, 1, 100, 5);

        let mut incoming = Order::new(2, Side::Bid, 3, 99, 0).unwrap();
        let mut listener: Option<TradeListener> = None;
        let mut next_fill_id = 0;
        let trades = run_matcher(&mut incoming, &mut asks, &mut orders, &mut next_fill_id, &mut listener);

        assert!(trades.is_empty());
        assert_eq!(incoming.open_quantity(), 3);
    }
}
