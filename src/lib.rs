//! # orderbook-core
//!
//! A single-instrument, price-time-priority limit order book.
//!
//! The book matches incoming orders against resting liquidity on the
//! opposite side and maintains the structures needed to query the best bid
//! and best ask (the "inside") in O(1): a price-indexed map of FIFO price
//! levels per side, threaded into a best-first chain, with an intrusive
//! doubly-linked order queue inside each level.
//!
//! ## Scope
//!
//! This crate is the matching core only: a single instrument, single-writer,
//! in-process book. There is no network protocol, no persistence, no
//! multi-instrument routing, and no self-trade prevention — an embedder
//! wanting any of those composes this crate with its own infrastructure.
//! Concurrent access is also out of scope: wrap a [`Book`] in a mutex, or
//! shard by instrument, at the call site.
//!
//! ## Example
//!
//! ```
//! use orderbook_core::{Book, Side};
//!
//! let mut book = Book::new(2).unwrap();
//! book.submit_limit(Side::Bid, 100.00, 10).unwrap();
//! let (_, trades) = book.submit_limit(Side::Ask, 100.00, 10).unwrap();
//! assert_eq!(trades.len(), 1);
//! assert_eq!(book.size(), 0);
//! assert_eq!(book.inside_bid_price(), None);
//! ```

mod orderbook;
mod utils;

pub use orderbook::{Book, Order, OrderBookError, OrderId, Side, Trade, TradeListener};
pub use utils::current_time_millis;
