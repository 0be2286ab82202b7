//! Reads `order_data.txt` and times submitting every record through a
//! fresh [`Book`], mirroring the original implementation's benchmark driver.

use std::env;
use std::fs;
use std::time::Instant;

use orderbook_core::{Book, Side};

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| "order_data.txt".to_string());
    let contents = fs::read_to_string(&path).expect("failed to read order_data.txt");

    let mut book = Book::new(2).expect("tick_size=2 is always valid");

    let start = Instant::now();
    for line in contents.lines() {
        let mut fields = line.split_whitespace();
        let is_bid: u8 = fields.next().expect("missing is_bid field").parse().expect("is_bid must be 0/1");
        let price: f64 = fields.next().expect("missing price field").parse().expect("price must be a decimal");
        let quantity: u64 = fields.next().expect("missing quantity field").parse().expect("quantity must be a positive integer");

        let side = if is_bid == 1 { Side::Bid } else { Side::Ask };
        book.submit_limit(side, price, quantity).expect("well-formed order");
    }
    let elapsed = start.elapsed();

    println!("Time take: {}ms", elapsed.as_millis());
}
