//! Writes a synthetic `order_data.txt` stream for the `bench` binary to
//! replay, in the `<is_bid> <price> <quantity>` format.

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use rand::Rng;

fn main() -> std::io::Result<()> {
    let count: usize = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100_000);
    let path = env::args().nth(2).unwrap_or_else(|| "order_data.txt".to_string());

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    let mut rng = rand::thread_rng();

    for _ in 0..count {
        let is_bid = rng.gen_bool(0.5) as u8;
        let price: f64 = rng.gen_range(1.0..200.0);
        let quantity: u32 = rng.gen_range(1..1_000);
        writeln!(writer, "{is_bid} {price:.4} {quantity}")?;
    }

    writer.flush()?;
    println!("wrote {count} orders to {path}");
    Ok(())
}
