use millifaersla::cheapest_service;

use std::io::{self, BufRead};

use anyhow::Result;

fn main() -> Result<()> {
    let stdin = io::stdin();

    let cheapest = cheapest_service(stdin.lock().lines().filter_map(|s| s.ok()))?;

    println!("{cheapest}");

    Ok(())
}
