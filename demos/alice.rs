//! Compresses a block of text, prints the sizes, then decompresses it with a fresh session.

use lzw12::{decode::Decoder, encode::Encoder, LzwError};

const BLOCK: &[u8] = include_bytes!("alice.txt");

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), LzwError> {
    let mut compressed = [0u8; 1500];
    let mut decompressed = [0u8; 1500];

    println!("Original data...:");
    println!("Size of block 1: {}", BLOCK.len());

    println!("\nCompressing...:");
    let mut encoder = Encoder::new();
    let packed = encoder.encode(BLOCK, &mut compressed)?;
    println!(
        "Size of block 1 (compressed): {} (reduction of {:.6})",
        packed,
        1.0 - packed as f64 / BLOCK.len() as f64
    );
    println!("{}", encoder.stats());

    println!("\nUncompressing...:");
    let mut decoder = Decoder::new();
    let len = decoder.decode(&compressed[..packed], &mut decompressed)?;
    println!("Size of block 1 (decompressed): {}", len);

    println!("\nDumping result...:");
    println!("{}", String::from_utf8_lossy(&decompressed[..len]));
    println!("{}", decoder.stats());
    Ok(())
}
