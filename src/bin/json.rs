//! Dump every slot of a save as JSON.

use bandicoot::crash2::{Crash2Save, SLOTS};
use std::error;
use std::fs::File;

fn main() -> Result<(), Box<dyn error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args[0]);
        std::process::exit(1);
    }

    let file = File::open(&args[1])?;
    let save = Crash2Save::builder().from_reader(file)?;

    let slots = (1..=SLOTS)
        .map(|slot| save.slot_summary(slot))
        .collect::<Result<Vec<_>, _>>()?;

    let out = serde_json::json!({
        "title": save.title(),
        "checksum": save.checksum(),
        "checksum_valid": save.is_checksum_valid(),
        "slots": slots,
    });

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
