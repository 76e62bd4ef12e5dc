//! Print the stored and expected checksum of a save, and optionally repair it.

use bandicoot::crash2::Crash2Save;
use std::error;
use std::fs::{self, File};

fn main() -> Result<(), Box<dyn error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let (path, repair) = match args.as_slice() {
        [_, path] => (path, false),
        [_, flag, path] if flag == "--repair" => (path, true),
        _ => {
            eprintln!("Usage: {} [--repair] <file>", args[0]);
            std::process::exit(1);
        }
    };

    let mut save = Crash2Save::builder().from_reader(File::open(path)?)?;
    let stored = save.checksum();
    let computed = save.compute_checksum();
    println!("stored:   {:#010x}", stored);
    println!("computed: {:#010x}", computed);

    if stored == computed {
        println!("checksum is valid");
    } else if repair {
        fs::write(path, save.export())?;
        println!("checksum repaired");
    } else {
        println!("checksum is stale, rerun with --repair to fix");
        std::process::exit(2);
    }

    Ok(())
}
