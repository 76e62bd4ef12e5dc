/*!

A low level reader and editor for [Crash Bandicoot 2: Cortex Strikes
Back](https://en.wikipedia.org/wiki/Crash_Bandicoot_2:_Cortex_Strikes_Back) memory
card saves (European release, `BESCES-00967`).

Saves are a fixed 8320 bytes: the 128 byte directory frame exported by memory
card tools followed by the single 8 KiB block the game writes. Bandicoot maps
the game's state (level progress, crystals, gems, bosses, lives, audio
settings, and so on) onto exact bytes and bits within that buffer, and keeps
the checksum the game verifies on load in sync.

## Features

- ✔ Precise: flags sharing a byte are edited bit by bit, nothing else is touched
- ✔ Safe: every identifier is validated before a single byte is written
- ✔ Isolated: bytes are copied in and copied out, callers never alias the save
- ✔ Loadable: the checksum is recomputed on export unless asked not to

## Quick Start

```rust
use bandicoot::crash2::{Crash2Save, Language};

# fn main() -> Result<(), Box<dyn std::error::Error>> {
# let mut data = vec![0u8; bandicoot::RawSave::SIZE];
# data[0x0a..0x0a + 12].copy_from_slice(b"BESCES-00967");
let mut save = Crash2Save::from_slice(&data)?;

save.set_username(1, "CRASH")?;
save.set_lives(1, 99)?;
save.set_level_progress(1, 1, true)?;
save.set_crystal(1, 1, true)?;
save.set_language(1, Language::French)?;

assert_eq!(save.username(1)?, "CRASH");
assert_eq!(save.crystal_count(1)?, 1);

// The checksum is corrected as part of the export
let out = save.export();
assert_eq!(out.len(), bandicoot::RawSave::SIZE);
assert!(save.is_checksum_valid());
# Ok(())
# }
```

## Checksum

By default, exporting a save recomputes and stores the checksum. Use
[`ChecksumMode::PreserveStored`](crash2::ChecksumMode::PreserveStored) to
export the stored value untouched, for instance to check how the game reacts
to a corrupted save.

```rust
use bandicoot::crash2::{ChecksumMode, Crash2Save};

# fn main() -> Result<(), Box<dyn std::error::Error>> {
# let mut data = vec![0u8; bandicoot::RawSave::SIZE];
# data[0x0a..0x0a + 12].copy_from_slice(b"BESCES-00967");
let mut save = Crash2Save::builder()
    .checksum_mode(ChecksumMode::PreserveStored)
    .from_slice(&data)?;

save.set_checksum(0x1234);
let out = save.export();
assert_eq!(&out[0x1a4..0x1a8], &[0x34, 0x12, 0, 0]);
# Ok(())
# }
```

## One Level Lower

[`RawSave`] and [`SaveBlock`] expose the container and the title field common
to every single block save on the console, and the [`checksum`] module exposes
the checksum algorithm as plain functions.

*/

pub(crate) mod ascii;
mod card;
pub mod checksum;
pub mod crash2;
mod errors;
mod header;
pub(crate) mod util;

pub use self::card::RawSave;
pub use self::errors::*;
pub use self::header::SaveBlock;
