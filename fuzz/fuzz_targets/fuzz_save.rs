#![no_main]
use bandicoot::crash2::{Crash2Save, BOSSES, LEVELS, SLOTS};
use bandicoot::RawSave;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Stamp the serial so arbitrary bytes reach the field accessors
    let mut buf = vec![0u8; RawSave::SIZE];
    let len = data.len().min(RawSave::SIZE);
    buf[..len].copy_from_slice(&data[..len]);
    buf[0x0a..0x0a + 12].copy_from_slice(Crash2Save::SERIAL.as_bytes());

    let Ok(mut save) = Crash2Save::from_slice(&buf) else {
        return;
    };

    for slot in 0..=SLOTS + 1 {
        let _ = save.slot_summary(slot);
        for level in 0..=LEVELS + 1 {
            let _ = save.level_progress(slot, level);
            let _ = save.crystal(slot, level);
            let _ = save.second_gem(slot, level);
            let _ = save.secret_exit(slot, level);
        }
        for boss in 0..=BOSSES + 1 {
            let _ = save.boss_defeated(slot, boss);
        }
    }

    let out = save.export();
    assert_eq!(out.len(), RawSave::SIZE);
    assert!(save.is_checksum_valid());
});
