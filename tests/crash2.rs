use bandicoot::crash2::{
    has_second_gem, has_secret_exit, supported_volumes, AudioType, ChecksumMode, Crash2Save,
    GemKind, Language, BOSSES, LEVELS, SLOTS,
};
use bandicoot::{checksum, ErrorKind, RawSave};
use rstest::*;

fn blank() -> Vec<u8> {
    let mut data = vec![0u8; RawSave::SIZE];
    data[0x0a..0x0a + 20].copy_from_slice(b"BESCES-00967CRASH2\0\0");
    data
}

fn save() -> Crash2Save {
    Crash2Save::from_slice(&blank()).unwrap()
}

/// A save where every byte of every slot is noise, so tests can't pass by
/// accident on zeroed memory
fn noisy() -> Crash2Save {
    let mut data = blank();
    for (i, x) in data.iter_mut().enumerate().skip(0x80) {
        *x = (i.wrapping_mul(31) ^ (i >> 3)) as u8;
    }
    Crash2Save::from_slice(&data).unwrap()
}

#[rstest]
#[case(0)]
#[case(RawSave::SIZE - 1)]
#[case(RawSave::SIZE + 1)]
fn test_length_gate(#[case] len: usize) {
    let err = Crash2Save::from_slice(&vec![0u8; len]).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidLength { .. }));
}

#[rstest]
#[case(b"BESCES-00966")]
#[case(b"BASCUS-94154")]
#[case(b"besces-00967")]
#[case(b"BESCES-0096")]
fn test_title_gate(#[case] title: &[u8]) {
    let mut data = vec![0u8; RawSave::SIZE];
    data[0x0a..0x0a + title.len()].copy_from_slice(title);
    let err = Crash2Save::from_slice(&data).unwrap_err();
    match err.kind() {
        ErrorKind::UnsupportedTitle { title: actual } => {
            assert_eq!(actual.as_bytes(), title);
        }
        x => panic!("unexpected error: {:?}", x),
    }
}

#[test]
fn test_title_is_trimmed() {
    assert_eq!(save().title(), "BESCES-00967CRASH2");
}

#[test]
fn test_callers_cant_interfere_with_stream() {
    let mut input = blank();
    let mut save = Crash2Save::from_slice(&input).unwrap();

    input[0x1ac] = 42;
    assert_eq!(save.lives(1).unwrap(), 0);

    let mut out = save.export();
    out[0x1ac] = 42;
    assert_eq!(save.lives(1).unwrap(), 0);

    save.set_lives(1, 7).unwrap();
    assert_eq!(out[0x1ac], 42);
}

#[test]
fn test_level_flags_round_trip_without_interference() {
    let mut save = noisy();
    let before = save.clone();

    for slot in 1..=SLOTS {
        for level in 1..=LEVELS {
            for on in [true, false, true] {
                save.set_level_progress(slot, level, on).unwrap();
                assert_eq!(save.level_progress(slot, level).unwrap(), on);

                save.set_all_boxes_gem(slot, level, on).unwrap();
                assert_eq!(save.all_boxes_gem(slot, level).unwrap(), on);

                if level <= 25 {
                    save.set_crystal(slot, level, on).unwrap();
                    assert_eq!(save.crystal(slot, level).unwrap(), on);
                }

                if has_second_gem(level) {
                    save.set_second_gem(slot, level, on).unwrap();
                    assert_eq!(save.second_gem(slot, level).unwrap(), on);
                }

                if has_secret_exit(level) {
                    save.set_secret_exit(slot, level, on).unwrap();
                    assert_eq!(save.secret_exit(slot, level).unwrap(), on);
                }
            }
        }

        for boss in 1..=BOSSES {
            save.set_boss_defeated(slot, boss, true).unwrap();
            assert!(save.boss_defeated(slot, boss).unwrap());
        }
    }

    // Everything now set, untouched fields keep their noise
    assert_eq!(save.lives(2).unwrap(), before.lives(2).unwrap());
    assert_eq!(save.username(3).unwrap(), before.username(3).unwrap());
    assert_eq!(save.polar_trick(4).unwrap(), before.polar_trick(4).unwrap());

    for slot in 1..=SLOTS {
        assert_eq!(save.crystal_count(slot).unwrap(), 25);
        assert_eq!(save.gem_count(slot).unwrap(), 27 + 15);
        assert_eq!(save.bosses_defeated(slot).unwrap(), 5);
    }
}

#[test]
fn test_toggling_one_flag_leaves_others() {
    let mut save = save();
    for level in 1..=LEVELS {
        save.set_level_progress(1, level, level % 2 == 0).unwrap();
    }
    for boss in 1..=BOSSES {
        save.set_boss_defeated(1, boss, boss % 2 == 1).unwrap();
    }

    for level in 1..=LEVELS {
        save.set_all_boxes_gem(1, level, true).unwrap();
    }

    save.set_boss_defeated(1, 3, false).unwrap();
    save.set_level_progress(1, 8, false).unwrap();

    for level in 1..=LEVELS {
        let expected = level % 2 == 0 && level != 8;
        assert_eq!(save.level_progress(1, level).unwrap(), expected, "level {}", level);
        assert!(save.all_boxes_gem(1, level).unwrap());
    }

    for boss in 1..=BOSSES {
        let expected = boss % 2 == 1 && boss != 3;
        assert_eq!(save.boss_defeated(1, boss).unwrap(), expected, "boss {}", boss);
    }
}

#[test]
fn test_gem_kind_dispatch() {
    let mut save = save();
    save.set_gem(1, 2, GemKind::SecondGem, true).unwrap();
    assert!(save.second_gem(1, 2).unwrap());
    assert!(!save.gem(1, 2, GemKind::AllBoxesGem).unwrap());

    let err = save.set_gem(1, 1, GemKind::SecondGem, true).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::NoSecondGemInLevel(1)));

    let err = GemKind::try_from(7i64).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidEnumValue(7)));
}

#[rstest]
#[case(1)]
#[case(8)]
#[case(27)]
fn test_no_secret_exit(#[case] level: u8) {
    let mut save = save();
    let err = save.set_secret_exit(1, level, true).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::NoSecretExitInLevel(x) if *x == level));
}

#[test]
fn test_polar_trick_per_slot() {
    let mut save = save();
    save.set_polar_trick(2, true).unwrap();
    assert!(save.polar_trick(2).unwrap());
    for slot in [1, 3, 4] {
        assert!(!save.polar_trick(slot).unwrap());
    }
}

#[test]
fn test_checksum_of_blank_window() {
    let save = save();
    assert_eq!(save.compute_checksum(), checksum::SEED);
    assert_eq!(save.compute_checksum(), save.compute_checksum());
}

#[test]
fn test_checksum_tracks_edits() {
    let mut save = save();
    save.set_lives(1, 5).unwrap();
    save.set_wumpa_fruits(1, 10).unwrap();
    assert_eq!(save.compute_checksum(), checksum::SEED + 15);

    // the stored checksum lives inside the window but is never folded in
    save.set_checksum(0xffff_ffff);
    assert_eq!(save.compute_checksum(), checksum::SEED + 15);
}

#[test]
fn test_auto_correct_on_export() {
    let mut save = noisy();
    save.set_checksum(0);
    assert!(!save.is_checksum_valid());

    let out = save.export();
    assert_eq!(save.checksum(), save.compute_checksum());
    let expected = save.compute_checksum().to_le_bytes();
    assert_eq!(&out[0x1a4..0x1a8], &expected);

    let copy = Crash2Save::from_slice(&out).unwrap();
    assert!(copy.is_checksum_valid());
}

#[test]
fn test_preserve_stored_on_export() {
    let mut save = Crash2Save::builder()
        .checksum_mode(ChecksumMode::PreserveStored)
        .from_slice(&blank())
        .unwrap();
    save.set_lives(1, 3).unwrap();
    save.set_checksum(0x0bad_f00d);

    let out = save.export();
    assert_eq!(save.checksum_mode(), ChecksumMode::PreserveStored);
    assert_eq!(save.checksum(), 0x0bad_f00d);
    assert_eq!(&out[0x1a4..0x1a8], &0x0bad_f00du32.to_le_bytes());

    // reloading with the default mode repairs the stale value on export
    let mut reloaded = Crash2Save::from_slice(&out).unwrap();
    assert_eq!(reloaded.checksum_mode(), ChecksumMode::AutoCorrect);
    assert_eq!(reloaded.checksum(), 0x0bad_f00d);
    assert_eq!(reloaded.lives(1).unwrap(), 3);

    let repaired = reloaded.export();
    assert_eq!(reloaded.checksum(), checksum::SEED + 3);
    assert_eq!(&repaired[0x1a4..0x1a8], &(checksum::SEED + 3).to_le_bytes());
}

#[test]
fn test_volume_round_trip() {
    let mut save = save();
    for &volume in supported_volumes() {
        save.set_effects_volume(2, volume).unwrap();
        save.set_music_volume(2, volume).unwrap();
        assert_eq!(save.effects_volume(2).unwrap(), volume);
        assert_eq!(save.music_volume(2).unwrap(), volume);
    }
    assert_eq!(supported_volumes().len(), 65);
}

#[test]
fn test_unsupported_volume_leaves_value() {
    let mut save = save();
    save.set_music_volume(1, 50).unwrap();
    for volume in (0..=255u8).filter(|x| !supported_volumes().contains(x)) {
        let err = save.set_music_volume(1, volume).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnsupportedVolume(x) if *x == volume));
        assert_eq!(save.music_volume(1).unwrap(), 50);
    }
}

#[test]
fn test_out_of_table_stored_volume() {
    let mut data = blank();
    data[0x1d8..0x1dc].copy_from_slice(&1000i32.to_le_bytes());
    let save = Crash2Save::from_slice(&data).unwrap();
    let err = save.effects_volume(1).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidStoredVolume { raw: 1000 }));
    assert_eq!(save.slot_summary(1).unwrap().effects_volume, None);
}

#[test]
fn test_slot_independence() {
    let mut save = noisy();
    let before = save.clone();

    save.set_lives(2, 12).unwrap();
    save.set_wumpa_fruits(2, 34).unwrap();
    save.set_aku_aku_masks(2, 2).unwrap();
    save.set_screen_offset(2, -6).unwrap();
    save.set_last_played_level(2, 33).unwrap();
    save.set_username(2, "N GIN").unwrap();
    save.set_language(2, Language::German).unwrap();
    save.set_audio_type(2, AudioType::Mono).unwrap();
    save.set_effects_volume(2, 100).unwrap();
    save.set_level_progress(2, 5, true).unwrap();
    save.set_slot_empty(2, false).unwrap();

    for slot in [1, 3, 4] {
        assert_eq!(save.slot_summary(slot).unwrap(), before.slot_summary(slot).unwrap());
    }

    let summary = save.slot_summary(2).unwrap();
    assert_eq!(summary.lives, 12);
    assert_eq!(summary.wumpa_fruits, 34);
    assert_eq!(summary.aku_aku_masks, 2);
    assert_eq!(summary.screen_offset, -6);
    assert_eq!(summary.last_played_level, 33);
    assert_eq!(summary.username, "N GIN");
    assert_eq!(summary.language, Language::German);
    assert_eq!(summary.audio_type, AudioType::Mono);
    assert_eq!(summary.effects_volume, Some(100));
    assert!(!summary.empty);
}

#[rstest]
#[case(0)]
#[case(5)]
#[case(255)]
fn test_slot_out_of_range(#[case] slot: u8) {
    let mut save = noisy();
    let before = save.clone();
    let errors = [
        save.lives(slot).unwrap_err(),
        save.username(slot).unwrap_err(),
        save.language(slot).unwrap_err(),
        save.polar_trick(slot).unwrap_err(),
        save.level_progress(slot, 1).unwrap_err(),
        save.music_volume(slot).unwrap_err(),
        save.is_slot_empty(slot).unwrap_err(),
        save.set_wumpa_fruits(slot, 1).unwrap_err(),
        save.set_username(slot, "A").unwrap_err(),
        save.set_effects_volume(slot, 0).unwrap_err(),
        save.set_crystal(slot, 1, true).unwrap_err(),
        save.set_level_progress(slot, 1, true).unwrap_err(),
        save.set_all_boxes_gem(slot, 1, true).unwrap_err(),
        save.set_second_gem(slot, 2, true).unwrap_err(),
        save.set_gem(slot, 2, GemKind::SecondGem, true).unwrap_err(),
        save.set_secret_exit(slot, 7, true).unwrap_err(),
        save.set_boss_defeated(slot, 1, true).unwrap_err(),
        save.set_polar_trick(slot, true).unwrap_err(),
        save.set_language(slot, Language::Italian).unwrap_err(),
        save.set_audio_type(slot, AudioType::Mono).unwrap_err(),
        save.set_music_volume(slot, 0).unwrap_err(),
        save.set_slot_empty(slot, true).unwrap_err(),
        save.set_last_played_level(slot, 1).unwrap_err(),
        save.set_lives(slot, 1).unwrap_err(),
        save.set_aku_aku_masks(slot, 1).unwrap_err(),
        save.set_screen_offset(slot, 1).unwrap_err(),
        save.slot_summary(slot).unwrap_err(),
    ];

    for err in errors {
        assert!(matches!(err.kind(), ErrorKind::SlotOutOfRange(x) if *x == slot));
    }
    assert_eq!(save, before);
}

#[rstest]
#[case(0)]
#[case(28)]
fn test_level_out_of_range(#[case] level: u8) {
    let mut save = noisy();
    let before = save.clone();
    let errors = [
        save.level_progress(1, level).unwrap_err(),
        save.crystal(1, level).unwrap_err(),
        save.all_boxes_gem(1, level).unwrap_err(),
        save.second_gem(1, level).unwrap_err(),
        save.secret_exit(1, level).unwrap_err(),
        save.gem(1, level, GemKind::AllBoxesGem).unwrap_err(),
        save.set_level_progress(1, level, true).unwrap_err(),
        save.set_crystal(1, level, true).unwrap_err(),
        save.set_all_boxes_gem(1, level, true).unwrap_err(),
        save.set_second_gem(1, level, true).unwrap_err(),
        save.set_secret_exit(1, level, true).unwrap_err(),
        save.set_gem(1, level, GemKind::AllBoxesGem, true).unwrap_err(),
        save.set_gem(1, level, GemKind::SecondGem, true).unwrap_err(),
    ];

    for err in errors {
        assert!(matches!(err.kind(), ErrorKind::LevelOutOfRange { level: x, max: 27 } if *x == level));
    }
    assert_eq!(save, before);
}

#[test]
fn test_last_played_level_extended_range() {
    let mut save = save();
    save.set_last_played_level(1, 28).unwrap();
    assert_eq!(save.last_played_level(1).unwrap(), 28);

    for level in [0, 34] {
        let err = save.set_last_played_level(1, level).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::LevelOutOfRange { max: 33, .. }));
    }
    assert_eq!(save.last_played_level(1).unwrap(), 28);
}

#[rstest]
#[case(0)]
#[case(6)]
fn test_boss_out_of_range(#[case] boss: u8) {
    let mut save = save();
    let err = save.boss_defeated(1, boss).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::BossOutOfRange(x) if *x == boss));
    let err = save.set_boss_defeated(1, boss, true).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::BossOutOfRange(x) if *x == boss));
}

#[rstest]
#[case(26)]
#[case(27)]
fn test_no_crystal(#[case] level: u8) {
    let save = save();
    let err = save.crystal(1, level).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::NoCrystalInLevel(x) if *x == level));
}

#[test]
fn test_username_encoding() {
    let mut save = save();
    save.set_username(1, "DR CORTX").unwrap();
    assert_eq!(save.username(1).unwrap(), "DR CORTX");
    assert_eq!(&save.export()[0x18c..0x194], b"DR[CORTX");

    save.set_username(1, "TINY").unwrap();
    assert_eq!(save.username(1).unwrap(), "TINY");
    assert_eq!(&save.export()[0x18c..0x194], b"TINY\0\0\0\0");
}

#[rstest]
#[case("A[B")]
#[case("A[B\0C")]
#[case("AKU\0")]
#[case("[")]
fn test_username_rejects_unstorable_chars(#[case] name: &str) {
    let mut save = save();
    save.set_username(2, "COCO").unwrap();
    let err = save.set_username(2, name).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::NameInvalidChar('[' | '\0')));
    assert_eq!(save.username(2).unwrap(), "COCO");
}

#[test]
fn test_username_too_long_writes_nothing() {
    let mut save = save();
    save.set_username(4, "PURA").unwrap();
    let err = save.set_username(4, "CRUNCH BANDICOOT").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::NameTooLong { len: 16 }));
    assert_eq!(save.username(4).unwrap(), "PURA");
}

#[test]
fn test_enumerations_accept_unknown_bytes() {
    let mut save = save();
    save.set_language(1, Language::Other(9)).unwrap();
    save.set_audio_type(1, AudioType::Other(200)).unwrap();
    assert_eq!(save.language(1).unwrap(), Language::Other(9));
    assert_eq!(save.audio_type(1).unwrap(), AudioType::Other(200));
    assert_eq!(save.export()[0x3fd], 9);
}

#[test]
fn test_slot_empty_marker() {
    let mut data = blank();
    for slot in 0..4 {
        data[0x184 + 676 * slot] = 1;
    }
    let mut save = Crash2Save::from_slice(&data).unwrap();
    assert!((1..=SLOTS).all(|x| save.is_slot_empty(x).unwrap()));
    save.set_slot_empty(3, false).unwrap();
    assert!(!save.is_slot_empty(3).unwrap());
    assert!(save.is_slot_empty(4).unwrap());
}

#[test]
fn test_error_display() {
    let err = save().crystal(1, 26).unwrap_err();
    assert_eq!(err.to_string(), "level 26 has no crystal");
}
