use super::{
    kinds::{AudioType, ChecksumMode, GemKind, Language},
    layout::{self, Field, FlagField, Width, BOSSES, LEVELS},
    name,
    summary::SlotSummary,
    volume,
};
use crate::{checksum, Error, ErrorKind, RawSave, SaveBlock};
use std::io::Write;

/// A Crash Bandicoot 2 (PAL) save with typed access to every slot.
///
/// Edits only touch the in-memory copy. The checksum is left alone until the
/// save is exported, where [`ChecksumMode`] decides whether it is recomputed.
///
/// ```
/// use bandicoot::{crash2::Crash2Save, RawSave};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut data = vec![0u8; RawSave::SIZE];
/// data[0x0a..0x0a + 12].copy_from_slice(b"BESCES-00967");
///
/// let mut save = Crash2Save::from_slice(&data)?;
/// save.set_username(1, "COCO")?;
/// save.set_crystal(1, 3, true)?;
/// assert!(save.crystal(1, 3)?);
///
/// let out = save.export();
/// assert_eq!(save.checksum(), save.compute_checksum());
/// assert_eq!(out.len(), RawSave::SIZE);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crash2Save {
    block: SaveBlock,
    mode: ChecksumMode,
}

/// Configures how a [`Crash2Save`] is constructed
#[derive(Debug, Clone, Copy, Default)]
pub struct Crash2SaveBuilder {
    mode: ChecksumMode,
}

impl Crash2SaveBuilder {
    /// Set the export behavior of the checksum
    #[inline]
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Crash2SaveBuilder {
        self.mode = mode;
        self
    }

    /// Copies the bytes into a new save
    pub fn from_slice(self, data: &[u8]) -> Result<Crash2Save, Error> {
        self.from_block(SaveBlock::from_slice(data)?)
    }

    /// Reads the save out of a reader
    pub fn from_reader<R: std::io::Read>(self, reader: R) -> Result<Crash2Save, Error> {
        self.from_block(SaveBlock::new(RawSave::from_reader(reader)?))
    }

    /// Wraps an existing block after checking it belongs to the game
    pub fn from_block(self, block: SaveBlock) -> Result<Crash2Save, Error> {
        if !block.title_bytes().starts_with(Crash2Save::SERIAL.as_bytes()) {
            return Err(ErrorKind::UnsupportedTitle {
                title: block.title(),
            }
            .into());
        }

        Ok(Crash2Save {
            block,
            mode: self.mode,
        })
    }
}

impl Crash2Save {
    /// Product code the title field must start with
    pub const SERIAL: &'static str = "BESCES-00967";

    /// Copies the bytes into a new save that corrects the checksum on export
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        Crash2Save::builder().from_slice(data)
    }

    /// Returns a builder to customize construction
    pub fn builder() -> Crash2SaveBuilder {
        Crash2SaveBuilder::default()
    }

    /// The underlying single block save
    pub fn block(&self) -> &SaveBlock {
        &self.block
    }

    /// The decoded title field
    pub fn title(&self) -> String {
        self.block.title()
    }

    pub fn checksum_mode(&self) -> ChecksumMode {
        self.mode
    }

    fn raw(&self) -> &RawSave {
        self.block.raw()
    }

    fn raw_mut(&mut self) -> &mut RawSave {
        self.block.raw_mut()
    }

    fn flag(&self, slot: u8, field: FlagField) -> Result<bool, Error> {
        let slot = layout::validate_slot(slot)?;
        let byte = self.raw().read_u8(layout::slot_offset(field.offset, slot))?;
        Ok(byte & field.mask != 0)
    }

    fn set_flag(&mut self, slot: u8, field: FlagField, on: bool) -> Result<(), Error> {
        let slot = layout::validate_slot(slot)?;
        let offset = layout::slot_offset(field.offset, slot);
        let byte = self.raw().read_u8(offset)?;
        let byte = if on {
            byte | field.mask
        } else {
            byte & !field.mask
        };
        self.raw_mut().write_u8(offset, byte)
    }

    fn byte(&self, slot: u8, field: Field) -> Result<u8, Error> {
        debug_assert_eq!(field.width(), Width::Byte);
        let slot = layout::validate_slot(slot)?;
        self.raw().read_u8(layout::slot_offset(field.offset(), slot))
    }

    fn set_byte(&mut self, slot: u8, field: Field, value: u8) -> Result<(), Error> {
        debug_assert_eq!(field.width(), Width::Byte);
        let slot = layout::validate_slot(slot)?;
        let offset = layout::slot_offset(field.offset(), slot);
        self.raw_mut().write_u8(offset, value)
    }

    fn word(&self, slot: u8, field: Field) -> Result<i32, Error> {
        debug_assert_eq!(field.width(), Width::Word);
        let slot = layout::validate_slot(slot)?;
        self.raw().read_i32(layout::slot_offset(field.offset(), slot))
    }

    fn set_word(&mut self, slot: u8, field: Field, value: i32) -> Result<(), Error> {
        debug_assert_eq!(field.width(), Width::Word);
        let slot = layout::validate_slot(slot)?;
        let offset = layout::slot_offset(field.offset(), slot);
        self.raw_mut().write_i32(offset, value)
    }

    /// Returns true if the level has been completed
    pub fn level_progress(&self, slot: u8, level: u8) -> Result<bool, Error> {
        self.flag(slot, layout::progress(level)?)
    }

    pub fn set_level_progress(&mut self, slot: u8, level: u8, on: bool) -> Result<(), Error> {
        self.set_flag(slot, layout::progress(level)?, on)
    }

    /// Returns true if the level's crystal was collected. Levels 26 and 27
    /// have no crystal.
    pub fn crystal(&self, slot: u8, level: u8) -> Result<bool, Error> {
        self.flag(slot, layout::crystal(level)?)
    }

    pub fn set_crystal(&mut self, slot: u8, level: u8, on: bool) -> Result<(), Error> {
        self.set_flag(slot, layout::crystal(level)?, on)
    }

    pub fn all_boxes_gem(&self, slot: u8, level: u8) -> Result<bool, Error> {
        self.gem(slot, level, GemKind::AllBoxesGem)
    }

    pub fn set_all_boxes_gem(&mut self, slot: u8, level: u8, on: bool) -> Result<(), Error> {
        self.set_gem(slot, level, GemKind::AllBoxesGem, on)
    }

    pub fn second_gem(&self, slot: u8, level: u8) -> Result<bool, Error> {
        self.gem(slot, level, GemKind::SecondGem)
    }

    pub fn set_second_gem(&mut self, slot: u8, level: u8, on: bool) -> Result<(), Error> {
        self.set_gem(slot, level, GemKind::SecondGem, on)
    }

    /// Returns true if the given kind of gem was collected in the level
    pub fn gem(&self, slot: u8, level: u8, kind: GemKind) -> Result<bool, Error> {
        self.flag(slot, gem_field(level, kind)?)
    }

    pub fn set_gem(&mut self, slot: u8, level: u8, kind: GemKind, on: bool) -> Result<(), Error> {
        self.set_flag(slot, gem_field(level, kind)?, on)
    }

    /// Returns true if the level's secret exit was taken. Only levels 7, 13,
    /// 15, 16, and 17 have one.
    pub fn secret_exit(&self, slot: u8, level: u8) -> Result<bool, Error> {
        self.flag(slot, layout::secret_exit(level)?)
    }

    pub fn set_secret_exit(&mut self, slot: u8, level: u8, on: bool) -> Result<(), Error> {
        self.set_flag(slot, layout::secret_exit(level)?, on)
    }

    pub fn boss_defeated(&self, slot: u8, boss: u8) -> Result<bool, Error> {
        self.flag(slot, layout::boss(boss)?)
    }

    pub fn set_boss_defeated(&mut self, slot: u8, boss: u8, on: bool) -> Result<(), Error> {
        self.set_flag(slot, layout::boss(boss)?, on)
    }

    /// Returns true if the polar trick has been performed
    pub fn polar_trick(&self, slot: u8) -> Result<bool, Error> {
        self.flag(slot, layout::polar_trick())
    }

    pub fn set_polar_trick(&mut self, slot: u8, on: bool) -> Result<(), Error> {
        self.set_flag(slot, layout::polar_trick(), on)
    }

    pub fn aku_aku_masks(&self, slot: u8) -> Result<i32, Error> {
        self.word(slot, Field::AkuAkuMasks)
    }

    pub fn set_aku_aku_masks(&mut self, slot: u8, masks: i32) -> Result<(), Error> {
        self.set_word(slot, Field::AkuAkuMasks, masks)
    }

    pub fn lives(&self, slot: u8) -> Result<i32, Error> {
        self.word(slot, Field::Lives)
    }

    pub fn set_lives(&mut self, slot: u8, lives: i32) -> Result<(), Error> {
        self.set_word(slot, Field::Lives, lives)
    }

    pub fn wumpa_fruits(&self, slot: u8) -> Result<i32, Error> {
        self.word(slot, Field::WumpaFruits)
    }

    pub fn set_wumpa_fruits(&mut self, slot: u8, fruits: i32) -> Result<(), Error> {
        self.set_word(slot, Field::WumpaFruits, fruits)
    }

    /// Horizontal screen adjustment from the options menu
    pub fn screen_offset(&self, slot: u8) -> Result<i32, Error> {
        self.word(slot, Field::ScreenOffset)
    }

    pub fn set_screen_offset(&mut self, slot: u8, offset: i32) -> Result<(), Error> {
        self.set_word(slot, Field::ScreenOffset, offset)
    }

    /// The stored last played level. A fresh slot may hold values outside of
    /// `1..=33`, so this is returned as is.
    pub fn last_played_level(&self, slot: u8) -> Result<i32, Error> {
        self.word(slot, Field::LastPlayedLevel)
    }

    /// Sets the last played level, which may also be a boss stage or the
    /// intro (`1..=33`)
    pub fn set_last_played_level(&mut self, slot: u8, level: u8) -> Result<(), Error> {
        let level = layout::validate_level(level, true)?;
        self.set_word(slot, Field::LastPlayedLevel, i32::from(level))
    }

    pub fn username(&self, slot: u8) -> Result<String, Error> {
        let slot = layout::validate_slot(slot)?;
        let offset = layout::slot_offset(layout::NAME_OFFSET, slot);
        let data = self.raw().read_at(offset, layout::NAME_LEN)?;
        Ok(name::decode(data))
    }

    /// Sets the player name. At most 8 ascii characters, excluding `[` and NUL
    /// which the name field uses for spaces and termination.
    pub fn set_username(&mut self, slot: u8, username: &str) -> Result<(), Error> {
        let slot = layout::validate_slot(slot)?;
        let encoded = name::encode(username)?;
        let offset = layout::slot_offset(layout::NAME_OFFSET, slot);
        self.raw_mut().write_at(offset, &encoded)
    }

    pub fn language(&self, slot: u8) -> Result<Language, Error> {
        self.byte(slot, Field::Language).map(Language::new)
    }

    pub fn set_language(&mut self, slot: u8, language: Language) -> Result<(), Error> {
        self.set_byte(slot, Field::Language, language.value())
    }

    pub fn audio_type(&self, slot: u8) -> Result<AudioType, Error> {
        self.byte(slot, Field::AudioType).map(AudioType::new)
    }

    pub fn set_audio_type(&mut self, slot: u8, audio: AudioType) -> Result<(), Error> {
        self.set_byte(slot, Field::AudioType, audio.value())
    }

    /// Sound effects volume as the percentage shown in the options menu
    pub fn effects_volume(&self, slot: u8) -> Result<u8, Error> {
        volume::from_raw(self.word(slot, Field::EffectsVolume)?)
    }

    /// Sets the effects volume. Only percentages from
    /// [`supported_volumes`](super::supported_volumes) are accepted.
    pub fn set_effects_volume(&mut self, slot: u8, volume: u8) -> Result<(), Error> {
        let slot = layout::validate_slot(slot)?;
        let raw = volume::to_raw(volume)?;
        self.set_word(slot, Field::EffectsVolume, raw)
    }

    /// Music volume as the percentage shown in the options menu
    pub fn music_volume(&self, slot: u8) -> Result<u8, Error> {
        volume::from_raw(self.word(slot, Field::MusicVolume)?)
    }

    pub fn set_music_volume(&mut self, slot: u8, volume: u8) -> Result<(), Error> {
        let slot = layout::validate_slot(slot)?;
        let raw = volume::to_raw(volume)?;
        self.set_word(slot, Field::MusicVolume, raw)
    }

    /// Returns true if the slot holds no game
    pub fn is_slot_empty(&self, slot: u8) -> Result<bool, Error> {
        self.byte(slot, Field::Empty).map(|x| x == 1)
    }

    pub fn set_slot_empty(&mut self, slot: u8, empty: bool) -> Result<(), Error> {
        self.set_byte(slot, Field::Empty, u8::from(empty))
    }

    /// Number of crystals collected in the slot
    pub fn crystal_count(&self, slot: u8) -> Result<usize, Error> {
        let mut count = 0;
        for level in (1..=LEVELS).filter(|&x| layout::has_crystal(x)) {
            count += usize::from(self.crystal(slot, level)?);
        }
        Ok(count)
    }

    /// Number of gems of either kind collected in the slot
    pub fn gem_count(&self, slot: u8) -> Result<usize, Error> {
        let mut count = 0;
        for level in 1..=LEVELS {
            count += usize::from(self.all_boxes_gem(slot, level)?);
            if layout::has_second_gem(level) {
                count += usize::from(self.second_gem(slot, level)?);
            }
        }
        Ok(count)
    }

    /// Number of bosses defeated in the slot
    pub fn bosses_defeated(&self, slot: u8) -> Result<usize, Error> {
        let mut count = 0;
        for boss in 1..=BOSSES {
            count += usize::from(self.boss_defeated(slot, boss)?);
        }
        Ok(count)
    }

    /// Snapshot of a slot's state
    pub fn slot_summary(&self, slot: u8) -> Result<SlotSummary, Error> {
        Ok(SlotSummary {
            slot: layout::validate_slot(slot)?,
            empty: self.is_slot_empty(slot)?,
            username: self.username(slot)?,
            last_played_level: self.last_played_level(slot)?,
            lives: self.lives(slot)?,
            wumpa_fruits: self.wumpa_fruits(slot)?,
            aku_aku_masks: self.aku_aku_masks(slot)?,
            crystals: self.crystal_count(slot)?,
            gems: self.gem_count(slot)?,
            bosses_defeated: self.bosses_defeated(slot)?,
            polar_trick: self.polar_trick(slot)?,
            language: self.language(slot)?,
            audio_type: self.audio_type(slot)?,
            effects_volume: self.effects_volume(slot).ok(),
            music_volume: self.music_volume(slot).ok(),
            screen_offset: self.screen_offset(slot)?,
        })
    }

    /// The checksum currently stored in the save
    pub fn checksum(&self) -> u32 {
        checksum::stored(self.raw())
    }

    /// Stores a checksum as is. Combine with
    /// [`ChecksumMode::PreserveStored`] to export a deliberately wrong value.
    pub fn set_checksum(&mut self, value: u32) {
        checksum::store(self.raw_mut(), value)
    }

    /// Computes the checksum the game expects for the current contents
    pub fn compute_checksum(&self) -> u32 {
        checksum::compute(self.raw())
    }

    /// Returns true if the stored checksum matches the contents
    pub fn is_checksum_valid(&self) -> bool {
        self.checksum() == self.compute_checksum()
    }

    fn prepare_export(&mut self) {
        if self.mode == ChecksumMode::AutoCorrect {
            let stored = self.checksum();
            let computed = checksum::repair(self.raw_mut());
            if stored != computed {
                log::debug!("patched stale checksum {:#010x} -> {:#010x}", stored, computed);
            }
        }
    }

    /// Returns a copy of the save, ready to be written back to a memory card.
    ///
    /// With [`ChecksumMode::AutoCorrect`] this first recomputes the checksum
    /// and stores it in this instance, so [`Crash2Save::checksum`] reflects
    /// the exported value afterwards.
    pub fn export(&mut self) -> Vec<u8> {
        self.prepare_export();
        self.raw().to_vec()
    }

    /// Writes the save to a writer with the same checksum behavior as
    /// [`Crash2Save::export`]
    pub fn write<W>(&mut self, mut writer: W) -> Result<(), Error>
    where
        W: Write,
    {
        self.prepare_export();
        writer.write_all(self.raw().as_bytes())?;
        Ok(())
    }
}

fn gem_field(level: u8, kind: GemKind) -> Result<FlagField, Error> {
    match kind {
        GemKind::AllBoxesGem => layout::all_boxes_gem(level),
        GemKind::SecondGem => layout::second_gem(level),
    }
}
