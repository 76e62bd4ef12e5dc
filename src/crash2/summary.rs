use super::kinds::{AudioType, Language};

/// Point in time view of a single slot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotSummary {
    pub slot: u8,
    pub empty: bool,
    pub username: String,
    pub last_played_level: i32,
    pub lives: i32,
    pub wumpa_fruits: i32,
    pub aku_aku_masks: i32,
    pub crystals: usize,
    pub gems: usize,
    pub bosses_defeated: usize,
    pub polar_trick: bool,
    pub language: Language,
    pub audio_type: AudioType,

    /// `None` when the stored value does not map to a menu percentage
    pub effects_volume: Option<u8>,
    pub music_volume: Option<u8>,
    pub screen_offset: i32,
}
