use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of travel-preference flags, one boolean per attribute.
///
/// The field order below is the canonical encoding order consumed by the
/// vector codec. It is frozen: reordering fields breaks comparability with
/// embeddings already stored for other users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceFlags {
    // Alcohol tolerance tiers
    #[serde(default)]
    pub drinks_often: bool,
    #[serde(default)]
    pub drinks_socially: bool,
    #[serde(default)]
    pub drinks_never: bool,

    // Smoking
    #[serde(default)]
    pub smoker: bool,

    // Personality
    #[serde(default)]
    pub friendly: bool,
    #[serde(default)]
    pub quiet: bool,
    #[serde(default)]
    pub leads_group: bool,
    #[serde(default)]
    pub party_spirit: bool,
    #[serde(default)]
    pub researches_ahead: bool,
    #[serde(default)]
    pub good_listener: bool,

    // Activity preferences
    #[serde(default)]
    pub scenery: bool,
    #[serde(default)]
    pub cafes: bool,
    #[serde(default)]
    pub local_food: bool,
    #[serde(default)]
    pub photography: bool,
    #[serde(default)]
    pub shopping: bool,
    #[serde(default)]
    pub outdoor_activities: bool,

    // Travel pace
    #[serde(default)]
    pub relaxed_pace: bool,
    #[serde(default)]
    pub packed_schedule: bool,
    #[serde(default)]
    pub flexible_pace: bool,

    // Destination type
    #[serde(default)]
    pub city_trips: bool,
    #[serde(default)]
    pub healing_trips: bool,
    #[serde(default)]
    pub beach_trips: bool,
    #[serde(default)]
    pub mountain_trips: bool,
}

impl PreferenceFlags {
    /// Flags in canonical encoding order.
    pub fn as_array(&self) -> [bool; crate::codec::FLAG_COUNT] {
        [
            self.drinks_often,
            self.drinks_socially,
            self.drinks_never,
            self.smoker,
            self.friendly,
            self.quiet,
            self.leads_group,
            self.party_spirit,
            self.researches_ahead,
            self.good_listener,
            self.scenery,
            self.cafes,
            self.local_food,
            self.photography,
            self.shopping,
            self.outdoor_activities,
            self.relaxed_pace,
            self.packed_schedule,
            self.flexible_pace,
            self.city_trips,
            self.healing_trips,
            self.beach_trips,
            self.mountain_trips,
        ]
    }
}

/// Preference profile entity - one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    /// Owning user
    pub user_id: Uuid,
    /// Preference flags in canonical order
    #[serde(flatten)]
    pub flags: PreferenceFlags,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for saving (creating or fully replacing) a user's preferences
#[derive(Debug, Clone, Deserialize)]
pub struct SavePreferences {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub flags: PreferenceFlags,
}
