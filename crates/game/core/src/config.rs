use crate::state::{AbilityId, ItemId, SecurityLevel};

/// When a dead companion may be revived on arrival.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RevivePolicy {
    /// Never revive on summon.
    Never,
    /// Revive only while the controller is alive and out of combat.
    #[default]
    WhenControllerSafe,
    /// Always revive on summon.
    Always,
}

/// Summoning configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SummonConfig {
    /// Radius searched for meeting stones and innkeepers.
    pub sight_distance: f32,
    /// Distance from the summoner at which the joiner lands.
    pub follow_distance: f32,
    pub revive_policy: RevivePolicy,
    /// Enables the innkeeper + hearthstone mechanism.
    pub summon_at_innkeepers: bool,
    /// Controllers at or above this level pull the bot over directly.
    pub direct_summon_security: SecurityLevel,
    /// Recall item that must be carried by the joiner for the innkeeper mechanism.
    pub recall_item: ItemId,
    /// Ability whose cooldown gates the innkeeper mechanism.
    pub recall_ability: AbilityId,
}

impl SummonConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SIGHT_DISTANCE: f32 = 75.0;
    pub const DEFAULT_FOLLOW_DISTANCE: f32 = 1.5;
    pub const DEFAULT_RECALL_ITEM: ItemId = ItemId(6948);
    pub const DEFAULT_RECALL_ABILITY: AbilityId = AbilityId(8690);

    pub fn new() -> Self {
        Self {
            sight_distance: Self::DEFAULT_SIGHT_DISTANCE,
            follow_distance: Self::DEFAULT_FOLLOW_DISTANCE,
            revive_policy: RevivePolicy::default(),
            summon_at_innkeepers: true,
            direct_summon_security: SecurityLevel::GameMaster,
            recall_item: Self::DEFAULT_RECALL_ITEM,
            recall_ability: Self::DEFAULT_RECALL_ABILITY,
        }
    }

    pub fn with_revive_policy(mut self, revive_policy: RevivePolicy) -> Self {
        self.revive_policy = revive_policy;
        self
    }

    pub fn with_innkeepers(mut self, enabled: bool) -> Self {
        self.summon_at_innkeepers = enabled;
        self
    }

    pub fn with_follow_distance(mut self, follow_distance: f32) -> Self {
        self.follow_distance = follow_distance;
        self
    }

    pub fn with_direct_summon_security(mut self, level: SecurityLevel) -> Self {
        self.direct_summon_security = level;
        self
    }
}

impl Default for SummonConfig {
    fn default() -> Self {
        Self::new()
    }
}
