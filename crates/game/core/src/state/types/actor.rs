//! Actor state as seen by the summoning rules.
//!
//! Actors (players, bots, NPCs) are owned by the host world. The core reads
//! their flags and mutates them only through the helpers below, so that every
//! relocation, revive, and cooldown spend keeps the actor's invariants intact.

use std::collections::BTreeMap;

use bitflags::bitflags;

use super::{AbilityId, EntityId, GameTime, GroupId, ItemId, Position, ResourceMeter, SecurityLevel};

bitflags! {
    /// Service roles advertised by an NPC.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NpcFlags: u32 {
        const GOSSIP      = 1 << 0;
        const VENDOR      = 1 << 1;
        const TRAINER     = 1 << 2;
        const FLIGHT_MASTER = 1 << 3;
        const INNKEEPER   = 1 << 4;
        const BANKER      = 1 << 5;
        const SPIRIT_HEALER = 1 << 6;
    }
}

/// Reaction mode of a controlled companion creature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ReactState {
    Passive,
    #[default]
    Defensive,
    Aggressive,
}

/// Standing command of a controlled companion creature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CompanionCommand {
    Stay,
    #[default]
    Follow,
    Attack,
}

/// Companion creature (pet) controlled by an actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompanionState {
    pub id: EntityId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub react_state: ReactState,
    #[cfg_attr(feature = "serde", serde(default))]
    pub command: CompanionCommand,
}

impl CompanionState {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            react_state: ReactState::default(),
            command: CompanionCommand::default(),
        }
    }

    /// Stops the companion from engaging anything and pins it in place.
    pub fn stand_down(&mut self) {
        self.react_state = ReactState::Passive;
        self.command = CompanionCommand::Stay;
    }
}

/// Movement order currently queued on an actor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MotionOrder {
    #[default]
    Idle,
    Follow(EntityId),
    MoveTo(Position),
}

/// Full actor record consumed by the summoning rules.
///
/// # Invariants
///
/// - `in_transit` is only raised through [`ActorState::begin_transit`], which
///   refuses to overlap an in-progress relocation.
/// - An actor is dead exactly when `health.current == 0`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub position: Position,

    /// Bearing (radians) the actor keeps relative to whoever it follows.
    #[cfg_attr(feature = "serde", serde(default))]
    pub follow_angle: f32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub in_combat: bool,

    /// Set while a teleport is in flight; the host clears it on arrival.
    #[cfg_attr(feature = "serde", serde(default))]
    pub in_transit: bool,

    pub health: ResourceMeter,

    /// Set when a death-recovery penalty is active.
    #[cfg_attr(feature = "serde", serde(default))]
    pub resurrection_sickness: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: BTreeMap<ItemId, u32>,

    /// Ability cooldowns keyed by ability, valued by expiry time.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldowns: BTreeMap<AbilityId, GameTime>,

    /// Durability of each equipped item.
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: Vec<ResourceMeter>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub group: Option<GroupId>,

    /// Explicit interaction target (selected unit), if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Option<EntityId>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub security: SecurityLevel,

    #[cfg_attr(feature = "serde", serde(default))]
    pub npc_flags: NpcFlags,

    #[cfg_attr(feature = "serde", serde(default))]
    pub companion: Option<CompanionState>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub motion: MotionOrder,
}

impl ActorState {
    /// Creates a living, idle, ungrouped actor at `position`.
    pub fn new(id: EntityId, position: Position, max_health: u32) -> Self {
        Self {
            id,
            position,
            follow_angle: 0.0,
            in_combat: false,
            in_transit: false,
            health: ResourceMeter::full(max_health),
            resurrection_sickness: false,
            inventory: BTreeMap::new(),
            cooldowns: BTreeMap::new(),
            equipment: Vec::new(),
            group: None,
            target: None,
            security: SecurityLevel::Player,
            npc_flags: NpcFlags::empty(),
            companion: None,
            motion: MotionOrder::Idle,
        }
    }

    pub fn with_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_npc_flags(mut self, flags: NpcFlags) -> Self {
        self.npc_flags = flags;
        self
    }

    pub fn with_item(mut self, item: ItemId, count: u32) -> Self {
        self.inventory.insert(item, count);
        self
    }

    pub fn with_security(mut self, security: SecurityLevel) -> Self {
        self.security = security;
        self
    }

    pub fn with_follow_angle(mut self, angle: f32) -> Self {
        self.follow_angle = angle;
        self
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_empty()
    }

    /// Returns true if this actor is an NPC offering every service in `flags`.
    pub fn offers(&self, flags: NpcFlags) -> bool {
        !flags.is_empty() && self.npc_flags.contains(flags)
    }

    pub fn item_count(&self, item: ItemId) -> u32 {
        self.inventory.get(&item).copied().unwrap_or(0)
    }

    pub fn has_item_count(&self, item: ItemId, count: u32) -> bool {
        self.item_count(item) >= count
    }

    /// Returns true while `ability` is still cooling down at `now`.
    pub fn is_on_cooldown(&self, ability: AbilityId, now: GameTime) -> bool {
        self.cooldowns
            .get(&ability)
            .is_some_and(|expires_at| *expires_at > now)
    }

    pub fn start_cooldown(&mut self, ability: AbilityId, expires_at: GameTime) {
        self.cooldowns.insert(ability, expires_at);
    }

    /// Same-group check used when the controller has no explicit target.
    ///
    /// Two ungrouped actors count as sharing the (absent) group.
    pub fn shares_group_with(&self, other: &ActorState) -> bool {
        self.group == other.group
    }

    /// Brings a dead actor back with full health and no recovery penalty.
    pub fn resurrect(&mut self) {
        self.health.refill();
        self.resurrection_sickness = false;
    }

    /// Restores every equipped item to full durability.
    pub fn repair_all(&mut self) {
        for durability in &mut self.equipment {
            durability.refill();
        }
    }

    pub fn clear_motion(&mut self) {
        self.motion = MotionOrder::Idle;
    }

    /// Compare-and-set entry into transit.
    ///
    /// Moves the actor to `destination` and raises `in_transit`. Returns false
    /// without touching anything when a relocation is already in flight.
    pub fn begin_transit(&mut self, destination: Position) -> bool {
        if self.in_transit {
            return false;
        }
        self.in_transit = true;
        self.position = destination;
        true
    }

    /// Clears the transit flag once the host has finished the relocation.
    pub fn complete_transit(&mut self) -> bool {
        std::mem::replace(&mut self.in_transit, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MapId;

    fn actor() -> ActorState {
        ActorState::new(EntityId(7), Position::new(MapId(0), 1.0, 2.0, 3.0), 100)
    }

    #[test]
    fn begin_transit_refuses_to_overlap() {
        let mut actor = actor();
        let first = Position::new(MapId(0), 5.0, 5.0, 3.0);
        let second = Position::new(MapId(0), 9.0, 9.0, 3.0);

        assert!(actor.begin_transit(first));
        assert!(!actor.begin_transit(second));
        assert_eq!(actor.position, first);

        assert!(actor.complete_transit());
        assert!(!actor.in_transit);
        assert!(actor.begin_transit(second));
    }

    #[test]
    fn cooldown_expires_at_its_deadline() {
        let mut actor = actor();
        let recall = AbilityId(8690);
        actor.start_cooldown(recall, GameTime(1_000));

        assert!(actor.is_on_cooldown(recall, GameTime(999)));
        assert!(!actor.is_on_cooldown(recall, GameTime(1_000)));
        assert!(!actor.is_on_cooldown(AbilityId(1), GameTime(0)));
    }

    #[test]
    fn resurrect_clears_sickness_and_repair_fills_equipment() {
        let mut actor = actor();
        actor.health.current = 0;
        actor.resurrection_sickness = true;
        actor.equipment = vec![ResourceMeter::new(0, 50), ResourceMeter::new(10, 80)];

        assert!(actor.is_dead());
        actor.resurrect();
        actor.repair_all();

        assert!(actor.is_alive());
        assert!(actor.health.is_full());
        assert!(!actor.resurrection_sickness);
        assert!(actor.equipment.iter().all(ResourceMeter::is_full));
    }

    #[test]
    fn offers_requires_every_requested_flag() {
        let innkeeper = actor().with_npc_flags(NpcFlags::INNKEEPER | NpcFlags::VENDOR);
        assert!(innkeeper.offers(NpcFlags::INNKEEPER));
        assert!(!innkeeper.offers(NpcFlags::BANKER));
        assert!(!innkeeper.offers(NpcFlags::empty()));
    }
}
