use super::{EntityId, Position};

/// Category tag of an interactable world object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ObjectKind {
    /// Stationary stone that lets party members pull each other over.
    MeetingStone,
    /// Portal-style ritual a player opens to pull in a party member.
    SummoningRitual,
    /// Any other object type, tagged with the host's raw type id.
    Other(u16),
}

impl ObjectKind {
    pub fn is_summoning_ritual(self) -> bool {
        matches!(self, ObjectKind::SummoningRitual)
    }
}

/// Interactable object placed in the world by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldObject {
    pub id: EntityId,
    pub kind: ObjectKind,
    pub position: Position,
    /// False while the object is despawned (respawn timer, quest phase).
    #[cfg_attr(feature = "serde", serde(default = "spawned_by_default"))]
    pub is_spawned: bool,
}

#[cfg(feature = "serde")]
fn spawned_by_default() -> bool {
    true
}

impl WorldObject {
    pub fn new(id: EntityId, kind: ObjectKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            is_spawned: true,
        }
    }

    pub fn despawned(mut self) -> Self {
        self.is_spawned = false;
        self
    }
}
