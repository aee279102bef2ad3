use summon_core::EntityId;

/// Requests addressed to a bot by its controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotCommand {
    /// "Bring companion to me."
    Summon { controller: EntityId, bot: EntityId },
}

/// Things that happened in the world that a bot may react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorldEvent {
    /// `controller` used `object`; `bot` is the bot observing it.
    ObjectUsed {
        bot: EntityId,
        controller: Option<EntityId>,
        object: EntityId,
    },
}
