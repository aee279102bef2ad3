//! Text the bot says to its controller.
//!
//! Actions never format strings themselves; they hand a [`Notice`] to the
//! host's [`Narrator`], which decides how to deliver it (whisper, party chat,
//! log line). The wording depends on whether the bot or the controller is the
//! subject of the message.

use std::fmt;

/// Who a notice talks about, which selects first or second person wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Party {
    Bot,
    Controller,
}

/// Everything the summoning rules may tell the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notice {
    /// Controller brought the bot over.
    Hello,
    /// Bot brought the controller over.
    Welcome,
    /// A dead companion was revived on arrival.
    Revived,
    InCombat,
    /// `summoner` has no spawned meeting stone within sight.
    NoMeetingStone { summoner: Party },
    /// `summoner` has no innkeeper within sight.
    NoInnkeeper { summoner: Party },
    /// `joiner` carries no recall item.
    NoRecallItem { joiner: Party },
    /// `joiner`'s recall ability is still cooling down.
    RecallNotReady { joiner: Party },
    /// Every landing spot around the summoner is obstructed.
    NotEnoughPlace,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Notice::Hello => "Hello!",
            Notice::Welcome => "Welcome!",
            Notice::Revived => "I live, again!",
            Notice::InCombat => "I am in combat",
            Notice::NoMeetingStone {
                summoner: Party::Bot,
            } => "There is no meeting stone nearby",
            Notice::NoMeetingStone {
                summoner: Party::Controller,
            } => "There is no meeting stone near you",
            Notice::NoInnkeeper {
                summoner: Party::Bot,
            } => "There are no innkeepers nearby",
            Notice::NoInnkeeper {
                summoner: Party::Controller,
            } => "There are no innkeepers near you",
            Notice::NoRecallItem { joiner: Party::Bot } => "I have no hearthstone",
            Notice::NoRecallItem {
                joiner: Party::Controller,
            } => "You have no hearthstone",
            Notice::RecallNotReady { joiner: Party::Bot } => "My hearthstone is not ready",
            Notice::RecallNotReady {
                joiner: Party::Controller,
            } => "Your hearthstone is not ready",
            Notice::NotEnoughPlace => "Not enough place to summon",
        };
        f.write_str(text)
    }
}

/// Delivery channel of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Plain message to the controller.
    Master,
    /// Failure explanation.
    Error,
}

/// Sink for everything the bot says.
pub trait Narrator {
    fn tell_master(&mut self, notice: Notice);
    fn tell_error(&mut self, notice: Notice);
}

/// Narrator that keeps every notice in order, for hosts that relay them later.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NarrationLog {
    entries: Vec<(Channel, Notice)>,
}

impl NarrationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(Channel, Notice)] {
        &self.entries
    }

    pub fn notices(&self) -> impl Iterator<Item = Notice> + '_ {
        self.entries.iter().map(|(_, notice)| *notice)
    }

    pub fn errors(&self) -> impl Iterator<Item = Notice> + '_ {
        self.entries
            .iter()
            .filter(|(channel, _)| *channel == Channel::Error)
            .map(|(_, notice)| *notice)
    }

    pub fn contains(&self, notice: Notice) -> bool {
        self.notices().any(|logged| logged == notice)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns everything logged so far.
    pub fn drain(&mut self) -> Vec<(Channel, Notice)> {
        std::mem::take(&mut self.entries)
    }
}

impl Narrator for NarrationLog {
    fn tell_master(&mut self, notice: Notice) {
        self.entries.push((Channel::Master, notice));
    }

    fn tell_error(&mut self, notice: Notice) {
        self.entries.push((Channel::Error, notice));
    }
}
