//! Token wrapper types for TrigEdit values.
//!
//! Each type tags one semantic category (player, unit, quantifier, ...) over
//! the raw token text the trigger dialect expects. Tokens are stored verbatim
//! and never validated. Where the dialect wants a quoted literal (named
//! players, units, AI scripts), the stored token carries its own double
//! quotes, e.g. `"Current Player"`.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::statements::Arg;

macro_rules! define_token {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            pub fn new(token: impl Into<String>) -> Self {
                Self(Cow::Owned(token.into()))
            }

            pub const fn from_static(token: &'static str) -> Self {
                Self(Cow::Borrowed(token))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&$name> for Arg {
            fn from(token: &$name) -> Self {
                Arg::Token(token.0.clone().into_owned())
            }
        }
    };
}

define_token! {
    /// A player or player-group reference, e.g. `"Current Player"`.
    Player
}

define_token! {
    /// A unit name, e.g. `"Terran Marine"`.
    Unit
}

define_token! {
    /// A comparison quantifier (`At least`, `At most`, `Exactly`).
    Quantifier
}

define_token! {
    /// An arithmetic operation on a counter (`Add`, `Set To`, `Subtract`).
    Operation
}

define_token! {
    /// A resource kind (`ore`, `gas`).
    Resource
}

define_token! {
    /// A toggleable state (`enabled`, `disabled`, `not set`).
    State
}

define_token! {
    /// What to do to a switch (`set`, `clear`, `toggle`, `randomize`).
    SwitchAction
}

define_token! {
    /// An alliance setting (`Ally`, `Enemy`, `Allied Victory`).
    Alliance
}

define_token! {
    /// An order issued to units (`patrol`, ...).
    UnitOrder
}

define_token! {
    /// An AI script identifier, e.g. `"+Vi7"`.
    AiScript
}

define_token! {
    /// Message visibility for text display actions.
    Visibility
}

define_token! {
    /// A unit count that is either a number or the literal `All`.
    Count
}

impl Player {
    pub const ALL_PLAYERS: Player = Player::from_static("\"All players\"");
    pub const ALLIES: Player = Player::from_static("\"Allies\"");
    pub const CURRENT_PLAYER: Player = Player::from_static("\"Current Player\"");
    pub const FOES: Player = Player::from_static("\"Foes\"");
    pub const P1: Player = Player::from_static("\"Player 1\"");
    pub const P2: Player = Player::from_static("\"Player 2\"");
    pub const P3: Player = Player::from_static("\"Player 3\"");
    pub const P4: Player = Player::from_static("\"Player 4\"");
    pub const P5: Player = Player::from_static("\"Player 5\"");
    pub const P6: Player = Player::from_static("\"Player 6\"");
    pub const P7: Player = Player::from_static("\"Player 7\"");
    pub const P8: Player = Player::from_static("\"Player 8\"");
    pub const P9: Player = Player::from_static("\"Player 9\"");
    pub const P10: Player = Player::from_static("\"Player 10\"");
    pub const P11: Player = Player::from_static("\"Player 11\"");
    pub const P12: Player = Player::from_static("\"Player 12\"");

    /// Extracts the player number embedded in the token, if any.
    ///
    /// `"Player 10"` yields `Some(10)`; group references like `"Foes"` have
    /// no number and yield `None`.
    pub fn number(&self) -> Option<u32> {
        let digits: String = self.0.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

impl Quantifier {
    pub const AT_LEAST: Quantifier = Quantifier::from_static("At least");
    pub const AT_MOST: Quantifier = Quantifier::from_static("At most");
    pub const EXACTLY: Quantifier = Quantifier::from_static("Exactly");
}

impl Operation {
    pub const ADD: Operation = Operation::from_static("Add");
    pub const SET_TO: Operation = Operation::from_static("Set To");
    pub const SUBTRACT: Operation = Operation::from_static("Subtract");
}

impl Resource {
    pub const ORE: Resource = Resource::from_static("ore");
    pub const GAS: Resource = Resource::from_static("gas");
}

impl State {
    pub const ENABLED: State = State::from_static("enabled");
    pub const DISABLED: State = State::from_static("disabled");
    pub const NOT_SET: State = State::from_static("not set");
}

impl SwitchAction {
    pub const SET: SwitchAction = SwitchAction::from_static("set");
    pub const CLEAR: SwitchAction = SwitchAction::from_static("clear");
    pub const TOGGLE: SwitchAction = SwitchAction::from_static("toggle");
    pub const RANDOMIZE: SwitchAction = SwitchAction::from_static("randomize");
}

impl Alliance {
    pub const ALLY: Alliance = Alliance::from_static("Ally");
    pub const ENEMY: Alliance = Alliance::from_static("Enemy");
    pub const ALLIED_VICTORY: Alliance = Alliance::from_static("Allied Victory");
}

impl UnitOrder {
    pub const PATROL: UnitOrder = UnitOrder::from_static("patrol");
}

impl AiScript {
    pub const VI6: AiScript = AiScript::from_static("\"+Vi6\"");
    pub const VI7: AiScript = AiScript::from_static("\"+Vi7\"");
    pub const JYDG: AiScript = AiScript::from_static("\"JYDg\"");
}

impl Visibility {
    pub const ALWAYS_DISPLAY: Visibility = Visibility::from_static("Always Display");
}

impl Count {
    pub const ALL: Count = Count::from_static("All");

    /// A concrete unit count.
    pub fn of(count: u32) -> Count {
        Count::new(count.to_string())
    }
}
