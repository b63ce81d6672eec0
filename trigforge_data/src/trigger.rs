//! Trigger aggregate: the players a rule applies to plus its ordered
//! conditions and actions.

use serde::{Deserialize, Serialize};

use crate::statements::{Action, Condition};
use crate::values::Player;

/// One rule unit in the target editor.
///
/// Conditions and actions keep caller-supplied order; that order is the order
/// they are emitted in, and the order the editor evaluates them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub players: Vec<Player>,
    pub conditions: Vec<Condition>,
    pub actions: Vec<Action>,
}

impl Trigger {
    pub fn new(players: Vec<Player>, conditions: Vec<Condition>, actions: Vec<Action>) -> Self {
        Self {
            players,
            conditions,
            actions,
        }
    }

    /// Appends an action after construction. Used to attach a provenance
    /// comment to an already-built trigger before the final compile.
    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_action_appends_in_order() {
        let mut trigger = Trigger::new(vec![Player::ALL_PLAYERS], vec![Condition::Always], vec![]);
        trigger.add_action(Action::Victory);
        trigger.add_action(Action::PreserveTrigger);
        assert_eq!(
            trigger.actions,
            vec![Action::Victory, Action::PreserveTrigger]
        );
    }
}
