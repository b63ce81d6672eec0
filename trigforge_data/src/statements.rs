//! Statement model for TrigEdit conditions and actions.
//!
//! Every variant declares a static [`StatementSchema`]: its tag in the text
//! dialect, the ordered field names, and the set of fields whose bare string
//! values must be double-quoted on output. Declaration order of the fields IS
//! the dialect's positional argument order, so the schema doubles as the
//! serialization contract.

use serde::{Deserialize, Serialize};

use crate::values::{
    AiScript, Alliance, Count, Operation, Player, Quantifier, Resource, State, SwitchAction, Unit,
    UnitOrder, Visibility,
};

/// Runtime value of a single statement field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arg {
    /// A pre-formed token from a value wrapper; emitted verbatim.
    Token(String),
    /// A bare string; double-quoted on output when the schema lists its field.
    Text(String),
    /// An integer; emitted as decimal text.
    Number(u32),
}

/// Static serialization schema for one statement kind.
#[derive(Debug, PartialEq, Eq)]
pub struct StatementSchema {
    /// Tag used in the text dialect, e.g. `Create Unit`.
    pub tag: &'static str,
    /// Field names in positional argument order.
    pub fields: &'static [&'static str],
    /// Fields whose bare string values are double-quoted on output.
    pub quoted: &'static [&'static str],
}

/// Common surface of conditions and actions: the schema plus the current
/// field values in schema order.
pub trait Statement {
    fn schema(&self) -> &'static StatementSchema;

    /// Field values in schema order; `args().len()` always equals
    /// `schema().fields.len()`.
    fn args(&self) -> Vec<Arg>;
}

/// A trigger condition: evaluated by the editor to decide whether the
/// trigger's actions fire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Accumulate {
        player: Player,
        quantifier: Quantifier,
        amount: u32,
        resource: Resource,
    },
    Always,
    Bring {
        player: Player,
        unit: Unit,
        location: String,
        quantifier: Quantifier,
        count: u32,
    },
    Command {
        player: Player,
        unit: Unit,
        quantifier: Quantifier,
        count: u32,
    },
    CountdownTimer {
        quantifier: Quantifier,
        count: u32,
    },
    Deaths {
        player: Player,
        unit: Unit,
        quantifier: Quantifier,
        count: u32,
    },
    HighestScore {
        score: String,
    },
    Never,
    Switch {
        switch: String,
        state: State,
    },
}

/// A trigger action: executed when the owning trigger's conditions hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    CenterView {
        location: String,
    },
    Comment {
        text: String,
    },
    CreateUnit {
        player: Player,
        unit: Unit,
        count: u32,
        location: String,
    },
    CreateUnitWithProperties {
        player: Player,
        unit: Unit,
        count: u32,
        location: String,
        properties: u32,
    },
    Defeat,
    DisplayTextMessage {
        visibility: Visibility,
        text: String,
    },
    GiveUnitsToPlayer {
        from_player: Player,
        to_player: Player,
        unit: Unit,
        count: Count,
        location: String,
    },
    KillUnit {
        player: Player,
        unit: Unit,
    },
    KillUnitAtLocation {
        player: Player,
        unit: Unit,
        count: Count,
        location: String,
    },
    LeaderBoardControl {
        title: String,
        unit: Unit,
    },
    LeaderBoardKills {
        title: String,
        unit: Unit,
    },
    LeaderBoardPoints {
        title: String,
        score: String,
    },
    LeaderboardComputerPlayers {
        state: State,
    },
    MinimapPing {
        location: String,
    },
    ModifyUnitEnergy {
        player: Player,
        unit: Unit,
        resource: Resource,
        count: u32,
        location: String,
    },
    ModifyUnitHangerCount {
        player: Player,
        unit: Unit,
        percent: u32,
        count: u32,
        location: String,
    },
    ModifyUnitHitPoints {
        player: Player,
        unit: Unit,
        percent: u32,
        count: u32,
        location: String,
    },
    ModifyUnitShieldPoints {
        player: Player,
        unit: Unit,
        percent: u32,
        count: u32,
        location: String,
    },
    MoveLocation {
        player: Player,
        unit: Unit,
        unit_location: String,
        location: String,
    },
    MoveUnit {
        player: Player,
        unit: Unit,
        count: Count,
        from_location: String,
        to_location: String,
    },
    Order {
        player: Player,
        unit: Unit,
        source_location: String,
        dest_location: String,
        order: UnitOrder,
    },
    PlayWav {
        wav: String,
        duration: u32,
    },
    PreserveTrigger,
    RemoveUnit {
        player: Player,
        unit: Unit,
    },
    RemoveUnitAtLocation {
        player: Player,
        unit: Unit,
        count: Count,
        location: String,
    },
    RunAiScript {
        script: AiScript,
    },
    RunAiScriptAtLocation {
        script: AiScript,
        location: String,
    },
    SetAllianceStatus {
        player: Player,
        alliance: Alliance,
    },
    SetCountdownTimer {
        operation: Operation,
        seconds: u32,
    },
    SetDeaths {
        player: Player,
        unit: Unit,
        operation: Operation,
        count: u32,
    },
    SetDoodadState {
        player: Player,
        unit: Unit,
        location: String,
        state: State,
    },
    SetInvincibility {
        player: Player,
        unit: Unit,
        location: String,
        state: State,
    },
    SetMissionObjectives {
        text: String,
    },
    SetResources {
        player: Player,
        operation: Operation,
        amount: u32,
        resource: Resource,
    },
    SetScore {
        player: Player,
        operation: Operation,
        count: u32,
        score: String,
    },
    SetSwitch {
        switch: String,
        action: SwitchAction,
    },
    Victory,
    Wait {
        milliseconds: u32,
    },
}

impl Action {
    /// A text message shown with the default visibility.
    pub fn display_text(text: impl Into<String>) -> Action {
        Action::DisplayTextMessage {
            visibility: Visibility::ALWAYS_DISPLAY,
            text: text.into(),
        }
    }

    pub fn comment(text: impl Into<String>) -> Action {
        Action::Comment { text: text.into() }
    }
}

impl Statement for Condition {
    fn schema(&self) -> &'static StatementSchema {
        match self {
            Condition::Accumulate { .. } => &StatementSchema {
                tag: "Accumulate",
                fields: &["player", "quantifier", "amount", "resource"],
                quoted: &["player"],
            },
            Condition::Always => &StatementSchema {
                tag: "Always",
                fields: &[],
                quoted: &[],
            },
            Condition::Bring { .. } => &StatementSchema {
                tag: "Bring",
                fields: &["player", "unit", "location", "quantifier", "count"],
                quoted: &["player", "unit", "location"],
            },
            Condition::Command { .. } => &StatementSchema {
                tag: "Command",
                fields: &["player", "unit", "quantifier", "count"],
                quoted: &["player", "unit"],
            },
            Condition::CountdownTimer { .. } => &StatementSchema {
                tag: "Countdown Timer",
                fields: &["quantifier", "count"],
                quoted: &[],
            },
            Condition::Deaths { .. } => &StatementSchema {
                tag: "Deaths",
                fields: &["player", "unit", "quantifier", "count"],
                quoted: &["player", "unit"],
            },
            Condition::HighestScore { .. } => &StatementSchema {
                tag: "Highest Score",
                fields: &["score"],
                quoted: &[],
            },
            Condition::Never => &StatementSchema {
                tag: "Never",
                fields: &[],
                quoted: &[],
            },
            Condition::Switch { .. } => &StatementSchema {
                tag: "Switch",
                fields: &["switch", "state"],
                quoted: &["switch"],
            },
        }
    }

    fn args(&self) -> Vec<Arg> {
        match self {
            Condition::Accumulate {
                player,
                quantifier,
                amount,
                resource,
            } => vec![
                player.into(),
                quantifier.into(),
                Arg::Number(*amount),
                resource.into(),
            ],
            Condition::Always => Vec::new(),
            Condition::Bring {
                player,
                unit,
                location,
                quantifier,
                count,
            } => vec![
                player.into(),
                unit.into(),
                Arg::Text(location.clone()),
                quantifier.into(),
                Arg::Number(*count),
            ],
            Condition::Command {
                player,
                unit,
                quantifier,
                count,
            } => vec![
                player.into(),
                unit.into(),
                quantifier.into(),
                Arg::Number(*count),
            ],
            Condition::CountdownTimer { quantifier, count } => {
                vec![quantifier.into(), Arg::Number(*count)]
            },
            Condition::Deaths {
                player,
                unit,
                quantifier,
                count,
            } => vec![
                player.into(),
                unit.into(),
                quantifier.into(),
                Arg::Number(*count),
            ],
            Condition::HighestScore { score } => vec![Arg::Text(score.clone())],
            Condition::Never => Vec::new(),
            Condition::Switch { switch, state } => {
                vec![Arg::Text(switch.clone()), state.into()]
            },
        }
    }
}

impl Statement for Action {
    fn schema(&self) -> &'static StatementSchema {
        match self {
            Action::CenterView { .. } => &StatementSchema {
                tag: "Center View",
                fields: &["location"],
                quoted: &["location"],
            },
            Action::Comment { .. } => &StatementSchema {
                tag: "Comment",
                fields: &["text"],
                quoted: &["text"],
            },
            Action::CreateUnit { .. } => &StatementSchema {
                tag: "Create Unit",
                fields: &["player", "unit", "count", "location"],
                quoted: &["player", "unit", "location"],
            },
            Action::CreateUnitWithProperties { .. } => &StatementSchema {
                tag: "Create Unit with Properties",
                fields: &["player", "unit", "count", "location", "properties"],
                quoted: &["player", "unit", "location"],
            },
            Action::Defeat => &StatementSchema {
                tag: "Defeat",
                fields: &[],
                quoted: &[],
            },
            Action::DisplayTextMessage { .. } => &StatementSchema {
                tag: "Display Text Message",
                fields: &["visibility", "text"],
                quoted: &["text"],
            },
            Action::GiveUnitsToPlayer { .. } => &StatementSchema {
                tag: "Give Units to Player",
                fields: &["from_player", "to_player", "unit", "count", "location"],
                quoted: &["from_player", "to_player", "unit", "location"],
            },
            Action::KillUnit { .. } => &StatementSchema {
                tag: "Kill Unit",
                fields: &["player", "unit"],
                quoted: &["player", "unit"],
            },
            Action::KillUnitAtLocation { .. } => &StatementSchema {
                tag: "Kill Unit At Location",
                fields: &["player", "unit", "count", "location"],
                quoted: &["player", "unit", "location"],
            },
            Action::LeaderBoardControl { .. } => &StatementSchema {
                tag: "Leader Board Control",
                fields: &["title", "unit"],
                quoted: &["title", "unit"],
            },
            Action::LeaderBoardKills { .. } => &StatementSchema {
                tag: "Leader Board Kills",
                fields: &["title", "unit"],
                quoted: &["title", "unit"],
            },
            Action::LeaderBoardPoints { .. } => &StatementSchema {
                tag: "Leader Board Points",
                fields: &["title", "score"],
                quoted: &["title"],
            },
            Action::LeaderboardComputerPlayers { .. } => &StatementSchema {
                tag: "Leaderboard Computer Players",
                fields: &["state"],
                quoted: &[],
            },
            Action::MinimapPing { .. } => &StatementSchema {
                tag: "Minimap Ping",
                fields: &["location"],
                quoted: &["location"],
            },
            Action::ModifyUnitEnergy { .. } => &StatementSchema {
                tag: "Modify Unit Energy",
                fields: &["player", "unit", "resource", "count", "location"],
                quoted: &["player", "unit", "location"],
            },
            Action::ModifyUnitHangerCount { .. } => &StatementSchema {
                tag: "Modify Unit Hanger Count",
                fields: &["player", "unit", "percent", "count", "location"],
                quoted: &["player", "unit", "location"],
            },
            Action::ModifyUnitHitPoints { .. } => &StatementSchema {
                tag: "Modify Unit Hit Points",
                fields: &["player", "unit", "percent", "count", "location"],
                quoted: &["player", "unit", "location"],
            },
            Action::ModifyUnitShieldPoints { .. } => &StatementSchema {
                tag: "Modify Unit Shield Points",
                fields: &["player", "unit", "percent", "count", "location"],
                quoted: &["player", "unit", "location"],
            },
            Action::MoveLocation { .. } => &StatementSchema {
                tag: "Move Location",
                fields: &["player", "unit", "unit_location", "location"],
                quoted: &["player", "unit", "unit_location", "location"],
            },
            Action::MoveUnit { .. } => &StatementSchema {
                tag: "Move Unit",
                fields: &["player", "unit", "count", "from_location", "to_location"],
                quoted: &["player", "unit", "from_location", "to_location"],
            },
            Action::Order { .. } => &StatementSchema {
                tag: "Order",
                fields: &["player", "unit", "source_location", "dest_location", "order"],
                quoted: &["player", "unit", "source_location", "dest_location"],
            },
            Action::PlayWav { .. } => &StatementSchema {
                tag: "Play WAV",
                fields: &["wav", "duration"],
                quoted: &["wav"],
            },
            Action::PreserveTrigger => &StatementSchema {
                tag: "Preserve Trigger",
                fields: &[],
                quoted: &[],
            },
            Action::RemoveUnit { .. } => &StatementSchema {
                tag: "Remove Unit",
                fields: &["player", "unit"],
                quoted: &["player", "unit"],
            },
            Action::RemoveUnitAtLocation { .. } => &StatementSchema {
                tag: "Remove Unit At Location",
                fields: &["player", "unit", "count", "location"],
                quoted: &["player", "unit", "location"],
            },
            Action::RunAiScript { .. } => &StatementSchema {
                tag: "Run AI Script",
                fields: &["script"],
                quoted: &["script"],
            },
            Action::RunAiScriptAtLocation { .. } => &StatementSchema {
                tag: "Run AI Script At Location",
                fields: &["script", "location"],
                quoted: &["script", "location"],
            },
            Action::SetAllianceStatus { .. } => &StatementSchema {
                tag: "Set Alliance Status",
                fields: &["player", "alliance"],
                quoted: &["player"],
            },
            Action::SetCountdownTimer { .. } => &StatementSchema {
                tag: "Set Countdown Timer",
                fields: &["operation", "seconds"],
                quoted: &[],
            },
            Action::SetDeaths { .. } => &StatementSchema {
                tag: "Set Deaths",
                fields: &["player", "unit", "operation", "count"],
                quoted: &["player", "unit"],
            },
            Action::SetDoodadState { .. } => &StatementSchema {
                tag: "Set Doodad State",
                fields: &["player", "unit", "location", "state"],
                quoted: &["player", "unit", "location"],
            },
            Action::SetInvincibility { .. } => &StatementSchema {
                tag: "Set Invincibility",
                fields: &["player", "unit", "location", "state"],
                quoted: &["player", "unit", "location"],
            },
            Action::SetMissionObjectives { .. } => &StatementSchema {
                tag: "Set Mission Objectives",
                fields: &["text"],
                quoted: &["text"],
            },
            Action::SetResources { .. } => &StatementSchema {
                tag: "Set Resources",
                fields: &["player", "operation", "amount", "resource"],
                quoted: &["player"],
            },
            Action::SetScore { .. } => &StatementSchema {
                tag: "Set Score",
                fields: &["player", "operation", "count", "score"],
                quoted: &["player"],
            },
            Action::SetSwitch { .. } => &StatementSchema {
                tag: "Set Switch",
                fields: &["switch", "action"],
                quoted: &["switch"],
            },
            Action::Victory => &StatementSchema {
                tag: "Victory",
                fields: &[],
                quoted: &[],
            },
            Action::Wait { .. } => &StatementSchema {
                tag: "Wait",
                fields: &["milliseconds"],
                quoted: &[],
            },
        }
    }

    fn args(&self) -> Vec<Arg> {
        match self {
            Action::CenterView { location } => vec![Arg::Text(location.clone())],
            Action::Comment { text } => vec![Arg::Text(text.clone())],
            Action::CreateUnit {
                player,
                unit,
                count,
                location,
            } => vec![
                player.into(),
                unit.into(),
                Arg::Number(*count),
                Arg::Text(location.clone()),
            ],
            Action::CreateUnitWithProperties {
                player,
                unit,
                count,
                location,
                properties,
            } => vec![
                player.into(),
                unit.into(),
                Arg::Number(*count),
                Arg::Text(location.clone()),
                Arg::Number(*properties),
            ],
            Action::Defeat => Vec::new(),
            Action::DisplayTextMessage { visibility, text } => {
                vec![visibility.into(), Arg::Text(text.clone())]
            },
            Action::GiveUnitsToPlayer {
                from_player,
                to_player,
                unit,
                count,
                location,
            } => vec![
                from_player.into(),
                to_player.into(),
                unit.into(),
                count.into(),
                Arg::Text(location.clone()),
            ],
            Action::KillUnit { player, unit } => vec![player.into(), unit.into()],
            Action::KillUnitAtLocation {
                player,
                unit,
                count,
                location,
            } => vec![
                player.into(),
                unit.into(),
                count.into(),
                Arg::Text(location.clone()),
            ],
            Action::LeaderBoardControl { title, unit } => {
                vec![Arg::Text(title.clone()), unit.into()]
            },
            Action::LeaderBoardKills { title, unit } => {
                vec![Arg::Text(title.clone()), unit.into()]
            },
            Action::LeaderBoardPoints { title, score } => {
                vec![Arg::Text(title.clone()), Arg::Text(score.clone())]
            },
            Action::LeaderboardComputerPlayers { state } => vec![state.into()],
            Action::MinimapPing { location } => vec![Arg::Text(location.clone())],
            Action::ModifyUnitEnergy {
                player,
                unit,
                resource,
                count,
                location,
            } => vec![
                player.into(),
                unit.into(),
                resource.into(),
                Arg::Number(*count),
                Arg::Text(location.clone()),
            ],
            Action::ModifyUnitHangerCount {
                player,
                unit,
                percent,
                count,
                location,
            }
            | Action::ModifyUnitHitPoints {
                player,
                unit,
                percent,
                count,
                location,
            }
            | Action::ModifyUnitShieldPoints {
                player,
                unit,
                percent,
                count,
                location,
            } => vec![
                player.into(),
                unit.into(),
                Arg::Number(*percent),
                Arg::Number(*count),
                Arg::Text(location.clone()),
            ],
            Action::MoveLocation {
                player,
                unit,
                unit_location,
                location,
            } => vec![
                player.into(),
                unit.into(),
                Arg::Text(unit_location.clone()),
                Arg::Text(location.clone()),
            ],
            Action::MoveUnit {
                player,
                unit,
                count,
                from_location,
                to_location,
            } => vec![
                player.into(),
                unit.into(),
                count.into(),
                Arg::Text(from_location.clone()),
                Arg::Text(to_location.clone()),
            ],
            Action::Order {
                player,
                unit,
                source_location,
                dest_location,
                order,
            } => vec![
                player.into(),
                unit.into(),
                Arg::Text(source_location.clone()),
                Arg::Text(dest_location.clone()),
                order.into(),
            ],
            Action::PlayWav { wav, duration } => {
                vec![Arg::Text(wav.clone()), Arg::Number(*duration)]
            },
            Action::PreserveTrigger => Vec::new(),
            Action::RemoveUnit { player, unit } => vec![player.into(), unit.into()],
            Action::RemoveUnitAtLocation {
                player,
                unit,
                count,
                location,
            } => vec![
                player.into(),
                unit.into(),
                count.into(),
                Arg::Text(location.clone()),
            ],
            Action::RunAiScript { script } => vec![script.into()],
            Action::RunAiScriptAtLocation { script, location } => {
                vec![script.into(), Arg::Text(location.clone())]
            },
            Action::SetAllianceStatus { player, alliance } => {
                vec![player.into(), alliance.into()]
            },
            Action::SetCountdownTimer { operation, seconds } => {
                vec![operation.into(), Arg::Number(*seconds)]
            },
            Action::SetDeaths {
                player,
                unit,
                operation,
                count,
            } => vec![
                player.into(),
                unit.into(),
                operation.into(),
                Arg::Number(*count),
            ],
            Action::SetDoodadState {
                player,
                unit,
                location,
                state,
            }
            | Action::SetInvincibility {
                player,
                unit,
                location,
                state,
            } => vec![
                player.into(),
                unit.into(),
                Arg::Text(location.clone()),
                state.into(),
            ],
            Action::SetMissionObjectives { text } => vec![Arg::Text(text.clone())],
            Action::SetResources {
                player,
                operation,
                amount,
                resource,
            } => vec![
                player.into(),
                operation.into(),
                Arg::Number(*amount),
                resource.into(),
            ],
            Action::SetScore {
                player,
                operation,
                count,
                score,
            } => vec![
                player.into(),
                operation.into(),
                Arg::Number(*count),
                Arg::Text(score.clone()),
            ],
            Action::SetSwitch { switch, action } => {
                vec![Arg::Text(switch.clone()), action.into()]
            },
            Action::Victory => Vec::new(),
            Action::Wait { milliseconds } => vec![Arg::Number(*milliseconds)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_conditions() -> Vec<Condition> {
        vec![
            Condition::Accumulate {
                player: Player::P1,
                quantifier: Quantifier::AT_LEAST,
                amount: 100,
                resource: Resource::ORE,
            },
            Condition::Always,
            Condition::Bring {
                player: Player::CURRENT_PLAYER,
                unit: Unit::new("\"Terran Marine\""),
                location: "staging".into(),
                quantifier: Quantifier::AT_LEAST,
                count: 1,
            },
            Condition::Command {
                player: Player::P2,
                unit: Unit::new("\"Zerg Drone\""),
                quantifier: Quantifier::AT_MOST,
                count: 3,
            },
            Condition::CountdownTimer {
                quantifier: Quantifier::EXACTLY,
                count: 0,
            },
            Condition::Deaths {
                player: Player::CURRENT_PLAYER,
                unit: Unit::new("\"Protoss Observer\""),
                quantifier: Quantifier::AT_LEAST,
                count: 1,
            },
            Condition::HighestScore {
                score: "Units and buildings".into(),
            },
            Condition::Never,
            Condition::Switch {
                switch: "Switch1".into(),
                state: State::ENABLED,
            },
        ]
    }

    fn sample_actions() -> Vec<Action> {
        let player = Player::P1;
        let unit = Unit::new("\"Terran Marine\"");
        vec![
            Action::CenterView {
                location: "home".into(),
            },
            Action::comment("a note"),
            Action::CreateUnit {
                player: player.clone(),
                unit: unit.clone(),
                count: 4,
                location: "spawn".into(),
            },
            Action::CreateUnitWithProperties {
                player: player.clone(),
                unit: unit.clone(),
                count: 1,
                location: "spawn".into(),
                properties: 1,
            },
            Action::Defeat,
            Action::display_text("hello"),
            Action::GiveUnitsToPlayer {
                from_player: Player::P1,
                to_player: Player::P2,
                unit: unit.clone(),
                count: Count::ALL,
                location: "anywhere".into(),
            },
            Action::KillUnit {
                player: player.clone(),
                unit: unit.clone(),
            },
            Action::KillUnitAtLocation {
                player: player.clone(),
                unit: unit.clone(),
                count: Count::of(2),
                location: "spawn".into(),
            },
            Action::LeaderBoardControl {
                title: "Control".into(),
                unit: unit.clone(),
            },
            Action::LeaderBoardKills {
                title: "Kills".into(),
                unit: unit.clone(),
            },
            Action::LeaderBoardPoints {
                title: "Points".into(),
                score: "Razings".into(),
            },
            Action::LeaderboardComputerPlayers {
                state: State::ENABLED,
            },
            Action::MinimapPing {
                location: "beacon".into(),
            },
            Action::ModifyUnitEnergy {
                player: player.clone(),
                unit: unit.clone(),
                resource: Resource::ORE,
                count: 10,
                location: "spawn".into(),
            },
            Action::ModifyUnitHangerCount {
                player: player.clone(),
                unit: unit.clone(),
                percent: 50,
                count: 10,
                location: "spawn".into(),
            },
            Action::ModifyUnitHitPoints {
                player: player.clone(),
                unit: unit.clone(),
                percent: 50,
                count: 10,
                location: "spawn".into(),
            },
            Action::ModifyUnitShieldPoints {
                player: player.clone(),
                unit: unit.clone(),
                percent: 50,
                count: 10,
                location: "spawn".into(),
            },
            Action::MoveLocation {
                player: player.clone(),
                unit: unit.clone(),
                unit_location: "from".into(),
                location: "to".into(),
            },
            Action::MoveUnit {
                player: player.clone(),
                unit: unit.clone(),
                count: Count::ALL,
                from_location: "from".into(),
                to_location: "to".into(),
            },
            Action::Order {
                player: player.clone(),
                unit: unit.clone(),
                source_location: "from".into(),
                dest_location: "to".into(),
                order: UnitOrder::PATROL,
            },
            Action::PlayWav {
                wav: "sound\\intro.wav".into(),
                duration: 2000,
            },
            Action::PreserveTrigger,
            Action::RemoveUnit {
                player: player.clone(),
                unit: unit.clone(),
            },
            Action::RemoveUnitAtLocation {
                player: player.clone(),
                unit: unit.clone(),
                count: Count::of(1),
                location: "spawn".into(),
            },
            Action::RunAiScript {
                script: AiScript::VI7,
            },
            Action::RunAiScriptAtLocation {
                script: AiScript::JYDG,
                location: "base".into(),
            },
            Action::SetAllianceStatus {
                player: Player::FOES,
                alliance: Alliance::ALLY,
            },
            Action::SetCountdownTimer {
                operation: Operation::SET_TO,
                seconds: 60,
            },
            Action::SetDeaths {
                player: player.clone(),
                unit: unit.clone(),
                operation: Operation::ADD,
                count: 1,
            },
            Action::SetDoodadState {
                player: player.clone(),
                unit: unit.clone(),
                location: "door".into(),
                state: State::DISABLED,
            },
            Action::SetInvincibility {
                player: player.clone(),
                unit: unit.clone(),
                location: "door".into(),
                state: State::ENABLED,
            },
            Action::SetMissionObjectives {
                text: "Win.".into(),
            },
            Action::SetResources {
                player: player.clone(),
                operation: Operation::ADD,
                amount: 500,
                resource: Resource::GAS,
            },
            Action::SetScore {
                player: player.clone(),
                operation: Operation::SET_TO,
                count: 0,
                score: "Total".into(),
            },
            Action::SetSwitch {
                switch: "Switch1".into(),
                action: SwitchAction::TOGGLE,
            },
            Action::Victory,
            Action::Wait { milliseconds: 500 },
        ]
    }

    #[test]
    fn condition_schema_arity_matches_args() {
        for condition in sample_conditions() {
            let schema = condition.schema();
            assert_eq!(
                schema.fields.len(),
                condition.args().len(),
                "arity mismatch for {}",
                schema.tag
            );
        }
    }

    #[test]
    fn action_schema_arity_matches_args() {
        for action in sample_actions() {
            let schema = action.schema();
            assert_eq!(
                schema.fields.len(),
                action.args().len(),
                "arity mismatch for {}",
                schema.tag
            );
        }
    }

    #[test]
    fn quoted_fields_are_declared_fields() {
        let schemas: Vec<&StatementSchema> = sample_conditions()
            .iter()
            .map(|c| c.schema())
            .chain(sample_actions().iter().map(|a| a.schema()))
            .collect();
        for schema in schemas {
            for quoted in schema.quoted {
                assert!(
                    schema.fields.contains(quoted),
                    "{}: quoted field '{}' is not declared",
                    schema.tag,
                    quoted
                );
            }
        }
    }

    #[test]
    fn display_text_defaults_to_always_display() {
        let action = Action::display_text("hi");
        assert_eq!(
            action.args()[0],
            Arg::Token("Always Display".to_string())
        );
    }
}
