//! Commands presentation can issue.
//!
//! Each variant maps one-to-one onto a named method of
//! [`Engine`](super::Engine). The enum form suits input layers that queue
//! or replay commands.

use serde::{Deserialize, Serialize};

use crate::board::TileId;
use crate::core::PlayerId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Roll the dice. Only valid while idle.
    Roll,
    /// Advance one discrete step of an in-flight roll.
    Tick,
    AcknowledgeCard,
    BuyProperty { tile: TileId },
    BuildOnProperty { tile: TileId },
    SkipPendingAction,
    PayBail { player: PlayerId },
    UseEscapeCard { player: PlayerId },
    AdvanceToNextPlayer,
    ClearNotification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_json() {
        let command: Command =
            serde_json::from_str(r#"{"command": "buy_property", "tile": 39}"#).unwrap();
        assert_eq!(command, Command::BuyProperty { tile: TileId::new(39) });

        let roll: Command = serde_json::from_str(r#"{"command": "roll"}"#).unwrap();
        assert_eq!(roll, Command::Roll);
    }
}
