//! Player commands and their textual form.
//!
//! The textual form is what a chat transport receives (`/travel 3`) and what
//! reply buttons carry. Parsing happens here, before the game service, so the
//! service only ever sees well-typed input.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use thiserror::Error;

use game_core::{AllianceId, ItemId, MissionId, ShipSystem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register (or greet) the player, optionally with a display name.
    Start { name: Option<String> },
    Help,
    Status,
    /// Show the travel menu.
    Explore,
    Travel { sectors: NonZeroU32 },
    /// Show the upgrade menu.
    UpgradeMenu,
    Upgrade { system: ShipSystem },
    Refuel { amount: u32 },
    Repair { amount: u32 },
    Battle,
    Scan,
    Steal,
    Crew,
    Recruit,
    Missions,
    AcceptMission,
    CompleteMission { id: MissionId },
    Shop,
    Buy { item: ItemId },
    Trade,
    AllianceMenu,
    Alliances,
    CreateAlliance { name: Option<String> },
    JoinAlliance { id: AllianceId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("/{command} needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("/{command}: {value:?} is not a valid {argument}")]
    InvalidArgument {
        command: &'static str,
        argument: &'static str,
        value: String,
    },
}

fn parse_arg<T: FromStr>(
    command: &'static str,
    argument: &'static str,
    value: Option<&str>,
) -> Result<T, ParseCommandError> {
    let value = value.ok_or(ParseCommandError::MissingArgument { command, argument })?;
    value
        .parse()
        .map_err(|_| ParseCommandError::InvalidArgument {
            command,
            argument,
            value: value.to_string(),
        })
}

fn rest(words: &[&str]) -> Option<String> {
    let joined = words.join(" ");
    (!joined.is_empty()).then_some(joined)
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let input = input.strip_prefix('/').unwrap_or(input);
        let words: Vec<&str> = input.split_whitespace().collect();
        let Some((head, args)) = words.split_first() else {
            return Err(ParseCommandError::Empty);
        };
        // transports may append a bot name, as in `/scan@starship_bot`
        let head = head.split('@').next().unwrap_or(head).to_ascii_lowercase();
        let arg = |i: usize| args.get(i).copied();

        let command = match head.as_str() {
            "start" => Command::Start { name: rest(args) },
            "help" => Command::Help,
            "status" | "spaceship" | "ship" => Command::Status,
            "explore" => Command::Explore,
            "travel" => Command::Travel {
                sectors: parse_arg("travel", "sector count", arg(0))?,
            },
            "upgrade" => match arg(0) {
                None => Command::UpgradeMenu,
                Some(system) => Command::Upgrade {
                    system: ShipSystem::parse(system),
                },
            },
            "refuel" => Command::Refuel {
                amount: parse_arg("refuel", "amount", arg(0))?,
            },
            "repair" => Command::Repair {
                amount: parse_arg("repair", "amount", arg(0))?,
            },
            "battle" => Command::Battle,
            "scan" => Command::Scan,
            "steal" => Command::Steal,
            "crew" => Command::Crew,
            "recruit" => Command::Recruit,
            "missions" => Command::Missions,
            "accept" => Command::AcceptMission,
            "complete" => Command::CompleteMission {
                id: MissionId(parse_arg("complete", "mission id", arg(0))?),
            },
            "mission" => match arg(0).map(str::to_ascii_lowercase).as_deref() {
                None => Command::Missions,
                Some("accept") => Command::AcceptMission,
                Some("complete") => Command::CompleteMission {
                    id: MissionId(parse_arg("mission", "mission id", arg(1))?),
                },
                Some(other) => return Err(ParseCommandError::Unknown(format!("mission {other}"))),
            },
            "shop" => Command::Shop,
            "buy" => Command::Buy {
                item: ItemId(parse_arg("buy", "item id", arg(0))?),
            },
            "trade" => Command::Trade,
            "alliance" => match arg(0).map(str::to_ascii_lowercase).as_deref() {
                None => Command::AllianceMenu,
                Some("view") | Some("list") => Command::Alliances,
                Some("create") => Command::CreateAlliance {
                    name: rest(&args[1..]),
                },
                Some("join") => Command::JoinAlliance {
                    id: AllianceId(parse_arg("alliance", "alliance id", arg(1))?),
                },
                Some(other) => {
                    return Err(ParseCommandError::Unknown(format!("alliance {other}")));
                }
            },
            "alliances" => Command::Alliances,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Start { name: None } => f.write_str("/start"),
            Command::Start { name: Some(name) } => write!(f, "/start {name}"),
            Command::Help => f.write_str("/help"),
            Command::Status => f.write_str("/status"),
            Command::Explore => f.write_str("/explore"),
            Command::Travel { sectors } => write!(f, "/travel {sectors}"),
            Command::UpgradeMenu => f.write_str("/upgrade"),
            Command::Upgrade { system } => write!(f, "/upgrade {system}"),
            Command::Refuel { amount } => write!(f, "/refuel {amount}"),
            Command::Repair { amount } => write!(f, "/repair {amount}"),
            Command::Battle => f.write_str("/battle"),
            Command::Scan => f.write_str("/scan"),
            Command::Steal => f.write_str("/steal"),
            Command::Crew => f.write_str("/crew"),
            Command::Recruit => f.write_str("/recruit"),
            Command::Missions => f.write_str("/missions"),
            Command::AcceptMission => f.write_str("/mission accept"),
            Command::CompleteMission { id } => write!(f, "/mission complete {id}"),
            Command::Shop => f.write_str("/shop"),
            Command::Buy { item } => write!(f, "/buy {item}"),
            Command::Trade => f.write_str("/trade"),
            Command::AllianceMenu => f.write_str("/alliance"),
            Command::Alliances => f.write_str("/alliance view"),
            Command::CreateAlliance { name: None } => f.write_str("/alliance create"),
            Command::CreateAlliance { name: Some(name) } => write!(f, "/alliance create {name}"),
            Command::JoinAlliance { id } => write!(f, "/alliance join {id}"),
        }
    }
}
