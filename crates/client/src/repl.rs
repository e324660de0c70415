//! Line-oriented stand-in for a chat transport.
//!
//! Each stdin line is parsed as a command and dispatched for the configured
//! player. Replies print as text followed by their buttons; battles unfold at
//! the replay cadence.
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use game_core::PlayerId;
use runtime::{BattleReplay, Command, Event, MissionEvent, Reply, RuntimeHandle, Topic};

use crate::config::ClientConfig;

const PROMPT_HINT: &str = "Type a command (e.g. /explore), /help for the list, or quit.";

pub async fn run(handle: RuntimeHandle, config: &ClientConfig) -> Result<()> {
    let notifier = spawn_notifier(&handle, config.player_id);

    let start = Command::Start {
        name: Some(config.player_name.clone()),
    };
    let reply = handle.dispatch(config.player_id, start).await?;
    present(&reply, config.replay_cadence).await;
    println!("{PROMPT_HINT}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit" | "/quit") {
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err}. {PROMPT_HINT}");
                continue;
            }
        };
        debug!(%command, "dispatching from stdin");
        let reply = handle.dispatch(config.player_id, command).await?;
        present(&reply, config.replay_cadence).await;
    }

    notifier.abort();
    Ok(())
}

/// Print a reply. Battle logs are replayed line by line.
async fn present(reply: &Reply, cadence: Duration) {
    match &reply.battle {
        Some(report) => {
            println!("Encountered {}! Battle commencing...", report.enemy);
            BattleReplay::from_report(report, cadence)
                .play(|line| println!("{line}"))
                .await;
        }
        None => println!("{}", reply.text.trim_end()),
    }
    for row in render_buttons(reply) {
        println!("{row}");
    }
}

/// One line per button row: `[label] /command  [label] /command`.
fn render_buttons(reply: &Reply) -> Vec<String> {
    reply
        .buttons
        .iter()
        .map(|row| {
            row.iter()
                .map(|button| format!("[{}] {}", button.label, button.command))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

/// Print tick notifications addressed to `player`.
fn spawn_notifier(handle: &RuntimeHandle, player: PlayerId) -> JoinHandle<()> {
    let mut receivers = handle.subscribe_multiple(&[Topic::Sector, Topic::Mission]);
    let mut sector = receivers.remove(&Topic::Sector);
    let mut mission = receivers.remove(&Topic::Mission);

    tokio::spawn(async move {
        let (Some(sector), Some(mission)) = (sector.as_mut(), mission.as_mut()) else {
            return;
        };
        loop {
            let received = tokio::select! {
                event = sector.recv() => event,
                event = mission.recv() => event,
            };
            match received {
                Ok(event) => {
                    if let Some(text) = notice_text(&event, player) {
                        println!("{text}");
                    }
                }
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "notifications lagged"),
                Err(RecvError::Closed) => break,
            }
        }
    })
}

fn notice_text(event: &Event, player: PlayerId) -> Option<String> {
    match event {
        Event::Sector(notice) if notice.player == player => {
            Some(format!("[sector] {}", notice.description))
        }
        Event::Mission(MissionEvent::Assigned { mission }) if mission.player == player => Some(
            format!(
                "[mission] New mission assigned: {} (Reward: {} credits)",
                mission.description, mission.reward
            ),
        ),
        Event::Mission(MissionEvent::Completed {
            player: owner,
            mission,
            reward,
        }) if *owner == player => Some(format!(
            "[mission] Mission {mission} completed. Reward: {reward} credits"
        )),
        _ => None,
    }
}
