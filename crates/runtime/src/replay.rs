//! Paced presentation of a battle log.
//!
//! Battles resolve instantly; a transport that wants the log to unfold turn by
//! turn plays it through [`BattleReplay`], which releases one line per
//! cadence tick.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

use game_core::BattleReport;

/// Default pause between revealed lines.
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct BattleReplay {
    lines: Vec<String>,
    cadence: Duration,
}

impl BattleReplay {
    pub fn new(lines: Vec<String>, cadence: Duration) -> Self {
        Self {
            lines,
            // interval panics on a zero period
            cadence: cadence.max(Duration::from_millis(1)),
        }
    }

    /// Replay a report's log, followed by the result line.
    pub fn from_report(report: &BattleReport, cadence: Duration) -> Self {
        let mut lines = report.log.clone();
        lines.push(format!(
            "Battle result: {}",
            report.outcome.to_string().to_uppercase()
        ));
        Self::new(lines, cadence)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Hand each line to `emit`, one per cadence tick. The first line is
    /// emitted immediately.
    pub async fn play(self, mut emit: impl FnMut(String)) {
        let mut ticker = interval(self.cadence);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        for line in self.lines {
            ticker.tick().await;
            emit(line);
        }
    }

    /// Play on a background task, delivering lines through a channel.
    ///
    /// Playback stops early if the receiver is dropped.
    pub fn into_stream(self) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(self.lines.len().max(1));
        tokio::spawn(async move {
            let mut ticker = interval(self.cadence);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            for line in self.lines {
                ticker.tick().await;
                if tx.send(line).await.is_err() {
                    break;
                }
            }
        });
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Battle, BattleRules, PcgRng};
    use tokio::time::Instant;

    fn report() -> BattleReport {
        let mut rng = PcgRng::seeded(3);
        Battle::new("pirates", &BattleRules::default(), &mut rng).run(&mut rng)
    }

    #[tokio::test]
    async fn play_emits_every_line_in_order() {
        let report = report();
        let replay = BattleReplay::from_report(&report, Duration::from_millis(1));
        assert_eq!(replay.len(), report.log.len() + 1);

        let mut seen = Vec::new();
        replay.play(|line| seen.push(line)).await;

        assert_eq!(&seen[..report.log.len()], report.log.as_slice());
        assert!(seen.last().unwrap().starts_with("Battle result: "));
    }

    #[tokio::test]
    async fn lines_are_paced() {
        let lines = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let start = Instant::now();
        BattleReplay::new(lines, Duration::from_millis(20))
            .play(|_| {})
            .await;
        // first line is immediate, the other two wait one cadence each
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn stream_delivers_all_lines() {
        let lines: Vec<String> = (0..5).map(|i| format!("line {i}")).collect();
        let mut rx = BattleReplay::new(lines.clone(), Duration::from_millis(1)).into_stream();

        let mut received = Vec::new();
        while let Some(line) = rx.recv().await {
            received.push(line);
        }
        assert_eq!(received, lines);
    }
}
