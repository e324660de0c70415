#![allow(dead_code)]

use std::sync::Arc;

use game_content::GameContent;
use game_core::{CreditPolicy, GameConfig, PlayerId, RandomSource};
use runtime::{
    Command, GameStore, InMemoryStore, ManualClock, OracleManager, Reply, Runtime, RuntimeHandle,
    StaticRoster,
};

pub const START_TIME: i64 = 1_700_000_000;

pub struct Harness {
    pub runtime: Runtime,
    pub handle: RuntimeHandle,
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    pub async fn dispatch(&self, player: u64, input: &str) -> Reply {
        let command: Command = input.parse().expect("test command should parse");
        self.handle
            .dispatch(PlayerId(player), command)
            .await
            .expect("dispatch should not hit storage errors")
    }
}

pub fn oracles(policy: CreditPolicy) -> OracleManager {
    OracleManager::new(
        GameContent::builtin().with_config(GameConfig::default().with_credit_policy(policy)),
    )
}

/// Runtime without tick workers over an inspectable in-memory store.
pub async fn harness(
    policy: CreditPolicy,
    rng: impl RandomSource + 'static,
    roster: &[u64],
) -> Harness {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(ManualClock::new(START_TIME));
    let runtime = Runtime::builder()
        .oracles(oracles(policy))
        .store(Arc::clone(&store) as Arc<dyn GameStore>)
        .clock(clock.clone())
        .roster(StaticRoster::new(roster.iter().copied().map(PlayerId)))
        .rng(rng)
        .enable_ticks(false)
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();
    Harness {
        runtime,
        handle,
        store,
        clock,
    }
}
