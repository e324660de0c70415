//! Scheduled sweeps run on demand through the handle.

mod common;

use common::harness;
use game_core::{CreditPolicy, EventKind, PcgRng, PlayerId, SequenceRng, ShipState};
use runtime::{
    Event, JournalRepository, MissionEvent, MissionRepository, PlayerRepository, ShipRepository,
    TickKind, Topic,
};

#[tokio::test]
async fn regen_tick_refills_ships_and_skips_players_without_one() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(1), &[1, 2]).await;
    h.dispatch(1, "/start").await;
    let drained = ShipState {
        energy: 10,
        oxygen: 99,
        ..ShipState::default()
    };
    h.store.save_ship(PlayerId(1), &drained).unwrap();

    assert_eq!(h.handle.tick(TickKind::Regen).await.unwrap(), 1);

    let ship = h.store.load_ship(PlayerId(1)).unwrap().unwrap();
    assert_eq!((ship.energy, ship.oxygen), (12, 100));
    assert!(h.store.load_ship(PlayerId(2)).unwrap().is_none());
}

#[tokio::test]
async fn event_tick_journals_and_notifies_every_roster_player() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(4), &[1, 2]).await;
    let mut sector = h.handle.subscribe(Topic::Sector);

    assert_eq!(h.handle.tick(TickKind::Events).await.unwrap(), 2);

    for player in [PlayerId(1), PlayerId(2)] {
        let journal = h.store.events_for(player).unwrap();
        assert_eq!(journal.len(), 1);
        assert_ne!(journal[0].kind, EventKind::Unknown);
        assert_eq!(journal[0].timestamp, common::START_TIME);

        match sector.recv().await.unwrap() {
            Event::Sector(notice) => {
                assert_eq!(notice.player, player);
                assert_eq!(notice.description, journal[0].detail);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}

#[tokio::test]
async fn event_tick_follows_table_weights() {
    // draw 1 is the first outcome: a quiet sector
    let h = harness(CreditPolicy::Ledgerless, SequenceRng::new([0]), &[1]).await;
    h.handle.tick(TickKind::Events).await.unwrap();

    let journal = h.store.events_for(PlayerId(1)).unwrap();
    assert_eq!(journal[0].kind, EventKind::Info);
    assert_eq!(journal[0].detail, "The sector is quiet. Nothing happens.");
}

#[tokio::test]
async fn mission_tick_assigns_then_completes() {
    // template 0, reward 20 + 40, limit 60 + 100, then an odd coin
    let rng = SequenceRng::new([0, 40, 100, 1]);
    let h = harness(CreditPolicy::Debit, rng, &[1]).await;
    let mut missions = h.handle.subscribe(Topic::Mission);
    h.dispatch(1, "/start").await;

    assert_eq!(h.handle.tick(TickKind::Missions).await.unwrap(), 1);
    let active = h.store.active_missions(PlayerId(1)).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].description, "Rescue the stranded astronauts.");
    assert_eq!((active[0].reward, active[0].time_limit_secs), (60, 160));

    h.handle.tick(TickKind::Missions).await.unwrap();
    assert!(h.store.active_missions(PlayerId(1)).unwrap().is_empty());
    assert_eq!(h.store.load_player(PlayerId(1)).unwrap().unwrap().credits, 160);

    assert!(matches!(
        missions.recv().await.unwrap(),
        Event::Mission(MissionEvent::Assigned { .. })
    ));
    match missions.recv().await.unwrap() {
        Event::Mission(MissionEvent::Completed { player, reward, .. }) => {
            assert_eq!(player, PlayerId(1));
            assert_eq!(reward, 60);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn mission_tick_keeps_missions_on_even_coin() {
    // assignment draws, then an even coin on the next tick
    let rng = SequenceRng::new([0, 40, 100, 2, 0, 40, 100, 2]);
    let h = harness(CreditPolicy::Ledgerless, rng, &[1]).await;

    h.handle.tick(TickKind::Missions).await.unwrap();
    h.handle.tick(TickKind::Missions).await.unwrap();
    assert_eq!(h.store.active_missions(PlayerId(1)).unwrap().len(), 1);
}

#[tokio::test]
async fn seeded_mission_ticks_eventually_complete() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(21), &[1, 2, 3]).await;
    let mut missions = h.handle.subscribe(Topic::Mission);

    let mut completed = 0;
    for _ in 0..30 {
        h.handle.tick(TickKind::Missions).await.unwrap();
        while let Ok(event) = missions.try_recv() {
            if matches!(event, Event::Mission(MissionEvent::Completed { .. })) {
                completed += 1;
            }
        }
        for player in 1..=3 {
            // a tick never leaves more than one mission open
            assert!(h.store.active_missions(PlayerId(player)).unwrap().len() <= 1);
        }
    }
    assert!(completed > 0);
}
