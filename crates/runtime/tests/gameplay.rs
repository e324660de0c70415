//! Command flows through the runtime handle.

mod common;

use common::harness;
use game_core::{CreditPolicy, EventKind, PcgRng, PlayerId, ShipSystem};
use runtime::{
    AllianceRepository, CrewRepository, Event, JournalRepository, MissionEvent,
    MissionRepository, PlayerRepository, ShipRepository, Topic,
};

#[tokio::test]
async fn start_registers_player_with_default_ship() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(1), &[]).await;

    let reply = h.dispatch(1, "/start Vega").await;
    assert!(reply.text.starts_with("Welcome, Vega!"));
    assert!(reply.text.contains("/explore - Travel to a new sector"));

    let player = h.store.load_player(PlayerId(1)).unwrap().unwrap();
    assert_eq!(player.name, "Vega");
    assert_eq!(player.credits, 100);
    assert_eq!(player.last_active, common::START_TIME);

    let ship = h.store.load_ship(PlayerId(1)).unwrap().unwrap();
    assert_eq!((ship.fuel, ship.shields, ship.weapons), (100, 50, 10));
}

#[tokio::test]
async fn first_contact_without_start_uses_placeholder_name() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(1), &[]).await;

    let reply = h.dispatch(9, "/status").await;
    assert!(reply.text.starts_with("Spaceship Status:\nFuel: 100\n"));
    assert!(reply.text.ends_with("Credits: 100"));
    assert_eq!(
        h.store.load_player(PlayerId(9)).unwrap().unwrap().name,
        "Unknown"
    );
}

#[tokio::test]
async fn start_without_a_name_uses_default_name() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(1), &[]).await;

    let reply = h.dispatch(4, "/start").await;
    assert!(reply.text.starts_with("Welcome, Player!"), "{}", reply.text);
    assert_eq!(
        h.store.load_player(PlayerId(4)).unwrap().unwrap().name,
        "Player"
    );
}

#[tokio::test]
async fn commands_touch_last_active() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(1), &[]).await;
    h.dispatch(1, "/start").await;
    h.clock.advance(300);
    h.dispatch(1, "/scan").await;

    let player = h.store.load_player(PlayerId(1)).unwrap().unwrap();
    assert_eq!(player.created_at, common::START_TIME);
    assert_eq!(player.last_active, common::START_TIME + 300);
}

#[tokio::test]
async fn travel_burns_fuel_and_refuses_when_short() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(1), &[]).await;
    h.dispatch(1, "/start").await;

    let menu = h.dispatch(1, "/explore").await;
    assert_eq!(menu.text, "Choose how many sectors to travel:");
    assert_eq!(
        menu.commands().collect::<Vec<_>>(),
        vec!["/travel 1", "/travel 2", "/travel 3"]
    );

    let reply = h.dispatch(1, "/travel 3").await;
    assert_eq!(reply.text, "Traveled 3 sectors and used 15 fuel.");
    assert_eq!(h.store.load_ship(PlayerId(1)).unwrap().unwrap().fuel, 85);

    let reply = h.dispatch(1, "/travel 20").await;
    assert_eq!(reply.text, "Not enough fuel to travel.");
    assert_eq!(h.store.load_ship(PlayerId(1)).unwrap().unwrap().fuel, 85);

    let reply = h.dispatch(1, "/refuel 30").await;
    assert_eq!(reply.text, "Refueled by 30. Current fuel: 115");
}

#[tokio::test]
async fn upgrades_are_priced_and_recorded_without_debit() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(1), &[]).await;
    h.dispatch(1, "/start").await;

    let reply = h.dispatch(1, "/upgrade shields").await;
    assert_eq!(reply.text, "Upgraded shields. It cost 77 credits.");

    let ship = h.store.load_ship(PlayerId(1)).unwrap().unwrap();
    assert_eq!(ship.shields, 60);
    let upgrades = h.store.upgrades_for(PlayerId(1)).unwrap();
    assert_eq!(upgrades.len(), 1);
    assert_eq!(upgrades[0].system, ShipSystem::Shields);
    assert_eq!((upgrades[0].cost, upgrades[0].new_level), (77, 60));

    // ledgerless: quoted, never charged
    assert_eq!(h.store.load_player(PlayerId(1)).unwrap().unwrap().credits, 100);

    let reply = h.dispatch(1, "/upgrade hyperdrive").await;
    assert_eq!(reply.text, "Upgraded hyperdrive. It cost 100 credits.");
    assert_eq!(h.store.load_ship(PlayerId(1)).unwrap().unwrap(), ship);
}

#[tokio::test]
async fn debit_policy_charges_and_refuses_overdraft() {
    let h = harness(CreditPolicy::Debit, PcgRng::seeded(1), &[]).await;
    h.dispatch(1, "/start").await;

    h.dispatch(1, "/upgrade shields").await;
    assert_eq!(h.store.load_player(PlayerId(1)).unwrap().unwrap().credits, 23);

    let reply = h.dispatch(1, "/upgrade shields").await;
    assert_eq!(reply.text, "Not enough credits: need 92, have 23.");
    assert_eq!(h.store.load_ship(PlayerId(1)).unwrap().unwrap().shields, 60);
    assert_eq!(h.store.upgrades_for(PlayerId(1)).unwrap().len(), 1);

    let reply = h.dispatch(1, "/repair 10").await;
    assert_eq!(reply.text, "Repaired shields by 10. Current shields: 70");
    assert_eq!(h.store.load_player(PlayerId(1)).unwrap().unwrap().credits, 3);

    let reply = h.dispatch(1, "/buy 1").await;
    assert!(reply.text.starts_with("Not enough credits"));
    assert_eq!(h.store.load_player(PlayerId(1)).unwrap().unwrap().credits, 3);
}

#[tokio::test]
async fn battle_reports_log_and_publishes_result() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(7), &[]).await;
    let mut battles = h.handle.subscribe(Topic::Battle);
    h.dispatch(1, "/start").await;

    let reply = h.dispatch(1, "/battle").await;
    let report = reply.battle.clone().expect("battle replies carry the report");
    assert!(reply.text.starts_with(&format!(
        "Encountered {}! Battle commencing...\n--- Turn 1 ---",
        report.enemy
    )));
    let won = usize::from(report.outcome == game_core::BattleOutcome::Win);
    assert_eq!(report.log.len(), 3 * report.turns as usize - won + 1);
    assert!(
        reply.text.ends_with("Battle result: WIN") || reply.text.ends_with("Battle result: LOSS")
    );

    let journal = h.store.events_for(PlayerId(1)).unwrap();
    assert_eq!(journal.len(), 1);
    assert_eq!(journal[0].kind, EventKind::Battle);
    assert_eq!(journal[0].detail, report.log.join("\n"));

    match battles.recv().await.unwrap() {
        Event::Battle(event) => {
            assert_eq!(event.player, PlayerId(1));
            assert_eq!(event.outcome, report.outcome);
            assert_eq!(event.turns, report.turns);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn scan_and_steal_reply_with_flavor() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(3), &[]).await;

    let reply = h.dispatch(1, "/scan").await;
    assert!(reply.text.starts_with("Scan Result: "));
    assert!(reply.text.contains("\nLocal conditions: "));

    let reply = h.dispatch(1, "/steal").await;
    assert!(reply.text.starts_with("Steal attempt "));
    let journal = h.store.events_for(PlayerId(1)).unwrap();
    assert_eq!(journal.len(), 1);
    assert_eq!(journal[0].kind, EventKind::Steal);
}

#[tokio::test]
async fn crew_recruitment_and_listing() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(5), &[]).await;

    let reply = h.dispatch(1, "/crew").await;
    assert_eq!(
        reply.text,
        "You have no crew members. Use /recruit to add one."
    );

    let reply = h.dispatch(1, "/recruit").await;
    assert!(reply.text.starts_with("Recruited "));

    let crew = h.store.list_crew(PlayerId(1)).unwrap();
    assert_eq!(crew.len(), 1);
    assert_eq!(crew[0].level, 1);

    let reply = h.dispatch(1, "/crew").await;
    assert_eq!(
        reply.text,
        format!(
            "Crew Members:\n- {} (Skill: {}, Level: 1)\n",
            crew[0].name, crew[0].skill
        )
    );
}

#[tokio::test]
async fn mission_accept_list_and_complete() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(11), &[]).await;
    let mut missions = h.handle.subscribe(Topic::Mission);

    let reply = h.dispatch(1, "/missions").await;
    assert_eq!(
        reply.text,
        "You have no active missions. Would you like to accept a new mission?"
    );
    assert_eq!(reply.commands().collect::<Vec<_>>(), vec!["/mission accept"]);

    let reply = h.dispatch(1, "/mission accept").await;
    assert!(reply.text.starts_with("New Mission Accepted!\nDescription: "));

    let active = h.store.active_missions(PlayerId(1)).unwrap();
    assert_eq!(active.len(), 1);
    let mission = active[0].clone();
    assert!((20..=100).contains(&mission.reward));
    assert!((60..=300).contains(&mission.time_limit_secs));

    let reply = h.dispatch(1, "/missions").await;
    assert!(reply.text.starts_with("Your Active Missions:\n"));
    assert!(reply.text.contains(&mission.description));

    // someone else's mission is not visible
    let reply = h.dispatch(2, &format!("/mission complete {}", mission.id)).await;
    assert_eq!(reply.text, format!("Mission {} not found.", mission.id));
    assert_eq!(h.store.active_missions(PlayerId(1)).unwrap().len(), 1);

    let reply = h.dispatch(1, &format!("/mission complete {}", mission.id)).await;
    assert!(reply.text.starts_with("Mission completed: "));
    assert!(h.store.active_missions(PlayerId(1)).unwrap().is_empty());

    let reply = h.dispatch(1, "/mission complete 999").await;
    assert_eq!(reply.text, "Mission 999 not found.");

    assert!(matches!(
        missions.recv().await.unwrap(),
        Event::Mission(MissionEvent::Assigned { .. })
    ));
    assert!(matches!(
        missions.recv().await.unwrap(),
        Event::Mission(MissionEvent::Completed { player: PlayerId(1), .. })
    ));
}

#[tokio::test]
async fn shop_lists_catalog_and_sells_known_items() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(2), &[]).await;

    let menu = h.dispatch(1, "/shop").await;
    assert!(menu.text.starts_with("Welcome to the Galactic Shop!"));
    // 30 items in rows of three, then the trade row
    assert_eq!(menu.buttons.len(), 11);
    assert!(menu.buttons[..10].iter().all(|row| row.len() == 3));
    assert_eq!(menu.buttons[10][0].command, "/trade");

    let reply = h.dispatch(1, "/buy 999").await;
    assert_eq!(reply.text, "Selected item not found.");

    let reply = h.dispatch(1, "/buy 1").await;
    assert!(reply.text.starts_with("Purchase successful!\nYou bought: "));

    let reply = h.dispatch(1, "/trade").await;
    let earned: u32 = reply
        .text
        .trim_start_matches("You successfully traded commodities and earned ")
        .trim_end_matches(" credits!")
        .parse()
        .unwrap();
    assert!((5..=50).contains(&earned));
    assert_eq!(h.store.load_player(PlayerId(1)).unwrap().unwrap().credits, 100);
}

#[tokio::test]
async fn alliances_create_list_and_join() {
    let h = harness(CreditPolicy::Ledgerless, PcgRng::seeded(2), &[]).await;
    h.dispatch(1, "/start Vega").await;

    let menu = h.dispatch(1, "/alliance").await;
    assert_eq!(
        menu.commands().collect::<Vec<_>>(),
        vec!["/alliance view", "/alliance create"]
    );

    let reply = h.dispatch(1, "/alliance view").await;
    assert_eq!(reply.text, "No alliances available at the moment.");

    let reply = h.dispatch(1, "/alliance create").await;
    assert_eq!(
        reply.text,
        "Alliance 'Alliance_Vega' created and you have joined it!"
    );
    assert_eq!(h.store.memberships(PlayerId(1)).unwrap().len(), 1);

    let reply = h.dispatch(2, "/alliance view").await;
    assert_eq!(reply.text, "Available Alliances:\n- Alliance_Vega (ID: 1)\n");
    assert_eq!(reply.commands().collect::<Vec<_>>(), vec!["/alliance join 1"]);

    h.dispatch(2, "/alliance join 1").await;
    h.dispatch(2, "/alliance join 1").await;
    // memberships are a log, not a set
    assert_eq!(h.store.memberships(PlayerId(2)).unwrap().len(), 2);

    let reply = h.dispatch(2, "/alliance join 42").await;
    assert_eq!(reply.text, "Alliance 42 not found.");
}

#[tokio::test]
async fn debit_policy_charges_alliance_join() {
    let h = harness(CreditPolicy::Debit, PcgRng::seeded(2), &[]).await;
    h.dispatch(1, "/alliance create Outer Rim").await;

    let reply = h.dispatch(2, "/alliance join 1").await;
    assert_eq!(reply.text, "You joined the alliance 'Outer Rim'!");
    assert_eq!(h.store.load_player(PlayerId(2)).unwrap().unwrap().credits, 50);

    h.dispatch(2, "/alliance join 1").await;
    let reply = h.dispatch(2, "/alliance join 1").await;
    assert_eq!(reply.text, "Not enough credits: need 50, have 0.");
    assert_eq!(h.store.memberships(PlayerId(2)).unwrap().len(), 2);
}
