//! One handler per player command.

use std::num::NonZeroU32;

use tracing::info;

use game_core::rng::choose;
use game_core::{
    Alliance, AllianceId, AllianceMembership, Battle, EventKind, EventLogEntry, GameError, ItemId,
    MissionId, Player, PlayerId, RecordKind, ShipSystem, ShopCatalog, Timestamp, UpgradeRecord,
    attempt_steal, roll_recruit,
};

use super::GameService;
use crate::api::{Button, Command, Reply, Result};
use crate::events::{BattleEvent, Event};
use crate::repository::WriteBatch;

/// Enemy used when the content defines no factions.
const FALLBACK_ENEMY: &str = "pirates";

const COMMAND_LIST: &str = "Commands:\n\
    /spaceship - View your ship status\n\
    /explore - Travel to a new sector\n\
    /shop - Enter the shop/black market\n\
    /battle - Initiate a battle\n\
    /crew - Manage your crew\n\
    /recruit - Recruit a crew member\n\
    /missions - View missions\n\
    /upgrade - Upgrade ship systems\n\
    /refuel <amount> - Add fuel\n\
    /repair <amount> - Recharge shields\n\
    /alliance - Join alliances\n\
    /scan - Scan for resources and missions\n\
    /steal - Attempt to steal resources";

const SHOP_ROW_LEN: usize = 3;

impl GameService {
    pub(super) fn handle(
        &self,
        player: &mut Player,
        command: Command,
        now: Timestamp,
    ) -> Result<Reply> {
        match command {
            Command::Start { .. } => self.start(player),
            Command::Help => Ok(Reply::text(COMMAND_LIST)),
            Command::Status => self.status(player),
            Command::Explore => Ok(explore_menu()),
            Command::Travel { sectors } => self.travel(player.id, sectors),
            Command::UpgradeMenu => Ok(upgrade_menu()),
            Command::Upgrade { system } => self.upgrade(player, system, now),
            Command::Refuel { amount } => self.refuel(player.id, amount),
            Command::Repair { amount } => self.repair(player, amount),
            Command::Battle => self.battle(player.id, now),
            Command::Scan => Ok(self.scan()),
            Command::Steal => self.steal(player.id, now),
            Command::Crew => self.crew(player.id),
            Command::Recruit => self.recruit(player.id),
            Command::Missions => self.missions(player.id),
            Command::AcceptMission => self.accept_mission(player.id, now),
            Command::CompleteMission { id } => self.complete_mission(player, id),
            Command::Shop => Ok(self.shop_menu()),
            Command::Buy { item } => self.buy(player, item),
            Command::Trade => self.trade(player, now),
            Command::AllianceMenu => Ok(alliance_menu()),
            Command::Alliances => self.alliances(),
            Command::CreateAlliance { name } => self.create_alliance(player, name, now),
            Command::JoinAlliance { id } => self.join_alliance(player, id, now),
        }
    }

    fn start(&self, player: &Player) -> Result<Reply> {
        self.ship(player.id)?;
        Ok(Reply::text(format!(
            "Welcome, {}! Your deep space adventure is about to begin.\n\
             Use the commands and buttons to manage your ship, explore, battle, upgrade, and more.\n\n\
             {COMMAND_LIST}",
            player.name
        )))
    }

    fn status(&self, player: &Player) -> Result<Reply> {
        let ship = self.ship(player.id)?;
        Ok(Reply::text(format!(
            "Spaceship Status:\n{}Credits: {}",
            ship.status_report(),
            player.credits
        )))
    }

    fn travel(&self, player: PlayerId, sectors: NonZeroU32) -> Result<Reply> {
        let mut ship = self.ship(player)?;
        let used = ship.travel(sectors, self.config())?;
        self.store.save_ship(player, &ship)?;
        info!(player = %player, sectors = sectors.get(), fuel_used = used, "travelled");
        Ok(Reply::text(format!(
            "Traveled {sectors} sectors and used {used} fuel."
        )))
    }

    fn upgrade(&self, player: &mut Player, system: ShipSystem, now: Timestamp) -> Result<Reply> {
        let config = self.config();
        let mut ship = self.ship(player.id)?;
        self.charge(player, ship.upgrade_cost(&system, config))?;

        let outcome = ship.upgrade(&system, config);
        self.commit_charged(player, WriteBatch::new().ship(player.id, &ship))?;
        self.store.append_upgrade(&UpgradeRecord {
            player: player.id,
            system: system.clone(),
            new_level: outcome.new_level,
            cost: outcome.cost,
            timestamp: now,
        })?;
        info!(player = %player.id, %system, cost = outcome.cost, level = outcome.new_level, "upgraded");

        Ok(Reply::text(format!(
            "Upgraded {system}. It cost {} credits.",
            outcome.cost
        )))
    }

    fn refuel(&self, player: PlayerId, amount: u32) -> Result<Reply> {
        let mut ship = self.ship(player)?;
        let fuel = ship.refuel(amount);
        self.store.save_ship(player, &ship)?;
        Ok(Reply::text(format!(
            "Refueled by {amount}. Current fuel: {fuel}"
        )))
    }

    fn repair(&self, player: &mut Player, amount: u32) -> Result<Reply> {
        let config = self.config();
        let mut ship = self.ship(player.id)?;
        self.charge(player, config.ship_repair_cost)?;

        let shields = ship.repair_shields(amount, config);
        self.commit_charged(player, WriteBatch::new().ship(player.id, &ship))?;
        Ok(Reply::text(format!(
            "Repaired shields by {amount}. Current shields: {shields}"
        )))
    }

    fn battle(&self, player: PlayerId, now: Timestamp) -> Result<Reply> {
        let rules = &self.config().battle;
        let report = self.with_rng(|rng| {
            let enemy = choose(&mut *rng, self.oracles.enemies())
                .map_or(FALLBACK_ENEMY, String::as_str)
                .to_string();
            Battle::new(enemy, rules, &mut *rng).run(rng)
        });

        let log = report.log.join("\n");
        self.store
            .append_event(&EventLogEntry::new(player, EventKind::Battle, log.as_str(), now))?;
        self.events.publish(Event::Battle(BattleEvent {
            player,
            enemy: report.enemy.clone(),
            outcome: report.outcome,
            turns: report.turns,
        }));
        info!(player = %player, enemy = %report.enemy, outcome = %report.outcome, turns = report.turns, "battle resolved");

        let text = format!(
            "Encountered {}! Battle commencing...\n{log}\nBattle result: {}",
            report.enemy,
            report.outcome.to_string().to_uppercase()
        );
        Ok(Reply::text(text).with_battle(report))
    }

    fn scan(&self) -> Reply {
        let report = self.with_rng(|rng| self.oracles.scans().scan(rng));
        Reply::text(format!(
            "Scan Result: {}\nLocal conditions: {}",
            report.description, report.condition
        ))
    }

    fn steal(&self, player: PlayerId, now: Timestamp) -> Result<Reply> {
        let threshold = self.config().steal_threshold;
        let attempt = self.with_rng(|rng| attempt_steal(rng, threshold));

        let (text, detail) = if attempt.success {
            (
                "Steal attempt succeeded! You snatched some resources.",
                "Successfully stole resources.",
            )
        } else {
            (
                "Steal attempt failed! You encountered resistance.",
                "Steal attempt failed.",
            )
        };
        self.store
            .append_event(&EventLogEntry::new(player, EventKind::Steal, detail, now))?;
        Ok(Reply::text(text))
    }

    fn crew(&self, player: PlayerId) -> Result<Reply> {
        let crew = self.store.list_crew(player)?;
        if crew.is_empty() {
            return Ok(Reply::text(
                "You have no crew members. Use /recruit to add one.",
            ));
        }
        let mut text = String::from("Crew Members:\n");
        for member in &crew {
            text.push_str(&format!(
                "- {} (Skill: {}, Level: {})\n",
                member.name, member.skill, member.level
            ));
        }
        Ok(Reply::text(text))
    }

    fn recruit(&self, player: PlayerId) -> Result<Reply> {
        let names = self.oracles.crew_names();
        let skills = &self.config().crew_skills;
        let recruit = self
            .with_rng(|rng| roll_recruit(rng, names, skills))
            .ok_or_else(|| GameError::InvalidInput("No recruits are available right now.".into()))?;

        let member = self
            .store
            .add_crew_member(player, &recruit.name, recruit.skill)?;
        info!(player = %player, name = %member.name, skill = %member.skill, "recruited crew member");
        Ok(Reply::text(format!(
            "Recruited {} with skill {}!",
            member.name, member.skill
        )))
    }

    fn missions(&self, player: PlayerId) -> Result<Reply> {
        let active = self.store.active_missions(player)?;
        if active.is_empty() {
            return Ok(Reply::text(
                "You have no active missions. Would you like to accept a new mission?",
            )
            .with_row(vec![Button::new(
                "Accept New Mission",
                &Command::AcceptMission,
            )]));
        }

        let mut text = String::from("Your Active Missions:\n");
        for mission in &active {
            text.push_str(&format!(
                "- {} (Reward: {} credits, Time Limit: {} seconds, ID: {})\n",
                mission.description, mission.reward, mission.time_limit_secs, mission.id
            ));
        }
        Ok(Reply::text(text))
    }

    fn accept_mission(&self, player: PlayerId, now: Timestamp) -> Result<Reply> {
        let mission = self.assign_mission(player, now)?;
        Ok(Reply::text(format!(
            "New Mission Accepted!\nDescription: {}\nReward: {} credits\nTime Limit: {} seconds",
            mission.description, mission.reward, mission.time_limit_secs
        )))
    }

    fn complete_mission(&self, player: &mut Player, id: MissionId) -> Result<Reply> {
        // another player's mission is indistinguishable from a missing one
        let Some(mission) = self
            .store
            .load_mission(id)?
            .filter(|mission| mission.player == player.id)
        else {
            return Err(GameError::not_found(RecordKind::Mission, id).into());
        };

        self.settle_completion(Some(player), &mission)?;
        Ok(Reply::text(format!(
            "Mission completed: {}\nReward: {} credits",
            mission.description, mission.reward
        )))
    }

    fn shop_menu(&self) -> Reply {
        let items = self.oracles.shop().items();
        let mut reply = Reply::text(
            "Welcome to the Galactic Shop! Select an item to purchase or choose an option to earn money:",
        );
        for chunk in items.chunks(SHOP_ROW_LEN) {
            reply = reply.with_row(
                chunk
                    .iter()
                    .map(|item| Button::new(item.name.as_str(), &Command::Buy { item: item.id }))
                    .collect(),
            );
        }
        reply.with_row(vec![Button::new("Trade Commodities", &Command::Trade)])
    }

    fn buy(&self, player: &mut Player, item: ItemId) -> Result<Reply> {
        let item = self.oracles.shop().purchase(item)?;
        self.charge(player, item.price)?;
        self.commit_charged(player, WriteBatch::new())?;
        info!(player = %player.id, item = %item.name, price = item.price, "purchased item");
        Ok(Reply::text(format!(
            "Purchase successful!\nYou bought: {}\nPrice: {} credits\nDescription: {}",
            item.name, item.price, item.description
        )))
    }

    fn trade(&self, player: &mut Player, now: Timestamp) -> Result<Reply> {
        let range = self.config().trade_earnings;
        let earnings = self.with_rng(|rng| ShopCatalog::trade(rng, range));

        if self.pay(player, earnings) {
            self.store.save_player(player)?;
        }
        self.store.append_event(&EventLogEntry::new(
            player.id,
            EventKind::Trade,
            format!("Traded commodities for {earnings} credits."),
            now,
        ))?;
        info!(player = %player.id, earnings, "traded commodities");
        Ok(Reply::text(format!(
            "You successfully traded commodities and earned {earnings} credits!"
        )))
    }

    fn alliances(&self) -> Result<Reply> {
        let alliances = self.store.list_alliances()?;
        if alliances.is_empty() {
            return Ok(Reply::text("No alliances available at the moment."));
        }

        let mut text = String::from("Available Alliances:\n");
        let mut reply = Reply::default();
        for alliance in &alliances {
            text.push_str(&format!("- {} (ID: {})\n", alliance.name, alliance.id));
            reply = reply.with_row(vec![Button::new(
                format!("Join {}", alliance.name),
                &Command::JoinAlliance { id: alliance.id },
            )]);
        }
        reply.text = text;
        Ok(reply)
    }

    fn create_alliance(
        &self,
        player: &Player,
        name: Option<String>,
        now: Timestamp,
    ) -> Result<Reply> {
        let name = name.unwrap_or_else(|| Alliance::default_name(&player.name));
        let alliance = self.store.create_alliance(&name, player.id, now)?;
        info!(player = %player.id, alliance = %alliance.id, name = %alliance.name, "alliance created");
        Ok(Reply::text(format!(
            "Alliance '{}' created and you have joined it!",
            alliance.name
        )))
    }

    fn join_alliance(&self, player: &mut Player, id: AllianceId, now: Timestamp) -> Result<Reply> {
        let alliance = self
            .store
            .load_alliance(id)?
            .ok_or_else(|| GameError::not_found(RecordKind::Alliance, id))?;
        self.charge(player, self.config().alliance_join_cost)?;

        let membership = AllianceMembership {
            player: player.id,
            alliance: alliance.id,
            joined_at: now,
        };
        self.commit_charged(player, WriteBatch::new().membership(membership))?;
        info!(player = %player.id, alliance = %alliance.id, "joined alliance");
        Ok(Reply::text(format!(
            "You joined the alliance '{}'!",
            alliance.name
        )))
    }
}

fn explore_menu() -> Reply {
    let travel = |n: u32, label: &str| {
        // n is a literal in 1..=3
        NonZeroU32::new(n).map(|sectors| Button::new(label, &Command::Travel { sectors }))
    };
    Reply::text("Choose how many sectors to travel:")
        .with_row(
            [travel(1, "1 Sector"), travel(2, "2 Sectors")]
                .into_iter()
                .flatten()
                .collect(),
        )
        .with_row(travel(3, "3 Sectors").into_iter().collect())
}

fn upgrade_menu() -> Reply {
    let button = |system: ShipSystem, label: &str| Button::new(label, &Command::Upgrade { system });
    Reply::text("Select a system to upgrade:")
        .with_row(vec![
            button(ShipSystem::Engines, "Engines"),
            button(ShipSystem::Shields, "Shields"),
        ])
        .with_row(vec![button(ShipSystem::Weapons, "Weapons")])
}

fn alliance_menu() -> Reply {
    Reply::text("Alliance Menu - Choose an option:")
        .with_row(vec![Button::new("View Alliances", &Command::Alliances)])
        .with_row(vec![Button::new(
            "Create Alliance",
            &Command::CreateAlliance { name: None },
        )])
}
