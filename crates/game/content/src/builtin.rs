//! Content compiled into the binary.
//!
//! Every table here can be replaced by a data file through
//! [`ContentFactory`](crate::ContentFactory); these are the values used when
//! no file is present.

use game_core::{
    EventKind, EventOutcome, EventTable, MissionBoard, ScanFinding, ScanOutcome, ScanTable,
    ShopCatalog, ShopItem,
};

/// Enemy factions met in battle and in ambush events.
pub const ENEMY_FACTIONS: [&str; 3] = ["pirates", "alien fighters", "bounty hunters"];

pub const CREW_NAMES: [&str; 5] = ["Alex", "Sam", "Jordan", "Casey", "Riley"];

pub const MISSION_TEMPLATES: [&str; 5] = [
    "Rescue the stranded astronauts.",
    "Collect rare minerals from the asteroid belt.",
    "Investigate a suspicious derelict spacecraft.",
    "Deliver critical supplies to an outer rim colony.",
    "Explore an uncharted nebula for anomalies.",
];

const SHOP_ITEMS: [(&str, u32, &str); 30] = [
    ("Fuel Pack", 10, "Refuel your spaceship with extra fuel."),
    ("Oxygen Tank", 12, "Increase your oxygen reserves."),
    ("Energy Cell", 8, "Boost your energy levels."),
    ("Cargo Module", 25, "Expand your cargo capacity."),
    ("Laser Cannon", 50, "Enhance your offensive capabilities."),
    ("Shield Booster", 45, "Strengthen your shields."),
    ("Navigation System", 35, "Improve your travel accuracy."),
    ("Engine Tuner", 40, "Upgrade your engine efficiency."),
    ("Crew Quarters", 30, "Increase crew capacity."),
    ("Medical Kit", 15, "Heal injured crew members."),
    ("Repair Drone", 60, "Automate ship repairs during battle."),
    ("Cargo Securing Kit", 20, "Prevent cargo loss during turbulence."),
    ("Advanced Sensors", 55, "Better detection of resources and threats."),
    ("Quantum Drive", 80, "Speed up your travel between sectors."),
    ("Stealth Module", 70, "Enhance your ship's evasion capabilities."),
    ("Auto-Pilot System", 65, "Reduce errors in manual navigation."),
    ("Resource Scanner", 50, "Improve scan accuracy for resources."),
    ("Alien Translator", 45, "Communicate with unknown species."),
    ("Battle AI", 85, "Get tactical assistance in battle."),
    ("Hull Plating", 90, "Increase your ship's durability."),
    ("Black Market Guide", 40, "Discover hidden deals in the galaxy."),
    ("Crypto Credits", 100, "Buy premium currency for exclusive items."),
    ("Planetary Map", 30, "Unveil secret locations in space."),
    ("Disaster Sensor", 35, "Predict upcoming space disasters."),
    ("Mission Briefcase", 55, "Unlock exclusive missions and rewards."),
    ("Solar Panels", 25, "Increase energy regeneration on the go."),
    ("Warp Stabilizer", 75, "Stabilize warp drive for longer jumps."),
    ("Resource Converter", 65, "Convert lower-grade resources into valuable ones."),
    ("Crew Booster", 45, "Improve crew efficiency temporarily."),
    ("Experimental Tech", 95, "A mysterious device of unknown benefits."),
];

/// Catalog items numbered from 1 in listing order.
pub fn shop_items() -> Vec<ShopItem> {
    SHOP_ITEMS
        .iter()
        .zip(1u32..)
        .map(|(&(name, price, description), id)| ShopItem::new(id, name, price, description))
        .collect()
}

pub fn shop_catalog() -> ShopCatalog {
    ShopCatalog::new(shop_items())
}

/// Sector events, weighted 20/20/10/30/20.
pub fn event_outcomes() -> Vec<EventOutcome> {
    vec![
        EventOutcome::new("nothing", 20, EventKind::Info)
            .with_template("The sector is quiet. Nothing happens."),
        EventOutcome::new("enemy_encounter", 20, EventKind::Battle)
            .with_template("Ambushed by {subject} in deep space!")
            .with_subjects(ENEMY_FACTIONS),
        EventOutcome::new("space_disaster", 10, EventKind::Disaster)
            .with_template("A {subject} suddenly affects your ship!")
            .with_subjects(["asteroid field", "black hole", "system failure"]),
        EventOutcome::new("resource_find", 30, EventKind::Resource)
            .with_template("Discovered {subject} drifting in space.")
            .with_subjects(["rare minerals", "volatile gases", "alien artifacts"]),
        EventOutcome::new("mission_offer", 20, EventKind::Mission)
            .with_template("A distress signal offers a new mission opportunity."),
    ]
}

pub fn event_table() -> EventTable {
    EventTable::new(event_outcomes())
}

pub fn scan_outcomes() -> Vec<ScanOutcome> {
    let outcome = |finding, weight, description: &str| ScanOutcome {
        finding,
        weight,
        description: description.to_string(),
    };
    vec![
        outcome(ScanFinding::Resource, 30, "Detected a deposit of rare minerals."),
        outcome(ScanFinding::Danger, 20, "Scanners detect abnormal radiation levels."),
        outcome(ScanFinding::Mission, 20, "A distress signal indicates a potential mission."),
        outcome(ScanFinding::Nothing, 30, "No significant anomalies in the vicinity."),
    ]
}

pub fn scan_table() -> ScanTable {
    ScanTable::new(scan_outcomes())
}

pub fn mission_board() -> MissionBoard {
    MissionBoard::new(MISSION_TEMPLATES)
}

pub fn enemy_factions() -> Vec<String> {
    ENEMY_FACTIONS.iter().map(|s| s.to_string()).collect()
}

pub fn crew_names() -> Vec<String> {
    CREW_NAMES.iter().map(|s| s.to_string()).collect()
}
