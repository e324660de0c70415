use crate::rng::{RandomSource, choose};
use crate::state::EventKind;

use super::selector::WeightedTable;

/// Placeholder replaced by a randomly chosen subject.
pub const SUBJECT_PLACEHOLDER: &str = "{subject}";

/// Description used when the table produces no outcome.
pub const UNKNOWN_DESCRIPTION: &str = "An inexplicable phenomenon occurs.";

/// One named outcome of the sector event table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventOutcome {
    pub key: String,
    pub weight: u32,
    pub kind: EventKind,
    /// Flavor text; `{subject}` is substituted with one of `subjects`.
    pub templates: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subjects: Vec<String>,
}

impl EventOutcome {
    pub fn new(key: impl Into<String>, weight: u32, kind: EventKind) -> Self {
        Self {
            key: key.into(),
            weight,
            kind,
            templates: Vec::new(),
            subjects: Vec::new(),
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.templates.push(template.into());
        self
    }

    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects.extend(subjects.into_iter().map(Into::into));
        self
    }

    fn describe(&self, rng: &mut (impl RandomSource + ?Sized)) -> String {
        let Some(template) = choose(rng, &self.templates) else {
            return self.key.replace('_', " ");
        };
        if !template.contains(SUBJECT_PLACEHOLDER) {
            return template.clone();
        }
        let subject = choose(rng, &self.subjects).map_or("something", String::as_str);
        template.replace(SUBJECT_PLACEHOLDER, subject)
    }
}

/// A resolved sector event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectorEvent {
    /// Outcome key, or `"unknown"` for the fallback.
    pub key: String,
    pub kind: EventKind,
    pub description: String,
}

impl SectorEvent {
    fn unknown() -> Self {
        Self {
            key: "unknown".to_string(),
            kind: EventKind::Unknown,
            description: UNKNOWN_DESCRIPTION.to_string(),
        }
    }
}

/// Weighted table of sector events, walked in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventTable {
    outcomes: WeightedTable<EventOutcome>,
}

impl EventTable {
    pub fn new(outcomes: Vec<EventOutcome>) -> Self {
        let outcomes = outcomes
            .into_iter()
            .map(|outcome| {
                let weight = outcome.weight;
                (outcome, weight)
            })
            .collect();
        Self { outcomes }
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &EventOutcome> {
        self.outcomes.iter().map(|(outcome, _)| outcome)
    }

    pub fn total_weight(&self) -> u64 {
        self.outcomes.total_weight()
    }

    /// Draw an event. Never fails: an empty or weightless table yields the
    /// `unknown` fallback.
    pub fn select_event(&self, rng: &mut (impl RandomSource + ?Sized)) -> SectorEvent {
        match self.outcomes.select(rng) {
            Some(outcome) => SectorEvent {
                key: outcome.key.clone(),
                kind: outcome.kind,
                description: outcome.describe(rng),
            },
            None => SectorEvent::unknown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{PcgRng, SequenceRng};

    fn table() -> EventTable {
        EventTable::new(vec![
            EventOutcome::new("nothing", 20, EventKind::Info)
                .with_template("The sector is quiet. Nothing happens."),
            EventOutcome::new("enemy_encounter", 20, EventKind::Battle)
                .with_template("Ambushed by {subject} in deep space!")
                .with_subjects(["pirates", "alien fighters", "bounty hunters"]),
            EventOutcome::new("space_disaster", 10, EventKind::Disaster)
                .with_template("A {subject} suddenly affects your ship!")
                .with_subjects(["asteroid field", "black hole", "system failure"]),
        ])
    }

    #[test]
    fn subject_is_substituted_into_the_template() {
        // draw 30 -> enemy_encounter (21..=40); one template, no draw; subject 2
        let mut rng = SequenceRng::new([29, 2]);
        let event = table().select_event(&mut rng);
        assert_eq!(event.key, "enemy_encounter");
        assert_eq!(event.kind, EventKind::Battle);
        assert_eq!(event.description, "Ambushed by bounty hunters in deep space!");
    }

    #[test]
    fn plain_templates_consume_no_subject_draw() {
        let mut rng = SequenceRng::new([0]);
        let event = table().select_event(&mut rng);
        assert_eq!(event.kind, EventKind::Info);
        assert_eq!(event.description, "The sector is quiet. Nothing happens.");
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn empty_table_falls_back_to_unknown() {
        let mut rng = PcgRng::seeded(5);
        let event = EventTable::default().select_event(&mut rng);
        assert_eq!(event.kind, EventKind::Unknown);
        assert_eq!(event.description, UNKNOWN_DESCRIPTION);
    }

    #[test]
    fn every_selected_description_is_fully_resolved() {
        let table = table();
        let mut rng = PcgRng::seeded(77);
        for _ in 0..1_000 {
            let event = table.select_event(&mut rng);
            assert!(!event.description.contains(SUBJECT_PLACEHOLDER));
            assert_ne!(event.kind, EventKind::Unknown);
        }
    }
}
