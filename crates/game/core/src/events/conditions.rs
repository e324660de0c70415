//! Atmospheric descriptors addressed by index.

const CONDITIONS: [&str; 30] = [
    "ion storm",
    "solar flare",
    "quantum anomaly",
    "wormhole disturbance",
    "time dilation field",
    "gravitational wave",
    "neutron star proximity",
    "space debris field",
    "frozen nebula",
    "plasma surge",
    "magnetic disruption",
    "radiation burst",
    "cosmic ray shower",
    "extragalactic signal",
    "virtual mirage",
    "subspace echo",
    "dark matter condensation",
    "cosmic string interference",
    "orbital decay",
    "comet tail passage",
    "electromagnetic pulse",
    "stellar winds",
    "volcanic activity on a moon",
    "cryo-cloud formation",
    "metamorphic signal",
    "lost satellite",
    "computational glitch",
    "pirate misinformation",
    "anomalous reading",
    "haunted void",
];

/// Number of distinct descriptors.
pub const fn count() -> usize {
    CONDITIONS.len()
}

/// Descriptor at `index`, wrapping around the table.
pub fn condition(index: usize) -> &'static str {
    CONDITIONS[index % CONDITIONS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_wraps() {
        assert_eq!(condition(0), "ion storm");
        assert_eq!(condition(29), "haunted void");
        assert_eq!(condition(30), "ion storm");
        assert_eq!(condition(31 * 30 + 1), "solar flare");
    }

    #[test]
    fn descriptors_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..count() {
            assert!(seen.insert(condition(i)));
        }
        assert_eq!(seen.len(), 30);
    }
}
