use schema::{CreatureDefinition, TypeTag};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate profile numbers for a trainer's collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerStats {
    pub total_caught: usize,
    pub unique_types: usize,
    pub highest_level: u8,
    pub favorite_type: Option<TypeTag>,
    /// Wins / battles fought. Not wired up yet; battles are not
    /// persisted anywhere.
    pub win_rate: f64,
}

/// Derive profile stats from a collection. The favorite type is the
/// most frequent tag across every creature; ties break toward the tag
/// seen first in collection order.
pub fn calculate_trainer_stats(collection: &[CreatureDefinition]) -> TrainerStats {
    if collection.is_empty() {
        return TrainerStats {
            total_caught: 0,
            unique_types: 0,
            highest_level: 0,
            favorite_type: None,
            win_rate: 0.0,
        };
    }

    let all_types: Vec<TypeTag> = collection
        .iter()
        .flat_map(|creature| creature.types.iter().copied())
        .collect();

    let mut counts: HashMap<TypeTag, usize> = HashMap::new();
    for &tag in &all_types {
        *counts.entry(tag).or_insert(0) += 1;
    }

    let favorite_type = counts
        .values()
        .copied()
        .max()
        .and_then(|best| all_types.iter().copied().find(|tag| counts[tag] == best));

    TrainerStats {
        total_caught: collection.len(),
        unique_types: counts.len(),
        highest_level: collection
            .iter()
            .map(|creature| creature.level)
            .max()
            .unwrap_or(0),
        favorite_type,
        win_rate: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefab_creatures::{boulderback, emberfox, frostwing, sprigleaf};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_collection() {
        let stats = calculate_trainer_stats(&[]);
        assert_eq!(stats.total_caught, 0);
        assert_eq!(stats.unique_types, 0);
        assert_eq!(stats.highest_level, 0);
        assert_eq!(stats.favorite_type, None);
    }

    #[test]
    fn test_counts_and_highest_level() {
        let collection = vec![emberfox(), sprigleaf(), boulderback(), frostwing()];
        let stats = calculate_trainer_stats(&collection);

        assert_eq!(stats.total_caught, 4);
        // fire, grass, rock, ground, ice, flying
        assert_eq!(stats.unique_types, 6);
        assert_eq!(stats.highest_level, 16);
    }

    #[test]
    fn test_favorite_type_is_most_frequent() {
        let collection = vec![emberfox(), emberfox(), sprigleaf()];
        let stats = calculate_trainer_stats(&collection);
        assert_eq!(stats.favorite_type, Some(TypeTag::Fire));
    }

    #[test]
    fn test_favorite_type_tie_breaks_to_first_seen() {
        let collection = vec![sprigleaf(), emberfox()];
        let stats = calculate_trainer_stats(&collection);
        assert_eq!(stats.favorite_type, Some(TypeTag::Grass));
    }
}
