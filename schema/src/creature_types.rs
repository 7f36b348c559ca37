use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;

/// The fixed 18-type set every creature and move is tagged with.
///
/// The classification service emits type names as strings with varying
/// capitalization ("Fire", "fire"), so parsing is case-insensitive and
/// the serialized form is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl TypeTag {
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Normal => "normal",
            TypeTag::Fire => "fire",
            TypeTag::Water => "water",
            TypeTag::Electric => "electric",
            TypeTag::Grass => "grass",
            TypeTag::Ice => "ice",
            TypeTag::Fighting => "fighting",
            TypeTag::Poison => "poison",
            TypeTag::Ground => "ground",
            TypeTag::Flying => "flying",
            TypeTag::Psychic => "psychic",
            TypeTag::Bug => "bug",
            TypeTag::Rock => "rock",
            TypeTag::Ghost => "ghost",
            TypeTag::Dragon => "dragon",
            TypeTag::Dark => "dark",
            TypeTag::Steel => "steel",
            TypeTag::Fairy => "fairy",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TypeTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use TypeTag::*;
        let tag = match s.to_ascii_lowercase().as_str() {
            "normal" => Normal,
            "fire" => Fire,
            "water" => Water,
            "electric" => Electric,
            "grass" => Grass,
            "ice" => Ice,
            "fighting" => Fighting,
            "poison" => Poison,
            "ground" => Ground,
            "flying" => Flying,
            "psychic" => Psychic,
            "bug" => Bug,
            "rock" => Rock,
            "ghost" => Ghost,
            "dragon" => Dragon,
            "dark" => Dark,
            "steel" => Steel,
            "fairy" => Fairy,
            other => return Err(format!("unknown type tag: {}", other)),
        };
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_type_tag_round_trips_through_name() {
        for tag in TypeTag::iter() {
            assert_eq!(tag.name().parse::<TypeTag>(), Ok(tag));
        }
    }

    #[test]
    fn test_type_tag_parse_is_case_insensitive() {
        assert_eq!("Fire".parse::<TypeTag>(), Ok(TypeTag::Fire));
        assert_eq!("GRASS".parse::<TypeTag>(), Ok(TypeTag::Grass));
        assert!("shadow".parse::<TypeTag>().is_err());
    }

    #[test]
    fn test_type_set_has_eighteen_entries() {
        assert_eq!(TypeTag::iter().count(), 18);
    }
}
