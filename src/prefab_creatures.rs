use schema::{BaseStats, CreatureDefinition, TypeTag};

/// Predefined creature definitions for guest battles and demos, shaped
/// like the classification service's output.
///
/// Stats sit in the 40-90 range the classifier typically assigns to
/// photographed household objects and pets.
fn definition(
    name: &str,
    types: Vec<TypeTag>,
    level: u8,
    stats: [u16; 6],
    moves: [&str; 4],
    color: &str,
) -> CreatureDefinition {
    CreatureDefinition {
        name: name.to_string(),
        types,
        level,
        description: format!("A wild {} spotted through the viewfinder.", name),
        base_stats: BaseStats {
            hp: stats[0],
            attack: stats[1],
            defense: stats[2],
            special_attack: stats[3],
            special_defense: stats[4],
            speed: stats[5],
        },
        abilities: vec!["Keen Eye".to_string()],
        moves: moves.iter().map(|m| m.to_string()).collect(),
        color_scheme: vec![color.to_string()],
        height: "0.7m".to_string(),
        weight: "9.0kg".to_string(),
        evolution_chain: None,
    }
}

pub fn emberfox() -> CreatureDefinition {
    definition(
        "Emberfox",
        vec![TypeTag::Fire],
        14,
        [55, 62, 48, 60, 50, 70],
        ["Ember", "Scratch", "Flame Dash", "Tail Sweep"],
        "#e25822",
    )
}

pub fn sprigleaf() -> CreatureDefinition {
    definition(
        "Sprigleaf",
        vec![TypeTag::Grass],
        12,
        [60, 50, 55, 58, 60, 45],
        ["Vine Lash", "Leaf Flurry", "Headbutt", "Spore Puff"],
        "#4caf50",
    )
}

pub fn tidefin() -> CreatureDefinition {
    definition(
        "Tidefin",
        vec![TypeTag::Water],
        13,
        [58, 52, 60, 65, 55, 50],
        ["Bubble Jet", "Fin Slap", "Ripple", "Dive"],
        "#2196f3",
    )
}

pub fn voltmouse() -> CreatureDefinition {
    definition(
        "Voltmouse",
        vec![TypeTag::Electric],
        15,
        [45, 55, 40, 65, 50, 90],
        ["Spark", "Nibble", "Static Rush", "Tail Zap"],
        "#ffd600",
    )
}

pub fn boulderback() -> CreatureDefinition {
    definition(
        "Boulderback",
        vec![TypeTag::Rock, TypeTag::Ground],
        16,
        [70, 75, 85, 40, 55, 30],
        ["Rock Toss", "Stomp", "Dust Cloud", "Shell Ram"],
        "#8d6e63",
    )
}

pub fn frostwing() -> CreatureDefinition {
    definition(
        "Frostwing",
        vec![TypeTag::Ice, TypeTag::Flying],
        15,
        [52, 58, 50, 62, 55, 75],
        ["Frost Beak", "Wing Cutter", "Hail Dive", "Chill Gust"],
        "#80deea",
    )
}

/// A ready-made trainer team for demo matches.
pub fn guest_team() -> Vec<CreatureDefinition> {
    vec![emberfox(), tidefin(), sprigleaf()]
}

/// A ready-made opposing team.
pub fn rival_team() -> Vec<CreatureDefinition> {
    vec![voltmouse(), boulderback(), frostwing()]
}
