use schema::TypeTag;

/// How a defending type reacts to incoming attack types.
/// `weak` doubles damage, `resistant` halves it, `immune` voids it.
pub struct TypeRelations {
    pub weak: &'static [TypeTag],
    pub resistant: &'static [TypeTag],
    pub immune: &'static [TypeTag],
}

/// The standard 18-type chart, keyed by the defending type.
pub fn relations(defender: TypeTag) -> &'static TypeRelations {
    use TypeTag::*;
    match defender {
        Normal => &TypeRelations {
            weak: &[Fighting],
            resistant: &[Ghost],
            immune: &[],
        },
        Fire => &TypeRelations {
            weak: &[Water, Ground, Rock],
            resistant: &[Fire, Grass, Ice, Bug, Steel, Fairy],
            immune: &[],
        },
        Water => &TypeRelations {
            weak: &[Electric, Grass],
            resistant: &[Fire, Water, Ice, Steel],
            immune: &[],
        },
        Electric => &TypeRelations {
            weak: &[Ground],
            resistant: &[Electric, Flying, Steel],
            immune: &[],
        },
        Grass => &TypeRelations {
            weak: &[Fire, Ice, Poison, Flying, Bug],
            resistant: &[Water, Electric, Grass, Ground],
            immune: &[],
        },
        Ice => &TypeRelations {
            weak: &[Fire, Fighting, Rock, Steel],
            resistant: &[Ice],
            immune: &[],
        },
        Fighting => &TypeRelations {
            weak: &[Flying, Psychic, Fairy],
            resistant: &[Bug, Rock, Dark],
            immune: &[],
        },
        Poison => &TypeRelations {
            weak: &[Ground, Psychic],
            resistant: &[Grass, Fighting, Poison, Bug, Fairy],
            immune: &[],
        },
        Ground => &TypeRelations {
            weak: &[Water, Grass, Ice],
            resistant: &[Poison, Rock],
            immune: &[Electric],
        },
        Flying => &TypeRelations {
            weak: &[Electric, Ice, Rock],
            resistant: &[Grass, Fighting, Bug],
            immune: &[Ground],
        },
        Psychic => &TypeRelations {
            weak: &[Bug, Ghost, Dark],
            resistant: &[Fighting, Psychic],
            immune: &[],
        },
        Bug => &TypeRelations {
            weak: &[Fire, Flying, Rock],
            resistant: &[Grass, Fighting, Ground],
            immune: &[],
        },
        Rock => &TypeRelations {
            weak: &[Water, Grass, Fighting, Ground, Steel],
            resistant: &[Normal, Fire, Poison, Flying],
            immune: &[],
        },
        Ghost => &TypeRelations {
            weak: &[Ghost, Dark],
            resistant: &[Poison, Bug],
            immune: &[Normal, Fighting],
        },
        Dragon => &TypeRelations {
            weak: &[Ice, Dragon, Fairy],
            resistant: &[Fire, Water, Electric, Grass],
            immune: &[],
        },
        Dark => &TypeRelations {
            weak: &[Fighting, Bug, Fairy],
            resistant: &[Ghost, Dark],
            immune: &[Psychic],
        },
        Steel => &TypeRelations {
            weak: &[Fire, Fighting, Ground],
            resistant: &[
                Normal, Grass, Ice, Flying, Psychic, Bug, Rock, Dragon, Steel, Fairy,
            ],
            immune: &[Poison],
        },
        Fairy => &TypeRelations {
            weak: &[Poison, Steel],
            resistant: &[Fighting, Bug, Dark],
            immune: &[Dragon],
        },
    }
}

/// Compound multiplier of an attack type against a 1-2 type defender.
/// Immunity is absolute and short-circuits; weak and resistant entries
/// compound across both defender types.
pub fn effectiveness(attack: TypeTag, defenders: &[TypeTag]) -> f64 {
    let mut multiplier = 1.0;

    for &defender in defenders {
        let chart = relations(defender);
        if chart.immune.contains(&attack) {
            return 0.0;
        }
        if chart.weak.contains(&attack) {
            multiplier *= 2.0;
        }
        if chart.resistant.contains(&attack) {
            multiplier *= 0.5;
        }
    }

    multiplier
}
