//! SRD feat catalog.

use once_cell::sync::Lazy;

use crate::entities::{Feat, FeatPrerequisite};
use crate::types::Ability;

static SRD_FEATS: Lazy<Vec<Feat>> = Lazy::new(|| {
    vec![
        Feat::new(
            "Grappler",
            "You have developed the skills necessary to hold your own in close-quarters grappling.",
        )
        .requires(FeatPrerequisite::ability(Ability::Str, 13)),
        Feat::new(
            "Heavy Armor Master",
            "You can use your armor to deflect strikes that would kill others.",
        )
        .requires(FeatPrerequisite::proficiency("heavy-armor")),
        Feat::new(
            "Heavily Armored",
            "You have trained to master the use of heavy armor.",
        )
        .requires(FeatPrerequisite::proficiency("medium-armor")),
        Feat::new(
            "Lightly Armored",
            "You have trained to master the use of light armor.",
        ),
        Feat::new(
            "Martial Adept",
            "You have martial training that allows you to perform special combat maneuvers.",
        ),
        Feat::new(
            "Medium Armor Master",
            "You have practiced moving in medium armor.",
        )
        .requires(FeatPrerequisite::proficiency("medium-armor")),
        Feat::new(
            "Moderately Armored",
            "You have trained to master the use of medium armor and shields.",
        )
        .requires(FeatPrerequisite::proficiency("light-armor")),
        Feat::new(
            "Ritual Caster",
            "You have learned a number of spells that you can cast as rituals.",
        )
        .requires(FeatPrerequisite::ability(Ability::Int, 13))
        .requires(FeatPrerequisite::ability(Ability::Wis, 13)),
        Feat::new(
            "Spell Sniper",
            "You have learned techniques to enhance your attacks with certain kinds of spells.",
        )
        .requires(FeatPrerequisite::Spellcasting),
        Feat::new(
            "War Caster",
            "You have practiced casting spells in the midst of combat.",
        )
        .requires(FeatPrerequisite::Spellcasting),
        Feat::new(
            "Elemental Adept",
            "You have mastered one damage type from your spellcasting.",
        )
        .requires(FeatPrerequisite::Spellcasting),
        Feat::new(
            "Magic Initiate",
            "You learn two cantrips and one 1st-level spell from a class spell list.",
        ),
        Feat::new(
            "Savage Attacker",
            "Once per turn when you roll damage for a melee weapon attack, you can reroll the damage dice.",
        ),
        Feat::new(
            "Sentinel",
            "You have mastered techniques to take advantage of every drop in any enemy's guard.",
        ),
        Feat::new(
            "Sharpshooter",
            "You have mastered ranged weapons and can make shots that others find impossible.",
        ),
        Feat::new(
            "Great Weapon Master",
            "You've learned to put the weight of a weapon to your advantage.",
        ),
        Feat::new("Dual Wielder", "You master fighting with two weapons."),
        Feat::new(
            "Defensive Duelist",
            "When you are wielding a finesse weapon with which you are proficient and another creature hits you with a melee attack, you can use your reaction to add your proficiency bonus to your AC.",
        )
        .requires(FeatPrerequisite::ability(Ability::Dex, 13)),
        Feat::new(
            "Tough",
            "Your hit point maximum increases by an amount equal to twice your level.",
        ),
        Feat::new(
            "Resilient",
            "Choose one ability score. You gain proficiency in saving throws using that ability.",
        ),
    ]
});

/// Every catalog feat, in catalog order.
pub fn feat_catalog() -> &'static [Feat] {
    &SRD_FEATS
}

/// Case-insensitive lookup by name.
pub fn find_feat(name: &str) -> Option<&'static Feat> {
    let name = name.trim();
    SRD_FEATS
        .iter()
        .find(|feat| feat.name.eq_ignore_ascii_case(name))
}
