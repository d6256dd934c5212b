//! Built-in Straw Hat crew catalog.

use super::Character;

pub(super) const STRAW_HATS: &[(&str, &str)] = &[
    ("Monkey D. Luffy", "Wants to be Pirate King"),
    ("Roronoa Zoro", "Wants to be world's greatest swordsman"),
    ("Nami", "Wants to draw a map of the whole world"),
    ("Usopp", "Wants to be a brave warrior of the sea"),
    ("Vinsmoke Sanji", "Wants to find the All Blue"),
    ("Tony Tony Chopper", "Wants to be a doctor who can cure any disease"),
    ("Nico Robin", "Wants to uncover the true history of the world"),
    ("Franky", "Wants to build a dream ship that sails around the world"),
    ("Brook", "Wants to reunite with Laboon at Reverse Mountain"),
    ("Jinbe", "Former warlord who became the crew's helmsman"),
];

pub(super) fn characters() -> Vec<Character> {
    STRAW_HATS
        .iter()
        .map(|(name, hint)| Character::new(*name, *hint))
        .collect()
}
