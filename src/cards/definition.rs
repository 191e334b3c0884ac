//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type: base
//! stats, the `{category, subCategory, element}` taxonomy and display text.
//! For example "Siege Catapult" is a noble catapult with 4 attack and no
//! defense; those numbers belong to the definition.
//!
//! Mutable, per-match values (current hp after damage, buffed attack) live
//! in `CardInstance`.
//!
//! ## Card keys
//!
//! Abilities are looked up by `CardKey`, an ASCII slug derived from the
//! title. Accents and punctuation are folded away so `"D. João I"` and
//! `"D. Joao I"` resolve to the same key.

use serde::{Deserialize, Serialize};

use super::instance::CardInstance;

/// Stable lookup key for a card type.
///
/// ```
/// use castle_ccg::cards::CardKey;
///
/// assert_eq!(CardKey::from_title("D. João I").as_str(), "d-joao-i");
/// assert_eq!(CardKey::from_title("São Roque"), CardKey::from_title("Sao Roque"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardKey(String);

impl CardKey {
    /// Build the key for a display title.
    #[must_use]
    pub fn from_title(title: &str) -> Self {
        let ascii = deunicode::deunicode(title).to_lowercase();
        let mut slug = String::with_capacity(ascii.len());
        for ch in ascii.chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch);
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        Self(slug)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardKey {
    fn from(title: &str) -> Self {
        Self::from_title(title)
    }
}

/// Broad card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    King,
    Priest,
    Saint,
    Hero,
    Noble,
}

/// Weapon or unit archetype.
///
/// Unrecognized archetypes read from JSON map to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubCategory {
    SwordShield,
    Spearman,
    Bowman,
    HorseArcher,
    HorsePikeman,
    HeavyKnight,
    LightKnight,
    Catapult,
    WarBoat,
    Caravel,
    Monk,
    Angel,
    Royal,
    Sacred,
    Spell,
    #[serde(other)]
    Other,
}

impl SubCategory {
    /// Mounted archetypes.
    #[must_use]
    pub const fn is_cavalry(self) -> bool {
        matches!(
            self,
            Self::HorseArcher | Self::HorsePikeman | Self::HeavyKnight | Self::LightKnight
        )
    }

    /// Foot soldiers.
    #[must_use]
    pub const fn is_soldier(self) -> bool {
        matches!(self, Self::SwordShield | Self::Spearman | Self::Bowman)
    }

    /// Ships of any kind.
    #[must_use]
    pub const fn is_ship(self) -> bool {
        matches!(self, Self::WarBoat | Self::Caravel)
    }
}

/// Terrain a card belongs to. Water cards may only travel through water.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Element {
    #[default]
    Earth,
    Water,
}

/// Static card definition.
///
/// Numeric fields are unsigned, so the "never negative" rule holds by
/// construction.
///
/// ## Example
///
/// ```
/// use castle_ccg::cards::{CardDefinition, Category, Element, SubCategory};
///
/// let ship = CardDefinition::new("Assault Ship", Category::Noble, SubCategory::WarBoat)
///     .with_stats(3, 2, 4)
///     .with_movement(2, 1)
///     .with_element(Element::Water);
///
/// let instance = ship.instantiate();
/// assert_eq!(instance.attack, 3);
/// assert_eq!(instance.element, Element::Water);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    pub title: String,
    pub description: String,
    pub effect_text: String,
    pub base_attack: u32,
    pub base_defense: u32,
    pub base_hp: u32,
    pub velocity: u32,
    pub range: u32,
    pub category: Category,
    pub sub_category: SubCategory,
    pub element: Element,
    pub image_url: String,
}

impl CardDefinition {
    /// Create a definition with zeroed stats on earth.
    #[must_use]
    pub fn new(title: impl Into<String>, category: Category, sub_category: SubCategory) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            effect_text: String::new(),
            base_attack: 0,
            base_defense: 0,
            base_hp: 0,
            velocity: 0,
            range: 0,
            category,
            sub_category,
            element: Element::Earth,
            image_url: String::new(),
        }
    }

    /// Set attack, defense and hp.
    #[must_use]
    pub fn with_stats(mut self, attack: u32, defense: u32, hp: u32) -> Self {
        self.base_attack = attack;
        self.base_defense = defense;
        self.base_hp = hp;
        self
    }

    /// Set velocity and attack range.
    #[must_use]
    pub fn with_movement(mut self, velocity: u32, range: u32) -> Self {
        self.velocity = velocity;
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    /// Set flavor and rules text.
    #[must_use]
    pub fn with_text(mut self, description: impl Into<String>, effect: impl Into<String>) -> Self {
        self.description = description.into();
        self.effect_text = effect.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Lookup key for this card type.
    #[must_use]
    pub fn key(&self) -> CardKey {
        CardKey::from_title(&self.title)
    }

    /// Fresh runtime copy at base stats.
    #[must_use]
    pub fn instantiate(&self) -> CardInstance {
        CardInstance {
            image_url: self.image_url.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            effect_description: self.effect_text.clone(),
            attack: i64::from(self.base_attack),
            defense: i64::from(self.base_defense),
            hp: i64::from(self.base_hp),
            velocity: i64::from(self.velocity),
            range: i64::from(self.range),
            category: self.category,
            sub_category: self.sub_category,
            element: self.element,
        }
    }
}
