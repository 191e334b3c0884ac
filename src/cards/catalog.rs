//! Card catalog: the deck list a match is built from.
//!
//! A `Catalog` is an ordered list of `CardDefinition`s. `start_game` turns
//! every entry into one `CardInstance`, shuffles them and deals from the
//! front. Lookup by `CardKey` is O(1) through a side index.
//!
//! [`Catalog::standard`] is the shipped 50-card roster: 15 kings, 15 saints,
//! foot soldiers, cavalry, catapults, ships, priests, archangels and four
//! one-shot effect cards.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardKey, Category, Element, SubCategory};
use super::instance::CardInstance;

/// Ordered collection of card definitions.
///
/// ## Example
///
/// ```
/// use castle_ccg::cards::{Catalog, CardDefinition, Category, SubCategory};
///
/// let mut catalog = Catalog::new();
/// catalog.register(
///     CardDefinition::new("Line Soldier", Category::Noble, SubCategory::SwordShield)
///         .with_stats(2, 1, 3),
/// );
///
/// let card = catalog.instance("Line Soldier").unwrap();
/// assert_eq!(card.hp, 3);
/// assert_eq!(catalog.build_deck().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<CardDefinition>,
    index: FxHashMap<CardKey, usize>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a definition to the deck list.
    ///
    /// Repeated titles add another copy to the deck; lookup keeps
    /// resolving to the first one.
    pub fn register(&mut self, card: CardDefinition) {
        self.index.entry(card.key()).or_insert(self.cards.len());
        self.cards.push(card);
    }

    /// Builder form of [`Catalog::register`].
    #[must_use]
    pub fn with(mut self, card: CardDefinition) -> Self {
        self.register(card);
        self
    }

    #[must_use]
    pub fn get(&self, key: &CardKey) -> Option<&CardDefinition> {
        self.index.get(key).and_then(|&i| self.cards.get(i))
    }

    /// Fresh instance of the card with this title.
    #[must_use]
    pub fn instance(&self, title: &str) -> Option<CardInstance> {
        self.get(&CardKey::from_title(title)).map(CardDefinition::instantiate)
    }

    #[must_use]
    pub fn contains(&self, key: &CardKey) -> bool {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// One fresh instance per entry, in catalog order.
    #[must_use]
    pub fn build_deck(&self) -> Vec<CardInstance> {
        self.cards.iter().map(CardDefinition::instantiate).collect()
    }

    /// The shipped roster.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for card in kings()
            .into_iter()
            .chain(saints())
            .chain(units())
            .chain(support())
        {
            catalog.register(card);
        }
        catalog
    }
}

/// Token summoned by São Teotónio.
#[must_use]
pub fn generated_soldier() -> CardDefinition {
    CardDefinition::new("Generated Soldier", Category::Noble, SubCategory::SwordShield)
        .with_stats(2, 1, 3)
        .with_movement(2, 1)
        .with_text("Summoned soldier", "")
}

fn king(title: &str, attack: u32, defense: u32, hp: u32, description: &str, effect: &str) -> CardDefinition {
    CardDefinition::new(title, Category::King, SubCategory::Royal)
        .with_stats(attack, defense, hp)
        .with_movement(2, 1)
        .with_text(description, effect)
}

fn saint(title: &str, attack: u32, hp: u32, description: &str, effect: &str) -> CardDefinition {
    CardDefinition::new(title, Category::Saint, SubCategory::Sacred)
        .with_stats(attack, 2, hp)
        .with_movement(2, 1)
        .with_text(description, effect)
}

fn spell(title: &str, description: &str, effect: &str) -> CardDefinition {
    // hp 1 keeps the card on the board until its ability is spent
    CardDefinition::new(title, Category::Hero, SubCategory::Spell)
        .with_stats(0, 0, 1)
        .with_text(description, effect)
}

fn kings() -> Vec<CardDefinition> {
    vec![
        king("D. Afonso Henriques", 2, 2, 6,
            "First King of Portugal, leading his armies to conquer castles.",
            "+2 Attack against enemy castle."),
        king("D. Dinis", 1, 2, 6,
            "Wise poet king nurturing his lands and troops.",
            "Heal 2 Life to all units in the farm."),
        king("D. João I", 2, 3, 6,
            "Protector of the realm and founder of the House of Avis.",
            "Soldiers +1 Defense in the village."),
        king("D. João II", 2, 2, 5,
            "The Perfect Prince, eliminating threats with strategy.",
            "Remove 1 enemy unit."),
        king("D. Manuel I", 1, 2, 6,
            "The Expansion King, gaining advantage in every turn.",
            "Play 1 extra card."),
        king("D. Sebastião", 3, 1, 5,
            "Young king leading brave but risky cavalry charges.",
            "Cavalry +2 Attack, lose 1 Life (king)."),
        king("D. João IV", 2, 2, 6,
            "Restorer of Independence, bringing troops back from defeat.",
            "Revive 1 allied unit."),
        king("D. Pedro I", 2, 2, 5,
            "Justice king who punishes enemies when allies fall.",
            "Drain 1 Life from enemy (to this unit)."),
        king("D. Afonso V", 2, 1, 5,
            "The African king, swift and aggressive on the battlefield.",
            "Cavalry +1 Movement."),
        king("D. João III", 1, 2, 5,
            "Inquisitor king, silencing enemy priests.",
            "Enemy priests lose 1 Attack and 1 Defense."),
        king("D. José I", 1, 2, 6,
            "King overseeing recovery after disasters.",
            "Heal 1 Life to all allies."),
        king("D. João VI", 1, 2, 6,
            "King who moves troops strategically across the land.",
            "Move any allied unit."),
        king("D. Pedro IV", 2, 2, 5,
            "Liberal king empowering soldiers to strike quickly.",
            "Units attack immediately."),
        king("D. Miguel I", 2, 2, 5,
            "Absolutist king forcing the opponent to lose resources.",
            "Enemy discards 1 card."),
        king("D. Manuel II", 2, 2, 5,
            "The last king, shielding his forces in retreat.",
            "Protect 1 allied unit (+2 Defense)."),
    ]
}

fn saints() -> Vec<CardDefinition> {
    vec![
        saint("Santo António de Lisboa", 1, 4,
            "Patron saint finding lost items, guiding troops.",
            "Draw the top card of the deck."),
        saint("Santa Isabel de Portugal", 1, 4,
            "Queen saint spreading blessings and healing.",
            "Heal 3 Life to all allies."),
        saint("São João de Deus", 1, 4,
            "Caregiver saint restoring fallen warriors.",
            "Revive 1 unit to your castle."),
        saint("São Nuno de Santa Maria", 2, 5,
            "Warrior saint boosting mounted units in battle.",
            "Cavalry +2 Attack & +1 Defense."),
        saint("São Vicente", 1, 4,
            "Protector of the city, reinforcing fortifications.",
            "Heal 3 Life to allies in your castle."),
        saint("São Francisco Xavier", 2, 4,
            "Missionary saint converting enemy troops.",
            "Convert 1 adjacent enemy."),
        saint("Santa Rita de Cássia", 1, 4,
            "Performs miracles, bringing units back to life.",
            "Revive any card to castle."),
        saint("São Gonçalo de Amarante", 1, 4,
            "Saint connecting allies with shared strength.",
            "2 units share Life (average HP)."),
        saint("Santa Joana Princesa", 1, 4,
            "Saint sacrificing herself to protect another unit.",
            "Sacrifice to save (give +3 HP)."),
        saint("São Roque", 1, 4,
            "Saint warding allies against attacks.",
            "Allies gain a massive Defense ward."),
        saint("São Teotónio", 1, 4,
            "First Portuguese saint inspiring new soldiers.",
            "Generate 1 Soldier into your castle."),
        saint("São José", 1, 4,
            "Saint creating divine protection.",
            "Shield a unit (+2 Defense)."),
        saint("Santa Luzia", 1, 4,
            "Saint seeing hidden threats in enemy hand.",
            "Enemy discards a card."),
        saint("São Bento", 2, 4,
            "Saint banishing enemies with holy authority.",
            "Remove 1 enemy unit."),
        saint("Nossa Senhora de Fátima", 1, 5,
            "Marian apparition protecting allies completely.",
            "Heal all allies by 3 and skip enemy attacks next phase."),
    ]
}

fn units() -> Vec<CardDefinition> {
    let soldier = |title: &str, sub: SubCategory, description: &str, effect: &str| {
        CardDefinition::new(title, Category::Noble, sub)
            .with_stats(2, 1, 3)
            .with_movement(2, 1)
            .with_text(description, effect)
    };
    let cavalry = |title: &str, sub: SubCategory, attack: u32, defense: u32, description: &str, effect: &str| {
        CardDefinition::new(title, Category::Noble, sub)
            .with_stats(attack, defense, 4)
            .with_movement(3, 1)
            .with_text(description, effect)
    };
    let catapult = |title: &str, attack: u32, description: &str, effect: &str| {
        CardDefinition::new(title, Category::Noble, SubCategory::Catapult)
            .with_stats(attack, 0, 3)
            .with_movement(1, 1)
            .with_text(description, effect)
    };

    vec![
        soldier("Line Soldier", SubCategory::SwordShield,
            "Frontline soldier taking hits for comrades.",
            "Protect ally (taunt-like)."),
        soldier("Siege Soldier", SubCategory::Spearman,
            "Soldier specialized in breaking walls.",
            "+1 Attack vs castle."),
        soldier("Devoted Soldier", SubCategory::SwordShield,
            "Soldier empowered by nearby saints.",
            "Heals if a Saint is present nearby."),
        cavalry("Shock Cavalry", SubCategory::LightKnight, 3, 1,
            "Fast cavalry striking suddenly at enemies.",
            "Move & attack (swift strike)."),
        cavalry("Guard Cavalry", SubCategory::HeavyKnight, 2, 2,
            "Cavalry defending key positions.",
            "Block first attack (increased defense)."),
        cavalry("Wandering Cavalry", SubCategory::HorseArcher, 2, 2,
            "Cavalry deciding between offense or support.",
            "Heal or damage a target (ally heal or enemy damage)."),
        catapult("Siege Catapult", 4,
            "Heavy catapult pounding castle walls.",
            "+4 vs castle (high damage to castle units)."),
        catapult("Fire Catapult", 3,
            "Catapult raining fire on multiple enemies.",
            "Area damage to nearby enemies."),
        catapult("Destruction Catapult", 4,
            "Catapult destroying defenses and fortifications.",
            "Remove shields (reduce enemy defense)."),
    ]
}

fn support() -> Vec<CardDefinition> {
    let ship = |title: &str, sub: SubCategory, attack: u32, description: &str, effect: &str| {
        CardDefinition::new(title, Category::Noble, sub)
            .with_stats(attack, 2, 4)
            .with_movement(2, 1)
            .with_element(Element::Water)
            .with_text(description, effect)
    };
    let priest = |title: &str, description: &str, effect: &str| {
        CardDefinition::new(title, Category::Priest, SubCategory::Monk)
            .with_stats(1, 1, 3)
            .with_movement(2, 1)
            .with_text(description, effect)
    };
    let archangel = |title: &str, attack: u32, description: &str, effect: &str| {
        CardDefinition::new(title, Category::Hero, SubCategory::Angel)
            .with_stats(attack, 2, 5)
            .with_movement(2, 1)
            .with_text(description, effect)
    };

    vec![
        ship("Transport Ship", SubCategory::WarBoat, 1,
            "Ship transporting troops across water.",
            "Move land unit (transport to new position)."),
        ship("Assault Ship", SubCategory::WarBoat, 3,
            "Ship firing upon enemy fortress.",
            "2 damage to a target."),
        ship("Strategic Caravel", SubCategory::Caravel, 2,
            "Caravel repositioning allies or enemies.",
            "Move any unit to a chosen position."),
        priest("Healing Priest",
            "Priest restoring an adjacent unit.",
            "Heal 2 Life to an allied unit."),
        priest("Inquisitor Priest",
            "Priest suppressing enemy magic or abilities.",
            "Enemy unit loses 1 Attack and 1 Defense."),
        archangel("Guardian Archangel", 2,
            "Angel shielding nearby units.",
            "Protect adjacent allies (+2 Defense)."),
        archangel("Wrath Archangel", 3,
            "Angel dealing direct, unstoppable damage.",
            "Ignore Defense (direct damage to target)."),
        spell("Miracle",
            "Instant divine restoration for units or castle.",
            "Full restore (allies set to 10 Life)."),
        spell("Total Siege",
            "All siege engines strike simultaneously.",
            "Catapults bombard the enemy castle for double damage."),
        spell("Forced March",
            "Army advances faster across the map.",
            "Units gain +1 Movement."),
        spell("Betrayal",
            "Turn an enemy unit to your side.",
            "Control 1 enemy unit (change ownership)."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_roster_size() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 50);
        assert_eq!(catalog.iter().filter(|c| c.category == Category::King).count(), 15);
        assert_eq!(catalog.iter().filter(|c| c.category == Category::Saint).count(), 15);
    }

    #[test]
    fn test_standard_titles_are_unique() {
        let catalog = Catalog::standard();
        let mut keys: Vec<_> = catalog.iter().map(CardDefinition::key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), catalog.len());
    }

    #[test]
    fn test_ships_are_water() {
        let catalog = Catalog::standard();
        for card in catalog.iter().filter(|c| c.sub_category.is_ship()) {
            assert_eq!(card.element, Element::Water, "{}", card.title);
        }
        assert_eq!(catalog.iter().filter(|c| c.element == Element::Water).count(), 3);
    }

    #[test]
    fn test_lookup_ignores_accents() {
        let catalog = Catalog::standard();
        let card = catalog.instance("Sao Joao de Deus").unwrap();
        assert_eq!(card.title, "São João de Deus");
        assert!(catalog.instance("Nonexistent").is_none());
    }

    #[test]
    fn test_repeated_title_adds_copy() {
        let soldier = generated_soldier();
        let catalog = Catalog::new().with(soldier.clone()).with(soldier);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.build_deck().len(), 2);
        assert!(catalog.contains(&CardKey::from_title("Generated Soldier")));
    }
}
