use std::fmt::{self, Debug, Formatter};
use std::str;

use derive_more::{Display, Error};

use super::{BitRange, PackedBits};

/// The number of bytes available for a [`GamePerson`]'s name.
pub const NAME_LEN: usize = 42;

// Sub-fields of `GamePerson::other`.
const MANA: BitRange = BitRange::new(0, 10);
const HEALTH: BitRange = BitRange::new(10, 10);
const HOUSE: BitRange = BitRange::new(20, 1);
const GUN: BitRange = BitRange::new(21, 1);
const FAMILY: BitRange = BitRange::new(22, 1);
const PERSON_TYPE: BitRange = BitRange::new(23, 2);

// Sub-fields of `GamePerson::stats`.
const RESPECT: BitRange = BitRange::new(0, 4);
const STRENGTH: BitRange = BitRange::new(4, 4);
const EXPERIENCE: BitRange = BitRange::new(8, 4);
const LEVEL: BitRange = BitRange::new(12, 4);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonType {
    #[default]
    Builder = 0,
    Blacksmith = 1,
    Warrior = 2,
}

#[derive(Debug, Display, Error)]
#[display("unknown person type: {value}")]
pub struct UnknownPersonType {
    pub value: u32,
}

impl TryFrom<u32> for PersonType {
    type Error = UnknownPersonType;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PersonType::Builder),
            1 => Ok(PersonType::Blacksmith),
            2 => Ok(PersonType::Warrior),
            value => Err(UnknownPersonType { value }),
        }
    }
}

/// A game character packed into at most 64 bytes.
///
/// Coordinates and gold are stored as plain integers. Mana, health, the three possession flags and
/// the [`PersonType`] share one `u32`, while respect, strength, experience and level share one
/// `u16`:
///
/// | Field | Storage | Bits |
/// |-|-|-|
/// | mana | `other` | 0..10 |
/// | health | `other` | 10..20 |
/// | house | `other` | 20 |
/// | gun | `other` | 21 |
/// | family | `other` | 22 |
/// | type | `other` | 23..25 |
/// | respect | `stats` | 0..4 |
/// | strength | `stats` | 4..8 |
/// | experience | `stats` | 8..12 |
/// | level | `stats` | 12..16 |
///
/// The name is stored inline as NUL padded UTF-8, truncated to [`NAME_LEN`] bytes.
///
/// # Examples
/// ```
/// # use exercise_lib::packed::{GamePerson, PersonType};
/// let person = GamePerson::builder()
///     .name("Smithy")
///     .mana(200)
///     .gun()
///     .person_type(PersonType::Blacksmith)
///     .build();
///
/// assert_eq!(person.name(), "Smithy");
/// assert_eq!(person.mana(), 200);
/// assert!(person.has_gun());
/// assert!(!person.has_house());
/// assert_eq!(person.person_type(), PersonType::Blacksmith);
/// ```
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GamePerson {
    x: i32,
    y: i32,
    z: i32,
    gold: u32,
    other: u32,
    stats: u16,
    name: [u8; NAME_LEN],
}

impl GamePerson {
    pub const MAX_MANA: u32 = MANA.max_value() as u32;
    pub const MAX_HEALTH: u32 = HEALTH.max_value() as u32;
    pub const MAX_STAT: u16 = RESPECT.max_value() as u16;

    const EMPTY: GamePerson = GamePerson {
        x: 0,
        y: 0,
        z: 0,
        gold: 0,
        other: 0,
        stats: 0,
        name: [0; NAME_LEN],
    };

    pub const fn builder() -> GamePersonBuilder {
        GamePersonBuilder {
            person: GamePerson::EMPTY,
        }
    }

    /// Returns the stored name, up to the first NUL byte.
    pub fn name(&self) -> &str {
        let end = self.name.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        str::from_utf8(&self.name[..end]).unwrap_or_default()
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    pub const fn z(&self) -> i32 {
        self.z
    }

    pub const fn gold(&self) -> u32 {
        self.gold
    }

    pub fn mana(&self) -> u32 {
        self.other.field(MANA)
    }

    pub fn health(&self) -> u32 {
        self.other.field(HEALTH)
    }

    pub fn respect(&self) -> u16 {
        self.stats.field(RESPECT)
    }

    pub fn strength(&self) -> u16 {
        self.stats.field(STRENGTH)
    }

    pub fn experience(&self) -> u16 {
        self.stats.field(EXPERIENCE)
    }

    pub fn level(&self) -> u16 {
        self.stats.field(LEVEL)
    }

    pub fn has_house(&self) -> bool {
        self.other.field(HOUSE) != 0
    }

    pub fn has_gun(&self) -> bool {
        self.other.field(GUN) != 0
    }

    pub fn has_family(&self) -> bool {
        self.other.field(FAMILY) != 0
    }

    pub fn person_type(&self) -> PersonType {
        // Only the builder writes this field, always with a valid PersonType.
        PersonType::try_from(self.other.field(PERSON_TYPE)).unwrap_or_default()
    }

    fn set_name(&mut self, name: &str) {
        let mut end = name.len().min(NAME_LEN);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        self.name = [0; NAME_LEN];
        self.name[..end].copy_from_slice(&name.as_bytes()[..end]);
    }
}

impl Debug for GamePerson {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GamePerson")
            .field("name", &self.name())
            .field("coordinates", &(self.x, self.y, self.z))
            .field("gold", &self.gold)
            .field("mana", &self.mana())
            .field("health", &self.health())
            .field("respect", &self.respect())
            .field("strength", &self.strength())
            .field("experience", &self.experience())
            .field("level", &self.level())
            .field("house", &self.has_house())
            .field("gun", &self.has_gun())
            .field("family", &self.has_family())
            .field("type", &self.person_type())
            .finish()
    }
}

/// A fluent builder for [`GamePerson`]. Unset fields are zero, `false` or
/// [`PersonType::Builder`].
///
/// Numeric values too wide for their sub-field are truncated to the field's width.
#[derive(Debug, Clone, Copy)]
pub struct GamePersonBuilder {
    person: GamePerson,
}

impl GamePersonBuilder {
    /// Sets the name, truncated to the longest prefix of at most [`NAME_LEN`] bytes that ends on a
    /// character boundary.
    pub fn name(mut self, name: &str) -> Self {
        self.person.set_name(name);
        self
    }

    pub const fn coordinates(mut self, x: i32, y: i32, z: i32) -> Self {
        self.person.x = x;
        self.person.y = y;
        self.person.z = z;
        self
    }

    pub const fn gold(mut self, gold: u32) -> Self {
        self.person.gold = gold;
        self
    }

    pub fn mana(self, mana: u32) -> Self {
        self.with_other(MANA, mana)
    }

    pub fn health(self, health: u32) -> Self {
        self.with_other(HEALTH, health)
    }

    pub fn respect(self, respect: u16) -> Self {
        self.with_stat(RESPECT, respect)
    }

    pub fn strength(self, strength: u16) -> Self {
        self.with_stat(STRENGTH, strength)
    }

    pub fn experience(self, experience: u16) -> Self {
        self.with_stat(EXPERIENCE, experience)
    }

    pub fn level(self, level: u16) -> Self {
        self.with_stat(LEVEL, level)
    }

    pub fn house(self) -> Self {
        self.with_other(HOUSE, 1)
    }

    pub fn gun(self) -> Self {
        self.with_other(GUN, 1)
    }

    pub fn family(self) -> Self {
        self.with_other(FAMILY, 1)
    }

    pub fn person_type(self, person_type: PersonType) -> Self {
        self.with_other(PERSON_TYPE, person_type as u32)
    }

    pub const fn build(self) -> GamePerson {
        self.person
    }

    fn with_other(mut self, range: BitRange, value: u32) -> Self {
        self.person.other = self.person.other.with_field(range, value);
        self
    }

    fn with_stat(mut self, range: BitRange, value: u16) -> Self {
        self.person.stats = self.person.stats.with_field(range, value);
        self
    }
}
