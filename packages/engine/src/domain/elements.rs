//! Element Definitions
//!
//! Ids are stable and shared with JS through the `el_*` exports in lib.rs.
//! `Element` is `repr(u8)`, so a `&[Element]` can be handed to JS as bytes.

pub type ElementId = u8;

pub const EL_EMPTY: ElementId = 0;
pub const EL_WALL: ElementId = 1;
pub const EL_SAND: ElementId = 2;
pub const EL_WOOD: ElementId = 3;
pub const EL_FIRE: ElementId = 4;
pub const EL_DARK_SMOKE: ElementId = 5;
pub const EL_LIGHT_SMOKE: ElementId = 6;

pub const ELEMENT_COUNT: usize = 7;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Element {
    #[default]
    Empty = EL_EMPTY,
    Wall = EL_WALL,
    Sand = EL_SAND,
    Wood = EL_WOOD,
    Fire = EL_FIRE,
    DarkSmoke = EL_DARK_SMOKE,
    LightSmoke = EL_LIGHT_SMOKE,
}

impl Element {
    pub const ALL: [Element; ELEMENT_COUNT] = [
        Element::Empty,
        Element::Wall,
        Element::Sand,
        Element::Wood,
        Element::Fire,
        Element::DarkSmoke,
        Element::LightSmoke,
    ];

    #[inline]
    pub fn id(self) -> ElementId {
        self as ElementId
    }

    #[inline]
    pub fn from_id(id: ElementId) -> Option<Element> {
        Self::ALL.get(id as usize).copied()
    }

    #[inline]
    pub fn is_smoke(self) -> bool {
        matches!(self, Element::DarkSmoke | Element::LightSmoke)
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Empty => "empty",
            Element::Wall => "wall",
            Element::Sand => "sand",
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::DarkSmoke => "dark_smoke",
            Element::LightSmoke => "light_smoke",
        }
    }
}
