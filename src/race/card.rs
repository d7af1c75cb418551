use crate::race::icon::Icons;
use serde::Serialize;

pub const HEAT: &str = "Heat";
pub const STRESS: &str = "Stress";

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CardKind {
    Generic,
    // Penalty card added to a discard pile by a double gear shift
    Heat,
    // Played card that forces a draw until a basic card turns up
    Stress,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Card {
    kind: CardKind,
    name: String,
    speed: i32,
    icons: Icons,
    discardable: bool,
    playable: bool,
    basic: bool,
}

impl Card {
    pub fn new(
        name: String,
        speed: i32,
        icons: Icons,
        discardable: bool,
        playable: bool,
        basic: bool,
    ) -> Self {
        Card {
            kind: CardKind::Generic,
            name,
            speed,
            icons,
            discardable,
            playable,
            basic,
        }
    }

    pub fn heat() -> Self {
        Card {
            kind: CardKind::Heat,
            name: HEAT.to_string(),
            speed: 0,
            icons: Icons::new(),
            discardable: false,
            playable: false,
            basic: false,
        }
    }

    pub fn stress() -> Self {
        Card {
            kind: CardKind::Stress,
            name: STRESS.to_string(),
            speed: 0,
            icons: Icons::new(),
            discardable: false,
            playable: true,
            basic: false,
        }
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn icons(&self) -> &Icons {
        &self.icons
    }

    pub fn is_discardable(&self) -> bool {
        self.discardable
    }

    pub fn is_playable(&self) -> bool {
        self.playable
    }

    pub fn is_basic(&self) -> bool {
        self.basic
    }
}
