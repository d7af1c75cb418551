use crate::race::card::Card;
use crate::race::discard_pile::DiscardPile;
use crate::race::icon::{Icon, Icons};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::debug;

pub const MIN_GEAR: u8 = 1;
pub const MAX_GEAR: u8 = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CarError {
    #[error("Gear {0} is outside 1..=5")]
    InvalidGear(u8),
    #[error("Cannot shift to gear {target} with an empty engine")]
    InsufficientEngine { target: u8 },
    #[error("Cannot shift from gear {from} to gear {to}. At most 2 gears per shift")]
    TooManyGearShifts { from: u8, to: u8 },
}

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CarId(pub u32);

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car {}", self.0)
    }
}

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Black,
    Gray,
}

#[derive(Serialize, Clone, Debug)]
pub struct Car {
    id: CarId,
    color: Color,
    speed: i32,
    gear: u8,
    engine: u32,
    lap: u32,
    passed_corners: Vec<u32>,
}

impl Car {
    pub fn new(id: CarId, color: Color, engine: u32) -> Self {
        Car {
            id,
            color,
            speed: 0,
            gear: MIN_GEAR,
            engine,
            lap: 0,
            passed_corners: Vec::new(),
        }
    }

    pub fn id(&self) -> CarId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    // Not clamped: upstream logic may report a negative speed.
    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed;
    }

    pub fn gear(&self) -> u8 {
        self.gear
    }

    pub fn engine(&self) -> u32 {
        self.engine
    }

    pub fn lap(&self) -> u32 {
        self.lap
    }

    pub fn increase_lap(&mut self) {
        self.lap += 1;
    }

    pub fn passed_corners(&self) -> &[u32] {
        &self.passed_corners
    }

    pub fn add_passed_corner(&mut self, corner: u32) {
        self.passed_corners.push(corner);
    }

    pub fn reset_passed_corners(&mut self) {
        self.passed_corners.clear();
    }

    // Two gears at once costs one engine and a Heat card in `discard_pile`.
    // Returns the cooling icons of the new gear.
    pub fn set_gear(
        &mut self,
        gear: u8,
        discard_pile: Option<&mut DiscardPile>,
    ) -> Result<Icons, CarError> {
        if !(MIN_GEAR..=MAX_GEAR).contains(&gear) {
            return Err(CarError::InvalidGear(gear));
        }
        match gear.abs_diff(self.gear) {
            0 => {}
            1 => self.gear = gear,
            2 => {
                if self.engine == 0 {
                    return Err(CarError::InsufficientEngine { target: gear });
                }
                self.engine -= 1;
                self.gear = gear;
                if let Some(discard_pile) = discard_pile {
                    discard_pile.add_card(Card::heat());
                }
            }
            _ => {
                return Err(CarError::TooManyGearShifts {
                    from: self.gear,
                    to: gear,
                })
            }
        }
        debug!("{} in gear {} with engine {}", self.id, self.gear, self.engine);
        Ok(cooling_icons(gear))
    }
}

fn cooling_icons(gear: u8) -> Icons {
    match gear {
        1 => Icons::from([(Icon::Cooling, 3)]),
        2 => Icons::from([(Icon::Cooling, 1)]),
        _ => Icons::new(),
    }
}
