use crate::race::car::{Car, CarId};
use crate::race::space::{Space, SpaceError};
use hashbrown::HashMap;
use std::collections::VecDeque;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Space {index} is off a track of {len} spaces")]
    SpaceOutOfRange { index: usize, len: usize },
    #[error("{0} is already on the track")]
    AlreadyPlaced(CarId),
    #[error(transparent)]
    Space(#[from] SpaceError),
}

// The track is circular: the space after the last one is the first one.
#[derive(Clone, Debug)]
pub struct Board {
    spaces: Vec<Space>,
    number_of_laps: u32,
    racer_turn_order: VecDeque<CarId>,
}

impl Board {
    pub fn new(spaces: Vec<Space>, number_of_laps: u32) -> Self {
        Board {
            spaces,
            number_of_laps,
            racer_turn_order: VecDeque::new(),
        }
    }

    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    pub fn number_of_laps(&self) -> u32 {
        self.number_of_laps
    }

    pub fn space(&self, index: usize) -> Result<&Space, BoardError> {
        let len = self.spaces.len();
        self.spaces
            .get(index)
            .ok_or(BoardError::SpaceOutOfRange { index, len })
    }

    fn space_mut(&mut self, index: usize) -> Result<&mut Space, BoardError> {
        let len = self.spaces.len();
        self.spaces
            .get_mut(index)
            .ok_or(BoardError::SpaceOutOfRange { index, len })
    }

    pub fn finish_line(&self) -> Option<usize> {
        self.spaces.iter().position(Space::is_finish_line)
    }

    pub fn next_index(&self, index: usize) -> Result<usize, BoardError> {
        self.space(index)?;
        Ok((index + 1) % self.spaces.len())
    }

    pub fn previous_index(&self, index: usize) -> Result<usize, BoardError> {
        self.space(index)?;
        let len = self.spaces.len();
        Ok((index + len - 1) % len)
    }

    pub fn position_of(&self, car: CarId) -> Option<usize> {
        self.spaces.iter().position(|s| s.contains(car))
    }

    // A car sits on at most one space.
    pub fn place_car(&mut self, car: CarId, index: usize) -> Result<(), BoardError> {
        if self.position_of(car).is_some() {
            warn!("{} is already on the track", car);
            return Err(BoardError::AlreadyPlaced(car));
        }
        self.space_mut(index)?.add_car(car)?;
        Ok(())
    }

    // Leaves the car where it was if the destination refuses it.
    pub fn move_car(&mut self, car: CarId, from: usize, to: usize) -> Result<(), BoardError> {
        if from == to {
            return if self.space(from)?.contains(car) {
                Ok(())
            } else {
                Err(SpaceError::CarNotFound(car).into())
            };
        }
        if self.space(to)?.is_full() {
            return Err(SpaceError::SpaceFull.into());
        }
        self.space_mut(from)?.remove_car(car)?;
        self.space_mut(to)?.add_car(car)?;
        Ok(())
    }

    pub fn has_finished(&self, car: &Car) -> bool {
        car.lap() >= self.number_of_laps
    }

    pub fn racer_turn_order(&self) -> &VecDeque<CarId> {
        &self.racer_turn_order
    }

    // Most laps first. Ties keep track order, then arrival order within a space.
    // Cars missing from `cars` are left out.
    pub fn set_racer_turn_order<'a, I>(&mut self, cars: I)
    where
        I: IntoIterator<Item = &'a Car>,
    {
        let laps: HashMap<CarId, u32> = cars.into_iter().map(|c| (c.id(), c.lap())).collect();
        let mut order: Vec<(CarId, u32)> = Vec::with_capacity(laps.len());
        for car in self.spaces.iter().flat_map(|s| s.cars().iter().copied()) {
            let Some(&lap) = laps.get(&car) else {
                warn!("{} is on the track but was not given a lap count", car);
                continue;
            };
            // Queue is kept in descending lap order: insert after every car on at least this lap.
            let idx = order.partition_point(|&(_, l)| l >= lap);
            order.insert(idx, (car, lap));
        }
        self.racer_turn_order = order.into_iter().map(|(car, _)| car).collect();
        debug!("turn order: {:?}", self.racer_turn_order);
    }

    pub fn get_next_racer(&mut self) -> Option<CarId> {
        self.racer_turn_order.pop_front()
    }
}
