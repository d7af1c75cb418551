use crate::race::car::CarId;
use thiserror::Error;
use tracing::warn;

pub const SPACE_CAPACITY: usize = 2;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpaceError {
    #[error("Space is full")]
    SpaceFull,
    #[error("{0} not found in space")]
    CarNotFound(CarId),
    #[error("{0} is already in this space")]
    AlreadyPresent(CarId),
}

// Holds car ids only. The cars themselves belong to their players.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Space {
    cars: Vec<CarId>,
    corner: u32,
    finish_line: bool,
}

impl Space {
    pub fn new(corner: u32, finish_line: bool) -> Self {
        Space {
            cars: Vec::with_capacity(SPACE_CAPACITY),
            corner,
            finish_line,
        }
    }

    // In the order the cars entered the space
    pub fn cars(&self) -> &[CarId] {
        &self.cars
    }

    pub fn corner(&self) -> u32 {
        self.corner
    }

    pub fn is_finish_line(&self) -> bool {
        self.finish_line
    }

    pub fn is_full(&self) -> bool {
        self.cars.len() >= SPACE_CAPACITY
    }

    pub fn is_occupied(&self) -> bool {
        !self.cars.is_empty()
    }

    pub fn contains(&self, car: CarId) -> bool {
        self.cars.contains(&car)
    }

    pub fn add_car(&mut self, car: CarId) -> Result<(), SpaceError> {
        if self.contains(car) {
            return Err(SpaceError::AlreadyPresent(car));
        }
        if self.is_full() {
            warn!("{} cannot enter a full space", car);
            return Err(SpaceError::SpaceFull);
        }
        self.cars.push(car);
        Ok(())
    }

    pub fn remove_car(&mut self, car: CarId) -> Result<(), SpaceError> {
        let idx = self
            .cars
            .iter()
            .position(|&c| c == car)
            .ok_or(SpaceError::CarNotFound(car))?;
        self.cars.remove(idx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_space() {
        let space = Space::new(2, true);
        assert_eq!(space.corner(), 2);
        assert!(space.is_finish_line());
        assert!(!space.is_occupied());
        assert!(!space.is_full());
        assert!(space.cars().is_empty());
    }

    #[test]
    fn test_add_car() {
        let mut space = Space::new(0, false);
        space.add_car(CarId(1)).unwrap();
        assert!(space.is_occupied());
        assert!(!space.is_full());
        space.add_car(CarId(2)).unwrap();
        assert!(space.is_full());
        assert_eq!(space.cars(), &[CarId(1), CarId(2)]);
    }

    #[test]
    fn test_third_car_is_refused() {
        let mut space = Space::new(0, false);
        space.add_car(CarId(1)).unwrap();
        space.add_car(CarId(2)).unwrap();
        assert_eq!(space.add_car(CarId(3)), Err(SpaceError::SpaceFull));
        assert_eq!(space.cars(), &[CarId(1), CarId(2)]);
    }

    #[test]
    fn test_same_car_twice_is_refused() {
        let mut space = Space::new(0, false);
        space.add_car(CarId(1)).unwrap();
        assert_eq!(
            space.add_car(CarId(1)),
            Err(SpaceError::AlreadyPresent(CarId(1)))
        );
        assert_eq!(space.cars(), &[CarId(1)]);
    }

    #[test]
    fn test_remove_car() {
        let mut space = Space::new(0, false);
        space.add_car(CarId(1)).unwrap();
        space.add_car(CarId(2)).unwrap();
        space.remove_car(CarId(1)).unwrap();
        assert_eq!(space.cars(), &[CarId(2)]);
        assert!(!space.is_full());
    }

    #[test]
    fn test_remove_missing_car() {
        let mut space = Space::new(0, false);
        space.add_car(CarId(1)).unwrap();
        assert_eq!(
            space.remove_car(CarId(7)),
            Err(SpaceError::CarNotFound(CarId(7)))
        );
        assert_eq!(space.cars(), &[CarId(1)]);
    }
}
