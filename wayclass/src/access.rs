use crate::RoadClass;
use num_enum::{IntoPrimitive, TryFromPrimitive};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Motor vehicle access in one direction of a way.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CarAccess {
    Forbidden,
    /// Cars may drive here; the class determines the default speed.
    Road(RoadClass),
}

impl CarAccess {
    /// Can a car travel in this direction?
    #[inline]
    pub const fn is_accessible(self) -> bool {
        matches!(self, CarAccess::Road(_))
    }

    /// The numeric code: 0 when forbidden, otherwise the [`RoadClass`] code.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            CarAccess::Forbidden => 0,
            CarAccess::Road(class) => class.code(),
        }
    }

    /// The speed (in kph) assumed when no `maxspeed` is tagged.
    /// Forbidden directions have no speed.
    #[inline]
    pub const fn default_speed(self) -> u32 {
        match self {
            CarAccess::Forbidden => 0,
            CarAccess::Road(class) => class.default_speed(),
        }
    }
}

impl From<RoadClass> for CarAccess {
    fn from(value: RoadClass) -> Self {
        CarAccess::Road(value)
    }
}

/// Bicycle access in one direction of a way.
///
/// Every variant except [`BikeAccess::Forbidden`] allows travel;
/// the others only describe what kind of infrastructure is available.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum BikeAccess {
    Forbidden = 0,
    /// Shared with other traffic, no dedicated infrastructure.
    Allowed = 1,
    /// A painted lane on the carriageway.
    Lane = 2,
    /// A lane shared with buses.
    Busway = 3,
    /// Physically separated from motor traffic.
    Track = 4,
}

impl BikeAccess {
    #[inline]
    pub const fn is_accessible(self) -> bool {
        !matches!(self, BikeAccess::Forbidden)
    }

    #[inline]
    pub fn code(self) -> u8 {
        self.into()
    }
}

/// Pedestrian access. Walking is never directional.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum FootAccess {
    Forbidden = 0,
    Allowed = 1,
}

impl FootAccess {
    #[inline]
    pub const fn is_accessible(self) -> bool {
        matches!(self, FootAccess::Allowed)
    }

    #[inline]
    pub fn code(self) -> u8 {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_codes_are_zero() {
        assert_eq!(CarAccess::Forbidden.code(), 0);
        assert_eq!(BikeAccess::Forbidden.code(), 0);
        assert_eq!(FootAccess::Forbidden.code(), 0);
    }

    #[test]
    fn test_accessible_codes_are_positive() {
        for class in [
            RoadClass::Residential,
            RoadClass::Tertiary,
            RoadClass::Secondary,
            RoadClass::Primary,
            RoadClass::Trunk,
            RoadClass::Motorway,
        ] {
            let access = CarAccess::from(class);
            assert!(access.is_accessible());
            assert!(access.code() > 0);
        }

        for bike in [
            BikeAccess::Allowed,
            BikeAccess::Lane,
            BikeAccess::Busway,
            BikeAccess::Track,
        ] {
            assert!(bike.is_accessible());
            assert!(bike.code() > 0);
        }

        assert!(FootAccess::Allowed.is_accessible());
        assert_eq!(FootAccess::Allowed.code(), 1);
    }

    #[test]
    fn test_bike_code_round_trip() {
        assert_eq!(BikeAccess::try_from(4u8).ok(), Some(BikeAccess::Track));
        assert!(BikeAccess::try_from(5u8).is_err());
    }

    #[test]
    fn test_forbidden_car_has_no_speed() {
        assert_eq!(CarAccess::Forbidden.default_speed(), 0);
        assert_eq!(CarAccess::Road(RoadClass::Primary).default_speed(), 90);
    }
}
