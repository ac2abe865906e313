use crate::{BikeAccess, FootAccess};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Final routing attributes of a way.
///
/// Produced by [`EdgeProperties::normalize`](crate::EdgeProperties::normalize);
/// nothing here is unknown any more.
/// Car fields hold a speed in kph, where 0 means cars may not use that direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeAttributes {
    car_direct: u32,
    car_reverse: u32,
    bike_direct: BikeAccess,
    bike_reverse: BikeAccess,
    foot: FootAccess,
}

impl EdgeAttributes {
    pub(crate) const fn new(
        car_direct: u32,
        car_reverse: u32,
        bike_direct: BikeAccess,
        bike_reverse: BikeAccess,
        foot: FootAccess,
    ) -> Self {
        Self {
            car_direct,
            car_reverse,
            bike_direct,
            bike_reverse,
            foot,
        }
    }

    /// Car speed (in kph) in the stored direction, or 0 if cars are not allowed.
    #[inline]
    pub const fn car_direct(&self) -> u32 {
        self.car_direct
    }

    /// Car speed (in kph) against the stored direction, or 0 if cars are not allowed.
    #[inline]
    pub const fn car_reverse(&self) -> u32 {
        self.car_reverse
    }

    #[inline]
    pub const fn bike_direct(&self) -> BikeAccess {
        self.bike_direct
    }

    #[inline]
    pub const fn bike_reverse(&self) -> BikeAccess {
        self.bike_reverse
    }

    #[inline]
    pub const fn foot(&self) -> FootAccess {
        self.foot
    }

    pub const fn is_accessible(&self) -> bool {
        self.is_direct_accessible() || self.is_reverse_accessible()
    }

    pub const fn is_direct_accessible(&self) -> bool {
        self.car_direct > 0 || self.bike_direct.is_accessible() || self.foot.is_accessible()
    }

    pub const fn is_reverse_accessible(&self) -> bool {
        self.car_reverse > 0 || self.bike_reverse.is_accessible() || self.foot.is_accessible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foot_counts_in_both_directions() {
        let attributes = EdgeAttributes::new(
            0,
            0,
            BikeAccess::Forbidden,
            BikeAccess::Forbidden,
            FootAccess::Allowed,
        );
        assert!(attributes.is_direct_accessible());
        assert!(attributes.is_reverse_accessible());
    }

    #[test]
    fn test_one_direction_only() {
        let attributes = EdgeAttributes::new(
            50,
            0,
            BikeAccess::Lane,
            BikeAccess::Forbidden,
            FootAccess::Forbidden,
        );
        assert!(attributes.is_accessible());
        assert!(attributes.is_direct_accessible());
        assert!(!attributes.is_reverse_accessible());
    }

    #[test]
    fn test_closed() {
        let attributes = EdgeAttributes::new(
            0,
            0,
            BikeAccess::Forbidden,
            BikeAccess::Forbidden,
            FootAccess::Forbidden,
        );
        assert!(!attributes.is_accessible());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_names() {
        let attributes = EdgeAttributes::new(
            30,
            0,
            BikeAccess::Allowed,
            BikeAccess::Forbidden,
            FootAccess::Allowed,
        );
        insta::assert_json_snapshot!(attributes, @r#"
        {
          "car_direct": 30,
          "car_reverse": 0,
          "bike_direct": "allowed",
          "bike_reverse": "forbidden",
          "foot": "allowed"
        }
        "#);
    }
}
