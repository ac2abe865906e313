//! # Way tag classification for routing graphs
//!
//! Turns the free-form tags of an OpenStreetMap way into a small, fixed set of
//! routing attributes: which directions cars and bicycles may travel, whether
//! pedestrians may use the way at all, and how fast cars go.
//!
//! The lifecycle of a segment is:
//!
//! 1. Create an empty [`EdgeProperties`].
//! 2. Feed it every tag of the way with [`EdgeProperties::update`], in source order.
//! 3. Call [`EdgeProperties::normalize`] once, which consumes the record and
//!    yields the final [`EdgeAttributes`].
//!
//! ```
//! use wayclass::{BikeAccess, EdgeProperties, FootAccess};
//!
//! let mut diagnostics: Vec<wayclass::Diagnostic> = Vec::new();
//! let mut props = EdgeProperties::new();
//! props.update("highway", "residential", &mut diagnostics);
//! props.update("oneway", "yes", &mut diagnostics);
//!
//! let attributes = props.normalize();
//! assert_eq!(attributes.car_direct(), 30);
//! assert_eq!(attributes.car_reverse(), 0);
//! assert_eq!(attributes.bike_direct(), BikeAccess::Allowed);
//! assert_eq!(attributes.bike_reverse(), BikeAccess::Forbidden);
//! assert_eq!(attributes.foot(), FootAccess::Allowed);
//! assert!(diagnostics.is_empty());
//! ```
//!
//! Nothing in this crate fails on bad input.
//! Unrecognized values and unparsable speeds are reported to a caller-supplied
//! [`DiagnosticSink`] and otherwise ignored.

// Private modules by default
mod access;
mod diagnostics;
mod edge_attributes;
mod edge_properties;
pub mod rules;

pub use access::{BikeAccess, CarAccess, FootAccess};
pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use edge_attributes::EdgeAttributes;
pub use edge_properties::{EdgeProperties, default_max_speed};

use num_enum::{IntoPrimitive, TryFromPrimitive};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Road classification for motor traffic.
///
/// Variants are ordered by increasing nominal speed,
/// and the discriminants are the codes handed to graph builders.
/// Code 0 is reserved for [`CarAccess::Forbidden`].
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, IntoPrimitive, TryFromPrimitive,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum RoadClass {
    Residential = 1,
    Tertiary = 2,
    Secondary = 3,
    Primary = 4,
    Trunk = 5,
    Motorway = 6,
}

impl RoadClass {
    /// The speed (in kph) assumed for this class when the way carries no `maxspeed` tag.
    #[inline]
    pub const fn default_speed(self) -> u32 {
        match self {
            RoadClass::Residential => 30,
            RoadClass::Tertiary | RoadClass::Secondary => 50,
            RoadClass::Primary => 90,
            RoadClass::Trunk => 110,
            RoadClass::Motorway => 130,
        }
    }

    /// The numeric code for this class.
    #[inline]
    pub fn code(self) -> u8 {
        self.into()
    }
}
