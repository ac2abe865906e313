//! # Tag vocabulary
//!
//! Maps a single `key=value` tag to a [`TagRule`].
//! Rules are data: a list of field assignments that
//! [`EdgeProperties::update`](crate::EdgeProperties::update) applies in order.
//! Dispatch happens on the key alone; unknown keys are ignored.
//!
//! References:
//! - <https://wiki.openstreetmap.org/wiki/Key:highway>
//! - <https://wiki.openstreetmap.org/wiki/Key:cycleway>
//! - <https://wiki.openstreetmap.org/wiki/Key:oneway>

use crate::{BikeAccess, CarAccess, Diagnostic, FootAccess, RoadClass};
use tracing::trace;

/// Sets one field of the record.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Assignment {
    CarDirect(CarAccess),
    CarReverse(CarAccess),
    BikeDirect(BikeAccess),
    BikeReverse(BikeAccess),
    /// Sets the reverse bike access only while it is still unknown,
    /// so an explicit contraflow tag survives a later `oneway`.
    BikeReverseIfUnknown(BikeAccess),
    Foot(FootAccess),
}

/// What a single tag does to the record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TagRule {
    /// The tag has no bearing on routing attributes.
    Ignore,
    /// Apply the assignments, in order.
    Assign(&'static [Assignment]),
    /// An explicit speed limit, exactly as tagged.
    MaxSpeed(i32),
    /// The key is known but the value is not; the record stays untouched.
    Report(Diagnostic),
}

use Assignment::{BikeDirect, BikeReverse, BikeReverseIfUnknown, CarDirect, CarReverse, Foot};

const NON_MOTORIZED: &[Assignment] = &[
    BikeDirect(BikeAccess::Track),
    Foot(FootAccess::Allowed),
];

const fn shared_road(class: RoadClass) -> [Assignment; 3] {
    [
        CarDirect(CarAccess::Road(class)),
        Foot(FootAccess::Allowed),
        BikeDirect(BikeAccess::Allowed),
    ]
}

const fn motor_road(class: RoadClass) -> [Assignment; 3] {
    [
        CarDirect(CarAccess::Road(class)),
        Foot(FootAccess::Forbidden),
        BikeDirect(BikeAccess::Forbidden),
    ]
}

const PRIMARY: &[Assignment] = &shared_road(RoadClass::Primary);
const SECONDARY: &[Assignment] = &shared_road(RoadClass::Secondary);
const TERTIARY: &[Assignment] = &shared_road(RoadClass::Tertiary);
const RESIDENTIAL: &[Assignment] = &shared_road(RoadClass::Residential);
const MOTORWAY: &[Assignment] = &motor_road(RoadClass::Motorway);
const TRUNK: &[Assignment] = &motor_road(RoadClass::Trunk);

const FOOT_ALLOWED: &[Assignment] = &[Foot(FootAccess::Allowed)];
const FOOT_FORBIDDEN: &[Assignment] = &[Foot(FootAccess::Forbidden)];

const BIKE_DIRECT_ALLOWED: &[Assignment] = &[BikeDirect(BikeAccess::Allowed)];
const BIKE_DIRECT_FORBIDDEN: &[Assignment] = &[BikeDirect(BikeAccess::Forbidden)];
const BIKE_DIRECT_LANE: &[Assignment] = &[BikeDirect(BikeAccess::Lane)];
const BIKE_DIRECT_TRACK: &[Assignment] = &[BikeDirect(BikeAccess::Track)];
const BIKE_DIRECT_BUSWAY: &[Assignment] = &[BikeDirect(BikeAccess::Busway)];
const BIKE_REVERSE_ALLOWED: &[Assignment] = &[BikeReverse(BikeAccess::Allowed)];
const BIKE_REVERSE_LANE: &[Assignment] = &[BikeReverse(BikeAccess::Lane)];
const BIKE_REVERSE_TRACK: &[Assignment] = &[BikeReverse(BikeAccess::Track)];
const BIKE_REVERSE_BUSWAY: &[Assignment] = &[BikeReverse(BikeAccess::Busway)];

const ONEWAY: &[Assignment] = &[
    CarReverse(CarAccess::Forbidden),
    BikeReverseIfUnknown(BikeAccess::Forbidden),
];

/// Looks up the rule for a single tag.
pub fn classify(key: &str, value: &str) -> TagRule {
    match key {
        "highway" => highway(value),
        "pedestrian" | "foot" => foot(key, value),
        "cycleway" => cycleway(value),
        "bicycle" => bicycle(value),
        "busway" => busway(value),
        "oneway" => oneway(key, value),
        "junction" => junction(key, value),
        "maxspeed" => max_speed(value),
        _ => TagRule::Ignore,
    }
}

fn highway(value: &str) -> TagRule {
    TagRule::Assign(match value {
        "cycleway" | "path" | "footway" | "steps" | "pedestrian" => NON_MOTORIZED,
        "primary" | "primary_link" => PRIMARY,
        "secondary" => SECONDARY,
        "tertiary" => TERTIARY,
        "unclassified" | "residential" | "living_street" | "road" | "service" | "track" => {
            RESIDENTIAL
        }
        "motorway" | "motorway_link" => MOTORWAY,
        "trunk" | "trunk_link" => TRUNK,
        _ => {
            // Plenty of highway values (bus_stop, construction, ...) are not roads at all.
            trace!(value, "Ignoring highway value");
            return TagRule::Ignore;
        }
    })
}

fn foot(key: &str, value: &str) -> TagRule {
    match value {
        "yes" | "designated" | "permissive" => TagRule::Assign(FOOT_ALLOWED),
        "no" => TagRule::Assign(FOOT_FORBIDDEN),
        _ => unrecognized(key, value),
    }
}

fn cycleway(value: &str) -> TagRule {
    TagRule::Assign(match value {
        "track" => BIKE_DIRECT_TRACK,
        "opposite_lane" | "lane_left" => BIKE_REVERSE_LANE,
        "opposite_track" => BIKE_REVERSE_TRACK,
        "opposite" => BIKE_REVERSE_ALLOWED,
        "share_busway" => BIKE_DIRECT_BUSWAY,
        // Covers lane, yes, true and lane_in_the_middle along with anything unexpected
        _ => BIKE_DIRECT_LANE,
    })
}

/// `bicycle=true` is treated as allowed.
/// Older rule sets also listed it alongside `no`, but that branch could never be reached.
fn bicycle(value: &str) -> TagRule {
    match value {
        "yes" | "permissive" | "destination" | "designated" | "private" | "true" => {
            TagRule::Assign(BIKE_DIRECT_ALLOWED)
        }
        "no" => TagRule::Assign(BIKE_DIRECT_FORBIDDEN),
        _ => unrecognized("bicycle", value),
    }
}

fn busway(value: &str) -> TagRule {
    match value {
        "opposite_lane" | "opposite_track" => TagRule::Assign(BIKE_REVERSE_BUSWAY),
        // yes, track and lane, plus a fallback for anything else
        _ => TagRule::Assign(BIKE_DIRECT_BUSWAY),
    }
}

fn oneway(key: &str, value: &str) -> TagRule {
    match value {
        "yes" | "true" | "1" => TagRule::Assign(ONEWAY),
        _ => {
            trace!(key, value, "Not a forward oneway");
            TagRule::Ignore
        }
    }
}

fn junction(key: &str, value: &str) -> TagRule {
    match value {
        "roundabout" => TagRule::Assign(ONEWAY),
        _ => {
            trace!(key, value, "Not a roundabout");
            TagRule::Ignore
        }
    }
}

fn max_speed(value: &str) -> TagRule {
    match value.parse::<i32>() {
        Ok(speed) => TagRule::MaxSpeed(speed),
        Err(_) => TagRule::Report(Diagnostic::UnparsableMaxSpeed {
            value: value.to_string(),
        }),
    }
}

fn unrecognized(key: &str, value: &str) -> TagRule {
    TagRule::Report(Diagnostic::UnrecognizedValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
