use crate::rules::{self, Assignment, TagRule};
use crate::{
    BikeAccess, CarAccess, Diagnostic, DiagnosticSink, EdgeAttributes, FootAccess, RoadClass,
};

/// The routing attributes of a way, as learned so far from its tags.
///
/// Every field starts out unknown (`None`).
/// Tags fill fields in as they arrive, with later tags overwriting earlier ones.
/// Once all tags are in, [`EdgeProperties::normalize`] resolves the remaining
/// unknowns and produces the final [`EdgeAttributes`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgeProperties {
    car_direct: Option<CarAccess>,
    car_reverse: Option<CarAccess>,
    bike_direct: Option<BikeAccess>,
    bike_reverse: Option<BikeAccess>,
    foot: Option<FootAccess>,
    max_speed: Option<i32>,
}

impl EdgeProperties {
    /// Creates a record with every field unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a sequence of tags, applied in order.
    pub fn from_tags<I, K, V>(tags: I, mut sink: impl DiagnosticSink) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut props = Self::new();
        for (key, value) in tags {
            props.update(key.as_ref(), value.as_ref(), &mut sink);
        }
        props
    }

    /// Clears all access fields back to unknown.
    ///
    /// The tagged max speed is kept.
    pub fn reset(&mut self) {
        self.car_direct = None;
        self.car_reverse = None;
        self.bike_direct = None;
        self.bike_reverse = None;
        self.foot = None;
    }

    #[inline]
    pub fn car_direct(&self) -> Option<CarAccess> {
        self.car_direct
    }

    #[inline]
    pub fn car_reverse(&self) -> Option<CarAccess> {
        self.car_reverse
    }

    #[inline]
    pub fn bike_direct(&self) -> Option<BikeAccess> {
        self.bike_direct
    }

    #[inline]
    pub fn bike_reverse(&self) -> Option<BikeAccess> {
        self.bike_reverse
    }

    #[inline]
    pub fn foot(&self) -> Option<FootAccess> {
        self.foot
    }

    /// The speed limit exactly as tagged, if any.
    ///
    /// Non-positive values are kept here but never used as a speed.
    #[inline]
    pub fn max_speed(&self) -> Option<i32> {
        self.max_speed
    }

    /// Is the way usable in any direction by any mode (as far as we know so far)?
    pub fn is_accessible(&self) -> bool {
        self.is_direct_accessible() || self.is_reverse_accessible()
    }

    /// Is the way usable in its stored direction?
    /// Unknown fields never count as accessible.
    pub fn is_direct_accessible(&self) -> bool {
        self.car_direct.is_some_and(CarAccess::is_accessible)
            || self.bike_direct.is_some_and(BikeAccess::is_accessible)
            || self.foot.is_some_and(FootAccess::is_accessible)
    }

    /// Is the way usable against its stored direction?
    pub fn is_reverse_accessible(&self) -> bool {
        self.car_reverse.is_some_and(CarAccess::is_accessible)
            || self.bike_reverse.is_some_and(BikeAccess::is_accessible)
            || self.foot.is_some_and(FootAccess::is_accessible)
    }

    /// Applies a single tag and returns whether the way is accessible afterward.
    ///
    /// Values this crate does not understand are reported to `sink`
    /// and leave the record unchanged.
    /// The return value lets callers stop early; nothing here requires it.
    pub fn update(&mut self, key: &str, value: &str, mut sink: impl DiagnosticSink) -> bool {
        match rules::classify(key, value) {
            TagRule::Ignore => {}
            TagRule::Assign(assignments) => {
                for assignment in assignments {
                    self.apply(*assignment);
                }
            }
            TagRule::MaxSpeed(speed) => self.max_speed = Some(speed),
            TagRule::Report(diagnostic) => sink.report(diagnostic),
        }

        self.is_accessible()
    }

    fn apply(&mut self, assignment: Assignment) {
        match assignment {
            Assignment::CarDirect(access) => self.car_direct = Some(access),
            Assignment::CarReverse(access) => self.car_reverse = Some(access),
            Assignment::BikeDirect(access) => self.bike_direct = Some(access),
            Assignment::BikeReverse(access) => self.bike_reverse = Some(access),
            Assignment::BikeReverseIfUnknown(access) => {
                self.bike_reverse.get_or_insert(access);
            }
            Assignment::Foot(access) => self.foot = Some(access),
        }
    }

    /// Resolves every unknown field and computes car speeds.
    ///
    /// In order:
    /// 1. An unknown reverse direction inherits the direct one, for cars and bikes.
    /// 2. Anything still unknown is forbidden.
    /// 3. With a positive tagged max speed, every drivable direction gets that speed.
    ///    Otherwise each direction gets its road class default.
    ///
    /// The record is consumed, so this can only happen once.
    pub fn normalize(self) -> EdgeAttributes {
        let car_reverse = self.car_reverse.or(self.car_direct);
        let bike_reverse = self.bike_reverse.or(self.bike_direct);

        let car_direct = self.car_direct.unwrap_or(CarAccess::Forbidden);
        let car_reverse = car_reverse.unwrap_or(CarAccess::Forbidden);
        let bike_direct = self.bike_direct.unwrap_or(BikeAccess::Forbidden);
        let bike_reverse = bike_reverse.unwrap_or(BikeAccess::Forbidden);
        let foot = self.foot.unwrap_or(FootAccess::Forbidden);

        let tagged_speed = self
            .max_speed
            .and_then(|speed| u32::try_from(speed).ok())
            .filter(|speed| *speed > 0);
        let speed = |access: CarAccess| match tagged_speed {
            Some(speed) if access.is_accessible() => speed,
            _ => access.default_speed(),
        };

        EdgeAttributes::new(
            speed(car_direct),
            speed(car_reverse),
            bike_direct,
            bike_reverse,
            foot,
        )
    }
}

/// Looks up the default speed (in kph) for a raw road class code.
///
/// Non-positive codes mean cars are forbidden and yield 0.
/// Unrecognized positive codes are reported and also yield 0.
pub fn default_max_speed(code: i32, mut sink: impl DiagnosticSink) -> u32 {
    if code <= 0 {
        return 0;
    }

    match u8::try_from(code)
        .ok()
        .and_then(|code| RoadClass::try_from(code).ok())
    {
        Some(class) => class.default_speed(),
        None => {
            sink.report(Diagnostic::UnknownRoadClass { code });
            0
        }
    }
}
