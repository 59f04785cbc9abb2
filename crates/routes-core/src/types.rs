// crates/routes-core/src/types.rs
//
// Enumerations, route modifiers, and route objectives shared by the request
// messages.

/// How the route is travelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RouteTravelMode {
    TravelModeUnspecified = 0,
    Drive = 1,
    Bicycle = 2,
    Walk = 3,
    TwoWheeler = 4,
    Taxi = 5,
    Transit = 7,
}

/// How much live traffic the server takes into account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RoutingPreference {
    RoutingPreferenceUnspecified = 0,
    /// Ignore live traffic. Fastest to compute.
    TrafficUnaware = 1,
    /// Consider live traffic with latency optimizations.
    TrafficAware = 2,
    /// Consider live traffic without latency optimizations.
    TrafficAwareOptimal = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Units {
    UnitsUnspecified = 0,
    Metric = 1,
    Imperial = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PolylineQuality {
    PolylineQualityUnspecified = 0,
    HighQuality = 1,
    Overview = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PolylineEncoding {
    PolylineEncodingUnspecified = 0,
    EncodedPolyline = 1,
    GeoJsonLinestring = 2,
}

/// Conditions the server should satisfy when computing routes.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct RouteModifiers {
    #[prost(bool, tag = "1")]
    pub avoid_tolls: bool,
    #[prost(bool, tag = "2")]
    pub avoid_highways: bool,
    #[prost(bool, tag = "3")]
    pub avoid_ferries: bool,
    #[prost(bool, tag = "4")]
    pub avoid_indoor: bool,
}

impl RouteModifiers {
    /// The modifier set used by every sample request: tolls allowed,
    /// highways and ferries avoided.
    pub fn avoid_highways_and_ferries() -> Self {
        Self {
            avoid_tolls: false,
            avoid_highways: true,
            avoid_ferries: true,
            avoid_indoor: false,
        }
    }
}

/// A caller-supplied cost model the server uses to pick a custom route.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteObjective {
    #[prost(oneof = "Objective", tags = "1")]
    pub objective: Option<Objective>,
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum Objective {
    #[prost(message, tag = "1")]
    RateCard(RateCard),
}

/// Monetary cost per unit of time and distance.
///
/// The server scores each candidate route as
/// `minutes * cost_per_minute + km * cost_per_km` (plus tolls when
/// `include_tolls` is set) and returns the cheapest.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RateCard {
    #[prost(message, optional, tag = "2")]
    pub cost_per_minute: Option<MonetaryCost>,
    #[prost(message, optional, tag = "3")]
    pub cost_per_km: Option<MonetaryCost>,
    #[prost(bool, tag = "4")]
    pub include_tolls: bool,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MonetaryCost {
    #[prost(double, tag = "1")]
    pub value: f64,
}

impl RouteObjective {
    /// A rate card objective that only charges for travel time.
    pub fn cost_per_minute(value: f64) -> Self {
        Self {
            objective: Some(Objective::RateCard(RateCard {
                cost_per_minute: Some(MonetaryCost { value }),
                cost_per_km: None,
                include_tolls: false,
            })),
        }
    }

    pub fn rate_card(&self) -> Option<&RateCard> {
        match &self.objective {
            Some(Objective::RateCard(card)) => Some(card),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_values_match_service() {
        assert_eq!(RouteTravelMode::Drive as i32, 1);
        assert_eq!(RouteTravelMode::Transit as i32, 7);
        assert_eq!(RoutingPreference::TrafficAwareOptimal as i32, 3);
        assert_eq!(Units::Metric as i32, 1);
        assert_eq!(PolylineQuality::Overview as i32, 2);
    }

    #[test]
    fn unknown_travel_mode_is_rejected() {
        assert!(RouteTravelMode::try_from(6).is_err());
        assert_eq!(RouteTravelMode::try_from(3).ok(), Some(RouteTravelMode::Walk));
    }

    #[test]
    fn cost_per_minute_objective() {
        let objective = RouteObjective::cost_per_minute(1.1);
        let card = objective.rate_card().expect("rate card");
        assert_eq!(card.cost_per_minute, Some(MonetaryCost { value: 1.1 }));
        assert!(card.cost_per_km.is_none());
        assert!(!card.include_tolls);
    }
}
