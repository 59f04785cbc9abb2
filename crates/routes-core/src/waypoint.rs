// crates/routes-core/src/waypoint.rs
//
// Waypoints: the endpoints of every route request.

/// A latitude/longitude pair in degrees (`google.type.LatLng`).
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct LatLng {
    #[prost(double, tag = "1")]
    pub latitude: f64,
    #[prost(double, tag = "2")]
    pub longitude: f64,
}

/// A geographic point, optionally with a heading.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Location {
    #[prost(message, optional, tag = "1")]
    pub lat_lng: Option<LatLng>,
    /// Compass heading in degrees, wrapped as `google.protobuf.Int32Value`.
    #[prost(message, optional, tag = "2")]
    pub heading: Option<i32>,
}

/// A location reference usable as a route endpoint.
///
/// The sample programs only ever build the coordinate variant; place ids and
/// free-form addresses are decoded when the server echoes them back.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Waypoint {
    #[prost(oneof = "LocationType", tags = "1, 2, 7")]
    pub location_type: Option<LocationType>,
    /// Marks the waypoint as a pass-through point rather than a stop.
    #[prost(bool, tag = "3")]
    pub via: bool,
    #[prost(bool, tag = "4")]
    pub vehicle_stopover: bool,
    #[prost(bool, tag = "5")]
    pub side_of_road: bool,
}

/// The ways a waypoint can name a location.
#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum LocationType {
    /// An explicit coordinate.
    #[prost(message, tag = "1")]
    Location(Location),
    /// A place id from the Places API.
    #[prost(string, tag = "2")]
    PlaceId(String),
    /// A human-readable address or plus code.
    #[prost(string, tag = "7")]
    Address(String),
}

/// Build a coordinate waypoint from a latitude and longitude in degrees.
///
/// No range checking is done here; out-of-range coordinates are rejected by
/// the remote service.
pub fn waypoint(lat: f64, lng: f64) -> Waypoint {
    Waypoint {
        location_type: Some(LocationType::Location(Location {
            lat_lng: Some(LatLng {
                latitude: lat,
                longitude: lng,
            }),
            heading: None,
        })),
        ..Default::default()
    }
}

impl Waypoint {
    /// The coordinate of this waypoint, if it is the coordinate variant.
    pub fn lat_lng(&self) -> Option<LatLng> {
        match &self.location_type {
            Some(LocationType::Location(location)) => location.lat_lng,
            _ => None,
        }
    }
}
