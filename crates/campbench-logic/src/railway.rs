//! Shortest-path analytics for high-speed railway networks.
//!
//! Stations are vertices, track segments are weighted edges, and travel
//! times come from Dijkstra over the adjacency map. On top of that sit
//! "local factors" (station weight plus per-track speed/length
//! contributions) and an equivariant index that aggregates those factors
//! over orbits of a symmetry group action on the stations.

use serde::{Deserialize, Serialize};
use std::collections::{BinaryHeap, HashMap};

/// Network construction or query failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    EmptyStationName,
    DuplicateStation(String),
    UnknownStation(String),
    /// Named track parameter violated its constraint.
    InvalidTrack(&'static str),
    Unreachable {
        origin: String,
        destination: String,
    },
    EmptyOrbit,
    /// Station assigned to more than one orbit.
    OrbitOverlap(String),
    NonPositiveExponent,
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::EmptyStationName => write!(f, "station name must be non-empty"),
            NetworkError::DuplicateStation(name) => {
                write!(f, "station '{}' already exists", name)
            }
            NetworkError::UnknownStation(name) => write!(f, "unknown station '{}'", name),
            NetworkError::InvalidTrack(reason) => write!(f, "invalid track: {}", reason),
            NetworkError::Unreachable {
                origin,
                destination,
            } => write!(f, "destination '{}' is not reachable from '{}'", destination, origin),
            NetworkError::EmptyOrbit => write!(f, "orbit collections must be non-empty"),
            NetworkError::OrbitOverlap(name) => {
                write!(f, "station '{}' appears in multiple orbits", name)
            }
            NetworkError::NonPositiveExponent => write!(f, "weight exponent must be positive"),
        }
    }
}

impl std::error::Error for NetworkError {}

/// A railway station with planar coordinates in kilometres and a
/// dimensionless importance weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub coordinates: (f64, f64),
    pub weight: f64,
}

impl Station {
    /// Station with the default importance weight of 1.0.
    pub fn new(name: impl Into<String>, coordinates: (f64, f64)) -> Result<Self, NetworkError> {
        Self::with_weight(name, coordinates, 1.0)
    }

    pub fn with_weight(
        name: impl Into<String>,
        coordinates: (f64, f64),
        weight: f64,
    ) -> Result<Self, NetworkError> {
        let name = name.into();
        if name.is_empty() {
            return Err(NetworkError::EmptyStationName);
        }
        Ok(Station {
            name,
            coordinates,
            weight,
        })
    }

    /// Euclidean distance to another station in kilometres.
    pub fn distance_to(&self, other: &Station) -> f64 {
        let (x0, y0) = self.coordinates;
        let (x1, y1) = other.coordinates;
        (x0 - x1).hypot(y0 - y1)
    }
}

/// A track segment connecting two stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub origin: String,
    pub destination: String,
    pub length_km: f64,
    pub design_speed_kph: f64,
    pub bidirectional: bool,
}

impl Track {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        length_km: f64,
        design_speed_kph: f64,
        bidirectional: bool,
    ) -> Result<Self, NetworkError> {
        let origin = origin.into();
        let destination = destination.into();
        if length_km <= 0.0 {
            return Err(NetworkError::InvalidTrack("track length must be positive"));
        }
        if design_speed_kph <= 0.0 {
            return Err(NetworkError::InvalidTrack("design speed must be positive"));
        }
        if origin == destination {
            return Err(NetworkError::InvalidTrack("tracks must connect distinct stations"));
        }
        Ok(Track {
            origin,
            destination,
            length_km,
            design_speed_kph,
            bidirectional,
        })
    }

    /// Travel time over this segment in hours.
    pub fn travel_time_hours(&self) -> f64 {
        self.length_km / self.design_speed_kph
    }
}

/// Min-heap entry for Dijkstra. Ordering is reversed on the travel time
/// so `BinaryHeap` pops the cheapest station first.
struct QueueEntry {
    time: f64,
    station: String,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.time.total_cmp(&self.time)
    }
}

/// A railway network with high-speed track segments.
#[derive(Debug, Clone, Default)]
pub struct RailwayNetwork {
    stations: HashMap<String, Station>,
    /// Insertion order, for stable iteration.
    station_order: Vec<String>,
    tracks: Vec<Track>,
    adjacency: HashMap<String, Vec<(String, f64)>>,
}

impl RailwayNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_station(&mut self, station: Station) -> Result<(), NetworkError> {
        if self.stations.contains_key(&station.name) {
            return Err(NetworkError::DuplicateStation(station.name));
        }
        self.adjacency.entry(station.name.clone()).or_default();
        self.station_order.push(station.name.clone());
        self.stations.insert(station.name.clone(), station);
        Ok(())
    }

    pub fn add_track(&mut self, track: Track) -> Result<(), NetworkError> {
        if !self.stations.contains_key(&track.origin) {
            return Err(NetworkError::UnknownStation(track.origin));
        }
        if !self.stations.contains_key(&track.destination) {
            return Err(NetworkError::UnknownStation(track.destination));
        }

        let travel_time = track.travel_time_hours();
        self.adjacency
            .get_mut(&track.origin)
            .expect("origin station present")
            .push((track.destination.clone(), travel_time));
        if track.bidirectional {
            self.adjacency
                .get_mut(&track.destination)
                .expect("destination station present")
                .push((track.origin.clone(), travel_time));
        }
        self.tracks.push(track);
        Ok(())
    }

    /// Stations in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.station_order
            .iter()
            .filter_map(|name| self.stations.get(name))
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Shortest travel time between two stations in hours (Dijkstra).
    pub fn travel_time(&self, origin: &str, destination: &str) -> Result<f64, NetworkError> {
        if !self.stations.contains_key(origin) {
            return Err(NetworkError::UnknownStation(origin.to_string()));
        }
        if !self.stations.contains_key(destination) {
            return Err(NetworkError::UnknownStation(destination.to_string()));
        }
        if origin == destination {
            return Ok(0.0);
        }

        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry {
            time: 0.0,
            station: origin.to_string(),
        });
        let mut settled: HashMap<String, f64> = HashMap::new();

        while let Some(QueueEntry { time, station }) = queue.pop() {
            if let Some(&best) = settled.get(&station) {
                if time >= best {
                    continue;
                }
            }
            settled.insert(station.clone(), time);

            if station == destination {
                return Ok(time);
            }

            for (neighbour, leg_time) in self.adjacency.get(&station).into_iter().flatten() {
                let next_time = time + leg_time;
                let improves = settled
                    .get(neighbour)
                    .map_or(true, |&best| next_time < best);
                if improves {
                    queue.push(QueueEntry {
                        time: next_time,
                        station: neighbour.clone(),
                    });
                }
            }
        }

        Err(NetworkError::Unreachable {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
    }

    /// Travel time for visiting `stops` in order. Legs with a direct
    /// track use it; other legs fall back to the shortest path.
    pub fn itinerary_time(&self, stops: &[&str]) -> Result<f64, NetworkError> {
        if stops.len() < 2 {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for leg in stops.windows(2) {
            let (start, end) = (leg[0], leg[1]);
            let direct = self
                .adjacency
                .get(start)
                .and_then(|edges| edges.iter().find(|(name, _)| name == end))
                .map(|(_, time)| *time);
            total += match direct {
                Some(time) => time,
                None => self.travel_time(start, end)?,
            };
        }
        Ok(total)
    }

    /// Local invariants: station weight plus half of each incident
    /// track's speed-to-length ratio at either endpoint.
    pub fn local_factors(&self) -> HashMap<String, f64> {
        let mut factors: HashMap<String, f64> = self
            .stations
            .iter()
            .map(|(name, station)| (name.clone(), station.weight))
            .collect();
        for track in &self.tracks {
            let contribution = track.design_speed_kph / track.length_km;
            *factors.get_mut(&track.origin).expect("origin present") += 0.5 * contribution;
            *factors.get_mut(&track.destination).expect("destination present") +=
                0.5 * contribution;
        }
        factors
    }

    /// Equivariant index: the product over orbits of the average local
    /// factor raised to `weight_exponent`. Stations not covered by any
    /// orbit contribute as singleton orbits so the measure accounts for
    /// the entire network.
    pub fn equivariant_index(
        &self,
        orbits: &[Vec<String>],
        weight_exponent: f64,
    ) -> Result<f64, NetworkError> {
        if weight_exponent <= 0.0 {
            return Err(NetworkError::NonPositiveExponent);
        }

        let local_factors = self.local_factors();
        let mut covered: Vec<&str> = Vec::new();
        let mut invariant = 1.0;

        for orbit in orbits {
            if orbit.is_empty() {
                return Err(NetworkError::EmptyOrbit);
            }
            let mut total = 0.0;
            for name in orbit {
                let factor = local_factors
                    .get(name)
                    .ok_or_else(|| NetworkError::UnknownStation(name.clone()))?;
                if covered.contains(&name.as_str()) {
                    return Err(NetworkError::OrbitOverlap(name.clone()));
                }
                covered.push(name.as_str());
                total += factor;
            }
            let average = total / orbit.len() as f64;
            invariant *= average.powf(weight_exponent);
        }

        for name in &self.station_order {
            if !covered.contains(&name.as_str()) {
                invariant *= local_factors[name].powf(weight_exponent);
            }
        }

        Ok(invariant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sample_network() -> RailwayNetwork {
        let mut network = RailwayNetwork::new();
        for (name, coords) in [
            ("North", (0.0, 100.0)),
            ("Central", (0.0, 0.0)),
            ("East", (80.0, 0.0)),
            ("South", (0.0, -120.0)),
        ] {
            network.add_station(Station::new(name, coords).unwrap()).unwrap();
        }
        // 300 kph lines: North—Central (150 km), Central—East (90 km),
        // Central—South (120 km).
        network
            .add_track(Track::new("North", "Central", 150.0, 300.0, true).unwrap())
            .unwrap();
        network
            .add_track(Track::new("Central", "East", 90.0, 300.0, true).unwrap())
            .unwrap();
        network
            .add_track(Track::new("Central", "South", 120.0, 300.0, true).unwrap())
            .unwrap();
        network
    }

    #[test]
    fn test_station_validation() {
        assert_eq!(Station::new("", (0.0, 0.0)), Err(NetworkError::EmptyStationName));
        let mut network = sample_network();
        assert_eq!(
            network.add_station(Station::new("North", (1.0, 1.0)).unwrap()),
            Err(NetworkError::DuplicateStation("North".to_string()))
        );
    }

    #[test]
    fn test_track_validation() {
        assert_eq!(
            Track::new("A", "B", 0.0, 300.0, true),
            Err(NetworkError::InvalidTrack("track length must be positive"))
        );
        assert_eq!(
            Track::new("A", "B", 10.0, -1.0, true),
            Err(NetworkError::InvalidTrack("design speed must be positive"))
        );
        assert_eq!(
            Track::new("A", "A", 10.0, 300.0, true),
            Err(NetworkError::InvalidTrack("tracks must connect distinct stations"))
        );
    }

    #[test]
    fn test_track_endpoints_must_exist() {
        let mut network = sample_network();
        assert_eq!(
            network.add_track(Track::new("North", "West", 50.0, 300.0, true).unwrap()),
            Err(NetworkError::UnknownStation("West".to_string()))
        );
    }

    #[test]
    fn test_direct_travel_time() {
        let network = sample_network();
        assert!((network.travel_time("North", "Central").unwrap() - 0.5).abs() < EPS);
        assert!((network.travel_time("Central", "Central").unwrap()).abs() < EPS);
    }

    #[test]
    fn test_multi_hop_shortest_path() {
        let network = sample_network();
        // North → Central → East: 0.5 h + 0.3 h.
        assert!((network.travel_time("North", "East").unwrap() - 0.8).abs() < EPS);
    }

    #[test]
    fn test_unidirectional_track_is_one_way() {
        let mut network = RailwayNetwork::new();
        network.add_station(Station::new("A", (0.0, 0.0)).unwrap()).unwrap();
        network.add_station(Station::new("B", (10.0, 0.0)).unwrap()).unwrap();
        network
            .add_track(Track::new("A", "B", 100.0, 200.0, false).unwrap())
            .unwrap();
        assert!(network.travel_time("A", "B").is_ok());
        assert_eq!(
            network.travel_time("B", "A"),
            Err(NetworkError::Unreachable {
                origin: "B".to_string(),
                destination: "A".to_string(),
            })
        );
    }

    #[test]
    fn test_itinerary_time_mixes_direct_and_routed_legs() {
        let network = sample_network();
        // South → Central is direct; Central → East is direct;
        // East → North needs routing through Central.
        let total = network.itinerary_time(&["South", "Central", "East", "North"]).unwrap();
        assert!((total - (0.4 + 0.3 + 0.8)).abs() < EPS);
        assert!((network.itinerary_time(&["North"]).unwrap()).abs() < EPS);
    }

    #[test]
    fn test_local_factors() {
        let network = sample_network();
        let factors = network.local_factors();
        // North touches one 300/150 track: 1.0 + 0.5·2 = 2.0.
        assert!((factors["North"] - 2.0).abs() < EPS);
        // Central touches all three tracks:
        // 1.0 + 0.5·(2 + 10/3 + 2.5).
        assert!((factors["Central"] - (1.0 + 0.5 * (2.0 + 300.0 / 90.0 + 2.5))).abs() < EPS);
    }

    #[test]
    fn test_equivariant_index_with_singleton_completion() {
        let network = sample_network();
        let orbits = vec![vec!["North".to_string(), "South".to_string()]];
        let factors = network.local_factors();
        let expected = 0.5 * (factors["North"] + factors["South"])
            * factors["Central"]
            * factors["East"];
        let index = network.equivariant_index(&orbits, 1.0).unwrap();
        assert!((index - expected).abs() < 1e-6);
    }

    #[test]
    fn test_equivariant_index_orbit_validation() {
        let network = sample_network();
        assert_eq!(
            network.equivariant_index(&[vec![]], 1.0),
            Err(NetworkError::EmptyOrbit)
        );
        assert_eq!(
            network.equivariant_index(&[vec!["Mars".to_string()]], 1.0),
            Err(NetworkError::UnknownStation("Mars".to_string()))
        );
        let overlapping = vec![
            vec!["North".to_string()],
            vec!["North".to_string(), "South".to_string()],
        ];
        assert_eq!(
            network.equivariant_index(&overlapping, 1.0),
            Err(NetworkError::OrbitOverlap("North".to_string()))
        );
        assert_eq!(
            network.equivariant_index(&[], 0.0),
            Err(NetworkError::NonPositiveExponent)
        );
    }

    #[test]
    fn test_station_distance() {
        let network = sample_network();
        let stations: Vec<&Station> = network.stations().collect();
        assert_eq!(stations[0].name, "North");
        let north = &stations[0];
        let central = &stations[1];
        assert!((north.distance_to(central) - 100.0).abs() < EPS);
    }
}
