//! Availability data models and the backend-to-UI normalization transform.
//!
//! The backend keys each building's rooms by room name and capitalizes the
//! per-slot field names. The UI wants rooms as an ordered list and slot
//! statuses lowercased; `normalize` performs that reshaping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A building as returned by the availability backend.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBuilding {
    pub building: String,
    pub building_code: String,
    /// "available" / "upcoming" / "unavailable"; unknown values pass through
    pub building_status: String,
    /// Keyed by room name; order of the source document is preserved
    #[serde(default)]
    pub rooms: IndexMap<String, RawRoom>,
    /// [lng, lat]
    pub coords: [f64; 2],
    pub distance: f64,
}

/// A room as returned by the availability backend.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoom {
    #[serde(default)]
    pub slots: Vec<RawSlot>,
}

/// A single availability interval as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSlot {
    #[serde(rename = "StartTime")]
    pub start_time: String,
    #[serde(rename = "EndTime")]
    pub end_time: String,
    #[serde(rename = "Status")]
    pub status: String,
}

/// A building in the UI-facing shape.
#[derive(Debug, Clone, Serialize)]
pub struct Building {
    pub building: String,
    pub building_code: String,
    pub building_status: String,
    pub rooms: Vec<Room>,
    pub coords: [f64; 2],
    pub distance: f64,
}

/// A room in the UI-facing shape, carrying its name out of the mapping key.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    #[serde(rename = "roomNumber")]
    pub room_number: String,
    pub slots: Vec<Slot>,
}

/// A single availability interval in the UI-facing shape.
///
/// The time field names stay capitalized; only `Status` is renamed and
/// lowercased.
#[derive(Debug, Clone, Serialize)]
pub struct Slot {
    #[serde(rename = "StartTime")]
    pub start_time: String,
    #[serde(rename = "EndTime")]
    pub end_time: String,
    pub status: String,
}

/// Normalize backend shape → UI shape.
///
/// Pure and order-preserving: buildings keep their sequence, rooms come out
/// in the mapping's iteration order, and slot counts are untouched.
pub fn normalize(raw: Vec<RawBuilding>) -> Vec<Building> {
    raw.into_iter()
        .map(|b| Building {
            building: b.building,
            building_code: b.building_code,
            building_status: b.building_status,
            coords: b.coords,
            distance: b.distance,
            rooms: b
                .rooms
                .into_iter()
                .map(|(room_number, room)| Room {
                    room_number,
                    slots: room
                        .slots
                        .into_iter()
                        .map(|s| Slot {
                            start_time: s.start_time,
                            end_time: s.end_time,
                            status: s.status.to_lowercase(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}
