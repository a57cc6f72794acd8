//! Bookable rooms.
//!
//! The room list is fixed at compile time. The `name` field is the key the
//! booking service stores, so it must match the service data byte for byte.

use serde::Serialize;

/// A room that can be reserved in half-hour slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Room {
    /// Stable identifier used in configuration (e.g. `default_room = "salsa"`)
    pub id: &'static str,
    /// Display name, also the `room_name` sent to the booking service
    pub name: &'static str,
    /// Price of a single slot in roubles
    pub price: u32,
    /// Hex accent color (e.g., "#F97316")
    pub accent: &'static str,
}

pub const ROOMS: [Room; 3] = [
    Room {
        id: "orange",
        name: "Оранжевое настроение",
        price: 400,
        accent: "#F97316",
    },
    Room {
        id: "salsa",
        name: "Salsa",
        price: 500,
        accent: "#E11D48",
    },
    Room {
        id: "airlight",
        name: "Air&Light",
        price: 800,
        accent: "#0EA5E9",
    },
];

impl Room {
    /// Look up a room by its configuration id.
    pub fn by_id(id: &str) -> Option<&'static Room> {
        ROOMS.iter().find(|room| room.id == id)
    }

    /// The first room in the list, selected when nothing else is configured.
    pub fn default_room() -> &'static Room {
        &ROOMS[0]
    }

    /// Label shown on the room picker, e.g. `400₽/hour`.
    pub fn price_label(&self) -> String {
        format!("{}₽/hour", self.price)
    }
}
