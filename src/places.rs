//! Fixed geographic reference points
//!
//! Alternate map centers for the dashboard: static configuration, not
//! derived data. Coordinates are WGS84 degrees; `zoom` is a web-mercator
//! zoom level that the map panel converts into a canvas degree span.

/// A named map center with its preferred zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub zoom: u8,
}

/// Zoom used for the whole-city overview map.
pub const CITY_ZOOM: u8 = 11;

pub const RAJA_BHOJ_AIRPORT: Place = Place {
    name: "Raja Bhoj Intl Airport",
    lat: 23.290_374,
    lon: 77.333_208,
    zoom: 12,
};

pub const BHOPAL_JUNCTION: Place = Place {
    name: "Bhopal Junction Rly Stn",
    lat: 23.267_76,
    lon: 77.414_001,
    zoom: 12,
};

pub const KAMLAPATI_STATION: Place = Place {
    name: "Kamlapati Rly Stn",
    lat: 23.223_127_417_1,
    lon: 77.439_783_206_6,
    zoom: 12,
};

/// Reference places shown alongside the city overview, in display order.
pub const REFERENCE_PLACES: [Place; 3] = [RAJA_BHOJ_AIRPORT, BHOPAL_JUNCTION, KAMLAPATI_STATION];
