//! Finds the city closest to a given point and prints distances and bearings to all of them.
//!
//! Run with `RUST_LOG=trace` to see which geodesics are computed exactly.

use geoshapes::{inverse, nearest, overlaps_any};

const CITIES: [(&str, [f64; 2]); 5] = [
    ("Nashville", [36.12, -86.67]),
    ("Los Angeles", [33.94, -118.4]),
    ("Baghdad", [33.31, 44.37]),
    ("Osaka", [34.69, 135.5]),
    ("Reykjavik", [64.15, -21.94]),
];

fn main() -> geoshapes::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let from = [35.0, -90.0];
    for (name, city) in CITIES {
        let result = inverse(from[0], from[1], city[0], city[1])?;
        log::info!(
            "{name}: {:.1} km, bearing {:.1}°",
            result.distance / 1000.0,
            result.azimuth
        );
    }

    if let Some((index, distance)) = nearest(&from, CITIES.iter().map(|(_, city)| city))? {
        log::info!(
            "Nearest city is {} at {:.1} km",
            CITIES[index].0,
            distance / 1000.0
        );
    }

    let tennessee = [35.0, -90.3, 36.7, -81.6];
    let cities_in_tennessee = overlaps_any(&tennessee, CITIES.iter().map(|(_, city)| city))?;
    log::info!("Any city inside Tennessee bounds: {cities_in_tennessee}");

    Ok(())
}
