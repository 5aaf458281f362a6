use std::f64::consts::PI;

use crate::airports::{AirportTable, Coordinates};
use crate::errors::FeatureError;

/// Separators between airport codes in a `Route` value. The raw data uses an
/// arrow, which older exports turn into `?`.
const ROUTE_DELIMITERS: [char; 2] = ['→', '?'];

// WGS-84
const SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;
const FLATTENING: f64 = 1.0 / 298.257_223_563;
const EARTH_RADIUS_KM: f64 = 6371.0;

const VINCENTY_MAX_ITERATIONS: usize = 200;
const VINCENTY_TOLERANCE: f64 = 1e-12;

/// Splits a route such as `"DEL ? BOM ? COK"` into its ordered airport codes.
///
/// # Errors
/// `FeatureError::InvalidRoute` when fewer than two codes are found.
pub fn parse_route(raw: &str) -> Result<Vec<&str>, FeatureError> {
    let airports: Vec<&str> = raw
        .split(&ROUTE_DELIMITERS[..])
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .collect();

    if airports.len() < 2 {
        return Err(FeatureError::InvalidRoute(raw.to_string()));
    }
    Ok(airports)
}

/// Distance in kilometers flown along `route`.
///
/// Returns `Ok(None)` (undefined distance) when the route is missing or when
/// any of its airports is not in `airports`. Each leg is the geodesic distance
/// between consecutive stops and the legs are added up.
///
/// # Errors
/// `FeatureError::InvalidRoute` when the route has fewer than two codes.
pub fn route_distance(
    route: Option<&str>,
    airports: &AirportTable,
) -> Result<Option<f64>, FeatureError> {
    let Some(route) = route else {
        return Ok(None);
    };

    let codes = parse_route(route)?;
    let stops: Option<Vec<Coordinates>> = codes.iter().map(|code| airports.get(code)).collect();
    let Some(stops) = stops else {
        return Ok(None);
    };

    let total = stops
        .windows(2)
        .map(|leg| geodesic_distance(leg[0], leg[1]))
        .sum::<Option<f64>>();

    Ok(total.filter(|km| km.is_finite()))
}

/// Geodesic distance in kilometers on the WGS-84 ellipsoid (Vincenty's inverse
/// formula). Falls back to the great-circle distance for nearly antipodal
/// points, where the iteration does not converge.
///
/// Returns `None` when a coordinate is not finite.
pub fn geodesic_distance(from: Coordinates, to: Coordinates) -> Option<f64> {
    let values = [from.latitude, from.longitude, to.latitude, to.longitude];
    if values.iter().any(|v| !v.is_finite()) {
        return None;
    }

    Some(vincenty_km(from, to).unwrap_or_else(|| haversine_km(from, to)))
}

fn vincenty_km(from: Coordinates, to: Coordinates) -> Option<f64> {
    let a = SEMI_MAJOR_AXIS_M;
    let f = FLATTENING;
    let b = (1.0 - f) * a;

    let l = (to.longitude - from.longitude).to_radians();
    let u1 = ((1.0 - f) * from.latitude.to_radians().tan()).atan();
    let u2 = ((1.0 - f) * to.latitude.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut converged = false;
    let (mut sin_sigma, mut cos_sigma, mut sigma) = (0.0, 0.0, 0.0);
    let (mut cos_sq_alpha, mut cos_2sigma_m) = (0.0, 0.0);

    for _ in 0..VINCENTY_MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // Mismo punto
            return Some(0.0);
        }
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // Equatorial line: cos_sq_alpha = 0
        cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };

        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let previous = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

        if lambda.abs() > PI {
            return None;
        }
        if (lambda - previous).abs() < VINCENTY_TOLERANCE {
            converged = true;
            break;
        }
    }

    if !converged {
        return None;
    }

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma.powi(2))
                        * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));

    Some(b * big_a * (sigma - delta_sigma) / 1000.0)
}

fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let origin_lat_rad = from.latitude * PI / 180.0;
    let dest_lat_rad = to.latitude * PI / 180.0;
    let delta_lat = dest_lat_rad - origin_lat_rad;
    let delta_lon = (to.longitude - from.longitude) * PI / 180.0;

    let a = (delta_lat / 2.0).sin().powi(2)
        + origin_lat_rad.cos() * dest_lat_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
