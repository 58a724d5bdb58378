use bevy::prelude::*;

/// Outward unit direction for a latitude/longitude pair, in the globe's
/// unrotated frame. Latitude 0 / longitude 0 points along +Z; +Y is north.
pub fn surface_normal(lat_deg: f32, lon_deg: f32) -> Vec3 {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    Vec3::new(lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos())
}

/// Point on a sphere of `radius` for a latitude/longitude pair.
pub fn surface_point(lat_deg: f32, lon_deg: f32, radius: f32) -> Vec3 {
    surface_normal(lat_deg, lon_deg) * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1.0e-4;

    #[test]
    fn every_point_sits_on_the_sphere() {
        let radius = 1.6;
        let mut lat = -90.0_f32;
        while lat <= 90.0 {
            let mut lon = -180.0_f32;
            while lon <= 180.0 {
                let p = surface_point(lat, lon, radius);
                assert!(
                    (p.length() - radius).abs() < TOLERANCE,
                    "({lat}, {lon}) mapped off-sphere: |{p:?}| = {}",
                    p.length()
                );
                lon += 7.5;
            }
            lat += 7.5;
        }
    }

    #[test]
    fn reference_point_is_plus_z() {
        let p = surface_point(0.0, 0.0, 2.0);
        assert!(p.distance(Vec3::new(0.0, 0.0, 2.0)) < TOLERANCE);
    }

    #[test]
    fn mapping_is_continuous() {
        // A small input step never moves the output further than the arc it
        // subtends (plus slack for float error).
        let radius = 1.0;
        let step = 0.01_f32;
        let max_arc = 2.0 * step.to_radians() * radius;
        for &(lat, lon) in &[
            (0.0_f32, 0.0_f32),
            (17.385, 78.4867),
            (64.1466, -21.9426),
            (-33.9249, 18.4241),
            (89.9, 179.9),
            (-89.9, -179.9),
        ] {
            let here = surface_point(lat, lon, radius);
            let there = surface_point(lat + step, lon + step, radius);
            assert!(
                here.distance(there) < max_arc + TOLERANCE,
                "discontinuity near ({lat}, {lon})"
            );
        }
    }

    #[test]
    fn poles_collapse_longitude() {
        for lon in [-180.0, -45.0, 0.0, 60.0, 180.0] {
            assert!(surface_point(90.0, lon, 1.0).distance(Vec3::Y) < TOLERANCE);
            assert!(surface_point(-90.0, lon, 1.0).distance(-Vec3::Y) < TOLERANCE);
        }
    }

    #[test]
    fn known_city_lands_in_its_hemisphere() {
        // Reykjavík: high northern latitude, west of Greenwich.
        let p = surface_normal(64.1466, -21.9426);
        assert!(p.y > 0.85);
        assert!(p.x < 0.0);
    }
}
