// src/geo/mod.rs
//
// Reference geography: centroid table + boundary outlines, and the flat
// projection the map panel draws with. The map path is independent of the
// table path; a miss here only means "no map".

pub mod boundary;
pub mod states;

pub use boundary::{ Boundaries, Boundary, load_boundaries };
pub use states::{ StateInfo, STATES };

/// Everything the map needs for one state.
#[derive(Clone, Debug)]
pub struct StateMap<'a> {
    pub state: &'static StateInfo,
    pub boundary: Option<&'a Boundary>,
}

/// None when the state is not in the centroid table; the boundary is optional.
pub fn map_for<'a>(name: &str, boundaries: Option<&'a Boundaries>) -> Option<StateMap<'a>> {
    let state = states::find(name)?;
    let boundary = boundaries.and_then(|b| b.get(name));
    if boundary.is_none() {
        logd!("Geo: No boundary for {:?}, drawing centroid only", name);
    }
    Some(StateMap { state, boundary })
}

/// Equirectangular fit of a lon/lat box into a width × height canvas,
/// longitudes scaled by cos(mid latitude), aspect preserved, y pointing down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    lon0: f64,
    lat1: f64,
    kx: f64,
    scale: f64,
    off_x: f64,
    off_y: f64,
}

impl Projection {
    pub fn fit(bbox: [f64; 4], width: f64, height: f64, margin: f64) -> Self {
        let [min_lon, min_lat, max_lon, max_lat] = bbox;
        let kx = ((min_lat + max_lat) * 0.5).to_radians().cos().max(0.1);

        let span_x = ((max_lon - min_lon) * kx).max(1e-6);
        let span_y = (max_lat - min_lat).max(1e-6);
        let avail_w = (width - 2.0 * margin).max(1.0);
        let avail_h = (height - 2.0 * margin).max(1.0);
        let scale = (avail_w / span_x).min(avail_h / span_y);

        Self {
            lon0: min_lon,
            lat1: max_lat,
            kx,
            scale,
            off_x: margin + (avail_w - span_x * scale) * 0.5,
            off_y: margin + (avail_h - span_y * scale) * 0.5,
        }
    }

    /// Box around a single point (centroid-only maps).
    pub fn around(lon: f64, lat: f64, half_deg: f64, width: f64, height: f64) -> Self {
        Self::fit([lon - half_deg, lat - half_deg, lon + half_deg, lat + half_deg], width, height, 0.0)
    }

    pub fn apply(&self, lon: f64, lat: f64) -> (f64, f64) {
        (
            self.off_x + (lon - self.lon0) * self.kx * self.scale,
            self.off_y + (self.lat1 - lat) * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_for_unknown_state_is_none() {
        assert!(map_for("Atlantis", None).is_none());
        let m = map_for("Texas", None).unwrap();
        assert_eq!(m.state.name, "Texas");
        assert!(m.boundary.is_none());
    }

    #[test]
    fn projection_keeps_box_inside_canvas() {
        let bbox = [-109.05, 37.0, -102.05, 41.0];
        let p = Projection::fit(bbox, 400.0, 300.0, 10.0);
        for (lon, lat) in [(-109.05, 37.0), (-102.05, 41.0), (-105.5, 39.0)] {
            let (x, y) = p.apply(lon, lat);
            assert!((10.0 - 1e-9..=390.0 + 1e-9).contains(&x), "x={x}");
            assert!((10.0 - 1e-9..=290.0 + 1e-9).contains(&y), "y={y}");
        }
        // north is up
        assert!(p.apply(-105.0, 41.0).1 < p.apply(-105.0, 37.0).1);
    }

    #[test]
    fn projection_centres_single_point() {
        let p = Projection::around(-86.79, 32.8, 2.0, 200.0, 200.0);
        let (x, y) = p.apply(-86.79, 32.8);
        assert!((x - 100.0).abs() < 1e-6);
        assert!((y - 100.0).abs() < 1e-6);
    }
}
