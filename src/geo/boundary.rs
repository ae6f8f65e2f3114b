// src/geo/boundary.rs
//
// State boundary polygons from a GeoJSON FeatureCollection keyed by `properties.NAME`.
// Only Polygon and MultiPolygon geometries are used; anything else is skipped.

use std::{ collections::HashMap, error::Error, fs, path::Path };

use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    properties: Option<Properties>,
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize)]
struct Properties {
    #[serde(rename = "NAME")]
    name: Option<String>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

type Ring = Vec<Vec<f64>>;

/// One state's outline as closed rings of (lon, lat).
#[derive(Clone, Debug, PartialEq)]
pub struct Boundary {
    pub name: String,
    pub rings: Vec<Vec<[f64; 2]>>,
}

impl Boundary {
    /// (min_lon, min_lat, max_lon, max_lat); None for an empty outline.
    pub fn bbox(&self) -> Option<[f64; 4]> {
        let mut pts = self.rings.iter().flatten();
        let first = pts.next()?;
        let init = [first[0], first[1], first[0], first[1]];
        Some(pts.fold(init, |b, p| [b[0].min(p[0]), b[1].min(p[1]), b[2].max(p[0]), b[3].max(p[1])]))
    }

    pub fn point_count(&self) -> usize {
        self.rings.iter().map(|r| r.len()).sum()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Boundaries {
    by_name: HashMap<String, Boundary>,
}

impl Boundaries {
    /// Exact name match, as the dataset and centroid table spell it.
    pub fn get(&self, name: &str) -> Option<&Boundary> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize { self.by_name.len() }
    pub fn is_empty(&self) -> bool { self.by_name.is_empty() }
}

fn to_ring(raw: Ring) -> Vec<[f64; 2]> {
    raw.into_iter()
        .filter(|p| p.len() >= 2 && p[0].is_finite() && p[1].is_finite())
        .map(|p| [p[0], p[1]])
        .collect()
}

fn rings_of(geom: RawGeometry) -> Result<Vec<Vec<[f64; 2]>>, serde_json::Error> {
    let rings = match geom.kind.as_str() {
        "Polygon" => {
            let poly: Vec<Ring> = serde_json::from_value(geom.coordinates)?;
            poly.into_iter().map(to_ring).collect()
        }
        "MultiPolygon" => {
            let multi: Vec<Vec<Ring>> = serde_json::from_value(geom.coordinates)?;
            multi.into_iter().flatten().map(to_ring).collect()
        }
        _ => Vec::new(),
    };
    Ok(rings)
}

pub fn parse_boundaries(text: &str) -> Result<Boundaries, Box<dyn Error>> {
    let fc: FeatureCollection = serde_json::from_str(text)?;
    let mut by_name: HashMap<String, Boundary> = HashMap::new();

    for f in fc.features {
        let Some(name) = f.properties.and_then(|p| p.name) else { continue };
        let Some(geom) = f.geometry else { continue };
        let kind = geom.kind.clone();
        let rings = match rings_of(geom) {
            Ok(r) => r,
            Err(e) => {
                loge!("Geo: Bad {} coordinates for {}: {}", kind, name, e);
                continue;
            }
        };
        if rings.iter().all(|r| r.is_empty()) {
            logd!("Geo: {} has no usable {} rings, skipping", name, kind);
            continue;
        }
        // First feature with a given name wins.
        by_name.entry(name.clone()).or_insert(Boundary { name, rings });
    }

    Ok(Boundaries { by_name })
}

/// The census file is not guaranteed UTF-8; decode lossily.
pub fn load_boundaries(path: &Path) -> Result<Boundaries, Box<dyn Error>> {
    let bytes = fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let b = parse_boundaries(&String::from_utf8_lossy(&bytes))?;
    logf!("Geo: Loaded {} boundaries from {}", b.len(), path.display());
    Ok(b)
}
