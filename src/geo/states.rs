// src/geo/states.rs
//
// Static reference table: selectable states and their centroids.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateInfo {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl StateInfo {
    const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }
}

pub static STATES: [StateInfo; 52] = [
    StateInfo::new("Alabama",           32.806671,    -86.79113),
    StateInfo::new("Alaska",            61.370716,  -152.404419),
    StateInfo::new("Arizona",           33.729759,  -111.431221),
    StateInfo::new("Arkansas",          34.969704,   -92.373123),
    StateInfo::new("California",        36.116203,  -119.681564),
    StateInfo::new("Colorado",          39.059811,  -105.311104),
    StateInfo::new("Connecticut",       41.597782,   -72.755371),
    StateInfo::new("Delaware",          39.318523,   -75.507141),
    StateInfo::new("Florida",           27.766279,   -81.686783),
    StateInfo::new("Georgia",           33.040619,   -83.643074),
    StateInfo::new("Hawaii",            21.094318,  -157.498337),
    StateInfo::new("Idaho",             44.240459,  -114.478828),
    StateInfo::new("Illinois",          40.349457,   -88.986137),
    StateInfo::new("Indiana",           39.849426,   -86.258278),
    StateInfo::new("Iowa",              42.011539,   -93.210526),
    StateInfo::new("Kansas",              38.5266,   -96.726486),
    StateInfo::new("Kentucky",           37.66814,   -84.670067),
    StateInfo::new("Louisiana",         31.169546,   -91.867805),
    StateInfo::new("Maine",             44.693947,   -69.381927),
    StateInfo::new("Maryland",          39.063946,   -76.802101),
    StateInfo::new("Massachusetts",     42.230171,   -71.530106),
    StateInfo::new("Michigan",          43.326618,   -84.536095),
    StateInfo::new("Minnesota",         45.694454,   -93.900192),
    StateInfo::new("Mississippi",       32.741646,   -89.678696),
    StateInfo::new("Missouri",          38.456085,   -92.288368),
    StateInfo::new("Montana",           46.921925,  -110.454353),
    StateInfo::new("Nebraska",           41.12537,   -98.268082),
    StateInfo::new("Nevada",            38.313515,  -117.055374),
    StateInfo::new("New Hampshire",     43.452492,   -71.563896),
    StateInfo::new("New Jersey",        40.298904,   -74.521011),
    StateInfo::new("New Mexico",        34.840515,  -106.248482),
    StateInfo::new("New York",          42.165726,   -74.948051),
    StateInfo::new("North Carolina",    35.630066,   -79.806419),
    StateInfo::new("North Dakota",      47.528912,   -99.784012),
    StateInfo::new("Ohio",              40.388783,   -82.764915),
    StateInfo::new("Oklahoma",          35.565342,   -96.928917),
    StateInfo::new("Oregon",            44.572021,  -122.070938),
    StateInfo::new("Pennsylvania",      40.590752,   -77.209755),
    StateInfo::new("Rhode Island",      41.680893,    -71.51178),
    StateInfo::new("South Carolina",    33.856892,   -80.945007),
    StateInfo::new("South Dakota",      44.299782,   -99.438828),
    StateInfo::new("Tennessee",         35.747845,   -86.692345),
    StateInfo::new("Texas",             31.054487,   -97.563461),
    StateInfo::new("Utah",              40.150032,  -111.862434),
    StateInfo::new("Vermont",           44.045876,   -72.710686),
    StateInfo::new("Virginia",          37.769337,   -78.169968),
    StateInfo::new("Washington",        47.400902,  -121.490494),
    StateInfo::new("West Virginia",     38.491226,   -80.954456),
    StateInfo::new("Wisconsin",         44.268543,   -89.616508),
    StateInfo::new("Wyoming",           42.755966,   -107.30249),
    StateInfo::new("Washington D.C.",     38.9072,     -77.0369),
    StateInfo::new("Puerto Rico",         18.2208,     -66.5901),
];

/// Exact, case-sensitive name lookup.
pub fn find(name: &str) -> Option<&'static StateInfo> {
    STATES.iter().find(|s| s.name == name)
}

/// Case-insensitive lookup for typed input (CLI).
pub fn find_ci(name: &str) -> Option<&'static StateInfo> {
    let name = name.trim();
    STATES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    STATES.iter().map(|s| s.name)
}
