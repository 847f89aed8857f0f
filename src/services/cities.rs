//! Static catalog of supported Indian cities.
//!
//! Two independent tables: coordinates for weather lookup and tilt-optimum
//! computation, and a per-city base efficiency used by the simple estimation
//! strategy (a stand-in for long-term local weather patterns).

/// Fallback base efficiency (percent) for cities absent from the table.
pub const DEFAULT_BASE_EFFICIENCY: f64 = 75.0;

/// Fallback latitude when a city has no coordinates but a tilt optimum is
/// still needed.
pub const DEFAULT_LATITUDE: f64 = 20.0;

const CITY_COORDINATES: &[(&str, f64, f64)] = &[
    ("Mumbai", 19.0760, 72.8777),
    ("Delhi", 28.7041, 77.1025),
    ("Bangalore", 12.9716, 77.5946),
    ("Chennai", 13.0827, 80.2707),
    ("Kolkata", 22.5726, 88.3639),
    ("Hyderabad", 17.3850, 78.4867),
    ("Pune", 18.5204, 73.8567),
    ("Ahmedabad", 23.0225, 72.5714),
    ("Surat", 21.1702, 72.8311),
    ("Jaipur", 26.9124, 75.7873),
    ("Lucknow", 26.8467, 80.9462),
    ("Kanpur", 26.4499, 80.3319),
    ("Nagpur", 21.1458, 79.0882),
    ("Indore", 22.7196, 75.8577),
    ("Thane", 19.2183, 72.9781),
    ("Bhopal", 23.2599, 77.4126),
    ("Visakhapatnam", 17.6868, 83.2185),
    ("Patna", 25.5941, 85.1376),
    ("Vadodara", 22.3072, 73.1812),
    ("Ghaziabad", 28.6692, 77.4538),
    ("Ludhiana", 30.9010, 75.8573),
    ("Agra", 27.1767, 78.0081),
    ("Nashik", 19.9975, 73.7898),
    ("Faridabad", 28.4089, 77.3178),
    ("Meerut", 28.9845, 77.7064),
    ("Rajkot", 22.3039, 70.8022),
    ("Kalyan-Dombivli", 19.2403, 73.1305),
    ("Vasai-Virar", 19.4912, 72.8054),
    ("Varanasi", 25.3176, 82.9739),
    ("Srinagar", 34.0837, 74.7973),
    ("Aurangabad", 19.8762, 75.3433),
    ("Dhanbad", 23.7957, 86.4304),
    ("Amritsar", 31.6340, 74.8723),
    ("Navi Mumbai", 19.0330, 73.0297),
    ("Allahabad", 25.4358, 81.8463),
    ("Howrah", 22.5958, 88.2636),
    ("Ranchi", 23.3441, 85.3096),
    ("Gwalior", 26.2183, 78.1828),
    ("Jabalpur", 23.1815, 79.9864),
    ("Coimbatore", 11.0168, 76.9558),
];

const CITY_BASE_EFFICIENCY: &[(&str, f64)] = &[
    ("Mumbai", 75.0),
    ("Delhi", 72.0),
    ("Bangalore", 82.0),
    ("Chennai", 78.0),
    ("Kolkata", 70.0),
    ("Hyderabad", 80.0),
    ("Pune", 85.0),
    ("Ahmedabad", 88.0),
    ("Jaipur", 90.0),
    ("Lucknow", 68.0),
    ("Kanpur", 70.0),
    ("Nagpur", 83.0),
    ("Indore", 86.0),
    ("Thane", 76.0),
    ("Bhopal", 81.0),
    ("Visakhapatnam", 79.0),
    ("Pimpri", 84.0),
    ("Patna", 69.0),
    ("Vadodara", 87.0),
    ("Ghaziabad", 71.0),
];

/// Latitude/longitude for a known city.
pub fn coordinates(city: &str) -> Option<(f64, f64)> {
    CITY_COORDINATES
        .iter()
        .find(|(name, _, _)| *name == city)
        .map(|(_, lat, lon)| (*lat, *lon))
}

/// City base efficiency (percent) for the simple strategy.
pub fn base_efficiency(city: &str) -> Option<f64> {
    CITY_BASE_EFFICIENCY
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, eff)| *eff)
}

/// All city names with coordinates, in catalog order.
pub fn city_names() -> Vec<&'static str> {
    CITY_COORDINATES.iter().map(|(name, _, _)| *name).collect()
}
