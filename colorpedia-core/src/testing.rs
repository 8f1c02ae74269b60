//! Shared fixtures for unit tests.

use crate::record::ColorRecord;

/// A record with the given identity and empty-but-present descriptive
/// fields, mirroring the loosest shape the snapshot allows.
pub(crate) fn record(name: &str, hex: &str, r: u8, g: u8, b: u8) -> ColorRecord {
    ColorRecord {
        name: name.to_string(),
        hex: hex.to_string(),
        r,
        g,
        b,
        category: String::new(),
        personality: String::new(),
        emotion: String::new(),
        mood: String::new(),
        symbolism: String::new(),
        description: String::new(),
        use_case: String::new(),
        keywords: String::new(),
    }
}

/// A small snapshot with distinct, well-separated colors. Crimson first:
/// several tests rely on its position for tie-break assertions.
pub(crate) fn sample_records() -> Vec<ColorRecord> {
    let mut crimson = record("Crimson", "#DC143C", 220, 20, 60);
    crimson.category = "Red".to_string();
    crimson.personality = "Bold, passionate".to_string();
    crimson.emotion = "Passion".to_string();
    crimson.mood = "Intense".to_string();
    crimson.symbolism = "Power and desire".to_string();
    crimson.description = "A strong, deep red with a hint of blue.".to_string();
    crimson.use_case = "Branding, fashion".to_string();
    crimson.keywords = "red, passion, bold".to_string();

    vec![
        crimson,
        record("Midnight Blue", "#191970", 25, 25, 112),
        record("Forest Green", "#228B22", 34, 139, 34),
        record("Goldenrod", "#DAA520", 218, 165, 32),
        record("Snow", "#FFFAFA", 255, 250, 250),
    ]
}
