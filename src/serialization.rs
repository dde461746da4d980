use super::ParsedName;
use serde::ser::{Serialize, SerializeMap, Serializer};

impl Serialize for ParsedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let pairs = self.to_pairs();
        let mut map = serializer.serialize_map(Some(pairs.len()))?;
        for (key, value) in pairs.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl ParsedName {
    /// Serializes to a JSON object keyed by camelCase field names.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
