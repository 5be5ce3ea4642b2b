use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use std::collections::{BTreeMap, BTreeSet};

/// Region name accepted for every model regardless of its mapping.
pub const WORLD_REGION: &str = "World";

/// Region definitions of a single model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionMapping {
    pub model: String,
    pub native_regions: BTreeMap<String, YamlValue>,
    pub region_aggregation: BTreeMap<String, YamlValue>,
}

impl RegionMapping {
    /// Native and aggregate region names plus "World".
    pub fn valid_region_names(&self) -> BTreeSet<&str> {
        self.native_regions
            .keys()
            .chain(self.region_aggregation.keys())
            .map(String::as_str)
            .chain(std::iter::once(WORLD_REGION))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_is_always_valid() {
        let mapping: RegionMapping = serde_yaml::from_str(
            r#"
model: model
native_regions: {}
region_aggregation: {}
"#,
        )
        .unwrap();

        assert_eq!(
            mapping.valid_region_names().into_iter().collect::<Vec<_>>(),
            vec!["World"]
        );
    }

    #[test]
    fn combines_native_and_aggregated_regions() {
        let mapping: RegionMapping = serde_yaml::from_str(
            r#"
model: model
native_regions:
  Austria: AUT
  Germany: DEU
region_aggregation:
  Europe: [Austria, Germany]
"#,
        )
        .unwrap();

        let names = mapping.valid_region_names();
        for name in ["Austria", "Germany", "Europe", "World"] {
            assert!(names.contains(name), "{name} should be valid");
        }
        assert_eq!(names.len(), 4);
    }
}
