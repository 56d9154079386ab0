// SPDX-License-Identifier: MIT OR Apache-2.0

//! Region -> Metro -> Local hierarchy table.
//!
//! The table is immutable once built. Lookups never fail: unknown region or
//! metro names simply contribute nothing, so stale names coming from legacy
//! data or from the command line degrade to empty results.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::errors::HierarchyError;

/// Metro name -> ordered local names.
pub type MetroTable = IndexMap<String, Vec<String>>;

/// Region name -> metros, in declaration order.
pub type RegionTable = IndexMap<String, MetroTable>;

/// Three-level geographic hierarchy with a reverse metro index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    regions: RegionTable,
    metro_region: HashMap<String, String>,
}

impl Hierarchy {
    /// Build a hierarchy from a region table.
    ///
    /// Metro names must be unique across the whole table; a metro listed under
    /// two regions is rejected because region auto-selection and pruning both
    /// rely on every metro having exactly one owner.
    pub fn from_table(regions: RegionTable) -> Result<Self, HierarchyError> {
        let mut metro_region: HashMap<String, String> = HashMap::new();
        for (region, metros) in &regions {
            for metro in metros.keys() {
                if let Some(first) = metro_region.get(metro) {
                    return Err(HierarchyError::DuplicateMetro {
                        metro: metro.clone(),
                        first: first.clone(),
                        second: region.clone(),
                    });
                }
                metro_region.insert(metro.clone(), region.clone());
            }
        }
        Ok(Self {
            regions,
            metro_region,
        })
    }

    /// Parse a hierarchy from TOML text (`[Region]` tables of `Metro = [..]`).
    pub fn from_toml_str(content: &str) -> Result<Self, HierarchyError> {
        let table: RegionTable = toml::from_str(content).map_err(HierarchyError::Toml)?;
        Self::from_table(table)
    }

    /// Parse a hierarchy from a JSON object of objects.
    pub fn from_json_str(content: &str) -> Result<Self, HierarchyError> {
        let table: RegionTable = serde_json::from_str(content).map_err(HierarchyError::Json)?;
        Self::from_table(table)
    }

    /// Load a hierarchy file, picking the parser from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, HierarchyError> {
        let content = std::fs::read_to_string(path).map_err(|source| HierarchyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let hierarchy = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => {
                return Err(HierarchyError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };
        tracing::debug!(
            path = %path.display(),
            regions = hierarchy.regions.len(),
            metros = hierarchy.metro_region.len(),
            "loaded hierarchy file"
        );
        Ok(hierarchy)
    }

    /// The built-in Michigan table.
    pub fn michigan() -> &'static Hierarchy {
        &MICHIGAN_HIERARCHY
    }

    /// Region names in declaration order.
    pub fn regions(&self) -> Vec<String> {
        self.regions.keys().cloned().collect()
    }

    pub fn contains_region(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    pub fn contains_metro(&self, metro: &str) -> bool {
        self.metro_region.contains_key(metro)
    }

    /// Sorted union of the metros owned by `regions`. Empty input gives empty output.
    pub fn metros_for_regions<I, S>(&self, regions: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut metros: BTreeSet<&str> = BTreeSet::new();
        for region in regions {
            if let Some(table) = self.regions.get(region.as_ref()) {
                metros.extend(table.keys().map(String::as_str));
            }
        }
        metros.into_iter().map(str::to_string).collect()
    }

    /// Sorted, deduplicated union of the locals listed under `metros`.
    pub fn locals_for_metros<I, S>(&self, metros: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut locals: BTreeSet<&str> = BTreeSet::new();
        for metro in metros {
            locals.extend(self.locals_of_metro(metro.as_ref()).iter().map(String::as_str));
        }
        locals.into_iter().map(str::to_string).collect()
    }

    /// Every local in the table, sorted and deduplicated.
    pub fn all_locals(&self) -> Vec<String> {
        let locals: BTreeSet<&str> = self
            .regions
            .values()
            .flat_map(|metros| metros.values())
            .flatten()
            .map(String::as_str)
            .collect();
        locals.into_iter().map(str::to_string).collect()
    }

    /// Reverse lookup of the region owning `metro`.
    pub fn region_of_metro(&self, metro: &str) -> Option<&str> {
        self.metro_region.get(metro).map(String::as_str)
    }

    /// Locals listed under one metro, in declaration order.
    pub fn locals_of_metro(&self, metro: &str) -> &[String] {
        self.region_of_metro(metro)
            .and_then(|region| self.regions.get(region))
            .and_then(|metros| metros.get(metro))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn from_static(table: &[(&str, &[(&str, &[&str])])]) -> Self {
        let mut regions = RegionTable::new();
        let mut metro_region = HashMap::new();
        for (region, metros) in table {
            let mut metro_table = MetroTable::new();
            for (metro, locals) in metros.iter() {
                metro_table.insert(
                    metro.to_string(),
                    locals.iter().map(|l| l.to_string()).collect(),
                );
                metro_region
                    .entry(metro.to_string())
                    .or_insert_with(|| region.to_string());
            }
            regions.insert(region.to_string(), metro_table);
        }
        Self {
            regions,
            metro_region,
        }
    }
}

static MICHIGAN_HIERARCHY: Lazy<Hierarchy> = Lazy::new(|| Hierarchy::from_static(MICHIGAN));

const MICHIGAN: &[(&str, &[(&str, &[&str])])] = &[
    (
        "Southeast Michigan",
        &[
            (
                "Detroit Metro",
                &[
                    "Detroit",
                    "Dearborn",
                    "Dearborn Heights",
                    "Livonia",
                    "Westland",
                    "Taylor",
                    "Southgate",
                    "Allen Park",
                    "Lincoln Park",
                    "Wyandotte",
                    "Wayne County",
                    "Detroit River",
                    "Rouge River",
                ],
            ),
            (
                "Ann Arbor Area",
                &[
                    "Ann Arbor",
                    "Ypsilanti",
                    "Saline",
                    "Chelsea",
                    "Dexter",
                    "Washtenaw County",
                    "Huron River",
                ],
            ),
            (
                "Tri-County Area",
                &[
                    "Warren",
                    "Sterling Heights",
                    "Troy",
                    "Farmington Hills",
                    "Pontiac",
                    "Royal Oak",
                    "Southfield",
                    "Rochester",
                    "Auburn Hills",
                    "Novi",
                    "Oakland County",
                    "Macomb County",
                    "Clinton River",
                ],
            ),
            ("Monroe Area", &["Monroe", "Monroe County", "River Raisin"]),
        ],
    ),
    (
        "West Michigan",
        &[
            (
                "Grand Rapids Metro",
                &[
                    "Grand Rapids",
                    "Wyoming",
                    "Kentwood",
                    "Walker",
                    "Grandville",
                    "Kent County",
                    "Grand River",
                ],
            ),
            (
                "Kalamazoo Area",
                &[
                    "Kalamazoo",
                    "Portage",
                    "Battle Creek",
                    "Kalamazoo County",
                    "Calhoun County",
                    "Kalamazoo River",
                ],
            ),
            (
                "Muskegon Area",
                &[
                    "Muskegon",
                    "Muskegon Heights",
                    "Norton Shores",
                    "Muskegon County",
                ],
            ),
            (
                "Holland Area",
                &["Holland", "Zeeland", "Ottawa County", "Allegan County"],
            ),
        ],
    ),
    (
        "Central Michigan",
        &[
            (
                "Lansing-East Lansing Area",
                &[
                    "Lansing",
                    "East Lansing",
                    "Okemos",
                    "Holt",
                    "Mason",
                    "Ingham County",
                    "Eaton County",
                    "Clinton County",
                ],
            ),
            (
                "Flint Area",
                &[
                    "Flint",
                    "Burton",
                    "Flushing",
                    "Davison",
                    "Genesee County",
                    "Flint River",
                ],
            ),
            (
                "Tri-Cities",
                &[
                    "Saginaw",
                    "Bay City",
                    "Midland",
                    "Saginaw County",
                    "Bay County",
                    "Midland County",
                    "Saginaw River",
                ],
            ),
            ("Jackson Area", &["Jackson", "Jackson County"]),
        ],
    ),
    (
        "Upper Peninsula",
        &[
            (
                "Marquette Area",
                &["Marquette", "Negaunee", "Ishpeming", "Marquette County"],
            ),
            (
                "Sault Ste. Marie Area",
                &["Sault Ste. Marie", "Chippewa County"],
            ),
            ("Escanaba Area", &["Escanaba", "Gladstone", "Delta County"]),
            (
                "Houghton-Hancock Area",
                &[
                    "Houghton",
                    "Hancock",
                    "Calumet",
                    "Houghton County",
                    "Keweenaw County",
                ],
            ),
            (
                "Iron Mountain Area",
                &["Iron Mountain", "Kingsford", "Dickinson County"],
            ),
        ],
    ),
    (
        "Northwest Michigan",
        &[
            (
                "Traverse City Area",
                &[
                    "Traverse City",
                    "Grand Traverse County",
                    "Leelanau County",
                    "Benzie County",
                ],
            ),
            (
                "Petoskey-Harbor Springs Area",
                &[
                    "Petoskey",
                    "Harbor Springs",
                    "Charlevoix",
                    "Emmet County",
                    "Charlevoix County",
                ],
            ),
            ("Cadillac Area", &["Cadillac", "Wexford County"]),
        ],
    ),
    (
        "Northeast Michigan",
        &[
            ("Alpena Area", &["Alpena", "Alpena County", "Thunder Bay River"]),
            ("Gaylord Area", &["Gaylord", "Otsego County"]),
        ],
    ),
    (
        "Southwest Michigan",
        &[
            (
                "Benton Harbor-St. Joseph Area",
                &[
                    "Benton Harbor",
                    "St. Joseph",
                    "Berrien County",
                    "St. Joseph River",
                ],
            ),
            ("Niles Area", &["Niles", "Cass County"]),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Hierarchy {
        Hierarchy::from_toml_str(
            r#"
[North]
"Pine Metro" = ["Pine", "Shared Lake"]
"Cedar Metro" = ["Cedar"]

[South]
"Oak Metro" = ["Oak", "Shared Lake"]
"#,
        )
        .expect("parse toml")
    }

    #[test]
    fn regions_keep_declaration_order() {
        let regions = Hierarchy::michigan().regions();
        assert_eq!(regions.first().map(String::as_str), Some("Southeast Michigan"));
        assert_eq!(regions.last().map(String::as_str), Some("Southwest Michigan"));
        assert_eq!(regions.len(), 7);

        assert_eq!(tiny().regions(), vec!["North", "South"]);
    }

    #[test]
    fn empty_selections_yield_empty_lists() {
        let h = Hierarchy::michigan();
        assert!(h.metros_for_regions(Vec::<String>::new()).is_empty());
        assert!(h.locals_for_metros(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn metros_for_regions_is_sorted_union() {
        let h = tiny();
        assert_eq!(
            h.metros_for_regions(["South", "North"]),
            vec!["Cedar Metro", "Oak Metro", "Pine Metro"]
        );
    }

    #[test]
    fn locals_for_metros_deduplicates_shared_locals() {
        let h = tiny();
        assert_eq!(
            h.locals_for_metros(["Pine Metro", "Oak Metro"]),
            vec!["Oak", "Pine", "Shared Lake"]
        );
        assert_eq!(h.all_locals(), vec!["Cedar", "Oak", "Pine", "Shared Lake"]);
    }

    #[test]
    fn unknown_names_contribute_nothing() {
        let h = Hierarchy::michigan();
        assert!(h.metros_for_regions(["Atlantis"]).is_empty());
        assert_eq!(
            h.metros_for_regions(["Atlantis", "Northeast Michigan"]),
            vec!["Alpena Area", "Gaylord Area"]
        );
        assert!(h.locals_for_metros(["Nowhere Metro"]).is_empty());
        assert_eq!(h.region_of_metro("Nowhere Metro"), None);
        assert!(h.locals_of_metro("Nowhere Metro").is_empty());
    }

    #[test]
    fn region_of_metro_reverse_lookup() {
        let h = Hierarchy::michigan();
        assert_eq!(h.region_of_metro("Grand Rapids Metro"), Some("West Michigan"));
        assert_eq!(h.region_of_metro("Tri-Cities"), Some("Central Michigan"));
    }

    #[test]
    fn duplicate_metro_is_rejected() {
        let err = Hierarchy::from_json_str(
            r#"{"North": {"Twin Metro": ["A"]}, "South": {"Twin Metro": ["B"]}}"#,
        )
        .expect_err("duplicate metro");
        match err {
            HierarchyError::DuplicateMetro {
                metro,
                first,
                second,
            } => {
                assert_eq!(metro, "Twin Metro");
                assert_eq!(first, "North");
                assert_eq!(second, "South");
            }
            other => panic!("expected duplicate metro error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_picks_parser_by_extension() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let json = dir.path().join("geo.json");
        std::fs::write(&json, r#"{"Only": {"Solo Metro": ["Solo"]}}"#).expect("write json");
        let h = Hierarchy::from_path(&json).expect("load json");
        assert_eq!(h.all_locals(), vec!["Solo"]);

        let yaml = dir.path().join("geo.yaml");
        std::fs::write(&yaml, "Only: {}").expect("write yaml");
        assert!(matches!(
            Hierarchy::from_path(&yaml),
            Err(HierarchyError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn michigan_metros_are_globally_unique() {
        let h = Hierarchy::michigan();
        let rebuilt = Hierarchy::from_table(h.regions.clone()).expect("unique metros");
        assert_eq!(&rebuilt, h);
    }
}
