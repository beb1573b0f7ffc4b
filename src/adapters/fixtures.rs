use crate::domain::model::{GroupScope, LocationGroup, PgListing};
use crate::domain::ports::FixtureRepository;
use crate::utils::error::{HomieError, Result};
use serde::Deserialize;
use std::path::Path;

/// Read-only seed data. Nothing is written back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeededFixtures {
    #[serde(default, rename = "pg")]
    pg_listings: Vec<PgListing>,
    #[serde(default, rename = "group")]
    location_groups: Vec<LocationGroup>,
}

impl SeededFixtures {
    pub fn new(pg_listings: Vec<PgListing>, location_groups: Vec<LocationGroup>) -> Self {
        Self {
            pg_listings,
            location_groups,
        }
    }

    /// 從 TOML 檔案載入 `[[pg]]` 與 `[[group]]`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let fixtures = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded {} PG listings and {} location groups from {}",
            fixtures.pg_listings.len(),
            fixtures.location_groups.len(),
            path.as_ref().display()
        );
        Ok(fixtures)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HomieError::TomlParseError {
            message: format!("fixtures: {}", e),
        })
    }

    pub fn builtin() -> Self {
        let pg = |id, name: &str, rating, ai_rating, locality: &str, rent, room_type: &str| {
            PgListing {
                id,
                name: name.to_string(),
                rating,
                ai_rating,
                locality: locality.to_string(),
                rent,
                room_type: room_type.to_string(),
                amenities: Vec::new(),
                reviews: 0,
                description: String::new(),
                locality_info: String::new(),
            }
        };
        let strings =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| (*s).to_string()).collect() };

        let pg_listings = vec![
            PgListing {
                amenities: strings(&["Wi-Fi", "AC", "Laundry", "Cooking", "Parking"]),
                reviews: 45,
                description: "Modern PG with excellent facilities and great locality connectivity"
                    .to_string(),
                locality_info: "Tech hub area with easy metro access and safe environment"
                    .to_string(),
                ..pg(1, "Sunshine Girls PG", 4.8, 9.2, "Koramangala", 18_000, "2 sharing")
            },
            PgListing {
                amenities: strings(&["Wi-Fi", "Meals", "Laundry", "Security"]),
                reviews: 32,
                description: "Homely atmosphere with nutritious meals and caring staff".to_string(),
                locality_info: "Peaceful residential area with good shopping and dining options"
                    .to_string(),
                ..pg(2, "Cozy Corner PG", 4.6, 8.7, "HSR Layout", 15_000, "3 sharing")
            },
            PgListing {
                amenities: strings(&["Wi-Fi", "AC", "Gym", "Laundry", "Cooking", "Swimming Pool"]),
                reviews: 67,
                description: "Premium accommodation with luxury amenities and prime location"
                    .to_string(),
                locality_info: "Vibrant area with pubs, restaurants, and shopping centers nearby"
                    .to_string(),
                ..pg(3, "Elite Ladies Hostel", 4.9, 9.5, "Indiranagar", 22_000, "1 sharing")
            },
        ];

        #[allow(clippy::too_many_arguments)]
        fn group(
            id: u32,
            name: &str,
            scope: GroupScope,
            location: &str,
            parent: Option<&str>,
            members: u32,
            description: &str,
            is_joined: bool,
        ) -> LocationGroup {
            LocationGroup {
                id,
                name: name.to_string(),
                scope,
                location: location.to_string(),
                parent_location: parent.map(str::to_string),
                members,
                description: description.to_string(),
                is_joined,
            }
        }

        let location_groups = vec![
            group(
                1,
                "Bangalore Girls Community",
                GroupScope::City,
                "Bangalore",
                Some("Karnataka, India"),
                1250,
                "Connect with girls living in Bangalore for PG, roommates, and city life",
                true,
            ),
            group(
                2,
                "Mumbai Living Network",
                GroupScope::City,
                "Mumbai",
                Some("Maharashtra, India"),
                890,
                "Mumbai-based girls helping each other with accommodation and city tips",
                false,
            ),
            group(
                3,
                "Karnataka State Group",
                GroupScope::State,
                "Karnataka",
                Some("India"),
                2100,
                "Girls from all over Karnataka sharing resources and experiences",
                false,
            ),
            group(
                4,
                "Delhi NCR Collective",
                GroupScope::City,
                "Delhi NCR",
                Some("Delhi, India"),
                1560,
                "Delhi, Gurgaon, Noida - all NCR girls united for support and friendship",
                false,
            ),
            group(
                5,
                "India Girls Network",
                GroupScope::Country,
                "India",
                None,
                15000,
                "National community for girls across all states and cities in India",
                true,
            ),
            group(
                6,
                "Hyderabad Tech Girls",
                GroupScope::City,
                "Hyderabad",
                Some("Telangana, India"),
                680,
                "Tech industry girls in Hyderabad sharing career and living tips",
                false,
            ),
        ];

        Self::new(pg_listings, location_groups)
    }
}

impl FixtureRepository for SeededFixtures {
    fn pg_listings(&self) -> &[PgListing] {
        &self.pg_listings
    }

    fn location_groups(&self) -> &[LocationGroup] {
        &self.location_groups
    }
}
