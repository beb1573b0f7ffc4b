use crate::domain::model::{GroupScope, LocationGroup, PgListing};
use crate::domain::ports::FixtureRepository;
use crate::utils::error::{HomieError, Result};
use std::str::FromStr;

/// Monthly rent range in INR, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl BudgetRange {
    pub fn contains(&self, rent: u32) -> bool {
        rent >= self.min && self.max.map_or(true, |max| rent <= max)
    }
}

impl FromStr for BudgetRange {
    type Err = HomieError;

    /// 解析 "10-15k"、"25k+" 這類選項
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| HomieError::InvalidConfigValueError {
            field: "budget".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };
        let thousands = |part: &str| {
            part.trim()
                .parse::<u32>()
                .ok()
                .and_then(|k| k.checked_mul(1000))
                .ok_or_else(|| invalid("Expected amounts in thousands, e.g. 10-15k or 25k+"))
        };

        let option = s.trim().to_lowercase();
        if let Some(open) = option.strip_suffix("k+") {
            return Ok(Self {
                min: thousands(open)?,
                max: None,
            });
        }

        let body = option
            .strip_suffix('k')
            .ok_or_else(|| invalid("Budget must end with 'k' or 'k+'"))?;
        let (low, high) = body
            .split_once('-')
            .ok_or_else(|| invalid("Expected a range like 10-15k"))?;
        let (min, max) = (thousands(low)?, thousands(high)?);
        if min > max {
            return Err(invalid("Lower bound exceeds upper bound"));
        }
        Ok(Self {
            min,
            max: Some(max),
        })
    }
}

fn sharing_count(room_type: &str) -> Option<u32> {
    room_type
        .trim()
        .split(['-', ' '])
        .next()
        .and_then(|n| n.parse().ok())
}

#[derive(Debug, Clone, Default)]
pub struct PgFilter {
    pub query: Option<String>,
    pub locality: Option<String>,
    pub budget: Option<BudgetRange>,
    /// Beds per room, e.g. 2 for "2 sharing".
    pub sharing: Option<u32>,
}

impl PgFilter {
    pub fn with_room_type(mut self, room_type: &str) -> Result<Self> {
        self.sharing = Some(sharing_count(room_type).ok_or_else(|| {
            HomieError::InvalidConfigValueError {
                field: "room_type".to_string(),
                value: room_type.to_string(),
                reason: "Expected e.g. '2-sharing' or '2 sharing'".to_string(),
            }
        })?);
        Ok(self)
    }

    pub fn matches(&self, pg: &PgListing) -> bool {
        let contains = |haystack: &str, needle: &str| {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        };

        if let Some(query) = self.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let hit = contains(&pg.name, query)
                || contains(&pg.locality, query)
                || contains(&pg.description, query);
            if !hit {
                return false;
            }
        }

        if let Some(locality) = self.locality.as_deref().filter(|l| !l.trim().is_empty()) {
            if !contains(&pg.locality, locality) {
                return false;
            }
        }

        if let Some(budget) = &self.budget {
            if !budget.contains(pg.rent) {
                return false;
            }
        }

        if let Some(sharing) = self.sharing {
            if sharing_count(&pg.room_type) != Some(sharing) {
                return false;
            }
        }

        true
    }
}

pub fn search_pgs<'r, R: FixtureRepository + ?Sized>(
    repo: &'r R,
    filter: &PgFilter,
) -> Vec<&'r PgListing> {
    let results: Vec<&PgListing> = repo
        .pg_listings()
        .iter()
        .filter(|pg| filter.matches(pg))
        .collect();
    tracing::debug!(
        "PG search matched {} of {} listings",
        results.len(),
        repo.pg_listings().len()
    );
    results
}

pub fn filter_groups<'r, R: FixtureRepository + ?Sized>(
    repo: &'r R,
    scope: GroupScope,
    query: &str,
) -> Vec<&'r LocationGroup> {
    let query = query.to_lowercase();
    repo.location_groups()
        .iter()
        .filter(|group| {
            group.scope == scope
                && (group.name.to_lowercase().contains(&query)
                    || group.location.to_lowercase().contains(&query))
        })
        .collect()
}
