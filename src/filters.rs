//! Translates the untyped query-string bag of `GET /hotels` into a typed
//! predicate, an optional ordering and a pagination window.
//!
//! Nothing here touches the store. [`HotelFilter`] only reads the parameters it
//! recognizes; unknown keys are ignored.

use std::collections::HashMap;

use thiserror::Error;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid value for '{param}': expected a number, got '{value}'")]
    InvalidNumber { param: &'static str, value: String },

    #[error("invalid pagination: '{param}' must be a positive integer, got '{value}'")]
    InvalidPagination { param: &'static str, value: String },
}

/// Hotel columns that can appear in a predicate or an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotelField {
    Name,
    Description,
    Address,
    District,
    City,
    State,
    Country,
    PlaceId,
    Stars,
    Latitude,
    Longitude,
    CategoryId,
    HotelChainId,
}

impl HotelField {
    /// Column name in the `hotels` table.
    pub fn column(self) -> &'static str {
        match self {
            HotelField::Name => "name",
            HotelField::Description => "description",
            HotelField::Address => "address",
            HotelField::District => "district",
            HotelField::City => "city",
            HotelField::State => "state",
            HotelField::Country => "country",
            HotelField::PlaceId => "place_id",
            HotelField::Stars => "stars",
            HotelField::Latitude => "latitude",
            HotelField::Longitude => "longitude",
            HotelField::CategoryId => "category_id",
            HotelField::HotelChainId => "hotel_chain_id",
        }
    }

    /// Column holding the Unicode-lowercased copy of a text field, used for
    /// substring matching. Numeric fields have none.
    pub fn folded_column(self) -> Option<&'static str> {
        match self {
            HotelField::Name => Some("name_folded"),
            HotelField::Description => Some("description_folded"),
            HotelField::Address => Some("address_folded"),
            HotelField::District => Some("district_folded"),
            HotelField::City => Some("city_folded"),
            HotelField::State => Some("state_folded"),
            HotelField::Country => Some("country_folded"),
            HotelField::PlaceId => Some("place_id_folded"),
            HotelField::Stars
            | HotelField::Latitude
            | HotelField::Longitude
            | HotelField::CategoryId
            | HotelField::HotelChainId => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchKind {
    Substring,
    Integer,
    Decimal,
}

/// Recognized filter parameters. The first non-empty alias of a row wins.
const FILTERABLE: &[(HotelField, MatchKind, &[&str])] = &[
    (HotelField::Name, MatchKind::Substring, &["name"]),
    (HotelField::Description, MatchKind::Substring, &["description"]),
    (HotelField::Address, MatchKind::Substring, &["address"]),
    (HotelField::District, MatchKind::Substring, &["district"]),
    (HotelField::City, MatchKind::Substring, &["city"]),
    (HotelField::State, MatchKind::Substring, &["state"]),
    (HotelField::Country, MatchKind::Substring, &["country"]),
    (HotelField::PlaceId, MatchKind::Substring, &["placeId", "placeid"]),
    (HotelField::Stars, MatchKind::Integer, &["stars"]),
    (HotelField::Latitude, MatchKind::Decimal, &["latitude"]),
    (HotelField::Longitude, MatchKind::Decimal, &["longitude"]),
    (
        HotelField::CategoryId,
        MatchKind::Integer,
        &["categoryId", "categoryid", "category"],
    ),
    (
        HotelField::HotelChainId,
        MatchKind::Integer,
        &["hotelChainId", "hotelchainid", "hotelChain"],
    ),
];

const SORTABLE: &[(&str, HotelField)] = &[
    ("name", HotelField::Name),
    ("stars", HotelField::Stars),
    ("city", HotelField::City),
    ("categoryId", HotelField::CategoryId),
    ("categoryid", HotelField::CategoryId),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterValue {
    Integer(i64),
    Decimal(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Case-insensitive substring match.
    Contains { field: HotelField, needle: String },
    Equals { field: HotelField, value: FilterValue },
}

impl Condition {
    pub fn contains(field: HotelField, needle: impl Into<String>) -> Self {
        Condition::Contains {
            field,
            needle: needle.into(),
        }
    }

    pub fn equals(field: HotelField, value: FilterValue) -> Self {
        Condition::Equals { field, value }
    }
}

/// Conjunction of conditions. An empty predicate matches every hotel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_unconstrained(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("ASC") {
            Some(SortDirection::Asc)
        } else if raw.eq_ignore_ascii_case("DESC") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub field: HotelField,
    pub direction: SortDirection,
}

/// The `(limit, offset)` slice of matching rows to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    /// `None` when the offset of `page` does not fit in an `i64`.
    pub fn new(page: i64, limit: i64) -> Option<Self> {
        let offset = page.checked_sub(1)?.checked_mul(limit)?;
        Some(Self { limit, offset })
    }

    /// The 1-based page this window starts on.
    pub fn page(&self) -> i64 {
        if self.limit <= 0 {
            return DEFAULT_PAGE;
        }
        self.offset / self.limit + 1
    }
}

pub struct HotelFilter {
    params: HashMap<String, String>,
}

impl HotelFilter {
    pub fn new(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    fn param(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn build_predicate(&self) -> Result<Predicate, FilterError> {
        let mut conditions = Vec::new();

        for (field, kind, keys) in FILTERABLE {
            let Some((key, value)) = keys
                .iter()
                .find_map(|key| self.param(key).map(|value| (*key, value)))
            else {
                continue;
            };

            let condition = match kind {
                MatchKind::Substring => Condition::contains(*field, value),
                MatchKind::Integer => {
                    let parsed: i64 = value
                        .trim()
                        .parse()
                        .map_err(|_| invalid_number(key, value))?;
                    Condition::equals(*field, FilterValue::Integer(parsed))
                }
                MatchKind::Decimal => {
                    let parsed: f64 = value
                        .trim()
                        .parse()
                        .map_err(|_| invalid_number(key, value))?;
                    if !parsed.is_finite() {
                        return Err(invalid_number(key, value));
                    }
                    Condition::equals(*field, FilterValue::Decimal(parsed))
                }
            };
            conditions.push(condition);
        }

        Ok(Predicate::new(conditions))
    }

    pub fn build_pagination(&self) -> Result<Pagination, FilterError> {
        let page = self.positive("page", DEFAULT_PAGE)?;
        let limit = self.positive("limit", DEFAULT_LIMIT)?;
        Pagination::new(page, limit).ok_or_else(|| FilterError::InvalidPagination {
            param: "page",
            value: page.to_string(),
        })
    }

    /// Unknown fields and invalid directions fall back to no ordering.
    pub fn build_order_by(&self) -> Option<OrderBy> {
        let requested = self.param("orderby")?;
        let direction = SortDirection::parse(self.param("sort")?)?;
        let field = SORTABLE
            .iter()
            .find(|(name, _)| *name == requested)
            .map(|(_, field)| *field)?;
        Some(OrderBy { field, direction })
    }

    fn positive(&self, param: &'static str, default: i64) -> Result<i64, FilterError> {
        let Some(raw) = self.param(param) else {
            return Ok(default);
        };
        match raw.trim().parse::<i64>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(FilterError::InvalidPagination {
                param,
                value: raw.to_string(),
            }),
        }
    }
}

fn invalid_number(param: &'static str, value: &str) -> FilterError {
    FilterError::InvalidNumber {
        param,
        value: value.to_string(),
    }
}
