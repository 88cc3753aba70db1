//! Transport types and the `--only` filter.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::InputError;

/// A mode of transport as named by the MVG API.
///
/// Declaration order doubles as the serialization order of a
/// [`TransportTypes`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportType {
    Ubahn,
    Tram,
    Sbahn,
    Bus,
    RegionalBus,
    Bahn,
    Schiff,
    /// A walking connection between two legs of a route.
    Pedestrian,
    /// Anything the API adds that we don't know about yet.
    #[serde(other)]
    Other,
}

impl TransportType {
    /// The six types queried when no filter is given.
    pub const DEFAULT: [TransportType; 6] = [
        TransportType::Ubahn,
        TransportType::Tram,
        TransportType::Sbahn,
        TransportType::Bus,
        TransportType::RegionalBus,
        TransportType::Bahn,
    ];

    /// Returns the API's name for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Ubahn => "UBAHN",
            TransportType::Tram => "TRAM",
            TransportType::Sbahn => "SBAHN",
            TransportType::Bus => "BUS",
            TransportType::RegionalBus => "REGIONAL_BUS",
            TransportType::Bahn => "BAHN",
            TransportType::Schiff => "SCHIFF",
            TransportType::Pedestrian => "PEDESTRIAN",
            TransportType::Other => "OTHER",
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing filter tokens and the canonical types each expands to.
const ALIASES: &[(&str, &[TransportType])] = &[
    ("ubahn", &[TransportType::Ubahn]),
    ("u", &[TransportType::Ubahn]),
    ("sbahn", &[TransportType::Sbahn]),
    ("s", &[TransportType::Sbahn]),
    ("tram", &[TransportType::Tram]),
    ("bus", &[TransportType::Bus, TransportType::RegionalBus]),
    ("bahn", &[TransportType::Bahn]),
];

/// Comma-separated list of every accepted filter token.
pub fn valid_tokens() -> String {
    ALIASES
        .iter()
        .map(|(token, _)| *token)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A de-duplicated set of transport types, sent to the API comma-joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportTypes(BTreeSet<TransportType>);

impl TransportTypes {
    /// The full default set.
    pub fn all() -> Self {
        Self(TransportType::DEFAULT.into_iter().collect())
    }

    /// Whether `ty` is part of the set.
    pub fn contains(&self, ty: TransportType) -> bool {
        self.0.contains(&ty)
    }

    /// Number of distinct types.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty. Never true for a resolved filter.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = TransportType> + '_ {
        self.0.iter().copied()
    }

    /// Add a type to the set.
    pub fn with(mut self, ty: TransportType) -> Self {
        self.0.insert(ty);
        self
    }

    /// The query-parameter form, e.g. `UBAHN,BUS,REGIONAL_BUS`.
    pub fn to_param(&self) -> String {
        self.iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for TransportTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_param())
    }
}

/// Resolve an `--only` filter into canonical transport types.
///
/// Tokens are comma-separated and case-insensitive; surrounding
/// whitespace is ignored. An absent or empty filter yields
/// [`TransportType::DEFAULT`].
///
/// # Examples
///
/// ```
/// use mvg_cli::domain::{TransportType, resolve_transport_types};
///
/// let types = resolve_transport_types(Some("U,bus")).unwrap();
/// assert_eq!(types.len(), 3);
/// assert!(types.contains(TransportType::RegionalBus));
///
/// assert!(resolve_transport_types(Some("zug")).is_err());
/// ```
pub fn resolve_transport_types(filter: Option<&str>) -> Result<TransportTypes, InputError> {
    let filter = match filter {
        Some(f) if !f.is_empty() => f,
        _ => return Ok(TransportTypes::all()),
    };

    let mut types = BTreeSet::new();
    for token in filter.to_lowercase().split(',') {
        let token = token.trim();
        let (_, expanded) = ALIASES
            .iter()
            .find(|(alias, _)| *alias == token)
            .ok_or_else(|| InputError::UnknownTransportType {
                token: token.to_string(),
                valid: valid_tokens(),
            })?;
        types.extend(expanded.iter().copied());
    }

    Ok(TransportTypes(types))
}
