//! Command orchestration.
//!
//! Sequences favorites lookup, station resolution, retrieval and
//! formatting for one invocation. User input is validated before any
//! network call, and calls run strictly one after another.

mod error;


use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

use crate::display::{
    DepartureRow, RouteRow, departures_table, format_departures, format_routes, routes_table,
};
use crate::domain::{
    TransportType, TransportTypes, minutes_offset, resolve_clock_time, resolve_speed,
    resolve_transport_types,
};
use crate::favorites::{Favorites, FavoritesError, FavoritesStore};
use crate::mvg::{DEFAULT_DEPARTURE_LIMIT, DepartureQuery, RouteQuery, Station, TransitApi};
use crate::stations::find_station;

pub use error::{AppError, EXIT_FAILURE, EXIT_USAGE};

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print all saved favorites.
    ListFavorites,
    /// Remove a favorite.
    DeleteFavorite { alias: String },
    /// Store `alias` for a station, after checking the station exists.
    SaveFavorite { alias: String, station: String },
    /// Departure board for one station.
    Departures {
        from: String,
        only: Option<String>,
        at: Option<String>,
    },
    /// Connections between two stations.
    Routes {
        from: String,
        to: String,
        only: Option<String>,
        at: Option<String>,
        speed: Option<String>,
    },
}

/// The outcome of a successful command, ready to print.
#[derive(Debug, Clone)]
pub enum Report {
    Favorites(Favorites),
    FavoriteSaved { alias: String, station: String },
    FavoriteDeleted { alias: String, station: String },
    Departures {
        station: Station,
        rows: Vec<DepartureRow>,
    },
    Routes {
        origin: Station,
        destination: Station,
        rows: Vec<RouteRow>,
    },
}

impl Report {
    /// Render for the terminal.
    pub fn render(&self, color: bool) -> String {
        match self {
            Report::Favorites(favorites) if favorites.is_empty() => {
                "No favorites saved.\n".to_string()
            }
            Report::Favorites(favorites) => {
                let width = favorites.keys().map(|k| k.chars().count()).max().unwrap_or(0);
                favorites
                    .iter()
                    .map(|(alias, station)| format!("  {alias:<width$}  →  {station}\n"))
                    .collect()
            }
            Report::FavoriteSaved { alias, station } => {
                format!("Saved favorite '{alias}' → {station}\n")
            }
            Report::FavoriteDeleted { alias, station } => {
                format!("Deleted favorite '{alias}' ({station})\n")
            }
            Report::Departures { station, rows } => {
                departures_table(&station.name, rows).render(color)
            }
            Report::Routes {
                origin,
                destination,
                rows,
            } => routes_table(&origin.name, &destination.name, rows).render(color),
        }
    }
}

/// Run one command against `api` and `store`, relative to `now`.
pub async fn run<Tz: TimeZone>(
    api: &impl TransitApi,
    store: &FavoritesStore,
    command: Command,
    now: &DateTime<Tz>,
) -> Result<Report, AppError> {
    debug!(?command, "running");

    match command {
        Command::ListFavorites => Ok(Report::Favorites(store.load()?)),
        Command::DeleteFavorite { alias } => delete_favorite(store, alias),
        Command::SaveFavorite { alias, station } => save_favorite(api, store, alias, &station).await,
        Command::Departures { from, only, at } => {
            let transport_types = resolve_transport_types(only.as_deref())?;
            let offset_minutes = match at {
                Some(text) => minutes_offset(&resolve_clock_time(&text, now)?, now),
                None => None,
            };

            let station = find_station(api, &store.resolve(&from)?).await?;
            let query = DepartureQuery {
                global_id: station.global_id.clone(),
                limit: DEFAULT_DEPARTURE_LIMIT,
                transport_types,
                offset_minutes,
            };
            let departures = api.departures(&query).await?;
            debug!(count = departures.len(), "departures received");

            Ok(Report::Departures {
                rows: format_departures(&departures, now),
                station,
            })
        }
        Command::Routes {
            from,
            to,
            only,
            at,
            speed,
        } => {
            let transport_types = route_transport_types(only.as_deref())?;
            let change_speed = resolve_speed(speed.as_deref())?;
            let routing_date_time = match at {
                Some(text) => resolve_clock_time(&text, now)?.with_timezone(&Utc),
                None => now.with_timezone(&Utc),
            };

            let origin = find_station(api, &store.resolve(&from)?).await?;
            let destination = find_station(api, &store.resolve(&to)?).await?;
            let query = RouteQuery {
                origin_id: origin.global_id.clone(),
                destination_id: destination.global_id.clone(),
                routing_date_time,
                transport_types,
                change_speed,
            };
            let routes = api.routes(&query).await?;
            debug!(count = routes.len(), "routes received");

            Ok(Report::Routes {
                rows: format_routes(&routes, now),
                origin,
                destination,
            })
        }
    }
}

/// Route queries without a filter also include ferries.
fn route_transport_types(only: Option<&str>) -> Result<TransportTypes, AppError> {
    let types = resolve_transport_types(only)?;
    Ok(match only {
        Some(f) if !f.is_empty() => types,
        _ => types.with(TransportType::Schiff),
    })
}

async fn save_favorite(
    api: &impl TransitApi,
    store: &FavoritesStore,
    alias: String,
    station_name: &str,
) -> Result<Report, AppError> {
    let station = find_station(api, station_name).await?;

    let mut favorites = store.load()?;
    favorites.insert(alias.clone(), station.name.clone());
    store.save(&favorites)?;

    Ok(Report::FavoriteSaved {
        alias,
        station: station.name,
    })
}

fn delete_favorite(store: &FavoritesStore, alias: String) -> Result<Report, AppError> {
    let mut favorites = store.load()?;
    let station = favorites
        .remove(&alias)
        .ok_or_else(|| FavoritesError::UnknownAlias(alias.clone()))?;
    store.save(&favorites)?;

    Ok(Report::FavoriteDeleted { alias, station })
}
