//! Command-line arguments.

use clap::Parser;

use crate::app::{AppError, Command};

/// Show next departures or routes from Munich public transport stations.
#[derive(Debug, Parser)]
#[command(name = "mvg", version)]
pub struct Cli {
    /// Origin station name or favorite alias
    #[arg(short = 'f', long = "from", value_name = "NAME")]
    pub from: Option<String>,

    /// Destination station name or favorite alias; switches to route planning
    #[arg(short = 't', long = "to", value_name = "NAME")]
    pub to: Option<String>,

    /// Filter transport types, e.g. "ubahn", "bus", "sbahn,tram"
    #[arg(long, value_name = "FILTER")]
    pub only: Option<String>,

    /// Depart at this time today (H:MM or HH:MM)
    #[arg(long, value_name = "TIME")]
    pub at: Option<String>,

    /// Change speed for route planning: slow, normal or fast
    #[arg(long, value_name = "SPEED")]
    pub speed: Option<String>,

    /// Save a favorite: --save <ALIAS> <STATION>
    #[arg(
        long,
        num_args = 2,
        value_names = ["ALIAS", "STATION"],
        conflicts_with_all = ["delete", "favorites"]
    )]
    pub save: Option<Vec<String>>,

    /// Delete a favorite by alias
    #[arg(long, value_name = "ALIAS", conflicts_with = "favorites")]
    pub delete: Option<String>,

    /// List saved favorites
    #[arg(long)]
    pub favorites: bool,
}

impl Cli {
    /// Decide what to do. Favorites actions take precedence over lookups.
    pub fn into_command(self) -> Result<Command, AppError> {
        if self.favorites {
            return Ok(Command::ListFavorites);
        }
        if let Some(alias) = self.delete {
            return Ok(Command::DeleteFavorite { alias });
        }
        if let Some(values) = self.save
            && let [alias, station] = values.as_slice()
        {
            return Ok(Command::SaveFavorite {
                alias: alias.clone(),
                station: station.clone(),
            });
        }

        let from = self.from.ok_or(AppError::MissingOrigin)?;
        Ok(match self.to {
            Some(to) => Command::Routes {
                from,
                to,
                only: self.only,
                at: self.at,
                speed: self.speed,
            },
            None => Command::Departures {
                from,
                only: self.only,
                at: self.at,
            },
        })
    }
}
