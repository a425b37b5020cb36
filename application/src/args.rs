//! [`Args`] definitions.

use clap::Parser;
use common::{Date, Money};
use service::domain::listing::Feature;

/// Search and reservation of vacation rentals.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command to run.
#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Searches listings the way the home page does.
    Search(Search),

    /// Shows details of a single listing.
    Show {
        /// ID of the listing.
        id: u32,
    },

    /// Quotes a reservation of a listing.
    Reserve(Reserve),

    /// Lists the available filters with their defaults.
    Filters,

    /// Registers a new guest.
    Register(Register),

    /// Checks guest credentials.
    Login(Login),
}

/// Inputs of the home page search.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct Search {
    /// Free text matched against listing titles and descriptions.
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Lowest nightly price, like `150000` or `$150.000`.
    #[arg(long)]
    pub min_price: Option<Money>,

    /// Highest nightly price, like `150000` or `$150.000`.
    #[arg(long)]
    pub max_price: Option<Money>,

    /// Required amenity, may be repeated.
    #[arg(short, long = "feature", value_name = "TAG")]
    pub features: Vec<Feature>,

    /// Disables the popular listings filter.
    #[arg(long)]
    pub no_popular: bool,

    /// Check-in date, `YYYY-MM-DD`.
    #[arg(long)]
    pub check_in: Option<Date>,

    /// Check-out date, `YYYY-MM-DD`.
    #[arg(long)]
    pub check_out: Option<Date>,

    /// Page of the results to show.
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

/// Reservation form.
#[derive(Clone, Copy, Debug, clap::Args)]
pub struct Reserve {
    /// ID of the listing.
    pub id: u32,

    /// Check-in date, `YYYY-MM-DD`.
    #[arg(long)]
    pub check_in: Date,

    /// Check-out date, `YYYY-MM-DD`.
    #[arg(long)]
    pub check_out: Date,

    /// Number of guests.
    #[arg(long)]
    pub guests: u8,
}

/// Registration form.
#[derive(Clone, Debug, clap::Args)]
pub struct Register {
    /// Full name of the guest.
    #[arg(long)]
    pub name: String,

    /// Email address of the guest.
    #[arg(long)]
    pub email: String,

    /// Phone number of the guest, like `+57 300 123 4567`.
    #[arg(long)]
    pub phone: String,

    /// Birth date of the guest, `YYYY-MM-DD`.
    #[arg(long)]
    pub birth_date: Date,

    /// Password of the guest.
    #[arg(long)]
    pub password: String,
}

/// Login form.
#[derive(Clone, Debug, clap::Args)]
pub struct Login {
    /// Email address of the guest.
    #[arg(long)]
    pub email: String,

    /// Password of the guest.
    #[arg(long)]
    pub password: String,
}
