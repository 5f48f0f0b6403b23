use clap::{Args, Parser, Subcommand};

use booking_estimator::BookingForm;

#[derive(Parser, Debug)]
#[command(name = "booking-estimator", version, about = "Travel package booking estimator")]
pub struct Cli {
    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the package table with display prices
    Packages,

    /// Estimate nights and total for a booking
    Estimate(FormArgs),

    /// Submit a booking (fails if the form is incomplete)
    Submit(FormArgs),
}

/// Booking form fields, as typed into the page
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Guest name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub check_in: String,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub check_out: String,

    /// Package id
    #[arg(long = "package", default_value = "")]
    pub package_id: String,

    /// Promo code
    #[arg(long = "promo", default_value = "")]
    pub promo_code: String,

    /// Read the form as JSON from stdin instead
    #[arg(long, conflicts_with_all = ["name", "check_in", "check_out", "package_id", "promo_code"])]
    pub stdin: bool,
}

impl From<FormArgs> for BookingForm {
    fn from(args: FormArgs) -> Self {
        BookingForm {
            name: args.name,
            check_in: args.check_in,
            check_out: args.check_out,
            package_id: args.package_id,
            promo_code: args.promo_code,
        }
    }
}
