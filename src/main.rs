use anyhow::Result;
use clap::Parser;
use log::{debug, warn};

use geodist::ellipsoid::{self, Ellipsoid};
use geodist::{Coordinate, Distance, LengthUnit};

/// Compute the distance between 2 coordinates using all algorithms, in meters by default
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, after_help = ellipsoid_help())]
struct Args {
    /// The origin "Lat, Long" coordinate
    origin: String,

    /// The destination "Lat, Long" coordinate
    destination: String,

    /// Show the distance in kilometers
    #[arg(long, group = "unit")]
    km: bool,

    /// Show the distance in miles
    #[arg(long, group = "unit")]
    mi: bool,

    /// Show the distance in feet
    #[arg(long, group = "unit")]
    ft: bool,

    /// Show the distance in nautical miles
    #[arg(long, group = "unit")]
    nm: bool,

    /// The name of the ellipsoid to use
    #[arg(long, default_value = "WGS84")]
    ellipsoid: Ellipsoid,
}

impl Args {
    fn unit(&self) -> LengthUnit {
        if self.km {
            LengthUnit::Kilometers
        } else if self.mi {
            LengthUnit::Miles
        } else if self.ft {
            LengthUnit::Feet
        } else if self.nm {
            LengthUnit::NauticalMiles
        } else {
            LengthUnit::Meters
        }
    }
}

fn ellipsoid_help() -> String {
    format!(
        "Available ellipsoids: {}\n\nExample with the AIRY ellipsoid:\n\n    \
         geodist \"40° 26.7717, -79° 56.93172\" \"30°16′57″N, 029°48′32″W\" --ellipsoid AIRY",
        ellipsoid::available_names()
    )
}

fn bootstrap_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() -> Result<()> {
    bootstrap_logging();
    let args = Args::parse();
    let unit = args.unit();
    debug!("Using ellipsoid {} with unit {unit}", args.ellipsoid);

    let from = Coordinate::parse(&args.origin, args.ellipsoid)?;
    let to = Coordinate::parse(&args.destination, args.ellipsoid)?;
    debug!("Parsed origin ({from}) and destination ({to})");

    let report = Distance::new(from, to).in_unit(unit).all()?;

    println!("Flat:      {}", report.flat);
    println!("Haversine: {}", report.haversine);
    match report.vincenty {
        Ok(vincenty) => println!("Vincenty:  {vincenty}"),
        Err(e) => {
            warn!("Vincenty distance unavailable between ({from}) and ({to}): {e}");
            println!("Vincenty:  {e}");
        }
    }
    Ok(())
}
