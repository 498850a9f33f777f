use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wxstate_core::{MinimaTable, WeatherObservation};

#[derive(Parser, Debug)]
#[command(author, version, about = "Classify one weather observation", long_about = None)]
struct Args {
    /// Airport code (case-sensitive, e.g. ABQ)
    #[arg(long)]
    airport: String,

    /// Ceiling in feet
    #[arg(long)]
    ceiling: f64,

    /// Visibility in statute miles
    #[arg(long)]
    visibility: f64,

    /// Wind direction in degrees (accepted, not used by the rule)
    #[arg(long, default_value_t = 0.0)]
    wind_direction: f64,

    /// Wind speed in knots (accepted, not used by the rule)
    #[arg(long, default_value_t = 0.0)]
    wind_speed: f64,

    /// Condition code such as RA or BR (accepted, not used by the rule)
    #[arg(long, default_value = "")]
    condition: String,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let observation = WeatherObservation::new(&args.airport, args.ceiling, args.visibility)
        .with_wind(args.wind_direction, args.wind_speed)
        .with_condition(&args.condition);

    let category = MinimaTable::standard().classify(&observation);

    if args.json {
        let result = serde_json::json!({
            "airport": observation.airport,
            "ceiling_ft": observation.ceiling_ft,
            "visibility_sm": observation.visibility_sm,
            "category": category,
        });
        println!("{result}");
    } else {
        match category {
            Some(category) => println!("{} {}", observation.airport, category),
            None => println!("{} unclassified (not in minima table)", observation.airport),
        }
    }

    if category.is_none() {
        std::process::exit(1);
    }
    Ok(())
}
