use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use gold_pricing_core::config::Config;
use gold_pricing_core::gold::render::{render_table, result_rows};
use gold_pricing_core::gold::session::{run_lines, LiveCalculator, Quote};
use gold_pricing_core::telemetry;
use gold_pricing_core::{PricingField, RawInput};

#[derive(Parser, Debug)]
#[command(name = "gold-calc", version, about = "Gold purchase price breakdown")]
struct Cli {
    /// TOML file with default field values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute one breakdown from flags (default)
    Quote(FieldArgs),
    /// Read `field=value` lines from stdin and recompute after each one
    Live,
}

/// Field values as typed; anything unparseable counts as 0.
#[derive(Args, Debug, Default)]
struct FieldArgs {
    /// Price per gram
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<String>,
    /// Making charge, percent of rate per gram
    #[arg(long, allow_hyphen_values = true)]
    making_charge_percent: Option<String>,
    /// GST on the gold price, percent
    #[arg(long, allow_hyphen_values = true)]
    gst_gold_percent: Option<String>,
    /// GST on making charges, percent
    #[arg(long, allow_hyphen_values = true)]
    gst_making_percent: Option<String>,
    /// Total weight in grams
    #[arg(long, allow_hyphen_values = true)]
    total_grams: Option<String>,
    /// Grams covered by the savings scheme
    #[arg(long, allow_hyphen_values = true)]
    reserved_grams: Option<String>,
    /// Percent of making charges waived on reserved grams
    #[arg(long, allow_hyphen_values = true)]
    waive_reserved_percent: Option<String>,
}

impl FieldArgs {
    fn overlay(self, mut raw: RawInput) -> RawInput {
        let given = [
            (PricingField::Rate, self.rate),
            (PricingField::MakingChargePercent, self.making_charge_percent),
            (PricingField::GstGoldPercent, self.gst_gold_percent),
            (PricingField::GstMakingPercent, self.gst_making_percent),
            (PricingField::TotalGrams, self.total_grams),
            (PricingField::ReservedGrams, self.reserved_grams),
            (PricingField::WaiveReservedPercent, self.waive_reserved_percent),
        ];
        for (field, text) in given {
            if let Some(text) = text {
                raw.set(field, text);
            }
        }
        raw
    }
}

fn render(quote: &Quote, json: bool, pretty: bool) -> Result<String> {
    if !json {
        return Ok(render_table(&result_rows(&quote.raw, &quote.output)));
    }
    let text = if pretty { serde_json::to_string_pretty(quote)? } else { serde_json::to_string(quote)? };
    Ok(text)
}

fn run_quote(defaults: RawInput, args: FieldArgs, json: bool) -> Result<()> {
    let span = telemetry::make_info_span("quote", "gold-calc");
    let _guard = span.enter();
    let quote = Quote::from_raw(args.overlay(defaults));
    println!("{}", render(&quote, json, true)?);
    Ok(())
}

fn run_live(defaults: RawInput, json: bool) -> Result<()> {
    let span = telemetry::make_info_span("live", "gold-calc");
    let _guard = span.enter();

    let sink = move |quote: &Quote| match render(quote, json, false) {
        Ok(text) => println!("{text}"),
        Err(err) => warn!(error = %err, "cannot render breakdown"),
    };
    let mut live = LiveCalculator::new(defaults, sink);
    let stats = run_lines(&mut live, io::stdin().lock(), |err| eprintln!("{err}"))
        .context("reading stdin")?;
    info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        quit = stats.quit,
        "live session ended"
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;
    telemetry::init("gold-calc", config.log_filter.as_deref())?;

    match cli.command.unwrap_or(Commands::Quote(FieldArgs::default())) {
        Commands::Quote(args) => run_quote(config.defaults, args, cli.json),
        Commands::Live => run_live(config.defaults, cli.json),
    }
}
