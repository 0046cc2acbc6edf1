use checkout_core::application::animation::AnimatedValue;
use checkout_core::application::checkout::CheckoutSession;
use checkout_core::application::pricing::PricingEngine;
use checkout_core::domain::catalog::CouponCatalog;
use checkout_core::infrastructure::clock::SystemClock;
use checkout_core::infrastructure::ticker::IntervalTicker;
use checkout_core::interfaces::csv::coupon_reader::CouponReader;
use checkout_core::interfaces::csv::summary_writer::{SummaryWriter, write_summary_json};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Order subtotal before shipping, tax and discounts
    #[arg(required_unless_present = "list_coupons", allow_negative_numbers = true)]
    subtotal: Option<Decimal>,

    /// Code of the coupon to apply
    #[arg(long)]
    coupon: Option<String>,

    /// Coupon catalog CSV file. Uses the built-in coupons if omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print the available coupons and exit
    #[arg(long)]
    list_coupons: bool,

    /// Output format of the order summary
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Animate the total on stderr before printing the summary
    #[arg(long)]
    animate: bool,

    /// Duration of the total animation in milliseconds
    #[arg(long, default_value_t = 1000)]
    duration_ms: u64,

    /// Date to check coupon expiry against (YYYY-MM-DD)
    #[arg(long)]
    on: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = if let Some(path) = &cli.catalog {
        let file = File::open(path).into_diagnostic()?;
        CouponReader::new(file).into_catalog().into_diagnostic()?
    } else {
        CouponCatalog::builtin()
    };

    if cli.list_coupons {
        for coupon in catalog.iter() {
            println!("{}: {}", coupon.code, coupon.description);
        }
        return Ok(());
    }

    let subtotal = cli.subtotal.unwrap_or_default();
    let mut session = CheckoutSession::new(PricingEngine::default(), subtotal).into_diagnostic()?;

    if let Some(code) = &cli.coupon {
        let coupon = catalog.require(code).into_diagnostic()?.clone();
        if let Some(on) = cli.on
            && coupon.is_expired(on)
        {
            tracing::warn!(code = %coupon.code, expires_at = ?coupon.expires_at, "coupon has expired");
        }
        if !coupon.is_valid {
            tracing::warn!(code = %coupon.code, "coupon is not valid and grants no discount");
        }
        session.apply(coupon).into_diagnostic()?;
    }

    let summary = *session.summary();

    if cli.animate {
        let (animated, mut samples) = AnimatedValue::spawn(
            SystemClock,
            Box::new(IntervalTicker::default()),
            Decimal::ZERO,
        );
        animated
            .start_interpolation(
                Decimal::ZERO,
                summary.total.to_cents(),
                Duration::from_millis(cli.duration_ms),
            )
            .await
            .into_diagnostic()?;
        while let Some(sample) = samples.recv().await {
            eprintln!("{:.2}", sample.value);
            if sample.is_final {
                break;
            }
        }
    }

    match cli.format {
        OutputFormat::Csv => {
            let stdout = io::stdout();
            let mut writer = SummaryWriter::new(stdout.lock());
            writer.write_summary(&summary).into_diagnostic()?;
        }
        OutputFormat::Json => {
            write_summary_json(io::stdout().lock(), &summary).into_diagnostic()?;
        }
    }

    Ok(())
}
