//! Compute `k * P` with the atomic pattern and print the affine result.

use anyhow::{Context, Result};
use atomic_kp::{
    AffinePoint, CurveParameters, MontgomeryField, MultiplierConfig, Schedule, parse_hex,
    scalar_mul_with_probe,
    trace::{Primitive, Probe, Step},
};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info, trace};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Curve name: secp256r1 (prime256v1, P-256), secp224r1 (P-224) or secp192r1
    /// (prime192v1, P-192).
    #[clap(long, default_value = "secp256r1")]
    curve: String,

    /// Base point x-coordinate, in hex. Defaults to the curve generator.
    #[clap(long, requires = "y")]
    x: Option<String>,

    /// Base point y-coordinate, in hex. Defaults to the curve generator.
    #[clap(long, requires = "x")]
    y: Option<String>,

    /// Montgomery constant `R^2 mod p` with `R = 2^256`, in hex, checked against the modulus.
    #[clap(long)]
    r_squared: Option<String>,

    /// Scalar as binary digits, most significant first, with a leading 1.
    #[clap(long, default_value = "1000111011110111111101")]
    scalar: String,

    /// Run an addition for every digit and select the sum in constant time.
    #[clap(long)]
    balanced: bool,

    /// Log every field operation.
    #[clap(long)]
    trace: bool,
}

/// Forwards multiplier events to `tracing`.
struct TracingProbe;

impl Probe for TracingProbe {
    fn begin(&mut self, primitive: Primitive) {
        trace!(?primitive, "begin");
    }

    fn record(&mut self, step: Step) {
        trace!(op = ?step.op, dst = ?step.dst);
    }

    fn digit(&mut self, position: usize, digit: char) {
        debug!(position, %digit, "digit");
    }
}

fn setup_logger(trace: bool) {
    let default = if trace { "atomic_kp=trace" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the computation, returning the output lines.
fn run(args: &Args) -> Result<[String; 2]> {
    let mut params = CurveParameters::load(&args.curve)
        .with_context(|| format!("loading curve {:?}", args.curve))?;
    if let Some(r_squared) = &args.r_squared {
        let r_squared = parse_hex(r_squared).context("parsing the Montgomery constant")?;
        params = params.with_r_squared(r_squared);
    }

    let field = MontgomeryField::new(&params).context("setting up the field")?;
    info!(
        curve = params.name(),
        bits = params.bits(),
        words = params.word_width(),
        "curve loaded"
    );

    let base = match (&args.x, &args.y) {
        (Some(x), Some(y)) => AffinePoint::from_hex(&field, &params, x, y),
        _ => AffinePoint::generator(&field, &params),
    }
    .context("decoding the base point")?;

    let schedule = if args.balanced {
        Schedule::Balanced
    } else {
        Schedule::Asymmetric
    };
    info!(?schedule, digits = args.scalar.len(), "multiplying");

    let config = MultiplierConfig { schedule };
    let result = scalar_mul_with_probe(&field, &base, &args.scalar, config, &mut TracingProbe)
        .context("computing kP")?;
    info!(branch = ?result.branch, "normalized");

    let label = result.branch.digit();
    let offset = field.to_be_bytes(&result.point.x()).len() - params.byte_len();
    let x = hex::encode(&field.to_be_bytes(&result.point.x())[offset..]);
    let y = hex::encode(&field.to_be_bytes(&result.point.y())[offset..]);

    Ok([format!("X_A{label}: {x}"), format!("Y_A{label}: {y}")])
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logger(args.trace);

    match run(&args) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            println!("Error!");
            ExitCode::FAILURE
        }
    }
}
