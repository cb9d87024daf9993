use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, error};
use serde::Serialize;
use serde_json::json;
use std::error::Error;
use std::process::ExitCode;
use uvoxid::{
    Format, Resolution, UVoxError, UVoxId, Voxel, area_between_voxels, equal_within_tolerance,
    snap_to_tolerance, truncate_to_tolerance,
};

#[derive(Parser)]
#[command(name = "uvoxid")]
#[command(about = "Encode, decode and compare spherical voxel identifiers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON on stdout instead of plain text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a coordinate into an identifier
    Encode(EncodeArgs),
    /// Unpack an identifier into radius, latitude and longitude
    Decode(IdArgs),
    /// Render an identifier in another format
    Convert(ConvertArgs),
    /// Zero all but the top N Base-32 symbols
    Truncate(PrecisionArgs),
    /// Render an identifier at reduced precision, padded for display
    Snap(PrecisionArgs),
    /// Check whether two identifiers agree at a precision
    Compare(CompareArgs),
    /// Report the physical resolution of a precision or an identifier
    Scale(ScaleArgs),
    /// Chord and great-circle distance between two identifiers
    Distance(PairArgs),
    /// Area of the patch spanned by two identifiers on one shell
    Area(PairArgs),
}

#[derive(Args)]
#[command(allow_negative_numbers = true)]
struct EncodeArgs {
    /// Radius in micrometers
    #[arg(long)]
    radius_um: u64,

    /// Latitude in microdegrees
    #[arg(long)]
    lat: i64,

    /// Longitude in microdegrees
    #[arg(long)]
    lon: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Base32)]
    format: FormatArg,
}

#[derive(Args)]
struct IdArgs {
    /// Identifier in hex, decimal, grouped Base-32 or flat Base-32
    id: String,
}

#[derive(Args)]
struct ConvertArgs {
    /// Identifier in hex, decimal, grouped Base-32 or flat Base-32
    id: String,

    /// Target format
    #[arg(long, value_enum, default_value_t = FormatArg::Hex)]
    to: FormatArg,
}

#[derive(Args)]
struct PrecisionArgs {
    id: String,

    /// Significant Base-32 symbols to keep (0-38)
    #[arg(short, long)]
    sig_chars: usize,
}

#[derive(Args)]
struct CompareArgs {
    a: String,
    b: String,

    /// Significant Base-32 symbols to compare (0-38)
    #[arg(short, long, default_value_t = uvoxid::MAX_SIG_CHARS)]
    sig_chars: usize,
}

#[derive(Args)]
struct ScaleArgs {
    /// Identifier whose bit length sets the resolution
    #[arg(conflicts_with = "sig_chars", required_unless_present = "sig_chars")]
    id: Option<String>,

    /// Precision in significant Base-32 symbols
    #[arg(short, long)]
    sig_chars: Option<usize>,
}

#[derive(Args)]
struct PairArgs {
    a: String,
    b: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Hex,
    Base32,
    Flat,
    Base64,
    Decimal,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Hex => Format::Hex,
            FormatArg::Base32 => Format::Base32,
            FormatArg::Flat => Format::Base32Flat,
            FormatArg::Base64 => Format::Base64,
            FormatArg::Decimal => Format::Decimal,
        }
    }
}

fn parse_id(text: &str) -> Result<UVoxId, UVoxError> {
    let format = Format::detect(text);
    debug!("Parsing {:?} as {:?}", text, format);
    text.parse()
}

fn emit<T: Serialize>(json_output: bool, value: &T, text: &str) -> Result<(), Box<dyn Error>> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let json_output = cli.json;

    match &cli.command {
        Commands::Encode(args) => {
            let voxel = Voxel::new(args.radius_um, args.lat, args.lon);
            let format = Format::from(args.format);
            debug!("Encoded {:?}, rendering as {:?}", voxel, format);
            let text = format.render(&voxel.id);
            emit(json_output, &json!({ "id": text }), &text)
        }
        Commands::Decode(args) => {
            let voxel = Voxel::from_id(parse_id(&args.id)?);
            let text = format!(
                "radius_um={} lat_microdeg={} lon_microdeg={}",
                voxel.radius_um, voxel.lat_microdeg, voxel.lon_microdeg
            );
            emit(json_output, &voxel, &text)
        }
        Commands::Convert(args) => {
            let id = parse_id(&args.id)?;
            let text = Format::from(args.to).render(&id);
            emit(json_output, &json!({ "id": text }), &text)
        }
        Commands::Truncate(args) => {
            let truncated = truncate_to_tolerance(&parse_id(&args.id)?, args.sig_chars)?;
            emit(json_output, &truncated, &truncated.to_string())
        }
        Commands::Snap(args) => {
            let snapped = snap_to_tolerance(&parse_id(&args.id)?, args.sig_chars)?;
            emit(json_output, &json!({ "snapped": snapped }), &snapped)
        }
        Commands::Compare(args) => {
            let a = parse_id(&args.a)?;
            let b = parse_id(&args.b)?;
            let equal = equal_within_tolerance(&a, &b, args.sig_chars)?;
            emit(
                json_output,
                &json!({ "equal": equal, "sig_chars": args.sig_chars }),
                &equal.to_string(),
            )
        }
        Commands::Scale(args) => {
            let resolution = match (&args.id, args.sig_chars) {
                (_, Some(sig_chars)) => Resolution::from_precision(sig_chars)?,
                (Some(id), None) => Resolution::from_value(&parse_id(id)?),
                (None, None) => {
                    let message = "an identifier or --sig-chars is required".to_string();
                    return Err(UVoxError::Decode(message).into());
                }
            };
            emit(json_output, &resolution, &resolution.label)
        }
        Commands::Distance(args) => {
            let a = Voxel::from_id(parse_id(&args.a)?);
            let b = Voxel::from_id(parse_id(&args.b)?);
            let linear_m = a.distance_to(&b);
            let surface_m = a.surface_distance_to(&b);
            emit(
                json_output,
                &json!({ "linear_m": linear_m, "great_circle_m": surface_m }),
                &format!("linear={:.3} m great_circle={:.3} m", linear_m, surface_m),
            )
        }
        Commands::Area(args) => {
            let area = area_between_voxels(&parse_id(&args.a)?, &parse_id(&args.b)?)?;
            emit(
                json_output,
                &json!({ "area_m2": area }),
                &format!("{:.3} m²", area),
            )
        }
    }
}

fn exit_code(err: &(dyn Error + 'static)) -> u8 {
    match err.downcast_ref::<UVoxError>() {
        Some(UVoxError::ShellMismatch { .. }) => 3,
        Some(_) => 2,
        None => 1,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report_failure(err.as_ref())),
    }
}

/// Logs the failure once and picks the exit code.
fn report_failure(err: &(dyn Error + 'static)) -> u8 {
    error!("{}", err);
    exit_code(err)
}
