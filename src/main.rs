use clap::{Parser, ValueEnum};
use dialoguer::{Input, Select};
use rand::Rng;

use linecode_rs::LineCodeError;
use linecode_rs::coding::{BitString, Scheme};
use linecode_rs::layout::{WaveformPlot, render};
use linecode_rs::ui::{self, DrawConfig};
use linecode_rs::utils::consts::{
    DEFAULT_CELL_WIDTH, MAX_CELL_WIDTH, MAX_RANDOM_BITS, MIN_CELL_WIDTH,
};
use linecode_rs::utils::logging::init_logging;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Draw line-coded waveforms of a bit string",
    long_about = None
)]
struct Cli {
    /// Bit string to encode, e.g. 101010 (prompted for when omitted)
    #[arg(conflicts_with = "random")]
    bits: Option<String>,
    /// Line coding scheme, e.g. nrz-l, "Bipolar AMI", ami, diff-manchester
    /// (prompted for when omitted)
    #[arg(short, long, value_parser = parse_scheme, conflicts_with = "all")]
    scheme: Option<Scheme>,
    /// Render every scheme
    #[arg(short, long)]
    all: bool,
    /// Encode N random bits instead of reading a bit string
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u16)
            .range(1..=MAX_RANDOM_BITS as i64)
    )]
    random: Option<u16>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Characters per time unit in text output
    #[arg(
        long,
        default_value_t = DEFAULT_CELL_WIDTH as u16,
        value_parser = clap::value_parser!(u16)
            .range(MIN_CELL_WIDTH as i64..=MAX_CELL_WIDTH as i64)
    )]
    cell_width: u16,
}

fn parse_scheme(s: &str) -> Result<Scheme, LineCodeError> {
    s.parse()
}

fn prompt_bits() -> Result<String, Box<dyn std::error::Error>> {
    let input = Input::<String>::new()
        .with_prompt("Enter bit string (e.g., 101010)")
        .allow_empty(true)
        .validate_with(|s: &String| -> Result<(), String> {
            BitString::parse(s)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(input)
}

fn prompt_scheme() -> Result<Scheme, Box<dyn std::error::Error>> {
    let index = Select::new()
        .with_prompt("Choose Encoding Type")
        .items(&Scheme::ALL)
        .default(0)
        .interact()?;
    Ok(Scheme::ALL[index])
}

fn random_bits(count: usize) -> String {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| if rng.random_bool(0.5) { '1' } else { '0' })
        .collect()
}

/// One plot prints as an object, `--all` as a single array.
fn plots_to_json(
    plots: &[WaveformPlot],
    as_array: bool,
) -> serde_json::Result<String> {
    match plots {
        [plot] if !as_array => serde_json::to_string_pretty(plot),
        _ => serde_json::to_string_pretty(plots),
    }
}

fn emit(
    plots: &[WaveformPlot],
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.format {
        OutputFormat::Text => {
            let config = DrawConfig {
                cell_width: cli.cell_width as usize,
            };
            for plot in plots {
                println!("{}", ui::draw(plot, &config));
            }
        }
        OutputFormat::Json => {
            println!("{}", plots_to_json(plots, cli.all)?);
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input = match (&cli.bits, cli.random) {
        (Some(bits), _) => bits.clone(),
        (None, Some(count)) => random_bits(count as usize),
        (None, None) => prompt_bits()?,
    };
    let bits = BitString::parse(&input)?;
    tracing::info!("Bit string: \"{}\" ({} bits)", bits, bits.len());

    let schemes = if cli.all {
        Scheme::ALL.to_vec()
    } else {
        match cli.scheme {
            Some(scheme) => vec![scheme],
            None => vec![prompt_scheme()?],
        }
    };

    let plots: Vec<WaveformPlot> = schemes
        .into_iter()
        .map(|scheme| {
            let signal = scheme.encode(&bits);
            render(&bits, &signal, scheme)
        })
        .collect();

    emit(&plots, cli)
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if matches!(cli.format, OutputFormat::Text) {
        ui::print_banner();
    }

    if let Err(e) = run(&cli) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
