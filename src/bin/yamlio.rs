use std::error::Error;

use sarge::prelude::*;
use tracing::{debug, info};
use yamlio::cli::{InputArg, OutputArg, StreamArgs};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  yamlio [--input <path>] [--output <path>] [--append | --no-clobber] [--verbose]");
    eprintln!();
    eprintln!("Copies every YAML document from the input to the output, each");
    eprintln!("preceded by a '---' marker.");
    eprintln!();
    eprintln!("Path tokens:");
    eprintln!("  - | stdin | stdout   Use the standard stream (default)");
    eprintln!("  @<path>              Force treating the value as a file path");
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr so they never mix with documents on stdout.
    let filter = if verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let input_ref = reader.add::<InputArg>(tag::both('i', "input"));
    let output_ref = reader.add::<OutputArg>(tag::both('o', "output"));
    let append_ref = reader.add::<bool>(tag::long("append"));
    let no_clobber_ref = reader.add::<bool>(tag::long("no-clobber"));
    let verbose_ref = reader.add::<bool>(tag::both('v', "verbose"));

    let args = reader.parse()?;

    let input = match input_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("InputArg parsing is infallible"),
        None => InputArg::default(),
    };
    let output = match output_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("OutputArg parsing is infallible"),
        None => OutputArg::default(),
    };

    init_tracing(matches!(verbose_ref.get(&args), Some(Ok(true))));

    let stream_args = StreamArgs {
        input,
        output,
        append: matches!(append_ref.get(&args), Some(Ok(true))),
        no_clobber: matches!(no_clobber_ref.get(&args), Some(Ok(true))),
    };
    debug!(
        input = %stream_args.input.0,
        output = %stream_args.output.0,
        policy = ?stream_args.file_exists_policy(),
        "resolved streams"
    );

    let mut input = stream_args.open_input()?;
    let documents: Vec<serde_yaml::Value> = input.decode_all()?;
    debug!(count = documents.len(), stdin = input.is_std(), "decoded documents");

    let mut output = stream_args.open_output()?;
    output.encode_all(&documents)?;
    output.close()?;

    info!(count = documents.len(), output = %stream_args.output.0, "wrote documents");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("yamlio error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
