use clap::{ArgAction, Parser};
use glob_site::{build, config, output};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "glob-site")]
#[command(about = "Turn a directory of dated notes into linked static HTML pages")]
#[command(long_about = "\
Turn a directory of dated notes into linked static HTML pages

Every subdirectory of INPUT becomes one page, ordered by the creation time
of its content.txt. Pages are written as 1.html, 2.html, ... with links to
their neighbours; the newest page is also written as index.html.

Input structure:

  notes/
  ├── config.toml            # Optional site config (see --print-config)
  ├── apple/
  │   ├── content.txt        # Required; one paragraph per line
  │   └── image.jpg          # Optional; jpg > png > svg, one honored
  └── banana/
      ├── content.txt
      └── image.png

Set RUST_LOG to control log output beyond -v/-vv.")]
#[command(version)]
struct Cli {
    /// Directory holding one folder per entry
    #[arg(required_unless_present = "print_config")]
    input: Option<PathBuf>,

    /// Directory to write the site into (created if missing)
    #[arg(required_unless_present = "print_config")]
    output: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print a documented config.toml and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout and succeed; usage errors exit 1
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    init_logger(cli.verbose);

    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    let (Some(input), Some(output_dir)) = (cli.input, cli.output) else {
        eprintln!("Invalid params. Input and output directory required");
        return ExitCode::FAILURE;
    };
    let build_config = config::BuildConfig::new(input, output_dir);

    match build(&build_config) {
        Ok(report) => {
            output::print_scan_output(&report.entries, &build_config.input);
            println!();
            output::print_generate_output(&report.pages);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Warnings by default; `RUST_LOG` still wins when set.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
