use clap::{Parser, Subcommand};
use lexico::{
    config::LexicoConfig,
    report::{self, ReportFormat, Summary},
    scanner::Scanner,
    source::SourceFile,
    Error, InternalResult,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, default_value = "lexico.json", global = true)]
    config: PathBuf,

    /// Enable debug mode
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a source file and write its reports
    Analyze(AnalyzeArgs),

    /// Print the rule table in priority order
    Rules,
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Source file to analyze
    file: PathBuf,

    /// Report format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Directory for report files (defaults to the configured one)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Exit with a failure status when lexical errors are found
    #[arg(long)]
    strict: bool,
}

/// Outcome of a command that ran to completion.
enum Status {
    Ok,
    LexicalErrors,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn write_file(path: &Path, content: &str) -> InternalResult<()> {
    std::fs::write(path, content).map_err(|e| Error::io(path, e))?;
    info!("wrote {}", path.display());
    Ok(())
}

fn analyze(args: &AnalyzeArgs, config: &LexicoConfig) -> InternalResult<Status> {
    let source = SourceFile::load(&args.file, &config.input)?;
    println!("Leyendo archivo: {}", source.name);

    let result = source.scan(&Scanner::new());
    let summary = Summary::from(&result);

    let format = args.format.unwrap_or(config.report.format);
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.report.output_dir.clone());
    debug!("format: {}, output dir: {}", format, output_dir.display());

    match format {
        ReportFormat::Html => {
            std::fs::create_dir_all(&output_dir).map_err(|e| Error::io(&output_dir, e))?;
            let now = chrono::Local::now().naive_local();

            let token_path = output_dir.join(&config.report.token_report);
            write_file(
                &token_path,
                &report::html::token_report(&result.tokens, &source.name, &now),
            )?;
            let error_path = output_dir.join(&config.report.error_report);
            write_file(
                &error_path,
                &report::html::error_report(&result.errors, &source.name, &now),
            )?;

            println!("{}", summary);
            println!("Reportes generados:");
            println!("  {}", token_path.display());
            println!("  {}", error_path.display());
        }
        ReportFormat::Json => {
            std::fs::create_dir_all(&output_dir).map_err(|e| Error::io(&output_dir, e))?;
            let rendered = report::json::render(&result, &source.name)
                .map_err(|e| Error::Report(e.to_string()))?;
            let stem = source
                .path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| source.name.clone());
            let json_path = output_dir.join(format!("{}.tokens.json", stem));
            write_file(&json_path, &rendered)?;

            println!("{}", summary);
            println!("Reporte generado: {}", json_path.display());
        }
        ReportFormat::Text => {
            print!("{}", report::text::render(&result));
        }
    }

    if args.strict && !result.is_clean() {
        return Ok(Status::LexicalErrors);
    }
    Ok(Status::Ok)
}

fn print_rules() {
    for (i, rule) in Scanner::new().rules().iter().enumerate() {
        println!("{:>3}  {:<16} {}", i + 1, rule.label(), rule.pattern);
    }
}

fn run(cli: &Cli) -> InternalResult<Status> {
    let config = LexicoConfig::load_or_default(&cli.config)?;
    info!("config loaded.");
    debug!("config: {:?}", config);

    match &cli.command {
        Commands::Analyze(args) => analyze(args, &config),
        Commands::Rules => {
            print_rules();
            Ok(Status::Ok)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(Status::Ok) => {}
        Ok(Status::LexicalErrors) => {
            eprintln!("Lexical errors found");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
