mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "resume-parse",
    version,
    about = "Extract contact details, skills, education and work history from PDF and DOCX resumes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single resume (PDF or DOCX)
    Parse {
        /// Path to a PDF or DOCX file
        input_file: PathBuf,

        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Parse every .pdf and .docx file in a directory
    Batch {
        /// Directory containing resumes (not searched recursively)
        dir: PathBuf,

        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the batch result as JSON to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Inspect and validate extraction configs
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Options shared by every command that runs the extraction pipeline.
#[derive(Args)]
pub struct PipelineArgs {
    /// Custom JSON extraction config (skills and section keywords)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// External entity recognizer: reads text on stdin, prints JSON spans
    #[arg(long, value_name = "PROGRAM")]
    pub ner_command: Option<String>,

    /// Argument passed to the entity recognizer (repeatable)
    #[arg(long = "ner-arg", value_name = "ARG", requires = "ner_command")]
    pub ner_args: Vec<String>,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the built-in config as JSON
    Show,
    /// Validate a custom config file
    Validate {
        /// Path to JSON config file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            pipeline,
            output,
        } => commands::parse::run(input_file, &pipeline, &output),
        Commands::Batch {
            dir,
            pipeline,
            output,
            out,
        } => commands::batch::run(dir, &pipeline, &output, out),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(),
            ConfigAction::Validate { file } => commands::config::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
