use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use whim::{ai, config, executor, history, shell, ui};
use whim::Theme;

#[derive(Parser, Debug)]
#[command(name = "whim", version, about = "Turn a plain-English request into a shell command")]
struct Cli {
    /// What you want done, in plain words
    #[arg(required = true, trailing_var_arg = true)]
    query: Vec<String>,

    /// Print only the proposed command, for piping into a shell
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = config::get_config_path()?;
    if !config_path.exists() {
        config::Config::create_default(&config_path)?;
        println!("Created default config file at {:?}", config_path);
        println!("Add an API key there (or set ANTHROPIC_API_KEY / OPENAI_API_KEY) and rerun.");
        return Ok(ExitCode::SUCCESS);
    }
    let config = config::Config::load(&config_path)?;

    let theme = if cli.no_color || !config.display.color_output {
        Theme::monochrome()
    } else {
        Theme::default()
    };

    let query = cli.query.join(" ");

    let raw = match ai::request_command(&query, &config).await {
        Ok(raw) => raw,
        Err(e) => {
            ui::display_error(&e.to_string(), &theme);
            return Ok(ExitCode::FAILURE);
        }
    };

    let suggestion = ai::parse_response(&raw);
    if suggestion.is_empty() {
        ui::display_error("the model did not return a command", &theme);
        return Ok(ExitCode::FAILURE);
    }

    if cli.quiet {
        ui::display_quiet(&suggestion);
        return Ok(ExitCode::SUCCESS);
    }

    ui::display(&suggestion, &theme);
    if !ui::confirm(&mut io::stdin().lock())? {
        return Ok(ExitCode::SUCCESS);
    }

    println!();
    if let Err(e) = executor::run_command(&suggestion.command, &theme) {
        ui::display_error(&e.to_string(), &theme);
        return Ok(ExitCode::FAILURE);
    }

    history::append(&shell::ShellContext::from_env(), &suggestion.command);

    Ok(ExitCode::SUCCESS)
}
