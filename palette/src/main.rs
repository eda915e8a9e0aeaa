use anyhow::Result;
use clap::Parser;
use palette::cli::{Cli, Cmd};
use palette::config::{load_config, load_config_from};
use palette::editor_from_config;
use palette::repl::{ok, print_fields, repl, report_status, write_page};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let mut editor = editor_from_config(&config, runtime.handle().clone())?;

    match cli.cmd {
        Some(Cmd::Fields) => print_fields(&editor),
        Some(Cmd::Render { out }) => {
            let status = runtime.block_on(editor.wait_settled());
            report_status(&status);
            let out = out.unwrap_or_else(|| config.output.clone());
            write_page(&editor, &out)?;
            ok(&format!("wrote {}", out.display()));
        }
        Some(Cmd::Repl) | None => repl(&mut editor, &runtime, &config.output)?,
    }

    Ok(())
}
