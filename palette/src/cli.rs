use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "palette")]
pub struct Cli {
    /// Config file (defaults to `.palette.toml`)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// List editable fields
    Fields,
    /// Render once and write the preview page
    Render {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    Repl,
}
