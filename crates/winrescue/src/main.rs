mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "winrescue",
    version,
    about = "Brings off-screen windows back onto the active monitors"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Move windows that are off-screen or hanging off a monitor back into view
    Fix(commands::fix::FixArgs),
    /// List eligible windows and what `fix` would do with each
    List(commands::list::ListArgs),
    /// Check the configuration and show the detected monitor layout
    Doctor,
    /// Create the default configuration file
    Init,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fix(args) => commands::fix::execute(&args),
        Commands::List(args) => commands::list::execute(&args),
        Commands::Doctor => commands::doctor::execute(),
        Commands::Init => commands::init::execute(),
    }
}
