use anyhow::Result;
use clap::Parser;
use modkit::application::InstallOptions;
use modkit::commands::{Config, ConfigOptions};
use std::path::PathBuf;

/// modkit - module installer
///
/// Installs packages through composer and runs the install scripts of
/// modules that are already unpacked in the packages directory.
///
/// Examples:
///   modkit install blog                # Install requirements and scripts of packages/blog
///   modkit install vendor/pkg:^1.2     # Fetch a package through composer
#[derive(Parser, Debug)]
#[command(author, version = env!("MODKIT_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Site root directory (defaults to the current directory)
    #[arg(long = "root", short = 'r', env = "MODKIT_ROOT", value_name = "PATH", global = true)]
    pub root: Option<PathBuf>,

    /// Directory holding unpacked modules (defaults to <root>/packages)
    #[arg(long = "packages-dir", env = "MODKIT_PACKAGES", value_name = "PATH", global = true)]
    pub packages_dir: Option<PathBuf>,

    /// Directory composer installs into (defaults to <root>/vendor)
    #[arg(long = "vendor-dir", env = "MODKIT_VENDOR", value_name = "PATH", global = true)]
    pub vendor_dir: Option<PathBuf>,

    /// Package API URL (defaults to https://repo.packagist.org)
    #[arg(long = "api-url", env = "MODKIT_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Composer executable
    #[arg(long = "composer", env = "MODKIT_COMPOSER", value_name = "BIN", global = true)]
    pub composer: Option<String>,

    /// Interpreter used to run module scripts (defaults to sh)
    #[arg(long = "interpreter", env = "MODKIT_INTERPRETER", value_name = "BIN", global = true)]
    pub interpreter: Option<String>,

    /// Module loaded before every module (defaults to database)
    #[arg(long = "bootstrap", env = "MODKIT_BOOTSTRAP", value_name = "MODULE", global = true)]
    pub bootstrap: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Install packages and run module install scripts
    Install(InstallArgs),

    /// Show the resolved paths
    Paths,
}

#[derive(clap::Args, Debug)]
pub struct InstallArgs {
    /// Packages to install
    #[arg(value_name = "NAME[:CONSTRAINT]", required = true, num_args = 1..)]
    pub packages: Vec<String>,

    /// Forces installation from package sources when possible, including VCS information
    #[arg(long)]
    pub prefer_source: bool,

    /// Run install scripts without asking
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Show what would be installed without changing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    fn config_options(&self) -> ConfigOptions {
        ConfigOptions {
            root: self.root.clone(),
            packages_dir: self.packages_dir.clone(),
            vendor_dir: self.vendor_dir.clone(),
            api_url: self.api_url.clone(),
            composer: self.composer.clone(),
            interpreter: self.interpreter.clone(),
            bootstrap: self.bootstrap.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = modkit::runtime::RealRuntime;
    let config = Config::new(&runtime, cli.config_options())?;

    match cli.command {
        Commands::Install(args) => {
            let options = InstallOptions {
                prefer_source: args.prefer_source,
                yes: args.yes,
                dry_run: args.dry_run,
            };
            modkit::commands::install(runtime, config, &args.packages, options).await?
        }
        Commands::Paths => modkit::commands::paths(&config),
    }
    Ok(())
}
