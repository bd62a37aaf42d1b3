//! CLI argument parsing using clap derive

use std::path::PathBuf;

use apphost_fs::AppFile;
use clap::{Parser, Subcommand};

/// App Hosting build core - validate apphosting.yaml and resolve Next.js versions
#[derive(Parser, Debug)]
#[command(name = "apphost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate an apphosting.yaml
    ///
    /// A missing file is valid and means "use defaults".
    ///
    /// Examples:
    ///   apphost validate
    ///   apphost validate web/apphosting.yaml --json
    Validate {
        /// Path to the config file
        #[arg(default_value = AppFile::AppHostingConfig.as_str())]
        path: PathBuf,

        /// Print the validated document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the adaptor specifier for a Next.js version or range
    ///
    /// Examples:
    ///   apphost adaptor-version 14.2.3      # 14.2
    ///   apphost adaptor-version "<14.0.15"  # <=14.0
    AdaptorVersion {
        /// Declared or resolved Next.js specifier
        specifier: String,
    },

    /// Print the installed version of a dependency
    ///
    /// Reads pnpm-lock.yaml, yarn.lock, npm-shrinkwrap.json and
    /// package-lock.json in that order, falling back to the declared
    /// specifier.
    Resolve {
        /// Dependency name
        #[arg(default_value = "next")]
        name: String,

        /// Application root containing package.json and lockfiles
        #[arg(long, default_value = ".", env = "APPHOST_APP_ROOT")]
        app_root: PathBuf,

        /// Declared specifier (defaults to the one in package.json)
        #[arg(long)]
        specifier: Option<String>,
    },
}
