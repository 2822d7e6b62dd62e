use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments parser
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Root directory scanned recursively for texture images (optional)
    #[arg(long, default_value = ".")]
    pub textures: PathBuf,

    /// Path of the persistent color cache database (optional)
    #[arg(long, default_value = "colors.sqlite")]
    pub cache: PathBuf,

    /// Print scan and cache statistics to stderr (optional)
    #[arg(long)]
    pub debug: bool,
}

/// Validates CLI arguments after parsing.
/// A missing textures directory is allowed (the scan just finds nothing),
/// but an existing non-directory path is a usage error, as is a cache path
/// in a directory that does not exist.
pub fn validate_args(args: &Args) -> Result<(), String> {
    if args.textures.exists() && !args.textures.is_dir() {
        return Err(format!(
            "Textures path is not a directory: {}",
            args.textures.display()
        ));
    }

    if let Some(parent) = args.cache.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(format!(
                "Cache directory does not exist: {}",
                parent.display()
            ));
        }
    }

    Ok(())
}
