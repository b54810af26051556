//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{FilterChoice, OutputFormat};
use crate::ascii::SizingFlags;

/// Sample an image into a terminal-sized grid of pixel values
#[derive(Parser, Debug)]
#[command(name = "ascii-grid")]
#[command(version, about = "Sample an image into a terminal-sized pixel grid", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file to convert
    pub image: Option<PathBuf>,

    /// Exact grid size, e.g. `-d 60 30`
    #[arg(short, long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    pub dimensions: Option<Vec<u32>>,

    /// Grid width; height follows the image aspect ratio
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Grid height; width follows the image aspect ratio
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Use the full terminal width
    #[arg(short, long)]
    pub full: bool,

    /// Sample a 2x4 dot matrix per cell
    #[arg(short, long)]
    pub braille: bool,

    /// Mirror horizontally
    #[arg(long)]
    pub flip_x: bool,

    /// Mirror vertically
    #[arg(long)]
    pub flip_y: bool,

    /// Resampling filter (default from config, else lanczos3)
    #[arg(long)]
    pub filter: Option<FilterChoice>,

    /// Output format
    #[arg(long, default_value = "summary")]
    pub format: OutputFormat,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Args {
    /// Sizing flags as given; validation happens when building the request.
    pub fn sizing_flags(&self) -> SizingFlags {
        SizingFlags {
            dimensions: self.dimensions.as_deref().and_then(|d| match d {
                [w, h] => Some([*w, *h]),
                _ => None,
            }),
            width: self.width,
            height: self.height,
            full: self.full,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["ascii-grid", "cat.png"]);
        assert_eq!(args.image, Some(PathBuf::from("cat.png")));
        assert!(args.dimensions.is_none());
        assert!(args.width.is_none());
        assert!(args.height.is_none());
        assert!(!args.full);
        assert!(!args.braille);
        assert!(!args.flip_x);
        assert!(!args.flip_y);
        assert!(args.filter.is_none());
        assert_eq!(args.format, OutputFormat::Summary);
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(args.command.is_none());
        assert_eq!(args.sizing_flags(), SizingFlags::default());
    }

    #[test]
    fn test_args_dimensions() {
        let args = Args::parse_from(["ascii-grid", "-d", "60", "30", "cat.png"]);
        assert_eq!(args.dimensions, Some(vec![60, 30]));
        assert_eq!(args.sizing_flags().dimensions, Some([60, 30]));
    }

    #[test]
    fn test_args_dimensions_need_two_values() {
        assert!(Args::try_parse_from(["ascii-grid", "cat.png", "-d", "60"]).is_err());
    }

    #[test]
    fn test_args_width_and_height_parse() {
        let args = Args::parse_from(["ascii-grid", "-W", "40", "-H", "12", "cat.png"]);
        let flags = args.sizing_flags();
        assert_eq!(flags.width, Some(40));
        assert_eq!(flags.height, Some(12));
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from([
            "ascii-grid",
            "--full",
            "--braille",
            "--flip-x",
            "--flip-y",
            "-v",
            "cat.png",
        ]);
        assert!(args.full);
        assert!(args.braille);
        assert!(args.flip_x);
        assert!(args.flip_y);
        assert!(args.verbose);
        assert!(args.sizing_flags().full);
    }

    #[test]
    fn test_args_filter_and_format() {
        let args = Args::parse_from([
            "ascii-grid",
            "--filter",
            "catmull-rom",
            "--format",
            "json",
            "cat.png",
        ]);
        assert_eq!(args.filter, Some(FilterChoice::CatmullRom));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_args_config_subcommand() {
        let args = Args::parse_from(["ascii-grid", "config", "show"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));
        assert!(args.image.is_none());

        let args = Args::parse_from(["ascii-grid", "config", "init"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn test_args_config_path() {
        let args = Args::parse_from(["ascii-grid", "-c", "/tmp/grid.toml", "cat.png"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/grid.toml")));
    }
}
