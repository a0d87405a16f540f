//! CLI argument parsing with clap.

use clap::Parser;

use bytemap::{Result, RunConfig};

/// Render the byte-value distribution of files as a grayscale PNG
#[derive(Parser, Debug)]
#[command(name = "bytemap")]
#[command(version, about = "Byte-frequency fingerprint of files as a 16x16 grayscale PNG", long_about = None)]
#[command(after_help = "Each pixel is one byte value (0x00 top-left, 0xff bottom-right).
Darker pixels are more frequent. The PNG is written to stdout.

EXAMPLES:
    bytemap '/usr/bin/*' > bin.png
    bytemap --scale 16 --exclude '*.txt' 'data/*' > data.png
    bytemap --include-zero firmware.img > fw.png")]
pub struct Args {
    /// Glob patterns selecting the files to scan
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Skip files matching this glob pattern (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Integer upscale factor for the 16x16 image
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub scale: i64,

    /// Let byte 0x00 take part in choosing the normalization scale
    #[arg(long)]
    pub include_zero: bool,
}

impl Args {
    /// Validate the parsed arguments into a run configuration.
    pub fn to_config(&self) -> Result<RunConfig> {
        RunConfig::new(
            self.patterns.clone(),
            &self.exclude,
            self.scale,
            self.include_zero,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemap::ByteMapError;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["bytemap"]);
        assert!(args.patterns.is_empty());
        assert!(args.exclude.is_empty());
        assert_eq!(args.scale, 1);
        assert!(!args.include_zero);
    }

    #[test]
    fn test_args_patterns() {
        let args = Args::parse_from(["bytemap", "*.bin", "data/*"]);
        assert_eq!(args.patterns, vec!["*.bin".to_string(), "data/*".to_string()]);
    }

    #[test]
    fn test_args_exclude_repeatable() {
        let args = Args::parse_from(["bytemap", "--exclude", "*.txt", "--exclude", "*.md", "*"]);
        assert_eq!(args.exclude, vec!["*.txt".to_string(), "*.md".to_string()]);
        assert_eq!(args.patterns, vec!["*".to_string()]);
    }

    #[test]
    fn test_args_scale() {
        let args = Args::parse_from(["bytemap", "--scale", "8", "f"]);
        assert_eq!(args.scale, 8);
    }

    #[test]
    fn test_args_negative_scale_parses() {
        let args = Args::parse_from(["bytemap", "--scale", "-2", "f"]);
        assert_eq!(args.scale, -2);
        assert!(matches!(args.to_config(), Err(ByteMapError::Config(_))));
    }

    #[test]
    fn test_args_non_numeric_scale_rejected() {
        assert!(Args::try_parse_from(["bytemap", "--scale", "big", "f"]).is_err());
    }

    #[test]
    fn test_args_include_zero_flag() {
        let args = Args::parse_from(["bytemap", "--include-zero", "f"]);
        assert!(args.include_zero);
    }

    #[test]
    fn test_args_to_config() {
        let args = Args::parse_from([
            "bytemap",
            "--exclude",
            "*.log",
            "--scale",
            "3",
            "--include-zero",
            "*.bin",
        ]);
        let config = args.to_config().unwrap();
        assert_eq!(config.patterns(), &["*.bin".to_string()]);
        assert_eq!(config.exclude().len(), 1);
        assert_eq!(config.scale(), 3);
        assert!(config.include_zero());
    }

    #[test]
    fn test_args_bad_exclude_pattern() {
        let args = Args::parse_from(["bytemap", "--exclude", "[", "f"]);
        assert!(matches!(args.to_config(), Err(ByteMapError::Pattern { .. })));
    }
}
