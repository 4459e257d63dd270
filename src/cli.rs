// splashmark/src/cli.rs
use crate::core::MAX_BG_BLUR;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "splashmark", version, about = "Generate images with a logo.")]
pub struct Cli {
    /// Number of images to generate
    #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub total: u32,

    /// Search query for Unsplash (default: random photos)
    pub query: Option<String>,

    /// Gaussian blur radius for the background, 0 disables blurring
    #[arg(short = 'b', long, default_value_t = 0.0, value_parser = parse_blur)]
    pub bg_blur: f32,
}

fn parse_blur(value: &str) -> Result<f32, String> {
    let radius: f32 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;

    if !radius.is_finite() || !(0.0..=MAX_BG_BLUR).contains(&radius) {
        return Err(format!(
            "blur radius must be between 0 and {}, got {}",
            MAX_BG_BLUR, value
        ));
    }

    Ok(radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_random_sharp_image() {
        let cli = Cli::try_parse_from(["splashmark"]).unwrap();
        assert_eq!(cli.total, 1);
        assert!(cli.query.is_none());
        assert_eq!(cli.bg_blur, 0.0);
    }

    #[test]
    fn parses_total_query_and_blur() {
        let cli = Cli::try_parse_from(["splashmark", "3", "mountains", "--bg-blur", "4.5"]).unwrap();
        assert_eq!(cli.total, 3);
        assert_eq!(cli.query.as_deref(), Some("mountains"));
        assert_eq!(cli.bg_blur, 4.5);

        let cli = Cli::try_parse_from(["splashmark", "-b", "2", "5"]).unwrap();
        assert_eq!(cli.total, 5);
        assert_eq!(cli.bg_blur, 2.0);
    }

    #[test]
    fn rejects_zero_total_and_bad_blur() {
        assert!(Cli::try_parse_from(["splashmark", "0"]).is_err());
        assert!(Cli::try_parse_from(["splashmark", "-b", "-1"]).is_err());
        assert!(Cli::try_parse_from(["splashmark", "--bg-blur", "soft"]).is_err());
        assert!(Cli::try_parse_from(["splashmark", "--bg-blur", "1e9"]).is_err());
        assert!(Cli::try_parse_from(["splashmark", "--bg-blur", "250"]).is_ok());
    }

    #[test]
    fn accepts_nothing_beyond_total_query_and_blur() {
        for flag in ["--filter", "-v", "--verbose", "--no-progress"] {
            assert!(
                Cli::try_parse_from(["splashmark", flag]).is_err(),
                "{} should be rejected",
                flag
            );
        }
        assert!(Cli::try_parse_from(["splashmark", "2", "cats", "extra"]).is_err());
    }
}
