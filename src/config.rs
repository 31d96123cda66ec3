use crate::evaluating::{DEFAULT_SCALE, MAX_SCALE};
use clap::Parser;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::Layer,
    prelude::*,
};

/// An interactive calculator for exact decimal arithmetic with variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Fractional digits kept when a quotient does not terminate.
    #[arg(short, long, default_value_t = DEFAULT_SCALE, value_parser = clap::value_parser!(i64).range(0..=MAX_SCALE))]
    pub scale: i64,

    /// Text written before each line is read.
    #[arg(short, long, default_value = "")]
    pub prompt: String,

    /// Log more to stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub scale: i64,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { scale: DEFAULT_SCALE, prompt: String::new() }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self { scale: args.scale, prompt: args.prompt.clone() }
    }
}

pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Sends this crate's events to stderr at the chosen level; other crates stay at warn.
pub fn init_logging(verbose: u8) {
    let targets = Targets::new()
        .with_default(LevelFilter::WARN)
        .with_target(env!("CARGO_CRATE_NAME"), level_for(verbose));

    tracing_subscriber::registry()
        .with(Layer::new()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(targets)
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["smart_calc"]);
        let config = Config::from(&args);
        assert_eq!(config.scale, DEFAULT_SCALE);
        assert!(config.prompt.is_empty());
        assert_eq!(level_for(args.verbose), LevelFilter::WARN);
    }

    #[test]
    fn flags() {
        let args = Args::parse_from(["smart_calc", "--scale", "4", "--prompt", "> ", "-vv"]);
        assert_eq!(Config::from(&args).scale, 4);
        assert_eq!(args.prompt, "> ");
        assert_eq!(level_for(args.verbose), LevelFilter::DEBUG);
    }

    #[test]
    fn negative_scale_is_rejected() {
        assert!(Args::try_parse_from(["smart_calc", "--scale", "-1"]).is_err());
    }

    #[test]
    fn scale_has_an_upper_bound() {
        let too_large = (MAX_SCALE + 1).to_string();
        assert!(Args::try_parse_from(["smart_calc", "--scale", too_large.as_str()]).is_err());
        assert!(Args::try_parse_from(["smart_calc", "--scale", "10000"]).is_ok());
    }
}
