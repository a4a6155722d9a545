use clap::Parser;
use std::sync::OnceLock;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Options read from the page's location hash, e.g. `#-vv&--sprites=img`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Id of the canvas element the board is drawn on
    #[arg(long, default_value = Settings::DEFAULT_CANVAS_ID)]
    pub canvas: String,

    /// Directory the cell sprites are served from
    #[arg(long, default_value = Settings::DEFAULT_SPRITE_ROOT)]
    pub sprites: String,
}

impl Args {
    pub(crate) fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        // the leading empty item stands in for the binary name
        let args = std::iter::once("").chain(hash.split(['#', '&']).filter(|arg| !arg.is_empty()));
        Self::try_parse_from(args)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Settings {
    pub canvas_id: String,
    pub sprite_root: String,
}

impl Settings {
    pub const DEFAULT_CANVAS_ID: &'static str = "canvas";
    pub const DEFAULT_SPRITE_ROOT: &'static str = "sprites";

    /// Makes these the settings every board is created with. Only the first
    /// call has an effect.
    pub(crate) fn install(self) {
        if let Err(ignored) = SETTINGS.set(self) {
            log::warn!("settings already installed, ignoring {:?}", ignored);
        }
    }

    pub(crate) fn current() -> &'static Self {
        SETTINGS.get_or_init(Self::default)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_id: Self::DEFAULT_CANVAS_ID.to_string(),
            sprite_root: Self::DEFAULT_SPRITE_ROOT.to_string(),
        }
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Self {
            canvas_id: args.canvas,
            sprite_root: args.sprites,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_gives_defaults() {
        for hash in ["", "#", "#&"] {
            let args = Args::from_hash(hash).unwrap();
            assert_eq!(Settings::from(args), Settings::default(), "hash {hash:?}");
        }
    }

    #[test]
    fn hash_items_are_separate_arguments() {
        let args = Args::from_hash("#-vv&--canvas=board&--sprites=assets/cells").unwrap();

        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
        assert_eq!(
            Settings::from(args),
            Settings {
                canvas_id: "board".to_string(),
                sprite_root: "assets/cells".to_string(),
            }
        );
    }

    #[test]
    fn quiet_disables_logging() {
        let args = Args::from_hash("#-q").unwrap();
        assert_eq!(args.verbose.log_level(), None);
    }

    #[test]
    fn unknown_options_are_rejected() {
        assert!(Args::from_hash("#--seed=42").is_err());
    }
}
