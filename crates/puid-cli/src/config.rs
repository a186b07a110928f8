use anyhow::bail;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line arguments for the `puid` binary.
///
/// Global options can also be supplied through the environment (or a `.env`
/// file in the working directory).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "puid",
    version,
    about = "Mint, encode, decode and validate prefixed UUIDv7 identifiers"
)]
pub struct CliArgs {
    /// Three lowercase letters tagging the identifier type. Empty for
    /// unprefixed identifiers.
    ///
    /// Environment variable: `PUID_PREFIX`
    #[arg(short, long, global = true, env = "PUID_PREFIX", default_value_t = String::new())]
    pub prefix: String,

    /// Emit JSON instead of plain text.
    ///
    /// Environment variable: `PUID_JSON`
    #[arg(long, global = true, env = "PUID_JSON", default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Mint fresh identifiers backed by UUIDv7.
    New {
        /// How many identifiers to mint.
        ///
        /// Environment variable: `PUID_COUNT`
        #[arg(short = 'n', long, env = "PUID_COUNT", default_value_t = 1)]
        count: usize,
    },
    /// Convert a canonical UUID into an identifier.
    Encode { uuid: String },
    /// Convert an identifier back into its canonical UUID.
    Decode { id: String },
    /// Check that an identifier is well formed and carries the prefix.
    Validate { id: String },
    /// Derive unique three-letter prefixes for a batch of model names.
    Prefixes {
        /// Model names, lowercase `a-z` only.
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        names: Vec<String>,

        /// Read model names from a file, one per line. Blank lines are
        /// ignored.
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Where the `prefixes` command reads model names from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    Args(Vec<String>),
    File(PathBuf),
}

/// Validated action to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    New { count: usize },
    Encode { uuid: String },
    Decode { id: String },
    Validate { id: String },
    Prefixes { source: NameSource },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prefix: String,
    pub json: bool,
    pub action: Action,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if puid::validate_prefix(&args.prefix).is_err() {
            bail!(
                "PUID_PREFIX ({:?}) must be empty or exactly three lowercase letters",
                args.prefix
            );
        }

        let action = match args.command {
            Command::New { count } => {
                if count == 0 {
                    bail!("PUID_COUNT must be greater than 0");
                }
                Action::New { count }
            }
            Command::Encode { uuid } => Action::Encode { uuid },
            Command::Decode { id } => Action::Decode { id },
            Command::Validate { id } => Action::Validate { id },
            Command::Prefixes { names, file } => match file {
                Some(path) => Action::Prefixes {
                    source: NameSource::File(path),
                },
                None if names.is_empty() => bail!("no model names given"),
                None => Action::Prefixes {
                    source: NameSource::Args(names),
                },
            },
        };

        Ok(Self {
            prefix: args.prefix,
            json: args.json,
            action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> anyhow::Result<Config> {
        let args = CliArgs::try_parse_from(argv)?;
        Config::try_from(args)
    }

    #[test]
    fn parses_new_with_defaults() {
        let config = parse(&["puid", "new"]).unwrap();
        assert_eq!(config.action, Action::New { count: 1 });
        assert!(!config.json);
    }

    #[test]
    fn global_options_follow_the_subcommand() {
        let config = parse(&["puid", "new", "-n", "3", "--prefix", "acc", "--json"]).unwrap();
        assert_eq!(config.prefix, "acc");
        assert!(config.json);
        assert_eq!(config.action, Action::New { count: 3 });
    }

    #[test]
    fn rejects_bad_prefix() {
        let err = parse(&["puid", "--prefix", "ACC", "new"]).unwrap_err();
        assert!(err.to_string().contains("PUID_PREFIX"));
    }

    #[test]
    fn rejects_zero_count() {
        let err = parse(&["puid", "new", "--count", "0"]).unwrap_err();
        assert!(err.to_string().contains("PUID_COUNT"));
    }

    #[test]
    fn prefixes_take_names_or_a_file() {
        let config = parse(&["puid", "prefixes", "user", "post"]).unwrap();
        assert_eq!(
            config.action,
            Action::Prefixes {
                source: NameSource::Args(vec!["user".into(), "post".into()])
            }
        );

        let config = parse(&["puid", "prefixes", "--file", "models.txt"]).unwrap();
        assert_eq!(
            config.action,
            Action::Prefixes {
                source: NameSource::File("models.txt".into())
            }
        );

        assert!(parse(&["puid", "prefixes"]).is_err());
        assert!(parse(&["puid", "prefixes", "user", "--file", "models.txt"]).is_err());
    }
}
