use crate::config::{Action, Config, NameSource};
use anyhow::Context;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Pair<'a> {
    id: &'a str,
    uuid: &'a str,
}

#[derive(Serialize)]
struct Verdict<'a> {
    id: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Runs `config.action`, writing results to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let prefix = config.prefix.as_str();
    match &config.action {
        Action::New { count } => {
            let ids = (0..*count)
                .map(|_| puid::new_id(prefix))
                .collect::<puid::Result<Vec<_>>>()?;
            tracing::debug!(count, prefix, "minted identifiers");
            if config.json {
                serde_json::to_writer(&mut *out, &ids)?;
                writeln!(out)?;
            } else {
                for id in &ids {
                    writeln!(out, "{id}")?;
                }
            }
        }
        Action::Encode { uuid } => {
            let id = puid::encode(uuid, prefix)?;
            print_pair(config.json, out, &id, uuid, &id)?;
        }
        Action::Decode { id } => {
            let uuid = puid::decode(id, prefix)?;
            print_pair(config.json, out, id, &uuid, &uuid)?;
        }
        Action::Validate { id } => {
            let result = puid::validate(id, prefix);
            if config.json {
                let verdict = Verdict {
                    id,
                    valid: result.is_ok(),
                    error: result.as_ref().err().map(ToString::to_string),
                };
                serde_json::to_writer(&mut *out, &verdict)?;
                writeln!(out)?;
            }
            result?;
            if !config.json {
                writeln!(out, "{id}")?;
            }
        }
        Action::Prefixes { source } => {
            let names = read_names(source)?;
            let prefixes = puid::derive_prefixes(names.as_slice())?;
            serde_json::to_writer_pretty(&mut *out, &prefixes)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn print_pair(
    json: bool,
    out: &mut impl Write,
    id: &str,
    uuid: &str,
    plain: &str,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &Pair { id, uuid })?;
        writeln!(out)?;
    } else {
        writeln!(out, "{plain}")?;
    }
    Ok(())
}

fn read_names(source: &NameSource) -> anyhow::Result<Vec<String>> {
    match source {
        NameSource::Args(names) => Ok(names.clone()),
        NameSource::File(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read model names from {}", path.display()))?;
            Ok(parse_names(&text))
        }
    }
}

fn parse_names(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
