//! Renders a quote card the way the panel would show it and writes it as PBM.
//!
//! ```text
//! sonder-preview [--size small|medium|large] [--invert] [--by NAME] [QUOTE...] > card.pbm
//! ```
//!
//! The quote is read from stdin when no words are given.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use epd266::{FrameBuffer, encode_p4, pbm::PBM_MAX_SIZE};
use log::info;
use sonder::{CardConfig, CardFont, render_card};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
enum PreviewError {
    #[error("unknown font size `{0}` (expected small, medium or large)")]
    UnknownSize(String),
    #[error("`{0}` needs a value")]
    MissingValue(&'static str),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("no quote given on the command line or stdin")]
    EmptyQuote,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct PreviewArgs {
    config: CardConfig,
    attribution: Option<String>,
    quote: Option<String>,
}

fn parse_size(value: &str) -> Result<CardFont, PreviewError> {
    match value {
        "small" => Ok(CardFont::Small),
        "medium" => Ok(CardFont::Medium),
        "large" => Ok(CardFont::Large),
        other => Err(PreviewError::UnknownSize(other.to_owned())),
    }
}

fn parse_args<I>(args: I) -> Result<PreviewArgs, PreviewError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = PreviewArgs::default();
    let mut words: Vec<String> = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size" => {
                let value = args.next().ok_or(PreviewError::MissingValue("--size"))?;
                parsed.config.max_font = parse_size(&value)?;
            }
            "--by" => {
                let value = args.next().ok_or(PreviewError::MissingValue("--by"))?;
                parsed.attribution = Some(value);
            }
            "--invert" => parsed.config.inverted = true,
            "--" => {
                words.extend(args.by_ref());
            }
            option if option.starts_with("--") => {
                return Err(PreviewError::UnknownOption(option.to_owned()));
            }
            _ => words.push(arg),
        }
    }

    if !words.is_empty() {
        parsed.quote = Some(words.join(" "));
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args(std::env::args().skip(1))?;
    let quote = match args.quote {
        Some(quote) => quote,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read quote from stdin")?;
            buf
        }
    };
    let quote = quote.trim();
    if quote.is_empty() {
        return Err(PreviewError::EmptyQuote.into());
    }

    let mut frame = FrameBuffer::new();
    let layout = match render_card(&mut frame, quote, args.attribution.as_deref(), args.config) {
        Ok(layout) => layout,
        Err(never) => match never {},
    };
    info!(
        "preview: {} lines at {:?}, fits={}",
        layout.lines, layout.font, layout.fits
    );

    let mut out = vec![0u8; PBM_MAX_SIZE];
    let encoded = encode_p4(&frame, &mut out)
        .map_err(|err| anyhow::anyhow!("pbm encode failed: {:?}", err))?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(encoded)
        .context("failed to write PBM to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn words_join_into_the_quote() {
        let parsed = parse_args(args(&["Less", "is", "more."])).unwrap();
        assert_eq!(parsed.quote.as_deref(), Some("Less is more."));
        assert_eq!(parsed.config, CardConfig::default());
    }

    #[test]
    fn options_configure_the_card() {
        let parsed =
            parse_args(args(&["--size", "small", "--invert", "--by", "Rumi", "x"])).unwrap();
        assert_eq!(parsed.config.max_font, CardFont::Small);
        assert!(parsed.config.inverted);
        assert_eq!(parsed.attribution.as_deref(), Some("Rumi"));
        assert_eq!(parsed.quote.as_deref(), Some("x"));
    }

    #[test]
    fn double_dash_ends_options() {
        let parsed = parse_args(args(&["--", "--not-an-option"])).unwrap();
        assert_eq!(parsed.quote.as_deref(), Some("--not-an-option"));
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert_eq!(
            parse_args(args(&["--size", "huge"])),
            Err(PreviewError::UnknownSize("huge".to_owned()))
        );
        assert_eq!(
            parse_args(args(&["--by"])),
            Err(PreviewError::MissingValue("--by"))
        );
        assert_eq!(
            parse_args(args(&["--fast"])),
            Err(PreviewError::UnknownOption("--fast".to_owned()))
        );
    }

    #[test]
    fn no_words_leaves_quote_for_stdin() {
        assert_eq!(parse_args(args(&[])).unwrap().quote, None);
    }
}
