use anyhow::{Context, Result, bail};
use markdown_mathml_config::Config;
use markdown_mathml_engine::{InlineParser, MathOptions, math::KatexRenderer, math_parser, render_inline};
use std::{
    env, fs,
    io::{self, Write},
    path::PathBuf,
    process,
};

const USAGE: &str = "Usage: markdown-mathml [--config <path>] [<input.md>]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    input: Option<PathBuf>,
    help: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--config" => {
                    let Some(path) = args.next() else {
                        bail!("{arg} requires a path");
                    };
                    parsed.config = Some(PathBuf::from(path));
                }
                "-h" | "--help" => parsed.help = true,
                flag if flag.starts_with('-') && flag != "-" => bail!("unknown option {flag}"),
                _ if parsed.input.is_some() => bail!("more than one input file given"),
                "-" => parsed.input = None,
                path => parsed.input = Some(PathBuf::from(path)),
            }
        }
        Ok(parsed)
    }
}

fn load_options(explicit: Option<&PathBuf>) -> Result<MathOptions> {
    let Some(path) = explicit else {
        log::debug!("Config path: {}", Config::config_path().display());
        return match Config::load()? {
            Some(config) => Ok(config.math_options()),
            None => {
                log::debug!("No config file found, using default delimiters");
                Ok(MathOptions::default())
            }
        };
    };

    let config_path = Config::expand_path(path).unwrap_or_else(|| path.clone());
    log::debug!("Config path: {}", config_path.display());
    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config.math_options()),
        None => bail!("config file not found: {}", config_path.display()),
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => io::read_to_string(io::stdin()).context("Failed to read stdin"),
    }
}

/// Splits markdown into paragraphs on blank lines.
fn paragraphs(markdown: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in markdown.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join("\n"));
    }
    out
}

fn convert(parser: &InlineParser, markdown: &str) -> String {
    let mut html = String::new();
    for paragraph in paragraphs(markdown) {
        html.push_str("<p>");
        html.push_str(&render_inline(parser, &paragraph));
        html.push_str("</p>\n");
    }
    html
}

fn run() -> Result<()> {
    let args = Args::parse(env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }
    let options = load_options(args.config.as_ref())?;
    let parser = math_parser(options, KatexRenderer).context("Failed to register math rule")?;

    let markdown = read_input(args.input.as_ref())?;
    let html = convert(&parser, &markdown);

    io::stdout()
        .lock()
        .write_all(html.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        eprintln!("{USAGE}");
        process::exit(1);
    }
}
