//! Argument parsing and the render command.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tagtint_render::{OutputMode, Renderer};
use tagtint_scanner::Token;
use tracing::debug;

/// Render #color[...] markup to styled terminal output.
#[derive(Debug, Parser)]
#[command(name = "tagtint", version, about)]
pub struct Cli {
    /// Text to render. Read from stdin when omitted.
    pub text: Option<String>,

    /// JSON or YAML file used as template data. Enables the template pass.
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Character that introduces a tag.
    #[arg(long, default_value_t = '#')]
    pub marker: char,

    /// Character that opens a tag body.
    #[arg(long, default_value_t = '[')]
    pub start: char,

    /// Character that closes a tag body.
    #[arg(long, default_value_t = ']')]
    pub end: char,

    /// When to emit ANSI escape codes.
    #[arg(short, long, value_enum, default_value_t = OutputArg::Auto, env = "TAGTINT_OUTPUT")]
    pub output: OutputArg,

    /// Print the scanned tokens instead of the rendered text.
    #[arg(long)]
    pub tokens: bool,

    /// Do not append a trailing newline.
    #[arg(short = 'n', long)]
    pub no_newline: bool,

    /// Log filter (e.g. `debug`, `tagtint_scanner=trace`).
    #[arg(long, default_value = "warn", env = "TAGTINT_LOG")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Auto,
    Term,
    Text,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Auto => OutputMode::Auto,
            OutputArg::Term => OutputMode::Term,
            OutputArg::Text => OutputMode::Text,
        }
    }
}

impl Cli {
    /// Builds the renderer described by the arguments.
    pub fn renderer(&self) -> Result<Renderer> {
        let mut renderer = Renderer::new()
            .with_tag_marker(self.marker)
            .with_delimiters(self.start, self.end)
            .with_output(self.output.into());

        if let Some(path) = &self.data {
            let data = load_data(path)?;
            renderer = renderer
                .with_context(&data)
                .context("attaching template data")?;
        }
        Ok(renderer)
    }
}

/// Runs the command, reading from `input` when no text argument was given.
pub fn run<R: Read, W: Write>(cli: &Cli, mut input: R, out: &mut W) -> Result<()> {
    let text = match &cli.text {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            input
                .read_to_string(&mut buf)
                .context("reading text from stdin")?;
            buf
        }
    };
    debug!(len = text.len(), "rendering input");

    let renderer = cli.renderer()?;

    if cli.tokens {
        for token in renderer.tokens(&text).context("scanning markup")? {
            writeln!(out, "{}", describe_token(&token))?;
        }
        return Ok(());
    }

    let mut rendered = renderer.render(&text).context("rendering markup")?;
    if !cli.no_newline && !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// One line per token: the style's tag names (`-` when unstyled, `()` for a
/// tag with no recognized names), a tab, then the quoted text.
fn describe_token(token: &Token) -> String {
    let style = match &token.style {
        None => "-".to_string(),
        Some(style) if style.is_plain() => "()".to_string(),
        Some(style) => style.to_string(),
    };
    format!("{}\t{:?}", style, token.text)
}

fn load_data(path: &Path) -> Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let value = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("parsing YAML data in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("parsing JSON data in {}", path.display()))?
    };
    Ok(value)
}
