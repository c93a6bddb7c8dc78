mod renderer;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use env_logger::Env;
use folio_core::{PageState, Portfolio};
use folio_protocol::ThemeMode;

const USAGE: &str = "Usage: folio [--html <out.html>] [--dark] [content.json]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    /// Write the static page here instead of opening the terminal view.
    html: Option<PathBuf>,
    dark: bool,
    content: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--html" => {
                let Some(path) = args.next() else {
                    bail!("--html needs an output path\n{USAGE}");
                };
                parsed.html = Some(PathBuf::from(path));
            }
            "--dark" => parsed.dark = true,
            "-h" | "--help" => bail!("{USAGE}"),
            flag if flag.starts_with('-') => bail!("unknown option {flag}\n{USAGE}"),
            path => {
                if parsed.content.is_some() {
                    bail!("more than one content file given\n{USAGE}");
                }
                parsed.content = Some(PathBuf::from(path));
            }
        }
    }
    Ok(parsed)
}

fn load(path: Option<&Path>) -> Result<Portfolio> {
    let Some(path) = path else {
        return Ok(Portfolio::builtin());
    };
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let portfolio = folio_core::load_portfolio(&data)
        .with_context(|| format!("failed to load portfolio from {}", path.display()))?;
    log::info!("loaded portfolio content from {}", path.display());
    Ok(portfolio)
}

fn main() -> Result<()> {
    // Log records would tear the alternate screen, so only warnings by default.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let portfolio = load(args.content.as_deref())?;
    let theme = if args.dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    };

    if let Some(out) = &args.html {
        let html = folio_core::html::export_page(&portfolio, theme);
        std::fs::write(out, html).with_context(|| format!("failed to write {}", out.display()))?;
        log::info!("wrote {}", out.display());
        return Ok(());
    }

    let mut page = PageState {
        theme,
        ..PageState::new()
    };
    renderer::render_tui(&portfolio, &mut page)
}
