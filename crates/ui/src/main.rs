//! Native desktop window. On wasm the library's `start` entry point is used
//! instead.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Context as _;
    use env_logger::Env;
    use folio_core::Portfolio;
    use folio_ui::PortfolioApp;

    pub fn run() -> anyhow::Result<()> {
        env_logger::Builder::from_env(Env::default().default_filter_or("info"))
            .format_timestamp_millis()
            .init();

        let portfolio = match std::env::args().nth(1) {
            Some(path) => {
                let data = std::fs::read(&path).with_context(|| format!("failed to read {path}"))?;
                folio_core::load_portfolio(&data)
                    .with_context(|| format!("failed to load portfolio from {path}"))?
            }
            None => Portfolio::builtin(),
        };

        let title = format!("{} | {}", portfolio.profile.name, portfolio.profile.title);
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(title.clone())
                .with_inner_size([1280.0, 860.0])
                .with_min_inner_size([360.0, 480.0]),
            ..Default::default()
        };

        eframe::run_native(
            &title,
            options,
            Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc, portfolio)))),
        )
        .map_err(|e| anyhow::anyhow!("eframe exited with an error: {e}"))
    }
}
