use std::io;

use anyhow::Result;

use rusty_stats::app::StatsApp;
use rusty_stats::config;
use rusty_stats::ui;

fn main() -> Result<()> {
    env_logger::init();

    let config = config::load_config()?;
    log::debug!("{config:?}");

    let renderer = ui::renderer_from_config(&config.histogram);
    let mut app = StatsApp::new(io::stdin().lock(), io::stdout(), renderer)
        .with_bins(config.histogram.bins)
        .with_precision(config.display.precision);
    if config.session.browse {
        app = app.with_picker(Box::new(ui::pick_data_file));
    }

    app.run()?;
    Ok(())
}
