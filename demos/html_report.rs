use std::error::Error;
use std::fs;

use userlisting::config::{default_config_path, ensure_default_config_file, load_config};
use userlisting::output::{self, OutputFormat};
use userlisting::widget::ListingWidget;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config_path = default_config_path().ok_or("could not resolve a home directory")?;
    ensure_default_config_file(&config_path)?;
    let config = load_config(&config_path, true)?.into_config();

    let widget = ListingWidget::new(config)?;
    let result = widget.render_at(0);

    fs::write("listing.html", output::render(&result, OutputFormat::Html))?;
    println!("wrote listing.html");
    Ok(())
}
