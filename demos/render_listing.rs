use std::error::Error;

use userlisting::config::ListingConfig;
use userlisting::output::{self, OutputFormat};
use userlisting::pager::RequestPager;
use userlisting::widget::ListingWidget;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = ListingConfig {
        api_url: "https://reqres.in/api/users".to_string(),
        items_per_page: 4,
        ..ListingConfig::default()
    };
    let widget = ListingWidget::new(config)?;

    let mut pager = RequestPager::from_query("page=0");
    let result = widget.render(&mut pager);

    print!(
        "{}",
        String::from_utf8_lossy(&output::render(&result, OutputFormat::Text))
    );
    println!("total pages: {}", pager.total_pages());
    Ok(())
}
