use std::io::{self, Write};

use huizen_common::config::Config;
use huizen_common::models::house::House;
use huizen_core::{catalog, report};
use tracing::info;

/// Prints the report blocks to stdout, in catalog order.
pub fn report(house: Option<String>, cfg: &Config) -> anyhow::Result<()> {
    if let Some(name) = house {
        let house: House = catalog::find(&name, cfg)?;
        report::show_details(&house)?;
        info!("Reported house '{}'", house.name());
        return Ok(());
    }

    let houses: Vec<House> = catalog::houses(cfg)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_all(&houses, &mut out)?;
    out.flush()?;

    info!("Reported {} house(s)", houses.len());
    Ok(())
}
