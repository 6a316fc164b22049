//! `recipe-api categories`: dietary flags ranked by recipe count.

use anyhow::Result;

use super::{connect, listing::render_top_counts};
use crate::config::Config;
use crate::display::Printer;

pub async fn run(config: &Config, printer: &mut Printer<'_>) -> Result<()> {
    printer.header("Dietary Flags")?;

    let client = connect(config)?;
    let flags = client.dietary_flags().await?.data;

    printer.line(format!("Found {} dietary options:\n", flags.len()))?;
    render_top_counts(printer, flags, |flag| {
        format!("{} ({} recipes)", flag.name, flag.count)
    })?;

    printer.divider()?;
    printer.line("\n>> Next step: Run `recipe-api cuisines` to see available cuisines\n")?;
    Ok(())
}
