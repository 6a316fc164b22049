//! `recipe-api cuisines`: every cuisine with a bar chart of its recipe count.

use anyhow::Result;

use super::connect;
use crate::config::Config;
use crate::display::{
    format::{count_bar, sort_by_count_desc},
    Printer,
};

const NAME_COLUMN: usize = 20;

pub async fn run(config: &Config, printer: &mut Printer<'_>) -> Result<()> {
    printer.header("Cuisines")?;

    let client = connect(config)?;
    let mut cuisines = client.cuisines().await?.data;

    printer.line(format!("Found {} cuisines:\n", cuisines.len()))?;

    sort_by_count_desc(&mut cuisines, |cuisine| cuisine.count);
    for cuisine in &cuisines {
        printer.line(format!(
            "  {:<width$} {} {}",
            cuisine.name,
            count_bar(cuisine.count),
            cuisine.count,
            width = NAME_COLUMN
        ))?;
    }

    printer.divider()?;
    printer.line("\n>> Next step: Run `recipe-api browse` to see recipes\n")?;
    Ok(())
}
