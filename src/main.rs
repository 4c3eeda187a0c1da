use anyhow::{bail, Context, Result};
use clap::Parser;

use restroom_locator::cli::{Cli, Format};
use restroom_locator::render;
use restroom_locator::{
    load_file, normalize, query_nearest, sample_table, AliasTable, CoordinateInput, DistrictTable,
    FacilityRecord, LocationResolver,
};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let raw = match &cli.file {
        Some(path) => load_file(path)?,
        None => {
            log::info!("No data file given, using the built-in sample");
            sample_table()
        }
    };
    let dataset =
        normalize(&raw, &AliasTable::default()).context("normalizing facility table")?;

    let reference = match (&cli.location.at, &cli.location.district) {
        (Some(at), _) => CoordinateInput.resolve(at)?,
        (None, Some(district)) => DistrictTable.resolve(district)?,
        (None, None) => bail!("either --at or --district is required"),
    };

    let filter = cli.filter();
    let matches = |record: &FacilityRecord| filter.matches(record);
    let predicate = filter
        .is_active()
        .then_some(&matches as &dyn Fn(&FacilityRecord) -> bool);

    let results = query_nearest(&dataset, reference, cli.count, predicate)?;

    match cli.format {
        Format::Table => {
            println!(
                "{}",
                render::summary(reference, dataset.report(), results.len())
            );
            if results.is_empty() {
                println!("No matching facilities.");
            } else {
                print!("{}", render::text_table(&results));
            }
        }
        Format::Json => {
            println!(
                "{}",
                render::json(reference, dataset.report(), &results)
                    .context("serializing results")?
            );
        }
    }

    Ok(())
}
