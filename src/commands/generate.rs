//! Generate page data for every route

use anyhow::Result;

use crate::generator::Generator;
use crate::Folio;

/// Assemble and write all routes
pub fn run(folio: &Folio) -> Result<()> {
    run_counted(folio).map(|_| ())
}

/// Same as [`run`], returning the number of routes written
pub fn run_counted(folio: &Folio) -> Result<usize> {
    let start = std::time::Instant::now();

    let generator = Generator::new(folio);
    let pages = generator.assemble()?;

    tracing::info!("Assembled {} routes", pages.len());

    generator.write(&pages)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} routes into {:?} in {:.2}s",
        pages.len(),
        folio.public_dir,
        duration.as_secs_f64()
    );

    Ok(pages.len())
}
