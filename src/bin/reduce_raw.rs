use std::env;
use std::process::ExitCode;

use camino::Utf8Path;
use photfit::stars::display::StarResultsDisplayExt;
use photfit::{ObservationSet, PhotfitError, ReductionParams, StarFit};

/// Reduce one raw photometer log and print the per-star results table.
///
/// Arguments
/// ---------
/// * `path`: path to the `.raw` file
/// * `clip_sky`: apply the sigma clip to the sky series as well
///
/// Return
/// ------
/// * `Ok(())` after printing the table, or the fatal [`PhotfitError`] of the run
fn run(path: &Utf8Path, clip_sky: bool) -> Result<(), PhotfitError> {
    let params = ReductionParams::builder().clip_sky(clip_sky).build()?;
    let set = ObservationSet::new_from_raw(path)?;

    log::info!(
        "{}: {} stars, {} records, {} sky B / {} sky V measurements",
        path,
        set.stars.len(),
        set.stars.total_records(),
        set.sky.b.len(),
        set.sky.v.len()
    );

    let results = set.reduce_all_stars(&params);
    println!("{}", results.show().sorted());
    Ok(())
}

/// Minimal driver: reduce one photometer log file once.
/// Usage:
///   reduce_raw <FILE.raw> [--clip-sky]
/// Example:
///   reduce_raw content/Procyon.raw --clip-sky
fn main() -> ExitCode {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.start())
        .ok();

    let mut args = env::args().skip(1).collect::<Vec<_>>();
    let clip_sky = if let Some(pos) = args.iter().position(|a| a == "--clip-sky") {
        args.remove(pos);
        true
    } else {
        false
    };

    let Some(path) = args.first() else {
        eprintln!("Usage: reduce_raw <FILE.raw> [--clip-sky]");
        return ExitCode::from(2);
    };

    // single recovery point for every fatal pipeline error
    match run(Utf8Path::new(path), clip_sky) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
