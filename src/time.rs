use hifitime::{Epoch, TimeScale};
use std::str::FromStr;

use crate::constants::MJD;

/// Transformation from a record timestamp in the format DD-MM-YYYY HH:MM:SS to
/// modified julian date (MJD)
///
/// The photometer clock is assumed to run on UTC. The timestamp is carried on the parsed
/// record for ordering but does not enter the reduction math.
///
/// Arguments
/// ---------
/// * `date`: the date field in the format DD-MM-YYYY
/// * `time`: the time field in the format HH:MM:SS
///
/// Return
/// ------
/// * a float representing the input timestamp in modified julian date (MJD),
///   or a message describing the offending field
pub fn obs_date_to_mjd(date: &str, time: &str) -> Result<MJD, String> {
    let date_parts: Vec<&str> = date.split('-').collect();
    if date_parts.len() != 3 {
        return Err("Invalid format, expected: DD-MM-YYYY".to_string());
    }
    let time_parts: Vec<&str> = time.split(':').collect();
    if time_parts.len() != 3 {
        return Err("Invalid format, expected: HH:MM:SS".to_string());
    }

    let day = u8::from_str(date_parts[0]).map_err(|_| "invalid day")?;
    let month = u8::from_str(date_parts[1]).map_err(|_| "invalid month")?;
    let year = i32::from_str(date_parts[2]).map_err(|_| "invalid year")?;

    let hour = u8::from_str(time_parts[0]).map_err(|_| "invalid hour")?;
    let minute = u8::from_str(time_parts[1]).map_err(|_| "invalid minute")?;
    let second = u8::from_str(time_parts[2]).map_err(|_| "invalid second")?;

    // maybe_from_gregorian rejects impossible calendar dates (e.g. month 13) that still
    // satisfy the two-digit grammar
    let epoch =
        Epoch::maybe_from_gregorian(year, month, day, hour, minute, second, 0, TimeScale::UTC)
            .map_err(|e| e.to_string())?;

    Ok(epoch.to_mjd_utc_days())
}
