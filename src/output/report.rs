//! Distance report
//!
//! Sorting ranked providers and rendering them as plain-text blocks.

use crate::provider::RankedProvider;
use std::io::{self, Write};

/// Line closing every provider block
pub const SEPARATOR: &str = "===================================";

/// Sorts providers nearest first
///
/// The sort is stable, so providers at the same distance keep their listing order.
pub fn sort_by_proximity(providers: &mut [RankedProvider]) {
    providers.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
}

/// Writes one block per provider, followed by a blank line
///
/// # Format
///
/// ```text
/// name: <name>
/// phone number: <phone>
/// address: <address>
/// distance: <distance in km>
/// ===================================
///
/// ```
pub fn write_report<W: Write>(out: &mut W, providers: &[RankedProvider]) -> io::Result<()> {
    for ranked in providers {
        writeln!(out, "name: {}", ranked.provider.name)?;
        writeln!(out, "phone number: {}", ranked.provider.phone)?;
        writeln!(out, "address: {}", ranked.provider.address)?;
        writeln!(out, "distance: {}", ranked.distance_km)?;
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Prints the report to stdout
pub fn print_report(providers: &[RankedProvider]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, providers)?;
    out.flush()
}
