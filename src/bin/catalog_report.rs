use colored::Colorize;
use compound_catalog::catalog::Catalog;
use compound_catalog::infer::infer;
use compound_catalog::reference_data;
use compound_catalog::speculate::speculate;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Writes catalog log records to stderr, tagged by level.
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let tag = match record.level() {
                Level::Error => "error".red().bold(),
                Level::Warn => "warn".yellow().bold(),
                Level::Info => "info".blue(),
                Level::Debug | Level::Trace => "debug".dimmed(),
            };
            eprintln!("{} {}", tag, record.args());
        }
    }

    fn flush(&self) {}
}

/// `-v` / `--verbose` also shows how each compound was completed.
fn init_logger(verbose: bool) -> Result<(), SetLoggerError> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let verbose = std::env::args().skip(1).any(|arg| arg == "-v" || arg == "--verbose");
    init_logger(verbose)?;

    let sources = reference_data::sources()?;
    let catalog = Catalog::build(&sources)?;

    println!("{}", "Compound catalog".bold());
    println!(
        "  {:<16} {:>10} {:>9} {:>8} {:>9} {:>12}  {}",
        "compound", "M g/mol", "Tc K", "ω", "Tt K", "Lv kJ/kg", "borrowed from"
    );

    let mut implausible_total = 0;
    for (id, record) in catalog.iter() {
        let borrowed = speculate(&infer(&sources.compound(id))).missing_fields().len();
        let fallback = match sources.borrows_from.get(id) {
            Some(parent) => format!("{} ({} fields)", parent, borrowed),
            None => "root".to_string(),
        };
        println!(
            "  {:<16} {:>10.3} {:>9.2} {:>8.4} {:>9.3} {:>12.1}  {}",
            id.as_str().cyan(),
            record.molar_mass * 1e3,
            record.critical_point_temperature,
            record.acentric_factor,
            record.triple_point_temperature,
            record.latent_heat_of_vaporization / 1e3,
            fallback.dimmed()
        );

        let implausible = record.implausible_fields();
        for field in &implausible {
            println!("    {} {}", "implausible".red().bold(), field);
        }
        implausible_total += implausible.len();
    }

    if implausible_total == 0 {
        println!("{} every field within its plausible range", "ok".green().bold());
    } else {
        println!("{} {} implausible fields", "warning:".yellow().bold(), implausible_total);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_logger_shows_completion_details() {
        init_logger(true).unwrap();
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert!(log::log_enabled!(Level::Debug));
        assert!(init_logger(false).is_err(), "a second logger must be refused");
    }
}
