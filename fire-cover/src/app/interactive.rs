use super::render::OutputFormat;
use super::selector::{self, SelectorInput};
use crate::model::FireCoverCliError;
use fire_cover_core::model::ScenarioTable;
use fire_cover_core::present::{self, PageText};
use std::io::{BufRead, Write};

/// runs the selector loop. the dashboard is rendered once for the initial
/// selection and again for every accepted line of input; rejected input is
/// reported and the loop continues. ends on a quit command or end of input.
///
/// # Arguments
/// * table - scenario table built at startup
/// * page - page title and introduction
/// * initial - selector position before any interaction
/// * format - output format for each render
/// * reader - source of selector input, one value per line
/// * writer - destination of rendered dashboards
///
/// # Result
/// the number of renders written, or an error if evaluation or I/O fails
pub fn run_interactive<R, W>(
    table: &ScenarioTable,
    page: &PageText,
    initial: u32,
    format: OutputFormat,
    reader: R,
    writer: &mut W,
) -> Result<usize, FireCoverCliError>
where
    R: BufRead,
    W: Write,
{
    let mut renders = 0;
    let mut current = selector::validate_selection(initial)?;
    render(table, page, current, format, writer)?;
    renders += 1;

    for line in reader.lines() {
        let line = line?;
        match selector::parse_selection(&line) {
            Ok(SelectorInput::Quit) => break,
            Ok(SelectorInput::Select(stations)) => {
                current = stations;
                render(table, page, current, format, writer)?;
                renders += 1;
            }
            Err(e) => {
                log::debug!("rejected selector input '{line}'");
                writeln!(writer, "{e}")?;
                prompt(writer)?;
            }
        }
    }
    log::info!("interactive session ended at {current} station(s) after {renders} render(s)");
    Ok(renders)
}

fn render<W: Write>(
    table: &ScenarioTable,
    page: &PageText,
    stations: u32,
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), FireCoverCliError> {
    let view = present::evaluate(table, page, stations)?;
    writeln!(writer, "{}", format.render(&view)?)?;
    writeln!(writer)?;
    prompt(writer)
}

fn prompt<W: Write>(writer: &mut W) -> Result<(), FireCoverCliError> {
    write!(
        writer,
        "{} [{}-{}] (q to quit): ",
        present::SELECTOR_LABEL,
        ScenarioTable::MIN_STATIONS,
        ScenarioTable::MAX_STATIONS
    )?;
    writer.flush()?;
    Ok(())
}
