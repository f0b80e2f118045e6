// Interactive console - one recompute per command
use crate::application::chart_service::ChartService;
use crate::domain::view::{UnknownViewMode, ViewEvent, ViewMode, ViewState};
use crate::presentation::report::{OutputFormat, write_snapshot};
use std::io::{BufRead, Write};
use thiserror::Error;

const HELP: &str = "commands: mode <compressed|relative|absolute>, from <hours>, to <hours>, reset, show, help, quit";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Event(ViewEvent),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("`{0}` is not a number of hours")]
    InvalidHours(String),

    #[error(transparent)]
    Mode(#[from] UnknownViewMode),
}

fn hours(arg: Option<&str>, command: &'static str) -> Result<f64, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(command))?;
    arg.parse::<f64>()
        .ok()
        .filter(|h| h.is_finite())
        .ok_or_else(|| CommandError::InvalidHours(arg.to_string()))
}

pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let command = match word {
        "mode" | "m" => {
            let mode: ViewMode = arg.ok_or(CommandError::MissingArgument("mode"))?.parse()?;
            Command::Event(ViewEvent::SetMode(mode))
        }
        "from" | "f" => Command::Event(ViewEvent::SetFrom(hours(arg, "from")?)),
        "to" | "t" => Command::Event(ViewEvent::SetTo(hours(arg, "to")?)),
        "reset" | "r" => Command::Event(ViewEvent::Reset),
        "show" | "s" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Reads commands until `quit` or end of input. The view shown after each
/// event is the corrected one, so out-of-order bounds snap back immediately.
pub fn run<R: BufRead, W: Write>(
    service: &ChartService,
    initial: ViewState,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let defaults = service.default_view();
    let mut snapshot = service.snapshot(initial);
    write_snapshot(&mut output, &snapshot, format)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(output, "{}", HELP)?,
            Ok(Some(Command::Show)) => write_snapshot(&mut output, &snapshot, format)?,
            Ok(Some(Command::Event(event))) => {
                let view = snapshot.view.apply(event, &defaults);
                snapshot = service.snapshot(view);
                write_snapshot(&mut output, &snapshot, format)?;
            }
            Err(e) => {
                tracing::debug!("Rejected console input {:?}: {}", line, e);
                writeln!(output, "error: {}", e)?;
            }
        }
        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::FixedClock;
    use crate::application::sample_store::SampleStore;
    use crate::infrastructure::config::ChartSettings;
    use std::io::Cursor;

    fn service() -> ChartService {
        let raw: String = (0..7)
            .map(|i| format!("{}\t{}\tdischarging\n", 1_700_000_000 + i * 600, 90 - i))
            .collect();
        let settings = ChartSettings::default();
        let store = SampleStore::load(&raw, settings.max_gap_secs()).unwrap();
        ChartService::new(store, settings, Box::new(FixedClock(1_700_003_600.0)))
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(
            parse_command("mode absolute"),
            Ok(Some(Command::Event(ViewEvent::SetMode(ViewMode::Absolute))))
        );
        assert_eq!(
            parse_command("from 1.5"),
            Ok(Some(Command::Event(ViewEvent::SetFrom(1.5))))
        );
        assert_eq!(parse_command("t 24"), Ok(Some(Command::Event(ViewEvent::SetTo(24.0)))));
        assert_eq!(parse_command("reset"), Ok(Some(Command::Event(ViewEvent::Reset))));
        assert_eq!(parse_command("q"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_parse_command_errors() {
        assert_eq!(parse_command("zoom"), Err(CommandError::Unknown("zoom".to_string())));
        assert_eq!(parse_command("from"), Err(CommandError::MissingArgument("from")));
        assert_eq!(parse_command("to soon"), Err(CommandError::InvalidHours("soon".to_string())));
        assert!(matches!(parse_command("mode sideways"), Err(CommandError::Mode(_))));
    }

    #[test]
    fn test_each_event_recomputes() {
        let service = service();
        let input = Cursor::new("mode relative\nfrom 13\nbogus\nreset\nquit\nshow\n");
        let mut output = Vec::new();
        run(&service, service.default_view(), input, &mut output, OutputFormat::Text).unwrap();
        let text = String::from_utf8(output).unwrap();

        // initial view, mode, from, reset; nothing after quit
        assert_eq!(text.matches(" points\n").count(), 4);
        assert!(text.contains("[relative]"));
        assert!(text.contains("error: unknown command `bogus`"));
        assert!(text.contains("-13.1h .. -13.0h"));
    }

    #[test]
    fn test_json_lines() {
        let service = service();
        let input = Cursor::new("to 2\n");
        let mut output = Vec::new();
        run(&service, service.default_view(), input, &mut output, OutputFormat::Json).unwrap();
        let text = String::from_utf8(output).unwrap();

        let last: serde_json::Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();
        assert_eq!(last["to_hours"], 2.0);
        assert_eq!(last["trend"]["kind"], "trend");
    }
}
