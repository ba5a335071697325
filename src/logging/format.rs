//! Line format shared by every sink.

use std::fmt;

use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `2024-01-01 12:00:00 - kalshibot::app - INFO - message key=value`
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} - {} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            meta.target(),
            level_name(*meta.level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::logging::RotatingFile;

    fn capture(emit: impl FnOnce()) -> String {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = Arc::new(RotatingFile::open(dir.path().join("fmt.log"), 0, 0).expect("open"));
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .event_format(LineFormat)
            .with_writer(file.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, emit);
        std::fs::read_to_string(file.path()).expect("read log")
    }

    #[test]
    fn renders_timestamp_target_level_message() {
        let out = capture(|| tracing::warn!(target: "scanner", "market stale"));
        let line = out.lines().next().expect("one line");

        let (timestamp, rest) = line.split_at("2024-01-01 12:00:00".len());
        assert!(chrono::NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(rest, " - scanner - WARNING - market stale");
    }

    #[test]
    fn appends_structured_fields() {
        let out = capture(|| tracing::info!(target: "bot", bankroll = 50.0, "starting"));
        assert!(out.trim_end().ends_with(" - bot - INFO - starting bankroll=50.0"), "{out}");
    }

    #[test]
    fn one_line_per_event() {
        let out = capture(|| {
            tracing::error!(target: "a", "one");
            tracing::info!(target: "b", "two");
        });
        assert_eq!(out.lines().count(), 2);
    }
}
