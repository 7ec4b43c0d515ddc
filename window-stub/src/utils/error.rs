use std::error::Error as StdError;
use std::fmt::{Formatter, Write};
use std::panic::Location;

use eyre::{Chain, EyreHandler};
use tracing_error::SpanTrace;

pub struct ReportHandler {
    spantrace: Option<SpanTrace>,
    location: Option<&'static Location<'static>>
}

impl EyreHandler for ReportHandler {
    fn debug(&self, error: &(dyn StdError + 'static), f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            return core::fmt::Debug::fmt(error, f);
        }

        write!(f, "{}", error)?;

        let causes: Vec<_> = Chain::new(error).skip(1).collect();
        if !causes.is_empty() {
            write!(f, "\n\nCaused by:")?;
            for (n, cause) in causes.iter().enumerate() {
                writeln!(f)?;
                write!(indenter::indented(f).ind(n), "{}", cause)?;
            }
        }

        if let Some(location) = self.location {
            write!(f, "\n\nLocation:\n")?;
            write!(indenter::indented(f), "{}", location)?;
        }

        if let Some(spantrace) = self.spantrace.as_ref().filter(|s| s.status() == tracing_error::SpanTraceStatus::CAPTURED) {
            write!(f, "\n\nSpan Trace:\n")?;
            write!(f, "{}", spantrace)?;
        }

        Ok(())
    }

    fn track_caller(&mut self, location: &'static Location<'static>) {
        self.location = Some(location)
    }
}

/// Reports every `eyre::Report` with its cause chain, the location it was created at and the active spans.
pub fn set_eyre_hook() -> eyre::Result<()> {
    eyre::set_hook(Box::new(move |_| {
        Box::new(ReportHandler {
            spantrace: Some(SpanTrace::capture()),
            location: None
        })
    }))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use super::*;

    #[derive(Debug)]
    struct Outer(Inner);
    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("could not bring up the window")
        }
    }
    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("class already exists")
        }
    }
    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }
    impl StdError for Inner {}

    struct Render<'a>(&'a ReportHandler, &'a Outer);

    impl fmt::Display for Render<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.debug(self.1, f)
        }
    }

    #[test]
    fn report_lists_causes_and_location() {
        let mut handler = ReportHandler { spantrace: None, location: None };
        handler.track_caller(Location::caller());
        let text = Render(&handler, &Outer(Inner)).to_string();
        assert!(text.starts_with("could not bring up the window\n\nCaused by:\n"));
        assert!(text.contains("class already exists"));
        assert!(text.contains("Location:"));
        assert!(!text.contains("Span Trace:"));
    }
}
