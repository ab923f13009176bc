use std::io::Write;

use thiserror::Error;

use crate::timing::Transition;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl Format {
    pub fn write(
        &self,
        w: &mut impl Write,
        events: impl IntoIterator<Item = Transition>,
    ) -> Result<(), ReportError> {
        match self {
            Format::Text => write_text(w, events)?,
            Format::Json => write_json(w, events)?,
        }
        Ok(())
    }
}

pub fn write_text(
    w: &mut impl Write,
    events: impl IntoIterator<Item = Transition>,
) -> std::io::Result<()> {
    for t in events {
        writeln!(w, "{t}")?;
    }
    Ok(())
}

pub fn write_json(
    w: &mut impl Write,
    events: impl IntoIterator<Item = Transition>,
) -> Result<(), ReportError> {
    let events = events.into_iter().collect::<Vec<_>>();
    serde_json::to_writer_pretty(&mut *w, &events)?;
    writeln!(w)?;
    Ok(())
}
