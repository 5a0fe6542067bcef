use std::fs::File;
use std::io::{self, prelude::*, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Where derived matches are written. A file is only created, or truncated,
/// once the first match is ready.
pub struct Output {
    path: Option<PathBuf>,
    writer: Option<Box<dyn Write>>,
}

impl Output {
    /// `None`, `-` and the empty path all mean stdout.
    pub fn new(out_file: Option<PathBuf>) -> Self {
        let path = out_file.filter(|p| p.as_os_str() != "-" && !p.as_os_str().is_empty());
        Self { path, writer: None }
    }

    pub fn writer(&mut self) -> Result<&mut Box<dyn Write>> {
        let writer = match self.writer.take() {
            Some(w) => w,
            None => self.open()?,
        };
        Ok(self.writer.insert(writer))
    }

    #[inline]
    pub fn is_opened(&self) -> bool {
        self.writer.is_some()
    }

    pub fn finish(self) -> Result<()> {
        if let Some(mut w) = self.writer {
            w.flush().context("failed to flush output")?;
        }
        Ok(())
    }

    fn open(&self) -> Result<Box<dyn Write>> {
        let writer: Box<dyn Write> = match &self.path {
            Some(path) => Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("failed to create output file {path:?}"))?,
            )),
            None => Box::new(io::stdout().lock()),
        };
        Ok(writer)
    }
}
