use std::{
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

/// Destination of the document a command produces.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Opens `path` for writing, or stdout when no path is given.
    pub fn create(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Output::Stdout(io::stdout().lock()));
        };
        let file = File::create(&path)
            .with_context(|| format!("Cannot create {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn destination(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    /// Writes a whole SVG or HTML document, ending it with a newline.
    pub fn document(mut self, text: &str) -> anyhow::Result<()> {
        let text = text.trim_end();
        writeln!(self, "{text}")
            .with_context(|| format!("Cannot write document to {}", self.destination()))?;
        self.finish()
    }

    pub fn json<T>(self, value: &T) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        let text = serde_json::to_string_pretty(value).context("Cannot encode JSON")?;
        self.document(&text)
    }

    pub fn finish(mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Cannot flush {}", self.destination()))?;
        if let Output::File { path, .. } = &self {
            tracing::info!(path = %path.display(), "output written");
        }
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(writer) => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(writer) => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json<T>(path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid JSON in {}", path.display()))
}
