use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Writes the report to a file when one is given, stdout otherwise.
pub struct Writer {
    pub file: Option<File>,
}

impl Writer {
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let file = match path {
            Some(p) => Some(
                File::create(&p)
                    .with_context(|| format!("Failed to create output file {}", p.display()))?,
            ),
            None => None,
        };
        Ok(Self { file })
    }

    pub fn write(&mut self, content: &str) -> Result<()> {
        match &mut self.file {
            Some(f) => {
                writeln!(f, "{}", content)?;
                f.flush()?;
                Ok(())
            }
            None => {
                println!("{}", content);
                Ok(())
            }
        }
    }
}
