use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tokio::fs::File as TokioFile;
use tokio::io::{AsyncWriteExt, BufWriter as TokioBufWriter};
use tracing::{error, info};

use crate::error::Result;
use crate::models::ResultDocument;

/// Writes the result document as 4-space indented UTF-8 JSON.
pub struct JsonExporter {
    path: PathBuf,
}

impl JsonExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Export and report success as a flag; failures are logged, not raised.
    pub async fn export(&self, document: &ResultDocument) -> bool {
        match self.write(document).await {
            Ok(()) => {
                info!(
                    path = %self.path.display(),
                    restaurants = document.restaurants.len(),
                    "Data successfully exported"
                );
                true
            }
            Err(e) => {
                error!(
                    path = %self.path.display(),
                    error = %e,
                    "Error exporting data to JSON"
                );
                false
            }
        }
    }

    pub async fn write(&self, document: &ResultDocument) -> Result<()> {
        let json = to_pretty_json(document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let file = TokioFile::create(&self.path).await?;
        let mut writer = TokioBufWriter::new(file);
        writer.write_all(&json).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;

        Ok(())
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(buf)
}
