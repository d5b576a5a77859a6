use crate::config::ConvertConfig;
use crate::convert::{self, Converted};
use crate::supplier::LineSupplier;
use anyhow::{Context, Result, bail};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Source and destination of one conversion
pub struct Storage {
    source: PathBuf,
    destination: PathBuf,
    overwrite: bool,
}

impl Storage {
    pub fn new(source: impl AsRef<Path>, config: &ConvertConfig) -> Result<Self> {
        let source = source.as_ref().to_path_buf();
        let destination = destination_for(&source, config)?;
        Ok(Self {
            source,
            destination,
            overwrite: config.overwrite,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Read and convert the source. The file is closed when the scan ends.
    pub fn load(&self) -> Result<Converted> {
        let file = File::open(&self.source)
            .with_context(|| format!("Failed to open {}", self.source.display()))?;
        debug!(source = %self.source.display(), "scanning source");
        let converted = convert::convert(LineSupplier::new(BufReader::new(file)))
            .with_context(|| format!("Failed to convert {}", self.source.display()))?;
        Ok(converted)
    }

    /// Write a finished conversion to the destination
    pub fn save(&self, converted: &Converted) -> Result<()> {
        let mut options = OpenOptions::new();
        if self.overwrite {
            options.write(true).create(true).truncate(true);
        } else {
            options.write(true).create_new(true);
        }
        let file = match options.open(&self.destination) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => bail!(
                "Destination {} already exists (overwrite disabled)",
                self.destination.display()
            ),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to create {}", self.destination.display()));
            }
        };
        converted
            .write_to(BufWriter::new(file))
            .with_context(|| format!("Failed to write {}", self.destination.display()))?;
        info!(
            source = %self.source.display(),
            destination = %self.destination.display(),
            file_type = %converted.file_type,
            "converted"
        );
        Ok(())
    }
}

/// Destination path: `<output_dir>/<output_prefix><source file name>`
pub fn destination_for(source: &Path, config: &ConvertConfig) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .with_context(|| format!("{} has no file name", source.display()))?;
    let mut name = config.output_prefix.clone();
    name.push_str(&file_name.to_string_lossy());
    Ok(match &config.output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    })
}

/// Convert one file and write the result; nothing is written on failure
pub fn convert_file(source: impl AsRef<Path>, config: &ConvertConfig) -> Result<PathBuf> {
    let storage = Storage::new(source, config)?;
    let converted = storage.load()?;
    storage.save(&converted)?;
    Ok(storage.destination)
}
