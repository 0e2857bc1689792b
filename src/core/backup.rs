//! Backup of the SQLite state store: a plain file copy, or a single-entry
//! zip archive when compression is requested.

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::oplog;
use rusqlite::Connection;
use std::fs;
use std::io;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the state store to `dest_file`. An existing destination is only
    /// overwritten with `force`.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("database not found: {}", src.display()),
            )
            .into());
        }
        if dest.exists() && !force {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!(
                    "backup destination '{}' already exists (use --force to overwrite)",
                    dest.display()
                ),
            )
            .into());
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if compress {
            write_zip(src, dest)?;
        } else {
            fs::copy(src, dest)?;
        }

        if let Ok(conn) = Connection::open(src) {
            let _ = oplog(
                &conn,
                "backup",
                dest_file,
                if compress {
                    "Backup created (compressed)"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(())
    }
}

/// Write `src` as the single entry of a zip archive at `dest`. The entry
/// keeps the database file name so an unzip restores it as-is.
fn write_zip(src: &Path, dest: &Path) -> AppResult<()> {
    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "state.sqlite".to_string());

    let mut zip = ZipWriter::new(fs::File::create(dest)?);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    zip.start_file(entry, options).map_err(io::Error::other)?;

    let mut reader = fs::File::open(src)?;
    io::copy(&mut reader, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}
