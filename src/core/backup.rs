use crate::config::DataPaths;
use crate::errors::AppResult;
use crate::store::log::ttlog;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the ledger to `dest_file`, optionally as a zip archive.
    /// Returns the path of the file actually written, or `None` if the user
    /// declined to overwrite an existing destination.
    pub fn backup(paths: &DataPaths, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let src = paths.ledger.as_path();
        let dest = Path::new(dest_file);

        // 1️⃣ Check ledger exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Ledger not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ If destination file exists → ask confirmation
        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if final_target.exists() && !confirm_overwrite(&final_target)? {
            warning("Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy ledger, or zip it straight into the archive
        let final_path = if compress {
            let entry_name = dest
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "data.csv".to_string());
            compress_backup(src, &final_target, &entry_name)?;
            success(format!("Backup created: {}", final_target.display()));
            final_target
        } else {
            fs::copy(src, dest)?;
            success(format!("Backup created: {}", dest.display()));
            dest.to_path_buf()
        };

        // 5️⃣ Activity log
        if let Err(e) = ttlog(
            &paths.log,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(Some(final_path))
    }
}

fn confirm_overwrite(path: &Path) -> AppResult<bool> {
    warning(format!(
        "The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
        path.display()
    ));

    let mut answer = String::new();
    print!("> ");
    io::stdout().flush().ok();
    io::stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Write `src` into a new zip archive at `zip_path` as `entry_name`.
/// The plain `--file` path is never touched.
fn compress_backup(src: &Path, zip_path: &Path, entry_name: &str) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(())
}
