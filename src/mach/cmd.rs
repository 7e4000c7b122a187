use super::Console;
use crate::error;
use crate::lang::Error;
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, Error>;

/// ## External command table
///
/// The OS-effecting primitives behind `dir`, `del`, `copy`, `mkdir`,
/// `move` and `ren`. Each one prints its outcome through the console and
/// maps failures into script errors for the runtime to report; none of
/// them can stop the script.

pub fn dir(console: &mut dyn Console, path: &str, recursive: bool) -> Result<()> {
    let path = Path::new(path);
    if recursive {
        walk(console, path)
    } else {
        for entry in read_sorted(path)? {
            console.print(&entry.file_name().to_string_lossy());
        }
        Ok(())
    }
}

/// Listings print in name order so the same tree always reads the same.
fn read_sorted(path: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries: Vec<_> = fs::read_dir(path)
        .map_err(|e| io_error(path, e))?
        .collect::<std::io::Result<_>>()
        .map_err(|e| io_error(path, e))?;
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}

/// Depth-first walk printing file paths, directories themselves omitted.
fn walk(console: &mut dyn Console, path: &Path) -> Result<()> {
    for entry in read_sorted(path)? {
        let entry_path = entry.path();
        if entry_path.is_dir() {
            walk(console, &entry_path)?;
        } else {
            console.print(&entry_path.display().to_string());
        }
    }
    Ok(())
}

pub fn del(console: &mut dyn Console, path: &str) -> Result<()> {
    if !Path::new(path).exists() {
        return Err(error!(FileNotFound; path.to_string()));
    }
    fs::remove_file(path).map_err(|e| io_error(Path::new(path), e))?;
    console.print(&format!("Deleted: {}", path));
    Ok(())
}

pub fn copy(console: &mut dyn Console, src: &str, dst: &str) -> Result<()> {
    fs::copy(src, dst).map_err(|e| io_error(Path::new(src), e))?;
    console.print(&format!("Copied {} to {}", src, dst));
    Ok(())
}

pub fn mkdir(console: &mut dyn Console, path: &str) -> Result<()> {
    if Path::new(path).exists() {
        return Err(error!(FileExists; path.to_string()));
    }
    fs::create_dir_all(path).map_err(|e| io_error(Path::new(path), e))?;
    console.print(&format!("Directory created: {}", path));
    Ok(())
}

pub fn mv(console: &mut dyn Console, src: &str, dst: &str) -> Result<()> {
    fs::rename(src, dst).map_err(|e| io_error(Path::new(src), e))?;
    console.print(&format!("Moved {} to {}", src, dst));
    Ok(())
}

pub fn ren(console: &mut dyn Console, old: &str, new: &str) -> Result<()> {
    fs::rename(old, new).map_err(|e| io_error(Path::new(old), e))?;
    console.print(&format!("Renamed {} to {}", old, new));
    Ok(())
}

fn io_error(path: &Path, error: std::io::Error) -> Error {
    if error.kind() == std::io::ErrorKind::NotFound {
        error!(FileNotFound; path.display().to_string())
    } else {
        error!(FileError; format!("{}: {}", path.display(), error))
    }
}
