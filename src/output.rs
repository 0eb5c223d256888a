//! Writing generated units to disk.

use crate::codegen::GeneratedUnit;
use std::io;
use std::path::Path;

/// Write every unit below `out_dir`, creating directories as needed.
/// Returns the number of files written.
pub fn write_units(out_dir: &Path, units: &[GeneratedUnit]) -> io::Result<usize> {
    for unit in units {
        let path = out_dir.join(&unit.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &unit.source)?;
        tracing::info!(path = %path.display(), "wrote");
    }
    Ok(units.len())
}
