//! Atomic report writes: no torn JSON if a run is interrupted mid-write.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub fn atomic_write(dest: impl AsRef<Path>, bytes: impl AsRef<[u8]>) -> io::Result<()> {
    let dest = dest.as_ref();
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => {
            fs::create_dir_all(p)?;
            p
        }
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes.as_ref())?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}
