use std::path::{Path, PathBuf};

use crate::model::FireCoverCliError;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), FireCoverCliError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath).map_err(|e| {
            let msg = format!(
                "error building output directory '{}': {e}",
                dirspath.to_str().unwrap_or_default()
            );
            FireCoverCliError::ConfigurationError(msg)
        })
    } else {
        Ok(())
    }
}

/// writes a file into a directory, refusing to replace an existing file unless
/// `overwrite` is set.
pub fn write_file(
    directory: &Path,
    filename: &str,
    contents: &[u8],
    overwrite: bool,
) -> Result<PathBuf, FireCoverCliError> {
    create_dirs(directory)?;
    let filepath = directory.join(filename);
    if filepath.exists() && !overwrite {
        return Err(FireCoverCliError::ConfigurationError(format!(
            "file '{}' already exists, rerun with overwrite enabled to replace it",
            filepath.to_string_lossy()
        )));
    }
    std::fs::write(&filepath, contents)?;
    Ok(filepath)
}

#[cfg(test)]
mod tests {
    use super::write_file;

    #[test]
    fn test_write_file_respects_overwrite() {
        let dir = std::env::temp_dir()
            .join("fire_cover_test_write_file")
            .join("nested");
        let _ = std::fs::remove_dir_all(&dir);
        let path = write_file(&dir, "out.csv", b"a,b\n", false).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"a,b\n");
        assert!(write_file(&dir, "out.csv", b"c,d\n", false).is_err());
        write_file(&dir, "out.csv", b"c,d\n", true).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"c,d\n");
    }
}
