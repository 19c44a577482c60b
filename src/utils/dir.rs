use std::{env, io, path::PathBuf};

use anyhow::{Context, Result};

const APPLICATION_DIR_NAME: &str = "mymusictime";

/// Directory holding namespace files and logs. Created when missing.
pub fn create_application_default_path() -> Result<PathBuf> {
    let path = default_application_path()?;
    create_application_path(path)
}

pub fn create_application_path(path: PathBuf) -> Result<PathBuf> {
    match std::fs::create_dir_all(&path) {
        Ok(_) => Ok(path),
        Err(v) if v.kind() == io::ErrorKind::AlreadyExists => Ok(path),
        Err(v) => Err(v).with_context(|| format!("Can't create application directory {path:?}")),
    }
}

fn default_application_path() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let mut path = PathBuf::from(
            env::var("APPDATA").context("APPDATA should be present on Windows")?,
        );
        path.push(APPLICATION_DIR_NAME);
        Ok(path)
    }
    #[cfg(target_os = "linux")]
    {
        let mut path = env::var("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|_| {
                env::var("HOME").map(|home| {
                    let mut path = PathBuf::from(home);
                    path.push(".local/state");
                    path
                })
            })
            .context("Couldn't find neither XDG_STATE_HOME nor HOME")?;
        path.push(APPLICATION_DIR_NAME);
        Ok(path)
    }
    #[cfg(not(any(windows, target_os = "linux")))]
    {
        let mut path = PathBuf::from(env::var("HOME").context("Couldn't find HOME")?);
        path.push(format!(".{APPLICATION_DIR_NAME}"));
        Ok(path)
    }
}
