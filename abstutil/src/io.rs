use std::path::Path;

use anyhow::{Context, Result};
use fs_err::File;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

pub fn to_json<T: Serialize>(obj: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(obj)?)
}

pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let obj: T =
        serde_json::from_str(&contents).with_context(|| format!("parsing {} as JSON", path))?;
    Ok(obj)
}

/// Writes raw contents to a path, creating the parent directory if needed.
pub fn write_file(path: &str, contents: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs_err::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &str, obj: &T) -> Result<()> {
    write_file(path, &to_json(obj)?)
}
