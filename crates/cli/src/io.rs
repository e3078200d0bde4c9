//! Point files: a JSON array of `[x, y]` pairs.

use anyhow::{Context, Result};
use nalgebra::Vector2;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Vector2<f64>>> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(pairs.into_iter().map(|[x, y]| Vector2::new(x, y)).collect())
}

pub fn write_points<P: AsRef<Path>>(path: P, points: &[Vector2<f64>]) -> Result<()> {
    let pairs: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
    write_json(path, &pairs)
}

pub fn write_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use tempfile::tempdir;

    #[test]
    fn points_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested/pts.json");
        let pts = vec![vector![0.0, 0.0], vector![3.0, 4.0]];
        write_points(&file, &pts).unwrap();
        assert_eq!(read_points(&file).unwrap(), pts);
    }

    #[test]
    fn malformed_input_reports_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("bad.json");
        fs::write(&file, "{\"x\": 1}").unwrap();
        let err = read_points(&file).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_points(dir.path().join("nope.json")).is_err());
    }
}
