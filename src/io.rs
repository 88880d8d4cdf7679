//! Reading and writing transforms and matrices as RON (Rusty Object
//! Notation).

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufReader, Read, Write},
    path::Path,
};

/// Reads the RON file at the given path and deserializes the contents into an
/// object of type `T`.
pub fn parse_ron_file<T>(file_path: impl AsRef<Path>) -> Result<T>
where
    T: for<'de> serde::de::Deserialize<'de>,
{
    let file_path = file_path.as_ref();
    log::debug!("Reading {}", file_path.display());

    let mut text = String::new();
    File::open(file_path)
        .and_then(|file| BufReader::new(file).read_to_string(&mut text))
        .with_context(|| format!("Could not open {}", file_path.display()))?;

    parse_ron_str(&text).with_context(|| format!("Invalid syntax in {}", file_path.display()))
}

/// Deserializes the given RON text into an object of type `T`.
pub fn parse_ron_str<T>(text: &str) -> Result<T>
where
    T: for<'de> serde::de::Deserialize<'de>,
{
    Ok(ron::from_str::<T>(text)?)
}

/// Serializes the given value of type `T` to pretty-printed RON.
pub fn to_ron_string<T>(value: &T) -> Result<String>
where
    T: serde::Serialize,
{
    Ok(ron::ser::to_string_pretty(
        value,
        ron::ser::PrettyConfig::default(),
    )?)
}

/// Serializes the given value of type `T` to RON and writes it to the given
/// path, creating any missing parent directories.
pub fn write_ron_file<T>(value: &T, output_file_path: impl AsRef<Path>) -> Result<()>
where
    T: serde::Serialize,
{
    let output_file_path = output_file_path.as_ref();
    let text = to_ron_string(value)?;

    if let Some(parent) = output_file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(output_file_path)
        .with_context(|| format!("Could not create {}", output_file_path.display()))?;
    write!(&mut file, "{text}")?;

    log::debug!("Wrote {}", output_file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{matrix::Matrix4, quaternion::Quaternion, transform::Transform, vector::Vector3};

    #[test]
    fn transform_survives_ron_text() {
        let transform = Transform::new(
            Vector3::new(1.0, -2.0, 3.5),
            Quaternion::new(0.0, 0.6, 0.0, 0.8),
            Vector3::new(2.0, 2.0, 0.5),
        );
        let text = to_ron_string(&transform).unwrap();
        let parsed: Transform = parse_ron_str(&text).unwrap();
        assert_eq!(parsed, transform);
    }

    #[test]
    fn transform_text_names_its_fields() {
        let text = to_ron_string(&Transform::identity()).unwrap();
        assert!(text.contains("position"));
        assert!(text.contains("rotation"));
        assert!(text.contains("scale"));
    }

    #[test]
    fn matrix_survives_ron_text() {
        let matrix = Transform::new(
            Vector3::new(4.0, 5.0, 6.0),
            Quaternion::new(0.0, 0.0, 0.6, 0.8),
            Vector3::same(1.5),
        )
        .to_matrix();
        let text = to_ron_string(&matrix).unwrap();
        let parsed: Matrix4 = parse_ron_str(&text).unwrap();
        assert_eq!(parsed, matrix);
        assert_eq!(parsed.translation(), Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn malformed_text_is_an_error() {
        assert!(parse_ron_str::<Transform>("(position: [1.0, 2.0])").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let error = parse_ron_file::<Transform>("/nonexistent/pose.ron").unwrap_err();
        assert!(format!("{error:#}").contains("/nonexistent/pose.ron"));
    }
}
