//! Shape documents: `{ "shapes": [EncodedShape, ...] }` JSON files.
//!
//! A document is read in one declared layout. Entries that do not fit the layout are
//! kept as `Unrecognized` and fail when the engine decodes them; loading never drops
//! or repairs shapes.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::repr::{decode_all, encode_all, transcode, Encoding};
use crate::shape::{Shape, ShapeError};

#[derive(Debug)]
pub enum DocumentError {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Json(e) => write!(f, "invalid shape document: {e}"),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<serde_json::Error> for DocumentError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeDocument<E> {
    pub shapes: Vec<E>,
}

impl<E: Encoding> ShapeDocument<E> {
    pub fn new(shapes: Vec<E>) -> Self {
        Self { shapes }
    }

    pub fn from_shapes(shapes: &[Shape]) -> Self {
        Self::new(encode_all(shapes))
    }

    pub fn from_json_str(s: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        Ok(serde_json::from_reader(io::BufReader::new(reader))?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty JSON, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let io_err = |source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        fs::write(path, self.to_json_string()?).map_err(io_err)
    }

    pub fn decode(&self) -> Result<Vec<Shape>, ShapeError> {
        decode_all(&self.shapes)
    }

    pub fn transcode<B: Encoding>(&self) -> Result<ShapeDocument<B>, ShapeError> {
        Ok(ShapeDocument::new(transcode(&self.shapes)?))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::{ComposedShape, FlatShape, GenericShape};
    use crate::shape::{Circle, Rectangle};
    use tempfile::tempdir;

    const FLAT_DOC: &str = r##"{
        "shapes": [
            { "Circle": { "x": 100, "y": 50, "color": "#ff0000", "radius": 12.5 } },
            { "Rectangle": { "x": 3, "y": 4, "color": "#00ff00", "width": 20, "height": 30 } }
        ]
    }"##;

    #[test]
    fn parses_flat_document() {
        let doc = ShapeDocument::<FlatShape>::from_json_str(FLAT_DOC).unwrap();
        assert_eq!(doc.len(), 2);
        let shapes = doc.decode().unwrap();
        assert_eq!(shapes[0], Shape::from(Circle::new(100.0, 50.0, "#ff0000", 12.5)));
        assert_eq!(
            shapes[1],
            Shape::from(Rectangle::new(3.0, 4.0, "#00ff00", 20.0, 30.0))
        );
    }

    #[test]
    fn wrong_layout_loads_but_fails_to_decode() {
        let doc = ShapeDocument::<GenericShape>::from_json_str(FLAT_DOC).unwrap();
        assert_eq!(doc.len(), 2);
        let err = doc.decode().unwrap_err();
        assert_eq!(err.index(), Some(0));
    }

    #[test]
    fn syntax_errors_are_json_errors() {
        let err = ShapeDocument::<FlatShape>::from_json_str("{ \"shapes\": [").unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
        let err = ShapeDocument::<FlatShape>::from_json_str("{}").unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }

    #[test]
    fn save_load_and_transcode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/shapes.json");
        let doc = ShapeDocument::<FlatShape>::from_json_str(FLAT_DOC).unwrap();
        let composed: ShapeDocument<ComposedShape> = doc.transcode().unwrap();
        composed.save(&path).unwrap();
        let back = ShapeDocument::<ComposedShape>::load(&path).unwrap();
        assert_eq!(back, composed);
        assert_eq!(back.decode().unwrap(), doc.decode().unwrap());

        let missing = ShapeDocument::<FlatShape>::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, DocumentError::Io { .. }));
    }
}
