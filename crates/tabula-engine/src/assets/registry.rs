use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::image::Image;

/// Undecoded audio payload.
///
/// Playback (and therefore decoding) is the host's concern; the registry
/// only stores and hands out the raw bytes.
#[derive(Debug, Clone)]
pub struct Sound(Arc<Vec<u8>>);

impl Sound {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(Arc::new(bytes))
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Error returned by [`AssetRegistry::load`].
#[derive(Debug)]
pub enum AssetError {
    /// The descriptor's extension names neither a known image nor audio kind.
    UnsupportedKind { descriptor: String },
    Io { path: PathBuf, source: std::io::Error },
    Decode { path: PathBuf, message: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::UnsupportedKind { descriptor } => {
                write!(f, "unsupported asset kind: {descriptor}")
            }
            AssetError::Io { path, source } => {
                write!(f, "failed to read asset {}: {source}", path.display())
            }
            AssetError::Decode { path, message } => {
                write!(f, "failed to decode asset {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Per-scene store of loaded and generated assets.
///
/// Assets are keyed by the descriptor's file stem: loading `"button.png"`
/// stores the image under `"button"`. Lookups for unknown ids return `None`;
/// absence is a normal case for every caller.
pub struct AssetRegistry {
    root: PathBuf,
    images: HashMap<String, Image>,
    sounds: HashMap<String, Sound>,
}

impl AssetRegistry {
    /// `root` is the asset directory containing `images/` and `sounds/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), images: HashMap::new(), sounds: HashMap::new() }
    }

    /// Loads an asset file named by `descriptor` (e.g. `"button.png"`).
    ///
    /// The kind is dispatched on the extension: `png` decodes into an image,
    /// `mp3` stores raw audio bytes. Any other extension is a fatal
    /// [`AssetError::UnsupportedKind`].
    pub fn load(&mut self, descriptor: &str) -> Result<(), AssetError> {
        let name = Path::new(descriptor);
        let stem = name.file_stem().and_then(|s| s.to_str());
        let ext = name.extension().and_then(|s| s.to_str());

        let (Some(stem), Some(ext)) = (stem, ext) else {
            return Err(AssetError::UnsupportedKind { descriptor: descriptor.to_string() });
        };

        match ext {
            "png" => {
                let path = self.root.join("images").join(descriptor);
                let bytes = std::fs::read(&path)
                    .map_err(|source| AssetError::Io { path: path.clone(), source })?;
                let decoded = image::load_from_memory(&bytes)
                    .map_err(|e| AssetError::Decode { path: path.clone(), message: e.to_string() })?
                    .to_rgba8();
                log::debug!("loaded image asset '{stem}' from {}", path.display());
                self.images.insert(stem.to_string(), Image::from_rgba(decoded));
                Ok(())
            }
            "mp3" => {
                let path = self.root.join("sounds").join(descriptor);
                let bytes = std::fs::read(&path)
                    .map_err(|source| AssetError::Io { path: path.clone(), source })?;
                log::debug!("loaded sound asset '{stem}' from {}", path.display());
                self.sounds.insert(stem.to_string(), Sound::from_bytes(bytes));
                Ok(())
            }
            _ => Err(AssetError::UnsupportedKind { descriptor: descriptor.to_string() }),
        }
    }

    #[inline]
    pub fn get_image(&self, id: &str) -> Option<&Image> {
        self.images.get(id)
    }

    #[inline]
    pub fn get_sound(&self, id: &str) -> Option<&Sound> {
        self.sounds.get(id)
    }

    /// Stores a generated image (label, highlight frame) under `id`.
    pub fn insert_image(&mut self, id: impl Into<String>, image: Image) {
        self.images.insert(id.into(), image);
    }

    /// Replaces the image stored under `id` in place, keeping the id.
    ///
    /// Inserting under a fresh id is also fine — a component may become
    /// dirty before its first image ever reached the registry.
    pub fn update_image(&mut self, id: &str, image: Image) {
        self.images.insert(id.to_string(), image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::image::Color;

    fn temp_root(tag: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("tabula-registry-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(root.join("images")).unwrap();
        std::fs::create_dir_all(root.join("sounds")).unwrap();
        root
    }

    #[test]
    fn unsupported_extension_is_a_type_mismatch() {
        let mut reg = AssetRegistry::new("assets");
        let err = reg.load("card.gif").unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedKind { .. }));
        let err = reg.load("no-extension").unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedKind { .. }));
    }

    #[test]
    fn missing_file_propagates_io_error() {
        let mut reg = AssetRegistry::new(temp_root("missing"));
        assert!(matches!(reg.load("ghost.png"), Err(AssetError::Io { .. })));
    }

    #[test]
    fn png_load_keys_by_stem() {
        let root = temp_root("png");
        Image::solid(2, 2, Color::rgb(9, 9, 9))
            .pixels()
            .save(root.join("images").join("card.png"))
            .unwrap();

        let mut reg = AssetRegistry::new(&root);
        reg.load("card.png").unwrap();
        let img = reg.get_image("card").unwrap();
        assert_eq!(img.size(), (2, 2));
        assert!(reg.get_image("card.png").is_none());
    }

    #[test]
    fn mp3_load_stores_raw_bytes() {
        let root = temp_root("mp3");
        std::fs::write(root.join("sounds").join("flip.mp3"), [1u8, 2, 3]).unwrap();

        let mut reg = AssetRegistry::new(&root);
        reg.load("flip.mp3").unwrap();
        assert_eq!(reg.get_sound("flip").unwrap().bytes(), &[1, 2, 3]);
    }

    #[test]
    fn update_image_replaces_in_place() {
        let mut reg = AssetRegistry::new("assets");
        reg.insert_image("label", Image::solid(1, 1, Color::BLACK));
        reg.update_image("label", Image::solid(5, 5, Color::WHITE));
        assert_eq!(reg.get_image("label").unwrap().size(), (5, 5));
    }

    #[test]
    fn absent_lookup_is_none() {
        let reg = AssetRegistry::new("assets");
        assert!(reg.get_image("nope").is_none());
        assert!(reg.get_sound("nope").is_none());
    }
}
