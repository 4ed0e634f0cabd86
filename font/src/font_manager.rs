use std::{path::Path, sync::Arc};

use cosmic_text::{
    Font, FontSystem,
    fontdb::{self, Family, Query, Source, Stretch},
};
use derive_more::Deref;
use parking_lot::Mutex;

use crate::{FontDescriptor, FontError};

pub use cosmic_text::Weight as FontWeight;
pub use fontdb::ID as FontId;

#[derive(Debug, Clone, Deref)]
pub struct FontManager(Arc<Mutex<FontSystem>>);

impl From<FontSystem> for FontManager {
    fn from(font_system: FontSystem) -> Self {
        FontManager(Mutex::new(font_system).into())
    }
}

impl Default for FontManager {
    fn default() -> Self {
        Self::system()
    }
}

impl FontManager {
    /// Creates a font manager with the environment's locale, platform families, fallbacks, and
    /// system fonts loaded.
    pub fn system() -> Self {
        FontSystem::new().into()
    }

    /// Adds the font and return its font ids.
    pub fn load_font(&self, font_data: impl AsRef<[u8]> + Sync + Send + 'static) -> Vec<FontId> {
        self.lock()
            .db_mut()
            .load_font_source(Source::Binary(Arc::new(font_data)))
            .to_vec()
    }

    /// Adds all faces of a font file.
    pub fn load_font_file(&self, path: &Path) -> Result<(), FontError> {
        self.lock()
            .db_mut()
            .load_font_file(path)
            .map_err(|source| FontError::LoadFile {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn get_font(&self, id: FontId, weight: FontWeight) -> Option<Arc<Font>> {
        self.lock().get_font(id, weight)
    }

    /// Finds the face that best matches the descriptor's family and style.
    ///
    /// Only the named family is considered, no fallbacks.
    pub fn query(&self, descriptor: &FontDescriptor) -> Option<FontId> {
        let families = [Family::Name(&descriptor.family)];
        let query = Query {
            families: &families,
            weight: descriptor.style.weight(),
            stretch: Stretch::Normal,
            style: descriptor.style.style(),
        };
        self.lock().db().query(&query)
    }
}
