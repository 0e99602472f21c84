//! Inheritance chain of settings layers.
//!
//! Layers live in an arena and refer to their parent by [`LayerId`]. A value
//! is resolved through the chain in priority order:
//! 1. The layer itself
//! 2. Its parent, grandparent, ...
//! 3. The built-in default for the setting

use std::iter;

use crate::error::{ConfigError, Result};
use crate::global_settings::{GlobalAppSettings, GlobalScalars};

/// Handle to a layer inside a [`SettingsLayers`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(usize);

impl LayerId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Layer {
    settings: GlobalAppSettings,
    parent: Option<LayerId>,
}

/// Arena of settings layers linked to their parents.
#[derive(Debug, Default)]
pub struct SettingsLayers {
    layers: Vec<Layer>,
}

impl SettingsLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer with no parent.
    pub fn push_root(&mut self, settings: GlobalAppSettings) -> LayerId {
        let id = LayerId(self.layers.len());
        self.layers.push(Layer {
            settings,
            parent: None,
        });
        id
    }

    /// Add an empty layer below `parent`, already finalized against it.
    pub fn create_child(&mut self, parent: LayerId) -> Result<LayerId> {
        let mut settings = GlobalAppSettings::new();
        settings.finalize_inheritance(self.get(parent)?);

        let id = LayerId(self.layers.len());
        self.layers.push(Layer {
            settings,
            parent: Some(parent),
        });
        log::debug!("Created settings layer {} below {}", id.0, parent.0);
        Ok(id)
    }

    pub fn get(&self, id: LayerId) -> Result<&GlobalAppSettings> {
        self.layers
            .get(id.0)
            .map(|layer| &layer.settings)
            .ok_or(ConfigError::UnknownLayer(id.0))
    }

    pub fn get_mut(&mut self, id: LayerId) -> Result<&mut GlobalAppSettings> {
        self.layers
            .get_mut(id.0)
            .map(|layer| &mut layer.settings)
            .ok_or(ConfigError::UnknownLayer(id.0))
    }

    pub fn parent(&self, id: LayerId) -> Option<LayerId> {
        self.layers.get(id.0).and_then(|layer| layer.parent)
    }

    /// The layer `id` followed by each of its ancestors, nearest first.
    pub fn ancestors(&self, id: LayerId) -> impl Iterator<Item = &GlobalAppSettings> + '_ {
        iter::successors(Some(id), |id| self.parent(*id))
            .map_while(|id| self.layers.get(id.0).map(|layer| &layer.settings))
    }

    /// The nearest `defaultProfile` identifier, starting at `id`.
    pub fn unparsed_default_profile(&self, id: LayerId) -> Option<&str> {
        self.ancestors(id)
            .find_map(GlobalAppSettings::unparsed_default_profile)
    }

    /// Read settings as seen from `id`, with inheritance applied.
    pub fn view(&self, id: LayerId) -> Result<LayerView<'_>> {
        let settings = self.get(id)?;
        Ok(LayerView {
            layers: self,
            id,
            settings,
        })
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Settings as seen from one layer.
///
/// Scalar getters return the nearest explicit value in the chain, falling
/// back to the default. Everything else is read from the layer itself, since
/// finalizing a layer already copies in what it inherits.
#[derive(Debug, Clone, Copy)]
pub struct LayerView<'a> {
    layers: &'a SettingsLayers,
    id: LayerId,
    settings: &'a GlobalAppSettings,
}

impl<'a> LayerView<'a> {
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// The layer's own node.
    pub fn settings(&self) -> &'a GlobalAppSettings {
        self.settings
    }

    pub fn unparsed_default_profile(&self) -> Option<&'a str> {
        self.layers.unparsed_default_profile(self.id)
    }

    pub(crate) fn find_scalar<T>(&self, get: impl Fn(&GlobalScalars) -> Option<T>) -> Option<T> {
        self.layers
            .ancestors(self.id)
            .find_map(|settings| get(settings.scalars()))
    }
}
