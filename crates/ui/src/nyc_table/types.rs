use bevy::prelude::*;

/// Whether the table panel is shown; hidden leaves only the map.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NycTableVisible(pub bool);

impl Default for NycTableVisible {
    fn default() -> Self {
        Self(true)
    }
}
