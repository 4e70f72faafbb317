//! TargetEntry entity

use crate::domain::entities::BuildMap;
use crate::domain::value_objects::Target;

/// One build target and the build map loaded for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEntry {
    target: Target,
    build_map: BuildMap,
}

impl TargetEntry {
    pub fn new(target: impl Into<Target>, build_map: BuildMap) -> Self {
        Self {
            target: target.into(),
            build_map,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn build_map(&self) -> &BuildMap {
        &self.build_map
    }
}
