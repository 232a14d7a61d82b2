use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct ScooterId(String);

impl ScooterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}
