use crate::devops::devops_model::build::Build;
use serde::Deserialize;

/// List envelope of the build service.
#[derive(Deserialize, Debug, Default)]
pub struct BuildList {
    #[serde(default)]
    #[allow(dead_code)]
    pub count: u32,
    #[serde(default)]
    pub value: Vec<Build>,
}

impl IntoIterator for BuildList {
    type Item = Build;
    type IntoIter = std::vec::IntoIter<Build>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}
