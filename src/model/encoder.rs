use serde::{Deserialize, Serialize};

/// A fitted mapping from category labels to integer codes, mirroring the
/// encoder the regressor was trained with. Class order is the fit-time
/// order and must not be rearranged: the codes are positional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Maps a label to its fitted code, or `None` for a label the encoder
    /// never saw at training time. Callers must treat `None` as a hard
    /// error: defaulting would feed the regressor a feature value it was
    /// never trained on.
    pub fn transform(&self, label: &str) -> Option<u32> {
        self.classes.iter().position(|c| c == label).map(|i| i as u32)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.classes.iter().any(|c| c == label)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
