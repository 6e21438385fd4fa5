use crate::classify::DEFAULT_SNIFF_LEN;
use std::path::PathBuf;
#[derive(Debug, Clone)]
pub struct TreecatOptions {
    pub root: PathBuf,
    pub sniff_len: usize,
}
impl Default for TreecatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            sniff_len: DEFAULT_SNIFF_LEN,
        }
    }
}
#[derive(Debug, Default)]
pub struct TreecatBuilder {
    options: TreecatOptions,
}
impl TreecatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: TreecatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn sniff_len(mut self, len: usize) -> Self {
        self.options.sniff_len = len;
        self
    }
    pub fn build(self) -> TreecatOptions {
        self.options
    }
}
