pub const MAX_IDENT_LEN: usize = 20;

pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_iterations: Option<u64>,
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_iterations: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
