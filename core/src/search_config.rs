/// Tuning for degree-of-separation searches.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Give up once this many vertices have been visited. `None` searches the
    /// whole connected component.
    pub max_visited: Option<usize>,
}

impl SearchConfig {
    pub fn new(max_visited: Option<usize>) -> Self {
        Self { max_visited }
    }
}
