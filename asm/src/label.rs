use indexmap::IndexMap;

/// A label binding: the source line it was defined on and the address it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub line_idx: usize,
    pub addr: u8,
}

// Insertion order is kept so listings print labels in source order.
#[derive(Debug, Clone, Default)]
pub struct Labels(IndexMap<String, Label>);

impl Labels {
    pub fn new() -> Self {
        Labels(IndexMap::new())
    }

    /// Later definitions override earlier ones; the replaced binding is returned.
    pub fn insert(&mut self, name: String, line_idx: usize, addr: u8) -> Option<Label> {
        self.0.insert(name, Label { line_idx, addr })
    }

    pub fn get(&self, name: &str) -> Option<&Label> {
        self.0.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u8> {
        self.0.get(name).map(|label| label.addr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Label)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
