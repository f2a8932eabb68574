use crate::models::PatientId;

#[derive(Debug)]
struct Node {
    id: PatientId,
    left: Option<usize>,
    right: Option<usize>,
}

/// Unbalanced binary search tree over patient ids, stored as an arena of
/// nodes linked by index.
#[derive(Debug, Default)]
pub struct PatientIndex {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl PatientIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `id`. Returns `false` and leaves the tree untouched when the id
    /// is already present.
    pub fn insert(&mut self, id: PatientId) -> bool {
        let new_node = self.nodes.len();

        let Some(mut current) = self.root else {
            self.nodes.push(Node { id, left: None, right: None });
            self.root = Some(new_node);
            return true;
        };

        loop {
            let node = &mut self.nodes[current];
            let slot = if id < node.id {
                &mut node.left
            } else if id > node.id {
                &mut node.right
            } else {
                return false;
            };

            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(new_node);
                    self.nodes.push(Node { id, left: None, right: None });
                    return true;
                }
            }
        }
    }

    pub fn contains(&self, id: PatientId) -> bool {
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.nodes[index];
            current = if id < node.id {
                node.left
            } else if id > node.id {
                node.right
            } else {
                return true;
            };
        }
        false
    }

    /// In-order traversal: every id, ascending.
    pub fn in_order(&self) -> Vec<PatientId> {
        let mut ids = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = self.root;

        while current.is_some() || !stack.is_empty() {
            while let Some(index) = current {
                stack.push(index);
                current = self.nodes[index].left;
            }
            if let Some(index) = stack.pop() {
                ids.push(self.nodes[index].id);
                current = self.nodes[index].right;
            }
        }

        ids
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
