use super::Schema;

/// Node of the hierarchical signal grouping.
///
/// The root node has an empty name and path and holds the ungrouped signals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupNode {
    pub name: String,
    /// Full slash-joined path from the root.
    pub path: String,
    pub description: String,
    /// Child groups in first-seen order.
    pub children: Vec<GroupNode>,
    /// Indices into [`Schema::signals`] placed directly in this group.
    pub signals: Vec<usize>,
}

impl GroupNode {
    fn child_mut(&mut self, name: &str, schema: &Schema) -> &mut GroupNode {
        let pos = match self.children.iter().position(|c| c.name == name) {
            Some(pos) => pos,
            None => {
                let path = if self.path.is_empty() {
                    name.to_string()
                } else {
                    format!("{}/{}", self.path, name)
                };
                let description = schema
                    .group_description(&path)
                    .unwrap_or_default()
                    .to_string();
                self.children.push(GroupNode {
                    name: name.to_string(),
                    path,
                    description,
                    children: Vec::new(),
                    signals: Vec::new(),
                });
                self.children.len() - 1
            }
        };
        &mut self.children[pos]
    }

    /// Find a descendant by full path.
    pub fn find(&self, path: &str) -> Option<&GroupNode> {
        let mut node = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = node.children.iter().find(|c| c.name == segment)?;
        }
        Some(node)
    }

    /// Count of signals in this node and all descendants.
    pub fn signal_count(&self) -> usize {
        self.signals.len()
            + self
                .children
                .iter()
                .map(GroupNode::signal_count)
                .sum::<usize>()
    }
}

/// Tree of signal groups built once from a [`Schema`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupTree {
    pub root: GroupNode,
}

impl GroupTree {
    pub fn build(schema: &Schema) -> Self {
        let mut root = GroupNode::default();
        for (index, signal) in schema.signals.iter().enumerate() {
            let mut node = &mut root;
            for segment in signal.group_segments() {
                node = node.child_mut(segment, schema);
            }
            node.signals.push(index);
        }
        Self { root }
    }

    pub fn find(&self, path: &str) -> Option<&GroupNode> {
        self.root.find(path)
    }
}
