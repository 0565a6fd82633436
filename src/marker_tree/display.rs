use std::fmt::{self, Write};

use super::{MarkerTree, NodeId, ROOT};
use crate::verse_key::VerseKey;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUE: &str = "│   ";
const BLANK: &str = "    ";

/// Renders a tree one node per line, nesting shown with branch glyphs.
//
// P: 0:1:1
// root
// ├── 00
// │   └── 65
// └── 92
//     └── 01
pub struct MarkerTreeDisplay<'a> {
    tree: &'a MarkerTree,
    key: Option<VerseKey>,
}

impl<'a> MarkerTreeDisplay<'a> {
    pub fn new(tree: &'a MarkerTree) -> Self {
        MarkerTreeDisplay { tree, key: None }
    }

    /// Prefix the rendering with a `P: <key>` header line.
    pub fn with_key(mut self, key: VerseKey) -> Self {
        self.key = Some(key);
        self
    }

    fn push_children(&self, stack: &mut Vec<(NodeId, String, bool)>, id: NodeId, indent: &str) {
        let children = self.tree.children(id);
        for (idx, &child) in children.iter().enumerate().rev() {
            stack.push((child, indent.to_string(), idx + 1 == children.len()));
        }
    }
}

impl<'a> fmt::Display for MarkerTreeDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(key) = &self.key {
            writeln!(f, "P: {}", key)?;
        }
        f.write_str(self.tree.label(ROOT))?;

        let mut stack = Vec::new();
        self.push_children(&mut stack, ROOT, "");

        while let Some((id, indent, is_last)) = stack.pop() {
            f.write_char('\n')?;
            f.write_str(&indent)?;
            f.write_str(if is_last { LAST_BRANCH } else { BRANCH })?;
            f.write_str(self.tree.label(id))?;

            let child_indent = format!("{}{}", indent, if is_last { BLANK } else { CONTINUE });
            self.push_children(&mut stack, id, &child_indent);
        }

        Ok(())
    }
}
