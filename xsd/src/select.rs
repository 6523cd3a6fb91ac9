use tracing::trace;

use crate::{error::XsdError, node::SchemaNode, path::SchemaPath};

/// Nodes gathered under one structural path.
///
/// Keyed nodes are sorted by their display key; nodes without a key keep document order and are
/// never given a heading of their own.
#[derive(Debug, Default)]
pub struct Selection<'a, 'input> {
    keyed: Vec<(&'a str, SchemaNode<'a, 'input>)>,
    unkeyed: Vec<SchemaNode<'a, 'input>>,
}

impl<'a, 'input> Selection<'a, 'input> {
    pub fn keyed(&self) -> impl Iterator<Item = SchemaNode<'a, 'input>> + '_ {
        self.keyed.iter().map(|(_, node)| *node)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.keyed.iter().map(|(key, _)| *key)
    }

    pub fn unkeyed(&self) -> impl Iterator<Item = SchemaNode<'a, 'input>> + '_ {
        self.unkeyed.iter().copied()
    }

    /// Keyed nodes in key order, followed by the unkeyed ones.
    pub fn all(&self) -> impl Iterator<Item = SchemaNode<'a, 'input>> + '_ {
        self.keyed().chain(self.unkeyed())
    }

    pub fn len(&self) -> usize {
        self.keyed.len() + self.unkeyed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Gathers the nodes `path` reaches from `parent` and orders them by display key.
///
/// Fails with [`XsdError::DuplicateKeys`] listing every key that occurs more than once; nothing
/// is returned for a group with duplicates.
pub fn select_ordered<'a, 'input>(
    parent: SchemaNode<'a, 'input>,
    path: &SchemaPath,
) -> Result<Selection<'a, 'input>, XsdError> {
    let mut selection = Selection::default();
    for node in path.evaluate(parent) {
        match node.display_key() {
            Some(key) => selection.keyed.push((key, node)),
            None => selection.unkeyed.push(node),
        }
    }
    selection.keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut duplicates: Vec<String> = selection
        .keyed
        .windows(2)
        .filter(|pair| pair[0].0 == pair[1].0)
        .map(|pair| pair[0].0.to_owned())
        .collect();
    duplicates.dedup();
    if !duplicates.is_empty() {
        return Err(XsdError::DuplicateKeys {
            path: path.to_string(),
            keys: duplicates,
        });
    }

    for key in selection.keys() {
        trace!(%path, key, "selected");
    }
    Ok(selection)
}
