//! Structural depth of parent-pointer trees.
//!
//! A parent-pointer tree stores, for every token of a verse, the index of its
//! head token or the root sentinel. Dependency parsers emit this form with
//! `-1` as the sentinel; [`crate::MarkerTree::to_parent_pointers`] produces it
//! from marker trees.

use std::collections::BTreeMap;

use tracing::debug;

use crate::errors::DepthError;

/// Wire value of the root sentinel.
pub const ROOT_SENTINEL: i64 = -1;

/// Head of every token; `None` is the root sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentPointers {
    heads: Vec<Option<usize>>,
}

impl ParentPointers {
    /// From head indices as a parser emits them, `-1` marking the root.
    ///
    /// Only range is checked here; cycles surface from [`max_depth`].
    pub fn from_heads(heads: &[i64]) -> Result<Self, DepthError> {
        let token_count = heads.len();
        let heads = heads
            .iter()
            .enumerate()
            .map(|(token, &head)| resolve_head(token, head, token_count))
            .collect::<Result<_, _>>()?;
        Ok(ParentPointers { heads })
    }

    /// From a `token -> head` map over `token_count` tokens.
    ///
    /// Every token in `0..token_count` needs an entry, and no entry may name
    /// a token outside that range.
    pub fn from_map(map: &BTreeMap<usize, i64>, token_count: usize) -> Result<Self, DepthError> {
        if let Some((&token, _)) = map.range(token_count..).next() {
            return Err(DepthError::TokenOutOfRange { token, token_count });
        }

        let heads = (0..token_count)
            .map(|token| {
                let head = *map.get(&token).ok_or(DepthError::MissingHead { token })?;
                resolve_head(token, head, token_count)
            })
            .collect::<Result<_, _>>()?;
        Ok(ParentPointers { heads })
    }

    /// Heads already known to be in range.
    pub(crate) fn from_tree_heads(heads: Vec<Option<usize>>) -> Self {
        ParentPointers { heads }
    }

    pub fn head(&self, token: usize) -> Option<usize> {
        self.heads.get(token).copied().flatten()
    }

    pub fn heads(&self) -> &[Option<usize>] {
        &self.heads
    }

    /// Heads in wire form, `-1` for the root sentinel.
    pub fn to_wire(&self) -> Vec<i64> {
        self.heads
            .iter()
            .map(|head| head.map_or(ROOT_SENTINEL, |h| h as i64))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.heads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }
}

fn resolve_head(token: usize, head: i64, token_count: usize) -> Result<Option<usize>, DepthError> {
    if head == ROOT_SENTINEL {
        return Ok(None);
    }
    if head < 0 || head as u64 >= token_count as u64 {
        return Err(DepthError::HeadOutOfRange {
            token,
            head,
            token_count,
        });
    }
    Ok(Some(head as usize))
}

/// Maximum depth of the tree hanging off the root sentinel.
///
/// Tokens headed by the sentinel are at depth 1 and every further level adds
/// one, so a flat verse measures 1 and a chain of three tokens measures 3.
/// With no tokens the sentinel is itself a leaf, which also measures 1.
/// The walk starts at the sentinel with an explicit stack; each token has a
/// single head, so it is reached at most once and any token left unvisited
/// sits on or under a cycle.
///
/// ```
/// use layered_taamim::{max_depth, ParentPointers};
///
/// let chain = ParentPointers::from_heads(&[-1, 0, 1]).unwrap();
/// assert_eq!(max_depth(&chain), Ok(3));
///
/// let fan = ParentPointers::from_heads(&[-1, 0, 0]).unwrap();
/// assert_eq!(max_depth(&fan), Ok(2));
/// ```
pub fn max_depth(pointers: &ParentPointers) -> Result<usize, DepthError> {
    let token_count = pointers.len();
    let mut root_children = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); token_count];
    for (token, head) in pointers.heads.iter().enumerate() {
        match head {
            Some(head) => children[*head].push(token),
            None => root_children.push(token),
        }
    }

    let mut visited = vec![false; token_count];
    let mut max = 1;
    let mut stack: Vec<(usize, usize)> = root_children.into_iter().map(|token| (token, 1)).collect();
    while let Some((token, depth)) = stack.pop() {
        if visited[token] {
            continue;
        }
        visited[token] = true;
        max = max.max(depth);
        stack.extend(children[token].iter().map(|&child| (child, depth + 1)));
    }

    let unreachable: Vec<usize> = visited
        .iter()
        .enumerate()
        .filter(|(_, seen)| !**seen)
        .map(|(token, _)| token)
        .collect();
    if !unreachable.is_empty() {
        debug!("max_depth: {} of {} tokens unreachable", unreachable.len(), token_count);
        return Err(DepthError::Cycle { nodes: unreachable });
    }

    Ok(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_structure() {
        let pointers = ParentPointers::from_heads(&[-1, -1, -1]).unwrap();
        assert_eq!(max_depth(&pointers), Ok(1));
    }

    #[test]
    fn test_single_token() {
        let pointers = ParentPointers::from_heads(&[-1]).unwrap();
        assert_eq!(max_depth(&pointers), Ok(1));
    }

    #[test]
    fn test_head_after_dependent() {
        // 0 <- 1 <- 2 with the root at the end of the verse
        let pointers = ParentPointers::from_heads(&[1, 2, -1]).unwrap();
        assert_eq!(max_depth(&pointers), Ok(3));
    }

    #[test]
    fn test_map_form() {
        let map: BTreeMap<usize, i64> = vec![(0, -1), (1, 0), (2, 1)].into_iter().collect();
        let pointers = ParentPointers::from_map(&map, 3).unwrap();
        assert_eq!(pointers.to_wire(), vec![-1, 0, 1]);
        assert_eq!(max_depth(&pointers), Ok(3));
    }

    #[test]
    fn test_map_missing_head() {
        let map: BTreeMap<usize, i64> = vec![(0, -1), (2, 0)].into_iter().collect();
        assert_eq!(
            ParentPointers::from_map(&map, 3),
            Err(DepthError::MissingHead { token: 1 })
        );
    }

    #[test]
    fn test_map_token_out_of_range() {
        let map: BTreeMap<usize, i64> = vec![(0, -1), (5, 0)].into_iter().collect();
        assert_eq!(
            ParentPointers::from_map(&map, 1),
            Err(DepthError::TokenOutOfRange {
                token: 5,
                token_count: 1
            })
        );
    }

    #[test]
    fn test_head_out_of_range() {
        assert_eq!(
            ParentPointers::from_heads(&[-1, 7]),
            Err(DepthError::HeadOutOfRange {
                token: 1,
                head: 7,
                token_count: 2
            })
        );
        assert!(matches!(
            ParentPointers::from_heads(&[-2]),
            Err(DepthError::HeadOutOfRange { head: -2, .. })
        ));
    }

    #[test]
    fn test_no_tokens_is_a_single_leaf() {
        assert_eq!(max_depth(&ParentPointers::default()), Ok(1));
        assert_eq!(max_depth(&ParentPointers::from_heads(&[]).unwrap()), Ok(1));
    }

    #[test]
    fn test_cycle_detected() {
        // 1 and 2 point at each other; 3 hangs under the cycle
        let pointers = ParentPointers::from_heads(&[-1, 2, 1, 2]).unwrap();
        assert_eq!(
            max_depth(&pointers),
            Err(DepthError::Cycle {
                nodes: vec![1, 2, 3]
            })
        );
    }

    #[test]
    fn test_self_loop_detected() {
        let pointers = ParentPointers::from_heads(&[-1, 1]).unwrap();
        assert_eq!(max_depth(&pointers), Err(DepthError::Cycle { nodes: vec![1] }));
    }

    #[test]
    fn test_no_root_at_all() {
        let pointers = ParentPointers::from_heads(&[1, 0]).unwrap();
        assert_eq!(max_depth(&pointers), Err(DepthError::Cycle { nodes: vec![0, 1] }));
    }
}
