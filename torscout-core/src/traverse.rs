use futures::FutureExt;
use futures::future::LocalBoxFuture;
use torscout_client::LinkNode;
use tracing::warn;

/// Hard ceiling on recursion depth. The remote service bounds the tree by
/// the requested depth, so this should never trigger; it guarantees
/// termination if the service ever returns a pathological structure.
pub const MAX_CASCADE_DEPTH: usize = 64;

/// Per-node operation applied during a cascade.
///
/// Implementations must not fail: anything that can go wrong while handling
/// a single node is the visitor's problem to contain, so one bad node never
/// stops its siblings from being visited.
#[allow(async_fn_in_trait)]
pub trait NodeVisitor {
    async fn visit(&mut self, node: &LinkNode);
}

/// Pre-order walk of the tree: the node itself, then each child in the
/// order the service returned them. Children are visited regardless of what
/// the visitor did with their parent.
pub async fn cascade<V: NodeVisitor>(root: &LinkNode, visitor: &mut V) {
    cascade_from(root, visitor, 0).await;
}

fn cascade_from<'a, V: NodeVisitor>(
    node: &'a LinkNode,
    visitor: &'a mut V,
    depth: usize,
) -> LocalBoxFuture<'a, ()> {
    async move {
        if depth >= MAX_CASCADE_DEPTH {
            warn!(
                "cascade depth ceiling ({}) reached at {:?}, skipping subtree",
                MAX_CASCADE_DEPTH, node.url
            );
            return;
        }
        visitor.visit(node).await;
        for child in &node.children {
            cascade_from(child, &mut *visitor, depth + 1).await;
        }
    }
    .boxed_local()
}
