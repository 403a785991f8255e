//! The search tree: nodes discovered during one search, linked to their parents.

mod node;
pub use node::{Node, Tag};

mod node_list;
pub use node_list::NodeList;

slotmap::new_key_type! {
    /// A handle to a [`Node`] inside a [`NodeList`].
    pub struct NodeId;
}
