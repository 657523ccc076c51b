//! Decision-tree dialogue.
//!
//! The root asks which topic the user wants to talk about; each topic is a
//! subtree of questions whose leaves carry a final recommendation. Each
//! user's position in the tree is tracked separately.
//!
//! Inside a conversation two phrases are always recognised:
//! - `reset`: start over from the root
//! - `speak about <topic>`: ask whether a topic is supported
//!
//! Only the path of options taken is persisted; on reload the path is
//! replayed from the root.

mod engine;
mod tree;


pub use engine::{ConversationEngine, ConversationSnapshot, SavedDialogue};
pub use tree::{DialogueTree, Node, NodeId};
