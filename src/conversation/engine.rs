//! Per-user walk through the dialogue tree.

use super::tree::{DialogueTree, NodeId};
use crate::structures::KeyedStore;
use crate::user::UserId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const SPEAK_ABOUT: &str = "speak about";

/// Where a user currently is in the tree.
#[derive(Debug, Clone, Default)]
struct DialogueState {
    node: Option<NodeId>,
    path: Vec<String>,
}

/// Persisted form of one user's dialogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDialogue {
    #[serde(default)]
    pub path: Vec<String>,
}

/// Decimal user id to saved dialogue.
pub type ConversationSnapshot = BTreeMap<String, SavedDialogue>;

/// Runs the dialogue for every user.
#[derive(Debug, Default)]
pub struct ConversationEngine {
    tree: DialogueTree,
    state: KeyedStore<UserId, DialogueState>,
}

impl ConversationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &DialogueTree {
        &self.tree
    }

    fn state_mut(&mut self, user: UserId) -> &mut DialogueState {
        self.state.get_or_insert_with(user, DialogueState::default)
    }

    /// Put the user at the root and return the opening question.
    pub fn start(&mut self, user: UserId) -> String {
        let root = self.tree.root();
        let state = self.state_mut(user);
        state.node = Some(root);
        state.path.clear();
        self.tree.root_question().to_string()
    }

    pub fn reset(&mut self, user: UserId) -> String {
        *self.state_mut(user) = DialogueState::default();
        format!("Conversation reset. {}", self.start(user))
    }

    /// The pending question, or `None` when not started or finished.
    pub fn current_question(&self, user: UserId) -> Option<&str> {
        let node = self.tree.node(self.state.get(&user)?.node?);
        if node.is_leaf() {
            return None;
        }
        node.question.as_deref()
    }

    /// Whether the user is somewhere in the tree (including at a leaf).
    pub fn is_active(&self, user: UserId) -> bool {
        self.state.get(&user).is_some_and(|s| s.node.is_some())
    }

    /// Option keys taken from the root so far.
    pub fn path(&self, user: UserId) -> &[String] {
        self.state
            .get(&user)
            .map(|s| s.path.as_slice())
            .unwrap_or(&[])
    }

    pub fn speak_about(&self, topic: &str) -> bool {
        self.tree.is_topic(&topic.trim().to_lowercase())
    }

    /// Number of users with conversation state.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn supported_topics(&self) -> Vec<&str> {
        self.tree.topics()
    }

    /// Advance the user's dialogue with `message` and return the reply.
    pub fn handle_message(&mut self, user: UserId, message: &str) -> String {
        let msg = message.trim();
        if msg.is_empty() {
            return "Give me an answer or pick an option.".to_string();
        }

        let low = msg.to_lowercase();
        if low == "reset" {
            return self.reset(user);
        }
        if let Some(rest) = low.strip_prefix(SPEAK_ABOUT) {
            return self.speak_about_reply(rest.trim());
        }

        let Some(current) = self.state.get(&user).and_then(|s| s.node) else {
            return self.start(user);
        };

        let node = self.tree.node(current);
        if let Some(answer) = node.answer.as_deref().filter(|_| node.is_leaf()) {
            return format!("{}\n\nTo start over, type **reset**.", answer);
        }

        let choice = self.tree.normalize(&low);
        let Some(next) = node.option(&choice) else {
            return format!(
                "I didn't understand. Choose one of: {}",
                node.option_keys().join(", ")
            );
        };

        let state = self.state_mut(user);
        state.node = Some(next);
        state.path.push(choice);

        let next = self.tree.node(next);
        match &next.answer {
            Some(answer) if next.is_leaf() => {
                format!("{}\n\nType **reset** to start over.", answer)
            }
            _ => next.question.clone().unwrap_or_default(),
        }
    }

    fn speak_about_reply(&self, topic: &str) -> String {
        if topic.is_empty() {
            return format!(
                "You can ask: speak about <topic>. Supported topics: {}",
                self.supported_topics().join(", ")
            );
        }
        if self.speak_about(topic) {
            "Yes, I can talk about that.".to_string()
        } else {
            "Sorry, I don't cover that topic.".to_string()
        }
    }

    /// Paths of every known user.
    pub fn to_snapshot(&self) -> ConversationSnapshot {
        self.state
            .keys()
            .map(|user| {
                let saved = SavedDialogue {
                    path: self.path(*user).to_vec(),
                };
                (user.to_string(), saved)
            })
            .collect()
    }

    /// Restore users by replaying each saved path from the root.
    ///
    /// A step that no longer matches the tree puts the user back at the root
    /// with an empty path.
    pub fn load_snapshot(&mut self, snapshot: ConversationSnapshot) {
        for (key, saved) in snapshot {
            let Ok(user) = key.parse::<UserId>() else {
                log::warn!("skipping conversation entry with invalid user id '{}'", key);
                continue;
            };
            let state = self.replay(&saved.path);
            self.state.set(user, state);
        }
    }

    fn replay(&self, steps: &[String]) -> DialogueState {
        let mut node = self.tree.root();
        let mut path = Vec::with_capacity(steps.len());

        for step in steps {
            let step = self.tree.normalize(step);
            let current = self.tree.node(node);
            match current.option(&step).filter(|_| !current.is_leaf()) {
                Some(next) => {
                    node = next;
                    path.push(step);
                }
                None => {
                    log::warn!("saved dialogue step '{}' no longer matches; restarting", step);
                    return DialogueState {
                        node: Some(self.tree.root()),
                        path: Vec::new(),
                    };
                }
            }
        }

        DialogueState {
            node: Some(node),
            path,
        }
    }
}
