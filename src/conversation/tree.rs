//! The static dialogue tree and answer normalization.

use std::collections::{BTreeSet, HashMap};

/// Index of a node in the tree's arena.
pub type NodeId = usize;

/// A question with outgoing options, or a leaf with a final answer.
#[derive(Debug, Clone)]
pub struct Node {
    pub question: Option<String>,

    /// Option key to child, in declaration order.
    pub options: Vec<(String, NodeId)>,

    pub answer: Option<String>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.answer.is_some() && self.options.is_empty()
    }

    /// Child reached by `key`, if that option exists.
    pub fn option(&self, key: &str) -> Option<NodeId> {
        self.options
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, child)| *child)
    }

    pub fn option_keys(&self) -> Vec<&str> {
        self.options.iter().map(|(k, _)| k.as_str()).collect()
    }
}

/// Alternate spellings accepted for option keys.
const SYNONYMS: &[(&str, &str)] = &[
    ("yes", "yes"),
    ("y", "yes"),
    ("oui", "yes"),
    ("no", "no"),
    ("n", "no"),
    ("non", "no"),
    ("front", "front"),
    ("frontend", "front"),
    ("back", "back"),
    ("backend", "back"),
    ("django", "django"),
    ("flask", "flask"),
    ("scripts", "scripts"),
    ("script", "scripts"),
    ("node", "node"),
    ("nodejs", "node"),
    ("instrument", "instrument"),
    ("guitar", "instrument"),
    ("guitare", "instrument"),
    ("piano", "instrument"),
    ("daw", "daw"),
    ("mao", "daw"),
    ("beat", "daw"),
    ("prod", "daw"),
    ("python", "python"),
    ("web", "web"),
    ("music", "music"),
    ("musique", "music"),
];

/// Arena-backed dialogue tree.
#[derive(Debug, Clone)]
pub struct DialogueTree {
    nodes: Vec<Node>,
    root: NodeId,
    topics: BTreeSet<String>,
    synonyms: HashMap<&'static str, &'static str>,
}

impl Default for DialogueTree {
    fn default() -> Self {
        Self::build()
    }
}

impl DialogueTree {
    /// Build the standard tree: python, web, and music topics.
    pub fn build() -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: 0,
            topics: BTreeSet::new(),
            synonyms: SYNONYMS.iter().copied().collect(),
        };

        tree.root = tree.question(
            "What do you want to talk about? (python / web / music)\n\
             You can also type 'reset' to start over.",
        );
        let python = tree.python_subtree();
        let web = tree.web_subtree();
        let music = tree.music_subtree();
        tree.link(tree.root, "python", python);
        tree.link(tree.root, "web", web);
        tree.link(tree.root, "music", music);

        tree.topics = ["python", "web", "music"]
            .into_iter()
            .map(String::from)
            .collect();
        tree
    }

    fn python_subtree(&mut self) -> NodeId {
        let beginner = self.question("Are you a Python beginner? (yes / no)");
        let basics = self.answer(
            "Start with:\n\
             - variables, types, conditions, loops\n\
             - functions and modules\n\
             - small scripts (calculator, mini games)\n\
             Resources: docs.python.org",
        );
        let track = self.question("Web frameworks or scripts? (django / flask / scripts)");
        let django = self.answer(
            "Django: MVC structure, built-in ORM, automatic admin.\n\
             Steps: create a project, an app, models, views, templates.\n\
             Resources: docs.djangoproject.com",
        );
        let flask = self.answer(
            "Flask: flexible micro-framework.\n\
             Steps: routes, Jinja templates, extensions (SQLAlchemy, WTForms).\n\
             Resources: flask.palletsprojects.com",
        );
        let scripts = self.answer(
            "Scripts: CLIs, automation, parsing (argparse), requests.\n\
             Ideas: batch rename, web scraping, cron jobs.",
        );

        self.link(track, "django", django);
        self.link(track, "flask", flask);
        self.link(track, "scripts", scripts);
        self.link(beginner, "yes", basics);
        self.link(beginner, "no", track);
        beginner
    }

    fn web_subtree(&mut self) -> NodeId {
        let side = self.question("Front-end or back-end? (front / back)");
        let front = self.answer(
            "Front-end: HTML + CSS + JS.\n\
             Steps: semantic HTML, Flex/Grid, the DOM, the fetch API.\n\
             Frameworks: React, Vue, Svelte.\n\
             Resources: MDN Web Docs",
        );
        let stack = self.question("Back-end in Python or Node? (python / node)");
        let back_python = self.answer(
            "Python back-end: FastAPI, Flask, or Django REST.\n\
             Concepts: REST APIs, ORMs, auth, deployment (uvicorn, docker).",
        );
        let back_node = self.answer(
            "Node back-end: Express or Nest.\n\
             Concepts: middleware, routing, JWT, Prisma/TypeORM, PM2.",
        );

        self.link(stack, "python", back_python);
        self.link(stack, "node", back_node);
        self.link(side, "front", front);
        self.link(side, "back", stack);
        side
    }

    fn music_subtree(&mut self) -> NodeId {
        let kind = self.question("Instrument or computer production? (instrument / daw)");
        let instrument = self.answer(
            "Instrument: daily routine, scales, chords, metronome, ear training.",
        );
        let daw = self.answer(
            "Production: pick a DAW (FL, Ableton, Reaper), plugins, song structure, basic mixing.",
        );

        self.link(kind, "instrument", instrument);
        self.link(kind, "daw", daw);
        kind
    }

    fn question(&mut self, text: &str) -> NodeId {
        self.push(Node {
            question: Some(text.to_string()),
            options: Vec::new(),
            answer: None,
        })
    }

    fn answer(&mut self, text: &str) -> NodeId {
        self.push(Node {
            question: None,
            options: Vec::new(),
            answer: Some(text.to_string()),
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn link(&mut self, parent: NodeId, key: &str, child: NodeId) {
        self.nodes[parent].options.push((key.to_string(), child));
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn root_question(&self) -> &str {
        self.nodes[self.root].question.as_deref().unwrap_or_default()
    }

    pub fn is_topic(&self, topic: &str) -> bool {
        self.topics.contains(topic)
    }

    /// Supported topics, sorted.
    pub fn topics(&self) -> Vec<&str> {
        self.topics.iter().map(String::as_str).collect()
    }

    /// Lowercase, trim, and map through the synonym table.
    pub fn normalize(&self, input: &str) -> String {
        let key = input.trim().to_lowercase();
        match self.synonyms.get(key.as_str()) {
            Some(canonical) => canonical.to_string(),
            None => key,
        }
    }
}
