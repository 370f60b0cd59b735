//! Graphviz DOT export.
//!
//! The output is deterministic: nodes are written in key order, followed by their outgoing
//! edges in key order. A node's labels are shown as a record field next to its name.
//!
//! ```text
//! digraph DAG {
//! rankdir="LR"
//! "api" [shape=record, label="{api|{tier:api}}"]
//! "db" [shape=record, label="{db}"]
//! "db" -> "api"
//! }
//! ```
//!
//! Render it with `dot -Tpng plan.dot -o plan.png`.

use std::io::{self, Write};

use crate::graph::Dag;
use crate::key::Key;

impl<K: Key> Dag<K> {
    /// Write the graph in DOT format to `writer`.
    ///
    /// Only registered nodes are written, along with the edges leaving them.
    ///
    /// # Examples
    ///
    /// ```
    /// use dagplan::{AddOptions, Dag};
    ///
    /// let mut dag = Dag::new();
    /// dag.add("api", AddOptions::new().dependencies(["db"]).labels(["tier:api"]));
    /// dag.add_node("db");
    ///
    /// let mut out = Vec::new();
    /// dag.write_dot(&mut out).unwrap();
    ///
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "digraph DAG {\n\
    ///      rankdir=\"LR\"\n\
    ///      \"api\" [shape=record, label=\"{api|{tier:api}}\"]\n\
    ///      \"db\" [shape=record, label=\"{db}\"]\n\
    ///      \"db\" -> \"api\"\n\
    ///      }\n"
    /// );
    /// ```
    pub fn write_dot<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for line in self.dot_lines() {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// The DOT export as a string.
    pub fn to_dot(&self) -> String {
        self.dot_lines().fold(String::new(), |mut out, line| {
            out.push_str(&line);
            out.push('\n');
            out
        })
    }

    /// Every line of the export, without line terminators.
    fn dot_lines(&self) -> impl Iterator<Item = String> + '_ {
        let header = ["digraph DAG {".to_string(), "rankdir=\"LR\"".to_string()];

        let nodes = self.registered.iter().map(move |node| {
            let name = node.to_string();
            let label = match self.labels.get(node) {
                Some(labels) if !labels.is_empty() => {
                    let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
                    format!("{{{}|{{{}}}}}", name, labels.join("|"))
                }
                _ => format!("{{{}}}", name),
            };

            format!("{} [shape=record, label={}]", quote(&name), quote(&label))
        });

        let edges = self.registered.iter().flat_map(move |from| {
            let from_quoted = quote(&from.to_string());
            self.outputs
                .get(from)
                .into_iter()
                .flatten()
                .map(move |to| format!("{} -> {}", from_quoted, quote(&to.to_string())))
        });

        header
            .into_iter()
            .chain(nodes)
            .chain(edges)
            .chain(std::iter::once("}".to_string()))
    }
}

/// Double-quotes `s`, escaping it the way DOT string literals (and Go's `%q`) expect.
pub(crate) fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');

    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{07}' => quoted.push_str("\\a"),
            '\u{08}' => quoted.push_str("\\b"),
            '\u{0c}' => quoted.push_str("\\f"),
            '\u{0b}' => quoted.push_str("\\v"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                quoted.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => quoted.push(c),
        }
    }

    quoted.push('"');
    quoted
}
