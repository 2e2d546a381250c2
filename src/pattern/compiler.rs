//! Tokenizer for the pattern mini-language: a cursor over the source string plus
//! a stack of open `%(` groups, all local to one compile call.

use super::node::{NodeKind, PatternNode};
use crate::error::Error;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// Token rules, each anchored to match exactly at the cursor. Priority order is
// fixed; notably caller must be tried before logger, because the short logger
// token `%c` would otherwise eat the head of a `%caller` occurrence.

static PERCENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^%%").expect("invalid percent token regex"));

static NEWLINE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^%n").expect("invalid newline token regex"));

static LEVEL_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^%([-+]?\d+)?(\.([-+]?\d+))?(?:level|p)").expect("invalid level token regex")
});

static CALLER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^%([-+]?\d+)?(\.([-+]?\d+))?(?:caller|C)(\{([-+]?\d+)?(\.([-+]?\d+))?\})?")
        .expect("invalid caller token regex")
});

static LOGGER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^%([-+]?\d+)?(\.([-+]?\d+))?(?:logger|c)(\{([-+]?\d+)?(\.([-+]?\d+))?\})?")
        .expect("invalid logger token regex")
});

static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^%(?:date|d)(\{(.*?)\})?").expect("invalid date token regex")
});

static GROUP_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^%([-+]?\d+)?(\.([-+]?\d+))?\(").expect("invalid group token regex")
});

/// An in-progress `%(` group: its width spec plus the children parsed so far.
struct GroupFrame {
    min_width: i32,
    max_width: i32,
    children: Vec<PatternNode>,
}

impl GroupFrame {
    const fn new(min_width: i32, max_width: i32) -> Self {
        Self {
            min_width,
            max_width,
            children: Vec::new(),
        }
    }

    fn into_node(self) -> PatternNode {
        PatternNode::new(self.min_width, self.max_width, NodeKind::Group(self.children))
    }
}

/// All compiler state lives here and dies with the compile call — nothing shared,
/// nothing global.
pub(super) struct Compiler<'a> {
    source: &'a str,
    position: usize,
    root: GroupFrame,
    open: Vec<GroupFrame>,
}

impl<'a> Compiler<'a> {
    pub(super) const fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            root: GroupFrame::new(0, 0),
            open: Vec::new(),
        }
    }

    /// Runs the scan to completion, producing the root group node.
    ///
    /// Group closing is single-level-correct: the next `)` closes the innermost
    /// open group, so deeply nested groups may close against the wrong
    /// parenthesis. Groups still open at end of input close implicitly.
    pub(super) fn compile(mut self) -> Result<PatternNode, Error> {
        let source = self.source;
        while self.position < source.len() {
            let rest = &source[self.position..];
            let percent = rest.find('%').map(|i| self.position + i);
            let close = rest.find(')').map(|i| self.position + i);

            if !self.open.is_empty()
                && let Some(close) = close
                && percent.is_none_or(|p| close < p)
            {
                self.push_literal(self.position, close);
                self.close_group();
                self.position = close + 1;
                continue;
            }

            match percent {
                None => {
                    self.push_literal(self.position, source.len());
                    self.position = source.len();
                }
                Some(at) => {
                    self.push_literal(self.position, at);
                    self.position = at;
                    self.token()?;
                }
            }
        }

        while !self.open.is_empty() {
            self.close_group();
        }
        Ok(self.root.into_node())
    }

    fn top(&mut self) -> &mut GroupFrame {
        match self.open.last_mut() {
            Some(frame) => frame,
            None => &mut self.root,
        }
    }

    fn push_node(&mut self, node: PatternNode) {
        self.top().children.push(node);
    }

    fn push_literal(&mut self, start: usize, end: usize) {
        if start < end {
            let text = self.source[start..end].to_string();
            self.push_node(PatternNode::new(0, 0, NodeKind::Literal(text)));
        }
    }

    fn close_group(&mut self) {
        if let Some(frame) = self.open.pop() {
            self.push_node(frame.into_node());
        }
    }

    /// Tries every token rule at the cursor, first match wins.
    fn token(&mut self) -> Result<(), Error> {
        let rest = &self.source[self.position..];

        if let Some(found) = PERCENT_TOKEN.find(rest) {
            self.push_node(PatternNode::new(0, 0, NodeKind::Literal("%".to_string())));
            self.position += found.end();
            return Ok(());
        }
        if let Some(found) = NEWLINE_TOKEN.find(rest) {
            self.push_node(PatternNode::new(0, 0, NodeKind::Literal("\n".to_string())));
            self.position += found.end();
            return Ok(());
        }
        if let Some(caps) = LEVEL_TOKEN.captures(rest) {
            let (min_width, max_width) = self.widths(&caps)?;
            self.push_node(PatternNode::new(min_width, max_width, NodeKind::Severity));
            self.advance(&caps);
            return Ok(());
        }
        if let Some(caps) = CALLER_TOKEN.captures(rest) {
            let (min_width, max_width) = self.widths(&caps)?;
            let segments = self.number(&caps, 5)?;
            let budget = self.number(&caps, 7)?;
            self.push_node(PatternNode::new(
                min_width,
                max_width,
                NodeKind::Caller { segments, budget },
            ));
            self.advance(&caps);
            return Ok(());
        }
        if let Some(caps) = LOGGER_TOKEN.captures(rest) {
            let (min_width, max_width) = self.widths(&caps)?;
            let segments = self.number(&caps, 5)?;
            let budget = self.number(&caps, 7)?;
            self.push_node(PatternNode::new(
                min_width,
                max_width,
                NodeKind::LoggerName { segments, budget },
            ));
            self.advance(&caps);
            return Ok(());
        }
        if let Some(caps) = DATE_TOKEN.captures(rest) {
            let format = caps.get(2).map(|m| m.as_str().to_string());
            self.push_node(PatternNode::new(0, 0, NodeKind::Timestamp { format }));
            self.advance(&caps);
            return Ok(());
        }
        if let Some(caps) = GROUP_TOKEN.captures(rest) {
            let (min_width, max_width) = self.widths(&caps)?;
            self.open.push(GroupFrame::new(min_width, max_width));
            self.advance(&caps);
            return Ok(());
        }

        Err(self.malformed())
    }

    fn advance(&mut self, caps: &Captures<'_>) {
        self.position += caps.get(0).map_or(0, |m| m.end());
    }

    /// Outer `count.length` width spec shared by every parameterized token.
    fn widths(&self, caps: &Captures<'_>) -> Result<(i32, i32), Error> {
        Ok((self.number(caps, 1)?, self.number(caps, 3)?))
    }

    /// Absent capture means 0; a numeric overflow makes the pattern malformed
    /// rather than silently clamping.
    fn number(&self, caps: &Captures<'_>, group: usize) -> Result<i32, Error> {
        caps.get(group).map_or(Ok(0), |m| {
            m.as_str().parse().map_err(|_| self.malformed())
        })
    }

    fn malformed(&self) -> Error {
        Error::MalformedPattern {
            pattern: self.source.to_string(),
            position: self.position,
        }
    }
}
