/// List markers in wikitext are repeated per nesting level, e.g. `*#`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    fn marker(self) -> char {
        match self {
            ListKind::Bullet => '*',
            ListKind::Numbered => '#',
        }
    }
}

/// Output buffer shared by the markdown and HTML front ends.
#[derive(Debug, Default)]
pub(crate) struct WikiWriter {
    out: String,
    lists: Vec<ListKind>,
}

impl WikiWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    pub fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Pushes inline text, folding whitespace runs into a single space.
    pub fn push_text(&mut self, text: &str) {
        let mut folded = String::with_capacity(text.len());
        let mut in_space = self.at_line_start() || self.out.ends_with(' ');
        for ch in text.chars() {
            if ch.is_whitespace() {
                if !in_space {
                    folded.push(' ');
                    in_space = true;
                }
            } else {
                folded.push(ch);
                in_space = false;
            }
        }
        self.out.push_str(&folded);
    }

    pub fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n')
    }

    /// Starts a new line unless already at one. Trailing blanks are dropped.
    pub fn ensure_newline(&mut self) {
        let trimmed = self.out.trim_end_matches(|c: char| c == ' ' || c == '\t').len();
        self.out.truncate(trimmed);
        if !self.at_line_start() {
            self.out.push('\n');
        }
    }

    /// Closes a block level construct with a blank line.
    pub fn end_block(&mut self) {
        self.ensure_newline();
        self.out.push('\n');
    }

    pub fn in_list(&self) -> bool {
        !self.lists.is_empty()
    }

    pub fn start_list(&mut self, kind: ListKind) {
        self.ensure_newline();
        self.lists.push(kind);
    }

    pub fn end_list(&mut self) {
        self.lists.pop();
        if self.lists.is_empty() {
            self.end_block();
        } else {
            self.ensure_newline();
        }
    }

    /// A paragraph following text in the same list item starts after a
    /// `<br />`. List items cannot span lines in wikitext.
    pub fn item_paragraph(&mut self) {
        let line = self.out.rsplit('\n').next().unwrap_or_default();
        let has_text = !line
            .trim_start_matches(|c: char| c == '*' || c == '#')
            .trim()
            .is_empty();
        if has_text {
            let trimmed = self.out.trim_end_matches(|c: char| c == ' ' || c == '\t').len();
            self.out.truncate(trimmed);
            self.out.push_str("<br />");
        }
    }

    pub fn start_item(&mut self) {
        self.ensure_newline();
        let markers: String = self.lists.iter().map(|kind| kind.marker()).collect();
        self.out.push_str(&markers);
        self.out.push(' ');
    }

    pub fn heading(&mut self, level: usize) {
        self.ensure_newline();
        self.out.push_str(&"=".repeat(level));
        self.out.push(' ');
    }

    pub fn end_heading(&mut self, level: usize) {
        self.out.push(' ');
        self.out.push_str(&"=".repeat(level));
        self.end_block();
    }
}
