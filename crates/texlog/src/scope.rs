use std::sync::Arc;

/// Longest label pushed for a `(` that has no file name after it.
pub const PLACEHOLDER_MAX_CHARS: usize = 64;

/// Stack of input files the engine currently has open.
///
/// TeX prints `(` followed by a file name when it opens a file and `)` when it
/// closes it. Nothing else in the log is balanced reliably, so the stack never
/// fails: an unmatched `)` is ignored and a `(` without a recognizable file
/// name still pushes an entry (the start of the raw line) to keep the depth
/// right.
///
/// Entries are reference counted, so snapshots and repeated placeholders share
/// their text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeStack {
    files: Vec<Arc<str>>,
    pushes: usize,
    pops: usize,
    ignored_pops: usize,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies every parenthesis on `line`, left to right.
    pub fn process_line(&mut self, line: &str) {
        if !line.contains(['(', ')']) {
            return;
        }
        let mut placeholder: Option<Arc<str>> = None;
        for (idx, c) in line.char_indices() {
            match c {
                '(' => {
                    let label = match path_after_paren(&line[idx + 1..]) {
                        Some(path) => Arc::from(path),
                        None => placeholder
                            .get_or_insert_with(|| Arc::from(placeholder_for(line)))
                            .clone(),
                    };
                    self.push(label);
                }
                ')' => {
                    self.pop();
                }
                _ => {}
            }
        }
    }

    pub fn push(&mut self, path: Arc<str>) {
        self.pushes += 1;
        self.files.push(path);
    }

    pub fn pop(&mut self) -> Option<Arc<str>> {
        let popped = self.files.pop();
        if popped.is_some() {
            self.pops += 1;
        } else {
            self.ignored_pops += 1;
            log::trace!("Ignoring unmatched closing parenthesis");
        }
        popped
    }

    pub fn depth(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Open files, outermost first.
    pub fn files(&self) -> &[Arc<str>] {
        &self.files
    }

    /// Copy of the open files, immune to later pushes and pops.
    pub fn snapshot(&self) -> Vec<Arc<str>> {
        self.files.clone()
    }

    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn pops(&self) -> usize {
        self.pops
    }

    /// Closing parentheses seen while the stack was already empty.
    pub fn ignored_pops(&self) -> usize {
        self.ignored_pops
    }
}

/// The label pushed for a `(` that is not followed by a file name: the line
/// itself, cut to at most [`PLACEHOLDER_MAX_CHARS`] characters.
fn placeholder_for(line: &str) -> &str {
    match line.char_indices().nth(PLACEHOLDER_MAX_CHARS) {
        Some((end, _)) => &line[..end],
        None => line,
    }
}

/// Returns the token right after a `(` if it looks like a file path.
fn path_after_paren(rest: &str) -> Option<&str> {
    let end = rest
        .find(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .unwrap_or(rest.len());
    let token = &rest[..end];
    looks_like_path(token).then_some(token)
}

/// A token has a path shape when it contains a `/` or ends in a dotted
/// extension that starts with a letter (`main.tex`, `article.cls`).
///
/// Requiring a letter keeps dimensions such as `5.0pt` out.
pub fn looks_like_path(token: &str) -> bool {
    if token.contains('/') {
        return true;
    }
    match token.rsplit_once('.') {
        Some((stem, ext)) => {
            !stem.is_empty()
                && ext.starts_with(|c: char| c.is_ascii_alphabetic())
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        }
        None => false,
    }
}
