//! Textual sink with nested frames for canonical SQL emission.

/// Kind of a nested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    /// Bare grouping: controls structure only, adds no delimiters of its own.
    Simple,
    /// Parenthesized function-call argument list.
    FunCall,
}

/// Handle for a frame opened with [`SqlWriter::start_list`].
///
/// Passing the handle back to [`SqlWriter::end_fun_call`] releases the frame
/// and every frame opened after it, so a frame is closed exactly once even
/// when inner emission exits abnormally.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    depth: usize,
}

/// Stateful textual sink for unparse.
///
/// Tokens emitted through [`keyword`](SqlWriter::keyword),
/// [`identifier`](SqlWriter::identifier) and [`literal`](SqlWriter::literal)
/// are single-space separated. A separator emitted through
/// [`sep`](SqlWriter::sep) attaches to the previous token: `sep(",", true)`
/// after `X` yields `X, `.
///
/// A writer is single-threaded per unparse invocation; operators themselves
/// hold no writer state and are freely shared.
#[derive(Debug, Default)]
pub struct SqlWriter {
    buf: String,
    frames: Vec<FrameType>,
    need_space: bool,
}

impl SqlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a nested frame of the given kind. `FunCall` frames print their
    /// opening parenthesis immediately; `Simple` frames print nothing.
    pub fn start_list(&mut self, frame_type: FrameType) -> Frame {
        if frame_type == FrameType::FunCall {
            // Opening paren attaches to the function name before it.
            self.sep("(", false);
        }
        self.frames.push(frame_type);
        Frame {
            depth: self.frames.len(),
        }
    }

    /// Close a frame as the end of a function call, releasing any frames
    /// still open above it.
    pub fn end_fun_call(&mut self, frame: Frame) {
        while self.frames.len() >= frame.depth {
            match self.frames.pop() {
                Some(FrameType::FunCall) => {
                    self.buf.push(')');
                    self.need_space = true;
                }
                Some(FrameType::Simple) => {}
                None => break,
            }
        }
    }

    /// Emit a separator token attached to the previous emission. When
    /// `with_space`, the next token is space-separated from the separator.
    pub fn sep(&mut self, token: &str, with_space: bool) {
        self.buf.push_str(token);
        self.need_space = with_space;
    }

    /// Emit a reserved keyword.
    pub fn keyword(&mut self, token: &str) {
        self.token(token);
    }

    /// Emit an identifier.
    pub fn identifier(&mut self, name: &str) {
        self.token(name);
    }

    /// Emit pre-rendered literal text.
    pub fn literal(&mut self, text: &str) {
        self.token(text);
    }

    /// Number of frames currently open.
    pub fn frame_depth(&self) -> usize {
        self.frames.len()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    fn token(&mut self, s: &str) {
        if self.need_space && !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(s);
        self.need_space = true;
    }
}
