//! Tokenization for template engine
//!
//! Provides O(n) tokenization using a state machine.

/// A single `{{...}}` token with position and key
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    /// Trimmed text between the braces
    pub key: String,
    /// Absolute byte position of `{{` in template
    pub start: usize,
    /// Total length in bytes including {{ and }}
    pub length: usize,
    /// Line number where token starts (for diagnostics)
    pub line: usize,
}

impl Token {
    /// Byte position just past the closing `}}`
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Tokenization state machine (explicit for testability)
///
/// # State Transitions
///
/// ```text
/// Normal ──{───> SeenLBrace ──{───> InToken ──}───> SeenRBrace ──}───> [Yield Token] → Normal
///   │               │                  │                  │
///   │ (not {)       │ (not {)          │ (\n or {)        │ (not })
///   └──────────────>└─────────────────>└──> Normal /      └──────────> InToken
///                                          SeenLBrace
/// ```
///
/// Placeholders never span lines and never contain `{`: a newline inside a
/// token abandons it, and a `{` inside a token restarts the scan at that brace.
/// An unclosed `{{` is therefore plain text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScanState {
    /// Normal text scanning
    Normal,

    /// Seen first `{`, checking for second `{`
    SeenLBrace {
        /// Position of the first `{` character
        pos: usize,
    },

    /// Inside `{{...}}`, scanning until `}}`
    InToken {
        /// Byte position of the opening `{{`
        start: usize,
        /// Byte position where token content starts (after `{{`)
        content_start: usize,
    },

    /// Seen first `}` inside token, checking for second `}`
    SeenRBrace {
        /// Byte position of the opening `{{`
        start: usize,
        /// Byte position where token content starts (after `{{`)
        content_start: usize,
        /// Position of the first `}` character
        rbrace_pos: usize,
    },
}

/// Iterator over tokens in a template string
///
/// # Performance
///
/// - **O(n) guarantee**: Each byte processed at most twice
/// - **Forward-only**: Position never moves backward
pub(crate) struct TokenStream<'a> {
    /// Template text
    text: &'a str,
    /// Current byte position
    pos: usize,
    /// State machine state
    state: ScanState,
    /// Current line number
    line: usize,
    /// Step count for O(n) guard
    step_count: usize,
}

impl<'a> TokenStream<'a> {
    /// Create a new TokenStream from template text
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            state: ScanState::Normal,
            line: 1,
            step_count: 0,
        }
    }

    /// Check if we should continue iteration (guards for step budget and EOF)
    #[inline]
    fn should_continue(&mut self, max_steps: usize) -> bool {
        self.step_count += 1;
        self.step_count <= max_steps && self.pos < self.text.len()
    }

    /// Record step for O(n) performance verification in tests
    #[cfg(test)]
    #[inline]
    fn record_test_step() {
        test_counter::inc();
    }

    fn process_normal_state(&mut self, byte: u8) {
        if byte == b'{' {
            self.state = ScanState::SeenLBrace { pos: self.pos };
        } else if byte == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }

    /// Returns true if position was advanced, false if byte should be reprocessed
    fn process_seen_lbrace(&mut self, byte: u8, lbrace_pos: usize) -> bool {
        if byte == b'{' {
            self.state = ScanState::InToken {
                start: lbrace_pos,
                content_start: self.pos + 1,
            };
            self.pos += 1;
            true
        } else {
            self.state = ScanState::Normal;
            false
        }
    }

    fn process_in_token(&mut self, byte: u8, start: usize, content_start: usize) {
        match byte {
            b'}' => {
                self.state = ScanState::SeenRBrace {
                    start,
                    content_start,
                    rbrace_pos: self.pos,
                };
            }
            // `{{{key}}`: slide the opening over by one brace
            b'{' if self.pos == content_start => {
                self.state = ScanState::InToken {
                    start: start + 1,
                    content_start: content_start + 1,
                };
            }
            b'{' => {
                self.state = ScanState::SeenLBrace { pos: self.pos };
            }
            b'\n' => {
                self.line += 1;
                self.state = ScanState::Normal;
            }
            _ => {}
        }
        self.pos += 1;
    }

    /// Returns the finished token, if the byte closed one
    fn process_seen_rbrace(
        &mut self,
        byte: u8,
        start: usize,
        content_start: usize,
        rbrace_pos: usize,
    ) -> Option<Token> {
        if byte == b'}' {
            let key = self.text[content_start..rbrace_pos].trim();
            let token = (!key.is_empty()).then(|| Token {
                key: key.to_string(),
                start,
                length: self.pos + 1 - start,
                line: self.line,
            });

            self.state = ScanState::Normal;
            self.pos += 1;

            token
        } else {
            // A lone `}` inside content, reprocess this byte in InToken state
            self.state = ScanState::InToken {
                start,
                content_start,
            };
            None
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        const MAX_STEPS_MULTIPLIER: usize = 3;
        let max_steps = self.text.len().saturating_mul(MAX_STEPS_MULTIPLIER);

        loop {
            if !self.should_continue(max_steps) {
                return None;
            }

            let byte = self.text.as_bytes()[self.pos];
            #[cfg(test)]
            Self::record_test_step();

            match self.state.clone() {
                ScanState::Normal => self.process_normal_state(byte),
                ScanState::SeenLBrace { pos } => {
                    if !self.process_seen_lbrace(byte, pos) {
                        continue;
                    }
                }
                ScanState::InToken {
                    start,
                    content_start,
                } => self.process_in_token(byte, start, content_start),
                ScanState::SeenRBrace {
                    start,
                    content_start,
                    rbrace_pos,
                } => {
                    if let Some(token) =
                        self.process_seen_rbrace(byte, start, content_start, rbrace_pos)
                    {
                        return Some(token);
                    }
                }
            }
        }
    }
}

/// Test-only step counter for O(n) performance verification
///
/// Thread-local so parallel tests don't interfere.
#[cfg(test)]
pub(crate) mod test_counter {
    use std::cell::Cell;

    thread_local! {
        static TEST_STEP_COUNTER: Cell<usize> = const { Cell::new(0) };
    }

    pub(crate) fn reset() {
        TEST_STEP_COUNTER.with(|c| c.set(0));
    }

    pub(crate) fn get() -> usize {
        TEST_STEP_COUNTER.with(|c| c.get())
    }

    pub(crate) fn inc() {
        TEST_STEP_COUNTER.with(|c| c.set(c.get() + 1));
    }
}
