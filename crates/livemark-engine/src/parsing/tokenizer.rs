use log::trace;

use super::{
    blocks::{
        kinds::{BlockQuote, CodeBlock, CodeFence, Heading, Paragraph, ThematicBreak},
        list::ListRule,
    },
    ruler::{BlockRule, Chain, Terminator},
    state::BlockState,
};

/// The host block tokenizer: an ordered rule set plus the dispatch loop.
pub struct BlockTokenizer {
    rules: Vec<Box<dyn BlockRule>>,
}

impl BlockTokenizer {
    /// Tokenizer with the built-in rules in priority order.
    pub fn new() -> Self {
        Self::with_rules(vec![
            Box::new(CodeBlock),
            Box::new(CodeFence),
            Box::new(BlockQuote),
            Box::new(ThematicBreak),
            Box::new(ListRule),
            Box::new(Heading),
            Box::new(Paragraph),
        ])
    }

    /// Tokenizer with a custom rule set. The last rule should always match
    /// (like [`Paragraph`]) or unmatched lines are skipped.
    pub fn with_rules(rules: Vec<Box<dyn BlockRule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name())
    }

    /// Rules registered as able to interrupt `chain`, in priority order.
    pub fn terminators(&self, chain: Chain) -> impl Iterator<Item = &dyn BlockRule> + '_ {
        self.rules
            .iter()
            .filter(move |r| r.terminates().contains(&chain))
            .map(|r| r.as_ref())
    }

    /// Parses lines `[start_line, end_line)` with the full rule set.
    ///
    /// Stops early at the first non-blank line indented less than
    /// `state.block_indent`. With `break_on_failure` the loop also stops at a
    /// line no rule claims; otherwise that line is skipped.
    ///
    /// Leaves `state.line` at the first unconsumed line and `state.tight`
    /// reflecting whether any blank line separated the blocks parsed here.
    pub fn tokenize(
        &self,
        state: &mut BlockState<'_>,
        start_line: usize,
        end_line: usize,
        break_on_failure: bool,
    ) {
        let mut line = start_line;
        let mut has_empty_lines = false;
        state.depth += 1;

        while line < end_line {
            line = state.skip_empty_lines(line);
            state.line = line;
            if line >= end_line {
                break;
            }

            // Dedent closes the enclosing block.
            if state.indent_shift[line] < state.block_indent {
                break;
            }

            let matched = self.rules.iter().find(|r| r.run(state, line, end_line, false));
            match matched {
                Some(rule) => trace!("{} claimed lines {line}..{}", rule.name(), state.line),
                None if break_on_failure => break,
                None => {
                    line += 1;
                    state.line = line;
                    continue;
                }
            }

            state.tight = !has_empty_lines;
            if state.line > 0 && state.is_empty(state.line - 1) {
                has_empty_lines = true;
            }

            line = state.line;
            if line < end_line && state.is_empty(line) {
                has_empty_lines = true;
                line += 1;
                state.line = line;
            }
        }

        state.depth -= 1;
    }
}

impl Default for BlockTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// True when any rule registered for `chain` would claim `line`.
pub fn is_terminated(state: &mut BlockState<'_>, chain: Chain, line: usize, end_line: usize) -> bool {
    let tokenizer = state.tokenizer();
    tokenizer
        .terminators(chain)
        .any(|rule| rule.probe(state, line, end_line))
}
