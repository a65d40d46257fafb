use super::state::BlockState;

/// A block construct that other blocks may be interrupted by.
///
/// Each rule lists the chains it can terminate; e.g. a fence may end a
/// paragraph or a list without a blank line in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chain {
    Paragraph,
    List,
}

/// A block-level rule tried by the tokenizer in priority order.
///
/// `run` either matches and consumes lines (advancing `state.line`, pushing
/// tokens) and returns `true`, or returns `false` leaving `state` untouched.
/// With `silent` set it only reports whether it would match and must not
/// mutate `state` at all.
pub trait BlockRule {
    fn name(&self) -> &'static str;

    /// Chains this rule may interrupt.
    fn terminates(&self) -> &'static [Chain] {
        &[]
    }

    fn run(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize, silent: bool)
    -> bool;
}

/// Lookahead view of a rule: "would you claim this line?"
pub trait Terminator {
    fn probe(&self, state: &mut BlockState<'_>, line: usize, end_line: usize) -> bool;
}

impl<R: BlockRule + ?Sized> Terminator for R {
    fn probe(&self, state: &mut BlockState<'_>, line: usize, end_line: usize) -> bool {
        self.run(state, line, end_line, true)
    }
}
