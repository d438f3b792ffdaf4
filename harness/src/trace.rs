//! Console trace: prints each iteration of the search as it happens.
//!
//! Per expansion the trace shows the node being explored (with its level,
//! `g + 1`), every newly generated child with its `f` cost, and the child
//! selected for the frontier. The final block reports the goal's `f`, the
//! number of steps, and the goal board.

use std::io::Write;

use tileslide_search::node::SearchNode;
use tileslide_search::observer::SearchObserver;
use tileslide_search::search::SearchOutcome;

use crate::render::render_board;

const RULE: &str = "------------------------------------------------------------";

/// [`SearchObserver`] writing human-readable progress to `W`.
///
/// Observer callbacks cannot fail, so the first write error is kept and
/// later output is skipped; [`ConsoleTrace::into_inner`] surfaces it.
pub struct ConsoleTrace<W: Write> {
    out: W,
    error: Option<std::io::Error>,
}

impl<W: Write> ConsoleTrace<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Recover the writer.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error any callback hit.
    pub fn into_inner(self) -> Result<W, std::io::Error> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            self.error = Some(e);
        }
    }
}

impl<W: Write> SearchObserver for ConsoleTrace<W> {
    fn on_expand(&mut self, node: &SearchNode, _expansion_order: u64) {
        let text = format!(
            "exploring node at level {} {RULE}\n{}\n\n",
            node.g_cost() + 1,
            render_board(node.state())
        );
        self.emit(&text);
    }

    fn on_children(&mut self, _parent: &SearchNode, children: &[&SearchNode]) {
        let mut text = format!("candidate states and costs {RULE}\n");
        for child in children {
            text.push_str(&render_board(child.state()));
            text.push_str(&format!("\nestimated cost f = {}\n\n", child.f_cost()));
        }
        self.emit(&text);
    }

    fn on_reinsert(&mut self, node: &SearchNode) {
        let text = format!(
            "selected state {RULE}\n{}\nestimated cost f = {}\n\n",
            render_board(node.state()),
            node.f_cost()
        );
        self.emit(&text);
    }

    fn on_finish(&mut self, outcome: &SearchOutcome) {
        let text = match outcome {
            SearchOutcome::Solved(solution) => {
                let last = solution
                    .path
                    .last()
                    .map(render_board)
                    .unwrap_or_default();
                format!(
                    "result {RULE}\nfinal f = {}\nsteps to solution: {}\n\n{last}\n",
                    solution.g_cost + solution.h_cost,
                    solution.g_cost
                )
            }
            SearchOutcome::Exhausted => {
                format!("result {RULE}\nno solution found under this policy\n")
            }
        };
        self.emit(&text);
        if self.error.is_none() {
            if let Err(e) = self.out.flush() {
                self.error = Some(e);
            }
        }
    }
}
