/*!
The lazy parse iterator.

The iterator is the control point of the library: it classifies each
element of the argument vector, hands it to the long- or short-option
resolver, and yields one recognized option at a time. Non-options are
buffered, yielded, or terminal per [`ParseMode`], and the buffered scratch
is merged back into the parser's argument vector on every exit path —
normal completion, the `--` terminator, subcommand dispatch, and an early
drop by the consumer alike.
*/

use std::collections::VecDeque;
use std::ops::ControlFlow;

use crate::config::ParseMode;
use crate::error::Error;
use crate::opt::Opt;
use crate::parser::Parser;
use crate::resolve;

/**
Lazy stream of recognized options.

Yields `Result<Opt, Error>`; an error does not end the stream, so the
consumer decides whether to keep iterating. Once the stream ends (or the
iterator is dropped), the parser's argument vector holds the residue:
buffered non-options in input order, followed by whatever was never
examined.
*/
pub struct Parse {
    parser: Parser,
    chain: Vec<Parser>,
    rest: VecDeque<String>,
    scratch: Vec<String>,
    cluster: String,
    finished: bool,
}

impl Parse {
    pub(crate) fn new(parser: Parser) -> Self {
        let chain = parser.chain();
        let rest: VecDeque<String> = {
            let mut node = parser.node.borrow_mut();
            node.dispatched = None;
            node.args.drain(..).collect()
        };
        Parse {
            parser,
            chain,
            rest,
            scratch: Vec::new(),
            cluster: String::new(),
            finished: false,
        }
    }

    /// Merge the scratch and the unexamined remainder back into the parser
    /// and end the stream.
    fn finish(&mut self) -> Option<Result<Opt, Error>> {
        self.finished = true;
        self.restore();
        None
    }

    fn restore(&mut self) {
        if !self.cluster.is_empty() {
            // A consumer that breaks mid-cluster leaves `-<rest>` at the
            // head of the residue; no input bytes are lost.
            self.rest.push_front(format!("-{}", self.cluster));
            self.cluster.clear();
        }
        let mut residue: Vec<String> = self.scratch.drain(..).collect();
        residue.extend(self.rest.drain(..));
        self.parser.node.borrow_mut().args = residue;
    }

    /// Route an error to the originating parser's sink, honoring
    /// `silent_errors` and the deferred-reporting rule: a child's missing
    /// required argument is returned through the stream but never logged,
    /// leaving the final reporting decision to an outer layer.
    fn log(&self, err: &Error) {
        let (silent, deferred, sink) = {
            let node = self.parser.node.borrow();
            (
                node.config.silent_errors,
                matches!(err, Error::MissingArgument(_)) && node.parent.upgrade().is_some(),
                node.sink.clone(),
            )
        };
        if !silent && !deferred {
            sink(err);
        }
    }

    fn emit(&self, result: Result<Opt, Error>) -> Result<Opt, Error> {
        if let Err(ref err) = result {
            self.log(err);
        }
        result
    }

    /// Consume the next character of the pending short cluster.
    fn step_cluster(&mut self, c: char) -> Result<Opt, Error> {
        let mut word = std::mem::take(&mut self.cluster);
        let mut result = resolve::short(&self.chain, c, &mut word, &mut self.rest);
        self.cluster = word;

        let gnu_words = self.parser.node.borrow().config.gnu_words;
        if gnu_words
            && let Ok(ref mut opt) = result
            && opt.name == "W"
        {
            // `-W word` stands for `--word`: rewrite the yielded name to
            // the bound value. No re-resolution and no registration check;
            // consumers wanting unknown-long-option semantics check after
            // the rewrite.
            opt.name = opt.arg.clone();
        }

        self.emit(result)
    }

    /// A non-option token: a subcommand name hands over the tail and ends
    /// the stream; otherwise the parse-mode decides.
    fn non_option(&mut self, head: String) -> ControlFlow<Option<Result<Opt, Error>>> {
        let found = {
            let node = self.parser.node.borrow();
            match node.commands.is_empty() {
                true => None,
                false => node.commands.find(&head, node.config.fold_commands),
            }
        };

        if let Some(target) = found {
            return ControlFlow::Break(match target {
                Some(child) => {
                    tracing::debug!(command = %head, "dispatching to subcommand");
                    child.set_args(self.rest.drain(..));
                    self.parser.node.borrow_mut().dispatched = Some(child);
                    self.finish()
                }
                None => {
                    let err = Error::CommandWithoutParser(head);
                    self.log(&err);
                    self.finished = true;
                    self.restore();
                    Some(Err(err))
                }
            });
        }

        let mode = self.parser.node.borrow().config.mode;
        match mode {
            ParseMode::Permute => {
                self.scratch.push(head);
                ControlFlow::Continue(())
            }
            ParseMode::Emit => ControlFlow::Break(Some(Ok(Opt::non_option(head)))),
            ParseMode::Stop => {
                self.rest.push_front(head);
                ControlFlow::Break(self.finish())
            }
        }
    }
}

impl Iterator for Parse {
    type Item = Result<Opt, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            if let Some(c) = self.cluster.chars().next() {
                self.cluster.drain(..c.len_utf8());
                return Some(self.step_cluster(c));
            }

            let head = match self.rest.pop_front() {
                Some(head) => head,
                None => return self.finish(),
            };

            if head == "--" {
                return self.finish();
            }

            if let Some(name) = head.strip_prefix("--") {
                let result = resolve::long(&self.chain, name, &mut self.rest);
                return Some(self.emit(result));
            }

            if head.len() > 1 && head.starts_with('-') {
                if self.parser.node.borrow().config.long_only {
                    // Speculative long match; its failure is only surfaced
                    // when no short options could claim the token.
                    match resolve::long(&self.chain, &head[1..], &mut self.rest) {
                        Ok(opt) => return Some(Ok(opt)),
                        Err(err) => {
                            if self.parser.node.borrow().shorts.is_empty() {
                                return Some(self.emit(Err(err)));
                            }
                        }
                    }
                }
                self.cluster = head[1..].to_owned();
                continue;
            }

            // A non-option token (a lone `-` included).
            match self.non_option(head) {
                ControlFlow::Break(item) => return item,
                ControlFlow::Continue(()) => continue,
            }
        }
    }
}

impl Drop for Parse {
    fn drop(&mut self) {
        if !self.finished {
            self.finished = true;
            self.restore();
        }
    }
}
