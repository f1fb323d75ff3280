//
// Copyright (c) 2026 winln-rs contributors
//
// This file is part of the winln-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::table::Opt;

/// Result of one [`OptParser::next_opt`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedOpt<'a> {
    /// A recognized option. `arg` is present iff the matching table entry
    /// declares `has_arg`, except when the option was the last vector
    /// element and nothing was left to consume; the caller is expected to
    /// treat `arg == None` on an argument-taking option as a usage error.
    Opt { code: char, arg: Option<&'a str> },

    /// A token shaped like an option that matched no table entry. `token`
    /// is a display form of the offending flag (`--fun`, `-x`). The token
    /// is consumed like a recognized option, so the parse makes progress.
    Unknown { token: String },

    /// No option tokens remain, or `--` was reached. Terminal: every
    /// further call returns `Done` without touching the vector.
    Done,
}

/// Where the argument for the option under classification lives.
#[derive(Clone, Copy)]
enum ArgSrc {
    None,
    /// Inline in the option token itself, starting at this byte offset.
    Inline(usize),
    /// The vector element following the option token.
    Next,
}

/// One parse session over one argument vector.
///
/// The vector is moved in, so a session holds exclusive ownership for its
/// whole lifetime; resetting is constructing a new session. Element 0 is
/// the program name and is never examined or moved.
///
/// `argv[1..lastarg]` is the permuted front region: fully processed option
/// tokens and the arguments they consumed, in discovery order. `lastarg`
/// only grows. Once `next_opt` has returned [`ParsedOpt::Done`],
/// `argv[lastarg..]` holds exactly the positional operands in their
/// original relative order.
pub struct OptParser<'o> {
    argv: Vec<String>,
    opts: &'o [Opt],

    /// End of the permuted front region (the boundary).
    lastarg: usize,
    /// Scan resumption point. Differs from `lastarg` only mid-cluster,
    /// where compaction is deferred until the whole pack is consumed.
    optind: usize,
    /// Byte offset of the next flag character inside a packed short-option
    /// token, or 0 when not inside a pack.
    optpos: usize,
    done: bool,
}

impl<'o> OptParser<'o> {
    pub fn new(argv: Vec<String>, opts: &'o [Opt]) -> Self {
        OptParser {
            argv,
            opts,
            lastarg: 1,
            optind: 1,
            optpos: 0,
            done: false,
        }
    }

    /// The positional operands. Meaningful once `next_opt` has returned
    /// [`ParsedOpt::Done`]; before that the tail still contains unexamined
    /// option tokens.
    pub fn positionals(&self) -> &[String] {
        &self.argv[self.lastarg.min(self.argv.len())..]
    }

    /// Classify the next option occurrence, permuting it (and any argument
    /// element it consumed) down to the boundary once fully processed.
    pub fn next_opt(&mut self) -> ParsedOpt<'_> {
        if self.done {
            return ParsedOpt::Done;
        }

        let mut idx = self.optind;
        if self.optpos == 0 {
            while idx < self.argv.len() && !self.argv[idx].starts_with('-') {
                idx += 1;
            }
            if idx == self.argv.len() {
                self.done = true;
                return ParsedOpt::Done;
            }
        }

        let mut code = None;
        let mut argsrc = ArgSrc::None;
        let mut unknown = None;
        let mut npos = 1;
        let mut cluster_done = true;
        let mut next_optpos = 0;

        let longopt = {
            let arg = self.argv[idx].as_str();
            arg.as_bytes().get(1) == Some(&b'-')
        };

        if longopt && self.argv[idx].len() == 2 {
            // "--": end of options. Folded into the front region so it does
            // not appear among the positionals, then the session goes inert.
            if idx != self.lastarg {
                self.argv[self.lastarg..=idx].rotate_right(1);
            }
            self.lastarg += 1;
            self.optind = self.lastarg;
            self.done = true;
            return ParsedOpt::Done;
        }

        if longopt {
            let arg = self.argv[idx].as_str();
            let (name, eq_val) = match arg[2..].find('=') {
                Some(i) => (&arg[2..2 + i], Some(2 + i + 1)),
                None => (&arg[2..], None),
            };

            let hit = self
                .opts
                .iter()
                .find(|o| !o.name.is_empty() && o.name == name);
            match hit {
                Some(o) => {
                    code = Some(o.short);
                    if o.has_arg {
                        match eq_val {
                            Some(voff) => argsrc = ArgSrc::Inline(voff),
                            None if idx + 1 < self.argv.len() => {
                                argsrc = ArgSrc::Next;
                                npos = 2;
                            }
                            // Declared argument but nothing follows: report
                            // the option anyway, consume only its own slot,
                            // and let the driver notice the missing value.
                            None => {}
                        }
                    }
                }
                None => {
                    unknown = Some(if name.is_empty() {
                        arg.to_string()
                    } else {
                        format!("--{}", name)
                    });
                }
            }
        } else {
            let pos = if self.optpos == 0 { 1 } else { self.optpos };
            let arg = self.argv[idx].as_str();

            match arg[pos.min(arg.len())..].chars().next() {
                Some(c) => {
                    let after = pos + c.len_utf8();
                    match self.opts.iter().find(|o| o.short == c) {
                        Some(o) => {
                            code = Some(c);
                            if o.has_arg && after < arg.len() {
                                // Remainder of the pack is the inline
                                // argument; it consumes the token.
                                argsrc = ArgSrc::Inline(after);
                            } else if o.has_arg && idx + 1 < self.argv.len() {
                                argsrc = ArgSrc::Next;
                                npos = 2;
                            }
                        }
                        None => unknown = Some(format!("-{}", c)),
                    }

                    if !matches!(argsrc, ArgSrc::Inline(_)) && after < arg.len() {
                        // More flags remain in this pack; keep the token in
                        // place and resume inside it on the next call.
                        cluster_done = false;
                        next_optpos = after;
                    }
                }
                // Bare "-" (or an exhausted pack): nothing to match.
                None => unknown = Some("-".to_string()),
            }
        }

        self.optpos = next_optpos;

        let tok_at = if cluster_done {
            if idx != self.lastarg {
                self.argv[self.lastarg..idx + npos].rotate_right(npos);
            }
            let base = self.lastarg;
            self.lastarg += npos;
            self.optind = self.lastarg;
            base
        } else {
            self.optind = idx;
            idx
        };

        match code {
            Some(code) => {
                let arg = match argsrc {
                    ArgSrc::None => None,
                    ArgSrc::Inline(off) => Some(&self.argv[tok_at][off..]),
                    ArgSrc::Next => Some(self.argv[tok_at + 1].as_str()),
                };
                ParsedOpt::Opt { code, arg }
            }
            None => ParsedOpt::Unknown {
                token: unknown.unwrap_or_default(),
            },
        }
    }
}
