//
// Copyright (c) 2026 winln-rs contributors
//
// This file is part of the winln-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

/// One recognized option.
///
/// A table is a plain `&[Opt]`; the slice length bounds the lookup, so no
/// sentinel entry is needed. Lookup is in table order and the first matching
/// entry wins, which only matters if the caller supplies duplicate names or
/// short codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opt {
    /// Long name, matched against `--name` by exact length and content.
    /// Empty for options that only have a short form.
    pub name: &'static str,

    /// Short code, matched against `-x` and returned as the option's
    /// identity for long matches as well.
    pub short: char,

    /// Whether the option consumes an argument, either inline
    /// (`-xvalue`, `--name=value`) or as the following vector element.
    pub has_arg: bool,
}

impl Opt {
    pub const fn new(name: &'static str, short: char, has_arg: bool) -> Self {
        Opt {
            name,
            short,
            has_arg,
        }
    }
}
