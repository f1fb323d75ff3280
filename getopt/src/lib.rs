//
// Copyright (c) 2026 winln-rs contributors
//
// This file is part of the winln-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//
// Permuting command-line option parser in the manner of an extended
// getopt_long: recognized options (and any arguments they consume) are
// rotated to the front of the argument vector in discovery order, leaving
// the positional operands behind them in their original relative order.
//

pub mod parser;
pub mod table;

pub use parser::{OptParser, ParsedOpt};
pub use table::Opt;
