//
// Copyright (c) 2026 winln-rs contributors
//
// This file is part of the winln-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

pub mod testing;

pub const PROJECT_NAME: &'static str = "winln-rs";

pub use testing::*;
