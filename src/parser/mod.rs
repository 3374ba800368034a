// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The two CSV dialects the bundled data comes in.
//!
//! `rfc4180` understands quoting and is required for sources with multi-line
//! cells (mission descriptions). `simple` splits on newlines and commas only.

pub mod rfc4180;
pub mod simple;
