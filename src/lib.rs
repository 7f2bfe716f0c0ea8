// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Simple crate for picking flags and key/value pairs out of
//! command-line arguments.
//!
//! There is no grammar: you say which keys you are interested in and the
//! crate finds them, wherever they appear. Everything it does not
//! recognise is left for you to deal with.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Assignment operators](#assignment-operators)
//! * [Consumption](#consumption)
//! * [Logging](#logging)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! - A [CommandLine] holds the arguments and remembers which of them
//!   have been matched ("consumed").
//! - A [Parameter] holds the matches for one logical option. It is created
//!   from a [CommandLine] and filled by [Parameter::parse()] (flags) and
//!   [Parameter::parse_pairs()] (keys with values).
//! - An [AsgOp] describes how a key and its value are joined:
//!   `--name=value`, `--name value`, _etc_.
//!
//! # Quickstart
//!
//! ```rust
//! use cmdl::{AsgOp, CommandLine};
//!
//! // Normally you would call `CommandLine::new()` to use the
//! // arguments of the current process.
//! let cl = CommandLine::from_args(vec!["-v", "--output=out.txt", "in.txt"]);
//!
//! let verbose = cl.new_param().parse(&["-v", "--verbose"]);
//!
//! let asg_op = AsgOp::new(true, false, &["="]);
//! let output = cl.new_param().parse_pairs(&asg_op, &["-o", "--output"]);
//!
//! assert!(verbose.available());
//! assert_eq!(output.value(), Some("out.txt"));
//!
//! // Whatever was not matched.
//! assert_eq!(cl.unparsed_args(), vec!["in.txt"]);
//! ```
//!
//! # Assignment operators
//!
//! An [AsgOp] lists the operators that may separate a key from its value,
//! plus two switches:
//!
//! - "blank allowed": the value may be the _next_ argument
//!   (`--output out.txt`). The next argument is always taken as the
//!   value, even if it looks like an option.
//! - "empty allowed": a key followed by something other than an operator
//!   still matches and that something becomes the value
//!   (`-O3` with key `-O`).
//!
//! ```rust
//! use cmdl::{AsgOp, CommandLine};
//!
//! let cl = CommandLine::from_args(vec!["-o", "a", "--output:b", "-O3"]);
//!
//! let output = cl
//!     .new_param()
//!     .parse_pairs(&AsgOp::new(true, false, &["=", ":"]), &["-o", "--output"]);
//!
//! assert_eq!(output.keys(), &["-o", "--output"]);
//! assert_eq!(output.values(), &["a", "b"]);
//!
//! let level = cl
//!     .new_param()
//!     .parse_pairs(&AsgOp::default().empty_allowed(), &["-O"]);
//!
//! assert_eq!(level.value(), Some("3"));
//! ```
//!
//! # Consumption
//!
//! Each argument is matched at most once. All [Parameter]s created from a
//! [CommandLine] share its record of consumed arguments, so an argument
//! matched by one parameter is invisible to the others. The order in which
//! you run the parameters therefore matters.
//!
//! Calling `parse()` and `parse_pairs()` more than once on the same
//! [Parameter] adds to its matches.
//!
//! # Logging
//!
//! Matches are reported through [`tracing`](https://crates.io/crates/tracing)
//! at `debug` level. The crate never installs a subscriber.
//!
//! # Limitations
//!
//! - Keys are literal strings: there is no notion of short or long
//!   options, bundling, or `--`.
//! - Values are always strings.
//! - No help or usage output.
//! - [CommandLine] and [Parameter] are single-threaded.

mod args;
mod asg_op;
mod error;
mod param;

pub use error::{Error, Result};

pub use args::{get_args, CommandLine};
pub use asg_op::AsgOp;
pub use param::Parameter;
