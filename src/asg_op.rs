// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

/// Describes how a key is joined to its value on the command line.
///
/// - `ops`: the assignment operators (for example `=` in `--name=value`),
///   tried in order.
/// - `blank_allowed`: the value may be given as the next argument
///   (`--name value`).
/// - `empty_allowed`: a key followed by something that is not an operator
///   still matches.
///
/// # Example
///
/// ```rust
/// use cmdl::AsgOp;
///
/// let a = AsgOp::new(true, false, &["=", ":"]);
/// let b = AsgOp::default().op("=").op(":").blank_allowed();
///
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AsgOp {
    ops: Vec<String>,
    blank_allowed: bool,
    empty_allowed: bool,
}

impl AsgOp {
    /// Create a new assignment operator rule.
    pub fn new(blank_allowed: bool, empty_allowed: bool, ops: &[&str]) -> Self {
        AsgOp {
            ops: ops.iter().map(|op| op.to_string()).collect(),
            blank_allowed,
            empty_allowed,
        }
    }

    /// Add an assignment operator. Operators are tried in the order
    /// they were added.
    pub fn op(self, op: &str) -> Self {
        let mut ops = self.ops;
        ops.push(op.into());

        AsgOp { ops, ..self }
    }

    /// Allow the value to be the argument following the key.
    pub fn blank_allowed(self) -> Self {
        AsgOp {
            blank_allowed: true,
            ..self
        }
    }

    /// Allow a key to match when no operator follows it.
    pub fn empty_allowed(self) -> Self {
        AsgOp {
            empty_allowed: true,
            ..self
        }
    }

    /// Returns the assignment operators.
    pub fn ops(&self) -> &[String] {
        &self.ops
    }

    /// Returns true if a value can be given as a separate argument.
    pub fn is_blank_allowed(&self) -> bool {
        self.blank_allowed
    }

    /// Returns true if a key matches without an operator.
    pub fn is_empty_allowed(&self) -> bool {
        self.empty_allowed
    }

    /// Returns false if no argument could ever match this rule.
    pub fn can_match(&self) -> bool {
        !self.ops.is_empty() || self.blank_allowed || self.empty_allowed
    }

    /// Find the assignment operator that `s` starts with.
    ///
    /// `s` is what remains of an argument once the key has been removed.
    /// Returns the first matching operator. If none matches, returns the
    /// empty operator when empty values are allowed, and [None] otherwise.
    pub fn matching_op(&self, s: &str) -> Option<&str> {
        if let Some(op) = self.ops.iter().find(|op| s.starts_with(op.as_str())) {
            return Some(op.as_str());
        }

        if self.empty_allowed {
            Some("")
        } else {
            None
        }
    }
}

impl fmt::Display for AsgOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ops: Vec<String> = self.ops.iter().map(|op| format!("{:?}", op)).collect();

        write!(
            f,
            "ops: [{}], blank allowed: {}, empty allowed: {}",
            ops.join(", "),
            self.blank_allowed,
            self.empty_allowed
        )
    }
}
