// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::args::Tokens;
use crate::asg_op::AsgOp;

/// Find the first key that `arg` starts with.
///
/// Returns the key and, if `arg` is longer than the key, the value that
/// follows the assignment operator. A key that `arg` starts with but
/// whose remainder has no matching operator is skipped.
fn match_key<'k, 'a>(
    asg_op: &AsgOp,
    keys: &[&'k str],
    arg: &'a str,
) -> Option<(&'k str, Option<&'a str>)> {
    for &key in keys {
        let rest = match arg.strip_prefix(key) {
            Some(rest) => rest,
            None => continue,
        };

        if rest.is_empty() {
            return Some((key, None));
        }

        if let Some(op) = asg_op.matching_op(rest) {
            return Some((key, Some(&rest[op.len()..])));
        }
    }

    None
}

/// The results of searching the command line for one or more keys.
///
/// A parameter is created with [CommandLine::new_param()](crate::CommandLine::new_param)
/// and filled by [Parameter::parse()] and [Parameter::parse_pairs()]. Each
/// call adds to the results of the previous ones.
///
/// Arguments matched by a parameter are consumed: no other parameter
/// created from the same [CommandLine](crate::CommandLine) will match them.
#[derive(Clone, Debug)]
pub struct Parameter {
    tokens: Rc<RefCell<Tokens>>,
    keys: Vec<String>,
    values: Vec<String>,
}

impl Parameter {
    pub(crate) fn new(tokens: Rc<RefCell<Tokens>>) -> Self {
        Parameter {
            tokens,
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Search for arguments that are exactly equal to one of `keys`.
    ///
    /// Every match is recorded with an empty value.
    pub fn parse(mut self, keys: &[&str]) -> Self {
        let shared = Rc::clone(&self.tokens);
        let mut tokens = shared.borrow_mut();

        if keys.is_empty() || !tokens.has_unparsed() {
            trace!(?keys, "nothing to parse");
            return self;
        }

        for index in 0..tokens.len() {
            if tokens.is_parsed(index) {
                continue;
            }

            if let Some(key) = keys.iter().find(|key| tokens.args[index] == **key) {
                debug!(key, index, "matched flag");

                self.add(*key, "");
                tokens.set_parsed(index);
            }
        }

        self
    }

    /// Search for arguments that start with one of `keys`, followed by a
    /// value as described by `asg_op`.
    ///
    /// For each argument, keys are tried in order and the first match
    /// wins:
    ///
    /// - `<key><op><value>` is recorded as `(key, value)`.
    /// - `<key>` on its own is recorded as `(key, next argument)` if
    ///   [AsgOp::blank_allowed()] is set, consuming both arguments.
    ///   The next argument is taken even if it was already consumed.
    ///   Otherwise it is recorded with an empty value.
    /// - `<key><other>` where `other` does not start with an operator
    ///   is recorded as `(key, other)` if [AsgOp::empty_allowed()] is
    ///   set, and does not match otherwise.
    pub fn parse_pairs(mut self, asg_op: &AsgOp, keys: &[&str]) -> Self {
        let shared = Rc::clone(&self.tokens);
        let mut tokens = shared.borrow_mut();

        if keys.is_empty() || !tokens.has_unparsed() || !asg_op.can_match() {
            trace!(?keys, %asg_op, "nothing to parse");
            return self;
        }

        let mut index = 0;

        while index < tokens.len() {
            if tokens.is_parsed(index) {
                index += 1;
                continue;
            }

            let found = match_key(asg_op, keys, &tokens.args[index])
                .map(|(key, value)| (key, value.map(String::from)));

            if let Some((key, value)) = found {
                tokens.set_parsed(index);

                let value = match value {
                    Some(value) => value,
                    None if asg_op.is_blank_allowed() && index + 1 < tokens.len() => {
                        index += 1;
                        tokens.set_parsed(index);

                        tokens.args[index].clone()
                    }
                    None => String::new(),
                };

                debug!(key, value = %value, index, "matched pair");

                self.add(key, value);
            }

            index += 1;
        }

        self
    }

    /// Record a key and value.
    ///
    /// This does not consume any argument.
    pub fn add<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.keys.push(key.into());
        self.values.push(value.into());
    }

    /// Returns true if at least one key has been found.
    pub fn available(&self) -> bool {
        !self.keys.is_empty()
    }

    /// Returns the number of matches.
    pub fn count(&self) -> usize {
        self.keys.len()
    }

    /// Returns the matched keys, in the order they were found.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the matched values. `values()[i]` belongs to `keys()[i]`.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns an iterator over the `(key, value)` matches.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .zip(self.values.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the value of the first match.
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns the value of the last match. Useful when a later option
    /// should override an earlier one.
    pub fn last_value(&self) -> Option<&str> {
        self.values.last().map(String::as_str)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pairs: Vec<String> = self
            .pairs()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();

        write!(f, "{}", pairs.join(" "))
    }
}
