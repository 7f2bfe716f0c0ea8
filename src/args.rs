// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::cell::RefCell;
use std::env;
use std::ffi::OsString;
use std::rc::Rc;

use tracing::trace;

use crate::error::{Error, Result};
use crate::param::Parameter;

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Note
///
/// Used by [CommandLine::new()]. Panics if an argument is not valid
/// unicode; use [CommandLine::try_new()] to get an error instead.
pub fn get_args() -> Vec<String> {
    env::args().skip(1).collect()
}

/// Convert raw arguments (program name already removed) into strings.
fn collect_args<I>(os_args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    os_args
        .into_iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.into_string().map_err(|arg| Error::InvalidUnicode {
                index,
                arg: arg.to_string_lossy().into_owned(),
            })
        })
        .collect()
}

/// The token sequence and its consumption state.
///
/// Shared between a [CommandLine] and every [Parameter] created from it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Tokens {
    pub(crate) args: Vec<String>,
    parsed: Vec<bool>,
    parsed_count: usize,
}

impl Tokens {
    fn new(args: Vec<String>) -> Self {
        let parsed = vec![false; args.len()];

        Tokens {
            args,
            parsed,
            parsed_count: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.args.len()
    }

    pub(crate) fn is_parsed(&self, index: usize) -> bool {
        self.parsed.get(index).copied().unwrap_or(false)
    }

    /// Returns true if at least one token has not been consumed yet.
    pub(crate) fn has_unparsed(&self) -> bool {
        self.args.len() > self.parsed_count
    }

    /// Mark the token at `index` as consumed.
    ///
    /// The count only moves when the marker changes, so marking the same
    /// token twice leaves `parsed_count` in step with `parsed`.
    pub(crate) fn set_parsed(&mut self, index: usize) {
        if self.parsed[index] {
            trace!(index, "token already parsed");
            return;
        }

        self.parsed[index] = true;
        self.parsed_count += 1;
    }

    fn unparsed_args(&self) -> Vec<String> {
        self.args
            .iter()
            .zip(self.parsed.iter())
            .filter(|(_, parsed)| !**parsed)
            .map(|(arg, _)| arg.clone())
            .collect()
    }
}

/// The command-line arguments to match against.
///
/// Holds the original arguments and records which of them have been
/// consumed by a [Parameter].
///
/// # Note
///
/// Clones share the same consumption state, as do all [Parameter]s
/// created with [CommandLine::new_param()].
#[derive(Clone, Debug, Default)]
pub struct CommandLine {
    tokens: Rc<RefCell<Tokens>>,
}

impl CommandLine {
    /// Create a command line from the arguments of the current process
    /// (without the program name).
    pub fn new() -> Self {
        CommandLine::from_args(get_args())
    }

    /// Like [CommandLine::new()], but returns [Error::InvalidUnicode]
    /// rather than panicking if an argument is not valid unicode.
    pub fn try_new() -> Result<Self> {
        let args = collect_args(env::args_os().skip(1))?;

        Ok(CommandLine::from_args(args))
    }

    /// Create a command line from the specified arguments.
    ///
    /// The arguments are stored in order and as-is: empty and
    /// duplicate values are fine.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        CommandLine {
            tokens: Rc::new(RefCell::new(Tokens::new(args))),
        }
    }

    /// Create a new, empty [Parameter] that matches against this
    /// command line.
    pub fn new_param(&self) -> Parameter {
        Parameter::new(Rc::clone(&self.tokens))
    }

    /// Returns all arguments, whether consumed or not.
    pub fn args(&self) -> Vec<String> {
        self.tokens.borrow().args.clone()
    }

    /// Returns the arguments that have not been consumed by any
    /// [Parameter], in their original order.
    pub fn unparsed_args(&self) -> Vec<String> {
        self.tokens.borrow().unparsed_args()
    }

    /// Returns the number of consumed arguments.
    pub fn parsed_count(&self) -> usize {
        self.tokens.borrow().parsed_count
    }

    /// Returns true if the argument at `index` has been consumed.
    /// An out of range `index` is never consumed.
    pub fn is_parsed(&self, index: usize) -> bool {
        self.tokens.borrow().is_parsed(index)
    }

    /// Returns the total number of arguments.
    pub fn len(&self) -> usize {
        self.tokens.borrow().len()
    }

    /// Returns true if there are no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_counts(cl: &CommandLine, msg: &str) {
        assert_eq!(
            cl.unparsed_args().len(),
            cl.args().len() - cl.parsed_count(),
            "{}",
            msg
        );
    }

    #[test]
    fn test_from_args() {
        #[derive(Debug)]
        struct TestData<'a> {
            args: Vec<&'a str>,
        }

        let tests = &[
            TestData { args: vec![] },
            TestData { args: vec![""] },
            TestData {
                args: vec!["", ""],
            },
            TestData {
                args: vec!["-a", "-a", "-a"],
            },
            TestData {
                args: vec!["hello world", "--", "人"],
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let cl = CommandLine::from_args(d.args.clone());

            assert_eq!(cl.args(), d.args, "{}", msg);
            assert_eq!(cl.unparsed_args(), d.args, "{}", msg);
            assert_eq!(cl.len(), d.args.len(), "{}", msg);
            assert_eq!(cl.is_empty(), d.args.is_empty(), "{}", msg);
            assert_eq!(cl.parsed_count(), 0, "{}", msg);

            for index in 0..d.args.len() {
                assert!(!cl.is_parsed(index), "{}, index: {}", msg, index);
            }

            check_counts(&cl, &msg);
        }
    }

    #[test]
    fn test_default() {
        let cl = CommandLine::default();

        assert!(cl.is_empty());
        assert!(cl.args().is_empty());
        assert!(cl.unparsed_args().is_empty());
        assert_eq!(cl.parsed_count(), 0);
        assert!(!cl.is_parsed(0));
    }

    #[test]
    fn test_set_parsed() {
        let mut tokens = Tokens::new(vec!["a".into(), "b".into(), "c".into()]);

        assert!(tokens.has_unparsed());

        tokens.set_parsed(1);
        assert!(tokens.is_parsed(1));
        assert_eq!(tokens.parsed_count, 1);
        assert_eq!(tokens.unparsed_args(), vec!["a", "c"]);

        // Marking twice must not skew the count.
        tokens.set_parsed(1);
        assert_eq!(tokens.parsed_count, 1);
        assert_eq!(tokens.unparsed_args(), vec!["a", "c"]);

        tokens.set_parsed(0);
        tokens.set_parsed(2);
        assert_eq!(tokens.parsed_count, 3);
        assert!(!tokens.has_unparsed());
        assert!(tokens.unparsed_args().is_empty());

        // Out of range is never parsed.
        assert!(!tokens.is_parsed(3));
    }

    #[test]
    fn test_unparsed_args() {
        let args = vec!["--start", "asdf", "-s", "qwer"];
        let cl = CommandLine::from_args(args.clone());

        let _ = cl.new_param().parse(&["--start", "-s"]);

        assert_eq!(cl.unparsed_args(), vec!["asdf", "qwer"]);
        assert_eq!(cl.args(), args);
        assert_eq!(cl.parsed_count(), 2);
        check_counts(&cl, "unparsed");
    }

    #[test]
    fn test_clone_shares_state() {
        let cl = CommandLine::from_args(vec!["-v", "foo"]);
        let other = cl.clone();

        let _ = other.new_param().parse(&["-v"]);

        assert!(cl.is_parsed(0));
        assert_eq!(cl.unparsed_args(), vec!["foo"]);
    }

    #[test]
    fn test_get_args() {
        let expected: Vec<String> = env::args().skip(1).collect();

        assert_eq!(get_args(), expected);
        assert_eq!(CommandLine::new().args(), expected);
    }

    #[test]
    fn test_collect_args() {
        let os_args: Vec<OsString> = vec!["a".into(), "".into(), "人".into()];

        let result = collect_args(os_args);
        assert_eq!(result, Ok(vec!["a".into(), "".into(), "人".into()]));

        let result = collect_args(Vec::<OsString>::new());
        assert_eq!(result, Ok(vec![]));
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_args_invalid_unicode() {
        use std::os::unix::ffi::OsStringExt;

        let os_args = vec![
            OsString::from("ok"),
            OsString::from_vec(vec![b'f', b'o', 0xff]),
        ];

        let result = collect_args(os_args);

        assert_eq!(
            result,
            Err(Error::InvalidUnicode {
                index: 1,
                arg: "fo\u{FFFD}".into()
            })
        );
    }
}
