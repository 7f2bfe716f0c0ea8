// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A process argument could not be converted to a `String`.
    ///
    /// `index` is the position of the argument in the token sequence
    /// (the program name is not counted).
    #[error("argument {index} is not valid unicode: {arg:?}")]
    InvalidUnicode {
        /// Position of the offending argument.
        index: usize,
        /// Lossy rendition of the argument.
        arg: String,
    },
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
