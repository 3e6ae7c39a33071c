// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use core::fmt;

/// A connection-level error, reported to the peer when closing the connection
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error {
    pub code: u64,
    pub reason: &'static str,
}

impl Error {
    /// Creates a new `Error`
    pub const fn new(code: u64) -> Self {
        Self { code, reason: "" }
    }

    /// Updates the `Error` with the specified `reason`
    pub const fn with_reason(mut self, reason: &'static str) -> Self {
        self.reason = reason;
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.reason.is_empty() {
            f.write_str(self.reason)
        } else if let Some(description) = self.description() {
            f.write_str(description)
        } else {
            write!(f, "TransportError({})", self.code)
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("TransportError");

        d.field("code", &self.code);

        if let Some(description) = self.description() {
            d.field("description", &description);
        }

        if !self.reason.is_empty() {
            d.field("reason", &self.reason);
        }

        d.finish()
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Internal convenience macro for defining standard error codes
macro_rules! impl_errors {
    ($($(#[doc = $doc:expr])* $name:ident = $code:literal),* $(,)?) => {
        impl Error {
            $(
                $(#[doc = $doc])*
                pub const $name: Self = Self::new($code);
            )*

            pub fn description(&self) -> Option<&'static str> {
                match self.code {
                    $(
                        $code => Some(stringify!($name)),
                    )*
                    _ => None
                }
            }
        }

        #[test]
        fn description_test() {
            $(
                assert_eq!(&Error::$name.to_string(), stringify!($name));
            )*
        }
    };
}

impl_errors! {
    /// The connection is being closed abruptly in the absence of any error
    NO_ERROR = 0x0,
    /// The endpoint encountered an internal error and cannot continue with the connection
    INTERNAL_ERROR = 0x1,
    /// The peer violated the protocol in a way not covered by a more specific code
    PROTOCOL_VIOLATION = 0xa,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_test() {
        let error = Error::INTERNAL_ERROR.with_reason("too many outstanding received packets");
        assert_eq!(error.to_string(), "too many outstanding received packets");
        assert_eq!(Error::new(0x1234).to_string(), "TransportError(4660)");
        assert_eq!(
            format!("{error:?}"),
            "TransportError { code: 1, description: \"INTERNAL_ERROR\", reason: \"too many outstanding received packets\" }"
        );
    }
}
