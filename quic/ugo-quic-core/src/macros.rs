// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

/// Returns early with the provided value if the condition does not hold
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $ret:expr $(,)?) => {
        if !($cond) {
            return $ret;
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __tracing_noop__ {
    ($($fmt:tt)*) => {};
}

cfg_if::cfg_if! {
    if #[cfg(feature = "state-tracing")] {
        #[doc(hidden)]
        pub use tracing::debug as _debug;
        #[doc(hidden)]
        pub use tracing::trace as _trace;
    } else {
        #[doc(hidden)]
        pub use crate::__tracing_noop__ as _debug;
        #[doc(hidden)]
        pub use crate::__tracing_noop__ as _trace;
    }
}
