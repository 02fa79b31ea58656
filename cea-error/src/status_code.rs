//! Unified status codes for error classification.
//!
//! Status code format: XX_YYY (5-digit)
//! - XX = Category (00-99)
//! - YYY = Code within category (000-999)
//!
//! Category layout:
//! - General/Core (01-09): Common, Input, IO, Network, Auth
//! - Business (10-13): Config, Provider, Resource, Tool

use strum::AsRefStr;
use strum::EnumIter;
use strum::FromRepr;

/// Status code metadata.
#[derive(Debug, Clone, Copy)]
pub struct StatusMeta {
    pub retryable: bool,
    pub log_error: bool,
    pub category: StatusCategory,
}

/// Status code category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    /// Success (00_xxx)
    Success,
    /// Common/internal errors (01_xxx)
    Common,
    /// Parameter/validation errors (02_xxx)
    Input,
    /// IO/storage errors (03_xxx)
    IO,
    /// Resource limits (12_xxx)
    Resource,
    /// Tool-layer errors (13_xxx)
    Tool,
}

macro_rules! define_status_codes {
    ($(
        $(#[$attr:meta])*
        $name:ident = $value:expr => {
            retryable: $retry:expr,
            log_error: $log:expr,
            category: $cat:ident $(,)?
        }
    ),* $(,)?) => {
        /// Status codes for error classification.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, FromRepr)]
        #[repr(i32)]
        pub enum StatusCode {
            $($(#[$attr])* $name = $value,)*
        }

        impl StatusCode {
            /// Returns the metadata for this status code.
            pub const fn meta(&self) -> StatusMeta {
                match self {
                    $(Self::$name => StatusMeta {
                        retryable: $retry,
                        log_error: $log,
                        category: StatusCategory::$cat,
                    },)*
                }
            }

            /// Returns the string name of this status code.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)*
                }
            }
        }

        // Compile-time check for duplicate status code values
        const _: () = {
            const CODES: &[i32] = &[$($value),*];
            const fn check_unique() {
                let mut i = 0;
                while i < CODES.len() {
                    let mut j = i + 1;
                    while j < CODES.len() {
                        if CODES[i] == CODES[j] {
                            panic!("Duplicate status code value detected");
                        }
                        j += 1;
                    }
                    i += 1;
                }
            }
            check_unique();
        };
    };
}

define_status_codes! {
    // ====== Success (00_xxx) ======
    /// Operation succeeded.
    Success = 00_000 => { retryable: false, log_error: false, category: Success },

    // ====== Common errors (01_xxx) ======
    /// Unknown error.
    Unknown = 01_000 => { retryable: false, log_error: true, category: Common },
    /// Internal error, unexpected BUG.
    Internal = 01_001 => { retryable: true, log_error: true, category: Common },
    /// Unsupported operation.
    Unsupported = 01_002 => { retryable: false, log_error: false, category: Common },
    /// Task was cancelled.
    Cancelled = 01_003 => { retryable: false, log_error: false, category: Common },
    /// Caused by external system.
    External = 01_004 => { retryable: false, log_error: true, category: Common },

    // ====== Input/Validation errors (02_xxx) ======
    /// Invalid arguments.
    InvalidArguments = 02_000 => { retryable: false, log_error: false, category: Input },
    /// Parse/Deserialize error.
    ParseError = 02_002 => { retryable: false, log_error: false, category: Input },
    /// Invalid JSON.
    InvalidJson = 02_003 => { retryable: false, log_error: false, category: Input },

    // ====== IO/Storage errors (03_xxx) ======
    /// IO error.
    IoError = 03_000 => { retryable: false, log_error: false, category: IO },
    /// File not found.
    FileNotFound = 03_001 => { retryable: false, log_error: false, category: IO },

    // ====== Resource/Limit errors (12_xxx) ======
    /// Runtime resources exhausted.
    ResourcesExhausted = 12_002 => { retryable: true, log_error: false, category: Resource },
    /// Request timeout.
    Timeout = 12_003 => { retryable: true, log_error: false, category: Resource },

    // ====== Tool-layer errors (13_xxx) ======
    /// Path is excluded by ignore rules.
    IgnoredPath = 13_000 => { retryable: false, log_error: false, category: Tool },
    /// File content or extension indicates a binary file.
    BinaryFile = 13_001 => { retryable: false, log_error: false, category: Tool },
    /// File exceeds the configured size cap.
    FileTooLarge = 13_002 => { retryable: false, log_error: false, category: Tool },
    /// A hashline anchor's hash disagreed with the recomputed value.
    HashlineMismatch = 13_003 => { retryable: false, log_error: false, category: Tool },
    /// A hashline anchor referenced a line outside the file's range.
    HashlineOutOfRange = 13_004 => { retryable: false, log_error: false, category: Tool },
    /// Every edit in a batch was a no-op.
    NoChanges = 13_005 => { retryable: false, log_error: false, category: Tool },
    /// Tool input failed schema validation.
    SchemaInvalid = 13_006 => { retryable: false, log_error: false, category: Tool },
    /// A subprocess could not be spawned.
    SpawnFailed = 13_007 => { retryable: false, log_error: true, category: Tool },
    /// The model emitted a tool call whose arguments never finalized into valid JSON.
    MalformedToolCall = 13_008 => { retryable: false, log_error: false, category: Tool },
    /// The todo-continuation re-entry ceiling was reached.
    AutoContinueLimit = 13_009 => { retryable: false, log_error: false, category: Tool },
}

impl StatusCode {
    /// Returns true if `code` is success.
    pub fn is_success(code: i32) -> bool {
        Self::Success as i32 == code
    }

    /// Returns true if the error is retryable.
    pub const fn is_retryable(&self) -> bool {
        self.meta().retryable
    }

    /// Returns true if the error should be logged.
    pub const fn should_log_error(&self) -> bool {
        self.meta().log_error
    }

    /// Returns the category of this status code.
    pub const fn category(&self) -> StatusCategory {
        self.meta().category
    }

    /// Convert from i32.
    pub fn from_i32(value: i32) -> Option<Self> {
        Self::from_repr(value)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
#[path = "status_code.test.rs"]
mod tests;
