use serde::{Deserialize, Serialize};
use strum::{Display, FromRepr, IntoStaticStr};
use thiserror::Error;

/// Error codes reported by the achievements runtime.
///
/// Numeric values must match the defines in `rc_error.h` exactly; this is a
/// cross-boundary contract, not an internal choice.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(i32)]
pub enum Code {
    #[strum(serialize = "Invalid Lua operand")]
    InvalidLuaOperand = -1,
    #[strum(serialize = "Invalid memory operand")]
    InvalidMemoryOperand = -2,
    #[strum(serialize = "Invalid constant operand")]
    InvalidConstOperand = -3,
    #[strum(serialize = "Invalid floating-point operand")]
    InvalidFpOperand = -4,
    #[strum(serialize = "Invalid condition type")]
    InvalidConditionType = -5,
    #[strum(serialize = "Invalid operator")]
    InvalidOperator = -6,
    #[strum(serialize = "Invalid required hit count")]
    InvalidRequiredHits = -7,
    #[strum(serialize = "Duplicated start condition")]
    DuplicatedStart = -8,
    #[strum(serialize = "Duplicated cancel condition")]
    DuplicatedCancel = -9,
    #[strum(serialize = "Duplicated submit condition")]
    DuplicatedSubmit = -10,
    #[strum(serialize = "Duplicated value expression")]
    DuplicatedValue = -11,
    #[strum(serialize = "Duplicated progress expression")]
    DuplicatedProgress = -12,
    #[strum(serialize = "Missing start condition")]
    MissingStart = -13,
    #[strum(serialize = "Missing cancel condition")]
    MissingCancel = -14,
    #[strum(serialize = "Missing submit condition")]
    MissingSubmit = -15,
    #[strum(serialize = "Missing value expression")]
    MissingValue = -16,
    #[strum(serialize = "Invalid leaderboard field")]
    InvalidLeaderboardField = -17,
    #[strum(serialize = "Missing display string")]
    MissingDisplayString = -18,
    #[strum(serialize = "Out of memory")]
    OutOfMemory = -19,
    #[strum(serialize = "Invalid value flag")]
    InvalidValueFlag = -20,
    #[strum(serialize = "Missing measured value")]
    MissingValueMeasured = -21,
    #[strum(serialize = "Multiple measured targets")]
    MultipleMeasured = -22,
    #[strum(serialize = "Invalid measured target")]
    InvalidMeasuredTarget = -23,
    #[strum(serialize = "Invalid comparison")]
    InvalidComparison = -24,
    #[strum(serialize = "Invalid state")]
    InvalidState = -25,
    #[strum(serialize = "Invalid JSON")]
    InvalidJson = -26,
    #[strum(serialize = "API call failed")]
    ApiFailure = -27,
    #[strum(serialize = "Login required")]
    LoginRequired = -28,
    #[strum(serialize = "No game loaded")]
    NoGameLoaded = -29,
    #[strum(serialize = "Hardcore mode disabled")]
    HardcoreDisabled = -30,
    #[strum(serialize = "Operation aborted")]
    Aborted = -31,
    #[strum(serialize = "No response from server")]
    NoResponse = -32,
    #[strum(serialize = "Access denied")]
    AccessDenied = -33,
    #[strum(serialize = "Invalid credentials")]
    InvalidCredentials = -34,
    #[strum(serialize = "Expired token")]
    ExpiredToken = -35,
}

impl Code {
    /// Look up a code from the raw value returned by the runtime.
    pub fn from_raw(value: i32) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Human-readable message for this code.
    pub fn message(&self) -> &'static str {
        self.into()
    }

    /// Check if this code describes a malformed trigger or value expression
    /// (bad operands, conditions, or duplicated/missing clauses).
    pub fn is_parse_failure(&self) -> bool {
        (Self::InvalidComparison as i32..=Self::InvalidLuaOperand as i32).contains(&(*self as i32))
            && *self != Self::OutOfMemory
    }

    /// Check if this code describes a session or authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::LoginRequired | Self::AccessDenied | Self::InvalidCredentials | Self::ExpiredToken
        )
    }

    /// Check if this code describes a server communication failure.
    pub fn is_api_failure(&self) -> bool {
        matches!(self, Self::ApiFailure | Self::NoResponse | Self::InvalidJson)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("runtime error {}: {}", *.0 as i32, .0.message())]
    Runtime(Code),

    #[error("unknown runtime error code: {0}")]
    UnknownCode(i32),

    #[error("invalid achievement state: {0}")]
    InvalidAchievementState(u8),

    #[error("invalid achievement bucket: {0}")]
    InvalidBucket(u8),

    #[error("invalid leaderboard state: {0}")]
    InvalidLeaderboardState(u8),

    #[error("unknown console identifier: {0}")]
    UnknownConsole(i32),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Convert a raw runtime return value into an error.
    ///
    /// Values without a matching [`Code`] are preserved as [`Error::UnknownCode`]
    /// so the original number is never lost.
    pub fn from_return_value(value: i32) -> Self {
        match Code::from_raw(value) {
            Some(code) => Error::Runtime(code),
            None => Error::UnknownCode(value),
        }
    }
}

impl From<Code> for Error {
    fn from(code: Code) -> Self {
        Error::Runtime(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values_match_runtime() {
        assert_eq!(Code::InvalidLuaOperand as i32, -1);
        assert_eq!(Code::InvalidRequiredHits as i32, -7);
        assert_eq!(Code::DuplicatedStart as i32, -8);
        assert_eq!(Code::MissingValue as i32, -16);
        assert_eq!(Code::InvalidLeaderboardField as i32, -17);
        assert_eq!(Code::OutOfMemory as i32, -19);
        assert_eq!(Code::InvalidJson as i32, -26);
        assert_eq!(Code::ApiFailure as i32, -27);
        assert_eq!(Code::ExpiredToken as i32, -35);
    }

    #[test]
    fn test_code_from_raw() {
        assert_eq!(Code::from_raw(-1), Some(Code::InvalidLuaOperand));
        assert_eq!(Code::from_raw(-35), Some(Code::ExpiredToken));
        assert_eq!(Code::from_raw(0), None);
        assert_eq!(Code::from_raw(-36), None);
        assert_eq!(Code::from_raw(1), None);
    }

    #[test]
    fn test_code_message_non_empty() {
        for value in -35..=-1 {
            let code = Code::from_raw(value).unwrap();
            assert!(!code.message().is_empty(), "no message for {value}");
        }
    }

    #[test]
    fn test_code_groupings() {
        assert!(Code::InvalidMemoryOperand.is_parse_failure());
        assert!(Code::MissingSubmit.is_parse_failure());
        assert!(!Code::OutOfMemory.is_parse_failure());
        assert!(!Code::LoginRequired.is_parse_failure());

        assert!(Code::LoginRequired.is_auth_failure());
        assert!(Code::ExpiredToken.is_auth_failure());
        assert!(!Code::ApiFailure.is_auth_failure());

        assert!(Code::NoResponse.is_api_failure());
        assert!(!Code::Aborted.is_api_failure());
    }

    #[test]
    fn test_error_from_return_value() {
        match Error::from_return_value(-28) {
            Error::Runtime(code) => assert_eq!(code, Code::LoginRequired),
            other => panic!("unexpected error: {other:?}"),
        }
        match Error::from_return_value(-99) {
            Error::UnknownCode(value) => assert_eq!(value, -99),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
