use crate::error::PathError;
use rhai::EvalAltResult;

pub type RhaiResult<T> = Result<T, Box<EvalAltResult>>;

pub fn facade_error(message: impl Into<String>) -> Box<EvalAltResult> {
    message.into().into()
}

pub fn path_error(err: PathError) -> Box<EvalAltResult> {
    facade_error(err.to_string())
}

/// Scripts pass lengths back as `i64`; paths never approach the limit.
pub fn to_script_int(field: &str, value: usize) -> RhaiResult<i64> {
    i64::try_from(value).map_err(|_| facade_error(format!("{field} does not fit in an integer")))
}
