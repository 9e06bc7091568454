use serde::{Deserialize, Serialize};
use std::fmt::Display;
use validator::Validate;
use wasm_bindgen::{prelude::*, JsCast};

pub fn to_js_error(error: impl Display) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

/// An extension trait for `Result` to allow us to add custom methods
pub trait ResultExt<T, E> {
    /// Convert the error into a JS `Error`, so it gets thrown on the JS side
    fn into_js(self) -> Result<T, JsValue>;
}

impl<T, E: Display> ResultExt<T, E> for Result<T, E> {
    fn into_js(self) -> Result<T, JsValue> {
        self.map_err(to_js_error)
    }
}

/// Deserialize a JS object into a Rust value and validate it, then serialize
/// it back into a JS object with every default filled in. The returned value
/// is typed as `O` for TS, which assumes `O` matches the serialization
/// format of `R`.
///
/// Validating an empty object gives the default config.
pub fn validate_config<R, O>(input: JsValue) -> Result<O, JsValue>
where
    R: Serialize + for<'a> Deserialize<'a> + Validate,
    O: JsCast,
{
    let config: R = JsValue::into_serde(&input).into_js()?;
    config.validate().into_js()?;
    Ok(JsValue::from_serde(&config).into_js()?.unchecked_into())
}

/// Serialize any value into a JS value, typed as `O` for TS
pub fn to_js_typed<T, O>(value: &T) -> Result<O, JsValue>
where
    T: Serialize + ?Sized,
    O: JsCast,
{
    Ok(JsValue::from_serde(value).into_js()?.unchecked_into())
}
