//! Serde representation of reals that survives JSON: finite values are plain numbers,
//! NaN and the infinities are the strings `"NaN"`, `"inf"` and `"-inf"`.
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Real<T> {
    Number(T),
    Special(String),
}

#[inline(always)]
fn special_name(is_nan: bool, is_positive: bool) -> &'static str {
    if is_nan {
        "NaN"
    } else if is_positive {
        "inf"
    } else {
        "-inf"
    }
}

fn parse_special<E: Error>(name: &str) -> Result<f64, E> {
    match name {
        "NaN" => Ok(f64::NAN),
        "inf" => Ok(f64::INFINITY),
        "-inf" => Ok(f64::NEG_INFINITY),
        _ => Err(E::custom(format!("invalid real {name}"))),
    }
}

pub fn serialize_f64<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if v.is_finite() {
        serializer.serialize_f64(*v)
    } else {
        serializer.serialize_str(special_name(v.is_nan(), v.is_sign_positive()))
    }
}

pub fn deserialize_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Real::<f64>::deserialize(deserializer)? {
        Real::Number(v) => Ok(v),
        Real::Special(name) => parse_special(&name),
    }
}

pub fn serialize_f32<S: Serializer>(v: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    if v.is_finite() {
        serializer.serialize_f32(*v)
    } else {
        serializer.serialize_str(special_name(v.is_nan(), v.is_sign_positive()))
    }
}

pub fn deserialize_f32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    match Real::<f32>::deserialize(deserializer)? {
        Real::Number(v) => Ok(v),
        Real::Special(name) => parse_special(&name).map(|v| v as f32),
    }
}
