//! [`Complex`] deserialization impl.
//!
//! Accepts any of:
//! - a 2 element sequence, `[real, imaginary]` (what [`Serialize`](serde::Serialize) writes).
//! - a map with `real` and `imaginary` keys.
//! - a bare number, taken as the real part.
//! - a string, parsed with [`FromStr`](std::str::FromStr) (i.e `"3-4i"`).
use std::fmt;

use serde::de::{self, Deserialize, Deserializer};

use crate::{Complex, ReadError};

const FIELDS: &[&str] = &["real", "imaginary"];

impl de::Expected for ReadError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a complex number ({self})")
    }
}

struct ComplexVisitor;

macro_rules! impl_real_visitors {
    ($($fn_name:ident($type:ty)),* $(,)?) => {
        $(
            #[inline]
            fn $fn_name<E>(self, arg: $type) -> Result<Self::Value, E>
            where
                E: de::Error
            {
                self.visit_f64(arg as f64)
            }
        )*
    };
}

impl<'de> de::Visitor<'de> for ComplexVisitor {
    type Value = Complex;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a complex number, as [real, imaginary], a map, a number or a string")
    }

    impl_real_visitors! {
        visit_i8(i8),
        visit_u8(u8),
        visit_i16(i16),
        visit_u16(u16),
        visit_i32(i32),
        visit_u32(u32),
        visit_i64(i64),
        visit_u64(u64),
        visit_i128(i128),
        visit_u128(u128),
        visit_f32(f32),
    }

    fn visit_f64<E>(self, real: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Complex::from_real(real))
    }

    fn visit_str<E>(self, string: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        string
            .parse::<Complex>()
            .map_err(|err| de::Error::invalid_value(de::Unexpected::Str(string), &err))
    }

    fn visit_bytes<E>(self, bytes: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        std::str::from_utf8(bytes)
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Bytes(bytes), &self))
            .and_then(|string| self.visit_str(string))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let real = match seq.next_element::<f64>()? {
            Some(real) => real,
            None => return Err(de::Error::invalid_length(0, &self)),
        };

        let imaginary = match seq.next_element::<f64>()? {
            Some(imaginary) => imaginary,
            None => return Err(de::Error::invalid_length(1, &self)),
        };

        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }

        Ok(Complex::new(real, imaginary))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let mut real = None;
        let mut imaginary = None;

        while let Some(key) = map.next_key::<String>()? {
            let slot = match key.as_str() {
                "real" => &mut real,
                "imaginary" => &mut imaginary,
                _ => return Err(de::Error::unknown_field(&key, FIELDS)),
            };

            if slot.is_some() {
                return Err(de::Error::custom(format_args!("duplicate field `{key}`")));
            }

            *slot = Some(map.next_value::<f64>()?);
        }

        match (real, imaginary) {
            (Some(real), Some(imaginary)) => Ok(Complex::new(real, imaginary)),
            (None, _) => Err(de::Error::missing_field("real")),
            (_, None) => Err(de::Error::missing_field("imaginary")),
        }
    }
}

impl<'de> Deserialize<'de> for Complex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ComplexVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::Complex;

    fn from_json(json: &str) -> Result<Complex, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_deserialize_forms() {
        assert_eq!(from_json("[1.5, -2]").unwrap(), Complex::new(1.5, -2.0));
        assert_eq!(
            from_json(r#"{"imaginary": 4, "real": 3}"#).unwrap(),
            Complex::new(3.0, 4.0)
        );
        assert_eq!(from_json("5").unwrap(), Complex::new(5.0, 0.0));
        assert_eq!(from_json("-2.25").unwrap(), Complex::new(-2.25, 0.0));
        assert_eq!(from_json(r#""3-4i""#).unwrap(), Complex::new(3.0, -4.0));
        assert_eq!(from_json(r#""3 4 i""#).unwrap(), Complex::new(3.0, 4.0));
    }

    #[test]
    fn test_json_round_trip() {
        let c = Complex::new(0.5, -0.25);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(from_json(&json).unwrap(), c);
    }

    #[test]
    fn test_deserialize_errors() {
        for bad in [
            "[1]",
            "[1, 2, 3]",
            r#"{"real": 1}"#,
            r#"{"real": 1, "imaginary": 2, "unit": 3}"#,
            r#"{"real": 1, "real": 2, "imaginary": 3}"#,
            r#""abc""#,
            r#""1 2 i extra""#,
            "true",
        ] {
            assert!(from_json(bad).is_err(), "{bad} should fail to deserialize");
        }
    }
}
