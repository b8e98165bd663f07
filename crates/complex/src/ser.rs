//! [`Complex`] serialization impl.

use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::Complex;

impl Serialize for Complex {
    /// Serializes as a 2 element tuple, `[real, imaginary]`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.real())?;
        tuple.serialize_element(&self.imaginary())?;
        tuple.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::Complex;

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Complex::new(1.0, 2.0)).unwrap();
        assert_eq!(json, "[1.0,2.0]");

        let json = serde_json::to_string(&Complex::new(-0.5, 0.0)).unwrap();
        assert_eq!(json, "[-0.5,0.0]");
    }
}
