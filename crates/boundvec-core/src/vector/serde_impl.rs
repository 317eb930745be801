//! `Deserialize` for [`BoundedVector`] (enabled by the `serde` feature).
//!
//! `Serialize` is derived on the struct itself. Deserialization goes through
//! [`BoundedVector::from_vec`] so a payload can never produce a vector that
//! violates the size or start-index bounds.

use serde::de::{Deserialize, Deserializer, Error};

use crate::Scalar;

use super::BoundedVector;

impl<'de, T> Deserialize<'de> for BoundedVector<T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Repr<T> {
            data: Vec<T>,
            start_index: isize,
        }

        let repr = Repr::<T>::deserialize(deserializer)?;
        BoundedVector::from_vec(repr.data, repr.start_index).map_err(D::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::MAX_VECTOR_SIZE;

    #[test]
    fn test_serialize_shape() {
        let v = BoundedVector::from_vec(vec![1, 2, 3], 2).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"data":[1,2,3],"start_index":2}"#);
    }

    #[test]
    fn test_deserialize_valid() {
        let v: BoundedVector<f64> =
            serde_json::from_str(r#"{"data":[0.5,1.5],"start_index":4}"#).unwrap();
        assert_eq!(v.size(), 2);
        assert_eq!(v.start_index(), 4);
        assert_eq!(v[5], 1.5);
    }

    #[test]
    fn test_deserialize_rejects_empty_data() {
        let err = serde_json::from_str::<BoundedVector<i32>>(r#"{"data":[],"start_index":0}"#)
            .unwrap_err();
        let expected = format!("invalid vector size 0: must be in 1..={MAX_VECTOR_SIZE}");
        assert!(err.to_string().contains(&expected));
    }

    #[test]
    fn test_deserialize_rejects_negative_start() {
        let err = serde_json::from_str::<BoundedVector<i32>>(r#"{"data":[1],"start_index":-3}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid start index -3"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        assert!(
            serde_json::from_str::<BoundedVector<i32>>(
                r#"{"data":[1],"start_index":0,"size":1}"#
            )
            .is_err()
        );
    }
}
