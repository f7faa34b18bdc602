/// Checks that the object survives compressed and uncompressed arkworks serialization, JSON and Message Pack.
/// The calling crate needs `ark-serialize`, `serde_json` and `rmp-serde`.
#[macro_export]
macro_rules! test_serialization {
    ($obj_type:ty, $obj: expr) => {
        let mut serz = vec![];
        CanonicalSerialize::serialize_compressed(&$obj, &mut serz).unwrap();
        println!("Serialized byte size: {}", serz.len());
        let deserz: $obj_type = CanonicalDeserialize::deserialize_compressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);

        let mut serz = vec![];
        $obj.serialize_uncompressed(&mut serz).unwrap();
        let deserz: $obj_type = CanonicalDeserialize::deserialize_uncompressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);

        // Test JSON serialization
        let ser = serde_json::to_string(&$obj).unwrap();
        let deser = serde_json::from_str::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);

        // Test Message Pack serialization
        let ser = rmp_serde::to_vec_named(&$obj).unwrap();
        let deser = rmp_serde::from_slice::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);
    };
}

/// Checks that the object's fixed-width encoding has exactly `$len` bytes, decodes back to the object
/// and that a truncated or extended buffer is rejected. Needs `ToWire` and `FromWire` in scope.
#[macro_export]
macro_rules! test_wire_encoding {
    ($obj_type:ty, $obj: expr, $len: expr) => {
        let bytes = ToWire::to_wire_bytes(&$obj).unwrap();
        assert_eq!(bytes.len(), $len);
        assert_eq!(bytes.len(), ToWire::wire_len(&$obj));

        let decoded = <$obj_type as FromWire>::from_wire_bytes(&bytes).unwrap();
        assert_eq!(decoded, $obj);
        assert_eq!(ToWire::to_wire_bytes(&decoded).unwrap(), bytes);

        assert!(<$obj_type as FromWire>::from_wire_bytes(&bytes[..bytes.len() - 1]).is_err());
        let mut extended = bytes.clone();
        extended.push(0);
        assert!(<$obj_type as FromWire>::from_wire_bytes(&extended).is_err());
    };
}
