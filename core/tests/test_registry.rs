#[cfg(test)]
mod tests {
    use chunkz_core::compression::mode_ids;
    use chunkz_core::prelude::*;

    fn pack(input: &[u8]) -> Vec<u8> {
        Compressor::new(CompressionLevel::Default).unwrap().compress_all(input).unwrap()
    }

    #[test]
    fn test_handles_are_unique_and_nonzero() {
        let mut registry = SessionRegistry::new();
        let a = registry.create_compressor(-1).unwrap();
        let b = registry.create_decompressor().unwrap();
        let c = registry.create(mode_ids::COMPRESS, 9).unwrap();

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(a.as_raw() != 0 && b.as_raw() != 0 && c.as_raw() != 0);
        assert_eq!(registry.live_sessions(), 3);
        assert!(!registry.last_error());
    }

    #[test]
    fn test_compress_and_decompress_through_handles() {
        let input = b"registry round trip, registry round trip, registry round trip".to_vec();
        let mut registry = SessionRegistry::new();

        let enc = registry.create_compressor(6).unwrap();
        let mut packed = Vec::new();
        let mut buf = [0u8; 8];
        let mut pos = 0;
        while !registry.is_complete() {
            let produced = registry.step(enc, &input[pos..], &mut buf).unwrap();
            pos += registry.last_consumed();
            packed.extend_from_slice(&buf[..produced]);
        }
        assert_eq!(pos, input.len());
        registry.close_session(enc).unwrap();
        assert!(!registry.last_error());

        let dec = registry.create(mode_ids::DECOMPRESS, 0).unwrap();
        assert!(!registry.is_complete());
        let mut plain = Vec::new();
        let mut pos = 0;
        while !registry.is_complete() {
            let produced = registry.step(dec, &packed[pos..], &mut buf).unwrap();
            pos += registry.last_consumed();
            plain.extend_from_slice(&buf[..produced]);
        }
        assert_eq!(plain, input);
        registry.close_session(dec).unwrap();
        assert_eq!(registry.live_sessions(), 0);
    }

    #[test]
    fn test_out_of_range_level_is_initialization_error() {
        let mut registry = SessionRegistry::new();
        for level in [-2, 10, 100] {
            let err = registry.create_compressor(level).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Initialization);
            assert!(registry.last_error());
        }
        assert_eq!(registry.live_sessions(), 0);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let mut registry = SessionRegistry::new();
        let err = registry.create(0x7f, -1).unwrap_err();
        match &err {
            SessionError::UnknownMode { raw } => assert_eq!(raw, "0x7f"),
            other => panic!("expected UnknownMode, got {:?}", other),
        }
        assert_eq!(err.kind(), ErrorKind::Initialization);
        assert!(registry.last_error());
    }

    #[test]
    fn test_stale_and_foreign_handles_are_rejected() {
        let mut registry = SessionRegistry::new();
        let handle = registry.create_decompressor().unwrap();
        registry.close_session(handle).unwrap();
        assert!(!registry.is_live(handle));

        let mut buf = [0u8; 16];
        assert!(matches!(
            registry.step(handle, b"x", &mut buf),
            Err(SessionError::InvalidHandle { .. })
        ));
        assert!(registry.last_error());
        assert!(matches!(registry.reset(handle), Err(SessionError::InvalidHandle { .. })));
        assert!(matches!(registry.close_session(handle), Err(SessionError::InvalidHandle { .. })));

        let never_issued = SessionHandle::from_raw(9_999);
        let err = registry.step(never_issued, b"x", &mut buf).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Contract);
        assert_eq!(err.to_string(), "invalid or closed session handle #9999");
    }

    #[test]
    fn test_status_overwritten_by_each_operation() {
        let mut registry = SessionRegistry::new();
        let handle = registry.create_decompressor().unwrap();
        let mut buf = [0u8; 64];

        assert!(registry.step(handle, b"not zlib at all", &mut buf).is_err());
        assert!(registry.last_error());

        registry.reset(handle).unwrap();
        assert!(!registry.last_error());
        assert_eq!(registry.last_consumed(), 0);

        let packed = pack(b"ok");
        let produced = registry.step(handle, &packed, &mut buf).unwrap();
        assert_eq!(&buf[..produced], b"ok");
        assert!(!registry.last_error());
        assert!(registry.is_complete());
        assert_eq!(registry.last_consumed(), packed.len());
    }

    #[test]
    fn test_empty_output_through_registry() {
        let mut registry = SessionRegistry::new();
        let handle = registry.create_compressor(-1).unwrap();
        let err = registry.step(handle, b"abc", &mut []).unwrap_err();
        assert!(matches!(err, SessionError::EmptyOutput));
        assert!(registry.last_error());
        // The session itself was never touched.
        assert_eq!(registry.session(handle).unwrap().state(), SessionState::Active);
    }

    #[test]
    fn test_close_mid_stream_still_releases_handle() {
        let input: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        let mut registry = SessionRegistry::new();
        let handle = registry.create_compressor(0).unwrap();
        let mut buf = [0u8; 16];
        registry.step(handle, &input, &mut buf).unwrap();
        assert!(!registry.is_complete());

        let err = registry.close_session(handle).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Finalization);
        assert!(registry.last_error());
        assert!(!registry.is_live(handle));
    }

    #[test]
    fn test_registries_are_independent() {
        let mut left = SessionRegistry::new();
        let mut right = SessionRegistry::new();

        assert!(left.create_compressor(42).is_err());
        right.create_decompressor().unwrap();

        assert!(left.last_error());
        assert!(!right.last_error());
    }

    #[test]
    fn test_strategy_handles_round_trip() {
        let input = b"rle rle rle rle rle rle rle rle rle rle".to_vec();
        let mut registry = SessionRegistry::new();
        let enc = registry.create_compressor_with_strategy(6, 3).unwrap();
        assert_eq!(registry.session(enc).unwrap().strategy(), CompressionStrategy::Rle);

        let mut packed = vec![0u8; 256];
        let produced = registry.step(enc, &input, &mut packed).unwrap();
        assert!(registry.is_complete());
        packed.truncate(produced);
        registry.close_session(enc).unwrap();

        let (_, plain) = Decompressor::new().unwrap().decompress_all(&packed).unwrap();
        assert_eq!(plain, input);
    }

    #[test]
    fn test_unknown_strategy_is_initialization_error() {
        let mut registry = SessionRegistry::new();
        for strategy in [-1, 5, 9] {
            let err = registry.create_compressor_with_strategy(6, strategy).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Initialization);
            assert!(registry.last_error());
        }
        assert_eq!(registry.live_sessions(), 0);

        // A good call clears the error again.
        registry.create_compressor_with_strategy(-1, 0).unwrap();
        assert!(!registry.last_error());
    }
}
