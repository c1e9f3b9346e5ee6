#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chunkz_core::prelude::*;
    use chunkz_core::telemetry::{Stage, StageTimes, TelemetryCounters, TelemetryTimer};

    fn sample_data(len: usize) -> Vec<u8> {
        b"the quick brown fox jumps over the lazy dog. ".iter().copied().cycle().take(len).collect()
    }

    #[test]
    fn test_counters_track_every_step() {
        let input = sample_data(40_000);
        let mut session = Session::create(Mode::Compress, CompressionLevel::Default).unwrap();
        let mut buf = vec![0u8; 100];
        let mut consumed = 0;
        let mut produced = 0;
        let mut steps = 0;

        while !session.is_complete() {
            let outcome = session
                .step(InputRegion::new(&input[consumed..]), OutputRegion::new(&mut buf).unwrap())
                .unwrap();
            consumed += outcome.consumed;
            produced += outcome.produced;
            steps += 1;
        }

        let counters = session.counters();
        assert_eq!(counters.steps, steps);
        assert_eq!(counters.bytes_consumed, consumed as u64);
        assert_eq!(counters.bytes_produced, produced as u64);
        assert_eq!(counters.completions, 1);
        assert_eq!(counters.errors, 0);

        let snap = session.telemetry();
        assert_eq!(snap.mode, Mode::Compress);
        assert!(snap.compression_ratio > 0.0 && snap.compression_ratio < 0.5);
    }

    #[test]
    fn test_decompress_ratio_is_oriented_by_mode() {
        let input = sample_data(40_000);
        let mut compressor = Compressor::new(CompressionLevel::Default).unwrap();
        let packed = compressor.compress_all(&input).unwrap();
        let compress_ratio = compressor.telemetry().compression_ratio;

        let mut decompressor = Decompressor::new().unwrap();
        decompressor.decompress_all(&packed).unwrap();
        let snap = decompressor.telemetry();

        assert_eq!(snap.bytes_consumed, packed.len() as u64);
        assert_eq!(snap.bytes_produced, input.len() as u64);
        assert!((snap.compression_ratio - compress_ratio).abs() < 1e-9);
        // decompress_all resets after success.
        assert_eq!(snap.resets, 1);
    }

    #[test]
    fn test_errors_are_counted() {
        let mut session = Session::create(Mode::Decompress, CompressionLevel::Default).unwrap();
        let mut buf = [0u8; 32];
        for _ in 0..3 {
            let _ = session.step(InputRegion::new(b"zzzz"), OutputRegion::new(&mut buf).unwrap());
        }
        assert_eq!(session.counters().errors, 3);
        assert_eq!(session.counters().steps, 0);
    }

    #[test]
    fn test_stage_times_follow_metrics_toggle() {
        let input = sample_data(10_000);

        let mut quiet = Compressor::with_config(CompressionLevel::Default, EngineConfig::default()).unwrap();
        quiet.compress_all(&input).unwrap();
        assert!(quiet.telemetry().stage_times.is_empty());

        let mut timed = Compressor::with_config(CompressionLevel::Default, EngineConfig::with_metrics_enabled()).unwrap();
        timed.compress_all(&input).unwrap();
        let snap = timed.telemetry();
        assert!(snap.stage_times.contains(Stage::Init));
        assert!(snap.stage_times.contains(Stage::Step));
        assert!(snap.stage_times.contains(Stage::Reset));
        assert!(!snap.stage_times.contains(Stage::Finalize));
        assert!(snap.sanity_check());
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let mut compressor = Compressor::with_config(CompressionLevel::BEST, EngineConfig::with_metrics_enabled()).unwrap();
        compressor.compress_all(b"json please").unwrap();
        let snap = compressor.telemetry();

        let json = snap.to_json().unwrap();
        assert!(json.contains("\"mode\":\"Compress\""));
        assert!(json.contains("\"steps\":"));

        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.steps, snap.steps);
        assert_eq!(back.stage_times.get(Stage::Step), snap.stage_times.get(Stage::Step));
    }

    #[test]
    fn test_stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Step, Duration::from_micros(10));
        times.add(Stage::Step, Duration::from_micros(15));
        times.add(Stage::Init, Duration::from_micros(5));

        assert_eq!(times.get(Stage::Step), Duration::from_micros(25));
        assert_eq!(times.get(Stage::Finalize), Duration::ZERO);
        assert_eq!(times.total(), Duration::from_micros(30));
        assert!((times.get_us(Stage::Init) - 5.0).abs() < 1e-6);
        assert_eq!((&times).into_iter().count(), 2);
    }

    #[test]
    fn test_disabled_timer_records_nothing() {
        let mut timer = TelemetryTimer::new(false);
        let value = timer.measure(Stage::Step, || 41 + 1);
        timer.add_stage_time(Stage::Init, Duration::from_millis(1));
        assert_eq!(value, 42);
        assert!(!timer.is_enabled());
        assert!(timer.stage_times.is_empty());
    }

    #[test]
    fn test_counters_merge() {
        let mut total = TelemetryCounters::default();
        let mut a = TelemetryCounters::default();
        a.add_step(10, 4);
        a.add_completion();
        let mut b = TelemetryCounters::default();
        b.add_step(6, 2);
        b.add_error();
        b.add_reset();

        total.merge(&a);
        total += b;
        assert_eq!(total.steps, 2);
        assert_eq!(total.bytes_consumed, 16);
        assert_eq!(total.bytes_produced, 6);
        assert_eq!(total.completions, 1);
        assert_eq!(total.errors, 1);
        assert_eq!(total.resets, 1);
    }
}
