//! Stream continuity validation
//!
//! Splitting a signal into frames and feeding them one by one must give
//! the same subband samples as filtering the whole signal at once with
//! the full-length subband impulse responses.

use pqf_rs::{AnalysisContext, OutputLayout, PolyphaseBank, PqfConfig};

/// Subband `k` at output step `t`, by direct convolution over the whole stream
fn reference_sample(bank: &PolyphaseBank, response: &[f64], signal: &[f32], t: usize) -> f64 {
    let newest = (t + 1) * bank.subbands() - 1;
    response
        .iter()
        .enumerate()
        .take_while(|(n, _)| *n <= newest)
        .map(|(n, &h)| h * signal[newest - n] as f64)
        .sum()
}

fn check_against_reference(config: PqfConfig, frames: usize) {
    let mut ctx = AnalysisContext::new(config).unwrap();
    let bank = PolyphaseBank::new(&config);
    let responses: Vec<Vec<f64>> = (0..config.subbands())
        .map(|k| bank.impulse_response(k))
        .collect();

    let signal = util::noise(42, 1.0, config.frame_size() * frames);
    let mut steps = Vec::new();
    for frame in util::frames(&signal, config.frame_size()).unwrap() {
        steps.extend(ctx.submit(frame).unwrap().to_vec());
    }
    assert_eq!(steps.len(), config.subband_size() * frames);

    for (t, block) in steps.iter().enumerate() {
        for (k, &value) in block.iter().enumerate() {
            let expected = reference_sample(&bank, &responses[k], &signal, t);
            assert!(
                (value as f64 - expected).abs() < 1e-5,
                "{} subbands, step {}, subband {}: streamed {} vs reference {}",
                config.subbands(),
                t,
                k,
                value,
                expected
            );
        }
    }
}

#[test]
fn test_single_step_frames_match_full_convolution() {
    let _ = env_logger::builder().is_test(true).try_init();
    // 40 frames of 16 samples span the 384-tap prototype several times
    check_against_reference(PqfConfig::single_step(16, 24).unwrap(), 40);
}

#[test]
fn test_multi_step_frames_match_full_convolution() {
    let config = PqfConfig::default().with_subband_size(5).unwrap();
    check_against_reference(config, 12);
}

#[test]
fn test_small_bank_matches_full_convolution() {
    check_against_reference(PqfConfig::single_step(4, 8).unwrap(), 30);
}

#[test]
fn test_frame_size_does_not_change_the_stream() {
    // The same stream cut into 16-sample and 2048-sample frames
    let signal = util::noise(7, 1.0, 2048 * 3);
    let mut small = AnalysisContext::new(PqfConfig::single_step(16, 24).unwrap()).unwrap();
    let mut large = AnalysisContext::default();

    let mut from_small = Vec::new();
    for frame in signal.chunks_exact(16) {
        from_small.extend_from_slice(small.submit(frame).unwrap().as_slice());
    }
    let mut from_large = Vec::new();
    for frame in signal.chunks_exact(2048) {
        from_large.extend_from_slice(large.submit(frame).unwrap().as_slice());
    }

    assert_eq!(from_small.len(), from_large.len());
    assert!(util::max_abs_diff(&from_small, &from_large) == 0.0);
}

#[test]
fn test_planar_output_follows_stream() {
    let config = PqfConfig::default();
    let mut planar_ctx = AnalysisContext::new(config).unwrap();
    let mut blocks_ctx = AnalysisContext::new(config).unwrap();
    let signal = util::noise(3, 0.5, config.frame_size() * 2);
    let mut planar = vec![0.0f32; config.frame_size()];

    for frame in util::frames(&signal, config.frame_size()).unwrap() {
        planar_ctx
            .submit_into(frame, &mut planar, OutputLayout::Planar)
            .unwrap();
        let blocks = blocks_ctx.submit(frame).unwrap();
        for k in 0..config.subbands() {
            let band: Vec<f32> = blocks.subband(k).collect();
            let start = k * config.subband_size();
            assert_eq!(&planar[start..start + config.subband_size()], band.as_slice());
        }
    }
}
