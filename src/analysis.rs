//! Streaming subband analysis
//!
//! An `AnalysisContext` turns consecutive frames of time-domain samples
//! into subband blocks. It keeps the last `TAPS - N` samples of the
//! previous frame so the filter bank runs across frame boundaries as if
//! the stream had been processed in one piece.
//!
//! Frames must be submitted in temporal order. Each independent stream
//! needs its own context; the polyphase bank behind it can be shared.

use crate::config::PqfConfig;
use crate::error::{InputResult, InputSizeError, PqfResult};
use crate::polyphase::PolyphaseBank;
use crate::tables;
use std::sync::Arc;

/// Arrangement of subband values in a caller-provided output buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLayout {
    /// Block after block: `out[step * N + subband]`
    #[default]
    Interleaved,
    /// Subband after subband: `out[subband * subband_size + step]`
    Planar,
}

/// Stateful analysis filter bank for one stream
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    bank: Arc<PolyphaseBank>,
    subband_size: usize,
    /// History (`TAPS - N` samples) followed by the current frame
    buffer: Vec<f32>,
    /// Subband blocks of the last frame, interleaved
    output: Vec<f32>,
    partial: Vec<f64>,
    folded: Vec<f64>,
    frames_processed: u64,
}

impl Default for AnalysisContext {
    fn default() -> Self {
        Self::from_parts(tables::default_bank(), PqfConfig::default().subband_size())
    }
}

impl AnalysisContext {
    /// Create a context with its own polyphase bank
    pub fn new(config: PqfConfig) -> PqfResult<Self> {
        config.validate()?;
        let bank = if config == PqfConfig::default() {
            tables::default_bank()
        } else {
            Arc::new(PolyphaseBank::new(&config))
        };
        Ok(Self::from_parts(bank, config.subband_size()))
    }

    /// Create a context on a shared bank, producing `subband_size` blocks per frame
    pub fn with_bank(bank: Arc<PolyphaseBank>, subband_size: usize) -> PqfResult<Self> {
        bank.config().with_subband_size(subband_size)?;
        Ok(Self::from_parts(bank, subband_size))
    }

    fn from_parts(bank: Arc<PolyphaseBank>, subband_size: usize) -> Self {
        let n = bank.subbands();
        let overlap = bank.taps() - n;
        let frame_size = n * subband_size;

        log::debug!(
            "created analysis context: {} subbands, {} taps, frame of {} samples",
            n,
            bank.taps(),
            frame_size
        );

        Self {
            buffer: vec![0.0; overlap + frame_size],
            output: vec![0.0; frame_size],
            partial: vec![0.0; 2 * n],
            folded: vec![0.0; n],
            frames_processed: 0,
            subband_size,
            bank,
        }
    }

    /// Polyphase bank used by this context
    pub fn bank(&self) -> &Arc<PolyphaseBank> {
        &self.bank
    }

    /// Number of subbands (`N`)
    pub fn subbands(&self) -> usize {
        self.bank.subbands()
    }

    /// Subband blocks produced per frame
    pub fn subband_size(&self) -> usize {
        self.subband_size
    }

    /// Samples expected by `submit`
    pub fn frame_size(&self) -> usize {
        self.subbands() * self.subband_size
    }

    /// Samples carried from one frame to the next
    pub fn overlap(&self) -> usize {
        self.bank.taps() - self.subbands()
    }

    /// Group delay of the bank in input samples
    pub fn latency(&self) -> f64 {
        (self.bank.taps() - 1) as f64 / 2.0
    }

    /// Retained history, oldest sample first
    pub fn history(&self) -> &[f32] {
        &self.buffer[..self.overlap()]
    }

    /// Frames successfully processed since creation or the last reset
    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Forget the stream history, as if the context was just created
    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.output.fill(0.0);
        self.frames_processed = 0;
    }

    /// Analyse one frame and return its subband blocks
    pub fn submit(&mut self, frame: &[f32]) -> InputResult<SubbandBlocks<'_>> {
        self.check_frame(frame)?;
        self.process(frame);
        Ok(SubbandBlocks {
            values: &self.output,
            subbands: self.subbands(),
        })
    }

    /// Analyse one frame into a caller buffer of `frame_size()` values
    pub fn submit_into(
        &mut self,
        frame: &[f32],
        out: &mut [f32],
        layout: OutputLayout,
    ) -> InputResult<()> {
        self.check_frame(frame)?;
        if out.len() != self.frame_size() {
            return Err(InputSizeError::OutputLength {
                expected: self.frame_size(),
                actual: out.len(),
            });
        }
        self.process(frame);

        match layout {
            OutputLayout::Interleaved => out.copy_from_slice(&self.output),
            OutputLayout::Planar => {
                let n = self.subbands();
                for (step, block) in self.output.chunks_exact(n).enumerate() {
                    for (k, &value) in block.iter().enumerate() {
                        out[k * self.subband_size + step] = value;
                    }
                }
            }
        }
        Ok(())
    }

    fn check_frame(&self, frame: &[f32]) -> InputResult<()> {
        if frame.len() != self.frame_size() {
            log::warn!(
                "rejected frame of {} samples, expected {}",
                frame.len(),
                self.frame_size()
            );
            return Err(InputSizeError::FrameLength {
                expected: self.frame_size(),
                actual: frame.len(),
            });
        }
        Ok(())
    }

    fn process(&mut self, frame: &[f32]) {
        let n = self.subbands();
        let taps = self.bank.taps();
        let overlap = self.overlap();

        self.buffer[overlap..].copy_from_slice(frame);

        for (step, block) in self.output.chunks_exact_mut(n).enumerate() {
            let start = step * n;
            self.bank
                .partial_sums(&self.buffer[start..start + taps], &mut self.partial);
            self.bank.modulate(&self.partial, &mut self.folded, block);
        }

        let frame_size = frame.len();
        self.buffer.copy_within(frame_size.., 0);
        self.frames_processed += 1;

        log::trace!("processed frame {}", self.frames_processed);
    }
}

/// Subband blocks of one frame, borrowed from the context
#[derive(Debug, Clone, Copy)]
pub struct SubbandBlocks<'a> {
    values: &'a [f32],
    subbands: usize,
}

impl<'a> SubbandBlocks<'a> {
    /// Number of blocks (output steps)
    pub fn len(&self) -> usize {
        self.values.len() / self.subbands
    }

    /// True when the frame produced no blocks
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values per block
    pub fn subbands(&self) -> usize {
        self.subbands
    }

    /// Block of output step `step`, one value per subband
    pub fn block(&self, step: usize) -> &'a [f32] {
        &self.values[step * self.subbands..(step + 1) * self.subbands]
    }

    /// Iterate over the blocks in temporal order
    pub fn iter(&self) -> std::slice::ChunksExact<'a, f32> {
        self.values.chunks_exact(self.subbands)
    }

    /// Samples of subband `k` across the frame
    pub fn subband(&self, k: usize) -> impl Iterator<Item = f32> + 'a {
        self.values.iter().skip(k).step_by(self.subbands).copied()
    }

    /// All values, interleaved block after block
    pub fn as_slice(&self) -> &'a [f32] {
        self.values
    }

    /// Copy the blocks into owned vectors
    pub fn to_vec(&self) -> Vec<Vec<f32>> {
        self.iter().map(<[f32]>::to_vec).collect()
    }
}

impl<'a> IntoIterator for SubbandBlocks<'a> {
    type Item = &'a [f32];
    type IntoIter = std::slice::ChunksExact<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.chunks_exact(self.subbands)
    }
}
