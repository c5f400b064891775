//! Audio normalization — arbitrary input to canonical mono 16 kHz f32.
//!
//! ```text
//! audio bytes → symphonia probe + decode → downmix to mono
//! → rubato sinc resample to 16kHz → Waveform
//! ```
//!
//! Segments handed to the recognizer are re-encoded as 16-bit PCM WAV.

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::debug;

use crate::types::{ConversionError, ResultExt};

/// Canonical sample rate for recognition input.
pub const TARGET_SAMPLE_RATE: u32 = 16_000;

/// A mono waveform at a known sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    /// Interleaving-free mono samples in [-1.0, 1.0].
    pub samples: Vec<f32>,
    /// Samples per second.
    pub sample_rate: u32,
}

impl Waveform {
    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Whether the waveform holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Decode arbitrary audio bytes and normalize to mono 16 kHz.
///
/// `extension` is a container-format hint (e.g. `"mp3"`, `"wav"`) taken from
/// the uploaded filename; probing still sniffs the content, so a wrong hint
/// degrades to a slower probe rather than a failure.
pub fn normalize(bytes: Vec<u8>, extension: Option<&str>) -> Result<Waveform, ConversionError> {
    let decoded = decode_to_mono(bytes, extension)?;
    let samples = resample(decoded.samples, decoded.sample_rate, TARGET_SAMPLE_RATE)?;
    Ok(Waveform {
        samples,
        sample_rate: TARGET_SAMPLE_RATE,
    })
}

/// Decode bytes to a mono waveform at the source sample rate.
fn decode_to_mono(bytes: Vec<u8>, extension: Option<&str>) -> Result<Waveform, ConversionError> {
    let mss = MediaSourceStream::new(Box::new(std::io::Cursor::new(bytes)), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = extension {
        let _ = hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .decode("unrecognized container")?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| ConversionError::NoAudioTrack("no decodable track".into()))?;
    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| ConversionError::Decode("source sample rate unknown".into()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .decode("unsupported codec")?;

    let mut mono: Vec<f32> = Vec::new();
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream surfaces as UnexpectedEof from the source.
            Err(SymphoniaError::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(ConversionError::Decode(format!("read packet: {e}"))),
        };
        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(audio_buf) => {
                let spec = *audio_buf.spec();
                let mut sample_buf =
                    SampleBuffer::<f32>::new(audio_buf.capacity() as u64, spec);
                sample_buf.copy_interleaved_ref(audio_buf);
                let channels = spec.channels.count().max(1);
                for frame in sample_buf.samples().chunks_exact(channels) {
                    mono.push(frame.iter().sum::<f32>() / channels as f32);
                }
            }
            // A corrupt packet mid-stream is skipped, not fatal.
            Err(SymphoniaError::DecodeError(e)) => {
                debug!("skipping undecodable packet: {e}");
            }
            Err(e) => return Err(ConversionError::Decode(format!("decode packet: {e}"))),
        }
    }

    if mono.is_empty() {
        return Err(ConversionError::NoAudioTrack(
            "stream decoded to zero samples".into(),
        ));
    }

    Ok(Waveform {
        samples: mono,
        sample_rate,
    })
}

/// Resample mono samples from `from_rate` to `to_rate`.
fn resample(samples: Vec<f32>, from_rate: u32, to_rate: u32) -> Result<Vec<f32>, ConversionError> {
    use rubato::{
        Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType,
        WindowFunction,
    };

    if from_rate == to_rate {
        return Ok(samples);
    }

    const CHUNK: usize = 1024;
    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };
    let ratio = f64::from(to_rate) / f64::from(from_rate);
    let mut resampler =
        SincFixedIn::<f32>::new(ratio, 2.0, params, CHUNK, 1).resample("resampler init")?;

    let mut out: Vec<f32> = Vec::with_capacity((samples.len() as f64 * ratio) as usize + CHUNK);
    let mut pos = 0;
    while pos + CHUNK <= samples.len() {
        let frames = resampler
            .process(&[&samples[pos..pos + CHUNK]], None)
            .resample("process chunk")?;
        out.extend_from_slice(&frames[0]);
        pos += CHUNK;
    }
    if pos < samples.len() {
        let frames = resampler
            .process_partial(Some(&[&samples[pos..]]), None)
            .resample("process tail")?;
        out.extend_from_slice(&frames[0]);
    }

    Ok(out)
}

/// Encode a mono waveform as 16-bit PCM WAV bytes.
pub fn encode_wav(waveform: &Waveform) -> Result<Vec<u8>, ConversionError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: waveform.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).encode("wav header")?;
        for &sample in &waveform.samples {
            let quantized = (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16;
            writer.write_sample(quantized).encode("wav sample")?;
        }
        writer.finalize().encode("wav finalize")?;
    }
    Ok(cursor.into_inner())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
