//! Procedurally synthesized sound cues
//!
//! No audio assets: every cue is a short sine-wave beep rendered into an
//! in-memory WAV buffer at startup and registered with the platform
//! mixer. The bank is constructed once by the frame driver and passed by
//! reference wherever cues are triggered.

use macroquad::audio::{load_sound_from_bytes, play_sound_once, Sound};

use crate::consts::BRICK_CUE_COUNT;
use crate::sim::GameEvent;

/// Sample rate for synthesized cues
const SAMPLE_RATE: u32 = 44_100;

/// Brick pitch cues, C4 up to A4
const BRICK_TONES_HZ: [f32; BRICK_CUE_COUNT] = [262.0, 294.0, 330.0, 349.0, 392.0, 440.0];

/// The full set of audible cues for one game, synthesized up front
pub struct SoundBank {
    wall: Sound,
    paddle: Sound,
    bricks: Vec<Sound>,
    round_lost: Sound,
}

impl SoundBank {
    /// Synthesize every cue and register it with the platform mixer
    pub async fn load() -> Result<Self, macroquad::Error> {
        let mut bricks = Vec::with_capacity(BRICK_CUE_COUNT);
        for freq in BRICK_TONES_HZ {
            bricks.push(load_sound_from_bytes(&sine_wav(freq, 0.04)).await?);
        }
        Ok(Self {
            wall: load_sound_from_bytes(&sine_wav(220.0, 0.05)).await?,
            paddle: load_sound_from_bytes(&sine_wav(440.0, 0.05)).await?,
            bricks,
            round_lost: load_sound_from_bytes(&sine_wav(110.0, 0.5)).await?,
        })
    }

    /// Fire-and-forget playback of the cue for a simulation event.
    ///
    /// Overlapping cues layer freely; events with no audible cue are
    /// ignored.
    pub fn play(&self, event: &GameEvent) {
        match event {
            GameEvent::WallBounce => play_sound_once(&self.wall),
            GameEvent::PaddleHit => play_sound_once(&self.paddle),
            GameEvent::BrickDestroyed { cue } => {
                let cue = (*cue).min(self.bricks.len() - 1);
                play_sound_once(&self.bricks[cue]);
            }
            GameEvent::GameOver => play_sound_once(&self.round_lost),
            GameEvent::BallLost | GameEvent::LevelCleared => {}
        }
    }
}

/// Render a sine-wave beep as a 16-bit mono WAV file in memory
fn sine_wav(frequency: f32, duration: f32) -> Vec<u8> {
    let num_samples = (duration * SAMPLE_RATE as f32) as u32;
    let data_len = num_samples * 2;

    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes()); // byte rate
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());

    for i in 0..num_samples {
        let t = i as f32 / SAMPLE_RATE as f32;
        let sample = (32_767.0 * (std::f32::consts::TAU * frequency * t).sin()) as i16;
        wav.extend_from_slice(&sample.to_le_bytes());
    }
    wav
}
