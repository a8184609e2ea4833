//! Sound playback on a dedicated audio thread.
//!
//! Raylib's audio device wants to live on a single thread, so the backend
//! keeps all `Sound` handles there and talks to it over lock-free
//! channels: [`AudioCmd`] in, [`AudioMessage`] out. The engine-facing
//! surface is [`AudioBridge`], created once via [`setup_audio`] and torn
//! down via [`shutdown_audio`].
//!
//! Load failures come back as [`AudioMessage::SoundLoadFailed`]; a missing
//! file is never silently substituted and nothing is retried.

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{info, warn};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::FxHashMap;

/// Commands consumed by the audio thread.
#[derive(Debug, Clone)]
pub enum AudioCmd {
    /// Load a sound buffer from `path` and register it under `id`.
    LoadSound { id: String, path: String },
    /// Play a previously loaded sound from the start.
    PlaySound { id: String },
    /// Adjust playback pitch of a loaded sound (1.0 is normal).
    SetPitch { id: String, pitch: f32 },
    /// Unload everything and exit the thread.
    Shutdown,
}

/// Messages emitted by the audio thread.
#[derive(Debug, Clone)]
pub enum AudioMessage {
    SoundLoaded { id: String },
    SoundLoadFailed { id: String, error: String },
}

/// Bridge between the main thread and the audio thread.
pub struct AudioBridge {
    pub tx_cmd: Sender<AudioCmd>,
    pub rx_msg: Receiver<AudioMessage>,
    pub handle: std::thread::JoinHandle<()>,
}

impl AudioBridge {
    /// Request a sound load. The result arrives later as an
    /// [`AudioMessage`].
    pub fn load_sound(&self, id: impl Into<String>, path: impl Into<String>) {
        let _ = self.tx_cmd.send(AudioCmd::LoadSound {
            id: id.into(),
            path: path.into(),
        });
    }

    pub fn play_sound(&self, id: impl Into<String>) {
        let _ = self.tx_cmd.send(AudioCmd::PlaySound { id: id.into() });
    }

    pub fn set_pitch(&self, id: impl Into<String>, pitch: f32) {
        let _ = self.tx_cmd.send(AudioCmd::SetPitch {
            id: id.into(),
            pitch,
        });
    }

    /// Drain any pending messages without blocking.
    pub fn poll_messages(&self) -> Vec<AudioMessage> {
        self.rx_msg.try_iter().collect()
    }
}

/// Spawn the audio thread and build the bridge to it.
pub fn setup_audio() -> AudioBridge {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));

    AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    }
}

/// Gracefully stop the audio thread and join it.
pub fn shutdown_audio(bridge: AudioBridge) {
    let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
    let _ = bridge.handle.join();
}

/// Entry point of the dedicated audio thread.
///
/// Owns the audio device and every loaded `Sound`; blocks on the command
/// channel until [`AudioCmd::Shutdown`] arrives.
fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            warn!("audio device unavailable, sound disabled: {e}");
            // Drain commands so senders never block, then exit on Shutdown.
            for cmd in rx_cmd.iter() {
                if let AudioCmd::Shutdown = cmd {
                    return;
                }
                if let AudioCmd::LoadSound { id, .. } = cmd {
                    let _ = tx_msg.send(AudioMessage::SoundLoadFailed {
                        id,
                        error: "no audio device".into(),
                    });
                }
            }
            return;
        }
    };

    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::LoadSound { id, path } => match audio.new_sound(&path) {
                Ok(sound) => {
                    info!("[audio] loaded id='{id}' path='{path}'");
                    sounds.insert(id.clone(), sound);
                    let _ = tx_msg.send(AudioMessage::SoundLoaded { id });
                }
                Err(e) => {
                    warn!("[audio] load failed id='{id}' path='{path}': {e}");
                    let _ = tx_msg.send(AudioMessage::SoundLoadFailed {
                        id,
                        error: e.to_string(),
                    });
                }
            },
            AudioCmd::PlaySound { id } => {
                if let Some(sound) = sounds.get(&id) {
                    sound.play();
                } else {
                    warn!("[audio] play of unknown id='{id}'");
                }
            }
            AudioCmd::SetPitch { id, pitch } => {
                if let Some(sound) = sounds.get(&id) {
                    sound.set_pitch(pitch);
                } else {
                    warn!("[audio] set_pitch of unknown id='{id}'");
                }
            }
            AudioCmd::Shutdown => break,
        }
    }

    sounds.clear();
    info!("[audio] thread exiting");
}
