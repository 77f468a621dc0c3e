//! Music and sound-effect playback.

use super::sink::{AudioSink, Channel, Clip, NullSink};
use crate::core::constants::{DEFAULT_MUSIC_VOLUME, DEFAULT_SFX_VOLUME};

/// Plays music tracks and sound effects through an [`AudioSink`].
///
/// One instance lives in the application and is lent to whatever needs
/// playback. Bad indices and unknown names are logged and skipped; they never
/// change state.
#[derive(Debug)]
pub struct AudioPlayer<S: AudioSink = NullSink> {
    sink: S,
    music_tracks: Vec<Clip>,
    sound_effects: Vec<Clip>,
    music_volume: f32,
    sfx_volume: f32,
    current_track_index: usize,
}

impl<S: AudioSink> AudioPlayer<S> {
    pub fn new(sink: S, music_tracks: Vec<Clip>, sound_effects: Vec<Clip>) -> Self {
        let mut player = Self {
            sink,
            music_tracks,
            sound_effects,
            music_volume: DEFAULT_MUSIC_VOLUME,
            sfx_volume: DEFAULT_SFX_VOLUME,
            current_track_index: 0,
        };
        player.update_volumes();
        player
    }

    pub fn with_volumes(mut self, music: f32, sfx: f32) -> Self {
        self.set_music_volume(music);
        self.set_sfx_volume(sfx);
        self
    }

    /// Begin the first track, if there is one.
    pub fn start(&mut self) {
        if !self.music_tracks.is_empty() {
            self.play_music_track(0);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn current_track_index(&self) -> usize {
        self.current_track_index
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    pub fn sfx_volume(&self) -> f32 {
        self.sfx_volume
    }

    pub fn track_count(&self) -> usize {
        self.music_tracks.len()
    }

    pub fn play_music_track(&mut self, index: usize) {
        match self.music_tracks.get(index) {
            Some(clip) => {
                self.current_track_index = index;
                self.sink.play(Channel::Music, clip, true);
            }
            None => log::warn!("Invalid music track index: {}", index),
        }
    }

    pub fn play_next_track(&mut self) {
        let count = self.music_tracks.len();
        if count == 0 {
            log::warn!("No music tracks to advance to");
            return;
        }
        self.play_music_track((self.current_track_index + 1) % count);
    }

    pub fn play_previous_track(&mut self) {
        let count = self.music_tracks.len();
        if count == 0 {
            log::warn!("No music tracks to go back to");
            return;
        }
        let index = match self.current_track_index {
            0 => count - 1,
            i => (i - 1).min(count - 1),
        };
        self.play_music_track(index);
    }

    pub fn play_music_by_name(&mut self, name: &str) {
        match self.music_tracks.iter().position(|t| t.name == name) {
            Some(index) => self.play_music_track(index),
            None => log::warn!("Music track not found: {}", name),
        }
    }

    pub fn play_sfx(&mut self, index: usize) {
        match self.sound_effects.get(index) {
            Some(clip) => self.sink.play_one_shot(Channel::Sfx, clip),
            None => log::warn!("Invalid SFX index: {}", index),
        }
    }

    pub fn play_sfx_by_name(&mut self, name: &str) {
        match self.sound_effects.iter().find(|s| s.name == name) {
            Some(clip) => self.sink.play_one_shot(Channel::Sfx, clip),
            None => log::warn!("SFX not found: {}", name),
        }
    }

    pub fn stop_music(&mut self) {
        self.sink.stop(Channel::Music);
    }

    pub fn pause_music(&mut self) {
        self.sink.pause(Channel::Music);
    }

    pub fn resume_music(&mut self) {
        self.sink.resume(Channel::Music);
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        if let Some(v) = clamp_volume(volume) {
            self.music_volume = v;
            self.update_volumes();
        }
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        if let Some(v) = clamp_volume(volume) {
            self.sfx_volume = v;
            self.update_volumes();
        }
    }

    fn update_volumes(&mut self) {
        self.sink.set_volume(Channel::Music, self.music_volume);
        self.sink.set_volume(Channel::Sfx, self.sfx_volume);
    }
}

fn clamp_volume(volume: f32) -> Option<f32> {
    if volume.is_nan() {
        log::warn!("Ignoring NaN volume");
        return None;
    }
    Some(volume.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingSink {
        played: Vec<(Channel, String)>,
        volumes: Vec<(Channel, f32)>,
        stops: u32,
    }

    impl AudioSink for RecordingSink {
        fn play(&mut self, channel: Channel, clip: &Clip, _looping: bool) {
            self.played.push((channel, clip.name.clone()));
        }
        fn play_one_shot(&mut self, channel: Channel, clip: &Clip) {
            self.played.push((channel, clip.name.clone()));
        }
        fn stop(&mut self, _channel: Channel) {
            self.stops += 1;
        }
        fn pause(&mut self, _channel: Channel) {}
        fn resume(&mut self, _channel: Channel) {}
        fn set_volume(&mut self, channel: Channel, volume: f32) {
            self.volumes.push((channel, volume));
        }
    }

    fn clips(names: &[&str]) -> Vec<Clip> {
        names.iter().map(|n| Clip::new(*n)).collect()
    }

    fn player() -> AudioPlayer<RecordingSink> {
        AudioPlayer::new(
            RecordingSink::default(),
            clips(&["theme", "night", "boss"]),
            clips(&["wing", "point", "hit"]),
        )
    }

    #[test]
    fn test_start_plays_first_track() {
        let mut p = player();
        p.start();
        assert_eq!(p.sink().played, vec![(Channel::Music, "theme".to_string())]);
    }

    #[test]
    fn test_start_with_no_tracks_is_silent() {
        let mut p = AudioPlayer::new(RecordingSink::default(), Vec::new(), Vec::new());
        p.start();
        p.play_next_track();
        p.play_previous_track();
        assert!(p.sink().played.is_empty());
    }

    #[test]
    fn test_next_track_wraps_around() {
        let mut p = player();
        p.play_music_track(1);
        for _ in 0..p.track_count() {
            p.play_next_track();
        }
        assert_eq!(p.current_track_index(), 1);
    }

    #[test]
    fn test_previous_track_wraps_to_last() {
        let mut p = player();
        p.play_music_track(0);
        p.play_previous_track();
        assert_eq!(p.current_track_index(), 2);
        assert_eq!(p.sink().played.last().unwrap().1, "boss");
    }

    #[test]
    fn test_invalid_track_index_keeps_current() {
        let mut p = player();
        p.play_music_track(2);
        p.play_music_track(3);
        assert_eq!(p.current_track_index(), 2);
        assert_eq!(p.sink().played.len(), 1);
    }

    #[test]
    fn test_sfx_out_of_range_is_noop() {
        let mut p = player();
        p.play_sfx(3);
        p.play_sfx(usize::MAX);
        assert!(p.sink().played.is_empty());
        p.play_sfx(0);
        assert_eq!(p.sink().played, vec![(Channel::Sfx, "wing".to_string())]);
    }

    #[test]
    fn test_sfx_by_name() {
        let mut p = player();
        p.play_sfx_by_name("point");
        p.play_sfx_by_name("missing");
        assert_eq!(p.sink().played, vec![(Channel::Sfx, "point".to_string())]);
    }

    #[test]
    fn test_music_by_name_moves_track_cursor() {
        // Next/previous continue from a track picked by name
        let mut p = player();
        p.play_music_by_name("boss");
        assert_eq!(p.current_track_index(), 2);
        p.play_music_by_name("unknown");
        assert_eq!(p.current_track_index(), 2);
        p.play_next_track();
        assert_eq!(p.current_track_index(), 0);
    }

    #[test]
    fn test_volume_clamped_and_pushed_to_sink() {
        let mut p = player();
        p.set_music_volume(1.5);
        p.set_sfx_volume(-0.2);
        assert_eq!(p.music_volume(), 1.0);
        assert_eq!(p.sfx_volume(), 0.0);
        assert_eq!(p.sink().volumes.last(), Some(&(Channel::Sfx, 0.0)));
    }

    #[test]
    fn test_nan_volume_ignored() {
        let mut p = player();
        p.set_music_volume(f32::NAN);
        assert!((p.music_volume() - DEFAULT_MUSIC_VOLUME).abs() < f32::EPSILON);
    }

    #[test]
    fn test_stop_music_reaches_sink() {
        let mut p = player();
        p.stop_music();
        assert_eq!(p.sink().stops, 1);
    }
}
