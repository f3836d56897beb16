/// The single shared panic sound.
///
/// The crowd polls `is_playing` once per frame and never overlaps playback:
/// `play` is only called while `is_playing` is false. A sound that failed to
/// load should report not playing and a zero duration.
pub trait PanicSound {
    fn is_playing(&self) -> bool;
    fn play(&mut self);
    fn duration_secs(&self) -> f32;
}
