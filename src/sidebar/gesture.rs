//! Horizontal swipe tracking.
//!
//! A gesture is the horizontal start and end position of one touch. Both
//! capture sites (the document-level edge listener and the panel itself)
//! feed the same track, so a single evaluation happens per physical gesture.

/// The direction a completed gesture moved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

/// Start and end abscissae of the gesture in progress.
///
/// Cleared after every evaluation. A gesture with a missing endpoint is
/// never evaluated; it is simply dropped when the finger lifts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchTrack {
    start_x: Option<f32>,
    end_x: Option<f32>,
}

impl TouchTrack {
    /// Starts a new gesture at `x`, discarding any previous endpoint.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    /// Records the latest position of the gesture in progress.
    pub fn track(&mut self, x: f32) {
        self.end_x = Some(x);
    }

    /// Whether a gesture has been started and not yet finished.
    pub fn in_progress(&self) -> bool {
        self.start_x.is_some()
    }

    /// Evaluates the gesture and clears the track.
    ///
    /// Motion must exceed `threshold` to count as a swipe. Returns `None`
    /// when either endpoint is missing or the net motion is within the
    /// threshold.
    pub fn finish(&mut self, threshold: f32) -> Option<Swipe> {
        let swipe = match (self.start_x, self.end_x) {
            (Some(start), Some(end)) => {
                let distance = start - end;

                if distance > threshold {
                    Some(Swipe::Left)
                } else if distance < -threshold {
                    Some(Swipe::Right)
                } else {
                    None
                }
            }
            _ => None,
        };

        *self = Self::default();

        swipe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rightward_motion_is_a_right_swipe() {
        let mut track = TouchTrack::default();
        track.begin(10.0);
        track.track(120.0);

        assert_eq!(track.finish(0.0), Some(Swipe::Right));
    }

    #[test]
    fn leftward_motion_is_a_left_swipe() {
        let mut track = TouchTrack::default();
        track.begin(300.0);
        track.track(40.0);

        assert_eq!(track.finish(0.0), Some(Swipe::Left));
    }

    #[test]
    fn no_motion_is_not_a_swipe() {
        let mut track = TouchTrack::default();
        track.begin(50.0);
        track.track(50.0);

        assert_eq!(track.finish(0.0), None);
    }

    #[test]
    fn missing_endpoint_is_never_evaluated() {
        let mut track = TouchTrack::default();
        track.begin(50.0);

        assert_eq!(track.finish(0.0), None);
        assert_eq!(track, TouchTrack::default());

        let mut untouched = TouchTrack::default();
        assert_eq!(untouched.finish(0.0), None);
    }

    #[test]
    fn finish_always_clears_the_track() {
        let mut track = TouchTrack::default();
        track.begin(10.0);
        track.track(90.0);
        let _ = track.finish(0.0);

        assert_eq!(track, TouchTrack::default());
        assert!(!track.in_progress());
    }

    #[test]
    fn begin_discards_the_previous_endpoint() {
        let mut track = TouchTrack::default();
        track.begin(10.0);
        track.track(90.0);

        track.begin(200.0);
        assert_eq!(track.finish(0.0), None);
    }

    #[test]
    fn threshold_filters_small_motion() {
        let mut track = TouchTrack::default();
        track.begin(10.0);
        track.track(25.0);

        assert_eq!(track.finish(30.0), None);

        track.begin(10.0);
        track.track(80.0);
        assert_eq!(track.finish(30.0), Some(Swipe::Right));
    }
}
