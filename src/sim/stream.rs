//! Ordered, self-pruning stream of pipes
//!
//! Pipes are kept in creation order, which is also decreasing `x`. The newest
//! pipe decides when the next one spawns; pipes leave from the front once they
//! are fully off the left edge.

use rand::Rng;

use super::state::{Bee, Pipe};
use crate::consts::*;

#[derive(Debug, Clone, Default)]
pub struct PipeStream {
    pipes: Vec<Pipe>,
}

impl PipeStream {
    /// A stream holding the first pipe of a session, placed past the right edge
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            pipes: vec![Pipe::new(SCREEN_WIDTH + FIRST_PIPE_OFFSET, rng)],
        }
    }

    /// Append a pipe at the right edge when the newest one has moved far
    /// enough in. An empty stream gets a first pipe at the offset position.
    pub fn maybe_spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let spawn_x = match self.pipes.last() {
            None => SCREEN_WIDTH + FIRST_PIPE_OFFSET,
            Some(last) if last.x < SCREEN_WIDTH - SPAWN_DISTANCE => SCREEN_WIDTH,
            Some(_) => return false,
        };
        self.pipes.push(Pipe::new(spawn_x, rng));
        true
    }

    /// Advance every pipe oldest-first, then drop the ones that left the
    /// screen. Returns how many pipes the bee passed during this tick.
    pub fn tick_all(&mut self, bee_x: f32) -> u32 {
        let mut passed = 0;
        for pipe in &mut self.pipes {
            pipe.tick();
            if pipe.check_passed(bee_x) {
                passed += 1;
            }
        }
        let before = self.pipes.len();
        self.pipes.retain(|p| !p.is_offscreen());
        if self.pipes.len() != before {
            log::trace!("Pruned {} pipe(s)", before - self.pipes.len());
        }
        passed
    }

    /// Check the bee against every pipe
    pub fn collides(&self, bee: &Bee) -> bool {
        self.pipes
            .iter()
            .any(|p| super::collision::bee_pipe_collision(bee, p))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pipe> {
        self.pipes.iter()
    }

    pub fn last(&self) -> Option<&Pipe> {
        self.pipes.last()
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn clear(&mut self) {
        self.pipes.clear();
    }

    /// Insert a pipe at the back of the stream (tests and scripted setups)
    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push(pipe);
    }
}

impl<'a> IntoIterator for &'a PipeStream {
    type Item = &'a Pipe;
    type IntoIter = std::slice::Iter<'a, Pipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.pipes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_first_pipe_offset() {
        let mut rng = Pcg32::seed_from_u64(1);
        let stream = PipeStream::new(&mut rng);
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.last().map(|p| p.x), Some(SCREEN_WIDTH + FIRST_PIPE_OFFSET));
    }

    #[test]
    fn test_spawn_threshold() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut stream = PipeStream::default();
        stream.push(Pipe::with_gap(SCREEN_WIDTH - SPAWN_DISTANCE, 200.0));

        // Exactly at the threshold: not yet
        assert!(!stream.maybe_spawn(&mut rng));
        assert_eq!(stream.len(), 1);

        stream.tick_all(BEE_X);
        assert!(stream.maybe_spawn(&mut rng));
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.last().map(|p| p.x), Some(SCREEN_WIDTH));

        // Newest pipe is now at the right edge, nothing more spawns
        assert!(!stream.maybe_spawn(&mut rng));
    }

    #[test]
    fn test_empty_stream_respawns_with_offset() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut stream = PipeStream::default();
        assert!(stream.maybe_spawn(&mut rng));
        assert_eq!(stream.last().map(|p| p.x), Some(SCREEN_WIDTH + FIRST_PIPE_OFFSET));
    }

    #[test]
    fn test_prune_keeps_order() {
        let mut stream = PipeStream::default();
        stream.push(Pipe::with_gap(-PIPE_WIDTH + 1.0, 100.0));
        stream.push(Pipe::with_gap(100.0, 150.0));
        stream.push(Pipe::with_gap(300.0, 200.0));

        let passed = stream.tick_all(BEE_X);
        assert_eq!(passed, 1);
        let xs: Vec<f32> = stream.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![97.0, 297.0]);
    }

    #[test]
    fn test_at_most_one_pipe_inside_spawn_zone() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut stream = PipeStream::new(&mut rng);
        for _ in 0..2000 {
            stream.maybe_spawn(&mut rng);
            stream.tick_all(BEE_X);
            let in_zone = stream
                .iter()
                .filter(|p| p.x >= SCREEN_WIDTH - SPAWN_DISTANCE)
                .count();
            assert!(in_zone <= 1);
            let xs: Vec<f32> = stream.iter().map(|p| p.x).collect();
            assert!(xs.windows(2).all(|w| w[0] > w[1]));
        }
    }
}
