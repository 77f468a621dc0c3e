//! Live obstacles and the spawner that feeds them.

use crate::core::clock::RepeatingTimer;
use rand::Rng;
use std::collections::BTreeMap;

/// Identifier handed out by the spawner, unique per scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObstacleId(pub u64);

/// A pipe pair with a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: ObstacleId,
    /// Row of the gap center.
    pub gap_center: u16,
    /// Simulation seconds since spawn.
    pub age: f32,
}

/// Every obstacle currently alive in the scene.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    alive: BTreeMap<ObstacleId, Obstacle>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, obstacle: Obstacle) {
        self.alive.insert(obstacle.id, obstacle);
    }

    pub fn despawn(&mut self, id: ObstacleId) -> Option<Obstacle> {
        self.alive.remove(&id)
    }

    /// Query the ids alive right now.
    pub fn live_ids(&self) -> Vec<ObstacleId> {
        self.alive.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.alive.values()
    }

    pub fn len(&self) -> usize {
        self.alive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Destroy every live obstacle, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let ids = self.live_ids();
        for id in &ids {
            self.despawn(*id);
        }
        ids.len()
    }

    fn age_all(&mut self, delta: f32) {
        for obstacle in self.alive.values_mut() {
            obstacle.age += delta;
        }
    }
}

/// Spawns pipes on a fixed period while the session is playing.
#[derive(Debug, Clone)]
pub struct PipeSpawner {
    timer: RepeatingTimer,
    lifetime: f32,
    gap_min: u16,
    gap_max: u16,
    next_id: u64,
}

impl PipeSpawner {
    pub fn new(period: f32, lifetime: f32, gap_min: u16, gap_max: u16) -> Self {
        Self {
            timer: RepeatingTimer::every(period),
            lifetime,
            gap_min: gap_min.min(gap_max),
            gap_max: gap_max.max(gap_min),
            next_id: 0,
        }
    }

    /// Advance by a scaled delta. Ages and expires obstacles, and spawns new
    /// ones only while `playing`. Returns how many were spawned.
    pub fn update<R: Rng>(
        &mut self,
        obstacles: &mut ObstacleSet,
        delta: f32,
        playing: bool,
        rng: &mut R,
    ) -> u32 {
        if delta <= 0.0 {
            return 0;
        }

        obstacles.age_all(delta);
        let expired: Vec<ObstacleId> = obstacles
            .iter()
            .filter(|o| o.age >= self.lifetime)
            .map(|o| o.id)
            .collect();
        for id in expired {
            obstacles.despawn(id);
        }

        if !playing {
            return 0;
        }

        let fires = self.timer.advance(delta);
        for _ in 0..fires {
            let gap_center = rng.gen_range(self.gap_min..=self.gap_max);
            let id = ObstacleId(self.next_id);
            self.next_id += 1;
            obstacles.spawn(Obstacle {
                id,
                gap_center,
                age: 0.0,
            });
        }
        fires
    }

    /// Restart the spawn countdown (used on replay).
    pub fn reset(&mut self) {
        self.timer.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pipe(id: u64) -> Obstacle {
        Obstacle {
            id: ObstacleId(id),
            gap_center: 8,
            age: 0.0,
        }
    }

    #[test]
    fn test_clear_empties_set() {
        let mut set = ObstacleSet::new();
        set.spawn(pipe(1));
        set.spawn(pipe(2));
        assert_eq!(set.clear(), 2);
        assert!(set.is_empty());
    }

    #[test]
    fn test_live_ids_reflect_despawn() {
        let mut set = ObstacleSet::new();
        set.spawn(pipe(1));
        set.spawn(pipe(2));
        set.despawn(ObstacleId(1));
        assert_eq!(set.live_ids(), vec![ObstacleId(2)]);
    }

    #[test]
    fn test_spawner_spawns_on_period_while_playing() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut spawner = PipeSpawner::new(1.0, 10.0, 4, 13);
        let mut set = ObstacleSet::new();

        assert_eq!(spawner.update(&mut set, 0.5, true, &mut rng), 0);
        assert_eq!(spawner.update(&mut set, 0.5, true, &mut rng), 1);
        assert_eq!(set.len(), 1);

        let gap = set.iter().next().unwrap().gap_center;
        assert!((4..=13).contains(&gap));
    }

    #[test]
    fn test_spawner_idle_when_not_playing() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut spawner = PipeSpawner::new(1.0, 10.0, 4, 13);
        let mut set = ObstacleSet::new();
        assert_eq!(spawner.update(&mut set, 5.0, false, &mut rng), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_frozen_delta_keeps_obstacles() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut spawner = PipeSpawner::new(1.0, 2.0, 4, 13);
        let mut set = ObstacleSet::new();
        set.spawn(pipe(99));
        spawner.update(&mut set, 0.0, true, &mut rng);
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().age, 0.0);
    }

    #[test]
    fn test_obstacles_expire_after_lifetime() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut spawner = PipeSpawner::new(100.0, 2.0, 4, 13);
        let mut set = ObstacleSet::new();
        set.spawn(pipe(99));
        spawner.update(&mut set, 1.0, false, &mut rng);
        assert_eq!(set.len(), 1);
        spawner.update(&mut set, 1.0, false, &mut rng);
        assert!(set.is_empty());
    }
}
