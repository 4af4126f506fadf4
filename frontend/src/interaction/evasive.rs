//! The evasive call-to-action: a button that runs from the pointer until it
//! has been nearly caught a few times, then gives in and comes to the
//! pointer so the chase always ends in a capture.

use log::debug;

use super::geometry::{clamp, Point, Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvasiveConfig {
    pub repel_radius: f64,
    /// Push applied when the pointer sits on the repel radius edge.
    pub min_push: f64,
    /// Push applied when the pointer sits on the target centre.
    pub max_push: f64,
    /// Per-event factor while easing back to centre.
    pub return_decay: f64,
    pub settle_epsilon: f64,
    /// Fraction of the remaining distance covered per event while attracted.
    pub attract_follow: f64,
    pub attract_snap_radius: f64,
    pub escape_threshold: u8,
    pub escape_cap: u8,
    pub near_miss_debounce_ms: f64,
    pub revert_delay_ms: f64,
    pub celebration_ms: f64,
    /// Gap kept between the target and the arena edges.
    pub margin: f64,
}

impl Default for EvasiveConfig {
    fn default() -> Self {
        Self {
            repel_radius: 120.0,
            min_push: 24.0,
            max_push: 90.0,
            return_decay: 0.85,
            settle_epsilon: 0.5,
            attract_follow: 0.35,
            attract_snap_radius: 50.0,
            escape_threshold: 3,
            escape_cap: 4,
            near_miss_debounce_ms: 180.0,
            revert_delay_ms: 3000.0,
            celebration_ms: 1200.0,
            margin: 12.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Repel,
    Attract,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Repel { escapes: u8 },
    Attract { escapes: u8 },
    /// Reverts to `Repel` once `revert_at` passes.
    Captured { revert_at: f64 },
}

/// Snapshot handed to the view layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameView {
    pub mode: Mode,
    pub position: Point,
    pub escape_count: u8,
    pub captured: bool,
    pub celebrating: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            mode: Mode::Repel,
            position: Point::ZERO,
            escape_count: 0,
            captured: false,
            celebrating: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EvasiveTarget {
    config: EvasiveConfig,
    phase: Phase,
    /// Target centre as an offset from the arena centre.
    position: Point,
    last_near_miss: Option<f64>,
    celebrate_until: Option<f64>,
}

impl EvasiveTarget {
    pub fn new(config: EvasiveConfig) -> Self {
        Self {
            config,
            phase: Phase::Repel { escapes: 0 },
            position: Point::ZERO,
            last_near_miss: None,
            celebrate_until: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        match self.phase {
            Phase::Attract { .. } => Mode::Attract,
            Phase::Repel { .. } | Phase::Captured { .. } => Mode::Repel,
        }
    }

    pub fn escape_count(&self) -> u8 {
        match self.phase {
            Phase::Repel { escapes } | Phase::Attract { escapes } => escapes,
            Phase::Captured { .. } => 0,
        }
    }

    pub fn is_captured(&self) -> bool {
        matches!(self.phase, Phase::Captured { .. })
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrate_until.is_some()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn view(&self) -> GameView {
        GameView {
            mode: self.mode(),
            position: self.position,
            escape_count: self.escape_count(),
            captured: self.is_captured(),
            celebrating: self.is_celebrating(),
        }
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<f64> {
        let revert = match self.phase {
            Phase::Captured { revert_at } => Some(revert_at),
            _ => None,
        };
        match (revert, self.celebrate_until) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Largest offset the target centre may take on each axis.
    pub fn bounds(&self, arena: Size, target: Size) -> Point {
        Point::new(
            ((arena.width - target.width) / 2.0 - self.config.margin).max(0.0),
            ((arena.height - target.height) / 2.0 - self.config.margin).max(0.0),
        )
    }

    fn clamp_to(&self, point: Point, arena: Size, target: Size) -> Point {
        let limit = self.bounds(arena, target);
        Point::new(clamp(point.x, -limit.x, limit.x), clamp(point.y, -limit.y, limit.y))
    }

    /// Displacement applied to a target at `target` by a pointer at `pointer`,
    /// both relative to the arena centre. Zero outside the repel radius.
    pub fn push_displacement(&self, pointer: Point, target: Point) -> Point {
        let away = target.sub(pointer);
        let distance = away.length();
        if distance >= self.config.repel_radius {
            return Point::ZERO;
        }
        let closeness = 1.0 - distance / self.config.repel_radius;
        let magnitude = self.config.min_push + (self.config.max_push - self.config.min_push) * closeness;
        let direction = if distance > f64::EPSILON {
            away.scale(1.0 / distance)
        } else {
            Point::new(1.0, 0.0)
        };
        direction.scale(magnitude)
    }

    /// Returns whether anything changed. Unmeasured arena or target and
    /// moves during a capture leave the state untouched.
    pub fn on_arena_pointer_move(
        &mut self,
        arena: Option<Rect>,
        target: Option<Size>,
        client_x: f64,
        client_y: f64,
        now: f64,
    ) -> bool {
        let (Some(arena), Some(target)) = (arena, target) else {
            return false;
        };
        let pointer = arena.from_center(client_x, client_y);
        let before = (self.phase, self.position);

        match self.phase {
            Phase::Captured { .. } => return false,
            Phase::Repel { escapes } => {
                let push = self.push_displacement(pointer, self.position);
                if push == Point::ZERO {
                    self.position = self.position.scale(self.config.return_decay);
                    if self.position.length() < self.config.settle_epsilon {
                        self.position = Point::ZERO;
                    }
                } else {
                    self.position = self.clamp_to(self.position.add(push), arena.size(), target);
                    self.register_near_miss(escapes, now);
                }
            }
            Phase::Attract { .. } => {
                let gap = pointer.sub(self.position);
                let next = if gap.length() <= self.config.attract_snap_radius {
                    pointer
                } else {
                    self.position.add(gap.scale(self.config.attract_follow))
                };
                self.position = self.clamp_to(next, arena.size(), target);
            }
        }

        before != (self.phase, self.position)
    }

    fn register_near_miss(&mut self, escapes: u8, now: f64) {
        if let Some(last) = self.last_near_miss {
            if now - last < self.config.near_miss_debounce_ms {
                return;
            }
        }
        self.last_near_miss = Some(now);
        let escapes = escapes.saturating_add(1).min(self.config.escape_cap);
        self.phase = if escapes >= self.config.escape_threshold {
            debug!("evasive target gives in after {} escapes", escapes);
            Phase::Attract { escapes }
        } else {
            Phase::Repel { escapes }
        };
    }

    /// Activation always captures, whatever the mode. A pending revert is
    /// replaced, never doubled.
    pub fn on_activate(&mut self, now: f64) {
        debug!("evasive target captured");
        self.phase = Phase::Captured { revert_at: now + self.config.revert_delay_ms };
        self.position = Point::ZERO;
        self.last_near_miss = None;
        self.celebrate_until = Some(now + self.config.celebration_ms);
    }

    pub fn on_arena_pointer_enter(&mut self) {
        if !self.is_captured() {
            self.reset_chase();
        }
    }

    pub fn on_arena_pointer_leave(&mut self) {
        if !self.is_captured() {
            self.reset_chase();
        }
        self.position = Point::ZERO;
    }

    fn reset_chase(&mut self) {
        self.phase = Phase::Repel { escapes: 0 };
        self.last_near_miss = None;
    }

    /// Applies every deadline that has passed. Returns whether anything changed.
    pub fn poll(&mut self, now: f64) -> bool {
        let mut changed = false;
        if let Some(until) = self.celebrate_until {
            if now >= until {
                self.celebrate_until = None;
                changed = true;
            }
        }
        if let Phase::Captured { revert_at } = self.phase {
            if now >= revert_at {
                self.phase = Phase::Repel { escapes: 0 };
                changed = true;
            }
        }
        changed
    }

    /// Drops pending deadlines, as on teardown.
    pub fn cancel(&mut self) {
        self.celebrate_until = None;
        if self.is_captured() {
            self.phase = Phase::Repel { escapes: 0 };
        }
    }
}

impl Default for EvasiveTarget {
    fn default() -> Self {
        Self::new(EvasiveConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Option<Rect> {
        Rect::measured(0.0, 0.0, 300.0, 200.0)
    }

    fn button() -> Option<Size> {
        Size::measured(200.0, 50.0)
    }

    fn assert_inside(game: &EvasiveTarget, arena: Size, target: Size) {
        let limit = game.bounds(arena, target);
        let position = game.position();
        assert!(position.x.abs() <= limit.x + 1e-9, "x {} beyond {}", position.x, limit.x);
        assert!(position.y.abs() <= limit.y + 1e-9, "y {} beyond {}", position.y, limit.y);
        let margin = game.config.margin;
        if arena.width - target.width >= 2.0 * margin {
            assert!(position.x + target.width / 2.0 <= arena.width / 2.0 - margin + 1e-9);
        }
        if arena.height - target.height >= 2.0 * margin {
            assert!(position.y + target.height / 2.0 <= arena.height / 2.0 - margin + 1e-9);
        }
    }

    #[test]
    fn test_starts_repelling_at_center() {
        let game = EvasiveTarget::default();
        assert_eq!(game.view(), GameView::default());
        assert_eq!(game.next_deadline(), None);
    }

    #[test]
    fn test_pointer_at_center_pushes_with_max_force() {
        let mut game = EvasiveTarget::default();
        let push = game.push_displacement(Point::ZERO, Point::ZERO);
        assert!((push.length() - game.config.max_push).abs() < 1e-9);

        assert!(game.on_arena_pointer_move(arena(), button(), 150.0, 100.0, 0.0));
        let moved = game.position();
        assert!(moved.length() > 0.0);
        assert_inside(&game, arena().unwrap().size(), button().unwrap());
        assert_eq!(moved, Point::new(38.0, 0.0));
        assert_eq!(game.escape_count(), 1);
    }

    #[test]
    fn test_push_weakens_with_distance() {
        let game = EvasiveTarget::default();
        let near = game.push_displacement(Point::new(-10.0, 0.0), Point::ZERO).length();
        let far = game.push_displacement(Point::new(-110.0, 0.0), Point::ZERO).length();
        let outside = game.push_displacement(Point::new(-130.0, 0.0), Point::ZERO);
        assert!(near > far);
        assert!(far >= game.config.min_push);
        assert_eq!(outside, Point::ZERO);
        // Pointer on the left pushes the target right.
        assert!(game.push_displacement(Point::new(-10.0, 0.0), Point::ZERO).x > 0.0);
    }

    #[test]
    fn test_target_eases_back_and_settles() {
        let mut game = EvasiveTarget::default();
        game.on_arena_pointer_move(arena(), button(), 150.0, 100.0, 0.0);
        assert_ne!(game.position(), Point::ZERO);
        let mut previous = game.position().length();
        for step in 0..200 {
            // Far corner, outside the repel radius of a centred-ish target.
            game.on_arena_pointer_move(arena(), button(), 0.0, 200.0, 1000.0 + step as f64);
            let now = game.position().length();
            assert!(now <= previous);
            previous = now;
        }
        assert_eq!(game.position(), Point::ZERO);
    }

    #[test]
    fn test_three_spaced_near_misses_switch_to_attract() {
        let mut game = EvasiveTarget::default();
        game.on_arena_pointer_enter();
        for at in [0.0, 180.0, 360.0] {
            assert_eq!(game.mode(), Mode::Repel);
            let target = game.position();
            game.on_arena_pointer_move(arena(), button(), 150.0 + target.x, 100.0 + target.y, at);
        }
        assert_eq!(game.mode(), Mode::Attract);
        assert_eq!(game.escape_count(), 3);
    }

    #[test]
    fn test_rapid_near_misses_count_once_per_window() {
        let mut game = EvasiveTarget::default();
        for tick in 0..18 {
            let target = game.position();
            game.on_arena_pointer_move(arena(), button(), 150.0 + target.x, 100.0 + target.y, tick as f64 * 10.0);
        }
        assert_eq!(game.escape_count(), 1);
        assert_eq!(game.mode(), Mode::Repel);

        let target = game.position();
        game.on_arena_pointer_move(arena(), button(), 150.0 + target.x, 100.0 + target.y, 180.0);
        assert_eq!(game.escape_count(), 2);
    }

    #[test]
    fn test_attract_follows_and_snaps_to_pointer() {
        let mut game = EvasiveTarget::default();
        game.phase = Phase::Attract { escapes: 3 };
        // 40 px right of centre, inside the snap radius.
        game.on_arena_pointer_move(arena(), button(), 170.0, 100.0, 0.0);
        assert_eq!(game.position(), Point::new(20.0, 0.0));

        // Far away: eases toward the pointer and stays inside the arena.
        game.on_arena_pointer_move(arena(), button(), 295.0, 195.0, 10.0);
        let limit = game.bounds(arena().unwrap().size(), button().unwrap());
        assert!(game.position().x <= limit.x);
        assert!(game.position().y <= limit.y);
        assert_eq!(game.mode(), Mode::Attract);
    }

    #[test]
    fn test_position_stays_inside_for_any_arena() {
        let sizes = [(300.0, 200.0), (120.0, 80.0), (640.0, 260.0), (180.0, 48.0), (90.0, 40.0)];
        let targets = [(200.0, 50.0), (60.0, 30.0), (140.0, 44.0), (240.0, 60.0)];
        for (aw, ah) in sizes {
            for (tw, th) in targets {
                let arena = Rect::measured(20.0, 40.0, aw, ah);
                let target = Size::measured(tw, th);
                let mut game = EvasiveTarget::default();
                let mut now = 0.0;
                for i in 0..120 {
                    let client_x = 20.0 + (i as f64 * 37.0) % (aw + 60.0) - 30.0;
                    let client_y = 40.0 + (i as f64 * 23.0) % (ah + 60.0) - 30.0;
                    game.on_arena_pointer_move(arena, target, client_x, client_y, now);
                    assert_inside(&game, arena.unwrap().size(), target.unwrap());
                    now += 50.0;
                }
                game.phase = Phase::Attract { escapes: 3 };
                for i in 0..120 {
                    let client_x = 20.0 + (i as f64 * 53.0) % (aw + 60.0) - 30.0;
                    let client_y = 40.0 + (i as f64 * 31.0) % (ah + 60.0) - 30.0;
                    game.on_arena_pointer_move(arena, target, client_x, client_y, now);
                    assert_inside(&game, arena.unwrap().size(), target.unwrap());
                    now += 50.0;
                }
            }
        }
    }

    #[test]
    fn test_activation_captures_from_any_mode() {
        for phase in [Phase::Repel { escapes: 0 }, Phase::Repel { escapes: 2 }, Phase::Attract { escapes: 4 }] {
            let mut game = EvasiveTarget::default();
            game.phase = phase;
            game.position = Point::new(12.0, -7.0);
            game.on_activate(500.0);
            assert!(game.is_captured());
            assert_eq!(game.mode(), Mode::Repel);
            assert_eq!(game.escape_count(), 0);
            assert_eq!(game.position(), Point::ZERO);
            assert!(game.is_celebrating());
        }
    }

    #[test]
    fn test_capture_reverts_after_exact_delay() {
        let mut game = EvasiveTarget::default();
        game.on_activate(1000.0);
        assert_eq!(game.next_deadline(), Some(2200.0));

        assert!(game.poll(2200.0));
        assert!(!game.is_celebrating());
        assert!(game.is_captured());
        assert_eq!(game.next_deadline(), Some(4000.0));

        assert!(!game.poll(3999.0));
        assert!(game.is_captured());
        assert!(game.poll(4000.0));
        assert_eq!(game.phase(), Phase::Repel { escapes: 0 });
        assert_eq!(game.next_deadline(), None);
    }

    #[test]
    fn test_recapture_supersedes_pending_revert() {
        let mut game = EvasiveTarget::default();
        game.on_activate(0.0);
        game.on_activate(2500.0);
        assert_eq!(game.phase(), Phase::Captured { revert_at: 5500.0 });

        // The first capture's revert time passes without reverting.
        assert!(!game.poll(3000.0));
        assert!(game.is_captured());
        assert!(game.poll(3700.0));
        assert!(game.is_captured());
        assert!(game.poll(5500.0));
        assert!(!game.is_captured());
        // Nothing left to fire.
        assert!(!game.poll(100_000.0));
    }

    #[test]
    fn test_moves_during_capture_are_ignored() {
        let mut game = EvasiveTarget::default();
        game.on_activate(0.0);
        assert!(!game.on_arena_pointer_move(arena(), button(), 150.0, 100.0, 10.0));
        assert_eq!(game.position(), Point::ZERO);
    }

    #[test]
    fn test_leave_resets_from_any_state() {
        let mut game = EvasiveTarget::default();
        game.phase = Phase::Attract { escapes: 3 };
        game.position = Point::new(30.0, 20.0);
        game.last_near_miss = Some(10.0);
        game.on_arena_pointer_leave();
        assert_eq!(game.view().mode, Mode::Repel);
        assert_eq!(game.escape_count(), 0);
        assert_eq!(game.position(), Point::ZERO);

        let mut game = EvasiveTarget::default();
        game.on_arena_pointer_move(arena(), button(), 150.0, 100.0, 0.0);
        game.on_arena_pointer_leave();
        assert_eq!(game.view(), GameView::default());
    }

    #[test]
    fn test_enter_restarts_the_chase() {
        let mut game = EvasiveTarget::default();
        game.phase = Phase::Attract { escapes: 3 };
        game.on_arena_pointer_enter();
        assert_eq!(game.phase(), Phase::Repel { escapes: 0 });
    }

    #[test]
    fn test_unmeasured_arena_is_a_no_op() {
        let mut game = EvasiveTarget::default();
        assert!(!game.on_arena_pointer_move(None, button(), 150.0, 100.0, 0.0));
        assert!(!game.on_arena_pointer_move(arena(), None, 150.0, 100.0, 0.0));
        assert!(!game.on_arena_pointer_move(Rect::measured(0.0, 0.0, 0.0, 200.0), button(), 0.0, 0.0, 0.0));
        assert_eq!(game.view(), GameView::default());
    }

    #[test]
    fn test_cancel_drops_pending_deadlines() {
        let mut game = EvasiveTarget::default();
        game.on_activate(0.0);
        game.cancel();
        assert_eq!(game.next_deadline(), None);
        assert!(!game.poll(10_000.0));
    }
}
